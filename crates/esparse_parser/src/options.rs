//! Parser configuration.
//!
//! Options can be built in code or loaded from a JSON document whose keys
//! are the camelCase field names:
//!
//! ```json
//! { "strictMode": true, "sourceType": "module", "maxDepth": 500 }
//! ```

use serde::{Deserialize, Serialize};

/// Whether the source is a classic script or an ES module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Script,
    Module,
}

/// Options that control a single parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserOptions {
    /// Parse the top-level code as strict code.
    pub strict_mode: bool,
    pub source_type: SourceType,
    /// Line number of the first line of the source.
    pub first_line: u32,
    /// Nesting limit for statements, expressions and patterns.
    pub max_depth: u32,
    /// The source is known to be free of early errors. Label bookkeeping
    /// and the duplicate `__proto__` check are skipped.
    pub syntax_already_validated: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            strict_mode: false,
            source_type: SourceType::Script,
            first_line: 1,
            max_depth: 1000,
            syntax_already_validated: false,
        }
    }
}

impl ParserOptions {
    pub fn module() -> Self {
        Self { source_type: SourceType::Module, ..Self::default() }
    }

    pub fn strict() -> Self {
        Self { strict_mode: true, ..Self::default() }
    }

    #[inline]
    pub fn is_module(&self) -> bool {
        self.source_type == SourceType::Module
    }

    /// Parse options from a JSON document. Missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Read and parse an options file.
    pub fn from_json_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_json(&content)?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_uses_camel_case() {
        let options = ParserOptions::from_json(
            r#"{ "strictMode": true, "sourceType": "module", "maxDepth": 64 }"#,
        )
        .unwrap();
        assert!(options.strict_mode);
        assert!(options.is_module());
        assert_eq!(options.max_depth, 64);
        assert_eq!(options.first_line, 1);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(ParserOptions::from_json("{}").unwrap(), ParserOptions::default());
    }

    #[test]
    fn test_unknown_source_type_is_rejected() {
        assert!(ParserOptions::from_json(r#"{ "sourceType": "commonjs" }"#).is_err());
    }
}
