//! Flag types and the plain-data records attached to AST nodes.

use esparse_core::intern::InternedString;
use esparse_core::text::TextPos;
use std::fmt;

bitflags::bitflags! {
    /// Flags the scanner attaches to a token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u16 {
        const NONE                    = 0;
        const PRECEDING_LINE_BREAK    = 1 << 0;
        /// An identifier or string literal contained an escape sequence.
        const CONTAINS_ESCAPE         = 1 << 1;
        /// A string literal contained a line continuation.
        const LINE_CONTINUATION       = 1 << 2;
        /// Legacy octal number (`017`) or octal string escape (`"\1"`).
        const OCTAL                   = 1 << 3;
        const HEX_SPECIFIER           = 1 << 4;
        const BINARY_SPECIFIER        = 1 << 5;
        const OCTAL_SPECIFIER         = 1 << 6;
        const SCIENTIFIC              = 1 << 7;
    }
}

bitflags::bitflags! {
    /// Aggregate facts about a program or function body that a compiler
    /// needs before it looks at the tree.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CodeFeatures: u32 {
        const NONE                  = 0;
        const EVAL                  = 1 << 0;
        const ARGUMENTS             = 1 << 1;
        const WITH                  = 1 << 2;
        const THIS                  = 1 << 3;
        const STRICT_MODE           = 1 << 4;
        const SHADOWS_ARGUMENTS     = 1 << 5;
        const MODIFIED_PARAMETER    = 1 << 6;
        const MODIFIED_ARGUMENTS    = 1 << 7;
        const ARROW_FUNCTION        = 1 << 8;
        const SUPER_CALL            = 1 << 9;
        const SUPER_PROPERTY        = 1 << 10;
        const NEW_TARGET            = 1 << 11;
    }
}

bitflags::bitflags! {
    /// What is known about one declared name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VariableFlags: u16 {
        const NONE               = 0;
        const VAR                = 1 << 0;
        const LET                = 1 << 1;
        const CONST              = 1 << 2;
        const PARAMETER          = 1 << 3;
        const FUNCTION           = 1 << 4;
        const CLASS              = 1 << 5;
        const IMPORTED           = 1 << 6;
        const IMPORTED_NAMESPACE = 1 << 7;
        const CAPTURED           = 1 << 8;
        const EXPORTED           = 1 << 9;

        const LEXICAL = Self::LET.bits() | Self::CONST.bits() | Self::CLASS.bits();
    }
}

/// One entry of a finalized scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding {
    pub name: InternedString,
    pub flags: VariableFlags,
}

/// The bindings a scope declared, in declaration order.
pub type LexicalEnvironment<'a> = &'a [Binding];

/// `var`, `let` or `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Var,
    Let,
    Const,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationKind::Var => f.write_str("var"),
            DeclarationKind::Let => f.write_str("let"),
            DeclarationKind::Const => f.write_str("const"),
        }
    }
}

/// The flavor of code being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceParseMode {
    Program,
    Module,
    NormalFunction,
    Method,
    Getter,
    Setter,
    ArrowFunction,
    /// The outer function of a generator; its body is a single
    /// `GeneratorBody` function.
    GeneratorWrapperFunction,
    GeneratorBody,
}

impl SourceParseMode {
    /// How messages refer to a function of this mode.
    pub fn description(self) -> &'static str {
        match self {
            SourceParseMode::Getter => "getter",
            SourceParseMode::Setter => "setter",
            SourceParseMode::NormalFunction => "function",
            SourceParseMode::Method => "method",
            SourceParseMode::GeneratorBody => "generator",
            SourceParseMode::GeneratorWrapperFunction => "generator function",
            SourceParseMode::ArrowFunction => "arrow function",
            SourceParseMode::Program | SourceParseMode::Module => "program",
        }
    }

    #[inline]
    pub fn is_function(self) -> bool {
        !matches!(self, SourceParseMode::Program | SourceParseMode::Module)
    }
}

/// Whether a function is a class constructor, and of which kind of class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConstructorKind {
    #[default]
    None,
    Base,
    Derived,
}

/// Whether `super` may be referenced inside a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SuperBinding {
    #[default]
    NotNeeded,
    Needed,
}

/// Everything needed to locate and re-parse one function later.
///
/// Offsets are character offsets into the whole source; lines are 1-based
/// and columns are 1-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionMetadata {
    pub name: Option<InternedString>,
    pub mode: SourceParseMode,
    /// Start of `function`, of a method name, or of an arrow's parameters.
    pub function_start: TextPos,
    pub name_start: TextPos,
    /// Start of the parameter list; the function cache is keyed on it.
    pub parameters_start: TextPos,
    pub parameters_line: u32,
    pub parameters_line_start: TextPos,
    /// Start of the body: the `{`, or the first token of an arrow's
    /// expression body.
    pub body_start: TextPos,
    /// The `}` of a block body, or the end of an arrow's expression body.
    pub body_end: TextPos,
    pub start_line: u32,
    pub end_line: u32,
    pub start_column: u32,
    pub end_column: u32,
    pub parameter_count: u32,
    pub strict_mode: bool,
    pub constructor_kind: ConstructorKind,
    pub super_binding: SuperBinding,
    pub is_arrow_expression_body: bool,
}

impl FunctionMetadata {
    /// Length of the source the function body cache threshold applies to.
    #[inline]
    pub fn source_length(&self) -> u32 {
        self.body_end.saturating_sub(self.parameters_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_flags() {
        assert!(VariableFlags::LEXICAL.contains(VariableFlags::CLASS));
        assert!(!VariableFlags::LEXICAL.intersects(VariableFlags::VAR | VariableFlags::PARAMETER));
    }

    #[test]
    fn test_mode_description() {
        assert_eq!(SourceParseMode::GeneratorWrapperFunction.description(), "generator function");
        assert_eq!(SourceParseMode::ArrowFunction.description(), "arrow function");
        assert!(!SourceParseMode::Module.is_function());
        assert!(SourceParseMode::GeneratorBody.is_function());
    }
}
