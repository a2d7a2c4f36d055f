//! esparse_diagnostics: Parse error type and the message catalogue.
//!
//! A parse stops at its first error. The error carries one message plus the
//! line and column of the token the parser was looking at when it gave up.
//! Messages are templates with `{0}`, `{1}` placeholders, grouped by the
//! part of the grammar that reports them.

use esparse_core::text::{LineColumn, TextSpan};
use std::fmt;

pub mod messages;

/// How a message is rendered when it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    /// Grammar failure; the message is prefixed with a description of the
    /// token that could not be consumed.
    Syntax,
    /// Semantic failure (strict mode, duplicate declaration, label misuse);
    /// the message stands alone.
    Semantic,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Syntax => write!(f, "syntax"),
            DiagnosticCategory::Semantic => write!(f, "semantic"),
        }
    }
}

/// A message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    /// May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

impl DiagnosticMessage {
    /// Render the template with `args` and the trailing period every
    /// reported message ends with.
    pub fn render(&self, args: &[&str]) -> String {
        let mut text = format_message(self.message, args);
        text.push('.');
        text
    }
}

/// Replace `{0}`, `{1}`, etc. in `template` with `args`.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// Which family of failure stopped the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A malformed token: unterminated literal or comment, bad escape,
    /// stray character, or an unexpected end of input.
    Lexical,
    /// A token the grammar does not allow at this point.
    Syntax,
    /// A well-formed construct that is not allowed here.
    Semantic,
    /// Nesting exceeded the configured depth.
    StackOverflow,
}

/// The single error a failed parse reports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub code: u32,
    pub message: String,
    /// 1-based line of the token where the parse stopped.
    pub line: u32,
    /// 1-based column of that token.
    pub column: u32,
    /// Character span of that token.
    pub span: TextSpan,
}

impl ParseError {
    pub fn new(
        kind: ParseErrorKind,
        message: &DiagnosticMessage,
        text: String,
        position: LineColumn,
        span: TextSpan,
    ) -> Self {
        Self {
            kind,
            code: message.code,
            message: text,
            line: position.line,
            column: position.column,
            span,
        }
    }

    /// The dedicated error for exceeding the nesting limit.
    pub fn stack_overflow(position: LineColumn, span: TextSpan) -> Self {
        let message = &messages::STACK_EXHAUSTED;
        Self::new(
            ParseErrorKind::StackOverflow,
            message,
            message.message.to_string(),
            position,
            span,
        )
    }

    /// Fatal errors must never be swallowed by a speculative parse.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.kind == ParseErrorKind::StackOverflow
    }

    pub fn position(&self) -> LineColumn {
        LineColumn::new(self.line, self.column)
    }
}

/// Result type threaded through every parse routine.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        let text = format_message("Cannot declare a let variable twice: '{0}'", &["x"]);
        assert_eq!(text, "Cannot declare a let variable twice: 'x'");
    }

    #[test]
    fn test_render_adds_period() {
        let text = messages::UNDECLARED_LABEL.render(&["outer"]);
        assert_eq!(text, "Cannot use the undeclared label 'outer'.");
    }

    #[test]
    fn test_stack_overflow_is_fatal() {
        let err = ParseError::stack_overflow(LineColumn::new(1, 40), TextSpan::new(39, 1));
        assert!(err.is_fatal());
        assert_eq!(err.message, "Stack exhausted");
        assert_eq!(err.to_string(), "Stack exhausted");
        assert_eq!(err.position(), LineColumn::new(1, 40));
    }

    #[test]
    fn test_semantic_error_is_not_fatal() {
        let message = &messages::RETURN_OUTSIDE_FUNCTION;
        let err = ParseError::new(
            ParseErrorKind::Semantic,
            message,
            message.render(&[]),
            LineColumn::new(2, 1),
            TextSpan::new(10, 6),
        );
        assert!(!err.is_fatal());
        assert_eq!(err.code, message.code);
        assert_eq!(message.category, DiagnosticCategory::Semantic);
    }
}
