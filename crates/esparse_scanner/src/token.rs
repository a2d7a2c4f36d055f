//! Tokens produced by the scanner.

use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::TokenFlags;
use esparse_core::intern::InternedString;
use esparse_core::text::{LineColumn, TextPos, TextSpan};

/// Where a token sits in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenLocation {
    /// 1-based line of the token start.
    pub line: u32,
    pub start: TextPos,
    /// Exclusive end offset.
    pub end: TextPos,
    /// Offset of the first character of `line`.
    pub line_start: TextPos,
}

impl TokenLocation {
    #[inline]
    pub fn span(&self) -> TextSpan {
        TextSpan::from_bounds(self.start, self.end)
    }

    /// 1-based line and column of the token start.
    #[inline]
    pub fn position(&self) -> LineColumn {
        LineColumn::new(self.line, self.start - self.line_start + 1)
    }
}

/// The payload of a token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue {
    None,
    /// Identifiers, keywords and reserved words.
    Identifier(InternedString),
    Number(f64),
    /// `raw_len` counts the quotes.
    String { cooked: InternedString, raw_len: u32 },
    Template {
        cooked: InternedString,
        raw: InternedString,
        is_tail: bool,
    },
    RegExp {
        pattern: InternedString,
        flags: InternedString,
    },
}

/// One scanned token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub location: TokenLocation,
    pub flags: TokenFlags,
    pub value: TokenValue,
}

impl Token {
    pub fn new(kind: SyntaxKind, location: TokenLocation) -> Self {
        Self {
            kind,
            location,
            flags: TokenFlags::NONE,
            value: TokenValue::None,
        }
    }

    /// Whether there was a line break before this token.
    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    #[inline]
    pub fn identifier(&self) -> Option<InternedString> {
        match self.value {
            TokenValue::Identifier(name) => Some(name),
            _ => None,
        }
    }

    #[inline]
    pub fn number(&self) -> Option<f64> {
        match self.value {
            TokenValue::Number(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn string(&self) -> Option<InternedString> {
        match self.value {
            TokenValue::String { cooked, .. } => Some(cooked),
            _ => None,
        }
    }

    #[inline]
    pub fn span(&self) -> TextSpan {
        self.location.span()
    }
}

impl Default for Token {
    fn default() -> Self {
        Token::new(SyntaxKind::EndOfFileToken, TokenLocation::default())
    }
}
