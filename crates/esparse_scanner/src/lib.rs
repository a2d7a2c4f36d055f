//! esparse_scanner: Lexer for ECMAScript source text.
//!
//! Produces one token at a time for the parser:
//! - Identifiers and keywords, with strict-mode reserved words
//! - Numeric literals (decimal, hex, binary, octal, legacy octal)
//! - Cooked string literals
//! - Template pieces, re-scanned on demand after `}`
//! - Regular expression literals, re-scanned on demand after `/`
//! - Malformed input as dedicated error tokens

mod char_codes;
mod scanner;
mod token;

pub use scanner::{Scanner, ScannerState};
pub use token::{Token, TokenLocation, TokenValue};
