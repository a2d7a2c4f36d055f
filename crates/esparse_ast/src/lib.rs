//! esparse_ast: Token kinds, AST node shapes and the flag types shared by
//! the scanner, the parser and its tree builders.

pub mod node;
pub mod syntax_kind;
pub mod types;

// Re-export key types
pub use node::*;
pub use syntax_kind::SyntaxKind;
pub use types::*;
