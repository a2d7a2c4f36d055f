//! esparse_parser: Recursive descent parser for ECMAScript.
//!
//! Parses the scanner's token stream into an arena-allocated AST, or only
//! validates it. The grammar is generic over a [`TreeBuilder`]:
//! [`AstBuilder`] builds nodes, [`SyntaxChecker`] builds nothing and is
//! used for function bodies, which are re-parsed on demand from their
//! [`FunctionMetadata`](esparse_ast::FunctionMetadata).
//!
//! Parsing also tracks lexical scopes, so redeclarations, strict-mode
//! violations, label misuse and misplaced `super`/`new.target` are
//! reported as early errors. A [`FunctionCache`] shared between parses of
//! the same source lets later parses skip function bodies already
//! validated.

mod builder;
mod cache;
mod class;
mod expression;
mod function;
mod module;
mod options;
mod parser;
mod pattern;
mod precedence;
mod scope;
mod state;
mod statement;

pub use builder::{AstBuilder, CheckedExpression, CheckedPattern, Discard, ListBuilder, SyntaxChecker, TreeBuilder};
pub use cache::{CachedFunctionInfo, FunctionCache, MIN_ARROW_EXPRESSION_BODY_LENGTH, MIN_BLOCK_BODY_LENGTH};
pub use function::GENERATOR_BODY_PARAMETER_COUNT;
pub use options::{ParserOptions, SourceType};
pub use parser::Parser;
