//! esparse_core: Core utilities for the esparse JavaScript parser.
//!
//! Provides interned identifiers, source positions and the small
//! collections shared by the scanner, the parser and its tree builders.

pub mod collections;
pub mod intern;
pub mod text;

// Re-export commonly used types
pub use collections::{FxHashMap, FxHashSet, OrderedMap};
pub use intern::{InternedString, StringInterner};
pub use text::{LineColumn, TextPos, TextSpan};
