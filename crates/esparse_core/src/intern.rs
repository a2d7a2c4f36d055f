//! Identifier interning.
//!
//! Every identifier, property name and string literal the parser needs to
//! compare is interned once, so scope lookups and duplicate checks are
//! integer comparisons.

use lasso::{Spur, ThreadedRodeo};
use std::fmt;
use std::sync::Arc;

/// A handle to an interned identifier.
///
/// Two handles from the same interner are equal iff their text is equal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct InternedString(Spur);

impl InternedString {
    #[inline]
    pub fn from_spur(spur: Spur) -> Self {
        Self(spur)
    }

    #[inline]
    pub fn as_spur(self) -> Spur {
        self.0
    }
}

impl fmt::Debug for InternedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:?}", self.0)
    }
}

/// Shared identifier table.
///
/// Cloning is cheap: clones share the same table, which lets a parsed
/// program carry the interner it was built with.
#[derive(Clone)]
pub struct StringInterner {
    rodeo: Arc<ThreadedRodeo>,
}

impl StringInterner {
    pub fn new() -> Self {
        Self {
            rodeo: Arc::new(ThreadedRodeo::new()),
        }
    }

    /// Intern `s`, returning the existing handle if it was seen before.
    #[inline]
    pub fn intern(&self, s: &str) -> InternedString {
        InternedString::from_spur(self.rodeo.get_or_intern(s))
    }

    #[inline]
    pub fn intern_static(&self, s: &'static str) -> InternedString {
        InternedString::from_spur(self.rodeo.get_or_intern_static(s))
    }

    /// Look up `s` without interning it.
    #[inline]
    pub fn get(&self, s: &str) -> Option<InternedString> {
        self.rodeo.get(s).map(InternedString::from_spur)
    }

    #[inline]
    pub fn resolve(&self, key: InternedString) -> &str {
        self.rodeo.resolve(&key.as_spur())
    }

    /// Resolve a batch of handles, handy for assertions and summaries.
    pub fn resolve_all<'s, I>(&'s self, keys: I) -> Vec<&'s str>
    where
        I: IntoIterator<Item = InternedString>,
    {
        keys.into_iter().map(|key| self.resolve(key)).collect()
    }

    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_resolve() {
        let interner = StringInterner::new();
        let a = interner.intern("arguments");
        let b = interner.intern("arguments");
        let c = interner.intern("eval");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(interner.resolve(a), "arguments");
        assert_eq!(interner.resolve(c), "eval");
    }

    #[test]
    fn test_clones_share_table() {
        let interner = StringInterner::new();
        let clone = interner.clone();
        let a = interner.intern("x");
        assert_eq!(clone.get("x"), Some(a));
        assert_eq!(clone.resolve_all([a, a]), vec!["x", "x"]);
    }

    #[test]
    fn test_intern_static() {
        let interner = StringInterner::new();
        let a = interner.intern_static("use strict");
        let b = interner.intern("use strict");
        assert_eq!(a, b);
        assert!(interner.get("missing").is_none());
    }
}
