//! Function body cache.
//!
//! A parse records, for every sufficiently long function, where its body
//! ends and what the body's scope looked like. A later parse of the same
//! source that reaches the same parameter list skips the body: it restores
//! the recorded scope summary and fast-forwards the scanner past the body.

use crate::scope::ScopeSummary;
use esparse_core::collections::FxHashMap;
use esparse_core::intern::StringInterner;
use esparse_core::text::TextPos;
use esparse_scanner::{ScannerState, Token};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Block bodies shorter than this are cheaper to re-parse than to look up.
pub const MIN_BLOCK_BODY_LENGTH: u32 = 16;
pub const MIN_ARROW_EXPRESSION_BODY_LENGTH: u32 = 8;

/// What a skipped function body leaves behind.
#[derive(Debug, Clone)]
pub struct CachedFunctionInfo {
    /// The last token of the body: its `}`, or the last token of an arrow's
    /// expression body.
    pub(crate) end_token: Token,
    /// Scanner cursor right after `end_token`.
    pub(crate) end_state: ScannerState,
    pub(crate) parameter_count: u32,
    /// Strictness of the code around the function when it was parsed.
    pub(crate) outer_strict_mode: bool,
    pub(crate) is_arrow_expression_body: bool,
    pub(crate) summary: ScopeSummary,
}

impl CachedFunctionInfo {
    #[inline]
    pub fn end_offset(&self) -> TextPos {
        self.end_token.location.end
    }

    #[inline]
    pub fn parameter_count(&self) -> u32 {
        self.parameter_count
    }

    /// Whether the body itself is strict.
    #[inline]
    pub fn strict_mode(&self) -> bool {
        self.summary.strict_mode
    }

    #[inline]
    pub fn outer_strict_mode(&self) -> bool {
        self.outer_strict_mode
    }

    #[inline]
    pub fn uses_eval(&self) -> bool {
        self.summary.uses_eval
    }

    #[inline]
    pub fn is_arrow_expression_body(&self) -> bool {
        self.is_arrow_expression_body
    }
}

/// Shared function body cache for one source text.
///
/// Cloning is cheap; clones share the same entries and the same
/// identifier table. A parser built with a cache adopts its interner, so
/// the names recorded in entries stay valid across parses.
#[derive(Clone, Default)]
pub struct FunctionCache {
    entries: Rc<RefCell<FxHashMap<TextPos, Rc<CachedFunctionInfo>>>>,
    hits: Rc<Cell<u64>>,
    interner: StringInterner,
}

impl FunctionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Look up the entry for the function whose parameters start at
    /// `parameters_start`.
    pub fn get(&self, parameters_start: TextPos) -> Option<Rc<CachedFunctionInfo>> {
        self.entries.borrow().get(&parameters_start).cloned()
    }

    pub(crate) fn record_hit(&self) {
        self.hits.set(self.hits.get() + 1);
    }

    /// Function bodies skipped through this cache so far.
    pub fn hit_count(&self) -> u64 {
        self.hits.get()
    }

    pub(crate) fn insert(&self, parameters_start: TextPos, info: CachedFunctionInfo) {
        self.entries.borrow_mut().insert(parameters_start, Rc::new(info));
    }

    /// Drop every entry whose parameters start in `start..end`. Returns the
    /// number of entries removed.
    pub fn invalidate_range(&self, start: TextPos, end: TextPos) -> usize {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|&key, _| key < start || key >= end);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl fmt::Debug for FunctionCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionCache")
            .field("entries", &self.len())
            .field("hits", &self.hit_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esparse_ast::syntax_kind::SyntaxKind;
    use esparse_scanner::TokenLocation;

    fn entry(end: TextPos) -> CachedFunctionInfo {
        CachedFunctionInfo {
            end_token: Token::new(
                SyntaxKind::CloseBraceToken,
                TokenLocation { line: 1, start: end - 1, end, line_start: 0 },
            ),
            end_state: ScannerState { pos: end as usize, line: 1, line_start: 0 },
            parameter_count: 0,
            outer_strict_mode: false,
            is_arrow_expression_body: false,
            summary: ScopeSummary::default(),
        }
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = FunctionCache::new();
        let clone = cache.clone();
        cache.insert(10, entry(40));
        assert_eq!(clone.len(), 1);
        assert_eq!(clone.get(10).map(|info| info.end_offset()), Some(40));
        assert!(clone.get(11).is_none());
    }

    #[test]
    fn test_invalidate_range_is_half_open() {
        let cache = FunctionCache::new();
        cache.insert(5, entry(30));
        cache.insert(10, entry(30));
        cache.insert(20, entry(30));
        assert_eq!(cache.invalidate_range(5, 20), 2);
        assert!(cache.get(20).is_some());
        cache.clear();
        assert!(cache.is_empty());
    }
}
