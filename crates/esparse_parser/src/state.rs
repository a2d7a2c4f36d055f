//! Per-parse counters and the interned names the grammar compares against.

use esparse_core::intern::{InternedString, StringInterner};

/// Whether a function's parameters or its body are being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum FunctionParsePhase {
    Parameters,
    #[default]
    Body,
}

/// Counters and last-seen names that productions inspect to classify what
/// they just parsed. Saved and restored around function bodies and
/// speculative parses.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct ParserState {
    /// Bumped by anything beyond a lone primary expression; a directive
    /// must leave it unchanged.
    pub non_trivial_expression_count: u32,
    /// Name of the function whose parameters or body are being parsed.
    pub last_function_name: Option<InternedString>,
    pub function_parse_phase: FunctionParsePhase,
}

/// Names with a meaning to the grammar, interned once per parse.
#[derive(Debug, Clone, Copy)]
pub(crate) struct KnownNames {
    pub eval: InternedString,
    pub arguments: InternedString,
    pub proto: InternedString,
    pub constructor: InternedString,
    pub prototype: InternedString,
    pub default_export: InternedString,
    pub of: InternedString,
    pub from: InternedString,
    pub as_: InternedString,
    pub get: InternedString,
    pub set: InternedString,
    pub target: InternedString,
    pub static_: InternedString,
    pub default: InternedString,
    pub let_: InternedString,
    pub generator_parameters: [InternedString; 4],
}

impl KnownNames {
    pub fn new(interner: &StringInterner) -> Self {
        Self {
            eval: interner.intern_static("eval"),
            arguments: interner.intern_static("arguments"),
            proto: interner.intern_static("__proto__"),
            constructor: interner.intern_static("constructor"),
            prototype: interner.intern_static("prototype"),
            default_export: interner.intern_static("*default*"),
            of: interner.intern_static("of"),
            from: interner.intern_static("from"),
            as_: interner.intern_static("as"),
            get: interner.intern_static("get"),
            set: interner.intern_static("set"),
            target: interner.intern_static("target"),
            static_: interner.intern_static("static"),
            default: interner.intern_static("default"),
            let_: interner.intern_static("let"),
            generator_parameters: [
                interner.intern_static("@generator"),
                interner.intern_static("@generatorState"),
                interner.intern_static("@generatorValue"),
                interner.intern_static("@generatorResumeMode"),
            ],
        }
    }

    #[inline]
    pub fn is_eval_or_arguments(&self, name: InternedString) -> bool {
        name == self.eval || name == self.arguments
    }
}
