//! Function body cache tests.

use bumpalo::Bump;
use esparse_ast::Statement;
use esparse_diagnostics::messages;
use esparse_parser::{FunctionCache, Parser, ParserOptions};

const SOURCE: &str = r#"
var total = 0;
function add(a, b) {
    var sum = a + b;
    total += sum;
    return sum;
}
function scale(values, factor) {
    return values.map(function (value) { return value * factor + total; });
}
var square = (x) => x * x + total;
"#;

#[test]
fn test_cached_parse_matches_cold_parse() {
    let cache = FunctionCache::new();
    let cold_arena = Bump::new();
    let cold = Parser::with_cache(&cold_arena, SOURCE, ParserOptions::default(), cache.clone())
        .parse_program()
        .unwrap();
    assert_eq!(cache.hit_count(), 0);
    assert!(cache.len() >= 3, "entries: {}", cache.len());

    let warm_arena = Bump::new();
    let warm = Parser::with_cache(&warm_arena, SOURCE, ParserOptions::default(), cache.clone())
        .parse_program()
        .unwrap();
    assert!(cache.hit_count() >= 3);
    assert_eq!(cold, warm);
}

#[test]
fn test_cached_parse_keeps_function_metadata() {
    let cache = FunctionCache::new();
    let arena = Bump::new();
    let first = Parser::with_cache(&arena, SOURCE, ParserOptions::default(), cache.clone()).parse_program().unwrap();
    let second = Parser::with_cache(&arena, SOURCE, ParserOptions::default(), cache.clone()).parse_program().unwrap();

    let metadata = |program: &esparse_ast::Program<'_>| -> Vec<_> {
        program
            .statements
            .iter()
            .filter_map(|statement| match statement {
                Statement::Function(function) => Some(function.metadata),
                _ => None,
            })
            .collect()
    };
    let first = metadata(&first);
    assert_eq!(first.len(), 2);
    assert_eq!(first, metadata(&second));

    let info = cache.get(first[0].parameters_start).expect("cached add");
    assert_eq!(info.parameter_count(), 2);
    assert_eq!(info.end_offset(), first[0].body_end + 1);
    assert!(!info.outer_strict_mode());
}

#[test]
fn test_short_bodies_are_not_cached() {
    let cache = FunctionCache::new();
    let arena = Bump::new();
    Parser::with_cache(&arena, "function f() {} var g = x => x;", ParserOptions::default(), cache.clone())
        .parse_program()
        .unwrap();
    assert!(cache.is_empty());
}

#[test]
fn test_length_cutoff_counts_parameters() {
    let source = "function f(aaaaaaaaaaaaaaaaaaaa, bbbbbbbbbbbbbbbbbbbb){}";
    let cache = FunctionCache::new();
    let arena = Bump::new();
    Parser::with_cache(&arena, source, ParserOptions::default(), cache.clone()).parse_program().unwrap();
    assert_eq!(cache.len(), 1);

    Parser::with_cache(&arena, source, ParserOptions::default(), cache.clone()).parse_program().unwrap();
    assert_eq!(cache.hit_count(), 1);
}

#[test]
fn test_cached_bodies_keep_captured_variables() {
    let cache = FunctionCache::new();
    let arena = Bump::new();
    let cold = Parser::with_cache(&arena, SOURCE, ParserOptions::default(), cache.clone()).parse_program().unwrap();
    let parser = Parser::with_cache(&arena, SOURCE, ParserOptions::default(), cache.clone());
    let interner = parser.interner().clone();
    let warm = parser.parse_program().unwrap();
    assert!(cache.hit_count() >= 3);

    assert_eq!(cold.captured_variables, warm.captured_variables);
    let captured: Vec<&str> = warm.captured_variables.iter().map(|binding| interner.resolve(binding.name)).collect();
    assert_eq!(captured, ["total"]);
}

#[test]
fn test_checker_and_builder_share_entries() {
    let cache = FunctionCache::new();
    let arena = Bump::new();
    Parser::with_cache(&arena, SOURCE, ParserOptions::default(), cache.clone()).check_syntax().unwrap();
    let recorded = cache.len();
    assert!(recorded > 0);

    Parser::with_cache(&arena, SOURCE, ParserOptions::default(), cache.clone()).parse_program().unwrap();
    assert_eq!(cache.len(), recorded);
    assert!(cache.hit_count() > 0);
}

/// A body accepted as sloppy code must not be reused by a strict parse of
/// the same source: the strict parse re-checks it and reports the error.
#[test]
fn test_sloppy_entry_is_not_reused_by_strict_parse() {
    let source = "function f(o) { with (o) { return x + y; } }";
    let cache = FunctionCache::new();
    let arena = Bump::new();
    Parser::with_cache(&arena, source, ParserOptions::default(), cache.clone()).parse_program().unwrap();
    assert_eq!(cache.len(), 1);

    let err = Parser::with_cache(&arena, source, ParserOptions::strict(), cache.clone())
        .parse_program()
        .unwrap_err();
    assert_eq!(err.code, messages::WITH_IN_STRICT_MODE.code);
    assert_eq!(cache.hit_count(), 0);
}

#[test]
fn test_strict_entry_is_reused_by_strict_parse() {
    let source = "function f(a, b) { return a * b + a - b; }";
    let cache = FunctionCache::new();
    let arena = Bump::new();
    Parser::with_cache(&arena, source, ParserOptions::strict(), cache.clone()).parse_program().unwrap();
    Parser::with_cache(&arena, source, ParserOptions::strict(), cache.clone()).parse_program().unwrap();
    assert_eq!(cache.hit_count(), 1);
}

#[test]
fn test_invalidated_range_is_parsed_again() {
    let cache = FunctionCache::new();
    let arena = Bump::new();
    Parser::with_cache(&arena, SOURCE, ParserOptions::default(), cache.clone()).parse_program().unwrap();
    let recorded = cache.len();
    let removed = cache.invalidate_range(0, SOURCE.chars().count() as u32);
    assert_eq!(removed, recorded);

    Parser::with_cache(&arena, SOURCE, ParserOptions::default(), cache.clone()).parse_program().unwrap();
    assert_eq!(cache.hit_count(), 0);
    assert_eq!(cache.len(), recorded);
}
