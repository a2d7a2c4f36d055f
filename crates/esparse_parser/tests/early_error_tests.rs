//! Early error tests.
//!
//! Each case parses a snippet that the grammar accepts but the scope and
//! strict-mode rules reject, and checks which message the parse stopped on.

use bumpalo::Bump;
use esparse_diagnostics::messages;
use esparse_diagnostics::{DiagnosticMessage, ParseError, ParseErrorKind};
use esparse_parser::{Parser, ParserOptions};

fn parse_with(source: &str, options: ParserOptions) -> Result<(), ParseError> {
    let arena = Bump::new();
    Parser::with_options(&arena, source, options).parse_program().map(|_| ())
}

fn parse(source: &str) -> Result<(), ParseError> {
    parse_with(source, ParserOptions::default())
}

fn assert_accepted(source: &str) {
    if let Err(err) = parse(source) {
        panic!("expected {:?} to parse, got: {}", source, err);
    }
}

fn assert_rejected_with(source: &str, message: &DiagnosticMessage) {
    match parse(source) {
        Ok(()) => panic!("expected {:?} to fail with {:?}", source, message.message),
        Err(err) => assert_eq!(err.code, message.code, "source: {:?}, got: {}", source, err),
    }
}

// ============================================================================
// Declarations
// ============================================================================

#[test]
fn test_let_redeclaration() {
    assert_rejected_with("let x; let x;", &messages::LET_DECLARED_TWICE);
}

#[test]
fn test_var_then_let() {
    assert_rejected_with("var x; let x;", &messages::LET_DECLARED_TWICE);
}

#[test]
fn test_let_then_var() {
    assert_rejected_with("let x; var x;", &messages::VAR_SHADOWS_LEXICAL);
}

#[test]
fn test_var_hoisted_out_of_block_clashes_with_let() {
    assert_rejected_with("let x; { var x; }", &messages::VAR_SHADOWS_LEXICAL);
}

#[test]
fn test_const_without_initializer() {
    assert_rejected_with("const x;", &messages::CONST_WITHOUT_INITIALIZER);
}

#[test]
fn test_const_in_for_of_head_needs_no_initializer() {
    assert_accepted("for (const x of y) {}");
    assert_accepted("for (let x in y) {}");
}

#[test]
fn test_shadowing_in_nested_block() {
    assert_accepted("let x; { let x; }");
    assert_accepted("var x; var x;");
}

#[test]
fn test_let_as_lexical_name() {
    assert_rejected_with("let let = 1;", &messages::LET_AS_LEXICAL_NAME);
}

#[test]
fn test_class_declared_twice() {
    assert_rejected_with("class A {} class A {}", &messages::CLASS_DECLARED_TWICE);
}

#[test]
fn test_function_shadowing_let() {
    assert_rejected_with("let f; function f() {}", &messages::FUNCTION_SHADOWS_LEXICAL);
}

// ============================================================================
// Parameters and strict mode
// ============================================================================

#[test]
fn test_duplicate_parameters_in_sloppy_function() {
    assert_accepted("function f(a, a) {}");
}

#[test]
fn test_duplicate_parameters_rejected_by_use_strict_body() {
    let err = parse("function f(a,a){\"use strict\";}").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Semantic);
}

#[test]
fn test_duplicate_parameters_in_strict_code() {
    let err = parse_with("function f(a, a) {}", ParserOptions::strict()).unwrap_err();
    assert_eq!(err.code, messages::STRICT_DUPLICATE_PARAMETER.code);
    assert_eq!(err.message, "Cannot declare a parameter named 'a' in strict mode as it has already been declared.");
}

#[test]
fn test_duplicate_parameters_with_defaults() {
    assert_rejected_with("function f(a, a = 1) {}", &messages::DUPLICATE_PARAMETER_WITH_DEFAULTS);
}

#[test]
fn test_duplicate_arrow_parameters() {
    assert_rejected_with("(a, a) => 1", &messages::DUPLICATE_PARAMETER_IN_ARROW);
}

#[test]
fn test_use_strict_rechecks_function_name() {
    assert_rejected_with("function eval() { 'use strict'; }", &messages::STRICT_INVALID_FUNCTION_NAME);
    assert_rejected_with("(function arguments() { 'use strict'; })", &messages::STRICT_FUNCTION_NAMED_ARGUMENTS);
}

#[test]
fn test_with_in_strict_mode() {
    assert_rejected_with("'use strict'; with (o) {}", &messages::WITH_IN_STRICT_MODE);
    assert_accepted("with (o) {}");
}

#[test]
fn test_strict_delete_of_identifier() {
    assert_rejected_with("'use strict'; delete x;", &messages::STRICT_DELETE_UNQUALIFIED);
    assert_accepted("'use strict'; delete x.y;");
}

#[test]
fn test_strict_assignment_to_eval() {
    let err = parse("'use strict'; eval = 1;").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Semantic);
}

#[test]
fn test_use_strict_rejects_earlier_octal_escape() {
    assert!(parse("function f() { \"\\07\"; \"use strict\"; }").is_err());
    assert!(parse("\"\\07\"; \"use strict\";").is_err());
    assert_accepted("function f() { \"\\07\"; \"use sloppy\"; }");
}

#[test]
fn test_module_code_is_strict() {
    let err = parse_with("with (o) {}", ParserOptions::module()).unwrap_err();
    assert_eq!(err.code, messages::WITH_IN_STRICT_MODE.code);
}

// ============================================================================
// Labels and jumps
// ============================================================================

#[test]
fn test_break_to_enclosing_label() {
    assert_accepted("outer: for (;;) { break outer; }");
    assert_accepted("outer: { break outer; }");
}

#[test]
fn test_break_to_undeclared_label() {
    assert_rejected_with("for (;;) { break missing; }", &messages::UNDECLARED_LABEL);
}

#[test]
fn test_continue_to_non_loop_label() {
    assert_rejected_with("block: { for (;;) { continue block; } }", &messages::CONTINUE_TO_NON_LOOP_LABEL);
}

#[test]
fn test_labels_do_not_cross_functions() {
    assert_rejected_with("outer: for (;;) { (function () { break outer; }); }", &messages::UNDECLARED_LABEL);
}

#[test]
fn test_label_redeclared() {
    assert_rejected_with("a: a: ;", &messages::LABEL_REDECLARED);
}

#[test]
fn test_jumps_outside_loops() {
    assert_rejected_with("break;", &messages::BREAK_OUTSIDE_LOOP);
    assert_rejected_with("continue;", &messages::CONTINUE_OUTSIDE_LOOP);
    assert_rejected_with("return 1;", &messages::RETURN_OUTSIDE_FUNCTION);
}

// ============================================================================
// Functions, classes and super
// ============================================================================

#[test]
fn test_super_outside_method() {
    assert_rejected_with("function f() { super.x; }", &messages::SUPER_OUTSIDE_METHOD);
    assert_accepted("({ m() { return super.x; } })");
}

#[test]
fn test_super_call_needs_derived_constructor() {
    assert_rejected_with("class A { constructor() { super(); } }", &messages::SUPER_CALL_IN_BASE_CONSTRUCTOR);
    assert_accepted("class A extends B { constructor() { super(); } }");
}

#[test]
fn test_new_target_outside_function() {
    assert_rejected_with("new.target;", &messages::NEW_TARGET_OUTSIDE_FUNCTION);
    assert_accepted("function f() { return new.target; }");
}

#[test]
fn test_multiple_constructors() {
    assert_rejected_with("class A { constructor() {} constructor() {} }", &messages::MULTIPLE_CONSTRUCTORS);
}

#[test]
fn test_yield_outside_generator_in_strict_code() {
    assert!(parse_with("yield 1;", ParserOptions::strict()).is_err());
    assert_accepted("function* g() { yield 1; yield* h(); }");
}

#[test]
fn test_duplicate_proto() {
    assert_rejected_with("({ __proto__: a, __proto__: b })", &messages::DUPLICATE_PROTO);
    assert_accepted("({ __proto__: a, ['__proto__']: b })");
}

#[test]
fn test_invalid_assignment_target() {
    let err = parse("1 = 2;").unwrap_err();
    assert!(!err.is_fatal());
}

// ============================================================================
// Nesting limit
// ============================================================================

#[test]
fn test_deep_nesting_reports_stack_exhausted() {
    let depth = 200;
    let source = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
    let options = ParserOptions { max_depth: 64, ..ParserOptions::default() };
    let err = parse_with(&source, options).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::StackOverflow);
    assert_eq!(err.message, "Stack exhausted");
}

#[test]
fn test_default_limit_stops_runaway_nesting() {
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024 * 1024)
        .spawn(|| {
            let source = "[".repeat(100_000);
            parse(&source)
        })
        .unwrap();
    let err = handle.join().unwrap().unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(err.to_string(), "Stack exhausted");
}

#[test]
fn test_nesting_below_limit_is_accepted() {
    let source = format!("{}1{}", "[".repeat(20), "]".repeat(20));
    assert_accepted(&source);
}
