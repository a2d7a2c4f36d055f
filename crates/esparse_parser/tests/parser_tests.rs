//! Parser integration tests.
//!
//! Verifies the shape of the trees the parser builds and the declarations
//! it collects for the top-level scope.

use bumpalo::Bump;
use esparse_ast::{
    Binding, DeclarationKind, ExportDeclaration, Expression, ImportSpecifierKind, Pattern, SourceParseMode, Statement,
    VariableFlags,
};
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_core::intern::StringInterner;
use esparse_parser::{Parser, ParserOptions, GENERATOR_BODY_PARAMETER_COUNT};

fn names(interner: &StringInterner, bindings: &[Binding]) -> Vec<String> {
    bindings.iter().map(|binding| interner.resolve(binding.name).to_string()).collect()
}

fn flags_of(interner: &StringInterner, bindings: &[Binding], name: &str) -> VariableFlags {
    bindings
        .iter()
        .find(|binding| interner.resolve(binding.name) == name)
        .map(|binding| binding.flags)
        .unwrap_or_else(|| panic!("no binding named {}", name))
}

/// The expression of the only statement of `source`.
fn single_expression<'a>(arena: &'a Bump, source: &str) -> Expression<'a> {
    let program = Parser::new(arena, source).parse_program().expect("parse");
    assert_eq!(program.statements.len(), 1, "source: {}", source);
    match program.statements[0] {
        Statement::Expression(statement) => statement.expression,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_statement_count() {
    let arena = Bump::new();
    let program = Parser::new(&arena, "var a = 1; let b = 2; const c = 3; ;").parse_program().unwrap();
    assert_eq!(program.statements.len(), 4);
    assert!(matches!(program.statements[3], Statement::Empty(_)));
}

#[test]
fn test_dangling_else_binds_to_inner_if() {
    let arena = Bump::new();
    let program = Parser::new(&arena, "if (a) if (b) x(); else y();").parse_program().unwrap();
    let Statement::If(outer) = program.statements[0] else {
        panic!("expected an if statement");
    };
    assert!(outer.alternate.is_none());
    let Statement::If(inner) = outer.consequent else {
        panic!("expected a nested if statement");
    };
    assert!(inner.alternate.is_some());
}

#[test]
fn test_labeled_loop_with_break() {
    let arena = Bump::new();
    let program = Parser::new(&arena, "outer: for (;;) { break outer; }").parse_program().unwrap();
    let Statement::Labeled(labeled) = program.statements[0] else {
        panic!("expected a labeled statement");
    };
    assert!(matches!(labeled.body, Statement::For(_)));
}

#[test]
fn test_for_of_const_head() {
    let arena = Bump::new();
    let program = Parser::new(&arena, "for (const x of y) {}").parse_program().unwrap();
    let Statement::ForOf(enumeration) = program.statements[0] else {
        panic!("expected a for-of statement");
    };
    assert!(matches!(enumeration.left, esparse_ast::ForTarget::Declaration { kind: DeclarationKind::Const, .. }));
}

#[test]
fn test_asi_after_return_line_break() {
    let arena = Bump::new();
    let program = Parser::new(&arena, "function f() {\n  return\n  1\n}").parse_program().unwrap();
    assert_eq!(program.statements.len(), 1);
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_parenthesized_list_is_comma_expression() {
    let arena = Bump::new();
    let Expression::Comma(comma) = single_expression(&arena, "(a, b)") else {
        panic!("expected a comma expression");
    };
    assert_eq!(comma.expressions.len(), 2);
}

#[test]
fn test_arrow_function_with_parameter_list() {
    let arena = Bump::new();
    let Expression::Arrow(arrow) = single_expression(&arena, "(a, b) => a + b") else {
        panic!("expected an arrow function");
    };
    assert_eq!(arrow.metadata.mode, SourceParseMode::ArrowFunction);
    assert_eq!(arrow.metadata.parameter_count, 2);
    assert!(arrow.metadata.is_arrow_expression_body);
}

#[test]
fn test_single_parameter_arrow() {
    let arena = Bump::new();
    let Expression::Arrow(arrow) = single_expression(&arena, "x => { return x; }") else {
        panic!("expected an arrow function");
    };
    assert_eq!(arrow.metadata.parameter_count, 1);
    assert!(!arrow.metadata.is_arrow_expression_body);
}

#[test]
fn test_binary_precedence() {
    let arena = Bump::new();
    let Expression::Binary(sum) = single_expression(&arena, "a + b * c") else {
        panic!("expected a binary expression");
    };
    assert_eq!(sum.operator, SyntaxKind::PlusToken);
    let Expression::Binary(product) = sum.right else {
        panic!("expected the product on the right");
    };
    assert_eq!(product.operator, SyntaxKind::AsteriskToken);
}

#[test]
fn test_assignment_is_right_associative() {
    let arena = Bump::new();
    let Expression::Assignment(outer) = single_expression(&arena, "a = b = c") else {
        panic!("expected an assignment");
    };
    assert!(matches!(outer.target, Expression::Identifier(_)));
    assert!(matches!(outer.value, Expression::Assignment(_)));
}

#[test]
fn test_destructuring_assignment() {
    let arena = Bump::new();
    let expression = single_expression(&arena, "[a, b] = [b, a]");
    assert!(matches!(expression, Expression::DestructuringAssignment(_)));
}

#[test]
fn test_regexp_after_operator() {
    let arena = Bump::new();
    let Expression::Assignment(assignment) = single_expression(&arena, "x = /ab+c/g") else {
        panic!("expected an assignment");
    };
    assert!(matches!(assignment.value, Expression::RegExp(_)));
}

#[test]
fn test_template_with_substitutions() {
    let arena = Bump::new();
    let Expression::Template(template) = single_expression(&arena, "`a${b}c${d}e`") else {
        panic!("expected a template literal");
    };
    assert_eq!(template.expressions.len(), 2);
}

// ============================================================================
// Declarations
// ============================================================================

#[test]
fn test_destructuring_declares_only_bound_names() {
    let arena = Bump::new();
    let parser = Parser::new(&arena, "var {a, b: [c, ...d]} = obj;");
    let interner = parser.interner().clone();
    let program = parser.parse_program().unwrap();
    assert_eq!(names(&interner, program.var_declarations), ["a", "c", "d"]);

    let Statement::Variable(statement) = program.statements[0] else {
        panic!("expected a variable statement");
    };
    let mut bound = Vec::new();
    statement.declarations[0].target.bound_names(&mut bound);
    assert_eq!(interner.resolve_all(bound), ["a", "c", "d"]);
    assert!(matches!(statement.declarations[0].target, Pattern::Object(_)));
}

#[test]
fn test_lexical_and_var_declarations_are_separate() {
    let arena = Bump::new();
    let parser = Parser::new(&arena, "var v; let l; const c = 1; class K {} function f() {}");
    let interner = parser.interner().clone();
    let program = parser.parse_program().unwrap();
    assert_eq!(names(&interner, program.var_declarations), ["v", "f"]);
    assert_eq!(names(&interner, program.lexical_variables), ["l", "c", "K"]);
    assert_eq!(program.function_declarations.len(), 1);
}

#[test]
fn test_closure_references_are_captured() {
    let arena = Bump::new();
    let parser = Parser::new(&arena, "var a = 1, b = 2; function f() { return a; } b;");
    let interner = parser.interner().clone();
    let program = parser.parse_program().unwrap();
    assert_eq!(names(&interner, program.captured_variables), ["a"]);
    assert!(flags_of(&interner, program.var_declarations, "a").contains(VariableFlags::CAPTURED));
    assert!(!flags_of(&interner, program.var_declarations, "b").contains(VariableFlags::CAPTURED));
}

#[test]
fn test_free_names_fold_through_nested_functions() {
    let arena = Bump::new();
    let source = "var a, b, c; function f() { var a; return function () { return a + b; }; } { c; }";
    let parser = Parser::new(&arena, source);
    let interner = parser.interner().clone();
    let program = parser.parse_program().unwrap();
    assert_eq!(names(&interner, program.captured_variables), ["b"]);
}

#[test]
fn test_use_strict_directive_makes_program_strict() {
    let arena = Bump::new();
    let program = Parser::new(&arena, "'use strict'; var x = 1;").parse_program().unwrap();
    assert!(program.strict_mode);
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn test_escaped_use_strict_is_not_a_directive() {
    let arena = Bump::new();
    let program = Parser::new(&arena, "'use\\x20strict'; with (o) {}").parse_program().unwrap();
    assert!(!program.strict_mode);
}

// ============================================================================
// Functions
// ============================================================================

#[test]
fn test_function_metadata_offsets() {
    let source = "function add(a, b) { return a + b; }";
    let arena = Bump::new();
    let program = Parser::new(&arena, source).parse_program().unwrap();
    let Statement::Function(function) = program.statements[0] else {
        panic!("expected a function declaration");
    };
    let metadata = function.metadata;
    assert_eq!(metadata.mode, SourceParseMode::NormalFunction);
    assert_eq!(metadata.function_start, 0);
    assert_eq!(metadata.parameters_start, 12);
    assert_eq!(metadata.body_start, 19);
    assert_eq!(metadata.body_end as usize, source.len() - 1);
    assert_eq!(metadata.parameter_count, 2);
    assert!(!metadata.strict_mode);
}

#[test]
fn test_reparse_function_from_metadata() {
    let source = "var x = 1; function f(a, {b}) { var y = a; return y + b; }";
    let arena = Bump::new();
    let program = Parser::new(&arena, source).parse_program().unwrap();
    let Statement::Function(function) = program.statements[1] else {
        panic!("expected a function declaration");
    };

    let parser = Parser::new(&arena, source);
    let interner = parser.interner().clone();
    let parsed = parser.parse_function(&function.metadata).unwrap();
    assert_eq!(parsed.parameters.len(), 2);
    assert_eq!(parsed.body.statements.len(), 2);
    assert_eq!(names(&interner, parsed.body.var_declarations), ["y"]);
}

#[test]
fn test_generator_body_has_four_parameters() {
    let source = "function* g(a, b) { yield a; yield b; }";
    let arena = Bump::new();
    let program = Parser::new(&arena, source).parse_program().unwrap();
    let Statement::Function(wrapper) = program.statements[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(wrapper.metadata.mode, SourceParseMode::GeneratorWrapperFunction);
    assert_eq!(wrapper.metadata.parameter_count, 2);

    let parsed = Parser::new(&arena, source).parse_function(&wrapper.metadata).unwrap();
    assert_eq!(parsed.body.statements.len(), 1);
    let Statement::Expression(statement) = parsed.body.statements[0] else {
        panic!("expected the generator body wrapped in an expression statement");
    };
    let Expression::Function(body) = statement.expression else {
        panic!("expected the generator body function");
    };
    assert_eq!(body.metadata.mode, SourceParseMode::GeneratorBody);
    assert_eq!(body.metadata.parameter_count, GENERATOR_BODY_PARAMETER_COUNT);
    assert_eq!(body.parameters.len(), 4);

    let parsed_body = Parser::new(&arena, source).parse_function(&body.metadata).unwrap();
    assert_eq!(parsed_body.parameters.len(), GENERATOR_BODY_PARAMETER_COUNT as usize);
    assert_eq!(parsed_body.body.statements.len(), 2);
}

#[test]
fn test_class_with_constructor_and_methods() {
    let arena = Bump::new();
    let source = "class A extends B { constructor() { super(); } static make() {} get x() { return 1; } }";
    let program = Parser::new(&arena, source).parse_program().unwrap();
    let Statement::Class(class) = program.statements[0] else {
        panic!("expected a class declaration");
    };
    assert!(class.heritage.is_some());
    assert!(class.constructor.is_some());
    assert_eq!(class.elements.len(), 2);
    assert!(class.elements[0].is_static);
}

// ============================================================================
// Modules
// ============================================================================

#[test]
fn test_module_record() {
    let arena = Bump::new();
    let source = "import d, { a as b } from 'm'; import * as ns from 'n'; export { b as c }; export const k = 1; export default 42; export * from 'm';";
    let parser = Parser::with_options(&arena, source, ParserOptions::module());
    let interner = parser.interner().clone();
    let program = parser.parse_program().unwrap();
    assert!(program.strict_mode);

    let record = program.module.expect("module record");
    assert_eq!(interner.resolve_all(record.requested_modules.iter().copied()), ["m", "n"]);
    let kinds: Vec<_> = record.import_entries.iter().map(|entry| entry.kind).collect();
    assert_eq!(kinds, [ImportSpecifierKind::Default, ImportSpecifierKind::Named, ImportSpecifierKind::Namespace]);
    let exported: Vec<_> = record
        .export_entries
        .iter()
        .filter_map(|entry| entry.export_name)
        .map(|name| interner.resolve(name).to_string())
        .collect();
    assert_eq!(exported, ["c", "k", "default"]);

    let Statement::Export(export) = program.statements[4] else {
        panic!("expected an export declaration");
    };
    let ExportDeclaration::Default { local, .. } = *export else {
        panic!("expected a default export");
    };
    assert_eq!(interner.resolve(local), "*default*");
}

#[test]
fn test_exported_bindings_are_flagged() {
    let arena = Bump::new();
    let source = "export var x = 1; export let y = 2; let z = 3; var w; export { w as v }; export default 42;";
    let parser = Parser::with_options(&arena, source, ParserOptions::module());
    let interner = parser.interner().clone();
    let program = parser.parse_program().unwrap();

    assert!(flags_of(&interner, program.var_declarations, "x").contains(VariableFlags::VAR | VariableFlags::EXPORTED));
    assert!(flags_of(&interner, program.var_declarations, "w").contains(VariableFlags::EXPORTED));
    assert!(flags_of(&interner, program.lexical_variables, "y").contains(VariableFlags::LET | VariableFlags::EXPORTED));
    assert!(flags_of(&interner, program.lexical_variables, "*default*").contains(VariableFlags::EXPORTED));
    assert!(!flags_of(&interner, program.lexical_variables, "z").contains(VariableFlags::EXPORTED));
}

#[test]
fn test_export_of_undeclared_binding_fails() {
    let arena = Bump::new();
    let result = Parser::with_options(&arena, "export { missing };", ParserOptions::module()).parse_program();
    let err = result.unwrap_err();
    assert_eq!(err.code, esparse_diagnostics::messages::EXPORTED_BINDING_NOT_DECLARED.code);
}

#[test]
fn test_second_default_export_fails() {
    let arena = Bump::new();
    let source = "export default 1; export default function () {}";
    let err = Parser::with_options(&arena, source, ParserOptions::module()).parse_program().unwrap_err();
    assert_eq!(err.code, esparse_diagnostics::messages::DUPLICATE_DEFAULT_EXPORT.code);
}

#[test]
fn test_import_in_script_fails() {
    let arena = Bump::new();
    let err = Parser::new(&arena, "import a from 'm';").parse_program().unwrap_err();
    assert_eq!(err.code, esparse_diagnostics::messages::MODULE_ITEM_OUTSIDE_MODULE.code);
}

#[test]
fn test_check_syntax_agrees_with_parse_program() {
    let sources = ["var a = [1, 2, ...b];", "a => a", "let x; let x;", "({a: 1, b() {}})"];
    for source in sources {
        let arena = Bump::new();
        let built = Parser::new(&arena, source).parse_program().is_ok();
        let checked = Parser::new(&arena, source).check_syntax().is_ok();
        assert_eq!(built, checked, "source: {}", source);
    }
}
