//! Validation-only builder.

use super::{Discard, TreeBuilder};
use esparse_ast::node::{Identifier, ImportSpecifierKind, PropertyKind, StringLiteral};
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::{Binding, DeclarationKind, FunctionMetadata};
use esparse_core::intern::InternedString;
use esparse_core::text::TextSpan;

/// The shape of an expression, as far as the grammar needs to know it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckedExpression {
    Resolve(InternedString),
    ObjectLiteral,
    ArrayLiteral,
    Dot,
    Bracket,
    Call,
    Function,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckedPattern {
    Binding,
    Expression,
    Destructuring,
}

/// Builds nothing. Used for function bodies and for speculative parses.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntaxChecker;

impl SyntaxChecker {
    pub fn new() -> Self {
        SyntaxChecker
    }
}

impl<'a> TreeBuilder<'a> for SyntaxChecker {
    const CREATES_AST: bool = false;
    const CAN_USE_FUNCTION_CACHE: bool = true;
    const NEEDS_FREE_VARIABLE_INFO: bool = false;

    type List<T> = Discard<T>;

    type Expression = CheckedExpression;
    type Statement = ();
    type Pattern = CheckedPattern;
    type Property = ();
    type PropertyKey = ();
    type ArrayElement = ();
    type Argument = ();
    type TemplateString = ();
    type Template = ();
    type Parameter = ();
    type PatternElement = ();
    type PatternProperty = ();
    type VariableDeclarator = ();
    type VariableDeclaration = ();
    type ForInit = ();
    type ForTarget = ();
    type SwitchClause = ();
    type CatchClause = ();
    type ClassElement = ();
    type Function = ();
    type Class = ();
    type Block = ();
    type ImportSpecifier = ();
    type ExportSpecifier = ();
    type Environment = ();

    fn environment(&mut self, _bindings: &[Binding]) {}

    // ========================================================================
    // Expressions
    // ========================================================================

    fn create_resolve(&mut self, id: Identifier) -> CheckedExpression {
        CheckedExpression::Resolve(id.name)
    }
    fn create_this(&mut self, _: TextSpan) -> CheckedExpression {
        CheckedExpression::Other
    }
    fn create_super(&mut self, _: TextSpan) -> CheckedExpression {
        CheckedExpression::Other
    }
    fn create_new_target(&mut self, _: TextSpan) -> CheckedExpression {
        CheckedExpression::Other
    }
    fn create_null(&mut self, _: TextSpan) -> CheckedExpression {
        CheckedExpression::Other
    }
    fn create_boolean(&mut self, _: TextSpan, _: bool) -> CheckedExpression {
        CheckedExpression::Other
    }
    fn create_number(&mut self, _: TextSpan, _: f64) -> CheckedExpression {
        CheckedExpression::Other
    }
    fn create_string(&mut self, _: StringLiteral) -> CheckedExpression {
        CheckedExpression::Other
    }
    fn create_regexp(&mut self, _: TextSpan, _: InternedString, _: InternedString) -> CheckedExpression {
        CheckedExpression::Other
    }

    fn create_template_string(&mut self, _: TextSpan, _: InternedString, _: InternedString) {}
    fn create_template(&mut self, _: TextSpan, _: Discard<()>, _: Discard<CheckedExpression>) {}
    fn create_template_expression(&mut self, _: ()) -> CheckedExpression {
        CheckedExpression::Other
    }
    fn create_tagged_template(&mut self, _: TextSpan, _: CheckedExpression, _: ()) -> CheckedExpression {
        CheckedExpression::Call
    }

    fn create_array_hole(&mut self, _: TextSpan) {}
    fn create_array_element(&mut self, _: CheckedExpression) {}
    fn create_array_spread(&mut self, _: CheckedExpression) {}
    fn create_array(&mut self, _: TextSpan, _: Discard<()>) -> CheckedExpression {
        CheckedExpression::ArrayLiteral
    }

    fn create_identifier_key(&mut self, _: InternedString) {}
    fn create_string_key(&mut self, _: InternedString) {}
    fn create_number_key(&mut self, _: f64) {}
    fn create_computed_key(&mut self, _: CheckedExpression) {}
    fn create_property(&mut self, _: TextSpan, _: (), _: CheckedExpression, _: PropertyKind) {}
    fn create_object(&mut self, _: TextSpan, _: Discard<()>) -> CheckedExpression {
        CheckedExpression::ObjectLiteral
    }

    fn create_function_expression(&mut self, _: ()) -> CheckedExpression {
        CheckedExpression::Function
    }
    fn create_arrow_function(&mut self, _: ()) -> CheckedExpression {
        CheckedExpression::Function
    }
    fn create_class_expression(&mut self, _: ()) -> CheckedExpression {
        CheckedExpression::Other
    }

    fn create_dot(&mut self, _: TextSpan, _: CheckedExpression, _: Identifier) -> CheckedExpression {
        CheckedExpression::Dot
    }
    fn create_bracket(&mut self, _: TextSpan, _: CheckedExpression, _: CheckedExpression) -> CheckedExpression {
        CheckedExpression::Bracket
    }
    fn create_argument(&mut self, _: CheckedExpression, _: bool) {}
    fn create_call(&mut self, _: TextSpan, _: CheckedExpression, _: Discard<()>) -> CheckedExpression {
        CheckedExpression::Call
    }
    fn create_new(&mut self, _: TextSpan, _: CheckedExpression, _: Option<Discard<()>>) -> CheckedExpression {
        CheckedExpression::Other
    }

    fn create_unary(&mut self, _: TextSpan, _: SyntaxKind, _: CheckedExpression) -> CheckedExpression {
        CheckedExpression::Other
    }
    fn create_update(&mut self, _: TextSpan, _: SyntaxKind, _: bool, _: CheckedExpression) -> CheckedExpression {
        CheckedExpression::Other
    }
    fn create_binary(&mut self, _: TextSpan, _: SyntaxKind, _: CheckedExpression, _: CheckedExpression) -> CheckedExpression {
        CheckedExpression::Other
    }
    fn create_conditional(
        &mut self,
        _: TextSpan,
        _: CheckedExpression,
        _: CheckedExpression,
        _: CheckedExpression,
    ) -> CheckedExpression {
        CheckedExpression::Other
    }
    fn create_assignment(&mut self, _: TextSpan, _: SyntaxKind, _: CheckedExpression, _: CheckedExpression) -> CheckedExpression {
        CheckedExpression::Other
    }
    fn create_destructuring_assignment(&mut self, _: TextSpan, _: CheckedPattern, _: CheckedExpression) -> CheckedExpression {
        CheckedExpression::Other
    }
    fn create_comma(&mut self, _: TextSpan, _: Discard<CheckedExpression>) -> CheckedExpression {
        CheckedExpression::Other
    }
    fn create_yield(&mut self, _: TextSpan, _: Option<CheckedExpression>, _: bool) -> CheckedExpression {
        CheckedExpression::Other
    }

    // ========================================================================
    // Patterns
    // ========================================================================

    fn create_binding_pattern(&mut self, _: Identifier) -> CheckedPattern {
        CheckedPattern::Binding
    }
    fn create_expression_pattern(&mut self, _: CheckedExpression) -> CheckedPattern {
        CheckedPattern::Expression
    }
    fn create_pattern_element(&mut self, _: CheckedPattern, _: Option<CheckedExpression>) {}
    fn create_pattern_hole(&mut self) {}
    fn create_array_pattern(&mut self, _: TextSpan, _: Discard<()>, _: Option<CheckedPattern>) -> CheckedPattern {
        CheckedPattern::Destructuring
    }
    fn create_pattern_property(&mut self, _: (), _: CheckedPattern, _: Option<CheckedExpression>, _: bool) {}
    fn create_object_pattern(&mut self, _: TextSpan, _: Discard<()>) -> CheckedPattern {
        CheckedPattern::Destructuring
    }

    // ========================================================================
    // Functions and classes
    // ========================================================================

    fn create_parameter(&mut self, _: CheckedPattern, _: Option<CheckedExpression>, _: bool) {}
    fn create_function(&mut self, _: TextSpan, _: Option<Identifier>, _: Discard<()>, _: FunctionMetadata) {}
    fn create_class_element(&mut self, _: (), _: PropertyKind, _: bool, _: ()) {}
    fn create_class(&mut self, _: TextSpan, _: Option<Identifier>, _: Option<CheckedExpression>, _: Option<()>, _: Discard<()>) {}

    // ========================================================================
    // Statements
    // ========================================================================

    fn create_block(&mut self, _: TextSpan, _: Discard<()>, _: ()) {}
    fn create_block_statement(&mut self, _: ()) {}
    fn create_expression_statement(&mut self, _: TextSpan, _: CheckedExpression) {}
    fn create_variable_declarator(&mut self, _: TextSpan, _: CheckedPattern, _: Option<CheckedExpression>) {}
    fn create_variable_declaration(&mut self, _: TextSpan, _: DeclarationKind, _: Discard<()>) {}
    fn create_variable_statement(&mut self, _: ()) {}
    fn create_function_declaration(&mut self, _: ()) {}
    fn create_class_declaration(&mut self, _: ()) {}
    fn create_empty(&mut self, _: TextSpan) {}
    fn create_debugger(&mut self, _: TextSpan) {}
    fn create_if(&mut self, _: TextSpan, _: CheckedExpression, _: (), _: Option<()>) {}
    fn create_do_while(&mut self, _: TextSpan, _: (), _: CheckedExpression) {}
    fn create_while(&mut self, _: TextSpan, _: CheckedExpression, _: ()) {}
    fn create_for_init_variables(&mut self, _: ()) {}
    fn create_for_init_expression(&mut self, _: CheckedExpression) {}
    fn create_for(
        &mut self,
        _: TextSpan,
        _: Option<()>,
        _: Option<CheckedExpression>,
        _: Option<CheckedExpression>,
        _: (),
        _: (),
    ) {
    }
    fn create_for_target_declaration(&mut self, _: DeclarationKind, _: CheckedPattern, _: Option<CheckedExpression>) {}
    fn create_for_target_pattern(&mut self, _: CheckedPattern) {}
    fn create_for_in(&mut self, _: TextSpan, _: (), _: CheckedExpression, _: (), _: ()) {}
    fn create_for_of(&mut self, _: TextSpan, _: (), _: CheckedExpression, _: (), _: ()) {}
    fn create_continue(&mut self, _: TextSpan, _: Option<Identifier>) {}
    fn create_break(&mut self, _: TextSpan, _: Option<Identifier>) {}
    fn create_return(&mut self, _: TextSpan, _: Option<CheckedExpression>) {}
    fn create_with(&mut self, _: TextSpan, _: CheckedExpression, _: ()) {}
    fn create_switch_clause(&mut self, _: TextSpan, _: Option<CheckedExpression>, _: Discard<()>) {}
    fn create_switch(&mut self, _: TextSpan, _: CheckedExpression, _: Discard<()>, _: Option<()>, _: Discard<()>, _: ()) {}
    fn create_labeled(&mut self, _: TextSpan, _: Identifier, _: ()) {}
    fn create_throw(&mut self, _: TextSpan, _: CheckedExpression) {}
    fn create_catch(&mut self, _: TextSpan, _: CheckedPattern, _: (), _: ()) {}
    fn create_try(&mut self, _: TextSpan, _: (), _: Option<()>, _: Option<()>) {}

    // ========================================================================
    // Modules
    // ========================================================================

    fn create_import_specifier(&mut self, _: ImportSpecifierKind, _: InternedString, _: Identifier) {}
    fn create_import(&mut self, _: TextSpan, _: Discard<()>, _: StringLiteral) {}
    fn create_export_all(&mut self, _: TextSpan, _: StringLiteral) {}
    fn create_export_specifier(&mut self, _: Identifier, _: InternedString) {}
    fn create_export_named(&mut self, _: TextSpan, _: Discard<()>, _: Option<StringLiteral>) {}
    fn create_export_default_function(&mut self, _: TextSpan, _: (), _: InternedString) {}
    fn create_export_default_class(&mut self, _: TextSpan, _: (), _: InternedString) {}
    fn create_export_default_expression(&mut self, _: TextSpan, _: CheckedExpression, _: InternedString) {}
    fn create_export_declaration(&mut self, _: TextSpan, _: ()) {}

    // ========================================================================
    // Queries
    // ========================================================================

    fn resolved_name(&self, expression: &CheckedExpression) -> Option<InternedString> {
        match expression {
            CheckedExpression::Resolve(name) => Some(*name),
            _ => None,
        }
    }

    fn is_object_literal(&self, expression: &CheckedExpression) -> bool {
        *expression == CheckedExpression::ObjectLiteral
    }

    fn is_array_literal(&self, expression: &CheckedExpression) -> bool {
        *expression == CheckedExpression::ArrayLiteral
    }

    fn is_assignment_location(&self, expression: &CheckedExpression) -> bool {
        matches!(
            expression,
            CheckedExpression::Resolve(_) | CheckedExpression::Dot | CheckedExpression::Bracket
        )
    }

    fn is_binding_node(&self, pattern: &CheckedPattern) -> bool {
        *pattern == CheckedPattern::Binding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esparse_core::intern::StringInterner;

    #[test]
    fn test_assignment_locations() {
        let interner = StringInterner::new();
        let mut checker = SyntaxChecker::new();
        let x = checker.create_resolve(Identifier { span: TextSpan::default(), name: interner.intern("x") });
        let call = checker.create_call(TextSpan::default(), x, Discard::default());
        assert!(TreeBuilder::is_assignment_location(&checker, &x));
        assert!(!TreeBuilder::is_assignment_location(&checker, &call));
        assert!(TreeBuilder::is_resolve(&checker, &x));
    }
}
