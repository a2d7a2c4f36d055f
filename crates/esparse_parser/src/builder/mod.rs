//! Tree builders.
//!
//! The grammar is written once against `TreeBuilder`. `AstBuilder` turns
//! each production into an arena node; `SyntaxChecker` produces
//! placeholder values and allocates nothing, which is how function bodies
//! are validated without building their trees.

mod ast_builder;
mod syntax_checker;

pub use ast_builder::AstBuilder;
pub use syntax_checker::{CheckedExpression, CheckedPattern, SyntaxChecker};

use esparse_ast::node::{
    Identifier, ImportSpecifierKind, PropertyKind, StringLiteral,
};
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::{Binding, DeclarationKind, FunctionMetadata};
use esparse_core::intern::InternedString;
use esparse_core::text::TextSpan;
use std::marker::PhantomData;

/// A list under construction. Builders that keep nothing use `Discard`.
pub trait ListBuilder<T>: Default {
    fn push(&mut self, item: T);
}

impl<T> ListBuilder<T> for Vec<T> {
    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }
}

/// A list that drops its items.
pub struct Discard<T>(PhantomData<fn(T)>);

impl<T> Default for Discard<T> {
    fn default() -> Self {
        Discard(PhantomData)
    }
}

impl<T> ListBuilder<T> for Discard<T> {
    #[inline]
    fn push(&mut self, _item: T) {}
}

/// The node factory the parser drives.
pub trait TreeBuilder<'a> {
    /// Produces a tree that a caller may inspect.
    const CREATES_AST: bool;
    /// May skip function bodies recorded in a `FunctionCache`.
    const CAN_USE_FUNCTION_CACHE: bool;
    /// Popping scopes records which names nested functions capture.
    const NEEDS_FREE_VARIABLE_INFO: bool;

    type List<T>: ListBuilder<T>;

    type Expression: Copy;
    type Statement: Copy;
    type Pattern: Copy;
    type Property: Copy;
    type PropertyKey: Copy;
    type ArrayElement: Copy;
    type Argument: Copy;
    type TemplateString: Copy;
    type Template: Copy;
    type Parameter: Copy;
    type PatternElement: Copy;
    type PatternProperty: Copy;
    type VariableDeclarator: Copy;
    type VariableDeclaration: Copy;
    type ForInit: Copy;
    type ForTarget: Copy;
    type SwitchClause: Copy;
    type CatchClause: Copy;
    type ClassElement: Copy;
    type Function: Copy;
    type Class: Copy;
    type Block: Copy;
    type ImportSpecifier: Copy;
    type ExportSpecifier: Copy;
    type Environment: Copy;

    /// Freeze the bindings of a finished scope.
    fn environment(&mut self, bindings: &[Binding]) -> Self::Environment;

    // ========================================================================
    // Expressions
    // ========================================================================

    fn create_resolve(&mut self, id: Identifier) -> Self::Expression;
    fn create_this(&mut self, span: TextSpan) -> Self::Expression;
    fn create_super(&mut self, span: TextSpan) -> Self::Expression;
    fn create_new_target(&mut self, span: TextSpan) -> Self::Expression;
    fn create_null(&mut self, span: TextSpan) -> Self::Expression;
    fn create_boolean(&mut self, span: TextSpan, value: bool) -> Self::Expression;
    fn create_number(&mut self, span: TextSpan, value: f64) -> Self::Expression;
    fn create_string(&mut self, literal: StringLiteral) -> Self::Expression;
    fn create_regexp(&mut self, span: TextSpan, pattern: InternedString, flags: InternedString) -> Self::Expression;

    fn create_template_string(&mut self, span: TextSpan, cooked: InternedString, raw: InternedString) -> Self::TemplateString;
    fn create_template(
        &mut self,
        span: TextSpan,
        quasis: Self::List<Self::TemplateString>,
        expressions: Self::List<Self::Expression>,
    ) -> Self::Template;
    fn create_template_expression(&mut self, template: Self::Template) -> Self::Expression;
    fn create_tagged_template(&mut self, span: TextSpan, tag: Self::Expression, template: Self::Template) -> Self::Expression;

    fn create_array_hole(&mut self, span: TextSpan) -> Self::ArrayElement;
    fn create_array_element(&mut self, expression: Self::Expression) -> Self::ArrayElement;
    fn create_array_spread(&mut self, expression: Self::Expression) -> Self::ArrayElement;
    fn create_array(&mut self, span: TextSpan, elements: Self::List<Self::ArrayElement>) -> Self::Expression;

    fn create_identifier_key(&mut self, name: InternedString) -> Self::PropertyKey;
    fn create_string_key(&mut self, name: InternedString) -> Self::PropertyKey;
    fn create_number_key(&mut self, value: f64) -> Self::PropertyKey;
    fn create_computed_key(&mut self, expression: Self::Expression) -> Self::PropertyKey;
    fn create_property(
        &mut self,
        span: TextSpan,
        key: Self::PropertyKey,
        value: Self::Expression,
        kind: PropertyKind,
    ) -> Self::Property;
    fn create_object(&mut self, span: TextSpan, properties: Self::List<Self::Property>) -> Self::Expression;

    fn create_function_expression(&mut self, function: Self::Function) -> Self::Expression;
    fn create_arrow_function(&mut self, function: Self::Function) -> Self::Expression;
    fn create_class_expression(&mut self, class: Self::Class) -> Self::Expression;

    fn create_dot(&mut self, span: TextSpan, object: Self::Expression, property: Identifier) -> Self::Expression;
    fn create_bracket(&mut self, span: TextSpan, object: Self::Expression, property: Self::Expression) -> Self::Expression;
    fn create_argument(&mut self, expression: Self::Expression, spread: bool) -> Self::Argument;
    fn create_call(&mut self, span: TextSpan, callee: Self::Expression, arguments: Self::List<Self::Argument>) -> Self::Expression;
    fn create_new(
        &mut self,
        span: TextSpan,
        callee: Self::Expression,
        arguments: Option<Self::List<Self::Argument>>,
    ) -> Self::Expression;

    fn create_unary(&mut self, span: TextSpan, operator: SyntaxKind, operand: Self::Expression) -> Self::Expression;
    fn create_update(&mut self, span: TextSpan, operator: SyntaxKind, prefix: bool, operand: Self::Expression) -> Self::Expression;
    fn create_binary(
        &mut self,
        span: TextSpan,
        operator: SyntaxKind,
        left: Self::Expression,
        right: Self::Expression,
    ) -> Self::Expression;
    fn create_conditional(
        &mut self,
        span: TextSpan,
        test: Self::Expression,
        consequent: Self::Expression,
        alternate: Self::Expression,
    ) -> Self::Expression;
    fn create_assignment(
        &mut self,
        span: TextSpan,
        operator: SyntaxKind,
        target: Self::Expression,
        value: Self::Expression,
    ) -> Self::Expression;
    fn create_destructuring_assignment(&mut self, span: TextSpan, pattern: Self::Pattern, value: Self::Expression) -> Self::Expression;
    fn create_comma(&mut self, span: TextSpan, expressions: Self::List<Self::Expression>) -> Self::Expression;
    fn create_yield(&mut self, span: TextSpan, argument: Option<Self::Expression>, delegate: bool) -> Self::Expression;

    // ========================================================================
    // Patterns
    // ========================================================================

    fn create_binding_pattern(&mut self, id: Identifier) -> Self::Pattern;
    fn create_expression_pattern(&mut self, expression: Self::Expression) -> Self::Pattern;
    fn create_pattern_element(&mut self, target: Self::Pattern, default: Option<Self::Expression>) -> Self::PatternElement;
    fn create_pattern_hole(&mut self) -> Self::PatternElement;
    fn create_array_pattern(
        &mut self,
        span: TextSpan,
        elements: Self::List<Self::PatternElement>,
        rest: Option<Self::Pattern>,
    ) -> Self::Pattern;
    fn create_pattern_property(
        &mut self,
        key: Self::PropertyKey,
        target: Self::Pattern,
        default: Option<Self::Expression>,
        shorthand: bool,
    ) -> Self::PatternProperty;
    fn create_object_pattern(&mut self, span: TextSpan, properties: Self::List<Self::PatternProperty>) -> Self::Pattern;

    // ========================================================================
    // Functions and classes
    // ========================================================================

    fn create_parameter(&mut self, pattern: Self::Pattern, default: Option<Self::Expression>, rest: bool) -> Self::Parameter;
    fn create_function(
        &mut self,
        span: TextSpan,
        name: Option<Identifier>,
        parameters: Self::List<Self::Parameter>,
        metadata: FunctionMetadata,
    ) -> Self::Function;
    fn create_class_element(
        &mut self,
        key: Self::PropertyKey,
        kind: PropertyKind,
        is_static: bool,
        function: Self::Function,
    ) -> Self::ClassElement;
    fn create_class(
        &mut self,
        span: TextSpan,
        name: Option<Identifier>,
        heritage: Option<Self::Expression>,
        constructor: Option<Self::Function>,
        elements: Self::List<Self::ClassElement>,
    ) -> Self::Class;

    // ========================================================================
    // Statements
    // ========================================================================

    fn create_block(&mut self, span: TextSpan, statements: Self::List<Self::Statement>, scope: Self::Environment) -> Self::Block;
    fn create_block_statement(&mut self, block: Self::Block) -> Self::Statement;
    fn create_expression_statement(&mut self, span: TextSpan, expression: Self::Expression) -> Self::Statement;
    fn create_variable_declarator(
        &mut self,
        span: TextSpan,
        target: Self::Pattern,
        init: Option<Self::Expression>,
    ) -> Self::VariableDeclarator;
    fn create_variable_declaration(
        &mut self,
        span: TextSpan,
        kind: DeclarationKind,
        declarations: Self::List<Self::VariableDeclarator>,
    ) -> Self::VariableDeclaration;
    fn create_variable_statement(&mut self, declaration: Self::VariableDeclaration) -> Self::Statement;
    fn create_function_declaration(&mut self, function: Self::Function) -> Self::Statement;
    fn create_class_declaration(&mut self, class: Self::Class) -> Self::Statement;
    fn create_empty(&mut self, span: TextSpan) -> Self::Statement;
    fn create_debugger(&mut self, span: TextSpan) -> Self::Statement;
    fn create_if(
        &mut self,
        span: TextSpan,
        test: Self::Expression,
        consequent: Self::Statement,
        alternate: Option<Self::Statement>,
    ) -> Self::Statement;
    fn create_do_while(&mut self, span: TextSpan, body: Self::Statement, test: Self::Expression) -> Self::Statement;
    fn create_while(&mut self, span: TextSpan, test: Self::Expression, body: Self::Statement) -> Self::Statement;
    fn create_for_init_variables(&mut self, declaration: Self::VariableDeclaration) -> Self::ForInit;
    fn create_for_init_expression(&mut self, expression: Self::Expression) -> Self::ForInit;
    #[allow(clippy::too_many_arguments)]
    fn create_for(
        &mut self,
        span: TextSpan,
        init: Option<Self::ForInit>,
        test: Option<Self::Expression>,
        update: Option<Self::Expression>,
        body: Self::Statement,
        scope: Self::Environment,
    ) -> Self::Statement;
    fn create_for_target_declaration(
        &mut self,
        kind: DeclarationKind,
        target: Self::Pattern,
        init: Option<Self::Expression>,
    ) -> Self::ForTarget;
    fn create_for_target_pattern(&mut self, pattern: Self::Pattern) -> Self::ForTarget;
    fn create_for_in(
        &mut self,
        span: TextSpan,
        left: Self::ForTarget,
        right: Self::Expression,
        body: Self::Statement,
        scope: Self::Environment,
    ) -> Self::Statement;
    fn create_for_of(
        &mut self,
        span: TextSpan,
        left: Self::ForTarget,
        right: Self::Expression,
        body: Self::Statement,
        scope: Self::Environment,
    ) -> Self::Statement;
    fn create_continue(&mut self, span: TextSpan, label: Option<Identifier>) -> Self::Statement;
    fn create_break(&mut self, span: TextSpan, label: Option<Identifier>) -> Self::Statement;
    fn create_return(&mut self, span: TextSpan, argument: Option<Self::Expression>) -> Self::Statement;
    fn create_with(&mut self, span: TextSpan, object: Self::Expression, body: Self::Statement) -> Self::Statement;
    fn create_switch_clause(
        &mut self,
        span: TextSpan,
        test: Option<Self::Expression>,
        consequent: Self::List<Self::Statement>,
    ) -> Self::SwitchClause;
    fn create_switch(
        &mut self,
        span: TextSpan,
        discriminant: Self::Expression,
        first_clauses: Self::List<Self::SwitchClause>,
        default_clause: Option<Self::SwitchClause>,
        second_clauses: Self::List<Self::SwitchClause>,
        scope: Self::Environment,
    ) -> Self::Statement;
    fn create_labeled(&mut self, span: TextSpan, label: Identifier, body: Self::Statement) -> Self::Statement;
    fn create_throw(&mut self, span: TextSpan, argument: Self::Expression) -> Self::Statement;
    fn create_catch(
        &mut self,
        span: TextSpan,
        parameter: Self::Pattern,
        body: Self::Block,
        scope: Self::Environment,
    ) -> Self::CatchClause;
    fn create_try(
        &mut self,
        span: TextSpan,
        block: Self::Block,
        handler: Option<Self::CatchClause>,
        finalizer: Option<Self::Block>,
    ) -> Self::Statement;

    // ========================================================================
    // Modules
    // ========================================================================

    fn create_import_specifier(
        &mut self,
        kind: ImportSpecifierKind,
        imported: InternedString,
        local: Identifier,
    ) -> Self::ImportSpecifier;
    fn create_import(
        &mut self,
        span: TextSpan,
        specifiers: Self::List<Self::ImportSpecifier>,
        module: StringLiteral,
    ) -> Self::Statement;
    fn create_export_all(&mut self, span: TextSpan, module: StringLiteral) -> Self::Statement;
    fn create_export_specifier(&mut self, local: Identifier, exported: InternedString) -> Self::ExportSpecifier;
    fn create_export_named(
        &mut self,
        span: TextSpan,
        specifiers: Self::List<Self::ExportSpecifier>,
        module: Option<StringLiteral>,
    ) -> Self::Statement;
    fn create_export_default_function(&mut self, span: TextSpan, function: Self::Function, local: InternedString) -> Self::Statement;
    fn create_export_default_class(&mut self, span: TextSpan, class: Self::Class, local: InternedString) -> Self::Statement;
    fn create_export_default_expression(&mut self, span: TextSpan, expression: Self::Expression, local: InternedString) -> Self::Statement;
    fn create_export_declaration(&mut self, span: TextSpan, declaration: Self::Statement) -> Self::Statement;

    // ========================================================================
    // Queries
    // ========================================================================

    fn is_resolve(&self, expression: &Self::Expression) -> bool {
        self.resolved_name(expression).is_some()
    }
    fn resolved_name(&self, expression: &Self::Expression) -> Option<InternedString>;
    fn is_object_literal(&self, expression: &Self::Expression) -> bool;
    fn is_array_literal(&self, expression: &Self::Expression) -> bool;
    fn is_object_or_array_literal(&self, expression: &Self::Expression) -> bool {
        self.is_object_literal(expression) || self.is_array_literal(expression)
    }
    /// Identifier, property access or element access.
    fn is_assignment_location(&self, expression: &Self::Expression) -> bool;
    /// A pattern that is a plain declared name.
    fn is_binding_node(&self, pattern: &Self::Pattern) -> bool;
}
