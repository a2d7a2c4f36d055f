//! Builds the arena AST.

use super::TreeBuilder;
use bumpalo::Bump;
use esparse_ast::node::*;
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::{Binding, CodeFeatures, DeclarationKind, FunctionMetadata, LexicalEnvironment};
use esparse_core::intern::InternedString;
use esparse_core::text::TextSpan;

/// Allocates every node in the arena and tracks the features of the code
/// it builds.
pub struct AstBuilder<'a> {
    arena: &'a Bump,
    eval: InternedString,
    arguments: InternedString,
    features: CodeFeatures,
    num_constants: u32,
    function_declarations: Vec<&'a FunctionNode<'a>>,
}

impl<'a> AstBuilder<'a> {
    pub(crate) fn new(arena: &'a Bump, eval: InternedString, arguments: InternedString) -> Self {
        Self {
            arena,
            eval,
            arguments,
            features: CodeFeatures::NONE,
            num_constants: 0,
            function_declarations: Vec::new(),
        }
    }

    /// Features seen so far in the code this builder built.
    pub fn features(&self) -> CodeFeatures {
        self.features
    }

    /// Number of literal constants built so far.
    pub fn num_constants(&self) -> u32 {
        self.num_constants
    }

    /// Every function declaration built, in source order.
    pub(crate) fn function_declarations(&self) -> &'a [&'a FunctionNode<'a>] {
        self.arena.alloc_slice_copy(&self.function_declarations)
    }

    #[inline]
    fn list<T: Copy>(&self, items: Vec<T>) -> &'a [T] {
        self.arena.alloc_slice_copy(&items)
    }

    #[inline]
    fn constant(&mut self) {
        self.num_constants += 1;
    }
}

impl<'a> TreeBuilder<'a> for AstBuilder<'a> {
    const CREATES_AST: bool = true;
    const CAN_USE_FUNCTION_CACHE: bool = true;
    const NEEDS_FREE_VARIABLE_INFO: bool = true;

    type List<T> = Vec<T>;

    type Expression = Expression<'a>;
    type Statement = Statement<'a>;
    type Pattern = Pattern<'a>;
    type Property = Property<'a>;
    type PropertyKey = PropertyKey<'a>;
    type ArrayElement = ArrayElement<'a>;
    type Argument = Argument<'a>;
    type TemplateString = TemplateString;
    type Template = &'a TemplateLiteral<'a>;
    type Parameter = Parameter<'a>;
    type PatternElement = Option<PatternElement<'a>>;
    type PatternProperty = PatternProperty<'a>;
    type VariableDeclarator = VariableDeclarator<'a>;
    type VariableDeclaration = &'a VariableStatement<'a>;
    type ForInit = ForInit<'a>;
    type ForTarget = ForTarget<'a>;
    type SwitchClause = SwitchClause<'a>;
    type CatchClause = CatchClause<'a>;
    type ClassElement = ClassElement<'a>;
    type Function = &'a FunctionNode<'a>;
    type Class = &'a ClassNode<'a>;
    type Block = &'a BlockStatement<'a>;
    type ImportSpecifier = ImportSpecifier;
    type ExportSpecifier = ExportSpecifier;
    type Environment = LexicalEnvironment<'a>;

    fn environment(&mut self, bindings: &[Binding]) -> Self::Environment {
        self.arena.alloc_slice_copy(bindings)
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn create_resolve(&mut self, id: Identifier) -> Self::Expression {
        if id.name == self.arguments {
            self.features |= CodeFeatures::ARGUMENTS;
        }
        Expression::Identifier(id)
    }

    fn create_this(&mut self, span: TextSpan) -> Self::Expression {
        self.features |= CodeFeatures::THIS;
        Expression::This(span)
    }

    fn create_super(&mut self, span: TextSpan) -> Self::Expression {
        Expression::Super(span)
    }

    fn create_new_target(&mut self, span: TextSpan) -> Self::Expression {
        self.features |= CodeFeatures::NEW_TARGET;
        Expression::NewTarget(span)
    }

    fn create_null(&mut self, span: TextSpan) -> Self::Expression {
        self.constant();
        Expression::Null(span)
    }

    fn create_boolean(&mut self, span: TextSpan, value: bool) -> Self::Expression {
        self.constant();
        Expression::Boolean(BooleanLiteral { span, value })
    }

    fn create_number(&mut self, span: TextSpan, value: f64) -> Self::Expression {
        self.constant();
        Expression::Number(NumericLiteral { span, value })
    }

    fn create_string(&mut self, literal: StringLiteral) -> Self::Expression {
        self.constant();
        Expression::String(literal)
    }

    fn create_regexp(&mut self, span: TextSpan, pattern: InternedString, flags: InternedString) -> Self::Expression {
        Expression::RegExp(RegExpLiteral { span, pattern, flags })
    }

    fn create_template_string(&mut self, span: TextSpan, cooked: InternedString, raw: InternedString) -> Self::TemplateString {
        TemplateString { span, cooked, raw }
    }

    fn create_template(
        &mut self,
        span: TextSpan,
        quasis: Vec<TemplateString>,
        expressions: Vec<Expression<'a>>,
    ) -> Self::Template {
        let quasis = self.list(quasis);
        let expressions = self.list(expressions);
        self.arena.alloc(TemplateLiteral { span, quasis, expressions })
    }

    fn create_template_expression(&mut self, template: Self::Template) -> Self::Expression {
        Expression::Template(template)
    }

    fn create_tagged_template(&mut self, span: TextSpan, tag: Self::Expression, template: Self::Template) -> Self::Expression {
        Expression::TaggedTemplate(self.arena.alloc(TaggedTemplate { span, tag, template }))
    }

    fn create_array_hole(&mut self, span: TextSpan) -> Self::ArrayElement {
        ArrayElement::Hole(span)
    }

    fn create_array_element(&mut self, expression: Self::Expression) -> Self::ArrayElement {
        ArrayElement::Expression(expression)
    }

    fn create_array_spread(&mut self, expression: Self::Expression) -> Self::ArrayElement {
        ArrayElement::Spread(expression)
    }

    fn create_array(&mut self, span: TextSpan, elements: Vec<ArrayElement<'a>>) -> Self::Expression {
        let elements = self.list(elements);
        Expression::Array(self.arena.alloc(ArrayLiteral { span, elements }))
    }

    fn create_identifier_key(&mut self, name: InternedString) -> Self::PropertyKey {
        PropertyKey::Identifier(name)
    }

    fn create_string_key(&mut self, name: InternedString) -> Self::PropertyKey {
        PropertyKey::String(name)
    }

    fn create_number_key(&mut self, value: f64) -> Self::PropertyKey {
        PropertyKey::Number(value)
    }

    fn create_computed_key(&mut self, expression: Self::Expression) -> Self::PropertyKey {
        PropertyKey::Computed(self.arena.alloc(expression))
    }

    fn create_property(
        &mut self,
        span: TextSpan,
        key: Self::PropertyKey,
        value: Self::Expression,
        kind: PropertyKind,
    ) -> Self::Property {
        Property { span, key, value, kind }
    }

    fn create_object(&mut self, span: TextSpan, properties: Vec<Property<'a>>) -> Self::Expression {
        let properties = self.list(properties);
        Expression::Object(self.arena.alloc(ObjectLiteral { span, properties }))
    }

    fn create_function_expression(&mut self, function: Self::Function) -> Self::Expression {
        Expression::Function(function)
    }

    fn create_arrow_function(&mut self, function: Self::Function) -> Self::Expression {
        self.features |= CodeFeatures::ARROW_FUNCTION;
        Expression::Arrow(function)
    }

    fn create_class_expression(&mut self, class: Self::Class) -> Self::Expression {
        Expression::Class(class)
    }

    fn create_dot(&mut self, span: TextSpan, object: Self::Expression, property: Identifier) -> Self::Expression {
        if matches!(object, Expression::Super(_)) {
            self.features |= CodeFeatures::SUPER_PROPERTY;
        }
        Expression::Dot(self.arena.alloc(DotAccess { span, object, property }))
    }

    fn create_bracket(&mut self, span: TextSpan, object: Self::Expression, property: Self::Expression) -> Self::Expression {
        if matches!(object, Expression::Super(_)) {
            self.features |= CodeFeatures::SUPER_PROPERTY;
        }
        Expression::Bracket(self.arena.alloc(BracketAccess { span, object, property }))
    }

    fn create_argument(&mut self, expression: Self::Expression, spread: bool) -> Self::Argument {
        Argument { expression, spread }
    }

    fn create_call(&mut self, span: TextSpan, callee: Self::Expression, arguments: Vec<Argument<'a>>) -> Self::Expression {
        match callee {
            Expression::Identifier(id) if id.name == self.eval => self.features |= CodeFeatures::EVAL,
            Expression::Super(_) => self.features |= CodeFeatures::SUPER_CALL,
            _ => {}
        }
        let arguments = self.list(arguments);
        Expression::Call(self.arena.alloc(CallExpression { span, callee, arguments }))
    }

    fn create_new(
        &mut self,
        span: TextSpan,
        callee: Self::Expression,
        arguments: Option<Vec<Argument<'a>>>,
    ) -> Self::Expression {
        let arguments = arguments.map(|arguments| self.list(arguments));
        Expression::New(self.arena.alloc(NewExpression { span, callee, arguments }))
    }

    fn create_unary(&mut self, span: TextSpan, operator: SyntaxKind, operand: Self::Expression) -> Self::Expression {
        Expression::Unary(self.arena.alloc(UnaryExpression { span, operator, operand }))
    }

    fn create_update(&mut self, span: TextSpan, operator: SyntaxKind, prefix: bool, operand: Self::Expression) -> Self::Expression {
        Expression::Update(self.arena.alloc(UpdateExpression { span, operator, prefix, operand }))
    }

    fn create_binary(
        &mut self,
        span: TextSpan,
        operator: SyntaxKind,
        left: Self::Expression,
        right: Self::Expression,
    ) -> Self::Expression {
        Expression::Binary(self.arena.alloc(BinaryExpression { span, operator, left, right }))
    }

    fn create_conditional(
        &mut self,
        span: TextSpan,
        test: Self::Expression,
        consequent: Self::Expression,
        alternate: Self::Expression,
    ) -> Self::Expression {
        Expression::Conditional(self.arena.alloc(ConditionalExpression { span, test, consequent, alternate }))
    }

    fn create_assignment(
        &mut self,
        span: TextSpan,
        operator: SyntaxKind,
        target: Self::Expression,
        value: Self::Expression,
    ) -> Self::Expression {
        Expression::Assignment(self.arena.alloc(AssignmentExpression { span, operator, target, value }))
    }

    fn create_destructuring_assignment(&mut self, span: TextSpan, pattern: Self::Pattern, value: Self::Expression) -> Self::Expression {
        Expression::DestructuringAssignment(self.arena.alloc(DestructuringAssignment { span, pattern, value }))
    }

    fn create_comma(&mut self, span: TextSpan, expressions: Vec<Expression<'a>>) -> Self::Expression {
        let expressions = self.list(expressions);
        Expression::Comma(self.arena.alloc(CommaExpression { span, expressions }))
    }

    fn create_yield(&mut self, span: TextSpan, argument: Option<Self::Expression>, delegate: bool) -> Self::Expression {
        Expression::Yield(self.arena.alloc(YieldExpression { span, argument, delegate }))
    }

    // ========================================================================
    // Patterns
    // ========================================================================

    fn create_binding_pattern(&mut self, id: Identifier) -> Self::Pattern {
        Pattern::Binding(id)
    }

    fn create_expression_pattern(&mut self, expression: Self::Expression) -> Self::Pattern {
        Pattern::Expression(expression)
    }

    fn create_pattern_element(&mut self, target: Self::Pattern, default: Option<Self::Expression>) -> Self::PatternElement {
        Some(PatternElement { target, default })
    }

    fn create_pattern_hole(&mut self) -> Self::PatternElement {
        None
    }

    fn create_array_pattern(
        &mut self,
        span: TextSpan,
        elements: Vec<Option<PatternElement<'a>>>,
        rest: Option<Self::Pattern>,
    ) -> Self::Pattern {
        let elements = self.list(elements);
        let rest = rest.map(|rest| &*self.arena.alloc(rest));
        Pattern::Array(self.arena.alloc(ArrayPattern { span, elements, rest }))
    }

    fn create_pattern_property(
        &mut self,
        key: Self::PropertyKey,
        target: Self::Pattern,
        default: Option<Self::Expression>,
        shorthand: bool,
    ) -> Self::PatternProperty {
        PatternProperty { key, target, default, shorthand }
    }

    fn create_object_pattern(&mut self, span: TextSpan, properties: Vec<PatternProperty<'a>>) -> Self::Pattern {
        let properties = self.list(properties);
        Pattern::Object(self.arena.alloc(ObjectPattern { span, properties }))
    }

    // ========================================================================
    // Functions and classes
    // ========================================================================

    fn create_parameter(&mut self, pattern: Self::Pattern, default: Option<Self::Expression>, rest: bool) -> Self::Parameter {
        Parameter { pattern, default, rest }
    }

    fn create_function(
        &mut self,
        span: TextSpan,
        name: Option<Identifier>,
        parameters: Vec<Parameter<'a>>,
        metadata: FunctionMetadata,
    ) -> Self::Function {
        let parameters = self.list(parameters);
        self.arena.alloc(FunctionNode { span, name, parameters, metadata })
    }

    fn create_class_element(
        &mut self,
        key: Self::PropertyKey,
        kind: PropertyKind,
        is_static: bool,
        function: Self::Function,
    ) -> Self::ClassElement {
        ClassElement { key, kind, is_static, function }
    }

    fn create_class(
        &mut self,
        span: TextSpan,
        name: Option<Identifier>,
        heritage: Option<Self::Expression>,
        constructor: Option<Self::Function>,
        elements: Vec<ClassElement<'a>>,
    ) -> Self::Class {
        let elements = self.list(elements);
        self.arena.alloc(ClassNode { span, name, heritage, constructor, elements })
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn create_block(&mut self, span: TextSpan, statements: Vec<Statement<'a>>, scope: Self::Environment) -> Self::Block {
        let statements = self.list(statements);
        self.arena.alloc(BlockStatement { span, statements, scope })
    }

    fn create_block_statement(&mut self, block: Self::Block) -> Self::Statement {
        Statement::Block(block)
    }

    fn create_expression_statement(&mut self, span: TextSpan, expression: Self::Expression) -> Self::Statement {
        Statement::Expression(ExpressionStatement { span, expression })
    }

    fn create_variable_declarator(
        &mut self,
        span: TextSpan,
        target: Self::Pattern,
        init: Option<Self::Expression>,
    ) -> Self::VariableDeclarator {
        VariableDeclarator { span, target, init }
    }

    fn create_variable_declaration(
        &mut self,
        span: TextSpan,
        kind: DeclarationKind,
        declarations: Vec<VariableDeclarator<'a>>,
    ) -> Self::VariableDeclaration {
        let declarations = self.list(declarations);
        self.arena.alloc(VariableStatement { span, kind, declarations })
    }

    fn create_variable_statement(&mut self, declaration: Self::VariableDeclaration) -> Self::Statement {
        Statement::Variable(declaration)
    }

    fn create_function_declaration(&mut self, function: Self::Function) -> Self::Statement {
        self.function_declarations.push(function);
        Statement::Function(function)
    }

    fn create_class_declaration(&mut self, class: Self::Class) -> Self::Statement {
        Statement::Class(class)
    }

    fn create_empty(&mut self, span: TextSpan) -> Self::Statement {
        Statement::Empty(span)
    }

    fn create_debugger(&mut self, span: TextSpan) -> Self::Statement {
        Statement::Debugger(span)
    }

    fn create_if(
        &mut self,
        span: TextSpan,
        test: Self::Expression,
        consequent: Self::Statement,
        alternate: Option<Self::Statement>,
    ) -> Self::Statement {
        Statement::If(self.arena.alloc(IfStatement { span, test, consequent, alternate }))
    }

    fn create_do_while(&mut self, span: TextSpan, body: Self::Statement, test: Self::Expression) -> Self::Statement {
        Statement::DoWhile(self.arena.alloc(WhileStatement { span, test, body }))
    }

    fn create_while(&mut self, span: TextSpan, test: Self::Expression, body: Self::Statement) -> Self::Statement {
        Statement::While(self.arena.alloc(WhileStatement { span, test, body }))
    }

    fn create_for_init_variables(&mut self, declaration: Self::VariableDeclaration) -> Self::ForInit {
        ForInit::Variables(declaration)
    }

    fn create_for_init_expression(&mut self, expression: Self::Expression) -> Self::ForInit {
        ForInit::Expression(expression)
    }

    fn create_for(
        &mut self,
        span: TextSpan,
        init: Option<Self::ForInit>,
        test: Option<Self::Expression>,
        update: Option<Self::Expression>,
        body: Self::Statement,
        scope: Self::Environment,
    ) -> Self::Statement {
        Statement::For(self.arena.alloc(ForStatement { span, init, test, update, body, scope }))
    }

    fn create_for_target_declaration(
        &mut self,
        kind: DeclarationKind,
        target: Self::Pattern,
        init: Option<Self::Expression>,
    ) -> Self::ForTarget {
        ForTarget::Declaration { kind, target, init }
    }

    fn create_for_target_pattern(&mut self, pattern: Self::Pattern) -> Self::ForTarget {
        ForTarget::Pattern(pattern)
    }

    fn create_for_in(
        &mut self,
        span: TextSpan,
        left: Self::ForTarget,
        right: Self::Expression,
        body: Self::Statement,
        scope: Self::Environment,
    ) -> Self::Statement {
        Statement::ForIn(self.arena.alloc(ForEnumeration { span, left, right, body, scope }))
    }

    fn create_for_of(
        &mut self,
        span: TextSpan,
        left: Self::ForTarget,
        right: Self::Expression,
        body: Self::Statement,
        scope: Self::Environment,
    ) -> Self::Statement {
        Statement::ForOf(self.arena.alloc(ForEnumeration { span, left, right, body, scope }))
    }

    fn create_continue(&mut self, span: TextSpan, label: Option<Identifier>) -> Self::Statement {
        Statement::Continue(JumpStatement { span, label })
    }

    fn create_break(&mut self, span: TextSpan, label: Option<Identifier>) -> Self::Statement {
        Statement::Break(JumpStatement { span, label })
    }

    fn create_return(&mut self, span: TextSpan, argument: Option<Self::Expression>) -> Self::Statement {
        Statement::Return(ReturnStatement { span, argument })
    }

    fn create_with(&mut self, span: TextSpan, object: Self::Expression, body: Self::Statement) -> Self::Statement {
        self.features |= CodeFeatures::WITH;
        Statement::With(self.arena.alloc(WithStatement { span, object, body }))
    }

    fn create_switch_clause(
        &mut self,
        span: TextSpan,
        test: Option<Self::Expression>,
        consequent: Vec<Statement<'a>>,
    ) -> Self::SwitchClause {
        let consequent = self.list(consequent);
        SwitchClause { span, test, consequent }
    }

    fn create_switch(
        &mut self,
        span: TextSpan,
        discriminant: Self::Expression,
        first_clauses: Vec<SwitchClause<'a>>,
        default_clause: Option<Self::SwitchClause>,
        second_clauses: Vec<SwitchClause<'a>>,
        scope: Self::Environment,
    ) -> Self::Statement {
        let first_clauses = self.list(first_clauses);
        let second_clauses = self.list(second_clauses);
        let default_clause = default_clause.map(|clause| &*self.arena.alloc(clause));
        Statement::Switch(self.arena.alloc(SwitchStatement {
            span,
            discriminant,
            first_clauses,
            default_clause,
            second_clauses,
            scope,
        }))
    }

    fn create_labeled(&mut self, span: TextSpan, label: Identifier, body: Self::Statement) -> Self::Statement {
        Statement::Labeled(self.arena.alloc(LabeledStatement { span, label, body }))
    }

    fn create_throw(&mut self, span: TextSpan, argument: Self::Expression) -> Self::Statement {
        Statement::Throw(ThrowStatement { span, argument })
    }

    fn create_catch(
        &mut self,
        span: TextSpan,
        parameter: Self::Pattern,
        body: Self::Block,
        scope: Self::Environment,
    ) -> Self::CatchClause {
        CatchClause { span, parameter, body, scope }
    }

    fn create_try(
        &mut self,
        span: TextSpan,
        block: Self::Block,
        handler: Option<Self::CatchClause>,
        finalizer: Option<Self::Block>,
    ) -> Self::Statement {
        Statement::Try(self.arena.alloc(TryStatement { span, block, handler, finalizer }))
    }

    // ========================================================================
    // Modules
    // ========================================================================

    fn create_import_specifier(
        &mut self,
        kind: ImportSpecifierKind,
        imported: InternedString,
        local: Identifier,
    ) -> Self::ImportSpecifier {
        ImportSpecifier { kind, imported, local }
    }

    fn create_import(&mut self, span: TextSpan, specifiers: Vec<ImportSpecifier>, module: StringLiteral) -> Self::Statement {
        let specifiers = self.list(specifiers);
        Statement::Import(self.arena.alloc(ImportDeclaration { span, specifiers, module }))
    }

    fn create_export_all(&mut self, span: TextSpan, module: StringLiteral) -> Self::Statement {
        Statement::Export(self.arena.alloc(ExportDeclaration::All { span, module }))
    }

    fn create_export_specifier(&mut self, local: Identifier, exported: InternedString) -> Self::ExportSpecifier {
        ExportSpecifier { local, exported }
    }

    fn create_export_named(
        &mut self,
        span: TextSpan,
        specifiers: Vec<ExportSpecifier>,
        module: Option<StringLiteral>,
    ) -> Self::Statement {
        let specifiers = self.list(specifiers);
        Statement::Export(self.arena.alloc(ExportDeclaration::Named { span, specifiers, module }))
    }

    fn create_export_default_function(&mut self, span: TextSpan, function: Self::Function, local: InternedString) -> Self::Statement {
        let value = ExportDefaultValue::Function(function);
        Statement::Export(self.arena.alloc(ExportDeclaration::Default { span, value, local }))
    }

    fn create_export_default_class(&mut self, span: TextSpan, class: Self::Class, local: InternedString) -> Self::Statement {
        let value = ExportDefaultValue::Class(class);
        Statement::Export(self.arena.alloc(ExportDeclaration::Default { span, value, local }))
    }

    fn create_export_default_expression(
        &mut self,
        span: TextSpan,
        expression: Self::Expression,
        local: InternedString,
    ) -> Self::Statement {
        let value = ExportDefaultValue::Expression(expression);
        Statement::Export(self.arena.alloc(ExportDeclaration::Default { span, value, local }))
    }

    fn create_export_declaration(&mut self, span: TextSpan, declaration: Self::Statement) -> Self::Statement {
        Statement::Export(self.arena.alloc(ExportDeclaration::Declaration { span, declaration }))
    }

    // ========================================================================
    // Queries
    // ========================================================================

    fn resolved_name(&self, expression: &Self::Expression) -> Option<InternedString> {
        match expression {
            Expression::Identifier(id) => Some(id.name),
            _ => None,
        }
    }

    fn is_object_literal(&self, expression: &Self::Expression) -> bool {
        matches!(expression, Expression::Object(_))
    }

    fn is_array_literal(&self, expression: &Self::Expression) -> bool {
        matches!(expression, Expression::Array(_))
    }

    fn is_assignment_location(&self, expression: &Self::Expression) -> bool {
        expression.is_assignment_location()
    }

    fn is_binding_node(&self, pattern: &Self::Pattern) -> bool {
        pattern.is_binding()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esparse_core::intern::StringInterner;

    #[test]
    fn test_eval_call_sets_feature() {
        let arena = Bump::new();
        let interner = StringInterner::new();
        let eval = interner.intern("eval");
        let mut builder = AstBuilder::new(&arena, eval, interner.intern("arguments"));
        let callee = builder.create_resolve(Identifier { span: TextSpan::new(0, 4), name: eval });
        builder.create_call(TextSpan::new(0, 6), callee, Vec::new());
        assert!(builder.features().contains(CodeFeatures::EVAL));
    }

    #[test]
    fn test_literals_count_as_constants() {
        let arena = Bump::new();
        let interner = StringInterner::new();
        let mut builder = AstBuilder::new(&arena, interner.intern("eval"), interner.intern("arguments"));
        builder.create_number(TextSpan::new(0, 1), 1.0);
        builder.create_null(TextSpan::new(2, 4));
        builder.create_regexp(TextSpan::new(7, 3), interner.intern("a"), interner.intern(""));
        assert_eq!(builder.num_constants(), 2);
    }
}
