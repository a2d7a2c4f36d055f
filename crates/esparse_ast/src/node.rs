//! AST node definitions.
//!
//! Nodes live in a bump arena and refer to their children through `&'a`
//! references and `&'a [T]` slices. Function nodes carry parameters and
//! `FunctionMetadata` but no body: bodies are validated when the enclosing
//! code is parsed and built on demand by re-parsing the function.

use crate::syntax_kind::SyntaxKind;
use crate::types::*;
use esparse_core::intern::InternedString;
use esparse_core::text::TextSpan;

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

// ============================================================================
// Names and literals
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Identifier {
    pub span: TextSpan,
    pub name: InternedString,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StringLiteral {
    pub span: TextSpan,
    /// Cooked value.
    pub value: InternedString,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericLiteral {
    pub span: TextSpan,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BooleanLiteral {
    pub span: TextSpan,
    pub value: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegExpLiteral {
    pub span: TextSpan,
    pub pattern: InternedString,
    pub flags: InternedString,
}

/// One literal piece of a template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateString {
    pub span: TextSpan,
    pub cooked: InternedString,
    pub raw: InternedString,
}

/// `quasis.len() == expressions.len() + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateLiteral<'a> {
    pub span: TextSpan,
    pub quasis: NodeList<'a, TemplateString>,
    pub expressions: NodeList<'a, Expression<'a>>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expression<'a> {
    Identifier(Identifier),
    This(TextSpan),
    Super(TextSpan),
    NewTarget(TextSpan),
    Null(TextSpan),
    Boolean(BooleanLiteral),
    Number(NumericLiteral),
    String(StringLiteral),
    RegExp(RegExpLiteral),
    Template(&'a TemplateLiteral<'a>),
    TaggedTemplate(&'a TaggedTemplate<'a>),
    Array(&'a ArrayLiteral<'a>),
    Object(&'a ObjectLiteral<'a>),
    Function(&'a FunctionNode<'a>),
    Arrow(&'a FunctionNode<'a>),
    Class(&'a ClassNode<'a>),
    Dot(&'a DotAccess<'a>),
    Bracket(&'a BracketAccess<'a>),
    Call(&'a CallExpression<'a>),
    New(&'a NewExpression<'a>),
    Unary(&'a UnaryExpression<'a>),
    Update(&'a UpdateExpression<'a>),
    Binary(&'a BinaryExpression<'a>),
    Conditional(&'a ConditionalExpression<'a>),
    Assignment(&'a AssignmentExpression<'a>),
    DestructuringAssignment(&'a DestructuringAssignment<'a>),
    Comma(&'a CommaExpression<'a>),
    Yield(&'a YieldExpression<'a>),
}

impl<'a> Expression<'a> {
    pub fn span(&self) -> TextSpan {
        match self {
            Expression::Identifier(n) => n.span,
            Expression::This(span)
            | Expression::Super(span)
            | Expression::NewTarget(span)
            | Expression::Null(span) => *span,
            Expression::Boolean(n) => n.span,
            Expression::Number(n) => n.span,
            Expression::String(n) => n.span,
            Expression::RegExp(n) => n.span,
            Expression::Template(n) => n.span,
            Expression::TaggedTemplate(n) => n.span,
            Expression::Array(n) => n.span,
            Expression::Object(n) => n.span,
            Expression::Function(n) | Expression::Arrow(n) => n.span,
            Expression::Class(n) => n.span,
            Expression::Dot(n) => n.span,
            Expression::Bracket(n) => n.span,
            Expression::Call(n) => n.span,
            Expression::New(n) => n.span,
            Expression::Unary(n) => n.span,
            Expression::Update(n) => n.span,
            Expression::Binary(n) => n.span,
            Expression::Conditional(n) => n.span,
            Expression::Assignment(n) => n.span,
            Expression::DestructuringAssignment(n) => n.span,
            Expression::Comma(n) => n.span,
            Expression::Yield(n) => n.span,
        }
    }

    /// Identifier, property access or element access.
    pub fn is_assignment_location(&self) -> bool {
        matches!(
            self,
            Expression::Identifier(_) | Expression::Dot(_) | Expression::Bracket(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrayElement<'a> {
    Hole(TextSpan),
    Expression(Expression<'a>),
    Spread(Expression<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayLiteral<'a> {
    pub span: TextSpan,
    pub elements: NodeList<'a, ArrayElement<'a>>,
}

/// A property key in an object literal, class body or object pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyKey<'a> {
    Identifier(InternedString),
    String(InternedString),
    Number(f64),
    Computed(&'a Expression<'a>),
}

impl<'a> PropertyKey<'a> {
    /// The key's name when it is known without evaluation.
    pub fn static_name(&self) -> Option<InternedString> {
        match self {
            PropertyKey::Identifier(name) | PropertyKey::String(name) => Some(*name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// `key: value`
    Value,
    /// `{ key }`
    Shorthand,
    Method,
    Getter,
    Setter,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Property<'a> {
    pub span: TextSpan,
    pub key: PropertyKey<'a>,
    pub value: Expression<'a>,
    pub kind: PropertyKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectLiteral<'a> {
    pub span: TextSpan,
    pub properties: NodeList<'a, Property<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotAccess<'a> {
    pub span: TextSpan,
    pub object: Expression<'a>,
    pub property: Identifier,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketAccess<'a> {
    pub span: TextSpan,
    pub object: Expression<'a>,
    pub property: Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Argument<'a> {
    pub expression: Expression<'a>,
    pub spread: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpression<'a> {
    pub span: TextSpan,
    pub callee: Expression<'a>,
    pub arguments: NodeList<'a, Argument<'a>>,
}

/// `new callee(args)`; `arguments` is `None` for `new callee` without parens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewExpression<'a> {
    pub span: TextSpan,
    pub callee: Expression<'a>,
    pub arguments: Option<NodeList<'a, Argument<'a>>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedTemplate<'a> {
    pub span: TextSpan,
    pub tag: Expression<'a>,
    pub template: &'a TemplateLiteral<'a>,
}

/// `!`, `~`, unary `+`/`-`, `typeof`, `void`, `delete`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryExpression<'a> {
    pub span: TextSpan,
    pub operator: SyntaxKind,
    pub operand: Expression<'a>,
}

/// Prefix or postfix `++`/`--`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateExpression<'a> {
    pub span: TextSpan,
    pub operator: SyntaxKind,
    pub prefix: bool,
    pub operand: Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpression<'a> {
    pub span: TextSpan,
    pub operator: SyntaxKind,
    pub left: Expression<'a>,
    pub right: Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionalExpression<'a> {
    pub span: TextSpan,
    pub test: Expression<'a>,
    pub consequent: Expression<'a>,
    pub alternate: Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignmentExpression<'a> {
    pub span: TextSpan,
    pub operator: SyntaxKind,
    pub target: Expression<'a>,
    pub value: Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DestructuringAssignment<'a> {
    pub span: TextSpan,
    pub pattern: Pattern<'a>,
    pub value: Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommaExpression<'a> {
    pub span: TextSpan,
    pub expressions: NodeList<'a, Expression<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldExpression<'a> {
    pub span: TextSpan,
    pub argument: Option<Expression<'a>>,
    pub delegate: bool,
}

// ============================================================================
// Patterns
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pattern<'a> {
    /// A declared name (variables, parameters, catch parameters).
    Binding(Identifier),
    /// An assignable expression inside a destructuring assignment.
    Expression(Expression<'a>),
    Array(&'a ArrayPattern<'a>),
    Object(&'a ObjectPattern<'a>),
}

impl<'a> Pattern<'a> {
    pub fn span(&self) -> TextSpan {
        match self {
            Pattern::Binding(id) => id.span,
            Pattern::Expression(expr) => expr.span(),
            Pattern::Array(p) => p.span,
            Pattern::Object(p) => p.span,
        }
    }

    #[inline]
    pub fn is_binding(&self) -> bool {
        matches!(self, Pattern::Binding(_))
    }

    /// Collect every name this pattern binds, in source order.
    pub fn bound_names(&self, out: &mut Vec<InternedString>) {
        match self {
            Pattern::Binding(id) => out.push(id.name),
            Pattern::Expression(_) => {}
            Pattern::Array(array) => {
                for element in array.elements.iter().flatten() {
                    element.target.bound_names(out);
                }
                if let Some(rest) = array.rest {
                    rest.bound_names(out);
                }
            }
            Pattern::Object(object) => {
                for property in object.properties {
                    property.target.bound_names(out);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternElement<'a> {
    pub target: Pattern<'a>,
    pub default: Option<Expression<'a>>,
}

/// `None` elements are holes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayPattern<'a> {
    pub span: TextSpan,
    pub elements: NodeList<'a, Option<PatternElement<'a>>>,
    pub rest: Option<&'a Pattern<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternProperty<'a> {
    pub key: PropertyKey<'a>,
    pub target: Pattern<'a>,
    pub default: Option<Expression<'a>>,
    pub shorthand: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectPattern<'a> {
    pub span: TextSpan,
    pub properties: NodeList<'a, PatternProperty<'a>>,
}

// ============================================================================
// Functions and classes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameter<'a> {
    pub pattern: Pattern<'a>,
    pub default: Option<Expression<'a>>,
    pub rest: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionNode<'a> {
    pub span: TextSpan,
    pub name: Option<Identifier>,
    pub parameters: NodeList<'a, Parameter<'a>>,
    pub metadata: FunctionMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassElement<'a> {
    pub key: PropertyKey<'a>,
    pub kind: PropertyKind,
    pub is_static: bool,
    pub function: &'a FunctionNode<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassNode<'a> {
    pub span: TextSpan,
    pub name: Option<Identifier>,
    pub heritage: Option<Expression<'a>>,
    pub constructor: Option<&'a FunctionNode<'a>>,
    pub elements: NodeList<'a, ClassElement<'a>>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Statement<'a> {
    Block(&'a BlockStatement<'a>),
    Expression(ExpressionStatement<'a>),
    Variable(&'a VariableStatement<'a>),
    Function(&'a FunctionNode<'a>),
    Class(&'a ClassNode<'a>),
    Empty(TextSpan),
    Debugger(TextSpan),
    If(&'a IfStatement<'a>),
    DoWhile(&'a WhileStatement<'a>),
    While(&'a WhileStatement<'a>),
    For(&'a ForStatement<'a>),
    ForIn(&'a ForEnumeration<'a>),
    ForOf(&'a ForEnumeration<'a>),
    Continue(JumpStatement),
    Break(JumpStatement),
    Return(ReturnStatement<'a>),
    With(&'a WithStatement<'a>),
    Switch(&'a SwitchStatement<'a>),
    Labeled(&'a LabeledStatement<'a>),
    Throw(ThrowStatement<'a>),
    Try(&'a TryStatement<'a>),
    Import(&'a ImportDeclaration<'a>),
    Export(&'a ExportDeclaration<'a>),
}

impl<'a> Statement<'a> {
    pub fn span(&self) -> TextSpan {
        match self {
            Statement::Block(n) => n.span,
            Statement::Expression(n) => n.span,
            Statement::Variable(n) => n.span,
            Statement::Function(n) => n.span,
            Statement::Class(n) => n.span,
            Statement::Empty(span) | Statement::Debugger(span) => *span,
            Statement::If(n) => n.span,
            Statement::DoWhile(n) | Statement::While(n) => n.span,
            Statement::For(n) => n.span,
            Statement::ForIn(n) | Statement::ForOf(n) => n.span,
            Statement::Continue(n) | Statement::Break(n) => n.span,
            Statement::Return(n) => n.span,
            Statement::With(n) => n.span,
            Statement::Switch(n) => n.span,
            Statement::Labeled(n) => n.span,
            Statement::Throw(n) => n.span,
            Statement::Try(n) => n.span,
            Statement::Import(n) => n.span,
            Statement::Export(n) => n.span(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStatement<'a> {
    pub span: TextSpan,
    pub statements: NodeList<'a, Statement<'a>>,
    pub scope: LexicalEnvironment<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpressionStatement<'a> {
    pub span: TextSpan,
    pub expression: Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableDeclarator<'a> {
    pub span: TextSpan,
    pub target: Pattern<'a>,
    pub init: Option<Expression<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableStatement<'a> {
    pub span: TextSpan,
    pub kind: DeclarationKind,
    pub declarations: NodeList<'a, VariableDeclarator<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IfStatement<'a> {
    pub span: TextSpan,
    pub test: Expression<'a>,
    pub consequent: Statement<'a>,
    pub alternate: Option<Statement<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhileStatement<'a> {
    pub span: TextSpan,
    pub test: Expression<'a>,
    pub body: Statement<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForInit<'a> {
    Variables(&'a VariableStatement<'a>),
    Expression(Expression<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForStatement<'a> {
    pub span: TextSpan,
    pub init: Option<ForInit<'a>>,
    pub test: Option<Expression<'a>>,
    pub update: Option<Expression<'a>>,
    pub body: Statement<'a>,
    /// Bindings of a `let`/`const` head.
    pub scope: LexicalEnvironment<'a>,
}

/// The left side of `for (... in/of ...)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForTarget<'a> {
    /// A declaration with a single binding; `var` heads may carry a sloppy
    /// mode `for-in` initializer.
    Declaration {
        kind: DeclarationKind,
        target: Pattern<'a>,
        init: Option<Expression<'a>>,
    },
    /// A reference or destructuring pattern.
    Pattern(Pattern<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForEnumeration<'a> {
    pub span: TextSpan,
    pub left: ForTarget<'a>,
    pub right: Expression<'a>,
    pub body: Statement<'a>,
    pub scope: LexicalEnvironment<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpStatement {
    pub span: TextSpan,
    pub label: Option<Identifier>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnStatement<'a> {
    pub span: TextSpan,
    pub argument: Option<Expression<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithStatement<'a> {
    pub span: TextSpan,
    pub object: Expression<'a>,
    pub body: Statement<'a>,
}

/// `test` is `None` for the `default` clause.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchClause<'a> {
    pub span: TextSpan,
    pub test: Option<Expression<'a>>,
    pub consequent: NodeList<'a, Statement<'a>>,
}

/// Clauses are kept in the two runs around `default`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchStatement<'a> {
    pub span: TextSpan,
    pub discriminant: Expression<'a>,
    pub first_clauses: NodeList<'a, SwitchClause<'a>>,
    pub default_clause: Option<&'a SwitchClause<'a>>,
    pub second_clauses: NodeList<'a, SwitchClause<'a>>,
    pub scope: LexicalEnvironment<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledStatement<'a> {
    pub span: TextSpan,
    pub label: Identifier,
    pub body: Statement<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrowStatement<'a> {
    pub span: TextSpan,
    pub argument: Expression<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchClause<'a> {
    pub span: TextSpan,
    pub parameter: Pattern<'a>,
    pub body: &'a BlockStatement<'a>,
    pub scope: LexicalEnvironment<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TryStatement<'a> {
    pub span: TextSpan,
    pub block: &'a BlockStatement<'a>,
    pub handler: Option<CatchClause<'a>>,
    pub finalizer: Option<&'a BlockStatement<'a>>,
}

// ============================================================================
// Modules
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportSpecifierKind {
    /// `import d from "m"`
    Default,
    /// `import * as ns from "m"`
    Namespace,
    /// `import { a as b } from "m"`
    Named,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportSpecifier {
    pub kind: ImportSpecifierKind,
    pub imported: InternedString,
    pub local: Identifier,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportDeclaration<'a> {
    pub span: TextSpan,
    pub specifiers: NodeList<'a, ImportSpecifier>,
    pub module: StringLiteral,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportSpecifier {
    pub local: Identifier,
    pub exported: InternedString,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportDefaultValue<'a> {
    Function(&'a FunctionNode<'a>),
    Class(&'a ClassNode<'a>),
    Expression(Expression<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportDeclaration<'a> {
    /// `export * from "m"`
    All { span: TextSpan, module: StringLiteral },
    /// `export { a, b as c } [from "m"]`
    Named {
        span: TextSpan,
        specifiers: NodeList<'a, ExportSpecifier>,
        module: Option<StringLiteral>,
    },
    /// `export default ...`; `local` is the binding the value is stored in.
    Default {
        span: TextSpan,
        value: ExportDefaultValue<'a>,
        local: InternedString,
    },
    /// `export var|let|const|function|class ...`
    Declaration { span: TextSpan, declaration: Statement<'a> },
}

impl<'a> ExportDeclaration<'a> {
    pub fn span(&self) -> TextSpan {
        match self {
            ExportDeclaration::All { span, .. }
            | ExportDeclaration::Named { span, .. }
            | ExportDeclaration::Default { span, .. }
            | ExportDeclaration::Declaration { span, .. } => *span,
        }
    }
}

// ============================================================================
// Module record
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportEntry {
    pub module_request: InternedString,
    pub kind: ImportSpecifierKind,
    pub import_name: InternedString,
    pub local_name: InternedString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportEntryKind {
    /// Exports a binding declared in this module.
    Local,
    /// Re-exports a name of another module.
    Indirect,
    /// `export * from "m"`
    Star,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportEntry {
    pub kind: ExportEntryKind,
    pub export_name: Option<InternedString>,
    pub local_name: Option<InternedString>,
    pub module_request: Option<InternedString>,
}

/// Imports and exports of a module, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleRecord {
    pub requested_modules: Vec<InternedString>,
    pub import_entries: Vec<ImportEntry>,
    pub export_entries: Vec<ExportEntry>,
}

impl ModuleRecord {
    pub fn add_requested_module(&mut self, module: InternedString) {
        if !self.requested_modules.contains(&module) {
            self.requested_modules.push(module);
        }
    }
}

// ============================================================================
// Program
// ============================================================================

/// The result of parsing a script, a module or a single function.
#[derive(Debug, Clone, PartialEq)]
pub struct Program<'a> {
    pub span: TextSpan,
    pub statements: NodeList<'a, Statement<'a>>,
    /// Hoisted function declarations of the top-level scope.
    pub function_declarations: NodeList<'a, &'a FunctionNode<'a>>,
    pub var_declarations: LexicalEnvironment<'a>,
    pub lexical_variables: LexicalEnvironment<'a>,
    /// Declared names that a nested function refers to.
    pub captured_variables: LexicalEnvironment<'a>,
    pub features: CodeFeatures,
    pub num_constants: u32,
    pub strict_mode: bool,
    pub module: Option<ModuleRecord>,
}

impl<'a> Program<'a> {
    #[inline]
    pub fn is_module(&self) -> bool {
        self.module.is_some()
    }

    pub fn has_feature(&self, feature: CodeFeatures) -> bool {
        self.features.contains(feature)
    }
}

/// A single function re-parsed from its recorded metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFunction<'a> {
    pub metadata: FunctionMetadata,
    pub parameters: NodeList<'a, Parameter<'a>>,
    /// The body, with the function's own declarations and features.
    pub body: Program<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use esparse_core::intern::StringInterner;

    #[test]
    fn test_bound_names_skip_property_keys() {
        let interner = StringInterner::new();
        let a = interner.intern("a");
        let b = interner.intern("b");
        let c = interner.intern("c");
        let d = interner.intern("d");
        let id = |name| Identifier { span: TextSpan::default(), name };

        let rest = Pattern::Binding(id(d));
        let inner = ArrayPattern {
            span: TextSpan::default(),
            elements: &[Some(PatternElement { target: Pattern::Binding(id(c)), default: None })],
            rest: Some(&rest),
        };
        let properties = [
            PatternProperty {
                key: PropertyKey::Identifier(a),
                target: Pattern::Binding(id(a)),
                default: None,
                shorthand: true,
            },
            PatternProperty {
                key: PropertyKey::Identifier(b),
                target: Pattern::Array(&inner),
                default: None,
                shorthand: false,
            },
        ];
        let object = ObjectPattern { span: TextSpan::default(), properties: &properties };

        let mut names = Vec::new();
        Pattern::Object(&object).bound_names(&mut names);
        assert_eq!(names, vec![a, c, d]);
    }

    #[test]
    fn test_requested_modules_are_unique() {
        let interner = StringInterner::new();
        let m = interner.intern("m");
        let mut record = ModuleRecord::default();
        record.add_requested_module(m);
        record.add_requested_module(m);
        assert_eq!(record.requested_modules.len(), 1);
    }
}
