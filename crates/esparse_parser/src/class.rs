//! Class declarations and expressions.

use crate::builder::{ListBuilder, TreeBuilder};
use crate::function::FunctionHead;
use crate::parser::Parser;
use crate::scope::DeclarationResult;
use esparse_ast::node::{Identifier, PropertyKind};
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::{ConstructorKind, DeclarationKind, SourceParseMode, SuperBinding, VariableFlags};
use esparse_core::intern::InternedString;
use esparse_core::text::TextPos;
use esparse_diagnostics::messages;
use esparse_diagnostics::ParseResult;

impl<'a> Parser<'a> {
    /// `class Name [extends Base] { ... }` as a statement. The name is
    /// bound like `let`.
    pub(crate) fn parse_class_declaration<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let (class, _) = self.parse_class_declaration_node(b, false)?;
        Ok(b.create_class_declaration(class))
    }

    /// A class declaration and the name it binds, which only
    /// `export default class` may leave out.
    pub(crate) fn parse_class_declaration_node<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        allow_anonymous: bool,
    ) -> ParseResult<(B::Class, Option<InternedString>)> {
        let start = self.token_start();
        self.next();
        let Some(id) = self.class_name()? else {
            if allow_anonymous {
                let class = self.parse_class(b, start, None)?;
                return Ok((class, None));
            }
            return Err(self.fail(&messages::CLASS_NEEDS_NAME, &[]));
        };
        let result = self.declare_variable(id.name, DeclarationKind::Let, VariableFlags::CLASS);
        if result.contains(DeclarationResult::INVALID_DUPLICATE_DECLARATION) {
            let text = self.resolve(id.name).to_string();
            return Err(self.fail(&messages::CLASS_DECLARED_TWICE, &[&text]));
        }
        self.record_bound_name(id.name);
        let class = self.parse_class(b, start, Some(id))?;
        Ok((class, Some(id.name)))
    }

    pub(crate) fn parse_class_expression<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        let start = self.token_start();
        self.next();
        let name = self.class_name()?;
        let class = self.parse_class(b, start, name)?;
        self.state.non_trivial_expression_count += 1;
        Ok(b.create_class_expression(class))
    }

    /// The optional name after `class`, left as the current token. Class
    /// code is strict, so names a strict scope rejects are rejected here
    /// whatever the surrounding code.
    fn class_name(&self) -> ParseResult<Option<Identifier>> {
        match self.token.kind {
            SyntaxKind::Identifier => {
                let id = self.current_identifier();
                if self.names.is_eval_or_arguments(id.name) {
                    let text = self.resolve(id.name).to_string();
                    return Err(self.fail(&messages::INVALID_CLASS_NAME, &[&text]));
                }
                Ok(Some(id))
            }
            SyntaxKind::LetKeyword | SyntaxKind::YieldKeyword => {
                let text = self.scanner.token_text(&self.token);
                Err(self.fail(&messages::INVALID_CLASS_NAME, &[&text]))
            }
            kind if kind.is_strict_reserved_word() => {
                let text = self.scanner.token_text(&self.token);
                Err(self.fail(&messages::INVALID_CLASS_NAME, &[&text]))
            }
            _ => Ok(None),
        }
    }

    /// Everything after `class`: the optional name (still the current
    /// token), the heritage and the body.
    fn parse_class<B: TreeBuilder<'a>>(&mut self, b: &mut B, start: TextPos, name: Option<Identifier>) -> ParseResult<B::Class> {
        let index = self.push_lexical_scope();
        self.scopes.get_mut(index).strict_mode = true;
        if let Some(id) = name {
            // The class body sees its own name as an immutable binding.
            self.scopes
                .get_mut(index)
                .lexical_variables
                .insert(id.name, VariableFlags::CONST | VariableFlags::CLASS);
            self.next();
        }

        let heritage = if self.consume(SyntaxKind::ExtendsKeyword) {
            Some(self.parse_member_expression(b)?)
        } else {
            None
        };
        let constructor_kind = if heritage.is_some() { ConstructorKind::Derived } else { ConstructorKind::Base };

        self.expect(SyntaxKind::OpenBraceToken, &messages::EXPECTED_CLASS_BODY, &[])?;
        let mut constructor = None;
        let mut elements = B::List::<B::ClassElement>::default();
        loop {
            match self.token.kind {
                SyntaxKind::CloseBraceToken => break,
                SyntaxKind::EndOfFileToken => return Err(self.fail(&messages::EXPECTED_CLASS_BODY_END, &[])),
                SyntaxKind::SemicolonToken => {
                    self.next();
                    continue;
                }
                _ => {}
            }
            let is_static = self.at(SyntaxKind::StaticKeyword) && self.peek_kind() != SyntaxKind::OpenParenToken;
            if is_static {
                self.next();
            }

            let (key, kind, function) = if self.consume(SyntaxKind::AsteriskToken) {
                let name_start = self.token_start();
                let property = self.parse_property_name(b)?;
                if property.name == Some(self.names.constructor) && !is_static {
                    return Err(self.fail(&messages::GENERATOR_NAMED_CONSTRUCTOR, &[]));
                }
                if property.name == Some(self.names.prototype) && is_static {
                    return Err(self.fail(&messages::GENERATOR_NAMED_PROTOTYPE, &[]));
                }
                if !self.at(SyntaxKind::OpenParenToken) {
                    return Err(self.fail(&messages::EXPECTED_PARENTHESIS_FOR_GENERATOR, &[]));
                }
                let function = self.parse_class_method(b, SourceParseMode::GeneratorWrapperFunction, name_start, property.name, ConstructorKind::None)?;
                (property.key, PropertyKind::Method, function)
            } else if (self.at_contextual(self.names.get) || self.at_contextual(self.names.set)) && self.is_accessor_prefix() {
                let mode = if self.at_contextual(self.names.get) { SourceParseMode::Getter } else { SourceParseMode::Setter };
                self.next();
                let name_start = self.token_start();
                let property = self.parse_property_name(b)?;
                if property.name == Some(self.names.constructor) && !is_static {
                    return Err(self.fail(&messages::ACCESSOR_CONSTRUCTOR, &[]));
                }
                if property.name == Some(self.names.prototype) && is_static {
                    return Err(self.fail(&messages::STATIC_PROTOTYPE, &[]));
                }
                let (message, kind) = if mode == SourceParseMode::Getter {
                    (&messages::EXPECTED_GETTER_PARAMETERS, PropertyKind::Getter)
                } else {
                    (&messages::EXPECTED_SETTER_PARAMETERS, PropertyKind::Setter)
                };
                self.require(SyntaxKind::OpenParenToken, message, &[])?;
                let function = self.parse_class_method(b, mode, name_start, property.name, ConstructorKind::None)?;
                (property.key, kind, function)
            } else {
                let name_start = self.token_start();
                let property = self.parse_property_name(b)?;
                if !self.at(SyntaxKind::OpenParenToken) {
                    return Err(self.unexpected());
                }
                if property.name == Some(self.names.constructor) && !is_static {
                    if constructor.is_some() {
                        return Err(self.fail(&messages::MULTIPLE_CONSTRUCTORS, &[]));
                    }
                    let function = self.parse_class_method(b, SourceParseMode::Method, name_start, property.name, constructor_kind)?;
                    constructor = Some(function);
                    continue;
                }
                if property.name == Some(self.names.prototype) && is_static {
                    return Err(self.fail(&messages::STATIC_PROTOTYPE, &[]));
                }
                let function = self.parse_class_method(b, SourceParseMode::Method, name_start, property.name, ConstructorKind::None)?;
                (property.key, PropertyKind::Method, function)
            };
            elements.push(b.create_class_element(key, kind, is_static, function));
        }

        self.pop_scope(B::NEEDS_FREE_VARIABLE_INFO);
        self.next();
        Ok(b.create_class(self.span_from(start), name, heritage, constructor, elements))
    }

    /// Whether the current `get` or `set` prefixes an accessor rather than
    /// naming a method.
    fn is_accessor_prefix(&mut self) -> bool {
        let save_point = self.create_save_point();
        self.next();
        let is_prefix = self.starts_property_name();
        self.restore_save_point(save_point);
        is_prefix
    }

    fn parse_class_method<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        mode: SourceParseMode,
        name_start: TextPos,
        name: Option<InternedString>,
        constructor_kind: ConstructorKind,
    ) -> ParseResult<B::Function> {
        let span = self.span_from(name_start);
        let head = FunctionHead {
            name: name.map(|name| Identifier { span, name }),
            name_start,
            constructor_kind,
            super_binding: SuperBinding::Needed,
            ..FunctionHead::new(mode, name_start)
        };
        self.parse_function_info(b, head)
    }
}
