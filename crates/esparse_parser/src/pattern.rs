//! Destructuring and binding patterns.
//!
//! One grammar serves declarations (`var [a, b] = c`), catch and function
//! parameters, and destructuring assignment (`[a.b, c] = d`). The
//! `DestructuringKind` decides what each leaf name does: declared names go
//! through the scope stack, expression targets must be assignable.

use crate::builder::{ListBuilder, TreeBuilder};
use crate::parser::Parser;
use crate::scope::DeclarationResult;
use esparse_ast::node::Identifier;
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::{DeclarationKind, VariableFlags};
use esparse_diagnostics::messages;
use esparse_diagnostics::ParseResult;
use tracing::trace;

/// What the names bound by a pattern become.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DestructuringKind {
    ToVariables,
    ToLet,
    ToConst,
    ToCatchParameters,
    ToParameters,
    ToExpressions,
}

impl From<DeclarationKind> for DestructuringKind {
    fn from(kind: DeclarationKind) -> Self {
        match kind {
            DeclarationKind::Var => DestructuringKind::ToVariables,
            DeclarationKind::Let => DestructuringKind::ToLet,
            DeclarationKind::Const => DestructuringKind::ToConst,
        }
    }
}

impl DestructuringKind {
    fn is_lexical(self) -> bool {
        matches!(self, DestructuringKind::ToLet | DestructuringKind::ToConst)
    }
}

impl<'a> Parser<'a> {
    // ========================================================================
    // Declaring names
    // ========================================================================

    /// Declare a plain binding name, such as `x` in `let x` or `catch (x)`.
    pub(crate) fn declare_binding(&mut self, id: Identifier, kind: DestructuringKind) -> ParseResult<()> {
        self.declare_binding_in(id, kind, false)
    }

    fn declare_binding_in(&mut self, id: Identifier, kind: DestructuringKind, in_pattern: bool) -> ParseResult<()> {
        let name = id.name;
        let strict = self.strict_mode();
        let text = self.resolve(name).to_string();

        if kind.is_lexical() && name == self.names.let_ {
            return Err(self.fail(&messages::LET_AS_LEXICAL_NAME, &[]));
        }

        match kind {
            DestructuringKind::ToVariables | DestructuringKind::ToLet | DestructuringKind::ToConst => {
                let declaration = match kind {
                    DestructuringKind::ToLet => DeclarationKind::Let,
                    DestructuringKind::ToConst => DeclarationKind::Const,
                    _ => DeclarationKind::Var,
                };
                let result = self.declare_variable(name, declaration, VariableFlags::NONE);
                if strict && result.contains(DeclarationResult::INVALID_STRICT_MODE) {
                    let message = if in_pattern { &messages::STRICT_DESTRUCTURING_NAME } else { &messages::STRICT_VARIABLE_NAME };
                    return Err(self.fail(message, &[&text]));
                }
                if result.contains(DeclarationResult::INVALID_DUPLICATE_DECLARATION) {
                    let message = match declaration {
                        DeclarationKind::Var => &messages::VAR_SHADOWS_LEXICAL,
                        DeclarationKind::Let => &messages::LET_DECLARED_TWICE,
                        DeclarationKind::Const => &messages::CONST_DECLARED_TWICE,
                    };
                    return Err(self.fail(message, &[&text]));
                }
                self.record_bound_name(name);
            }
            DestructuringKind::ToCatchParameters => {
                // The parameter sits one level below the statement holding
                // the `try`, so it never clashes with the function's `var`s.
                let result = self.scopes.declare_variable(
                    name,
                    DeclarationKind::Let,
                    VariableFlags::NONE,
                    self.statement_depth + 1,
                    &self.names,
                );
                if strict && result.contains(DeclarationResult::INVALID_STRICT_MODE) {
                    return Err(self.fail(&messages::STRICT_CATCH_VARIABLE, &[&text]));
                }
                if result.contains(DeclarationResult::INVALID_DUPLICATE_DECLARATION) {
                    return Err(self.fail(&messages::LEXICAL_DECLARED_TWICE, &[&text]));
                }
            }
            DestructuringKind::ToParameters => {
                let result = self.scopes.current_mut().declare_parameter(name, &self.names);
                let is_duplicate = result.contains(DeclarationResult::INVALID_DUPLICATE_DECLARATION);
                if strict && result.contains(DeclarationResult::INVALID_STRICT_MODE) {
                    if is_duplicate {
                        return Err(self.fail(&messages::STRICT_DUPLICATE_PARAMETER, &[&text]));
                    }
                    let message = if in_pattern { &messages::STRICT_DESTRUCTURED_PARAMETER } else { &messages::STRICT_PARAMETER_NAME };
                    return Err(self.fail(message, &[&text]));
                }
                if is_duplicate && self.duplicate_parameter.is_none() {
                    self.duplicate_parameter = Some(name);
                }
            }
            DestructuringKind::ToExpressions => {
                self.check_strict_assignment_target(name)?;
                self.use_variable(name);
                self.scopes.current_mut().set_written(name);
            }
        }
        Ok(())
    }

    // ========================================================================
    // Patterns
    // ========================================================================

    /// Parse an identifier, array pattern or object pattern binding names
    /// of the given kind.
    pub(crate) fn parse_binding_pattern<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        kind: DestructuringKind,
    ) -> ParseResult<B::Pattern> {
        self.enter()?;
        let result = self.parse_destructuring_pattern(b, kind);
        self.leave();
        result
    }

    /// Parse a destructuring assignment target. A pattern that does not
    /// parse is reported as `None` so the caller can re-parse the text as
    /// an expression; only fatal errors propagate.
    pub(crate) fn parse_assignment_pattern<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<Option<B::Pattern>> {
        match self.parse_binding_pattern(b, DestructuringKind::ToExpressions) {
            Ok(pattern) => Ok(Some(pattern)),
            Err(error) if self.has_fatal_error() => Err(error),
            Err(error) => {
                trace!(message = %error.message, "not an assignment pattern");
                Ok(None)
            }
        }
    }

    fn parse_destructuring_pattern<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        kind: DestructuringKind,
    ) -> ParseResult<B::Pattern> {
        match self.token.kind {
            SyntaxKind::OpenBracketToken => self.parse_array_pattern(b, kind),
            SyntaxKind::OpenBraceToken => self.parse_object_pattern(b, kind),
            _ if kind == DestructuringKind::ToExpressions => self.parse_assignment_element(b),
            _ if self.match_spec_identifier() => {
                let id = self.current_identifier();
                self.next();
                self.declare_binding_in(id, kind, true)?;
                Ok(b.create_binding_pattern(id))
            }
            _ => {
                self.fail_if_keyword("variable name")?;
                Err(self.fail(&messages::CANNOT_PARSE_PATTERN, &[]))
            }
        }
    }

    /// A leaf of a destructuring assignment: any assignable expression.
    fn parse_assignment_element<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Pattern> {
        let expression = self.parse_member_expression(b)?;
        if !b.is_assignment_location(&expression) {
            return Err(self.fail(&messages::INVALID_DESTRUCTURING_TARGET, &[]));
        }
        if let Some(name) = b.resolved_name(&expression) {
            self.check_strict_assignment_target(name)?;
            self.scopes.current_mut().set_written(name);
        }
        Ok(b.create_expression_pattern(expression))
    }

    fn parse_array_pattern<B: TreeBuilder<'a>>(&mut self, b: &mut B, kind: DestructuringKind) -> ParseResult<B::Pattern> {
        let start = self.token_start();
        self.next();
        let mut elements = B::List::<B::PatternElement>::default();
        let mut rest = None;
        loop {
            if self.consume(SyntaxKind::CloseBracketToken) {
                break;
            }
            if self.consume(SyntaxKind::CommaToken) {
                elements.push(b.create_pattern_hole());
                continue;
            }
            if self.consume(SyntaxKind::DotDotDotToken) {
                let target = if kind == DestructuringKind::ToExpressions {
                    self.parse_binding_pattern(b, kind)?
                } else if self.match_spec_identifier() {
                    let id = self.current_identifier();
                    self.next();
                    self.declare_binding_in(id, kind, true)?;
                    b.create_binding_pattern(id)
                } else {
                    return Err(self.fail(&messages::REST_ELEMENT_NEEDS_IDENTIFIER, &[]));
                };
                rest = Some(target);
                self.expect(SyntaxKind::CloseBracketToken, &messages::EXPECTED_CLOSE_BRACKET_AFTER_REST, &[])?;
                break;
            }

            let target = self.parse_binding_pattern(b, kind)?;
            let default = self.parse_default_value_for_destructuring_pattern(b)?;
            elements.push(b.create_pattern_element(target, default));

            if self.consume(SyntaxKind::CloseBracketToken) {
                break;
            }
            self.expect(SyntaxKind::CommaToken, &messages::EXPECTED_CLOSE_BRACKET_OR_COMMA_IN_PATTERN, &[])?;
        }
        Ok(b.create_array_pattern(self.span_from(start), elements, rest))
    }

    fn parse_object_pattern<B: TreeBuilder<'a>>(&mut self, b: &mut B, kind: DestructuringKind) -> ParseResult<B::Pattern> {
        let start = self.token_start();
        self.next();
        let mut properties = B::List::<B::PatternProperty>::default();
        while !self.consume(SyntaxKind::CloseBraceToken) {
            let property = self.parse_pattern_property(b, kind)?;
            properties.push(property);
            if self.consume(SyntaxKind::CloseBraceToken) {
                break;
            }
            self.expect(SyntaxKind::CommaToken, &messages::EXPECTED_CLOSE_BRACE_IN_PROPERTY_PATTERN, &[])?;
        }
        Ok(b.create_object_pattern(self.span_from(start), properties))
    }

    fn parse_pattern_property<B: TreeBuilder<'a>>(&mut self, b: &mut B, kind: DestructuringKind) -> ParseResult<B::PatternProperty> {
        if self.token.kind.is_identifier_or_keyword() {
            let id = self.current_identifier();
            if self.peek_kind() == SyntaxKind::ColonToken {
                self.next();
                self.next();
                let key = b.create_identifier_key(id.name);
                let target = self.parse_binding_pattern(b, kind)?;
                let default = self.parse_default_value_for_destructuring_pattern(b)?;
                return Ok(b.create_pattern_property(key, target, default, false));
            }

            // `{x}` and `{x = 1}` bind the key itself.
            if !self.match_spec_identifier() {
                return Err(self.shorthand_name_error());
            }
            self.next();
            self.declare_binding_in(id, kind, true)?;
            let target = if kind == DestructuringKind::ToExpressions {
                let resolve = b.create_resolve(id);
                b.create_expression_pattern(resolve)
            } else {
                b.create_binding_pattern(id)
            };
            let key = b.create_identifier_key(id.name);
            let default = self.parse_default_value_for_destructuring_pattern(b)?;
            return Ok(b.create_pattern_property(key, target, default, true));
        }

        let key = match self.token.kind {
            SyntaxKind::StringLiteral => {
                let name = self.token.string().unwrap_or_else(|| self.interner.intern(""));
                self.next();
                b.create_string_key(name)
            }
            SyntaxKind::NumericLiteral => {
                let value = self.token.number().unwrap_or(f64::NAN);
                self.next();
                b.create_number_key(value)
            }
            SyntaxKind::OpenBracketToken => {
                self.next();
                let allows_in = std::mem::replace(&mut self.allows_in, true);
                let expression = self.parse_assignment_expression(b);
                self.allows_in = allows_in;
                let expression = expression?;
                self.expect(SyntaxKind::CloseBracketToken, &messages::EXPECTED_CLOSE_BRACKET_AFTER_COMPUTED_NAME, &[])?;
                b.create_computed_key(expression)
            }
            _ => return Err(self.fail(&messages::CANNOT_PARSE_PATTERN, &[])),
        };
        self.expect(SyntaxKind::ColonToken, &messages::EXPECTED_COLON_IN_PROPERTY_PATTERN, &[])?;
        let target = self.parse_binding_pattern(b, kind)?;
        let default = self.parse_default_value_for_destructuring_pattern(b)?;
        Ok(b.create_pattern_property(key, target, default, false))
    }

    fn shorthand_name_error(&self) -> esparse_diagnostics::ParseError {
        let text = self.scanner.token_text(&self.token);
        let kind = self.token.kind;
        let message = if kind.is_strict_reserved_word() || kind == SyntaxKind::EnumKeyword {
            if self.strict_mode() {
                &messages::SHORTHAND_STRICT_RESERVED_NAME
            } else {
                &messages::SHORTHAND_RESERVED_NAME
            }
        } else {
            &messages::SHORTHAND_KEYWORD
        };
        self.fail(message, &[&text])
    }

    /// `= value` after a pattern element.
    pub(crate) fn parse_default_value_for_destructuring_pattern<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
    ) -> ParseResult<Option<B::Expression>> {
        if !self.consume(SyntaxKind::EqualsToken) {
            return Ok(None);
        }
        let allows_in = std::mem::replace(&mut self.allows_in, true);
        let value = self.parse_assignment_expression(b);
        self.allows_in = allows_in;
        value.map(Some)
    }
}
