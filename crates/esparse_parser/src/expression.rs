//! Expressions.
//!
//! Assignment chains, binary operators and unary prefixes are parsed with
//! explicit stacks rather than one recursive call per operator, so long
//! operator chains cost no stack depth. Recursion happens only where the
//! grammar nests: parenthesized expressions, literals, arguments and
//! function bodies, and each such entry passes the nesting guard.

use crate::builder::{ListBuilder, TreeBuilder};
use crate::parser::Parser;
use crate::precedence::{get_binary_operator_precedence, is_unary_operator, OperatorPrecedence};
use esparse_ast::node::{PropertyKind, StringLiteral};
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::{SourceParseMode, TokenFlags};
use esparse_core::intern::InternedString;
use esparse_core::text::{TextPos, TextSpan};
use esparse_diagnostics::messages;
use esparse_diagnostics::ParseResult;
use esparse_scanner::TokenValue;
use tracing::trace;

/// A parsed property name and, for non-computed names, its text.
pub(crate) struct PropertyName<K> {
    pub key: K,
    pub name: Option<InternedString>,
}

fn update_description(operator: SyntaxKind, prefix: bool) -> &'static str {
    match (operator, prefix) {
        (SyntaxKind::PlusPlusToken, true) => "prefix-increment",
        (SyntaxKind::MinusMinusToken, true) => "prefix-decrement",
        (SyntaxKind::PlusPlusToken, false) => "postfix-increment",
        _ => "postfix-decrement",
    }
}

impl<'a> Parser<'a> {
    // ========================================================================
    // Comma and assignment
    // ========================================================================

    pub(crate) fn parse_expression<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        let start = self.token_start();
        let first = self.parse_assignment_expression(b)?;
        if !self.at(SyntaxKind::CommaToken) {
            return Ok(first);
        }
        let mut expressions = B::List::<B::Expression>::default();
        expressions.push(first);
        while self.consume(SyntaxKind::CommaToken) {
            self.state.non_trivial_expression_count += 1;
            expressions.push(self.parse_assignment_expression(b)?);
        }
        Ok(b.create_comma(self.span_from(start), expressions))
    }

    pub(crate) fn parse_assignment_expression<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        self.enter()?;
        let result = self.parse_assignment_expression_inner(b);
        self.leave();
        result
    }

    fn parse_assignment_expression_inner<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        let start = self.token_start();
        if self.at(SyntaxKind::YieldKeyword) && self.scopes.current().is_generator {
            return self.parse_yield_expression(b);
        }
        if self.is_arrow_function_parameters()? {
            return self.parse_arrow_function_expression(b);
        }

        let save_point = self.create_save_point();
        let starts_pattern = self.at(SyntaxKind::OpenBraceToken) || self.at(SyntaxKind::OpenBracketToken);
        let lhs = match self.parse_conditional_expression(b) {
            Ok(lhs) => lhs,
            Err(error) if starts_pattern && !self.has_fatal_error() => {
                trace!(message = %error.message, "re-parsing literal as a destructuring target");
                self.restore_save_point(save_point);
                return self.parse_destructuring_assignment(b, start);
            }
            Err(error) => return Err(error),
        };
        if starts_pattern && self.at(SyntaxKind::EqualsToken) && b.is_object_or_array_literal(&lhs) {
            self.restore_save_point(save_point);
            return self.parse_destructuring_assignment(b, start);
        }
        if !self.token.kind.is_assignment_operator() {
            return Ok(lhs);
        }

        // `a = b += c` is folded right to left once the chain ends.
        let mut pending: Vec<(TextPos, B::Expression, SyntaxKind)> = Vec::new();
        let mut target = lhs;
        let mut target_start = start;
        let value = loop {
            let operator = self.token.kind;
            if !b.is_assignment_location(&target) {
                let text = self.scanner.token_text(&self.token);
                return Err(self.fail(&messages::ASSIGNMENT_TO_NON_REFERENCE, &[&text]));
            }
            if let Some(name) = b.resolved_name(&target) {
                self.check_strict_assignment_target(name)?;
                self.scopes.current_mut().set_written(name);
            }
            self.state.non_trivial_expression_count += 1;
            self.next();
            pending.push((target_start, target, operator));

            target_start = self.token_start();
            let continues_chain = !(self.at(SyntaxKind::OpenBraceToken)
                || self.at(SyntaxKind::OpenBracketToken)
                || (self.at(SyntaxKind::YieldKeyword) && self.scopes.current().is_generator)
                || self.is_arrow_function_parameters()?);
            if !continues_chain {
                break self.parse_assignment_expression(b)?;
            }
            let operand = self.parse_conditional_expression(b)?;
            if !self.token.kind.is_assignment_operator() {
                break operand;
            }
            target = operand;
        };

        let mut result = value;
        while let Some((target_start, target, operator)) = pending.pop() {
            result = b.create_assignment(self.span_from(target_start), operator, target, result);
        }
        Ok(result)
    }

    /// `[a, b] = c` or `{a, b: c} = d`.
    fn parse_destructuring_assignment<B: TreeBuilder<'a>>(&mut self, b: &mut B, start: TextPos) -> ParseResult<B::Expression> {
        let pattern = self.parse_binding_pattern(b, crate::pattern::DestructuringKind::ToExpressions)?;
        self.expect(SyntaxKind::EqualsToken, &messages::EXPECTED_ASSIGNMENT_PATTERN_EQUALS, &[])?;
        self.state.non_trivial_expression_count += 1;
        let value = self.parse_assignment_expression(b)?;
        Ok(b.create_destructuring_assignment(self.span_from(start), pattern, value))
    }

    /// Reject `eval` and `arguments` as assignment targets in strict code.
    pub(crate) fn check_strict_assignment_target(&self, name: InternedString) -> ParseResult<()> {
        if !self.strict_mode() {
            return Ok(());
        }
        if name == self.names.eval {
            return Err(self.fail(&messages::STRICT_MODIFY_EVAL, &[]));
        }
        if name == self.names.arguments {
            return Err(self.fail(&messages::STRICT_MODIFY_ARGUMENTS, &[]));
        }
        Ok(())
    }

    fn parse_yield_expression<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        if self.state.function_parse_phase == crate::state::FunctionParsePhase::Parameters {
            return Err(self.fail(&messages::YIELD_IN_PARAMETERS, &[]));
        }
        let start = self.token_start();
        self.next();
        self.state.non_trivial_expression_count += 1;

        let ends_yield = self.prev_terminator()
            || matches!(
                self.token.kind,
                SyntaxKind::CloseParenToken
                    | SyntaxKind::CloseBracketToken
                    | SyntaxKind::CloseBraceToken
                    | SyntaxKind::CommaToken
                    | SyntaxKind::SemicolonToken
                    | SyntaxKind::ColonToken
                    | SyntaxKind::EndOfFileToken
            );
        if ends_yield {
            return Ok(b.create_yield(self.span_from(start), None, false));
        }
        let delegate = self.consume(SyntaxKind::AsteriskToken);
        let argument = self.parse_assignment_expression(b)?;
        Ok(b.create_yield(self.span_from(start), Some(argument), delegate))
    }

    // ========================================================================
    // Conditional and binary
    // ========================================================================

    fn parse_conditional_expression<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        let start = self.token_start();
        let test = self.parse_binary_expression(b)?;
        if !self.at(SyntaxKind::QuestionToken) {
            return Ok(test);
        }
        self.next();
        self.state.non_trivial_expression_count += 1;

        let allows_in = std::mem::replace(&mut self.allows_in, true);
        let consequent = self.parse_assignment_expression(b);
        self.allows_in = allows_in;
        let consequent = consequent?;

        self.expect(SyntaxKind::ColonToken, &messages::EXPECTED_COLON_IN_TERNARY, &[])?;
        let alternate = self.parse_assignment_expression(b)?;
        Ok(b.create_conditional(self.span_from(start), test, consequent, alternate))
    }

    /// Operator-precedence parsing over an operand stack and an operator
    /// stack. An operator reduces the stack while it does not bind tighter
    /// than the operator on top, which makes every level left-associative.
    fn parse_binary_expression<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        let start = self.token_start();
        let first = self.parse_unary_expression(b)?;
        if get_binary_operator_precedence(self.token.kind, self.allows_in) == OperatorPrecedence::None {
            return Ok(first);
        }

        let mut operands: Vec<(TextSpan, B::Expression)> = vec![(self.span_from(start), first)];
        let mut operators: Vec<(SyntaxKind, OperatorPrecedence)> = Vec::new();
        loop {
            let precedence = get_binary_operator_precedence(self.token.kind, self.allows_in);
            if precedence == OperatorPrecedence::None {
                break;
            }
            let operator = self.token.kind;
            self.state.non_trivial_expression_count += 1;
            self.next();

            while operators.last().is_some_and(|&(_, top)| precedence <= top) {
                Self::reduce_binary(b, &mut operands, &mut operators);
            }
            operators.push((operator, precedence));

            let operand_start = self.token_start();
            let operand = self.parse_unary_expression(b)?;
            operands.push((self.span_from(operand_start), operand));
        }
        while !operators.is_empty() {
            Self::reduce_binary(b, &mut operands, &mut operators);
        }
        Ok(operands.pop().map(|(_, expression)| expression).unwrap_or(first))
    }

    fn reduce_binary<B: TreeBuilder<'a>>(
        b: &mut B,
        operands: &mut Vec<(TextSpan, B::Expression)>,
        operators: &mut Vec<(SyntaxKind, OperatorPrecedence)>,
    ) {
        let (Some((operator, _)), Some((right_span, right)), Some((left_span, left))) =
            (operators.pop(), operands.pop(), operands.pop())
        else {
            return;
        };
        let span = TextSpan::from_bounds(left_span.start, right_span.end());
        let combined = b.create_binary(span, operator, left, right);
        operands.push((span, combined));
    }

    // ========================================================================
    // Unary and postfix
    // ========================================================================

    fn parse_unary_expression<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        let mut prefixes: Vec<(TextPos, SyntaxKind)> = Vec::new();
        while is_unary_operator(self.token.kind) {
            prefixes.push((self.token_start(), self.token.kind));
            self.state.non_trivial_expression_count += 1;
            self.next();
        }

        let start = self.token_start();
        let mut expression = self.parse_member_expression(b)?;

        if matches!(self.token.kind, SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken) && !self.prev_terminator() {
            let operator = self.token.kind;
            self.check_update_target(b, &expression, operator, false)?;
            self.state.non_trivial_expression_count += 1;
            self.next();
            expression = b.create_update(self.span_from(start), operator, false, expression);
        }

        while let Some((prefix_start, operator)) = prefixes.pop() {
            let span = self.span_from(prefix_start);
            expression = match operator {
                SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken => {
                    self.check_update_target(b, &expression, operator, true)?;
                    b.create_update(span, operator, true, expression)
                }
                SyntaxKind::DeleteKeyword => {
                    if self.strict_mode() {
                        if let Some(name) = b.resolved_name(&expression) {
                            let text = self.resolve(name).to_string();
                            return Err(self.fail(&messages::STRICT_DELETE_UNQUALIFIED, &[&text]));
                        }
                    }
                    b.create_unary(span, operator, expression)
                }
                _ => b.create_unary(span, operator, expression),
            };
        }
        Ok(expression)
    }

    fn check_update_target<B: TreeBuilder<'a>>(
        &mut self,
        b: &B,
        expression: &B::Expression,
        operator: SyntaxKind,
        prefix: bool,
    ) -> ParseResult<()> {
        if !b.is_assignment_location(expression) {
            return Err(self.fail(&messages::OPERATOR_REQUIRES_REFERENCE, &[update_description(operator, prefix)]));
        }
        if let Some(name) = b.resolved_name(expression) {
            self.check_strict_assignment_target(name)?;
            self.scopes.current_mut().set_written(name);
        }
        Ok(())
    }

    // ========================================================================
    // Member expressions
    // ========================================================================

    /// A primary expression followed by `.name`, `[expr]`, call arguments
    /// and tagged templates, with any leading `new`s.
    pub(crate) fn parse_member_expression<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        self.enter()?;
        let result = self.parse_member_expression_inner(b);
        self.leave();
        result
    }

    fn parse_member_expression_inner<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        let start = self.token_start();
        let mut new_count = 0u32;
        let mut base = None;
        while self.at(SyntaxKind::NewKeyword) {
            if self.peek_kind() == SyntaxKind::DotToken {
                base = Some(self.parse_new_target(b)?);
                break;
            }
            self.next();
            new_count += 1;
        }

        let mut is_super = false;
        let mut base = match base {
            Some(base) => base,
            None if self.at(SyntaxKind::SuperKeyword) => {
                is_super = true;
                self.parse_super(b, new_count > 0)?
            }
            None => self.parse_primary_expression(b)?,
        };

        loop {
            match self.token.kind {
                SyntaxKind::OpenBracketToken => {
                    self.next();
                    let allows_in = std::mem::replace(&mut self.allows_in, true);
                    let property = self.parse_expression(b);
                    self.allows_in = allows_in;
                    let property = property?;
                    self.expect(SyntaxKind::CloseBracketToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &["]", "end", "subscript expression"])?;
                    self.state.non_trivial_expression_count += 1;
                    base = b.create_bracket(self.span_from(start), base, property);
                }
                SyntaxKind::OpenParenToken => {
                    let arguments = self.parse_arguments(b)?;
                    self.state.non_trivial_expression_count += 1;
                    if new_count > 0 {
                        new_count -= 1;
                        base = b.create_new(self.span_from(start), base, Some(arguments));
                    } else {
                        base = b.create_call(self.span_from(start), base, arguments);
                    }
                }
                SyntaxKind::DotToken => {
                    self.next();
                    if !self.token.kind.is_identifier_or_keyword() {
                        return Err(self.fail(&messages::EXPECTED_PROPERTY_NAME_AFTER_DOT, &[]));
                    }
                    let property = self.current_identifier();
                    self.next();
                    self.state.non_trivial_expression_count += 1;
                    base = b.create_dot(self.span_from(start), base, property);
                }
                SyntaxKind::NoSubstitutionTemplate | SyntaxKind::TemplateHead => {
                    if is_super {
                        return Err(self.fail(&messages::SUPER_TAGGED_TEMPLATE, &[]));
                    }
                    let template = self.parse_template_literal(b)?;
                    self.state.non_trivial_expression_count += 1;
                    base = b.create_tagged_template(self.span_from(start), base, template);
                }
                _ => break,
            }
            is_super = false;
        }

        while new_count > 0 {
            new_count -= 1;
            base = b.create_new(self.span_from(start), base, None);
        }
        Ok(base)
    }

    fn parse_new_target<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        let start = self.token_start();
        self.next();
        self.next();
        if !self.at_contextual(self.names.target) {
            return Err(self.fail(&messages::NEW_DOT_NOT_TARGET, &[]));
        }
        if !self.scopes.current().is_function {
            return Err(self.fail(&messages::NEW_TARGET_OUTSIDE_FUNCTION, &[]));
        }
        self.next();
        Ok(b.create_new_target(self.span_from(start)))
    }

    /// `super` must be called or have a property read off it. The enclosing
    /// non-arrow function records which; its end checks that it may.
    fn parse_super<B: TreeBuilder<'a>>(&mut self, b: &mut B, after_new: bool) -> ParseResult<B::Expression> {
        let span = self.token.span();
        let index = self.scopes.closest_non_arrow_function_index(self.scopes.len());
        if !self.scopes.get(index).is_function {
            return Err(self.fail(&messages::SUPER_OUTSIDE_FUNCTION, &[]));
        }
        self.next();
        let scope = self.scopes.get_mut(index);
        match self.token.kind {
            SyntaxKind::OpenParenToken if after_new => return Err(self.fail(&messages::NEW_WITH_SUPER, &[])),
            SyntaxKind::OpenParenToken => {
                scope.has_direct_super = true;
                scope.needs_super_binding = true;
            }
            SyntaxKind::DotToken | SyntaxKind::OpenBracketToken => scope.needs_super_binding = true,
            SyntaxKind::NoSubstitutionTemplate | SyntaxKind::TemplateHead => {
                return Err(self.fail(&messages::SUPER_TAGGED_TEMPLATE, &[]));
            }
            _ => return Err(self.fail(&messages::SUPER_REFERENCE, &[])),
        }
        Ok(b.create_super(span))
    }

    fn parse_arguments<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::List<B::Argument>> {
        self.next();
        let allows_in = std::mem::replace(&mut self.allows_in, true);
        let arguments = self.parse_argument_list(b);
        self.allows_in = allows_in;
        arguments
    }

    fn parse_argument_list<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::List<B::Argument>> {
        let mut arguments = B::List::<B::Argument>::default();
        while !self.consume(SyntaxKind::CloseParenToken) {
            let spread = self.consume(SyntaxKind::DotDotDotToken);
            let argument = self.parse_assignment_expression(b)?;
            if self.at(SyntaxKind::DotDotDotToken) {
                return Err(self.fail(&messages::SPREAD_AFTER_ARGUMENT, &[]));
            }
            arguments.push(b.create_argument(argument, spread));
            if self.consume(SyntaxKind::CloseParenToken) {
                break;
            }
            self.expect(SyntaxKind::CommaToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &[")", "end", "argument list"])?;
        }
        Ok(arguments)
    }

    // ========================================================================
    // Primary expressions
    // ========================================================================

    fn parse_primary_expression<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        let span = self.token.span();
        match self.token.kind {
            SyntaxKind::FunctionKeyword => self.parse_function_expression(b),
            SyntaxKind::ClassKeyword => self.parse_class_expression(b),
            SyntaxKind::OpenBraceToken => self.parse_object_literal(b),
            SyntaxKind::OpenBracketToken => self.parse_array_literal(b),
            SyntaxKind::OpenParenToken => {
                self.next();
                let allows_in = std::mem::replace(&mut self.allows_in, true);
                let expression = self.parse_expression(b);
                self.allows_in = allows_in;
                let expression = expression?;
                self.expect(SyntaxKind::CloseParenToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &[")", "end", "parenthesized expression"])?;
                Ok(expression)
            }
            SyntaxKind::ThisKeyword => {
                self.next();
                Ok(b.create_this(span))
            }
            SyntaxKind::NullKeyword => {
                self.next();
                Ok(b.create_null(span))
            }
            SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword => {
                let value = self.at(SyntaxKind::TrueKeyword);
                self.next();
                Ok(b.create_boolean(span, value))
            }
            SyntaxKind::NumericLiteral => {
                let value = self.token.number().unwrap_or(f64::NAN);
                self.next();
                Ok(b.create_number(span, value))
            }
            SyntaxKind::StringLiteral => {
                let value = self.token.string().unwrap_or_else(|| self.interner.intern(""));
                self.next();
                Ok(b.create_string(StringLiteral { span, value }))
            }
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => self.parse_regexp(b),
            SyntaxKind::NoSubstitutionTemplate | SyntaxKind::TemplateHead => {
                let template = self.parse_template_literal(b)?;
                Ok(b.create_template_expression(template))
            }
            _ if self.match_spec_identifier() => {
                let id = self.current_identifier();
                self.next();
                self.use_variable(id.name);
                Ok(b.create_resolve(id))
            }
            SyntaxKind::YieldKeyword if !self.scopes.current().is_generator => {
                Err(self.fail(&messages::YIELD_OUTSIDE_GENERATOR, &[]))
            }
            _ => Err(self.unexpected()),
        }
    }

    fn parse_regexp<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        let slash = self.token;
        let Some(token) = self.scanner.rescan_regexp(&slash) else {
            return Err(self.fail(&messages::INVALID_REGULAR_EXPRESSION, &[]));
        };
        self.token = token;
        let TokenValue::RegExp { pattern, flags } = token.value else {
            return Err(self.fail(&messages::INVALID_REGULAR_EXPRESSION, &[]));
        };
        self.next();
        Ok(b.create_regexp(token.span(), pattern, flags))
    }

    /// A template literal from its first piece to its tail. The `}` ending
    /// each substitution is re-scanned as the next template piece.
    pub(crate) fn parse_template_literal<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Template> {
        let start = self.token_start();
        let mut quasis = B::List::<B::TemplateString>::default();
        let mut expressions = B::List::<B::Expression>::default();
        loop {
            let TokenValue::Template { cooked, raw, .. } = self.token.value else {
                return Err(self.unexpected());
            };
            quasis.push(b.create_template_string(self.token.span(), cooked, raw));
            match self.token.kind {
                SyntaxKind::NoSubstitutionTemplate | SyntaxKind::TemplateTail => {
                    self.next();
                    break;
                }
                SyntaxKind::TemplateHead | SyntaxKind::TemplateMiddle => {
                    self.next();
                    if self.at(SyntaxKind::CloseBraceToken) {
                        return Err(self.fail(&messages::EMPTY_TEMPLATE_EXPRESSION, &[]));
                    }
                    let allows_in = std::mem::replace(&mut self.allows_in, true);
                    let expression = self.parse_expression(b);
                    self.allows_in = allows_in;
                    expressions.push(expression?);
                    self.require(SyntaxKind::CloseBraceToken, &messages::EXPECTED_TEMPLATE_CLOSE_BRACE, &[])?;
                    let close_brace = self.token;
                    self.token = self.scanner.rescan_template_continuation(&close_brace);
                }
                _ => return Err(self.unexpected()),
            }
        }
        Ok(b.create_template(self.span_from(start), quasis, expressions))
    }

    fn parse_array_literal<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        let start = self.token_start();
        self.next();
        let allows_in = std::mem::replace(&mut self.allows_in, true);
        let elements = self.parse_array_elements(b);
        self.allows_in = allows_in;
        let elements = elements?;
        Ok(b.create_array(self.span_from(start), elements))
    }

    fn parse_array_elements<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::List<B::ArrayElement>> {
        let mut elements = B::List::<B::ArrayElement>::default();
        loop {
            if self.consume(SyntaxKind::CloseBracketToken) {
                return Ok(elements);
            }
            if self.at(SyntaxKind::CommaToken) {
                elements.push(b.create_array_hole(self.token.span()));
                self.next();
                continue;
            }
            let spread = self.consume(SyntaxKind::DotDotDotToken);
            let element = self.parse_assignment_expression(b)?;
            if self.at(SyntaxKind::DotDotDotToken) {
                return Err(self.fail(&messages::SPREAD_AFTER_ELEMENT, &[]));
            }
            elements.push(if spread { b.create_array_spread(element) } else { b.create_array_element(element) });
            if self.consume(SyntaxKind::CloseBracketToken) {
                return Ok(elements);
            }
            self.expect(SyntaxKind::CommaToken, &messages::EXPECTED_ARRAY_ELEMENT_END, &[])?;
        }
    }

    // ========================================================================
    // Object literals
    // ========================================================================

    fn parse_object_literal<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        let start = self.token_start();
        self.next();
        let allows_in = std::mem::replace(&mut self.allows_in, true);
        let properties = self.parse_object_properties(b);
        self.allows_in = allows_in;
        let properties = properties?;
        Ok(b.create_object(self.span_from(start), properties))
    }

    fn parse_object_properties<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::List<B::Property>> {
        let mut properties = B::List::<B::Property>::default();
        let check_proto = !self.options.syntax_already_validated;
        let mut has_proto = false;
        while !self.consume(SyntaxKind::CloseBraceToken) {
            let (property, sets_proto) = self.parse_property(b)?;
            if sets_proto && check_proto {
                if has_proto {
                    return Err(self.fail(&messages::DUPLICATE_PROTO, &[]));
                }
                has_proto = true;
            }
            properties.push(property);
            if self.consume(SyntaxKind::CloseBraceToken) {
                break;
            }
            self.expect(SyntaxKind::CommaToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &["}", "end", "object literal"])?;
        }
        Ok(properties)
    }

    /// One property of an object literal. The flag reports a `__proto__:`
    /// property, which may appear only once.
    fn parse_property<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<(B::Property, bool)> {
        let start = self.token_start();

        if self.consume(SyntaxKind::AsteriskToken) {
            let name_start = self.token_start();
            let name = self.parse_property_name(b)?;
            if !self.at(SyntaxKind::OpenParenToken) {
                return Err(self.fail(&messages::EXPECTED_PARENTHESIS_FOR_GENERATOR, &[]));
            }
            let function = self.parse_method(b, SourceParseMode::GeneratorWrapperFunction, name_start, name.name)?;
            let value = b.create_function_expression(function);
            return Ok((b.create_property(self.span_from(start), name.key, value, PropertyKind::Method), false));
        }

        if self.token.kind.is_identifier_or_keyword() {
            let id = self.current_identifier();
            let is_identifier = self.match_spec_identifier();
            let plain_word = self.at(SyntaxKind::Identifier) && !self.token.flags.contains(TokenFlags::CONTAINS_ESCAPE);
            self.next();

            if plain_word && (id.name == self.names.get || id.name == self.names.set) && self.starts_property_name() {
                let mode = if id.name == self.names.get { SourceParseMode::Getter } else { SourceParseMode::Setter };
                let (key, function) = self.parse_accessor(b, mode)?;
                let kind = if mode == SourceParseMode::Getter { PropertyKind::Getter } else { PropertyKind::Setter };
                let value = b.create_function_expression(function);
                return Ok((b.create_property(self.span_from(start), key, value, kind), false));
            }

            match self.token.kind {
                SyntaxKind::ColonToken => {
                    self.next();
                    let value = self.parse_assignment_expression(b)?;
                    let key = b.create_identifier_key(id.name);
                    let sets_proto = id.name == self.names.proto;
                    Ok((b.create_property(self.span_from(start), key, value, PropertyKind::Value), sets_proto))
                }
                SyntaxKind::OpenParenToken => {
                    let function = self.parse_method(b, SourceParseMode::Method, start, Some(id.name))?;
                    let key = b.create_identifier_key(id.name);
                    let value = b.create_function_expression(function);
                    Ok((b.create_property(self.span_from(start), key, value, PropertyKind::Method), false))
                }
                // `{a = 1}` only makes sense once re-parsed as a pattern.
                SyntaxKind::EqualsToken => Err(self.fail(&messages::SHORTHAND_INITIALIZER_OUTSIDE_PATTERN, &[])),
                _ => {
                    if !is_identifier {
                        let text = self.resolve(id.name).to_string();
                        return Err(self.fail(&messages::EXPECTED_COLON_AFTER_NAMED_PROPERTY, &[&text]));
                    }
                    self.use_variable(id.name);
                    let key = b.create_identifier_key(id.name);
                    let value = b.create_resolve(id);
                    Ok((b.create_property(self.span_from(start), key, value, PropertyKind::Shorthand), false))
                }
            }
        } else {
            let name = self.parse_property_name(b)?;
            if self.at(SyntaxKind::OpenParenToken) {
                let function = self.parse_method(b, SourceParseMode::Method, start, name.name)?;
                let value = b.create_function_expression(function);
                return Ok((b.create_property(self.span_from(start), name.key, value, PropertyKind::Method), false));
            }
            self.expect(SyntaxKind::ColonToken, &messages::EXPECTED_COLON_AFTER_PROPERTY_NAME, &[])?;
            let value = self.parse_assignment_expression(b)?;
            let sets_proto = name.name == Some(self.names.proto);
            Ok((b.create_property(self.span_from(start), name.key, value, PropertyKind::Value), sets_proto))
        }
    }

    /// Whether the current token can start a property name, which makes a
    /// preceding `get` or `set` an accessor prefix.
    pub(crate) fn starts_property_name(&self) -> bool {
        self.token.kind.is_identifier_or_keyword()
            || matches!(
                self.token.kind,
                SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral | SyntaxKind::OpenBracketToken
            )
    }

    /// An identifier, keyword, string, number or `[computed]` property name.
    pub(crate) fn parse_property_name<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<PropertyName<B::PropertyKey>> {
        match self.token.kind {
            kind if kind.is_identifier_or_keyword() => {
                let id = self.current_identifier();
                self.next();
                Ok(PropertyName { key: b.create_identifier_key(id.name), name: Some(id.name) })
            }
            SyntaxKind::StringLiteral => {
                let name = self.token.string().unwrap_or_else(|| self.interner.intern(""));
                self.next();
                Ok(PropertyName { key: b.create_string_key(name), name: Some(name) })
            }
            SyntaxKind::NumericLiteral => {
                let value = self.token.number().unwrap_or(f64::NAN);
                self.next();
                Ok(PropertyName { key: b.create_number_key(value), name: None })
            }
            SyntaxKind::OpenBracketToken => {
                self.next();
                let allows_in = std::mem::replace(&mut self.allows_in, true);
                let expression = self.parse_assignment_expression(b);
                self.allows_in = allows_in;
                let expression = expression?;
                self.expect(SyntaxKind::CloseBracketToken, &messages::EXPECTED_CLOSE_BRACKET_AFTER_COMPUTED_NAME, &[])?;
                Ok(PropertyName { key: b.create_computed_key(expression), name: None })
            }
            _ => Err(self.fail(&messages::EXPECTED_PROPERTY_NAME, &[])),
        }
    }

    /// The name and function of a `get name() {}` or `set name(v) {}`
    /// accessor; the `get` or `set` has been consumed.
    pub(crate) fn parse_accessor<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        mode: SourceParseMode,
    ) -> ParseResult<(B::PropertyKey, B::Function)> {
        let name_start = self.token_start();
        let name = self.parse_property_name(b)?;
        if !self.at(SyntaxKind::OpenParenToken) {
            let message = if mode == SourceParseMode::Getter {
                &messages::EXPECTED_GETTER_PARAMETERS
            } else {
                &messages::EXPECTED_SETTER_PARAMETERS
            };
            return Err(self.fail(message, &[]));
        }
        let function = self.parse_method(b, mode, name_start, name.name)?;
        Ok((name.key, function))
    }
}
