//! Functions: declarations, expressions, methods, arrows and generators.
//!
//! Whatever builder parses the surrounding code, a function body is always
//! parsed with the `SyntaxChecker`; the surrounding builder only receives
//! the function's `FunctionMetadata`, from which `Parser::parse_function`
//! can build the body later. Bodies long enough to be worth it are recorded
//! in the function cache and skipped by later parses of the same source.

use crate::builder::{ListBuilder, SyntaxChecker, TreeBuilder};
use crate::cache::{CachedFunctionInfo, MIN_ARROW_EXPRESSION_BODY_LENGTH, MIN_BLOCK_BODY_LENGTH};
use crate::parser::Parser;
use crate::pattern::DestructuringKind;
use crate::scope::DeclarationResult;
use crate::state::{FunctionParsePhase, ParserState};
use esparse_ast::node::Identifier;
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::{
    ConstructorKind, DeclarationKind, FunctionMetadata, SourceParseMode, SuperBinding, VariableFlags,
};
use esparse_core::intern::InternedString;
use esparse_core::text::{TextPos, TextSpan};
use esparse_diagnostics::messages;
use esparse_diagnostics::ParseResult;
use esparse_scanner::{ScannerState, Token};
use std::rc::Rc;
use tracing::trace;

/// Number of synthetic parameters of a generator body: the generator
/// object, its state, the resumed value and the resume mode.
pub const GENERATOR_BODY_PARAMETER_COUNT: u32 = 4;

/// What the production that found a function knows about it before its
/// parameter list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FunctionHead {
    pub mode: SourceParseMode,
    /// Start of `function`, of the method name or of an arrow's parameters.
    pub function_start: TextPos,
    pub name: Option<Identifier>,
    pub name_start: TextPos,
    pub constructor_kind: ConstructorKind,
    pub super_binding: SuperBinding,
    /// Function expressions bind their own name inside their scope.
    pub binds_callee: bool,
}

impl FunctionHead {
    pub fn new(mode: SourceParseMode, function_start: TextPos) -> Self {
        Self {
            mode,
            function_start,
            name: None,
            name_start: function_start,
            constructor_kind: ConstructorKind::None,
            super_binding: SuperBinding::NotNeeded,
            binds_callee: false,
        }
    }
}

/// A parsed parameter list.
pub(crate) struct ParameterList<L> {
    pub parameters: L,
    pub count: u32,
    pub has_default: bool,
    pub has_pattern: bool,
    pub has_rest: bool,
}

/// Where the body of a function ended.
struct BodyEnd {
    /// The `}`, or the last token of an arrow's expression body.
    token: Token,
    /// Scanner cursor right after `token`.
    state: ScannerState,
    from_cache: bool,
}

impl<'a> Parser<'a> {
    // ========================================================================
    // Entry points
    // ========================================================================

    pub(crate) fn parse_function_declaration<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let (function, _) = self.parse_function_declaration_node(b, false)?;
        Ok(b.create_function_declaration(function))
    }

    /// A function declaration and the name it binds. Only
    /// `export default function` may leave the name out.
    pub(crate) fn parse_function_declaration_node<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        allow_anonymous: bool,
    ) -> ParseResult<(B::Function, Option<InternedString>)> {
        let start = self.token_start();
        self.next();
        let is_generator = self.consume(SyntaxKind::AsteriskToken);
        let mode = if is_generator { SourceParseMode::GeneratorWrapperFunction } else { SourceParseMode::NormalFunction };
        if allow_anonymous && self.at(SyntaxKind::OpenParenToken) {
            let function = self.parse_function_info(b, FunctionHead::new(mode, start))?;
            return Ok((function, None));
        }
        if !self.match_spec_identifier() {
            self.fail_if_keyword("function name")?;
            return Err(self.fail(&messages::FUNCTION_NEEDS_NAME, &[]));
        }
        let id = self.current_identifier();
        self.next();

        let text = self.resolve(id.name).to_string();
        let result = self.declare_variable(id.name, DeclarationKind::Var, VariableFlags::FUNCTION);
        if self.strict_mode() && result.contains(DeclarationResult::INVALID_STRICT_MODE) {
            return Err(self.fail(&messages::STRICT_FUNCTION_DECLARATION_NAME, &[&text]));
        }
        if result.contains(DeclarationResult::INVALID_DUPLICATE_DECLARATION) {
            return Err(self.fail(&messages::FUNCTION_SHADOWS_LEXICAL, &[&text]));
        }
        self.record_bound_name(id.name);

        let head = FunctionHead { name: Some(id), name_start: id.span.start, ..FunctionHead::new(mode, start) };
        let function = self.parse_function_info(b, head)?;
        Ok((function, Some(id.name)))
    }

    pub(crate) fn parse_function_expression<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        let start = self.token_start();
        self.next();
        let is_generator = self.consume(SyntaxKind::AsteriskToken);
        let mode = if is_generator { SourceParseMode::GeneratorWrapperFunction } else { SourceParseMode::NormalFunction };
        let mut head = FunctionHead { binds_callee: true, ..FunctionHead::new(mode, start) };

        if self.match_spec_identifier_in(is_generator) {
            let id = self.current_identifier();
            if self.strict_mode() && self.names.is_eval_or_arguments(id.name) {
                let text = self.resolve(id.name).to_string();
                return Err(self.fail(&messages::STRICT_FUNCTION_NAME, &[&text]));
            }
            self.next();
            head.name = Some(id);
            head.name_start = id.span.start;
        } else if !self.at(SyntaxKind::OpenParenToken) {
            self.fail_if_keyword("function name")?;
        }

        let function = self.parse_function_info(b, head)?;
        self.state.non_trivial_expression_count += 1;
        Ok(b.create_function_expression(function))
    }

    /// An object literal method, getter, setter or generator method whose
    /// name has been consumed.
    pub(crate) fn parse_method<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        mode: SourceParseMode,
        name_start: TextPos,
        name: Option<InternedString>,
    ) -> ParseResult<B::Function> {
        let span = self.span_from(name_start);
        let head = FunctionHead {
            name: name.map(|name| Identifier { span, name }),
            name_start,
            super_binding: SuperBinding::Needed,
            ..FunctionHead::new(mode, name_start)
        };
        self.parse_function_info(b, head)
    }

    pub(crate) fn parse_arrow_function_expression<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Expression> {
        let head = FunctionHead::new(SourceParseMode::ArrowFunction, self.token_start());
        let function = self.parse_function_info(b, head)?;
        self.state.non_trivial_expression_count += 1;
        Ok(b.create_arrow_function(function))
    }

    /// Whether an arrow function starts here: an identifier followed by
    /// `=>`, or a parenthesized parameter list followed by `=>`. The list is
    /// parsed speculatively and the parser rewound either way.
    pub(crate) fn is_arrow_function_parameters(&mut self) -> ParseResult<bool> {
        if self.match_spec_identifier() {
            return Ok(self.peek_kind() == SyntaxKind::EqualsGreaterThanToken);
        }
        if !self.at(SyntaxKind::OpenParenToken) {
            return Ok(false);
        }

        let save_point = self.create_save_point();
        let duplicate_parameter = self.duplicate_parameter.take();
        let index = self.scopes.push();
        self.scopes.get_mut(index).set_source_parse_mode(SourceParseMode::ArrowFunction);

        let mut checker = SyntaxChecker::new();
        let result = self
            .parse_function_parameters(&mut checker, SourceParseMode::ArrowFunction)
            .map(|_| self.at(SyntaxKind::EqualsGreaterThanToken));

        self.restore_save_point(save_point);
        self.duplicate_parameter = duplicate_parameter;
        match result {
            Ok(is_arrow) => Ok(is_arrow),
            Err(error) if self.has_fatal_error() => Err(error),
            Err(_) => Ok(false),
        }
    }

    // ========================================================================
    // The shared function production
    // ========================================================================

    /// Parse parameters and body of any kind of function, starting at its
    /// parameter list.
    pub(crate) fn parse_function_info<B: TreeBuilder<'a>>(&mut self, b: &mut B, head: FunctionHead) -> ParseResult<B::Function> {
        self.enter()?;
        let outer_state = self.state;
        let result = self.parse_function_info_inner(b, head);
        self.state.last_function_name = outer_state.last_function_name;
        self.leave();
        result
    }

    fn parse_function_info_inner<B: TreeBuilder<'a>>(&mut self, b: &mut B, head: FunctionHead) -> ParseResult<B::Function> {
        let mode = head.mode;
        let outer_strict_mode = self.strict_mode();
        let name = head.name.map(|id| id.name);

        let index = self.scopes.push();
        {
            let scope = self.scopes.get_mut(index);
            scope.set_source_parse_mode(mode);
            scope.constructor_kind = head.constructor_kind;
            scope.expected_super_binding = head.super_binding;
        }
        if head.binds_callee {
            if let Some(name) = name {
                self.scopes.current_mut().declare_callee(name, &self.names);
            }
        }
        self.state.last_function_name = name;

        let parameters_token = self.token;
        let parameters_start = self.token_start();
        let outer_duplicate = self.duplicate_parameter.take();
        let parameters = self.parse_function_parameters(b, mode);
        let duplicate = std::mem::replace(&mut self.duplicate_parameter, outer_duplicate);
        let parameters = parameters?;
        if let Some(duplicate) = duplicate {
            self.check_duplicate_parameter(duplicate, &parameters, mode)?;
        }

        if mode == SourceParseMode::ArrowFunction {
            if !self.at(SyntaxKind::EqualsGreaterThanToken) {
                return Err(self.fail(&messages::EXPECTED_ARROW, &[]));
            }
            if self.prev_terminator() {
                return Err(self.fail(&messages::LINE_TERMINATOR_BEFORE_ARROW, &[]));
            }
            self.next();
        }

        let body_token = self.token;
        let body_start = self.token_start();
        let is_arrow_expression_body = mode == SourceParseMode::ArrowFunction && !self.at(SyntaxKind::OpenBraceToken);
        if !is_arrow_expression_body && !self.at(SyntaxKind::OpenBraceToken) {
            return Err(self.fail(&messages::EXPECTED_OPEN_BRACE_BEFORE_BODY, &[mode.description()]));
        }

        let cached = self.cached_function(B::CAN_USE_FUNCTION_CACHE, parameters_start, outer_strict_mode, is_arrow_expression_body);
        let (end, parameter_count) = match cached {
            Some(info) => (self.skip_cached_body(&info), info.parameter_count()),
            None => (self.parse_function_body(mode, is_arrow_expression_body)?, parameters.count),
        };

        let scope = self.scopes.current();
        if let Some(name) = name {
            if scope.strict_mode && self.names.is_eval_or_arguments(name) {
                let text = self.resolve(name).to_string();
                return Err(self.fail(&messages::STRICT_INVALID_FUNCTION_NAME, &[&text, "function"]));
            }
        }
        if !scope.is_arrow {
            if scope.has_direct_super {
                match scope.constructor_kind {
                    ConstructorKind::None => return Err(self.fail(&messages::SUPER_CALL_OUTSIDE_CONSTRUCTOR, &[])),
                    ConstructorKind::Base => return Err(self.fail(&messages::SUPER_CALL_IN_BASE_CONSTRUCTOR, &[])),
                    ConstructorKind::Derived => {}
                }
            }
            if scope.needs_super_binding && scope.expected_super_binding == SuperBinding::NotNeeded {
                return Err(self.fail(&messages::SUPER_OUTSIDE_METHOD, &[]));
            }
        }

        let end_location = end.token.location;
        let metadata = FunctionMetadata {
            name,
            mode,
            function_start: head.function_start,
            name_start: head.name_start,
            parameters_start,
            parameters_line: parameters_token.location.line,
            parameters_line_start: parameters_token.location.line_start,
            body_start,
            body_end: if is_arrow_expression_body { end_location.end } else { end_location.start },
            start_line: body_token.location.line,
            end_line: end_location.line,
            start_column: body_start - body_token.location.line_start + 1,
            end_column: end_location.start - end_location.line_start + 1,
            parameter_count,
            strict_mode: scope.strict_mode,
            constructor_kind: head.constructor_kind,
            super_binding: head.super_binding,
            is_arrow_expression_body,
        };

        if B::CAN_USE_FUNCTION_CACHE && !end.from_cache {
            self.record_function(&metadata, end.token, end.state, outer_strict_mode);
        }

        self.pop_scope(B::NEEDS_FREE_VARIABLE_INFO);
        // An expression body already left the scanner past its last token.
        if !is_arrow_expression_body || end.from_cache {
            self.next();
        }

        let span = self.span_from(head.function_start);
        Ok(b.create_function(span, head.name, parameters.parameters, metadata))
    }

    fn check_duplicate_parameter<L>(
        &self,
        duplicate: InternedString,
        parameters: &ParameterList<L>,
        mode: SourceParseMode,
    ) -> ParseResult<()> {
        let message = if parameters.has_default {
            &messages::DUPLICATE_PARAMETER_WITH_DEFAULTS
        } else if parameters.has_pattern {
            &messages::DUPLICATE_PARAMETER_WITH_PATTERNS
        } else if parameters.has_rest {
            &messages::DUPLICATE_PARAMETER_WITH_REST
        } else if mode == SourceParseMode::ArrowFunction {
            &messages::DUPLICATE_PARAMETER_IN_ARROW
        } else {
            return Ok(());
        };
        let text = self.resolve(duplicate).to_string();
        Err(self.fail(message, &[&text]))
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    /// The parameter list of a function of the given mode, including its
    /// parentheses. An arrow function may instead have a single bare name.
    pub(crate) fn parse_function_parameters<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        mode: SourceParseMode,
    ) -> ParseResult<ParameterList<B::List<B::Parameter>>> {
        let phase = std::mem::replace(&mut self.state.function_parse_phase, FunctionParsePhase::Parameters);
        let result = self.parse_function_parameters_inner(b, mode);
        self.state.function_parse_phase = phase;
        result
    }

    fn parse_function_parameters_inner<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        mode: SourceParseMode,
    ) -> ParseResult<ParameterList<B::List<B::Parameter>>> {
        let mut list = ParameterList {
            parameters: B::List::<B::Parameter>::default(),
            count: 0,
            has_default: false,
            has_pattern: false,
            has_rest: false,
        };

        if mode == SourceParseMode::ArrowFunction && !self.at(SyntaxKind::OpenParenToken) {
            if !self.match_spec_identifier() {
                return Err(self.fail(&messages::EXPECTED_ARROW_PARAMETER, &[]));
            }
            let id = self.current_identifier();
            self.next();
            self.declare_binding(id, DestructuringKind::ToParameters)?;
            let pattern = b.create_binding_pattern(id);
            list.parameters.push(b.create_parameter(pattern, None, false));
            list.count = 1;
            return Ok(list);
        }

        self.expect(SyntaxKind::OpenParenToken, &messages::EXPECTED_OPEN_PAREN_BEFORE_PARAMETERS, &[mode.description()])?;
        match mode {
            SourceParseMode::Getter => {
                self.expect(SyntaxKind::CloseParenToken, &messages::GETTER_HAS_PARAMETERS, &[])?;
            }
            SourceParseMode::Setter => {
                if self.at(SyntaxKind::CloseParenToken) || self.at(SyntaxKind::DotDotDotToken) {
                    return Err(self.fail(&messages::SETTER_PARAMETER_COUNT, &[]));
                }
                self.parse_formal_parameter(b, &mut list)?;
                self.expect(SyntaxKind::CloseParenToken, &messages::SETTER_PARAMETER_COUNT, &[])?;
            }
            _ => self.parse_formal_parameters(b, &mut list)?,
        }
        Ok(list)
    }

    /// Comma-separated parameters up to and including the `)`.
    fn parse_formal_parameters<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        list: &mut ParameterList<B::List<B::Parameter>>,
    ) -> ParseResult<()> {
        if self.consume(SyntaxKind::CloseParenToken) {
            return Ok(());
        }
        loop {
            if self.consume(SyntaxKind::DotDotDotToken) {
                if !self.match_spec_identifier() {
                    self.fail_if_keyword("parameter name")?;
                    return Err(self.fail(&messages::REST_NEEDS_IDENTIFIER, &[]));
                }
                let id = self.current_identifier();
                self.next();
                self.declare_binding(id, DestructuringKind::ToParameters)?;
                let pattern = b.create_binding_pattern(id);
                list.parameters.push(b.create_parameter(pattern, None, true));
                list.count += 1;
                list.has_rest = true;
                return self.expect(SyntaxKind::CloseParenToken, &messages::REST_PARAMETER_NOT_LAST, &[]);
            }
            self.parse_formal_parameter(b, list)?;
            if self.consume(SyntaxKind::CloseParenToken) {
                return Ok(());
            }
            self.expect(SyntaxKind::CommaToken, &messages::EXPECTED_CLOSE_PAREN_OR_COMMA_AFTER_PARAMETER, &[])?;
        }
    }

    fn parse_formal_parameter<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        list: &mut ParameterList<B::List<B::Parameter>>,
    ) -> ParseResult<()> {
        let pattern = self.parse_binding_pattern(b, DestructuringKind::ToParameters)?;
        if !b.is_binding_node(&pattern) {
            list.has_pattern = true;
        }
        let default = self.parse_default_value_for_destructuring_pattern(b)?;
        if default.is_some() {
            list.has_default = true;
        }
        list.parameters.push(b.create_parameter(pattern, default, false));
        list.count += 1;
        Ok(())
    }

    /// The four parameters of a generator body, declared in the current
    /// scope.
    pub(crate) fn create_generator_parameters<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> B::List<B::Parameter> {
        let span = TextSpan::new(self.token_start(), 0);
        let mut parameters = B::List::<B::Parameter>::default();
        for name in self.names.generator_parameters {
            self.scopes.current_mut().declare_parameter(name, &self.names);
            let pattern = b.create_binding_pattern(Identifier { span, name });
            parameters.push(b.create_parameter(pattern, None, false));
        }
        parameters
    }

    // ========================================================================
    // Bodies
    // ========================================================================

    /// Parse a body with the `SyntaxChecker`, starting at its `{` or at the
    /// first token of an arrow's expression body.
    fn parse_function_body(&mut self, mode: SourceParseMode, is_arrow_expression_body: bool) -> ParseResult<BodyEnd> {
        let outer_state = self.state;
        let outer_statement_depth = self.statement_depth;
        let outer_allows_in = self.allows_in;
        self.state = ParserState { last_function_name: outer_state.last_function_name, ..ParserState::default() };
        self.statement_depth = 0;

        let mut checker = SyntaxChecker::new();
        let result = if is_arrow_expression_body {
            self.parse_arrow_expression_body(&mut checker).and_then(|_| {
                if !self.is_end_of_arrow_function() {
                    return Err(self.fail(&messages::EXPECTED_END_OF_ARROW_FUNCTION, &[]));
                }
                Ok(BodyEnd { token: self.prev_token, state: self.token_start_state, from_cache: false })
            })
        } else {
            self.allows_in = true;
            self.next();
            let statements = if mode == SourceParseMode::GeneratorWrapperFunction {
                self.parse_generator_function_source_elements(&mut checker)
            } else {
                self.parse_source_elements(&mut checker, true)
            };
            statements.and_then(|_| {
                self.require(SyntaxKind::CloseBraceToken, &messages::EXPECTED_CLOSE_BRACE_AFTER_BODY, &[mode.description()])?;
                Ok(BodyEnd { token: self.token, state: self.scanner.state(), from_cache: false })
            })
        };

        self.state = outer_state;
        self.statement_depth = outer_statement_depth;
        self.allows_in = outer_allows_in;
        result
    }

    /// An arrow's expression body, as the single return statement it
    /// stands for.
    pub(crate) fn parse_arrow_expression_body<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::List<B::Statement>> {
        let start = self.token_start();
        let expression = self.parse_assignment_expression(b)?;
        let mut statements = B::List::<B::Statement>::default();
        statements.push(b.create_return(self.span_from(start), Some(expression)));
        Ok(statements)
    }

    pub(crate) fn is_end_of_arrow_function(&self) -> bool {
        self.prev_terminator()
            || matches!(
                self.token.kind,
                SyntaxKind::SemicolonToken
                    | SyntaxKind::CommaToken
                    | SyntaxKind::CloseParenToken
                    | SyntaxKind::CloseBraceToken
                    | SyntaxKind::CloseBracketToken
                    | SyntaxKind::ColonToken
                    | SyntaxKind::EndOfFileToken
            )
    }

    /// The body of a generator function: a single statement holding the
    /// generator body function, whose own body is the source elements.
    /// The current token is the first one after the `{`.
    pub(crate) fn parse_generator_function_source_elements<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
    ) -> ParseResult<B::List<B::Statement>> {
        let open_brace = self.prev_token.location;
        let start = self.token_start();
        let wrapper_index = self.scopes.len() - 1;
        let (constructor_kind, super_binding) = {
            let wrapper = self.scopes.get(wrapper_index);
            (wrapper.constructor_kind, wrapper.expected_super_binding)
        };

        let index = self.scopes.push();
        {
            let scope = self.scopes.get_mut(index);
            scope.set_source_parse_mode(SourceParseMode::GeneratorBody);
            scope.constructor_kind = constructor_kind;
            scope.expected_super_binding = super_binding;
        }
        let parameters = self.create_generator_parameters(b);
        let mut checker = SyntaxChecker::new();
        self.parse_source_elements(&mut checker, true)?;

        let body = self.scopes.current();
        let (strict_mode, has_direct_super, needs_super_binding) =
            (body.strict_mode, body.has_direct_super, body.needs_super_binding);
        let wrapper = self.scopes.get_mut(wrapper_index);
        wrapper.has_direct_super |= has_direct_super;
        wrapper.needs_super_binding |= needs_super_binding;
        // A directive in the body makes the generator's parameters strict too.
        if strict_mode && !wrapper.strict_mode {
            wrapper.strict_mode = true;
            if !wrapper.is_valid_strict_mode {
                return Err(self.fail(&messages::INVALID_STRICT_PARAMETERS, &[]));
            }
        }

        let end = self.token.location;
        let metadata = FunctionMetadata {
            name: None,
            mode: SourceParseMode::GeneratorBody,
            function_start: open_brace.start,
            name_start: open_brace.start,
            parameters_start: open_brace.start,
            parameters_line: open_brace.line,
            parameters_line_start: open_brace.line_start,
            body_start: open_brace.start,
            body_end: end.start,
            start_line: open_brace.line,
            end_line: end.line,
            start_column: open_brace.start - open_brace.line_start + 1,
            end_column: end.start - end.line_start + 1,
            parameter_count: GENERATOR_BODY_PARAMETER_COUNT,
            strict_mode,
            constructor_kind: ConstructorKind::None,
            super_binding,
            is_arrow_expression_body: false,
        };
        self.pop_scope(B::NEEDS_FREE_VARIABLE_INFO);

        let span = TextSpan::from_bounds(start, end.start.max(start));
        let function = b.create_function(span, None, parameters, metadata);
        let expression = b.create_function_expression(function);
        let mut statements = B::List::<B::Statement>::default();
        statements.push(b.create_expression_statement(span, expression));
        Ok(statements)
    }

    // ========================================================================
    // Function cache
    // ========================================================================

    fn cached_function(
        &self,
        can_use_cache: bool,
        parameters_start: TextPos,
        outer_strict_mode: bool,
        is_arrow_expression_body: bool,
    ) -> Option<Rc<CachedFunctionInfo>> {
        if !can_use_cache {
            return None;
        }
        let info = self.cache.as_ref()?.get(parameters_start)?;
        if info.outer_strict_mode() != outer_strict_mode || info.is_arrow_expression_body() != is_arrow_expression_body {
            trace!(parameters_start, "ignoring cached function recorded in another strictness");
            return None;
        }
        Some(info)
    }

    /// Restore a cached body's scope summary and move the scanner to the
    /// body's last token, which becomes the current token.
    fn skip_cached_body(&mut self, info: &CachedFunctionInfo) -> BodyEnd {
        trace!(end = info.end_offset(), "skipping cached function body");
        self.scopes.current_mut().restore_from_cache(info);
        let location = info.end_token.location;
        self.token_start_state = ScannerState {
            pos: location.start as usize,
            line: location.line,
            line_start: location.line_start as usize,
        };
        self.scanner.restore(info.end_state);
        self.token = info.end_token;
        if let Some(cache) = &self.cache {
            cache.record_hit();
        }
        BodyEnd { token: info.end_token, state: info.end_state, from_cache: true }
    }

    fn record_function(&self, metadata: &FunctionMetadata, end_token: Token, end_state: ScannerState, outer_strict_mode: bool) {
        let Some(cache) = &self.cache else {
            return;
        };
        let threshold = if metadata.is_arrow_expression_body {
            MIN_ARROW_EXPRESSION_BODY_LENGTH
        } else {
            MIN_BLOCK_BODY_LENGTH
        };
        if metadata.body_end.saturating_sub(metadata.parameters_start) <= threshold {
            return;
        }
        trace!(parameters_start = metadata.parameters_start, body_end = metadata.body_end, "caching function body");
        cache.insert(
            metadata.parameters_start,
            CachedFunctionInfo {
                end_token,
                end_state,
                parameter_count: metadata.parameter_count,
                outer_strict_mode,
                is_arrow_expression_body: metadata.is_arrow_expression_body,
                summary: self.scopes.current().summary(),
            },
        );
    }
}
