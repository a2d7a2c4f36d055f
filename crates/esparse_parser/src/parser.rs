//! The parser core.
//!
//! `Parser` owns the scanner, the scope stack and the per-parse state. The
//! grammar lives in the sibling modules, each adding productions to
//! `Parser` that are generic over a `TreeBuilder`. This module holds what
//! every production shares: the token adapter, save points, the nesting
//! guard, error construction, the directive prologue and the drivers.

use crate::builder::{AstBuilder, ListBuilder, SyntaxChecker, TreeBuilder};
use crate::cache::FunctionCache;
use crate::module::ModuleData;
use crate::options::ParserOptions;
use crate::scope::{DeclarationResult, Scope, ScopeStack};
use crate::state::{KnownNames, ParserState};
use bumpalo::Bump;
use esparse_ast::node::{Identifier, ParsedFunction, Program, Statement};
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::{
    Binding, CodeFeatures, DeclarationKind, FunctionMetadata, SourceParseMode, TokenFlags,
    VariableFlags,
};
use esparse_core::intern::{InternedString, StringInterner};
use esparse_core::text::{TextPos, TextSpan};
use esparse_diagnostics::messages;
use esparse_diagnostics::{
    DiagnosticCategory, DiagnosticMessage, ParseError, ParseErrorKind, ParseResult,
};
use esparse_scanner::{Scanner, ScannerState, Token};
use tracing::{debug, trace};

/// Length of the `"use strict"` literal including its quotes. Escapes or
/// line continuations make the literal longer.
const USE_STRICT_LITERAL_LENGTH: u32 = 12;

/// A string-literal expression statement seen at the start of a body.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Directive {
    pub value: InternedString,
    pub literal_length: u32,
}

/// Everything needed to rewind the parser to an earlier token.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SavePoint {
    start_state: ScannerState,
    prev_token: Token,
    last_token_end: TextPos,
    last_token_line: u32,
    scope_depth: usize,
    state: ParserState,
    allows_in: bool,
    statement_depth: i32,
}

impl SavePoint {
    /// Character offset of the token the save point rewinds to, counting
    /// the trivia before it.
    #[inline]
    pub fn offset(&self) -> TextPos {
        self.start_state.pos as TextPos
    }
}

/// Recursive-descent parser for one source text.
///
/// A parser is consumed by one of its drivers: `parse_program` builds the
/// AST of a script or module, `check_syntax` only validates it and
/// `parse_function` re-parses a single function from its recorded
/// metadata. Every driver stops at the first error.
pub struct Parser<'a> {
    pub(crate) arena: &'a Bump,
    pub(crate) scanner: Scanner,
    pub(crate) interner: StringInterner,
    pub(crate) names: KnownNames,
    pub(crate) options: ParserOptions,
    pub(crate) cache: Option<FunctionCache>,

    pub(crate) token: Token,
    pub(crate) prev_token: Token,
    /// Scanner cursor right before the current token's leading trivia.
    pub(crate) token_start_state: ScannerState,
    pub(crate) last_token_end: TextPos,
    pub(crate) last_token_line: u32,

    pub(crate) scopes: ScopeStack,
    pub(crate) state: ParserState,
    /// `in` is a binary operator; cleared inside `for` heads.
    pub(crate) allows_in: bool,
    /// Statement nesting inside the current function body; 1 for the
    /// body's own statement list.
    pub(crate) statement_depth: i32,
    depth: u32,
    has_stack_overflow: bool,
    /// First repeated name of the parameter list being parsed.
    pub(crate) duplicate_parameter: Option<InternedString>,
    pub(crate) module: Option<ModuleData>,
}

impl<'a> Parser<'a> {
    pub fn new(arena: &'a Bump, source: &str) -> Self {
        Self::with_options(arena, source, ParserOptions::default())
    }

    pub fn with_options(arena: &'a Bump, source: &str, options: ParserOptions) -> Self {
        Self::build(arena, source, options, None)
    }

    /// Create a parser that skips function bodies recorded in `cache` and
    /// records the ones it parses. The parser adopts the cache's interner.
    pub fn with_cache(arena: &'a Bump, source: &str, options: ParserOptions, cache: FunctionCache) -> Self {
        Self::build(arena, source, options, Some(cache))
    }

    fn build(arena: &'a Bump, source: &str, options: ParserOptions, cache: Option<FunctionCache>) -> Self {
        let interner = cache
            .as_ref()
            .map(|cache| cache.interner().clone())
            .unwrap_or_default();
        let names = KnownNames::new(&interner);
        let mut scanner = Scanner::new(source, interner.clone());
        scanner.set_first_line(options.first_line);
        let token_start_state = scanner.state();
        Self {
            arena,
            scanner,
            interner,
            names,
            options,
            cache,
            token: Token::default(),
            prev_token: Token::default(),
            token_start_state,
            last_token_end: 0,
            last_token_line: 0,
            scopes: ScopeStack::new(),
            state: ParserState::default(),
            allows_in: true,
            statement_depth: 0,
            depth: 0,
            has_stack_overflow: false,
            duplicate_parameter: None,
            module: None,
        }
    }

    /// The identifier table names in the produced tree resolve against.
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    // ========================================================================
    // Drivers
    // ========================================================================

    /// Parse the whole source as a script or, with `SourceType::Module`, as
    /// a module.
    pub fn parse_program(mut self) -> ParseResult<Program<'a>> {
        debug!(
            module = self.options.is_module(),
            strict = self.options.strict_mode,
            cached = self.cache.is_some(),
            "parsing program"
        );
        let mut builder = AstBuilder::new(self.arena, self.names.eval, self.names.arguments);
        let result = self.parse_top_level(&mut builder).map(|statements| {
            let end = self.token.location.end;
            self.finish_program(&builder, TextSpan::new(0, end), statements)
        });
        self.log_outcome(&result);
        result
    }

    /// Validate the source without building a tree.
    pub fn check_syntax(mut self) -> ParseResult<()> {
        debug!(module = self.options.is_module(), "checking syntax");
        let mut checker = SyntaxChecker::new();
        let result = self.parse_top_level(&mut checker).map(|_| ());
        self.log_outcome(&result);
        result
    }

    /// Re-parse one function of the source from the metadata a previous
    /// parse recorded for it. Its parameters and body statements are built
    /// with the `AstBuilder`; functions nested in it are checked only.
    pub fn parse_function(mut self, metadata: &FunctionMetadata) -> ParseResult<ParsedFunction<'a>> {
        debug!(
            mode = metadata.mode.description(),
            start = metadata.parameters_start,
            "re-parsing function"
        );
        let mut builder = AstBuilder::new(self.arena, self.names.eval, self.names.arguments);
        let result = self.parse_function_source(&mut builder, metadata).map(|(parameters, statements)| {
            let span = TextSpan::from_bounds(metadata.parameters_start, metadata.body_end.max(metadata.parameters_start));
            ParsedFunction {
                metadata: *metadata,
                parameters: self.arena.alloc_slice_copy(&parameters),
                body: self.finish_program(&builder, span, statements),
            }
        });
        self.log_outcome(&result);
        result
    }

    fn log_outcome<T>(&self, result: &ParseResult<T>) {
        match result {
            Ok(_) => debug!(cache_entries = self.cache.as_ref().map_or(0, FunctionCache::len), "parse finished"),
            Err(error) => debug!(line = error.line, column = error.column, message = %error.message, "parse failed"),
        }
    }

    fn parse_top_level<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::List<B::Statement>> {
        let is_module = self.options.is_module();
        let root = self.scopes.push();
        {
            let strict = self.options.strict_mode || is_module;
            let scope = self.scopes.get_mut(root);
            scope.set_source_parse_mode(if is_module { SourceParseMode::Module } else { SourceParseMode::Program });
            scope.set_is_lexical_scope();
            scope.strict_mode = strict;
        }
        if is_module {
            self.module = Some(ModuleData::default());
        }
        self.next();
        let statements = self.parse_source_elements(b, !is_module)?;
        if !self.at(SyntaxKind::EndOfFileToken) {
            return Err(self.unexpected());
        }
        if is_module {
            self.check_exported_bindings()?;
        }
        Ok(statements)
    }

    fn parse_function_source<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        metadata: &FunctionMetadata,
    ) -> ParseResult<(B::List<B::Parameter>, B::List<B::Statement>)> {
        if !metadata.mode.is_function() {
            return Err(self.fail(&messages::PARSER_ERROR, &[]));
        }
        self.scanner.restore(ScannerState {
            pos: metadata.parameters_start as usize,
            line: metadata.parameters_line,
            line_start: metadata.parameters_line_start as usize,
        });
        let root = self.scopes.push();
        {
            let scope = self.scopes.get_mut(root);
            scope.set_source_parse_mode(metadata.mode);
            scope.strict_mode = metadata.strict_mode;
            scope.constructor_kind = metadata.constructor_kind;
            scope.expected_super_binding = metadata.super_binding;
        }
        if let Some(name) = metadata.name {
            self.scopes.current_mut().declare_callee(name, &self.names);
        }
        self.state.last_function_name = metadata.name;
        self.next();

        let parameters = if metadata.mode == SourceParseMode::GeneratorBody {
            self.create_generator_parameters(b)
        } else {
            self.parse_function_parameters(b, metadata.mode)?.parameters
        };

        if metadata.mode == SourceParseMode::ArrowFunction {
            if !self.at(SyntaxKind::EqualsGreaterThanToken) {
                return Err(self.fail(&messages::EXPECTED_ARROW, &[]));
            }
            self.next();
            if !self.at(SyntaxKind::OpenBraceToken) {
                let statements = self.parse_arrow_expression_body(b)?;
                if !self.is_end_of_arrow_function() {
                    return Err(self.fail(&messages::EXPECTED_END_OF_ARROW_FUNCTION, &[]));
                }
                return Ok((parameters, statements));
            }
        }

        if !self.at(SyntaxKind::OpenBraceToken) {
            return Err(self.fail(&messages::EXPECTED_OPEN_BRACE_BEFORE_BODY, &[metadata.mode.description()]));
        }
        self.next();
        let statements = if metadata.mode == SourceParseMode::GeneratorWrapperFunction {
            self.parse_generator_function_source_elements(b)?
        } else {
            self.parse_source_elements(b, true)?
        };
        if !self.at(SyntaxKind::CloseBraceToken) {
            return Err(self.fail(&messages::EXPECTED_CLOSE_BRACE_AFTER_BODY, &[metadata.mode.description()]));
        }
        Ok((parameters, statements))
    }

    /// Collect the root scope's declarations and features.
    fn finish_program(
        &self,
        builder: &AstBuilder<'a>,
        span: TextSpan,
        statements: Vec<Statement<'a>>,
    ) -> Program<'a> {
        let root = self.scopes.get(0);
        let captured = root.captured_variables(self.names.arguments);

        let mut features = builder.features();
        if root.strict_mode {
            features |= CodeFeatures::STRICT_MODE;
        }
        if root.shadows_arguments {
            features |= CodeFeatures::SHADOWS_ARGUMENTS;
        }
        if captured.modified_parameter {
            features |= CodeFeatures::MODIFIED_PARAMETER;
        }
        if captured.modified_arguments {
            features |= CodeFeatures::MODIFIED_ARGUMENTS;
        }

        let captured_bindings: Vec<Binding> = captured
            .names
            .iter()
            .map(|&name| Binding {
                name,
                flags: root.declared_variables.get(&name).copied().unwrap_or(VariableFlags::NONE)
                    | VariableFlags::CAPTURED,
            })
            .collect();

        Program {
            span,
            statements: self.arena.alloc_slice_copy(&statements),
            function_declarations: builder.function_declarations(),
            var_declarations: self.arena.alloc_slice_copy(&root.var_bindings()),
            lexical_variables: self.arena.alloc_slice_copy(&root.lexical_bindings()),
            captured_variables: self.arena.alloc_slice_copy(&captured_bindings),
            features,
            num_constants: builder.num_constants(),
            strict_mode: root.strict_mode,
            module: self.module.as_ref().map(|module| module.record.clone()),
        }
    }

    // ========================================================================
    // Source elements and the directive prologue
    // ========================================================================

    /// Parse statements up to `}`, `case`, `default` or the end of input.
    ///
    /// With `check_directives`, a leading `"use strict"` makes the current
    /// scope strict and the elements are parsed again from the start, so
    /// that everything before the directive is re-checked as strict code.
    pub(crate) fn parse_source_elements<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        check_directives: bool,
    ) -> ParseResult<B::List<B::Statement>> {
        let mut statements = B::List::<B::Statement>::default();
        let mut in_prologue = check_directives;
        let mut has_set_strict = false;
        let save_point = self.create_save_point();

        loop {
            let mut directive = None;
            let Some(statement) = self.parse_statement_list_item(b, &mut directive)? else {
                break;
            };
            if in_prologue {
                match directive {
                    Some(directive) if !has_set_strict && self.is_use_strict(directive) => {
                        has_set_strict = true;
                        if !self.strict_mode() {
                            self.enter_strict_mode()?;
                            self.rewind_for_strict_mode(save_point);
                            statements = B::List::<B::Statement>::default();
                            continue;
                        }
                    }
                    Some(_) => {}
                    None => in_prologue = false,
                }
            }
            statements.push(statement);
        }
        Ok(statements)
    }

    fn is_use_strict(&self, directive: Directive) -> bool {
        directive.literal_length == USE_STRICT_LITERAL_LENGTH
            && self.interner.resolve(directive.value) == "use strict"
    }

    /// Make the current scope strict, rejecting what the scope already
    /// accepted as sloppy code.
    fn enter_strict_mode(&mut self) -> ParseResult<()> {
        let scope = self.scopes.current_mut();
        scope.strict_mode = true;
        if scope.is_valid_strict_mode {
            return Ok(());
        }
        if let Some(name) = self.state.last_function_name {
            if name == self.names.arguments {
                return Err(self.fail(&messages::STRICT_FUNCTION_NAMED_ARGUMENTS, &[]));
            }
            if name == self.names.eval {
                return Err(self.fail(&messages::STRICT_FUNCTION_NAMED_EVAL, &[]));
            }
        }
        let scope = self.scopes.current();
        if scope.has_declared_variable(self.names.arguments) {
            return Err(self.fail(&messages::STRICT_VARIABLE_NAMED_ARGUMENTS, &[]));
        }
        if scope.has_declared_variable(self.names.eval) {
            return Err(self.fail(&messages::STRICT_VARIABLE_NAMED_EVAL, &[]));
        }
        Err(self.fail(&messages::INVALID_STRICT_PARAMETERS, &[]))
    }

    /// Rewind to the start of the prologue after it turned strict. The
    /// discarded prefix holds only directives, so it recorded no cache
    /// entries.
    fn rewind_for_strict_mode(&mut self, save_point: SavePoint) {
        trace!(offset = save_point.offset(), "re-parsing prologue as strict code");
        self.restore_save_point(save_point);
    }

    // ========================================================================
    // Token adapter
    // ========================================================================

    /// Advance to the next token, scanning it with the current scope's
    /// strictness.
    pub(crate) fn next(&mut self) {
        self.prev_token = self.token;
        self.last_token_end = self.token.location.end;
        self.last_token_line = self.token.location.line;
        self.scanner.set_strict_mode(self.strict_mode());
        self.token_start_state = self.scanner.state();
        self.token = self.scanner.next_token();
    }

    #[inline]
    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.token.kind == kind
    }

    /// Advance past the current token if it is `kind`.
    #[inline]
    pub(crate) fn consume(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or fail with `message`.
    pub(crate) fn expect(&mut self, kind: SyntaxKind, message: &DiagnosticMessage, args: &[&str]) -> ParseResult<()> {
        if self.consume(kind) {
            Ok(())
        } else {
            Err(self.fail(message, args))
        }
    }

    /// Fail with `message` unless the current token is `kind`.
    pub(crate) fn require(&self, kind: SyntaxKind, message: &DiagnosticMessage, args: &[&str]) -> ParseResult<()> {
        if self.at(kind) {
            Ok(())
        } else {
            Err(self.fail(message, args))
        }
    }

    /// A line terminator separates the current token from the previous one.
    #[inline]
    pub(crate) fn prev_terminator(&self) -> bool {
        self.token.has_preceding_line_break()
    }

    /// Consume a `;` or accept an inserted one.
    pub(crate) fn auto_semicolon(&mut self) -> bool {
        if self.consume(SyntaxKind::SemicolonToken) {
            return true;
        }
        self.at(SyntaxKind::CloseBraceToken) || self.at(SyntaxKind::EndOfFileToken) || self.prev_terminator()
    }

    #[inline]
    pub(crate) fn token_start(&self) -> TextPos {
        self.token.location.start
    }

    /// Span from `start` to the end of the previous token.
    #[inline]
    pub(crate) fn span_from(&self, start: TextPos) -> TextSpan {
        TextSpan::new(start, self.last_token_end.saturating_sub(start))
    }

    /// The current token as an identifier node. Keywords carry their text
    /// as the name.
    pub(crate) fn current_identifier(&self) -> Identifier {
        let name = self
            .token
            .identifier()
            .unwrap_or_else(|| self.interner.intern(&self.scanner.token_text(&self.token)));
        Identifier { span: self.token.span(), name }
    }

    #[inline]
    pub(crate) fn resolve(&self, name: InternedString) -> &str {
        self.interner.resolve(name)
    }

    #[inline]
    pub(crate) fn strict_mode(&self) -> bool {
        !self.scopes.is_empty() && self.scopes.current().strict_mode
    }

    /// An identifier in the current context: `let` outside strict code and
    /// `yield` outside strict code and generators count as identifiers.
    pub(crate) fn match_spec_identifier_in(&self, in_generator: bool) -> bool {
        match self.token.kind {
            SyntaxKind::Identifier => true,
            SyntaxKind::LetKeyword => !self.strict_mode(),
            SyntaxKind::YieldKeyword => !in_generator && !self.strict_mode(),
            _ => false,
        }
    }

    #[inline]
    pub(crate) fn match_spec_identifier(&self) -> bool {
        self.match_spec_identifier_in(self.scopes.current().is_generator)
    }

    /// An unescaped identifier spelling `name`, such as `of` or `from`.
    pub(crate) fn at_contextual(&self, name: InternedString) -> bool {
        self.at(SyntaxKind::Identifier)
            && self.token.identifier() == Some(name)
            && !self.token.flags.contains(TokenFlags::CONTAINS_ESCAPE)
    }

    /// Kind of the token after the current one.
    pub(crate) fn peek_kind(&mut self) -> SyntaxKind {
        let save_point = self.create_save_point();
        self.next();
        let kind = self.token.kind;
        self.restore_save_point(save_point);
        kind
    }

    // ========================================================================
    // Save points
    // ========================================================================

    pub(crate) fn create_save_point(&self) -> SavePoint {
        SavePoint {
            start_state: self.token_start_state,
            prev_token: self.prev_token,
            last_token_end: self.last_token_end,
            last_token_line: self.last_token_line,
            scope_depth: self.scopes.len(),
            state: self.state,
            allows_in: self.allows_in,
            statement_depth: self.statement_depth,
        }
    }

    /// Rewind to `save_point`: scopes opened since are closed without
    /// folding, and the token is scanned again.
    pub(crate) fn restore_save_point(&mut self, save_point: SavePoint) {
        self.scopes.truncate(save_point.scope_depth);
        self.prev_token = save_point.prev_token;
        self.last_token_end = save_point.last_token_end;
        self.last_token_line = save_point.last_token_line;
        self.state = save_point.state;
        self.allows_in = save_point.allows_in;
        self.statement_depth = save_point.statement_depth;
        self.scanner.restore(save_point.start_state);
        self.scanner.set_strict_mode(self.strict_mode());
        self.token_start_state = save_point.start_state;
        self.token = self.scanner.next_token();
    }

    // ========================================================================
    // Nesting guard
    // ========================================================================

    /// Enter one level of recursion. Once the limit is hit every later
    /// check fails too, so no speculative path can recover from it.
    pub(crate) fn enter(&mut self) -> ParseResult<()> {
        if self.has_stack_overflow || self.depth >= self.options.max_depth {
            self.has_stack_overflow = true;
            return Err(ParseError::stack_overflow(self.token.location.position(), self.token.span()));
        }
        self.depth += 1;
        Ok(())
    }

    /// A failure no speculative parse may recover from.
    #[inline]
    pub(crate) fn has_fatal_error(&self) -> bool {
        self.has_stack_overflow
    }

    #[inline]
    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    /// Push a scope for a block, catch clause, `for` head or switch body.
    pub(crate) fn push_lexical_scope(&mut self) -> usize {
        let index = self.scopes.push();
        let scope = self.scopes.get_mut(index);
        scope.set_is_lexical_scope();
        scope.prevent_var_declarations();
        index
    }

    pub(crate) fn pop_scope(&mut self, track_closed: bool) -> Option<Scope> {
        self.scopes.pop(track_closed, self.names.arguments)
    }

    /// Pop a lexical scope and freeze its bindings for the builder.
    pub(crate) fn pop_lexical_scope<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> B::Environment {
        let scope = self.pop_scope(B::NEEDS_FREE_VARIABLE_INFO);
        if B::CREATES_AST {
            let bindings = scope.map(|scope| scope.lexical_bindings()).unwrap_or_default();
            b.environment(&bindings)
        } else {
            b.environment(&[])
        }
    }

    pub(crate) fn declare_variable(
        &mut self,
        name: InternedString,
        kind: DeclarationKind,
        extra: VariableFlags,
    ) -> DeclarationResult {
        self.scopes.declare_variable(name, kind, extra, self.statement_depth, &self.names)
    }

    pub(crate) fn use_variable(&mut self, name: InternedString) {
        let is_eval = name == self.names.eval;
        self.scopes.current_mut().use_variable(name, is_eval);
    }

    // ========================================================================
    // Errors
    // ========================================================================

    /// Build the error for `message` at the current token. Syntax messages
    /// are prefixed with a description of the token.
    pub(crate) fn fail(&self, message: &DiagnosticMessage, args: &[&str]) -> ParseError {
        let (kind, text) = match message.category {
            DiagnosticCategory::Semantic => (ParseErrorKind::Semantic, message.render(args)),
            DiagnosticCategory::Syntax => {
                let (_, description) = self.describe_token();
                (self.token_error_kind(), format!("{}. {}", description, message.render(args)))
            }
        };
        ParseError::new(kind, message, text, self.token.location.position(), self.token.span())
    }

    /// The bare "unexpected token" error for the current token.
    pub(crate) fn unexpected(&self) -> ParseError {
        let (message, description) = self.describe_token();
        ParseError::new(
            self.token_error_kind(),
            message,
            description,
            self.token.location.position(),
            self.token.span(),
        )
    }

    /// Fail if the current token is a keyword or reserved word being used
    /// as a name of the given kind.
    pub(crate) fn fail_if_keyword(&self, what: &str) -> ParseResult<()> {
        let kind = self.token.kind;
        if kind.is_strict_reserved_word() {
            let text = self.scanner.token_text(&self.token);
            let message = if self.strict_mode() {
                &messages::RESERVED_WORD_AS_NAME_STRICT
            } else {
                &messages::RESERVED_WORD_AS_NAME
            };
            return Err(self.fail(message, &[&text, what]));
        }
        if kind == SyntaxKind::EnumKeyword {
            let text = self.scanner.token_text(&self.token);
            return Err(self.fail(&messages::RESERVED_WORD_AS_NAME, &[&text, what]));
        }
        if kind.is_keyword() && !matches!(kind, SyntaxKind::LetKeyword | SyntaxKind::YieldKeyword) {
            let text = self.scanner.token_text(&self.token);
            return Err(self.fail(&messages::KEYWORD_AS_NAME, &[&text, what]));
        }
        Ok(())
    }

    fn token_error_kind(&self) -> ParseErrorKind {
        if self.token.kind.is_error() || self.at(SyntaxKind::EndOfFileToken) {
            ParseErrorKind::Lexical
        } else {
            ParseErrorKind::Syntax
        }
    }

    fn describe_token(&self) -> (&'static DiagnosticMessage, String) {
        let text = self.scanner.token_text(&self.token);
        let message: &'static DiagnosticMessage = match self.token.kind {
            SyntaxKind::EndOfFileToken => &messages::UNEXPECTED_END_OF_SCRIPT,
            SyntaxKind::IncompleteUnicodeEscape => &messages::INCOMPLETE_UNICODE_ESCAPE,
            SyntaxKind::UnterminatedMultilineComment => &messages::UNTERMINATED_MULTILINE_COMMENT,
            SyntaxKind::UnterminatedNumericLiteral => &messages::UNTERMINATED_NUMERIC_LITERAL,
            SyntaxKind::UnterminatedStringLiteral => &messages::UNTERMINATED_STRING_LITERAL,
            SyntaxKind::UnterminatedTemplateLiteral => &messages::UNTERMINATED_TEMPLATE_LITERAL,
            SyntaxKind::InvalidIdentifierEscape => &messages::INVALID_IDENTIFIER_ESCAPE,
            SyntaxKind::InvalidIdentifierUnicodeEscape => &messages::INVALID_UNICODE_ESCAPE,
            SyntaxKind::InvalidNumericLiteral => &messages::INVALID_NUMERIC_LITERAL,
            SyntaxKind::UnterminatedOctalNumber => &messages::INVALID_USE_OF_OCTAL,
            SyntaxKind::InvalidStringLiteral => &messages::INVALID_STRING_LITERAL,
            SyntaxKind::UnrecognizedToken => &messages::UNRECOGNIZED_TOKEN,
            SyntaxKind::StringLiteral => &messages::UNEXPECTED_STRING,
            kind if kind.is_template() => &messages::UNEXPECTED_TEMPLATE,
            SyntaxKind::NumericLiteral => &messages::UNEXPECTED_NUMBER,
            SyntaxKind::Identifier => &messages::UNEXPECTED_IDENTIFIER,
            SyntaxKind::EnumKeyword => &messages::UNEXPECTED_RESERVED_WORD,
            kind if kind.is_strict_reserved_word() => &messages::UNEXPECTED_STRICT_RESERVED_WORD,
            kind if kind.is_keyword() => &messages::UNEXPECTED_KEYWORD,
            _ => &messages::UNEXPECTED_TOKEN,
        };
        (message, esparse_diagnostics::format_message(message.message, &[&text]))
    }
}
