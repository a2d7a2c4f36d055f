//! Statements and declarations.

use crate::builder::{ListBuilder, TreeBuilder};
use crate::parser::{Directive, Parser};
use crate::pattern::DestructuringKind;
use esparse_ast::node::Identifier;
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::DeclarationKind;
use esparse_core::text::TextPos;
use esparse_diagnostics::messages;
use esparse_diagnostics::{DiagnosticMessage, ParseResult};

/// The declarators of one `var`, `let` or `const` list, plus what a `for`
/// head needs to know about its last declarator.
pub(crate) struct DeclarationList<L, P, E> {
    pub declarations: L,
    pub count: u32,
    pub last_target: Option<P>,
    pub last_init: Option<E>,
    pub last_is_pattern: bool,
    pub missing_const_initializer: bool,
    pub missing_pattern_initializer: bool,
}

impl<'a> Parser<'a> {
    // ========================================================================
    // Statement lists
    // ========================================================================

    /// A statement or a declaration that may only appear directly in a
    /// statement list.
    pub(crate) fn parse_statement_list_item<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        directive: &mut Option<Directive>,
    ) -> ParseResult<Option<B::Statement>> {
        let kind = self.token.kind;
        let declaration = match kind {
            SyntaxKind::ConstKeyword => Some(DeclarationKind::Const),
            SyntaxKind::LetKeyword if self.is_let_declaration() => Some(DeclarationKind::Let),
            SyntaxKind::ClassKeyword
            | SyntaxKind::FunctionKeyword
            | SyntaxKind::ImportKeyword
            | SyntaxKind::ExportKeyword => None,
            _ => return self.parse_statement(b, directive),
        };
        *directive = None;

        self.statement_depth += 1;
        let result = match (declaration, self.token.kind) {
            (Some(kind), _) => self.parse_variable_declaration(b, kind),
            (None, SyntaxKind::ClassKeyword) => self.parse_class_declaration(b),
            (None, SyntaxKind::FunctionKeyword) => self.parse_function_declaration(b),
            _ => self.parse_module_item(b),
        };
        self.statement_depth -= 1;
        result.map(Some)
    }

    /// Whether a `let` starts a lexical declaration rather than naming a
    /// variable.
    fn is_let_declaration(&mut self) -> bool {
        if self.strict_mode() {
            return true;
        }
        matches!(
            self.peek_kind(),
            SyntaxKind::Identifier
                | SyntaxKind::LetKeyword
                | SyntaxKind::YieldKeyword
                | SyntaxKind::OpenBraceToken
                | SyntaxKind::OpenBracketToken
        )
    }

    /// Parse one statement. Returns `None` at `}`, `case`, `default` or the
    /// end of input. A string-literal expression statement is reported
    /// through `directive` so the caller can recognize a prologue.
    pub(crate) fn parse_statement<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        directive: &mut Option<Directive>,
    ) -> ParseResult<Option<B::Statement>> {
        self.enter()?;
        self.statement_depth += 1;
        let result = self.parse_statement_inner(b, directive);
        self.statement_depth -= 1;
        self.leave();
        result
    }

    fn parse_statement_inner<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        directive: &mut Option<Directive>,
    ) -> ParseResult<Option<B::Statement>> {
        *directive = None;
        let statement = match self.token.kind {
            SyntaxKind::OpenBraceToken => {
                let block = self.parse_block(b)?;
                b.create_block_statement(block)
            }
            SyntaxKind::VarKeyword => self.parse_variable_declaration(b, DeclarationKind::Var)?,
            SyntaxKind::FunctionKeyword => {
                if self.strict_mode() && self.statement_depth != 1 {
                    return Err(self.fail(&messages::STRICT_NESTED_FUNCTION_DECLARATION, &[]));
                }
                self.parse_function_declaration(b)?
            }
            SyntaxKind::SemicolonToken => {
                let span = self.token.span();
                self.next();
                b.create_empty(span)
            }
            SyntaxKind::IfKeyword => self.parse_if_statement(b)?,
            SyntaxKind::DoKeyword => self.parse_do_while_statement(b)?,
            SyntaxKind::WhileKeyword => self.parse_while_statement(b)?,
            SyntaxKind::ForKeyword => self.parse_for_statement(b)?,
            SyntaxKind::ContinueKeyword => self.parse_continue_statement(b)?,
            SyntaxKind::BreakKeyword => self.parse_break_statement(b)?,
            SyntaxKind::ReturnKeyword => self.parse_return_statement(b)?,
            SyntaxKind::WithKeyword => self.parse_with_statement(b)?,
            SyntaxKind::SwitchKeyword => self.parse_switch_statement(b)?,
            SyntaxKind::ThrowKeyword => self.parse_throw_statement(b)?,
            SyntaxKind::TryKeyword => self.parse_try_statement(b)?,
            SyntaxKind::DebuggerKeyword => self.parse_debugger_statement(b)?,
            SyntaxKind::ClassKeyword => return Err(self.fail(&messages::CLASS_NOT_IN_BLOCK, &[])),
            SyntaxKind::ConstKeyword => return Err(self.fail(&messages::LEXICAL_DECLARATION_NOT_IN_BLOCK, &[])),
            SyntaxKind::EndOfFileToken
            | SyntaxKind::CaseKeyword
            | SyntaxKind::DefaultKeyword
            | SyntaxKind::CloseBraceToken => return Ok(None),
            SyntaxKind::Identifier | SyntaxKind::YieldKeyword | SyntaxKind::LetKeyword => {
                self.parse_expression_or_label_statement(b)?
            }
            SyntaxKind::StringLiteral => {
                let literal = self.token;
                let trivial_count = self.state.non_trivial_expression_count;
                let statement = self.parse_expression_statement(b)?;
                if self.state.non_trivial_expression_count == trivial_count {
                    *directive = literal.string().map(|value| Directive {
                        value,
                        literal_length: literal.location.end - literal.location.start,
                    });
                }
                statement
            }
            _ => self.parse_expression_statement(b)?,
        };
        Ok(Some(statement))
    }

    /// A statement used as the body of a compound statement.
    fn parse_nested_statement<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        missing: &DiagnosticMessage,
        args: &[&str],
    ) -> ParseResult<B::Statement> {
        let mut directive = None;
        match self.parse_statement(b, &mut directive)? {
            Some(statement) => Ok(statement),
            None => Err(self.fail(missing, args)),
        }
    }

    /// `{ ... }` in its own lexical scope.
    pub(crate) fn parse_block<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Block> {
        let start = self.token_start();
        self.next();
        self.push_lexical_scope();
        let statements = self.parse_source_elements(b, false)?;
        self.require(SyntaxKind::CloseBraceToken, &messages::EXPECTED_CLOSE_BRACE_AFTER_BLOCK, &[])?;
        self.next();
        let scope = self.pop_lexical_scope(b);
        Ok(b.create_block(self.span_from(start), statements, scope))
    }

    fn parse_expression_statement<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let start = self.token_start();
        let expression = self.parse_expression(b)?;
        if !self.auto_semicolon() {
            return Err(self.unexpected());
        }
        Ok(b.create_expression_statement(self.span_from(start), expression))
    }

    /// `(expression)` around the condition of `if`, `while`, `with` and
    /// `switch`.
    fn parse_parenthesized_expression<B: TreeBuilder<'a>>(&mut self, b: &mut B, what: &str) -> ParseResult<B::Expression> {
        self.expect(SyntaxKind::OpenParenToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &["(", "start", what])?;
        let expression = self.parse_expression(b)?;
        self.expect(SyntaxKind::CloseParenToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &[")", "end", what])?;
        Ok(expression)
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    pub(crate) fn parse_variable_declaration<B: TreeBuilder<'a>>(&mut self, b: &mut B, kind: DeclarationKind) -> ParseResult<B::Statement> {
        let start = self.token_start();
        self.next();
        let list = self.parse_variable_declaration_list(b, kind, false)?;
        if !self.auto_semicolon() {
            return Err(self.fail(&messages::EXPECTED_SEMICOLON_AFTER_VARIABLE_DECLARATION, &[]));
        }
        let declaration = b.create_variable_declaration(self.span_from(start), kind, list.declarations);
        Ok(b.create_variable_statement(declaration))
    }

    /// Parse `a = 1, [b] = c, ...`. Outside a `for` head every pattern and
    /// every `const` needs an initializer; inside one the caller decides.
    pub(crate) fn parse_variable_declaration_list<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        kind: DeclarationKind,
        in_for_head: bool,
    ) -> ParseResult<DeclarationList<B::List<B::VariableDeclarator>, B::Pattern, B::Expression>> {
        let mut list = DeclarationList {
            declarations: B::List::<B::VariableDeclarator>::default(),
            count: 0,
            last_target: None,
            last_init: None,
            last_is_pattern: false,
            missing_const_initializer: false,
            missing_pattern_initializer: false,
        };
        let destructuring_kind = DestructuringKind::from(kind);
        loop {
            let start = self.token_start();
            let (target, name) = if self.match_spec_identifier() {
                if kind != DeclarationKind::Var && self.at(SyntaxKind::LetKeyword) {
                    return Err(self.fail(&messages::LET_AS_LEXICAL_NAME, &[]));
                }
                let id = self.current_identifier();
                self.next();
                self.declare_binding(id, destructuring_kind)?;
                (b.create_binding_pattern(id), Some(id))
            } else if self.at(SyntaxKind::OpenBraceToken) || self.at(SyntaxKind::OpenBracketToken) {
                (self.parse_binding_pattern(b, destructuring_kind)?, None)
            } else {
                self.fail_if_keyword("variable name")?;
                return Err(self.fail(&messages::EXPECTED_VARIABLE_NAME, &[]));
            };

            let init = if self.consume(SyntaxKind::EqualsToken) {
                Some(self.parse_assignment_expression(b)?)
            } else {
                match name {
                    None if !in_for_head => return Err(self.fail(&messages::EXPECTED_DESTRUCTURING_INITIALIZER, &[])),
                    None => list.missing_pattern_initializer = true,
                    Some(id) if kind == DeclarationKind::Const => {
                        if !in_for_head {
                            let text = self.resolve(id.name).to_string();
                            return Err(self.fail(&messages::CONST_WITHOUT_INITIALIZER, &[&text]));
                        }
                        list.missing_const_initializer = true;
                    }
                    Some(_) => {}
                }
                None
            };

            let declarator = b.create_variable_declarator(self.span_from(start), target, init);
            list.declarations.push(declarator);
            list.count += 1;
            list.last_target = Some(target);
            list.last_init = init;
            list.last_is_pattern = name.is_none();

            if !self.consume(SyntaxKind::CommaToken) {
                return Ok(list);
            }
        }
    }

    // ========================================================================
    // Control flow
    // ========================================================================

    /// `if`/`else if` chains are parsed in a loop and folded back to front,
    /// so a long chain does not recurse once per branch.
    fn parse_if_statement<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let start = self.token_start();
        self.next();
        let test = self.parse_parenthesized_expression(b, "'if' condition")?;
        let consequent = self.parse_nested_statement(b, &messages::EXPECTED_IF_BODY, &[])?;
        if !self.at(SyntaxKind::ElseKeyword) {
            return Ok(b.create_if(self.span_from(start), test, consequent, None));
        }

        let mut branches: Vec<(TextPos, B::Expression, B::Statement)> = Vec::new();
        let mut trailing_else = None;
        while self.consume(SyntaxKind::ElseKeyword) {
            if !self.at(SyntaxKind::IfKeyword) {
                trailing_else = Some(self.parse_nested_statement(b, &messages::EXPECTED_ELSE_BODY, &[])?);
                break;
            }
            let branch_start = self.token_start();
            self.next();
            let branch_test = self.parse_parenthesized_expression(b, "'if' condition")?;
            let branch_body = self.parse_nested_statement(b, &messages::EXPECTED_IF_BODY, &[])?;
            branches.push((branch_start, branch_test, branch_body));
        }

        let mut alternate = trailing_else;
        while let Some((branch_start, branch_test, branch_body)) = branches.pop() {
            alternate = Some(b.create_if(self.span_from(branch_start), branch_test, branch_body, alternate));
        }
        Ok(b.create_if(self.span_from(start), test, consequent, alternate))
    }

    fn parse_do_while_statement<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let start = self.token_start();
        self.next();
        self.scopes.start_loop();
        let body = self.parse_nested_statement(b, &messages::EXPECTED_STATEMENT_AFTER_DO, &[])?;
        self.scopes.end_loop();
        self.expect(SyntaxKind::WhileKeyword, &messages::EXPECTED_TOKEN_TO_DELIMIT, &["while", "end", "do-while loop"])?;
        self.expect(SyntaxKind::OpenParenToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &["(", "start", "do-while loop condition"])?;
        if self.at(SyntaxKind::CloseParenToken) {
            return Err(self.fail(&messages::EMPTY_DO_WHILE_CONDITION, &[]));
        }
        let test = self.parse_expression(b)?;
        self.expect(SyntaxKind::CloseParenToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &[")", "end", "do-while loop condition"])?;
        // A `;` after `do ... while (x)` is always optional.
        self.consume(SyntaxKind::SemicolonToken);
        Ok(b.create_do_while(self.span_from(start), body, test))
    }

    fn parse_while_statement<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let start = self.token_start();
        self.next();
        self.expect(SyntaxKind::OpenParenToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &["(", "start", "while loop condition"])?;
        if self.at(SyntaxKind::CloseParenToken) {
            return Err(self.fail(&messages::EMPTY_WHILE_CONDITION, &[]));
        }
        let test = self.parse_expression(b)?;
        self.expect(SyntaxKind::CloseParenToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &[")", "end", "while loop condition"])?;
        self.scopes.start_loop();
        let body = self.parse_nested_statement(b, &messages::EXPECTED_WHILE_BODY, &[])?;
        self.scopes.end_loop();
        Ok(b.create_while(self.span_from(start), test, body))
    }

    fn at_enumeration_keyword(&self) -> bool {
        self.at(SyntaxKind::InKeyword) || self.at_contextual(self.names.of)
    }

    /// `for (;;)`, `for (... in ...)` and `for (... of ...)` with a `var`,
    /// `let` or `const` head, an expression head or a destructuring head.
    fn parse_for_statement<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let start = self.token_start();
        self.next();
        self.expect(SyntaxKind::OpenParenToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &["(", "start", "for loop header"])?;

        let head_kind = self.token.kind;
        let declaration_kind = match head_kind {
            SyntaxKind::VarKeyword => Some(DeclarationKind::Var),
            SyntaxKind::ConstKeyword => Some(DeclarationKind::Const),
            SyntaxKind::LetKeyword if self.is_let_declaration() => Some(DeclarationKind::Let),
            _ => None,
        };

        if let Some(kind) = declaration_kind {
            let is_lexical = kind != DeclarationKind::Var;
            if is_lexical {
                self.push_lexical_scope();
            }
            let declaration_start = self.token_start();
            self.next();
            // Head declarations are never at the function body's top level.
            self.statement_depth += 1;
            let allows_in = std::mem::replace(&mut self.allows_in, false);
            let list = self.parse_variable_declaration_list(b, kind, true);
            self.allows_in = allows_in;
            self.statement_depth -= 1;
            let list = list?;

            if self.at_enumeration_keyword() {
                if list.count != 1 {
                    return Err(self.fail(&messages::SINGLE_ENUMERATION_VARIABLE, &[]));
                }
                let is_of = !self.at(SyntaxKind::InKeyword);
                if list.last_init.is_some() {
                    if is_of {
                        return Err(self.fail(&messages::FOR_OF_INITIALIZER, &[]));
                    }
                    if self.strict_mode() || is_lexical {
                        return Err(self.fail(&messages::STRICT_ENUMERATION_INITIALIZER, &[]));
                    }
                    if list.last_is_pattern {
                        return Err(self.fail(&messages::PATTERN_ENUMERATION_INITIALIZER, &[]));
                    }
                }
                let Some(pattern) = list.last_target else {
                    return Err(self.fail(&messages::EXPECTED_VARIABLE_NAME, &[]));
                };
                let target = b.create_for_target_declaration(kind, pattern, list.last_init);
                return self.parse_for_enumeration_rest(b, start, target, is_lexical);
            }

            if list.missing_const_initializer {
                return Err(self.fail(&messages::FOR_CONST_WITHOUT_INITIALIZER, &[]));
            }
            if list.missing_pattern_initializer {
                return Err(self.fail(&messages::EXPECTED_DESTRUCTURING_INITIALIZER, &[]));
            }
            let declaration = b.create_variable_declaration(self.span_from(declaration_start), kind, list.declarations);
            let init = b.create_for_init_variables(declaration);
            self.expect(SyntaxKind::SemicolonToken, &messages::EXPECTED_SEMICOLON_AFTER_FOR_INIT, &[])?;
            return self.parse_for_loop_rest(b, start, Some(init), is_lexical);
        }

        if self.consume(SyntaxKind::SemicolonToken) {
            return self.parse_for_loop_rest(b, start, None, false);
        }

        if self.at(SyntaxKind::OpenBraceToken) || self.at(SyntaxKind::OpenBracketToken) {
            let save_point = self.create_save_point();
            let allows_in = std::mem::replace(&mut self.allows_in, false);
            let pattern = self.parse_assignment_pattern(b)?;
            self.allows_in = allows_in;
            match pattern {
                Some(pattern) if self.at_enumeration_keyword() => {
                    let target = b.create_for_target_pattern(pattern);
                    return self.parse_for_enumeration_rest(b, start, target, false);
                }
                _ => {
                    tracing::trace!(offset = save_point.offset(), "for head is not a destructuring target");
                    self.restore_save_point(save_point);
                }
            }
        }

        let allows_in = std::mem::replace(&mut self.allows_in, false);
        let expression = self.parse_expression(b)?;
        self.allows_in = allows_in;

        if self.at_enumeration_keyword() {
            if !b.is_assignment_location(&expression) {
                return Err(self.fail(&messages::ENUMERATION_LHS_NOT_REFERENCE, &[]));
            }
            if let Some(name) = b.resolved_name(&expression) {
                self.check_strict_assignment_target(name)?;
                self.scopes.current_mut().set_written(name);
            }
            let pattern = b.create_expression_pattern(expression);
            let target = b.create_for_target_pattern(pattern);
            return self.parse_for_enumeration_rest(b, start, target, false);
        }

        let init = b.create_for_init_expression(expression);
        self.expect(SyntaxKind::SemicolonToken, &messages::EXPECTED_SEMICOLON_AFTER_FOR_INIT, &[])?;
        self.parse_for_loop_rest(b, start, Some(init), false)
    }

    /// Everything after the first `;` of a `for (;;)` loop.
    fn parse_for_loop_rest<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        start: TextPos,
        init: Option<B::ForInit>,
        is_lexical: bool,
    ) -> ParseResult<B::Statement> {
        let test = if self.at(SyntaxKind::SemicolonToken) { None } else { Some(self.parse_expression(b)?) };
        self.expect(SyntaxKind::SemicolonToken, &messages::EXPECTED_SEMICOLON_AFTER_FOR_CONDITION, &[])?;
        let update = if self.at(SyntaxKind::CloseParenToken) { None } else { Some(self.parse_expression(b)?) };
        self.expect(SyntaxKind::CloseParenToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &[")", "end", "for loop header"])?;
        self.scopes.start_loop();
        let body = self.parse_nested_statement(b, &messages::EXPECTED_FOR_BODY, &[])?;
        self.scopes.end_loop();
        let scope = if is_lexical { self.pop_lexical_scope(b) } else { b.environment(&[]) };
        Ok(b.create_for(self.span_from(start), init, test, update, body, scope))
    }

    /// Everything from the `in` or `of` of an enumeration.
    fn parse_for_enumeration_rest<B: TreeBuilder<'a>>(
        &mut self,
        b: &mut B,
        start: TextPos,
        target: B::ForTarget,
        is_lexical: bool,
    ) -> ParseResult<B::Statement> {
        let is_of = !self.at(SyntaxKind::InKeyword);
        let what = if is_of { "of" } else { "in" };
        self.next();
        if self.at(SyntaxKind::CloseParenToken) {
            return Err(self.fail(&messages::EXPECTED_ENUMERATION_SUBJECT, &[]));
        }
        let right = if is_of { self.parse_assignment_expression(b)? } else { self.parse_expression(b)? };
        self.expect(SyntaxKind::CloseParenToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &[")", "end", "for loop header"])?;
        self.scopes.start_loop();
        let body = self.parse_nested_statement(b, &messages::EXPECTED_ENUMERATION_BODY, &[what])?;
        self.scopes.end_loop();
        let scope = if is_lexical { self.pop_lexical_scope(b) } else { b.environment(&[]) };
        let span = self.span_from(start);
        Ok(if is_of {
            b.create_for_of(span, target, right, body, scope)
        } else {
            b.create_for_in(span, target, right, body, scope)
        })
    }

    // ========================================================================
    // Jumps
    // ========================================================================

    fn parse_continue_statement<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let start = self.token_start();
        self.next();
        if self.auto_semicolon() {
            if !self.scopes.continue_is_valid() {
                return Err(self.fail(&messages::CONTINUE_OUTSIDE_LOOP, &[]));
            }
            return Ok(b.create_continue(self.span_from(start), None));
        }
        if !self.match_spec_identifier() {
            return Err(self.unexpected());
        }
        let label = self.current_identifier();
        match self.scopes.get_label(label.name) {
            None => {
                let text = self.resolve(label.name).to_string();
                return Err(self.fail(&messages::UNDECLARED_LABEL, &[&text]));
            }
            Some(target) if !target.is_loop => {
                let text = self.resolve(label.name).to_string();
                return Err(self.fail(&messages::CONTINUE_TO_NON_LOOP_LABEL, &[&text]));
            }
            Some(_) => {}
        }
        self.next();
        if !self.auto_semicolon() {
            return Err(self.fail(&messages::EXPECTED_SEMICOLON_AFTER_CONTINUE, &[]));
        }
        Ok(b.create_continue(self.span_from(start), Some(label)))
    }

    fn parse_break_statement<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let start = self.token_start();
        self.next();
        if self.auto_semicolon() {
            if !self.scopes.break_is_valid() {
                return Err(self.fail(&messages::BREAK_OUTSIDE_LOOP, &[]));
            }
            return Ok(b.create_break(self.span_from(start), None));
        }
        if !self.match_spec_identifier() {
            return Err(self.unexpected());
        }
        let label = self.current_identifier();
        if self.scopes.get_label(label.name).is_none() {
            let text = self.resolve(label.name).to_string();
            return Err(self.fail(&messages::UNDECLARED_LABEL, &[&text]));
        }
        self.next();
        if !self.auto_semicolon() {
            return Err(self.fail(&messages::EXPECTED_SEMICOLON_AFTER_BREAK, &[]));
        }
        Ok(b.create_break(self.span_from(start), Some(label)))
    }

    fn parse_return_statement<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let start = self.token_start();
        if !self.scopes.current().is_function {
            return Err(self.fail(&messages::RETURN_OUTSIDE_FUNCTION, &[]));
        }
        self.next();
        if self.auto_semicolon() {
            return Ok(b.create_return(self.span_from(start), None));
        }
        let argument = self.parse_expression(b)?;
        if !self.auto_semicolon() {
            return Err(self.fail(&messages::EXPECTED_SEMICOLON_AFTER_RETURN, &[]));
        }
        Ok(b.create_return(self.span_from(start), Some(argument)))
    }

    fn parse_throw_statement<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let start = self.token_start();
        self.next();
        if self.prev_terminator() {
            return Err(self.fail(&messages::NEWLINE_AFTER_THROW, &[]));
        }
        if self.at(SyntaxKind::SemicolonToken) || self.at(SyntaxKind::CloseBraceToken) || self.at(SyntaxKind::EndOfFileToken) {
            return Err(self.fail(&messages::EXPECTED_THROW_EXPRESSION, &[]));
        }
        let argument = self.parse_expression(b)?;
        if !self.auto_semicolon() {
            return Err(self.fail(&messages::EXPECTED_SEMICOLON_AFTER_THROW, &[]));
        }
        Ok(b.create_throw(self.span_from(start), argument))
    }

    fn parse_with_statement<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let start = self.token_start();
        if self.strict_mode() {
            return Err(self.fail(&messages::WITH_IN_STRICT_MODE, &[]));
        }
        self.scopes.current_mut().needs_full_activation = true;
        self.next();
        let object = self.parse_parenthesized_expression(b, "'with' statement object")?;
        let body = self.parse_nested_statement(b, &messages::WITH_NEEDS_BODY, &[])?;
        Ok(b.create_with(self.span_from(start), object, body))
    }

    fn parse_debugger_statement<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let start = self.token_start();
        self.next();
        if !self.auto_semicolon() {
            return Err(self.fail(&messages::DEBUGGER_NEEDS_SEMICOLON, &[]));
        }
        Ok(b.create_debugger(self.span_from(start)))
    }

    // ========================================================================
    // Switch
    // ========================================================================

    fn parse_switch_statement<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let start = self.token_start();
        self.next();
        let discriminant = self.parse_parenthesized_expression(b, "switch subject")?;
        self.expect(SyntaxKind::OpenBraceToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &["{", "start", "switch body"])?;
        self.push_lexical_scope();
        self.scopes.start_switch();

        let first_clauses = self.parse_switch_clauses(b)?;
        let default_clause = if self.at(SyntaxKind::DefaultKeyword) {
            let clause_start = self.token_start();
            self.next();
            self.expect(SyntaxKind::ColonToken, &messages::EXPECTED_COLON_AFTER_DEFAULT, &[])?;
            let consequent = self.parse_source_elements(b, false)?;
            Some(b.create_switch_clause(self.span_from(clause_start), None, consequent))
        } else {
            None
        };
        let second_clauses = self.parse_switch_clauses(b)?;
        if self.at(SyntaxKind::DefaultKeyword) {
            return Err(self.fail(&messages::MULTIPLE_DEFAULT_CLAUSES, &[]));
        }

        self.scopes.end_switch();
        self.expect(SyntaxKind::CloseBraceToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &["}", "end", "switch body"])?;
        let scope = self.pop_lexical_scope(b);
        Ok(b.create_switch(self.span_from(start), discriminant, first_clauses, default_clause, second_clauses, scope))
    }

    fn parse_switch_clauses<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::List<B::SwitchClause>> {
        let mut clauses = B::List::<B::SwitchClause>::default();
        while self.at(SyntaxKind::CaseKeyword) {
            let clause_start = self.token_start();
            self.next();
            let test = self.parse_expression(b)?;
            self.expect(SyntaxKind::ColonToken, &messages::EXPECTED_COLON_AFTER_CASE, &[])?;
            let consequent = self.parse_source_elements(b, false)?;
            clauses.push(b.create_switch_clause(self.span_from(clause_start), Some(test), consequent));
        }
        Ok(clauses)
    }

    // ========================================================================
    // Try
    // ========================================================================

    fn parse_try_statement<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let start = self.token_start();
        self.next();
        self.require(SyntaxKind::OpenBraceToken, &messages::EXPECTED_TRY_BLOCK, &[])?;
        let block = self.parse_block(b)?;

        let handler = if self.at(SyntaxKind::CatchKeyword) {
            Some(self.parse_catch_clause(b)?)
        } else {
            None
        };
        let finalizer = if self.consume(SyntaxKind::FinallyKeyword) {
            self.require(SyntaxKind::OpenBraceToken, &messages::EXPECTED_FINALLY_BLOCK, &[])?;
            Some(self.parse_block(b)?)
        } else {
            None
        };
        if handler.is_none() && finalizer.is_none() {
            return Err(self.fail(&messages::TRY_WITHOUT_HANDLER, &[]));
        }
        Ok(b.create_try(self.span_from(start), block, handler, finalizer))
    }

    fn parse_catch_clause<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::CatchClause> {
        let start = self.token_start();
        self.next();
        self.expect(SyntaxKind::OpenParenToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &["(", "start", "'catch' target"])?;
        let index = self.push_lexical_scope();
        self.scopes.get_mut(index).is_catch_scope = true;

        let parameter = if self.match_spec_identifier() {
            let id = self.current_identifier();
            self.next();
            self.declare_binding(id, DestructuringKind::ToCatchParameters)?;
            b.create_binding_pattern(id)
        } else if self.at(SyntaxKind::OpenBraceToken) || self.at(SyntaxKind::OpenBracketToken) {
            self.scopes.get_mut(index).is_catch_scope = false;
            self.parse_binding_pattern(b, DestructuringKind::ToCatchParameters)?
        } else {
            self.fail_if_keyword("catch variable name")?;
            return Err(self.fail(&messages::EXPECTED_CATCH_TARGET, &[]));
        };

        self.expect(SyntaxKind::CloseParenToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &[")", "end", "'catch' target"])?;
        self.require(SyntaxKind::OpenBraceToken, &messages::EXPECTED_CATCH_BLOCK, &[])?;
        let body = self.parse_block(b)?;
        let scope = self.pop_lexical_scope(b);
        Ok(b.create_catch(self.span_from(start), parameter, body, scope))
    }

    // ========================================================================
    // Labels and expression statements
    // ========================================================================

    /// An expression statement, or a run of `label:` prefixes and the
    /// statement they label.
    fn parse_expression_or_label_statement<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let mut labels: Vec<(TextPos, Identifier)> = Vec::new();
        loop {
            if self.peek_kind() != SyntaxKind::ColonToken {
                if labels.is_empty() {
                    return self.parse_expression_statement(b);
                }
                break;
            }
            let label = self.current_identifier();
            if labels.iter().any(|(_, seen)| seen.name == label.name) || self.scopes.get_label(label.name).is_some() {
                let text = self.resolve(label.name).to_string();
                return Err(self.fail(&messages::LABEL_REDECLARED, &[&text]));
            }
            labels.push((self.token_start(), label));
            self.next();
            self.expect(SyntaxKind::ColonToken, &messages::LABELS_NEED_COLON, &[])?;
            if !self.match_spec_identifier() {
                break;
            }
        }

        let is_loop = matches!(
            self.token.kind,
            SyntaxKind::ForKeyword | SyntaxKind::WhileKeyword | SyntaxKind::DoKeyword
        );
        for (_, label) in &labels {
            self.scopes.current_mut().push_label(label.name, is_loop);
        }
        let body = self.parse_nested_statement(b, &messages::EXPECTED_STATEMENT, &[]);
        for _ in &labels {
            self.scopes.current_mut().pop_label();
        }
        let mut statement = body?;
        while let Some((label_start, label)) = labels.pop() {
            statement = b.create_labeled(self.span_from(label_start), label, statement);
        }
        Ok(statement)
    }
}
