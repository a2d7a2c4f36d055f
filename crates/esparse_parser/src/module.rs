//! `import` and `export` declarations.
//!
//! Module items are parsed only at the top level of a module. Besides the
//! tree nodes they fill the module record, and exported local names are
//! checked against the module's top-level declarations once the whole
//! module has been parsed.

use crate::builder::{ListBuilder, TreeBuilder};
use crate::parser::Parser;
use crate::scope::DeclarationResult;
use esparse_ast::node::{
    ExportEntry, ExportEntryKind, Identifier, ImportEntry, ImportSpecifierKind, ModuleRecord, StringLiteral,
};
use esparse_ast::syntax_kind::SyntaxKind;
use esparse_ast::types::{DeclarationKind, VariableFlags};
use esparse_core::collections::FxHashSet;
use esparse_core::intern::InternedString;
use esparse_core::text::{TextPos, TextSpan};
use esparse_diagnostics::messages;
use esparse_diagnostics::ParseResult;
use tracing::trace;

/// Per-module bookkeeping kept while a module is parsed.
#[derive(Debug, Default)]
pub(crate) struct ModuleData {
    pub record: ModuleRecord,
    pub exported_names: FxHashSet<InternedString>,
    /// Local names of `export { a as b }`, with the span of `a`.
    pub exported_bindings: Vec<(InternedString, TextSpan)>,
    pub has_default_export: bool,
    /// Names bound by the declaration of an `export var|let|const|function|class`.
    bound_names: Option<Vec<InternedString>>,
}

impl ModuleData {
    fn add_exported_name(&mut self, name: InternedString) -> bool {
        self.exported_names.insert(name)
    }

    fn add_local_export(&mut self, export_name: InternedString, local_name: InternedString) {
        self.record.export_entries.push(ExportEntry {
            kind: ExportEntryKind::Local,
            export_name: Some(export_name),
            local_name: Some(local_name),
            module_request: None,
        });
    }
}

/// One `a as b` entry of an export list.
#[derive(Clone, Copy)]
struct ExportListEntry {
    local: Identifier,
    exported: InternedString,
    local_is_keyword: bool,
}

impl<'a> Parser<'a> {
    /// Report a name bound by a declaration, for an enclosing `export`.
    pub(crate) fn record_bound_name(&mut self, name: InternedString) {
        if self.scopes.len() != 1 {
            return;
        }
        if let Some(names) = self.module.as_mut().and_then(|module| module.bound_names.as_mut()) {
            names.push(name);
        }
    }

    pub(crate) fn parse_module_item<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        if self.module.is_none() {
            return Err(self.fail(&messages::MODULE_ITEM_OUTSIDE_MODULE, &[]));
        }
        if self.scopes.len() != 1 || self.statement_depth != 1 {
            return Err(self.fail(&messages::MODULE_ITEM_NOT_TOP_LEVEL, &[]));
        }
        if self.at(SyntaxKind::ImportKeyword) {
            self.parse_import_declaration(b)
        } else {
            self.parse_export_declaration(b)
        }
    }

    /// Every name exported by an `export { ... }` list without a `from`
    /// must be declared at the top level of the module. Found bindings are
    /// flagged as exported.
    pub(crate) fn check_exported_bindings(&mut self) -> ParseResult<()> {
        let Some(module) = &self.module else {
            return Ok(());
        };
        let names: Vec<InternedString> = module.exported_bindings.iter().map(|&(name, _)| name).collect();
        for name in names {
            if !self.scopes.get_mut(0).mark_variable_as_exported(name) {
                let text = self.resolve(name).to_string();
                return Err(self.fail(&messages::EXPORTED_BINDING_NOT_DECLARED, &[&text]));
            }
        }
        Ok(())
    }

    fn module_data(&mut self) -> &mut ModuleData {
        self.module.get_or_insert_with(ModuleData::default)
    }

    fn parse_module_name(&mut self) -> ParseResult<StringLiteral> {
        if !self.at(SyntaxKind::StringLiteral) {
            return Err(self.fail(&messages::MODULE_NAME_NOT_STRING, &[]));
        }
        let span = self.token.span();
        let value = self.token.string().unwrap_or_else(|| self.interner.intern(""));
        self.next();
        self.module_data().record.add_requested_module(value);
        Ok(StringLiteral { span, value })
    }

    // ========================================================================
    // Imports
    // ========================================================================

    fn parse_import_declaration<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let start = self.token_start();
        self.next();

        let mut specifiers = B::List::<B::ImportSpecifier>::default();
        let mut entries: Vec<(ImportSpecifierKind, InternedString, InternedString)> = Vec::new();

        if !self.at(SyntaxKind::StringLiteral) {
            let mut expects_more = true;
            if self.match_spec_identifier() {
                let local = self.current_identifier();
                self.next();
                self.declare_import(local, VariableFlags::IMPORTED)?;
                let imported = self.names.default;
                specifiers.push(b.create_import_specifier(ImportSpecifierKind::Default, imported, local));
                entries.push((ImportSpecifierKind::Default, imported, local.name));
                expects_more = self.consume(SyntaxKind::CommaToken);
            }
            if expects_more {
                match self.token.kind {
                    SyntaxKind::AsteriskToken => {
                        self.next();
                        if !self.at_contextual(self.names.as_) {
                            return Err(self.fail(&messages::EXPECTED_AS_BEFORE_BINDING, &[]));
                        }
                        self.next();
                        let local = self.parse_import_binding()?;
                        self.declare_import(local, VariableFlags::IMPORTED | VariableFlags::IMPORTED_NAMESPACE)?;
                        let imported = self.interner.intern("*");
                        specifiers.push(b.create_import_specifier(ImportSpecifierKind::Namespace, imported, local));
                        entries.push((ImportSpecifierKind::Namespace, imported, local.name));
                    }
                    SyntaxKind::OpenBraceToken => {
                        self.next();
                        while !self.consume(SyntaxKind::CloseBraceToken) {
                            let (imported, local) = self.parse_named_import()?;
                            self.declare_import(local, VariableFlags::IMPORTED)?;
                            specifiers.push(b.create_import_specifier(ImportSpecifierKind::Named, imported, local));
                            entries.push((ImportSpecifierKind::Named, imported, local.name));
                            if !self.at(SyntaxKind::CloseBraceToken) {
                                self.expect(SyntaxKind::CommaToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &["}", "end", "import list"])?;
                            }
                        }
                    }
                    _ => return Err(self.fail(&messages::EXPECTED_IMPORT_CLAUSE, &[])),
                }
            }
            if !self.at_contextual(self.names.from) {
                return Err(self.fail(&messages::EXPECTED_FROM_BEFORE_IMPORT, &[]));
            }
            self.next();
        }

        let module = self.parse_module_name()?;
        if !self.auto_semicolon() {
            return Err(self.fail(&messages::EXPECTED_SEMICOLON_AFTER_IMPORT, &[]));
        }

        let record = &mut self.module_data().record;
        for (kind, import_name, local_name) in entries {
            record.import_entries.push(ImportEntry { module_request: module.value, kind, import_name, local_name });
        }
        Ok(b.create_import(self.span_from(start), specifiers, module))
    }

    /// `name` or `name as local` inside `import { ... }`.
    fn parse_named_import(&mut self) -> ParseResult<(InternedString, Identifier)> {
        if !self.token.kind.is_identifier_or_keyword() {
            return Err(self.fail(&messages::EXPECTED_IMPORTED_NAME, &[]));
        }
        let imported = self.current_identifier();
        let imported_is_binding = self.match_spec_identifier();
        self.next();
        if self.at_contextual(self.names.as_) {
            self.next();
            let local = self.parse_import_binding()?;
            return Ok((imported.name, local));
        }
        if !imported_is_binding {
            return Err(self.fail(&messages::KEYWORD_AS_IMPORT_BINDING, &[]));
        }
        Ok((imported.name, imported))
    }

    fn parse_import_binding(&mut self) -> ParseResult<Identifier> {
        if self.match_spec_identifier() {
            let id = self.current_identifier();
            self.next();
            return Ok(id);
        }
        if self.token.kind.is_identifier_or_keyword() {
            return Err(self.fail(&messages::KEYWORD_AS_IMPORT_BINDING, &[]));
        }
        Err(self.fail(&messages::EXPECTED_IMPORT_BINDING, &[]))
    }

    /// Imported bindings are immutable lexical names of the module scope.
    fn declare_import(&mut self, id: Identifier, flags: VariableFlags) -> ParseResult<()> {
        let text = self.resolve(id.name).to_string();
        if self.names.is_eval_or_arguments(id.name) {
            return Err(self.fail(&messages::STRICT_IMPORT_BINDING, &[&text]));
        }
        let result = self.declare_variable(id.name, DeclarationKind::Const, flags);
        if result.contains(DeclarationResult::INVALID_DUPLICATE_DECLARATION) {
            return Err(self.fail(&messages::IMPORT_BINDING_TWICE, &[&text]));
        }
        Ok(())
    }

    // ========================================================================
    // Exports
    // ========================================================================

    fn parse_export_declaration<B: TreeBuilder<'a>>(&mut self, b: &mut B) -> ParseResult<B::Statement> {
        let start = self.token_start();
        self.next();
        match self.token.kind {
            SyntaxKind::AsteriskToken => {
                self.next();
                if !self.at_contextual(self.names.from) {
                    return Err(self.fail(&messages::EXPECTED_FROM_BEFORE_EXPORT, &[]));
                }
                self.next();
                let module = self.parse_module_name()?;
                if !self.auto_semicolon() {
                    return Err(self.fail(&messages::EXPECTED_SEMICOLON_AFTER_EXPORT, &[]));
                }
                self.module_data().record.export_entries.push(ExportEntry {
                    kind: ExportEntryKind::Star,
                    export_name: None,
                    local_name: None,
                    module_request: Some(module.value),
                });
                Ok(b.create_export_all(self.span_from(start), module))
            }
            SyntaxKind::DefaultKeyword => self.parse_export_default(b, start),
            SyntaxKind::OpenBraceToken => self.parse_export_list(b, start),
            _ => self.parse_exported_declaration(b, start),
        }
    }

    fn parse_export_default<B: TreeBuilder<'a>>(&mut self, b: &mut B, start: TextPos) -> ParseResult<B::Statement> {
        let default = self.names.default;
        let module = self.module_data();
        if module.has_default_export {
            return Err(self.fail(&messages::DUPLICATE_DEFAULT_EXPORT, &[]));
        }
        module.has_default_export = true;
        if !module.add_exported_name(default) {
            return Err(self.fail(&messages::DUPLICATE_DEFAULT_EXPORT, &[]));
        }
        self.next();

        let default_export = self.names.default_export;
        let statement = match self.token.kind {
            SyntaxKind::FunctionKeyword => {
                let (function, name) = self.parse_function_declaration_node(b, true)?;
                let local = self.declare_default_export(name)?;
                b.create_export_default_function(self.span_from(start), function, local)
            }
            SyntaxKind::ClassKeyword => {
                let (class, name) = self.parse_class_declaration_node(b, true)?;
                let local = self.declare_default_export(name)?;
                b.create_export_default_class(self.span_from(start), class, local)
            }
            _ => {
                let expression = self.parse_assignment_expression(b)?;
                if !self.auto_semicolon() {
                    return Err(self.fail(&messages::EXPECTED_SEMICOLON_AFTER_EXPORT, &[]));
                }
                self.declare_default_export(None)?;
                b.create_export_default_expression(self.span_from(start), expression, default_export)
            }
        };
        Ok(statement)
    }

    /// The local name of a default export: the declared name, or the
    /// hidden `*default*` binding for anonymous values.
    fn declare_default_export(&mut self, name: Option<InternedString>) -> ParseResult<InternedString> {
        let local = match name {
            Some(name) => name,
            None => {
                let local = self.names.default_export;
                let result = self.declare_variable(local, DeclarationKind::Const, VariableFlags::NONE);
                if result.contains(DeclarationResult::INVALID_DUPLICATE_DECLARATION) {
                    return Err(self.fail(&messages::DUPLICATE_DEFAULT_EXPORT, &[]));
                }
                local
            }
        };
        self.scopes.get_mut(0).mark_variable_as_exported(local);
        let default = self.names.default;
        self.module_data().add_local_export(default, local);
        Ok(local)
    }

    /// `export { a, b as c }` with an optional `from "m"`.
    fn parse_export_list<B: TreeBuilder<'a>>(&mut self, b: &mut B, start: TextPos) -> ParseResult<B::Statement> {
        self.next();
        let mut entries: Vec<ExportListEntry> = Vec::new();
        while !self.consume(SyntaxKind::CloseBraceToken) {
            if !self.token.kind.is_identifier_or_keyword() {
                return Err(self.fail(&messages::EXPECTED_EXPORT_BINDING, &[]));
            }
            let local = self.current_identifier();
            let local_is_keyword = !self.match_spec_identifier();
            self.next();
            let exported = if self.at_contextual(self.names.as_) {
                self.next();
                if !self.token.kind.is_identifier_or_keyword() {
                    return Err(self.fail(&messages::EXPECTED_EXPORTED_NAME, &[]));
                }
                let exported = self.current_identifier().name;
                self.next();
                exported
            } else {
                local.name
            };
            if !self.module_data().add_exported_name(exported) {
                let text = self.resolve(exported).to_string();
                return Err(self.fail(&messages::DUPLICATE_EXPORT, &[&text]));
            }
            entries.push(ExportListEntry { local, exported, local_is_keyword });
            if !self.at(SyntaxKind::CloseBraceToken) {
                self.expect(SyntaxKind::CommaToken, &messages::EXPECTED_TOKEN_TO_DELIMIT, &["}", "end", "export list"])?;
            }
        }

        let module_request = if self.at_contextual(self.names.from) {
            self.next();
            Some(self.parse_module_name()?)
        } else {
            None
        };
        if module_request.is_none() && entries.iter().any(|entry| entry.local_is_keyword) {
            return Err(self.fail(&messages::KEYWORD_AS_EXPORT_BINDING, &[]));
        }
        if !self.auto_semicolon() {
            return Err(self.fail(&messages::EXPECTED_SEMICOLON_AFTER_EXPORT, &[]));
        }

        let mut specifiers = B::List::<B::ExportSpecifier>::default();
        let module = self.module_data();
        for entry in &entries {
            match module_request {
                Some(request) => module.record.export_entries.push(ExportEntry {
                    kind: ExportEntryKind::Indirect,
                    export_name: Some(entry.exported),
                    local_name: Some(entry.local.name),
                    module_request: Some(request.value),
                }),
                None => {
                    module.add_local_export(entry.exported, entry.local.name);
                    module.exported_bindings.push((entry.local.name, entry.local.span));
                }
            }
        }
        for entry in entries {
            specifiers.push(b.create_export_specifier(entry.local, entry.exported));
        }
        Ok(b.create_export_named(self.span_from(start), specifiers, module_request))
    }

    /// `export var|let|const|function|class ...`: every name the
    /// declaration binds is exported under its own name.
    fn parse_exported_declaration<B: TreeBuilder<'a>>(&mut self, b: &mut B, start: TextPos) -> ParseResult<B::Statement> {
        let kind = match self.token.kind {
            SyntaxKind::VarKeyword => Some(DeclarationKind::Var),
            SyntaxKind::LetKeyword => Some(DeclarationKind::Let),
            SyntaxKind::ConstKeyword => Some(DeclarationKind::Const),
            SyntaxKind::FunctionKeyword | SyntaxKind::ClassKeyword => None,
            _ => return Err(self.fail(&messages::EXPECTED_EXPORT_DECLARATION, &[])),
        };

        self.module_data().bound_names = Some(Vec::new());
        let declaration = match kind {
            Some(kind) => self.parse_variable_declaration(b, kind),
            None if self.at(SyntaxKind::FunctionKeyword) => self.parse_function_declaration(b),
            None => self.parse_class_declaration(b),
        };
        let names = self.module_data().bound_names.take().unwrap_or_default();
        let declaration = declaration?;

        for name in names {
            if !self.module_data().add_exported_name(name) {
                let text = self.resolve(name).to_string();
                return Err(self.fail(&messages::DUPLICATE_EXPORT, &[&text]));
            }
            self.module_data().add_local_export(name, name);
            self.scopes.get_mut(0).mark_variable_as_exported(name);
            trace!(name = self.resolve(name), "exported declaration");
        }
        Ok(b.create_export_declaration(self.span_from(start), declaration))
    }
}
