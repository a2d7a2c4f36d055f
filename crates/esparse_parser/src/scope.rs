//! The scope stack.
//!
//! One `Scope` is pushed for every function, block, catch clause, class,
//! `for` head with a lexical declaration, switch body and for the program
//! itself. Scopes record what they declare and what they use; popping a
//! scope folds its free names into the parent so that each function ends up
//! knowing which of its names are referenced by nested functions.

use crate::cache::CachedFunctionInfo;
use crate::state::KnownNames;
use esparse_ast::types::{
    Binding, ConstructorKind, DeclarationKind, SourceParseMode, SuperBinding, VariableFlags,
};
use esparse_core::collections::{FxHashSet, OrderedMap};
use esparse_core::intern::InternedString;

bitflags::bitflags! {
    /// Outcome of declaring a name. An empty set means the declaration is
    /// valid.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DeclarationResult: u8 {
        const VALID                         = 0;
        /// The name is `eval` or `arguments`, or a duplicate parameter;
        /// fine in sloppy code.
        const INVALID_STRICT_MODE           = 1 << 0;
        /// The name clashes with an existing declaration.
        const INVALID_DUPLICATE_DECLARATION = 1 << 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Label {
    pub name: InternedString,
    pub is_loop: bool,
}

/// Variable-usage facts that survive a skipped function body.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScopeSummary {
    pub uses_eval: bool,
    pub needs_full_activation: bool,
    pub needs_super_binding: bool,
    pub has_direct_super: bool,
    pub strict_mode: bool,
    pub used_variables: Vec<InternedString>,
    pub written_variables: Vec<InternedString>,
}

/// Names a function body keeps in storage that outlives the call, plus
/// whether the body may observe a modified parameter or `arguments`.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct CapturedVariables {
    pub names: Vec<InternedString>,
    pub modified_parameter: bool,
    pub modified_arguments: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct Scope {
    pub parse_mode: SourceParseMode,
    /// Inside some function; inherited by nested block scopes.
    pub is_function: bool,
    /// The scope of a function itself.
    pub is_function_boundary: bool,
    pub is_lexical_scope: bool,
    /// `yield` is an operator here.
    pub is_generator: bool,
    pub is_generator_function: bool,
    pub is_generator_body: bool,
    pub is_arrow: bool,
    /// A catch clause; a `var` may repeat its simple parameter.
    pub is_catch_scope: bool,
    pub has_arguments: bool,
    pub strict_mode: bool,
    pub allows_var_declarations: bool,
    pub allows_lexical_declarations: bool,
    /// Cleared by anything that a later `"use strict"` would reject.
    pub is_valid_strict_mode: bool,
    pub shadows_arguments: bool,
    pub uses_eval: bool,
    pub needs_full_activation: bool,
    pub has_direct_super: bool,
    pub needs_super_binding: bool,
    pub constructor_kind: ConstructorKind,
    pub expected_super_binding: SuperBinding,
    /// Loops and switches entered in this function; only meaningful on
    /// function boundaries and the program scope.
    pub loop_depth: u32,
    pub switch_depth: u32,
    pub labels: Vec<Label>,
    /// `var`s, functions, parameters and the callee name.
    pub declared_variables: OrderedMap<InternedString, VariableFlags>,
    /// `let`, `const`, `class` and import bindings.
    pub lexical_variables: OrderedMap<InternedString, VariableFlags>,
    /// `var` names hoisted through this scope to an outer one.
    pub var_declared_through: FxHashSet<InternedString>,
    pub used_variables: FxHashSet<InternedString>,
    pub written_variables: FxHashSet<InternedString>,
    pub closed_variable_candidates: FxHashSet<InternedString>,
}

impl Scope {
    pub fn new(strict_mode: bool, is_function: bool, is_generator: bool) -> Self {
        Self {
            parse_mode: SourceParseMode::Program,
            is_function,
            is_function_boundary: false,
            is_lexical_scope: false,
            is_generator,
            is_generator_function: false,
            is_generator_body: false,
            is_arrow: false,
            is_catch_scope: false,
            has_arguments: false,
            strict_mode,
            allows_var_declarations: true,
            allows_lexical_declarations: true,
            is_valid_strict_mode: true,
            shadows_arguments: false,
            uses_eval: false,
            needs_full_activation: false,
            has_direct_super: false,
            needs_super_binding: false,
            constructor_kind: ConstructorKind::None,
            expected_super_binding: SuperBinding::NotNeeded,
            loop_depth: 0,
            switch_depth: 0,
            labels: Vec::new(),
            declared_variables: OrderedMap::new(),
            lexical_variables: OrderedMap::new(),
            var_declared_through: FxHashSet::default(),
            used_variables: FxHashSet::default(),
            written_variables: FxHashSet::default(),
            closed_variable_candidates: FxHashSet::default(),
        }
    }

    fn set_is_function(&mut self) {
        self.is_function = true;
        self.is_function_boundary = true;
        self.has_arguments = true;
        self.is_generator = false;
        self.set_is_lexical_scope();
    }

    pub fn set_source_parse_mode(&mut self, mode: SourceParseMode) {
        self.parse_mode = mode;
        match mode {
            SourceParseMode::Program | SourceParseMode::Module => {}
            SourceParseMode::GeneratorWrapperFunction => {
                self.set_is_function();
                self.is_generator_function = true;
            }
            SourceParseMode::GeneratorBody => {
                self.set_is_function();
                self.is_generator = true;
                self.is_generator_body = true;
                self.has_arguments = false;
            }
            SourceParseMode::ArrowFunction => {
                self.set_is_function();
                self.is_arrow = true;
                self.has_arguments = false;
            }
            SourceParseMode::NormalFunction
            | SourceParseMode::Method
            | SourceParseMode::Getter
            | SourceParseMode::Setter => self.set_is_function(),
        }
    }

    pub fn set_is_lexical_scope(&mut self) {
        self.is_lexical_scope = true;
        self.allows_lexical_declarations = true;
    }

    pub fn prevent_var_declarations(&mut self) {
        self.allows_var_declarations = false;
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// Declare the name of a function expression inside its own scope.
    pub fn declare_callee(&mut self, name: InternedString, names: &KnownNames) -> DeclarationResult {
        self.declared_variables.entry_or_insert_with(name, || VariableFlags::NONE);
        if names.is_eval_or_arguments(name) {
            self.is_valid_strict_mode = false;
            DeclarationResult::INVALID_STRICT_MODE
        } else {
            DeclarationResult::VALID
        }
    }

    pub fn declare_parameter(&mut self, name: InternedString, names: &KnownNames) -> DeclarationResult {
        let mut result = DeclarationResult::VALID;
        let is_arguments = name == names.arguments;
        let (flags, is_new) = self.declared_variables.entry_or_insert_with(name, || VariableFlags::NONE);
        let was_parameter = flags.contains(VariableFlags::PARAMETER);
        flags.remove(VariableFlags::VAR);
        flags.insert(VariableFlags::PARAMETER);
        let is_duplicate = !is_new && was_parameter;
        let valid_strict = !is_duplicate && !names.is_eval_or_arguments(name);
        self.is_valid_strict_mode &= valid_strict;
        if !valid_strict {
            result |= DeclarationResult::INVALID_STRICT_MODE;
        }
        if is_arguments {
            self.shadows_arguments = true;
        }
        if is_duplicate {
            result |= DeclarationResult::INVALID_DUPLICATE_DECLARATION;
        }
        result
    }

    #[inline]
    pub fn has_declared_parameter(&self, name: InternedString) -> bool {
        self.declared_variables
            .get(&name)
            .is_some_and(|flags| flags.contains(VariableFlags::PARAMETER))
    }

    #[inline]
    pub fn has_declared_variable(&self, name: InternedString) -> bool {
        self.declared_variables
            .get(&name)
            .is_some_and(|flags| flags.contains(VariableFlags::VAR))
    }

    #[inline]
    pub fn has_lexical_variable(&self, name: InternedString) -> bool {
        self.lexical_variables.contains_key(&name)
    }

    fn declares(&self, name: &InternedString) -> bool {
        self.declared_variables.contains_key(name) || self.lexical_variables.contains_key(name)
    }

    /// Flag a declared name as exported. Returns false when this scope
    /// does not declare it.
    pub fn mark_variable_as_exported(&mut self, name: InternedString) -> bool {
        let mut found = false;
        if let Some(flags) = self.declared_variables.get_mut(&name) {
            *flags |= VariableFlags::EXPORTED;
            found = true;
        }
        if let Some(flags) = self.lexical_variables.get_mut(&name) {
            *flags |= VariableFlags::EXPORTED;
            found = true;
        }
        found
    }

    // ========================================================================
    // Uses
    // ========================================================================

    pub fn use_variable(&mut self, name: InternedString, is_eval: bool) {
        self.uses_eval |= is_eval;
        self.used_variables.insert(name);
    }

    pub fn set_written(&mut self, name: InternedString) {
        self.written_variables.insert(name);
    }

    // ========================================================================
    // Labels
    // ========================================================================

    pub fn push_label(&mut self, name: InternedString, is_loop: bool) {
        self.labels.push(Label { name, is_loop });
    }

    pub fn pop_label(&mut self) {
        self.labels.pop();
    }

    fn find_label(&self, name: InternedString) -> Option<Label> {
        self.labels.iter().rev().find(|label| label.name == name).copied()
    }

    // ========================================================================
    // Finalization
    // ========================================================================

    /// Fold the free names of the scope being popped into this one.
    fn collect_free_variables(&mut self, nested: &Scope, track_closed: bool, arguments: InternedString) {
        self.uses_eval |= nested.uses_eval;
        for &name in &nested.used_variables {
            if nested.declares(&name) {
                continue;
            }
            // `arguments` resolves at the nearest non-arrow function.
            if nested.is_function_boundary && nested.has_arguments && name == arguments {
                continue;
            }
            self.used_variables.insert(name);
            if track_closed && (nested.is_function_boundary || !nested.is_lexical_scope) {
                self.closed_variable_candidates.insert(name);
            }
        }
        if track_closed && !nested.is_function_boundary {
            for &name in &nested.closed_variable_candidates {
                if !nested.declares(&name) {
                    self.closed_variable_candidates.insert(name);
                }
            }
        }
        for &name in &nested.written_variables {
            if !nested.declares(&name) {
                self.written_variables.insert(name);
            }
        }
    }

    fn is_captured(&self, name: &InternedString) -> bool {
        self.needs_full_activation || self.uses_eval || self.closed_variable_candidates.contains(name)
    }

    /// Declared `var`-like names, in declaration order, with a captured
    /// marker.
    pub fn var_bindings(&self) -> Vec<Binding> {
        self.declared_variables
            .iter()
            .map(|(&name, &flags)| Binding { name, flags: self.mark_captured(name, flags) })
            .collect()
    }

    /// Lexically declared names, in declaration order, with a captured
    /// marker.
    pub fn lexical_bindings(&self) -> Vec<Binding> {
        self.lexical_variables
            .iter()
            .map(|(&name, &flags)| Binding { name, flags: self.mark_captured(name, flags) })
            .collect()
    }

    fn mark_captured(&self, name: InternedString, flags: VariableFlags) -> VariableFlags {
        if self.is_captured(&name) {
            flags | VariableFlags::CAPTURED
        } else {
            flags
        }
    }

    pub fn captured_variables(&self, arguments: InternedString) -> CapturedVariables {
        if self.needs_full_activation || self.uses_eval {
            return CapturedVariables {
                names: self.declared_variables.keys().copied().collect(),
                modified_parameter: true,
                modified_arguments: self.shadows_arguments || self.written_variables.contains(&arguments),
            };
        }
        let names = self
            .declared_variables
            .keys()
            .filter(|&name| self.closed_variable_candidates.contains(name))
            .copied()
            .collect();
        let modified_parameter = self
            .written_variables
            .iter()
            .any(|name| self.has_declared_parameter(*name));
        let modified_arguments = self.shadows_arguments || self.written_variables.contains(&arguments);
        CapturedVariables { names, modified_parameter, modified_arguments }
    }

    /// What the function cache keeps of a parsed function body.
    pub fn summary(&self) -> ScopeSummary {
        ScopeSummary {
            uses_eval: self.uses_eval,
            needs_full_activation: self.needs_full_activation,
            needs_super_binding: self.needs_super_binding,
            has_direct_super: self.has_direct_super,
            strict_mode: self.strict_mode,
            used_variables: self
                .used_variables
                .iter()
                .filter(|name| !self.declares(name))
                .copied()
                .collect(),
            written_variables: self
                .written_variables
                .iter()
                .filter(|name| !self.declares(name))
                .copied()
                .collect(),
        }
    }

    pub fn restore_from_cache(&mut self, info: &CachedFunctionInfo) {
        let summary = &info.summary;
        self.uses_eval = summary.uses_eval;
        self.needs_full_activation = summary.needs_full_activation;
        self.needs_super_binding = summary.needs_super_binding;
        self.has_direct_super = summary.has_direct_super;
        self.strict_mode = summary.strict_mode;
        self.used_variables.extend(summary.used_variables.iter().copied());
        self.written_variables.extend(summary.written_variables.iter().copied());
    }
}

/// The stack of open scopes; index 0 is the program or module scope.
#[derive(Debug, Default)]
pub(crate) struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self { scopes: Vec::new() }
    }

    /// Push a scope that inherits strictness, generator context and
    /// function context from its parent. Returns its index.
    pub fn push(&mut self) -> usize {
        let scope = match self.scopes.last() {
            Some(parent) => Scope::new(parent.strict_mode, parent.is_function, parent.is_generator),
            None => Scope::new(false, false, false),
        };
        self.scopes.push(scope);
        self.scopes.len() - 1
    }

    /// Pop the innermost scope and fold its free names into the parent.
    pub fn pop(&mut self, track_closed: bool, arguments: InternedString) -> Option<Scope> {
        let nested = self.scopes.pop()?;
        if let Some(parent) = self.scopes.last_mut() {
            parent.collect_free_variables(&nested, track_closed, arguments);
        }
        Some(nested)
    }

    /// Drop scopes a failed speculative parse left open.
    pub fn truncate(&mut self, len: usize) {
        self.scopes.truncate(len);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> &Scope {
        &self.scopes[index]
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut Scope {
        &mut self.scopes[index]
    }

    #[inline]
    pub fn current(&self) -> &Scope {
        &self.scopes[self.scopes.len() - 1]
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut Scope {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    /// The innermost function scope, or the program scope.
    pub fn function_scope_index(&self) -> usize {
        self.scopes
            .iter()
            .rposition(|scope| scope.is_function_boundary)
            .unwrap_or(0)
    }

    pub fn function_scope(&self) -> &Scope {
        &self.scopes[self.function_scope_index()]
    }

    pub fn function_scope_mut(&mut self) -> &mut Scope {
        let index = self.function_scope_index();
        &mut self.scopes[index]
    }

    /// The scope `var` declarations land in.
    pub fn var_scope_index(&self) -> usize {
        self.scopes
            .iter()
            .rposition(|scope| scope.allows_var_declarations)
            .unwrap_or(0)
    }

    fn lexical_scope_index(&self) -> usize {
        self.scopes
            .iter()
            .rposition(|scope| scope.allows_lexical_declarations)
            .unwrap_or(0)
    }

    /// Index of the innermost enclosing function below `index` that is not
    /// an arrow function; 0 when only the program scope encloses it.
    pub fn closest_non_arrow_function_index(&self, index: usize) -> usize {
        self.scopes[..index]
            .iter()
            .rposition(|scope| scope.is_function_boundary && !scope.is_arrow)
            .unwrap_or(0)
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// Declare `name` with the given kind. `extra` adds flags such as
    /// `FUNCTION`, `CLASS` or `IMPORTED`. At statement depth 1 a lexical
    /// name may not repeat a parameter or `var` of the function.
    pub fn declare_variable(
        &mut self,
        name: InternedString,
        kind: DeclarationKind,
        extra: VariableFlags,
        statement_depth: i32,
        names: &KnownNames,
    ) -> DeclarationResult {
        let invalid_strict = names.is_eval_or_arguments(name);
        let mut result = DeclarationResult::VALID;
        match kind {
            DeclarationKind::Var => {
                let mut index = self.scopes.len() - 1;
                loop {
                    let scope = &mut self.scopes[index];
                    if scope.has_lexical_variable(name) && !scope.is_catch_scope {
                        result |= DeclarationResult::INVALID_DUPLICATE_DECLARATION;
                    }
                    if scope.allows_var_declarations || index == 0 {
                        break;
                    }
                    scope.var_declared_through.insert(name);
                    index -= 1;
                }
                let scope = &mut self.scopes[index];
                if invalid_strict {
                    scope.is_valid_strict_mode = false;
                    result |= DeclarationResult::INVALID_STRICT_MODE;
                }
                let (flags, _) = scope.declared_variables.entry_or_insert_with(name, || VariableFlags::NONE);
                flags.insert(VariableFlags::VAR | extra);
            }
            DeclarationKind::Let | DeclarationKind::Const => {
                if statement_depth == 1 {
                    let var_scope = &self.scopes[self.var_scope_index()];
                    if var_scope.has_declared_parameter(name) || var_scope.has_declared_variable(name) {
                        return DeclarationResult::INVALID_DUPLICATE_DECLARATION;
                    }
                }
                let index = self.lexical_scope_index();
                let scope = &mut self.scopes[index];
                if invalid_strict {
                    scope.is_valid_strict_mode = false;
                    result |= DeclarationResult::INVALID_STRICT_MODE;
                }
                if scope.var_declared_through.contains(&name)
                    || (scope.allows_var_declarations && scope.has_declared_variable(name))
                {
                    result |= DeclarationResult::INVALID_DUPLICATE_DECLARATION;
                }
                let base = if kind == DeclarationKind::Const { VariableFlags::CONST } else { VariableFlags::LET };
                let (flags, is_new) = scope.lexical_variables.entry_or_insert_with(name, || VariableFlags::NONE);
                flags.insert(base | extra);
                if !is_new {
                    result |= DeclarationResult::INVALID_DUPLICATE_DECLARATION;
                }
            }
        }
        result
    }

    /// Find an active label, searching outward to the enclosing function.
    pub fn get_label(&self, name: InternedString) -> Option<Label> {
        for scope in self.scopes.iter().rev() {
            if let Some(label) = scope.find_label(name) {
                return Some(label);
            }
            if scope.is_function_boundary {
                break;
            }
        }
        None
    }

    pub fn start_loop(&mut self) {
        self.function_scope_mut().loop_depth += 1;
    }

    pub fn end_loop(&mut self) {
        let scope = self.function_scope_mut();
        scope.loop_depth = scope.loop_depth.saturating_sub(1);
    }

    pub fn start_switch(&mut self) {
        self.function_scope_mut().switch_depth += 1;
    }

    pub fn end_switch(&mut self) {
        let scope = self.function_scope_mut();
        scope.switch_depth = scope.switch_depth.saturating_sub(1);
    }

    pub fn break_is_valid(&self) -> bool {
        let scope = self.function_scope();
        scope.loop_depth > 0 || scope.switch_depth > 0
    }

    pub fn continue_is_valid(&self) -> bool {
        self.function_scope().loop_depth > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esparse_core::intern::StringInterner;

    fn setup() -> (StringInterner, KnownNames, ScopeStack) {
        let interner = StringInterner::new();
        let names = KnownNames::new(&interner);
        let mut stack = ScopeStack::new();
        let root = stack.push();
        stack.get_mut(root).set_is_lexical_scope();
        (interner, names, stack)
    }

    fn push_block(stack: &mut ScopeStack) {
        let index = stack.push();
        let scope = stack.get_mut(index);
        scope.set_is_lexical_scope();
        scope.prevent_var_declarations();
    }

    #[test]
    fn test_var_after_let_in_same_scope_is_duplicate() {
        let (interner, names, mut stack) = setup();
        let x = interner.intern("x");
        let first = stack.declare_variable(x, DeclarationKind::Let, VariableFlags::NONE, 1, &names);
        assert_eq!(first, DeclarationResult::VALID);
        let second = stack.declare_variable(x, DeclarationKind::Var, VariableFlags::NONE, 1, &names);
        assert!(second.contains(DeclarationResult::INVALID_DUPLICATE_DECLARATION));
    }

    #[test]
    fn test_let_after_var_hoisted_through_block_is_duplicate() {
        let (interner, names, mut stack) = setup();
        let x = interner.intern("x");
        push_block(&mut stack);
        assert_eq!(
            stack.declare_variable(x, DeclarationKind::Var, VariableFlags::NONE, 2, &names),
            DeclarationResult::VALID
        );
        let result = stack.declare_variable(x, DeclarationKind::Let, VariableFlags::NONE, 2, &names);
        assert!(result.contains(DeclarationResult::INVALID_DUPLICATE_DECLARATION));
    }

    #[test]
    fn test_shadowing_in_nested_block_is_valid() {
        let (interner, names, mut stack) = setup();
        let x = interner.intern("x");
        stack.declare_variable(x, DeclarationKind::Let, VariableFlags::NONE, 1, &names);
        push_block(&mut stack);
        assert_eq!(
            stack.declare_variable(x, DeclarationKind::Const, VariableFlags::NONE, 2, &names),
            DeclarationResult::VALID
        );
    }

    #[test]
    fn test_eval_is_invalid_in_strict_mode() {
        let (_interner, names, mut stack) = setup();
        let result = stack.declare_variable(names.eval, DeclarationKind::Var, VariableFlags::NONE, 1, &names);
        assert!(result.contains(DeclarationResult::INVALID_STRICT_MODE));
        assert!(!stack.current().is_valid_strict_mode);
    }

    #[test]
    fn test_duplicate_parameter() {
        let (interner, names, mut stack) = setup();
        let a = interner.intern("a");
        let index = stack.push();
        stack.get_mut(index).set_source_parse_mode(SourceParseMode::NormalFunction);
        assert_eq!(stack.current_mut().declare_parameter(a, &names), DeclarationResult::VALID);
        let again = stack.current_mut().declare_parameter(a, &names);
        assert!(again.contains(DeclarationResult::INVALID_DUPLICATE_DECLARATION));
        assert!(!stack.current().is_valid_strict_mode);
    }

    #[test]
    fn test_function_use_becomes_closed_candidate() {
        let (interner, names, mut stack) = setup();
        let x = interner.intern("x");
        stack.declare_variable(x, DeclarationKind::Var, VariableFlags::NONE, 1, &names);
        let index = stack.push();
        stack.get_mut(index).set_source_parse_mode(SourceParseMode::NormalFunction);
        stack.current_mut().use_variable(x, false);
        stack.pop(true, names.arguments);
        let captured = stack.current().captured_variables(names.arguments);
        assert_eq!(captured.names, vec![x]);
    }

    #[test]
    fn test_block_use_is_not_captured() {
        let (interner, names, mut stack) = setup();
        let x = interner.intern("x");
        stack.declare_variable(x, DeclarationKind::Var, VariableFlags::NONE, 1, &names);
        push_block(&mut stack);
        stack.current_mut().use_variable(x, false);
        stack.pop(true, names.arguments);
        assert!(stack.current().captured_variables(names.arguments).names.is_empty());
        assert!(stack.current().used_variables.contains(&x));
    }

    #[test]
    fn test_arguments_resolves_at_function_boundary() {
        let (_interner, names, mut stack) = setup();
        let index = stack.push();
        stack.get_mut(index).set_source_parse_mode(SourceParseMode::NormalFunction);
        stack.current_mut().use_variable(names.arguments, false);
        stack.pop(true, names.arguments);
        assert!(!stack.current().used_variables.contains(&names.arguments));
    }

    #[test]
    fn test_labels_stop_at_function_boundary() {
        let (interner, names, mut stack) = setup();
        let outer = interner.intern("outer");
        stack.current_mut().push_label(outer, true);
        assert!(stack.get_label(outer).is_some());
        let index = stack.push();
        stack.get_mut(index).set_source_parse_mode(SourceParseMode::NormalFunction);
        assert!(stack.get_label(outer).is_none());
        stack.pop(false, names.arguments);
    }

    #[test]
    fn test_loop_depth_is_per_function() {
        let (_interner, _names, mut stack) = setup();
        stack.start_loop();
        assert!(stack.continue_is_valid());
        let index = stack.push();
        stack.get_mut(index).set_source_parse_mode(SourceParseMode::NormalFunction);
        assert!(!stack.break_is_valid());
    }
}
