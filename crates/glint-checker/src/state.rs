//! Per-run mutable analysis state.

use glint_ast::Visibility;
use glint_common::Diagnostic;

use crate::scope::{Scope, ScopeStack};

/// The mutable state threaded through one checker run: a scope stack
/// and the diagnostics gathered so far.
///
/// A `CheckerState` belongs to exactly one run. It is passed by
/// exclusive reference through the traversal; nothing is shared
/// across runs, so independent runs may execute concurrently.
pub struct CheckerState {
    pub(crate) scopes: ScopeStack,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckerState {
    /// Creates the state for one run, with the module scope already
    /// open.
    pub fn new() -> Self {
        let mut scopes = ScopeStack::new();
        scopes.push();
        Self {
            scopes,
            diagnostics: Vec::new(),
        }
    }

    /// Runs `f` inside a fresh child scope.
    ///
    /// The scope is closed when `f` returns, and closing runs the
    /// unused-binding scan exactly once. Keeping open and close inside
    /// one wrapper means a future grammar extension with early exits
    /// cannot skip the scan.
    pub(crate) fn in_child_scope<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.scopes.push();
        let output = f(self);
        let scope = self.scopes.pop();
        self.flag_unused_bindings(scope);
        output
    }

    /// Warns on every private binding in a just-closed scope that was
    /// never read. Public bindings are exempt regardless of count.
    /// Order across bindings in the same scope follows map iteration
    /// and is unspecified.
    fn flag_unused_bindings(&mut self, scope: Scope) {
        for (name, binding) in scope {
            if binding.usages == 0 && binding.visibility == Visibility::Private {
                tracing::debug!(name = %name, "unused binding");
                self.diagnostics
                    .push(Diagnostic::warning(format!("`{name}` never used")));
            }
        }
    }

    /// Finishes the run: discards the module scope and returns the
    /// diagnostics in detection order.
    ///
    /// The module scope holds function names only, and function names
    /// are never flagged unused, so no scan runs here.
    pub fn into_diagnostics(mut self) -> Vec<Diagnostic> {
        self.scopes.pop();
        self.diagnostics
    }
}
