//! Single-pass binding checker for the glint language subset.
//!
//! The checker walks an already-parsed [`glint_ast::Module`] and
//! reports two classes of problems as [`Diagnostic`] values:
//!
//! - references to names never declared in any enclosing scope
//!   (Error `` `name` not defined ``)
//! - private bindings declared but never read before their scope ends
//!   (Warning `` `name` never used ``)
//!
//! This module is organized into several submodules:
//! - `scope` - `ScopeStack` and per-binding usage metadata
//! - `state` - `CheckerState`, the per-run mutable analysis state
//! - `declarations` - module and function definition checking
//! - `statements` - statement sequence checking
//! - `patterns` - binding introduction from patterns
//! - `expr` - variable usage tracking in expressions
//!
//! Only a fixed subset of statement, pattern, and expression forms is
//! analyzed; everything else is an explicit `Unsupported` no-op arm.
//! The checker never fails: all findings are data, and the tree is
//! assumed well-formed by the external parser.

pub mod scope;
pub mod state;

mod declarations;
mod expr;
mod patterns;
mod statements;

pub use scope::{Binding, Scope, ScopeStack};
pub use state::CheckerState;

use glint_ast::Module;
use glint_common::Diagnostic;

/// Checks every function definition in `module`, in declaration order.
///
/// Returns the diagnostics in the chronological order the conditions
/// were detected: statement order within each function, with a scope's
/// unused-binding warnings emitted at the point that scope closes.
/// Each call runs on fresh state; concurrent calls are independent.
pub fn check_module(module: &Module) -> Vec<Diagnostic> {
    let mut state = CheckerState::new();
    state.check_module(module);
    state.into_diagnostics()
}
