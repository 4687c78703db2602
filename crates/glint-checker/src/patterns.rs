//! Binding introduction from patterns.

use glint_ast::{Pattern, Visibility};

use crate::state::CheckerState;

impl CheckerState {
    /// Declares every name bound by `pattern` into the current scope,
    /// left to right.
    pub(crate) fn check_pattern(&mut self, pattern: &Pattern) {
        match pattern {
            Pattern::Variable { name } => {
                self.scopes.declare(name, Visibility::Private);
            }
            Pattern::Tuple { elements } => {
                for element in elements {
                    self.check_pattern(element);
                }
            }
            Pattern::List { elements, tail } => {
                for element in elements {
                    self.check_pattern(element);
                }
                // The tail extends the element list, so it is
                // processed after the heads.
                if let Some(tail) = tail {
                    self.check_pattern(tail);
                }
            }
            Pattern::Assign { pattern, name } => {
                self.check_pattern(pattern);
                self.scopes.declare(name, Visibility::Private);
            }
            // Literals, discards, and other forms bind nothing.
            Pattern::Unsupported => {}
        }
    }
}
