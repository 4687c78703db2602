//! Variable usage tracking in expressions.

use glint_ast::Expression;
use glint_common::Diagnostic;

use crate::state::CheckerState;

impl CheckerState {
    /// Records variable reads in `expression`, reporting references
    /// that resolve in no enclosing scope.
    pub(crate) fn check_expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Variable { name } => {
                if !self.scopes.mark_used(name) {
                    tracing::debug!(name = %name, "undefined reference");
                    self.diagnostics
                        .push(Diagnostic::error(format!("`{name}` not defined")));
                }
            }
            Expression::NegateInt { value } | Expression::NegateBool { value } => {
                self.check_expression(value);
            }
            // A block is a nested statement sequence with its own
            // scope, same semantics as a function body.
            Expression::Block { statements } => {
                self.in_child_scope(|state| state.check_statements(statements));
            }
            Expression::Tuple { elements } => {
                for element in elements {
                    self.check_expression(element);
                }
            }
            // Calls, binary operators, case expressions, anonymous
            // functions, pipelines: deliberately inert. References
            // inside these forms are not validated.
            Expression::Unsupported => {}
        }
    }
}
