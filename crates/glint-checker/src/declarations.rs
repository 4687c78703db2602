//! Module and function definition checking.

use glint_ast::{Function, Module, Parameter, Visibility};

use crate::state::CheckerState;

impl CheckerState {
    /// Checks every function definition in declaration order.
    ///
    /// All function names are declared into the module scope up front,
    /// with their declared visibility, so that self- and mutual
    /// references resolve regardless of definition order.
    pub fn check_module(&mut self, module: &Module) {
        for function in &module.functions {
            self.scopes.declare(&function.name, function.visibility);
        }
        for function in &module.functions {
            self.check_function(function);
        }
    }

    /// Checks one function definition.
    ///
    /// Parameters and the body share a single scope; its unused scan
    /// runs when the function's scope closes. Discarded parameters
    /// introduce no binding.
    pub(crate) fn check_function(&mut self, function: &Function) {
        tracing::debug!(name = %function.name, "check function");
        self.in_child_scope(|state| {
            for parameter in &function.parameters {
                match parameter {
                    Parameter::Named { name } => {
                        state.scopes.declare(name, Visibility::Private);
                    }
                    Parameter::Discarded => {}
                }
            }
            state.check_statements(&function.body);
        });
    }
}
