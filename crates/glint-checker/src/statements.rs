//! Statement sequence checking.

use glint_ast::Statement;

use crate::state::CheckerState;

impl CheckerState {
    pub(crate) fn check_statements(&mut self, statements: &[Statement]) {
        for statement in statements {
            self.check_statement(statement);
        }
    }

    fn check_statement(&mut self, statement: &Statement) {
        match statement {
            // The bound value is not traversed: references on the
            // value side of a binding are outside the checked subset.
            Statement::Let { pattern, value: _ } => self.check_pattern(pattern),
            Statement::Use { patterns, call: _ } => {
                for pattern in patterns {
                    self.check_pattern(pattern);
                }
            }
            Statement::Expression(expression) => self.check_expression(expression),
        }
    }
}
