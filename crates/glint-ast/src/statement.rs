use serde::Serialize;

use crate::expression::Expression;
use crate::pattern::Pattern;

/// A statement in a function or block body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Statement {
    /// A single pattern bound to a value: `let pattern = value`.
    Let { pattern: Pattern, value: Expression },
    /// A `use`-style binding: one or more patterns bound by a call,
    /// `use a, b <- call`.
    Use {
        patterns: Vec<Pattern>,
        call: Expression,
    },
    /// A bare expression evaluated for its value.
    Expression(Expression),
}
