use serde::Serialize;

use crate::statement::Statement;

/// An expression.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Expression {
    /// A reference to a bound name.
    Variable { name: String },
    /// Numeric negation: `-value`.
    NegateInt { value: Box<Expression> },
    /// Boolean negation: `!value`.
    NegateBool { value: Box<Expression> },
    /// A nested statement sequence evaluated as a value. Opens its own
    /// lexical scope.
    Block { statements: Vec<Statement> },
    /// An ordered group of sub-expressions: `#(a, b)`.
    Tuple { elements: Vec<Expression> },
    /// Any other expression form (calls, binary operators, case
    /// expressions, anonymous functions, pipelines, ...). The checker
    /// neither introduces bindings for it nor validates references
    /// inside it.
    Unsupported,
}
