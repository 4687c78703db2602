use serde::Serialize;

/// A pattern on the left-hand side of a binding.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Pattern {
    /// Binds a single name: `x`.
    Variable { name: String },
    /// An ordered group of sub-patterns: `#(a, b)`.
    Tuple { elements: Vec<Pattern> },
    /// Head elements with an optional tail pattern: `[a, b, ..rest]`.
    /// The tail logically extends the element list.
    List {
        elements: Vec<Pattern>,
        tail: Option<Box<Pattern>>,
    },
    /// An inner pattern bound to an additional name: `pattern as name`.
    Assign { pattern: Box<Pattern>, name: String },
    /// Any other pattern form (literals, discards, constructors, ...).
    /// Introduces no bindings; the checker does not descend into it.
    Unsupported,
}
