use serde::Serialize;

use crate::statement::Statement;

/// Whether a binding is visible outside its module.
///
/// Public bindings are exempt from unused-binding warnings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Visibility {
    Private,
    Public,
}

/// A parsed module: an ordered sequence of function definitions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Module {
    pub functions: Vec<Function>,
}

/// A function definition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Function {
    pub name: String,
    pub visibility: Visibility,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Statement>,
}

/// A function parameter. Discarded parameters (written with a leading
/// underscore in source) introduce no binding.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Parameter {
    Named { name: String },
    Discarded,
}
