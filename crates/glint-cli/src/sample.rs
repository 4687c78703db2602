//! The fixed source sample the demo binary analyzes.
//!
//! The workspace ships no parser (the parser is an external
//! collaborator), so the demo constructs the tree a parser would have
//! produced for this module:
//!
//! ```text
//! pub fn main() {
//!   let greeting = "hello"
//!   echo
//! }
//!
//! fn helper(input, _ignored) {
//!   let #(kept, dropped) = input_pair
//!   kept
//!   {
//!     let shadow = 1
//!   }
//! }
//! ```
//!
//! Expected findings: `echo` is not defined; `greeting`, `dropped`,
//! `input`, and the block-local `shadow` are never used.

use glint_ast::{Expression, Function, Module, Parameter, Pattern, Statement, Visibility};

pub fn sample_module() -> Module {
    Module {
        functions: vec![main_function(), helper_function()],
    }
}

fn main_function() -> Function {
    Function {
        name: "main".to_string(),
        visibility: Visibility::Public,
        parameters: Vec::new(),
        body: vec![
            Statement::Let {
                pattern: Pattern::Variable {
                    name: "greeting".to_string(),
                },
                value: Expression::Unsupported,
            },
            Statement::Expression(Expression::Variable {
                name: "echo".to_string(),
            }),
        ],
    }
}

fn helper_function() -> Function {
    Function {
        name: "helper".to_string(),
        visibility: Visibility::Private,
        parameters: vec![
            Parameter::Named {
                name: "input".to_string(),
            },
            Parameter::Discarded,
        ],
        body: vec![
            Statement::Let {
                pattern: Pattern::Tuple {
                    elements: vec![
                        Pattern::Variable {
                            name: "kept".to_string(),
                        },
                        Pattern::Variable {
                            name: "dropped".to_string(),
                        },
                    ],
                },
                value: Expression::Unsupported,
            },
            Statement::Expression(Expression::Variable {
                name: "kept".to_string(),
            }),
            Statement::Expression(Expression::Block {
                statements: vec![Statement::Let {
                    pattern: Pattern::Variable {
                        name: "shadow".to_string(),
                    },
                    value: Expression::Unsupported,
                }],
            }),
        ],
    }
}
