//! Tests for undefined-reference Errors (`` `name` not defined ``).

use glint_ast::{Expression, Function, Module, Pattern, Statement, Visibility};
use glint_checker::check_module;
use glint_common::{Diagnostic, DiagnosticCategory};

fn check(functions: Vec<Function>) -> Vec<Diagnostic> {
    check_module(&Module { functions })
}

fn public_fn(name: &str, body: Vec<Statement>) -> Function {
    Function {
        name: name.to_string(),
        visibility: Visibility::Public,
        parameters: Vec::new(),
        body,
    }
}

fn variable(name: &str) -> Expression {
    Expression::Variable {
        name: name.to_string(),
    }
}

fn errors(diagnostics: &[Diagnostic]) -> Vec<&Diagnostic> {
    diagnostics
        .iter()
        .filter(|d| d.category == DiagnosticCategory::Error)
        .collect()
}

#[test]
fn undeclared_reference_emits_exactly_one_error() {
    // A public function whose body references one undeclared name.
    let diagnostics = check(vec![public_fn(
        "main",
        vec![Statement::Expression(variable("phantom"))],
    )]);

    assert_eq!(
        diagnostics,
        vec![Diagnostic::error("`phantom` not defined")],
        "got: {:?}",
        diagnostics
    );
}

#[test]
fn failed_lookup_does_not_mark_other_bindings_used() {
    // The undefined reference must not satisfy the unused check for
    // an unrelated binding in scope.
    let diagnostics = check(vec![public_fn(
        "main",
        vec![
            Statement::Let {
                pattern: Pattern::Variable {
                    name: "local".to_string(),
                },
                value: Expression::Unsupported,
            },
            Statement::Expression(variable("phantom")),
        ],
    )]);

    assert_eq!(
        diagnostics,
        vec![
            Diagnostic::error("`phantom` not defined"),
            Diagnostic::warning("`local` never used"),
        ],
        "got: {:?}",
        diagnostics
    );
}

#[test]
fn negation_descends_into_the_inner_expression() {
    let diagnostics = check(vec![public_fn(
        "main",
        vec![
            Statement::Expression(Expression::NegateInt {
                value: Box::new(variable("missing_int")),
            }),
            Statement::Expression(Expression::NegateBool {
                value: Box::new(variable("missing_bool")),
            }),
        ],
    )]);

    assert_eq!(
        diagnostics,
        vec![
            Diagnostic::error("`missing_int` not defined"),
            Diagnostic::error("`missing_bool` not defined"),
        ],
        "got: {:?}",
        diagnostics
    );
}

#[test]
fn tuple_elements_are_checked_left_to_right() {
    let diagnostics = check(vec![public_fn(
        "main",
        vec![Statement::Expression(Expression::Tuple {
            elements: vec![variable("first"), variable("second")],
        })],
    )]);

    assert_eq!(
        diagnostics,
        vec![
            Diagnostic::error("`first` not defined"),
            Diagnostic::error("`second` not defined"),
        ],
        "got: {:?}",
        diagnostics
    );
}

#[test]
fn unsupported_expressions_are_not_validated() {
    // The value side of a binding and unsupported expression forms are
    // outside the checked subset: no diagnostics either way.
    let diagnostics = check(vec![public_fn(
        "main",
        vec![
            Statement::Let {
                pattern: Pattern::Unsupported,
                value: variable("never_looked_at"),
            },
            Statement::Expression(Expression::Unsupported),
        ],
    )]);

    assert!(
        errors(&diagnostics).is_empty(),
        "got: {:?}",
        diagnostics
    );
}

#[test]
fn parameters_resolve_inside_the_body() {
    let diagnostics = check(vec![Function {
        name: "main".to_string(),
        visibility: Visibility::Public,
        parameters: vec![glint_ast::Parameter::Named {
            name: "arg".to_string(),
        }],
        body: vec![Statement::Expression(variable("arg"))],
    }]);

    assert!(
        diagnostics.is_empty(),
        "parameter references must resolve, got: {:?}",
        diagnostics
    );
}
