//! Common types for the glint binding checker.
//!
//! This crate provides the diagnostic types shared between the checker
//! core and its callers (`Diagnostic`, `DiagnosticCategory`).

pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};
