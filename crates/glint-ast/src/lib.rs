//! Syntax tree types for the glint language subset.
//!
//! The checker consumes these values as-is; the parser that produces
//! them lives outside this workspace and is assumed to hand over a
//! well-formed tree. Statements, patterns, and expressions are small
//! closed sets: every form the checker does not analyze is an explicit
//! `Unsupported` variant so the coverage boundary stays visible in
//! every `match` over these types.

mod expression;
mod module;
mod pattern;
mod statement;

pub use expression::Expression;
pub use module::{Function, Module, Parameter, Visibility};
pub use pattern::Pattern;
pub use statement::Statement;
