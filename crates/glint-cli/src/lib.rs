//! Driver surfaces for the `glint` binary: argument parsing, the
//! fixed demo module, diagnostic rendering, and tracing setup. The
//! checker core stays presentation-free; everything colorful lives
//! here.

pub mod args;
pub mod reporter;
pub mod sample;
pub mod tracing_config;
