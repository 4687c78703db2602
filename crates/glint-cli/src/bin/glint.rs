use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use glint_cli::args::CliArgs;
use glint_cli::reporter::Reporter;
use glint_cli::{sample, tracing_config};
use glint_common::DiagnosticCategory;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DIAGNOSTICS_PRESENT: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if GLINT_LOG or RUST_LOG is set (zero cost
    // otherwise). Supports GLINT_LOG_FORMAT=tree|json|text.
    tracing_config::init_tracing();

    let args = CliArgs::parse();

    let module = sample::sample_module();
    let diagnostics = glint_checker::check_module(&module);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    } else {
        let pretty = args
            .pretty
            .unwrap_or_else(|| std::io::stdout().is_terminal());
        let reporter = Reporter::new(pretty);
        // render() already includes all newlines.
        print!("{}", reporter.render(&diagnostics));
    }

    let has_errors = diagnostics
        .iter()
        .any(|diag| diag.category == DiagnosticCategory::Error);

    if has_errors {
        // Warnings alone do not fail the run.
        std::process::exit(EXIT_DIAGNOSTICS_PRESENT);
    }
    std::process::exit(EXIT_SUCCESS);
}
