use clap::Parser;

/// CLI arguments for the glint binary.
#[derive(Parser, Debug)]
#[command(
    name = "glint",
    version,
    about = "Binding checker demo for the glint language subset"
)]
pub struct CliArgs {
    /// Print diagnostics as a JSON array instead of colored text.
    #[arg(long)]
    pub json: bool,

    /// Stylize output with glyph colors. Defaults to auto-detection
    /// on stdout.
    #[arg(long)]
    pub pretty: Option<bool>,
}
