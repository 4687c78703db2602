//! Terminal rendering of checker diagnostics.

use colored::Colorize;
use glint_common::{Diagnostic, DiagnosticCategory};

/// Renders diagnostics one per line: a level glyph followed by the
/// message text. The checker core returns plain data; glyphs and
/// colors exist only here.
pub struct Reporter {
    pretty: bool,
}

impl Reporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Render all diagnostics. The result includes a trailing newline
    /// after every line (print with `print!`, not `println!`).
    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut output = String::new();
        for diagnostic in diagnostics {
            output.push_str(&self.render_line(diagnostic));
            output.push('\n');
        }
        output
    }

    fn render_line(&self, diagnostic: &Diagnostic) -> String {
        match diagnostic.category {
            DiagnosticCategory::Error if self.pretty => {
                format!("{} {}", "✘".red(), diagnostic.message_text)
            }
            DiagnosticCategory::Error => format!("✘ {}", diagnostic.message_text),
            DiagnosticCategory::Warning if self.pretty => {
                format!("{} {}", "⚠".yellow(), diagnostic.message_text)
            }
            DiagnosticCategory::Warning => format!("⚠ {}", diagnostic.message_text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_error_line() {
        let reporter = Reporter::new(false);
        let rendered = reporter.render(&[Diagnostic::error("`echo` not defined")]);
        assert_eq!(rendered, "✘ `echo` not defined\n");
    }

    #[test]
    fn plain_warning_line() {
        let reporter = Reporter::new(false);
        let rendered = reporter.render(&[Diagnostic::warning("`greeting` never used")]);
        assert_eq!(rendered, "⚠ `greeting` never used\n");
    }

    #[test]
    fn lines_keep_diagnostic_order() {
        let reporter = Reporter::new(false);
        let rendered = reporter.render(&[
            Diagnostic::warning("`a` never used"),
            Diagnostic::error("`b` not defined"),
        ]);
        assert_eq!(rendered, "⚠ `a` never used\n✘ `b` not defined\n");
    }

    #[test]
    fn empty_input_renders_nothing() {
        let reporter = Reporter::new(true);
        assert_eq!(reporter.render(&[]), "");
    }
}
