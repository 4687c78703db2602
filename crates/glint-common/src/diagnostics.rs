use serde::Serialize;

/// Severity of a reported finding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

/// A reported finding: a message and a severity level.
///
/// Diagnostics carry no source position. They are plain data; rendering
/// (glyphs, colors) is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub message_text: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            message_text: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            message_text: message.into(),
        }
    }
}
