//! Error adapter for converting EmblemError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use emblem::{ConstructionError, EmblemError, draw::MAX_CAPTION_LEN};

/// Adapter that gives an [`EmblemError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a EmblemError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            EmblemError::Io(_) => "emblem::io",
            EmblemError::Construction(ConstructionError::CaptionTooLong { .. }) => {
                "emblem::caption"
            }
            EmblemError::Construction(ConstructionError::UnsupportedShapeKind(_)) => {
                "emblem::shape"
            }
            EmblemError::Color { .. } => "emblem::color",
            EmblemError::Config(_) => "emblem::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            EmblemError::Io(_) => return None,
            EmblemError::Construction(ConstructionError::CaptionTooLong { .. }) => {
                format!("captions can be at most {MAX_CAPTION_LEN} characters long")
            }
            EmblemError::Construction(ConstructionError::UnsupportedShapeKind(_)) => {
                "supported shapes are circle, square and triangle".to_string()
            }
            EmblemError::Color { .. } => {
                "use a color name such as `tomato` or a hex value such as `#ff6347`".to_string()
            }
            EmblemError::Config(_) => "check the TOML configuration file".to_string(),
        };
        Some(Box::new(help))
    }
}

/// Wrap an [`EmblemError`] so miette can render it.
pub fn to_reportable(err: &EmblemError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
