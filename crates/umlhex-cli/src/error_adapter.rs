//! Error adapter for converting UmlHexError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Only errors that
//! stop the whole run pass through here; per-diagram failures are reported
//! as outcome lines instead.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use umlhex::UmlHexError;

/// Adapter giving a [`UmlHexError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a UmlHexError);

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
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            UmlHexError::Io(_) => "umlhex::io",
            UmlHexError::Client(_) => "umlhex::client",
            UmlHexError::Config(_) => "umlhex::config",
            UmlHexError::Input(_) => "umlhex::input",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            UmlHexError::Config(_) => {
                "check the configuration file and the --base-url/--output-dir/--timeout flags"
            }
            UmlHexError::Input(_) => {
                "pass diagram source files, or directories containing .puml files"
            }
            UmlHexError::Io(_) | UmlHexError::Client(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_code_and_help() {
        let err = UmlHexError::Config("bad".to_string());
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.to_string(), "Configuration error: bad");
        assert_eq!(adapter.code().unwrap().to_string(), "umlhex::config");
        assert!(adapter.help().is_some());
    }

    #[test]
    fn test_io_error_has_no_help() {
        let err = UmlHexError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "umlhex::io");
        assert!(adapter.help().is_none());
        assert!(std::error::Error::source(&adapter).is_some());
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let err = UmlHexError::Input("nothing to render".to_string());
        let reporter = miette::GraphicalReportHandler::new();
        let mut writer = String::new();
        reporter
            .render_report(&mut writer, &ErrorAdapter(&err))
            .unwrap();

        assert!(writer.contains("nothing to render"));
        assert!(writer.contains("umlhex::input"));
    }
}
