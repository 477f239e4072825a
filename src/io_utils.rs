//! Error helpers shared by the command line tools.

use std::fmt;

use crate::error::TonemapError;

/// Error surfaced to the user by the binaries: a plain message with the
/// underlying cause preserved for `source()` chains.
#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Convert a library error into a CLI error with an actionable hint.
pub fn tonemap_cli_error(context: &str, err: TonemapError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Actionable hint for a library error variant.
pub fn cli_hint(err: &TonemapError) -> String {
    use TonemapError::*;
    match err {
        Alphabet(msg) => format!("{msg}. Check the symbol set."),
        Bands(msg) => format!("{msg}. Adjust the band plan."),
        Json(e) => format!("{e}. This is a bug."),
    }
}
