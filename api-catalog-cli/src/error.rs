use api_catalog_import::ImportError;
use thiserror::Error;

/// Errors that end a CLI run with a non-zero exit status.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Reading spreadsheets or writing the catalog failed
    #[error(transparent)]
    Import(#[from] ImportError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
