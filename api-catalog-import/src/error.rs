use thiserror::Error;

/// Errors reading a spreadsheet file. Always fatal for the run.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("Cannot open workbook {path}: {source}")]
    Open {
        path: String,
        source: calamine::XlsxError,
    },
    #[error("Cannot read first worksheet of {path}: {source}")]
    Read {
        path: String,
        source: calamine::XlsxError,
    },
    #[error("Workbook has no worksheets: {0}")]
    NoWorksheets(String),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Directory '{0}' not found")]
    DirNotFound(String),
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Sheet(#[from] SheetError),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON error writing {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}
