/// Errors raised by a translation backend.
///
/// None of these reach the importer: [`crate::Translator`] turns them into
/// pass-through text, and [`crate::build_backend`] turns construction errors
/// into the [`crate::PassThrough`] backend.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error (HTTP {status})")]
    ServerError { status: u16 },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response: {0}")]
    Response(String),

    #[error("Unsupported language code: {0:?}")]
    UnsupportedLanguage(String),

    #[error("Text too long ({len} characters, limit {max})")]
    TextTooLong { len: usize, max: usize },

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl TranslateError {
    pub fn response(msg: impl Into<String>) -> Self {
        Self::Response(msg.into())
    }

    pub fn unsupported_language(code: impl Into<String>) -> Self {
        Self::UnsupportedLanguage(code.into())
    }

    pub fn invalid_endpoint(msg: impl Into<String>) -> Self {
        Self::InvalidEndpoint(msg.into())
    }
}
