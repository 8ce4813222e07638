//! Best-effort machine translation for catalog text fields.
//!
//! Callers work with a [`Translator`], which wraps any [`TranslationBackend`]
//! with a per-file cache and swallows every backend failure. The backend is
//! chosen once per run: [`GoogleTranslate`] when it can be constructed,
//! [`PassThrough`] otherwise or when translation is skipped.

pub mod backend;
pub mod cache;
pub mod error;
pub mod google;
pub mod settings;
pub mod translator;

pub use backend::{PassThrough, TranslationBackend, build_backend};
pub use cache::TranslationCache;
pub use error::TranslateError;
pub use google::GoogleTranslate;
pub use settings::{TranslateSettings, settings_path};
pub use translator::Translator;
