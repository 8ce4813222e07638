use crate::error::TranslateError;
use crate::google::GoogleTranslate;
use crate::settings::TranslateSettings;

/// A source of translations for short text strings.
///
/// Implementations may fail per call; [`crate::Translator`] absorbs those
/// failures. Backends are shared across every file of a run, so they take
/// `&self`.
pub trait TranslationBackend {
    /// Translate `text` into the backend's target language.
    fn translate(&self, text: &str) -> Result<String, TranslateError>;

    /// Short human-readable name, used in log messages.
    fn name(&self) -> &str;
}

/// A backend that returns its input unchanged.
///
/// Used when translation is skipped or the live backend is unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl TranslationBackend for PassThrough {
    fn translate(&self, text: &str) -> Result<String, TranslateError> {
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "pass-through"
    }
}

/// Build the backend for a run.
///
/// Never fails: if the live backend cannot be constructed, the run proceeds
/// with [`PassThrough`] and original-language text in every translated field.
pub fn build_backend(
    target_lang: &str,
    settings: &TranslateSettings,
) -> Box<dyn TranslationBackend> {
    match GoogleTranslate::new(target_lang, settings) {
        Ok(backend) => {
            log::info!(
                "Translating to '{}' via {}",
                backend.target_lang(),
                backend.endpoint()
            );
            Box::new(backend)
        }
        Err(e) => {
            log::info!("Translation unavailable ({e}); keeping original text");
            Box::new(PassThrough)
        }
    }
}
