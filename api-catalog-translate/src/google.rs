//! Live translation through Google's public `translate_a/single` endpoint.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::backend::TranslationBackend;
use crate::error::TranslateError;
use crate::settings::TranslateSettings;

/// Longest input the endpoint accepts in a single request.
pub const MAX_TEXT_CHARS: usize = 5000;

/// Source language value that asks the service to detect the language.
pub const AUTO_DETECT: &str = "auto";

/// HTTP translation backend with auto-detected source language.
pub struct GoogleTranslate {
    http: Client,
    endpoint: Url,
    source_lang: String,
    target_lang: String,
}

impl GoogleTranslate {
    /// Validate the language codes and endpoint, then build the HTTP client.
    ///
    /// No request is sent here; connectivity problems surface per call.
    pub fn new(target_lang: &str, settings: &TranslateSettings) -> Result<Self, TranslateError> {
        if !is_language_tag(target_lang) {
            return Err(TranslateError::unsupported_language(target_lang));
        }
        if settings.source_lang != AUTO_DETECT && !is_language_tag(&settings.source_lang) {
            return Err(TranslateError::unsupported_language(&settings.source_lang));
        }

        let endpoint = Url::parse(&settings.endpoint)
            .map_err(|e| TranslateError::invalid_endpoint(format!("{}: {e}", settings.endpoint)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(TranslateError::invalid_endpoint(format!(
                "{}: unsupported scheme",
                settings.endpoint
            )));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(concat!("api-catalog/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            source_lang: settings.source_lang.clone(),
            target_lang: target_lang.to_string(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }
}

impl TranslationBackend for GoogleTranslate {
    fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let len = text.chars().count();
        if len > MAX_TEXT_CHARS {
            return Err(TranslateError::TextTooLong {
                len,
                max: MAX_TEXT_CHARS,
            });
        }

        let resp = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("client", "gtx"),
                ("sl", self.source_lang.as_str()),
                ("tl", self.target_lang.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TranslateError::ServerError {
                status: status.as_u16(),
            });
        }

        let body = resp.text()?;
        parse_response(&body)
    }

    fn name(&self) -> &str {
        "google-translate"
    }
}

/// Extract the translated text from a `translate_a/single` response body.
///
/// The body is a nested JSON array whose first element lists sentence
/// segments as `[translated, original, ...]`; the translation is the
/// concatenation of every segment's first item.
pub(crate) fn parse_response(body: &str) -> Result<String, TranslateError> {
    let value: Value = serde_json::from_str(body)?;
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::response("missing segment list"))?;

    let translated: String = segments
        .iter()
        .filter_map(|seg| seg.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        return Err(TranslateError::response("empty translation"));
    }
    Ok(translated)
}

/// Accepts `en`, `fil`, `zh-TW`, `zh-Hant` style codes.
pub(crate) fn is_language_tag(code: &str) -> bool {
    let mut parts = code.splitn(2, '-');
    let primary = parts.next().unwrap_or_default();
    let primary_ok =
        (2..=3).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic());
    let subtag_ok = parts.next().is_none_or(|sub| {
        (2..=4).contains(&sub.len()) && sub.chars().all(|c| c.is_ascii_alphanumeric())
    });
    primary_ok && subtag_ok
}

#[cfg(test)]
#[path = "tests/google_tests.rs"]
mod tests;
