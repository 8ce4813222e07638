//! Translation backend settings.
//!
//! Each field resolves through a priority chain:
//!
//! 1. Environment variable (`API_CATALOG_TRANSLATE_*`)
//! 2. `[translate]` table in `~/.config/api-catalog/settings.toml`
//! 3. Built-in default
//!
//! A missing or broken settings file is never fatal; translation is
//! best-effort and so is its configuration.

use std::path::{Path, PathBuf};

use crate::google::AUTO_DETECT;

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

const ENV_ENDPOINT: &str = "API_CATALOG_TRANSLATE_ENDPOINT";
const ENV_TIMEOUT: &str = "API_CATALOG_TRANSLATE_TIMEOUT";
const ENV_SOURCE: &str = "API_CATALOG_TRANSLATE_SOURCE";

/// Resolved settings for the live translation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateSettings {
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Source language code, or `auto` to let the service detect it.
    pub source_lang: String,
}

impl Default for TranslateSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            source_lang: AUTO_DETECT.to_string(),
        }
    }
}

/// TOML settings file format.
#[derive(Debug, Default, serde::Deserialize)]
struct SettingsFile {
    translate: Option<TranslateSection>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct TranslateSection {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
    source_lang: Option<String>,
}

/// Canonical path to the settings file: `~/.config/api-catalog/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("api-catalog").join("settings.toml")
}

impl TranslateSettings {
    /// Load settings from `path` (or [`settings_path`]) and the environment.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(settings_path);
        let section = load_section(&path);
        Self::resolve(section.as_ref(), |key| std::env::var(key).ok())
    }

    /// Parse settings from TOML text alone, ignoring the environment.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        let file: SettingsFile = toml::from_str(contents)?;
        Ok(Self::resolve(file.translate.as_ref(), |_| None))
    }

    pub(crate) fn resolve(
        section: Option<&TranslateSection>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let defaults = Self::default();

        let endpoint = env(ENV_ENDPOINT)
            .or_else(|| section.and_then(|s| s.endpoint.clone()))
            .unwrap_or(defaults.endpoint);

        let timeout_secs = env(ENV_TIMEOUT)
            .and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(secs) => Some(secs),
                Err(_) => {
                    log::warn!("Ignoring {ENV_TIMEOUT}={raw:?}: not a whole number of seconds");
                    None
                }
            })
            .or_else(|| section.and_then(|s| s.timeout_secs))
            .unwrap_or(defaults.timeout_secs);

        let source_lang = env(ENV_SOURCE)
            .or_else(|| section.and_then(|s| s.source_lang.clone()))
            .unwrap_or(defaults.source_lang);

        Self {
            endpoint,
            timeout_secs,
            source_lang,
        }
    }
}

fn load_section(path: &Path) -> Option<TranslateSection> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::debug!("No settings read from {}: {e}", path.display());
            return None;
        }
    };
    match toml::from_str::<SettingsFile>(&contents) {
        Ok(file) => file.translate,
        Err(e) => {
            log::warn!("Ignoring malformed settings file {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
