use std::cell::RefCell;

use super::*;
use crate::error::TranslateError;

/// Records every call; translates by tagging, fails on inputs containing "!".
#[derive(Default)]
struct ScriptedBackend {
    calls: RefCell<Vec<String>>,
}

impl TranslationBackend for ScriptedBackend {
    fn translate(&self, text: &str) -> Result<String, TranslateError> {
        self.calls.borrow_mut().push(text.to_string());
        if text.contains('!') {
            return Err(TranslateError::ServerError { status: 429 });
        }
        Ok(format!("en:{text}"))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[test]
fn translates_through_backend() {
    let backend = ScriptedBackend::default();
    let mut translator = Translator::new(&backend);
    assert_eq!(translator.translate("金流"), "en:金流");
}

#[test]
fn empty_input_skips_backend() {
    let backend = ScriptedBackend::default();
    let mut translator = Translator::new(&backend);
    assert_eq!(translator.translate(""), "");
    assert!(backend.calls.borrow().is_empty());
    assert!(translator.cache().is_empty());
}

#[test]
fn repeated_input_hits_backend_once() {
    let backend = ScriptedBackend::default();
    let mut translator = Translator::new(&backend);
    assert_eq!(translator.translate("電商"), "en:電商");
    assert_eq!(translator.translate("電商"), "en:電商");
    assert_eq!(translator.translate("電商"), "en:電商");
    assert_eq!(*backend.calls.borrow(), vec!["電商"]);
    assert_eq!(translator.cache().hits(), 2);
}

#[test]
fn cache_key_is_exact_text() {
    let backend = ScriptedBackend::default();
    let mut translator = Translator::new(&backend);
    translator.translate("API");
    translator.translate("api");
    translator.translate("API ");
    assert_eq!(backend.calls.borrow().len(), 3);
}

#[test]
fn failure_returns_original_and_is_not_retried() {
    let backend = ScriptedBackend::default();
    let mut translator = Translator::new(&backend);
    assert_eq!(translator.translate("限流!"), "限流!");
    assert_eq!(translator.translate("限流!"), "限流!");
    assert_eq!(backend.calls.borrow().len(), 1);
}

#[test]
fn fresh_translator_has_fresh_cache() {
    let backend = ScriptedBackend::default();
    Translator::new(&backend).translate("支付");
    Translator::new(&backend).translate("支付");
    assert_eq!(backend.calls.borrow().len(), 2);
}

#[test]
fn preview_truncates_on_char_boundary() {
    let long = "資".repeat(50);
    let p = preview(&long);
    assert!(p.ends_with("..."));
    assert_eq!(p.chars().count(), 43);
    assert_eq!(preview("short"), "short");
}
