//! Rendering of localizable messages.

use std::collections::BTreeMap;

use ecosort_core::message::Message;

use crate::language::Language;
use crate::tables;

/// Renders message keys in one language.
///
/// A key missing from the active language falls back to English; a key
/// missing everywhere renders as the key itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    /// Creates a translator for `language`.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// The active language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches the active language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Raw template for `key`, after fallback.
    #[must_use]
    pub fn template<'a>(&self, key: &'a str) -> &'a str {
        if let Some(text) = tables::lookup(self.language, key) {
            return text;
        }
        if let Some(text) = tables::lookup(Language::En, key) {
            return text;
        }
        tracing::debug!(key, language = %self.language, "missing translation");
        key
    }

    /// Renders a parameterless key.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.template(key).to_owned()
    }

    /// Renders `message` with its parameters substituted.
    #[must_use]
    pub fn translate(&self, message: &Message) -> String {
        interpolate(self.template(&message.key), &message.params)
    }
}

/// Replaces each `{{name}}` in `template` with `params[name]`.
///
/// Placeholders without a matching parameter are kept verbatim.
#[must_use]
pub fn interpolate(template: &str, params: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = after[..end].trim();
        match params.get(name) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}
