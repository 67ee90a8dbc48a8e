//! Core data types for the language registry.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Sentinel returned when a translatable value cannot be resolved to text.
///
/// Surfaced to callers instead of an error so rendering code can keep going;
/// the marker is deliberately ugly to be visible in any UI.
pub const MISSING_TEXT: &str = "[!text]";

/// Reserved dictionary key carrying a language's display metadata instead of
/// translatable text.
pub const LANGUAGE_META_KEY: &str = "__language";

/// Display metadata for one supported language, e.g. for a language picker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageItem {
    /// Unique language code ("en", "fi-FI").
    pub code: String,
    /// Short display label ("EN").
    pub short_name: Option<String>,
    /// Full display name ("English").
    pub name: Option<String>,
}

impl LanguageItem {
    /// What: Create a bare item carrying only a code.
    ///
    /// Inputs:
    /// - `code`: Language code
    ///
    /// Output:
    /// - `LanguageItem` with empty display metadata
    #[must_use]
    pub fn bare(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }
}

/// One value inside a language dictionary: either translatable text or a
/// named group of key/text pairs. The reserved [`LANGUAGE_META_KEY`] entry
/// arrives as a `Group` and is treated as metadata, never as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DictEntry {
    /// Plain translated text for a top-level key.
    Text(String),
    /// Nested group: key -> translated text.
    Group(HashMap<String, String>),
}

/// One language's full dictionary: translation key -> entry.
pub type Dictionary = HashMap<String, DictEntry>;

/// Dictionary payload: language code -> dictionary.
///
/// A `BTreeMap` keeps iteration deterministic; within one payload the
/// alphabetically first language counts as "first encountered" (see
/// [`crate::i18n::LanguageRegistry::set_language_data`]).
pub type LanguageData = BTreeMap<String, Dictionary>;

/// A translatable value as supplied by call sites.
///
/// Either a literal display string (used verbatim, never looked up) or a
/// mapping from language code to text, resolved against the active or an
/// explicitly requested language. The `Invalid` variant captures defined but
/// malformed input (a number, an array) so it can degrade to
/// [`MISSING_TEXT`] with a diagnostic instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransText {
    /// Literal display string.
    Literal(String),
    /// Per-language text: language code -> display string.
    Localized(HashMap<String, String>),
    /// Defined input that is neither a string nor a language map.
    Invalid(serde_json::Value),
}

impl From<&str> for TransText {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_owned())
    }
}

impl From<String> for TransText {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<HashMap<String, String>> for TransText {
    fn from(value: HashMap<String, String>) -> Self {
        Self::Localized(value)
    }
}
