//! Internationalization (i18n) module for Lingora.
//!
//! This module provides the language registry, translation resolution,
//! parameter interpolation and dictionary loading.
//!
//! # Overview
//!
//! The i18n system supports:
//! - **Language Registry**: Per-language key/value dictionaries with an
//!   ordered language list and active/default language selection
//! - **Fallback**: Lookups missing in the active language can fall back to
//!   the default language's value
//! - **Interpolation**: `{{name}}` placeholders substituted with caller
//!   parameters, each value passed through a pluggable sanitizer
//! - **Dictionary Loading**: JSON dictionary files loaded from a `locales/`
//!   directory
//! - **Language Detection**: Auto-detection from environment variables
//!   (`LC_ALL`, `LC_MESSAGES`, `LANG`)
//!
//! # Dictionary Files
//!
//! Dictionaries live in `locales/{code}.json` (e.g. `locales/fi.json`).
//! Keys map to text or to a named group of key/text pairs; the reserved
//! `__language` object carries display metadata:
//!
//! ```json
//! {
//!   "__language": { "shortName": "FI", "name": "Suomi" },
//!   "Save": "Tallenna",
//!   "errors": { "NotFound": "Ei löytynyt" }
//! }
//! ```
//!
//! # Usage
//!
//! ```rust
//! use lingora::i18n::LanguageRegistry;
//!
//! let mut registry = LanguageRegistry::new();
//! registry.set_language_data(serde_json::from_str(
//!     r#"{ "en": { "One": "One" }, "fi": { "One": "Yksi" } }"#,
//! ).expect("payload"));
//! registry.set_language(Some("fi".into()));
//! assert_eq!(registry.tr("One"), "Yksi");
//! ```
//!
//! # Error Handling
//!
//! - Missing translation keys degrade to the key itself (keys double as
//!   readable English text); diagnostics go through `tracing`
//! - Malformed translatable values log a warning and resolve to the
//!   [`MISSING_TEXT`] marker
//! - Resolving a language map with no language ever configured is the one
//!   fatal case and returns [`I18nError::LanguageNotConfigured`]

pub mod detection;
pub mod interpolate;
pub mod loader;
pub mod registry;
pub mod resolve;
pub mod types;

pub use detection::{detect_system_language, primary_subtag};
pub use interpolate::{Sanitizer, TranslateParams, interpolate_params};
pub use loader::{is_valid_language_code, load_dictionary_file, load_locales_dir};
pub use registry::{LanguageChoice, LanguageRegistry};
pub use resolve::TranslateOpts;
pub use types::{
    DictEntry, Dictionary, LANGUAGE_META_KEY, LanguageData, LanguageItem, MISSING_TEXT, TransText,
};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the i18n subsystem.
#[derive(Debug, Error)]
pub enum I18nError {
    /// A language map was given but no target language was ever configured.
    #[error("cannot resolve a localized text map without a configured language")]
    LanguageNotConfigured,
    /// A language code failed format validation.
    #[error("invalid language code: '{0}'")]
    InvalidLanguageCode(String),
    /// No dictionary file exists for the requested language.
    #[error("dictionary file not found: {path}")]
    DictionaryNotFound {
        /// Path that was probed.
        path: PathBuf,
    },
    /// A dictionary file could not be read.
    #[error("failed to read dictionary file {path}: {source}")]
    DictionaryRead {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A dictionary file contained invalid JSON.
    #[error("failed to parse dictionary file {path}: {source}")]
    DictionaryParse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// A dictionary file exists but has no content.
    #[error("dictionary file is empty: {path}")]
    EmptyDictionary {
        /// Path of the empty file.
        path: PathBuf,
    },
    /// The locales directory is missing or unreadable.
    #[error("locales directory not found: {path}")]
    MissingLocalesDir {
        /// Directory that was probed.
        path: PathBuf,
    },
}
