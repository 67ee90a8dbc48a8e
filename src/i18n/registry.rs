//! The language registry: loaded dictionaries, the ordered language list and
//! the active/default language selection.

use std::collections::HashMap;
use std::fmt;

use crate::i18n::interpolate::Sanitizer;
use crate::i18n::types::{
    DictEntry, Dictionary, LANGUAGE_META_KEY, LanguageData, LanguageItem,
};

/// Default-language selection argument for
/// [`LanguageRegistry::set_default_language`].
///
/// Models the three call shapes of the operation: leave the value produced by
/// the list-based reset in place, clear it, or set an explicit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageChoice {
    /// Keep whatever the first-entry reset produced (still applies the reset).
    Keep,
    /// Explicitly clear the default language.
    Clear,
    /// Use the given language code.
    Code(String),
}

/// Process-wide translation state, held as an explicit value instead of
/// module globals so callers can scope one registry per context.
///
/// All operations are synchronous and never block; there is no interior
/// locking. Sharing a registry mutably across concurrent requests is the
/// caller's problem to avoid.
pub struct LanguageRegistry {
    /// Explicitly selected language; `None` means "unset, use default".
    current_language: Option<String>,
    /// Fallback language; seeded by the first language encountered.
    default_language: Option<String>,
    /// Whether lookups missing in the current language retry the default.
    fallback_to_default: bool,
    /// Ordered language list; insertion order drives "first entry" fallback.
    languages: Vec<LanguageItem>,
    /// All loaded dictionaries by language code.
    language_data: HashMap<String, Dictionary>,
    /// Insertion order of `language_data` keys.
    data_order: Vec<String>,
    /// Escaping hook for interpolated parameter values.
    sanitizer: Option<Box<dyn Sanitizer + Send + Sync>>,
}

impl fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageRegistry")
            .field("current_language", &self.current_language)
            .field("default_language", &self.default_language)
            .field("fallback_to_default", &self.fallback_to_default)
            .field("languages", &self.languages)
            .field("data_order", &self.data_order)
            .field("sanitizer", &self.sanitizer.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageRegistry {
    /// Create an empty registry with no sanitizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_language: None,
            default_language: None,
            fallback_to_default: false,
            languages: Vec::new(),
            language_data: HashMap::new(),
            data_order: Vec::new(),
            sanitizer: None,
        }
    }

    /// Create an empty registry with the given sanitizer installed.
    #[must_use]
    pub fn with_sanitizer(sanitizer: impl Sanitizer + Send + Sync + 'static) -> Self {
        let mut registry = Self::new();
        registry.set_sanitizer(sanitizer);
        registry
    }

    /// Install the sanitizer applied to interpolated parameter values.
    pub fn set_sanitizer(&mut self, sanitizer: impl Sanitizer + Send + Sync + 'static) {
        self.sanitizer = Some(Box::new(sanitizer));
    }

    /// Remove the sanitizer; interpolation substitutes values literally.
    pub fn clear_sanitizer(&mut self) {
        self.sanitizer = None;
    }

    pub(crate) fn sanitizer(&self) -> Option<&(dyn Sanitizer + Send + Sync)> {
        self.sanitizer.as_deref()
    }

    /// What: Merge dictionary payloads into the registry.
    ///
    /// Inputs:
    /// - `data`: Language code -> dictionary
    ///
    /// Details:
    /// - Same-named keys are overwritten; keys absent from the payload stay
    ///   loaded for languages not included in it
    /// - The first language encountered seeds the default language if unset
    /// - A [`LANGUAGE_META_KEY`] group entry is extracted into the language
    ///   list: a new item is created for an unknown code, present fields are
    ///   merged over an existing item
    pub fn set_language_data(&mut self, data: LanguageData) {
        for (code, dict) in data {
            if self.default_language.is_none() {
                tracing::debug!(language = %code, "seeding default language from payload");
                self.default_language = Some(code.clone());
            }
            if let Some(DictEntry::Group(meta)) = dict.get(LANGUAGE_META_KEY) {
                self.upsert_language_item(&code, meta);
            }
            if !self.data_order.contains(&code) {
                self.data_order.push(code.clone());
            }
            self.language_data.entry(code).or_default().extend(dict);
        }
    }

    /// Merge `__language` metadata into the ordered language list.
    fn upsert_language_item(&mut self, code: &str, meta: &HashMap<String, String>) {
        let short_name = meta.get("shortName").cloned();
        let name = meta.get("name").cloned();
        if let Some(item) = self.languages.iter_mut().find(|l| l.code == code) {
            if short_name.is_some() {
                item.short_name = short_name;
            }
            if name.is_some() {
                item.name = name;
            }
        } else {
            self.languages.push(LanguageItem {
                code: code.to_owned(),
                short_name,
                name,
            });
        }
    }

    /// Codes of all loaded dictionaries, in insertion order.
    #[must_use]
    pub fn language_data_keys(&self) -> Vec<String> {
        self.data_order.clone()
    }

    /// Loaded dictionary for `code`, if any.
    #[must_use]
    pub fn dictionary(&self, code: &str) -> Option<&Dictionary> {
        self.language_data.get(code)
    }

    /// What: Remove one dictionary, or all of them.
    ///
    /// Inputs:
    /// - `lang_key`: Code of the dictionary to remove, or `None` for all
    /// - `keep_languages_list`: When true, the language list and the
    ///   current/default selection are left untouched
    ///
    /// Details:
    /// - Removing a language also drops it from the language list; emptying
    ///   the list resets both current and default language to `None`
    /// - Removing the default language reassigns the default to the new
    ///   first list entry; removing the current language reassigns the
    ///   current to the (possibly new) default, so the active language never
    ///   points at unloaded data
    pub fn clear_language_data(&mut self, lang_key: Option<&str>, keep_languages_list: bool) {
        match lang_key {
            Some(code) => {
                self.language_data.remove(code);
                self.data_order.retain(|c| c != code);
                if keep_languages_list {
                    return;
                }
                self.languages.retain(|l| l.code != code);
                if self.languages.is_empty() {
                    self.current_language = None;
                    self.default_language = None;
                    return;
                }
                if self.default_language.as_deref() == Some(code) {
                    self.default_language = self.languages.first().map(|l| l.code.clone());
                    tracing::debug!(
                        default = ?self.default_language,
                        "default language removed; reassigned to first list entry"
                    );
                }
                if self.current_language.as_deref() == Some(code) {
                    self.current_language = self.default_language.clone();
                    tracing::debug!(
                        current = ?self.current_language,
                        "active language removed; reassigned to default"
                    );
                }
            }
            None => {
                self.language_data.clear();
                self.data_order.clear();
                if !keep_languages_list {
                    self.languages.clear();
                    self.current_language = None;
                    self.default_language = None;
                }
            }
        }
    }

    /// What: Select the active language.
    ///
    /// Inputs:
    /// - `code`: Language code, or `None` to unset the selection
    ///
    /// Details:
    /// - A non-`None` code seeds the default language if still unset and is
    ///   appended to the language list as a bare entry if unknown
    pub fn set_language(&mut self, code: Option<String>) {
        if let Some(c) = &code {
            if self.default_language.is_none() {
                self.default_language = Some(c.clone());
            }
            if !self.languages.iter().any(|l| l.code == *c) {
                self.languages.push(LanguageItem::bare(c.clone()));
            }
        }
        self.current_language = code;
    }

    /// Active language, falling back to the default when unset.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.current_language
            .as_deref()
            .or(self.default_language.as_deref())
    }

    /// What: Set the default (fallback) language.
    ///
    /// Inputs:
    /// - `choice`: [`LanguageChoice`] selecting keep/clear/explicit code
    /// - `fallback`: When `Some`, also sets the fallback-to-default policy
    ///
    /// Details:
    /// - A non-empty language list first forces the default to the first
    ///   entry's code; `Keep` stops there, `Clear` and `Code` overwrite
    /// - A non-empty `Code` also becomes the current language when no
    ///   current language is set
    pub fn set_default_language(&mut self, choice: LanguageChoice, fallback: Option<bool>) {
        if let Some(first) = self.languages.first() {
            self.default_language = Some(first.code.clone());
        }
        match &choice {
            LanguageChoice::Keep => {}
            LanguageChoice::Clear => self.default_language = None,
            LanguageChoice::Code(code) => self.default_language = Some(code.clone()),
        }
        if let Some(flag) = fallback {
            self.fallback_to_default = flag;
        }
        if let LanguageChoice::Code(code) = choice
            && !code.is_empty()
            && self.current_language.is_none()
        {
            self.current_language = Some(code);
        }
    }

    /// Default (fallback) language, if any.
    #[must_use]
    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    /// Enable or disable falling back to the default language's value when a
    /// lookup misses in the current language.
    pub fn use_default_language_as_fallback(&mut self, enabled: bool) {
        self.fallback_to_default = enabled;
    }

    /// Whether fallback-to-default is enabled.
    #[must_use]
    pub fn falls_back_to_default(&self) -> bool {
        self.fallback_to_default
    }

    /// Replace the ordered language list wholesale.
    pub fn set_languages(&mut self, list: Vec<LanguageItem>) {
        self.languages = list;
    }

    /// The ordered language list.
    #[must_use]
    pub fn languages(&self) -> &[LanguageItem] {
        &self.languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::types::LanguageData;

    fn data(json: serde_json::Value) -> LanguageData {
        serde_json::from_value(json).expect("language data")
    }

    #[test]
    fn set_language_data_seeds_default_and_merges_keys() {
        let mut reg = LanguageRegistry::new();
        reg.set_language_data(data(serde_json::json!({
            "en": { "One": "One", "Two": "Two" },
            "fi": { "One": "Yksi" }
        })));
        assert_eq!(reg.default_language(), Some("en"));
        assert_eq!(reg.language_data_keys(), vec!["en", "fi"]);

        // Second payload overwrites same-named keys but keeps the rest.
        reg.set_language_data(data(serde_json::json!({
            "en": { "Two": "Second" }
        })));
        let en = reg.dictionary("en").expect("en dictionary");
        assert_eq!(en.get("One"), Some(&DictEntry::Text("One".into())));
        assert_eq!(en.get("Two"), Some(&DictEntry::Text("Second".into())));
        // Default is only seeded once.
        assert_eq!(reg.default_language(), Some("en"));
    }

    #[test]
    fn set_language_data_extracts_language_metadata() {
        let mut reg = LanguageRegistry::new();
        reg.set_language_data(data(serde_json::json!({
            "fi": {
                "__language": { "shortName": "FI" },
                "One": "Yksi"
            }
        })));
        assert_eq!(
            reg.languages(),
            &[LanguageItem {
                code: "fi".into(),
                short_name: Some("FI".into()),
                name: None,
            }]
        );

        // Merging fills in fields without dropping existing ones.
        reg.set_language_data(data(serde_json::json!({
            "fi": { "__language": { "name": "Suomi" } }
        })));
        assert_eq!(
            reg.languages(),
            &[LanguageItem {
                code: "fi".into(),
                short_name: Some("FI".into()),
                name: Some("Suomi".into()),
            }]
        );
    }

    #[test]
    fn set_language_seeds_default_and_language_list() {
        let mut reg = LanguageRegistry::new();
        reg.set_language(Some("fi".into()));
        assert_eq!(reg.language(), Some("fi"));
        assert_eq!(reg.default_language(), Some("fi"));
        assert_eq!(reg.languages(), &[LanguageItem::bare("fi")]);

        reg.set_language(Some("en".into()));
        assert_eq!(reg.default_language(), Some("fi"));
        assert_eq!(reg.languages().len(), 2);

        reg.set_language(None);
        // Unset current falls back to the default.
        assert_eq!(reg.language(), Some("fi"));
    }

    #[test]
    fn set_default_language_choices() {
        let mut reg = LanguageRegistry::new();
        reg.set_languages(vec![LanguageItem::bare("en"), LanguageItem::bare("fi")]);

        // Keep applies the first-entry reset only.
        reg.set_default_language(LanguageChoice::Keep, None);
        assert_eq!(reg.default_language(), Some("en"));

        reg.set_default_language(LanguageChoice::Code("fi".into()), Some(true));
        assert_eq!(reg.default_language(), Some("fi"));
        assert!(reg.falls_back_to_default());
        // No current language was set, so the code also became current.
        assert_eq!(reg.language(), Some("fi"));

        reg.set_default_language(LanguageChoice::Clear, Some(false));
        assert_eq!(reg.default_language(), None);
        assert!(!reg.falls_back_to_default());
        // Current selection is untouched by Clear.
        assert_eq!(reg.language(), Some("fi"));
    }

    #[test]
    fn clear_language_data_reassigns_active_and_default() {
        let mut reg = LanguageRegistry::new();
        reg.set_language_data(data(serde_json::json!({
            "en": { "__language": { "name": "English" }, "One": "One" },
            "fi": { "__language": { "name": "Suomi" }, "One": "Yksi" }
        })));
        reg.set_language(Some("fi".into()));

        reg.clear_language_data(Some("fi"), false);
        assert!(reg.dictionary("fi").is_none());
        assert_eq!(reg.language_data_keys(), vec!["en"]);
        assert_eq!(reg.default_language(), Some("en"));
        assert_eq!(reg.language(), Some("en"));

        reg.clear_language_data(Some("en"), false);
        assert_eq!(reg.language(), None);
        assert_eq!(reg.default_language(), None);
        assert!(reg.languages().is_empty());
    }

    #[test]
    fn clear_language_data_reassigns_default_to_first_entry() {
        let mut reg = LanguageRegistry::new();
        reg.set_language_data(data(serde_json::json!({
            "en": { "__language": {}, "One": "One" },
            "fi": { "__language": {}, "One": "Yksi" },
            "sv": { "__language": {}, "One": "Ett" }
        })));
        reg.set_language(Some("sv".into()));
        assert_eq!(reg.default_language(), Some("en"));

        // Removing the default moves it to the new first entry; the current
        // language keeps pointing at its loaded dictionary.
        reg.clear_language_data(Some("en"), false);
        assert_eq!(reg.default_language(), Some("fi"));
        assert_eq!(reg.language(), Some("sv"));
    }

    #[test]
    fn clear_language_data_keep_languages_list() {
        let mut reg = LanguageRegistry::new();
        reg.set_language_data(data(serde_json::json!({
            "fi": { "__language": {}, "One": "Yksi" }
        })));
        reg.set_language(Some("fi".into()));

        reg.clear_language_data(Some("fi"), true);
        assert!(reg.dictionary("fi").is_none());
        assert_eq!(reg.languages().len(), 1);
        assert_eq!(reg.language(), Some("fi"));

        reg.set_language_data(data(serde_json::json!({
            "fi": { "One": "Yksi" }
        })));
        reg.clear_language_data(None, true);
        assert!(reg.language_data_keys().is_empty());
        assert_eq!(reg.language(), Some("fi"));

        reg.clear_language_data(None, false);
        assert!(reg.languages().is_empty());
        assert_eq!(reg.language(), None);
    }
}
