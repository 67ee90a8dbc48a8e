//! Translation-key resolution: raw text lookup and the top-level
//! translate-and-interpolate entry point.

use crate::i18n::I18nError;
use crate::i18n::interpolate::{TranslateParams, interpolate_params};
use crate::i18n::registry::LanguageRegistry;
use crate::i18n::types::{DictEntry, Dictionary, LANGUAGE_META_KEY, MISSING_TEXT, TransText};

/// Options for [`LanguageRegistry::translate`].
#[derive(Debug, Clone)]
pub struct TranslateOpts {
    /// Explicit language override. The outer `Option` models whether the
    /// caller supplied the field at all: `None` uses the registry's active
    /// language, `Some(None)` explicitly requests "no language".
    pub language: Option<Option<String>>,
    /// Look the key up inside this nested group instead of the top level.
    pub group: Option<String>,
    /// Named interpolation parameters.
    pub params: Option<TranslateParams>,
    /// Pass parameter values through the configured sanitizer. On by
    /// default; has no effect when no sanitizer is installed.
    pub sanitize_params: bool,
}

impl Default for TranslateOpts {
    fn default() -> Self {
        Self {
            language: None,
            group: None,
            params: None,
            sanitize_params: true,
        }
    }
}

impl LanguageRegistry {
    /// What: Resolve a translatable value to a raw, uninterpolated string.
    ///
    /// Inputs:
    /// - `text`: The translatable value, or `None` for absent input
    /// - `language`: Explicit target override; `None` uses the active
    ///   language, `Some(None)` means "no language"
    ///
    /// Output:
    /// - The raw text, or [`MISSING_TEXT`] when it cannot be resolved
    ///
    /// # Errors
    /// - [`I18nError::LanguageNotConfigured`] when a language map is given
    ///   but no target language was ever configured
    ///
    /// Details:
    /// - Literal strings are returned verbatim, never looked up
    /// - Language maps are resolved against the map itself, independent of
    ///   the loaded dictionaries; a miss retries the default language when
    ///   fallback-to-default is enabled
    /// - Malformed input logs a warning and degrades to [`MISSING_TEXT`]
    pub fn resolve_text(
        &self,
        text: Option<&TransText>,
        language: Option<Option<&str>>,
    ) -> Result<String, I18nError> {
        let Some(text) = text else {
            return Ok(MISSING_TEXT.to_owned());
        };
        match text {
            TransText::Literal(s) => Ok(s.clone()),
            TransText::Localized(map) => {
                let target = match language {
                    Some(explicit) => explicit.map(ToOwned::to_owned),
                    None => self.language().map(ToOwned::to_owned),
                };
                let Some(target) = target.filter(|t| !t.is_empty()) else {
                    return Err(I18nError::LanguageNotConfigured);
                };
                if let Some(value) = map.get(&target) {
                    return Ok(value.clone());
                }
                if self.falls_back_to_default()
                    && let Some(default) = self.default_language()
                    && let Some(value) = map.get(default)
                {
                    tracing::debug!(
                        language = %target,
                        default,
                        "language map missing target language; using default"
                    );
                    return Ok(value.clone());
                }
                Ok(MISSING_TEXT.to_owned())
            }
            TransText::Invalid(value) => {
                tracing::warn!(
                    ?value,
                    "translatable value is neither a string nor a language map"
                );
                Ok(MISSING_TEXT.to_owned())
            }
        }
    }

    /// What: Translate a value against the loaded dictionaries and
    /// interpolate parameters into the result.
    ///
    /// Inputs:
    /// - `text`: The translatable value, or `None`
    /// - `opts`: Language override, group, parameters, sanitize flag
    ///
    /// Output:
    /// - The final display string; `None` input yields an empty string
    ///
    /// # Errors
    /// - [`I18nError::LanguageNotConfigured`] when `text` is a language map
    ///   and no target language is available
    ///
    /// Details:
    /// - Language maps skip the dictionary lookup entirely
    /// - When neither the target nor the default language has a loaded
    ///   dictionary, the resolved raw text is used as the final text (the
    ///   "no data loaded, key is the text" mode for literal call sites)
    /// - A dictionary miss retries the default language's dictionary when
    ///   fallback-to-default is enabled; a final miss falls back to the raw
    ///   key itself, since keys double as readable default text
    pub fn translate(
        &self,
        text: Option<&TransText>,
        opts: &TranslateOpts,
    ) -> Result<String, I18nError> {
        let Some(text) = text else {
            return Ok(String::new());
        };

        let lang = match &opts.language {
            Some(explicit) => explicit.clone(),
            None => self.language().map(ToOwned::to_owned),
        };
        let raw = self.resolve_text(
            Some(text),
            opts.language.as_ref().map(|l| l.as_deref()),
        )?;

        // Explicit per-language maps bypass the dictionaries.
        if matches!(text, TransText::Localized(_) | TransText::Invalid(_)) {
            return Ok(self.interpolate(&raw, opts));
        }

        let dict = lang.as_deref().and_then(|l| self.dictionary(l));
        let default_dict = self.default_language().and_then(|d| self.dictionary(d));
        if dict.is_none() && default_dict.is_none() {
            return Ok(self.interpolate(&raw, opts));
        }

        let mut resolved = dict.and_then(|d| lookup(d, &raw, opts.group.as_deref()));
        if resolved.is_none()
            && self.falls_back_to_default()
            && lang.as_deref() != self.default_language()
        {
            resolved = default_dict.and_then(|d| lookup(d, &raw, opts.group.as_deref()));
            if resolved.is_some() {
                tracing::debug!(
                    key = %raw,
                    language = ?lang,
                    "translation missing in target language; using default"
                );
            }
        }

        let final_text = resolved.unwrap_or(raw);
        Ok(self.interpolate(&final_text, opts))
    }

    /// Translate a literal key with default options.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.tr_with(key, &TranslateOpts::default())
    }

    /// What: Translate a literal key with explicit options.
    ///
    /// Inputs:
    /// - `key`: Translation key (doubles as default display text)
    /// - `opts`: Translation options
    ///
    /// Output:
    /// - The display string; the literal path cannot fail, so an error is
    ///   logged and degrades to an empty string
    #[must_use]
    pub fn tr_with(&self, key: &str, opts: &TranslateOpts) -> String {
        let text = TransText::from(key);
        match self.translate(Some(&text), opts) {
            Ok(out) => out,
            Err(err) => {
                tracing::warn!(key, error = %err, "translation failed");
                String::new()
            }
        }
    }

    /// Interpolate parameters into resolved text per the options.
    fn interpolate(&self, text: &str, opts: &TranslateOpts) -> String {
        let sanitizer = if opts.sanitize_params {
            self.sanitizer().map(|s| s as &dyn crate::i18n::Sanitizer)
        } else {
            None
        };
        interpolate_params(text, opts.params.as_ref(), sanitizer)
    }
}

/// Look a raw key up in one dictionary, honoring the optional group and
/// skipping the reserved metadata entry.
fn lookup(dict: &Dictionary, key: &str, group: Option<&str>) -> Option<String> {
    match group {
        Some(group_name) => match dict.get(group_name)? {
            DictEntry::Group(entries) => entries.get(key).cloned(),
            DictEntry::Text(_) => None,
        },
        None => {
            if key == LANGUAGE_META_KEY {
                return None;
            }
            match dict.get(key)? {
                DictEntry::Text(value) => Some(value.clone()),
                DictEntry::Group(_) => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::i18n::types::LanguageData;

    fn loaded_registry() -> LanguageRegistry {
        let data: LanguageData = serde_json::from_value(serde_json::json!({
            "en": {
                "__language": { "shortName": "EN", "name": "English" },
                "One": "One",
                "Greeting": "Hi {{name}}",
                "errors": { "NotFound": "Not found" }
            },
            "fi": {
                "__language": { "shortName": "FI", "name": "Suomi" },
                "One": "Yksi",
                "errors": { "NotFound": "Ei löytynyt" }
            }
        }))
        .expect("language data");
        let mut reg = LanguageRegistry::new();
        reg.set_language_data(data);
        reg
    }

    fn localized(pairs: &[(&str, &str)]) -> TransText {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        TransText::Localized(map)
    }

    #[test]
    fn resolve_text_literal_and_missing() {
        let reg = LanguageRegistry::new();
        assert_eq!(
            reg.resolve_text(Some(&TransText::from("Hello")), None)
                .expect("literal"),
            "Hello"
        );
        assert_eq!(reg.resolve_text(None, None).expect("absent"), MISSING_TEXT);
    }

    #[test]
    fn resolve_text_localized_requires_language() {
        let reg = LanguageRegistry::new();
        let text = localized(&[("en", "One")]);
        let err = reg.resolve_text(Some(&text), None).expect_err("no language");
        assert!(matches!(err, I18nError::LanguageNotConfigured));

        // An explicit "no language" request fails the same way even when a
        // language is configured.
        let mut reg = LanguageRegistry::new();
        reg.set_language(Some("en".into()));
        let err = reg
            .resolve_text(Some(&text), Some(None))
            .expect_err("explicit none");
        assert!(matches!(err, I18nError::LanguageNotConfigured));
    }

    #[test]
    fn resolve_text_localized_lookup_and_fallback() {
        let mut reg = LanguageRegistry::new();
        reg.set_language(Some("fi".into()));
        reg.set_default_language(
            crate::i18n::LanguageChoice::Code("en".into()),
            Some(false),
        );
        let text = localized(&[("en", "One")]);

        // The list-first reset ran first, then the explicit code won.
        assert_eq!(reg.default_language(), Some("en"));
        assert_eq!(
            reg.resolve_text(Some(&text), None).expect("no fallback"),
            MISSING_TEXT
        );

        reg.use_default_language_as_fallback(true);
        assert_eq!(reg.resolve_text(Some(&text), None).expect("fallback"), "One");

        // Explicit language override wins over the active language.
        let fi = localized(&[("fi", "Yksi")]);
        assert_eq!(
            reg.resolve_text(Some(&fi), Some(Some("fi"))).expect("explicit"),
            "Yksi"
        );
    }

    #[test]
    fn resolve_text_invalid_degrades_to_marker() {
        let mut reg = LanguageRegistry::new();
        reg.set_language(Some("en".into()));
        let text = TransText::Invalid(serde_json::json!(42));
        assert_eq!(reg.resolve_text(Some(&text), None).expect("invalid"), MISSING_TEXT);
    }

    #[test]
    fn translate_none_is_empty_string() {
        let reg = LanguageRegistry::new();
        assert_eq!(
            reg.translate(None, &TranslateOpts::default()).expect("none"),
            ""
        );
    }

    #[test]
    fn translate_without_dictionaries_uses_key_as_text() {
        let reg = LanguageRegistry::new();
        assert_eq!(reg.tr("Hello world"), "Hello world");

        let opts = TranslateOpts {
            params: Some(
                [("name".to_owned(), serde_json::json!("x"))]
                    .into_iter()
                    .collect(),
            ),
            ..TranslateOpts::default()
        };
        assert_eq!(reg.tr_with("Hi {{name}}", &opts), "Hi x");
    }

    #[test]
    fn translate_looks_up_active_language() {
        let mut reg = loaded_registry();
        reg.set_language(Some("fi".into()));
        assert_eq!(reg.tr("One"), "Yksi");
        reg.set_language(Some("en".into()));
        assert_eq!(reg.tr("One"), "One");
    }

    #[test]
    fn translate_group_lookup() {
        let mut reg = loaded_registry();
        reg.set_language(Some("fi".into()));
        let opts = TranslateOpts {
            group: Some("errors".into()),
            ..TranslateOpts::default()
        };
        assert_eq!(reg.tr_with("NotFound", &opts), "Ei löytynyt");
        // A group name never matches as a top-level key.
        assert_eq!(reg.tr("errors"), "errors");
        // The metadata entry never resolves as text.
        assert_eq!(reg.tr("__language"), "__language");
    }

    #[test]
    fn translate_falls_back_to_default_dictionary() {
        let mut reg = loaded_registry();
        reg.set_language(Some("fi".into()));

        // "Greeting" only exists in the default (en) dictionary.
        reg.use_default_language_as_fallback(false);
        assert_eq!(reg.tr("Greeting"), "Greeting");

        reg.use_default_language_as_fallback(true);
        assert_eq!(reg.tr("Greeting"), "Hi {{name}}");
    }

    #[test]
    fn translate_explicit_language_override() {
        let mut reg = loaded_registry();
        reg.set_language(Some("en".into()));
        let opts = TranslateOpts {
            language: Some(Some("fi".into())),
            ..TranslateOpts::default()
        };
        assert_eq!(reg.tr_with("One", &opts), "Yksi");

        // A language with no dictionary degrades to the key itself when
        // fallback-to-default is disabled.
        let opts = TranslateOpts {
            language: Some(Some("sv".into())),
            ..TranslateOpts::default()
        };
        assert_eq!(reg.tr_with("One", &opts), "One");
    }

    #[test]
    fn translate_localized_map_skips_dictionaries() {
        let mut reg = loaded_registry();
        reg.set_language(Some("fi".into()));
        // "One" would resolve to "Yksi" through the dictionary, but the map
        // form is used verbatim.
        let text = localized(&[("fi", "Ykkönen"), ("en", "Number one")]);
        assert_eq!(
            reg.translate(Some(&text), &TranslateOpts::default())
                .expect("localized"),
            "Ykkönen"
        );
    }

    #[test]
    fn translate_interpolates_with_sanitizer_toggle() {
        let mut reg = loaded_registry();
        reg.set_language(Some("en".into()));
        reg.set_sanitizer(|raw: &str| crate::util::percent_encode(raw));

        let params: TranslateParams = [("name".to_owned(), serde_json::json!("<b>x</b>"))]
            .into_iter()
            .collect();
        let opts = TranslateOpts {
            params: Some(params.clone()),
            ..TranslateOpts::default()
        };
        assert_eq!(reg.tr_with("Greeting", &opts), "Hi %3Cb%3Ex%3C%2Fb%3E");

        let opts = TranslateOpts {
            params: Some(params),
            sanitize_params: false,
            ..TranslateOpts::default()
        };
        assert_eq!(reg.tr_with("Greeting", &opts), "Hi <b>x</b>");
    }
}
