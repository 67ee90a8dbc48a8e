//! Dictionary file loading and parsing.

use std::fs;
use std::path::Path;

use crate::i18n::I18nError;
use crate::i18n::types::{Dictionary, LanguageData};

/// What: Load one language's dictionary JSON file.
///
/// Inputs:
/// - `code`: Language code (e.g. "fi" or "fi-FI")
/// - `locales_dir`: Directory containing `<code>.json` files
///
/// Output:
/// - The parsed [`Dictionary`]
///
/// # Errors
/// - [`I18nError::InvalidLanguageCode`] when the code is empty or malformed
/// - [`I18nError::DictionaryNotFound`] when `<code>.json` does not exist
/// - [`I18nError::DictionaryRead`] on I/O failure
/// - [`I18nError::EmptyDictionary`] when the file has no content
/// - [`I18nError::DictionaryParse`] when the JSON is invalid
///
/// Details:
/// - A file maps translation keys to text or to a group object; the
///   reserved `__language` object carries display metadata
pub fn load_dictionary_file(code: &str, locales_dir: &Path) -> Result<Dictionary, I18nError> {
    if !is_valid_language_code(code) {
        return Err(I18nError::InvalidLanguageCode(code.to_owned()));
    }

    let file_path = locales_dir.join(format!("{code}.json"));
    if !file_path.exists() {
        return Err(I18nError::DictionaryNotFound { path: file_path });
    }

    let contents = fs::read_to_string(&file_path).map_err(|source| I18nError::DictionaryRead {
        path: file_path.clone(),
        source,
    })?;
    if contents.trim().is_empty() {
        return Err(I18nError::EmptyDictionary { path: file_path });
    }

    serde_json::from_str(&contents).map_err(|source| I18nError::DictionaryParse {
        path: file_path,
        source,
    })
}

/// What: Load every dictionary file from a directory.
///
/// Inputs:
/// - `locales_dir`: Directory scanned for `*.json` files
///
/// Output:
/// - A [`LanguageData`] payload keyed by file stem
///
/// # Errors
/// - [`I18nError::MissingLocalesDir`] when the directory cannot be read
/// - Any per-file error from [`load_dictionary_file`]
///
/// Details:
/// - Files with non-JSON extensions or invalid code stems are skipped with
///   a warning rather than failing the whole load
pub fn load_locales_dir(locales_dir: &Path) -> Result<LanguageData, I18nError> {
    let entries = fs::read_dir(locales_dir).map_err(|_| I18nError::MissingLocalesDir {
        path: locales_dir.to_path_buf(),
    })?;

    let mut codes: Vec<String> = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) if is_valid_language_code(stem) => codes.push(stem.to_owned()),
            Some(stem) => {
                tracing::warn!(file = %path.display(), code = %stem, "skipping dictionary with invalid code");
            }
            None => {}
        }
    }
    codes.sort();

    let mut data = LanguageData::new();
    for code in codes {
        let dictionary = load_dictionary_file(&code, locales_dir)?;
        tracing::debug!(language = %code, keys = dictionary.len(), "loaded dictionary");
        data.insert(code, dictionary);
    }
    Ok(data)
}

/// What: Validate language code format.
///
/// Inputs:
/// - `code`: Language code to validate
///
/// Output:
/// - `true` if the format looks valid, `false` otherwise
///
/// Details:
/// - Allows simple codes ("en") and region/script forms ("en-US",
///   "zh-Hans-CN"); rejects empty codes, leading/trailing/double hyphens
///   and anything over 20 characters
#[must_use]
pub fn is_valid_language_code(code: &str) -> bool {
    if code.is_empty() || code.len() > 20 {
        return false;
    }

    code.chars().all(|c| c.is_alphanumeric() || c == '-')
        && !code.starts_with('-')
        && !code.ends_with('-')
        && !code.contains("--")
}
