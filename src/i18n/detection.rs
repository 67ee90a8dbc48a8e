//! System language detection for the command-line surface.

use std::env;

/// What: Detect the system language from environment variables.
///
/// Output:
/// - `Option<String>` with a normalized code (e.g. "fi-FI"), or `None`
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES` and `LANG` in priority order
/// - Parses values like "fi_FI.UTF-8" into "fi-FI"
#[must_use]
pub fn detect_system_language() -> Option<String> {
    let language_vars = ["LC_ALL", "LC_MESSAGES", "LANG"];

    for var_name in &language_vars {
        if let Ok(value) = env::var(var_name)
            && let Some(parsed) = parse_language_string(&value)
        {
            return Some(parsed);
        }
    }

    None
}

/// Primary language subtag of a code ("fi-FI" -> "fi").
#[must_use]
pub fn primary_subtag(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}

/// What: Normalize an environment locale string into a language code.
///
/// Inputs:
/// - `value`: Raw value like "fi_FI.UTF-8", "fi-FI" or "en"
///
/// Output:
/// - `Option<String>` with "language-REGION" casing, or `None` when empty
///
/// Details:
/// - Strips the encoding suffix, converts underscores to hyphens and
///   normalizes language/region casing
fn parse_language_string(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let without_encoding = trimmed.split('.').next()?;
    let normalized = without_encoding.replace('_', "-");
    let parts: Vec<&str> = normalized.split('-').collect();

    match parts.as_slice() {
        [language] => Some(language.to_lowercase()),
        [language, region] => Some(format!(
            "{}-{}",
            language.to_lowercase(),
            region.to_uppercase()
        )),
        [language, script, region] => Some(format!(
            "{}-{}-{}",
            language.to_lowercase(),
            script,
            region.to_uppercase()
        )),
        _ => None,
    }
}
