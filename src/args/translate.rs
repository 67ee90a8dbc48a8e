//! Translation and language-list CLI commands.

use lingora::i18n::{LanguageRegistry, TranslateOpts};

use crate::args::Args;
use crate::args::utils::parse_params;

/// What: Translate a key and print the result.
///
/// Inputs:
/// - `registry`: Configured registry.
/// - `key`: Translation key.
/// - `args`: CLI flags supplying group, parameters and the sanitize toggle.
pub fn handle_translate(registry: &LanguageRegistry, key: &str, args: &Args) {
    let params = parse_params(&args.params);
    let opts = TranslateOpts {
        group: args.group.clone(),
        params: (!params.is_empty()).then_some(params),
        sanitize_params: !args.raw,
        ..TranslateOpts::default()
    };
    println!("{}", registry.tr_with(key, &opts));
}

/// What: Print the loaded languages, one per line.
///
/// Inputs:
/// - `registry`: Configured registry.
///
/// Details:
/// - Shows code, short name and full name where available; marks the
///   active and default languages.
pub fn handle_list_languages(registry: &LanguageRegistry) {
    for item in registry.languages() {
        let mut line = item.code.clone();
        if let Some(short) = &item.short_name {
            line.push_str(&format!("  {short}"));
        }
        if let Some(name) = &item.name {
            line.push_str(&format!("  {name}"));
        }
        if registry.language() == Some(item.code.as_str()) {
            line.push_str("  (active)");
        }
        if registry.default_language() == Some(item.code.as_str()) {
            line.push_str("  (default)");
        }
        println!("{line}");
    }
    for code in registry.language_data_keys() {
        if !registry.languages().iter().any(|l| l.code == code) {
            println!("{code}  (no metadata)");
        }
    }
}
