//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use lingora::config;
use lingora::i18n::{
    I18nError, LanguageChoice, LanguageRegistry, detect_system_language, load_locales_dir,
    primary_subtag,
};

/// Lingora - translate dictionary keys from the command line
#[derive(Parser, Debug)]
#[command(name = "lingora")]
#[command(version)]
#[command(about = "Translate dictionary keys against JSON language dictionaries", long_about = None)]
pub struct Args {
    /// Directory containing CODE.json dictionary files
    #[arg(long)]
    pub locales: Option<PathBuf>,

    /// Language to translate into (default: settings, then system locale)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Translation key to resolve
    #[arg(short, long)]
    pub key: Option<String>,

    /// Look the key up inside this nested dictionary group
    #[arg(short, long)]
    pub group: Option<String>,

    /// Interpolation parameter, repeatable (e.g. -p name=World)
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// Percent-encode interpolated parameter values
    #[arg(long)]
    pub sanitize: bool,

    /// Substitute parameter values literally, bypassing any sanitizer
    #[arg(long)]
    pub raw: bool,

    /// List the loaded languages and exit
    #[arg(long)]
    pub list_languages: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Process command-line arguments against a freshly built registry.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `Ok(())` on success.
///
/// # Errors
/// - Propagates loader errors when an explicitly requested locales
///   directory cannot be loaded.
///
/// Details:
/// - Without an explicit `--locales`, a missing locales directory degrades
///   to an empty registry, where keys double as display text.
pub fn process_args(args: &Args) -> Result<(), I18nError> {
    let registry = build_registry(args)?;

    if args.list_languages {
        crate::args::translate::handle_list_languages(&registry);
        return Ok(());
    }

    if let Some(key) = &args.key {
        crate::args::translate::handle_translate(&registry, key, args);
        return Ok(());
    }

    tracing::warn!("nothing to do; pass --key or --list-languages");
    Ok(())
}

/// What: Build a registry from settings, CLI flags and loaded dictionaries.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - A configured [`LanguageRegistry`].
///
/// # Errors
/// - Loader errors when `--locales` was given explicitly.
///
/// Details:
/// - Language priority: `--language`, then settings, then system locale
///   (full tag first, then its primary subtag when only that is loaded).
fn build_registry(args: &Args) -> Result<LanguageRegistry, I18nError> {
    let settings = config::settings();
    let locales_dir = args
        .locales
        .clone()
        .or_else(|| settings.locales_dir.clone())
        .unwrap_or_else(config::default_locales_dir);

    let mut registry = LanguageRegistry::new();
    match load_locales_dir(&locales_dir) {
        Ok(data) => registry.set_language_data(data),
        Err(err) if args.locales.is_some() => return Err(err),
        Err(err) => {
            tracing::warn!(error = %err, "no dictionaries loaded; keys will be used as text");
        }
    }

    if settings.default_language.is_empty() {
        registry.use_default_language_as_fallback(settings.use_default_language_as_fallback);
    } else {
        registry.set_default_language(
            LanguageChoice::Code(settings.default_language.clone()),
            Some(settings.use_default_language_as_fallback),
        );
    }

    let language = args
        .language
        .clone()
        .or_else(|| (!settings.language.is_empty()).then(|| settings.language.clone()))
        .or_else(|| detected_language(&registry));
    if let Some(code) = language {
        tracing::debug!(language = %code, "selected language");
        registry.set_language(Some(code));
    }

    if args.sanitize {
        registry.set_sanitizer(|raw: &str| lingora::util::percent_encode(raw));
    }

    Ok(registry)
}

/// System language, narrowed to a loaded dictionary code when possible.
fn detected_language(registry: &LanguageRegistry) -> Option<String> {
    let detected = detect_system_language()?;
    if registry.dictionary(&detected).is_some() {
        return Some(detected);
    }
    let primary = primary_subtag(&detected);
    if registry.dictionary(primary).is_some() {
        return Some(primary.to_owned());
    }
    Some(detected)
}
