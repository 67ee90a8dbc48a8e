//! User configuration: paths under `~/.config/lingora` and the
//! `settings.conf` key/value file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// User-tunable settings for the command-line surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Active language; empty means "auto-detect from the environment".
    pub language: String,
    /// Default (fallback) language; empty means "first loaded dictionary".
    pub default_language: String,
    /// Whether missing translations fall back to the default language.
    pub use_default_language_as_fallback: bool,
    /// Directory holding dictionary files; `None` uses `config/locales`.
    pub locales_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: String::new(),
            default_language: String::new(),
            use_default_language_as_fallback: true,
            locales_dir: None,
        }
    }
}

/// Configuration directory: `$HOME/.config/lingora`, falling back to
/// `$XDG_CONFIG_HOME/lingora` (ensured to exist).
#[must_use]
pub fn config_dir() -> PathBuf {
    let base = env::var("HOME")
        .ok()
        .map(|h| Path::new(&h).join(".config"))
        .or_else(|| env::var("XDG_CONFIG_HOME").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(".config"));
    let dir = base.join("lingora");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Logs directory under the config dir (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Default locales directory under the config dir.
#[must_use]
pub fn default_locales_dir() -> PathBuf {
    config_dir().join("locales")
}

/// What: Load settings from `settings.conf` under the config dir.
///
/// Output:
/// - A `Settings` value; defaults when the file is missing or unreadable
#[must_use]
pub fn settings() -> Settings {
    let path = config_dir().join("settings.conf");
    let mut out = Settings::default();
    match fs::read_to_string(&path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "[Config] Loaded settings.conf");
            parse_settings(&content, &mut out);
        }
        Err(_) => {
            debug!(path = %path.display(), "[Config] settings.conf missing, using defaults");
        }
    }
    out
}

/// What: Parse `key = value` settings lines into `out`.
///
/// Inputs:
/// - `content`: File content; `#` starts a comment line
/// - `out`: Settings updated in place
///
/// Details:
/// - Unknown keys log a warning and are skipped
pub fn parse_settings(content: &str, out: &mut Settings) {
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            warn!(line, "[Config] Ignoring malformed settings line");
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        match key {
            "language" | "locale" => out.language = value.to_owned(),
            "default_language" => out.default_language = value.to_owned(),
            "use_default_language_as_fallback" | "fallback" => {
                match value.to_ascii_lowercase().as_str() {
                    "true" | "1" | "yes" | "on" => out.use_default_language_as_fallback = true,
                    "false" | "0" | "no" | "off" => out.use_default_language_as_fallback = false,
                    other => {
                        warn!(key, value = other, "[Config] Invalid boolean, keeping default");
                    }
                }
            }
            "locales_dir" => {
                if value.is_empty() {
                    out.locales_dir = None;
                } else {
                    out.locales_dir = Some(PathBuf::from(value));
                }
            }
            other => {
                warn!(key = other, "[Config] Unknown settings key, skipping");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_settings_reads_known_keys() {
        let mut out = Settings::default();
        parse_settings(
            "# comment\n\
             language = fi\n\
             default_language = en\n\
             use_default_language_as_fallback = false\n\
             locales_dir = /tmp/locales\n",
            &mut out,
        );
        assert_eq!(out.language, "fi");
        assert_eq!(out.default_language, "en");
        assert!(!out.use_default_language_as_fallback);
        assert_eq!(out.locales_dir, Some(PathBuf::from("/tmp/locales")));
    }

    #[test]
    fn parse_settings_skips_unknown_and_malformed_lines() {
        let mut out = Settings::default();
        parse_settings(
            "no_such_key = 1\nnot a key value line\nlocale=sv\nfallback = maybe\n",
            &mut out,
        );
        assert_eq!(out.language, "sv");
        // Invalid boolean keeps the default.
        assert!(out.use_default_language_as_fallback);
    }

    #[test]
    fn parse_settings_empty_locales_dir_resets() {
        let mut out = Settings {
            locales_dir: Some(PathBuf::from("/x")),
            ..Settings::default()
        };
        parse_settings("locales_dir =\n", &mut out);
        assert_eq!(out.locales_dir, None);
    }
}
