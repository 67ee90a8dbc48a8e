//! Shared helpers for CLI commands.

use lingora::i18n::TranslateParams;

/// What: Determine the effective log level from CLI flags.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string for the tracing filter.
///
/// Details:
/// - `--verbose` wins over `--log-level`.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Parse repeated `NAME=VALUE` flags into interpolation parameters.
///
/// Inputs:
/// - `pairs`: Raw `--param` values.
///
/// Output:
/// - Parameter map with string values.
///
/// Details:
/// - Entries without `=` are skipped with a warning.
pub fn parse_params(pairs: &[String]) -> TranslateParams {
    let mut params = TranslateParams::new();
    for pair in pairs {
        if let Some((name, value)) = pair.split_once('=') {
            params.insert(
                name.trim().to_owned(),
                serde_json::Value::String(value.to_owned()),
            );
        } else {
            tracing::warn!(param = %pair, "ignoring parameter without NAME=VALUE shape");
        }
    }
    params
}
