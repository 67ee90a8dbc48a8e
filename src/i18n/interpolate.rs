//! Parameter interpolation and the sanitizer capability.

use std::collections::HashMap;

use serde_json::Value;

/// Escaping hook applied to interpolated parameter values before they are
/// substituted into translated text.
///
/// The registry holds at most one sanitizer; when none is configured,
/// interpolation substitutes values literally. Any `Fn(&str) -> String`
/// closure implements the trait.
pub trait Sanitizer {
    /// Return the escaped form of `raw`.
    fn sanitize(&self, raw: &str) -> String;
}

impl<F> Sanitizer for F
where
    F: Fn(&str) -> String,
{
    fn sanitize(&self, raw: &str) -> String {
        self(raw)
    }
}

/// Named interpolation parameters: placeholder name -> JSON value.
///
/// JSON values keep the loose call-site contract: `null` substitutes as the
/// empty string, strings substitute verbatim, numbers and booleans render
/// with their canonical text form.
pub type TranslateParams = HashMap<String, Value>;

/// What: Substitute `{{name}}` placeholders in `text` with parameter values.
///
/// Inputs:
/// - `text`: Raw translated text possibly containing `{{name}}` placeholders
/// - `params`: Parameter map, or `None` for no interpolation
/// - `sanitizer`: Escaping hook applied to each value, or `None` for literal
///   substitution
///
/// Output:
/// - Text with every occurrence of each known placeholder replaced
///
/// Details:
/// - Replaces all occurrences of a placeholder, not just the first
/// - Each value is sanitized once, independently of other parameters
/// - Placeholders without a matching parameter are left untouched
pub fn interpolate_params(
    text: &str,
    params: Option<&TranslateParams>,
    sanitizer: Option<&dyn Sanitizer>,
) -> String {
    let Some(params) = params else {
        return text.to_owned();
    };

    let mut out = text.to_owned();
    for (key, value) in params {
        let placeholder = format!("{{{{{key}}}}}");
        if !out.contains(&placeholder) {
            continue;
        }
        let rendered = render_value(value);
        let substituted = sanitizer.map_or(rendered.clone(), |s| s.sanitize(&rendered));
        out = out.replace(&placeholder, &substituted);
    }
    out
}

/// Render a parameter value as display text (`null` becomes empty).
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
