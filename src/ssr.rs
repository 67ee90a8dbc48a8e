//! Server-side-rendering helper: synthesizes HTML head metadata from a
//! route's translated title and description.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::i18n::{I18nError, LanguageRegistry, TransText, TranslateOpts};

/// Translatable metadata attached to a route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteMeta {
    /// Page title.
    pub title: Option<TransText>,
    /// Page description.
    pub description: Option<TransText>,
}

/// One route of the client-side-rendered application, as consumed by the
/// SSR helper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// URL path pattern.
    pub path: String,
    /// Identifier of the component rendered for this route.
    pub component_id: String,
    /// Optional layout wrapper component identifier.
    #[serde(default)]
    pub layout_wrapper_id: Option<String>,
    /// Translatable head metadata.
    #[serde(default)]
    pub meta: Option<RouteMeta>,
    /// Whether the route is currently active.
    #[serde(default)]
    pub is_active: bool,
    /// Extracted path parameters.
    #[serde(default)]
    pub params: Option<HashMap<String, String>>,
}

/// What: Render `<head>` metadata for a route when running server-side.
///
/// Inputs:
/// - `registry`: Registry used to translate the route's metadata
/// - `route`: Route whose `meta` supplies title and description
/// - `is_server`: Whether this execution happens server-side
///
/// Output:
/// - HTML fragment with `<title>` and description `<meta>` tags, or an
///   empty string client-side or when the route carries no metadata
///
/// # Errors
/// - Propagates [`I18nError::LanguageNotConfigured`] from translating a
///   language-map title with no language configured
///
/// Details:
/// - Translated output is HTML-escaped before insertion
pub fn render_head_meta(
    registry: &LanguageRegistry,
    route: &Route,
    is_server: bool,
) -> Result<String, I18nError> {
    if !is_server {
        return Ok(String::new());
    }
    let Some(meta) = &route.meta else {
        return Ok(String::new());
    };

    let opts = TranslateOpts::default();
    let mut out = String::new();
    if let Some(title) = &meta.title {
        let text = registry.translate(Some(title), &opts)?;
        out.push_str("<title>");
        out.push_str(&escape_html(&text));
        out.push_str("</title>");
    }
    if let Some(description) = &meta.description {
        let text = registry.translate(Some(description), &opts)?;
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("<meta name=\"description\" content=\"");
        out.push_str(&escape_html(&text));
        out.push_str("\">");
    }
    Ok(out)
}

/// Escape the HTML-significant characters of `input`.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
