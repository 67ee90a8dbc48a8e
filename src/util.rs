//! Small shared helpers.

/// Percent-encode a string for safe inclusion in URLs.
///
/// Unreserved characters (RFC 3986) pass through; everything else becomes
/// `%XX` byte escapes. Useful as a sanitizer for interpolated parameters.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                out.push_str(&format!("{b:02X}"));
            }
        }
    }
    out
}
