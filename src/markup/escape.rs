//! HTML escaping for text that is shown, not interpreted.

/// HTML-escape a string.
///
/// `&` is replaced first so the entities produced by the later replacements
/// are never escaped a second time.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
