/// Whitespace as understood by `String.prototype.trim`: the Unicode
/// `White_Space` set plus the byte order mark.
pub fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

pub fn trim(s: &str) -> &str {
    s.trim_matches(is_js_whitespace)
}
