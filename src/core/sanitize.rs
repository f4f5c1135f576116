// src/core/sanitize.rs

/// Marker that opens an AIM symbology identifier (`]Q1`, `]C0`, `]E0` …).
/// Some scanners prepend one to every decoded code.
pub const SYMBOLOGY_MARKER: char = ']';

/// Clean raw typed or scanned text into a lookup key. Case is preserved.
///
/// Strips C0 controls and DEL, trims, then removes leading symbology
/// identifiers until none are left (trimming again after each one), so
/// `normalize(normalize(s)) == normalize(s)` for every input.
pub fn normalize(raw: &str) -> String {
    let mut out = strip_controls(raw).trim().to_string();
    while let Some(rest) = strip_symbology_prefix(&out) {
        out = rest.trim().to_string();
    }
    out
}

/// `Some(rest)` when `s` starts with `]` followed by exactly two ASCII alphanumerics.
pub fn strip_symbology_prefix(s: &str) -> Option<&str> {
    let rest = s.strip_prefix(SYMBOLOGY_MARKER)?;
    let mut chars = rest.chars();
    let a = chars.next()?;
    let b = chars.next()?;
    if a.is_ascii_alphanumeric() && b.is_ascii_alphanumeric() {
        Some(chars.as_str())
    } else {
        None
    }
}

/// Drop U+0000..=U+001F and U+007F.
pub fn strip_controls(s: &str) -> String {
    s.chars().filter(|c| !is_c0_or_del(*c)).collect()
}

#[inline]
fn is_c0_or_del(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{001F}' | '\u{007F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_symbology_identifier() {
        assert_eq!(normalize("]QBABC123"), "ABC123");
        assert_eq!(normalize("]C0abc123"), "abc123");
        assert_eq!(normalize("]q1X"), "X");
    }

    #[test]
    fn marker_needs_two_alphanumerics() {
        assert_eq!(normalize("]Q"), "]Q");
        assert_eq!(normalize("]Q-ABC"), "]Q-ABC");
        assert_eq!(normalize("ABC]Q1"), "ABC]Q1");
    }

    #[test]
    fn controls_and_whitespace() {
        assert_eq!(normalize("\u{0002}ABC123\r\n"), "ABC123");
        assert_eq!(normalize("  A\u{007F}B\tC  "), "ABC");
        assert_eq!(normalize("\u{001D}]Q1 ABC "), "ABC");
    }

    #[test]
    fn idempotent_on_awkward_inputs() {
        for s in ["]Q1]Q2X", " ]Q1X", "\u{0000}]Q1X", "]Q1 ]E0 Y", "", "   ", "]", "]]]"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {s:?}");
        }
    }
}
