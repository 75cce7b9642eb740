//! Terminal output sanitization utilities.
//!
//! Input that is about to be sliced or wrapped may carry escape
//! sequences other than styles: cursor movement, screen clearing,
//! window titles. The layout engine treats those as text, so they are
//! best removed up front.

use regex::Regex;
use std::sync::LazyLock;

/// Any CSI sequence or OSC sequence.
static ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)").unwrap()
});

/// An SGR sequence.
static SGR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\x1b\[[0-9;]*m$").unwrap());

/// An OSC 8 hyperlink; group 1 is the URL.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\x1b\]8;[^;]*;([^\x07\x1b]*)(?:\x07|\x1b\\)$").unwrap()
});

/// Sanitize a string for safe terminal output.
///
/// Removes control characters except newline and tab.
///
/// # Example
/// ```
/// use ansifold_ansi::sanitize::sanitize_for_terminal;
///
/// let safe = sanitize_for_terminal("Hello\x1b[31mWorld");
/// assert_eq!(safe, "Hello[31mWorld"); // ESC removed
/// ```
pub fn sanitize_for_terminal(s: &str) -> String {
    s.chars().filter(|&c| !is_unsafe_control(c)).collect()
}

/// Sanitize a string while preserving SGR styles and hyperlinks.
///
/// SGR sequences are kept, OSC 8 hyperlinks are kept when their URL is
/// safe (see [`is_safe_url`]), and every other escape sequence and
/// control character is removed.
///
/// # Example
/// ```
/// use ansifold_ansi::sanitize::sanitize_preserving_ansi;
///
/// // SGR (color) sequences are preserved
/// let s = sanitize_preserving_ansi("\x1b[31mRed\x1b[0m");
/// assert_eq!(s, "\x1b[31mRed\x1b[0m");
///
/// // Other escape sequences are stripped
/// let s = sanitize_preserving_ansi("\x1b]0;title\x07\x1b[2JHi");
/// assert_eq!(s, "Hi");
/// ```
pub fn sanitize_preserving_ansi(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last = 0;

    for m in ESCAPE_RE.find_iter(s) {
        result.extend(s[last..m.start()].chars().filter(|&c| !is_unsafe_control(c)));
        let sequence = m.as_str();
        if keep_sequence(sequence) {
            result.push_str(sequence);
        } else {
            log::debug!("dropping escape sequence {:?}", sequence);
        }
        last = m.end();
    }
    result.extend(s[last..].chars().filter(|&c| !is_unsafe_control(c)));

    result
}

fn keep_sequence(sequence: &str) -> bool {
    if SGR_RE.is_match(sequence) {
        return true;
    }
    LINK_RE
        .captures(sequence)
        .and_then(|caps| caps.get(1))
        .is_some_and(|url| url.as_str().is_empty() || is_safe_url(url.as_str()))
}

fn is_unsafe_control(c: char) -> bool {
    c.is_control() && c != '\n' && c != '\t'
}

/// Check if a URL is safe for OSC 8 hyperlinks.
///
/// A safe URL:
/// - Starts with a known safe scheme (http, https, mailto, file)
/// - Does not contain control characters or escape sequences
///
/// # Example
/// ```
/// use ansifold_ansi::sanitize::is_safe_url;
///
/// assert!(is_safe_url("https://example.com"));
/// assert!(is_safe_url("mailto:user@example.com"));
/// assert!(!is_safe_url("javascript:alert(1)"));
/// assert!(!is_safe_url("https://evil.com\x1b]0;pwned\x07"));
/// ```
pub fn is_safe_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    let safe_scheme = lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("mailto:")
        || lower.starts_with("file://");

    safe_scheme && !url.chars().any(char::is_control)
}
