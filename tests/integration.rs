//! Integration tests for ansifold.
//!
//! These tests drive the public API end to end: styled text goes in,
//! and the output is checked byte for byte, escapes included.

use ansifold_ansi::registry::registry;
use ansifold_ansi::sanitize::sanitize_preserving_ansi;
use ansifold_ansi::{tokenize, width, ActiveStyles, EscapeState, Token};
use ansifold_config::Config;
use ansifold_layout::{slice, strip_styles, wrap, WrapOptions};

// =============================================================================
// Slicing
// =============================================================================

#[test]
fn test_slice_styled_prefix() {
    assert_eq!(
        slice("\x1b[31mHello\x1b[39m World", 0..5),
        "\x1b[31mHello\x1b[39m"
    );
}

#[test]
fn test_slice_plain_suffix() {
    assert_eq!(slice("Hello World", 6..11), "World");
}

#[test]
fn test_slice_registry_styles() {
    let styles = registry();
    let bold = styles.get("bold").unwrap();
    let blue = styles.get("blue").unwrap();
    let text = format!(
        "{}{}status: ok{}{}",
        bold.open_sequence(),
        blue.open_sequence(),
        blue.close_sequence(),
        bold.close_sequence()
    );

    let sliced = slice(&text, 8..);
    assert_eq!(strip_styles(&sliced), "ok");
    assert_eq!(sliced, "\x1b[1m\x1b[34mok\x1b[39m\x1b[22m");
}

#[test]
fn test_slice_lines_of_table() {
    let rows = ["\x1b[32m+\x1b[39m added", "\x1b[31m-\x1b[39m removed"];
    let body: Vec<String> = rows.iter().map(|row| slice(row, 2..)).collect();
    assert_eq!(body, vec!["added", "removed"]);
}

// =============================================================================
// Wrapping
// =============================================================================

#[test]
fn test_wrap_words() {
    assert_eq!(wrap("a bb ccc", 4, &WrapOptions::default()), "a bb\nccc");
}

#[test]
fn test_wrap_wide_hard() {
    let options = WrapOptions::default().hard(true);
    assert_eq!(wrap("日本語", 2, &options), "日\n本\n語");
}

#[test]
fn test_wrap_then_slice_rows() {
    let text = "\x1b[4mone two three\x1b[24m";
    let wrapped = wrap(text, 7, &WrapOptions::default());
    assert_eq!(
        wrapped,
        "\x1b[4mone two\x1b[24m\n\x1b[4mthree\x1b[24m"
    );

    let firsts: Vec<String> = wrapped.split('\n').map(|row| slice(row, 0..1)).collect();
    assert_eq!(firsts, vec!["\x1b[4mo\x1b[24m", "\x1b[4mt\x1b[24m"]);
}

#[test]
fn test_wrap_with_configured_options() {
    let config: Config = toml::from_str("[wrap]\nHard = true\nColumns = 3").unwrap();
    let wrapped = wrap("abcdef", config.wrap.columns, &config.wrap_options());
    assert_eq!(wrapped, "abc\ndef");
}

#[test]
fn test_wrap_sanitized_input() {
    let input = sanitize_preserving_ansi("\x1b[2J\x1b[31mred words\x1b[39m");
    assert_eq!(
        wrap(&input, 4, &WrapOptions::default()),
        "\x1b[31mred\x1b[39m\n\x1b[31mwords\x1b[39m"
    );
}

// =============================================================================
// Width and state
// =============================================================================

#[test]
fn test_width_hiragana() {
    assert_eq!(width(0x3042, false).unwrap(), 2);
}

#[test]
fn test_width_rejects_surrogate() {
    assert!(width(0xD800, false).is_err());
}

#[test]
fn test_reduce_keeps_modifier() {
    let styles = tokenize("\x1b[31m\x1b[1m\x1b[39m").filter_map(|token| match token {
        Token::Style(style) => Some(style),
        _ => None,
    });
    let active = ActiveStyles::reduce(styles);

    let codes: Vec<_> = active.entries().iter().filter_map(|style| style.code()).collect();
    assert_eq!(codes, vec![1]);
}

#[test]
fn test_escape_state_roundtrip() {
    let text = "\x1b[1m\x1b]8;;https://example.com\x07\x1b[38;5;33mlink";
    let mut state = EscapeState::new();
    for token in tokenize(text) {
        state.apply(&token);
    }

    let closed = format!("{}{}", text, state.closing_sequence());
    let mut after = EscapeState::new();
    for token in tokenize(&closed) {
        after.apply(&token);
    }
    assert!(after.is_empty());
    assert_eq!(strip_styles(&closed), "link");
}
