//! Wrapping styled text to a column width.
//!
//! Each input line is split on spaces and the words are packed into
//! rows. Words wider than the budget are broken character by character
//! when hard wrapping is on (or when word wrapping is off). Escape
//! sequences are never split, and once rows are final every row break
//! closes the styles and hyperlink that are open at that point and
//! reopens them on the next row.

use ansifold_ansi::state::EscapeState;
use ansifold_ansi::tokenizer::{tokenize, Token};
use ansifold_ansi::utils::visible_width_with;
use ansifold_core::WrapOptions;

/// Wrap `text` to at most `columns` visible columns per row.
///
/// A `columns` value of zero returns the text unchanged.
///
/// # Example
///
/// ```
/// use ansifold_layout::{wrap, WrapOptions};
///
/// assert_eq!(wrap("a bb ccc", 4, &WrapOptions::default()), "a bb\nccc");
/// assert_eq!(
///     wrap("\x1b[31mab cd\x1b[39m", 2, &WrapOptions::default()),
///     "\x1b[31mab\x1b[39m\n\x1b[31mcd\x1b[39m"
/// );
/// ```
pub fn wrap(text: &str, columns: usize, options: &WrapOptions) -> String {
    if columns == 0 {
        log::debug!("zero-column wrap, returning text unchanged");
        return text.to_string();
    }

    text.replace("\r\n", "\n")
        .split('\n')
        .map(|line| wrap_line(line, columns, options))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, columns: usize, options: &WrapOptions) -> String {
    if options.trim && line.trim().is_empty() {
        return String::new();
    }

    let measure = |s: &str| visible_width_with(s, options.ambiguous_as_wide);
    let words = split_words(line);
    let mut rows = vec![String::new()];

    for (index, &word) in words.iter().enumerate() {
        if options.trim {
            trim_start_in_place(current_row(&mut rows));
        }

        let mut row_length = measure(current_row(&mut rows).as_str());

        if index != 0 {
            if row_length >= columns && (!options.word_wrap || !options.trim) {
                rows.push(String::new());
                row_length = 0;
            }

            if row_length > 0 || !options.trim {
                current_row(&mut rows).push(' ');
                row_length += 1;
            }
        }

        let length = measure(word);

        if options.hard && length > columns {
            // Start on a fresh row when that saves a break.
            let budget = columns as isize;
            let remaining = budget - row_length as isize;
            let breaks_from_here = 1 + (length as isize - remaining - 1).div_euclid(budget);
            let breaks_from_next = (length as isize - 1).div_euclid(budget);
            if breaks_from_next < breaks_from_here {
                rows.push(String::new());
            }

            break_word(&mut rows, word, columns, options);
            continue;
        }

        if row_length + length > columns && row_length > 0 && length > 0 {
            if !options.word_wrap && row_length < columns {
                break_word(&mut rows, word, columns, options);
                continue;
            }

            rows.push(String::new());
        }

        if row_length + length > columns && !options.word_wrap {
            break_word(&mut rows, word, columns, options);
            continue;
        }

        current_row(&mut rows).push_str(word);
    }

    if options.trim {
        rows = rows
            .iter()
            .map(|row| trim_visible_end(row, options))
            .collect();
    }

    rebalance(&rows)
}

/// Split at spaces outside escape sequences, so a hyperlink whose URL
/// holds a space stays in one piece.
fn split_words(line: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut word_start = 0;
    let mut offset = 0;

    for token in tokenize(line) {
        if matches!(token, Token::Text(text) if text.text == " ") {
            words.push(&line[word_start..offset]);
            word_start = offset + 1;
        }
        offset += token.raw().len();
    }
    words.push(&line[word_start..]);

    words
}

fn current_row(rows: &mut Vec<String>) -> &mut String {
    if rows.is_empty() {
        rows.push(String::new());
    }
    let last = rows.len() - 1;
    &mut rows[last]
}

fn trim_start_in_place(row: &mut String) {
    let trimmed = row.len() - row.trim_start().len();
    row.drain(..trimmed);
}

/// Split one word across rows at glyph boundaries.
///
/// Escape sequences travel with the glyph that follows them; zero-width
/// code points stay with the glyph before them.
fn break_word(rows: &mut Vec<String>, word: &str, columns: usize, options: &WrapOptions) {
    let tokens: Vec<Token<'_>> = tokenize(word)
        .ambiguous_as_wide(options.ambiguous_as_wide)
        .collect();
    let last_visible = tokens.iter().rposition(|token| token.width() > 0);

    let mut visible = visible_width_with(current_row(rows), options.ambiguous_as_wide);
    let mut pending_break = visible >= columns;

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Text(text) if text.width == 0 => current_row(rows).push_str(text.text),
            Token::Text(text) => {
                if pending_break || (visible > 0 && visible + text.width > columns) {
                    rows.push(String::new());
                    visible = 0;
                }
                current_row(rows).push_str(text.text);
                visible += text.width;
                pending_break = visible >= columns;
            }
            Token::Style(_) | Token::Link(_) => {
                if pending_break && last_visible.is_some_and(|last| last > index) {
                    rows.push(String::new());
                    visible = 0;
                    pending_break = false;
                }
                current_row(rows).push_str(token.raw());
            }
        }
    }
}

/// Drop trailing spaces that are followed only by zero-width content,
/// keeping any escape sequences among them.
fn trim_visible_end(row: &str, options: &WrapOptions) -> String {
    let words = split_words(row);
    let last = words
        .iter()
        .rposition(|word| visible_width_with(word, options.ambiguous_as_wide) > 0)
        .map_or(0, |index| index + 1);

    if last == words.len() {
        return row.to_string();
    }

    let mut trimmed = words[..last].join(" ");
    trimmed.push_str(&words[last..].concat());
    trimmed
}

/// Join rows, closing open escapes before each break and reopening them
/// after it.
fn rebalance(rows: &[String]) -> String {
    let mut state = EscapeState::new();
    let mut output = String::new();

    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            output.push_str(&state.closing_sequence());
            output.push('\n');
            output.push_str(&state.open_sequence());
        }
        for token in tokenize(row) {
            state.apply(&token);
        }
        output.push_str(row);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hard() -> WrapOptions {
        WrapOptions::default().hard(true)
    }

    #[test]
    fn test_word_wrap() {
        assert_eq!(wrap("a bb ccc", 4, &WrapOptions::default()), "a bb\nccc");
        assert_eq!(
            wrap("The quick brown fox", 10, &WrapOptions::default()),
            "The quick\nbrown fox"
        );
    }

    #[test]
    fn test_long_word_kept_whole() {
        assert_eq!(
            wrap("a abcdefgh b", 4, &WrapOptions::default()),
            "a\nabcdefgh\nb"
        );
    }

    #[test]
    fn test_hard_break_wide() {
        assert_eq!(wrap("日本語", 2, &hard()), "日\n本\n語");
        assert_eq!(wrap("日本語", 3, &hard()), "日\n本\n語");
        assert_eq!(wrap("日本語", 4, &hard()), "日本\n語");
    }

    #[test]
    fn test_hard_break_ascii() {
        assert_eq!(wrap("abcdef", 3, &hard()), "abc\ndef");
        assert_eq!(wrap("ab abcde", 3, &hard()), "ab\nabc\nde");
        assert_eq!(wrap("a abcde", 4, &hard()), "a ab\ncde");
    }

    #[test]
    fn test_glyph_wider_than_columns() {
        assert_eq!(wrap("日本", 1, &hard()), "日\n本");
    }

    #[test]
    fn test_no_word_wrap_fills_rows() {
        let options = WrapOptions::default().word_wrap(false);
        assert_eq!(wrap("ab cdef", 4, &options), "ab c\ndef");
    }

    #[test]
    fn test_no_trim_keeps_spaces() {
        let options = WrapOptions::default().trim(false);
        assert_eq!(wrap("  ab", 10, &options), "  ab");
        assert_eq!(wrap("ab ", 10, &options), "ab ");
        assert_eq!(wrap("ab ", 10, &WrapOptions::default()), "ab");
    }

    #[test]
    fn test_blank_line_trimmed() {
        assert_eq!(wrap("   ", 5, &WrapOptions::default()), "");
        assert_eq!(wrap("a\n   \nb", 5, &WrapOptions::default()), "a\n\nb");
    }

    #[test]
    fn test_newlines_preserved() {
        assert_eq!(
            wrap("one two\r\nthree", 3, &WrapOptions::default()),
            "one\ntwo\nthree"
        );
    }

    #[test]
    fn test_zero_columns() {
        assert_eq!(wrap("abc def", 0, &WrapOptions::default()), "abc def");
    }

    #[test]
    fn test_styles_rebalanced() {
        assert_eq!(
            wrap("\x1b[31mab cd\x1b[39m", 2, &WrapOptions::default()),
            "\x1b[31mab\x1b[39m\n\x1b[31mcd\x1b[39m"
        );
        assert_eq!(
            wrap("\x1b[1m\x1b[32mab cd\x1b[0m", 2, &WrapOptions::default()),
            "\x1b[1m\x1b[32mab\x1b[39m\x1b[22m\n\x1b[1m\x1b[32mcd\x1b[0m"
        );
    }

    #[test]
    fn test_hard_break_styled_word() {
        assert_eq!(
            wrap("\x1b[31mabcd\x1b[39m", 2, &hard()),
            "\x1b[31mab\x1b[39m\n\x1b[31mcd\x1b[39m"
        );
    }

    #[test]
    fn test_escape_travels_with_next_glyph() {
        assert_eq!(
            wrap("ab\x1b[31mcd\x1b[39m", 2, &hard()),
            "ab\n\x1b[31mcd\x1b[39m"
        );
    }

    #[test]
    fn test_hyperlink_rebalanced() {
        let input = "\x1b]8;;https://x.y\x07ab cd\x1b]8;;\x07";
        assert_eq!(
            wrap(input, 2, &WrapOptions::default()),
            "\x1b]8;;https://x.y\x07ab\x1b]8;;\x07\n\x1b]8;;https://x.y\x07cd\x1b]8;;\x07"
        );
    }

    #[test]
    fn test_hyperlink_url_with_space_not_split() {
        let input = "\x1b]8;;http://a b\x07link\x1b]8;;\x07 zz";
        assert_eq!(
            wrap(input, 4, &WrapOptions::default()),
            "\x1b]8;;http://a b\x07link\x1b]8;;\x07\nzz"
        );

        let open = "\x1b]8;;http://a b\x07ab cd\x1b]8;;\x07";
        assert_eq!(
            wrap(open, 2, &WrapOptions::default()),
            "\x1b]8;;http://a b\x07ab\x1b]8;;\x07\n\x1b]8;;http://a b\x07cd\x1b]8;;\x07"
        );
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("a  b"), vec!["a", "", "b"]);
        assert_eq!(split_words(""), vec![""]);
        assert_eq!(
            split_words("\x1b]8;;x y\x07a b"),
            vec!["\x1b]8;;x y\x07a", "b"]
        );
    }

    #[test]
    fn test_trailing_escape_kept_on_row() {
        assert_eq!(
            wrap("\x1b[31mab \x1b[39m", 5, &WrapOptions::default()),
            "\x1b[31mab\x1b[39m"
        );
    }

    #[test]
    fn test_combining_mark_stays_with_base() {
        assert_eq!(wrap("abe\u{301}", 3, &hard()), "abe\u{301}");
        assert_eq!(wrap("ab\u{301}c", 2, &hard()), "ab\u{301}\nc");
    }
}
