//! Measuring and stripping styled text.
//!
//! These are thin folds over the [`tokenizer`](crate::tokenizer), so
//! they agree exactly with how the slicer and wrapper see the text.

use crate::tokenizer::{tokenize, Token};

/// Remove all style and hyperlink sequences from text.
///
/// Returns only the visible text content.
///
/// # Example
///
/// ```
/// use ansifold_ansi::utils::strip_styles;
/// let text = "\x1b[1mBold\x1b[0m text";
/// assert_eq!(strip_styles(text), "Bold text");
/// ```
pub fn strip_styles(text: &str) -> String {
    tokenize(text)
        .filter_map(|token| match token {
            Token::Text(text) => Some(text.text),
            Token::Style(_) | Token::Link(_) => None,
        })
        .collect()
}

/// Calculate the visible display width of text.
///
/// Escape sequences take no columns, CJK and other wide characters
/// take two.
///
/// # Example
///
/// ```
/// use ansifold_ansi::utils::visible_width;
/// assert_eq!(visible_width("\x1b[1mHello\x1b[0m"), 5);
/// assert_eq!(visible_width("你好"), 4);
/// ```
pub fn visible_width(text: &str) -> usize {
    visible_width_with(text, false)
}

/// [`visible_width`] with a choice of how ambiguous-width glyphs count.
pub fn visible_width_with(text: &str, ambiguous_as_wide: bool) -> usize {
    tokenize(text)
        .ambiguous_as_wide(ambiguous_as_wide)
        .map(|token| token.width())
        .sum()
}

/// Check if a string starts with a style or hyperlink sequence.
///
/// # Example
///
/// ```
/// use ansifold_ansi::utils::is_escape;
/// assert!(is_escape("\x1b[1m"));
/// assert!(!is_escape("hello"));
/// ```
pub fn is_escape(s: &str) -> bool {
    matches!(
        tokenize(s).next(),
        Some(Token::Style(_)) | Some(Token::Link(_))
    )
}
