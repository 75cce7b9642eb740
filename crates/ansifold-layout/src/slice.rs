//! Cutting styled text at visible column offsets.

use ansifold_ansi::state::EscapeState;
use ansifold_ansi::tokenizer::{tokenize, Token};
use ansifold_core::SliceOptions;
use std::ops::{Bound, RangeBounds};

/// Extract the text visible between two column offsets.
///
/// Styles that are active at the start of the range are reopened before
/// the first character, and everything still open at the end of the
/// range is closed, so the result renders correctly on its own. A wide
/// glyph that would straddle the end of the range is left out, and a
/// combining mark is kept or dropped together with its base glyph.
///
/// An empty or inverted range yields an empty string.
///
/// # Example
///
/// ```
/// use ansifold_layout::slice;
///
/// assert_eq!(slice("Hello World", 6..11), "World");
/// assert_eq!(
///     slice("\x1b[31mHello\x1b[39m World", 0..5),
///     "\x1b[31mHello\x1b[39m"
/// );
/// assert_eq!(slice("\x1b[1mbold\x1b[22m", 2..), "\x1b[1mld\x1b[22m");
/// ```
pub fn slice<R: RangeBounds<usize>>(text: &str, range: R) -> String {
    slice_with_options(text, range, &SliceOptions::default())
}

/// [`slice`] with explicit measuring options.
pub fn slice_with_options<R: RangeBounds<usize>>(
    text: &str,
    range: R,
    options: &SliceOptions,
) -> String {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => Some(end.saturating_add(1)),
        Bound::Excluded(&end) => Some(end),
        Bound::Unbounded => None,
    };

    if end.is_some_and(|end| start >= end) {
        log::debug!("empty slice range {}..{:?}", start, end);
        return String::new();
    }

    let tokens = tokenize(text).ambiguous_as_wide(options.ambiguous_as_wide);

    let mut state = EscapeState::new();
    let mut output = String::new();
    let mut position = 0;
    let mut include = false;
    // Escapes read after the end column; kept only if a zero-width mark
    // for the last included glyph follows them.
    let mut held: Vec<Token<'_>> = Vec::new();

    for token in tokens {
        let at_end = end.is_some_and(|end| position >= end);

        match token {
            Token::Style(_) | Token::Link(_) if at_end => held.push(token),
            Token::Style(_) | Token::Link(_) => {
                state.apply(&token);
                if include {
                    output.push_str(token.raw());
                }
            }
            Token::Text(text) if text.width == 0 => {
                // Marks belong to the glyph before them.
                if include {
                    for escape in held.drain(..) {
                        state.apply(&escape);
                        output.push_str(escape.raw());
                    }
                    output.push_str(text.text);
                }
            }
            Token::Text(text) => {
                if end.is_some_and(|end| position + text.width > end) {
                    break;
                }
                if !include && position >= start {
                    include = true;
                    output.push_str(&state.open_sequence());
                }
                if include {
                    output.push_str(text.text);
                }
                position += text.width;
            }
        }
    }

    if include {
        output.push_str(&state.closing_sequence());
    }
    output
}
