//! Splitting styled text into escape and character tokens.
//!
//! The tokenizer walks a string one code point at a time. SGR sequences
//! (`ESC [ … m`) become [`Token::Style`], OSC 8 hyperlinks become
//! [`Token::Link`], and everything else becomes a [`Token::Text`]
//! carrying its display width. An introducer that does not start a
//! well-formed sequence is kept as ordinary text.
//!
//! Concatenating [`Token::raw`] over a full tokenization reproduces the
//! input byte for byte.

use crate::codes::{self, BEL, CSI_8BIT, ESC, MAX_SEQUENCE_LENGTH, RESET_CODE, SGR_TERMINATOR};
use crate::registry::registry;
use crate::width::char_width;
use std::iter::FusedIterator;

/// An SGR escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleToken<'a> {
    /// The sequence exactly as it appeared in the input.
    pub raw: &'a str,
    /// Parameter text between the introducer and the `m`, e.g. `"38;5;9"`.
    pub params: &'a str,
    /// Code that undoes this style.
    pub close: u32,
}

impl StyleToken<'_> {
    /// The numeric code for single-parameter sequences.
    pub fn code(&self) -> Option<u32> {
        if self.params.contains(';') {
            None
        } else {
            self.params.parse().ok()
        }
    }

    /// Whether this sequence resets every attribute.
    pub fn is_reset(&self) -> bool {
        self.code() == Some(RESET_CODE)
    }

    /// Whether this sequence is itself a close code such as `39` or `22`.
    pub fn is_close(&self) -> bool {
        self.code()
            .is_some_and(|code| registry().is_close_code(code))
    }

    /// Escape sequence that undoes this style.
    pub fn close_sequence(&self) -> String {
        codes::ansi16(self.close)
    }
}

/// An OSC 8 hyperlink sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkToken<'a> {
    /// The sequence exactly as it appeared in the input.
    pub raw: &'a str,
    /// Link target; empty for the sequence that ends a link.
    pub url: &'a str,
}

impl LinkToken<'_> {
    /// Whether this sequence ends the current link.
    pub fn is_close(&self) -> bool {
        self.url.is_empty()
    }
}

/// A single visible (or zero-width) code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextToken<'a> {
    /// The code point as a string slice of the input.
    pub text: &'a str,
    /// Display width in columns: 0, 1 or 2.
    pub width: usize,
}

/// A piece of tokenized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// SGR style sequence
    Style(StyleToken<'a>),
    /// OSC 8 hyperlink sequence
    Link(LinkToken<'a>),
    /// Visible character
    Text(TextToken<'a>),
}

impl<'a> Token<'a> {
    /// The input text this token was read from.
    pub fn raw(&self) -> &'a str {
        match self {
            Token::Style(style) => style.raw,
            Token::Link(link) => link.raw,
            Token::Text(text) => text.text,
        }
    }

    /// Columns the token occupies on screen.
    pub fn width(&self) -> usize {
        match self {
            Token::Style(_) | Token::Link(_) => 0,
            Token::Text(text) => text.width,
        }
    }
}

/// Lazy token stream over a string. Created by [`tokenize`].
#[derive(Debug)]
pub struct Tokens<'a> {
    text: &'a str,
    position: usize,
    visible: usize,
    max_columns: Option<usize>,
    ambiguous_as_wide: bool,
}

/// Tokenize `text`.
///
/// # Example
///
/// ```
/// use ansifold_ansi::tokenizer::{tokenize, Token};
///
/// let tokens: Vec<Token> = tokenize("\x1b[31mhi").collect();
/// assert_eq!(tokens.len(), 3);
/// match tokens[0] {
///     Token::Style(style) => assert_eq!(style.close, 39),
///     _ => unreachable!(),
/// }
/// ```
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        text,
        position: 0,
        visible: 0,
        max_columns: None,
        ambiguous_as_wide: false,
    }
}

impl Tokens<'_> {
    /// Stop once the visible width read so far reaches `columns`.
    pub fn max_columns(mut self, columns: usize) -> Self {
        self.max_columns = Some(columns);
        self
    }

    /// Measure ambiguous-width glyphs as two columns.
    pub fn ambiguous_as_wide(mut self, ambiguous_as_wide: bool) -> Self {
        self.ambiguous_as_wide = ambiguous_as_wide;
        self
    }

    /// Visible columns consumed so far.
    pub fn visible_width(&self) -> usize {
        self.visible
    }

    fn exhausted(&self) -> bool {
        self.position >= self.text.len()
            || self.max_columns.is_some_and(|max| self.visible >= max)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            return None;
        }

        let rest = &self.text[self.position..];
        let c = rest.chars().next()?;

        if c == ESC || c == CSI_8BIT {
            let escape = parse_link(rest)
                .map(Token::Link)
                .or_else(|| parse_style(rest).map(Token::Style));
            if let Some(token) = escape {
                self.position += token.raw().len();
                return Some(token);
            }
            log::trace!("unterminated escape at byte {}, keeping as text", self.position);
        }

        let len = c.len_utf8();
        let width = char_width(c, self.ambiguous_as_wide);
        self.position += len;
        self.visible += width;

        Some(Token::Text(TextToken {
            text: &rest[..len],
            width,
        }))
    }
}

impl FusedIterator for Tokens<'_> {}

/// Parse `ESC ] 8 ; params ; url` terminated by BEL or `ESC \`.
fn parse_link(rest: &str) -> Option<LinkToken<'_>> {
    const PREFIX: &str = "\x1b]8;";

    let body = rest.strip_prefix(PREFIX)?;
    let params_end = body.find(';')?;
    if body[..params_end].contains([BEL, ESC]) {
        return None;
    }

    let after = &body[params_end + 1..];
    let url_len = after.find([BEL, ESC])?;
    let terminator_len = if after[url_len..].starts_with(BEL) {
        BEL.len_utf8()
    } else if after[url_len..].starts_with("\x1b\\") {
        2
    } else {
        return None;
    };

    let total = PREFIX.len() + params_end + 1 + url_len + terminator_len;
    Some(LinkToken {
        raw: &rest[..total],
        url: &after[..url_len],
    })
}

/// Parse an SGR sequence of at most [`MAX_SEQUENCE_LENGTH`] characters.
fn parse_style(rest: &str) -> Option<StyleToken<'_>> {
    let window_end = rest
        .char_indices()
        .nth(MAX_SEQUENCE_LENGTH)
        .map_or(rest.len(), |(index, _)| index);
    let window = &rest[..window_end];

    let body = window
        .strip_prefix("\x1b[")
        .or_else(|| window.strip_prefix(CSI_8BIT))?;
    let params_len = body.find(|c: char| !c.is_ascii_digit() && c != ';')?;
    let params = &body[..params_len];

    if !params.starts_with(|c: char| c.is_ascii_digit())
        || !body[params_len..].starts_with(SGR_TERMINATOR)
    {
        return None;
    }

    let raw_len = window.len() - body.len() + params_len + SGR_TERMINATOR.len_utf8();
    Some(StyleToken {
        raw: &rest[..raw_len],
        params,
        close: close_code_for(params),
    })
}

/// Resolve the close code for SGR parameters.
///
/// Compound parameters collapse to the decade of their first digit, so
/// `38;5;n` closes like `30` (with `39`) and `48;2;r;g;b` like `40`.
fn close_code_for(params: &str) -> u32 {
    let registry = registry();

    if params.contains(';') {
        let decade = params
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .map_or(RESET_CODE, |digit| digit * 10);
        return registry.resolve_close_code(decade);
    }

    match params.parse::<u32>() {
        Ok(code) if registry.is_close_code(code) => code,
        Ok(code) => registry.resolve_close_code(code),
        Err(_) => RESET_CODE,
    }
}
