//! Tracking which styles are active at a point in a token stream.
//!
//! [`ActiveStyles`] keeps at most one entry per close code: opening a
//! second foreground color replaces the first, because a single `39`
//! would undo both. The closing sequence undoes entries newest first.

use crate::codes;
use crate::tokenizer::{LinkToken, StyleToken, Token};

/// Ordered set of open styles, unique by close code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveStyles<'a> {
    entries: Vec<StyleToken<'a>>,
}

impl<'a> ActiveStyles<'a> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a sequence of style tokens into the set they leave active.
    ///
    /// # Example
    ///
    /// ```
    /// use ansifold_ansi::state::ActiveStyles;
    /// use ansifold_ansi::tokenizer::{tokenize, Token};
    ///
    /// let styles = tokenize("\x1b[31m\x1b[1m\x1b[39m").filter_map(|t| match t {
    ///     Token::Style(style) => Some(style),
    ///     _ => None,
    /// });
    /// let active = ActiveStyles::reduce(styles);
    /// assert_eq!(active.open_sequence(), "\x1b[1m");
    /// ```
    pub fn reduce<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = StyleToken<'a>>,
    {
        let mut active = Self::new();
        for token in tokens {
            active.apply(token);
        }
        active
    }

    /// Update the set with one style token.
    ///
    /// A reset empties the set. A bare close code removes the entries it
    /// closes. Anything else replaces the entry sharing its close code and
    /// becomes the newest entry.
    pub fn apply(&mut self, token: StyleToken<'a>) {
        if token.is_reset() {
            self.entries.clear();
            return;
        }

        self.entries.retain(|entry| entry.close != token.close);
        if !token.is_close() {
            self.entries.push(token);
        }
    }

    /// Active entries, oldest first.
    pub fn entries(&self) -> &[StyleToken<'a>] {
        &self.entries
    }

    /// Whether no style is active.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The open sequences of the active entries, oldest first.
    pub fn open_sequence(&self) -> String {
        self.entries.iter().map(|entry| entry.raw).collect()
    }

    /// Close sequences that undo every active entry, newest first.
    pub fn closing_sequence(&self) -> String {
        self.entries
            .iter()
            .rev()
            .map(StyleToken::close_sequence)
            .collect()
    }
}

/// Active styles plus the currently open hyperlink, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EscapeState<'a> {
    /// Open SGR styles.
    pub styles: ActiveStyles<'a>,
    /// Open OSC 8 link.
    pub link: Option<LinkToken<'a>>,
}

impl<'a> EscapeState<'a> {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an escape token. Returns `false` for text tokens, which
    /// leave the state untouched.
    pub fn apply(&mut self, token: &Token<'a>) -> bool {
        match *token {
            Token::Style(style) => {
                self.styles.apply(style);
                true
            }
            Token::Link(link) => {
                self.link = if link.is_close() { None } else { Some(link) };
                true
            }
            Token::Text(_) => false,
        }
    }

    /// Whether nothing is open.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty() && self.link.is_none()
    }

    /// Sequences that reopen the current state: styles, then the link.
    pub fn open_sequence(&self) -> String {
        let mut out = self.styles.open_sequence();
        if let Some(link) = self.link {
            out.push_str(&codes::hyperlink(link.url));
        }
        out
    }

    /// Sequences that close the current state: the link, then styles.
    pub fn closing_sequence(&self) -> String {
        let mut out = String::new();
        if self.link.is_some() {
            out.push_str(codes::LINK_END);
        }
        out.push_str(&self.styles.closing_sequence());
        out
    }
}
