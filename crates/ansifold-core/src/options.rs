//! Options for the slicing and wrapping operations.
//!
//! Both structs deserialize from the PascalCase keys used in the
//! configuration file, so a config section maps onto them directly.

use serde::{Deserialize, Serialize};

/// Options controlling how a line is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WrapOptions {
    /// Trim leading whitespace on fresh rows and trailing whitespace on
    /// every row. Default: true
    #[serde(default = "default_true")]
    pub trim: bool,

    /// Break at word boundaries. When false, words are split at the
    /// column boundary and rows are filled completely. Default: true
    #[serde(default = "default_true")]
    pub word_wrap: bool,

    /// Always split words longer than the column budget, even when
    /// `word_wrap` is on. Default: false
    #[serde(default)]
    pub hard: bool,

    /// Measure East Asian ambiguous-width glyphs as two columns.
    /// Default: false
    #[serde(default)]
    pub ambiguous_as_wide: bool,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            trim: true,
            word_wrap: true,
            hard: false,
            ambiguous_as_wide: false,
        }
    }
}

impl WrapOptions {
    /// Create the default options (trim, word wrap, no hard breaks).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether rows are trimmed.
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Set whether wrapping happens at word boundaries.
    pub fn word_wrap(mut self, word_wrap: bool) -> Self {
        self.word_wrap = word_wrap;
        self
    }

    /// Set whether over-long words are always split.
    pub fn hard(mut self, hard: bool) -> Self {
        self.hard = hard;
        self
    }

    /// Set whether ambiguous-width glyphs count as wide.
    pub fn ambiguous_as_wide(mut self, ambiguous_as_wide: bool) -> Self {
        self.ambiguous_as_wide = ambiguous_as_wide;
        self
    }
}

/// Options controlling how text is measured while slicing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SliceOptions {
    /// Measure East Asian ambiguous-width glyphs as two columns.
    #[serde(default)]
    pub ambiguous_as_wide: bool,
}

fn default_true() -> bool {
    true
}
