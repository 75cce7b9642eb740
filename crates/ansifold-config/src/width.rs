//! The `[width]` section.

use serde::{Deserialize, Serialize};

/// How glyph widths are measured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WidthConfig {
    /// Count East Asian ambiguous-width glyphs as two columns, as CJK
    /// terminals usually do.
    /// Default: false
    #[serde(default)]
    pub ambiguous_as_wide: bool,
}

impl WidthConfig {
    /// Merge another WidthConfig into this one.
    pub fn merge(&mut self, other: &WidthConfig) {
        self.ambiguous_as_wide = other.ambiguous_as_wide;
    }
}
