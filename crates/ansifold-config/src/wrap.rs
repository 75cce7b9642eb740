//! The `[wrap]` section.

use serde::{Deserialize, Serialize};

/// Default wrapping behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WrapConfig {
    /// Column budget. 0 means detect the terminal width.
    /// Default: 80
    #[serde(default = "default_columns")]
    pub columns: usize,

    /// Trim whitespace around rows.
    /// Default: true
    #[serde(default = "default_true")]
    pub trim: bool,

    /// Break at word boundaries.
    /// Default: true
    #[serde(default = "default_true")]
    pub word_wrap: bool,

    /// Always split words longer than the budget.
    /// Default: false
    #[serde(default)]
    pub hard: bool,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            columns: 80,
            trim: true,
            word_wrap: true,
            hard: false,
        }
    }
}

impl WrapConfig {
    /// Merge another WrapConfig into this one.
    ///
    /// All fields are copied from `other`; a partial override file
    /// parses with defaults for whatever it leaves out.
    pub fn merge(&mut self, other: &WrapConfig) {
        self.columns = other.columns;
        self.trim = other.trim;
        self.word_wrap = other.word_wrap;
        self.hard = other.hard;
    }
}

fn default_true() -> bool {
    true
}

fn default_columns() -> usize {
    80
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_section() {
        let config: WrapConfig = toml::from_str("Hard = true").unwrap();
        assert!(config.hard);
        assert!(config.trim);
        assert_eq!(config.columns, 80);
    }

    #[test]
    fn test_merge() {
        let mut base = WrapConfig::default();
        let other = WrapConfig {
            columns: 40,
            word_wrap: false,
            ..WrapConfig::default()
        };
        base.merge(&other);
        assert_eq!(base.columns, 40);
        assert!(!base.word_wrap);
    }
}
