//! Process-wide table of SGR style codes.
//!
//! The table pairs every named style with the code that opens it and
//! the code that undoes it. It is built on first use and never mutated
//! afterwards, so any number of threads may read it.

use crate::codes::{self, ColorLayer, RESET_CODE};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// The kind of terminal attribute a style changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFamily {
    /// Text attributes: bold, italic, underline, ...
    Modifier,
    /// Text color
    Foreground,
    /// Cell color
    Background,
}

/// A named style and its open/close code pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleCode {
    /// Style name, e.g. `"bold"` or `"bgRed"`.
    pub name: &'static str,
    /// SGR code that turns the style on.
    pub open: u32,
    /// SGR code that turns the style off.
    pub close: u32,
    /// Attribute family.
    pub family: StyleFamily,
}

impl StyleCode {
    /// Escape sequence that turns the style on.
    pub fn open_sequence(&self) -> String {
        codes::ansi16(self.open)
    }

    /// Escape sequence that turns the style off.
    pub fn close_sequence(&self) -> String {
        codes::ansi16(self.close)
    }
}

const MODIFIERS: &[(&str, u32, u32)] = &[
    ("reset", 0, 0),
    ("bold", 1, 22),
    ("dim", 2, 22),
    ("italic", 3, 23),
    ("underline", 4, 24),
    ("overline", 53, 55),
    ("inverse", 7, 27),
    ("hidden", 8, 28),
    ("strikethrough", 9, 29),
];

const FOREGROUND: &[(&str, u32)] = &[
    ("black", 30),
    ("red", 31),
    ("green", 32),
    ("yellow", 33),
    ("blue", 34),
    ("magenta", 35),
    ("cyan", 36),
    ("white", 37),
    ("blackBright", 90),
    ("gray", 90),
    ("grey", 90),
    ("redBright", 91),
    ("greenBright", 92),
    ("yellowBright", 93),
    ("blueBright", 94),
    ("magentaBright", 95),
    ("cyanBright", 96),
    ("whiteBright", 97),
];

const BACKGROUND: &[(&str, u32)] = &[
    ("bgBlack", 40),
    ("bgRed", 41),
    ("bgGreen", 42),
    ("bgYellow", 43),
    ("bgBlue", 44),
    ("bgMagenta", 45),
    ("bgCyan", 46),
    ("bgWhite", 47),
    ("bgBlackBright", 100),
    ("bgGray", 100),
    ("bgGrey", 100),
    ("bgRedBright", 101),
    ("bgGreenBright", 102),
    ("bgYellowBright", 103),
    ("bgBlueBright", 104),
    ("bgMagentaBright", 105),
    ("bgCyanBright", 106),
    ("bgWhiteBright", 107),
];

/// Close code shared by every foreground color.
pub const FOREGROUND_CLOSE: u32 = 39;

/// Close code shared by every background color.
pub const BACKGROUND_CLOSE: u32 = 49;

/// Immutable lookup table of known styles.
#[derive(Debug)]
pub struct StyleRegistry {
    styles: Vec<StyleCode>,
    by_name: HashMap<&'static str, usize>,
    closes_by_open: HashMap<u32, u32>,
    close_codes: HashSet<u32>,
}

static REGISTRY: LazyLock<StyleRegistry> = LazyLock::new(StyleRegistry::build);

/// The shared registry, built on first access.
pub fn registry() -> &'static StyleRegistry {
    &REGISTRY
}

impl StyleRegistry {
    fn build() -> Self {
        let modifiers = MODIFIERS.iter().map(|&(name, open, close)| StyleCode {
            name,
            open,
            close,
            family: StyleFamily::Modifier,
        });
        let foreground = FOREGROUND.iter().map(|&(name, open)| StyleCode {
            name,
            open,
            close: FOREGROUND_CLOSE,
            family: StyleFamily::Foreground,
        });
        let background = BACKGROUND.iter().map(|&(name, open)| StyleCode {
            name,
            open,
            close: BACKGROUND_CLOSE,
            family: StyleFamily::Background,
        });

        let styles: Vec<StyleCode> = modifiers.chain(foreground).chain(background).collect();

        let mut by_name = HashMap::with_capacity(styles.len());
        let mut closes_by_open = HashMap::with_capacity(styles.len());
        let mut close_codes = HashSet::new();
        for (index, style) in styles.iter().enumerate() {
            by_name.insert(style.name, index);
            closes_by_open.insert(style.open, style.close);
            close_codes.insert(style.close);
        }

        log::trace!("built style registry with {} entries", styles.len());

        Self {
            styles,
            by_name,
            closes_by_open,
            close_codes,
        }
    }

    /// Look up a style by name.
    ///
    /// # Example
    ///
    /// ```
    /// use ansifold_ansi::registry::registry;
    /// let bold = registry().get("bold").unwrap();
    /// assert_eq!((bold.open, bold.close), (1, 22));
    /// ```
    pub fn get(&self, name: &str) -> Option<&StyleCode> {
        self.by_name.get(name).map(|&index| &self.styles[index])
    }

    /// All styles, in declaration order.
    pub fn styles(&self) -> &[StyleCode] {
        &self.styles
    }

    /// Styles belonging to one family.
    pub fn family(&self, family: StyleFamily) -> impl Iterator<Item = &StyleCode> + '_ {
        self.styles.iter().filter(move |style| style.family == family)
    }

    /// The code that undoes `open`, or the reset code if `open` is unknown.
    ///
    /// # Example
    ///
    /// ```
    /// use ansifold_ansi::registry::registry;
    /// assert_eq!(registry().resolve_close_code(31), 39);
    /// assert_eq!(registry().resolve_close_code(3), 23);
    /// assert_eq!(registry().resolve_close_code(5), 0);
    /// ```
    pub fn resolve_close_code(&self, open: u32) -> u32 {
        self.closes_by_open.get(&open).copied().unwrap_or(RESET_CODE)
    }

    /// Whether `code` is the close code of some known style.
    pub fn is_close_code(&self, code: u32) -> bool {
        self.close_codes.contains(&code)
    }

    /// Escape sequence for the global reset.
    pub fn reset_sequence(&self) -> String {
        codes::ansi16(RESET_CODE)
    }

    /// Encode a 16-color (or any single) SGR code.
    pub fn encode16(&self, code: u32) -> String {
        codes::ansi16(code)
    }

    /// Encode a 256-color palette index.
    pub fn encode256(&self, layer: ColorLayer, index: u8) -> String {
        codes::ansi256(layer, index)
    }

    /// Encode a 24-bit color.
    pub fn encode_true_color(&self, layer: ColorLayer, r: u8, g: u8, b: u8) -> String {
        codes::ansi16m(layer, r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_shared() {
        assert!(std::ptr::eq(registry(), registry()));
    }

    #[test]
    fn test_family_sizes() {
        let r = registry();
        assert_eq!(r.family(StyleFamily::Modifier).count(), 9);
        assert_eq!(r.family(StyleFamily::Foreground).count(), 18);
        assert_eq!(r.family(StyleFamily::Background).count(), 18);
    }

    #[test]
    fn test_colors_share_close_codes() {
        let r = registry();
        assert!(r.family(StyleFamily::Foreground).all(|s| s.close == 39));
        assert!(r.family(StyleFamily::Background).all(|s| s.close == 49));
    }

    #[test]
    fn test_bold_and_dim_share_close() {
        let r = registry();
        assert_eq!(r.get("bold").unwrap().close, r.get("dim").unwrap().close);
        assert_ne!(r.get("bold").unwrap().close, r.get("italic").unwrap().close);
    }

    #[test]
    fn test_resolve_close_code() {
        let r = registry();
        assert_eq!(r.resolve_close_code(1), 22);
        assert_eq!(r.resolve_close_code(53), 55);
        assert_eq!(r.resolve_close_code(97), 39);
        assert_eq!(r.resolve_close_code(107), 49);
        assert_eq!(r.resolve_close_code(0), 0);
        assert_eq!(r.resolve_close_code(999), 0);
    }

    #[test]
    fn test_close_codes() {
        let r = registry();
        for code in [0, 22, 23, 24, 27, 28, 29, 39, 49, 55] {
            assert!(r.is_close_code(code), "{} should be a close code", code);
        }
        assert!(!r.is_close_code(31));
        assert!(!r.is_close_code(1));
    }

    #[test]
    fn test_style_sequences() {
        let red = registry().get("red").unwrap();
        assert_eq!(red.open_sequence(), "\x1b[31m");
        assert_eq!(red.close_sequence(), "\x1b[39m");
        assert_eq!(registry().get("gray").unwrap().open, 90);
    }

    #[test]
    fn test_encoders() {
        let r = registry();
        assert_eq!(r.encode16(32), "\x1b[32m");
        assert_eq!(r.encode256(ColorLayer::Foreground, 208), "\x1b[38;5;208m");
        assert_eq!(
            r.encode_true_color(ColorLayer::Background, 1, 2, 3),
            "\x1b[48;2;1;2;3m"
        );
        assert_eq!(r.reset_sequence(), "\x1b[0m");
    }
}
