//! ANSI escape code constants and encoders.
//!
//! This module provides the raw escape sequences the layout engine
//! reads and writes: SGR style codes and OSC 8 hyperlinks.

/// 7-bit escape introducer.
pub const ESC: char = '\x1b';

/// 8-bit Control Sequence Introducer, equivalent to `ESC [`.
pub const CSI_8BIT: char = '\u{9b}';

/// Bell, terminates OSC sequences.
pub const BEL: char = '\x07';

/// Final byte of an SGR (Select Graphic Rendition) sequence.
pub const SGR_TERMINATOR: char = 'm';

/// Longest SGR sequence the tokenizer will scan for, in characters,
/// introducer included.
pub const MAX_SEQUENCE_LENGTH: usize = 19;

/// Offset between a foreground code and its background counterpart.
pub const BACKGROUND_OFFSET: u32 = 10;

/// SGR code that resets every attribute.
pub const RESET_CODE: u32 = 0;

/// Reset all attributes (colors and formatting).
pub const RESET: &str = "\x1b[0m";

/// Reset foreground color to default.
pub const FGRESET: &str = "\x1b[39m";

/// Reset background color to default.
pub const BGRESET: &str = "\x1b[49m";

/// Escape sequence prefix for 24-bit foreground color.
/// Usage: `format!("{}r;g;bm", FG)` where r, g, b are 0-255.
pub const FG: &str = "\x1b[38;2;";

/// Escape sequence prefix for 24-bit background color.
/// Usage: `format!("{}r;g;bm", BG)` where r, g, b are 0-255.
pub const BG: &str = "\x1b[48;2;";

/// OSC 8 hyperlink prefix. Usage: `format!("{}url\x07", LINK_START)`
pub const LINK_START: &str = "\x1b]8;;";

/// OSC 8 hyperlink end (empty URL).
pub const LINK_END: &str = "\x1b]8;;\x07";

/// Which side of the cell a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorLayer {
    /// Text color (`3x`, `38;…`).
    Foreground,
    /// Cell color (`4x`, `48;…`).
    Background,
}

impl ColorLayer {
    /// Amount added to foreground codes to reach this layer.
    pub fn offset(self) -> u32 {
        match self {
            ColorLayer::Foreground => 0,
            ColorLayer::Background => BACKGROUND_OFFSET,
        }
    }
}

/// Encode a single SGR code.
///
/// # Example
///
/// ```
/// use ansifold_ansi::codes::ansi16;
/// assert_eq!(ansi16(31), "\x1b[31m");
/// ```
pub fn ansi16(code: u32) -> String {
    format!("\x1b[{}m", code)
}

/// Encode a 256-color palette index.
///
/// # Example
///
/// ```
/// use ansifold_ansi::codes::{ansi256, ColorLayer};
/// assert_eq!(ansi256(ColorLayer::Foreground, 196), "\x1b[38;5;196m");
/// assert_eq!(ansi256(ColorLayer::Background, 21), "\x1b[48;5;21m");
/// ```
pub fn ansi256(layer: ColorLayer, index: u8) -> String {
    format!("\x1b[{};5;{}m", 38 + layer.offset(), index)
}

/// Encode a 24-bit color.
///
/// # Arguments
///
/// * `layer` - Foreground or background
/// * `r` - Red component (0-255)
/// * `g` - Green component (0-255)
/// * `b` - Blue component (0-255)
///
/// # Example
///
/// ```
/// use ansifold_ansi::codes::{ansi16m, ColorLayer};
/// assert_eq!(ansi16m(ColorLayer::Foreground, 255, 0, 0), "\x1b[38;2;255;0;0m");
/// ```
pub fn ansi16m(layer: ColorLayer, r: u8, g: u8, b: u8) -> String {
    let prefix = match layer {
        ColorLayer::Foreground => FG,
        ColorLayer::Background => BG,
    };
    format!("{}{}m", prefix, rgb_string(r, g, b))
}

/// Open an OSC 8 hyperlink. An empty `url` closes the current one.
pub fn hyperlink(url: &str) -> String {
    format!("{}{}{}", LINK_START, url, BEL)
}

/// Format RGB values as semicolon-separated string.
fn rgb_string(r: u8, g: u8, b: u8) -> String {
    format!("{};{};{}", r, g, b)
}
