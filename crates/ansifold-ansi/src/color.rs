//! Color space conversions between 24-bit, 256-color and 16-color forms.
//!
//! The 256-color mapping uses the standard 6x6x6 color cube plus the
//! 24-step grayscale ramp.

/// Convert RGB to the nearest 256-color palette index.
///
/// Grays map onto the grayscale ramp (232-255), everything else onto the
/// color cube (16-231).
///
/// # Example
///
/// ```
/// use ansifold_ansi::color::rgb_to_ansi256;
/// assert_eq!(rgb_to_ansi256(255, 0, 0), 196);
/// assert_eq!(rgb_to_ansi256(0, 0, 0), 16);
/// assert_eq!(rgb_to_ansi256(255, 255, 255), 231);
/// ```
pub fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return (((r as f64 - 8.0) / 247.0) * 24.0).round() as u8 + 232;
    }

    let scale = |c: u8| (c as f64 / 255.0 * 5.0).round() as u8;
    16 + 36 * scale(r) + 6 * scale(g) + scale(b)
}

/// Split a packed `0xRRGGBB` value into its components.
///
/// # Example
///
/// ```
/// use ansifold_ansi::color::hex_to_rgb;
/// assert_eq!(hex_to_rgb(0xff8000), (255, 128, 0));
/// ```
pub fn hex_to_rgb(hex: u32) -> (u8, u8, u8) {
    (
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}

/// Parse a hex color string to RGB components.
///
/// Accepts `#rrggbb` and the shorthand `#rgb`, with or without `#`.
///
/// # Example
///
/// ```
/// use ansifold_ansi::color::parse_hex_color;
/// assert_eq!(parse_hex_color("#ff8000"), Some((255, 128, 0)));
/// assert_eq!(parse_hex_color("f80"), Some((255, 136, 0)));
/// assert_eq!(parse_hex_color("#nope"), None);
/// ```
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };

    u32::from_str_radix(&expanded, 16).ok().map(hex_to_rgb)
}

/// Convert a packed `0xRRGGBB` value to the nearest 256-color index.
pub fn hex_to_ansi256(hex: u32) -> u8 {
    let (r, g, b) = hex_to_rgb(hex);
    rgb_to_ansi256(r, g, b)
}

/// Convert a 256-color index to the nearest 16-color foreground code
/// (30-37 or 90-97).
///
/// # Example
///
/// ```
/// use ansifold_ansi::color::ansi256_to_ansi16;
/// assert_eq!(ansi256_to_ansi16(1), 31);
/// assert_eq!(ansi256_to_ansi16(9), 91);
/// assert_eq!(ansi256_to_ansi16(196), 91);
/// ```
pub fn ansi256_to_ansi16(code: u8) -> u32 {
    if code < 8 {
        return 30 + code as u32;
    }
    if code < 16 {
        return 90 + (code as u32 - 8);
    }

    let (red, green, blue) = if code >= 232 {
        let level = ((code as f64 - 232.0) * 10.0 + 8.0) / 255.0;
        (level, level, level)
    } else {
        let code = code as u32 - 16;
        let remainder = code % 36;
        (
            (code / 36) as f64 / 5.0,
            (remainder / 6) as f64 / 5.0,
            (remainder % 6) as f64 / 5.0,
        )
    };

    let value = red.max(green).max(blue) * 2.0;
    if value == 0.0 {
        return 30;
    }

    let bits = ((blue.round() as u32) << 2) | ((green.round() as u32) << 1) | red.round() as u32;
    let mut result = 30 + bits;
    if value == 2.0 {
        result += 60;
    }
    result
}

/// Convert RGB to the nearest 16-color foreground code.
pub fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> u32 {
    ansi256_to_ansi16(rgb_to_ansi256(r, g, b))
}

/// Convert a packed `0xRRGGBB` value to the nearest 16-color foreground code.
pub fn hex_to_ansi16(hex: u32) -> u32 {
    ansi256_to_ansi16(hex_to_ansi256(hex))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_ansi256_cube() {
        assert_eq!(rgb_to_ansi256(0, 255, 0), 46);
        assert_eq!(rgb_to_ansi256(0, 0, 255), 21);
        assert_eq!(rgb_to_ansi256(255, 128, 0), 214);
    }

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256(128, 128, 128), 244);
        assert_eq!(rgb_to_ansi256(7, 7, 7), 16);
        assert_eq!(rgb_to_ansi256(249, 249, 249), 231);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff0000"), Some((255, 0, 0)));
        assert_eq!(parse_hex_color("00ff00"), Some((0, 255, 0)));
        assert_eq!(parse_hex_color("#123"), Some((0x11, 0x22, 0x33)));
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn test_hex_to_ansi256() {
        assert_eq!(hex_to_ansi256(0xff0000), 196);
        assert_eq!(hex_to_ansi256(0x000000), 16);
    }

    #[test]
    fn test_ansi256_to_ansi16() {
        assert_eq!(ansi256_to_ansi16(0), 30);
        assert_eq!(ansi256_to_ansi16(7), 37);
        assert_eq!(ansi256_to_ansi16(15), 97);
        assert_eq!(ansi256_to_ansi16(16), 30);
        assert_eq!(ansi256_to_ansi16(231), 97);
        assert_eq!(ansi256_to_ansi16(244), 37);
    }

    #[test]
    fn test_rgb_to_ansi16() {
        assert_eq!(rgb_to_ansi16(255, 0, 0), 91);
        assert_eq!(rgb_to_ansi16(0, 0, 0), 30);
        assert_eq!(hex_to_ansi16(0x0000ff), 94);
    }
}
