//! Ansifold ANSI
//!
//! This crate provides the escape-sequence side of the ansifold layout
//! engine: what a style code means, how wide a glyph is, and how a
//! styled string breaks down into tokens.
//!
//! # Overview
//!
//! - [`width`] - Display width of code points
//! - [`registry`] - The process-wide style code table
//! - [`codes`] - Escape constants and encoders
//! - [`color`] - 24-bit / 256-color / 16-color conversions
//! - [`tokenizer`] - Style, hyperlink and character tokens
//! - [`state`] - Active style tracking
//! - [`utils`] - Stripping and measuring styled text
//! - [`sanitize`] - Removing unwanted escape sequences
//!
//! # Example
//!
//! ```
//! use ansifold_ansi::{registry, utils};
//!
//! let red = registry::registry().get("red").unwrap();
//! let text = format!("{}hello{}", red.open_sequence(), red.close_sequence());
//!
//! assert_eq!(utils::visible_width(&text), 5);
//! assert_eq!(utils::strip_styles(&text), "hello");
//! ```

pub mod codes;
pub mod color;
pub mod registry;
pub mod sanitize;
pub mod state;
pub mod tokenizer;
pub mod utils;
pub mod width;

pub use codes::ColorLayer;
pub use registry::{registry, StyleCode, StyleFamily, StyleRegistry};
pub use state::{ActiveStyles, EscapeState};
pub use tokenizer::{tokenize, LinkToken, StyleToken, TextToken, Token, Tokens};
pub use utils::{strip_styles, visible_width, visible_width_with};
pub use width::{char_width, east_asian_width, width};
