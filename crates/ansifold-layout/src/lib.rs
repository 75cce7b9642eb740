//! Ansifold Layout
//!
//! Column-bounded operations on ANSI-styled text. Both operations measure
//! text in display columns, never split an escape sequence, and leave
//! every piece they produce with balanced styles.
//!
//! # Overview
//!
//! - [`slice`](mod@slice) - Cut a column range out of styled text
//! - [`wrap`](mod@wrap) - Wrap styled text to a column width
//!
//! # Example
//!
//! ```
//! use ansifold_layout::{slice, wrap, WrapOptions};
//!
//! let text = "\x1b[1mbold\x1b[22m";
//! assert_eq!(slice(text, 2..), "\x1b[1mld\x1b[22m");
//!
//! let options = WrapOptions::default().hard(true);
//! assert_eq!(wrap("日本語", 2, &options), "日\n本\n語");
//! ```

pub mod slice;
pub mod wrap;

pub use ansifold_ansi::utils::strip_styles;
pub use ansifold_core::{SliceOptions, WrapOptions};
pub use slice::{slice, slice_with_options};
pub use wrap::wrap;
