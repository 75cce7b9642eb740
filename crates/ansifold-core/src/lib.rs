//! Ansifold Core
//!
//! This crate provides the error types and shared option types
//! used across the ansifold layout engine.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`AnsiError`] - Error types
//! - [`WrapOptions`], [`SliceOptions`] - Options for the layout operations

pub mod error;
pub mod options;

pub use error::{AnsiError, Result};
pub use options::{SliceOptions, WrapOptions};
