#![forbid(unsafe_code)]

//! Text measurement and wrapping for the trellis table renderer.
//!
//! This crate provides the width primitives the layout engine builds on:
//! - [`WidthMode`] - east-asian-width aware or code-point measurement
//! - [`wrap_text`] - word wrapping with grapheme-level long-word breaking
//! - [`is_numeric`] - the numeric-text test used by decimal alignment
//!
//! # Example
//! ```
//! use trellis_text::{WidthMode, is_numeric, wrap_text};
//!
//! assert_eq!(WidthMode::Unicode.measure("示例"), 4);
//! assert!(is_numeric("3.14"));
//! assert_eq!(wrap_text("one two", 3, WidthMode::Unicode), vec!["one", "two"]);
//! ```

pub mod width;
pub mod wrap;

pub use width::{WidthMode, display_width, is_numeric};
pub use wrap::wrap_text;
