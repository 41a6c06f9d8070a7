#![forbid(unsafe_code)]

//! Border styles for the trellis table renderer.
//!
//! A [`Style`] is an immutable table of named border glyphs; [`StylePreset`]
//! is the built-in catalog. The layout engine consumes styles purely through
//! named field lookups, so custom styles are just values:
//!
//! ```
//! use trellis_style::{Style, StylePreset};
//!
//! // A preset...
//! let style = Style::preset(StylePreset::ThinRounded);
//! assert_eq!(style.top_left_corner, "╭");
//!
//! // ...or a custom glyph string (short strings pad with spaces).
//! let custom = Style::from_glyphs("****.||.*.**.*.**.****").unwrap();
//! assert_eq!(custom.left_and_right_edge, "|");
//! ```

pub mod presets;
pub mod style;

pub use presets::StylePreset;
pub use style::{GLYPH_COUNT, Style, StyleError};
