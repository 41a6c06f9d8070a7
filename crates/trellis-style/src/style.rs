#![forbid(unsafe_code)]

//! Border glyph tables.
//!
//! A [`Style`] names every glyph a rendered table can contain: corners,
//! edges, tees and crosses for border rows, heading separators, row
//! separators, and the merge-junction variants. The renderer only performs
//! named lookups; a style is plain data, constructed once and never mutated.
//! Deriving a variant is struct-update syntax:
//!
//! ```
//! use trellis_style::{Style, StylePreset};
//!
//! let no_row_seps = Style {
//!     row_sep: " ".to_string(),
//!     ..Style::preset(StylePreset::Thin)
//! };
//! assert_eq!(no_row_seps.row_sep, " ");
//! ```
//!
//! # Glyph positions
//!
//! [`Style::from_glyphs`] consumes one character per field in declaration
//! order. The first 22 positions cover the plain grid:
//!
//! ```text
//! ABBBBBCBBBBBDBBBBBDBBBBBE
//! F     G     H     H     F
//! IJJJJJKJJJJJLJJJJJLJJJJJM
//! F     G     H     H     F
//! NOOOOOPOOOOOQOOOOOQOOOOOR
//! F     G     H     H     F
//! SBBBBBTBBBBBUBBBBBUBBBBBV
//! ```
//!
//! The remaining 8 are the junctions drawn where a separator meets a
//! horizontally merged cell above or below it: tees opening downward
//! (`col_row_top_tee`, `heading_row_top_tee`) when the wall above is gone,
//! tees opening upward (`..._bottom_tee`) when the wall below is gone, each
//! in a plain-column and a heading-column weight.
//!
//! This ordering is part of the external contract: preset glyph strings and
//! any user-saved style strings depend on it.

/// Number of glyph slots consumed by [`Style::from_glyphs`].
pub const GLYPH_COUNT: usize = 30;

/// Errors raised while constructing a [`Style`] from a glyph string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The glyph string has more characters than there are fields.
    TooManyGlyphs { found: usize, max: usize },
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyGlyphs { found, max } => {
                write!(
                    f,
                    "too many characters for a style: {} found, at most {} allowed",
                    found, max
                )
            }
        }
    }
}

impl std::error::Error for StyleError {}

/// A complete table of border glyphs.
///
/// Every field is a single glyph in practice, though any string is accepted;
/// an empty string removes that part of the grid entirely (and shrinks row
/// geometry accordingly).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub top_left_corner: String,
    pub top_and_bottom_edge: String,
    pub heading_col_top_tee: String,
    pub top_tee: String,
    pub top_right_corner: String,
    pub left_and_right_edge: String,
    pub heading_col_sep: String,
    pub col_sep: String,
    pub heading_row_left_tee: String,
    pub heading_row_sep: String,
    pub heading_col_heading_row_cross: String,
    pub heading_row_cross: String,
    pub heading_row_right_tee: String,
    pub row_left_tee: String,
    pub row_sep: String,
    pub heading_col_row_cross: String,
    pub col_row_cross: String,
    pub row_right_tee: String,
    pub bottom_left_corner: String,
    pub heading_col_bottom_tee: String,
    pub bottom_tee: String,
    pub bottom_right_corner: String,
    pub col_row_top_tee: String,
    pub col_row_bottom_tee: String,
    pub heading_row_top_tee: String,
    pub heading_row_bottom_tee: String,
    pub heading_col_row_top_tee: String,
    pub heading_col_row_bottom_tee: String,
    pub heading_col_heading_row_top_tee: String,
    pub heading_col_heading_row_bottom_tee: String,
}

impl Style {
    /// Build a style from a positional glyph string.
    ///
    /// Character `i` of `glyphs` fills field `i` in declaration order. More
    /// than [`GLYPH_COUNT`] characters is an error; fewer are tolerated with
    /// a warning, the missing trailing fields becoming spaces.
    ///
    /// # Example
    /// ```
    /// use trellis_style::Style;
    ///
    /// let style = Style::from_glyphs("╔═╦╤╗║║│╠═╬╪╣╟─╫┼╢╚╩╧╝┬┴╤╧╥╨╦╩").unwrap();
    /// assert_eq!(style.top_left_corner, "╔");
    /// assert_eq!(style.col_row_cross, "┼");
    /// ```
    pub fn from_glyphs(glyphs: &str) -> Result<Self, StyleError> {
        let count = glyphs.chars().count();
        if count > GLYPH_COUNT {
            return Err(StyleError::TooManyGlyphs {
                found: count,
                max: GLYPH_COUNT,
            });
        }
        if count < GLYPH_COUNT {
            tracing::warn!(
                found = count,
                expected = GLYPH_COUNT,
                "glyph string shorter than the style table; missing glyphs become spaces"
            );
        }

        let mut chars = glyphs.chars();
        let mut next = || chars.next().unwrap_or(' ').to_string();
        Ok(Self {
            top_left_corner: next(),
            top_and_bottom_edge: next(),
            heading_col_top_tee: next(),
            top_tee: next(),
            top_right_corner: next(),
            left_and_right_edge: next(),
            heading_col_sep: next(),
            col_sep: next(),
            heading_row_left_tee: next(),
            heading_row_sep: next(),
            heading_col_heading_row_cross: next(),
            heading_row_cross: next(),
            heading_row_right_tee: next(),
            row_left_tee: next(),
            row_sep: next(),
            heading_col_row_cross: next(),
            col_row_cross: next(),
            row_right_tee: next(),
            bottom_left_corner: next(),
            heading_col_bottom_tee: next(),
            bottom_tee: next(),
            bottom_right_corner: next(),
            col_row_top_tee: next(),
            col_row_bottom_tee: next(),
            heading_row_top_tee: next(),
            heading_row_bottom_tee: next(),
            heading_col_row_top_tee: next(),
            heading_col_row_bottom_tee: next(),
            heading_col_heading_row_top_tee: next(),
            heading_col_heading_row_bottom_tee: next(),
        })
    }
}
