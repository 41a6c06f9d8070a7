#![forbid(unsafe_code)]

//! Rendering options.
//!
//! [`Options`] carries every user-tunable rendering parameter. Fields are
//! public and the builder methods are plain copy-and-set, so options can be
//! built fluently or constructed literally.
//!
//! # Example
//! ```
//! use trellis::{Alignment, Options, Style, StylePreset};
//!
//! let options = Options::new()
//!     .first_col_heading(true)
//!     .alignments(Alignment::Left)
//!     .cell_padding(0)
//!     .style(Style::preset(StylePreset::AsciiBox));
//! assert!(options.first_col_heading);
//! ```

use trellis_core::AlignmentSpec;
use trellis_style::Style;
use trellis_text::WidthMode;

/// User-supplied rendering parameters.
#[derive(Debug, Clone)]
pub struct Options {
    /// Draw the heading separator after the first column.
    pub first_col_heading: bool,
    /// Draw the heading separator before the last column.
    pub last_col_heading: bool,
    /// Fixed per-column widths; `None` entries are sized automatically.
    pub column_widths: Option<Vec<Option<usize>>>,
    /// Column alignments; defaults to centered everywhere.
    pub alignments: Option<AlignmentSpec>,
    /// Alignment override applied only to numeric-looking cells.
    pub number_alignments: Option<AlignmentSpec>,
    /// Spaces between cell content and the column separator.
    pub cell_padding: usize,
    /// Border glyph table.
    pub style: Style,
    /// How cell text width is measured.
    pub width_mode: WidthMode,
}

impl Options {
    /// Options with the library defaults: no heading columns, automatic
    /// widths, centered cells, padding 1, the default preset style, and
    /// east-asian-width aware measurement.
    #[must_use]
    pub fn new() -> Self {
        Self {
            first_col_heading: false,
            last_col_heading: false,
            column_widths: None,
            alignments: None,
            number_alignments: None,
            cell_padding: 1,
            style: Style::default(),
            width_mode: WidthMode::Unicode,
        }
    }

    /// Draw the heading separator after the first column.
    #[must_use]
    pub fn first_col_heading(mut self, heading: bool) -> Self {
        self.first_col_heading = heading;
        self
    }

    /// Draw the heading separator before the last column.
    #[must_use]
    pub fn last_col_heading(mut self, heading: bool) -> Self {
        self.last_col_heading = heading;
        self
    }

    /// Fix column widths; `None` entries keep automatic sizing.
    #[must_use]
    pub fn column_widths(mut self, widths: impl IntoIterator<Item = Option<usize>>) -> Self {
        self.column_widths = Some(widths.into_iter().collect());
        self
    }

    /// Set column alignments, uniformly or per column.
    #[must_use]
    pub fn alignments(mut self, alignments: impl Into<AlignmentSpec>) -> Self {
        self.alignments = Some(alignments.into());
        self
    }

    /// Set the alignment override for numeric-looking cells.
    #[must_use]
    pub fn number_alignments(mut self, alignments: impl Into<AlignmentSpec>) -> Self {
        self.number_alignments = Some(alignments.into());
        self
    }

    /// Set the padding between content and column separators.
    #[must_use]
    pub fn cell_padding(mut self, padding: usize) -> Self {
        self.cell_padding = padding;
        self
    }

    /// Set the border glyph table.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the width measurement mode.
    #[must_use]
    pub fn width_mode(mut self, mode: WidthMode) -> Self {
        self.width_mode = mode;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}
