#![forbid(unsafe_code)]

//! trellis renders a two-dimensional grid of cells into a fixed-width
//! monospace box-drawing table.
//!
//! It supports configurable border styles, per-column alignment (including
//! decimal-point alignment), automatic or fixed column widths, multi-line
//! cells, horizontal and vertical cell merging, and east-asian-width aware
//! measurement of wide and zero-width glyphs.
//!
//! # Example
//! ```
//! use trellis::{Options, Table};
//!
//! let text = Table::new()
//!     .header(["#", "G", "H", "R", "S"])
//!     .body([["1", "30", "40", "35", "30"], ["2", "30", "40", "35", "30"]])
//!     .footer(["SUM", "130", "140", "135", "130"])
//!     .options(Options::new().first_col_heading(true))
//!     .render()
//!     .unwrap();
//!
//! assert_eq!(
//!     text,
//!     "╔═════╦═══════════════════════╗\n\
//!      ║  #  ║  G     H     R     S  ║\n\
//!      ╟─────╫───────────────────────╢\n\
//!      ║  1  ║ 30    40    35    30  ║\n\
//!      ║  2  ║ 30    40    35    30  ║\n\
//!      ╟─────╫───────────────────────╢\n\
//!      ║ SUM ║ 130   140   135   130 ║\n\
//!      ╚═════╩═══════════════════════╝"
//! );
//! ```
//!
//! Merging cells is a matter of placing markers in the grid:
//!
//! ```
//! use trellis::{Cell, Table};
//!
//! let text = Table::new()
//!     .row([Cell::from("first"), Cell::from("second")])
//!     .row([Cell::from("joined"), Cell::MergeLeft])
//!     .render()
//!     .unwrap();
//! assert!(text.contains("joined"));
//! ```

mod layout;
pub mod options;
pub mod table;

// --- Core re-exports -------------------------------------------------------

pub use trellis_core::{Alignment, AlignmentSpec, Cell, TableError};

// --- Style re-exports ------------------------------------------------------

pub use trellis_style::{GLYPH_COUNT, Style, StyleError, StylePreset};

// --- Text re-exports -------------------------------------------------------

pub use trellis_text::{WidthMode, display_width};

// --- Facade ----------------------------------------------------------------

pub use options::Options;
pub use table::Table;

/// Standard result type for trellis APIs.
pub type Result<T> = std::result::Result<T, TableError>;

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    //! Everyday imports: `use trellis::prelude::*;`
    pub use crate::{Alignment, Cell, Options, Style, StylePreset, Table, WidthMode};
}
