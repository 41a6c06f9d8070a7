#![forbid(unsafe_code)]

//! Errors reported while validating table input.
//!
//! Every error is raised eagerly, before any rendering work happens, so a
//! failed render produces no partial output. Conditions the type system
//! already rules out (negative padding, negative widths, out-of-range
//! alignment values) have no error variants.

/// Errors that can occur while validating a table before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Neither header, body, nor footer was provided.
    NoContent,
    /// The footer's column count differs from the rest of the table.
    FooterColumnCount { found: usize, expected: usize },
    /// A body row's column count differs from the rest of the table.
    BodyColumnCount {
        row: usize,
        found: usize,
        expected: usize,
    },
    /// A per-column alignment list does not match the column count.
    AlignmentCount { found: usize, expected: usize },
    /// A per-column width list does not match the column count.
    ColumnWidthCount { found: usize, expected: usize },
    /// A fixed column width is below the minimum required by the content.
    ColumnWidthTooSmall {
        column: usize,
        given: usize,
        minimum: usize,
    },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoContent => {
                write!(f, "at least one of header, body or footer must be provided")
            }
            Self::FooterColumnCount { found, expected } => {
                write!(
                    f,
                    "footer column count mismatch: {} columns found, expected {}",
                    found, expected
                )
            }
            Self::BodyColumnCount {
                row,
                found,
                expected,
            } => {
                write!(
                    f,
                    "body column count mismatch: row {} has {} columns, expected {}",
                    row, found, expected
                )
            }
            Self::AlignmentCount { found, expected } => {
                write!(
                    f,
                    "alignment count mismatch: {} alignments found, expected {}",
                    found, expected
                )
            }
            Self::ColumnWidthCount { found, expected } => {
                write!(
                    f,
                    "column width count mismatch: {} widths found, expected {}",
                    found, expected
                )
            }
            Self::ColumnWidthTooSmall {
                column,
                given,
                minimum,
            } => {
                write!(
                    f,
                    "column width too small: column {} was given width {}, but the \
                     content requires at least {}",
                    column, given, minimum
                )
            }
        }
    }
}

impl std::error::Error for TableError {}
