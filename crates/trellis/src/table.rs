#![forbid(unsafe_code)]

//! The public table builder.
//!
//! A [`Table`] collects the header, body and footer rows plus the rendering
//! [`Options`], then renders the whole table into one string. Construction
//! never fails; validation happens eagerly when [`Table::render`] is called,
//! and a failed render returns no partial output.
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
//! assert!(text.starts_with("╔═════╦"));
//! ```

use trellis_core::{Cell, TableError};

use crate::layout::Layout;
use crate::options::Options;

/// A two-dimensional grid of cells to be rendered as a box-drawing table.
#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Option<Vec<Cell>>,
    body: Vec<Vec<Cell>>,
    footer: Option<Vec<Cell>>,
    options: Options,
}

impl Table {
    /// An empty table with default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: None,
            body: Vec::new(),
            footer: None,
            options: Options::new(),
        }
    }

    /// Set the header row.
    #[must_use]
    pub fn header(mut self, cells: impl IntoIterator<Item = impl Into<Cell>>) -> Self {
        self.header = Some(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the body with the given rows.
    #[must_use]
    pub fn body(
        mut self,
        rows: impl IntoIterator<Item = impl IntoIterator<Item = impl Into<Cell>>>,
    ) -> Self {
        self.body = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        self
    }

    /// Append a single body row.
    #[must_use]
    pub fn row(mut self, cells: impl IntoIterator<Item = impl Into<Cell>>) -> Self {
        self.body.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Set the footer row.
    #[must_use]
    pub fn footer(mut self, cells: impl IntoIterator<Item = impl Into<Cell>>) -> Self {
        self.footer = Some(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Set the rendering options.
    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Render the table.
    ///
    /// Validates the table shape, computes the layout, and assembles the
    /// output. All errors surface before any line is produced.
    pub fn render(&self) -> Result<String, TableError> {
        let layout = Layout::new(
            self.header.as_deref(),
            &self.body,
            self.footer.as_deref(),
            &self.options,
        )?;
        Ok(layout.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_rows() {
        let table = Table::new()
            .header(["a", "b"])
            .row(["1", "2"])
            .row(["3", "4"])
            .footer(["x", "y"]);
        assert_eq!(table.header.as_ref().unwrap().len(), 2);
        assert_eq!(table.body.len(), 2);
        assert_eq!(table.footer.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn body_replaces_rows() {
        let table = Table::new().row(["1"]).body([["2"], ["3"]]);
        assert_eq!(table.body.len(), 2);
        assert_eq!(table.body[0][0], Cell::from("2"));
    }

    #[test]
    fn mixed_cell_sources() {
        let table = Table::new().row([Cell::from("a"), Cell::MergeLeft]);
        assert!(table.body[0][1].is_merge_left());
    }

    #[test]
    fn render_empty_table_fails() {
        assert_eq!(Table::new().render(), Err(TableError::NoContent));
    }
}
