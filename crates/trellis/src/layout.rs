#![forbid(unsafe_code)]

//! The layout engine.
//!
//! [`Layout`] validates and normalizes the row/column shape, computes
//! per-column widths from content and user overrides, resolves merge spans,
//! wraps long merged-cell text, and assembles the final string line by line,
//! choosing border glyphs from the active style based on neighboring merge
//! state.
//!
//! A layout is built fresh for every render, consumed in a single
//! synchronous pass, and discarded; nothing is shared between calls.

use trellis_core::{Alignment, Cell, TableError};
use trellis_style::Style;
use trellis_text::{WidthMode, is_numeric, wrap_text};

use crate::options::Options;

/// Which separator line is being assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    /// The table's top border.
    Top,
    /// The line under the header / above the footer.
    Heading,
    /// The line between two body rows.
    Row,
    /// The table's bottom border.
    Bottom,
}

/// Glyphs for one separator line kind.
///
/// The edges use their own fill in place of merge tees, which collapses
/// the junction decision into one table for all four kinds.
struct SeparatorGlyphs<'a> {
    left: &'a str,
    fill: &'a str,
    heading_cross: &'a str,
    cross: &'a str,
    right: &'a str,
    top_tee: &'a str,
    bottom_tee: &'a str,
    heading_top_tee: &'a str,
    heading_bottom_tee: &'a str,
}

/// A validated, measured table ready to be rendered.
#[derive(Debug)]
pub(crate) struct Layout<'a> {
    header: Option<Vec<Cell>>,
    body: Vec<Vec<Cell>>,
    footer: Option<Vec<Cell>>,
    columns: usize,
    column_widths: Vec<usize>,
    alignments: Vec<Alignment>,
    number_alignments: Option<Vec<Alignment>>,
    decimal_positions: Vec<usize>,
    decimal_widths: Vec<usize>,
    style: &'a Style,
    first_col_heading: bool,
    last_col_heading: bool,
    cell_padding: usize,
    width_mode: WidthMode,
}

impl<'a> Layout<'a> {
    /// Validate the table shape and compute the full layout.
    ///
    /// All errors surface here; [`Layout::render`] cannot fail.
    pub(crate) fn new(
        header: Option<&[Cell]>,
        body: &[Vec<Cell>],
        footer: Option<&[Cell]>,
        options: &'a Options,
    ) -> Result<Self, TableError> {
        // Empty sequences count as absent.
        let header = header.filter(|row| !row.is_empty()).map(<[Cell]>::to_vec);
        let body: Vec<Vec<Cell>> = body.to_vec();
        let footer = footer.filter(|row| !row.is_empty()).map(<[Cell]>::to_vec);

        if header.is_none() && body.is_empty() && footer.is_none() {
            return Err(TableError::NoContent);
        }

        let columns = header
            .as_ref()
            .map(Vec::len)
            .or_else(|| footer.as_ref().map(Vec::len))
            .or_else(|| body.first().map(Vec::len))
            .unwrap_or(0);

        if let Some(footer) = &footer {
            if footer.len() != columns {
                return Err(TableError::FooterColumnCount {
                    found: footer.len(),
                    expected: columns,
                });
            }
        }
        for (row_index, row) in body.iter().enumerate() {
            if row.len() != columns {
                return Err(TableError::BodyColumnCount {
                    row: row_index,
                    found: row.len(),
                    expected: columns,
                });
            }
        }

        let alignments = match &options.alignments {
            Some(spec) => spec.resolve(columns).ok_or(TableError::AlignmentCount {
                found: spec.len(columns),
                expected: columns,
            })?,
            None => vec![Alignment::Center; columns],
        };
        let number_alignments = match &options.number_alignments {
            Some(spec) => Some(spec.resolve(columns).ok_or(TableError::AlignmentCount {
                found: spec.len(columns),
                expected: columns,
            })?),
            None => None,
        };

        let mut layout = Self {
            header,
            body,
            footer,
            columns,
            column_widths: Vec::new(),
            alignments,
            number_alignments,
            decimal_positions: vec![0; columns],
            decimal_widths: vec![0; columns],
            style: &options.style,
            first_col_heading: options.first_col_heading,
            last_col_heading: options.last_col_heading,
            cell_padding: options.cell_padding,
            width_mode: options.width_mode,
        };

        layout.normalize_dangling_merges();
        layout.measure_decimals();
        layout.column_widths = layout.resolve_column_widths(options.column_widths.as_deref())?;
        layout.wrap_rows();
        Ok(layout)
    }

    // --- Normalization ------------------------------------------------------

    /// A merge marker with nothing to merge into renders as an empty cell:
    /// a `MergeLeft` in the first column, or a `MergeUp` in the table's
    /// first content row.
    fn normalize_dangling_merges(&mut self) {
        let mut rows: Vec<&mut Vec<Cell>> = self
            .header
            .iter_mut()
            .chain(self.body.iter_mut())
            .chain(self.footer.iter_mut())
            .collect();

        if let Some(first) = rows.first_mut() {
            for cell in first.iter_mut() {
                if cell.is_merge_up() {
                    *cell = Cell::default();
                }
            }
        }
        for row in rows {
            if let Some(first) = row.first_mut() {
                if first.is_merge_left() {
                    *first = Cell::default();
                }
            }
        }
    }

    fn rows(&self) -> impl Iterator<Item = &Vec<Cell>> {
        self.header
            .iter()
            .chain(self.body.iter())
            .chain(self.footer.iter())
    }

    // --- Width computation --------------------------------------------------

    /// Width a cell demands from its own column: zero when it is a merge
    /// marker or when it is about to be absorbed by a merge from the right.
    fn column_contribution(&self, row: &[Cell], column: usize) -> usize {
        if row[column].is_merge_left() {
            return 0;
        }
        if column + 1 < self.columns && row[column + 1].is_merge_left() {
            return 0;
        }
        self.width_mode.widest_line(row[column].text())
    }

    /// Reserve space in decimal-aligned columns so that every numeric value
    /// can sit with its point in the same output column.
    fn measure_decimals(&mut self) {
        for column in 0..self.columns {
            if self.numeric_alignment(column) != Alignment::Decimal {
                continue;
            }
            let mut max_int = 0;
            let mut max_frac = 0;
            let mut any_point = false;
            for row in self.rows() {
                let Cell::Text(text) = &row[column] else {
                    continue;
                };
                // Merge origins span several columns; they don't take part
                // in single-column decimal alignment.
                if column + 1 < self.columns && row[column + 1].is_merge_left() {
                    continue;
                }
                if !is_numeric(text) {
                    continue;
                }
                let (int_part, frac_part) = match text.split_once('.') {
                    Some((int_part, frac_part)) => (int_part, Some(frac_part)),
                    None => (text.as_str(), None),
                };
                max_int = max_int.max(self.width_mode.measure(int_part));
                if let Some(frac_part) = frac_part {
                    any_point = true;
                    max_frac = max_frac.max(self.width_mode.measure(frac_part));
                }
            }
            self.decimal_positions[column] = max_int;
            self.decimal_widths[column] = max_int + max_frac + usize::from(any_point);
        }
    }

    /// Alignment used for numeric cells in a column.
    fn numeric_alignment(&self, column: usize) -> Alignment {
        match &self.number_alignments {
            Some(overrides) => overrides[column],
            None => self.alignments[column],
        }
    }

    fn resolve_column_widths(
        &self,
        user_widths: Option<&[Option<usize>]>,
    ) -> Result<Vec<usize>, TableError> {
        let mut widths: Vec<usize> = (0..self.columns)
            .map(|column| {
                let content = self
                    .rows()
                    .map(|row| self.column_contribution(row, column))
                    .max()
                    .unwrap_or(0);
                content.max(self.decimal_widths[column]) + 2 * self.cell_padding
            })
            .collect();

        if let Some(user_widths) = user_widths {
            if user_widths.len() != self.columns {
                return Err(TableError::ColumnWidthCount {
                    found: user_widths.len(),
                    expected: self.columns,
                });
            }
            for (column, user_width) in user_widths.iter().enumerate() {
                if let Some(user_width) = *user_width {
                    if user_width < widths[column] {
                        return Err(TableError::ColumnWidthTooSmall {
                            column,
                            given: user_width,
                            minimum: widths[column],
                        });
                    }
                    widths[column] = user_width;
                }
            }
        }
        Ok(widths)
    }

    // --- Merge spans & wrapping ---------------------------------------------

    /// Rendered width of the cell at `column`, including every column it
    /// absorbs through `MergeLeft` and the separators between them.
    fn merged_span(&self, row: &[Cell], column: usize) -> usize {
        let sep_len = self.width_mode.measure(&self.style.col_sep);
        let mut span = self.column_widths[column];
        let mut next = column + 1;
        while next < self.columns && row[next].is_merge_left() {
            span += self.column_widths[next] + sep_len;
            next += 1;
        }
        span
    }

    /// Reflow any cell whose widest line no longer fits its merged span.
    /// Cells that fit are left untouched, embedded newlines included.
    fn wrap_rows(&mut self) {
        let header = self.header.clone().map(|row| self.wrap_row(row));
        let body: Vec<Vec<Cell>> = self
            .body
            .clone()
            .into_iter()
            .map(|row| self.wrap_row(row))
            .collect();
        let footer = self.footer.clone().map(|row| self.wrap_row(row));
        self.header = header;
        self.body = body;
        self.footer = footer;
    }

    fn wrap_row(&self, mut row: Vec<Cell>) -> Vec<Cell> {
        for column in 0..row.len() {
            let Cell::Text(text) = &row[column] else {
                continue;
            };
            let inner = self
                .merged_span(&row, column)
                .saturating_sub(2 * self.cell_padding);
            if self.width_mode.widest_line(text) > inner {
                let wrapped = wrap_text(text, inner, self.width_mode).join("\n");
                row[column] = Cell::Text(wrapped);
            }
        }
        row
    }

    // --- Padding & alignment ------------------------------------------------

    /// Pad `text` to exactly `width` display columns.
    ///
    /// `spans_merge` marks a cell that absorbs columns to its right; such a
    /// cell centers plainly, since its column's decimal reservation does not
    /// describe it.
    fn pad(&self, text: &str, width: usize, column: usize, spans_merge: bool) -> String {
        let mut alignment = if is_numeric(text) {
            self.numeric_alignment(column)
        } else {
            self.alignments[column]
        };

        let text = if alignment == Alignment::Decimal {
            let aligned = if is_numeric(text) && !spans_merge {
                self.decimal_pad(text, column)
            } else {
                text.to_string()
            };
            alignment = Alignment::Center;
            aligned
        } else {
            text.to_string()
        };

        let padding = " ".repeat(self.cell_padding);
        let padded = format!("{padding}{text}{padding}");
        let slack = width.saturating_sub(self.width_mode.measure(&padded));
        match alignment {
            Alignment::Left => format!("{padded}{}", " ".repeat(slack)),
            Alignment::Right => format!("{}{padded}", " ".repeat(slack)),
            Alignment::Center | Alignment::Decimal => {
                let before = slack / 2;
                let after = slack - before;
                format!("{}{padded}{}", " ".repeat(before), " ".repeat(after))
            }
        }
    }

    /// Space a numeric value so its decimal point lands at the column's
    /// shared position, filling out to the column's decimal width.
    fn decimal_pad(&self, text: &str, column: usize) -> String {
        let int_part = text.split_once('.').map_or(text, |(int_part, _)| int_part);
        let before = self.decimal_positions[column]
            .saturating_sub(self.width_mode.measure(int_part));
        let after = self.decimal_widths[column]
            .saturating_sub(self.width_mode.measure(text) + before);
        format!("{}{text}{}", " ".repeat(before), " ".repeat(after))
    }

    // --- Line assembly ------------------------------------------------------

    fn separator_glyphs(&self, kind: Separator) -> SeparatorGlyphs<'_> {
        let style = self.style;
        match kind {
            Separator::Top => SeparatorGlyphs {
                left: &style.top_left_corner,
                fill: &style.top_and_bottom_edge,
                heading_cross: &style.heading_col_top_tee,
                cross: &style.top_tee,
                right: &style.top_right_corner,
                top_tee: &style.top_and_bottom_edge,
                bottom_tee: &style.top_and_bottom_edge,
                heading_top_tee: &style.top_and_bottom_edge,
                heading_bottom_tee: &style.top_and_bottom_edge,
            },
            Separator::Heading => SeparatorGlyphs {
                left: &style.heading_row_left_tee,
                fill: &style.heading_row_sep,
                heading_cross: &style.heading_col_heading_row_cross,
                cross: &style.heading_row_cross,
                right: &style.heading_row_right_tee,
                top_tee: &style.heading_row_top_tee,
                bottom_tee: &style.heading_row_bottom_tee,
                heading_top_tee: &style.heading_col_heading_row_top_tee,
                heading_bottom_tee: &style.heading_col_heading_row_bottom_tee,
            },
            Separator::Row => SeparatorGlyphs {
                left: &style.row_left_tee,
                fill: &style.row_sep,
                heading_cross: &style.heading_col_row_cross,
                cross: &style.col_row_cross,
                right: &style.row_right_tee,
                top_tee: &style.col_row_top_tee,
                bottom_tee: &style.col_row_bottom_tee,
                heading_top_tee: &style.heading_col_row_top_tee,
                heading_bottom_tee: &style.heading_col_row_bottom_tee,
            },
            Separator::Bottom => SeparatorGlyphs {
                left: &style.bottom_left_corner,
                fill: &style.top_and_bottom_edge,
                heading_cross: &style.heading_col_bottom_tee,
                cross: &style.bottom_tee,
                right: &style.bottom_right_corner,
                top_tee: &style.top_and_bottom_edge,
                bottom_tee: &style.top_and_bottom_edge,
                heading_top_tee: &style.top_and_bottom_edge,
                heading_bottom_tee: &style.top_and_bottom_edge,
            },
        }
    }

    /// Whether the boundary after `column` carries the heading column glyphs.
    fn heading_boundary(&self, column: usize) -> bool {
        (column == 0 && self.first_col_heading)
            || (column + 2 == self.columns && self.last_col_heading)
    }

    /// Assemble one separator line, or `None` when the line would be pure
    /// whitespace. Top and bottom edges always render; blank edges are
    /// stripped as blank boundary lines at the end of [`Layout::render`].
    fn separator_line(
        &self,
        kind: Separator,
        above: Option<&[Cell]>,
        below: Option<&[Cell]>,
    ) -> Option<String> {
        let glyphs = self.separator_glyphs(kind);
        // Vertical merges open interior separators, never the outer border.
        let vertical = matches!(kind, Separator::Heading | Separator::Row);
        let below_up = |column: usize| {
            vertical && below.is_some_and(|row| row[column].is_merge_up())
        };

        let mut line = String::new();
        let left_open = self.columns > 0 && below_up(0);
        line.push_str(if left_open {
            self.style.left_and_right_edge.as_str()
        } else {
            glyphs.left
        });

        for column in 0..self.columns {
            let fill = if below_up(column) { " " } else { glyphs.fill };
            line.push_str(&fill.repeat(self.column_widths[column]));

            if column + 1 == self.columns {
                line.push_str(if below_up(column) {
                    self.style.left_and_right_edge.as_str()
                } else {
                    glyphs.right
                });
                break;
            }

            let heading = self.heading_boundary(column);
            let junction = if below_up(column) && below_up(column + 1) {
                // The wall crosses an open span on both sides.
                if heading {
                    self.style.heading_col_sep.as_str()
                } else {
                    self.style.col_sep.as_str()
                }
            } else if below_up(column) {
                glyphs.left
            } else if below_up(column + 1) {
                glyphs.right
            } else {
                let above_open = above.is_some_and(|row| row[column + 1].is_merge_left());
                let below_open = below.is_some_and(|row| row[column + 1].is_merge_left());
                match (above_open, below_open, heading) {
                    (true, true, _) => glyphs.fill,
                    (true, false, false) => glyphs.top_tee,
                    (true, false, true) => glyphs.heading_top_tee,
                    (false, true, false) => glyphs.bottom_tee,
                    (false, true, true) => glyphs.heading_bottom_tee,
                    (false, false, false) => glyphs.cross,
                    (false, false, true) => glyphs.heading_cross,
                }
            };
            line.push_str(junction);
        }

        match kind {
            Separator::Top | Separator::Bottom => Some(line),
            Separator::Heading | Separator::Row => {
                if line.trim().is_empty() {
                    None
                } else {
                    Some(line)
                }
            }
        }
    }

    /// Assemble the output lines for one content row, repeating once per
    /// line of its tallest cell.
    fn content_lines(&self, row: &[Cell], lines: &mut Vec<String>) {
        let height = row
            .iter()
            .map(|cell| cell.text().lines().count())
            .max()
            .unwrap_or(0)
            .max(1);

        for line_index in 0..height {
            let mut line = String::new();
            line.push_str(&self.style.left_and_right_edge);
            for column in 0..self.columns {
                if !row[column].is_merge_left() {
                    let text = row[column].text().lines().nth(line_index).unwrap_or("");
                    let span = self.merged_span(row, column);
                    let spans_merge =
                        column + 1 < self.columns && row[column + 1].is_merge_left();
                    line.push_str(&self.pad(text, span, column, spans_merge));
                }

                if column + 1 == self.columns {
                    line.push_str(&self.style.left_and_right_edge);
                } else if row[column + 1].is_merge_left() {
                    // The merged span flows through this boundary.
                } else if self.heading_boundary(column) {
                    line.push_str(&self.style.heading_col_sep);
                } else {
                    line.push_str(&self.style.col_sep);
                }
            }
            lines.push(line);
        }
    }

    /// Render the table to its final string.
    pub(crate) fn render(&self) -> String {
        let _span = tracing::debug_span!(
            "table_render",
            columns = self.columns,
            body_rows = self.body.len()
        )
        .entered();

        let header = self.header.as_deref();
        let footer = self.footer.as_deref();
        let first_body = self.body.first().map(Vec::as_slice);
        let last_body = self.body.last().map(Vec::as_slice);

        let mut lines = Vec::new();

        let first_content = header.or(first_body).or(footer);
        lines.extend(self.separator_line(Separator::Top, None, first_content));

        if let Some(header) = header {
            self.content_lines(header, &mut lines);
            let below = first_body.or(footer);
            lines.extend(self.separator_line(Separator::Heading, Some(header), below));
        }

        for (index, row) in self.body.iter().enumerate() {
            self.content_lines(row, &mut lines);
            if let Some(next) = self.body.get(index + 1) {
                lines.extend(self.separator_line(Separator::Row, Some(row), Some(next)));
            }
        }

        if let Some(footer) = footer {
            let above = last_body.or(header);
            lines.extend(self.separator_line(Separator::Heading, above, Some(footer)));
            self.content_lines(footer, &mut lines);
        }

        let last_content = footer.or(last_body).or(header);
        lines.extend(self.separator_line(Separator::Bottom, last_content, None));

        // Strip blank boundary lines (blank outer edges of border-less styles).
        let start = lines
            .iter()
            .position(|line| !line.trim().is_empty())
            .unwrap_or(lines.len());
        let end = lines
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .map_or(start, |index| index + 1);
        lines[start..end].join("\n")
    }
}
