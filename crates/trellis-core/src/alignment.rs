#![forbid(unsafe_code)]

//! Column alignment types.
//!
//! [`Alignment`] selects how cell text is placed within its column.
//! [`AlignmentSpec`] is the "one value or one per column" shape accepted by
//! the rendering options: a single alignment is broadcast to every column,
//! a list must match the table's column count exactly.
//!
//! # Example
//! ```
//! use trellis_core::{Alignment, AlignmentSpec};
//!
//! // Broadcast to every column.
//! let spec: AlignmentSpec = Alignment::Right.into();
//! assert_eq!(spec.resolve(3).unwrap(), vec![Alignment::Right; 3]);
//!
//! // One per column.
//! let spec: AlignmentSpec = vec![Alignment::Left, Alignment::Center].into();
//! assert!(spec.resolve(3).is_none());
//! ```

/// Horizontal placement of cell text within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Flush against the left padding.
    Left,
    /// Centered, with the extra space (when odd) on the right.
    #[default]
    Center,
    /// Flush against the right padding.
    Right,
    /// Numeric values line up on their decimal point; everything else
    /// falls back to [`Alignment::Center`].
    Decimal,
}

/// Alignment for all columns at once or per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignmentSpec {
    /// The same alignment for every column.
    Uniform(Alignment),
    /// One alignment per column; the length must match the column count.
    PerColumn(Vec<Alignment>),
}

impl AlignmentSpec {
    /// Expand to one alignment per column.
    ///
    /// Returns `None` when a per-column list does not match `columns`;
    /// the caller turns that into a count-mismatch error.
    #[must_use]
    pub fn resolve(&self, columns: usize) -> Option<Vec<Alignment>> {
        match self {
            AlignmentSpec::Uniform(alignment) => Some(vec![*alignment; columns]),
            AlignmentSpec::PerColumn(list) if list.len() == columns => Some(list.clone()),
            AlignmentSpec::PerColumn(_) => None,
        }
    }

    /// Number of entries a per-column list carries (for error reporting).
    #[must_use]
    pub fn len(&self, columns: usize) -> usize {
        match self {
            AlignmentSpec::Uniform(_) => columns,
            AlignmentSpec::PerColumn(list) => list.len(),
        }
    }
}

impl From<Alignment> for AlignmentSpec {
    fn from(alignment: Alignment) -> Self {
        AlignmentSpec::Uniform(alignment)
    }
}

impl From<Vec<Alignment>> for AlignmentSpec {
    fn from(list: Vec<Alignment>) -> Self {
        AlignmentSpec::PerColumn(list)
    }
}

impl From<&[Alignment]> for AlignmentSpec {
    fn from(list: &[Alignment]) -> Self {
        AlignmentSpec::PerColumn(list.to_vec())
    }
}

impl<const N: usize> From<[Alignment; N]> for AlignmentSpec {
    fn from(list: [Alignment; N]) -> Self {
        AlignmentSpec::PerColumn(list.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_center() {
        assert_eq!(Alignment::default(), Alignment::Center);
    }

    #[test]
    fn uniform_broadcasts() {
        let spec = AlignmentSpec::from(Alignment::Left);
        assert_eq!(spec.resolve(4).unwrap(), vec![Alignment::Left; 4]);
    }

    #[test]
    fn per_column_exact_length() {
        let spec = AlignmentSpec::from(vec![Alignment::Left, Alignment::Right]);
        assert_eq!(
            spec.resolve(2).unwrap(),
            vec![Alignment::Left, Alignment::Right]
        );
    }

    #[test]
    fn per_column_wrong_length_rejected() {
        let spec = AlignmentSpec::from([Alignment::Left; 3]);
        assert!(spec.resolve(5).is_none());
        assert_eq!(spec.len(5), 3);
    }

    #[test]
    fn uniform_len_matches_columns() {
        let spec = AlignmentSpec::from(Alignment::Decimal);
        assert_eq!(spec.len(7), 7);
    }
}
