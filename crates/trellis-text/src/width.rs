#![forbid(unsafe_code)]

//! Display-width measurement.
//!
//! Terminal cells are not code points: CJK ideographs occupy two columns,
//! combining marks occupy none. [`WidthMode`] selects between east-asian-width
//! aware measurement and a plain code-point count, so callers that target
//! width-naive consumers can opt out of the Unicode tables.
//!
//! # Example
//! ```
//! use trellis_text::WidthMode;
//!
//! assert_eq!(WidthMode::Unicode.measure("你好"), 4);
//! assert_eq!(WidthMode::CodePoints.measure("你好"), 2);
//! assert_eq!(WidthMode::Unicode.measure(""), 0);
//! ```

use unicode_width::UnicodeWidthStr;

/// How text width is measured, in display columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthMode {
    /// East-asian-width aware measurement: wide glyphs count 2 columns,
    /// zero-width code points count 0.
    #[default]
    Unicode,
    /// One column per code point, regardless of how terminals render it.
    CodePoints,
}

impl WidthMode {
    /// Measure the display width of `text`.
    ///
    /// Always non-negative; the empty string measures 0.
    #[must_use]
    pub fn measure(self, text: &str) -> usize {
        match self {
            WidthMode::Unicode => text.width(),
            WidthMode::CodePoints => text.chars().count(),
        }
    }

    /// Width of the widest newline-delimited line in `text`.
    ///
    /// The empty string measures 0.
    #[must_use]
    pub fn widest_line(self, text: &str) -> usize {
        text.lines().map(|line| self.measure(line)).max().unwrap_or(0)
    }
}

/// Calculate the display width of text in cells.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Whether `text` reads as a plain number: after removing at most one `.`,
/// a non-empty remainder of Unicode numeric characters.
///
/// The test is intentionally not ASCII-only, so full-width digits qualify.
#[must_use]
pub fn is_numeric(text: &str) -> bool {
    let stripped = text.replacen('.', "", 1);
    !stripped.is_empty() && stripped.chars().all(char::is_numeric)
}
