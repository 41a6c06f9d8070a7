#![forbid(unsafe_code)]

//! Width-aware text wrapping.
//!
//! Wrapping reflows text into lines no wider than a cell's inner span. It
//! breaks at whitespace and never inside a word, unless a single word alone
//! exceeds the span, in which case the word is broken at grapheme cluster
//! boundaries (an emoji or ZWJ sequence is never split).
//!
//! All whitespace, including embedded newlines, is treated as a soft break:
//! wrapping reflows the whole cell. Callers that want to preserve manual
//! line breaks simply skip wrapping when the text already fits.
//!
//! # Example
//! ```
//! use trellis_text::{WidthMode, wrap_text};
//!
//! let lines = wrap_text("Hello world foo bar", 10, WidthMode::Unicode);
//! assert_eq!(lines, vec!["Hello", "world foo", "bar"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::width::WidthMode;

/// Wrap `text` into lines of display width at most `width`.
///
/// Whitespace at a break point is dropped; trailing whitespace is trimmed
/// from every line. A `width` of 0 disables wrapping. Always returns at
/// least one line.
#[must_use]
pub fn wrap_text(text: &str, width: usize, mode: WidthMode) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    // Newlines and tabs become soft breaks.
    let normalized: String = text
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in split_words(&normalized) {
        let word_width = mode.measure(&word);

        // The chunk fits on the current line
        if current_width + word_width <= width {
            current_line.push_str(&word);
            current_width += word_width;
            continue;
        }

        if !current_line.is_empty() {
            lines.push(finalize_line(&current_line));
            current_line.clear();
            current_width = 0;
        }

        // Whitespace at the break point is consumed by the break itself
        if word.chars().all(char::is_whitespace) {
            continue;
        }

        if word_width > width {
            wrap_long_word(&word, width, mode, &mut lines, &mut current_line, &mut current_width);
        } else {
            current_line.push_str(&word);
            current_width = word_width;
        }
    }

    if !current_line.is_empty() {
        lines.push(finalize_line(&current_line));
    }

    // Ensure at least one line
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Break a word that exceeds the width limit at grapheme boundaries.
fn wrap_long_word(
    word: &str,
    width: usize,
    mode: WidthMode,
    lines: &mut Vec<String>,
    current_line: &mut String,
    current_width: &mut usize,
) {
    for grapheme in word.graphemes(true) {
        let grapheme_width = mode.measure(grapheme);

        if *current_width + grapheme_width > width && !current_line.is_empty() {
            lines.push(finalize_line(current_line));
            current_line.clear();
            *current_width = 0;
        }

        // Skip whitespace landing at the start of a fresh line
        if *current_width == 0 && grapheme.trim().is_empty() {
            continue;
        }

        current_line.push_str(grapheme);
        *current_width += grapheme_width;
    }
}

/// Split text into alternating runs of whitespace and non-whitespace.
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_whitespace = false;

    for grapheme in text.graphemes(true) {
        let is_ws = grapheme.chars().all(char::is_whitespace);
        if is_ws != in_whitespace && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push_str(grapheme);
        in_whitespace = is_ws;
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn finalize_line(line: &str) -> String {
    line.trim_end().to_string()
}
