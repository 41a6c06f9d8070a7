#![forbid(unsafe_code)]

//! Built-in style presets.
//!
//! Each preset is a fixed glyph string decoded through
//! [`Style::from_glyphs`]. Names follow the line weights used for the outer
//! border / heading separators / row separators; `compact` variants drop the
//! separator between body rows, `box` variants draw every column boundary.
//!
//! # Example
//! ```
//! use trellis_style::{Style, StylePreset};
//!
//! let style = Style::preset(StylePreset::DoubleBox);
//! assert_eq!(style.top_left_corner, "╔");
//!
//! // The default style: double outer border, thin heading separator.
//! assert_eq!(Style::default(), Style::preset(StylePreset::DoubleThinCompact));
//! ```

use crate::style::Style;

const THIN: &str = "┌─┬─┐││ ├─┼─┤├─┼─┤└┴─┘────┬┴┬┴";
const THIN_BOX: &str = "┌─┬┬┐│││├─┼┼┤├─┼┼┤└┴┴┘┬┴┬┴┬┴┬┴";
const THIN_ROUNDED: &str = "╭─┬─╮││ ├─┼─┤├─┼─┤╰┴─╯────┬┴┬┴";
const THIN_COMPACT: &str = "┌─┬─┐││ ├─┼─┤     └┴─┘  ──  ┬┴";
const THIN_COMPACT_ROUNDED: &str = "╭─┬─╮││ ├─┼─┤     ╰┴─╯  ──  ┬┴";
const THIN_THICK: &str = "┌─┬─┐││ ┝━┿━┥├─┼─┤└┴─┘──━━┬┴┯┷";
const THIN_THICK_ROUNDED: &str = "╭─┬─╮││ ┝━┿━┥├─┼─┤╰┴─╯──━━┬┴┯┷";
const THIN_DOUBLE: &str = "┌─┬─┐││ ╞═╪═╡├─┼─┤└┴─┘──══┬┴╤╧";
const THIN_DOUBLE_ROUNDED: &str = "╭─┬─╮││ ╞═╪═╡├─┼─┤╰┴─╯──══┬┴╤╧";
const THICK: &str = "┏━┳━┓┃┃ ┣━╋━┫┣━╋━┫┗┻━┛━━━━┳┻┳┻";
const THICK_BOX: &str = "┏━┳┳┓┃┃┃┣━╋╋┫┣━╋╋┫┗┻┻┛┳┻┳┻┳┻┳┻";
const THICK_COMPACT: &str = "┏━┳━┓┃┃ ┣━╋━┫     ┗┻━┛  ━━  ┳┻";
const DOUBLE: &str = "╔═╦═╗║║ ╠═╬═╣╠═╬═╣╚╩═╝════╦╩╦╩";
const DOUBLE_BOX: &str = "╔═╦╦╗║║║╠═╬╬╣╠═╬╬╣╚╩╩╝╦╩╦╩╦╩╦╩";
const DOUBLE_COMPACT: &str = "╔═╦═╗║║ ╠═╬═╣     ╚╩═╝  ══  ╦╩";
const DOUBLE_THIN_COMPACT: &str = "╔═╦═╗║║ ╟─╫─╢     ╚╩═╝  ──  ╥╨";
const DOUBLE_THIN_BOX: &str = "╔═╦╤╗║║│╠═╬╪╣╟─╫┼╢╚╩╧╝┬┴╤╧╥╨╦╩";
const MINIMALIST: &str = " ───  │  ━━━  ───  ── ──━━──━━";
const BORDERLESS: &str = "      ┃  ━                    ";
const SIMPLE: &str = " ═    ║  ═                    ";
const ASCII: &str = "+-+-+|| +-+-++-+-+++-+----++++";
const ASCII_BOX: &str = "+-+++|||+-++++-+++++++++++++++";
const ASCII_COMPACT: &str = "+-+-+|| +-+-+     ++-+  --  ++";
const ASCII_DOUBLE: &str = "+-+-+|| +=+=++-+-+++-+--==++++";
const ASCII_MINIMALIST: &str = " ---  |  ===  ---  -- --==--==";
const ASCII_BORDERLESS: &str = "      |  -                    ";
const ASCII_SIMPLE: &str = " =    |  =                    ";
const ASCII_ROUNDED: &str = "/===\\|| |=|=||-|-|\\|=/--==||||";
const ASCII_ROUNDED_BOX: &str = "/===\\||||=||||-|||\\||/||||||||";
const MARKDOWN: &str = "     ||||-|||           ||  ||";
const PLAIN: &str = "                              ";

/// Built-in style preset identifiers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum StylePreset {
    Thin,
    ThinBox,
    ThinRounded,
    ThinCompact,
    ThinCompactRounded,
    ThinThick,
    ThinThickRounded,
    ThinDouble,
    ThinDoubleRounded,
    Thick,
    ThickBox,
    ThickCompact,
    Double,
    DoubleBox,
    DoubleCompact,
    DoubleThinCompact,
    DoubleThinBox,
    Minimalist,
    Borderless,
    Simple,
    Ascii,
    AsciiBox,
    AsciiCompact,
    AsciiDouble,
    AsciiMinimalist,
    AsciiBorderless,
    AsciiSimple,
    AsciiRounded,
    AsciiRoundedBox,
    Markdown,
    Plain,
}

impl StylePreset {
    /// Every preset, in catalog order.
    pub const ALL: &'static [StylePreset] = &[
        StylePreset::Thin,
        StylePreset::ThinBox,
        StylePreset::ThinRounded,
        StylePreset::ThinCompact,
        StylePreset::ThinCompactRounded,
        StylePreset::ThinThick,
        StylePreset::ThinThickRounded,
        StylePreset::ThinDouble,
        StylePreset::ThinDoubleRounded,
        StylePreset::Thick,
        StylePreset::ThickBox,
        StylePreset::ThickCompact,
        StylePreset::Double,
        StylePreset::DoubleBox,
        StylePreset::DoubleCompact,
        StylePreset::DoubleThinCompact,
        StylePreset::DoubleThinBox,
        StylePreset::Minimalist,
        StylePreset::Borderless,
        StylePreset::Simple,
        StylePreset::Ascii,
        StylePreset::AsciiBox,
        StylePreset::AsciiCompact,
        StylePreset::AsciiDouble,
        StylePreset::AsciiMinimalist,
        StylePreset::AsciiBorderless,
        StylePreset::AsciiSimple,
        StylePreset::AsciiRounded,
        StylePreset::AsciiRoundedBox,
        StylePreset::Markdown,
        StylePreset::Plain,
    ];

    /// Catalog name of this preset.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            StylePreset::Thin => "thin",
            StylePreset::ThinBox => "thin_box",
            StylePreset::ThinRounded => "thin_rounded",
            StylePreset::ThinCompact => "thin_compact",
            StylePreset::ThinCompactRounded => "thin_compact_rounded",
            StylePreset::ThinThick => "thin_thick",
            StylePreset::ThinThickRounded => "thin_thick_rounded",
            StylePreset::ThinDouble => "thin_double",
            StylePreset::ThinDoubleRounded => "thin_double_rounded",
            StylePreset::Thick => "thick",
            StylePreset::ThickBox => "thick_box",
            StylePreset::ThickCompact => "thick_compact",
            StylePreset::Double => "double",
            StylePreset::DoubleBox => "double_box",
            StylePreset::DoubleCompact => "double_compact",
            StylePreset::DoubleThinCompact => "double_thin_compact",
            StylePreset::DoubleThinBox => "double_thin_box",
            StylePreset::Minimalist => "minimalist",
            StylePreset::Borderless => "borderless",
            StylePreset::Simple => "simple",
            StylePreset::Ascii => "ascii",
            StylePreset::AsciiBox => "ascii_box",
            StylePreset::AsciiCompact => "ascii_compact",
            StylePreset::AsciiDouble => "ascii_double",
            StylePreset::AsciiMinimalist => "ascii_minimalist",
            StylePreset::AsciiBorderless => "ascii_borderless",
            StylePreset::AsciiSimple => "ascii_simple",
            StylePreset::AsciiRounded => "ascii_rounded",
            StylePreset::AsciiRoundedBox => "ascii_rounded_box",
            StylePreset::Markdown => "markdown",
            StylePreset::Plain => "plain",
        }
    }

    /// Positional glyph string this preset decodes from.
    #[must_use]
    pub fn glyphs(self) -> &'static str {
        match self {
            StylePreset::Thin => THIN,
            StylePreset::ThinBox => THIN_BOX,
            StylePreset::ThinRounded => THIN_ROUNDED,
            StylePreset::ThinCompact => THIN_COMPACT,
            StylePreset::ThinCompactRounded => THIN_COMPACT_ROUNDED,
            StylePreset::ThinThick => THIN_THICK,
            StylePreset::ThinThickRounded => THIN_THICK_ROUNDED,
            StylePreset::ThinDouble => THIN_DOUBLE,
            StylePreset::ThinDoubleRounded => THIN_DOUBLE_ROUNDED,
            StylePreset::Thick => THICK,
            StylePreset::ThickBox => THICK_BOX,
            StylePreset::ThickCompact => THICK_COMPACT,
            StylePreset::Double => DOUBLE,
            StylePreset::DoubleBox => DOUBLE_BOX,
            StylePreset::DoubleCompact => DOUBLE_COMPACT,
            StylePreset::DoubleThinCompact => DOUBLE_THIN_COMPACT,
            StylePreset::DoubleThinBox => DOUBLE_THIN_BOX,
            StylePreset::Minimalist => MINIMALIST,
            StylePreset::Borderless => BORDERLESS,
            StylePreset::Simple => SIMPLE,
            StylePreset::Ascii => ASCII,
            StylePreset::AsciiBox => ASCII_BOX,
            StylePreset::AsciiCompact => ASCII_COMPACT,
            StylePreset::AsciiDouble => ASCII_DOUBLE,
            StylePreset::AsciiMinimalist => ASCII_MINIMALIST,
            StylePreset::AsciiBorderless => ASCII_BORDERLESS,
            StylePreset::AsciiSimple => ASCII_SIMPLE,
            StylePreset::AsciiRounded => ASCII_ROUNDED,
            StylePreset::AsciiRoundedBox => ASCII_ROUNDED_BOX,
            StylePreset::Markdown => MARKDOWN,
            StylePreset::Plain => PLAIN,
        }
    }
}

impl Style {
    /// Build the glyph table for a preset.
    #[must_use]
    pub fn preset(preset: StylePreset) -> Self {
        let style =
            Self::from_glyphs(preset.glyphs()).expect("preset glyph strings fit the style table");
        match preset {
            // Plain drops the outer edge columns entirely rather than
            // rendering them as spaces.
            StylePreset::Plain => Style {
                left_and_right_edge: String::new(),
                ..style
            },
            _ => style,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::preset(StylePreset::DoubleThinCompact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::GLYPH_COUNT;

    #[test]
    fn every_preset_is_exactly_full_length() {
        for preset in StylePreset::ALL {
            assert_eq!(
                preset.glyphs().chars().count(),
                GLYPH_COUNT,
                "preset {} has the wrong glyph count",
                preset.name()
            );
        }
    }

    #[test]
    fn every_preset_decodes() {
        for preset in StylePreset::ALL {
            let style = Style::preset(*preset);
            assert_eq!(style.top_left_corner.chars().count(), 1);
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = StylePreset::ALL.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StylePreset::ALL.len());
    }

    #[test]
    fn double_thin_compact_glyphs() {
        let style = Style::preset(StylePreset::DoubleThinCompact);
        assert_eq!(style.top_left_corner, "╔");
        assert_eq!(style.heading_col_top_tee, "╦");
        assert_eq!(style.heading_col_sep, "║");
        assert_eq!(style.col_sep, " ");
        assert_eq!(style.heading_row_left_tee, "╟");
        assert_eq!(style.heading_col_heading_row_cross, "╫");
        assert_eq!(style.row_sep, " ");
        assert_eq!(style.heading_col_heading_row_top_tee, "╥");
        assert_eq!(style.heading_col_heading_row_bottom_tee, "╨");
    }

    #[test]
    fn double_thin_box_merge_glyphs() {
        let style = Style::preset(StylePreset::DoubleThinBox);
        assert_eq!(style.col_row_top_tee, "┬");
        assert_eq!(style.col_row_bottom_tee, "┴");
        assert_eq!(style.heading_row_top_tee, "╤");
        assert_eq!(style.heading_row_bottom_tee, "╧");
        assert_eq!(style.heading_col_row_top_tee, "╥");
        assert_eq!(style.heading_col_row_bottom_tee, "╨");
        assert_eq!(style.heading_col_heading_row_top_tee, "╦");
        assert_eq!(style.heading_col_heading_row_bottom_tee, "╩");
    }

    #[test]
    fn markdown_has_no_outer_border() {
        let style = Style::preset(StylePreset::Markdown);
        assert_eq!(style.top_left_corner, " ");
        assert_eq!(style.top_and_bottom_edge, " ");
        assert_eq!(style.left_and_right_edge, "|");
        assert_eq!(style.heading_row_sep, "-");
    }

    #[test]
    fn plain_has_no_borders_at_all() {
        let style = Style::preset(StylePreset::Plain);
        assert_eq!(style.left_and_right_edge, "");
        assert_eq!(style.col_sep, " ");
        assert_eq!(style.heading_row_sep, " ");
        assert_eq!(style.top_and_bottom_edge, " ");
    }

    #[test]
    fn default_is_double_thin_compact() {
        assert_eq!(Style::default(), Style::preset(StylePreset::DoubleThinCompact));
    }
}
