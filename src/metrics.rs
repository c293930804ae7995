//! deterministic text measurement for the export layout.
//!
//! The exported page uses the standard Helvetica faces, whose advance
//! widths are fixed by the font program, so wrapping can be computed
//! without rasterizing anything.

const PT_TO_MM: f64 = 25.4 / 72.0;

/// Advance width used for characters outside the table.
const FALLBACK_WIDTH: u16 = 600;

/// Helvetica advance widths for the printable ASCII range (0x20..=0x7e),
/// in 1/1000 em, taken from the face's AFM.
#[rustfmt::skip]
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

pub(crate) fn advance(c: char) -> u16 {
    let code = c as u32;
    if (0x20..=0x7e).contains(&code) {
        ASCII_WIDTHS[(code - 0x20) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

/// Width of `text` in millimetres at the given point size.
pub(crate) fn text_width(text: &str, size_pt: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(advance(c))).sum();
    f64::from(units) / 1000.0 * size_pt * PT_TO_MM
}
