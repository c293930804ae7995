//! text layout and ruled-paper PDF export.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Local, TimeZone};

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream};

use crate::metrics;
use crate::settings::{FontSettings, FontStyle};

/// Canonical page geometry: one A4 page, in millimetres. Everything on
/// the page, including the wrap width, derives from these two numbers.
pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;

const MM_TO_PT: f64 = 72.0 / 25.4;

const RULE_TOP: f64 = 30.0;
const RULE_GAP: f64 = 10.0;
const RULE_INSET: f64 = 20.0;
const RULE_WIDTH: f64 = 0.5;
const MARGIN_RULE_X: f64 = 30.0;

const TEXT_X: f64 = 40.0;
const TEXT_START_Y: f64 = 40.0;
const RIGHT_MARGIN: f64 = 20.0;

/// Width text is wrapped to, derived from the page rather than declared
/// independently of it.
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - TEXT_X - RIGHT_MARGIN;

const TITLE: &str = "FontForge Handwritten Text";
const TITLE_SIZE: f64 = 16.0;
const CAPTION_SIZE: f64 = 10.0;

// page palette, as rgb fractions
const PAPER: (f64, f64, f64) = (252.0 / 255.0, 249.0 / 255.0, 242.0 / 255.0);
const RULE: (f64, f64, f64) = (200.0 / 255.0, 215.0 / 255.0, 240.0 / 255.0);
const MARGIN_RULE: (f64, f64, f64) = (235.0 / 255.0, 110.0 / 255.0, 110.0 / 255.0);
const INK: (f64, f64, f64) = (70.0 / 255.0, 90.0 / 255.0, 120.0 / 255.0);

/// One wrapped line, placed at a fixed vertical offset on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    /// Baseline offset from the top of the page, in millimetres.
    pub y: f64,
}

/// Wrap `text` to the content width and place each line, advancing by
/// exactly the requested line height. There is no page-break logic;
/// long input runs past the bottom edge.
pub fn layout_lines(text: &str, settings: &FontSettings) -> Vec<PlacedLine> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let size = f64::from(settings.size);
    let mut wrapped = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, size, &mut wrapped);
    }
    let line_height = f64::from(settings.line_height);
    wrapped
        .into_iter()
        .enumerate()
        .map(|(k, text)| PlacedLine {
            text,
            y: TEXT_START_Y + k as f64 * line_height,
        })
        .collect()
}

/// Greedy word wrap of a single paragraph to the content width.
fn wrap_paragraph(paragraph: &str, size: f64, out: &mut Vec<String>) {
    if paragraph.trim().is_empty() {
        // a blank paragraph keeps its line
        out.push(String::new());
        return;
    }
    let mut current = String::new();
    for word in paragraph.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if metrics::text_width(&candidate, size) <= CONTENT_WIDTH {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        if metrics::text_width(word, size) > CONTENT_WIDTH {
            current = break_long_word(word, size, out);
        } else {
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
}

/// Hard-break a word wider than the content width at character
/// boundaries, pushing the full chunks and returning the remainder.
fn break_long_word(word: &str, size: f64, out: &mut Vec<String>) -> String {
    let mut chunk = String::new();
    for c in word.chars() {
        let mut candidate = chunk.clone();
        candidate.push(c);
        if !chunk.is_empty() && metrics::text_width(&candidate, size) > CONTENT_WIDTH {
            out.push(std::mem::take(&mut chunk));
            chunk.push(c);
        } else {
            chunk = candidate;
        }
    }
    chunk
}

/// Render `text` with the given display settings onto a ruled A4 page
/// and return the finished PDF as a data URI, suitable for direct use
/// as a downloadable file. Always succeeds; empty input produces a page
/// with only the backdrop and captions.
pub fn generate_output_pdf(text: &str, settings: &FontSettings) -> String {
    let date = Local::now().format("%Y-%m-%d").to_string();
    let mut doc = build_document(text, settings, &date);
    doc.compress();
    let mut bytes = Vec::new();
    if let Err(e) = doc.save_to(&mut bytes) {
        log::warn!("error writing exported pdf: '{}'", e);
    }
    to_data_uri(&bytes)
}

/// Download name for an exported document, embedding the moment of
/// generation.
pub fn export_file_name<Tz: TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("fontforge_{}.pdf", now.format("%Y%m%d_%H%M%S"))
}

/// Read an uploaded sample PDF and hand it back as a data URI, the form
/// the capture screen previews it in.
pub fn sample_data_uri(path: impl AsRef<Path>) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(to_data_uri(&bytes))
}

fn to_data_uri(bytes: &[u8]) -> String {
    format!("data:application/pdf;base64,{}", base64::encode(bytes))
}

fn build_document(text: &str, settings: &FontSettings, date: &str) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = dictionary! {};
    for (name, base_font) in &[
        ("F1", "Helvetica"),
        ("F2", "Helvetica-Bold"),
        ("F3", "Helvetica-Oblique"),
        ("F4", "Helvetica-BoldOblique"),
    ] {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => *base_font,
        });
        fonts.set(*name, font_id);
    }
    let resources_id = doc.add_object(dictionary! { "Font" => fonts });

    let mut ops = Vec::new();
    append_ruled_background(&mut ops);
    append_text(&mut ops, "F2", TITLE_SIZE, INK, 20.0, 20.0, TITLE);
    append_text(
        &mut ops,
        "F1",
        CAPTION_SIZE,
        INK,
        20.0,
        26.0,
        &format!("Generated on: {}", date),
    );

    let font = body_font(settings);
    let color = settings.color_rgb();
    let size = f64::from(settings.size);
    for line in layout_lines(text, settings) {
        append_text(&mut ops, font, size, color, TEXT_X, line.y, &line.text);
    }

    let content = Content { operations: ops };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            (PAGE_WIDTH * MM_TO_PT).into(),
            (PAGE_HEIGHT * MM_TO_PT).into(),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// The decorative page backdrop: cream fill, horizontal rules at a
/// constant gap, and one red vertical margin rule.
fn append_ruled_background(ops: &mut Vec<Operation>) {
    ops.push(Operation::new("rg", rgb_operands(PAPER)));
    ops.push(Operation::new(
        "re",
        vec![
            0.into(),
            0.into(),
            (PAGE_WIDTH * MM_TO_PT).into(),
            (PAGE_HEIGHT * MM_TO_PT).into(),
        ],
    ));
    ops.push(Operation::new("f", vec![]));

    ops.push(Operation::new("w", vec![(RULE_WIDTH * MM_TO_PT).into()]));
    ops.push(Operation::new("RG", rgb_operands(RULE)));
    let mut rule_y = RULE_TOP;
    while rule_y < PAGE_HEIGHT {
        ops.push(Operation::new("m", vec![x(RULE_INSET), y(rule_y)]));
        ops.push(Operation::new("l", vec![x(PAGE_WIDTH - RULE_INSET), y(rule_y)]));
        rule_y += RULE_GAP;
    }
    ops.push(Operation::new("S", vec![]));

    ops.push(Operation::new("RG", rgb_operands(MARGIN_RULE)));
    ops.push(Operation::new("m", vec![x(MARGIN_RULE_X), y(RULE_TOP)]));
    ops.push(Operation::new(
        "l",
        vec![x(MARGIN_RULE_X), y(PAGE_HEIGHT - RULE_INSET)],
    ));
    ops.push(Operation::new("S", vec![]));
}

fn append_text(
    ops: &mut Vec<Operation>,
    font: &str,
    size: f64,
    color: (f64, f64, f64),
    x_mm: f64,
    y_mm: f64,
    text: &str,
) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("rg", rgb_operands(color)));
    ops.push(Operation::new("Td", vec![x(x_mm), y(y_mm)]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(text)]));
    ops.push(Operation::new("ET", vec![]));
}

fn body_font(settings: &FontSettings) -> &'static str {
    let bold = settings.weight >= 600;
    match (settings.style, bold) {
        (FontStyle::Normal, false) => "F1",
        (FontStyle::Normal, true) => "F2",
        (_, false) => "F3",
        (_, true) => "F4",
    }
}

fn rgb_operands((r, g, b): (f64, f64, f64)) -> Vec<Object> {
    vec![r.into(), g.into(), b.into()]
}

/// Page coordinates are top-down millimetres, like the on-screen
/// preview; PDF user space is bottom-up points.
fn x(mm: f64) -> Object {
    (mm * MM_TO_PT).into()
}

fn y(mm: f64) -> Object {
    ((PAGE_HEIGHT - mm) * MM_TO_PT).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn settings() -> FontSettings {
        FontSettings::default()
    }

    #[test]
    fn lines_advance_by_exactly_the_line_height() {
        let mut settings = settings();
        settings.line_height = 18;
        let text = "sphinx of black quartz judge my vow ".repeat(8);
        let lines = layout_lines(&text, &settings);
        assert!(lines.len() > 2, "expected the input to wrap");
        for (k, line) in lines.iter().enumerate() {
            assert_eq!(line.y, TEXT_START_Y + k as f64 * 18.0);
        }
    }

    #[test]
    fn empty_input_lays_out_no_lines() {
        assert!(layout_lines("", &settings()).is_empty());
        assert!(layout_lines("   \n  ", &settings()).is_empty());
    }

    #[test]
    fn embedded_newlines_are_honored() {
        let lines = layout_lines("one\ntwo\n\nthree", &settings());
        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["one", "two", "", "three"]);
    }

    #[test]
    fn wrapped_lines_fit_the_content_width() {
        let text = "pack my box with five dozen liquor jugs ".repeat(10);
        for line in layout_lines(&text, &settings()) {
            assert!(crate::metrics::text_width(&line.text, 12.0) <= CONTENT_WIDTH);
        }
    }

    #[test]
    fn over_long_words_are_hard_broken() {
        let text = "x".repeat(400);
        let lines = layout_lines(&text, &settings());
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(crate::metrics::text_width(&line.text, 12.0) <= CONTENT_WIDTH);
        }
    }

    #[test]
    fn export_is_a_pdf_data_uri() {
        let uri = generate_output_pdf("The quick brown fox", &settings());
        let payload = uri
            .strip_prefix("data:application/pdf;base64,")
            .expect("missing data uri prefix");
        let bytes = base64::decode(payload).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn empty_input_still_produces_a_document() {
        let uri = generate_output_pdf("", &settings());
        assert!(uri.starts_with("data:application/pdf;base64,"));
    }

    #[test]
    fn bold_weight_and_style_pick_the_right_face() {
        let mut s = settings();
        assert_eq!(body_font(&s), "F1");
        s.weight = 700;
        assert_eq!(body_font(&s), "F2");
        s.style = FontStyle::Italic;
        assert_eq!(body_font(&s), "F4");
        s.weight = 400;
        assert_eq!(body_font(&s), "F3");
    }

    #[test]
    fn file_name_embeds_the_timestamp() {
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 14, 30, 0).unwrap();
        assert_eq!(export_file_name(now), "fontforge_20260829_143000.pdf");
    }

    #[test]
    fn wrap_width_derives_from_the_page() {
        assert_eq!(CONTENT_WIDTH, PAGE_WIDTH - TEXT_X - RIGHT_MARGIN);
    }
}
