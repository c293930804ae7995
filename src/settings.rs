//! font display settings.

/// Advisory ranges enforced only by UI input widgets, never here.
pub const WEIGHT_RANGE: (u32, u32) = (300, 700);
pub const SIZE_RANGE: (u32, u32) = (10, 24);
pub const LINE_HEIGHT_RANGE: (u32, u32) = (12, 36);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique,
}

impl Default for FontStyle {
    fn default() -> FontStyle {
        FontStyle::Normal
    }
}

/// How previewed and exported text is displayed. Sizes are in points,
/// line height in millimetres of vertical advance per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSettings {
    pub style: FontStyle,
    pub weight: u32,
    pub size: u32,
    pub line_height: u32,
    /// `#rrggbb`; malformed values fall back to black when rendered.
    pub color: String,
}

impl Default for FontSettings {
    fn default() -> FontSettings {
        FontSettings {
            style: FontStyle::Normal,
            weight: 400,
            size: 12,
            line_height: 14,
            color: "#000000".into(),
        }
    }
}

impl FontSettings {
    /// The display color as rgb components in `0.0..=1.0`.
    pub fn color_rgb(&self) -> (f64, f64, f64) {
        match parse_hex(&self.color) {
            Some(rgb) => rgb,
            None => {
                log::warn!("malformed display color '{}', using black", self.color);
                (0.0, 0.0, 0.0)
            }
        }
    }
}

fn parse_hex(color: &str) -> Option<(f64, f64, f64)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .ok()
            .map(|v| f64::from(v) / 255.0)
    };
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = FontSettings::default();
        assert_eq!(settings.style, FontStyle::Normal);
        assert_eq!(settings.weight, 400);
        assert_eq!(settings.size, 12);
        assert_eq!(settings.line_height, 14);
        assert_eq!(settings.color, "#000000");
    }

    #[test]
    fn parses_hex_color() {
        let settings = FontSettings {
            color: "#ff8000".into(),
            ..Default::default()
        };
        let (r, g, b) = settings.color_rgb();
        assert!((r - 1.0).abs() < 1e-9);
        assert!((g - 128.0 / 255.0).abs() < 1e-9);
        assert!(b.abs() < 1e-9);
    }

    #[test]
    fn malformed_color_falls_back_to_black() {
        for bad in &["red", "#fff", "#zzzzzz", ""] {
            let settings = FontSettings {
                color: (*bad).into(),
                ..Default::default()
            };
            assert_eq!(settings.color_rgb(), (0.0, 0.0, 0.0));
        }
    }

    #[test]
    fn style_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FontStyle::Oblique).unwrap(),
            "\"oblique\""
        );
    }
}
