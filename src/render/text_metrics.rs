use crate::core::TextExtent;

/// Measures label bounds the way a backend will draw them.
///
/// Label placement depends on these bounds, so a backend that draws text
/// should also measure it (see the Pango measurer behind `cairo-backend`).
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent;
}

/// Deterministic, backend-independent text bounds estimate.
///
/// Uses per-glyph-class advance factors and the font size as line height.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtent {
        estimate_text_extent(text, font_size_px)
    }
}

#[must_use]
pub fn estimate_text_extent(text: &str, font_size_px: f64) -> TextExtent {
    if text.is_empty() || !font_size_px.is_finite() || font_size_px <= 0.0 {
        return TextExtent::default();
    }

    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            ch if is_wide(ch) => 1.0,
            _ => 0.58,
        }
    });
    TextExtent::new(to_whole_px(units * font_size_px), to_whole_px(font_size_px))
}

// CJK and Hangul glyphs advance a full em.
fn is_wide(ch: char) -> bool {
    matches!(
        ch,
        '\u{1100}'..='\u{11FF}'
            | '\u{2E80}'..='\u{9FFF}'
            | '\u{AC00}'..='\u{D7AF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{FF00}'..='\u{FFEF}'
    )
}

fn to_whole_px(value: f64) -> u32 {
    value.ceil().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::estimate_text_extent;
    use crate::core::TextExtent;

    #[test]
    fn empty_label_has_no_extent() {
        assert_eq!(estimate_text_extent("", 30.0), TextExtent::default());
    }

    #[test]
    fn hangul_is_wider_than_latin() {
        let latin = estimate_text_extent("ab", 30.0);
        let hangul = estimate_text_extent("일번", 30.0);
        assert!(hangul.width > latin.width);
        assert_eq!(hangul.height, 30);
    }
}
