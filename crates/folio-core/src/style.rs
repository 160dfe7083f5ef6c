//! Parsing and formatting of the inline style values the page round-trips.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("empty style value")]
    Empty,
    #[error("not a pixel length: `{0}`")]
    NotPixels(String),
}

/// Parse a CSS pixel length such as `"120px"` or `"-3.5px"`. A bare number
/// is accepted as pixels.
pub fn parse_px(value: &str) -> Result<f32, StyleError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StyleError::Empty);
    }
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    number
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| StyleError::NotPixels(trimmed.to_string()))
}

/// Offset fallback: anything unparsable is treated as zero.
#[inline]
pub fn px_or_zero(value: &str) -> f32 {
    parse_px(value).unwrap_or(0.0)
}

/// Card offset from an inline `left`/`top` value. An unset value defers to
/// the element's layout offset; a malformed one is zero.
#[inline]
pub fn inline_offset_or(value: &str, layout: f32) -> f32 {
    if value.trim().is_empty() {
        layout
    } else {
        px_or_zero(value)
    }
}

/// Size fallback: a missing or zero measurement becomes `fallback`.
#[inline]
pub fn size_or_fallback(measured: f32, fallback: f32) -> f32 {
    if measured.is_finite() && measured > 0.0 {
        measured
    } else {
        fallback
    }
}

#[inline]
pub fn format_px(value: f32) -> String {
    format!("{}px", value)
}

/// Value for the `transform` property of a card.
pub fn transform_css(rotation_deg: f32, scale: f32) -> String {
    format!("rotate({}deg) scale({})", rotation_deg, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_px_suffix_and_bare_numbers() {
        assert_eq!(parse_px("120px"), Ok(120.0));
        assert_eq!(parse_px(" 12.5px "), Ok(12.5));
        assert_eq!(parse_px("-4"), Ok(-4.0));
    }

    #[test]
    fn rejects_other_units() {
        assert_eq!(parse_px(""), Err(StyleError::Empty));
        assert!(matches!(parse_px("3em"), Err(StyleError::NotPixels(_))));
        assert_eq!(px_or_zero("auto"), 0.0);
    }

    #[test]
    fn inline_offset_prefers_style_then_layout() {
        assert_eq!(inline_offset_or("320px", 40.0), 320.0);
        assert_eq!(inline_offset_or("", 40.0), 40.0);
        assert_eq!(inline_offset_or("calc(10% + 2px)", 40.0), 0.0);
    }

    #[test]
    fn zero_size_falls_back() {
        assert_eq!(size_or_fallback(0.0, 200.0), 200.0);
        assert_eq!(size_or_fallback(f32::NAN, 200.0), 200.0);
        assert_eq!(size_or_fallback(150.0, 200.0), 150.0);
    }

    #[test]
    fn transform_string() {
        assert_eq!(transform_css(0.0, 1.0), "rotate(0deg) scale(1)");
        assert_eq!(transform_css(-2.5, 1.05), "rotate(-2.5deg) scale(1.05)");
    }
}
