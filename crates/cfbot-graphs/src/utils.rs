//! Graph utility functions and helpers.

use cfbot_common::{CfBotError, Result};
use image::{DynamicImage, ImageFormat, RgbImage};
use plotters::style::RGBColor;
use std::io::Cursor;

/// Line and bar colors, cycled per series.
pub const SERIES_COLORS: [RGBColor; 8] = [
    RGBColor(31, 119, 180),  // Blue
    RGBColor(255, 127, 14),  // Orange
    RGBColor(44, 160, 44),   // Green
    RGBColor(214, 39, 40),   // Red
    RGBColor(148, 103, 189), // Purple
    RGBColor(140, 86, 75),   // Brown
    RGBColor(227, 119, 194), // Pink
    RGBColor(127, 127, 127), // Gray
];

/// Color for the `index`-th series.
pub const fn series_color(index: usize) -> RGBColor {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Parse a `#rrggbb` string to an [`RGBColor`], defaulting to black.
pub fn parse_color(color_str: &str) -> RGBColor {
    if let Some(hex) = color_str.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    RGBColor(0, 0, 0)
}

/// Encode a raw RGB buffer as PNG.
pub fn encode_png(width: u32, height: u32, buffer: Vec<u8>) -> Result<Vec<u8>> {
    let image = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| CfBotError::graph("Image buffer does not match chart dimensions"))?;

    let mut output = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut output, ImageFormat::Png)
        .map_err(|e| CfBotError::graph_with_source("PNG encoding failed", e))?;

    Ok(output.into_inner())
}

/// Wrap a plotters failure with what was being drawn.
pub(crate) fn plot_error<E>(context: &'static str) -> impl FnOnce(E) -> CfBotError
where
    E: std::error::Error + Send + Sync + 'static,
{
    move |e| CfBotError::graph_with_source(context, e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#AA0000"), RGBColor(170, 0, 0));
        assert_eq!(parse_color("#77ddbb"), RGBColor(119, 221, 187));
        assert_eq!(parse_color("AA0000"), RGBColor(0, 0, 0));
        assert_eq!(parse_color("#zzzzzz"), RGBColor(0, 0, 0));
    }

    #[test]
    fn test_series_color_cycles() {
        assert_eq!(series_color(0), series_color(SERIES_COLORS.len()));
        assert_ne!(series_color(0), series_color(1));
    }

    #[test]
    fn test_encode_png() {
        let png = encode_png(2, 2, vec![255; 12]).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_encode_png_rejects_short_buffer() {
        assert!(encode_png(2, 2, vec![0; 3]).is_err());
    }
}
