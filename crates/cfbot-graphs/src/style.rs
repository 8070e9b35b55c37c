//! Shared chart dimensions and look.

use crate::utils::parse_color;
use cfbot_config::GraphsConfig;
use plotters::style::RGBColor;

/// Chart appearance shared by every renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Whether to draw grid lines.
    pub enable_grid: bool,
    /// Background fill.
    pub background: RGBColor,
}

impl ChartStyle {
    pub(crate) const MARGIN: i32 = 16;
    pub(crate) const FONT_FAMILY: &'static str = "sans-serif";
    pub(crate) const CAPTION_FONT_SIZE: i32 = 26;
    pub(crate) const LABEL_FONT_SIZE: i32 = 16;
    pub(crate) const X_LABEL_AREA_SIZE: u32 = 48;
    pub(crate) const Y_LABEL_AREA_SIZE: u32 = 56;
    pub(crate) const LINE_WIDTH: u32 = 2;
    pub(crate) const LEGEND_SWATCH: i32 = 20;

    /// Builds the style from the `graphs` configuration section.
    pub fn from_config(config: &GraphsConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            enable_grid: config.enable_grid,
            background: parse_color(&config.background),
        }
    }

    /// A zeroed RGB buffer sized for this chart.
    pub(crate) fn buffer(&self) -> Vec<u8> {
        vec![0u8; self.width as usize * self.height as usize * 3]
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from_config(&GraphsConfig::default())
    }
}
