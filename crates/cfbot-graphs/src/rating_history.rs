//! Rating history comparison chart.
//!
//! One line per handle, drawn over the rank tier bands. The y range comes from
//! the ratings alone; bands are clipped to it and never widen the axis.

use crate::rank::visible_bands;
use crate::style::ChartStyle;
use crate::traits::GraphRenderer;
use crate::utils::{encode_png, plot_error, series_color};
use async_trait::async_trait;
use cfbot_common::{datetime_from_unix, CfBotError, RatingChange, Result};
use chrono::{DateTime, Duration, Utc};
use plotters::prelude::*;
use tracing::debug;

/// Smallest padding added above and below the rating range.
const MIN_Y_PADDING: i32 = 50;

/// One handle's rating line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingLine {
    /// Legend entry.
    pub label: String,
    /// `(update time, new rating)` in contest order.
    pub points: Vec<(DateTime<Utc>, i32)>,
}

impl RatingLine {
    /// Builds a line from `user.rating` results.
    pub fn from_changes(label: impl Into<String>, changes: &[RatingChange]) -> Self {
        let points = changes
            .iter()
            .filter_map(|change| {
                datetime_from_unix(change.rating_update_time_seconds)
                    .map(|time| (time, change.new_rating))
            })
            .collect();

        Self {
            label: label.into(),
            points,
        }
    }
}

/// Data for a rating comparison chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingChart {
    /// Lines in legend order.
    pub lines: Vec<RatingLine>,
}

impl RatingChart {
    /// Creates a chart from its lines.
    pub fn new(lines: Vec<RatingLine>) -> Self {
        Self { lines }
    }

    fn points(&self) -> impl Iterator<Item = &(DateTime<Utc>, i32)> {
        self.lines.iter().flat_map(|line| line.points.iter())
    }

    /// Padded rating range covering every point.
    pub fn y_range(&self) -> Option<(i32, i32)> {
        let min = self.points().map(|(_, rating)| *rating).min()?;
        let max = self.points().map(|(_, rating)| *rating).max()?;
        let padding = ((max - min) / 20).max(MIN_Y_PADDING);
        Some((min - padding, max + padding))
    }

    /// Time range covering every point, widened to a day either side when degenerate.
    pub fn x_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = self.points().map(|(time, _)| *time).min()?;
        let end = self.points().map(|(time, _)| *time).max()?;
        if start == end {
            return Some((start - Duration::days(1), end + Duration::days(1)));
        }
        Some((start, end))
    }
}

/// Draws `chart` and returns PNG bytes.
pub fn draw_rating_chart(style: &ChartStyle, chart: &RatingChart) -> Result<Vec<u8>> {
    let (y_min, y_max) = chart
        .y_range()
        .ok_or_else(|| CfBotError::graph("No rating points to plot"))?;
    let (x_start, x_end) = chart
        .x_range()
        .ok_or_else(|| CfBotError::graph("No rating points to plot"))?;

    let mut buffer = style.buffer();
    {
        let root =
            BitMapBackend::with_buffer(&mut buffer, (style.width, style.height)).into_drawing_area();
        root.fill(&style.background)
            .map_err(plot_error("background fill"))?;

        let mut ctx = ChartBuilder::on(&root)
            .margin(ChartStyle::MARGIN)
            .x_label_area_size(ChartStyle::X_LABEL_AREA_SIZE)
            .y_label_area_size(ChartStyle::Y_LABEL_AREA_SIZE)
            .build_cartesian_2d(x_start..x_end, y_min..y_max)
            .map_err(plot_error("chart build"))?;

        for band in visible_bands(y_min, y_max) {
            ctx.draw_series(std::iter::once(Rectangle::new(
                [(x_start, band.lower), (x_end, band.upper)],
                band.rgb().filled(),
            )))
            .map_err(plot_error("rank band"))?;
        }

        let month_label = |time: &DateTime<Utc>| time.format("%Y-%m").to_string();
        let mut mesh = ctx.configure_mesh();
        if !style.enable_grid {
            mesh.disable_mesh();
        }
        mesh.x_label_formatter(&month_label)
            .label_style((ChartStyle::FONT_FAMILY, ChartStyle::LABEL_FONT_SIZE))
            .draw()
            .map_err(plot_error("mesh"))?;

        for (index, line) in chart.lines.iter().enumerate() {
            let color = series_color(index);
            ctx.draw_series(LineSeries::new(
                line.points.iter().copied(),
                color.stroke_width(ChartStyle::LINE_WIDTH),
            ))
            .map_err(plot_error("rating line"))?
            .label(line.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + ChartStyle::LEGEND_SWATCH, y)], color)
            });
        }

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((ChartStyle::FONT_FAMILY, ChartStyle::LABEL_FONT_SIZE))
            .draw()
            .map_err(plot_error("legend"))?;

        root.present().map_err(plot_error("present"))?;
    }

    debug!(lines = chart.lines.len(), "Rendered rating chart");
    encode_png(style.width, style.height, buffer)
}

/// Renders [`RatingChart`]s.
#[derive(Debug, Clone, Default)]
pub struct RatingHistoryGraph {
    style: ChartStyle,
}

impl RatingHistoryGraph {
    /// Creates a renderer with the given style.
    pub const fn new(style: ChartStyle) -> Self {
        Self { style }
    }
}

#[async_trait]
impl GraphRenderer for RatingHistoryGraph {
    type Data = RatingChart;

    async fn render(&self, data: Self::Data) -> Result<Vec<u8>> {
        let style = self.style;
        tokio::task::spawn_blocking(move || draw_rating_chart(&style, &data))
            .await
            .map_err(|e| CfBotError::graph_with_source("Rating chart task failed", e))?
    }

    fn name(&self) -> &'static str {
        "rating_history"
    }

    fn description(&self) -> &'static str {
        "Rating history of up to five handles over rank tier bands"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(time: i64, new_rating: i32) -> RatingChange {
        RatingChange {
            contest_id: 1,
            contest_name: "Round".to_string(),
            handle: "h".to_string(),
            rank: 1,
            rating_update_time_seconds: time,
            old_rating: 0,
            new_rating,
        }
    }

    #[test]
    fn test_line_keeps_contest_order() {
        let line = RatingLine::from_changes("h (1500)", &[change(100, 1400), change(200, 1500)]);
        let ratings: Vec<_> = line.points.iter().map(|(_, r)| *r).collect();
        assert_eq!(ratings, vec![1400, 1500]);
    }

    #[test]
    fn test_y_range_is_padded_from_data() {
        let chart = RatingChart::new(vec![
            RatingLine::from_changes("a", &[change(0, 1200), change(10, 2200)]),
            RatingLine::from_changes("b", &[change(5, 1500)]),
        ]);
        assert_eq!(chart.y_range(), Some((1150, 2250)));

        let wide = RatingChart::new(vec![RatingLine::from_changes(
            "c",
            &[change(0, 0), change(10, 3000)],
        )]);
        assert_eq!(wide.y_range(), Some((-150, 3150)));
    }

    #[test]
    fn test_single_point_x_range() {
        let chart = RatingChart::new(vec![RatingLine::from_changes("a", &[change(86_400 * 10, 1500)])]);
        let (start, end) = chart.x_range().unwrap();
        assert_eq!(end - start, Duration::days(2));
    }

    #[test]
    fn test_empty_chart_has_no_range() {
        let chart = RatingChart::default();
        assert_eq!(chart.y_range(), None);
        assert!(draw_rating_chart(&ChartStyle::default(), &chart).is_err());
    }
}
