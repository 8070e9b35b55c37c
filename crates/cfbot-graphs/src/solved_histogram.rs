//! Histogram of solved problem ratings, one bar series per handle.

use crate::style::ChartStyle;
use crate::traits::GraphRenderer;
use crate::utils::{encode_png, plot_error, series_color};
use async_trait::async_trait;
use cfbot_common::{CfBotError, Result};
use plotters::prelude::*;
use tracing::debug;

/// Left edge of the first bin.
pub const HISTOGRAM_MIN_RATING: i32 = 500;
/// Upper bound of the last bin, rounded up to a whole step.
pub const HISTOGRAM_MAX_RATING: i32 = 3800;

/// Share of each bin covered by its bar group, in percent.
const GROUP_WIDTH_PERCENT: i32 = 80;

/// Bin width: 100 for a single handle, 200 when comparing several.
pub const fn bin_step(series_count: usize) -> i32 {
    if series_count == 1 {
        100
    } else {
        200
    }
}

/// Bin edges `500, 500 + step, ...` stopping before `3800 + step`.
pub fn bin_edges(step: i32) -> Vec<i32> {
    let stride = usize::try_from(step.max(1)).unwrap_or(1);
    (HISTOGRAM_MIN_RATING..HISTOGRAM_MAX_RATING + step)
        .step_by(stride)
        .collect()
}

/// Count `ratings` per bin.
///
/// Bins are half-open `[edge, next)` except the last, which also includes its
/// right edge. Ratings outside the edges are ignored.
pub fn bin_counts(ratings: &[i32], edges: &[i32]) -> Vec<u32> {
    let bins = edges.len().saturating_sub(1);
    let mut counts = vec![0; bins];
    let (Some(&first), Some(&last)) = (edges.first(), edges.last()) else {
        return counts;
    };

    for &rating in ratings {
        if bins == 0 || rating < first || rating > last {
            continue;
        }
        let bin = (edges.partition_point(|&edge| edge <= rating) - 1).min(bins - 1);
        counts[bin] += 1;
    }
    counts
}

/// One handle's solved problem ratings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedSeries {
    /// Legend entry.
    pub label: String,
    /// Rating of every distinct solved problem.
    pub ratings: Vec<i32>,
}

/// Data for a solved problem histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedHistogram {
    /// Chart caption.
    pub title: String,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
    /// Series in legend order.
    pub series: Vec<SolvedSeries>,
}

impl SolvedHistogram {
    /// Bin width for this chart.
    pub fn step(&self) -> i32 {
        bin_step(self.series.len())
    }

    /// Bin edges for this chart.
    pub fn edges(&self) -> Vec<i32> {
        bin_edges(self.step())
    }

    /// Per-series bin counts.
    pub fn counts(&self) -> Vec<Vec<u32>> {
        let edges = self.edges();
        self.series
            .iter()
            .map(|series| bin_counts(&series.ratings, &edges))
            .collect()
    }
}

/// Draws `histogram` and returns PNG bytes.
pub fn draw_solved_histogram(style: &ChartStyle, histogram: &SolvedHistogram) -> Result<Vec<u8>> {
    if histogram.series.is_empty() {
        return Err(CfBotError::graph("No series to plot"));
    }

    let edges = histogram.edges();
    let step = histogram.step();
    let counts = histogram.counts();
    let (Some(&x_min), Some(&x_max)) = (edges.first(), edges.last()) else {
        return Err(CfBotError::graph("No histogram bins"));
    };
    let highest = counts.iter().flatten().copied().max().unwrap_or(0);
    let y_max = highest + (highest / 10).max(1);

    let series_count = i32::try_from(histogram.series.len())
        .map_err(|e| CfBotError::graph_with_source("Too many series", e))?;
    let group_width = step * GROUP_WIDTH_PERCENT / 100;
    let bar_width = (group_width / series_count).max(1);
    let group_offset = (step - group_width) / 2;

    let mut buffer = style.buffer();
    {
        let root =
            BitMapBackend::with_buffer(&mut buffer, (style.width, style.height)).into_drawing_area();
        root.fill(&style.background)
            .map_err(plot_error("background fill"))?;

        let mut ctx = ChartBuilder::on(&root)
            .margin(ChartStyle::MARGIN)
            .caption(
                &histogram.title,
                (ChartStyle::FONT_FAMILY, ChartStyle::CAPTION_FONT_SIZE),
            )
            .x_label_area_size(ChartStyle::X_LABEL_AREA_SIZE)
            .y_label_area_size(ChartStyle::Y_LABEL_AREA_SIZE)
            .build_cartesian_2d(x_min..x_max, 0u32..y_max)
            .map_err(plot_error("chart build"))?;

        let mut mesh = ctx.configure_mesh();
        if !style.enable_grid {
            mesh.disable_mesh();
        }
        mesh.x_desc(histogram.x_label.as_str())
            .y_desc(histogram.y_label.as_str())
            .label_style((ChartStyle::FONT_FAMILY, ChartStyle::LABEL_FONT_SIZE))
            .draw()
            .map_err(plot_error("mesh"))?;

        for (index, (series, series_counts)) in histogram.series.iter().zip(&counts).enumerate() {
            let color = series_color(index);
            let shift = group_offset + bar_width * i32::try_from(index).unwrap_or(0);
            let bars = edges
                .iter()
                .zip(series_counts)
                .filter(|&(_, &count)| count > 0)
                .map(|(&edge, &count)| {
                    let left = edge + shift;
                    Rectangle::new([(left, 0), (left + bar_width, count)], color.filled())
                });

            ctx.draw_series(bars)
                .map_err(plot_error("histogram bars"))?
                .label(series.label.clone())
                .legend(move |(x, y)| {
                    Rectangle::new(
                        [(x, y - 5), (x + ChartStyle::LEGEND_SWATCH, y + 5)],
                        color.filled(),
                    )
                });
        }

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((ChartStyle::FONT_FAMILY, ChartStyle::LABEL_FONT_SIZE))
            .draw()
            .map_err(plot_error("legend"))?;

        root.present().map_err(plot_error("present"))?;
    }

    debug!(series = histogram.series.len(), step, "Rendered solved histogram");
    encode_png(style.width, style.height, buffer)
}

/// Renders [`SolvedHistogram`]s.
#[derive(Debug, Clone, Default)]
pub struct SolvedHistogramGraph {
    style: ChartStyle,
}

impl SolvedHistogramGraph {
    /// Creates a renderer with the given style.
    pub const fn new(style: ChartStyle) -> Self {
        Self { style }
    }
}

#[async_trait]
impl GraphRenderer for SolvedHistogramGraph {
    type Data = SolvedHistogram;

    async fn render(&self, data: Self::Data) -> Result<Vec<u8>> {
        let style = self.style;
        tokio::task::spawn_blocking(move || draw_solved_histogram(&style, &data))
            .await
            .map_err(|e| CfBotError::graph_with_source("Histogram task failed", e))?
    }

    fn name(&self) -> &'static str {
        "solved_histogram"
    }

    fn description(&self) -> &'static str {
        "Histogram of solved problem ratings per handle"
    }
}
