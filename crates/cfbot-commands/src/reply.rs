//! What a command answers with, and how it is sent to Discord.

use crate::framework::{Context, Error};
use cfbot_graphs::{
    GraphRenderer, RatingChart, RatingHistoryGraph, SolvedHistogram, SolvedHistogramGraph,
};
use poise::serenity_prelude as serenity;
use poise::CreateReply;
use tracing::debug;

/// File name of chart attachments.
pub const CHART_ATTACHMENT_NAME: &str = "plot.png";

/// Discord rejects embed titles longer than this many characters.
pub const EMBED_TITLE_LIMIT: usize = 256;

/// A recommended problem, shown as text plus a linked embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemReply {
    /// Message text above the embed.
    pub content: String,
    /// Embed title, `<index>. <name>`.
    pub title: String,
    /// Problem page.
    pub url: String,
    /// Contest name and rating line.
    pub description: String,
}

/// Outcome of a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Plain text, used for rejections and API failures.
    Text(String),
    /// Problem recommendation.
    Problem(ProblemReply),
    /// Rating comparison to render.
    RatingChart(RatingChart),
    /// Solved histogram to render.
    SolvedChart(SolvedHistogram),
}

impl Reply {
    /// Text of a [`Reply::Text`].
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Renders charts if needed and sends the reply.
    pub async fn send(self, ctx: Context<'_>) -> Result<(), Error> {
        let style = ctx.data().chart_style;
        let reply = match self {
            Self::Text(text) => CreateReply::default().content(text),
            Self::Problem(problem) => CreateReply::default().content(problem.content).embed(
                serenity::CreateEmbed::new()
                    .title(problem.title)
                    .url(problem.url)
                    .description(problem.description),
            ),
            Self::RatingChart(chart) => render_chart(RatingHistoryGraph::new(style), chart).await?,
            Self::SolvedChart(histogram) => {
                render_chart(SolvedHistogramGraph::new(style), histogram).await?
            }
        };

        ctx.send(reply).await?;
        Ok(())
    }
}

async fn render_chart<R: GraphRenderer>(renderer: R, data: R::Data) -> Result<CreateReply, Error> {
    debug!(graph = renderer.name(), "Rendering {}", renderer.description());
    let png = renderer.render(data).await?;
    debug!(graph = renderer.name(), bytes = png.len(), "Chart rendered");

    Ok(CreateReply::default()
        .attachment(serenity::CreateAttachment::bytes(png, CHART_ATTACHMENT_NAME)))
}
