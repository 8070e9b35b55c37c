//! `solved`: histogram of solved problem ratings.

use crate::framework::{Context, Error};
use crate::handles::{describe_api_error, parse_handles, validate_handle_count};
use crate::recommend::solved_problems;
use crate::reply::Reply;
use cfbot_common::{CodeforcesApi, Handle};
use cfbot_graphs::{SolvedHistogram, SolvedSeries};
use cfbot_i18n::{keys, Messages};
use tracing::instrument;

/// Collects the distinct solved problems of every handle into a histogram.
#[instrument(skip(api, messages))]
pub async fn solved_histogram(
    api: &dyn CodeforcesApi,
    messages: &Messages,
    handles: &[Handle],
) -> Reply {
    if let Err(text) = validate_handle_count(handles.len(), messages) {
        return Reply::Text(text);
    }

    let mut series = Vec::with_capacity(handles.len());
    for handle in handles {
        let submissions = match api.user_status(handle).await {
            Ok(submissions) => submissions,
            Err(e) => return Reply::Text(describe_api_error(&e, handle, messages)),
        };

        let solved = solved_problems(&submissions);
        let label = messages.get_with_args(
            keys::SOLVED_LEGEND,
            &[("handle", handle.to_string()), ("count", solved.len().to_string())],
        );
        series.push(SolvedSeries {
            label,
            ratings: solved.into_iter().map(|key| key.rating).collect(),
        });
    }

    Reply::SolvedChart(SolvedHistogram {
        title: messages.get(keys::SOLVED_TITLE),
        x_label: messages.get(keys::SOLVED_X_LABEL),
        y_label: messages.get(keys::SOLVED_Y_LABEL),
        series,
    })
}

/// Show a histogram of problems solved on Codeforces for up to five handles.
#[poise::command(prefix_command)]
pub async fn solved(
    ctx: Context<'_>,
    #[description = "Codeforces handles"] handles: Vec<String>,
) -> Result<(), Error> {
    let data = ctx.data();
    let handles = parse_handles(handles);

    ctx.defer_or_broadcast().await?;
    let reply = solved_histogram(data.codeforces.as_ref(), data.messages.as_ref(), &handles).await;

    reply.send(ctx).await
}
