//! `rating`: compares rating histories over the rank tier bands.

use crate::framework::{Context, Error};
use crate::handles::{describe_api_error, parse_handles, validate_handle_count};
use crate::reply::Reply;
use cfbot_common::{CodeforcesApi, Handle};
use cfbot_graphs::{rank_for, RatingChart, RatingLine};
use cfbot_i18n::{keys, Messages};
use tracing::{debug, instrument};

/// Collects the rating history of every handle into a chart.
///
/// Handles are fetched one after another; the first failure or unrated
/// handle ends the command with a text reply and no chart.
#[instrument(skip(api, messages))]
pub async fn rating_chart(api: &dyn CodeforcesApi, messages: &Messages, handles: &[Handle]) -> Reply {
    if let Err(text) = validate_handle_count(handles.len(), messages) {
        return Reply::Text(text);
    }

    let mut lines = Vec::with_capacity(handles.len());
    for handle in handles {
        let changes = match api.user_rating(handle).await {
            Ok(changes) => changes,
            Err(e) => return Reply::Text(describe_api_error(&e, handle, messages)),
        };

        let Some(latest) = changes.last().map(|change| change.new_rating) else {
            return Reply::Text(
                messages.get_with_args(keys::NO_RATING_HISTORY, &[("handle", handle.to_string())]),
            );
        };

        debug!(
            %handle,
            contests = changes.len(),
            latest,
            tier = rank_for(latest).map_or("Unrated", |band| band.name),
            "Rating history fetched"
        );

        let label = messages.get_with_args(
            keys::RATING_LEGEND,
            &[("handle", handle.to_string()), ("rating", latest.to_string())],
        );
        lines.push(RatingLine::from_changes(label, &changes));
    }

    Reply::RatingChart(RatingChart::new(lines))
}

/// Compare the rating history of up to five Codeforces handles.
#[poise::command(prefix_command)]
pub async fn rating(
    ctx: Context<'_>,
    #[description = "Codeforces handles"] handles: Vec<String>,
) -> Result<(), Error> {
    let data = ctx.data();
    let handles = parse_handles(handles);

    ctx.defer_or_broadcast().await?;
    let reply = rating_chart(data.codeforces.as_ref(), data.messages.as_ref(), &handles).await;

    reply.send(ctx).await
}
