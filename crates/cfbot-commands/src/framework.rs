//! Poise framework setup and command registration logic.

use cfbot_common::CodeforcesApi;
use cfbot_config::Config;
use cfbot_graphs::ChartStyle;
use cfbot_i18n::{keys, Messages};
use std::sync::Arc;
use tracing::{error, warn};

/// Application data accessible in all commands.
#[derive(Clone)]
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Shared Codeforces API client.
    pub codeforces: Arc<dyn CodeforcesApi>,
    /// Reply catalogue.
    pub messages: Arc<Messages>,
    /// Look of rendered charts.
    pub chart_style: ChartStyle,
}

impl Data {
    /// Bundles the shared services for the framework.
    pub fn new(config: Arc<Config>, codeforces: Arc<dyn CodeforcesApi>, messages: Arc<Messages>) -> Self {
        let chart_style = ChartStyle::from_config(&config.graphs);
        Self {
            config,
            codeforces,
            messages,
            chart_style,
        }
    }
}

impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("config", &"<Config>")
            .field("codeforces", &"<CodeforcesApi>")
            .field("messages", &self.messages)
            .field("chart_style", &self.chart_style)
            .finish()
    }
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Every command the bot registers.
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        crate::gitgud::gitgud(),
        crate::rating::rating(),
        crate::solved::solved(),
        crate::help::help(),
    ]
}

/// Framework options for the given text command prefix.
pub fn framework_options(prefix: &str) -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: commands(),
        on_error: |error| Box::pin(on_error(error)),
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(prefix.to_string()),
            mention_as_prefix: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates a new Poise framework.
pub fn create_framework(prefix: &str) -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(framework_options(prefix))
}

/// Global error handler for the framework.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command '{}': {:?}", ctx.command().name, error);
            let text = ctx.data().messages.get(keys::COMMAND_FAILED);
            if let Err(e) = ctx.say(text).await {
                warn!("Failed to report command error: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}
