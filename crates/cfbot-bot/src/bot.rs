//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use cfbot_commands::{create_framework, Data};
use cfbot_common::{CodeforcesApi, CodeforcesClient};
use cfbot_config::Config;
use cfbot_i18n::Messages;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info};

/// Main bot structure.
pub struct CfBot {
    config: Arc<Config>,
    codeforces: Arc<CodeforcesClient>,
    messages: Arc<Messages>,
}

impl CfBot {
    /// Creates the bot and the services shared by every command.
    pub fn new(config: Config) -> BotResult<Self> {
        let codeforces = CodeforcesClient::new(config.codeforces.client_config())?;
        let messages = Messages::new(&config.data.language)?;
        info!(
            api_url = %config.codeforces.api_url,
            language = messages.language(),
            "Shared services ready"
        );

        Ok(Self {
            config: Arc::new(config),
            codeforces: Arc::new(codeforces),
            messages: Arc::new(messages),
        })
    }

    /// Gateway intents: non-privileged plus message content for prefix commands.
    pub fn intents() -> serenity::GatewayIntents {
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT
    }

    /// Data handed to every command.
    pub fn data(&self) -> Data {
        let codeforces: Arc<dyn CodeforcesApi> = self.codeforces.clone();
        Data::new(self.config.clone(), codeforces, self.messages.clone())
    }

    /// Connects to Discord and runs until the gateway stops or Ctrl-C is received.
    pub async fn start(self) -> BotResult<()> {
        let data = self.data();
        let framework = create_framework(&self.config.discord.prefix)
            .setup(move |ctx, ready, framework| {
                let data = data.clone();
                Box::pin(async move {
                    info!("Bot connected as: {}", ready.user.name);
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    info!("Slash commands registered globally");
                    Ok(data)
                })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(&self.config.discord.token, Self::intents())
            .framework(framework)
            .await?;

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {:?}", e);
                return;
            }

            info!("Received shutdown signal, starting graceful shutdown");
            shard_manager.shutdown_all().await;
        });

        info!("cfbot is starting up...");
        let result = client.start().await;

        drop(client);
        drop(self.codeforces);
        info!("Discord client stopped, Codeforces client released");

        result?;
        Ok(())
    }
}
