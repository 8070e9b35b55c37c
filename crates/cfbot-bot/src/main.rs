//! Main entry point for cfbot.

use cfbot_bot::{Args, BotResult, CfBot};
use cfbot_common::init_logging;
use cfbot_config::ConfigLoader;
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() -> BotResult<()> {
    let args = Args::parse();
    init_logging(&args.logging_config())?;

    info!("Starting cfbot");

    let config = ConfigLoader::load(args.config.as_deref())?;
    info!("Configuration loaded successfully");

    let bot = CfBot::new(config)?;
    if let Err(e) = bot.start().await {
        error!("Bot stopped with an error: {}", e);
        return Err(e);
    }

    info!("cfbot has shut down");
    Ok(())
}
