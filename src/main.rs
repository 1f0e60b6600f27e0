mod commands;
mod config;
mod error;
mod events;
mod files;
mod health;
mod replies;
mod state;

use std::sync::Arc;

use poise::serenity_prelude as serenity;
use poise::{Framework, FrameworkError, FrameworkOptions};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use config::BotConfig;
use error::{user_reply, BotError};
use files::FileIndex;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,serenity=warn,tracing::span=warn")),
        )
        .init();

    // Load env
    let _ = dotenv::dotenv();
    let config = BotConfig::from_env()?;

    let index = Arc::new(FileIndex::new());
    health::spawn(index.clone(), config.port).await?;

    let app_state = AppState { index };
    let guild_id = config.guild_id;

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: vec![commands::files()],
            on_error: |error| Box::pin(on_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(events::handle_event(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Bot connected as: {} ({})", ready.user.name, ready.user.id);

                let commands = &framework.options().commands;
                for cmd in commands {
                    info!("  /{} ({} subcommands)", cmd.name, cmd.subcommands.len());
                }

                if let Some(gid) = guild_id {
                    info!("Registering to guild {} (instant)", gid);
                    poise::builtins::register_in_guild(ctx, commands, gid).await?;
                } else {
                    info!("Registering globally (up to 1 hour delay)");
                    poise::builtins::register_globally(ctx, commands).await?;
                }

                Ok(app_state)
            })
        })
        .build();

    info!("Starting file index bot...");

    let mut client = serenity::ClientBuilder::new(&config.token, intents)
        .framework(framework)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create client: {}", e))?;

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
    }

    Ok(())
}

/// Answer failed commands in-channel; nothing here may take the bot down.
async fn on_error(error: FrameworkError<'_, AppState, anyhow::Error>) {
    match error {
        FrameworkError::Command { error, ctx, .. } => {
            if error.downcast_ref::<BotError>().is_none() {
                error!(
                    command = %ctx.command().qualified_name,
                    user_id = %ctx.author().id,
                    "Command failed: {:#}",
                    error
                );
            }
            if let Err(e) = ctx.say(user_reply(&error)).await {
                warn!("Failed to send error reply: {}", e);
            }
        }
        FrameworkError::EventHandler {
            error, ctx, event, ..
        } => {
            error!("Event handler failed: {:#}", error);
            if let Some(msg) = events::reply_target(event) {
                if let Err(e) = msg.reply(ctx, user_reply(&error)).await {
                    warn!(message_id = %msg.id, "Failed to send error reply: {}", e);
                }
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}
