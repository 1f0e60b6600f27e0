use anyhow::{Context, Result};
use poise::serenity_prelude as serenity;

const DEFAULT_PORT: u16 = 5000;

/// Runtime settings, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    /// Register commands in this guild only (instant) instead of globally.
    pub guild_id: Option<serenity::GuildId>,
    /// Port for the health/status HTTP endpoint.
    pub port: u16,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| dotenv::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = var("DISCORD_TOKEN")
            .filter(|t| !t.is_empty())
            .context("DISCORD_TOKEN required")?;

        let guild_id = var("DISCORD_GUILD_ID")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(serenity::GuildId::new);

        let port = match var("PORT") {
            Some(p) => p
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {}", p))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            token,
            guild_id,
            port,
        })
    }
}
