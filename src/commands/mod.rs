mod help;
mod search;

use crate::state::Context;

/// File index: send files to index them, search them by name
#[poise::command(slash_command, subcommands("help::help", "search::search"))]
pub async fn files(_ctx: Context<'_>) -> Result<(), anyhow::Error> {
    Ok(())
}
