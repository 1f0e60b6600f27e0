use crate::state::Context;

/// Explain how the file index works
#[poise::command(slash_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    ctx.say(format!(
        "Hello, <@{}>! 👋\n\n\
         I am a File Indexing Bot. Send me any file (like MP4, MKV, PDF, etc.) \
         and I will save its metadata.\n\n\
         You can search for files using `/files search` followed by a keyword, \
         e.g. `/files search MyMovie`",
        ctx.author().id
    ))
    .await?;
    Ok(())
}
