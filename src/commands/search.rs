use poise::CreateReply;
use tracing::info;

use crate::error::BotError;
use crate::files::types::SearchResults;
use crate::replies::{clip, code, MAX_LABEL_CHARS, MAX_QUERY_CHARS};
use crate::state::Context;

/// Search your indexed files by name
#[poise::command(slash_command)]
pub async fn search(
    ctx: Context<'_>,
    #[description = "Keyword from the file name"]
    #[max_length = 100]
    query: Option<String>,
) -> Result<(), anyhow::Error> {
    let query = normalize_query(query.as_deref())?;
    let owner_id = ctx.author().id.get();

    let results = ctx.data().index.search(owner_id, &query).await;
    info!(owner_id, query = %results.query, total = results.total, "Search served");

    // Ephemeral: the index is private to its owner
    ctx.send(
        CreateReply::default()
            .content(format_results(&results))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// Collapse whitespace; a missing or blank query never reaches the index.
fn normalize_query(raw: Option<&str>) -> Result<String, BotError> {
    let words: Vec<&str> = raw.unwrap_or_default().split_whitespace().collect();
    if words.is_empty() {
        return Err(BotError::MissingSearchQuery);
    }
    Ok(words.join(" "))
}

fn format_results(results: &SearchResults) -> String {
    if results.total == 0 {
        return format!(
            "❌ No files found matching '{}' in your private index.",
            clip(&results.query, MAX_QUERY_CHARS)
        );
    }

    let mut out = format!(
        "🔎 Found {} files matching '{}':\n\n",
        results.total,
        code(&clip(&results.query, MAX_QUERY_CHARS))
    );
    for (i, record) in results.matches.iter().enumerate() {
        out.push_str(&format!(
            "**{}.** {}\n  Type: {} | ID: {}\n",
            i + 1,
            code(&record.file_name),
            clip(&record.type_hint, MAX_LABEL_CHARS),
            code(&record.file_unique_id)
        ));
    }

    let remaining = results.remaining();
    if remaining > 0 {
        out.push_str(&format!("\n... and {} more. Refine your search.", remaining));
    }
    out
}
