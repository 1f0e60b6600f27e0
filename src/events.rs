use anyhow::Result;
use poise::serenity_prelude as serenity;
use tracing::{debug, warn};

use crate::files::ingest::ingest;
use crate::files::types::{AttachmentPayload, UploadEvent};
use crate::replies;
use crate::state::AppState;

/// Which slot of an `UploadEvent` a Discord attachment fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Document,
    Video,
    Audio,
}

fn slot_for(mime_type: Option<&str>, duration_secs: Option<f64>) -> Slot {
    match mime_type {
        Some(m) if m.starts_with("video/") => Slot::Video,
        Some(m) if m.starts_with("audio/") => Slot::Audio,
        // Voice messages carry a duration
        _ if duration_secs.is_some() => Slot::Audio,
        _ => Slot::Document,
    }
}

/// Content type without parameters (`text/plain; charset=utf-8` → `text/plain`).
fn declared_mime(content_type: Option<&str>) -> Option<String> {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .filter(|ct| !ct.is_empty())
        .map(str::to_string)
}

/// Discord has no per-file unique id, so derive a stable one from name and size.
fn unique_id(filename: &str, size: u32) -> String {
    let hash = blake3::hash(format!("{}:{}", filename, size).as_bytes());
    hash.to_hex()[..16].to_string()
}

fn upload_event(attachment: &serenity::Attachment) -> UploadEvent {
    let mime_type = declared_mime(attachment.content_type.as_deref());
    let slot = slot_for(mime_type.as_deref(), attachment.duration_secs);
    let payload = AttachmentPayload {
        file_id: attachment.id.to_string(),
        file_unique_id: unique_id(&attachment.filename, attachment.size),
        file_name: Some(attachment.filename.clone()).filter(|n| !n.is_empty()),
        mime_type,
    };

    let mut event = UploadEvent::default();
    match slot {
        Slot::Document => event.document = Some(payload),
        Slot::Video => event.video = Some(payload),
        Slot::Audio => event.audio = Some(payload),
    }
    event
}

/// One upload event per attachment. Sticker-only messages produce a single
/// empty event so the sender learns stickers are not indexed.
fn upload_events(msg: &serenity::Message) -> Vec<UploadEvent> {
    if msg.attachments.is_empty() {
        if msg.sticker_items.is_empty() {
            return vec![];
        }
        return vec![UploadEvent::default()];
    }
    msg.attachments.iter().map(upload_event).collect()
}

pub async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, AppState, anyhow::Error>,
    data: &AppState,
) -> Result<()> {
    match reply_target(event) {
        Some(msg) => handle_uploads(ctx, msg, data).await,
        None => Ok(()),
    }
}

/// The human-authored message an event carries, if any.
pub fn reply_target(event: &serenity::FullEvent) -> Option<&serenity::Message> {
    match event {
        serenity::FullEvent::Message { new_message } if !new_message.author.bot => {
            Some(new_message)
        }
        _ => None,
    }
}

/// Index every upload in `msg`, answering each one separately. A reply that
/// fails to send does not stop the remaining uploads; the first failure is
/// returned once all of them are handled.
async fn handle_uploads(
    ctx: &serenity::Context,
    msg: &serenity::Message,
    data: &AppState,
) -> Result<()> {
    let owner_id = msg.author.id.get();
    let mut failed = None;

    for event in upload_events(msg) {
        let reply = match ingest(&data.index, event, owner_id).await {
            Ok(record) => replies::indexed(&record),
            Err(e) => {
                debug!(message_id = %msg.id, "Nothing to index: {}", e);
                e.to_string()
            }
        };

        if let Err(e) = msg.reply(ctx, reply).await {
            warn!(message_id = %msg.id, "Failed to send upload reply: {}", e);
            failed.get_or_insert(e);
        }
    }

    match failed {
        Some(e) => Err(anyhow::Error::from(e).context("Failed to send upload reply")),
        None => Ok(()),
    }
}
