use tracing::info;

use super::classify::type_hint;
use super::types::{FileRecord, OwnerId, UploadEvent};
use super::FileIndex;
use crate::error::BotError;

/// Index the attachment carried by `event` for `owner_id`.
///
/// Missing names and MIME types get per-kind defaults. The record is built in
/// full before it touches the index. An event with no attachment leaves the
/// index untouched and yields `BotError::UnsupportedAttachment`.
pub async fn ingest(
    index: &FileIndex,
    event: UploadEvent,
    owner_id: OwnerId,
) -> Result<FileRecord, BotError> {
    let attachment = event
        .into_attachment()
        .ok_or(BotError::UnsupportedAttachment)?;

    let payload = attachment.payload();
    let file_name = payload
        .file_name
        .clone()
        .unwrap_or_else(|| attachment.default_name().to_string());
    let mime_type = payload
        .mime_type
        .clone()
        .unwrap_or_else(|| attachment.default_mime().to_string());

    let record = FileRecord {
        file_id: payload.file_id.clone(),
        file_unique_id: payload.file_unique_id.clone(),
        type_hint: type_hint(&mime_type),
        file_name,
        mime_type,
        owner_id,
    };

    let replaced = index.upsert(record.clone()).await.is_some();

    info!(
        file_id = %record.file_id,
        owner_id,
        replaced,
        file_name = %record.file_name,
        type_hint = %record.type_hint,
        "File indexed"
    );
    Ok(record)
}
