use serde::Serialize;

/// Discord user snowflake of the uploader.
pub type OwnerId = u64;

/// Metadata kept for one indexed upload. Keyed by `file_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub file_id: String,
    /// Stable across re-sends of the same file; shown in search results.
    pub file_unique_id: String,
    pub file_name: String,
    pub mime_type: String,
    /// Derived from `mime_type` once, at insertion time.
    pub type_hint: String,
    pub owner_id: OwnerId,
}

/// Identifiers and optional metadata carried by an uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentPayload {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
}

/// An upload resolved to a single kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment {
    Document(AttachmentPayload),
    Video(AttachmentPayload),
    Audio(AttachmentPayload),
}

impl Attachment {
    pub fn payload(&self) -> &AttachmentPayload {
        match self {
            Attachment::Document(p) | Attachment::Video(p) | Attachment::Audio(p) => p,
        }
    }

    pub fn default_name(&self) -> &'static str {
        match self {
            Attachment::Document(_) => "Unnamed Document",
            Attachment::Video(_) => "Unnamed Video",
            Attachment::Audio(_) => "Unnamed Audio",
        }
    }

    pub fn default_mime(&self) -> &'static str {
        match self {
            Attachment::Document(_) => "application/octet-stream",
            Attachment::Video(_) => "video/mp4",
            Attachment::Audio(_) => "audio/mpeg",
        }
    }
}

/// Inbound file-upload event. Any combination of slots may be filled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadEvent {
    pub document: Option<AttachmentPayload>,
    pub video: Option<AttachmentPayload>,
    pub audio: Option<AttachmentPayload>,
}

impl UploadEvent {
    /// Pick the attachment to index: document, then video, then audio.
    pub fn into_attachment(self) -> Option<Attachment> {
        if let Some(p) = self.document {
            Some(Attachment::Document(p))
        } else if let Some(p) = self.video {
            Some(Attachment::Video(p))
        } else {
            self.audio.map(Attachment::Audio)
        }
    }
}

/// Result of a search: the first few matches plus the real match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    /// Lower-cased query the matches were computed with.
    pub query: String,
    pub matches: Vec<FileRecord>,
    pub total: usize,
}

impl SearchResults {
    /// Matches found beyond the ones returned.
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.matches.len())
    }
}

/// Counters reported by the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub records: usize,
    pub owners: usize,
}
