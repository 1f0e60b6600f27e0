//! MIME type → human-readable type hint.

const VIDEO_MIMES: &[&str] = &[
    "video/mp4",
    "video/x-matroska",
    "video/quicktime",
    "video/mpeg",
    "video/webm",
    "video/x-msvideo",
];
const DOCUMENT_MIMES: &[&str] = &["application/pdf", "application/zip", "text/plain"];
const IMAGE_MIMES: &[&str] = &["image/jpeg", "image/png", "image/gif"];

pub const VIDEO_HINT: &str = "Video (MP4/MKV/Other)";
pub const DOCUMENT_HINT: &str = "Document (PDF/ZIP/Text)";
pub const IMAGE_HINT: &str = "Image";
pub const FALLBACK_HINT: &str = "Other File";

/// Classify a MIME type. Known sets are checked video, document, image;
/// anything else with a `/` shows its upper-cased subtype.
pub fn type_hint(mime_type: &str) -> String {
    if VIDEO_MIMES.contains(&mime_type) {
        return VIDEO_HINT.to_string();
    }
    if DOCUMENT_MIMES.contains(&mime_type) {
        return DOCUMENT_HINT.to_string();
    }
    if IMAGE_MIMES.contains(&mime_type) {
        return IMAGE_HINT.to_string();
    }
    match mime_type.rsplit_once('/') {
        Some((_, subtype)) => subtype.to_uppercase(),
        None => FALLBACK_HINT.to_string(),
    }
}
