use crate::files::types::FileRecord;

/// Discord rejects messages longer than this many characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

// Caps on echoed values; five search matches at these lengths still fit in
// one message.
pub const MAX_NAME_CHARS: usize = 200;
pub const MAX_QUERY_CHARS: usize = 100;
pub const MAX_LABEL_CHARS: usize = 40;

/// Cut `text` to at most `max` characters, marking the cut with `…`.
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Wrap user-supplied text in an inline code span. Backticks inside would
/// close the span early, so they become quotes.
pub fn code(text: &str) -> String {
    format!("`{}`", clip(text, MAX_NAME_CHARS).replace('`', "'"))
}

/// Confirmation sent after an upload is indexed.
pub fn indexed(record: &FileRecord) -> String {
    format!(
        "✅ File indexed successfully!\n\
         **Name:** {}\n\
         **Type:** {} (MIME: {})\n\
         **File ID:** {}\n\n\
         You can now search for this file using keywords from its name.",
        code(&record.file_name),
        clip(&record.type_hint, MAX_LABEL_CHARS),
        clip(&record.mime_type, MAX_QUERY_CHARS),
        code(&record.file_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_replaces_backticks() {
        assert_eq!(code("a`b.txt"), "`a'b.txt`");
    }

    #[test]
    fn test_clip_long_text() {
        assert_eq!(clip("short", 10), "short");
        let clipped = clip(&"é".repeat(500), MAX_NAME_CHARS);
        assert_eq!(clipped.chars().count(), MAX_NAME_CHARS);
        assert!(clipped.ends_with('…'));
    }

    fn record(name: &str, mime: &str) -> FileRecord {
        FileRecord {
            file_id: "123".to_string(),
            file_unique_id: "abc".to_string(),
            file_name: name.to_string(),
            mime_type: mime.to_string(),
            type_hint: "Document (PDF/ZIP/Text)".to_string(),
            owner_id: 42,
        }
    }

    #[test]
    fn test_indexed_message_fits_with_long_values() {
        let record = record(&"n".repeat(3000), &format!("application/{}", "x".repeat(3000)));
        assert!(indexed(&record).chars().count() <= MAX_MESSAGE_CHARS);
    }

    #[test]
    fn test_indexed_message() {
        let record = record("Report_2024.pdf", "application/pdf");
        let text = indexed(&record);
        assert!(text.starts_with("✅ File indexed successfully!"));
        assert!(text.contains("**Name:** `Report_2024.pdf`"));
        assert!(text.contains("**Type:** Document (PDF/ZIP/Text) (MIME: application/pdf)"));
        assert!(text.contains("**File ID:** `123`"));
    }
}
