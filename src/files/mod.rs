pub mod classify;
pub mod ingest;
pub mod types;

use std::collections::{HashMap, HashSet};

use tokio::sync::RwLock;
use tracing::debug;

use types::{FileRecord, IndexStats, OwnerId, SearchResults};

/// Matches returned per search; the total is reported separately.
pub const SEARCH_LIMIT: usize = 5;

/// In-memory metadata index, keyed by platform file id.
///
/// Records keep the position of their first insertion, so search results
/// come back in upload order. Lookups scan every record; a per-owner id set
/// is the place to start if that ever gets slow.
#[derive(Default)]
pub struct FileIndex {
    inner: RwLock<IndexInner>,
}

#[derive(Default)]
struct IndexInner {
    records: Vec<FileRecord>,
    positions: HashMap<String, usize>,
}

impl FileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same file id.
    /// Returns the replaced record.
    pub async fn upsert(&self, record: FileRecord) -> Option<FileRecord> {
        let mut inner = self.inner.write().await;
        match inner.positions.get(&record.file_id).copied() {
            Some(pos) => {
                debug!(file_id = %record.file_id, "replacing indexed file");
                Some(std::mem::replace(&mut inner.records[pos], record))
            }
            None => {
                let pos = inner.records.len();
                inner.positions.insert(record.file_id.clone(), pos);
                inner.records.push(record);
                None
            }
        }
    }

    #[cfg(test)]
    pub async fn get(&self, file_id: &str) -> Option<FileRecord> {
        let inner = self.inner.read().await;
        inner
            .positions
            .get(file_id)
            .map(|&pos| inner.records[pos].clone())
    }

    pub async fn stats(&self) -> IndexStats {
        let inner = self.inner.read().await;
        let owners: HashSet<OwnerId> = inner.records.iter().map(|r| r.owner_id).collect();
        IndexStats {
            records: inner.records.len(),
            owners: owners.len(),
        }
    }

    /// Case-insensitive substring search over the file names owned by `owner_id`.
    pub async fn search(&self, owner_id: OwnerId, query: &str) -> SearchResults {
        let query = query.to_lowercase();
        let inner = self.inner.read().await;

        let mut matches = Vec::new();
        let mut total = 0;
        for record in inner
            .records
            .iter()
            .filter(|r| r.owner_id == owner_id && r.file_name.to_lowercase().contains(&query))
        {
            if matches.len() < SEARCH_LIMIT {
                matches.push(record.clone());
            }
            total += 1;
        }

        SearchResults {
            query,
            matches,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(file_id: &str, name: &str, owner_id: OwnerId) -> FileRecord {
        FileRecord {
            file_id: file_id.to_string(),
            file_unique_id: format!("u-{}", file_id),
            file_name: name.to_string(),
            mime_type: "video/mp4".to_string(),
            type_hint: classify::type_hint("video/mp4"),
            owner_id,
        }
    }

    #[tokio::test]
    async fn test_upsert_overwrites_same_id() {
        let index = FileIndex::new();
        assert!(index.upsert(record("f1", "first.mp4", 1)).await.is_none());
        let replaced = index.upsert(record("f1", "second.mp4", 2)).await;

        assert_eq!(replaced.map(|r| r.file_name), Some("first.mp4".to_string()));
        assert_eq!(index.stats().await.records, 1);
        let stored = index.get("f1").await.unwrap();
        assert_eq!(stored.file_name, "second.mp4");
        assert_eq!(stored.owner_id, 2);
    }

    #[tokio::test]
    async fn test_overwrite_keeps_position() {
        let index = FileIndex::new();
        index.upsert(record("a", "clip a", 1)).await;
        index.upsert(record("b", "clip b", 1)).await;
        index.upsert(record("a", "clip a2", 1)).await;

        let results = index.search(1, "clip").await;
        let ids: Vec<_> = results.matches.iter().map(|r| r.file_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_search_only_returns_owner_records() {
        let index = FileIndex::new();
        index.upsert(record("a", "holiday.mp4", 1)).await;
        index.upsert(record("b", "holiday.mkv", 2)).await;
        index.upsert(record("c", "notes.txt", 1)).await;

        let results = index.search(1, "holiday").await;
        assert_eq!(results.total, 1);
        assert!(results.matches.iter().all(|r| r.owner_id == 1));
        assert_eq!(results.matches[0].file_id, "a");

        assert_eq!(index.search(3, "").await.total, 0);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let index = FileIndex::new();
        index.upsert(record("a", "My Movie.mkv", 1)).await;
        index.upsert(record("b", "movie-night.mp4", 1)).await;
        index.upsert(record("c", "song.mp3", 1)).await;

        let lower = index.search(1, "movie").await;
        let upper = index.search(1, "MOVIE").await;
        assert_eq!(lower.matches, upper.matches);
        assert_eq!(lower.total, 2);
        assert_eq!(upper.query, "movie");
    }

    #[tokio::test]
    async fn test_search_caps_results_but_reports_total() {
        let index = FileIndex::new();
        for i in 0..7 {
            index.upsert(record(&format!("f{}", i), &format!("x-{}.bin", i), 1)).await;
        }
        index.upsert(record("other", "x-other.bin", 2)).await;

        let results = index.search(1, "x").await;
        assert_eq!(results.matches.len(), SEARCH_LIMIT);
        assert_eq!(results.total, 7);
        assert_eq!(results.remaining(), 2);
        assert_eq!(results.matches[0].file_id, "f0");
        assert_eq!(results.matches[4].file_id, "f4");
    }

    #[tokio::test]
    async fn test_empty_query_matches_everything_owned() {
        let index = FileIndex::new();
        index.upsert(record("a", "one", 1)).await;
        index.upsert(record("b", "two", 1)).await;
        assert_eq!(index.search(1, "").await.total, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_upserts_and_searches() {
        let index = std::sync::Arc::new(FileIndex::new());
        let mut tasks = Vec::new();

        for owner in 1..=4u64 {
            for i in 0..25 {
                let index = index.clone();
                tasks.push(tokio::spawn(async move {
                    index
                        .upsert(record(&format!("{}-{}", owner, i), &format!("shared-{}", i), owner))
                        .await;
                    let results = index.search(owner, "SHARED").await;
                    assert!(results.matches.iter().all(|r| r.owner_id == owner));
                }));
            }
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(index.stats().await, IndexStats { records: 100, owners: 4 });
        for owner in 1..=4u64 {
            let results = index.search(owner, "shared").await;
            assert_eq!(results.total, 25);
            assert!(results.matches.iter().all(|r| r.owner_id == owner));
        }
    }

    #[tokio::test]
    async fn test_stats() {
        let index = FileIndex::new();
        index.upsert(record("a", "one", 1)).await;
        index.upsert(record("b", "two", 1)).await;
        index.upsert(record("c", "three", 9)).await;
        assert_eq!(
            index.stats().await,
            IndexStats {
                records: 3,
                owners: 2
            }
        );
    }
}
