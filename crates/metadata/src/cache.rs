//! Local result cache contract and an in-memory implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use comicvine::{Volume, VolumeSummary};
use tokio::sync::RwLock;

/// Key-value store for previously fetched Comic Vine results.
///
/// Keys are the original (unencoded) query string or the numeric id; a
/// present entry is always preferred over a remote call unless the caller
/// explicitly requests a refresh. Lookups must not mutate remote state.
/// Implementations handle their own persistence failures; the contract is
/// infallible from the consumer's side.
#[async_trait]
pub trait ComicCache: Send + Sync {
    /// Cached search results for a query; empty means a miss.
    async fn get_search_results(&self, query: &str) -> Vec<VolumeSummary>;

    /// Store the full result sequence for a query, in remote page order.
    async fn add_search_results(&self, query: &str, results: &[VolumeSummary]);

    async fn get_volume_info(&self, volume_id: i64) -> Option<Volume>;

    async fn add_volume_info(&self, volume: &Volume);

    /// Cached (full image URL, thumbnail URL) pair for an issue.
    async fn get_issue_image_urls(&self, issue_id: i64) -> (Option<String>, Option<String>);

    async fn add_issue_image_urls(
        &self,
        issue_id: i64,
        image_url: String,
        thumb_url: Option<String>,
    );
}

#[derive(Default)]
struct Store {
    searches: HashMap<String, Vec<VolumeSummary>>,
    volumes: HashMap<i64, Volume>,
    covers: HashMap<i64, (String, Option<String>)>,
}

/// Process-lifetime [`ComicCache`] backed by in-memory maps.
///
/// Entries live behind a single [`RwLock`], so all trait methods operate on
/// `&self` without external synchronisation. Also serves as the cache double
/// in unit tests.
#[derive(Default)]
pub struct MemoryCache {
    store: RwLock<Store>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ComicCache for MemoryCache {
    async fn get_search_results(&self, query: &str) -> Vec<VolumeSummary> {
        self.store
            .read()
            .await
            .searches
            .get(query)
            .cloned()
            .unwrap_or_default()
    }

    async fn add_search_results(&self, query: &str, results: &[VolumeSummary]) {
        self.store
            .write()
            .await
            .searches
            .insert(query.to_string(), results.to_vec());
    }

    async fn get_volume_info(&self, volume_id: i64) -> Option<Volume> {
        self.store.read().await.volumes.get(&volume_id).cloned()
    }

    async fn add_volume_info(&self, volume: &Volume) {
        self.store
            .write()
            .await
            .volumes
            .insert(volume.id, volume.clone());
    }

    async fn get_issue_image_urls(&self, issue_id: i64) -> (Option<String>, Option<String>) {
        match self.store.read().await.covers.get(&issue_id) {
            Some((image, thumb)) => (Some(image.clone()), thumb.clone()),
            None => (None, None),
        }
    }

    async fn add_issue_image_urls(
        &self,
        issue_id: i64,
        image_url: String,
        thumb_url: Option<String>,
    ) {
        self.store
            .write()
            .await
            .covers
            .insert(issue_id, (image_url, thumb_url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64, name: &str) -> VolumeSummary {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    #[tokio::test]
    async fn search_results_round_trip_by_original_query() {
        let cache = MemoryCache::new();
        assert!(cache.get_search_results("winter men").await.is_empty());

        let results = vec![summary(1, "The Winter Men")];
        cache.add_search_results("winter men", &results).await;

        let hit = cache.get_search_results("winter men").await;
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].name, "The Winter Men");
        // keyed by the unencoded string, not a normalized form
        assert!(cache.get_search_results("winter+men").await.is_empty());
    }

    #[tokio::test]
    async fn cover_urls_keyed_by_issue_id() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get_issue_image_urls(42).await, (None, None));

        cache
            .add_issue_image_urls(42, "http://img/full.jpg".into(), Some("http://img/t.jpg".into()))
            .await;
        let (image, thumb) = cache.get_issue_image_urls(42).await;
        assert_eq!(image.as_deref(), Some("http://img/full.jpg"));
        assert_eq!(thumb.as_deref(), Some("http://img/t.jpg"));
        assert_eq!(cache.get_issue_image_urls(43).await, (None, None));
    }
}
