//! Transport trait over the Comic Vine endpoints.

use async_trait::async_trait;

use crate::client::ComicvineClient;
use crate::models::{Image, Issue, Page, Volume, VolumeSummary};

/// The remote operations consumed by the metadata layer.
///
/// `ComicvineClient` is the production implementation; tests substitute
/// scripted in-memory implementations.
#[async_trait]
pub trait ComicvineApi: Send + Sync {
    /// Probe whether the configured API key is accepted by the service.
    async fn test_key(&self) -> crate::Result<bool>;

    /// Fetch one page of volume search results at the given offset.
    async fn search_volumes(&self, query: &str, offset: i64)
    -> crate::Result<Page<VolumeSummary>>;

    /// Fetch a volume record by ID.
    async fn get_volume(&self, volume_id: i64) -> crate::Result<Volume>;

    /// Fetch a full issue record by ID.
    async fn get_issue(&self, issue_id: i64) -> crate::Result<Issue>;

    /// Fetch only the cover image URLs for an issue.
    async fn get_issue_image(&self, issue_id: i64) -> crate::Result<Image>;
}

#[async_trait]
impl ComicvineApi for ComicvineClient {
    async fn test_key(&self) -> crate::Result<bool> {
        ComicvineClient::test_key(self).await
    }

    async fn search_volumes(
        &self,
        query: &str,
        offset: i64,
    ) -> crate::Result<Page<VolumeSummary>> {
        ComicvineClient::search_volumes(self, query, offset).await
    }

    async fn get_volume(&self, volume_id: i64) -> crate::Result<Volume> {
        ComicvineClient::get_volume(self, volume_id).await
    }

    async fn get_issue(&self, issue_id: i64) -> crate::Result<Issue> {
        ComicvineClient::get_issue(self, issue_id).await
    }

    async fn get_issue_image(&self, issue_id: i64) -> crate::Result<Image> {
        ComicvineClient::get_issue_image(self, issue_id).await
    }
}
