//! Cached search-and-fetch orchestration against Comic Vine.

use std::sync::Arc;

use comicvine::{ComicvineApi, ComicvineError, Volume, VolumeSummary};
use tokio::sync::oneshot;

use crate::cache::ComicCache;
use crate::error::MetadataError;
use crate::mapper::map_issue;
use crate::models::{CoverUrls, GenericMetadata};

/// Progress callback for paginated searches: (results so far, total).
pub type Progress<'a> = &'a mut dyn FnMut(i64, i64);

/// Drives cached lookups, remote paginated search, and metadata mapping.
///
/// Remote query failures (envelope status ≠ 1) and issues missing from a
/// volume are logged and returned as absent results; transport and decode
/// failures propagate as [`MetadataError`]. No retries are performed.
#[derive(Clone)]
pub struct ComicvineTalker {
    api: Arc<dyn ComicvineApi>,
    cache: Arc<dyn ComicCache>,
}

impl ComicvineTalker {
    pub fn new(api: Arc<dyn ComicvineApi>, cache: Arc<dyn ComicCache>) -> Self {
        Self { api, cache }
    }

    /// Probe whether the configured API key is accepted by the service.
    pub async fn test_key(&self) -> Result<bool, MetadataError> {
        Ok(self.api.test_key().await?)
    }

    /// Search for series by name, preferring cached results.
    ///
    /// Unless `refresh_cache` is set, a non-empty cached sequence for the
    /// original query string is returned without any network traffic (and
    /// without invoking `progress`). Otherwise all result pages are fetched
    /// in order; `progress` is invoked after each page. A failure on any
    /// page discards the partial sequence and yields `None` — nothing
    /// truncated is returned or cached.
    pub async fn search_series(
        &self,
        series_name: &str,
        mut progress: Option<Progress<'_>>,
        refresh_cache: bool,
    ) -> Result<Option<Vec<VolumeSummary>>, MetadataError> {
        if !refresh_cache {
            let cached = self.cache.get_search_results(series_name).await;
            if !cached.is_empty() {
                tracing::debug!(query = series_name, hits = cached.len(), "search cache hit");
                return Ok(Some(cached));
            }
        }

        let Some(first) = absorb_query_failure(self.api.search_volumes(series_name, 0).await)?
        else {
            return Ok(None);
        };

        let limit = first.limit;
        let total = first.total_results;
        let mut current = first.page_results;
        let mut results = first.results;
        tracing::debug!(query = series_name, "found {current} of {total} results");
        if let Some(ref mut callback) = progress {
            callback(current, total);
        }

        let mut offset = 0;
        while current < total {
            offset += limit;
            tracing::debug!(query = series_name, offset, "fetching another page of results");
            let Some(page) =
                absorb_query_failure(self.api.search_volumes(series_name, offset).await)?
            else {
                return Ok(None);
            };
            current += page.page_results;
            results.extend(page.results);
            if let Some(ref mut callback) = progress {
                callback(current, total);
            }
        }

        self.cache.add_search_results(series_name, &results).await;
        Ok(Some(results))
    }

    /// Fetch a volume record, cache-first by series id.
    pub async fn fetch_volume(&self, series_id: i64) -> Result<Option<Volume>, MetadataError> {
        if let Some(cached) = self.cache.get_volume_info(series_id).await {
            tracing::debug!(series_id, "volume cache hit");
            return Ok(Some(cached));
        }
        let Some(volume) = absorb_query_failure(self.api.get_volume(series_id).await)? else {
            return Ok(None);
        };
        self.cache.add_volume_info(&volume).await;
        Ok(Some(volume))
    }

    /// Fetch a single issue of a series as normalized metadata.
    ///
    /// The issue number is matched against the volume's issue stubs by
    /// floating-point equality, first match wins. The full issue record is
    /// fetched directly and never cached.
    pub async fn fetch_issue(
        &self,
        series_id: i64,
        issue_number: &str,
    ) -> Result<Option<GenericMetadata>, MetadataError> {
        let Some(volume) = self.fetch_volume(series_id).await? else {
            return Ok(None);
        };

        let Ok(wanted) = issue_number.trim().parse::<f64>() else {
            tracing::warn!(series_id, issue_number, "issue number is not numeric");
            return Ok(None);
        };
        let matched = volume.issues.iter().find(|stub| {
            stub.issue_number
                .parse::<f64>()
                .is_ok_and(|number| number == wanted)
        });
        let Some(stub) = matched else {
            tracing::debug!(series_id, issue_number, "issue not present in volume");
            return Ok(None);
        };

        let Some(issue) = absorb_query_failure(self.api.get_issue(stub.id).await)? else {
            return Ok(None);
        };
        Ok(Some(map_issue(&volume, &issue)))
    }

    /// Resolve the (full image, thumbnail) cover URLs for an issue,
    /// cache-first by issue id.
    ///
    /// A remote query failure yields `(None, None)` without touching the
    /// cache; a successful response is cached only when the full image URL
    /// is present.
    pub async fn fetch_cover_urls(
        &self,
        issue_id: i64,
    ) -> Result<(Option<String>, Option<String>), MetadataError> {
        let (cached_image, cached_thumb) = self.cache.get_issue_image_urls(issue_id).await;
        if cached_image.is_some() {
            return Ok((cached_image, cached_thumb));
        }

        let Some(image) = absorb_query_failure(self.api.get_issue_image(issue_id).await)? else {
            return Ok((None, None));
        };
        if let Some(url) = &image.super_url {
            self.cache
                .add_issue_image_urls(issue_id, url.clone(), image.thumb_url.clone())
                .await;
        }
        Ok((image.super_url, image.thumb_url))
    }

    /// Backgrounded variant of [`fetch_cover_urls`](Self::fetch_cover_urls).
    ///
    /// The fetch runs on a spawned task; completion is delivered on the
    /// returned channel as a [`CoverUrls`] carrying the issue id it was
    /// requested for. Cache hits complete without a transport call.
    /// Transport failures are logged and delivered as an absent pair.
    pub fn fetch_cover_urls_background(&self, issue_id: i64) -> oneshot::Receiver<CoverUrls> {
        let (sender, receiver) = oneshot::channel();
        let talker = self.clone();
        tokio::spawn(async move {
            let (image_url, thumb_url) = match talker.fetch_cover_urls(issue_id).await {
                Ok(pair) => pair,
                Err(error) => {
                    tracing::error!(issue_id, "cover URL fetch failed: {error}");
                    (None, None)
                }
            };
            let _ = sender.send(CoverUrls {
                issue_id,
                image_url,
                thumb_url,
            });
        });
        receiver
    }
}

/// Convert a remote query failure into an absent result, logging the server
/// message; every other error propagates.
fn absorb_query_failure<T>(
    result: comicvine::Result<T>,
) -> Result<Option<T>, MetadataError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ComicvineError::Api {
            status_code,
            message,
        }) => {
            tracing::warn!(status_code, "Comic Vine query failed with error: [{message}]");
            Ok(None)
        }
        Err(error) => Err(MetadataError::from(error)),
    }
}
