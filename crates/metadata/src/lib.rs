//! Normalized comic metadata layer.
//!
//! This crate turns raw Comic Vine records into a source-agnostic
//! [`GenericMetadata`] record and drives the cached search/fetch flows:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               ComicvineTalker                │
//! │  search_series / fetch_volume / fetch_issue  │
//! │  fetch_cover_urls (+ backgrounded variant)   │
//! └──────────────────────────────────────────────┘
//!        │                          │
//!   ComicvineApi               ComicCache
//!   (remote transport)    (local key-value store)
//! ```
//!
//! Remote query failures and missing issues are logged and surfaced as
//! absent results; transport failures propagate as errors.

mod cache;
mod error;
mod mapper;
mod models;
mod talker;

pub use cache::{ComicCache, MemoryCache};
pub use error::MetadataError;
pub use mapper::map_issue;
pub use models::{CoverUrls, Credit, GenericMetadata};
pub use talker::ComicvineTalker;
