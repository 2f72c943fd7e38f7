use thiserror::Error;

/// Errors that can occur in the metadata layer.
///
/// Remote query failures (envelope status ≠ 1) never surface here; the
/// talker logs them and returns absent results instead. What remains are
/// transport and decode failures.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Comic Vine API error: {0}")]
    Comicvine(#[from] comicvine::ComicvineError),
}
