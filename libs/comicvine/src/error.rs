use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComicvineError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// The service answered, but the response envelope reported a query
    /// failure (status code other than 1).
    #[error("Comic Vine query failed with error: [{message}] (status code {status_code})")]
    Api { status_code: i64, message: String },

    #[error("JSON decode error at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}
