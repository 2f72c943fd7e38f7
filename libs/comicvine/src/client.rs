use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::ComicvineError;
use crate::models::RawEnvelope;

const BASE_URL: &str = "https://api.comicvine.com";
pub(crate) const USER_AGENT: &str = "longbox/comicvine";

/// Envelope status code for a successful query.
const STATUS_OK: i64 = 1;
/// Envelope status code returned for an invalid API key.
const STATUS_INVALID_KEY: i64 = 100;

/// Shared API key that can be updated at runtime.
pub type ApiKey = Arc<RwLock<String>>;

pub struct ComicvineClient {
    client: Client,
    api_key: ApiKey,
    base_url: String,
}

impl ComicvineClient {
    /// Create a ComicvineClient with a reqwest Client.
    pub fn new(client: Client, api_key: ApiKey) -> Self {
        Self::with_base_url(client, api_key, BASE_URL)
    }

    /// Create a client against a non-default base URL (mirror or test server).
    pub fn with_base_url(client: Client, api_key: ApiKey, base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.into(),
        }
    }

    /// Get the current API key
    pub(crate) fn api_key(&self) -> String {
        self.api_key.read().clone()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a GET request and decode the response envelope. The HTTP status
    /// is checked here; the envelope `status_code` is not.
    pub(crate) async fn get_raw(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> crate::Result<RawEnvelope> {
        let url = self.url(path);
        let api_key = self.api_key();
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .query(&[("api_key", api_key.as_str()), ("format", "json")])
            .query(params)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ComicvineError::Http {
                status: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(json_error)
    }

    /// GET a single-record endpoint: envelope status must be 1, and the
    /// `results` object is decoded into `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> crate::Result<T> {
        let envelope = self.get_raw(path, params).await?.into_checked()?;
        serde_path_to_error::deserialize(envelope.results).map_err(json_error)
    }

    /// Probe whether the configured API key is accepted by the service.
    ///
    /// The request itself is bogus by design; a wrong key is reported with
    /// envelope status 100, so no envelope-status check is applied here.
    /// GET /issue/1/?field_list=name
    pub async fn test_key(&self) -> crate::Result<bool> {
        let envelope = self.get_raw("/issue/1/", &[("field_list", "name")]).await?;
        Ok(envelope.status_code != STATUS_INVALID_KEY)
    }
}

impl RawEnvelope {
    /// Reject envelopes whose remote status code signals a query failure.
    pub(crate) fn into_checked(self) -> crate::Result<Self> {
        if self.status_code != STATUS_OK {
            return Err(ComicvineError::Api {
                status_code: self.status_code,
                message: self.error,
            });
        }
        Ok(self)
    }
}

pub(crate) fn json_error(err: serde_path_to_error::Error<serde_json::Error>) -> ComicvineError {
    ComicvineError::Json {
        path: err.path().to_string(),
        source: err.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ApiKey {
        Arc::new(RwLock::new("test-key".to_string()))
    }

    #[test]
    fn url_joins_base_and_path() {
        let client = ComicvineClient::with_base_url(Client::new(), key(), "http://localhost:9000");
        assert_eq!(
            client.url("/volume/4050/"),
            "http://localhost:9000/volume/4050/"
        );
    }

    #[test]
    fn checked_envelope_rejects_remote_failure() {
        let raw: RawEnvelope = serde_json::from_str(
            r#"{"status_code": 107, "error": "Rate limit exceeded", "results": []}"#,
        )
        .unwrap();
        let err = raw.into_checked().unwrap_err();
        match err {
            ComicvineError::Api {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 107);
                assert_eq!(message, "Rate limit exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn checked_envelope_accepts_success() {
        let raw: RawEnvelope =
            serde_json::from_str(r#"{"status_code": 1, "error": "OK", "results": {}}"#).unwrap();
        assert!(raw.into_checked().is_ok());
    }
}
