//! HTTP client for the upstream catalog endpoint.
//!
//! Wraps the Tyradex `GET /pokemon` endpoint using [`reqwest`]. The body is
//! read in full before decoding so a broken payload surfaces as
//! [`CatalogError::Malformed`] rather than a transport error.

use async_trait::async_trait;

use crate::cache::FETCH_TIMEOUT;
use crate::error::CatalogError;
use crate::model::Pokemon;

/// Anything that can produce the full catalog.
///
/// [`CatalogFetcher`] is the network implementation; the cache only depends
/// on this trait so it can be driven by in-memory sources in tests.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Pokemon>, CatalogError>;
}

/// HTTP client for the upstream catalog.
pub struct CatalogFetcher {
    client: reqwest::Client,
    api_url: String,
}

impl CatalogFetcher {
    /// Create a fetcher for the given endpoint URL, with the request bounded
    /// by [`FETCH_TIMEOUT`].
    pub fn new(api_url: String) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self { client, api_url })
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`CatalogError::Status`] containing the
    /// status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CatalogSource for CatalogFetcher {
    async fn fetch(&self) -> Result<Vec<Pokemon>, CatalogError> {
        let response = self.client.get(&self.api_url).send().await?;
        let response = Self::ensure_success(response).await?;
        let body = response.bytes().await?;
        decode_catalog(&body)
    }
}

/// Decode a catalog payload: a JSON array of entities.
pub fn decode_catalog(body: &[u8]) -> Result<Vec<Pokemon>, CatalogError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn decodes_array() {
        let body = r#"[
            { "pokedex_id": 1, "name": { "fr": "Bulbizarre", "en": "Bulbasaur", "jp": "" } },
            { "pokedex_id": 4, "name": { "fr": "Salamèche", "en": "Charmander", "jp": "ヒトカゲ" } }
        ]"#;
        let catalog = decode_catalog(body.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[1].name.en, "Charmander");
        assert_eq!(catalog[1].name.fr, "Salamèche");
        assert_eq!(catalog[1].name.jp, "ヒトカゲ");
    }

    #[test]
    fn object_instead_of_array_is_malformed() {
        let err = decode_catalog(br#"{ "status": 500, "message": "boom" }"#).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn truncated_body_is_malformed() {
        let err = decode_catalog(br#"[{ "pokedex_id": 1, "name": "#).unwrap_err();
        assert_matches!(err, CatalogError::Malformed(_));
    }
}
