use std::time::Duration;

/// Errors from fetching or decoding the upstream catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (network, DNS, TLS, client timeout).
    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The fetch did not complete within the allotted time.
    #[error("Catalog fetch timed out after {0:?}")]
    Timeout(Duration),

    /// The body was received but is not a catalog payload.
    #[error("Malformed catalog payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl CatalogError {
    /// `true` for decode failures, `false` for the upstream being unreachable
    /// or unhealthy.
    pub fn is_malformed(&self) -> bool {
        matches!(self, CatalogError::Malformed(_))
    }
}
