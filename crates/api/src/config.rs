/// Server configuration loaded from environment variables.
///
/// Optional fields have defaults suitable for local development. The catalog
/// endpoint has no default: the server refuses to start without it.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upstream catalog endpoint (`CATALOG_API_URL`, required).
    pub catalog_api_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `CATALOG_API_URL`      | required                   |
    ///
    /// Panics on a missing `CATALOG_API_URL` or unparsable numbers; bad
    /// configuration should stop the process before it binds.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let catalog_api_url = std::env::var("CATALOG_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .expect("CATALOG_API_URL must be set");

        Self {
            host,
            port,
            request_timeout_secs,
            catalog_api_url,
        }
    }
}
