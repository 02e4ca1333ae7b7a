#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use pokedex_api::config::ServerConfig;
use pokedex_api::router::build_app_router;
use pokedex_api::state::AppState;
use pokedex_catalog::model::{Name, Stats};
use pokedex_catalog::{CatalogCache, CatalogError, CatalogIndex, CatalogSource, Pokemon};

// ---------------------------------------------------------------------------
// Catalog doubles
// ---------------------------------------------------------------------------

/// Always answers with the same catalog.
pub struct StaticCatalog(pub Vec<Pokemon>);

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch(&self) -> Result<Vec<Pokemon>, CatalogError> {
        Ok(self.0.clone())
    }
}

/// Upstream answering 503.
pub struct DownCatalog;

#[async_trait]
impl CatalogSource for DownCatalog {
    async fn fetch(&self) -> Result<Vec<Pokemon>, CatalogError> {
        Err(CatalogError::Status {
            status: 503,
            body: "maintenance".to_string(),
        })
    }
}

/// Upstream answering with something that is not a catalog.
pub struct GarbledCatalog;

#[async_trait]
impl CatalogSource for GarbledCatalog {
    async fn fetch(&self) -> Result<Vec<Pokemon>, CatalogError> {
        Err(pokedex_catalog::fetcher::decode_catalog(b"<html>").unwrap_err())
    }
}

pub fn pokemon(id: i64, fr: &str, en: &str) -> Pokemon {
    Pokemon {
        pokedex_id: id,
        name: Name {
            fr: fr.to_string(),
            en: en.to_string(),
            jp: String::new(),
        },
        stats: Some(Stats {
            hp: 35,
            atk: 55,
            def: 40,
            spe_atk: 50,
            spe_def: 50,
            vit: 90,
        }),
        ..Default::default()
    }
}

pub fn sample_catalog() -> Vec<Pokemon> {
    vec![
        pokemon(1, "Bulbizarre", "Bulbasaur"),
        pokemon(7, "Carapuce", "Squirtle"),
        pokemon(25, "Pikachu", "Pikachu"),
    ]
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        catalog_api_url: "http://catalog.invalid/api/v1/pokemon".to_string(),
    }
}

/// Build the full application router over the sample catalog.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, Arc::new(StaticCatalog(sample_catalog())))
}

/// Build the full application router with a custom catalog source.
///
/// Goes through `build_app_router` so tests exercise the same middleware
/// stack as production.
pub fn build_test_app_with(pool: PgPool, source: Arc<dyn CatalogSource>) -> Router {
    let config = test_config();
    let catalog = CatalogIndex::new(Arc::new(CatalogCache::new(source)));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        catalog,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body (already encoded).
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST with no body and no `Content-Type`, as a bare HTML button would.
pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a JSON body, which the note endpoints do not read.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get("location")
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
}
