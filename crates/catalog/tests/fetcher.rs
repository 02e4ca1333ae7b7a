//! Integration tests for the HTTP catalog fetcher.
//!
//! Each test serves canned responses from a local Axum server bound to an
//! ephemeral port and points a real [`CatalogFetcher`] at it.

use std::net::SocketAddr;
use std::sync::Arc;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use pokedex_catalog::{CatalogCache, CatalogError, CatalogFetcher, CatalogIndex, CatalogSource};

const CATALOG_JSON: &str = r#"[
    {
        "pokedex_id": 25,
        "generation": 1,
        "category": "Pokémon Souris",
        "name": { "fr": "Pikachu", "en": "Pikachu", "jp": "ピカチュウ" },
        "sprites": { "regular": "https://example.test/25/regular.png", "shiny": null },
        "types": [ { "name": "Électrik", "image": "https://example.test/electrik.png" } ],
        "stats": { "hp": 35, "atk": 55, "def": 40, "spe_atk": 50, "spe_def": 50, "vit": 90 },
        "evolution": { "pre": [ { "pokedex_id": 172, "name": "Pichu", "condition": "Bonheur" } ], "next": null, "mega": null },
        "sexe": { "male": 50.0, "female": 50.0 }
    },
    {
        "pokedex_id": 26,
        "name": { "fr": "Raichu", "en": "Raichu", "jp": "ライチュウ" },
        "evolution": null,
        "sexe": null
    }
]"#;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn spawn_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/pokemon", get(|| async { CATALOG_JSON }))
        .route(
            "/down",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        )
        .route("/garbled", get(|| async { "<html>not json</html>" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn fetcher(addr: SocketAddr, path: &str) -> CatalogFetcher {
    CatalogFetcher::new(format!("http://{addr}{path}")).unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetches_and_decodes_catalog() {
    let addr = spawn_upstream().await;

    let catalog = fetcher(addr, "/pokemon").fetch().await.unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].name.fr, "Pikachu");
    assert_eq!(catalog[0].stats.as_ref().unwrap().total(), 320);
    assert_eq!(catalog[0].evolution.as_ref().unwrap().pre[0].pokedex_id, 172);
    assert!(catalog[1].evolution.is_none());
    assert!(catalog[1].sexe.is_none());
}

#[tokio::test]
async fn non_success_status_is_reported_with_body() {
    let addr = spawn_upstream().await;

    let err = fetcher(addr, "/down").fetch().await.unwrap_err();

    assert_matches!(
        err,
        CatalogError::Status { status: 503, ref body } if body == "maintenance"
    );
    assert!(!err.is_malformed());
}

#[tokio::test]
async fn undecodable_body_is_malformed() {
    let addr = spawn_upstream().await;

    let err = fetcher(addr, "/garbled").fetch().await.unwrap_err();

    assert!(err.is_malformed());
}

#[tokio::test]
async fn unreachable_upstream_is_a_request_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = fetcher(addr, "/pokemon").fetch().await.unwrap_err();

    assert_matches!(err, CatalogError::Request(_));
}

#[tokio::test]
async fn index_resolves_through_real_fetcher() {
    let addr = spawn_upstream().await;
    let source: Arc<dyn CatalogSource> = Arc::new(fetcher(addr, "/pokemon"));
    let index = CatalogIndex::new(Arc::new(CatalogCache::new(source)));

    let raichu = index.find_by_id(26).await.unwrap().unwrap();
    assert_eq!(raichu.name.en, "Raichu");
    assert!(index.find_by_id(1).await.unwrap().is_none());
}
