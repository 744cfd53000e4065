#![allow(dead_code)]

use std::sync::Arc;
use tempfile::TempDir;
use wepos_frontend::{AppState, AppStateBuilder, AssetSpec, FrontendConfig, build_router};

pub const SESSION: &str = "s3cr3t";

pub const CATALOG: &str = r#"{
  "terms": {
    "product_cat": [
      { "term_id": 2, "parent": 1, "name": "Coffee", "count": 4 },
      { "term_id": 1, "parent": 0, "name": "Drinks", "count": 9 },
      { "term_id": 3, "parent": 0, "name": "Food", "count": 2 },
      { "term_id": 9, "parent": 42, "name": "Lost", "count": 0 }
    ]
  },
  "posts": [
    { "id": 7, "post_type": "page", "post_title": "Checkout" },
    { "id": 8, "post_type": "product", "post_title": "Latte" },
    { "id": 5, "post_type": "page", "post_title": "Shop" }
  ]
}"#;

/// A site with one theme stylesheet and script, a catalog and a known
/// session. The returned directory holds the files and must outlive the test.
pub fn site_config() -> (FrontendConfig, TempDir) {
    let dir = TempDir::new().unwrap();
    let site = dir.path().join("site");
    std::fs::create_dir(&site).unwrap();
    std::fs::write(site.join("index.html"), "<html><body>Corner Cafe home</body></html>").unwrap();

    let catalog = dir.path().join("catalog.json");
    std::fs::write(&catalog, CATALOG).unwrap();

    let mut config = FrontendConfig {
        site_name: "Corner Cafe".into(),
        home_url: "https://cafe.example".into(),
        site_dir: Some(site),
        catalog_path: Some(catalog),
        languages_dir: dir.path().join("languages"),
        ..FrontendConfig::default()
    };
    config.auth.sessions = vec![SESSION.to_string()];
    config.host_assets.styles = vec![AssetSpec::new("theme-style", "/theme/style.css")];
    config.host_assets.scripts = vec![AssetSpec::new("theme-js", "/theme/app.js")];
    (config, dir)
}

pub fn builder(config: FrontendConfig) -> AppStateBuilder {
    AppState::builder(config).unwrap()
}

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
pub async fn spawn(state: AppState) -> String {
    let app = build_router(Arc::new(state));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

pub async fn spawn_site() -> (String, TempDir) {
    let (config, dir) = site_config();
    (spawn(builder(config).build()).await, dir)
}

/// Client that does not follow redirects.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

pub fn session_cookie() -> String {
    format!("wepos_session={SESSION}")
}
