//! WePOS frontend.
//!
//! Serves the point-of-sale application in place of the normal site page
//! when a request asks for it (`?wcpos=true`, or the rewritten `/pos` URL),
//! isolates the page from the site theme's assets, and exposes the settings
//! schema, locale bundle and catalog data the application reads.

mod api;
mod assets;
mod auth;
mod config;
mod error;
mod isolator;
mod query;
mod router;
mod state;
mod template;

use axum::http::StatusCode;
use axum::middleware;
use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use assets::{Asset, AssetRegistry, Dependencies, esc_attr};
pub use auth::{Authenticator, CookieSessions};
pub use config::{AssetSpec, AssetsConfig, AuthConfig, FrontendConfig, LocaleConfig};
pub use error::{FrontendError, FrontendResult};
pub use isolator::{
    ENQUEUE_PRIORITY, ENQUEUE_SCRIPTS_HOOK, PRINT_STYLES_PRIORITY, PosPage,
    RESET_SCRIPTS_PRIORITY, RESET_STYLES_PRIORITY, footer_actions, head_actions, show_admin_bar,
};
pub use query::{POS_QUERY_VAR, QueryVars};
pub use router::rewrite_templates;
pub use state::{AppState, AppStateBuilder, BOOT_OBJECT};
pub use template::{DEFAULT_SHELL, Shell, ShellSlots};

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Build the HTTP router: the JSON API plus the site behind the POS rewrite.
pub fn build_router(state: Arc<AppState>) -> Router {
    let site: Router<Arc<AppState>> = match &state.config.site_dir {
        Some(dir) => Router::new().fallback_service(ServeDir::new(dir)),
        None => Router::new().fallback(not_found),
    };
    // Only site pages can become POS pages; the JSON API is never rewritten.
    let site = site.layer(middleware::from_fn_with_state(
        Arc::clone(&state),
        router::rewrite_templates,
    ));

    Router::new()
        .nest("/api/v1", api::api_router())
        .merge(site)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
