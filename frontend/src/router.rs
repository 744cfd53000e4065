//! POS request routing.

use crate::query::QueryVars;
use crate::state::AppState;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Serves the POS shell in place of the normal page on POS requests.
///
/// Anonymous viewers are redirected to the "my account" page. Requests that
/// are not POS requests pass through untouched.
pub async fn rewrite_templates(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let query = QueryVars::from_uri(req.uri(), &state.config.pos_path);
    if !query.is_pos_request() {
        return next.run(req).await;
    }

    if !state.is_logged_in(req.headers()) {
        let location = state.config.myaccount_url();
        info!(path = %req.uri().path(), %location, "Redirecting anonymous POS request");
        return (StatusCode::FOUND, [(header::LOCATION, location)]).into_response();
    }

    debug!(path = %req.uri().path(), "Serving POS shell");
    match state.render_pos_page(query) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render POS shell: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
