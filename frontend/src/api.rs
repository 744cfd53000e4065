//! JSON endpoints the POS application and the admin screen read from.

use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use wepos_i18n::LocaleBundle;
use wepos_model::{SelectOption, Term};
use wepos_settings::{SettingsFields, SettingsSchema, SettingsSection};

/// Routes mounted under `/api/v1`.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/settings", get(settings_schema))
        .route("/settings/sections", get(settings_sections))
        .route("/settings/fields", get(settings_fields))
        .route("/locale", get(locale_data))
        .route("/categories", get(categories))
        .route("/post-types/{post_type}", get(post_type_options))
}

async fn settings_schema(State(state): State<Arc<AppState>>) -> Json<SettingsSchema> {
    Json(state.settings_schema())
}

async fn settings_sections(State(state): State<Arc<AppState>>) -> Json<Vec<SettingsSection>> {
    Json(state.settings_sections())
}

async fn settings_fields(State(state): State<Arc<AppState>>) -> Json<SettingsFields> {
    Json(state.settings_fields())
}

#[derive(Debug, Default, Deserialize)]
struct LocaleParams {
    #[serde(default)]
    admin: bool,
}

async fn locale_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LocaleParams>,
) -> Json<LocaleBundle> {
    Json(state.locale_bundle(params.admin))
}

async fn categories(State(state): State<Arc<AppState>>) -> Json<Vec<Term>> {
    Json(state.product_categories())
}

async fn post_type_options(
    State(state): State<Arc<AppState>>,
    Path(post_type): Path<String>,
) -> Json<Vec<SelectOption>> {
    Json(state.post_type_options(&post_type))
}
