use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::AppState;
use crate::error::GuideError;
use crate::models::*;
use crate::render::{INDEX_PAGE, STYLESHEET_PAGE};

// ============================================================
// Error Handling
// ============================================================

/// Map a registry error to a response. Lookup failures are exposed to the
/// client as 404s; anything else is logged and returned as a generic 500.
fn guide_error(e: GuideError) -> (StatusCode, String) {
    if e.is_not_found() {
        tracing::debug!("Lookup failed: {}", e);
        return (StatusCode::NOT_FOUND, e.to_string());
    }

    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

// ============================================================
// Health
// ============================================================

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": state.registry.version(),
    }))
}

// ============================================================
// Site pages
// ============================================================

pub async fn index_page(State(state): State<AppState>) -> Response {
    page_response(&state, INDEX_PAGE)
}

pub async fn site_page(State(state): State<AppState>, Path(page): Path<String>) -> Response {
    page_response(&state, &page)
}

fn page_response(state: &AppState, name: &str) -> Response {
    let Some(content) = state.site.page(name) else {
        return (StatusCode::NOT_FOUND, "Page not found").into_response();
    };

    if name == STYLESHEET_PAGE {
        ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], content.to_string()).into_response()
    } else {
        Html(content.to_string()).into_response()
    }
}

// ============================================================
// Guide
// ============================================================

pub async fn get_guide(State(state): State<AppState>) -> Json<Guide> {
    Json(state.registry.guide().clone())
}

pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategorySummary>> {
    Json(state.registry.category_summaries())
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>, (StatusCode, String)> {
    state
        .registry
        .category(&id)
        .cloned()
        .map(Json)
        .map_err(guide_error)
}

// ============================================================
// Rules
// ============================================================

pub async fn list_rules(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Rule>>, (StatusCode, String)> {
    state
        .registry
        .list_rules(&id)
        .map(|rules| Json(rules.to_vec()))
        .map_err(guide_error)
}

pub async fn get_rule(
    State(state): State<AppState>,
    Path((id, rule)): Path<(String, String)>,
) -> Result<Json<Rule>, (StatusCode, String)> {
    state
        .registry
        .get_rule(&id, &rule)
        .cloned()
        .map(Json)
        .map_err(guide_error)
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<RuleRef>> {
    Json(state.registry.search(&query.q))
}
