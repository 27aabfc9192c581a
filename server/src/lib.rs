//! HTTP surface for the recipe search engine.
//!
//! The search context (store + ranking index) is built from the CSV at
//! startup and held behind one `RwLock<Arc<_>>`. Queries clone the `Arc`
//! and run lock-free against a frozen context; `/reload` rebuilds a fresh
//! context off the request path and publishes it with a single swap, so
//! readers never observe a store whose rows disagree with the index.

pub mod loader;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use parking_lot::RwLock;
use ricetta_core::{search, SearchContext, SearchOutcome, SearchResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}
fn default_limit() -> usize {
    12
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub query_tokens: Vec<String>,
    pub total_hits: usize,
    pub results: Vec<SearchResult>,
}

#[derive(Clone)]
pub struct AppState {
    pub csv_path: PathBuf,
    pub ctx: Arc<RwLock<Arc<SearchContext>>>,
    pub admin_token: Option<String>,
}

pub fn build_app(csv_path: PathBuf) -> Router {
    let ctx = loader::load_context(&csv_path);
    let admin_token = std::env::var("ADMIN_TOKEN").ok();
    let state = AppState {
        csv_path,
        ctx: Arc::new(RwLock::new(Arc::new(ctx))),
        admin_token,
    };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any)
            } else {
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_methods(Any)
                    .allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/recipe/:id", get(recipe_handler))
        .route("/reload", post(reload_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let limit = params.limit.clamp(1, 100);
    let ctx = state.ctx.read().clone();

    // Empty queries never reach the index.
    let outcome = if params.q.trim().is_empty() {
        SearchOutcome::default()
    } else {
        search(&ctx, &params.q, limit)
    };

    Json(SearchResponse {
        query: params.q,
        took_s: start.elapsed().as_secs_f64(),
        query_tokens: outcome.query_tokens,
        total_hits: outcome.results.len(),
        results: outcome.results,
    })
}

pub async fn recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Json<serde_json::Value> {
    let ctx = state.ctx.read().clone();
    match ctx.store.get(id) {
        Some(recipe) => Json(serde_json::json!({
            "id": recipe.id,
            "title": recipe.title,
            "ingredients": recipe.ingredients,
            "steps": recipe.steps,
            "url": recipe.url,
        })),
        None => Json(serde_json::json!({ "error": "not found" })),
    }
}

async fn reload_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    authorize(&state, &headers)?;
    let fresh = loader::load_context(&state.csv_path);
    let num_docs = fresh.store.len();
    // Single swap: store and index are always published together.
    *state.ctx.write() = Arc::new(fresh);
    tracing::info!(num_docs, "dataset reloaded");
    Ok(Json(serde_json::json!({ "status": "ok", "num_docs": num_docs })))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), (StatusCode, String)> {
    let required = match &state.admin_token {
        Some(token) => token,
        None => return Err((StatusCode::UNAUTHORIZED, "ADMIN_TOKEN not set".into())),
    };
    let provided = headers
        .get("X-ADMIN-TOKEN")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if provided == required {
        Ok(())
    } else {
        Err((StatusCode::UNAUTHORIZED, "invalid admin token".into()))
    }
}
