//! Route handlers for the web UI and API.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::AppState;
use crate::error::{ApiError, ApiResult};
use crate::export::{ExportMeta, export_papers};
use crate::formatters::{compact_paper, format_search_result};
use crate::models::{ExportFormat, SearchField, SearchQuery, SearchResult, SortBy, SortOrder};

/// Embedded single-page UI.
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/search", get(handle_search))
        .route("/api/export", get(handle_export))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Query parameters shared by search and export.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// The search term.
    query: String,

    /// Number of results to return (clamped server-side).
    max_results: Option<usize>,

    /// Field the term applies to.
    #[serde(default)]
    field: SearchField,

    /// Sort key.
    #[serde(default)]
    sort: SortBy,

    /// Sort direction.
    #[serde(default)]
    order: SortOrder,
}

/// Query parameters for the export endpoint.
///
/// Repeats the search fields rather than flattening `SearchParams`;
/// serde_urlencoded cannot drive typed fields through `#[serde(flatten)]`.
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    /// The search term.
    query: String,

    /// Number of results to return (clamped server-side).
    max_results: Option<usize>,

    /// Field the term applies to.
    #[serde(default)]
    field: SearchField,

    /// Sort key.
    #[serde(default)]
    sort: SortBy,

    /// Sort direction.
    #[serde(default)]
    order: SortOrder,

    /// Download format.
    #[serde(default)]
    format: ExportFormat,
}

impl ExportParams {
    fn search_params(&self) -> SearchParams {
        SearchParams {
            query: self.query.clone(),
            max_results: self.max_results,
            field: self.field,
            sort: self.sort,
            order: self.order,
        }
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "scholarsift",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Run a search and return the result set plus a rendered report.
async fn handle_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let result = run_search(&state, &params).await?;

    Ok(Json(serde_json::json!({
        "query": result.query,
        "total": result.total,
        "start": result.start,
        "count": result.papers.len(),
        "papers": result.papers.iter().map(compact_paper).collect::<Vec<_>>(),
        "report": format_search_result(&result),
    })))
}

/// Run a search and stream the result set as a downloadable document.
///
/// The search is repeated with the same parameters; the client cache
/// makes this a no-op upstream when it follows a search.
async fn handle_export(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExportParams>,
) -> ApiResult<Response> {
    let result = run_search(&state, &params.search_params()).await?;

    let meta = ExportMeta::new(&result.query);
    let bytes = export_papers(&result.papers, params.format, &meta)?;

    let headers = [
        (header::CONTENT_TYPE, params.format.mime_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", meta.filename(params.format)),
        ),
    ];

    Ok((headers, bytes).into_response())
}

async fn run_search(state: &AppState, params: &SearchParams) -> ApiResult<SearchResult> {
    let query = SearchQuery::keyword(params.query.trim())
        .with_field(params.field)
        .with_max_results(state.config.clamp_max_results(params.max_results))
        .with_sort(params.sort, params.order);

    if query.is_blank() {
        return Err(ApiError::validation("query", "cannot be empty"));
    }

    tracing::info!(
        query = %query.search_query(),
        max_results = query.max_results,
        "Searching arXiv"
    );

    Ok(state.client.search(&query).await?)
}
