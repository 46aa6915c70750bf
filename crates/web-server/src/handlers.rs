use crate::{error::AppError, html, AppState};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Html,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use views::{Controls, Page, ViewId};

/// One entry of the navigation menu.
#[derive(Debug, Serialize)]
pub struct ViewSummary {
    pub id: ViewId,
    pub label: &'static str,
    pub index: usize,
}

/// # GET /api/health
pub async fn health() -> &'static str {
    "OK"
}

/// # GET /api/views
/// Lists the dashboard pages in menu order.
pub async fn list_views() -> Json<Vec<ViewSummary>> {
    Json(
        ViewId::ALL
            .iter()
            .map(|&id| ViewSummary { id, label: id.label(), index: id.menu_index() })
            .collect(),
    )
}

/// # GET /api/views/:view
/// Renders one page as JSON. Controls are read from the query string.
pub async fn get_view(
    Path(view): Path<String>,
    State(state): State<Arc<AppState>>,
    controls: Result<Query<Controls>, QueryRejection>,
) -> Result<Json<Page>, AppError> {
    let page = render(&state, &view, controls)?;
    Ok(Json(page))
}

/// # GET /
/// The HTML shell opened on the default page.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let page = views::render(state.bundle, ViewId::default(), &Controls::default(), &state.views)?;
    Ok(Html(html::render_document(&page)))
}

/// # GET /views/:view
pub async fn get_view_html(
    Path(view): Path<String>,
    State(state): State<Arc<AppState>>,
    controls: Result<Query<Controls>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let page = render(&state, &view, controls)?;
    Ok(Html(html::render_document(&page)))
}

fn render(
    state: &AppState,
    view: &str,
    controls: Result<Query<Controls>, QueryRejection>,
) -> Result<Page, AppError> {
    let view: ViewId = view.parse()?;
    let Query(controls) = controls.map_err(|e| AppError::BadRequest(e.body_text()))?;
    tracing::debug!(view = %view, "Serving page.");
    Ok(views::render(state.bundle, view, &controls, &state.views)?)
}
