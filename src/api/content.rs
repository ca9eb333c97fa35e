//! Read-only content endpoints.

use axum::extract::{Query, State};
use serde::Deserialize;

use super::{error, parse_language, success, ApiResult};
use crate::filter::SpotFilter;
use crate::models::{CategoryView, Content, MenuLabels, Spot};
use crate::AppState;

/// Query parameters for the stateless spot listing.
#[derive(Debug, Default, Deserialize)]
pub struct SpotsQuery {
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

/// Query parameters selecting a display language.
#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    #[serde(default)]
    pub lang: Option<String>,
}

/// GET /api/content - Home-language content.
pub async fn get_content(State(state): State<AppState>) -> ApiResult<Content> {
    let content = state.store.snapshot().await;
    let revision_id = content.revision_id;
    success(content, revision_id)
}

/// GET /api/spots - Projected and filtered spots. Does not touch the shared view.
pub async fn list_spots(
    State(state): State<AppState>,
    Query(params): Query<SpotsQuery>,
) -> ApiResult<Vec<Spot>> {
    let content = state.store.snapshot().await;

    let language = match parse_language(params.lang.as_deref()) {
        Ok(language) => language,
        Err(e) => return error(e, content.revision_id),
    };

    let display = state.display.project(&content, language).await;
    let filter = SpotFilter::new(
        params.category.as_deref(),
        params.neighborhood.as_deref(),
        params.q.as_deref().unwrap_or_default(),
    );

    success(filter.apply(&display.spots), content.revision_id)
}

/// GET /api/categories - Projected categories with presentation hints.
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<LanguageQuery>,
) -> ApiResult<Vec<CategoryView>> {
    let content = state.store.snapshot().await;

    let language = match parse_language(params.lang.as_deref()) {
        Ok(language) => language,
        Err(e) => return error(e, content.revision_id),
    };

    let display = state.display.project(&content, language).await;
    let categories = display
        .categories
        .into_iter()
        .map(CategoryView::from)
        .collect();

    success(categories, content.revision_id)
}

/// GET /api/neighborhoods - List neighborhoods.
pub async fn list_neighborhoods(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    let revision_id = state.store.revision_id().await;
    success(state.store.neighborhoods().await, revision_id)
}

/// GET /api/menu-labels - Sidebar menu labels.
pub async fn get_menu_labels(State(state): State<AppState>) -> ApiResult<MenuLabels> {
    let revision_id = state.store.revision_id().await;
    success(state.store.menu_labels().await, revision_id)
}
