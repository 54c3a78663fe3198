//! Storefront HTTP endpoints.
//!
//! - `/`             : greeting text
//! - `/search`       : record a product search
//! - `/top-searches` : most searched products

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use searchpulse_core::error::SearchPulseError;
use searchpulse_core::TermCount;

use crate::app_state::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub product: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct TopSearchesQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopSearchesResponse {
    pub top_searched_products: Vec<TermCount>,
}

pub async fn home(State(app): State<AppState>) -> String {
    app.cfg().server.greeting.clone()
}

pub async fn search(
    State(app): State<AppState>,
    Query(q): Query<SearchQuery>,
) -> Json<SearchResponse> {
    // absent => default term; present but empty is kept as ""
    let product = q
        .product
        .unwrap_or_else(|| app.cfg().search.default_term.clone());

    tracing::info_span!("search_product", product = %product).in_scope(|| {
        app.tracker().record(&product);
        app.metrics()
            .search_requests
            .inc(&[("product", product.as_str())]);
        tracing::debug!("search recorded");
    });

    Json(SearchResponse {
        message: format!("Search performed for {product}"),
    })
}

pub async fn top_searches(
    State(app): State<AppState>,
    Query(q): Query<TopSearchesQuery>,
) -> Result<Json<TopSearchesResponse>, ApiError> {
    let search = &app.cfg().search;
    let n = q.limit.unwrap_or(search.top_n);
    if n > search.max_top_n {
        return Err(SearchPulseError::BadRequest(format!(
            "limit must be at most {}",
            search.max_top_n
        ))
        .into());
    }

    Ok(Json(TopSearchesResponse {
        top_searched_products: app.tracker().top_n(n),
    }))
}

pub async fn not_found() -> ApiError {
    ApiError(SearchPulseError::NotFound)
}
