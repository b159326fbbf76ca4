//! Records Routes
//!
//! - GET /api/v1/records - One page of the dataset as JSON records

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{RecordsParams, RecordsResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::layout::{render::clamp_page, Component, DEFAULT_PAGE_SIZE};

/// Largest page a client may request
const MAX_PAGE_SIZE: usize = 1000;

/// GET /api/v1/records
pub async fn list_records(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecordsParams>,
) -> ApiResult<Json<RecordsResponse>> {
    let page_size = match params.page_size {
        Some(0) => {
            return Err(ApiError::Validation(
                "page_size must be greater than 0".to_string(),
            ))
        }
        Some(n) => n.min(MAX_PAGE_SIZE),
        None => table_page_size(&state.layout).unwrap_or(DEFAULT_PAGE_SIZE).max(1),
    };

    let dataset = &state.dataset;
    let (page, total_pages) = clamp_page(params.page.unwrap_or(1), dataset.len(), page_size);

    Ok(Json(RecordsResponse {
        columns: dataset.columns().to_vec(),
        records: dataset.records((page - 1) * page_size, page_size),
        page,
        page_size,
        total_pages,
        total_rows: dataset.len(),
    }))
}

/// Page size of the first table in the layout
fn table_page_size(component: &Component) -> Option<usize> {
    match component {
        Component::DataTable { page_size, .. } => Some(*page_size),
        other => other.children().iter().find_map(table_page_size),
    }
}
