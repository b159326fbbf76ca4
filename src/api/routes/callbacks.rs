//! Callback Routes
//!
//! - GET /_dash-dependencies - Declared callback bindings
//! - POST /_dash-update-component - Run the callback for one output

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::callbacks::{CallbackSpec, UpdateRequest, UpdateResponse};

/// GET /_dash-dependencies
pub async fn dependencies(State(state): State<Arc<AppState>>) -> Json<Vec<CallbackSpec>> {
    Json(state.callbacks.specs())
}

/// POST /_dash-update-component
pub async fn update_component(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdateRequest>,
) -> ApiResult<Json<UpdateResponse>> {
    let response = state.callbacks.dispatch(&request)?;

    tracing::info!(output = %request.output, "Callback completed");

    Ok(Json(response))
}
