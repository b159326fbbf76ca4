//! Dashboard Routes
//!
//! - GET / - Render the page
//! - GET /_dash-layout - Layout tree as JSON
//!
//! Query parameters of `GET /`: `page` selects the table page, and the id of
//! any callback input sets that control's value (`?my-ddk-radio-items-final=pop`).
//! Other parameters are ignored.
//! Every callback runs once so the page arrives with its outputs filled in.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::callbacks::{Dependency, InputValue, UpdateRequest};
use crate::layout::{render_page, Component, RenderContext, APP_TITLE};

/// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Html<String>> {
    let page = params
        .get("page")
        .and_then(|p| p.parse::<usize>().ok())
        .unwrap_or(1);

    let mut ctx = RenderContext::new(&state.dataset).with_page(page);
    for (id, value) in &params {
        if state.callbacks.is_input(id, "value") {
            ctx = ctx.with_value(id, value);
        }
    }

    for spec in state.callbacks.specs() {
        let inputs = spec
            .inputs
            .iter()
            .map(|dep| InputValue {
                id: dep.id.clone(),
                property: dep.property.clone(),
                value: current_value(&state.layout, &ctx, dep),
            })
            .collect();

        let response = state.callbacks.dispatch(&UpdateRequest {
            output: spec.output,
            inputs,
        })?;

        for (id, props) in response.response {
            if let Some(figure) = props.get("figure") {
                ctx = ctx.with_figure(&id, figure.to_string());
            }
        }
    }

    Ok(Html(render_page(APP_TITLE, &state.layout, &ctx)))
}

/// GET /_dash-layout
pub async fn layout(State(state): State<Arc<AppState>>) -> Json<Component> {
    Json(state.layout.as_ref().clone())
}

/// Value of a control: the request's override, else the layout's initial value
fn current_value(layout: &Component, ctx: &RenderContext<'_>, dep: &Dependency) -> Value {
    if dep.property == "value" {
        if let Some(value) = ctx.values.get(&dep.id) {
            return Value::String(value.clone());
        }
    }

    match layout.find(&dep.id) {
        Some(Component::RadioItems { value, .. }) if dep.property == "value" => {
            Value::String(value.clone())
        }
        _ => Value::Null,
    }
}
