//! Reactive bindings
//!
//! The dashboard has a single binding: the radio control's `value` drives
//! the graph's `figure`.

pub mod registry;

pub use registry::{
    Callback, CallbackRegistry, CallbackSpec, Dependency, InputValue, UpdateRequest,
    UpdateResponse,
};

use serde_json::Value;
use std::sync::Arc;

use crate::data::Dataset;
use crate::error::DashError;
use crate::figure::{update_graph, COLUMN_OPTIONS};
use crate::layout::{GRAPH_ID, RADIO_ID};

/// Register the dashboard's callbacks
pub fn dashboard_callbacks(dataset: Arc<Dataset>) -> CallbackRegistry {
    let mut registry = CallbackRegistry::new();

    registry.register(
        Dependency::new(GRAPH_ID, "figure"),
        vec![Dependency::new(RADIO_ID, "value")],
        move |values| {
            let column = match values.first() {
                Some(Value::String(s)) => s.as_str(),
                other => {
                    return Err(DashError::InvalidOption {
                        value: other.map(Value::to_string).unwrap_or_default(),
                        options: COLUMN_OPTIONS.iter().map(|s| s.to_string()).collect(),
                    })
                }
            };

            update_graph(&dataset, column)?.to_value()
        },
    );

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_csv;
    use serde_json::json;

    fn registry() -> CallbackRegistry {
        let csv = "country,continent,lifeExp,pop,gdpPercap
Chad,Africa,50.651,10238807,1704.063724
Kenya,Africa,54.11,35610177,1463.249282
Japan,Asia,82.603,127467972,31656.06806";
        dashboard_callbacks(Arc::new(parse_csv(csv.as_bytes()).unwrap()))
    }

    fn request(value: Value) -> UpdateRequest {
        serde_json::from_value(json!({
            "output": format!("{}.figure", GRAPH_ID),
            "inputs": [{ "id": RADIO_ID, "property": "value", "value": value }]
        }))
        .unwrap()
    }

    #[test]
    fn test_radio_drives_figure() {
        let response = registry().dispatch(&request(json!("gdpPercap"))).unwrap();
        let figure = &response.response[GRAPH_ID]["figure"];

        assert_eq!(figure["data"][0]["x"], json!(["Africa", "Asia"]));
        let africa = figure["data"][0]["y"][0].as_f64().unwrap();
        assert!((africa - (1704.063724 + 1463.249282) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_string_value_rejected() {
        let result = registry().dispatch(&request(json!(42)));
        assert!(matches!(result, Err(DashError::InvalidOption { value, .. }) if value == "42"));
    }

    #[test]
    fn test_unlisted_column_rejected() {
        let result = registry().dispatch(&request(json!("country")));
        assert!(matches!(result, Err(DashError::InvalidOption { .. })));
    }
}
