//! Callback registry
//!
//! Stores the declared input → output bindings and dispatches update
//! requests to the matching handler.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DashError, DashResult};

/// A component property, e.g. `graph.figure`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub id: String,
    pub property: String,
}

impl Dependency {
    pub fn new(id: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            property: property.into(),
        }
    }

    /// `<id>.<property>`
    pub fn key(&self) -> String {
        format!("{}.{}", self.id, self.property)
    }
}

/// Callback body: input values in declared order, returns the output value
pub type Handler = Box<dyn Fn(&[Value]) -> DashResult<Value> + Send + Sync>;

/// One reactive binding
pub struct Callback {
    pub output: Dependency,
    pub inputs: Vec<Dependency>,
    handler: Handler,
}

/// Serializable description of a callback
#[derive(Debug, Clone, Serialize)]
pub struct CallbackSpec {
    pub output: String,
    pub inputs: Vec<Dependency>,
}

/// Input value sent by the browser
#[derive(Debug, Clone, Deserialize)]
pub struct InputValue {
    pub id: String,
    pub property: String,
    #[serde(default)]
    pub value: Value,
}

/// Body of `POST /_dash-update-component`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
    /// Output key, `<id>.<property>`
    pub output: String,
    #[serde(default)]
    pub inputs: Vec<InputValue>,
}

/// `{ "response": { <id>: { <property>: <value> } } }`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse {
    pub response: Map<String, Value>,
}

/// All callbacks of the app
#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding; a later registration for the same output replaces the earlier one
    pub fn register<F>(&mut self, output: Dependency, inputs: Vec<Dependency>, handler: F)
    where
        F: Fn(&[Value]) -> DashResult<Value> + Send + Sync + 'static,
    {
        self.callbacks.retain(|cb| cb.output != output);
        self.callbacks.push(Callback {
            output,
            inputs,
            handler: Box::new(handler),
        });
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Whether `id.property` feeds any callback
    pub fn is_input(&self, id: &str, property: &str) -> bool {
        self.callbacks
            .iter()
            .flat_map(|cb| &cb.inputs)
            .any(|dep| dep.id == id && dep.property == property)
    }

    pub fn specs(&self) -> Vec<CallbackSpec> {
        self.callbacks
            .iter()
            .map(|cb| CallbackSpec {
                output: cb.output.key(),
                inputs: cb.inputs.clone(),
            })
            .collect()
    }

    /// Run the callback whose output matches `request.output`
    pub fn dispatch(&self, request: &UpdateRequest) -> DashResult<UpdateResponse> {
        let callback = self
            .callbacks
            .iter()
            .find(|cb| cb.output.key() == request.output)
            .ok_or_else(|| DashError::UnknownOutput(request.output.clone()))?;

        let values = callback
            .inputs
            .iter()
            .map(|dep| {
                request
                    .inputs
                    .iter()
                    .find(|input| input.id == dep.id && input.property == dep.property)
                    .map(|input| input.value.clone())
                    .ok_or_else(|| DashError::MissingInput(dep.key()))
            })
            .collect::<DashResult<Vec<_>>>()?;

        tracing::debug!(output = %request.output, inputs = ?values, "Dispatching callback");
        let value = (callback.handler)(&values)?;

        let mut props = Map::new();
        props.insert(callback.output.property.clone(), value);
        let mut response = Map::new();
        response.insert(callback.output.id.clone(), Value::Object(props));

        Ok(UpdateResponse { response })
    }
}
