//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::callbacks::{dashboard_callbacks, CallbackRegistry};
use crate::data::Dataset;
use crate::layout::{app_layout, Component};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Dataset loaded at startup, read-only afterwards
    pub dataset: Arc<Dataset>,
    /// Page layout
    pub layout: Arc<Component>,
    /// Reactive bindings
    pub callbacks: Arc<CallbackRegistry>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Build the dashboard around a loaded dataset
    pub fn new(dataset: Dataset, page_size: usize) -> Self {
        let dataset = Arc::new(dataset);
        Self {
            callbacks: Arc::new(dashboard_callbacks(Arc::clone(&dataset))),
            layout: Arc::new(app_layout(page_size)),
            dataset,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
