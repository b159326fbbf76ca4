//! # Gapdash
//!
//! A single-page dashboard: one CSV dataset shown as a paged table and a
//! bar chart, and one radio control that recomputes the chart.
//!
//! ## Modules
//!
//! - [`data`]: Dataset loading and grouped aggregation
//! - [`figure`]: plotly figures built from the aggregation
//! - [`layout`]: Page component tree and HTML rendering
//! - [`callbacks`]: Reactive input → output bindings
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gapdash::api::{serve, AppState};
//! use gapdash::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_default();
//!
//!     // Load the dataset once; it stays read-only for the process lifetime
//!     let dataset = gapdash::data::load(
//!         &config.data.data_source(),
//!         config.data.request_timeout(),
//!     )
//!     .await?;
//!
//!     serve(AppState::new(dataset, config.data.page_size), &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod callbacks;
pub mod config;
pub mod data;
pub mod error;
pub mod figure;
pub mod layout;

pub use api::{build_router, serve, ApiError, AppState};
pub use callbacks::{dashboard_callbacks, CallbackRegistry, Dependency, UpdateRequest};
pub use config::{Config, ConfigError, DataConfig, LoggingConfig, ServerConfig};
pub use data::{group_mean, Cell, DataError, DataSource, Dataset, GroupMean};
pub use error::{DashError, DashResult};
pub use figure::{update_graph, Figure};
pub use layout::{app_layout, Component};
