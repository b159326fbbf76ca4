//! Dataset layer
//!
//! Loads the CSV once at startup into an immutable in-memory table and
//! provides the grouped aggregation the chart callback needs.
//!
//! # Example
//!
//! ```rust
//! use gapdash::data::{group_mean, parse_csv};
//!
//! let csv = "continent,lifeExp\nAsia,40\nAsia,60\nEurope,70";
//! let dataset = parse_csv(csv.as_bytes()).unwrap();
//!
//! let groups = group_mean(&dataset, "continent", "lifeExp").unwrap();
//! assert_eq!(groups[0].key, "Asia");
//! assert_eq!(groups[0].mean, 50.0);
//! ```

pub mod aggregate;
pub mod error;
pub mod frame;
pub mod loader;

pub use aggregate::{group_mean, GroupMean};
pub use error::{DataError, DataResult};
pub use frame::{Cell, Dataset};
pub use loader::{load, parse_csv, DataSource, DEFAULT_DATA_URL};
