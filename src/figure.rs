//! Chart figures
//!
//! Builds the plotly figure shown in the dashboard graph: the average of the
//! selected column for each continent, one bar per continent.

use plotly::common::Title;
use plotly::layout::Axis;
use plotly::{Bar, Layout, Plot};
use serde_json::Value;

use crate::data::{group_mean, Dataset, GroupMean};
use crate::error::{DashError, DashResult};

/// Column the bars are grouped by
pub const GROUP_COLUMN: &str = "continent";

/// Columns offered by the radio control
pub const COLUMN_OPTIONS: [&str; 3] = ["pop", "lifeExp", "gdpPercap"];

/// Initially selected column
pub const DEFAULT_COLUMN: &str = "lifeExp";

/// A chart ready to be sent to plotly.js
pub struct Figure {
    column: String,
    groups: Vec<GroupMean>,
    plot: Plot,
}

impl Figure {
    /// Bar figure of per-group means
    pub fn from_groups(column: &str, groups: Vec<GroupMean>) -> Self {
        let label = format!("avg of {}", column);
        let categories: Vec<String> = groups.iter().map(|g| g.key.clone()).collect();
        let values: Vec<f64> = groups.iter().map(|g| g.mean).collect();

        let trace = Bar::new(categories, values).name(label.as_str());
        let layout = Layout::new()
            .x_axis(Axis::new().title(Title::new(GROUP_COLUMN)))
            .y_axis(Axis::new().title(Title::new(label.as_str())));

        let mut plot = Plot::new();
        plot.add_trace(trace);
        plot.set_layout(layout);

        Self {
            column: column.to_string(),
            groups,
            plot,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn groups(&self) -> &[GroupMean] {
        &self.groups
    }

    pub fn categories(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.key.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.groups.iter().map(|g| g.mean).collect()
    }

    /// Figure JSON as plotly.js expects it (`data`, `layout`, `config`)
    pub fn to_json(&self) -> String {
        self.plot.to_json()
    }

    pub fn to_value(&self) -> DashResult<Value> {
        Ok(serde_json::from_str(&self.plot.to_json())?)
    }
}

/// Check a radio value against the offered columns
pub fn validate_column(column: &str) -> DashResult<()> {
    if COLUMN_OPTIONS.contains(&column) {
        Ok(())
    } else {
        Err(DashError::InvalidOption {
            value: column.to_string(),
            options: COLUMN_OPTIONS.iter().map(|s| s.to_string()).collect(),
        })
    }
}

/// Recompute the chart for the selected column
pub fn update_graph(dataset: &Dataset, column: &str) -> DashResult<Figure> {
    validate_column(column)?;

    let groups = group_mean(dataset, GROUP_COLUMN, column)?;
    tracing::debug!(column = %column, groups = groups.len(), "Figure rebuilt");

    Ok(Figure::from_groups(column, groups))
}
