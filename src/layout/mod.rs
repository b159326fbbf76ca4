//! Page Layout
//!
//! Declarative component tree for the dashboard page. The tree is built
//! once at startup, rendered to HTML on each page request and exposed as
//! JSON for clients that want to inspect it.
//!
//! ```text
//! App
//! ├── Header
//! │   └── Title
//! ├── RadioItems          (id: my-ddk-radio-items-final)
//! └── Row
//!     ├── Card (50%)
//!     │   └── DataTable   (12 rows per page)
//!     └── Card (50%)
//!         └── Graph       (id: graph-placeholder-ddk-final)
//! ```

pub mod page;
pub mod render;

pub use page::render_page;
pub use render::{escape_html, RenderContext};

use serde::Serialize;

use crate::figure::{COLUMN_OPTIONS, DEFAULT_COLUMN};

/// Page title shown in the header
pub const APP_TITLE: &str = "My First App with Data, Graph, and Controls";

/// Id of the column radio control
pub const RADIO_ID: &str = "my-ddk-radio-items-final";

/// Id of the chart
pub const GRAPH_ID: &str = "graph-placeholder-ddk-final";

/// Rows per table page
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// A node of the page layout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "props")]
pub enum Component {
    /// Root container
    App { children: Vec<Component> },
    /// Page banner
    Header { children: Vec<Component> },
    /// Heading text
    Title { text: String },
    /// Radio button group
    RadioItems {
        id: String,
        options: Vec<String>,
        value: String,
        inline: bool,
    },
    /// Horizontal flex row
    Row { children: Vec<Component> },
    /// Panel taking `width` percent of its row
    Card { width: u8, children: Vec<Component> },
    /// Paged view of the dataset
    DataTable { page_size: usize, overflow_x: bool },
    /// plotly chart placeholder
    Graph { id: String },
}

impl Component {
    pub fn children(&self) -> &[Component] {
        match self {
            Component::App { children }
            | Component::Header { children }
            | Component::Row { children }
            | Component::Card { children, .. } => children,
            _ => &[],
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Component::RadioItems { id, .. } | Component::Graph { id } => Some(id.as_str()),
            _ => None,
        }
    }

    /// Depth-first search by component id
    pub fn find(&self, id: &str) -> Option<&Component> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }
}

/// The dashboard layout
pub fn app_layout(page_size: usize) -> Component {
    Component::App {
        children: vec![
            Component::Header {
                children: vec![Component::Title {
                    text: APP_TITLE.to_string(),
                }],
            },
            Component::RadioItems {
                id: RADIO_ID.to_string(),
                options: COLUMN_OPTIONS.iter().map(|s| s.to_string()).collect(),
                value: DEFAULT_COLUMN.to_string(),
                inline: true,
            },
            Component::Row {
                children: vec![
                    Component::Card {
                        width: 50,
                        children: vec![Component::DataTable {
                            page_size,
                            overflow_x: true,
                        }],
                    },
                    Component::Card {
                        width: 50,
                        children: vec![Component::Graph {
                            id: GRAPH_ID.to_string(),
                        }],
                    },
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id() {
        let layout = app_layout(DEFAULT_PAGE_SIZE);

        assert!(matches!(
            layout.find(GRAPH_ID),
            Some(Component::Graph { .. })
        ));
        match layout.find(RADIO_ID) {
            Some(Component::RadioItems { value, options, .. }) => {
                assert_eq!(value, "lifeExp");
                assert_eq!(options, &["pop", "lifeExp", "gdpPercap"]);
            }
            other => panic!("unexpected component: {:?}", other),
        }
        assert!(layout.find("missing").is_none());
    }

    #[test]
    fn test_layout_json() {
        let value = serde_json::to_value(app_layout(12)).unwrap();

        assert_eq!(value["type"], "App");
        let children = value["props"]["children"].as_array().unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0]["props"]["children"][0]["props"]["text"], APP_TITLE);
        assert_eq!(children[1]["props"]["inline"], true);
        assert_eq!(
            children[2]["props"]["children"][0]["props"]["children"][0]["props"]["page_size"],
            12
        );
    }
}
