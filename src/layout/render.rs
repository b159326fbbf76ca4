//! HTML rendering of the component tree

use std::collections::HashMap;
use std::fmt::Write;

use super::Component;
use crate::data::Dataset;

/// Everything a render pass needs besides the tree itself
pub struct RenderContext<'a> {
    pub dataset: &'a Dataset,
    /// Current control values, keyed by component id
    pub values: HashMap<String, String>,
    /// Figure JSON for each graph, keyed by component id
    pub figures: HashMap<String, String>,
    /// Requested table page, 1-based
    pub page: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            values: HashMap::new(),
            figures: HashMap::new(),
            page: 1,
        }
    }

    pub fn with_value(mut self, id: &str, value: &str) -> Self {
        self.values.insert(id.to_string(), value.to_string());
        self
    }

    pub fn with_figure(mut self, id: &str, json: String) -> Self {
        self.figures.insert(id.to_string(), json);
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Pager link for `page`, keeping the control selections
    fn page_href(&self, page: usize) -> String {
        let mut params: Vec<_> = self.values.iter().collect();
        params.sort();

        let mut query = format!("?page={}", page);
        for (id, value) in params {
            let _ = write!(
                query,
                "&{}={}",
                urlencoding::encode(id),
                urlencoding::encode(value)
            );
        }
        escape_html(&query)
    }
}

/// Escape text for HTML bodies and quoted attribute values
pub fn escape_html(s: &str) -> String {
    html_escape::encode_quoted_attribute(s).into_owned()
}

/// Clamp a 1-based page number into `[1, total_pages]`
pub fn clamp_page(page: usize, rows: usize, page_size: usize) -> (usize, usize) {
    let page_size = page_size.max(1);
    let total = rows.div_ceil(page_size).max(1);
    (page.clamp(1, total), total)
}

impl Component {
    /// Render this component and its children to HTML
    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut out = String::new();
        self.render_into(ctx, &mut out);
        out
    }

    fn render_children(&self, ctx: &RenderContext<'_>, out: &mut String) {
        for child in self.children() {
            child.render_into(ctx, out);
        }
    }

    fn render_into(&self, ctx: &RenderContext<'_>, out: &mut String) {
        match self {
            Component::App { .. } => {
                out.push_str(r#"<div class="ddk-app">"#);
                self.render_children(ctx, out);
                out.push_str("</div>");
            }
            Component::Header { .. } => {
                out.push_str(r#"<header class="ddk-header">"#);
                self.render_children(ctx, out);
                out.push_str("</header>");
            }
            Component::Title { text } => {
                let _ = write!(out, r#"<h1 class="ddk-title">{}</h1>"#, escape_html(text));
            }
            Component::RadioItems {
                id,
                options,
                value,
                inline,
            } => {
                let selected = ctx.values.get(id).unwrap_or(value);
                let class = if *inline {
                    "ddk-radio ddk-radio-inline"
                } else {
                    "ddk-radio"
                };
                let _ = write!(
                    out,
                    r#"<form class="{}" id="{}" method="get">"#,
                    class,
                    escape_html(id)
                );
                for option in options {
                    let checked = if option == selected { " checked" } else { "" };
                    let _ = write!(
                        out,
                        r#"<label><input type="radio" name="{id}" value="{opt}"{checked}> {opt}</label>"#,
                        id = escape_html(id),
                        opt = escape_html(option),
                        checked = checked,
                    );
                }
                out.push_str("<noscript><button type=\"submit\">Apply</button></noscript></form>");
            }
            Component::Row { .. } => {
                out.push_str(r#"<div class="ddk-row">"#);
                self.render_children(ctx, out);
                out.push_str("</div>");
            }
            Component::Card { width, .. } => {
                let _ = write!(
                    out,
                    r#"<div class="ddk-card" style="flex: 0 0 {}%">"#,
                    width
                );
                self.render_children(ctx, out);
                out.push_str("</div>");
            }
            Component::DataTable {
                page_size,
                overflow_x,
            } => render_table(ctx, *page_size, *overflow_x, out),
            Component::Graph { id } => {
                let _ = write!(
                    out,
                    r#"<div class="ddk-graph" id="{}"></div>"#,
                    escape_html(id)
                );
                if let Some(figure) = ctx.figures.get(id) {
                    let _ = write!(
                        out,
                        r#"<script type="application/json" data-figure-for="{}">{}</script>"#,
                        escape_html(id),
                        figure.replace("</", "<\\/")
                    );
                }
            }
        }
    }
}

fn render_table(ctx: &RenderContext<'_>, page_size: usize, overflow_x: bool, out: &mut String) {
    let dataset = ctx.dataset;
    let (page, total) = clamp_page(ctx.page, dataset.len(), page_size);
    let page_size = page_size.max(1);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(dataset.len());

    let style = if overflow_x { " style=\"overflow-x: auto\"" } else { "" };
    let _ = write!(out, r#"<div class="ddk-table"{}><table><thead><tr>"#, style);
    for column in dataset.columns() {
        let _ = write!(out, "<th>{}</th>", escape_html(column));
    }
    out.push_str("</tr></thead><tbody>");

    for row in &dataset.rows()[start..end] {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape_html(&cell.to_string()));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");

    out.push_str(r#"<nav class="ddk-pager">"#);
    if page > 1 {
        let _ = write!(
            out,
            r#"<a class="ddk-page" href="{}">&lsaquo;</a>"#,
            ctx.page_href(page - 1)
        );
    }
    let _ = write!(out, "<span>{} / {}</span>", page, total);
    if page < total {
        let _ = write!(
            out,
            r#"<a class="ddk-page" href="{}">&rsaquo;</a>"#,
            ctx.page_href(page + 1)
        );
    }
    out.push_str("</nav></div>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_csv;
    use crate::layout::{app_layout, GRAPH_ID, RADIO_ID};

    fn dataset(rows: usize) -> Dataset {
        let mut csv = String::from("country,continent,lifeExp\n");
        for i in 0..rows {
            csv.push_str(&format!("Country{},Asia,{}\n", i, 50 + i));
        }
        parse_csv(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_escape_html() {
        let escaped = escape_html(r#"<b>"Côte d'Ivoire" & co</b>"#);

        assert!(escaped.starts_with("&lt;b&gt;&quot;Côte d"));
        assert!(escaped.contains("&amp; co"));
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
    }

    #[test]
    fn test_pager_link_encodes_values() {
        let ds = dataset(30);
        let ctx = RenderContext::new(&ds).with_value(RADIO_ID, "x&page=3 y#z");
        let html = Component::DataTable {
            page_size: 12,
            overflow_x: false,
        }
        .render(&ctx);

        assert!(html.contains(&format!(
            "href=\"?page=2&amp;{}=x%26page%3D3%20y%23z\"",
            RADIO_ID
        )));
        assert!(!html.contains("page=3 y"));
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 30, 12), (1, 3));
        assert_eq!(clamp_page(2, 30, 12), (2, 3));
        assert_eq!(clamp_page(9, 30, 12), (3, 3));
        assert_eq!(clamp_page(1, 0, 12), (1, 1));
    }

    #[test]
    fn test_table_first_page() {
        let ds = dataset(30);
        let ctx = RenderContext::new(&ds);
        let html = Component::DataTable {
            page_size: 12,
            overflow_x: true,
        }
        .render(&ctx);

        assert!(html.contains("overflow-x: auto"));
        assert!(html.contains("<th>lifeExp</th>"));
        assert!(html.contains("<td>Country0</td>"));
        assert!(html.contains("<td>Country11</td>"));
        assert!(!html.contains("<td>Country12</td>"));
        assert!(html.contains("<span>1 / 3</span>"));
        assert!(html.contains("href=\"?page=2\""));
    }

    #[test]
    fn test_table_page_clamped() {
        let ds = dataset(30);
        let ctx = RenderContext::new(&ds)
            .with_page(99)
            .with_value(RADIO_ID, "pop");
        let html = Component::DataTable {
            page_size: 12,
            overflow_x: false,
        }
        .render(&ctx);

        assert!(html.contains("<td>Country29</td>"));
        assert!(!html.contains("<td>Country23</td>"));
        assert!(html.contains("<span>3 / 3</span>"));
        assert!(html.contains(&format!("href=\"?page=2&amp;{}=pop\"", RADIO_ID)));
    }

    #[test]
    fn test_cell_text_escaped() {
        let ds = parse_csv("name\n<script>alert(1)</script>".as_bytes()).unwrap();
        let html = Component::DataTable {
            page_size: 12,
            overflow_x: false,
        }
        .render(&RenderContext::new(&ds));

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn test_radio_selection() {
        let ds = dataset(1);
        let layout = app_layout(12);
        let radio = layout.find(RADIO_ID).unwrap();

        let html = radio.render(&RenderContext::new(&ds));
        assert!(html.contains(r#"value="lifeExp" checked"#));
        assert!(html.contains("ddk-radio-inline"));

        let html = radio.render(&RenderContext::new(&ds).with_value(RADIO_ID, "gdpPercap"));
        assert!(html.contains(r#"value="gdpPercap" checked"#));
        assert!(!html.contains(r#"value="lifeExp" checked"#));
    }

    #[test]
    fn test_graph_embeds_figure() {
        let ds = dataset(1);
        let ctx = RenderContext::new(&ds)
            .with_figure(GRAPH_ID, r#"{"data":[{"name":"</script>"}]}"#.to_string());
        let html = app_layout(12).render(&ctx);

        assert!(html.contains(&format!(r#"<div class="ddk-graph" id="{}"></div>"#, GRAPH_ID)));
        assert!(html.contains(r#"{"data":[{"name":"<\/script>"}]}"#));
        assert!(html.contains(r#"<div class="ddk-card" style="flex: 0 0 50%">"#));
        assert!(html.contains("<h1 class=\"ddk-title\">My First App with Data, Graph, and Controls</h1>"));
    }
}
