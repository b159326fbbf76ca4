//! Page shell
//!
//! Wraps the rendered layout in a full HTML document. Charts are drawn by
//! plotly.js; the small script at the bottom wires every callback input to
//! `POST /_dash-update-component` and redraws the outputs it gets back.

use super::render::{escape_html, RenderContext};
use super::Component;

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLE: &str = r#"
* { box-sizing: border-box; }
body {
  margin: 0;
  background: #f4f5f7;
  color: #1f2933;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
  font-size: 14px;
}
.ddk-app { max-width: 1400px; margin: 0 auto; padding: 16px; }
.ddk-header {
  background: #1f2933;
  color: #fff;
  padding: 12px 20px;
  border-radius: 6px;
  margin-bottom: 16px;
}
.ddk-title { margin: 0; font-size: 22px; font-weight: 600; }
.ddk-radio { margin-bottom: 16px; }
.ddk-radio-inline label { display: inline-block; margin-right: 16px; cursor: pointer; }
.ddk-row { display: flex; gap: 16px; }
.ddk-card {
  background: #fff;
  border-radius: 6px;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
  padding: 12px;
  min-width: 0;
}
.ddk-table table { border-collapse: collapse; width: 100%; }
.ddk-table th, .ddk-table td {
  border: 1px solid #d9dde3;
  padding: 4px 8px;
  text-align: left;
  white-space: nowrap;
}
.ddk-table th { background: #eef0f3; }
.ddk-pager { display: flex; justify-content: flex-end; gap: 12px; padding-top: 8px; }
.ddk-pager a { text-decoration: none; color: #2563eb; font-size: 16px; }
.ddk-graph { width: 100%; min-height: 450px; }
"#;

const SCRIPT: &str = r#"
(function () {
  function draw(id, figure) {
    if (window.Plotly) {
      Plotly.react(id, figure.data, figure.layout, figure.config || {});
    }
  }

  document.querySelectorAll('script[data-figure-for]').forEach(function (node) {
    draw(node.getAttribute('data-figure-for'), JSON.parse(node.textContent));
  });

  function keepSelection(inputId, value) {
    document.querySelectorAll('a.ddk-page').forEach(function (link) {
      var url = new URL(link.href, window.location.href);
      url.searchParams.set(inputId, value);
      link.href = url.search;
    });
  }

  fetch('/_dash-dependencies')
    .then(function (res) { return res.json(); })
    .then(function (deps) {
      deps.forEach(function (dep) {
        dep.inputs.forEach(function (input) {
          var form = document.getElementById(input.id);
          if (!form) { return; }
          form.addEventListener('change', function (event) {
            var value = event.target.value;
            keepSelection(input.id, value);
            fetch('/_dash-update-component', {
              method: 'POST',
              headers: { 'Content-Type': 'application/json' },
              body: JSON.stringify({
                output: dep.output,
                inputs: [{ id: input.id, property: input.property, value: value }]
              })
            })
              .then(function (res) { return res.json(); })
              .then(function (body) {
                if (!body.response) { console.warn('callback failed', body); return; }
                Object.keys(body.response).forEach(function (id) {
                  draw(id, body.response[id].figure);
                });
              });
          });
        });
      });
    });
})();
"#;

/// Render a complete HTML document for the layout
pub fn render_page(title: &str, layout: &Component, ctx: &RenderContext<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="{plotly}" charset="utf-8"></script>
<style>{style}</style>
</head>
<body>
{body}
<script>{script}</script>
</body>
</html>
"#,
        title = escape_html(title),
        plotly = PLOTLY_JS,
        style = STYLE,
        body = layout.render(ctx),
        script = SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_csv;
    use crate::layout::{app_layout, APP_TITLE};

    #[test]
    fn test_render_page() {
        let ds = parse_csv("country,continent\nChad,Africa".as_bytes()).unwrap();
        let html = render_page(APP_TITLE, &app_layout(12), &RenderContext::new(&ds));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>My First App with Data, Graph, and Controls</title>"));
        assert!(html.contains(PLOTLY_JS));
        assert!(html.contains("/_dash-update-component"));
        assert!(html.contains("<td>Chad</td>"));
    }
}
