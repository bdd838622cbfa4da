//! HTML page generation
//!
//! Wraps a visualization document in a minimal standalone page that loads
//! plotly from its CDN and renders into a single full-size div.

use geoviz_model::Document;
use std::fs;
use std::io;
use std::path::Path;

/// Default output filename for saved visualizations
pub const DEFAULT_HTML_FILE: &str = "visualization.html";

/// Render a document into a standalone HTML page
pub fn render_html(document: &Document) -> serde_json::Result<String> {
    let data = serde_json::to_string(&document.data)?;
    let layout = serde_json::to_string(&document.layout)?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>geoviz</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
</head>
<body>
<div id="plot" style="width:100%;height:100vh;"></div>
<script>
Plotly.newPlot("plot", {data}, {layout});
</script>
</body>
</html>
"#
    ))
}

/// Render and write a document to an HTML file
pub fn save_html(document: &Document, path: impl AsRef<Path>) -> io::Result<()> {
    let page = render_html(document).map_err(io::Error::other)?;
    fs::write(path, page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoviz_model::{Layout, ScatterMode, TraceRecord};

    fn sample_document() -> Document {
        let mut trace = TraceRecord::scatter3d(ScatterMode::Lines);
        trace.push_vertex(1.0, 2.0, 0.0);
        Document::new(vec![trace], Layout::default())
    }

    #[test]
    fn test_render_embeds_data_and_layout() {
        let page = render_html(&sample_document()).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("cdn.plot.ly"));
        assert!(page.contains(r#""type":"scatter3d""#));
        assert!(page.contains(r#""aspectmode":"data""#));
    }

    #[test]
    fn test_save_writes_file() {
        let path = std::env::temp_dir().join("geoviz-test-visualization.html");
        save_html(&sample_document(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Plotly.newPlot"));
        std::fs::remove_file(&path).unwrap();
    }
}
