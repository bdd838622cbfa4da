//! Demo viewer binary
//!
//! Builds the sample scene, converts it to a plotly document, and writes
//! both the raw JSON and a standalone HTML page.

use geoviz_model::PlotOptions;
use geoviz_trace::build_document;
use geoviz_viewer::html::{save_html, DEFAULT_HTML_FILE};
use geoviz_viewer::scene::demo_scene;
use std::error::Error;
use std::fs;

const JSON_FILE: &str = "visualization.json";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let geometries = demo_scene()?;
    log::info!("Built demo scene with {} geometries", geometries.len());

    let options = PlotOptions::default()
        .with_show_vertices(false)
        .with_orthographic(true);
    let document = build_document(&geometries, &options)?;
    log::info!("Converted scene into {} traces", document.data.len());

    fs::write(JSON_FILE, document.to_json_pretty()?)?;
    save_html(&document, DEFAULT_HTML_FILE)?;

    println!("Wrote {} and {}", JSON_FILE, DEFAULT_HTML_FILE);
    Ok(())
}
