// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Document assembly
//!
//! Turns a slice of geometries into one renderable document: one trace per
//! top-level geometry, in input order, under a layout derived from the plot
//! options. Any malformed geometry aborts the whole document.

use crate::builder::build_trace;
use crate::Result;
use geoviz_model::{Document, Geometry, Layout, PlotOptions};

/// Convert a scene into a complete plotly document
pub fn build_document(geometries: &[Geometry], options: &PlotOptions) -> Result<Document> {
    let mut data = Vec::with_capacity(geometries.len());
    for geometry in geometries {
        data.push(build_trace(geometry, options)?);
    }

    let mut layout = Layout::default();
    if options.orthographic {
        layout = layout.with_orthographic_camera();
    }

    Ok(Document::new(data, layout))
}
