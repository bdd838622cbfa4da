// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plotly visualization document types
//!
//! Wire-format structures for the debug-visualizer envelope: a `kind` tag
//! announcing plotly content, the trace list, and a scene layout. Field and
//! value spellings follow the plotly JSON schema, so the serialized form can
//! be fed to a plotly renderer unchanged.

use serde::{Deserialize, Serialize};

/// Opacity applied to mesh traces
pub const MESH_OPACITY: f64 = 0.7;

/// Opacity applied to scatter traces
pub const SCATTER_OPACITY: f64 = 1.0;

/// Trace type discriminator
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TraceKind {
    /// Filled triangle surface
    #[serde(rename = "mesh3d")]
    Mesh3d,
    /// Point/line path
    #[serde(rename = "scatter3d")]
    Scatter3d,
}

/// Scatter trace drawing mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ScatterMode {
    /// Connecting lines only
    #[serde(rename = "lines")]
    Lines,
    /// Connecting lines plus vertex markers
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

/// One renderable trace
///
/// The coordinate arrays always grow in lockstep. A `None` entry is a path
/// break: it keeps the renderer from drawing a segment between logically
/// disjoint rings or geometries sharing one trace.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TraceRecord {
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
    pub z: Vec<Option<f64>>,
    #[serde(rename = "type")]
    pub kind: TraceKind,
    /// Drawing mode, scatter traces only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ScatterMode>,
    pub name: String,
    pub opacity: f64,
    pub showlegend: bool,
    /// First face-index column, mesh traces only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i: Option<Vec<u32>>,
    /// Second face-index column, mesh traces only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub j: Option<Vec<u32>>,
    /// Third face-index column, mesh traces only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<Vec<u32>>,
}

impl TraceRecord {
    /// Create an empty scatter trace
    pub fn scatter3d(mode: ScatterMode) -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            z: Vec::new(),
            kind: TraceKind::Scatter3d,
            mode: Some(mode),
            name: "geometry".to_string(),
            opacity: SCATTER_OPACITY,
            showlegend: true,
            i: None,
            j: None,
            k: None,
        }
    }

    /// Create an empty mesh trace
    ///
    /// The face-index arrays are present but empty, so a vertex-free mesh
    /// still serializes with `i`/`j`/`k` keys.
    pub fn mesh3d() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            z: Vec::new(),
            kind: TraceKind::Mesh3d,
            mode: None,
            name: "mesh".to_string(),
            opacity: MESH_OPACITY,
            showlegend: true,
            i: Some(Vec::new()),
            j: Some(Vec::new()),
            k: Some(Vec::new()),
        }
    }

    /// Append one coordinate triple to all three arrays
    #[inline]
    pub fn push_vertex(&mut self, x: f64, y: f64, z: f64) {
        self.x.push(Some(x));
        self.y.push(Some(y));
        self.z.push(Some(z));
    }

    /// Append a path break to all three arrays
    #[inline]
    pub fn push_break(&mut self) {
        self.x.push(None);
        self.y.push(None);
        self.z.push(None);
    }

    /// Append pre-extracted coordinate columns
    pub fn extend_coords(&mut self, xs: Vec<f64>, ys: Vec<f64>, zs: Vec<f64>) {
        self.x.extend(xs.into_iter().map(Some));
        self.y.extend(ys.into_iter().map(Some));
        self.z.extend(zs.into_iter().map(Some));
    }

    /// Number of entries in the coordinate arrays
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the trace carries no entries
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Axis descriptor
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
}

impl Axis {
    /// Create an axis with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Scene aspect-ratio policy
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectMode {
    Auto,
    Cube,
    /// Preserve true geometric proportions
    #[default]
    Data,
    Manual,
}

/// Camera projection kind
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    Perspective,
    Orthographic,
}

/// Camera projection settings
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: ProjectionKind,
}

/// Scene camera
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Camera {
    pub projection: Projection,
}

impl Camera {
    /// Camera with orthographic projection
    pub fn orthographic() -> Self {
        Self {
            projection: Projection {
                kind: ProjectionKind::Orthographic,
            },
        }
    }
}

/// 3D scene settings
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Scene {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
    pub aspectmode: AspectMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<Camera>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            xaxis: Axis::new("X Axis"),
            yaxis: Axis::new("Y Axis"),
            zaxis: Axis::new("Z Axis"),
            aspectmode: AspectMode::Data,
            camera: None,
        }
    }
}

/// Document layout block
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Layout {
    pub scene: Scene,
}

impl Layout {
    /// Add an orthographic scene camera
    pub fn with_orthographic_camera(mut self) -> Self {
        self.scene.camera = Some(Camera::orthographic());
        self
    }
}

/// Document kind tag recognized by the debug visualizer
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DocumentKind {
    pub plotly: bool,
}

impl Default for DocumentKind {
    fn default() -> Self {
        Self { plotly: true }
    }
}

/// Complete visualization document
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Document {
    pub kind: DocumentKind,
    pub data: Vec<TraceRecord>,
    pub layout: Layout,
}

impl Document {
    /// Wrap traces and layout in the document envelope
    pub fn new(data: Vec<TraceRecord>, layout: Layout) -> Self {
        Self {
            kind: DocumentKind::default(),
            data,
            layout,
        }
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a document back from its JSON form
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
