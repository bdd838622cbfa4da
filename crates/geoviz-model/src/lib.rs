// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geoviz Model - Shared geometry and visualization document types
//!
//! This crate provides the data model for the geoviz pipeline: the input
//! geometry kinds (points, linestrings, polygons with holes, multi-geometry
//! groups, nested collections, and triangle meshes) and the output plotly
//! document (traces, layout, and the debug-visualizer envelope).
//!
//! # Architecture
//!
//! The crate is organized around a few core pieces:
//!
//! - [`Coord`] - a 2D-or-3D coordinate shared by all simple geometries
//! - [`Geometry`] - the closed union of every kind the pipeline can render
//! - [`TriangleMesh`] - vertex/face tables for triangulated surfaces
//! - [`Document`] / [`TraceRecord`] - the plotly wire format with JSON
//!   round-trip support
//! - [`PlotOptions`] - conversion settings with documented defaults
//!
//! # Example
//!
//! ```
//! use geoviz_model::{Coord, Geometry, LineString};
//!
//! let line = Geometry::from(LineString::from_coords([(0.0, 0.0), (1.0, 1.0)]));
//! assert_eq!(line.kind_name(), "linestring");
//! assert!(!line.is_empty());
//! ```

pub mod coord;
pub mod document;
pub mod geometry;
pub mod mesh;
pub mod options;

// Re-export the nalgebra point type used by the mesh model
pub use nalgebra::Point3;

// Re-export all public types
pub use coord::*;
pub use document::*;
pub use geometry::*;
pub use mesh::*;
pub use options::*;
