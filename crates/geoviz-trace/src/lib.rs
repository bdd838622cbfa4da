// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Geoviz Trace Conversion
//!
//! Converts geometries from `geoviz-model` into plotly trace records and
//! assembles them into complete visualization documents.
//!
//! ## Overview
//!
//! The conversion runs in three stages:
//!
//! - **Flattening**: Collections are reduced to a depth-bounded list of
//!   leaf geometries in traversal order
//! - **Trace building**: Each geometry becomes one trace record; meshes
//!   map to `mesh3d`, everything else to `scatter3d` with path breaks
//!   between rings
//! - **Assembly**: One trace per top-level geometry, combined with a
//!   layout derived from the plot options
//!
//! Conversion never mutates its input and is deterministic: the same
//! geometries and options always produce the same document.
//!
//! ## Quick Start
//!
//! ```rust
//! use geoviz_model::{Geometry, LineString, PlotOptions};
//! use geoviz_trace::build_document;
//!
//! let path = Geometry::LineString(LineString::from_coords([(0.0, 0.0), (2.0, 2.0)]));
//! let document = build_document(&[path], &PlotOptions::default())?;
//!
//! assert_eq!(document.data.len(), 1);
//! # Ok::<(), geoviz_trace::Error>(())
//! ```

pub mod assembler;
pub mod builder;
pub mod error;
pub mod extract;
pub mod flatten;

// Re-export main entry points
pub use assembler::build_document;
pub use builder::build_trace;
pub use error::{Error, Result};
pub use extract::ring_coords;
pub use flatten::{flatten, Leaf, MAX_NESTING_DEPTH};
