// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for trace building

use thiserror::Error;

/// Trace building result type
pub type Result<T> = std::result::Result<T, Error>;

/// Trace building errors
///
/// Emptiness is never an error; these cover inputs that cannot be rendered
/// faithfully and therefore abort the whole document build.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Mesh has a face table but no vertices to index
    #[error("Malformed mesh: {face_count} faces but no vertices")]
    FacesWithoutVertices { face_count: usize },

    /// A face references a vertex index past the vertex table
    #[error("Malformed mesh: face {face} references vertex {index} but only {vertex_count} vertices exist")]
    FaceIndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },

    /// Collection nesting exceeded the supported depth
    #[error("Geometry nesting exceeds the supported depth of {max_depth}")]
    NestingTooDeep { max_depth: usize },
}

impl Error {
    /// Create a faces-without-vertices error
    pub fn faces_without_vertices(face_count: usize) -> Self {
        Error::FacesWithoutVertices { face_count }
    }

    /// Create a face-index-out-of-range error
    pub fn face_index_out_of_range(face: usize, index: u32, vertex_count: usize) -> Self {
        Error::FaceIndexOutOfRange {
            face,
            index,
            vertex_count,
        }
    }

    /// Create a nesting-too-deep error
    pub fn nesting_too_deep(max_depth: usize) -> Self {
        Error::NestingTooDeep { max_depth }
    }
}
