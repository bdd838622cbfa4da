// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Triangle mesh input type

use nalgebra::Point3;

/// A triangulated 3D surface
///
/// Faces index into the vertex table as triples; the column order of a face
/// determines its winding downstream, so it is preserved verbatim.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TriangleMesh {
    /// Vertex positions
    pub vertices: Vec<Point3<f64>>,
    /// Triangle vertex indices
    pub faces: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Create a mesh from vertex and face tables
    pub fn new(vertices: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Check if the mesh has no vertices and no faces
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get face count
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Axis-aligned cuboid spanning `origin` to `origin + extents`
    ///
    /// Eight corner vertices (bottom ring then top ring, counter-clockwise
    /// from the origin corner) and twelve faces, two per side.
    pub fn cuboid(origin: Point3<f64>, extents: [f64; 3]) -> Self {
        let [dx, dy, dz] = extents;

        let vertices = vec![
            origin,
            Point3::new(origin.x + dx, origin.y, origin.z),
            Point3::new(origin.x + dx, origin.y + dy, origin.z),
            Point3::new(origin.x, origin.y + dy, origin.z),
            Point3::new(origin.x, origin.y, origin.z + dz),
            Point3::new(origin.x + dx, origin.y, origin.z + dz),
            Point3::new(origin.x + dx, origin.y + dy, origin.z + dz),
            Point3::new(origin.x, origin.y + dy, origin.z + dz),
        ];

        let faces = vec![
            [0, 1, 2],
            [0, 2, 3],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [1, 2, 6],
            [1, 6, 5],
            [2, 3, 7],
            [2, 7, 6],
            [3, 0, 4],
            [3, 4, 7],
        ];

        Self { vertices, faces }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mesh() {
        let mesh = TriangleMesh::default();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_cuboid_counts() {
        let mesh = TriangleMesh::cuboid(Point3::new(0.0, 0.0, 0.0), [1.0, 1.0, 1.0]);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 12);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_cuboid_spans_extents() {
        let mesh = TriangleMesh::cuboid(Point3::new(1.0, 2.0, 3.0), [2.0, 2.0, 2.0]);
        assert_eq!(mesh.vertices[0], Point3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.vertices[6], Point3::new(3.0, 4.0, 5.0));
    }
}
