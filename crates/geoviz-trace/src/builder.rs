// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Trace building
//!
//! Dispatches on geometry kind and produces one fresh trace record per
//! call: meshes become `mesh3d` traces, everything else a `scatter3d`
//! trace. Collections are flattened and their leaf traces concatenated in
//! traversal order.

use crate::{flatten, ring_coords, Error, Leaf, Result};
use geoviz_model::{
    Coord, Geometry, LineString, PlotOptions, ScatterMode, TraceRecord, TriangleMesh,
};

/// Convert one geometry into one renderable trace
pub fn build_trace(geometry: &Geometry, options: &PlotOptions) -> Result<TraceRecord> {
    match geometry {
        Geometry::Mesh(mesh) => mesh_trace(mesh, options),
        other => scatter_trace(other, options),
    }
}

/// Build a mesh3d trace from a triangle mesh
///
/// A vertex-free mesh yields empty coordinate and index arrays, which is
/// valid and renders nothing.
fn mesh_trace(mesh: &TriangleMesh, options: &PlotOptions) -> Result<TraceRecord> {
    validate_mesh(mesh)?;

    let mut trace = TraceRecord::mesh3d();
    for vertex in &mesh.vertices {
        trace.push_vertex(vertex.x, vertex.y, vertex.z);
    }

    // Face-table columns become the index arrays; the column order fixes
    // triangle winding for the renderer.
    let mut i = Vec::with_capacity(mesh.face_count());
    let mut j = Vec::with_capacity(mesh.face_count());
    let mut k = Vec::with_capacity(mesh.face_count());
    for face in &mesh.faces {
        i.push(face[0]);
        j.push(face[1]);
        k.push(face[2]);
    }
    trace.i = Some(i);
    trace.j = Some(j);
    trace.k = Some(k);

    // Swap the built arrays, not the source mesh
    if options.map_z_to_y {
        std::mem::swap(&mut trace.y, &mut trace.z);
    }

    Ok(trace)
}

/// Reject meshes whose face table cannot be rendered
fn validate_mesh(mesh: &TriangleMesh) -> Result<()> {
    if mesh.vertices.is_empty() && !mesh.faces.is_empty() {
        return Err(Error::faces_without_vertices(mesh.face_count()));
    }

    let vertex_count = mesh.vertex_count();
    for (face, indices) in mesh.faces.iter().enumerate() {
        for &index in indices {
            if index as usize >= vertex_count {
                return Err(Error::face_index_out_of_range(face, index, vertex_count));
            }
        }
    }

    Ok(())
}

/// Build a scatter3d trace from a simple geometry or collection
fn scatter_trace(geometry: &Geometry, options: &PlotOptions) -> Result<TraceRecord> {
    let mut trace = TraceRecord::scatter3d(scatter_mode(options));

    for leaf in flatten(geometry)? {
        let sub = leaf_trace(leaf, options)?;
        trace.x.extend(sub.x);
        trace.y.extend(sub.y);
        trace.z.extend(sub.z);
    }

    Ok(trace)
}

/// Build the trace for a single flattened leaf
fn leaf_trace(leaf: Leaf<'_>, options: &PlotOptions) -> Result<TraceRecord> {
    match leaf {
        Leaf::Point(point) => Ok(simple_trace(point.coords(), &[], options)),
        Leaf::LineString(line) => Ok(simple_trace(line.coords(), &[], options)),
        Leaf::Polygon(polygon) => Ok(simple_trace(
            polygon.exterior.coords(),
            &polygon.interiors,
            options,
        )),
        // A mesh inside a collection contributes its vertex coordinates;
        // its face table has no meaning in a scatter trace and is dropped.
        Leaf::Mesh(mesh) => mesh_trace(mesh, options),
    }
}

/// Scatter trace for one ring set
///
/// Appends the exterior ring, then each interior ring preceded by a path
/// break, then exactly one trailing break so concatenated geometries never
/// visually connect.
fn simple_trace(exterior: &[Coord], interiors: &[LineString], options: &PlotOptions) -> TraceRecord {
    let mut trace = TraceRecord::scatter3d(scatter_mode(options));

    let (xs, ys, zs) = ring_coords(exterior);
    trace.extend_coords(xs, ys, zs);

    for interior in interiors {
        trace.push_break();
        let (xs, ys, zs) = ring_coords(interior.coords());
        trace.extend_coords(xs, ys, zs);
    }

    trace.push_break();
    trace
}

#[inline]
fn scatter_mode(options: &PlotOptions) -> ScatterMode {
    if options.show_vertices {
        ScatterMode::LinesMarkers
    } else {
        ScatterMode::Lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoviz_model::{MultiPolygon, Point, Point3, Polygon, TraceKind};

    fn square(x: f64, y: f64, size: f64) -> Polygon {
        Polygon::from_exterior(LineString::from_coords([
            (x, y),
            (x + size, y),
            (x + size, y + size),
            (x, y + size),
            (x, y),
        ]))
    }

    #[test]
    fn test_point_trace() {
        let geometry = Geometry::Point(Point::new((2.0, 2.0)));
        let trace = build_trace(&geometry, &PlotOptions::default()).unwrap();

        assert_eq!(trace.kind, TraceKind::Scatter3d);
        assert_eq!(trace.x, vec![Some(2.0), None]);
        assert_eq!(trace.y, vec![Some(2.0), None]);
        assert_eq!(trace.z, vec![Some(0.0), None]);
    }

    #[test]
    fn test_empty_point_contributes_single_break() {
        let geometry = Geometry::Point(Point::empty());
        let trace = build_trace(&geometry, &PlotOptions::default()).unwrap();

        assert_eq!(trace.x, vec![None]);
        assert_eq!(trace.y, vec![None]);
        assert_eq!(trace.z, vec![None]);
    }

    #[test]
    fn test_scatter_arrays_equal_length() {
        let geometry = Geometry::LineString(LineString::from_coords([
            (0.0, 0.0),
            (1.0, 1.0),
            (2.0, 2.0),
        ]));
        let trace = build_trace(&geometry, &PlotOptions::default()).unwrap();

        assert_eq!(trace.x.len(), trace.y.len());
        assert_eq!(trace.y.len(), trace.z.len());
        assert_eq!(trace.len(), 4);
    }

    #[test]
    fn test_polygon_break_per_interior_plus_trailing() {
        let polygon = Polygon::new(
            LineString::from_coords([(0.0, 0.0), (9.0, 0.0), (9.0, 9.0), (0.0, 9.0), (0.0, 0.0)]),
            vec![
                LineString::from_coords([(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)]),
                LineString::from_coords([(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 5.0)]),
            ],
        );
        let trace = build_trace(&Geometry::Polygon(polygon), &PlotOptions::default()).unwrap();

        let breaks = trace.x.iter().filter(|value| value.is_none()).count();
        assert_eq!(breaks, 3);
        // Breaks sit before each interior ring and at the very end
        assert_eq!(trace.x[5], None);
        assert_eq!(trace.x[10], None);
        assert_eq!(trace.x[trace.len() - 1], None);
    }

    #[test]
    fn test_mesh_face_columns() {
        let mesh = TriangleMesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        let trace = build_trace(&Geometry::Mesh(mesh), &PlotOptions::default()).unwrap();

        assert_eq!(trace.kind, TraceKind::Mesh3d);
        assert_eq!(trace.i, Some(vec![0]));
        assert_eq!(trace.j, Some(vec![1]));
        assert_eq!(trace.k, Some(vec![2]));
        assert!(trace.mode.is_none());
    }

    #[test]
    fn test_map_z_to_y_swaps_mesh_arrays() {
        let mesh = TriangleMesh::new(vec![Point3::new(0.0, 0.0, 1.0)], Vec::new());
        let options = PlotOptions::default().with_map_z_to_y(true);
        let trace = build_trace(&Geometry::Mesh(mesh), &options).unwrap();

        assert_eq!(trace.y, vec![Some(1.0)]);
        assert_eq!(trace.z, vec![Some(0.0)]);
    }

    #[test]
    fn test_mesh_arrays_unswapped_when_disabled() {
        let mesh = TriangleMesh::new(vec![Point3::new(0.0, 0.0, 1.0)], Vec::new());
        let options = PlotOptions::default().with_map_z_to_y(false);
        let trace = build_trace(&Geometry::Mesh(mesh), &options).unwrap();

        assert_eq!(trace.y, vec![Some(0.0)]);
        assert_eq!(trace.z, vec![Some(1.0)]);
    }

    #[test]
    fn test_scatter_unaffected_by_map_z_to_y() {
        let geometry = Geometry::LineString(LineString::from_coords([(0.0, 0.0, 1.0)]));
        let trace = build_trace(&geometry, &PlotOptions::default().with_map_z_to_y(true)).unwrap();

        assert_eq!(trace.y[0], Some(0.0));
        assert_eq!(trace.z[0], Some(1.0));
    }

    #[test]
    fn test_empty_mesh_is_valid() {
        let trace =
            build_trace(&Geometry::Mesh(TriangleMesh::default()), &PlotOptions::default()).unwrap();

        assert!(trace.x.is_empty());
        assert!(trace.y.is_empty());
        assert!(trace.z.is_empty());
        assert_eq!(trace.i, Some(Vec::new()));
        assert_eq!(trace.j, Some(Vec::new()));
        assert_eq!(trace.k, Some(Vec::new()));
    }

    #[test]
    fn test_faces_without_vertices_rejected() {
        let mesh = TriangleMesh::new(Vec::new(), vec![[0, 1, 2]]);
        let error = build_trace(&Geometry::Mesh(mesh), &PlotOptions::default()).unwrap_err();

        assert_eq!(error, Error::FacesWithoutVertices { face_count: 1 });
    }

    #[test]
    fn test_face_index_out_of_range_rejected() {
        let mesh = TriangleMesh::new(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
            vec![[0, 1, 2]],
        );
        let error = build_trace(&Geometry::Mesh(mesh), &PlotOptions::default()).unwrap_err();

        assert_eq!(
            error,
            Error::FaceIndexOutOfRange {
                face: 0,
                index: 2,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn test_collection_concatenates_point_traces() {
        let collection = Geometry::Collection(vec![
            Geometry::Point(Point::new((1.0, 1.0))),
            Geometry::Point(Point::new((2.0, 2.0))),
        ]);
        let trace = build_trace(&collection, &PlotOptions::default()).unwrap();

        assert_eq!(trace.kind, TraceKind::Scatter3d);
        assert_eq!(trace.x, vec![Some(1.0), None, Some(2.0), None]);
    }

    #[test]
    fn test_multipolygon_concatenates_members() {
        let multi = Geometry::MultiPolygon(MultiPolygon::new(vec![
            square(0.0, 0.0, 2.0),
            square(3.0, 3.0, 2.0),
        ]));
        let trace = build_trace(&multi, &PlotOptions::default()).unwrap();

        // 5 coords + break, twice
        assert_eq!(trace.len(), 12);
        assert_eq!(trace.x[5], None);
        assert_eq!(trace.x[11], None);
        assert_eq!(trace.x[6], Some(3.0));
    }

    #[test]
    fn test_show_vertices_selects_mode() {
        let geometry = Geometry::Point(Point::new((0.0, 0.0)));

        let markers = build_trace(&geometry, &PlotOptions::default()).unwrap();
        assert_eq!(markers.mode, Some(ScatterMode::LinesMarkers));

        let lines =
            build_trace(&geometry, &PlotOptions::default().with_show_vertices(false)).unwrap();
        assert_eq!(lines.mode, Some(ScatterMode::Lines));
    }

    #[test]
    fn test_mesh_in_collection_contributes_vertices_only() {
        let mesh = TriangleMesh::new(
            vec![Point3::new(0.0, 0.0, 1.0), Point3::new(1.0, 0.0, 2.0)],
            Vec::new(),
        );
        let collection = Geometry::Collection(vec![
            Geometry::Mesh(mesh),
            Geometry::Point(Point::new((5.0, 5.0))),
        ]);
        let trace = build_trace(&collection, &PlotOptions::default()).unwrap();

        assert_eq!(trace.kind, TraceKind::Scatter3d);
        assert!(trace.i.is_none());
        // The mesh leaf keeps its Y/Z swap before concatenation
        assert_eq!(trace.x, vec![Some(0.0), Some(1.0), Some(5.0), None]);
        assert_eq!(trace.y, vec![Some(1.0), Some(2.0), Some(5.0), None]);
        assert_eq!(trace.z, vec![Some(0.0), Some(0.0), Some(0.0), None]);
    }

    #[test]
    fn test_malformed_mesh_in_collection_fails_loudly() {
        let collection = Geometry::Collection(vec![Geometry::Mesh(TriangleMesh::new(
            Vec::new(),
            vec![[0, 0, 0]],
        ))]);

        assert!(build_trace(&collection, &PlotOptions::default()).is_err());
    }
}
