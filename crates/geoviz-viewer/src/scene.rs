//! Demo scene construction
//!
//! Builds the sample geometry set exercised by the viewer binary: squares
//! and a donut polygon, a line pair, points, a unit cube mesh, and a site
//! outline parsed from WKT.

use geoviz_model::{
    Geometry, LineString, MultiLineString, MultiPolygon, Point, Point3, Polygon, TriangleMesh,
};
use geoviz_wkt::WktError;

/// Site outline in WKT form
pub const SITE_WKT: &str = "POLYGON ((-6 5, -6 -1, -4 -6, 0 -5, 9 -1, 5 1, 1 6, -4 6, -6 5))";

/// Axis-aligned square with the given lower-left corner and side length
fn square(x: f64, y: f64, size: f64) -> Polygon {
    Polygon::from_exterior(LineString::from_coords([
        (x, y),
        (x + size, y),
        (x + size, y + size),
        (x, y + size),
        (x, y),
    ]))
}

/// Build the demo geometry set
pub fn demo_scene() -> Result<Vec<Geometry>, WktError> {
    let multipolygon = MultiPolygon::new(vec![square(0.0, 0.0, 2.0), square(3.0, 3.0, 2.0)]);

    let overlapping = square(1.0, 1.0, 1.0);

    let donut = Polygon::new(
        LineString::from_coords([
            (-5.0, -5.0),
            (-1.0, -5.0),
            (-1.0, -1.0),
            (-5.0, -1.0),
            (-5.0, -5.0),
        ]),
        vec![LineString::from_coords([
            (-4.0, -4.0),
            (-2.0, -4.0),
            (-2.0, -2.0),
            (-4.0, -2.0),
            (-4.0, -4.0),
        ])],
    );

    let lines = MultiLineString::new(vec![
        LineString::from_coords([(0.0, 0.0), (1.0, 1.0)]),
        LineString::from_coords([(2.0, 2.0), (3.0, 3.0)]),
    ]);

    let cube = TriangleMesh::cuboid(Point3::origin(), [1.0, 1.0, 1.0]);

    let site = geoviz_wkt::parse(SITE_WKT)?;

    Ok(vec![
        Geometry::MultiPolygon(multipolygon),
        Geometry::Polygon(overlapping),
        Geometry::Polygon(donut),
        Geometry::MultiLineString(lines),
        Geometry::Point(Point::new((2.0, 2.0))),
        Geometry::Point(Point::empty()),
        Geometry::Mesh(cube),
        site,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoviz_model::PlotOptions;
    use geoviz_trace::build_document;

    #[test]
    fn test_demo_scene_contents() {
        let scene = demo_scene().unwrap();

        assert_eq!(scene.len(), 8);
        assert!(scene.iter().any(|geometry| geometry.kind_name() == "mesh"));
        assert_eq!(scene.last().unwrap().kind_name(), "polygon");
    }

    #[test]
    fn test_demo_scene_converts() {
        let scene = demo_scene().unwrap();
        let options = PlotOptions::default()
            .with_show_vertices(false)
            .with_orthographic(true);
        let document = build_document(&scene, &options).unwrap();

        assert_eq!(document.data.len(), 8);
        assert!(document.layout.scene.camera.is_some());
    }
}
