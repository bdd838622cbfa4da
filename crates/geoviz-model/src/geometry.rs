// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry kinds accepted by the conversion pipeline
//!
//! The set of kinds is closed on purpose: every consumer matches on
//! [`Geometry`] exhaustively, so adding or removing a kind is a
//! compile-checked change rather than a runtime surprise.

use crate::{Coord, TriangleMesh};

/// A single location, possibly empty
///
/// The empty point is a valid geometry that contributes zero coordinates.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Point(pub Option<Coord>);

impl Point {
    /// Create a point at the given coordinate
    pub fn new(coord: impl Into<Coord>) -> Self {
        Point(Some(coord.into()))
    }

    /// Create the empty point
    pub fn empty() -> Self {
        Point(None)
    }

    /// Coordinate sequence view: zero or one element
    pub fn coords(&self) -> &[Coord] {
        self.0.as_slice()
    }

    /// Check if the point is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

/// An ordered run of coordinates, also used as a polygon ring
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LineString(pub Vec<Coord>);

impl LineString {
    /// Create a linestring from a coordinate list
    pub fn new(coords: Vec<Coord>) -> Self {
        LineString(coords)
    }

    /// Build from anything coordinate-like
    ///
    /// # Example
    ///
    /// ```
    /// use geoviz_model::LineString;
    ///
    /// let line = LineString::from_coords([(0.0, 0.0), (1.0, 1.0)]);
    /// assert_eq!(line.coords().len(), 2);
    /// ```
    pub fn from_coords<I, C>(coords: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coord>,
    {
        LineString(coords.into_iter().map(Into::into).collect())
    }

    /// Coordinate sequence view
    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    /// Check if the linestring has no coordinates
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A polygon with one exterior ring and zero or more interior rings (holes)
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Polygon {
    /// Outer boundary
    pub exterior: LineString,
    /// Holes, in declaration order
    pub interiors: Vec<LineString>,
}

impl Polygon {
    /// Create a polygon from its rings
    pub fn new(exterior: LineString, interiors: Vec<LineString>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Create a polygon without holes
    pub fn from_exterior(exterior: LineString) -> Self {
        Self {
            exterior,
            interiors: Vec::new(),
        }
    }

    /// Check if the polygon has no rings at all
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty() && self.interiors.is_empty()
    }
}

/// A group of points
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MultiPoint(pub Vec<Point>);

impl MultiPoint {
    /// Create a multipoint from its members
    pub fn new(points: Vec<Point>) -> Self {
        MultiPoint(points)
    }

    /// Check if every member is empty
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Point::is_empty)
    }
}

/// A group of linestrings
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MultiLineString(pub Vec<LineString>);

impl MultiLineString {
    /// Create a multilinestring from its members
    pub fn new(lines: Vec<LineString>) -> Self {
        MultiLineString(lines)
    }

    /// Check if every member is empty
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(LineString::is_empty)
    }
}

/// A group of polygons
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MultiPolygon(pub Vec<Polygon>);

impl MultiPolygon {
    /// Create a multipolygon from its members
    pub fn new(polygons: Vec<Polygon>) -> Self {
        MultiPolygon(polygons)
    }

    /// Check if every member is empty
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Polygon::is_empty)
    }
}

/// Any geometry the pipeline can render
///
/// Simple kinds and meshes are leaves. The multi-geometry kinds group
/// members of one simple kind; `Collection` nests arbitrary geometries to
/// any depth.
#[derive(Clone, PartialEq, Debug)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    Mesh(TriangleMesh),
    Collection(Vec<Geometry>),
}

impl Geometry {
    /// Short kind name for logs and error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "point",
            Geometry::LineString(_) => "linestring",
            Geometry::Polygon(_) => "polygon",
            Geometry::MultiPoint(_) => "multipoint",
            Geometry::MultiLineString(_) => "multilinestring",
            Geometry::MultiPolygon(_) => "multipolygon",
            Geometry::Mesh(_) => "mesh",
            Geometry::Collection(_) => "collection",
        }
    }

    /// Check if the geometry carries no coordinates at all
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(point) => point.is_empty(),
            Geometry::LineString(line) => line.is_empty(),
            Geometry::Polygon(polygon) => polygon.is_empty(),
            Geometry::MultiPoint(multi) => multi.is_empty(),
            Geometry::MultiLineString(multi) => multi.is_empty(),
            Geometry::MultiPolygon(multi) => multi.is_empty(),
            Geometry::Mesh(mesh) => mesh.is_empty(),
            Geometry::Collection(members) => members.iter().all(Geometry::is_empty),
        }
    }
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Geometry::Point(point)
    }
}

impl From<LineString> for Geometry {
    fn from(line: LineString) -> Self {
        Geometry::LineString(line)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Geometry::Polygon(polygon)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(multi: MultiPoint) -> Self {
        Geometry::MultiPoint(multi)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(multi: MultiLineString) -> Self {
        Geometry::MultiLineString(multi)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(multi: MultiPolygon) -> Self {
        Geometry::MultiPolygon(multi)
    }
}

impl From<TriangleMesh> for Geometry {
    fn from(mesh: TriangleMesh) -> Self {
        Geometry::Mesh(mesh)
    }
}

impl From<Vec<Geometry>> for Geometry {
    fn from(members: Vec<Geometry>) -> Self {
        Geometry::Collection(members)
    }
}
