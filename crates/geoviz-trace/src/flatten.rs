// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Collection flattening
//!
//! Reduces arbitrarily nested geometry to an ordered sequence of drawable
//! leaves. Multi-geometry members are simple by construction and always
//! leaves; only `Collection` recurses, and its depth is bounded because
//! nesting depth is caller-controlled.

use crate::{Error, Result};
use geoviz_model::{Geometry, LineString, Point, Polygon, TriangleMesh};

/// Upper bound on collection nesting depth
pub const MAX_NESTING_DEPTH: usize = 64;

/// A single drawable unit produced by flattening
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Leaf<'a> {
    Point(&'a Point),
    LineString(&'a LineString),
    Polygon(&'a Polygon),
    Mesh(&'a TriangleMesh),
}

/// Flatten nested geometry into leaves, depth-first and left-to-right
///
/// The resulting order determines trace concatenation order downstream. An
/// empty collection flattens to an empty sequence; exceeding
/// [`MAX_NESTING_DEPTH`] is an error.
pub fn flatten(geometry: &Geometry) -> Result<Vec<Leaf<'_>>> {
    let mut leaves = Vec::new();
    collect(geometry, 0, &mut leaves)?;
    Ok(leaves)
}

fn collect<'a>(geometry: &'a Geometry, depth: usize, out: &mut Vec<Leaf<'a>>) -> Result<()> {
    if depth > MAX_NESTING_DEPTH {
        return Err(Error::nesting_too_deep(MAX_NESTING_DEPTH));
    }

    match geometry {
        Geometry::Point(point) => out.push(Leaf::Point(point)),
        Geometry::LineString(line) => out.push(Leaf::LineString(line)),
        Geometry::Polygon(polygon) => out.push(Leaf::Polygon(polygon)),
        Geometry::Mesh(mesh) => out.push(Leaf::Mesh(mesh)),
        Geometry::MultiPoint(multi) => out.extend(multi.0.iter().map(Leaf::Point)),
        Geometry::MultiLineString(multi) => out.extend(multi.0.iter().map(Leaf::LineString)),
        Geometry::MultiPolygon(multi) => out.extend(multi.0.iter().map(Leaf::Polygon)),
        Geometry::Collection(members) => {
            for member in members {
                collect(member, depth + 1, out)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoviz_model::{Coord, MultiLineString};

    fn line(x: f64) -> Geometry {
        Geometry::LineString(LineString::from_coords([(x, 0.0), (x, 1.0)]))
    }

    #[test]
    fn test_simple_geometry_is_single_leaf() {
        let point = Geometry::Point(Point::new(Coord::xy(1.0, 1.0)));
        let leaves = flatten(&point).unwrap();
        assert_eq!(leaves.len(), 1);
        assert!(matches!(leaves[0], Leaf::Point(_)));
    }

    #[test]
    fn test_multi_members_become_leaves() {
        let multi = Geometry::MultiLineString(MultiLineString::new(vec![
            LineString::from_coords([(0.0, 0.0), (1.0, 1.0)]),
            LineString::from_coords([(2.0, 2.0), (3.0, 3.0)]),
        ]));

        let leaves = flatten(&multi).unwrap();
        assert_eq!(leaves.len(), 2);
        assert!(leaves.iter().all(|leaf| matches!(leaf, Leaf::LineString(_))));
    }

    #[test]
    fn test_nesting_does_not_change_leaf_order() {
        let (a, b, c, d) = (line(0.0), line(1.0), line(2.0), line(3.0));

        let nested = Geometry::Collection(vec![
            Geometry::Collection(vec![a.clone(), Geometry::Collection(vec![b.clone(), c.clone()])]),
            d.clone(),
        ]);
        let flat = Geometry::Collection(vec![a, b, c, d]);

        assert_eq!(flatten(&nested).unwrap(), flatten(&flat).unwrap());
    }

    #[test]
    fn test_empty_collection_flattens_to_nothing() {
        let empty = Geometry::Collection(Vec::new());
        let leaves = flatten(&empty).unwrap();
        assert!(leaves.is_empty());
    }

    #[test]
    fn test_nesting_within_bound_is_accepted() {
        let nested = (0..MAX_NESTING_DEPTH)
            .fold(line(0.0), |inner, _| Geometry::Collection(vec![inner]));
        assert_eq!(flatten(&nested).unwrap().len(), 1);
    }

    #[test]
    fn test_excessive_nesting_is_rejected() {
        let nested = (0..MAX_NESTING_DEPTH + 4)
            .fold(line(0.0), |inner, _| Geometry::Collection(vec![inner]));

        let error = flatten(&nested).unwrap_err();
        assert_eq!(
            error,
            Error::NestingTooDeep {
                max_depth: MAX_NESTING_DEPTH
            }
        );
    }

    #[test]
    fn test_mesh_in_collection_is_a_leaf() {
        let collection = Geometry::Collection(vec![Geometry::Mesh(TriangleMesh::default())]);
        let leaves = flatten(&collection).unwrap();
        assert!(matches!(leaves[0], Leaf::Mesh(_)));
    }
}
