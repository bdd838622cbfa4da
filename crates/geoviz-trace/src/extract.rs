// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ring coordinate extraction

use geoviz_model::Coord;

/// Split a coordinate ring into its X, Y, and Z columns
///
/// Returns three equal-length sequences in ring order. 2D coordinates get a
/// synthesized Z of 0.0; an empty ring yields three empty sequences. Never
/// fails.
#[inline]
pub fn ring_coords(ring: &[Coord]) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut xs = Vec::with_capacity(ring.len());
    let mut ys = Vec::with_capacity(ring.len());
    let mut zs = Vec::with_capacity(ring.len());

    for coord in ring {
        xs.push(coord.x);
        ys.push(coord.y);
        zs.push(coord.z_or_zero());
    }

    (xs, ys, zs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_ring_yields_empty_columns() {
        let (xs, ys, zs) = ring_coords(&[]);
        assert!(xs.is_empty());
        assert!(ys.is_empty());
        assert!(zs.is_empty());
    }

    #[test]
    fn test_zero_z_synthesized_for_2d() {
        let ring = vec![Coord::xy(0.0, 0.0), Coord::xy(2.0, 0.0), Coord::xy(2.0, 2.0)];
        let (xs, ys, zs) = ring_coords(&ring);

        assert_eq!(xs, vec![0.0, 2.0, 2.0]);
        assert_eq!(ys, vec![0.0, 0.0, 2.0]);
        assert_eq!(zs, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_z_taken_from_3d_coords() {
        let ring = vec![Coord::xyz(1.0, 2.0, 3.0), Coord::xyz(4.0, 5.0, 6.0)];
        let (_, _, zs) = ring_coords(&ring);

        assert_relative_eq!(zs[0], 3.0);
        assert_relative_eq!(zs[1], 6.0);
    }

    #[test]
    fn test_columns_stay_in_order_and_equal_length() {
        let ring = vec![
            Coord::xy(0.0, 0.0),
            Coord::xyz(1.0, 1.0, 1.0),
            Coord::xy(2.0, 4.0),
        ];
        let (xs, ys, zs) = ring_coords(&ring);

        assert_eq!(xs.len(), 3);
        assert_eq!(xs.len(), ys.len());
        assert_eq!(ys.len(), zs.len());
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
        assert_eq!(zs, vec![0.0, 1.0, 0.0]);
    }
}
