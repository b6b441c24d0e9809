//! Discrete traversal of the unit grid along a continuous ray.
//!
//! Implementation of the algorithm described in "A Fast Voxel Traversal
//! Algorithm for Ray Tracing" (Amanatides & Woo,
//! <http://www.cse.yorku.ca/~amana/research/grid.pdf>).

use glam::{DVec3, IVec3};
use std::iter::FusedIterator;
use voxelmath_core::error::{Error, Result};
use voxelmath_core::vector::Vector3Ext;

/// Iterator over the grid cells a ray passes through, in visiting order.
///
/// The first cell is the floored start point; every subsequent cell is
/// exactly one grid step from the previous one. When the ray crosses
/// several axis boundaries at once, they are crossed in the order Z, then
/// Y, then X. Cells are produced lazily; `collect()` materializes the full
/// path when a caller really needs all of it.
#[derive(Clone, Debug)]
pub struct VoxelRaycast {
    current: IVec3,
    step: IVec3,
    t_max: DVec3,
    t_delta: DVec3,
    length: f64,
    finished: bool,
}

impl VoxelRaycast {
    /// Traversal of the cells between two points.
    ///
    /// The final cell is the floored end point, unless the end lies exactly
    /// on a cell boundary, in which case the cell beyond the boundary may
    /// be omitted. Fails with [`Error::DegenerateRay`] when the points
    /// coincide.
    pub fn between_points(start: DVec3, end: DVec3) -> Result<Self> {
        let delta = end - start;
        if delta.length_squared() <= 0.0 {
            return Err(Error::DegenerateRay);
        }
        let direction = delta.normalize();

        Ok(Self {
            current: start.floored(),
            step: IVec3::new(
                step_sign(direction.x),
                step_sign(direction.y),
                step_sign(direction.z),
            ),
            t_max: DVec3::new(
                distance_to_boundary(start.x, direction.x),
                distance_to_boundary(start.y, direction.y),
                distance_to_boundary(start.z, direction.z),
            ),
            // Zero direction components give an infinite per-step cost, so
            // that axis is never chosen.
            t_delta: direction.recip().abs(),
            length: start.distance(end),
            finished: false,
        })
    }

    /// Traversal from a start point along a direction, for `max_distance`.
    ///
    /// Only the orientation of `direction` matters; its magnitude is
    /// discarded in favour of `max_distance`.
    pub fn in_direction(start: DVec3, direction: DVec3, max_distance: f64) -> Result<Self> {
        let end = start + direction.normalize_or_zero() * max_distance;
        Self::between_points(start, end)
    }
}

impl Iterator for VoxelRaycast {
    type Item = IVec3;

    fn next(&mut self) -> Option<IVec3> {
        if self.finished {
            return None;
        }
        let cell = self.current;

        // The smallest t_max names the closest cube boundary; cross it,
        // unless it lies beyond the end of the ray. Ties fall through to
        // the later branches, crossing Z before Y before X.
        if self.t_max.x < self.t_max.y && self.t_max.x < self.t_max.z {
            if self.t_max.x > self.length {
                self.finished = true;
            } else {
                self.current.x += self.step.x;
                self.t_max.x += self.t_delta.x;
            }
        } else if self.t_max.y < self.t_max.z {
            if self.t_max.y > self.length {
                self.finished = true;
            } else {
                self.current.y += self.step.y;
                self.t_max.y += self.t_delta.y;
            }
        } else if self.t_max.z > self.length {
            self.finished = true;
        } else {
            self.current.z += self.step.z;
            self.t_max.z += self.t_delta.z;
        }

        Some(cell)
    }
}

impl FusedIterator for VoxelRaycast {}

fn step_sign(d: f64) -> i32 {
    if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    }
}

/// Distance along the ray to the first grid boundary on one axis: the
/// smallest non-negative `t` such that `s + t * ds` is an integer.
///
/// Zero when `s` sits exactly on a boundary and `ds` is negative (the ray
/// leaves the coordinate immediately); infinite when `ds` is zero.
fn distance_to_boundary(mut s: f64, mut ds: f64) -> f64 {
    if ds == 0.0 {
        return f64::INFINITY;
    }
    if ds < 0.0 {
        s = -s;
        ds = -ds;
        if s.floor() == s {
            return 0.0;
        }
    }
    (1.0 - (s - s.floor())) / ds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(start: DVec3, end: DVec3) -> Vec<IVec3> {
        VoxelRaycast::between_points(start, end).unwrap().collect()
    }

    #[test]
    fn walks_a_straight_line_of_cells() {
        assert_eq!(
            cells(DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0)),
            vec![
                IVec3::new(0, 0, 0),
                IVec3::new(1, 0, 0),
                IVec3::new(2, 0, 0),
                IVec3::new(3, 0, 0),
            ]
        );
    }

    #[test]
    fn walks_negative_directions() {
        assert_eq!(
            cells(DVec3::new(0.5, 0.5, 0.5), DVec3::new(-1.5, 0.5, 0.5)),
            vec![
                IVec3::new(0, 0, 0),
                IVec3::new(-1, 0, 0),
                IVec3::new(-2, 0, 0),
            ]
        );
    }

    #[test]
    fn start_on_boundary_moving_negative_leaves_immediately() {
        assert_eq!(
            cells(DVec3::new(0.0, 0.5, 0.5), DVec3::new(-1.5, 0.5, 0.5)),
            vec![
                IVec3::new(0, 0, 0),
                IVec3::new(-1, 0, 0),
                IVec3::new(-2, 0, 0),
            ]
        );
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let p = DVec3::new(1.2, 3.4, 5.6);
        assert!(matches!(
            VoxelRaycast::between_points(p, p),
            Err(Error::DegenerateRay)
        ));
    }

    #[test]
    fn zero_direction_is_degenerate() {
        assert!(matches!(
            VoxelRaycast::in_direction(DVec3::ZERO, DVec3::ZERO, 5.0),
            Err(Error::DegenerateRay)
        ));
        assert!(matches!(
            VoxelRaycast::in_direction(DVec3::ZERO, DVec3::X, 0.0),
            Err(Error::DegenerateRay)
        ));
    }

    #[test]
    fn first_cell_is_the_floored_start() {
        let start = DVec3::new(1.7, -0.3, 2.9);
        let mut trace = VoxelRaycast::between_points(start, DVec3::new(5.0, 5.0, 5.0)).unwrap();
        assert_eq!(trace.next(), Some(IVec3::new(1, -1, 2)));
    }

    #[test]
    fn consecutive_cells_are_taxicab_neighbors() {
        let start = DVec3::new(0.3, 0.4, 0.5);
        let end = DVec3::new(4.6, 3.1, 2.2);
        let path = cells(start, end);

        assert_eq!(path.first(), Some(&start.floored()));
        assert_eq!(path.last(), Some(&end.floored()));
        for pair in path.windows(2) {
            let d = (pair[1] - pair[0]).abs();
            assert_eq!(d.x + d.y + d.z, 1);
        }
    }

    #[test]
    fn traversal_is_deterministic() {
        let start = DVec3::new(-3.2, 7.7, 0.1);
        let end = DVec3::new(6.1, -2.5, 9.9);
        assert_eq!(cells(start, end), cells(start, end));
    }

    #[test]
    fn diagonal_crossings_prefer_z_then_y_then_x() {
        assert_eq!(
            cells(DVec3::ZERO, DVec3::splat(2.5)),
            vec![
                IVec3::new(0, 0, 0),
                IVec3::new(0, 0, 1),
                IVec3::new(0, 1, 1),
                IVec3::new(1, 1, 1),
                IVec3::new(1, 1, 2),
                IVec3::new(1, 2, 2),
                IVec3::new(2, 2, 2),
            ]
        );
    }

    #[test]
    fn in_direction_ignores_direction_magnitude() {
        let start = DVec3::new(0.5, 0.5, 0.5);
        let scaled: Vec<_> = VoxelRaycast::in_direction(start, DVec3::new(10.0, 0.0, 0.0), 3.0)
            .unwrap()
            .collect();
        let unit: Vec<_> = VoxelRaycast::in_direction(start, DVec3::X, 3.0)
            .unwrap()
            .collect();
        assert_eq!(scaled, unit);
        assert_eq!(
            scaled,
            cells(start, DVec3::new(3.5, 0.5, 0.5))
        );
    }

    #[test]
    fn consumption_can_stop_early() {
        let long_ray = VoxelRaycast::between_points(DVec3::ZERO, DVec3::new(1000.0, 0.5, 0.5))
            .unwrap();
        let prefix: Vec<_> = long_ray.take(3).collect();
        assert_eq!(prefix.len(), 3);
        assert_eq!(prefix[0], IVec3::ZERO);
    }

    #[test]
    fn exhausted_traversal_stays_exhausted() {
        let mut trace =
            VoxelRaycast::between_points(DVec3::new(0.5, 0.5, 0.5), DVec3::new(1.5, 0.5, 0.5))
                .unwrap();
        assert_eq!(trace.next(), Some(IVec3::new(0, 0, 0)));
        assert_eq!(trace.next(), Some(IVec3::new(1, 0, 0)));
        assert_eq!(trace.next(), None);
        assert_eq!(trace.next(), None);
    }
}
