//! Axis-aligned bounding boxes and swept-motion collision.

use crate::ray::RayTraceResult;
use glam::DVec3;
use voxelmath_core::error::{Error, Result};
use voxelmath_core::facing::{Axis, Facing};
use voxelmath_core::vector::Vector3Ext;

/// Default overlap tolerance for [`Aabb::intersects`].
pub const DEFAULT_EPSILON: f64 = 1.0e-5;

/// Axis-aligned bounding box over double-precision world coordinates.
///
/// `min` is component-wise at or below `max`; every constructor enforces
/// this, so a held `Aabb` is always well-formed. All transformers are pure
/// and return new values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    min: DVec3,
    max: DVec3,
}

impl Aabb {
    /// Create a box from corner points.
    ///
    /// Fails with [`Error::InvalidBounds`] when `min` exceeds `max` on any
    /// axis; the first violating axis (in Y, Z, X order) is reported.
    pub fn new(min: DVec3, max: DVec3) -> Result<Self> {
        for axis in Axis::ALL {
            let lo = min.component(axis);
            let hi = max.component(axis);
            if lo > hi {
                return Err(Error::InvalidBounds {
                    axis,
                    min: lo,
                    max: hi,
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Create a box from six scalar bounds.
    pub fn from_bounds(
        min_x: f64,
        min_y: f64,
        min_z: f64,
        max_x: f64,
        max_y: f64,
        max_z: f64,
    ) -> Result<Self> {
        Self::new(
            DVec3::new(min_x, min_y, min_z),
            DVec3::new(max_x, max_y, max_z),
        )
    }

    /// The unit cube whose minimum corner is `pos`.
    #[inline]
    pub fn unit_cube(pos: DVec3) -> Self {
        Self {
            min: pos,
            max: pos + DVec3::ONE,
        }
    }

    /// Minimum corner.
    #[inline]
    pub const fn min(&self) -> DVec3 {
        self.min
    }

    /// Maximum corner.
    #[inline]
    pub const fn max(&self) -> DVec3 {
        self.max
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Mean of the X, Y and Z edge lengths.
    pub fn average_edge_length(&self) -> f64 {
        let size = self.size();
        (size.x + size.y + size.z) / 3.0
    }

    /// Grown toward the signs of `delta`: a positive component pushes the
    /// relevant max bound out, a negative one pulls the min bound.
    pub fn extended(&self, delta: DVec3) -> Self {
        Self {
            min: self.min + delta.min(DVec3::ZERO),
            max: self.max + delta.max(DVec3::ZERO),
        }
    }

    /// Outset by `amount` on every side.
    ///
    /// Fails with [`Error::InvalidBounds`] when a negative `amount` inverts
    /// the box.
    pub fn expanded(&self, amount: DVec3) -> Result<Self> {
        Self::new(self.min - amount, self.max + amount)
    }

    /// Inset by `amount` on every side.
    ///
    /// Fails with [`Error::InvalidBounds`] when the inset exceeds the box's
    /// half-extents.
    pub fn contracted(&self, amount: DVec3) -> Result<Self> {
        Self::new(self.min + amount, self.max - amount)
    }

    /// Shifted by `delta`.
    pub fn translated(&self, delta: DVec3) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Largest displacement along X, no further than `dx`, that `bb` can
    /// move without penetrating this box.
    ///
    /// Returns `dx` unchanged when `bb` does not overlap this box on both
    /// Y and Z (boxes merely sharing a boundary do not overlap), or when
    /// `bb` is not in the way of the motion. The result never exceeds the
    /// requested displacement in magnitude.
    pub fn calculate_x_offset(&self, bb: &Self, dx: f64) -> f64 {
        if bb.max.y <= self.min.y || bb.min.y >= self.max.y {
            return dx;
        }
        if bb.max.z <= self.min.z || bb.min.z >= self.max.z {
            return dx;
        }
        let mut dx = dx;
        if dx > 0.0 && bb.max.x <= self.min.x {
            let gap = self.min.x - bb.max.x;
            if gap < dx {
                dx = gap;
            }
        } else if dx < 0.0 && bb.min.x >= self.max.x {
            let gap = self.max.x - bb.min.x;
            if gap > dx {
                dx = gap;
            }
        }
        dx
    }

    /// Largest displacement along Y, no further than `dy`, that `bb` can
    /// move without penetrating this box. See [`Self::calculate_x_offset`].
    pub fn calculate_y_offset(&self, bb: &Self, dy: f64) -> f64 {
        if bb.max.x <= self.min.x || bb.min.x >= self.max.x {
            return dy;
        }
        if bb.max.z <= self.min.z || bb.min.z >= self.max.z {
            return dy;
        }
        let mut dy = dy;
        if dy > 0.0 && bb.max.y <= self.min.y {
            let gap = self.min.y - bb.max.y;
            if gap < dy {
                dy = gap;
            }
        } else if dy < 0.0 && bb.min.y >= self.max.y {
            let gap = self.max.y - bb.min.y;
            if gap > dy {
                dy = gap;
            }
        }
        dy
    }

    /// Largest displacement along Z, no further than `dz`, that `bb` can
    /// move without penetrating this box. See [`Self::calculate_x_offset`].
    pub fn calculate_z_offset(&self, bb: &Self, dz: f64) -> f64 {
        if bb.max.x <= self.min.x || bb.min.x >= self.max.x {
            return dz;
        }
        if bb.max.y <= self.min.y || bb.min.y >= self.max.y {
            return dz;
        }
        let mut dz = dz;
        if dz > 0.0 && bb.max.z <= self.min.z {
            let gap = self.min.z - bb.max.z;
            if gap < dz {
                dz = gap;
            }
        } else if dz < 0.0 && bb.min.z >= self.max.z {
            let gap = self.max.z - bb.min.z;
            if gap > dz {
                dz = gap;
            }
        }
        dz
    }

    /// Whether the boxes overlap by more than [`DEFAULT_EPSILON`] on all
    /// three axes.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersects_with_epsilon(other, DEFAULT_EPSILON)
    }

    /// Whether the boxes overlap by more than `epsilon` on all three axes.
    ///
    /// Boxes that merely share a boundary, or overlap within `epsilon`, do
    /// not intersect.
    pub fn intersects_with_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        other.max.x - self.min.x > epsilon
            && self.max.x - other.min.x > epsilon
            && other.max.y - self.min.y > epsilon
            && self.max.y - other.min.y > epsilon
            && other.max.z - self.min.z > epsilon
            && self.max.z - other.min.z > epsilon
    }

    /// Whether the point is strictly inside on all three axes. Boundary
    /// points are excluded.
    pub fn contains_point(&self, point: DVec3) -> bool {
        point.x > self.min.x
            && point.x < self.max.x
            && point.y > self.min.y
            && point.y < self.max.y
            && point.z > self.min.z
            && point.z < self.max.z
    }

    /// Whether the point is within the Y and Z bounds, inclusive.
    pub fn is_vector_in_yz(&self, v: DVec3) -> bool {
        v.y >= self.min.y && v.y <= self.max.y && v.z >= self.min.z && v.z <= self.max.z
    }

    /// Whether the point is within the X and Z bounds, inclusive.
    pub fn is_vector_in_xz(&self, v: DVec3) -> bool {
        v.x >= self.min.x && v.x <= self.max.x && v.z >= self.min.z && v.z <= self.max.z
    }

    /// Whether the point is within the X and Y bounds, inclusive.
    pub fn is_vector_in_xy(&self, v: DVec3) -> bool {
        v.x >= self.min.x && v.x <= self.max.x && v.y >= self.min.y && v.y <= self.max.y
    }

    /// The point nearest `pos1` where the segment toward `pos2` crosses the
    /// box surface, with the face it crossed. `None` when the segment
    /// misses the box.
    ///
    /// Each of the six bounding planes contributes a candidate crossing;
    /// candidates outside the box's bounds on the plane's two axes are
    /// discarded, and the survivor with the smallest squared distance from
    /// `pos1` wins. Equidistant candidates resolve in the fixed order west,
    /// east, down, up, north, south.
    pub fn calculate_intercept(&self, pos1: DVec3, pos2: DVec3) -> Option<RayTraceResult> {
        let candidates = [
            (
                Facing::West,
                pos1.intermediate_with_x(pos2, self.min.x)
                    .filter(|v| self.is_vector_in_yz(*v)),
            ),
            (
                Facing::East,
                pos1.intermediate_with_x(pos2, self.max.x)
                    .filter(|v| self.is_vector_in_yz(*v)),
            ),
            (
                Facing::Down,
                pos1.intermediate_with_y(pos2, self.min.y)
                    .filter(|v| self.is_vector_in_xz(*v)),
            ),
            (
                Facing::Up,
                pos1.intermediate_with_y(pos2, self.max.y)
                    .filter(|v| self.is_vector_in_xz(*v)),
            ),
            (
                Facing::North,
                pos1.intermediate_with_z(pos2, self.min.z)
                    .filter(|v| self.is_vector_in_xy(*v)),
            ),
            (
                Facing::South,
                pos1.intermediate_with_z(pos2, self.max.z)
                    .filter(|v| self.is_vector_in_xy(*v)),
            ),
        ];

        let mut nearest: Option<(Facing, DVec3, f64)> = None;
        for (face, candidate) in candidates {
            if let Some(v) = candidate {
                let distance_sq = pos1.distance_squared(v);
                if nearest.map_or(true, |(_, _, best)| distance_sq < best) {
                    nearest = Some((face, v, distance_sq));
                }
            }
        }

        nearest.map(|(face, v, _)| RayTraceResult::new(*self, face, v))
    }
}
