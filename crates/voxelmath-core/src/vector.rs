//! Segment queries layered over the plain [`glam`] vector types.
//!
//! Arithmetic (add, scale, normalize, dot, cross, floor) comes straight from
//! `glam`; this module only adds the pieces a block world needs on top:
//! plane-crossing queries on segments and neighbour stepping on grid cells.

use crate::facing::{Axis, Facing};
use glam::{DVec3, IVec3};

/// Squared axis extent below which a segment is treated as parallel to the
/// plane being crossed.
pub const AXIS_DEGENERACY_SQ: f64 = 1.0e-7;

/// Linear-parameter queries on double-precision points.
pub trait Vector3Ext: Sized {
    /// The point on the segment toward `other` where the x coordinate equals
    /// `x`. `None` when the segment is near-parallel to the YZ plane or the
    /// crossing lies outside the segment.
    fn intermediate_with_x(self, other: Self, x: f64) -> Option<Self>;

    /// The point on the segment toward `other` where the y coordinate equals
    /// `y`.
    fn intermediate_with_y(self, other: Self, y: f64) -> Option<Self>;

    /// The point on the segment toward `other` where the z coordinate equals
    /// `z`.
    fn intermediate_with_z(self, other: Self, z: f64) -> Option<Self>;

    /// Per-component floor, as integer cell coordinates.
    fn floored(self) -> IVec3;

    /// The coordinate on the given axis.
    fn component(self, axis: Axis) -> f64;
}

impl Vector3Ext for DVec3 {
    fn intermediate_with_x(self, other: Self, x: f64) -> Option<Self> {
        let dx = other.x - self.x;
        if dx * dx < AXIS_DEGENERACY_SQ {
            return None;
        }
        let f = (x - self.x) / dx;
        (0.0..=1.0).contains(&f).then(|| {
            Self::new(
                x,
                self.y + (other.y - self.y) * f,
                self.z + (other.z - self.z) * f,
            )
        })
    }

    fn intermediate_with_y(self, other: Self, y: f64) -> Option<Self> {
        let dy = other.y - self.y;
        if dy * dy < AXIS_DEGENERACY_SQ {
            return None;
        }
        let f = (y - self.y) / dy;
        (0.0..=1.0).contains(&f).then(|| {
            Self::new(
                self.x + (other.x - self.x) * f,
                y,
                self.z + (other.z - self.z) * f,
            )
        })
    }

    fn intermediate_with_z(self, other: Self, z: f64) -> Option<Self> {
        let dz = other.z - self.z;
        if dz * dz < AXIS_DEGENERACY_SQ {
            return None;
        }
        let f = (z - self.z) / dz;
        (0.0..=1.0).contains(&f).then(|| {
            Self::new(
                self.x + (other.x - self.x) * f,
                self.y + (other.y - self.y) * f,
                z,
            )
        })
    }

    #[inline]
    fn floored(self) -> IVec3 {
        self.floor().as_ivec3()
    }

    #[inline]
    fn component(self, axis: Axis) -> f64 {
        match axis {
            Axis::Y => self.y,
            Axis::Z => self.z,
            Axis::X => self.x,
        }
    }
}

/// Neighbour queries on integer cell coordinates.
pub trait GridVec3Ext: Sized {
    /// The cell `n` steps toward the given facing.
    fn stepped(self, facing: Facing, n: i32) -> Self;

    /// The six adjacent cells, in facing order.
    fn neighbors(self) -> [Self; 6];
}

impl GridVec3Ext for IVec3 {
    #[inline]
    fn stepped(self, facing: Facing, n: i32) -> Self {
        self + facing.step() * n
    }

    fn neighbors(self) -> [Self; 6] {
        Facing::ALL.map(|facing| self.stepped(facing, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intermediate_with_x_interpolates() {
        let a = DVec3::ZERO;
        let b = DVec3::new(2.0, 4.0, 6.0);
        assert_eq!(
            a.intermediate_with_x(b, 1.0),
            Some(DVec3::new(1.0, 2.0, 3.0))
        );
        assert_eq!(a.intermediate_with_x(b, 0.0), Some(DVec3::ZERO));
        assert_eq!(a.intermediate_with_x(b, 2.0), Some(b));
    }

    #[test]
    fn intermediate_with_y_interpolates() {
        let a = DVec3::new(1.0, 0.0, 1.0);
        let b = DVec3::new(3.0, 2.0, 5.0);
        assert_eq!(
            a.intermediate_with_y(b, 1.0),
            Some(DVec3::new(2.0, 1.0, 3.0))
        );
    }

    #[test]
    fn intermediate_with_z_interpolates() {
        let a = DVec3::new(0.0, 0.0, 2.0);
        let b = DVec3::new(1.0, 1.0, 0.0);
        assert_eq!(
            a.intermediate_with_z(b, 1.0),
            Some(DVec3::new(0.5, 0.5, 1.0))
        );
    }

    #[test]
    fn intermediate_outside_segment_is_none() {
        let a = DVec3::ZERO;
        let b = DVec3::new(2.0, 4.0, 6.0);
        assert_eq!(a.intermediate_with_x(b, 3.0), None);
        assert_eq!(a.intermediate_with_x(b, -1.0), None);
        assert_eq!(a.intermediate_with_y(b, 5.0), None);
        assert_eq!(a.intermediate_with_z(b, -0.5), None);
    }

    #[test]
    fn intermediate_near_parallel_is_none() {
        let a = DVec3::ZERO;
        // 1e-4 squared is below the degeneracy threshold.
        let b = DVec3::new(1.0e-4, 1.0, 1.0);
        assert_eq!(a.intermediate_with_x(b, 0.0), None);
        let c = DVec3::new(1.0, 0.0, 1.0);
        assert_eq!(a.intermediate_with_y(c, 0.0), None);
    }

    #[test]
    fn floored_rounds_toward_negative_infinity() {
        assert_eq!(
            DVec3::new(-0.5, 1.5, -2.0).floored(),
            IVec3::new(-1, 1, -2)
        );
        assert_eq!(DVec3::new(0.9, 0.0, -0.1).floored(), IVec3::new(0, 0, -1));
    }

    #[test]
    fn component_by_axis() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.component(Axis::X), 1.0);
        assert_eq!(v.component(Axis::Y), 2.0);
        assert_eq!(v.component(Axis::Z), 3.0);
    }

    #[test]
    fn stepped_walks_along_facings() {
        assert_eq!(
            IVec3::ZERO.stepped(Facing::East, 3),
            IVec3::new(3, 0, 0)
        );
        assert_eq!(
            IVec3::new(1, 1, 1).stepped(Facing::Down, 2),
            IVec3::new(1, -1, 1)
        );
    }

    #[test]
    fn neighbors_are_adjacent() {
        let cell = IVec3::new(4, -2, 7);
        for neighbor in cell.neighbors() {
            let d = (neighbor - cell).abs();
            assert_eq!(d.x + d.y + d.z, 1);
        }
    }
}
