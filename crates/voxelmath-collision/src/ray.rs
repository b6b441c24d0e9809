//! Ray hit results.

use crate::aabb::Aabb;
use glam::DVec3;
use voxelmath_core::facing::Facing;

/// Where a ray struck a box: the box itself, the face crossed, and the point
/// of contact on that face.
///
/// Constructed by the intersection queries; the hit point always lies on the
/// plane of the named face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayTraceResult {
    pub bounding_box: Aabb,
    pub hit_face: Facing,
    pub hit_vector: DVec3,
}

impl RayTraceResult {
    /// Bundle a hit.
    #[inline]
    pub const fn new(bounding_box: Aabb, hit_face: Facing, hit_vector: DVec3) -> Self {
        Self {
            bounding_box,
            hit_face,
            hit_vector,
        }
    }
}
