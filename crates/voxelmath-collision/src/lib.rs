//! AABB collision and voxel ray tracing.
//!
//! The queries movement, physics and interaction systems ask of a block
//! world: how far a moving box can travel before touching another
//! ([`Aabb`]), which face of a box a sight line strikes
//! ([`RayTraceResult`]), and which grid cells a ray passes through
//! ([`VoxelRaycast`]).

pub mod aabb;
pub mod ray;
pub mod raycast;

pub use aabb::Aabb;
pub use ray::RayTraceResult;
pub use raycast::VoxelRaycast;
