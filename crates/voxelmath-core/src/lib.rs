//! Foundation types for voxel-world geometry.
//!
//! This crate provides the building blocks shared by the collision and
//! ray-tracing code:
//! - Axis and facing enumerations with rotation tables
//! - Segment/plane crossing queries layered over [`glam`] vectors
//! - Scalar math helpers
//! - Common error types

pub mod error;
pub mod facing;
pub mod math;
pub mod vector;

pub use error::{Error, Result};
pub use facing::{Axis, Facing};
pub use vector::{GridVec3Ext, Vector3Ext};
