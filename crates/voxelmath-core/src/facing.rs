//! Axis-aligned directions and the lookup tables over them.

use crate::error::{Error, Result};
use glam::IVec3;
use std::fmt;

/// One of the three coordinate axes.
///
/// The discriminants match the upper bits of the [`Facing`] encoding, so a
/// facing's axis is its discriminant shifted right by one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Axis {
    Y = 0,
    Z = 1,
    X = 2,
}

impl Axis {
    /// All three axes, in discriminant order.
    pub const ALL: [Self; 3] = [Self::Y, Self::Z, Self::X];
}

impl TryFrom<u8> for Axis {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Y),
            1 => Ok(Self::Z),
            2 => Ok(Self::X),
            _ => Err(Error::InvalidEnumValue { kind: "axis", value }),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Y => "y",
            Self::Z => "z",
            Self::X => "x",
        })
    }
}

/// One of the six axis-aligned unit directions.
///
/// Encoded as `axis << 1 | positive`: the least significant bit is set for
/// the positive direction of the axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Facing {
    Down = 0,
    Up = 1,
    North = 2,
    South = 3,
    West = 4,
    East = 5,
}

impl Facing {
    /// All six facings, in encoding order.
    pub const ALL: [Self; 6] = [
        Self::Down,
        Self::Up,
        Self::North,
        Self::South,
        Self::West,
        Self::East,
    ];

    /// The four facings perpendicular to the Y axis.
    pub const HORIZONTAL: [Self; 4] = [Self::North, Self::South, Self::West, Self::East];

    /// The axis this facing lies on.
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Down | Self::Up => Axis::Y,
            Self::North | Self::South => Axis::Z,
            Self::West | Self::East => Axis::X,
        }
    }

    /// Whether this facing points toward the positive end of its axis.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self as u8 & 1 == 1
    }

    /// The facing pointing the other way on the same axis.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// The unit grid offset of this facing.
    #[inline]
    pub const fn step(self) -> IVec3 {
        match self {
            Self::Down => IVec3::NEG_Y,
            Self::Up => IVec3::Y,
            Self::North => IVec3::NEG_Z,
            Self::South => IVec3::Z,
            Self::West => IVec3::NEG_X,
            Self::East => IVec3::X,
        }
    }

    /// Quarter-turn about the given axis, clockwise when looking from the
    /// positive end of the axis toward the origin.
    ///
    /// Fails with [`Error::InvalidEnumValue`] when the facing lies on the
    /// rotation axis.
    pub fn rotated(self, axis: Axis, clockwise: bool) -> Result<Self> {
        let rotated = match (axis, self) {
            (Axis::Y, Self::North) => Self::East,
            (Axis::Y, Self::East) => Self::South,
            (Axis::Y, Self::South) => Self::West,
            (Axis::Y, Self::West) => Self::North,
            (Axis::Z, Self::Up) => Self::East,
            (Axis::Z, Self::East) => Self::Down,
            (Axis::Z, Self::Down) => Self::West,
            (Axis::Z, Self::West) => Self::Up,
            (Axis::X, Self::Up) => Self::North,
            (Axis::X, Self::North) => Self::Down,
            (Axis::X, Self::Down) => Self::South,
            (Axis::X, Self::South) => Self::Up,
            _ => {
                return Err(Error::InvalidEnumValue {
                    kind: "rotation",
                    value: self as u8,
                })
            }
        };
        Ok(if clockwise { rotated } else { rotated.opposite() })
    }

    /// The horizontal facing for a yaw angle in degrees.
    ///
    /// Quadrant boundaries sit at 45, 135, 225 and 315 degrees; angles
    /// outside `[0, 360)` are wrapped.
    pub fn from_horizontal_angle(degrees: f64) -> Self {
        let angle = degrees.rem_euclid(360.0);
        if (45.0..135.0).contains(&angle) {
            Self::West
        } else if (135.0..225.0).contains(&angle) {
            Self::North
        } else if (225.0..315.0).contains(&angle) {
            Self::East
        } else {
            Self::South
        }
    }
}

impl TryFrom<u8> for Facing {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Down),
            1 => Ok(Self::Up),
            2 => Ok(Self::North),
            3 => Ok(Self::South),
            4 => Ok(Self::West),
            5 => Ok(Self::East),
            _ => Err(Error::InvalidEnumValue {
                kind: "facing",
                value,
            }),
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::North => "north",
            Self::South => "south",
            Self::West => "west",
            Self::East => "east",
        })
    }
}
