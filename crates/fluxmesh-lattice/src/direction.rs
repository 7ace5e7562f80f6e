//! The six lattice directions.
//!
//! Ordinals follow the host world's 3D data order (down, up, north, south,
//! west, east). The port bitmask and the tick-rotated port scan both address
//! directions by this ordinal, so the order is part of the wire format and
//! must never change.

use thiserror::Error;

/// A face direction on the cubic lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    Down = 0,
    Up = 1,
    North = 2,
    South = 3,
    West = 4,
    East = 5,
}

/// Error for out-of-range direction ordinals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid direction ordinal {0}")]
pub struct InvalidDirection(pub u8);

impl Direction {
    /// All six directions in ordinal order.
    pub const ALL: [Self; 6] = [
        Self::Down,
        Self::Up,
        Self::North,
        Self::South,
        Self::West,
        Self::East,
    ];

    /// The ordinal of this direction (0..6).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction for an arbitrary index, taken modulo 6.
    ///
    /// Total on purpose: the distribution pass computes `(i + tick) % 6`
    /// and must never fail on a large tick count.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 6]
    }

    /// The opposing face.
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

    /// Unit offset (x, y, z) of one step in this direction.
    ///
    /// North is -z, south is +z, west is -x, east is +x.
    pub const fn unit(self) -> (i32, i32, i32) {
        match self {
            Self::Down => (0, -1, 0),
            Self::Up => (0, 1, 0),
            Self::North => (0, 0, -1),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::East => (1, 0, 0),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(ordinal: u8) -> Result<Self, InvalidDirection> {
        match ordinal {
            0..=5 => Ok(Self::ALL[ordinal as usize]),
            _ => Err(InvalidDirection(ordinal)),
        }
    }
}
