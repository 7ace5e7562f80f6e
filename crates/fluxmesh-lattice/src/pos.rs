//! Cubic lattice coordinates.
//!
//! A `Pos` is the unique key of a cable node for its whole lifetime. Two
//! nodes are adjacent when their positions differ by exactly one unit step
//! along one axis, so every position has six potential neighbors.

use std::ops::{Add, Sub};

use crate::Direction;

/// A position on the cubic lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Pos {
    /// Origin of the coordinate system.
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a new position.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The position one step in the given direction.
    pub const fn offset(self, dir: Direction) -> Self {
        let (dx, dy, dz) = dir.unit();
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// All six neighboring positions, in direction ordinal order.
    pub fn neighbors(self) -> [Self; 6] {
        Direction::ALL.map(|dir| self.offset(dir))
    }

    /// Manhattan distance to another position.
    pub fn distance(&self, other: &Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }

    /// Whether another position is exactly one lattice step away.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.distance(other) == 1
    }
}

impl Add for Pos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Pos {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
