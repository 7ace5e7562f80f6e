//! Compact bitmask of exposed ports.
//!
//! A node exposes up to six faces as energy ports. The set is persisted and
//! synchronized as a single byte: bit `i` is set iff the direction with
//! ordinal `i` is exposed. The two high bits are always zero on encode and
//! ignored on decode.

use crate::Direction;

/// Set of exposed port directions, packed into one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortMask(u8);

/// Bits that correspond to defined directions.
const PORT_BITS: u8 = 0b0011_1111;

impl PortMask {
    /// No ports exposed.
    pub const EMPTY: Self = Self(0);

    /// All six ports exposed.
    pub const ALL: Self = Self(PORT_BITS);

    /// The wire byte for this set. High bits are always zero.
    #[inline]
    pub const fn encode(self) -> u8 {
        self.0
    }

    /// Decode a wire byte, ignoring the undefined high bits.
    #[inline]
    pub const fn decode(byte: u8) -> Self {
        Self(byte & PORT_BITS)
    }

    const fn bit(dir: Direction) -> u8 {
        1 << dir.index()
    }

    /// Whether the given direction is exposed.
    #[inline]
    pub const fn contains(self, dir: Direction) -> bool {
        self.0 & Self::bit(dir) != 0
    }

    /// Expose a port.
    #[must_use]
    pub const fn insert(self, dir: Direction) -> Self {
        Self(self.0 | Self::bit(dir))
    }

    /// Retract a port.
    #[must_use]
    pub const fn remove(self, dir: Direction) -> Self {
        Self(self.0 & !Self::bit(dir))
    }

    /// Whether no port is exposed.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of exposed ports.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate exposed directions in ordinal order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |dir| self.contains(*dir))
    }
}

impl FromIterator<Direction> for PortMask {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::insert)
    }
}
