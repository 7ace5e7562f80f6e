//! Fluxmesh Lattice Geometry
//!
//! Cubic lattice primitives shared by the cable network: face directions,
//! node positions, and the one-byte port bitmask used for persistence and
//! synchronization.
//!
//! Direction ordinals are fixed by the host world's 3D data order and are
//! load-bearing: the port mask packs one bit per ordinal, and the
//! distribution pass rotates its port scan by `(i + tick) % 6` over them.

mod direction;
mod portmask;
mod pos;

pub use direction::{Direction, InvalidDirection};
pub use portmask::PortMask;
pub use pos::Pos;

/// Number of ports a node can expose (one per lattice face).
pub const PORTS_PER_NODE: usize = 6;

// The direction table, the port byte, and the rotation modulus must agree.
const _: () = assert!(Direction::ALL.len() == PORTS_PER_NODE);
const _: () = assert!(PortMask::ALL.encode() == (1u8 << PORTS_PER_NODE) - 1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_count_invariant() {
        assert_eq!(Direction::ALL.len(), PORTS_PER_NODE);
        assert_eq!(PortMask::ALL.len(), PORTS_PER_NODE);
    }
}
