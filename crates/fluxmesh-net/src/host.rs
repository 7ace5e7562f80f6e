//! Host world collaborators.
//!
//! The mesh never talks to the world directly. Everything the distribution
//! pass needs from the host - tick counter, region liveness, gating checks,
//! extract rates, and the sinks that actually absorb energy - comes through
//! these traits, so the core stays unit-testable with in-memory fakes.

use fluxmesh_lattice::{Direction, Pos};

/// An external energy receiver adjacent to a cable port.
///
/// Amounts cross this boundary as bounded `u32` quantities; the core's wider
/// internal amounts are saturating-cast before the call.
pub trait EnergySink {
    /// Offer `amount` units to the sink. Returns the amount accepted,
    /// which must not exceed the offer. With `simulate` set the sink
    /// computes its answer without committing any state change.
    fn receive(&self, amount: u32, simulate: bool) -> u32;
}

/// The injected world the mesh lives in.
pub trait Host {
    /// Whether this is the authoritative side of the world.
    ///
    /// Covers both "world unavailable" and "non-authoritative replica":
    /// distribution short-circuits to zero when this is false.
    fn is_authoritative(&self) -> bool;

    /// The host's current tick counter. Drives the per-node port rotation.
    fn current_tick(&self) -> u64;

    /// Whether the region containing `pos` is currently being simulated.
    fn is_active(&self, pos: Pos) -> bool;

    /// Redstone-style gating: whether the node at `pos` is enabled at all.
    fn redstone_enabled(&self, pos: Pos) -> bool;

    /// Whether the node at `pos` may accept energy through `side`.
    fn can_receive(&self, pos: Pos, side: Direction) -> bool;

    /// Whether the node at `pos` may emit energy through `side`.
    fn can_extract(&self, pos: Pos, side: Direction) -> bool;

    /// Per-push extract rate of the storage wrapped by the node at `pos`.
    fn max_extract(&self, pos: Pos) -> u64;

    /// Look up an energy receiver at `pos`, addressed through `face`.
    /// Absence means "no acceptance", never an error.
    fn sink_at(&self, pos: Pos, face: Direction) -> Option<&dyn EnergySink>;
}
