//! Fluxmesh Cable Networks
//!
//! Membership tracking and energy distribution for a mesh of transmission
//! cables on the cubic lattice. Adjacent cables merge into one logical
//! network, computed lazily by flood fill and cached until a lifecycle
//! event invalidates it. An energy insertion anywhere on the network is
//! serviced by pushing outward through every member's exposed ports, with
//! round-robin rotation over members and ports, guarded against recursive
//! re-entry and back-flow through the entry port.
//!
//! The host world is injected through the [`Host`] trait: tick counter,
//! liveness, gating, extract rates, and sink lookup all stay external, so
//! the whole core runs against in-memory fakes in tests.
//!
//! # Concurrency
//!
//! One logical tick context at a time. `Mesh` performs no internal
//! parallelism and is not meant to be shared across threads; the insertion
//! guard defends against recursive re-entry within one call stack, not
//! concurrent callers.

mod distributor;
mod error;
mod host;
mod mesh;
mod node;

pub use error::{Error, Result};
pub use host::{EnergySink, Host};
pub use mesh::{Mesh, NetworkId};
pub use node::{CableNode, NodeSync};
