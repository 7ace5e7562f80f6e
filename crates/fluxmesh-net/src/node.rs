//! Per-node cable state.

use std::cell::Cell;

use fluxmesh_lattice::{PortMask, Pos};
use serde::{Deserialize, Serialize};

use crate::mesh::NetworkId;

/// A mesh participant stored in the [`Mesh`](crate::Mesh) arena.
///
/// The mutable fields live in `Cell`s: distribution runs against a shared
/// mesh reference so that a collaborator callback may synchronously re-enter
/// `receive_energy`, and it is the insertion guard - not the borrow checker -
/// that rejects the recursion.
#[derive(Debug)]
pub struct CableNode {
    pos: Pos,
    ports: Cell<PortMask>,
    network: Cell<Option<NetworkId>>,
    rotation: Cell<u64>,
    inserting: Cell<bool>,
}

impl CableNode {
    pub(crate) fn new(pos: Pos, ports: PortMask) -> Self {
        Self {
            pos,
            ports: Cell::new(ports),
            network: Cell::new(None),
            rotation: Cell::new(0),
            inserting: Cell::new(false),
        }
    }

    /// Position of this node, immutable for its lifetime.
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Currently exposed ports.
    pub fn ports(&self) -> PortMask {
        self.ports.get()
    }

    pub(crate) fn set_ports(&self, ports: PortMask) {
        self.ports.set(ports);
    }

    /// Cached network membership, if resolved.
    pub fn network(&self) -> Option<NetworkId> {
        self.network.get()
    }

    pub(crate) fn set_network(&self, id: Option<NetworkId>) {
        self.network.set(id);
    }

    /// The rotation cursor deciding which member is tried first on the
    /// next real distribution pass.
    pub fn rotation(&self) -> u64 {
        self.rotation.get()
    }

    pub(crate) fn advance_rotation(&self) {
        self.rotation.set(self.rotation.get().wrapping_add(1));
    }

    pub(crate) fn insertion_flag(&self) -> &Cell<bool> {
        &self.inserting
    }
}

/// Synchronized payload of a single node: the port byte of
/// [`PortMask::encode`], persisted alongside whatever the wrapped storage
/// saves on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSync {
    /// Encoded exposed-port set.
    pub ports: u8,
}

impl NodeSync {
    /// Capture a port set for synchronization.
    pub fn from_ports(ports: PortMask) -> Self {
        Self {
            ports: ports.encode(),
        }
    }

    /// Decode the carried port set. Undefined high bits are ignored.
    pub fn ports(&self) -> PortMask {
        PortMask::decode(self.ports)
    }
}
