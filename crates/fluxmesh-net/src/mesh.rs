//! The cable mesh arena and lazy network resolution.
//!
//! Nodes are stored in an arena keyed by position. A network is the maximal
//! connected set of adjacent nodes; it owns nothing, just a shared list of
//! member positions. Each node carries a plain network id as a weak
//! back-reference, and the two stay consistent at all times:
//!
//! `pos` is in `networks[id]` iff the node at `pos` points back at `id`.
//!
//! A cleared back-reference therefore means no live network contains the
//! node, and no node ever belongs to two networks at once.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use fluxmesh_lattice::{PortMask, Pos};
use tracing::debug;

use crate::error::{Error, Result};
use crate::node::{CableNode, NodeSync};

/// Opaque identifier of a resolved network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkId(u64);

/// Arena of cable nodes with cached network membership.
#[derive(Debug, Default)]
pub struct Mesh {
    nodes: HashMap<Pos, CableNode>,
    networks: RefCell<HashMap<NetworkId, Rc<[Pos]>>>,
    next_network: Cell<u64>,
}

impl Mesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a cable. Positions are unique; placing onto an occupied
    /// position is refused.
    ///
    /// Nothing is invalidated preemptively: neighbors keep their cached
    /// membership until the next resolve that floods through the new node
    /// reassigns them.
    pub fn insert(&mut self, pos: Pos, ports: PortMask) -> Result<()> {
        if self.nodes.contains_key(&pos) {
            return Err(Error::Occupied(pos));
        }
        self.nodes.insert(pos, CableNode::new(pos, ports));
        Ok(())
    }

    /// Remove a cable, returning its exposed ports.
    ///
    /// Retires the node's network, clearing the back-reference of every
    /// former member so each recomputes independently on next access.
    pub fn remove(&mut self, pos: Pos) -> Result<PortMask> {
        let node = self.nodes.remove(&pos).ok_or(Error::Unknown(pos))?;
        if let Some(id) = node.network() {
            self.retire(id);
        }
        Ok(node.ports())
    }

    /// Whether a cable exists at `pos`.
    pub fn contains(&self, pos: Pos) -> bool {
        self.nodes.contains_key(&pos)
    }

    /// Number of cables in the arena (across all networks).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no cables.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The cable node at `pos`, if any.
    pub fn node(&self, pos: Pos) -> Option<&CableNode> {
        self.nodes.get(&pos)
    }

    /// Exposed ports of the cable at `pos`.
    pub fn ports(&self, pos: Pos) -> Result<PortMask> {
        Ok(self.node_at(pos)?.ports())
    }

    /// Reconfigure the exposed ports of the cable at `pos`.
    ///
    /// Ports mark faces toward external machines; cable-to-cable
    /// connectivity is arena presence alone, so no network is invalidated.
    pub fn set_ports(&self, pos: Pos, ports: PortMask) -> Result<()> {
        self.node_at(pos)?.set_ports(ports);
        Ok(())
    }

    /// Rotation cursor of the cable at `pos`.
    pub fn rotation(&self, pos: Pos) -> Result<u64> {
        Ok(self.node_at(pos)?.rotation())
    }

    /// Cached network id of the cable at `pos`, if resolved.
    pub fn network_of(&self, pos: Pos) -> Result<Option<NetworkId>> {
        Ok(self.node_at(pos)?.network())
    }

    /// Capture the sync payload of the cable at `pos`.
    pub fn write_sync(&self, pos: Pos) -> Result<NodeSync> {
        Ok(NodeSync::from_ports(self.node_at(pos)?.ports()))
    }

    /// Apply a received sync payload to the cable at `pos`.
    pub fn apply_sync(&self, pos: Pos, sync: NodeSync) -> Result<()> {
        self.node_at(pos)?.set_ports(sync.ports());
        Ok(())
    }

    /// Resolve the network membership of the cable at `pos`.
    ///
    /// Cached membership is returned directly. Otherwise a breadth-first
    /// flood fill over lattice adjacency discovers every reachable cable,
    /// in discovery order with the starting node first, and the resulting
    /// list is cached on every discovered node. A cable with no neighbors
    /// resolves to a singleton network, so the list is never empty.
    pub fn resolve(&self, pos: Pos) -> Result<Rc<[Pos]>> {
        let node = self.node_at(pos)?;
        if let Some(id) = node.network() {
            if let Some(members) = self.networks.borrow().get(&id) {
                return Ok(Rc::clone(members));
            }
        }

        let mut members = Vec::new();
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(pos);
        queue.push_back(pos);
        while let Some(current) = queue.pop_front() {
            members.push(current);
            for neighbor in current.neighbors() {
                if self.nodes.contains_key(&neighbor) && seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        // Any previously resolved network touching these members is stale
        // now; retire them before the reassignment so no node ends up
        // claimed by two networks.
        let stale: HashSet<NetworkId> = members
            .iter()
            .filter_map(|p| self.nodes[p].network())
            .collect();
        for id in stale {
            self.retire(id);
        }

        let id = NetworkId(self.next_network.get());
        self.next_network.set(id.0 + 1);
        let members: Rc<[Pos]> = members.into();
        for p in members.iter() {
            self.nodes[p].set_network(Some(id));
        }
        self.networks.borrow_mut().insert(id, Rc::clone(&members));
        debug!(network = id.0, size = members.len(), "recomputed cable network");
        Ok(members)
    }

    fn retire(&self, id: NetworkId) {
        if let Some(members) = self.networks.borrow_mut().remove(&id) {
            for p in members.iter() {
                if let Some(node) = self.nodes.get(p) {
                    if node.network() == Some(id) {
                        node.set_network(None);
                    }
                }
            }
        }
    }

    pub(crate) fn node_at(&self, pos: Pos) -> Result<&CableNode> {
        self.nodes.get(&pos).ok_or(Error::Unknown(pos))
    }
}
