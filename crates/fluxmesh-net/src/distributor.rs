//! Round-robin energy distribution across a resolved network.
//!
//! A receive on any member is serviced by pushing energy out through every
//! member's exposed ports. Fairness comes from two independent rotations:
//! the receiving node's cursor decides which member is tried first (advanced
//! once per real pass), and the host tick decides which port of a member is
//! tried first (`(i + tick) % 6`, pure function of the counter).

use std::cell::Cell;

use fluxmesh_lattice::{Direction, Pos};
use tracing::trace;

use crate::host::Host;
use crate::mesh::Mesh;

/// Scoped hold of a node's reentrancy flag.
///
/// Dropping releases the flag, so every exit path - including a panicking
/// collaborator - leaves the node re-usable.
struct InsertionGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> InsertionGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.get() {
            return None;
        }
        flag.set(true);
        Some(Self { flag })
    }
}

impl Drop for InsertionGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Saturating cast to the bounded amount type sinks speak.
fn clamp_u32(amount: u64) -> u32 {
    amount.min(u64::from(u32::MAX)) as u32
}

impl Mesh {
    /// Service an energy insertion at the cable at `pos`.
    ///
    /// `direction` is the face the energy arrived through. Returns the
    /// amount the network absorbed, never more than `amount`. Returns zero
    /// without side effects when any precondition fails: unknown position,
    /// non-authoritative host, missing direction, gating, or a distribution
    /// pass already running on this node (a push into a neighbor that pulls
    /// back into the network within the same call stack).
    ///
    /// A simulated call never advances the rotation cursor and commits
    /// nothing in the collaborators beyond their own simulate contract.
    pub fn receive_energy(
        &self,
        host: &impl Host,
        pos: Pos,
        amount: u64,
        simulate: bool,
        direction: Option<Direction>,
    ) -> u64 {
        let node = match self.node_at(pos) {
            Ok(node) => node,
            Err(_) => return 0,
        };
        if !host.is_authoritative() {
            return 0;
        }
        let direction = match direction {
            Some(direction) => direction,
            None => return 0,
        };
        if !host.redstone_enabled(pos) || !host.can_receive(pos, direction) {
            return 0;
        }

        let members = match self.resolve(pos) {
            Ok(members) => members,
            Err(_) => return 0,
        };
        let start = (node.rotation() % members.len() as u64) as usize;

        let _guard = match InsertionGuard::acquire(node.insertion_flag()) {
            Some(guard) => guard,
            None => return 0,
        };

        if !simulate {
            // Advance before traversal so the next real pass starts at a
            // different member regardless of this call's outcome.
            node.advance_rotation();
        }

        let mut received = 0u64;
        for member in members[start..].iter().chain(members[..start].iter()) {
            let remaining = amount.saturating_sub(received);
            if remaining == 0 {
                break;
            }
            let cable = match self.node_at(*member) {
                Ok(cable) => cable,
                Err(_) => continue,
            };
            if cable.ports().is_empty() || !host.is_active(*member) {
                continue;
            }
            received += self.push_energy(host, *member, remaining, simulate, direction, pos);
        }

        trace!(?pos, amount, received, simulate, "energy distribution pass");
        received
    }

    /// Push up to `max_amount` out of `member`'s exposed ports into
    /// adjacent sinks.
    ///
    /// `origin` is the node the call entered through and `direction` the
    /// face it entered by; both feed the back-flow guards. The port scan
    /// starts at an offset derived from the host tick so the first port
    /// tried drifts over time.
    fn push_energy(
        &self,
        host: &impl Host,
        member: Pos,
        max_amount: u64,
        simulate: bool,
        direction: Direction,
        origin: Pos,
    ) -> u64 {
        // Reaching this point without an authoritative host is a breached
        // collaborator contract, not a servable request.
        assert!(
            host.is_authoritative(),
            "energy push outside an authoritative host context"
        );
        let cable = match self.node_at(member) {
            Ok(cable) => cable,
            Err(_) => return 0,
        };
        let tick = (host.current_tick() % 6) as usize;
        let entry_target = origin.offset(direction);

        let mut received = 0u64;
        for i in 0..6 {
            let side = Direction::from_index(i + tick);
            if !cable.ports().contains(side) {
                continue;
            }
            let offer = max_amount.saturating_sub(received).min(host.max_extract(member));
            if offer == 0 {
                break;
            }
            // Never push straight back out of the entry port, and honor the
            // per-port extraction gate.
            if (member == origin && side == direction) || !host.can_extract(member, side) {
                continue;
            }
            let target = member.offset(side);
            // Two-hop bounce: the neighbor sitting on the call's source.
            if target == entry_target {
                continue;
            }
            if let Some(sink) = host.sink_at(target, side.opposite()) {
                received += u64::from(sink.receive(clamp_u32(offer), simulate));
            }
        }
        received
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_saturates() {
        assert_eq!(clamp_u32(0), 0);
        assert_eq!(clamp_u32(1234), 1234);
        assert_eq!(clamp_u32(u64::from(u32::MAX)), u32::MAX);
        assert_eq!(clamp_u32(u64::MAX), u32::MAX);
    }

    #[test]
    fn guard_is_exclusive_and_releases_on_drop() {
        let flag = Cell::new(false);
        let guard = InsertionGuard::acquire(&flag).unwrap();
        assert!(flag.get());
        assert!(InsertionGuard::acquire(&flag).is_none());
        drop(guard);
        assert!(!flag.get());
        assert!(InsertionGuard::acquire(&flag).is_some());
    }

    #[test]
    fn guard_releases_on_panic() {
        let flag = Cell::new(false);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = InsertionGuard::acquire(&flag).unwrap();
            panic!("collaborator blew up");
        }));
        assert!(result.is_err());
        assert!(!flag.get());
    }
}
