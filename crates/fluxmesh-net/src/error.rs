//! Error types for fluxmesh-net.

use fluxmesh_lattice::Pos;
use thiserror::Error;

/// Result type for fluxmesh-net operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during mesh lifecycle operations.
///
/// Distribution itself never returns errors: failed preconditions and
/// absent collaborators yield an accepted amount of zero, and a breached
/// host contract fails fast instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A cable already occupies the position.
    #[error("position {0:?} is already occupied by a cable")]
    Occupied(Pos),

    /// No cable exists at the position.
    #[error("no cable at position {0:?}")]
    Unknown(Pos),
}
