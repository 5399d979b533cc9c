//! Events emitted by the simulation for host audio and effect feedback.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Per-frame game events, delivered inside each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new mine appeared at the edge of the play area.
    MineSpawned { position: Position },
    /// The oldest mine was evicted at the population cap and replaced
    /// by an explosion at its last position.
    MineDetonated { position: Position },
    /// An explosion finished growing and was removed.
    ExplosionFaded,
}
