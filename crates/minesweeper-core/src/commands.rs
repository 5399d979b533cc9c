//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next update boundary.
//! Pointer positions arrive already converted to normalized device
//! coordinates by the host's input mapper.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// The pointer moved. Updates the aim reference only; the ship does
    /// not change course.
    PointerMoved { position: Position },
    /// The pointer was pressed. Sets the ship's travel target and turns
    /// the ship to face the previously stored pointer position.
    PointerPressed { position: Position },
    /// Start a new session from the main menu.
    StartGame,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
