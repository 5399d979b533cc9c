//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Overall game lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start a session.
    #[default]
    MainMenu,
    /// Session running; systems advance every frame.
    Active,
    /// Session paused; time does not advance.
    Paused,
}
