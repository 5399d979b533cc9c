//! Game state snapshot — the complete visible state handed to the host
//! after each update, ready for a renderer to draw.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state produced by each engine update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub ship: ShipView,
    /// Live mines, oldest first.
    pub mines: Vec<MineView>,
    pub explosions: Vec<ExplosionView>,
    /// Background star field, fixed for the session.
    pub stars: Vec<StarView>,
    /// Events raised during this update.
    pub events: Vec<GameEvent>,
}

/// The player's ship.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Position,
    /// Facing in radians (0 = +y, clockwise toward +x).
    pub rotation: f32,
    pub scale: glam::Vec2,
    /// Current travel target, if one has been set.
    pub target: Option<Position>,
}

/// A live mine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MineView {
    pub position: Position,
    pub scale: glam::Vec2,
    /// Creation order; snapshots are sorted ascending on this.
    pub seq: u64,
}

/// A growing explosion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: Position,
    /// Per-axis scale. Both axes grow at the same rate.
    pub scale: glam::Vec2,
}

/// A background star.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StarView {
    pub position: Position,
    pub scale: glam::Vec2,
}
