//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Marks the single player-controlled ship entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship;

/// Ship steering state.
///
/// `target` is `None` until the first pointer press; before that the ship
/// holds position and only turns to face the pointer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Helm {
    /// Last commanded destination, set by a pointer press.
    pub target: Option<Position>,
}

/// A live mine homing on the ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mine {
    /// Creation order, allocated by the engine. The mine with the lowest
    /// seq is the oldest and is the one evicted at the population cap.
    pub seq: u64,
}

/// An explosion left behind by an evicted mine. Grows until it fades.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion;

/// A static background star.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star;

// Position, Rotation, and Scale (types.rs) are used as components too.
