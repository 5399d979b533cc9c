//! Simulation constants and tuning parameters.
//!
//! All speeds are in normalized-device-coordinate units per second and
//! are scaled by the frame delta, so the game plays the same at any
//! framerate.

// --- Mine spawning ---

/// Seconds between mine spawns.
pub const MINE_SPAWN_INTERVAL_SECS: f32 = 0.5;

/// Distance from the origin at which new mines appear (outside the
/// visible [-1, 1] area).
pub const MINE_SPAWN_DISTANCE: f32 = 1.25;

/// Maximum live mine population. Exceeding it evicts the oldest mine.
pub const MINE_LIMIT: usize = 10;

// --- Motion ---

/// Mine homing speed (units/sec).
pub const MINE_SPEED: f32 = 0.1;

/// Ship travel speed toward its target (units/sec).
pub const SHIP_SPEED: f32 = 0.75;

/// Distance below which the ship counts as arrived at its target.
pub const ARRIVAL_EPSILON: f32 = 0.01;

// --- Explosions ---

/// Per-axis scale growth rate (units/sec).
pub const EXPLOSION_GROWTH_RATE: f32 = 2.0;

/// Scale at which an explosion starts.
pub const EXPLOSION_INITIAL_SCALE: f32 = 0.25;

/// An explosion is removed once its x scale exceeds this.
pub const EXPLOSION_MAX_SCALE: f32 = 1.0;

// --- Sprites ---

/// Base sprite scale of the ship.
pub const SHIP_SCALE: f32 = 0.08;

/// Base sprite scale of a mine.
pub const MINE_SCALE: f32 = 0.12;

// --- Star field ---

/// Number of background stars spawned at session start.
pub const STAR_COUNT: usize = 200;

/// Upper bound on a star's random sprite scale.
pub const STAR_MAX_SIZE: f32 = 0.01;

// --- Host loop ---

/// Nominal frame rate of the host loop (Hz). The engine itself accepts
/// whatever delta the host measures.
pub const FRAME_RATE: u32 = 60;
