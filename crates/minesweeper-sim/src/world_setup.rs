//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player's ship and the background star field. Mines are
//! spawned later by the spawner system.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use minesweeper_core::components::{Helm, Ship, Star};
use minesweeper_core::constants::{SHIP_SCALE, STAR_COUNT, STAR_MAX_SIZE};
use minesweeper_core::types::{Position, Rotation, Scale};

/// Set up the initial session world: ship and star field.
pub fn setup_session(world: &mut World, rng: &mut ChaCha8Rng) {
    spawn_ship(world);
    spawn_star_field(world, rng);
}

/// Spawn the player's ship at the origin, facing up, with no target yet.
pub fn spawn_ship(world: &mut World) -> hecs::Entity {
    world.spawn((
        Ship,
        Position::default(),
        Rotation::default(),
        Scale::splat(SHIP_SCALE),
        Helm::default(),
    ))
}

/// Spawn the background star field: random positions across the visible
/// [-1, 1] area with random sizes.
pub fn spawn_star_field(world: &mut World, rng: &mut ChaCha8Rng) {
    for _ in 0..STAR_COUNT {
        let x: f32 = rng.gen_range(-1.0..1.0);
        let y: f32 = rng.gen_range(-1.0..1.0);
        let size: f32 = rng.gen::<f32>() * STAR_MAX_SIZE;
        world.spawn((Star, Position::new(x, y), Scale::splat(size)));
    }
}
