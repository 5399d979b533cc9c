//! Mine homing system: pure pursuit of the ship.
//!
//! Each mine recomputes its direction toward the ship's current position
//! every frame, producing curved interception paths rather than
//! straight-line extrapolation.

use hecs::World;

use minesweeper_core::components::{Mine, Ship};
use minesweeper_core::constants::MINE_SPEED;
use minesweeper_core::types::Position;

/// Steer every live mine toward the ship at constant speed.
pub fn run(world: &mut World, dt: f32) {
    let ship_pos = match world
        .query::<(&Ship, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
    {
        Some(pos) => pos,
        None => return,
    };

    for (_entity, (pos, _mine)) in world.query_mut::<(&mut Position, &Mine)>() {
        // direction_to is zero for a mine sitting exactly on the ship,
        // so such a mine simply stays put.
        let step = pos.direction_to(&ship_pos) * (MINE_SPEED * dt);
        pos.0 += step;
    }
}
