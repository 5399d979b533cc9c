//! Mine spawning system — spawns a mine at a fixed interval and enforces
//! the population cap by evicting the oldest mine into an explosion.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use minesweeper_core::components::{Explosion, Mine};
use minesweeper_core::constants::{
    EXPLOSION_INITIAL_SCALE, MINE_LIMIT, MINE_SCALE, MINE_SPAWN_DISTANCE,
    MINE_SPAWN_INTERVAL_SECS,
};
use minesweeper_core::events::GameEvent;
use minesweeper_core::types::{Position, Scale};

/// Accumulate elapsed time and spawn a single mine once the interval is
/// reached. The accumulator resets to zero rather than carrying surplus,
/// so one long frame still spawns at most one mine.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawn_timer: &mut f32,
    next_seq: &mut u64,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    *spawn_timer += dt;
    if *spawn_timer < MINE_SPAWN_INTERVAL_SECS {
        return;
    }
    *spawn_timer = 0.0;

    spawn_mine(world, rng, next_seq, events);
}

/// Spawn one mine at a random bearing outside the visible area, then
/// apply the population cap.
pub fn spawn_mine(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_seq: &mut u64,
    events: &mut Vec<GameEvent>,
) -> hecs::Entity {
    let bearing: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let position = Position::from_bearing(bearing, MINE_SPAWN_DISTANCE);

    let seq = *next_seq;
    *next_seq += 1;

    let entity = world.spawn((Mine { seq }, position, Scale::splat(MINE_SCALE)));
    events.push(GameEvent::MineSpawned { position });

    // Cap check after insertion: each spawn adds exactly one mine, so at
    // most one eviction is ever needed per call.
    evict_oldest_over_limit(world, events);

    entity
}

/// If the mine population exceeds the limit, replace the oldest mine
/// (lowest creation seq) with an explosion at its position.
fn evict_oldest_over_limit(world: &mut World, events: &mut Vec<GameEvent>) {
    let mut count = 0usize;
    let mut oldest: Option<(hecs::Entity, u64, Position)> = None;
    for (entity, (mine, pos)) in world.query_mut::<(&Mine, &Position)>() {
        count += 1;
        if oldest.map_or(true, |(_, seq, _)| mine.seq < seq) {
            oldest = Some((entity, mine.seq, *pos));
        }
    }

    if count <= MINE_LIMIT {
        return;
    }

    if let Some((entity, _seq, position)) = oldest {
        world.spawn((
            Explosion,
            position,
            Scale::splat(EXPLOSION_INITIAL_SCALE),
        ));
        let _ = world.despawn(entity);
        events.push(GameEvent::MineDetonated { position });
    }
}
