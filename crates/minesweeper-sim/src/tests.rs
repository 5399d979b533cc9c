//! Tests for the simulation engine: determinism, spawning and eviction,
//! motion rules, and the pointer input quirks.

use glam::Vec2;

use minesweeper_core::commands::PlayerCommand;
use minesweeper_core::components::{Explosion, Mine, Ship};
use minesweeper_core::constants::*;
use minesweeper_core::enums::GamePhase;
use minesweeper_core::events::GameEvent;
use minesweeper_core::state::GameStateSnapshot;
use minesweeper_core::types::{Position, Scale};

use crate::engine::{GameEngine, SimConfig};
use crate::systems;

const DT: f32 = 1.0 / 60.0;

fn started_engine(seed: u64) -> GameEngine {
    let mut engine = GameEngine::new(SimConfig { seed });
    engine.queue_command(PlayerCommand::StartGame);
    engine
}

/// Advance until `snapshot.mines` reaches `count` mines, spawning one
/// mine per update by feeding the full spawn interval.
fn run_until_mine_count(engine: &mut GameEngine, count: usize) -> GameStateSnapshot {
    let mut last = engine.update(0.0);
    for _ in 0..count * 2 {
        if last.mines.len() >= count {
            break;
        }
        last = engine.update(MINE_SPAWN_INTERVAL_SECS);
    }
    last
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = started_engine(12345);
    let mut engine_b = started_engine(12345);

    for _ in 0..300 {
        let snap_a = engine_a.update(DT);
        let snap_b = engine_b.update(DT);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = started_engine(111);
    let mut engine_b = started_engine(222);

    // The star field is seeded at session setup, so the very first
    // snapshots already differ.
    let snap_a = engine_a.update(DT);
    let snap_b = engine_b.update(DT);
    let json_a = serde_json::to_string(&snap_a).unwrap();
    let json_b = serde_json::to_string(&snap_b).unwrap();
    assert_ne!(json_a, json_b, "Different seeds should diverge");
}

// ---- Session lifecycle ----

#[test]
fn test_start_game_spawns_ship_and_stars() {
    let mut engine = started_engine(42);
    let snap = engine.update(0.0);

    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.stars.len(), STAR_COUNT);
    for star in &snap.stars {
        assert!(star.position.0.x >= -1.0 && star.position.0.x < 1.0);
        assert!(star.position.0.y >= -1.0 && star.position.0.y < 1.0);
        assert!(star.scale.x >= 0.0 && star.scale.x < STAR_MAX_SIZE);
    }

    assert_eq!(snap.ship.position, Position::default());
    assert_eq!(snap.ship.scale, Vec2::splat(SHIP_SCALE));
    assert!(snap.ship.target.is_none());
}

#[test]
fn test_start_game_only_from_menu() {
    let mut engine = started_engine(42);
    engine.update(0.0);

    // A second StartGame while active must not rebuild the world.
    engine.queue_command(PlayerCommand::StartGame);
    let snap = engine.update(0.0);

    let ship_count = engine.world().query::<&Ship>().iter().count();
    assert_eq!(ship_count, 1);
    assert_eq!(snap.stars.len(), STAR_COUNT);
}

#[test]
fn test_pause_stops_time() {
    let mut engine = started_engine(42);
    engine.update(DT);

    engine.queue_command(PlayerCommand::Pause);
    let snap = engine.update(DT);
    assert_eq!(snap.phase, GamePhase::Paused);
    let paused_frame = snap.time.frame;

    // Frames do not advance while paused.
    let snap = engine.update(DT);
    assert_eq!(snap.time.frame, paused_frame);

    engine.queue_command(PlayerCommand::Resume);
    let snap = engine.update(DT);
    assert_eq!(snap.phase, GamePhase::Active);
    assert!(snap.time.frame > paused_frame);
}

// ---- Spawn policy ----

#[test]
fn test_spawn_after_interval_accumulates() {
    let mut engine = started_engine(7);

    // Interval 0.5, dt 0.1: four frames accumulate 0.4 with no spawn,
    // the fifth reaches the interval and spawns exactly one mine.
    engine.update(0.0);
    for _ in 0..4 {
        let snap = engine.update(0.1);
        assert_eq!(snap.mines.len(), 0);
    }
    let snap = engine.update(0.1);
    assert_eq!(snap.mines.len(), 1);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::MineSpawned { .. })));
}

#[test]
fn test_long_frame_spawns_single_mine() {
    let mut engine = started_engine(7);
    engine.update(0.0);

    // One frame worth several intervals still spawns only one mine...
    let snap = engine.update(1.7);
    assert_eq!(snap.mines.len(), 1);

    // ...and the surplus is discarded: the accumulator restarts at zero,
    // so another 0.4 s is not enough for the next spawn.
    let snap = engine.update(0.4);
    assert_eq!(snap.mines.len(), 1);
    let snap = engine.update(0.1);
    assert_eq!(snap.mines.len(), 2);
}

#[test]
fn test_mine_spawns_at_fixed_distance() {
    let mut engine = started_engine(99);
    let snap = run_until_mine_count(&mut engine, 1);

    // The mine has taken homing steps since spawning, but the spawn
    // event records the raw placement on the 1.25 circle.
    let spawn_pos = snap
        .events
        .iter()
        .find_map(|e| match e {
            GameEvent::MineSpawned { position } => Some(*position),
            _ => None,
        })
        .expect("spawn event");
    let radius = spawn_pos.0.length();
    assert!((radius - MINE_SPAWN_DISTANCE).abs() < 1e-5);
}

// ---- Population cap ----

#[test]
fn test_population_cap_eviction() {
    let mut engine = started_engine(4);
    let snap_full = run_until_mine_count(&mut engine, MINE_LIMIT);
    assert_eq!(snap_full.mines.len(), MINE_LIMIT);
    assert!(snap_full.explosions.is_empty());

    let oldest = snap_full.mines[0];
    assert_eq!(oldest.seq, 0);
    let ship_pos = snap_full.ship.position;

    // The 11th spawn evicts the oldest mine. Its recorded position is
    // where it ended up after this frame's homing step.
    let dt = MINE_SPAWN_INTERVAL_SECS;
    let expected =
        Position(oldest.position.0 + oldest.position.direction_to(&ship_pos) * (MINE_SPEED * dt));

    let snap = engine.update(dt);
    assert_eq!(snap.mines.len(), MINE_LIMIT);
    assert_eq!(snap.explosions.len(), 1);
    assert!(snap.explosions[0].position.0.distance(expected.0) < 1e-5);
    assert_eq!(snap.explosions[0].scale, Vec2::splat(EXPLOSION_INITIAL_SCALE));
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::MineDetonated { .. })));
}

#[test]
fn test_eviction_is_fifo() {
    let mut engine = started_engine(4);
    engine.update(0.0);

    // Spawn 15 mines: 5 evictions, so the survivors are seqs 5..=14.
    for _ in 0..15 {
        engine.update(MINE_SPAWN_INTERVAL_SECS);
    }
    let snap = engine.update(0.0);

    let seqs: Vec<u64> = snap.mines.iter().map(|m| m.seq).collect();
    assert_eq!(seqs, (5..15).collect::<Vec<u64>>());
}

#[test]
fn test_mine_population_stays_bounded() {
    let mut engine = started_engine(2);
    engine.update(0.0);

    for _ in 0..100 {
        let snap = engine.update(MINE_SPAWN_INTERVAL_SECS);
        assert!(snap.mines.len() <= MINE_LIMIT);
    }
}

// ---- Ship motion ----

#[test]
fn test_ship_single_step_toward_target() {
    let mut engine = started_engine(42);
    engine.update(0.0);

    engine.queue_command(PlayerCommand::PointerPressed {
        position: Position::new(1.0, 0.0),
    });
    let snap = engine.update(1.0);

    // Direction is normalized then scaled: one second at 0.75 units/sec.
    assert!(snap.ship.position.0.distance(Vec2::new(0.75, 0.0)) < 1e-6);
    assert_eq!(snap.ship.target, Some(Position::new(1.0, 0.0)));
}

#[test]
fn test_ship_approach_is_monotonic_then_stops() {
    let mut engine = started_engine(42);
    engine.update(0.0);

    let target = Position::new(0.3, -0.4);
    engine.queue_command(PlayerCommand::PointerPressed { position: target });

    let mut last_distance = f32::MAX;
    loop {
        let snap = engine.update(DT);
        let distance = snap.ship.position.distance_to(&target);
        if distance <= ARRIVAL_EPSILON {
            break;
        }
        assert!(
            distance < last_distance,
            "distance to target must shrink every frame while en route"
        );
        last_distance = distance;
        assert!(snap.time.frame < 600, "ship never arrived");
    }

    // Arrived: further frames no longer move the ship.
    let settled = engine.update(DT).ship.position;
    let snap = engine.update(DT);
    assert_eq!(snap.ship.position, settled);
}

#[test]
fn test_ship_aims_at_pointer_before_first_press() {
    let mut engine = started_engine(42);
    engine.update(0.0);

    engine.queue_command(PlayerCommand::PointerMoved {
        position: Position::new(1.0, 1.0),
    });
    let snap = engine.update(DT);

    // No target yet: the ship holds position and faces the pointer.
    assert_eq!(snap.ship.position, Position::default());
    assert!((snap.ship.rotation - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
}

#[test]
fn test_press_faces_last_moved_pointer() {
    let mut engine = started_engine(42);
    engine.update(0.0);

    // Aim reference points right; the press target is straight up.
    engine.queue_command(PlayerCommand::PointerMoved {
        position: Position::new(1.0, 0.0),
    });
    engine.queue_command(PlayerCommand::PointerPressed {
        position: Position::new(0.0, 1.0),
    });
    let snap = engine.update(0.0);

    // The ship turns toward the stored pointer position, not toward the
    // freshly pressed target.
    assert!((snap.ship.rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    assert_eq!(snap.ship.target, Some(Position::new(0.0, 1.0)));
}

#[test]
fn test_pointer_on_ship_keeps_rotation() {
    let mut engine = started_engine(42);
    engine.update(0.0);

    engine.queue_command(PlayerCommand::PointerMoved {
        position: Position::new(1.0, 0.0),
    });
    engine.update(DT);

    // Pointer moves exactly onto the ship: no bearing, rotation holds.
    engine.queue_command(PlayerCommand::PointerMoved {
        position: Position::default(),
    });
    let snap = engine.update(DT);
    assert!((snap.ship.rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}

// ---- Mine motion ----

#[test]
fn test_mine_distance_to_ship_non_increasing() {
    let mut engine = started_engine(13);
    run_until_mine_count(&mut engine, 1);

    let mut last_distance = f32::MAX;
    for _ in 0..120 {
        let snap = engine.update(DT);
        let mine = snap
            .mines
            .iter()
            .find(|m| m.seq == 0)
            .expect("first mine still live");
        let distance = mine.position.distance_to(&snap.ship.position);
        assert!(distance <= last_distance, "pure pursuit must close range");
        last_distance = distance;
    }
}

#[test]
fn test_mine_on_ship_does_not_move_or_nan() {
    let mut world = hecs::World::new();
    crate::world_setup::spawn_ship(&mut world);
    world.spawn((
        Mine { seq: 0 },
        Position::default(),
        Scale::splat(MINE_SCALE),
    ));

    systems::mine_homing::run(&mut world, DT);

    let (_, (pos, _)) = world
        .query_mut::<(&Position, &Mine)>()
        .into_iter()
        .next()
        .unwrap();
    assert_eq!(pos.0, Vec2::ZERO);
    assert!(!pos.0.x.is_nan() && !pos.0.y.is_nan());
}

// ---- Explosions ----

#[test]
fn test_explosion_growth_and_expiry() {
    let mut world = hecs::World::new();
    let mut despawn_buffer = Vec::new();
    let mut events = Vec::new();

    world.spawn((
        Explosion,
        Position::new(0.5, 0.5),
        Scale::splat(EXPLOSION_INITIAL_SCALE),
    ));

    // 0.25 grows by 0.2 per 0.1 s frame: 0.45, 0.65, 0.85 stay alive.
    let mut expected = EXPLOSION_INITIAL_SCALE;
    for _ in 0..3 {
        systems::explosion::run(&mut world, 0.1, &mut despawn_buffer, &mut events);
        expected += EXPLOSION_GROWTH_RATE * 0.1;
        let (_, (scale, _)) = world
            .query_mut::<(&Scale, &Explosion)>()
            .into_iter()
            .next()
            .expect("explosion still live");
        assert!((scale.0.x - expected).abs() < 1e-5);
        assert!((scale.0.y - expected).abs() < 1e-5);
        assert!(events.is_empty());
    }

    // Fourth frame pushes x past 1.0 and the explosion is removed.
    systems::explosion::run(&mut world, 0.1, &mut despawn_buffer, &mut events);
    assert_eq!(world.query_mut::<(&Scale, &Explosion)>().into_iter().count(), 0);
    assert_eq!(events, vec![GameEvent::ExplosionFaded]);
}

#[test]
fn test_every_eviction_produces_one_explosion() {
    let mut engine = started_engine(21);
    engine.update(0.0);

    let mut detonations = 0usize;
    let mut faded = 0usize;
    for _ in 0..40 {
        let snap = engine.update(MINE_SPAWN_INTERVAL_SECS);
        detonations += snap
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::MineDetonated { .. }))
            .count();
        faded += snap
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::ExplosionFaded))
            .count();
        // Live explosions are the ones detonated but not yet faded.
        assert_eq!(snap.explosions.len(), detonations - faded);
    }
    assert_eq!(detonations, 40 - MINE_LIMIT);
}
