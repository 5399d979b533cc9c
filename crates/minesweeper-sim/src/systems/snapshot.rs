//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use minesweeper_core::components::{Explosion, Helm, Mine, Ship, Star};
use minesweeper_core::enums::GamePhase;
use minesweeper_core::events::GameEvent;
use minesweeper_core::state::{ExplosionView, GameStateSnapshot, MineView, ShipView, StarView};
use minesweeper_core::types::{Position, Rotation, Scale, SimTime};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        ship: build_ship(world),
        mines: build_mines(world),
        explosions: build_explosions(world),
        stars: build_stars(world),
        events,
    }
}

fn build_ship(world: &World) -> ShipView {
    world
        .query::<(&Ship, &Position, &Rotation, &Scale, &Helm)>()
        .iter()
        .next()
        .map(|(_, (_, pos, rot, scale, helm))| ShipView {
            position: *pos,
            rotation: rot.0,
            scale: scale.0,
            target: helm.target,
        })
        .unwrap_or_default()
}

/// Mines, sorted oldest first so the renderer sees creation order.
fn build_mines(world: &World) -> Vec<MineView> {
    let mut mines: Vec<MineView> = world
        .query::<(&Mine, &Position, &Scale)>()
        .iter()
        .map(|(_, (mine, pos, scale))| MineView {
            position: *pos,
            scale: scale.0,
            seq: mine.seq,
        })
        .collect();
    mines.sort_by_key(|m| m.seq);
    mines
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    world
        .query::<(&Explosion, &Position, &Scale)>()
        .iter()
        .map(|(_, (_, pos, scale))| ExplosionView {
            position: *pos,
            scale: scale.0,
        })
        .collect()
}

fn build_stars(world: &World) -> Vec<StarView> {
    world
        .query::<(&Star, &Position, &Scale)>()
        .iter()
        .map(|(_, (_, pos, scale))| StarView {
            position: *pos,
            scale: scale.0,
        })
        .collect()
}
