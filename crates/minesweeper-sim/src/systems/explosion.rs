//! Explosion animation system: grow each explosion until it fades.

use hecs::{Entity, World};

use minesweeper_core::components::Explosion;
use minesweeper_core::constants::{EXPLOSION_GROWTH_RATE, EXPLOSION_MAX_SCALE};
use minesweeper_core::events::GameEvent;
use minesweeper_core::types::Scale;

/// Grow every explosion's scale and remove the ones past the size
/// threshold. Uses a pre-allocated buffer so entities are despawned only
/// after the traversal completes.
pub fn run(world: &mut World, dt: f32, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<GameEvent>) {
    despawn_buffer.clear();

    let growth = EXPLOSION_GROWTH_RATE * dt;
    for (entity, (scale, _explosion)) in world.query_mut::<(&mut Scale, &Explosion)>() {
        scale.0.x += growth;
        scale.0.y += growth;

        // Expiry checks only the x axis. Both axes grow at the same
        // rate, but the x check is the observable rule.
        if scale.0.x > EXPLOSION_MAX_SCALE {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
        events.push(GameEvent::ExplosionFaded);
    }
}
