//! Ship motion system: seek the commanded target, then aim at the pointer.

use hecs::World;

use minesweeper_core::components::{Helm, Ship};
use minesweeper_core::constants::{ARRIVAL_EPSILON, SHIP_SPEED};
use minesweeper_core::types::{Position, Rotation};

/// Move the ship toward its helm target; once arrived (or before any
/// target is set), turn it to face the pointer instead.
pub fn run(world: &mut World, pointer: Position, dt: f32) {
    for (_entity, (pos, rot, helm, _ship)) in
        world.query_mut::<(&mut Position, &mut Rotation, &Helm, &Ship)>()
    {
        let en_route = helm
            .target
            .filter(|target| pos.distance_to(target) > ARRIVAL_EPSILON);

        match en_route {
            Some(target) => {
                let step = pos.direction_to(&target) * (SHIP_SPEED * dt);
                pos.0 += step;
            }
            None => {
                // A pointer sitting exactly on the ship has no bearing;
                // keep the current facing.
                if let Some(bearing) = pos.bearing_to(&pointer) {
                    rot.0 = bearing;
                }
            }
        }
    }
}
