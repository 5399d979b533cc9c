//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — persistent state lives in
//! components or on the engine.

pub mod explosion;
pub mod mine_homing;
pub mod mine_spawner;
pub mod ship_motion;
pub mod snapshot;
