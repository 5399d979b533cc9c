//! Simulation engine for Space Minesweeper.
//!
//! Owns the hecs ECS world, runs the per-frame systems, and produces
//! GameStateSnapshots for the host to render.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::GameEngine;
pub use minesweeper_core as core;

#[cfg(test)]
mod tests;
