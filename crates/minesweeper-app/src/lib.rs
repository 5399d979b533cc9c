//! Space Minesweeper host application.
//!
//! Wires the simulation engine to whatever front end drives it: a frame
//! loop thread with a command channel, and the pointer-to-NDC input
//! mapping a renderer needs to feed the engine.

pub mod game_loop;
pub mod input;
pub mod state;

pub use minesweeper_core as core;
