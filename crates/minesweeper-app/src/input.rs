//! Input mapping: raw pointer coordinates to normalized device
//! coordinates.
//!
//! Pointer events arrive in pixel coordinates with the origin at the top
//! left and +y pointing down. The simulation works in NDC, [-1, 1] per
//! axis with +y pointing up, so every event is converted here before it
//! becomes a `PlayerCommand`.

use minesweeper_core::commands::PlayerCommand;
use minesweeper_core::types::Position;

/// The window area pointer coordinates are measured against.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert raw pixel coordinates to normalized device coordinates.
    pub fn normalized_device_coordinates(&self, x: f32, y: f32) -> Position {
        Position::new(2.0 * x / self.width - 1.0, 1.0 - 2.0 * y / self.height)
    }

    /// Map a pointer-move event to its engine command.
    pub fn pointer_moved(&self, x: f32, y: f32) -> PlayerCommand {
        PlayerCommand::PointerMoved {
            position: self.normalized_device_coordinates(x, y),
        }
    }

    /// Map a pointer-down event to its engine command.
    pub fn pointer_pressed(&self, x: f32, y: f32) -> PlayerCommand {
        PlayerCommand::PointerPressed {
            position: self.normalized_device_coordinates(x, y),
        }
    }
}
