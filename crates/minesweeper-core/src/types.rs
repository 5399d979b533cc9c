//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D position in normalized device coordinates.
/// Both axes conceptually span [-1, 1]; +x = right, +y = up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Orientation in radians. Bearing 0 points along +y ("up"),
/// increasing toward +x, so forward = (sin θ, cos θ).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation(pub f32);

/// Per-axis sprite scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale(pub Vec2);

/// Simulation time tracking. Frames carry a variable delta because the
/// host loop reports real elapsed time, like a renderer's frame callback.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current frame number (increments by 1 each update).
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Place a point `distance` units from the origin along `bearing`.
    /// Bearing is measured from +y clockwise toward +x.
    pub fn from_bearing(bearing: f32, distance: f32) -> Self {
        Self(Vec2::new(distance * bearing.sin(), distance * bearing.cos()))
    }

    /// Distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    /// Unit vector toward another position; zero if the points coincide.
    pub fn direction_to(&self, other: &Position) -> Vec2 {
        (other.0 - self.0).normalize_or_zero()
    }

    /// Bearing toward another position, or `None` if the points coincide
    /// (a zero direction has no bearing).
    pub fn bearing_to(&self, other: &Position) -> Option<f32> {
        let d = other.0 - self.0;
        if d == Vec2::ZERO {
            None
        } else {
            Some(d.x.atan2(d.y))
        }
    }
}

impl Scale {
    pub fn splat(s: f32) -> Self {
        Self(Vec2::splat(s))
    }
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}
