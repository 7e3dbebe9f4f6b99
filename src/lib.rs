//! Pipe Drop - A vertically scrolling pipe-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacle rows, collisions, scoring, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, windowing and input wiring live outside this crate. A driver
//! calls [`sim::GameSimulation::update`] once per frame and draws from the
//! read accessors.

pub mod sim;
pub mod tuning;

pub use sim::{Direction, GameEvent, GamePhase, GameSimulation, GameState, TickInput};
pub use tuning::{SpeedRamp, Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 360.0;
    pub const FIELD_HEIGHT: f32 = 640.0;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 51.0;
    pub const PLAYER_HEIGHT: f32 = 36.0;
    /// Player spawn point (an eighth across, halfway down)
    pub const PLAYER_START_X: f32 = FIELD_WIDTH / 8.0;
    pub const PLAYER_START_Y: f32 = FIELD_HEIGHT / 2.0;

    /// Distance moved by one discrete step (arrow key press)
    pub const MOVE_STEP: f32 = 20.0;
    /// Max horizontal distance the autopilot moves per tick
    pub const AUTOPILOT_STEP: f32 = 4.0;

    /// Obstacle rows
    pub const ROW_THICKNESS: f32 = 40.0;
    pub const ROW_SPACING: f32 = 130.0;
    pub const INITIAL_ROWS: u32 = 5;
    /// Gap size range, inclusive, in whole units
    pub const GAP_MIN: u32 = 50;
    pub const GAP_MAX: u32 = 150;

    /// Obstacle speed (units per tick)
    pub const BASE_SPEED: f32 = 2.0;
    pub const SPEED_INCREMENT: f32 = 0.5;

    /// Rows crossed per level
    pub const POINTS_PER_LEVEL: u32 = 10;
}

/// Clamp a top-left position so a box of `size` stays inside `field`
#[inline]
pub fn clamp_to_field(pos: Vec2, size: Vec2, field: Vec2) -> Vec2 {
    pos.clamp(Vec2::ZERO, (field - size).max(Vec2::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_field() {
        let field = Vec2::new(360.0, 640.0);
        let size = Vec2::new(51.0, 36.0);

        assert_eq!(
            clamp_to_field(Vec2::new(-10.0, -5.0), size, field),
            Vec2::ZERO
        );
        assert_eq!(
            clamp_to_field(Vec2::new(400.0, 700.0), size, field),
            Vec2::new(309.0, 604.0)
        );
        assert_eq!(
            clamp_to_field(Vec2::new(45.0, 320.0), size, field),
            Vec2::new(45.0, 320.0)
        );
    }
}
