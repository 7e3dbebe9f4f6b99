//! Game balance values
//!
//! Every constant the simulation reads goes through a [`Tuning`]. The default
//! is the classic layout from [`crate::consts`]; custom values are checked by
//! [`Tuning::validate`] before a simulation is built from them.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How obstacle speed grows with score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeedRamp {
    /// One speed increment per level reached
    #[default]
    OncePerLevel,
    /// One increment on every tick the score sits on a positive multiple of
    /// the level size (arcade-cabinet behavior, speeds up very quickly)
    WhileOnThreshold,
}

/// Game balance and geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub field_size: Vec2,
    pub player_size: Vec2,
    pub player_start: Vec2,
    /// Vertical thickness of an obstacle row
    pub row_thickness: f32,
    /// Vertical distance between consecutively spawned rows
    pub row_spacing: f32,
    pub initial_rows: u32,
    pub base_speed: f32,
    pub speed_increment: f32,
    pub speed_ramp: SpeedRamp,
    pub points_per_level: u32,
    /// Inclusive range each side's gap is drawn from
    pub gap_min: u32,
    pub gap_max: u32,
    pub move_step: f32,
    pub autopilot_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_size: Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            row_thickness: ROW_THICKNESS,
            row_spacing: ROW_SPACING,
            initial_rows: INITIAL_ROWS,
            base_speed: BASE_SPEED,
            speed_increment: SPEED_INCREMENT,
            speed_ramp: SpeedRamp::OncePerLevel,
            points_per_level: POINTS_PER_LEVEL,
            gap_min: GAP_MIN,
            gap_max: GAP_MAX,
            move_step: MOVE_STEP,
            autopilot_step: AUTOPILOT_STEP,
        }
    }
}

impl Tuning {
    /// Field midpoint a row's leading edge must pass to count as crossed
    #[inline]
    pub fn crossing_line(&self) -> f32 {
        self.field_size.y / 2.0
    }

    /// Narrowest corridor a row can leave open (both gaps at their maximum)
    #[inline]
    pub fn narrowest_corridor(&self) -> f32 {
        self.field_size.x - 2.0 * self.gap_max as f32
    }

    /// Check the preconditions the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let field = self.field_size;
        if !(field.x > 0.0 && field.y > 0.0) {
            return Err(TuningError::NonPositiveField {
                width: field.x,
                height: field.y,
            });
        }

        let player = self.player_size;
        if !(player.x > 0.0 && player.y > 0.0) || player.x > field.x || player.y > field.y {
            return Err(TuningError::PlayerDoesNotFit {
                width: player.x,
                height: player.y,
            });
        }

        if self.gap_min > self.gap_max {
            return Err(TuningError::EmptyGapRange {
                min: self.gap_min,
                max: self.gap_max,
            });
        }

        let corridor = self.narrowest_corridor();
        if corridor < player.x {
            return Err(TuningError::CorridorTooNarrow {
                corridor,
                player_width: player.x,
            });
        }

        if !(self.row_spacing > 0.0) || !(self.row_thickness > 0.0) {
            return Err(TuningError::NonPositiveRowGeometry {
                spacing: self.row_spacing,
                thickness: self.row_thickness,
            });
        }

        if !(self.base_speed > 0.0) || !(self.speed_increment >= 0.0) {
            return Err(TuningError::InvalidSpeed {
                base: self.base_speed,
                increment: self.speed_increment,
            });
        }

        if self.initial_rows == 0 {
            return Err(TuningError::NoInitialRows);
        }

        if self.points_per_level == 0 {
            return Err(TuningError::ZeroPointsPerLevel);
        }

        Ok(())
    }
}

/// A [`Tuning`] the simulation cannot run with
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    NonPositiveField { width: f32, height: f32 },
    PlayerDoesNotFit { width: f32, height: f32 },
    EmptyGapRange { min: u32, max: u32 },
    CorridorTooNarrow { corridor: f32, player_width: f32 },
    NonPositiveRowGeometry { spacing: f32, thickness: f32 },
    InvalidSpeed { base: f32, increment: f32 },
    NoInitialRows,
    ZeroPointsPerLevel,
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveField { width, height } => {
                write!(f, "field must be positive, got {width}x{height}")
            }
            Self::PlayerDoesNotFit { width, height } => {
                write!(f, "player {width}x{height} does not fit the field")
            }
            Self::EmptyGapRange { min, max } => {
                write!(f, "gap range is empty: min {min} > max {max}")
            }
            Self::CorridorTooNarrow {
                corridor,
                player_width,
            } => write!(
                f,
                "narrowest corridor {corridor} is smaller than player width {player_width}"
            ),
            Self::NonPositiveRowGeometry { spacing, thickness } => write!(
                f,
                "row spacing and thickness must be positive, got spacing={spacing}, thickness={thickness}"
            ),
            Self::InvalidSpeed { base, increment } => write!(
                f,
                "invalid speed: base={base} must be positive, increment={increment} must not be negative"
            ),
            Self::NoInitialRows => write!(f, "at least one initial row is required"),
            Self::ZeroPointsPerLevel => write!(f, "points per level must be non-zero"),
        }
    }
}

impl std::error::Error for TuningError {}
