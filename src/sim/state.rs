//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives here.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pool::ObstacleRowPool;
use super::score::ScoreTracker;
use crate::clamp_to_field;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Rows falling, player steering
    #[default]
    Running,
    /// Player hit a row; waiting for restart
    GameOver,
}

/// Something that happened during a tick, for sound and HUD cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RowSpawned { row_id: u32 },
    /// Row passed the field midpoint and scored
    RowCrossed { row_id: u32 },
    /// Row fell off the bottom of the field
    RowReaped { row_id: u32 },
    LevelUp { level: u32 },
    GameOver { row_id: u32, score: u32 },
    Restarted,
}

/// The player's sprite box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Displace and keep the whole box inside `field`
    pub fn translate(&mut self, delta: Vec2, field: Vec2) {
        self.pos = clamp_to_field(self.pos + delta, self.size, field);
    }
}

/// Complete game state (deterministic given the RNG stream, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    /// Runs started this session (restarts + 1)
    pub run: u32,
    /// Player sprite
    pub player: Player,
    /// Live obstacle rows
    pub pool: ObstacleRowPool,
    /// Score, high score and speed
    pub score: ScoreTracker,
}

impl GameState {
    /// Fresh state for the first run
    pub fn new<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Self {
        Self {
            phase: GamePhase::Running,
            time_ticks: 0,
            run: 1,
            player: Player::new(
                clamp_to_field(tuning.player_start, tuning.player_size, tuning.field_size),
                tuning.player_size,
            ),
            pool: ObstacleRowPool::new(tuning, rng),
            score: ScoreTracker::new(tuning.base_speed),
        }
    }

    /// Back to the start of a run, keeping the high score
    pub fn reset<R: Rng + ?Sized>(&mut self, tuning: &Tuning, rng: &mut R) {
        self.phase = GamePhase::Running;
        self.time_ticks = 0;
        self.run += 1;
        self.player.pos = clamp_to_field(tuning.player_start, tuning.player_size, tuning.field_size);
        self.score.reset(tuning.base_speed);
        self.pool.initialize(tuning, rng);
        log::info!(
            "Run {} started (high score {})",
            self.run,
            self.score.high_score
        );
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
