//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::colliding_row;
use super::state::{GameEvent, GamePhase, GameState};
use crate::tuning::Tuning;

/// Discrete movement directions (arrow keys)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Displacement for one step of `step` units (y grows downward)
    pub fn delta(self, step: f32) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -step),
            Direction::Down => Vec2::new(0.0, step),
            Direction::Left => Vec2::new(-step, 0.0),
            Direction::Right => Vec2::new(step, 0.0),
        }
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Player displacement to apply before the rows move
    pub nudge: Vec2,
    /// Start a new run (processed even after game over)
    pub restart: bool,
    /// Demo mode - the autopilot steers toward the next gap
    pub autopilot: bool,
}

impl TickInput {
    /// Fold another input into this one (for buffering between ticks)
    pub fn merge(&mut self, other: &TickInput) {
        self.nudge += other.nudge;
        self.restart |= other.restart;
        self.autopilot |= other.autopilot;
    }
}

/// Advance the game state by one tick
///
/// Order within a running tick: buffered input, rows advance and reap (each
/// crossing scores immediately), speed ramp, collision. Nothing but restart
/// is processed once the run is over.
pub fn tick<R: Rng + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    tuning: &Tuning,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart {
        state.reset(tuning, rng);
        events.push(GameEvent::Restarted);
    }

    if state.phase == GamePhase::GameOver {
        return events;
    }

    if input.nudge != Vec2::ZERO {
        state.player.translate(input.nudge, tuning.field_size);
    }
    if input.autopilot {
        steer_autopilot(state, tuning);
    }

    state.time_ticks += 1;
    let level_before = state.score.level(tuning.points_per_level);

    // Rows: advance, score crossings, drop what fell off
    for event in state.pool.advance(state.score.speed, tuning, rng) {
        if let GameEvent::RowCrossed { .. } = event {
            state.score.on_row_crossed();
        }
        events.push(event);
    }
    events.extend(state.pool.reap(tuning.field_size.y));

    // Difficulty
    let boosts = state.score.on_level_check(tuning);
    if boosts > 0 {
        log::debug!("Obstacle speed now {}", state.score.speed);
    }
    let level = state.score.level(tuning.points_per_level);
    if level > level_before {
        log::info!("Level {} (score {})", level, state.score.score);
        events.push(GameEvent::LevelUp { level });
    }

    // Collision
    if let Some(row_id) = colliding_row(&state.player, state.pool.rows(), tuning.row_thickness) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: hit row {} at tick {} with score {}",
            row_id,
            state.time_ticks,
            state.score.score
        );
        events.push(GameEvent::GameOver {
            row_id,
            score: state.score.score,
        });
    }

    events
}

/// Player x the autopilot is heading for, if any row is still ahead
///
/// Targets the lowest row whose leading edge has not yet passed the
/// player's bottom edge, centering the player in that row's corridor.
pub fn autopilot_target(state: &GameState) -> Option<f32> {
    let player = &state.player;
    state
        .pool
        .rows()
        .iter()
        .filter(|row| row.y < player.bottom())
        .max_by(|a, b| a.y.total_cmp(&b.y))
        .map(|row| row.corridor_center() - player.size.x / 2.0)
}

/// Move the player toward the autopilot target by at most one autopilot step
fn steer_autopilot(state: &mut GameState, tuning: &Tuning) {
    if let Some(target_x) = autopilot_target(state) {
        let step = tuning.autopilot_step;
        let dx = (target_x - state.player.pos.x).clamp(-step, step);
        state.player.translate(Vec2::new(dx, 0.0), tuning.field_size);
    }
}
