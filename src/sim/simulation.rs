//! Driver-facing wrapper around [`GameState`]
//!
//! Owns the state, the tuning and the RNG stream, buffers input between
//! frames, and exposes read-only accessors for the renderer.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::row::ObstacleRow;
use super::state::{GameEvent, GamePhase, GameState};
use super::tick::{Direction, TickInput, tick};
use crate::tuning::{Tuning, TuningError};

/// One game session: successive runs sharing a high score
#[derive(Debug, Clone)]
pub struct GameSimulation<R = Pcg32> {
    state: GameState,
    tuning: Tuning,
    rng: R,
    /// Input buffered since the last tick
    pending: TickInput,
    autopilot: bool,
    /// Events produced by the most recent tick or restart
    events: Vec<GameEvent>,
}

impl GameSimulation<Pcg32> {
    /// Classic layout, gaps drawn from a PCG stream seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self::build(Tuning::default(), Pcg32::seed_from_u64(seed))
    }

    /// Custom layout, gaps drawn from a PCG stream seeded with `seed`
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSimulation<R> {
    /// Custom layout and an injected random source
    pub fn with_rng(tuning: Tuning, rng: R) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(tuning, rng))
    }

    fn build(tuning: Tuning, mut rng: R) -> Self {
        let state = GameState::new(&tuning, &mut rng);
        log::info!(
            "Simulation ready: field {}x{}, {} rows",
            tuning.field_size.x,
            tuning.field_size.y,
            state.pool.len()
        );
        Self {
            state,
            tuning,
            rng,
            pending: TickInput::default(),
            autopilot: false,
            events: Vec::new(),
        }
    }

    /// Advance one tick, consuming any buffered input
    pub fn update(&mut self) {
        let mut input = std::mem::take(&mut self.pending);
        input.autopilot |= self.autopilot;
        self.events = tick(&mut self.state, &input, &self.tuning, &mut self.rng);
    }

    /// Buffer input to be applied at the start of the next tick
    pub fn queue_input(&mut self, input: &TickInput) {
        self.pending.merge(input);
    }

    /// Displace the player now, clamped to the field
    ///
    /// Ignored after game over.
    pub fn move_player(&mut self, dx: f32, dy: f32) {
        if self.state.is_game_over() {
            return;
        }
        self.state
            .player
            .translate(Vec2::new(dx, dy), self.tuning.field_size);
    }

    /// Move the player one discrete step
    pub fn step_player(&mut self, direction: Direction) {
        let delta = direction.delta(self.tuning.move_step);
        self.move_player(delta.x, delta.y);
    }

    /// Start a new run now, keeping the high score
    pub fn restart(&mut self) {
        self.state.reset(&self.tuning, &mut self.rng);
        self.pending = TickInput::default();
        self.events = vec![GameEvent::Restarted];
    }

    /// Let the autopilot steer on every tick
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    // --- Read accessors ---

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn player_position(&self) -> Vec2 {
        self.state.player.pos
    }

    pub fn player_size(&self) -> Vec2 {
        self.state.player.size
    }

    pub fn rows(&self) -> &[ObstacleRow] {
        self.state.pool.rows()
    }

    pub fn score(&self) -> u32 {
        self.state.score.score
    }

    pub fn high_score(&self) -> u32 {
        self.state.score.high_score
    }

    pub fn level(&self) -> u32 {
        self.state.score.level(self.tuning.points_per_level)
    }

    pub fn obstacle_speed(&self) -> f32 {
        self.state.score.speed
    }

    pub fn is_day(&self) -> bool {
        self.state.score.is_day(self.tuning.points_per_level)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn time_ticks(&self) -> u64 {
        self.state.time_ticks
    }

    /// Events from the most recent tick or restart
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::SpeedRamp;

    /// Drive the simulation until the first crossing of `target` score
    fn run_until_score(sim: &mut GameSimulation, target: u32, max_ticks: u32) -> bool {
        for _ in 0..max_ticks {
            sim.update();
            if sim.score() >= target {
                return true;
            }
            if sim.is_game_over() {
                return false;
            }
        }
        false
    }

    /// Make every live and future row wide open so the run cannot end
    fn open_field(seed: u64) -> GameSimulation {
        let tuning = Tuning {
            gap_min: 0,
            gap_max: 0,
            ..Default::default()
        };
        GameSimulation::with_tuning(seed, tuning).unwrap()
    }

    #[test]
    fn test_initial_accessors() {
        let sim = GameSimulation::new(12345);
        assert_eq!(sim.player_position(), Vec2::new(45.0, 320.0));
        assert_eq!(sim.player_size(), Vec2::new(51.0, 36.0));
        assert_eq!(sim.rows().len(), 5);
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.high_score(), 0);
        assert_eq!(sim.level(), 1);
        assert_eq!(sim.obstacle_speed(), 2.0);
        assert!(sim.is_day());
        assert_eq!(sim.phase(), GamePhase::Running);
        assert!(sim.events().is_empty());
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let tuning = Tuning {
            field_size: Vec2::new(-1.0, 640.0),
            ..Default::default()
        };
        assert!(matches!(
            GameSimulation::with_tuning(1, tuning),
            Err(TuningError::NonPositiveField { .. })
        ));
    }

    #[test]
    fn test_move_player_clamps() {
        let mut sim = GameSimulation::new(1);
        sim.move_player(-500.0, 0.0);
        assert_eq!(sim.player_position(), Vec2::new(0.0, 320.0));
        sim.move_player(0.0, 5000.0);
        assert_eq!(sim.player_position(), Vec2::new(0.0, 604.0));

        sim.step_player(Direction::Right);
        sim.step_player(Direction::Up);
        assert_eq!(sim.player_position(), Vec2::new(20.0, 584.0));
    }

    #[test]
    fn test_move_ignored_after_game_over() {
        let mut sim = GameSimulation::new(1);
        sim.state.phase = GamePhase::GameOver;
        sim.move_player(20.0, 20.0);
        assert_eq!(sim.player_position(), Vec2::new(45.0, 320.0));
    }

    #[test]
    fn test_queued_input_applies_on_next_tick() {
        let mut sim = open_field(2);
        sim.queue_input(&TickInput {
            nudge: Vec2::new(20.0, 0.0),
            ..Default::default()
        });
        sim.queue_input(&TickInput {
            nudge: Vec2::new(20.0, 0.0),
            ..Default::default()
        });
        assert_eq!(sim.player_position().x, 45.0);

        sim.update();
        assert_eq!(sim.player_position().x, 85.0);

        // Buffer is drained
        sim.update();
        assert_eq!(sim.player_position().x, 85.0);
    }

    #[test]
    fn test_score_reaches_ten_and_speeds_up() {
        let mut sim = open_field(3);
        assert!(run_until_score(&mut sim, 10, 5_000));
        assert_eq!(sim.score(), 10);
        assert_eq!(sim.level(), 2);
        assert!(!sim.is_day());
        assert!(sim.obstacle_speed() >= 2.5);
        assert!(sim.events().contains(&GameEvent::LevelUp { level: 2 }));
    }

    #[test]
    fn test_repeating_ramp_keeps_boosting() {
        let tuning = Tuning {
            gap_min: 0,
            gap_max: 0,
            speed_ramp: SpeedRamp::WhileOnThreshold,
            ..Default::default()
        };
        let mut sim = GameSimulation::with_tuning(3, tuning).unwrap();
        assert!(run_until_score(&mut sim, 10, 5_000));
        let at_ten = sim.obstacle_speed();
        assert_eq!(at_ten, 2.5);

        // Crossings are dozens of ticks apart, so the next tick cannot score
        sim.update();
        assert_eq!(sim.score(), 10);
        assert_eq!(sim.obstacle_speed(), 3.0);
    }

    #[test]
    fn test_restart_restores_initial_state() {
        let mut sim = open_field(4);
        sim.move_player(100.0, -100.0);
        assert!(run_until_score(&mut sim, 12, 10_000));
        sim.state.phase = GamePhase::GameOver;

        sim.restart();
        assert_eq!(sim.player_position(), Vec2::new(45.0, 320.0));
        assert_eq!(sim.score(), 0);
        assert_eq!(sim.high_score(), 12);
        assert_eq!(sim.level(), 1);
        assert_eq!(sim.obstacle_speed(), 2.0);
        assert!(!sim.is_game_over());
        assert_eq!(sim.time_ticks(), 0);
        assert_eq!(sim.events(), &[GameEvent::Restarted]);

        let ys: Vec<f32> = sim.rows().iter().map(|r| r.y).collect();
        assert_eq!(ys, vec![0.0, -130.0, -260.0, -390.0, -520.0]);
        assert!(sim.rows().iter().all(|r| !r.crossed));
    }

    #[test]
    fn test_restart_is_valid_mid_run() {
        let mut sim = GameSimulation::new(5);
        for _ in 0..10 {
            sim.update();
        }
        sim.restart();
        assert_eq!(sim.rows().len(), 5);
        assert_eq!(sim.state().run, 2);
    }

    #[test]
    fn test_autopilot_flag_persists() {
        let mut sim = GameSimulation::new(6);
        sim.set_autopilot(true);
        assert!(sim.autopilot());
        let start = sim.player_position();
        sim.update();
        sim.update();
        // Nearest row's corridor is never centered on the start position
        assert_ne!(sim.player_position(), start);
    }
}
