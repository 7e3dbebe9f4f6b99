//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - Injected seeded RNG only
//! - Stable row order (by spawn id)
//! - No rendering or platform dependencies

pub mod collision;
pub mod pool;
pub mod row;
pub mod score;
pub mod simulation;
pub mod state;
pub mod tick;

pub use collision::{check, colliding_row, player_hits_row};
pub use pool::ObstacleRowPool;
pub use row::ObstacleRow;
pub use score::ScoreTracker;
pub use simulation::GameSimulation;
pub use state::{GameEvent, GamePhase, GameState, Player};
pub use tick::{Direction, TickInput, autopilot_target, tick};
