//! Active obstacle rows: spawn, advance, reap
//!
//! Rows are kept in spawn order (ascending id). A row scores once when its
//! leading edge passes the field midpoint, which also spawns its replacement
//! above the field, and is dropped once it falls past the bottom edge.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::row::ObstacleRow;
use super::state::GameEvent;
use crate::tuning::Tuning;

/// Ordered collection of live obstacle rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleRowPool {
    rows: Vec<ObstacleRow>,
    next_id: u32,
}

impl Default for ObstacleRowPool {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl ObstacleRowPool {
    /// Create a pool already holding the initial staggered rows
    pub fn new<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Self {
        let mut pool = Self::default();
        pool.initialize(tuning, rng);
        pool
    }

    /// Replace all rows with `initial_rows` fresh rows at `0, -S, -2S, ...`
    pub fn initialize<R: Rng + ?Sized>(&mut self, tuning: &Tuning, rng: &mut R) {
        self.rows.clear();
        for i in 0..tuning.initial_rows {
            self.spawn(-(i as f32) * tuning.row_spacing, tuning, rng);
        }
    }

    /// Allocate a new row id
    fn next_row_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a row with fresh random gaps
    pub fn spawn<R: Rng + ?Sized>(&mut self, y: f32, tuning: &Tuning, rng: &mut R) -> u32 {
        let id = self.next_row_id();
        self.rows.push(ObstacleRow::random(id, y, tuning, rng));
        log::debug!("Spawned row {} at y={}", id, y);
        id
    }

    /// Move every row down by `speed`
    ///
    /// Returns the crossing events of this step in row order. Each crossing
    /// spawns one replacement row at `-row_spacing`; replacements are appended
    /// after the sweep so they do not move until the next step.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        speed: f32,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Vec<GameEvent> {
        let crossing_line = tuning.crossing_line();
        let mut events = Vec::new();

        for row in &mut self.rows {
            row.y += speed;
            if row.y > crossing_line && !row.crossed {
                row.crossed = true;
                events.push(GameEvent::RowCrossed { row_id: row.id });
            }
        }

        let crossings = events.len();
        for _ in 0..crossings {
            let row_id = self.spawn(-tuning.row_spacing, tuning, rng);
            events.push(GameEvent::RowSpawned { row_id });
        }

        events
    }

    /// Drop rows that have fallen below the field
    ///
    /// Returns reap events in row order. Surviving rows keep their order.
    pub fn reap(&mut self, field_height: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        self.rows.retain(|row| {
            let keep = row.y <= field_height;
            if !keep {
                log::debug!("Reaped row {} at y={}", row.id, row.y);
                events.push(GameEvent::RowReaped { row_id: row.id });
            }
            keep
        });
        events
    }

    /// Live rows in spawn order
    #[inline]
    pub fn rows(&self) -> &[ObstacleRow] {
        &self.rows
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mutable access for tests that stage specific layouts
    #[cfg(test)]
    pub(crate) fn rows_mut(&mut self) -> &mut Vec<ObstacleRow> {
        &mut self.rows
    }
}
