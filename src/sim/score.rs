//! Score, high score, level and obstacle speed

use serde::{Deserialize, Serialize};

use crate::tuning::{SpeedRamp, Tuning};

/// Scoring and difficulty state
///
/// Level is always derived from score; only the speed ramp keeps its own
/// marker of which level has already been paid out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTracker {
    pub score: u32,
    pub high_score: u32,
    /// Obstacle fall speed, units per tick
    pub speed: f32,
    /// Highest level whose speed increment has been applied
    speed_level: u32,
}

impl ScoreTracker {
    pub fn new(base_speed: f32) -> Self {
        Self {
            score: 0,
            high_score: 0,
            speed: base_speed,
            speed_level: 1,
        }
    }

    /// One more row passed
    pub fn on_row_crossed(&mut self) {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Current level, starting at 1
    #[inline]
    pub fn level(&self, points_per_level: u32) -> u32 {
        self.score / points_per_level + 1
    }

    /// Apply the speed ramp after this tick's crossings
    ///
    /// Returns the number of speed increments applied.
    pub fn on_level_check(&mut self, tuning: &Tuning) -> u32 {
        let per_level = tuning.points_per_level;
        match tuning.speed_ramp {
            SpeedRamp::WhileOnThreshold => {
                if self.score != 0 && self.score % per_level == 0 {
                    self.speed += tuning.speed_increment;
                    self.speed_level = self.level(per_level);
                    1
                } else {
                    0
                }
            }
            SpeedRamp::OncePerLevel => {
                let level = self.level(per_level);
                let mut applied = 0;
                while self.speed_level < level {
                    self.speed_level += 1;
                    self.speed += tuning.speed_increment;
                    applied += 1;
                }
                applied
            }
        }
    }

    /// Day and night alternate every level
    #[inline]
    pub fn is_day(&self, points_per_level: u32) -> bool {
        (self.score / points_per_level) % 2 == 0
    }

    /// New run: score and speed back to start, high score kept
    pub fn reset(&mut self, base_speed: f32) {
        self.score = 0;
        self.speed = base_speed;
        self.speed_level = 1;
    }
}
