//! Obstacle row geometry
//!
//! A row is two barriers sharing one horizontal band: the left barrier spans
//! `[0, left_gap)` and the right barrier spans `[field_width - right_gap, field_width)`.
//! The player passes through the corridor between them.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// One horizontal pair of barriers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleRow {
    pub id: u32,
    /// Leading (top) edge, field-relative; grows as the row falls
    pub y: f32,
    /// Width of the left barrier
    pub left_gap: f32,
    /// Width of the right barrier
    pub right_gap: f32,
    field_width: f32,
    /// Leading edge has passed the field midpoint
    pub crossed: bool,
}

impl ObstacleRow {
    pub fn new(id: u32, y: f32, left_gap: f32, right_gap: f32, field_width: f32) -> Self {
        Self {
            id,
            y,
            left_gap,
            right_gap,
            field_width,
            crossed: false,
        }
    }

    /// Create a row with both barrier widths drawn from the tuning's gap range
    pub fn random<R: Rng + ?Sized>(id: u32, y: f32, tuning: &Tuning, rng: &mut R) -> Self {
        let left = rng.random_range(tuning.gap_min..=tuning.gap_max) as f32;
        let right = rng.random_range(tuning.gap_min..=tuning.gap_max) as f32;
        Self::new(id, y, left, right, tuning.field_size.x)
    }

    /// Left edge of the passable corridor
    #[inline]
    pub fn left_gap_start(&self) -> f32 {
        self.left_gap
    }

    /// Right edge of the passable corridor
    #[inline]
    pub fn right_gap_end(&self) -> f32 {
        self.field_width - self.right_gap
    }

    /// Width of the passable corridor (negative if the barriers overlap)
    #[inline]
    pub fn corridor_width(&self) -> f32 {
        self.right_gap_end() - self.left_gap_start()
    }

    /// Horizontal center of the corridor
    #[inline]
    pub fn corridor_center(&self) -> f32 {
        (self.left_gap_start() + self.right_gap_end()) / 2.0
    }

    /// Bottom edge of the band
    #[inline]
    pub fn bottom(&self, thickness: f32) -> f32 {
        self.y + thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_gap_geometry() {
        let row = ObstacleRow::new(1, 0.0, 50.0, 80.0, 360.0);
        assert_eq!(row.left_gap_start(), 50.0);
        assert_eq!(row.right_gap_end(), 280.0);
        assert_eq!(row.corridor_width(), 230.0);
        assert_eq!(row.corridor_center(), 165.0);
        assert_eq!(row.bottom(40.0), 40.0);
        assert!(!row.crossed);
    }

    #[test]
    fn test_random_gaps_stay_in_range() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);

        for id in 0..500 {
            let row = ObstacleRow::random(id, 0.0, &tuning, &mut rng);
            assert!((50.0..=150.0).contains(&row.left_gap));
            assert!((50.0..=150.0).contains(&row.right_gap));
            assert_eq!(row.left_gap.fract(), 0.0);
            assert!(row.corridor_width() >= tuning.player_size.x);
        }
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let tuning = Tuning::default();
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);

        for id in 0..20 {
            assert_eq!(
                ObstacleRow::random(id, -130.0, &tuning, &mut a),
                ObstacleRow::random(id, -130.0, &tuning, &mut b)
            );
        }
    }
}
