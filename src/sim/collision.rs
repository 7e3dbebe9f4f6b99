//! Collision detection between the player and obstacle rows
//!
//! Both shapes are axis-aligned boxes. A row is a band `row_thickness` tall;
//! inside that band everything outside `[left_gap_start, right_gap_end]` is
//! solid.

use super::row::ObstacleRow;
use super::state::Player;

/// Whether the player's vertical extent overlaps the row's band
#[inline]
pub fn overlaps_band(player: &Player, row: &ObstacleRow, row_thickness: f32) -> bool {
    player.pos.y < row.bottom(row_thickness) && player.bottom() > row.y
}

/// Whether the player's horizontal extent lies entirely inside the row's corridor
#[inline]
pub fn inside_corridor(player: &Player, row: &ObstacleRow) -> bool {
    player.pos.x >= row.left_gap_start() && player.right() <= row.right_gap_end()
}

/// Check the player against a single row
pub fn player_hits_row(player: &Player, row: &ObstacleRow, row_thickness: f32) -> bool {
    overlaps_band(player, row, row_thickness) && !inside_corridor(player, row)
}

/// First row (in spawn order) the player is touching, if any
pub fn colliding_row(player: &Player, rows: &[ObstacleRow], row_thickness: f32) -> Option<u32> {
    rows.iter()
        .find(|row| player_hits_row(player, row, row_thickness))
        .map(|row| row.id)
}

/// Check the player against every row
///
/// Stops at the first hit; a hit within a tick cannot be undone by another row.
pub fn check(player: &Player, rows: &[ObstacleRow], row_thickness: f32) -> bool {
    colliding_row(player, rows, row_thickness).is_some()
}
