//! Line-of-sight test between two grid points.
//!
//! A ray of unit-length steps is cast from the start towards the end. Every step rounds the
//! current position to a cell; the ray is blocked as soon as that cell is outside the level or
//! a wall. Only the raw level is consulted, so scene annotations never affect visibility.
use crate::level::LevelGrid;
use grid_util::point::Point;

/// Returns whether a straight unobstructed line joins `from` and `to`. A zero-length segment
/// is reported as blocked.
pub fn is_clear_path(level: &LevelGrid, from: Point, to: Point) -> bool {
    let (x1, y1) = (from.x as f64, from.y as f64);
    let dx = to.x as f64 - x1;
    let dy = to.y as f64 - y1;
    let length = dx.hypot(dy);
    if length == 0.0 {
        return false;
    }
    let (step_x, step_y) = (dx / length, dy / length);
    let (mut x, mut y) = (x1, y1);
    while (x - x1).hypot(y - y1) < length {
        let cell_x = x.round() as i32;
        let cell_y = y.round() as i32;
        match level.grid.tile_at(cell_x, cell_y) {
            Some(tile) if !tile.is_wall() => {}
            _ => return false,
        }
        x += step_x;
        y += step_y;
    }
    true
}
