//! Decides which grid cells become graph vertices.

use crate::grid::{Cell, Grid};

/// Return `true` when the cell at `(x, y)` must become a graph vertex.
///
/// Walls never qualify and the start/goal cells always do. Any other open cell
/// qualifies unless it sits inside a straight corridor: turns, dead ends,
/// branch points and fully open crossings are kept. Out-of-bounds neighbours
/// count as blocked.
pub fn is_vertex_candidate(grid: &Grid, x: usize, y: usize) -> bool {
    match grid.cell(x, y) {
        None | Some(Cell::Wall) => return false,
        Some(Cell::Start | Cell::Goal) => return true,
        Some(Cell::Open) => {}
    }

    let up_blocked = y == 0 || !grid.is_open(x, y - 1);
    let down_blocked = !grid.is_open(x, y + 1);
    let left_blocked = x == 0 || !grid.is_open(x - 1, y);
    let right_blocked = !grid.is_open(x + 1, y);

    up_blocked != down_blocked
        || left_blocked != right_blocked
        || !(up_blocked || down_blocked || left_blocked || right_blocked)
}
