//! Local replay of a move sequence over a grid.

use crate::direction::Path;
use crate::error::{Error, Result};
use crate::grid::{Grid, Position};

/// Walk `path` from the start cell and return the final position.
///
/// Fails on the first move that leaves the grid or enters a wall. Moves are
/// numbered from 1 in the error.
pub fn replay(grid: &Grid, path: &Path) -> Result<Position> {
    let mut position = grid.start();
    for (index, direction) in path.iter().enumerate() {
        let step = index + 1;
        let Some(next) = grid.step(position, direction) else {
            return Err(Error::OutOfBounds { step, position });
        };
        if !grid.is_open(next.x, next.y) {
            return Err(Error::WallCollision {
                step,
                position: next,
            });
        }
        position = next;
    }
    Ok(position)
}

/// Check that `path` leads from `A` to `B` without touching a wall.
pub fn verify_solution(grid: &Grid, path: &Path) -> Result<()> {
    let end = replay(grid, path)?;
    if end != grid.goal() {
        return Err(Error::WrongDestination {
            expected: grid.goal(),
            actual: end,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze() -> Grid {
        Grid::parse("XXXXX\nXA  X\nXXX X\nXB  X\nXXXXX").expect("valid maze")
    }

    fn path(text: &str) -> Path {
        text.parse().expect("valid path")
    }

    #[test]
    fn valid_solution_passes() {
        let grid = maze();
        verify_solution(&grid, &path("EESSWW")).expect("reaches goal");
    }

    #[test]
    fn wall_collision_is_reported_with_step() {
        let grid = maze();
        let error = verify_solution(&grid, &path("ES")).expect_err("wall below");
        assert!(matches!(
            error,
            Error::WallCollision { step: 2, position } if position == Position::new(2, 2)
        ));
    }

    #[test]
    fn leaving_the_grid_is_reported() {
        let grid = Grid::parse("AB").expect("valid maze");
        let error = replay(&grid, &path("W")).expect_err("off the edge");
        assert!(matches!(error, Error::OutOfBounds { step: 1, .. }));
    }

    #[test]
    fn stopping_short_is_reported() {
        let grid = maze();
        let error = verify_solution(&grid, &path("EE")).expect_err("not at goal");
        assert!(matches!(
            error,
            Error::WrongDestination { actual, .. } if actual == Position::new(3, 1)
        ));
    }
}
