use thiserror::Error;

use crate::grid::{Marker, Position};

/// Convenient result alias for the mazebot library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a maze has no rows or only empty rows.
    #[error("maze grid is empty")]
    EmptyGrid,

    /// Raised when a row's length differs from the first row.
    #[error("maze row {row} has {found} cells; expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Raised when a cell holds a symbol outside `X`, space, `A` and `B`.
    #[error("unknown maze symbol {symbol:?} at {x},{y}")]
    UnknownSymbol { symbol: String, x: usize, y: usize },

    /// Raised when the start or goal marker does not appear in the grid.
    #[error("maze has no {marker} cell")]
    MissingMarker { marker: Marker },

    /// Raised when the start or goal marker appears more than once.
    #[error("maze has more than one {marker} cell (at {first} and {second})")]
    DuplicateMarker {
        marker: Marker,
        first: Position,
        second: Position,
    },

    /// Raised when a maze document advertises a marker position that disagrees
    /// with its map.
    #[error("maze document places {marker} at {advertised} but the map has it at {actual}")]
    MarkerMismatch {
        marker: Marker,
        advertised: Position,
        actual: Position,
    },

    /// Raised when a direction string contains something other than N/S/E/W.
    #[error("invalid direction {symbol:?} at index {index}")]
    InvalidDirection { symbol: char, index: usize },

    /// Raised when the goal cannot be reached from the start.
    #[error("no path from {start} to {goal}; the maze is disconnected")]
    Unreachable { start: Position, goal: Position },

    /// Raised when the maze graph breaks one of its structural guarantees.
    #[error("maze graph invariant violated: {message}")]
    InvariantViolation { message: String },

    /// Raised when replaying a path steps onto a wall.
    #[error("move {step} walks into the wall at {position}")]
    WallCollision { step: usize, position: Position },

    /// Raised when replaying a path leaves the grid.
    #[error("move {step} leaves the maze from {position}")]
    OutOfBounds { step: usize, position: Position },

    /// Raised when a replayed path ends somewhere other than the goal.
    #[error("path ends at {actual} instead of the goal at {expected}")]
    WrongDestination { expected: Position, actual: Position },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        Error::InvariantViolation {
            message: message.into(),
        }
    }
}
