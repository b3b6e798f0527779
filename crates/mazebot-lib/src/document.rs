//! Maze documents as published by the mazebot puzzle service.
//!
//! A document carries the map as rows of one-character strings plus some
//! metadata. Only `map` is required; the advertised start and end positions
//! are cross-checked against the map when present.

use std::fs::File;
use std::io::{BufReader, Read};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::direction::Path;
use crate::error::{Error, Result};
use crate::grid::{Grid, Marker, Position};

/// Maze document in the puzzle service's JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MazeDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Service path the solution is posted back to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maze_path: Option<String>,
    /// `[x, y]` of the `A` cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_position: Option<[usize; 2]>,
    /// `[x, y]` of the `B` cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_position: Option<[usize; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_solution: Option<ExampleSolution>,
    pub map: Vec<Vec<String>>,
}

/// Illustrative solution shipped with practice mazes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSolution {
    pub directions: String,
}

impl MazeDocument {
    /// Decode a document from a JSON string.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a document from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a document from a JSON file.
    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        debug!(path = %path.display(), "loading maze document");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Validate the map and turn it into a [`Grid`].
    pub fn to_grid(&self) -> Result<Grid> {
        let grid = Grid::from_symbol_rows(&self.map)?;
        check_advertised(&grid, Marker::Start, self.starting_position)?;
        check_advertised(&grid, Marker::Goal, self.ending_position)?;
        Ok(grid)
    }
}

fn check_advertised(grid: &Grid, marker: Marker, advertised: Option<[usize; 2]>) -> Result<()> {
    let Some([x, y]) = advertised else {
        return Ok(());
    };
    let advertised = Position::new(x, y);
    let actual = grid.marker(marker);
    if advertised != actual {
        return Err(Error::MarkerMismatch {
            marker,
            advertised,
            actual,
        });
    }
    Ok(())
}

/// Body posted back to the puzzle service: `{"directions": "NNEE..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionSubmission {
    pub directions: Path,
}

impl SolutionSubmission {
    pub fn new(directions: Path) -> Self {
        Self { directions }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
