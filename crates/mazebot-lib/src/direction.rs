use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Single unit move on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The move that undoes this one.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Column and row delta; north decreases the row index.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'E' => Some(Direction::East),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Ordered sequence of unit moves.
///
/// Used both as an edge label inside the maze graph and as the final answer.
/// Serialises as a compact `"NNEES"` string, matching the puzzle service's
/// `directions` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Path {
    moves: Vec<Direction>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` copies of the same move, the label of a straight corridor.
    pub fn straight(direction: Direction, count: usize) -> Self {
        Self {
            moves: vec![direction; count],
        }
    }

    /// Number of unit moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.moves.iter().copied()
    }

    pub fn push(&mut self, direction: Direction) {
        self.moves.push(direction);
    }

    pub fn append(&mut self, other: &Path) {
        self.moves.extend_from_slice(&other.moves);
    }

    /// `self` followed by `other`.
    pub fn concat(&self, other: &Path) -> Path {
        let mut moves = Vec::with_capacity(self.len() + other.len());
        moves.extend_from_slice(&self.moves);
        moves.extend_from_slice(&other.moves);
        Path { moves }
    }

    /// The path walked backwards: order reversed and every move mirrored.
    pub fn inverse(&self) -> Path {
        Path {
            moves: self.moves.iter().rev().map(|d| d.opposite()).collect(),
        }
    }
}

impl From<Vec<Direction>> for Path {
    fn from(moves: Vec<Direction>) -> Self {
        Self { moves }
    }
}

impl FromIterator<Direction> for Path {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(index, symbol)| {
                Direction::from_symbol(symbol).ok_or(Error::InvalidDirection { symbol, index })
            })
            .collect()
    }
}

impl TryFrom<String> for Path {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.to_string()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for direction in &self.moves {
            write!(f, "{}", direction.symbol())?;
        }
        Ok(())
    }
}
