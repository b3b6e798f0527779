use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::{Error, Result};

/// Cell position within a grid: `x` is the column, `y` the row, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Content of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Open,
    Start,
    Goal,
}

impl Cell {
    /// Decode a map symbol (`X`, space, `A`, `B`).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' => Some(Cell::Wall),
            ' ' => Some(Cell::Open),
            'A' => Some(Cell::Start),
            'B' => Some(Cell::Goal),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => 'X',
            Cell::Open => ' ',
            Cell::Start => 'A',
            Cell::Goal => 'B',
        }
    }

    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }
}

/// The two distinguished cells every maze must contain exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Start,
    Goal,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Start => f.write_str("start (A)"),
            Marker::Goal => f.write_str("goal (B)"),
        }
    }
}

/// Validated rectangular maze grid with exactly one start and one goal.
///
/// Cells are stored row-major. A `Grid` is immutable once constructed; every
/// constructor runs the same validation, so downstream code can rely on the
/// grid being rectangular and on both markers being present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    start: Position,
    goal: Position,
}

impl Grid {
    /// Build a grid from decoded rows, validating shape and markers.
    pub fn from_cells(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(Error::EmptyGrid);
        }
        let height = rows.len();

        let mut cells = Vec::with_capacity(width * height);
        let mut start = None;
        let mut goal = None;

        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedGrid {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, cell) in row.into_iter().enumerate() {
                let position = Position::new(x, y);
                match cell {
                    Cell::Start => record_marker(&mut start, Marker::Start, position)?,
                    Cell::Goal => record_marker(&mut goal, Marker::Goal, position)?,
                    Cell::Wall | Cell::Open => {}
                }
                cells.push(cell);
            }
        }

        let start = start.ok_or(Error::MissingMarker {
            marker: Marker::Start,
        })?;
        let goal = goal.ok_or(Error::MissingMarker {
            marker: Marker::Goal,
        })?;

        Ok(Self {
            cells,
            width,
            height,
            start,
            goal,
        })
    }

    /// Parse a text maze: one row per line, one symbol per character.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (y, line) in text.lines().enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(x, symbol)| {
                    Cell::from_symbol(symbol).ok_or_else(|| Error::UnknownSymbol {
                        symbol: symbol.to_string(),
                        x,
                        y,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }
        Self::from_cells(rows)
    }

    /// Build a grid from rows of single-symbol strings, the layout used by the
    /// puzzle service's `map` field.
    pub fn from_symbol_rows<R, S>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut decoded = Vec::with_capacity(rows.len());
        for (y, row) in rows.iter().enumerate() {
            let cells = row
                .as_ref()
                .iter()
                .enumerate()
                .map(|(x, symbol)| decode_symbol(symbol.as_ref(), x, y))
                .collect::<Result<Vec<_>>>()?;
            decoded.push(cells);
        }
        Self::from_cells(decoded)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Position of the `A` cell.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Position of the `B` cell.
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Position of the given marker.
    pub fn marker(&self, marker: Marker) -> Position {
        match marker {
            Marker::Start => self.start,
            Marker::Goal => self.goal,
        }
    }

    /// Cell at `(x, y)`, or `None` when out of bounds.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// `true` when `(x, y)` is inside the grid and not a wall.
    pub fn is_open(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(|cell| !cell.is_wall())
    }

    /// Neighbouring position one step in `direction`, if it lies inside the grid.
    pub fn step(&self, from: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.offset();
        let x = from.x.checked_add_signed(dx)?;
        let y = from.y.checked_add_signed(dy)?;
        (x < self.width && y < self.height).then_some(Position::new(x, y))
    }

    /// Iterate rows as cell slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

fn decode_symbol(symbol: &str, x: usize, y: usize) -> Result<Cell> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Cell::from_symbol(c),
        _ => None,
    }
    .ok_or_else(|| Error::UnknownSymbol {
        symbol: symbol.to_string(),
        x,
        y,
    })
}

fn record_marker(slot: &mut Option<Position>, marker: Marker, position: Position) -> Result<()> {
    if let Some(first) = *slot {
        return Err(Error::DuplicateMarker {
            marker,
            first,
            second: position,
        });
    }
    *slot = Some(position);
    Ok(())
}
