//! Implicit grid graph of walkable and blocked cells
//!
//! Cells connect to their four orthogonal neighbors at unit cost. There are
//! no diagonal moves.

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::traversal::GraphProvider;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Neighbor offsets as `(row, col)` deltas: left, up, down, right
const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// A cell coordinate. `row` indexes the outer dimension of the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Manhattan distance, the A* heuristic for 4-directional unit moves
    pub fn manhattan(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    fn offset(&self, (dr, dc): (isize, isize)) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl std::str::FromStr for Position {
    type Err = String;

    /// Parses `row,col` (surrounding parentheses and spaces allowed)
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = trimmed
            .split_once(',')
            .ok_or_else(|| format!("invalid position '{}' (expected: row,col)", s))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| format!("invalid row in position '{}'", s))?;
        let col = col
            .trim()
            .parse()
            .map_err(|_| format!("invalid column in position '{}'", s))?;
        Ok(Position { row, col })
    }
}

/// Rectangular grid; `blocked` is stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    blocked: Vec<bool>,
}

impl Grid {
    /// Grid of the given size with every cell walkable
    pub fn open(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            bail_invalid!("grid size", format!("{}x{}", rows, cols));
        }
        Ok(Grid {
            rows,
            cols,
            blocked: vec![false; rows * cols],
        })
    }

    /// Build from numeric rows: `0` is walkable, anything else is blocked
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut grid = Grid::open(rows.len(), cols)?;

        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                bail_invalid!(
                    "grid row",
                    format!(
                        "row {} has {} cells, expected {}",
                        row_idx,
                        row.len(),
                        cols
                    )
                );
            }
            for (col_idx, &cell) in row.iter().enumerate() {
                grid.blocked[row_idx * cols + col_idx] = cell != 0;
            }
        }

        Ok(grid)
    }

    /// Parse a text grid, one row per line.
    ///
    /// `0` or `.` is walkable, `1` or `#` is blocked. Whitespace and commas
    /// between cells are ignored, as are blank lines.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.chars() {
                match ch {
                    '0' | '.' => row.push(0),
                    '1' | '#' => row.push(1),
                    c if c.is_whitespace() || c == ',' => {}
                    other => bail_invalid!(
                        "grid cell",
                        format!("'{}' on line {}", other, line_no + 1)
                    ),
                }
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Grid::from_rows(&rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// In bounds and not blocked
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.in_bounds(pos) && !self.blocked[pos.row * self.cols + pos.col]
    }

    pub fn set_blocked(&mut self, pos: Position, blocked: bool) -> Result<()> {
        if !self.in_bounds(pos) {
            bail_invalid!("grid position", pos);
        }
        self.blocked[pos.row * self.cols + pos.col] = blocked;
        Ok(())
    }

    /// Walkable orthogonal neighbors of `pos`
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS
            .into_iter()
            .filter_map(move |delta| pos.offset(delta))
            .filter(move |&next| self.is_walkable(next))
    }
}

impl GraphProvider for Grid {
    type Vertex = Position;

    fn contains(&self, vertex: &Position) -> bool {
        self.is_walkable(*vertex)
    }

    fn vertices(&self) -> Vec<Position> {
        (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| Position { row, col }))
            .filter(|&pos| self.is_walkable(pos))
            .collect()
    }

    fn outbound(&self, vertex: &Position) -> Vec<(Position, f64)> {
        if !self.is_walkable(*vertex) {
            return Vec::new();
        }
        self.neighbors(*vertex).map(|next| (next, 1.0)).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.cols)
                .map(|col| {
                    if self.blocked[row * self.cols + col] {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
