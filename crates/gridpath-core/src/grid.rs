//! Occupancy grids.
//!
//! A [`Grid`] maps every [`Cell`] inside its [`Bounds`] to an [`Occupancy`].
//! Grids can be written as text maps, one line per row:
//!
//! ```text
//! .#...
//! .#.#.
//! ...#.
//! ```
//!
//! `.` or `0` is open, `#` or `1` is blocked and `*` or `2` is visited.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Bounds, BoundsIter, Cell};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupancy {
    #[default]
    Open,
    Blocked,
    /// Expanded by a search. Impassable until reset.
    Visited,
}

impl Occupancy {
    /// Parse a text-map character.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' | '0' => Some(Self::Open),
            '#' | '1' => Some(Self::Blocked),
            '*' | '2' => Some(Self::Visited),
            _ => None,
        }
    }

    /// Canonical text-map character.
    pub fn to_char(self) -> char {
        match self {
            Self::Open => '.',
            Self::Blocked => '#',
            Self::Visited => '*',
        }
    }
}

/// A rectangular occupancy grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<Occupancy>,
}

impl Grid {
    /// Create a new grid with every cell open.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            bounds,
            cells: vec![Occupancy::Open; bounds.len()],
        }
    }

    /// Create a grid whose cells are produced by `f`.
    pub fn from_fn(rows: i32, cols: i32, mut f: impl FnMut(Cell) -> Occupancy) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            bounds,
            cells: bounds.iter().map(&mut f).collect(),
        }
    }

    /// Returns the bounds of this grid.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Get the occupancy at a cell, or `None` if out of bounds.
    pub fn at(&self, c: Cell) -> Option<Occupancy> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// Set the occupancy at a cell. Does nothing if out of bounds.
    pub fn set(&mut self, c: Cell, occ: Occupancy) {
        if let Some(i) = self.bounds.index(c) {
            self.cells[i] = occ;
        }
    }

    /// Whether the cell is in bounds and open.
    pub fn is_open(&self, c: Cell) -> bool {
        self.at(c) == Some(Occupancy::Open)
    }

    /// Count how many cells have the given occupancy.
    pub fn count(&self, occ: Occupancy) -> usize {
        self.cells.iter().filter(|&&c| c == occ).count()
    }

    /// Turn every visited cell back into an open one so the grid can be
    /// searched again. Returns the number of cells reset.
    pub fn reset_visited(&mut self) -> usize {
        let mut n = 0;
        for c in self.cells.iter_mut() {
            if *c == Occupancy::Visited {
                *c = Occupancy::Open;
                n += 1;
            }
        }
        n
    }

    /// Iterate over `(cell, occupancy)` pairs in row-major order.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }

    /// Render the grid as a text map with `path` drawn over it.
    ///
    /// Path cells are drawn as `o`, its first cell as `S` and its last as `G`.
    pub fn render_path(&self, path: &[Cell]) -> String {
        let mut chars: Vec<char> = self.cells.iter().map(|c| c.to_char()).collect();
        for (i, &c) in path.iter().enumerate() {
            let Some(idx) = self.bounds.index(c) else {
                continue;
            };
            chars[idx] = if i == 0 {
                'S'
            } else if i + 1 == path.len() {
                'G'
            } else {
                'o'
            };
        }
        let cols = self.bounds.cols.max(1) as usize;
        let mut out = String::with_capacity(chars.len() + self.bounds.rows.max(0) as usize);
        for (i, line) in chars.chunks(cols).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(line);
        }
        out
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(s.len());
        let mut cols: Option<i32> = None;
        let mut rows = 0;
        for (row, line) in s.lines().enumerate() {
            let line = line.trim();
            let mut width = 0;
            for (col, ch) in line.chars().enumerate() {
                let occ = Occupancy::from_char(ch).ok_or(GridError::InvalidChar {
                    ch,
                    cell: Cell::new(row as i32, col as i32),
                })?;
                cells.push(occ);
                width += 1;
            }
            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(GridError::InconsistentWidth {
                        row: row as i32,
                        expected,
                        found: width,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }
        Ok(Self {
            bounds: Bounds::new(rows, cols.unwrap_or(0)),
            cells,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_path(&[]))
    }
}

/// Iterator over `(Cell, Occupancy)` pairs of a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: BoundsIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Cell, Occupancy);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let c = self.inner.next()?;
        let i = self.grid.bounds.index(c)?;
        Some((c, self.grid.cells[i]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The map contains no rows.
    Empty,
    /// A row is wider or narrower than the first one.
    InconsistentWidth { row: i32, expected: i32, found: i32 },
    /// A character outside the map alphabet was found.
    InvalidChar { ch: char, cell: Cell },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: empty map"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} columns, expected {expected}"
            ),
            Self::InvalidChar { ch, cell } => {
                write!(f, "grid: invalid character \u{201c}{ch}\u{201d} at {cell}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "\
.#...
.#.#.
.#.#.
.....
.#...";

    #[test]
    fn parse_and_size() {
        let g: Grid = MAP.parse().unwrap();
        assert_eq!(g.rows(), 5);
        assert_eq!(g.cols(), 5);
        assert_eq!(g.at(Cell::new(0, 1)), Some(Occupancy::Blocked));
        assert_eq!(g.at(Cell::new(3, 1)), Some(Occupancy::Open));
        assert_eq!(g.at(Cell::new(5, 0)), None);
        assert_eq!(g.count(Occupancy::Blocked), 6);
    }

    #[test]
    fn parse_accepts_digit_alphabet() {
        let g: Grid = "010\n020".parse().unwrap();
        assert_eq!(g.at(Cell::new(0, 1)), Some(Occupancy::Blocked));
        assert_eq!(g.at(Cell::new(1, 1)), Some(Occupancy::Visited));
    }

    #[test]
    fn display_round_trips() {
        let g: Grid = MAP.parse().unwrap();
        assert_eq!(g.to_string(), MAP);
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = "...\n..".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_chars() {
        let err = "..\n.x".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidChar {
                ch: 'x',
                cell: Cell::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!("  \n ".parse::<Grid>().unwrap_err(), GridError::Empty);
    }

    #[test]
    fn set_out_of_bounds_is_ignored() {
        let mut g = Grid::new(2, 2);
        g.set(Cell::new(5, 5), Occupancy::Blocked);
        assert_eq!(g.count(Occupancy::Blocked), 0);
        g.set(Cell::new(1, 1), Occupancy::Blocked);
        assert!(!g.is_open(Cell::new(1, 1)));
        assert!(g.is_open(Cell::new(0, 1)));
    }

    #[test]
    fn reset_visited_only_touches_visited() {
        let mut g: Grid = "*#\n.*".parse().unwrap();
        assert_eq!(g.reset_visited(), 2);
        assert_eq!(g.to_string(), ".#\n..");
    }

    #[test]
    fn from_fn_is_row_major() {
        let g = Grid::from_fn(2, 3, |c| {
            if c.col == 2 {
                Occupancy::Blocked
            } else {
                Occupancy::Open
            }
        });
        assert_eq!(g.to_string(), "..#\n..#");
    }

    #[test]
    fn render_path_marks_endpoints() {
        let g = Grid::new(2, 3);
        let path = [Cell::new(0, 0), Cell::new(1, 1), Cell::new(0, 2)];
        assert_eq!(g.render_path(&path), "S.G\n.o.");
    }

    #[test]
    fn iter_yields_every_cell() {
        let g: Grid = "#.\n..".parse().unwrap();
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], (Cell::new(0, 0), Occupancy::Blocked));
        assert_eq!(cells[3], (Cell::new(1, 1), Occupancy::Open));
    }
}
