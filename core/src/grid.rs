use std::{collections::VecDeque, fmt};

use thiserror::Error;

use crate::{array::Array2D, dims::Dims};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    Passage,
    #[default]
    Wall,
}

impl Tile {
    /// Numeric form used by [`Grid::to_values`]: `0` passage, `1` wall.
    pub fn value(self) -> u8 {
        match self {
            Tile::Passage => 0,
            Tile::Wall => 1,
        }
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Tile::Passage),
            1 => Some(Tile::Wall),
            _ => None,
        }
    }

    pub fn is_passage(self) -> bool {
        self == Tile::Passage
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid cell value {value} at {pos}")]
    InvalidValue { pos: Dims, value: u8 },
    #[error("invalid cell character {ch:?} at {pos}")]
    InvalidChar { pos: Dims, ch: char },
}

/// Rectangular grid of walls and passages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) tiles: Array2D<Tile>,
}

impl Grid {
    pub fn filled(tile: Tile, rows: usize, cols: usize) -> Self {
        Self {
            tiles: Array2D::new(tile, rows, cols),
        }
    }

    /// Builds a grid from rows of `0` (passage) and `1` (wall).
    pub fn from_values<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        Self::from_rows(rows.iter().map(|row| row.as_ref().iter().copied()), |pos, value| {
            Tile::from_value(value).ok_or(GridError::InvalidValue { pos, value })
        })
    }

    /// Builds a grid from text rows, where `#` is a wall and `.` or a space is a passage.
    pub fn from_ascii(rows: &[&str]) -> Result<Self, GridError> {
        Self::from_rows(rows.iter().map(|row| row.chars()), |pos, ch| match ch {
            '#' => Ok(Tile::Wall),
            '.' | ' ' => Ok(Tile::Passage),
            ch => Err(GridError::InvalidChar { pos, ch }),
        })
    }

    fn from_rows<I, C>(
        rows: impl Iterator<Item = I>,
        parse: impl Fn(Dims, C) -> Result<Tile, GridError>,
    ) -> Result<Self, GridError>
    where
        I: Iterator<Item = C>,
    {
        let mut tiles = Vec::new();
        let mut cols = None;
        let mut row_count = 0;

        for (r, row) in rows.enumerate() {
            let before = tiles.len();
            for (c, cell) in row.enumerate() {
                tiles.push(parse(Dims(r as i32, c as i32), cell)?);
            }

            let found = tiles.len() - before;
            match cols {
                None => cols = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged {
                        row: r,
                        expected,
                        found,
                    })
                }
                Some(_) => {}
            }
            row_count += 1;
        }

        let cols = cols.unwrap_or(0);
        if row_count == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        let tiles = Array2D::from_vec(tiles, row_count, cols).ok_or(GridError::Empty)?;
        Ok(Grid { tiles })
    }

    /// Rows of `0` (passage) and `1` (wall).
    pub fn to_values(&self) -> Vec<Vec<u8>> {
        self.tiles
            .rows_iter()
            .map(|row| row.iter().map(|tile| tile.value()).collect())
            .collect()
    }

    pub fn size(&self) -> Dims {
        self.tiles.size()
    }

    pub fn rows(&self) -> usize {
        self.tiles.rows()
    }

    pub fn cols(&self) -> usize {
        self.tiles.cols()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.tiles.is_in_bounds(pos)
    }

    pub fn get(&self, pos: Dims) -> Option<Tile> {
        self.tiles.get(pos).copied()
    }

    /// Sets the tile at `pos`, returns `false` if it's out of bounds.
    pub fn set(&mut self, pos: Dims, tile: Tile) -> bool {
        match self.tiles.get_mut(pos) {
            Some(slot) => {
                *slot = tile;
                true
            }
            None => false,
        }
    }

    pub fn is_passage(&self, pos: Dims) -> bool {
        self.get(pos).is_some_and(Tile::is_passage)
    }

    pub fn is_wall(&self, pos: Dims) -> bool {
        self.get(pos) == Some(Tile::Wall)
    }

    pub fn tiles(&self) -> &Array2D<Tile> {
        &self.tiles
    }

    pub fn passage_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_passage()).count()
    }

    /// Passage cells connected to `from` through 4-adjacent passages.
    ///
    /// All `false` if `from` is a wall or out of bounds.
    pub fn reachable_from(&self, from: Dims) -> Array2D<bool> {
        let mut reached = Array2D::new(false, self.rows(), self.cols());
        if !self.is_passage(from) {
            return reached;
        }

        let mut queue = VecDeque::from([from]);
        reached[from] = true;
        while let Some(pos) = queue.pop_front() {
            for dir in Dims::CARDINALS {
                let next = pos + dir;
                if self.is_passage(next) && !reached[next] {
                    reached[next] = true;
                    queue.push_back(next);
                }
            }
        }

        reached
    }

    /// Checks that the passages reachable from `from` form a tree, so there is exactly one
    /// simple path between any two of them.
    pub fn is_perfect_from(&self, from: Dims) -> bool {
        let reached = self.reachable_from(from);

        let nodes = reached.iter().filter(|&&r| r).count();
        if nodes == 0 {
            return false;
        }

        // count each edge once, looking only right and down
        let edges = reached
            .iter_pos()
            .filter(|&pos| reached[pos])
            .map(|pos| {
                [Dims::RIGHT, Dims::DOWN]
                    .into_iter()
                    .filter(|&dir| reached.get(pos + dir).copied().unwrap_or(false))
                    .count()
            })
            .sum::<usize>();

        edges + 1 == nodes
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.rows_iter() {
            for tile in row {
                let ch = match tile {
                    Tile::Wall => '#',
                    Tile::Passage => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
