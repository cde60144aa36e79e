mod backtracker;

use std::fmt;

use rand::Rng;
use thiserror::Error;

use crate::{dims::Dims, grid::Grid};

pub use backtracker::RecursiveBacktracker;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenError {
    #[error("invalid maze size {0}x{1}, both dimensions must be at least 2")]
    InvalidSize(usize, usize),
}

/// Maze dimensions, guaranteed to be at least 2x2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MazeSize {
    rows: usize,
    cols: usize,
}

impl MazeSize {
    pub const MIN: usize = 2;

    pub fn new(rows: usize, cols: usize) -> Result<Self, GenError> {
        let fits = rows
            .checked_mul(cols)
            .is_some_and(|count| i32::try_from(count).is_ok());
        if rows < Self::MIN || cols < Self::MIN || !fits {
            return Err(GenError::InvalidSize(rows, cols));
        }

        Ok(Self { rows, cols })
    }

    pub fn rows(self) -> usize {
        self.rows
    }

    pub fn cols(self) -> usize {
        self.cols
    }

    pub fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    pub fn start(self) -> Dims {
        Dims::ZERO
    }

    /// Bottom-right corner, always a passage in a generated maze.
    pub fn end(self) -> Dims {
        Dims(self.rows as i32 - 1, self.cols as i32 - 1)
    }
}

impl fmt::Display for MazeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

pub trait MazeGenerator: fmt::Debug {
    fn generate<R: Rng + ?Sized>(&self, size: MazeSize, rng: &mut R) -> Grid;
}

/// Generates a maze with the default algorithm.
pub fn generate_maze<R: Rng + ?Sized>(size: MazeSize, rng: &mut R) -> Grid {
    RecursiveBacktracker.generate(size, rng)
}
