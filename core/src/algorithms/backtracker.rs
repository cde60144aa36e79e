use rand::{seq::SliceRandom as _, Rng};
use smallvec::SmallVec;

use super::{MazeGenerator, MazeSize};
use crate::{
    dims::Dims,
    grid::{Grid, Tile},
};

/// Randomized depth-first carving with an explicit stack.
///
/// Works on a half resolution lattice: it jumps two cells at a time and opens the cell in
/// between, so corridors always have walls between them. Every cell it reaches is part of
/// a single spanning tree rooted at `(0, 0)`.
///
/// After carving, the bottom-right corner is opened unconditionally. With even dimensions
/// that corner is off the lattice and stays disconnected from the rest of the maze.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveBacktracker;

impl RecursiveBacktracker {
    fn unvisited_neighbors(grid: &Grid, cell: Dims) -> SmallVec<[Dims; 4]> {
        Dims::CARDINALS
            .into_iter()
            .map(|dir| cell + dir * 2)
            .filter(|&next| grid.is_wall(next))
            .collect()
    }
}

impl MazeGenerator for RecursiveBacktracker {
    fn generate<R: Rng + ?Sized>(&self, size: MazeSize, rng: &mut R) -> Grid {
        log::debug!("Generating {} maze", size);

        let mut grid = Grid::filled(Tile::Wall, size.rows(), size.cols());
        let mut stack = Vec::with_capacity(size.cell_count() / 4 + 1);
        let mut max_depth = 0;

        let start = size.start();
        grid.set(start, Tile::Passage);
        stack.push(start);

        while let Some(&current) = stack.last() {
            let neighbors = Self::unvisited_neighbors(&grid, current);

            if let Some(&next) = neighbors.choose(rng) {
                grid.set((current + next) / 2, Tile::Passage);
                grid.set(next, Tile::Passage);
                stack.push(next);
                max_depth = max_depth.max(stack.len());
            } else {
                stack.pop();
            }
        }

        grid.set(size.end(), Tile::Passage);

        log::trace!("Deepest backtrack stack: {}", max_depth);
        log::debug!("Carved {} passages", grid.passage_count());

        grid
    }
}
