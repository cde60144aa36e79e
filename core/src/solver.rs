use std::{collections::VecDeque, ops};

use rand::{seq::SliceRandom as _, Rng};
use thiserror::Error;

use crate::{array::Array2D, dims::Dims, grid::Grid};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("cell {0} is outside of the maze")]
    OutOfBounds(Dims),
}

/// Ordered cells from start to end, both inclusive. Empty when the end can't be reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<Dims>);

impl Path {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cells(&self) -> &[Dims] {
        &self.0
    }

    pub fn start(&self) -> Option<Dims> {
        self.0.first().copied()
    }

    pub fn end(&self) -> Option<Dims> {
        self.0.last().copied()
    }

    /// Marks every cell of the path in a grid sized mask.
    pub fn to_mask(&self, size: Dims) -> Array2D<bool> {
        let mut mask = Array2D::new_dims(false, size).unwrap_or_else(|| Array2D::new(false, 0, 0));
        for &pos in &self.0 {
            if let Some(cell) = mask.get_mut(pos) {
                *cell = true;
            }
        }
        mask
    }
}

impl ops::Deref for Path {
    type Target = [Dims];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// BFS tree node, `parent` is an index into the same arena.
#[derive(Debug, Clone, Copy)]
struct PathNode {
    pos: Dims,
    parent: Option<usize>,
}

fn build_path(arena: &[PathNode], mut idx: usize) -> Path {
    let mut cells = Vec::new();
    loop {
        let node = arena[idx];
        cells.push(node.pos);
        match node.parent {
            Some(parent) => idx = parent,
            None => break,
        }
    }
    cells.reverse();
    Path(cells)
}

/// Finds a shortest path between `start` and `end` through passages, moving in the four
/// cardinal directions.
///
/// Neighbors are expanded in an order shuffled by `rng`, so when several shortest paths
/// exist the returned one depends on the rng. Its length never does.
///
/// The start cell itself isn't required to be a passage.
pub fn shortest_path<R: Rng + ?Sized>(
    grid: &Grid,
    start: Dims,
    end: Dims,
    rng: &mut R,
) -> Result<Path, SolveError> {
    for pos in [start, end] {
        if !grid.is_in_bounds(pos) {
            return Err(SolveError::OutOfBounds(pos));
        }
    }

    let mut visited = Array2D::new(false, grid.rows(), grid.cols());
    let mut arena = Vec::with_capacity(grid.rows() * grid.cols());
    let mut queue = VecDeque::new();

    arena.push(PathNode {
        pos: start,
        parent: None,
    });
    visited[start] = true;
    queue.push_back(0);

    let mut directions = Dims::CARDINALS;
    while let Some(current) = queue.pop_front() {
        let pos = arena[current].pos;
        if pos == end {
            let path = build_path(&arena, current);
            log::debug!(
                "Found path of {} cells, expanded {} nodes",
                path.len(),
                arena.len()
            );
            return Ok(path);
        }

        directions.shuffle(rng);
        for dir in directions {
            let next = pos + dir;
            if grid.is_passage(next) && !visited[next] {
                visited[next] = true;
                arena.push(PathNode {
                    pos: next,
                    parent: Some(current),
                });
                queue.push_back(arena.len() - 1);
            }
        }
    }

    log::debug!("No path from {} to {}, expanded {} nodes", start, end, arena.len());
    Ok(Path::empty())
}
