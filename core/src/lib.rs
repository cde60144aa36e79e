pub mod algorithms;
pub mod array;
pub mod dims;
pub mod grid;
pub mod solver;

pub use algorithms::{generate_maze, GenError, MazeGenerator, MazeSize, Random};
pub use dims::Dims;
pub use grid::{Grid, GridError, Tile};
pub use solver::{shortest_path, Path, SolveError};
