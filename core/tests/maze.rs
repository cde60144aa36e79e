use mazepath_core::{generate_maze, shortest_path, Dims, Grid, MazeSize, Random, Tile};
use rand::SeedableRng as _;

#[test]
fn three_by_three_maze_has_open_corners() {
    for seed in 0..100 {
        let mut rng = Random::seed_from_u64(seed);
        let grid = generate_maze(MazeSize::new(3, 3).unwrap(), &mut rng);
        assert_eq!(grid.get(Dims(0, 0)), Some(Tile::Passage));
        assert_eq!(grid.get(Dims(2, 2)), Some(Tile::Passage));
    }
}

#[test]
fn every_cell_is_wall_or_passage() {
    let mut rng = Random::seed_from_u64(5);
    let grid = generate_maze(MazeSize::new(8, 13).unwrap(), &mut rng);
    let values = grid.to_values();
    assert_eq!(values.len(), 8);
    assert!(values.iter().all(|row| row.len() == 13));
    assert!(values.iter().flatten().all(|&v| v == 0 || v == 1));
    assert_eq!(values[7][12], 0);
}

#[test]
fn generated_maze_path_is_unique() {
    let size = MazeSize::new(21, 31).unwrap();
    let mut rng = Random::seed_from_u64(2024);
    let grid = generate_maze(size, &mut rng);
    assert!(grid.is_perfect_from(size.start()));

    // in a perfect maze every seed finds the very same cells
    let first = shortest_path(&grid, size.start(), size.end(), &mut rng).unwrap();
    for seed in 0..5 {
        let mut rng = Random::seed_from_u64(seed);
        let again = shortest_path(&grid, size.start(), size.end(), &mut rng).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn external_value_grid_can_be_solved() {
    let values = [
        [0u8, 0, 0, 1],
        [1, 1, 0, 1],
        [0, 0, 0, 0],
        [0, 1, 1, 0],
    ];
    let grid = Grid::from_values(&values).unwrap();
    let mut rng = Random::seed_from_u64(0);
    let path = shortest_path(&grid, Dims(0, 0), Dims(3, 3), &mut rng).unwrap();
    assert_eq!(path.len(), 7);

    let blocked = Grid::from_values(&[[0u8, 1], [1, 0]]).unwrap();
    let path = shortest_path(&blocked, Dims(0, 0), Dims(1, 1), &mut rng).unwrap();
    assert!(path.is_empty());
}
