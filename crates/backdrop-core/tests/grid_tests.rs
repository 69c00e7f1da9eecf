use glam::Vec2;
use backdrop_core::grid::SpatialGrid;

#[test]
fn test_grid_build_and_query() {
    let mut grid = SpatialGrid::new(100.0);

    // Two close particles, one far
    let positions = vec![
        Vec2::new(10.0, 10.0),
        Vec2::new(120.0, 20.0),
        Vec2::new(900.0, 900.0),
    ];

    grid.build(&positions, 1000.0, 1000.0);
    assert_eq!(grid.cols(), 10);
    assert_eq!(grid.rows(), 10);

    let (col, row) = grid.cell_of(positions[0]);
    let neighbors = grid.neighbors(col, row);

    assert!(neighbors.contains(&0), "should find self");
    assert!(neighbors.contains(&1), "should find particle in adjacent cell");
    assert!(!neighbors.contains(&2), "should NOT find far particle");
}

#[test]
fn test_grid_all_particles_found() {
    let mut grid = SpatialGrid::new(150.0);

    let mut positions = Vec::new();
    for i in 0..500 {
        let t = i as f32 / 500.0;
        positions.push(Vec2::new(
            (t * 7919.0) % 1920.0,
            (t * 104729.0) % 1080.0,
        ));
    }

    grid.build(&positions, 1920.0, 1080.0);

    for i in 0..500 {
        let (col, row) = grid.cell_of(positions[i]);
        assert!(
            grid.cell(col, row).contains(&(i as u32)),
            "particle {} not found in its own cell",
            i
        );
    }
}

#[test]
fn test_grid_every_particle_in_exactly_one_cell() {
    let mut grid = SpatialGrid::new(50.0);
    let positions: Vec<Vec2> = (0..64)
        .map(|i| Vec2::new((i * 37 % 300) as f32, (i * 53 % 200) as f32))
        .collect();
    grid.build(&positions, 300.0, 200.0);

    let mut seen = vec![0u32; positions.len()];
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            for &idx in grid.cell(col, row) {
                seen[idx as usize] += 1;
            }
        }
    }
    assert!(seen.iter().all(|&n| n == 1), "{:?}", seen);
}

#[test]
fn test_grid_empty() {
    let mut grid = SpatialGrid::new(100.0);
    grid.build(&[], 500.0, 500.0);

    assert!(grid.neighbors(0, 0).is_empty());
}

#[test]
fn test_grid_zero_sized_surface_has_one_cell() {
    let mut grid = SpatialGrid::new(100.0);
    grid.build(&[Vec2::ZERO, Vec2::new(3.0, 3.0)], 0.0, 0.0);

    assert_eq!((grid.cols(), grid.rows()), (1, 1));
    assert_eq!(grid.cell(0, 0).len(), 2);
}

#[test]
fn test_grid_rebuild() {
    let mut grid = SpatialGrid::new(100.0);

    let pos1 = vec![Vec2::new(0.0, 0.0), Vec2::new(450.0, 450.0)];
    grid.build(&pos1, 500.0, 500.0);

    let pos2 = vec![Vec2::new(450.0, 450.0), Vec2::new(0.0, 0.0)];
    grid.build(&pos2, 500.0, 500.0);

    let neighbors = grid.neighbors(0, 0);
    assert!(neighbors.contains(&1), "should find particle 1 at origin after rebuild");
    assert!(!neighbors.contains(&0), "stale entry from previous build");
}

#[test]
fn test_grid_edge_particles_are_clamped() {
    let mut grid = SpatialGrid::new(100.0);

    // Exactly on the far edge and slightly outside on both axes
    let positions = vec![
        Vec2::new(500.0, 300.0),
        Vec2::new(-2.0, -2.0),
        Vec2::new(650.0, 10.0),
    ];
    grid.build(&positions, 500.0, 300.0);

    assert_eq!(grid.cell_of(positions[0]), (4, 2));
    assert_eq!(grid.cell_of(positions[1]), (0, 0));
    assert_eq!(grid.cell_of(positions[2]), (4, 0));
    assert!(grid.cell(4, 2).contains(&0));
    assert!(grid.cell(0, 0).contains(&1));
    assert!(grid.cell(4, 0).contains(&2));
}

#[test]
fn test_grid_neighbors_clipped_at_corner() {
    let mut grid = SpatialGrid::new(100.0);
    let positions = vec![
        Vec2::new(50.0, 50.0),   // (0,0)
        Vec2::new(150.0, 150.0), // (1,1)
        Vec2::new(250.0, 50.0),  // (2,0)
    ];
    grid.build(&positions, 300.0, 300.0);

    let mut corner = grid.neighbors(0, 0);
    corner.sort();
    assert_eq!(corner, vec![0, 1]);
}

#[test]
fn test_grid_out_of_range_cell_is_empty() {
    let mut grid = SpatialGrid::new(100.0);
    grid.build(&[Vec2::new(10.0, 10.0)], 200.0, 200.0);
    assert!(grid.cell(5, 5).is_empty());
}
