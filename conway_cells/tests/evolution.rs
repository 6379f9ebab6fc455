//! Grid behaviour observed only through the public API.
use conway_cells::font::{self, Font};
use conway_cells::{Grid, GridSize};

fn alive_cells(grid: &Grid) -> Vec<(u16, u16)> {
    let size = grid.size();
    (0..size.rows)
        .flat_map(|row| (0..size.columns).map(move |col| (row, col)))
        .filter(|&(row, col)| grid.is_alive(row, col))
        .collect()
}

fn stencil_cells(font: &Font, row: u16, col: u16, size: GridSize) -> Vec<(u16, u16)> {
    let mut cells = Vec::new();
    for r in 0..font.height {
        for c in 0..font.width {
            if font.is_set(r, c) {
                cells.push(((row + r) % size.rows, (col + c) % size.columns));
            }
        }
    }
    cells.sort();
    cells
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_steps() {
    let size = GridSize::new(16, 16);
    let mut grid = Grid::new(size).unwrap();
    grid.blit(&font::GLIDER_SE, 4, 4);

    for _ in 0..4 {
        assert!(grid.evolve());
    }
    assert_eq!(alive_cells(&grid), stencil_cells(&font::GLIDER_SE, 5, 5, size));
}

#[test]
fn glider_crosses_the_corner_of_the_torus() {
    let size = GridSize::new(8, 8);
    let mut grid = Grid::new(size).unwrap();
    grid.blit(&font::GLIDER_SE, 6, 6);

    for _ in 0..4 {
        grid.evolve();
    }
    assert_eq!(alive_cells(&grid), stencil_cells(&font::GLIDER_SE, 7, 7, size));
    assert_eq!(grid.population(), 5);
}

#[test]
fn every_heading_keeps_gliding() {
    let size = GridSize::new(20, 20);
    let headings: [(&Font, i32, i32); 4] = [
        (&font::GLIDER_SE, 1, 1),
        (&font::GLIDER_SW, 1, -1),
        (&font::GLIDER_NE, -1, 1),
        (&font::GLIDER_NW, -1, -1),
    ];
    for (glider, dr, dc) in headings {
        let mut grid = Grid::new(size).unwrap();
        grid.blit(glider, 8, 8);
        for _ in 0..4 {
            grid.evolve();
        }
        let row = (8 + dr) as u16;
        let col = (8 + dc) as u16;
        assert_eq!(alive_cells(&grid), stencil_cells(glider, row, col, size), "{}", glider.name);
    }
}

#[test]
fn spaceships_travel_east_without_stagnating() {
    for ship in font::SPACESHIPS {
        let size = GridSize::new(15, 30);
        let mut grid = Grid::new(size).unwrap();
        grid.blit(ship, 5, 4);
        for _ in 0..4 {
            assert!(grid.evolve(), "{}", ship.name);
        }
        assert_eq!(alive_cells(&grid), stencil_cells(ship, 5, 6, size), "{}", ship.name);
    }
}

#[test]
fn cell_at_top_edge_sees_neighbour_on_bottom_row() {
    let size = GridSize::new(10, 12);
    let mut grid = Grid::new(size).unwrap();
    grid.set_cell(0, 5, true);
    grid.set_cell(9, 5, true);
    assert_eq!(grid.live_neighbors(0, 5), 1);
    assert_eq!(grid.live_neighbors(9, 5), 1);
}

#[test]
fn blinker_across_the_seam_still_oscillates() {
    let mut grid = Grid::new(GridSize::new(6, 6)).unwrap();
    for row in [-1, 0, 1] {
        grid.set_cell(row, 0, true);
    }
    assert!(grid.evolve());
    assert_eq!(alive_cells(&grid), vec![(0, 0), (0, 1), (0, 5)]);
    assert!(!grid.evolve());
}

#[test]
fn long_cycles_go_unnoticed() {
    // A lone glider on a 6x6 torus returns home after 24 generations, far
    // beyond the remembered history.
    let mut grid = Grid::new(GridSize::new(6, 6)).unwrap();
    grid.blit(&font::GLIDER_SE, 0, 0);
    for _ in 0..24 {
        assert!(grid.evolve());
    }
}
