use crate::error::Error;
use crate::grid::{Cell, Grid};
use crate::viewport;

/// Advances an edge-bounded board one generation at a time under B3/S23.
///
/// Every neighbor count is taken against a frozen view of the current
/// generation: the step first scans the whole board collecting the cells to
/// kill and the cells to bring to life, then applies both lists at once, so
/// no cell's update can see another cell's update from the same step.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
}

impl Simulation {
    /// An all-dead board at generation zero.
    pub fn new(side: usize) -> Self {
        Self {
            grid: Grid::new(side),
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Completed generation count. Starts at 0, +1 per `step`, never on
    /// edits or lifecycle transitions.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> u64 {
        self.grid.population()
    }

    /// Bounds-checked write of a single cell.
    pub fn set(&mut self, index: usize, alive: bool) -> Result<(), Error> {
        self.grid.set(index, alive)
    }

    /// Flip a single cell, returning the new liveness.
    pub fn toggle(&mut self, index: usize) -> Result<bool, Error> {
        self.grid.toggle(index)
    }

    /// Place a pattern of `(row, col)` offsets around a center cell.
    pub fn place_pattern(&mut self, pattern: &[(i32, i32)], center: Option<(usize, usize)>) {
        self.grid.place_pattern(pattern, center);
    }

    /// Fill the board with random cells at the given density.
    pub fn randomize(&mut self, density: f64) {
        self.grid.randomize(density);
    }

    /// Advance the board by exactly one generation.
    pub fn step(&mut self) {
        let side = self.grid.side;
        let mut births = Vec::new();
        let mut deaths = Vec::new();

        for cell in &self.grid.cells {
            let count = live_neighbors(&self.grid.cells, side, cell.id);
            if cell.alive {
                if count != 2 && count != 3 {
                    deaths.push(cell.id);
                }
            } else if count == 3 {
                births.push(cell.id);
            }
        }

        for &id in &births {
            self.grid.cells[id].alive = true;
        }
        for &id in &deaths {
            self.grid.cells[id].alive = false;
        }

        self.generation += 1;
    }

    /// Return to the initial state: all cells dead, generation zero.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Centered window of cells for display.
    pub fn visible_cells(&self, dimension: usize) -> Result<Vec<Cell>, Error> {
        viewport::centered_window(&self.grid, dimension)
    }
}

/// Count live neighbors of the cell at `index` on an edge-bounded board.
///
/// Candidates outside the board are not neighbors: nothing wraps, so a cell
/// in the last column of row `r` is not adjacent to the first column of row
/// `r + 1` even though their flat indices differ by one, and corner cells
/// have only 3 neighbors.
fn live_neighbors(cells: &[Cell], side: usize, index: usize) -> u8 {
    let row = (index / side) as i64;
    let col = (index % side) as i64;
    let side = side as i64;
    let mut count = 0;

    for dr in -1i64..=1 {
        for dc in -1i64..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = row + dr;
            let c = col + dc;
            if r < 0 || r >= side || c < 0 || c >= side {
                continue;
            }
            if cells[(r * side + c) as usize].alive {
                count += 1;
            }
        }
    }
    count
}
