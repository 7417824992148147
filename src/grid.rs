use rand::Rng;

use crate::error::Error;

/// Default board side length (square).
pub const GRID_SIZE: usize = 90;

/// A single cell: a stable flat index plus its current liveness.
///
/// The `id` is the cell's row-major position in the grid and never changes;
/// an embedding layer can hand it back (e.g. from a click handler) to address
/// the cell. Only `alive` is ever mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub id: usize,
    pub alive: bool,
}

/// Square board stored as a flat row-major vector of cells.
///
/// The board is edge-bounded: cells in the first and last rows and columns
/// simply have fewer neighbors, nothing wraps around. The side length is
/// fixed at construction; element `k` represents row `k / side`, column
/// `k % side`.
#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) side: usize,
    pub(crate) cells: Vec<Cell>,
}

impl Grid {
    /// A board of `side * side` dead cells with ids assigned in index order.
    pub fn new(side: usize) -> Self {
        let cells = (0..side * side).map(|id| Cell { id, alive: false }).collect();
        Self { side, cells }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Total cell count (`side * side`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major storage order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Read the cell at a flat index.
    pub fn get(&self, index: usize) -> Result<Cell, Error> {
        self.cells.get(index).copied().ok_or(Error::OutOfRange {
            index,
            len: self.cells.len(),
        })
    }

    /// Bounds-checked write of a single cell's liveness.
    pub fn set(&mut self, index: usize, alive: bool) -> Result<(), Error> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })?;
        cell.alive = alive;
        Ok(())
    }

    /// Flip a cell's liveness, returning the new state.
    pub fn toggle(&mut self, index: usize) -> Result<bool, Error> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })?;
        cell.alive = !cell.alive;
        Ok(cell.alive)
    }

    /// Kill every cell. Ids are untouched.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.alive = false;
        }
    }

    /// Fill with random cells at the given density (0.0 = empty, 1.0 = full).
    pub fn randomize(&mut self, density: f64) {
        let mut rng = rand::thread_rng();
        for cell in &mut self.cells {
            cell.alive = rng.gen_range(0.0..1.0) < density;
        }
    }

    /// Count live cells.
    pub fn population(&self) -> u64 {
        self.cells.iter().filter(|c| c.alive).count() as u64
    }

    /// Place a pattern of `(row, col)` offsets around a center cell
    /// (center of the board if `None`).
    ///
    /// Offsets landing outside the board are clipped, not wrapped.
    pub fn place_pattern(&mut self, pattern: &[(i32, i32)], center: Option<(usize, usize)>) {
        let (cr, cc) = center.unwrap_or((self.side / 2, self.side / 2));
        for &(dr, dc) in pattern {
            let r = cr as i64 + dr as i64;
            let c = cc as i64 + dc as i64;
            if r < 0 || c < 0 || r >= self.side as i64 || c >= self.side as i64 {
                continue;
            }
            self.cells[(r as usize) * self.side + c as usize].alive = true;
        }
    }
}

// ── Predefined patterns ──

/// Block: the smallest still life.
pub fn pattern_block() -> Vec<(i32, i32)> {
    vec![(0, 0), (0, 1), (1, 0), (1, 1)]
}

/// Blinker: the smallest oscillator (period 2).
pub fn pattern_blinker() -> Vec<(i32, i32)> {
    vec![(-1, 0), (0, 0), (1, 0)]
}

/// Glider: small, moving pattern.
pub fn pattern_glider() -> Vec<(i32, i32)> {
    vec![(-1, 0), (0, 1), (1, -1), (1, 0), (1, 1)]
}
