use crate::error::Error;
use crate::grid::{Cell, Grid};

/// Extract the centered `dimension × dimension` window of the grid, in
/// row-major visible order.
///
/// This is the read side of a display layer: the window says which cells to
/// draw and in what order, and each cell carries its stable id so clicks on
/// the rendered window can be routed back to the full board. Extraction is
/// pure and never touches simulation state.
///
/// `dimension` must be in `1..=side`; `dimension == side` returns the whole
/// grid in storage order.
pub fn centered_window(grid: &Grid, dimension: usize) -> Result<Vec<Cell>, Error> {
    let side = grid.side();
    if dimension == 0 || dimension > side {
        return Err(Error::InvalidViewport { dimension, side });
    }

    let left = (side - dimension) / 2;
    let mut cells = Vec::with_capacity(dimension * dimension);

    for row in left..left + dimension {
        for col in left..left + dimension {
            cells.push(grid.cells[row * side + col]);
        }
    }

    Ok(cells)
}
