//! Edge-bounded Conway's Game of Life simulation core.
//!
//! The crate is the engine only: a flat-array grid store, a B3/S23
//! generation stepper with non-wrapping neighbor counts, a centered viewport
//! extraction for display layers, and a start/stop/reset lifecycle driven by
//! a background ticker. Rendering and input wiring are left to whatever
//! embeds the [`Game`].

pub mod error;
pub mod game;
pub mod grid;
pub mod simulation;
pub mod viewport;

pub use error::Error;
pub use game::{Game, RunState, TICK_INTERVAL};
pub use grid::{Cell, Grid, GRID_SIZE};
pub use simulation::Simulation;
