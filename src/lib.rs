//! Shortest paths through walled grids.
//!
//! The heart of this crate is [`find_path`], a breadth-first search over a rectangular [`Grid`]
//! that moves one cell up, right, down or left at a time and never enters a wall. The rest of the
//! crate is the front end of the `mazepath` binary: loading maze files, command-line parsing,
//! logging, and printing or interactively showing the solved maze.
//!
//! A maze is usually parsed from text, one row per line, as a `Grid<char>`; calling
//! `find_path(&maze, &'x', start, goal)` then returns the cells of a shortest route, both ends
//! included, or an empty vector when the walls cut the goal off.

mod app;
mod cli;
mod error;
mod events;
mod file_loader;
mod grid;
mod logging;
mod pathfinding;
mod types;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use error::{GridError, ParseCoordinateError};
pub use grid::Grid;
pub use logging::init_logging;
pub use pathfinding::find_path;
pub use types::{Coordinate, Direction, Path};
