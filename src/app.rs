//! Core application state for the maze solver front end.

use std::io::Write;

use color_eyre::eyre::{OptionExt as _, Result};
use log::info;
use ratatui::DefaultTerminal;

use crate::{
    cli::Cli,
    events,
    file_loader::{self, DEFAULT_GOAL, DEFAULT_START},
    grid::Grid,
    pathfinding::find_path,
    types::{Coordinate, Path},
    ui,
};

/// Application state for a solved maze.
///
/// This structure holds the maze, the endpoints the user asked for and the path found between
/// them. The path is computed once, when the application is built, and both the plain-text output
/// and the interactive view render from it.
pub struct App {
    /// Application exit flag.
    ///
    /// This field is set to `true` when the user quits the interactive view.
    pub(crate) exit: bool,
    /// Maze being solved.
    pub(crate) grid: Grid<char>,
    /// Character marking walls in `grid`.
    pub(crate) wall: char,
    /// Character drawn over path cells in the plain-text output.
    pub(crate) marker: char,
    /// Cell the path starts from.
    pub(crate) start: Coordinate,
    /// Cell the path leads to.
    pub(crate) goal: Coordinate,
    /// Shortest path from `start` to `goal`, empty if there is none.
    pub(crate) path: Path,
}

impl App {
    /// Loads the maze selected on the command line and solves it.
    ///
    /// Without a maze file the built-in corridor maze is used, and missing endpoints fall back to
    /// its two openings.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The maze file cannot be read or is not a rectangular grid
    /// - A maze file is given without both `--start` and `--goal`
    /// - The start or goal lies outside the maze
    pub fn new(cli: &Cli) -> Result<Self> {
        let (grid, start, goal) = match &cli.maze {
            Some(maze) => (
                file_loader::load_grid(maze)?,
                cli.start
                    .ok_or_eyre("a start cell (--start x,y) is required with a maze file")?,
                cli.goal
                    .ok_or_eyre("a goal cell (--goal x,y) is required with a maze file")?,
            ),
            None => (
                file_loader::default_grid()?,
                cli.start.unwrap_or(DEFAULT_START),
                cli.goal.unwrap_or(DEFAULT_GOAL),
            ),
        };

        let path = find_path(&grid, &cli.wall, start, goal)?;
        info!("{}", summary(&path, start, goal));

        Ok(Self {
            exit: false,
            grid,
            wall: cli.wall,
            marker: cli.marker,
            start,
            goal,
            path,
        })
    }

    /// Returns the path found between the start and the goal.
    #[must_use]
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    /// Returns a one-line description of the search result.
    #[must_use]
    pub fn summary(&self) -> String {
        summary(&self.path, self.start, self.goal)
    }

    /// Writes the maze with the path drawn over it, followed by the summary line.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn print<W: Write>(&self, out: &mut W) -> Result<()> {
        for row in ui::overlay_path(&self.grid, &self.path, self.marker) {
            writeln!(out, "{row}")?;
        }
        writeln!(out, "{}", self.summary())?;

        Ok(())
    }

    /// Runs the interactive view until the user quits.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}

/// Describes a search result: its step count, or that no path exists.
fn summary(path: &[Coordinate], start: Coordinate, goal: Coordinate) -> String {
    if path.is_empty() {
        format!("no path from {start} to {goal}")
    } else {
        format!("steps: {}", path.len() - 1)
    }
}
