//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::types::Coordinate;

/// Command-line arguments for the maze solver.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Maze file, one grid row per line. The built-in corridor maze is solved when omitted.
    pub maze: Option<PathBuf>,

    /// Character that marks an impassable cell.
    #[arg(short, long, default_value_t = 'x')]
    pub wall: char,

    /// Start cell as `x,y`, where x is the column and y the row. Required with a maze file.
    #[arg(short, long, value_name = "X,Y")]
    pub start: Option<Coordinate>,

    /// Goal cell as `x,y`, where x is the column and y the row. Required with a maze file.
    #[arg(short, long, value_name = "X,Y")]
    pub goal: Option<Coordinate>,

    /// Character drawn over the cells of the path.
    #[arg(short, long, default_value_t = '*')]
    pub marker: char,

    /// Show the solved maze in an interactive terminal view instead of printing it.
    #[arg(short, long)]
    pub interactive: bool,

    /// Log more; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log errors only.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Returns the log level selected by the verbosity flags.
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
