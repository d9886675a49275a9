//! Loading of maze files and the built-in default maze.

use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr as _};
use log::info;

use crate::{grid::Grid, types::Coordinate};

/// Default maze used when no file is given.
///
/// This corridor maze has a single route between the opening in its top row and the opening in
/// its bottom row.
pub(crate) const DEFAULT_MAZE: &str = "\
xxxxxxxxxx x
x        x x
x        x x
x xxxxxxxx x
x          x
x xxxxxxxxxx";

/// Start cell of the default maze, the opening in its top row.
pub(crate) const DEFAULT_START: Coordinate = Coordinate::new(10, 0);

/// Goal cell of the default maze, the opening in its bottom row.
pub(crate) const DEFAULT_GOAL: Coordinate = Coordinate::new(1, 5);

/// Reads and parses a maze file.
///
/// The file holds one grid row per line. Leading and trailing whitespace is kept, since spaces are
/// usually open cells.
///
/// # Errors
///
/// This function may return errors if:
/// - The file cannot be read as UTF-8 text
/// - The contents are not a rectangular, non-empty grid
pub(crate) fn load_grid(path: &Path) -> Result<Grid<char>> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read maze file {}", path.display()))?;

    let grid: Grid<char> = contents
        .parse()
        .wrap_err_with(|| format!("failed to parse maze file {}", path.display()))?;

    info!(
        "loaded {}x{} maze from {}",
        grid.width(),
        grid.height(),
        path.display()
    );

    Ok(grid)
}

/// Parses the built-in default maze.
///
/// # Errors
///
/// This function only fails if the built-in maze constant is malformed.
pub(crate) fn default_grid() -> Result<Grid<char>> {
    DEFAULT_MAZE
        .parse()
        .wrap_err("failed to parse the built-in maze")
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::GridError;

    #[test]
    fn test_default_grid() {
        let grid = default_grid().expect("built-in maze should parse");

        assert_eq!(grid.width(), 12);
        assert_eq!(grid.height(), 6);
        assert!(grid.is_open(DEFAULT_START, &'x'));
        assert!(grid.is_open(DEFAULT_GOAL, &'x'));
    }

    #[test]
    fn test_load_grid_from_file() {
        let mut file = NamedTempFile::new().expect("failed to create temp file");
        write!(file, "x x\n   \nx x\n").expect("failed to write temp file");

        let grid = load_grid(file.path()).expect("maze file should load");

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert!(grid.is_open(Coordinate::new(0, 1), &'x'));
        assert!(!grid.is_open(Coordinate::new(0, 0), &'x'));
    }

    #[test]
    fn test_load_grid_keeps_edge_spaces() {
        let mut file = NamedTempFile::new().expect("failed to create temp file");
        write!(file, "   \nxx \n").expect("failed to write temp file");

        let grid = load_grid(file.path()).expect("maze file should load");

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get(Coordinate::new(0, 0)), Some(&' '));
    }

    #[test]
    fn test_load_grid_missing_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");

        let result = load_grid(&dir.path().join("missing.maze"));

        assert!(result.is_err(), "missing file should fail to load");
    }

    #[test]
    fn test_load_grid_ragged_file() {
        let mut file = NamedTempFile::new().expect("failed to create temp file");
        write!(file, "xxx\nx\nxxx").expect("failed to write temp file");

        let error = load_grid(file.path()).expect_err("ragged maze should be rejected");

        assert_eq!(
            error.downcast_ref::<GridError>(),
            Some(&GridError::InvalidGrid {
                row: 1,
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn test_load_grid_empty_file() {
        let file = NamedTempFile::new().expect("failed to create temp file");

        let error = load_grid(file.path()).expect_err("empty maze should be rejected");

        assert_eq!(error.downcast_ref::<GridError>(), Some(&GridError::EmptyGrid));
    }
}
