//! Error types for grid construction, coordinate parsing and path queries.

use thiserror::Error;

use crate::types::Coordinate;

/// Errors raised when a grid is malformed or queried outside its bounds.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows, or its rows have no cells.
    #[error("grid has no cells")]
    EmptyGrid,
    /// A row is not as wide as the first row.
    #[error("row {row} is {found} cells wide, expected {expected}")]
    InvalidGrid {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A coordinate lies outside the grid.
    #[error("{coordinate} lies outside the {width}x{height} grid")]
    OutOfBounds {
        /// Coordinate that was requested.
        coordinate: Coordinate,
        /// Number of columns in the grid.
        width: usize,
        /// Number of rows in the grid.
        height: usize,
    },
}

/// Error returned when a string is not a coordinate of the form `x,y`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("expected a coordinate of the form `x,y`, found `{input}`")]
pub struct ParseCoordinateError {
    /// Text that failed to parse.
    input: String,
}

impl ParseCoordinateError {
    /// Builds the error from the rejected input.
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}
