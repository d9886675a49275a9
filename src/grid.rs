//! Rectangular grid storage.
//!
//! This module contains the [`Grid`] container the pathfinder walks over. Cells are stored in a
//! single row-major vector, so the grid is rectangular by construction and a coordinate maps to a
//! flat index with one multiplication.

use std::{slice::ChunksExact, str::FromStr};

use crate::{error::GridError, types::Coordinate};

/// Rectangular grid of cell markers.
///
/// The grid always holds at least one cell and every row has the same width. Both invariants are
/// checked when the grid is built and never change afterwards, since the grid is immutable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    /// Cell markers in row-major order.
    cells: Vec<T>,
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
}

impl<T> Grid<T> {
    /// Builds a grid from a list of rows.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - There are no rows, or the first row is empty ([`GridError::EmptyGrid`])
    /// - Some row is not as wide as the first one ([`GridError::InvalidGrid`])
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::EmptyGrid);
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::InvalidGrid {
                row,
                expected: width,
                found,
            });
        }

        let height = rows.len();
        let cells = rows.into_iter().flatten().collect();

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid holds at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if the coordinate lies inside the grid.
    #[must_use]
    pub const fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.width && coordinate.y < self.height
    }

    /// Returns the marker stored at `coordinate`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, coordinate: Coordinate) -> Option<&T> {
        self.index(coordinate)
            .and_then(|index| self.cells.get(index))
    }

    /// Returns an iterator over the rows of the grid, top to bottom.
    pub fn rows(&self) -> ChunksExact<'_, T> {
        self.cells.chunks_exact(self.width)
    }

    /// Returns an iterator over every coordinate whose marker satisfies `predicate`.
    pub fn positions<'grid, P>(
        &'grid self,
        mut predicate: P,
    ) -> impl Iterator<Item = Coordinate> + 'grid
    where
        P: FnMut(&T) -> bool + 'grid,
    {
        let width = self.width;

        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, cell)| predicate(cell))
            .map(move |(index, _)| Coordinate::new(index % width, index / width))
    }

    /// Maps a coordinate to its position in the row-major cell vector.
    pub(crate) const fn index(&self, coordinate: Coordinate) -> Option<usize> {
        if self.contains(coordinate) {
            Some(coordinate.y * self.width + coordinate.x)
        } else {
            None
        }
    }

    /// Maps a coordinate to its flat index, failing with [`GridError::OutOfBounds`] outside the
    /// grid.
    pub(crate) const fn checked_index(&self, coordinate: Coordinate) -> Result<usize, GridError> {
        match self.index(coordinate) {
            Some(index) => Ok(index),
            None => Err(GridError::OutOfBounds {
                coordinate,
                width: self.width,
                height: self.height,
            }),
        }
    }
}

impl<T: PartialEq> Grid<T> {
    /// Returns `true` if the coordinate lies inside the grid and is not a wall.
    #[must_use]
    pub fn is_open(&self, coordinate: Coordinate, wall: &T) -> bool {
        self.get(coordinate).is_some_and(|cell| cell != wall)
    }
}

impl Grid<char> {
    /// Builds a character grid from string rows, one cell per `char`.
    ///
    /// # Errors
    ///
    /// This function fails under the same conditions as [`Grid::new`].
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        Self::new(
            rows.iter()
                .map(|row| row.as_ref().chars().collect())
                .collect(),
        )
    }
}

impl FromStr for Grid<char> {
    type Err = GridError;

    /// Parses a maze written one row per line.
    ///
    /// Line terminators are dropped; every other character, spaces included, becomes a cell.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::new(input.lines().map(|line| line.chars().collect()).collect())
    }
}
