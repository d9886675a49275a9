//! Value types shared by the grid, the pathfinder and the front end.

use std::{fmt, str::FromStr};

use crate::error::ParseCoordinateError;

/// Ordered sequence of coordinates from a start cell to a goal cell.
///
/// Consecutive entries are one axis-aligned step apart. An empty path means the goal could not be
/// reached.
pub type Path = Vec<Coordinate>;

/// Position of a single grid cell.
///
/// The `x` component is the column index and the `y` component is the row index, both counted from
/// the top-left corner of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Coordinate {
    /// Builds a coordinate from a column and a row index.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring coordinate one step in `direction`.
    ///
    /// This function returns `None` when the step would leave the non-negative quadrant. It does
    /// not know about grid dimensions, so the caller still has to check the upper bounds.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();

        let Some(x) = self.x.checked_add_signed(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add_signed(dy) else {
            return None;
        };

        Some(Self { x, y })
    }

    /// Returns `true` if `other` is exactly one axis-aligned step away.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parses a coordinate written as `x,y`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let error = || ParseCoordinateError::new(input);

        let (x, y) = input.split_once(',').ok_or_else(error)?;
        let x = x.trim().parse().map_err(|_err| error())?;
        let y = y.trim().parse().map_err(|_err| error())?;

        Ok(Self { x, y })
    }
}

/// Axis-aligned movement directions.
///
/// The order of [`Direction::ALL`] is the order in which the pathfinder explores neighbours. It
/// decides which route wins when several shortest paths exist, so it must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards higher column indices.
    Right,
    /// Towards higher row indices.
    Down,
    /// Towards column 0.
    Left,
}

impl Direction {
    /// Every direction, in exploration order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Returns the `(dx, dy)` offset of a single step in this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}
