//! Geometry primitives: [`Cell`] and [`Action`].
//!
//! Cells are addressed `(row, col)` with the origin in the top-left corner.
//! Rows grow downwards and columns grow to the right, matching the line/char
//! order of a text layout.

use std::fmt;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid coordinate, 0-indexed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell reached by taking `action` from `self`, or `None` when the
    /// move would leave the non-negative quadrant.
    #[inline]
    pub fn step(self, action: Action) -> Option<Cell> {
        match action {
            Action::Up => Some(Self::new(self.row.checked_sub(1)?, self.col)),
            Action::Down => Some(Self::new(self.row + 1, self.col)),
            Action::Left => Some(Self::new(self.row, self.col.checked_sub(1)?)),
            Action::Right => Some(Self::new(self.row, self.col + 1)),
        }
    }

    /// The (up to) four cardinal neighbours in [`Action::ALL`] order.
    ///
    /// Cells that would fall off the top or left edge are skipped; no bound
    /// check is made on the bottom or right edge.
    pub fn neighbors_4(self) -> impl Iterator<Item = (Action, Cell)> {
        Action::ALL
            .into_iter()
            .filter_map(move |a| self.step(a).map(|c| (a, c)))
    }

    /// Signed row/column difference `other - self`.
    #[inline]
    pub fn delta(self, other: Cell) -> (i64, i64) {
        (
            other.row as i64 - self.row as i64,
            other.col as i64 - self.col as i64,
        )
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A single 4-connected move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Every action, in neighbour-generation order.
    ///
    /// Search tie-breaking depends on this order staying fixed.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Lower-case name of the move.
    pub const fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        }
    }

    /// The move that undoes this one.
    pub const fn reverse(self) -> Action {
        match self {
            Action::Up => Action::Down,
            Action::Down => Action::Up,
            Action::Left => Action::Right,
            Action::Right => Action::Left,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
