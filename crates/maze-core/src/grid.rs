//! The [`Grid`] type: an immutable occupancy matrix with a start and a goal.
//!
//! A `Grid` is read-only after construction, so a single instance can be
//! shared by reference between any number of concurrent searches.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{MazeError, Result};
use crate::geom::{Action, Cell};
use crate::tile::Tile;

/// Marker for the start cell in a text layout.
pub const START: char = 'A';
/// Marker for the goal cell in a text layout.
pub const GOAL: char = 'B';
/// The only passable character besides the two markers.
pub const OPEN: char = ' ';

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular 4-connected maze.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    height: usize,
    width: usize,
    /// Row-major, `true` = wall.
    walls: Vec<bool>,
    start: Cell,
    goal: Cell,
}

/// Unchecked wire form of [`Grid`]; deserialized grids go through
/// [`Grid::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    height: usize,
    width: usize,
    walls: Vec<bool>,
    start: Cell,
    goal: Cell,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = MazeError;

    fn try_from(r: GridRepr) -> Result<Self> {
        Grid::new(r.height, r.width, r.walls, r.start, r.goal)
    }
}

impl Grid {
    /// Build a grid from a flat row-major occupancy vector.
    ///
    /// `walls.len()` must equal `height * width`, and both `start` and
    /// `goal` must be in bounds and passable.
    pub fn new(
        height: usize,
        width: usize,
        walls: Vec<bool>,
        start: Cell,
        goal: Cell,
    ) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(MazeError::Empty);
        }
        if walls.len() != height * width {
            return Err(MazeError::Shape {
                height,
                width,
                found: walls.len(),
            });
        }
        let grid = Self {
            height,
            width,
            walls,
            start,
            goal,
        };
        for (role, cell) in [("start", start), ("goal", goal)] {
            if !grid.passable(cell) {
                return Err(MazeError::Endpoint { role, cell });
            }
        }
        Ok(grid)
    }

    /// Build a grid from per-row wall flags.
    ///
    /// Rows may be ragged: the width is the longest row and missing cells
    /// at the end of shorter rows are passable.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R], start: Cell, goal: Cell) -> Result<Self> {
        let height = rows.len();
        let width = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        let mut walls = vec![false; height * width];
        for (row, flags) in rows.iter().enumerate() {
            let flags = flags.as_ref();
            walls[row * width..row * width + flags.len()].copy_from_slice(flags);
        }
        Self::new(height, width, walls, start, goal)
    }

    /// A grid of the given size with no walls at all.
    pub fn open(height: usize, width: usize, start: Cell, goal: Cell) -> Result<Self> {
        Self::new(height, width, vec![false; height * width], start, goal)
    }

    /// Parse a text layout.
    ///
    /// `A` marks the start, `B` the goal, a space is open floor and every
    /// other character is a wall. The layout is as wide as its longest line;
    /// shorter lines are padded with open floor.
    pub fn parse(text: &str) -> Result<Self> {
        let starts = text.chars().filter(|&c| c == START).count();
        if starts != 1 {
            return Err(MazeError::StartCount(starts));
        }
        let goals = text.chars().filter(|&c| c == GOAL).count();
        if goals != 1 {
            return Err(MazeError::GoalCount(goals));
        }

        let lines: Vec<&str> = text.lines().collect();
        let height = lines.len();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let mut walls = vec![false; height * width];
        let mut start = Cell::ZERO;
        let mut goal = Cell::ZERO;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    START => start = Cell::new(row, col),
                    GOAL => goal = Cell::new(row, col),
                    OPEN => {}
                    _ => walls[row * width + col] = true,
                }
            }
        }
        log::debug!("parsed {height}x{width} maze, start {start}, goal {goal}");
        Self::new(height, width, walls, start, goal)
    }

    /// Read and parse a maze file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.row < self.height && c.col < self.width
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Cell) -> Option<usize> {
        self.contains(c).then(|| c.row * self.width + c.col)
    }

    /// The cell at flat index `i`.
    #[inline]
    pub fn cell(&self, i: usize) -> Cell {
        Cell::new(i / self.width, i % self.width)
    }

    /// Whether `c` is an in-bounds wall.
    #[inline]
    pub fn is_wall(&self, c: Cell) -> bool {
        self.index(c).is_some_and(|i| self.walls[i])
    }

    /// Whether `c` is in bounds and not a wall.
    #[inline]
    pub fn passable(&self, c: Cell) -> bool {
        self.index(c).is_some_and(|i| !self.walls[i])
    }

    /// Passable cardinal neighbours of `c`, in up, down, left, right order.
    pub fn neighbors(&self, c: Cell) -> impl Iterator<Item = (Action, Cell)> + '_ {
        c.neighbors_4().filter(move |&(_, n)| self.passable(n))
    }

    /// Row-major iterator over every cell.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.len()).map(move |i| self.cell(i))
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Classify `c` for display.
    ///
    /// Walls, start and goal win over path membership; path wins over
    /// explored.
    pub fn tile(&self, c: Cell, path: &HashSet<Cell>, explored: &HashSet<Cell>) -> Tile {
        if self.is_wall(c) {
            Tile::Wall
        } else if c == self.start {
            Tile::Start
        } else if c == self.goal {
            Tile::Goal
        } else if path.contains(&c) {
            Tile::Path
        } else if explored.contains(&c) {
            Tile::Explored
        } else {
            Tile::Empty
        }
    }

    /// Draw the maze as text, marking `solution` cells with `*`.
    pub fn render_text(&self, solution: Option<&[Cell]>) -> String {
        let path: HashSet<Cell> = solution.unwrap_or_default().iter().copied().collect();
        let none = HashSet::new();
        let mut out = String::with_capacity(self.len() * 3 + self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                out.push(self.tile(Cell::new(row, col), &path, &none).glyph());
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
##### B
##### #
A     #
";

    #[test]
    fn parse_finds_markers_and_walls() {
        let g = Grid::parse(MAZE).unwrap();
        assert_eq!(g.height(), 3);
        assert_eq!(g.width(), 7);
        assert_eq!(g.start(), Cell::new(2, 0));
        assert_eq!(g.goal(), Cell::new(0, 6));
        assert!(g.is_wall(Cell::new(0, 0)));
        assert!(g.passable(Cell::new(0, 5)));
        assert!(g.passable(Cell::new(2, 3)));
    }

    #[test]
    fn parse_pads_ragged_lines() {
        let g = Grid::parse("A\n#  B\n").unwrap();
        assert_eq!(g.width(), 4);
        assert!(g.passable(Cell::new(0, 3)));
        assert!(g.is_wall(Cell::new(1, 0)));
    }

    #[test]
    fn parse_rejects_marker_counts() {
        assert!(matches!(Grid::parse("  B"), Err(MazeError::StartCount(0))));
        assert!(matches!(Grid::parse("AAB"), Err(MazeError::StartCount(2))));
        assert!(matches!(Grid::parse("A  "), Err(MazeError::GoalCount(0))));
        assert!(matches!(Grid::parse("AB\nB"), Err(MazeError::GoalCount(2))));
        assert!(Grid::parse("").unwrap_err().is_malformed());
    }

    #[test]
    fn new_rejects_bad_shapes() {
        assert!(matches!(
            Grid::new(0, 3, vec![], Cell::ZERO, Cell::ZERO),
            Err(MazeError::Empty)
        ));
        assert!(matches!(
            Grid::new(2, 2, vec![false; 3], Cell::ZERO, Cell::ZERO),
            Err(MazeError::Shape { found: 3, .. })
        ));
    }

    #[test]
    fn new_rejects_blocked_or_outside_endpoints() {
        let err = Grid::new(1, 2, vec![false, true], Cell::ZERO, Cell::new(0, 1)).unwrap_err();
        assert!(matches!(err, MazeError::Endpoint { role: "goal", .. }));
        let err = Grid::open(2, 2, Cell::new(5, 0), Cell::ZERO).unwrap_err();
        assert!(matches!(err, MazeError::Endpoint { role: "start", .. }));
    }

    #[test]
    fn from_rows_pads_short_rows() {
        let rows: Vec<Vec<bool>> = vec![vec![false, true, true], vec![false]];
        let g = Grid::from_rows(&rows, Cell::ZERO, Cell::new(1, 2)).unwrap();
        assert_eq!((g.height(), g.width()), (2, 3));
        assert!(g.passable(Cell::new(1, 2)));
        assert_eq!(g.wall_count(), 2);
    }

    #[test]
    fn neighbors_filter_walls_and_bounds() {
        let g = Grid::parse("A#\n B").unwrap();
        let n: Vec<_> = g.neighbors(Cell::ZERO).collect();
        assert_eq!(n, vec![(Action::Down, Cell::new(1, 0))]);
        let n: Vec<_> = g.neighbors(Cell::new(1, 0)).collect();
        assert_eq!(
            n,
            vec![(Action::Up, Cell::ZERO), (Action::Right, Cell::new(1, 1))]
        );
    }

    #[test]
    fn passable_out_of_bounds_is_false() {
        let g = Grid::open(2, 2, Cell::ZERO, Cell::new(1, 1)).unwrap();
        assert!(!g.passable(Cell::new(2, 0)));
        assert!(!g.passable(Cell::new(0, 2)));
        assert!(!g.is_wall(Cell::new(9, 9)));
    }

    #[test]
    fn cells_are_row_major() {
        let g = Grid::open(2, 3, Cell::ZERO, Cell::ZERO).unwrap();
        let cells: Vec<_> = g.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[4], Cell::new(1, 1));
        assert_eq!(g.index(Cell::new(1, 2)), Some(5));
    }

    #[test]
    fn render_marks_solution() {
        let g = Grid::parse("A #\n  B").unwrap();
        let path = [Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)];
        assert_eq!(g.render_text(Some(&path[..])), "A █\n**B\n");
        assert_eq!(g.to_string(), "A █\n  B\n");
    }

    #[test]
    fn tile_priority() {
        let g = Grid::parse("A  B").unwrap();
        let path: HashSet<Cell> = [Cell::new(0, 1)].into();
        let explored: HashSet<Cell> = [Cell::new(0, 1), Cell::new(0, 2)].into();
        assert_eq!(g.tile(Cell::ZERO, &path, &explored), Tile::Start);
        assert_eq!(g.tile(Cell::new(0, 1), &path, &explored), Tile::Path);
        assert_eq!(g.tile(Cell::new(0, 2), &path, &explored), Tile::Explored);
        assert_eq!(g.tile(Cell::new(0, 3), &path, &explored), Tile::Goal);
    }

    #[test]
    fn grid_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grid>();
    }
}
