//! Per-cell classification used by text and image renderers.

/// What a renderer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Wall,
    Start,
    Goal,
    /// On the solution path.
    Path,
    /// Expanded by the search but not on the path.
    Explored,
    Empty,
}

impl Tile {
    /// Console glyph.
    pub const fn glyph(self) -> char {
        match self {
            Tile::Wall => '█',
            Tile::Start => 'A',
            Tile::Goal => 'B',
            Tile::Path => '*',
            Tile::Explored => '.',
            Tile::Empty => ' ',
        }
    }

    /// RGB fill colour.
    pub const fn color(self) -> [u8; 3] {
        match self {
            Tile::Wall => [40, 40, 40],
            Tile::Start => [255, 0, 0],
            Tile::Goal => [0, 171, 28],
            Tile::Path => [220, 235, 113],
            Tile::Explored => [212, 97, 85],
            Tile::Empty => [237, 240, 252],
        }
    }
}
