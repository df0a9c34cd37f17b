//! PNG rendering of a maze and, optionally, its solution.

use std::collections::HashSet;
use std::path::Path;

use image::{Rgba, RgbaImage};
use maze_core::{Cell, Grid, Tile};
use maze_paths::SearchResult;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// How [`draw`] lays out the picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Side of one cell in pixels, border included.
    pub cell_size: u32,
    /// Black margin on each side of a cell.
    pub cell_border: u32,
    pub show_solution: bool,
    /// Colour expanded cells. Ignored when there is no solution.
    pub show_explored: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_size: 50,
            cell_border: 2,
            show_solution: true,
            show_explored: false,
        }
    }
}

impl RenderOptions {
    pub fn explored(self) -> Self {
        Self {
            show_explored: true,
            ..self
        }
    }
}

/// Paint `grid` with one filled square per cell on a black background.
pub fn draw(grid: &Grid, result: Option<&SearchResult>, opts: &RenderOptions) -> RgbaImage {
    let size = opts.cell_size;
    let border = opts.cell_border.min(size / 2);

    let path: HashSet<Cell> = match result {
        Some(r) if opts.show_solution => r.cells.iter().copied().collect(),
        _ => HashSet::new(),
    };
    let explored: HashSet<Cell> = match result {
        Some(r) if opts.show_explored => r.explored.iter().copied().collect(),
        _ => HashSet::new(),
    };

    let mut img = RgbaImage::from_pixel(
        grid.width() as u32 * size,
        grid.height() as u32 * size,
        BACKGROUND,
    );
    for cell in grid.cells() {
        let [r, g, b] = grid.tile(cell, &path, &explored).color();
        fill_cell(&mut img, cell, size, border, Rgba([r, g, b, 255]));
    }
    img
}

fn fill_cell(img: &mut RgbaImage, cell: Cell, size: u32, border: u32, color: Rgba<u8>) {
    let x0 = cell.col as u32 * size;
    let y0 = cell.row as u32 * size;
    for y in y0 + border..y0 + size - border {
        for x in x0 + border..x0 + size - border {
            img.put_pixel(x, y, color);
        }
    }
}

/// Render and write a PNG to `path`.
pub fn save(
    grid: &Grid,
    result: Option<&SearchResult>,
    opts: &RenderOptions,
    path: impl AsRef<Path>,
) -> image::ImageResult<()> {
    let path = path.as_ref();
    let img = draw(grid, result, opts);
    log::debug!(
        "writing {}x{} image to {}",
        img.width(),
        img.height(),
        path.display()
    );
    img.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_paths::{Distance, Mode, solve};

    fn pixel(img: &RgbaImage, cell: Cell, opts: &RenderOptions) -> [u8; 3] {
        let mid = opts.cell_size / 2;
        let p = img.get_pixel(
            cell.col as u32 * opts.cell_size + mid,
            cell.row as u32 * opts.cell_size + mid,
        );
        [p[0], p[1], p[2]]
    }

    #[test]
    fn image_size_follows_grid() {
        let grid = Grid::parse("A  #\n   B\n").unwrap();
        let img = draw(&grid, None, &RenderOptions::default());
        assert_eq!(img.dimensions(), (200, 100));
    }

    #[test]
    fn cells_are_inset_by_border() {
        let grid = Grid::parse("AB").unwrap();
        let opts = RenderOptions::default();
        let img = draw(&grid, None, &opts);
        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*img.get_pixel(1, 25), BACKGROUND);
        assert_eq!(*img.get_pixel(2, 2), Rgba([255, 0, 0, 255]));
        assert_eq!(*img.get_pixel(47, 47), Rgba([255, 0, 0, 255]));
        assert_eq!(*img.get_pixel(48, 48), BACKGROUND);
    }

    #[test]
    fn solution_and_explored_colours() {
        let grid = Grid::parse(" A    \n #### \n   B  \n").unwrap();
        let result = solve(&grid, &Distance::Manhattan, Mode::Dijkstra).unwrap();
        let opts = RenderOptions::default().explored();
        let img = draw(&grid, Some(&result), &opts);

        assert_eq!(pixel(&img, Cell::new(1, 0), &opts), Tile::Path.color());
        assert_eq!(pixel(&img, Cell::new(1, 1), &opts), Tile::Wall.color());
        assert_eq!(pixel(&img, Cell::new(0, 1), &opts), Tile::Start.color());
        assert_eq!(pixel(&img, Cell::new(2, 3), &opts), Tile::Goal.color());
        // Dijkstra reaches (0, 3) at cost 2, before the goal at cost 6.
        assert_eq!(pixel(&img, Cell::new(0, 3), &opts), Tile::Explored.color());
    }

    #[test]
    fn no_result_draws_plain_maze() {
        let grid = Grid::parse("A \n B").unwrap();
        let opts = RenderOptions::default().explored();
        let img = draw(&grid, None, &opts);
        assert_eq!(pixel(&img, Cell::new(0, 1), &opts), Tile::Empty.color());
    }

    #[test]
    fn save_writes_png() {
        let grid = Grid::parse("A B").unwrap();
        let path = std::env::temp_dir().join(format!("maze-render-{}.png", std::process::id()));
        save(&grid, None, &RenderOptions::default(), &path).unwrap();
        assert_eq!(image::image_dimensions(&path).unwrap(), (150, 50));
        std::fs::remove_file(&path).unwrap();
    }
}
