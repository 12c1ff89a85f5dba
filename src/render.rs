use rayon::prelude::*;

use crate::grid::Grid;

pub const ALIVE: &str = "o";
pub const DEAD: &str = "x";

const CELL_ALIVE: [u8; 4] = [236, 232, 214, 255];
const CELL_DEAD: [u8; 4] = [24, 30, 40, 255];
const GRID_LINE: [u8; 4] = [48, 56, 70, 255];

/// Symbol matrix, one inner Vec per grid row.
pub fn symbols(grid: &Grid<bool>) -> Vec<Vec<&'static str>> {
    (0..grid.rows)
        .map(|r| {
            grid.row(r)
                .iter()
                .map(|&alive| if alive { ALIVE } else { DEAD })
                .collect()
        })
        .collect()
}

/// Console form: `[o, x, x]` per row, newline separated.
pub fn text(grid: &Grid<bool>) -> String {
    symbols(grid)
        .iter()
        .map(|row| format!("[{}]", row.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// RGBA raster, `cell_px` pixels per cell side.
/// Cells of 4px and up get a 1px grid line on their top and left edges.
pub fn rgba(grid: &Grid<bool>, cell_px: usize) -> Vec<u8> {
    let cell_px = cell_px.max(1);
    let w = grid.columns * cell_px;
    let h = grid.rows * cell_px;
    let lines = cell_px >= 4;
    let mut out = vec![0u8; w * h * 4];

    out.par_chunks_mut(w * 4).enumerate().for_each(|(y, row)| {
        let r = y / cell_px;
        for x in 0..w {
            let c = x / cell_px;
            let color = if lines && (y % cell_px == 0 || x % cell_px == 0) {
                GRID_LINE
            } else if grid.get(r, c) {
                CELL_ALIVE
            } else {
                CELL_DEAD
            };
            row[x * 4..x * 4 + 4].copy_from_slice(&color);
        }
    });

    out
}

/// Pixel size of [`rgba`] output.
pub fn image_size(grid: &Grid<bool>, cell_px: usize) -> (usize, usize) {
    let cell_px = cell_px.max(1);
    (grid.columns * cell_px, grid.rows * cell_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid<bool> {
        Grid::from_fn(2, 3, |r, c| (r + c) % 2 == 0)
    }

    #[test]
    fn symbols_keep_row_and_column_order() {
        assert_eq!(symbols(&sample()), vec![vec!["o", "x", "o"], vec!["x", "o", "x"]]);
    }

    #[test]
    fn text_matches_console_format() {
        assert_eq!(text(&sample()), "[o, x, o]\n[x, o, x]");
    }

    #[test]
    fn raster_paints_cells() {
        let g = sample();
        let px = rgba(&g, 1);
        assert_eq!(px.len(), 3 * 2 * 4);
        assert_eq!(&px[0..4], &CELL_ALIVE);
        assert_eq!(&px[4..8], &CELL_DEAD);
    }

    #[test]
    fn raster_draws_grid_lines_on_large_cells() {
        let g = sample();
        let (w, h) = image_size(&g, 8);
        assert_eq!((w, h), (24, 16));
        let px = rgba(&g, 8);
        assert_eq!(px.len(), w * h * 4);
        assert_eq!(&px[0..4], &GRID_LINE);
        // Interior pixel of cell (0, 0).
        let i = (4 * w + 4) * 4;
        assert_eq!(&px[i..i + 4], &CELL_ALIVE);
    }
}
