use log::{debug, trace};
use rayon::prelude::*;

use crate::error::LifeError;
use crate::grid::{Grid, neighbors8};
use crate::rng::{Rng, entropy_seed};

/// A fixed-size board plus its randomly seeded starting generation.
#[derive(Clone, Debug)]
pub struct LifeGrid {
    rows: usize,
    columns: usize,
    seeds: usize,
    initial: Grid<bool>,
}

impl LifeGrid {
    /// Seeded from OS entropy.
    pub fn new(rows: i64, columns: i64, seeds: i64) -> Result<Self, LifeError> {
        Self::with_seed(rows, columns, seeds, entropy_seed()?)
    }

    /// Same as [`LifeGrid::new`] but reproducible for a given `seed`.
    pub fn with_seed(rows: i64, columns: i64, seeds: i64, seed: u64) -> Result<Self, LifeError> {
        let (rows, columns, seeds) = validate(rows, columns, seeds)?;

        let mut initial: Grid<bool> = Grid::new(rows, columns);
        let mut rng = Rng::new(seed);
        let mut occupied = 0usize;
        // Terminates: redraws only land on live cells and seeds <= rows * columns.
        while occupied < seeds {
            let r = rng.range_usize(rows);
            let c = rng.range_usize(columns);
            if initial.get(r, c) {
                trace!("redraw ({r}, {c})");
                continue;
            }
            initial.set(r, c, true);
            occupied += 1;
        }

        debug!("seeded {rows}x{columns} grid with {seeds} live cells (rng seed {seed})");
        Ok(Self {
            rows,
            columns,
            seeds,
            initial,
        })
    }

    /// Wrap a hand-built grid as the starting generation.
    pub fn from_grid(initial: Grid<bool>) -> Self {
        Self {
            rows: initial.rows,
            columns: initial.columns,
            seeds: initial.population(),
            initial,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn seeds(&self) -> usize {
        self.seeds
    }

    pub fn initial(&self) -> &Grid<bool> {
        &self.initial
    }

    /// Next generation of `grid`, which must have this board's dimensions.
    pub fn next(&self, grid: &Grid<bool>) -> Grid<bool> {
        debug_assert_eq!((grid.rows, grid.columns), (self.rows, self.columns));
        step(grid)
    }

    pub fn count_neighbors(&self, grid: &Grid<bool>, row: usize, col: usize) -> usize {
        count_neighbors(grid, row, col)
    }

    /// The initial grid followed by exactly `steps` successive generations.
    pub fn run(&self, steps: usize) -> Vec<Grid<bool>> {
        let mut out = Vec::with_capacity(steps.saturating_add(1));
        out.push(self.initial.clone());
        for _ in 0..steps {
            let next = self.next(&out[out.len() - 1]);
            out.push(next);
        }
        out
    }

    /// Endless sequence g0, g1, g2, ... starting at the initial grid.
    pub fn generations(&self) -> impl Iterator<Item = Grid<bool>> + '_ {
        std::iter::successors(Some(self.initial.clone()), move |g| Some(self.next(g)))
    }
}

fn validate(rows: i64, columns: i64, seeds: i64) -> Result<(usize, usize, usize), LifeError> {
    if rows < 1 || columns < 1 {
        return Err(LifeError::InvalidDimension { rows, columns });
    }
    // Cell buffer must be addressable; anything past isize::MAX cannot be allocated.
    let cells = usize::try_from(rows)
        .ok()
        .zip(usize::try_from(columns).ok())
        .and_then(|(r, c)| r.checked_mul(c))
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or(LifeError::InvalidDimension { rows, columns })?;
    let capacity = cells as i64;
    if seeds < 0 || seeds > capacity {
        return Err(LifeError::InvalidSeedCount { seeds, capacity });
    }
    Ok((rows as usize, columns as usize, seeds as usize))
}

/// Live cells among the in-bounds Moore neighbors of `(row, col)`.
pub fn count_neighbors(grid: &Grid<bool>, row: usize, col: usize) -> usize {
    neighbors8(row, col, grid.rows, grid.columns)
        .filter(|&(r, c)| grid.get(r, c))
        .count()
}

/// Apply the rule to one cell.
///
/// Three neighbors always yields a live cell, even one that was already alive;
/// two keeps the current state; anything else dies.
#[inline]
pub fn rule(alive: bool, neighbors: usize) -> bool {
    match neighbors {
        3 => true,
        2 => alive,
        _ => false,
    }
}

/// Compute the next generation into a fresh grid. Rows are independent, so they
/// are filled in parallel from the read-only input.
pub fn step(grid: &Grid<bool>) -> Grid<bool> {
    let columns = grid.columns;
    let mut next: Grid<bool> = Grid::new(grid.rows, columns);

    next.data
        .par_chunks_mut(columns)
        .enumerate()
        .for_each(|(r, row)| {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = rule(grid.get(r, c), count_neighbors(grid, r, c));
            }
        });

    next
}
