/// Row-major flat grid. Fixed size, no per-cell objects.
/// Bounded topology: neighbors past an edge do not exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    pub data: Vec<T>,
    pub rows: usize,
    pub columns: usize,
}

impl<T: Copy + Default> Grid<T> {
    /// Panics if either dimension is zero; validated callers go through `LifeGrid::new`.
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(rows > 0 && columns > 0, "grid must be at least 1x1");
        Self {
            data: vec![T::default(); rows * columns],
            rows,
            columns,
        }
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut grid = Self::new(rows, columns);
        for r in 0..rows {
            for c in 0..columns {
                grid.set(r, c, f(r, c));
            }
        }
        grid
    }

    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.columns);
        row * self.columns + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[self.idx(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, v: T) {
        let i = self.idx(row, col);
        self.data[i] = v;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.columns;
        &self.data[start..start + self.columns]
    }
}

impl Grid<bool> {
    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.data.iter().filter(|&&alive| alive).count()
    }
}

/// Resolve `(row + dr, col + dc)`. Returns None outside `[0,rows) x [0,columns)`.
#[inline]
pub fn offset(row: usize, col: usize, dr: i32, dc: i32, rows: usize, columns: usize) -> Option<(usize, usize)> {
    let r = row as i64 + dr as i64;
    let c = col as i64 + dc as i64;
    if r < 0 || c < 0 || r >= rows as i64 || c >= columns as i64 {
        return None;
    }
    Some((r as usize, c as usize))
}

/// Moore offsets, clockwise from straight up.
pub const MOORE: [(i32, i32); 8] = [
    (-1, 0),  // up
    (-1, 1),  // up-right
    (0, 1),   // right
    (1, 1),   // down-right
    (1, 0),   // down
    (1, -1),  // down-left
    (0, -1),  // left
    (-1, -1), // up-left
];

/// 8-connected in-bounds neighbors, no wrapping.
pub fn neighbors8(row: usize, col: usize, rows: usize, columns: usize) -> impl Iterator<Item = (usize, usize)> {
    let mut out = [(0usize, 0usize); 8];
    let mut n = 0;
    for (dr, dc) in MOORE {
        if let Some(pos) = offset(row, col, dr, dc, rows, columns) {
            out[n] = pos;
            n += 1;
        }
    }
    out.into_iter().take(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_layout() {
        let g = Grid::from_fn(2, 3, |r, c| (r * 10 + c) as u32);
        assert_eq!(g.data, vec![0, 1, 2, 10, 11, 12]);
        assert_eq!(g.row(1), &[10, 11, 12]);
        assert_eq!(g.get(1, 2), 12);
    }

    #[test]
    fn neighbors_clip_at_corners_and_edges() {
        assert_eq!(neighbors8(0, 0, 3, 3).count(), 3);
        assert_eq!(neighbors8(0, 1, 3, 3).count(), 5);
        assert_eq!(neighbors8(1, 1, 3, 3).count(), 8);
        assert_eq!(neighbors8(0, 0, 1, 1).count(), 0);
    }

    #[test]
    fn neighbors_follow_clockwise_order() {
        let got: Vec<_> = neighbors8(1, 1, 3, 3).collect();
        assert_eq!(
            got,
            vec![(0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0), (1, 0), (0, 0)]
        );
    }

    #[test]
    fn population_counts_live_cells() {
        let mut g: Grid<bool> = Grid::new(4, 4);
        assert_eq!(g.population(), 0);
        g.set(0, 0, true);
        g.set(3, 3, true);
        assert_eq!(g.population(), 2);
    }

    #[test]
    #[should_panic]
    fn zero_sized_grid_panics() {
        let _: Grid<bool> = Grid::new(0, 3);
    }
}
