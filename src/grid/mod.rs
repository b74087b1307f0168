// Shared grid toolkit for the per-task solvers.
//
// Every ARC input and output is a small rectangular array of color indices
// 0..=9. The helpers here are the idioms the solvers keep reaching for:
// geometry, cropping, resizing, recoloring, connected components, flood fill,
// color histograms and separator detection. All of them return fresh grids;
// nothing mutates its argument.

pub mod analysis;
pub mod objects;
pub mod ops;

pub use analysis::*;
pub use objects::*;
pub use ops::*;

pub type Grid = Vec<Vec<u8>>;

/// Number of distinct ARC colors.
pub const COLORS: usize = 10;

pub fn dims(grid: &Grid) -> (usize, usize) {
    if grid.is_empty() { (0, 0) } else { (grid.len(), grid[0].len()) }
}

pub fn blank(rows: usize, cols: usize, color: u8) -> Grid {
    vec![vec![color; cols]; rows]
}

pub fn same_shape(a: &Grid, b: &Grid) -> bool {
    dims(a) == dims(b)
}

/// Cell at (r, c) offset by (dr, dc), if it stays inside the grid.
pub fn offset(grid: &Grid, r: usize, c: usize, dr: i32, dc: i32) -> Option<(usize, usize)> {
    let (rows, cols) = dims(grid);
    let nr = r as i32 + dr;
    let nc = c as i32 + dc;
    if nr >= 0 && (nr as usize) < rows && nc >= 0 && (nc as usize) < cols {
        Some((nr as usize, nc as usize))
    } else {
        None
    }
}

pub const DIRS4: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const DIRS8: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];
pub const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn to_text(grid: &Grid) -> String {
    grid.iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
