// Color histograms, symmetry, periodicity and separator lines.

use super::{crop, dims, transpose, Grid, COLORS};

pub fn color_counts(grid: &Grid) -> [usize; COLORS] {
    let mut counts = [0usize; COLORS];
    for row in grid {
        for &c in row {
            if (c as usize) < COLORS { counts[c as usize] += 1; }
        }
    }
    counts
}

pub fn count_color(grid: &Grid, color: u8) -> usize {
    grid.iter().flat_map(|row| row.iter()).filter(|&&c| c == color).count()
}

/// Most frequent color; ties go to the lower color index.
pub fn most_common_color(grid: &Grid) -> u8 {
    let counts = color_counts(grid);
    let mut best = 0;
    for c in 1..COLORS {
        if counts[c] > counts[best] { best = c; }
    }
    best as u8
}

/// Most frequent color other than `exclude`, among colors present.
pub fn most_common_except(grid: &Grid, exclude: u8) -> Option<u8> {
    let counts = color_counts(grid);
    (0..COLORS)
        .filter(|&c| c as u8 != exclude && counts[c] > 0)
        .max_by(|&a, &b| counts[a].cmp(&counts[b]).then(b.cmp(&a)))
        .map(|c| c as u8)
}

/// Least frequent color among colors present; ties go to the lower index.
pub fn least_common_color(grid: &Grid) -> Option<u8> {
    let counts = color_counts(grid);
    (0..COLORS)
        .filter(|&c| counts[c] > 0)
        .min_by(|&a, &b| counts[a].cmp(&counts[b]).then(a.cmp(&b)))
        .map(|c| c as u8)
}

/// Colors in order of first appearance (row-major).
pub fn unique_colors(grid: &Grid) -> Vec<u8> {
    let mut seen = [false; 256];
    let mut result = Vec::new();
    for row in grid {
        for &c in row {
            if !seen[c as usize] {
                seen[c as usize] = true;
                result.push(c);
            }
        }
    }
    result
}

/// Left/right mirror symmetry.
pub fn is_symmetric_h(grid: &Grid) -> bool {
    grid.iter().all(|row| {
        let n = row.len();
        (0..n / 2).all(|i| row[i] == row[n - 1 - i])
    })
}

/// Top/bottom mirror symmetry.
pub fn is_symmetric_v(grid: &Grid) -> bool {
    let n = grid.len();
    (0..n / 2).all(|i| grid[i] == grid[n - 1 - i])
}

/// Smallest horizontal period p such that every row satisfies
/// `row[c] == row[c % p]`. Unlike a tiling check, p need not divide the width.
pub fn row_period(grid: &Grid) -> Option<usize> {
    let (_, cols) = dims(grid);
    (1..=cols).find(|&p| grid.iter().all(|row| (p..cols).all(|c| row[c] == row[c % p])))
}

pub fn col_period(grid: &Grid) -> Option<usize> {
    row_period(&transpose(grid))
}

/// Indices of rows made entirely of `color`.
pub fn uniform_rows(grid: &Grid, color: u8) -> Vec<usize> {
    grid.iter()
        .enumerate()
        .filter(|(_, row)| !row.is_empty() && row.iter().all(|&c| c == color))
        .map(|(r, _)| r)
        .collect()
}

pub fn uniform_cols(grid: &Grid, color: u8) -> Vec<usize> {
    uniform_rows(&transpose(grid), color)
}

/// Color of the divider lines: the color of some full row or full column in
/// a grid that is not itself a single color.
pub fn separator_color(grid: &Grid) -> Option<u8> {
    if grid.is_empty() || super::unique_colors(grid).len() < 2 { return None; }
    let rows = grid.iter().filter(|row| row.iter().all(|&c| c == row[0])).map(|row| row[0]);
    let t = transpose(grid);
    let cols = t.iter().filter(|col| col.iter().all(|&c| c == col[0])).map(|col| col[0]);
    let mut counts = [0usize; 256];
    for c in rows.chain(cols) {
        counts[c as usize] += 1;
    }
    (0..256).filter(|&c| counts[c] > 0).max_by_key(|&c| counts[c]).map(|c| c as u8)
}

/// Split into blocks at full rows and full columns of `line`. Returns
/// `blocks[band_row][band_col]`.
pub fn split_by_lines(grid: &Grid, line: u8) -> Vec<Vec<Grid>> {
    let (rows, cols) = dims(grid);
    let row_bands = bands(rows, &uniform_rows(grid, line));
    let col_bands = bands(cols, &uniform_cols(grid, line));
    row_bands.iter().map(|&(r0, r1)| {
        col_bands.iter().map(|&(c0, c1)| crop(grid, r0, c0, r1 - r0, c1 - c0)).collect()
    }).collect()
}

/// Half-open runs of indices in `0..n` that are not separators.
fn bands(n: usize, seps: &[usize]) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut start = None;
    for i in 0..n {
        let is_sep = seps.contains(&i);
        match (start, is_sep) {
            (None, false) => start = Some(i),
            (Some(s), true) => {
                out.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        out.push((s, n));
    }
    out
}
