// Whole-grid transforms: geometry, cropping, resizing, recoloring.

use super::{dims, Grid};

pub fn rotate_cw(g: &Grid) -> Grid {
    if g.is_empty() { return g.clone(); }
    let (rows, cols) = dims(g);
    (0..cols).map(|c| (0..rows).rev().map(|r| g[r][c]).collect()).collect()
}

pub fn rotate_ccw(g: &Grid) -> Grid {
    if g.is_empty() { return g.clone(); }
    let (rows, cols) = dims(g);
    (0..cols).rev().map(|c| (0..rows).map(|r| g[r][c]).collect()).collect()
}

pub fn rotate_180(g: &Grid) -> Grid {
    g.iter().rev().map(|row| row.iter().rev().copied().collect()).collect()
}

/// Mirror left/right.
pub fn flip_h(g: &Grid) -> Grid {
    g.iter().map(|row| row.iter().rev().copied().collect()).collect()
}

/// Mirror top/bottom.
pub fn flip_v(g: &Grid) -> Grid {
    g.iter().rev().cloned().collect()
}

pub fn transpose(g: &Grid) -> Grid {
    if g.is_empty() { return g.clone(); }
    let cols = g[0].len();
    (0..cols).map(|c| g.iter().map(|row| row[c]).collect()).collect()
}

/// Sub-grid starting at (r, c) of at most h x w cells.
pub fn crop(g: &Grid, r: usize, c: usize, h: usize, w: usize) -> Grid {
    g.iter().skip(r).take(h).map(|row| row.iter().skip(c).take(w).copied().collect()).collect()
}

/// Inclusive bounding box `(min_r, min_c, max_r, max_c)` of cells matching `pred`.
pub fn bbox_of<F: Fn(u8) -> bool>(g: &Grid, pred: F) -> Option<(usize, usize, usize, usize)> {
    let mut bbox: Option<(usize, usize, usize, usize)> = None;
    for (r, row) in g.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            if !pred(v) { continue; }
            bbox = Some(match bbox {
                None => (r, c, r, c),
                Some((r0, c0, r1, c1)) => (r0.min(r), c0.min(c), r1.max(r), c1.max(c)),
            });
        }
    }
    bbox
}

/// Tight crop around every cell that is not `bg`. An all-background grid
/// comes back unchanged.
pub fn crop_to_bbox(g: &Grid, bg: u8) -> Grid {
    match bbox_of(g, |v| v != bg) {
        Some((r0, c0, r1, c1)) => crop(g, r0, c0, r1 - r0 + 1, c1 - c0 + 1),
        None => g.clone(),
    }
}

/// Copy `src` onto `dst` with its top-left corner at (r, c); cells that fall
/// outside `dst` are dropped.
pub fn paste(dst: &Grid, src: &Grid, r: usize, c: usize) -> Grid {
    let (rows, cols) = dims(dst);
    let mut result = dst.clone();
    for (sr, row) in src.iter().enumerate() {
        for (sc, &v) in row.iter().enumerate() {
            if r + sr < rows && c + sc < cols {
                result[r + sr][c + sc] = v;
            }
        }
    }
    result
}

/// Each cell becomes a k x k block.
pub fn upscale(g: &Grid, k: usize) -> Grid {
    let mut result = Vec::with_capacity(g.len() * k);
    for row in g {
        let scaled: Vec<u8> = row.iter().flat_map(|&c| std::iter::repeat(c).take(k)).collect();
        for _ in 0..k {
            result.push(scaled.clone());
        }
    }
    result
}

/// `nr` copies down, `nc` copies across.
pub fn tile(g: &Grid, nr: usize, nc: usize) -> Grid {
    let mut result = Vec::with_capacity(g.len() * nr);
    for _ in 0..nr {
        for row in g {
            let mut new_row = Vec::with_capacity(row.len() * nc);
            for _ in 0..nc { new_row.extend(row.iter()); }
            result.push(new_row);
        }
    }
    result
}

/// Side-by-side; rows beyond the shorter grid are dropped.
pub fn hconcat(a: &Grid, b: &Grid) -> Grid {
    a.iter().zip(b.iter()).map(|(ra, rb)| {
        let mut row = ra.clone();
        row.extend(rb.iter());
        row
    }).collect()
}

pub fn vconcat(a: &Grid, b: &Grid) -> Grid {
    let mut result = a.clone();
    result.extend(b.iter().cloned());
    result
}

pub fn replace_color(g: &Grid, from: u8, to: u8) -> Grid {
    g.iter().map(|row| row.iter().map(|&c| if c == from { to } else { c }).collect()).collect()
}

/// Apply a simultaneous color substitution; colors not listed are kept.
pub fn map_colors(g: &Grid, mapping: &[(u8, u8)]) -> Grid {
    g.iter().map(|row| {
        row.iter().map(|&c| {
            mapping.iter().find(|&&(from, _)| from == c).map(|&(_, to)| to).unwrap_or(c)
        }).collect()
    }).collect()
}

/// Keep only `color`, everything else becomes `bg`.
pub fn filter_color(g: &Grid, color: u8, bg: u8) -> Grid {
    g.iter().map(|row| row.iter().map(|&c| if c == color { c } else { bg }).collect()).collect()
}

/// Non-background cells fall to the bottom of their column.
pub fn gravity_down(g: &Grid, bg: u8) -> Grid {
    if g.is_empty() { return g.clone(); }
    let (rows, cols) = dims(g);
    let mut result = vec![vec![bg; cols]; rows];
    for c in 0..cols {
        let stack: Vec<u8> = (0..rows).map(|r| g[r][c]).filter(|&v| v != bg).collect();
        let offset = rows - stack.len();
        for (i, &v) in stack.iter().enumerate() {
            result[offset + i][c] = v;
        }
    }
    result
}

/// Shift every cell by (dr, dc); vacated cells become `bg`, cells pushed off
/// the edge are lost.
pub fn shift(g: &Grid, dr: i32, dc: i32, bg: u8) -> Grid {
    if g.is_empty() { return g.clone(); }
    let (rows, cols) = dims(g);
    let mut result = vec![vec![bg; cols]; rows];
    for r in 0..rows {
        for c in 0..cols {
            let nr = r as i32 + dr;
            let nc = c as i32 + dc;
            if nr >= 0 && (nr as usize) < rows && nc >= 0 && (nc as usize) < cols {
                result[nr as usize][nc as usize] = g[r][c];
            }
        }
    }
    result
}

/// Collapse runs of identical adjacent rows to a single row.
pub fn dedupe_rows(g: &Grid) -> Grid {
    let mut result: Grid = Vec::new();
    for row in g {
        if result.last() != Some(row) {
            result.push(row.clone());
        }
    }
    result
}

pub fn dedupe_cols(g: &Grid) -> Grid {
    transpose(&dedupe_rows(&transpose(g)))
}
