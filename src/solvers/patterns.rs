// Fixed stamps drawn around marker cells, and cleanup of stray cells.

use super::TaskSolver;
use crate::grid::{self, Connectivity, Grid, DIAGONALS, DIRS4, DIRS8};

pub fn entries() -> Vec<TaskSolver> {
    vec![
        TaskSolver::new("0ca9ddb6", "2 grows 4 diagonals, 1 grows 7 neighbours", solve_0ca9ddb6)
            .candidate("diagonals_only", |g| stamp(g, 2, &[(-1, -1, 4), (-1, 1, 4), (1, -1, 4), (1, 1, 4)], false)),
        TaskSolver::new("4258a5f9", "ring of 1 around each 5", solve_4258a5f9),
        TaskSolver::new("dc1df850", "ring of 1 around each 2", solve_dc1df850),
        TaskSolver::new("ce22a75a", "each 5 becomes a 3x3 block of 1", solve_ce22a75a)
            .candidate("ring_only", |g| ring(g, 5, 1)),
        TaskSolver::new("a9f96cdd", "2 becomes four colored diagonal neighbours", solve_a9f96cdd),
        TaskSolver::new("d364b489", "1 gets four colored side neighbours", solve_d364b489),
        TaskSolver::new("95990924", "corners numbered around each 2x2 block", solve_95990924),
        TaskSolver::new("3aa6fb7a", "complete each L with a 1", solve_3aa6fb7a),
        TaskSolver::new("b27ca6d3", "outline red pairs in 3", solve_b27ca6d3)
            .candidate("outline_all_red", |g| ring(g, 2, 3)),
        TaskSolver::new("31aa019c", "keep the unique-color cell, ringed in 2", solve_31aa019c),
        TaskSolver::new("5c0a986e", "blue block trails up-left, red block down-right", solve_5c0a986e),
        TaskSolver::new("7f4411dc", "remove stray cells, keep rectangles", solve_7f4411dc)
            .candidate("remove_isolated", |g| {
                let mut out = g.clone();
                for o in grid::components(g, Connectivity::Four, Some(0)) {
                    if o.area() == 1 { grid::paint(&mut out, &o, 0); }
                }
                out
            }),
    ]
}

/// For each `marker` cell, write `(dr, dc, color)` offsets. When
/// `background_only`, only empty cells are painted.
fn stamp(g: &Grid, marker: u8, offsets: &[(i32, i32, u8)], background_only: bool) -> Grid {
    let (rows, cols) = grid::dims(g);
    let mut out = g.clone();
    for r in 0..rows {
        for c in 0..cols {
            if g[r][c] != marker { continue; }
            for &(dr, dc, color) in offsets {
                if let Some((nr, nc)) = grid::offset(g, r, c, dr, dc) {
                    if !background_only || g[nr][nc] == 0 {
                        out[nr][nc] = color;
                    }
                }
            }
        }
    }
    out
}

fn with_color(dirs: &[(i32, i32)], color: u8) -> Vec<(i32, i32, u8)> {
    dirs.iter().map(|&(dr, dc)| (dr, dc, color)).collect()
}

fn ring(g: &Grid, marker: u8, color: u8) -> Grid {
    stamp(g, marker, &with_color(&DIRS8, color), true)
}

pub fn solve_0ca9ddb6(g: &Grid) -> Grid {
    let out = stamp(g, 2, &with_color(&DIAGONALS, 4), true);
    let plus = stamp(g, 1, &with_color(&DIRS4, 7), true);
    merge_new(&out, &plus, g)
}

/// Overlay the cells `b` changed relative to `base` onto `a`.
fn merge_new(a: &Grid, b: &Grid, base: &Grid) -> Grid {
    let mut out = a.clone();
    for (r, row) in b.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            if v != base[r][c] { out[r][c] = v; }
        }
    }
    out
}

pub fn solve_4258a5f9(g: &Grid) -> Grid {
    ring(g, 5, 1)
}

pub fn solve_dc1df850(g: &Grid) -> Grid {
    ring(g, 2, 1)
}

pub fn solve_ce22a75a(g: &Grid) -> Grid {
    let mut offsets = with_color(&DIRS8, 1);
    offsets.push((0, 0, 1));
    stamp(g, 5, &offsets, false)
}

pub fn solve_a9f96cdd(g: &Grid) -> Grid {
    let out = grid::replace_color(g, 2, 0);
    let stamped = stamp(g, 2, &[(-1, -1, 3), (-1, 1, 6), (1, -1, 8), (1, 1, 7)], false);
    merge_new(&out, &stamped, g)
}

pub fn solve_d364b489(g: &Grid) -> Grid {
    stamp(g, 1, &[(-1, 0, 2), (0, -1, 7), (0, 1, 6), (1, 0, 8)], false)
}

pub fn solve_95990924(g: &Grid) -> Grid {
    let mut out = g.clone();
    for o in grid::components(g, Connectivity::Four, Some(0)) {
        if o.color != 5 || o.height() != 2 || o.width() != 2 { continue; }
        let corners = [
            (o.min_r as i32 - 1, o.min_c as i32 - 1, 1),
            (o.min_r as i32 - 1, o.max_c as i32 + 1, 2),
            (o.max_r as i32 + 1, o.min_c as i32 - 1, 3),
            (o.max_r as i32 + 1, o.max_c as i32 + 1, 4),
        ];
        for (r, c, color) in corners {
            if let Some((r, c)) = grid::offset(g, 0, 0, r, c) {
                out[r][c] = color;
            }
        }
    }
    out
}

/// Three cells of a 2x2 box are 8; the fourth becomes 1.
pub fn solve_3aa6fb7a(g: &Grid) -> Grid {
    let mut out = g.clone();
    for o in grid::components(g, Connectivity::Four, Some(0)) {
        if o.color != 8 || o.area() != 3 || o.height() != 2 || o.width() != 2 { continue; }
        for r in o.min_r..=o.max_r {
            for c in o.min_c..=o.max_c {
                if !o.contains(r, c) { out[r][c] = 1; }
            }
        }
    }
    out
}

pub fn solve_b27ca6d3(g: &Grid) -> Grid {
    let mut out = g.clone();
    for o in grid::components(g, Connectivity::Four, Some(0)) {
        if o.color != 2 || o.area() != 2 { continue; }
        for &(r, c) in &o.cells {
            for &(dr, dc) in &DIRS8 {
                if let Some((nr, nc)) = grid::offset(g, r, c, dr, dc) {
                    if g[nr][nc] == 0 { out[nr][nc] = 3; }
                }
            }
        }
    }
    out
}

pub fn solve_31aa019c(g: &Grid) -> Grid {
    let counts = grid::color_counts(g);
    let (rows, cols) = grid::dims(g);
    let mut out = grid::blank(rows, cols, 0);
    let Some(unique) = (1..grid::COLORS).find(|&c| counts[c] == 1) else { return out };
    for r in 0..rows {
        for c in 0..cols {
            if g[r][c] as usize != unique { continue; }
            out[r][c] = g[r][c];
            for &(dr, dc) in &DIRS8 {
                if let Some((nr, nc)) = grid::offset(g, r, c, dr, dc) {
                    out[nr][nc] = 2;
                }
            }
        }
    }
    out
}

/// Trail from (r, c) stepping (dr, dc) until the edge, painting empty cells.
fn trail(out: &mut Grid, g: &Grid, (r, c): (usize, usize), (dr, dc): (i32, i32), color: u8) {
    let mut pos = grid::offset(g, r, c, dr, dc);
    while let Some((nr, nc)) = pos {
        if g[nr][nc] == 0 { out[nr][nc] = color; }
        pos = grid::offset(g, nr, nc, dr, dc);
    }
}

pub fn solve_5c0a986e(g: &Grid) -> Grid {
    let mut out = g.clone();
    for o in grid::components(g, Connectivity::Four, Some(0)) {
        match o.color {
            1 => trail(&mut out, g, (o.min_r, o.min_c), (-1, -1), 1),
            2 => trail(&mut out, g, (o.max_r, o.max_c), (1, 1), 2),
            _ => {}
        }
    }
    out
}

/// A cell survives when some 2x2 square of its own color contains it.
pub fn solve_7f4411dc(g: &Grid) -> Grid {
    let (rows, cols) = grid::dims(g);
    let mut out = grid::blank(rows, cols, 0);
    for r in 0..rows.saturating_sub(1) {
        for c in 0..cols.saturating_sub(1) {
            let v = g[r][c];
            if v != 0 && g[r][c + 1] == v && g[r + 1][c] == v && g[r + 1][c + 1] == v {
                out[r][c] = v;
                out[r][c + 1] = v;
                out[r + 1][c] = v;
                out[r + 1][c + 1] = v;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_and_plus_stamps() {
        let g = vec![
            vec![0, 0, 0, 0, 0],
            vec![0, 2, 0, 0, 0],
            vec![0, 0, 0, 1, 0],
            vec![0, 0, 0, 0, 0],
        ];
        let out = solve_0ca9ddb6(&g);
        assert_eq!(out[0], vec![4, 0, 4, 0, 0]);
        assert_eq!(out[1], vec![0, 2, 0, 7, 0]);
        assert_eq!(out[2], vec![4, 0, 7, 1, 7]);
        assert_eq!(out[3], vec![0, 0, 0, 7, 0]);
    }

    #[test]
    fn ring_around_marker() {
        let g = vec![vec![0, 0, 0], vec![0, 5, 0], vec![0, 0, 0]];
        assert_eq!(solve_4258a5f9(&g), vec![vec![1, 1, 1], vec![1, 5, 1], vec![1, 1, 1]]);
        assert_eq!(solve_ce22a75a(&g), grid::blank(3, 3, 1));
    }

    #[test]
    fn colored_corners() {
        let g = vec![vec![0, 0, 0], vec![0, 2, 0], vec![0, 0, 0]];
        assert_eq!(solve_a9f96cdd(&g), vec![vec![3, 0, 6], vec![0, 0, 0], vec![8, 0, 7]]);
        let g = vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]];
        assert_eq!(solve_d364b489(&g), vec![vec![0, 2, 0], vec![7, 1, 6], vec![0, 8, 0]]);
    }

    #[test]
    fn numbered_corners() {
        let mut g = grid::blank(4, 4, 0);
        g[1][1] = 5; g[1][2] = 5; g[2][1] = 5; g[2][2] = 5;
        let out = solve_95990924(&g);
        assert_eq!(out[0], vec![1, 0, 0, 2]);
        assert_eq!(out[3], vec![3, 0, 0, 4]);
    }

    #[test]
    fn complete_l_shapes() {
        let g = vec![vec![8, 0, 0], vec![8, 8, 0], vec![0, 0, 0]];
        assert_eq!(solve_3aa6fb7a(&g)[0], vec![8, 1, 0]);
    }

    #[test]
    fn outline_pairs_only() {
        let g = vec![
            vec![0, 0, 0, 0, 0],
            vec![0, 2, 2, 0, 0],
            vec![0, 0, 0, 0, 2],
        ];
        let out = solve_b27ca6d3(&g);
        assert_eq!(out[0], vec![3, 3, 3, 3, 0]);
        assert_eq!(out[2], vec![3, 3, 3, 3, 2]);
    }

    #[test]
    fn unique_color_ringed() {
        let g = vec![
            vec![1, 0, 1, 0],
            vec![0, 0, 4, 0],
            vec![1, 0, 0, 0],
        ];
        let out = solve_31aa019c(&g);
        assert_eq!(out, vec![vec![0, 2, 2, 2], vec![0, 2, 4, 2], vec![0, 2, 2, 2]]);
    }

    #[test]
    fn diagonal_trails() {
        let mut g = grid::blank(6, 6, 0);
        g[2][2] = 1; g[2][3] = 1; g[3][2] = 1; g[3][3] = 1;
        let out = solve_5c0a986e(&g);
        assert_eq!((out[1][1], out[0][0]), (1, 1));
        assert_eq!(out[4][4], 0);
    }

    #[test]
    fn strays_removed() {
        let g = vec![
            vec![7, 7, 0, 7],
            vec![7, 7, 0, 0],
            vec![0, 0, 7, 0],
        ];
        assert_eq!(solve_7f4411dc(&g), vec![vec![7, 7, 0, 0], vec![7, 7, 0, 0], vec![0, 0, 0, 0]]);
    }
}
