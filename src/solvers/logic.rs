// Two (or three) panels of one grid combined cell by cell.
//
// Panels are separated either by a full divider line through the middle or,
// without a divider, by cutting the longer side in half.

use super::TaskSolver;
use crate::grid::{self, Grid};

pub fn entries() -> Vec<TaskSolver> {
    vec![
        TaskSolver::new("0520fde7", "both panels colored -> 2", solve_0520fde7)
            .candidate("either_panel", |g| combine(g, |a, b| a || b, 2)),
        TaskSolver::new("1b2d62fb", "neither panel colored -> 8", solve_1b2d62fb),
        TaskSolver::new("f2829549", "neither panel colored -> 3", solve_f2829549),
        TaskSolver::new("99b1bc43", "exactly one panel colored -> 3", solve_99b1bc43)
            .candidate("either_panel", |g| combine(g, |a, b| a || b, 3)),
        TaskSolver::new("3428a4f5", "exactly one panel colored -> 3", solve_3428a4f5),
        TaskSolver::new("ce4f8723", "either panel colored -> 3", solve_ce4f8723),
        TaskSolver::new("fafffa47", "neither half colored -> 2", solve_fafffa47),
        TaskSolver::new("94f9d214", "neither half colored -> 2", solve_94f9d214),
        TaskSolver::new("6430c8c4", "neither panel colored -> 3", solve_6430c8c4),
        TaskSolver::new("dae9d2b5", "either half colored -> 6", solve_dae9d2b5),
        TaskSolver::new("cf98881b", "stack three panels, 4 over 9 over 1", solve_cf98881b)
            .candidate("left_panel", |g| grid::crop(g, 0, 0, g.len(), 4)),
    ]
}

/// Split into two equal panels. A middle column (then row) of one non-zero
/// color is a divider; otherwise the longer side is halved.
pub fn panels(g: &Grid) -> Option<(Grid, Grid)> {
    let (rows, cols) = grid::dims(g);
    if rows == 0 || cols == 0 { return None; }
    let mid_col_uniform = cols % 2 == 1 && cols > 1 && g[0][cols / 2] != 0
        && (0..rows).all(|r| g[r][cols / 2] == g[0][cols / 2]);
    if mid_col_uniform {
        let w = cols / 2;
        return Some((grid::crop(g, 0, 0, rows, w), grid::crop(g, 0, w + 1, rows, w)));
    }
    let mid_row_uniform = rows % 2 == 1 && rows > 1 && g[rows / 2][0] != 0
        && g[rows / 2].iter().all(|&c| c == g[rows / 2][0]);
    if mid_row_uniform {
        let h = rows / 2;
        return Some((grid::crop(g, 0, 0, h, cols), grid::crop(g, h + 1, 0, h, cols)));
    }
    if cols > rows && cols % 2 == 0 {
        let w = cols / 2;
        return Some((grid::crop(g, 0, 0, rows, w), grid::crop(g, 0, w, rows, w)));
    }
    if rows % 2 == 0 && rows > 1 {
        let h = rows / 2;
        return Some((grid::crop(g, 0, 0, h, cols), grid::crop(g, h, 0, h, cols)));
    }
    None
}

/// `color` where `op(left colored, right colored)` holds, else 0.
fn combine<F: Fn(bool, bool) -> bool>(g: &Grid, op: F, color: u8) -> Grid {
    let Some((a, b)) = panels(g) else { return g.clone() };
    a.iter().zip(b.iter()).map(|(ra, rb)| {
        ra.iter().zip(rb.iter()).map(|(&x, &y)| if op(x != 0, y != 0) { color } else { 0 }).collect()
    }).collect()
}

pub fn solve_0520fde7(g: &Grid) -> Grid {
    combine(g, |a, b| a && b, 2)
}

pub fn solve_1b2d62fb(g: &Grid) -> Grid {
    combine(g, |a, b| !a && !b, 8)
}

pub fn solve_f2829549(g: &Grid) -> Grid {
    combine(g, |a, b| !a && !b, 3)
}

pub fn solve_99b1bc43(g: &Grid) -> Grid {
    combine(g, |a, b| a != b, 3)
}

pub fn solve_3428a4f5(g: &Grid) -> Grid {
    combine(g, |a, b| a != b, 3)
}

pub fn solve_ce4f8723(g: &Grid) -> Grid {
    combine(g, |a, b| a || b, 3)
}

pub fn solve_fafffa47(g: &Grid) -> Grid {
    combine(g, |a, b| !a && !b, 2)
}

pub fn solve_94f9d214(g: &Grid) -> Grid {
    combine(g, |a, b| !a && !b, 2)
}

pub fn solve_6430c8c4(g: &Grid) -> Grid {
    combine(g, |a, b| !a && !b, 3)
}

pub fn solve_dae9d2b5(g: &Grid) -> Grid {
    combine(g, |a, b| a || b, 6)
}

/// Three 4-wide panels divided by columns of 2; earlier panels win.
pub fn solve_cf98881b(g: &Grid) -> Grid {
    let (rows, cols) = grid::dims(g);
    if cols != 14 { return g.clone(); }
    let panels: Vec<Grid> = [0, 5, 10].iter().map(|&c| grid::crop(g, 0, c, rows, 4)).collect();
    let mut out = grid::blank(rows, 4, 0);
    for panel in panels.iter().rev() {
        for r in 0..rows {
            for c in 0..4 {
                if panel[r][c] != 0 { out[r][c] = panel[r][c]; }
            }
        }
    }
    out
}
