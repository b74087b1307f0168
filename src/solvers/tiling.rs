// Outputs assembled from copies of the input: mirrors, rotations, upscaling,
// self-similar fractals and periodic continuation.

use super::TaskSolver;
use crate::grid::{self, Grid};

pub fn entries() -> Vec<TaskSolver> {
    vec![
        TaskSolver::new("007bbfb7", "place the input where the input is colored", solve_007bbfb7)
            .candidate("tile_3x3", |g| grid::tile(g, 3, 3))
            .candidate("upscale_3", |g| grid::upscale(g, 3)),
        TaskSolver::new("c3e719e8", "place the input where its majority color is", solve_c3e719e8)
            .candidate("nonzero_fractal", solve_007bbfb7),
        TaskSolver::new("8be77c9e", "input above its mirror", solve_8be77c9e)
            .candidate("repeat_v", |g| grid::tile(g, 2, 1)),
        TaskSolver::new("6fa7a44f", "input above its mirror", solve_6fa7a44f),
        TaskSolver::new("c9e6f938", "input beside its mirror", solve_c9e6f938)
            .candidate("repeat_h", |g| grid::tile(g, 1, 2)),
        TaskSolver::new("6d0aefbc", "input beside its mirror", solve_6d0aefbc),
        TaskSolver::new("4c4377d9", "mirror above the input", solve_4c4377d9)
            .candidate("input_above_mirror", solve_8be77c9e),
        TaskSolver::new("62c24649", "four-way mirror", solve_62c24649),
        TaskSolver::new("67e8384a", "four-way mirror", solve_67e8384a),
        TaskSolver::new("3af2c5a8", "four-way mirror", solve_3af2c5a8)
            .candidate("tile_2x2", |g| grid::tile(g, 2, 2)),
        TaskSolver::new("46442a0e", "four rotations around the corner", solve_46442a0e)
            .candidate("four_way_mirror", four_way_mirror),
        TaskSolver::new("7fe24cdd", "four rotations around the corner", solve_7fe24cdd),
        TaskSolver::new("a416b8f3", "repeat the input twice across", solve_a416b8f3),
        TaskSolver::new("9172f3a0", "upscale by 3", solve_9172f3a0),
        TaskSolver::new("c59eb873", "upscale by 2", solve_c59eb873),
        TaskSolver::new("b91ae062", "upscale by the number of colors", solve_b91ae062)
            .candidate("upscale_3", |g| grid::upscale(g, 3)),
        TaskSolver::new("ac0a08a4", "upscale by the number of colors", solve_ac0a08a4),
        TaskSolver::new("2072aba6", "each 5 becomes a 1-2 checker block", solve_2072aba6),
        TaskSolver::new("8f2ea7aa", "self-similar copy of the 3x3 shape", solve_8f2ea7aa),
        TaskSolver::new("e9afcf9a", "alternate the two rows' colors", solve_e9afcf9a),
        TaskSolver::new("963e52fc", "continue the stripe pattern to double width", solve_963e52fc)
            .candidate("repeat_h", |g| grid::tile(g, 1, 2)),
        TaskSolver::new("017c7c7b", "continue the pattern to 9 rows in color 2", solve_017c7c7b)
            .candidate("append_top_half", |g| {
                let half: Grid = g.iter().take(3).cloned().collect();
                grid::replace_color(&grid::vconcat(g, &half), 1, 2)
            }),
    ]
}

/// An n x n grid of n x n blocks: block (i, j) is a copy of `g` when
/// `keep(g[i][j])`, otherwise background.
fn fractal<F: Fn(u8) -> bool>(g: &Grid, keep: F) -> Grid {
    let (rows, cols) = grid::dims(g);
    let mut out = grid::blank(rows * rows, cols * cols, 0);
    for i in 0..rows {
        for j in 0..cols {
            if keep(g[i][j]) {
                out = grid::paste(&out, g, i * rows, j * cols);
            }
        }
    }
    out
}

pub fn solve_007bbfb7(g: &Grid) -> Grid {
    fractal(g, |v| v != 0)
}

pub fn solve_c3e719e8(g: &Grid) -> Grid {
    let major = grid::most_common_color(g);
    fractal(g, |v| v == major)
}

pub fn solve_8be77c9e(g: &Grid) -> Grid {
    grid::vconcat(g, &grid::flip_v(g))
}

pub fn solve_6fa7a44f(g: &Grid) -> Grid {
    grid::vconcat(g, &grid::flip_v(g))
}

pub fn solve_c9e6f938(g: &Grid) -> Grid {
    grid::hconcat(g, &grid::flip_h(g))
}

pub fn solve_6d0aefbc(g: &Grid) -> Grid {
    grid::hconcat(g, &grid::flip_h(g))
}

pub fn solve_4c4377d9(g: &Grid) -> Grid {
    grid::vconcat(&grid::flip_v(g), g)
}

fn four_way_mirror(g: &Grid) -> Grid {
    let top = grid::hconcat(g, &grid::flip_h(g));
    grid::vconcat(&top, &grid::flip_v(&top))
}

pub fn solve_62c24649(g: &Grid) -> Grid {
    four_way_mirror(g)
}

pub fn solve_67e8384a(g: &Grid) -> Grid {
    four_way_mirror(g)
}

pub fn solve_3af2c5a8(g: &Grid) -> Grid {
    four_way_mirror(g)
}

/// Clockwise pinwheel: the input, then each quarter turn around the centre.
fn pinwheel(g: &Grid) -> Grid {
    let (rows, cols) = grid::dims(g);
    if rows != cols { return g.clone(); }
    let top = grid::hconcat(g, &grid::rotate_cw(g));
    let bottom = grid::hconcat(&grid::rotate_ccw(g), &grid::rotate_180(g));
    grid::vconcat(&top, &bottom)
}

pub fn solve_46442a0e(g: &Grid) -> Grid {
    pinwheel(g)
}

pub fn solve_7fe24cdd(g: &Grid) -> Grid {
    pinwheel(g)
}

pub fn solve_a416b8f3(g: &Grid) -> Grid {
    grid::tile(g, 1, 2)
}

pub fn solve_9172f3a0(g: &Grid) -> Grid {
    grid::upscale(g, 3)
}

pub fn solve_c59eb873(g: &Grid) -> Grid {
    grid::upscale(g, 2)
}

fn upscale_by_color_count(g: &Grid) -> Grid {
    let k = grid::unique_colors(g).into_iter().filter(|&c| c != 0).count().max(1);
    grid::upscale(g, k)
}

pub fn solve_b91ae062(g: &Grid) -> Grid {
    upscale_by_color_count(g)
}

pub fn solve_ac0a08a4(g: &Grid) -> Grid {
    upscale_by_color_count(g)
}

pub fn solve_2072aba6(g: &Grid) -> Grid {
    let mut out = grid::upscale(g, 2);
    for (r, row) in g.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            if v == 5 {
                out[2 * r][2 * c] = 1;
                out[2 * r][2 * c + 1] = 2;
                out[2 * r + 1][2 * c] = 2;
                out[2 * r + 1][2 * c + 1] = 1;
            }
        }
    }
    out
}

/// The 9x9 input holds one 3x3 shape aligned to the 3x3 block lattice.
pub fn solve_8f2ea7aa(g: &Grid) -> Grid {
    let Some((r0, c0, _, _)) = grid::bbox_of(g, |v| v != 0) else { return g.clone() };
    let shape = grid::crop(g, r0 / 3 * 3, c0 / 3 * 3, 3, 3);
    if grid::dims(&shape) != (3, 3) { return g.clone(); }
    let (rows, cols) = grid::dims(g);
    let mut out = grid::blank(rows, cols, 0);
    for i in 0..3 {
        for j in 0..3 {
            if shape[i][j] != 0 {
                out = grid::paste(&out, &shape, i * 3, j * 3);
            }
        }
    }
    out
}

/// Two uniform rows; output alternates their colors in a checkerboard.
pub fn solve_e9afcf9a(g: &Grid) -> Grid {
    if g.len() != 2 || g[0].is_empty() { return g.clone(); }
    let (a, b) = (g[0][0], g[1][0]);
    let cols = g[0].len();
    vec![
        (0..cols).map(|c| if c % 2 == 0 { a } else { b }).collect(),
        (0..cols).map(|c| if c % 2 == 0 { b } else { a }).collect(),
    ]
}

/// Extend every row to `width` cells following the grid's horizontal period.
fn continue_rows(g: &Grid, width: usize) -> Grid {
    let period = match grid::row_period(g) {
        Some(p) => p,
        None => return g.clone(),
    };
    g.iter().map(|row| (0..width).map(|c| row[c % period]).collect()).collect()
}

pub fn solve_963e52fc(g: &Grid) -> Grid {
    let (_, cols) = grid::dims(g);
    continue_rows(g, cols * 2)
}

pub fn solve_017c7c7b(g: &Grid) -> Grid {
    let extended = grid::transpose(&continue_rows(&grid::transpose(g), 9));
    grid::replace_color(&extended, 1, 2)
}
