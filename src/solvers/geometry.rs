// Rigid motions of the whole grid.

use super::TaskSolver;
use crate::grid::{self, Grid};

pub fn entries() -> Vec<TaskSolver> {
    vec![
        TaskSolver::new("3c9b0459", "rotate 180 degrees", solve_3c9b0459)
            .candidate("flip_h", grid::flip_h)
            .candidate("flip_v", grid::flip_v),
        TaskSolver::new("6150a2bd", "rotate 180 degrees", solve_6150a2bd)
            .candidate("transpose", grid::transpose),
        TaskSolver::new("67a3c6ac", "mirror left/right", solve_67a3c6ac)
            .candidate("flip_v", grid::flip_v)
            .candidate("transpose", grid::transpose),
        TaskSolver::new("68b16354", "mirror top/bottom", solve_68b16354)
            .candidate("flip_h", grid::flip_h),
        TaskSolver::new("74dd1130", "transpose", solve_74dd1130)
            .candidate("rotate_cw", grid::rotate_cw)
            .candidate("rotate_ccw", grid::rotate_ccw),
        TaskSolver::new("9dfd6313", "transpose", solve_9dfd6313)
            .candidate("rotate_cw", grid::rotate_cw),
        TaskSolver::new("ed36ccf7", "rotate 90 degrees counter-clockwise", solve_ed36ccf7)
            .candidate("rotate_cw", grid::rotate_cw)
            .candidate("transpose", grid::transpose),
        TaskSolver::new("25ff71a9", "shift everything down one row", solve_25ff71a9)
            .candidate("gravity_down", |g| grid::gravity_down(g, 0)),
        TaskSolver::new("a79310a0", "shift down one row and recolor 8 to 2", solve_a79310a0)
            .candidate("shift_only", |g| grid::shift(g, 1, 0, 0)),
        TaskSolver::new("1e0a9b12", "cells fall to the bottom", solve_1e0a9b12)
            .candidate("shift_down", |g| grid::shift(g, 1, 0, 0)),
    ]
}

pub fn solve_3c9b0459(g: &Grid) -> Grid {
    grid::rotate_180(g)
}

pub fn solve_6150a2bd(g: &Grid) -> Grid {
    grid::rotate_180(g)
}

pub fn solve_67a3c6ac(g: &Grid) -> Grid {
    grid::flip_h(g)
}

pub fn solve_68b16354(g: &Grid) -> Grid {
    grid::flip_v(g)
}

pub fn solve_74dd1130(g: &Grid) -> Grid {
    grid::transpose(g)
}

pub fn solve_9dfd6313(g: &Grid) -> Grid {
    grid::transpose(g)
}

pub fn solve_ed36ccf7(g: &Grid) -> Grid {
    grid::rotate_ccw(g)
}

pub fn solve_25ff71a9(g: &Grid) -> Grid {
    grid::shift(g, 1, 0, 0)
}

pub fn solve_a79310a0(g: &Grid) -> Grid {
    grid::replace_color(&grid::shift(g, 1, 0, 0), 8, 2)
}

pub fn solve_1e0a9b12(g: &Grid) -> Grid {
    grid::gravity_down(g, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_half_turn() {
        let g = vec![vec![3, 3, 8], vec![3, 7, 0], vec![5, 0, 0]];
        assert_eq!(solve_6150a2bd(&g), vec![vec![0, 0, 5], vec![0, 7, 3], vec![8, 3, 3]]);
    }

    #[test]
    fn quarter_turn_counter_clockwise() {
        let g = vec![vec![9, 0, 0], vec![9, 9, 9], vec![9, 9, 9]];
        assert_eq!(solve_ed36ccf7(&g), vec![vec![0, 9, 9], vec![0, 9, 9], vec![9, 9, 9]]);
    }

    #[test]
    fn shift_down_and_recolor() {
        let g = vec![vec![8, 8, 0], vec![8, 8, 0], vec![0, 0, 0]];
        assert_eq!(solve_a79310a0(&g), vec![vec![0, 0, 0], vec![2, 2, 0], vec![2, 2, 0]]);
    }

    #[test]
    fn gravity_keeps_column_order() {
        let g = vec![vec![0, 4, 0], vec![9, 0, 0], vec![0, 4, 1]];
        assert_eq!(solve_1e0a9b12(&g), vec![vec![0, 0, 0], vec![0, 4, 0], vec![9, 4, 1]]);
    }
}
