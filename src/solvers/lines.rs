// Lines drawn from, between or through colored seed cells.

use super::TaskSolver;
use crate::grid::{self, Grid, DIRS4};

pub fn entries() -> Vec<TaskSolver> {
    vec![
        TaskSolver::new("a699fb00", "gap between two blue cells becomes 2", solve_a699fb00),
        TaskSolver::new("22eb0ac0", "rows with matching ends are filled", solve_22eb0ac0),
        TaskSolver::new("29c11459", "ends meet in the middle at a 5", solve_29c11459)
            .candidate("fill_from_left", |g| {
                g.iter().map(|row| vec![row.first().copied().unwrap_or(0); row.len()]).collect()
            }),
        TaskSolver::new("d037b0a7", "colors drip downward", solve_d037b0a7)
            .candidate("drip_first_row_only", |g| {
                let cols = grid::dims(g).1;
                let mut out = g.clone();
                for c in 0..cols {
                    for r in 1..g.len() {
                        if out[r][c] == 0 { out[r][c] = g[0][c]; }
                    }
                }
                out
            }),
        TaskSolver::new("3ac3eb23", "zigzag down from each top cell", solve_3ac3eb23)
            .candidate("straight_down", |g| {
                let (rows, cols) = grid::dims(g);
                let mut out = g.clone();
                for c in 0..cols {
                    if rows > 0 && g[0][c] != 0 {
                        (0..rows).for_each(|r| out[r][c] = g[0][c]);
                    }
                }
                out
            }),
        TaskSolver::new("a65b410d", "staircase of 3 above and 1 below the bar", solve_a65b410d),
        TaskSolver::new("e9614598", "plus of 3 midway between two 1 cells", solve_e9614598),
    ]
}

pub fn solve_a699fb00(g: &Grid) -> Grid {
    let mut out = g.clone();
    for (r, row) in g.iter().enumerate() {
        for c in 1..row.len().saturating_sub(1) {
            if row[c] == 0 && row[c - 1] == 1 && row[c + 1] == 1 {
                out[r][c] = 2;
            }
        }
    }
    out
}

pub fn solve_22eb0ac0(g: &Grid) -> Grid {
    g.iter().map(|row| match (row.first(), row.last()) {
        (Some(&a), Some(&b)) if a != 0 && a == b => vec![a; row.len()],
        _ => row.clone(),
    }).collect()
}

pub fn solve_29c11459(g: &Grid) -> Grid {
    g.iter().map(|row| {
        let n = row.len();
        match (row.first(), row.last()) {
            (Some(&a), Some(&b)) if n > 2 && a != 0 && b != 0 => {
                let mut out = vec![a; n / 2];
                if n % 2 == 1 { out.push(5); }
                out.extend(std::iter::repeat(b).take(n / 2));
                out
            }
            _ => row.clone(),
        }
    }).collect()
}

pub fn solve_d037b0a7(g: &Grid) -> Grid {
    let mut out = g.clone();
    for r in 1..out.len() {
        for c in 0..out[r].len() {
            if out[r][c] == 0 { out[r][c] = out[r - 1][c]; }
        }
    }
    out
}

pub fn solve_3ac3eb23(g: &Grid) -> Grid {
    let (rows, cols) = grid::dims(g);
    let mut out = g.clone();
    if rows == 0 { return out; }
    for c in 0..cols {
        let color = g[0][c];
        if color == 0 { continue; }
        for r in 1..rows {
            if r % 2 == 0 {
                out[r][c] = color;
            } else {
                for dc in [-1, 1] {
                    if let Some((_, nc)) = grid::offset(g, r, c, 0, dc) {
                        out[r][nc] = color;
                    }
                }
            }
        }
    }
    out
}

/// The red bar starts at column 0. Row k above it gets k more cells of 3,
/// row k below it k fewer cells of 1.
pub fn solve_a65b410d(g: &Grid) -> Grid {
    let (rows, cols) = grid::dims(g);
    let Some(bar) = (0..rows).find(|&r| g[r][0] == 2) else { return g.clone() };
    let len = g[bar].iter().take_while(|&&c| c == 2).count();
    let mut out = g.clone();
    for r in 0..rows {
        let (color, n) = if r < bar {
            (3, len + (bar - r))
        } else if r > bar {
            (1, len.saturating_sub(r - bar))
        } else {
            continue;
        };
        for c in 0..n.min(cols) {
            out[r][c] = color;
        }
    }
    out
}

pub fn solve_e9614598(g: &Grid) -> Grid {
    let (rows, cols) = grid::dims(g);
    let ones: Vec<(usize, usize)> = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .filter(|&(r, c)| g[r][c] == 1)
        .collect();
    let &[(r0, c0), (r1, c1)] = ones.as_slice() else { return g.clone() };
    let (mr, mc) = ((r0 + r1) / 2, (c0 + c1) / 2);
    let mut out = g.clone();
    out[mr][mc] = 3;
    for &(dr, dc) in &DIRS4 {
        if let Some((r, c)) = grid::offset(g, mr, mc, dr, dc) {
            out[r][c] = 3;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_between_blue() {
        let g = vec![vec![1, 0, 1, 0, 0], vec![0, 1, 0, 1, 0]];
        assert_eq!(solve_a699fb00(&g), vec![vec![1, 2, 1, 0, 0], vec![0, 1, 2, 1, 0]]);
    }

    #[test]
    fn matching_ends_fill() {
        let g = vec![vec![3, 0, 0, 3], vec![4, 0, 0, 8]];
        assert_eq!(solve_22eb0ac0(&g), vec![vec![3, 3, 3, 3], vec![4, 0, 0, 8]]);
    }

    #[test]
    fn ends_meet_at_five() {
        let g = vec![vec![1, 0, 0, 0, 2], vec![0, 0, 0, 0, 0]];
        assert_eq!(solve_29c11459(&g)[0], vec![1, 1, 5, 2, 2]);
        assert_eq!(solve_29c11459(&g)[1], vec![0; 5]);
    }

    #[test]
    fn drip_down() {
        let g = vec![vec![0, 2, 0], vec![7, 0, 0], vec![0, 0, 6]];
        assert_eq!(solve_d037b0a7(&g), vec![vec![0, 2, 0], vec![7, 2, 0], vec![7, 2, 6]]);
    }

    #[test]
    fn zigzag() {
        let g = vec![vec![0, 4, 0], vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 0]];
        assert_eq!(
            solve_3ac3eb23(&g),
            vec![vec![0, 4, 0], vec![4, 0, 4], vec![0, 4, 0], vec![4, 0, 4]]
        );
    }

    #[test]
    fn staircase() {
        let g = vec![
            vec![0, 0, 0, 0, 0],
            vec![2, 2, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ];
        assert_eq!(
            solve_a65b410d(&g),
            vec![
                vec![3, 3, 3, 0, 0],
                vec![2, 2, 0, 0, 0],
                vec![1, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn plus_at_midpoint() {
        let g = vec![vec![0; 7], vec![1, 0, 0, 0, 0, 0, 1], vec![0; 7]];
        let out = solve_e9614598(&g);
        assert_eq!(out[1], vec![1, 0, 3, 3, 3, 0, 1]);
        assert_eq!(out[0][3], 3);
        assert_eq!(out[2][3], 3);
    }
}
