// Outputs that encode a count or a yes/no property of the input.

use super::TaskSolver;
use crate::grid::{self, Connectivity, Grid};

pub fn entries() -> Vec<TaskSolver> {
    vec![
        TaskSolver::new("d631b094", "one row holding every colored cell", solve_d631b094),
        TaskSolver::new("44f52bb0", "1 when mirror-symmetric, else 7", solve_44f52bb0)
            .candidate("vertical_symmetry", |g| vec![vec![if grid::is_symmetric_v(g) { 1 } else { 7 }]]),
        TaskSolver::new("794b24be", "count blue cells into a fixed slot order", solve_794b24be),
        TaskSolver::new("ff28f65a", "count red squares into a checker slot order", solve_ff28f65a)
            .candidate("count_red_cells", |g| slots(grid::count_color(g, 2), &CHECKER_SLOTS, 1)),
        TaskSolver::new("d0f5fe59", "diagonal as long as the object count", solve_d0f5fe59),
        TaskSolver::new("1fad071e", "count blue 2x2 squares in a row of five", solve_1fad071e),
        TaskSolver::new("6e02f1e3", "color count picks a line of 5", solve_6e02f1e3),
        TaskSolver::new("f8b3ba0a", "minority colors ordered by frequency", solve_f8b3ba0a),
        TaskSolver::new("445eab21", "color of the largest outline as a 2x2", solve_445eab21),
        TaskSolver::new("239be575", "8 when the two red squares are linked", solve_239be575)
            .candidate("always_connected", |_| vec![vec![8]]),
        TaskSolver::new("6773b310", "blocks holding two 6 cells become 1", solve_6773b310),
    ]
}

pub fn solve_d631b094(g: &Grid) -> Grid {
    let cells: Vec<u8> = g.iter().flatten().copied().filter(|&c| c != 0).collect();
    if cells.is_empty() { return g.clone(); }
    vec![cells]
}

pub fn solve_44f52bb0(g: &Grid) -> Grid {
    vec![vec![if grid::is_symmetric_h(g) { 1 } else { 7 }]]
}

const ROW_SLOTS: [(usize, usize); 4] = [(0, 0), (0, 1), (0, 2), (1, 1)];
const CHECKER_SLOTS: [(usize, usize); 5] = [(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)];

/// A 3x3 grid with the first `n` slots set to `color`.
fn slots(n: usize, order: &[(usize, usize)], color: u8) -> Grid {
    let mut out = grid::blank(3, 3, 0);
    for &(r, c) in order.iter().take(n) {
        out[r][c] = color;
    }
    out
}

pub fn solve_794b24be(g: &Grid) -> Grid {
    slots(grid::count_color(g, 1), &ROW_SLOTS, 2)
}

pub fn solve_ff28f65a(g: &Grid) -> Grid {
    let squares = grid::components(g, Connectivity::Four, Some(0))
        .iter()
        .filter(|o| o.color == 2)
        .count();
    slots(squares, &CHECKER_SLOTS, 1)
}

pub fn solve_d0f5fe59(g: &Grid) -> Grid {
    let n = grid::components(g, Connectivity::Eight, Some(0)).len();
    let mut out = grid::blank(n, n, 0);
    for (i, row) in out.iter_mut().enumerate() {
        row[i] = 8;
    }
    out
}

pub fn solve_1fad071e(g: &Grid) -> Grid {
    let n = grid::components(g, Connectivity::Four, Some(0))
        .iter()
        .filter(|o| o.color == 1 && o.height() == 2 && o.width() == 2 && o.is_rectangle())
        .count()
        .min(5);
    vec![(0..5).map(|i| if i < n { 1 } else { 0 }).collect()]
}

pub fn solve_6e02f1e3(g: &Grid) -> Grid {
    let mut out = grid::blank(3, 3, 0);
    match grid::unique_colors(g).len() {
        1 => out[0] = vec![5, 5, 5],
        2 => (0..3).for_each(|i| out[i][i] = 5),
        3 => (0..3).for_each(|i| out[i][2 - i] = 5),
        _ => return g.clone(),
    }
    out
}

/// Colors other than the background and the dominant one, most frequent
/// first, as a column.
pub fn solve_f8b3ba0a(g: &Grid) -> Grid {
    let counts = grid::color_counts(g);
    let mut colors: Vec<u8> = (1..grid::COLORS as u8).filter(|&c| counts[c as usize] > 0).collect();
    colors.sort_by(|&a, &b| counts[b as usize].cmp(&counts[a as usize]).then(a.cmp(&b)));
    if colors.len() < 2 { return g.clone(); }
    colors.into_iter().skip(1).map(|c| vec![c]).collect()
}

pub fn solve_445eab21(g: &Grid) -> Grid {
    grid::components(g, Connectivity::Four, Some(0))
        .iter()
        .max_by_key(|o| o.height() * o.width())
        .map(|o| grid::blank(2, 2, o.color))
        .unwrap_or_else(|| g.clone())
}

/// Linked means one 4-connected region of red and azure joins both squares.
pub fn solve_239be575(g: &Grid) -> Grid {
    let masked: Grid = g.iter()
        .map(|row| row.iter().map(|&c| if c == 2 || c == 8 { 1 } else { 0 }).collect())
        .collect();
    let linked = grid::components(&masked, Connectivity::Four, Some(0))
        .iter()
        .any(|region| {
            let reds = grid::components(g, Connectivity::Four, Some(0))
                .into_iter()
                .filter(|o| o.color == 2 && region.contains(o.min_r, o.min_c))
                .count();
            reds >= 2
        });
    vec![vec![if linked { 8 } else { 0 }]]
}

pub fn solve_6773b310(g: &Grid) -> Grid {
    grid::split_by_lines(g, 8).iter().map(|row| {
        row.iter().map(|b| if grid::count_color(b, 6) == 2 { 1 } else { 0 }).collect()
    }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_cells_in_a_row() {
        let g = vec![vec![0, 7, 0], vec![7, 0, 7]];
        assert_eq!(solve_d631b094(&g), vec![vec![7, 7, 7]]);
    }

    #[test]
    fn symmetry_flag() {
        assert_eq!(solve_44f52bb0(&vec![vec![2, 0, 2]]), vec![vec![1]]);
        assert_eq!(solve_44f52bb0(&vec![vec![2, 2, 0]]), vec![vec![7]]);
    }

    #[test]
    fn slot_orders() {
        let g = vec![vec![1, 0, 1], vec![0, 1, 0], vec![0, 0, 1]];
        assert_eq!(solve_794b24be(&g), vec![vec![2, 2, 2], vec![0, 2, 0], vec![0, 0, 0]]);
        let g = vec![
            vec![2, 2, 0, 2, 2],
            vec![2, 2, 0, 2, 2],
            vec![0, 0, 0, 0, 0],
            vec![2, 2, 0, 0, 0],
            vec![2, 2, 0, 0, 0],
        ];
        assert_eq!(solve_ff28f65a(&g), vec![vec![1, 0, 1], vec![0, 1, 0], vec![0, 0, 0]]);
    }

    #[test]
    fn diagonal_per_object() {
        let g = vec![vec![8, 0, 8], vec![0, 0, 0], vec![8, 8, 0]];
        let out = solve_d0f5fe59(&g);
        assert_eq!(out, vec![vec![8, 0, 0], vec![0, 8, 0], vec![0, 0, 8]]);
    }

    #[test]
    fn blue_squares_counted() {
        let g = vec![
            vec![1, 1, 0, 2, 2],
            vec![1, 1, 0, 2, 2],
            vec![0, 0, 0, 0, 1],
        ];
        assert_eq!(solve_1fad071e(&g), vec![vec![1, 0, 0, 0, 0]]);
    }

    #[test]
    fn color_count_lines() {
        assert_eq!(solve_6e02f1e3(&grid::blank(3, 3, 4))[0], vec![5, 5, 5]);
        let g = vec![vec![2, 3, 4], vec![2, 2, 2], vec![2, 2, 2]];
        assert_eq!(solve_6e02f1e3(&g), vec![vec![0, 0, 5], vec![0, 5, 0], vec![5, 0, 0]]);
    }

    #[test]
    fn minority_colors() {
        let g = vec![vec![1, 1, 1, 1, 2, 2, 3, 3, 3, 4]];
        assert_eq!(solve_f8b3ba0a(&g), vec![vec![3], vec![2], vec![4]]);
    }

    #[test]
    fn largest_outline_color() {
        let g = vec![
            vec![7, 7, 7, 0, 0],
            vec![7, 0, 7, 0, 6],
            vec![7, 7, 7, 0, 6],
        ];
        assert_eq!(solve_445eab21(&g), vec![vec![7, 7], vec![7, 7]]);
    }

    #[test]
    fn linked_squares() {
        let g = vec![
            vec![2, 2, 8, 8, 2, 2],
            vec![2, 2, 0, 0, 2, 2],
        ];
        assert_eq!(solve_239be575(&g), vec![vec![8]]);
        let g = vec![
            vec![2, 2, 8, 0, 2, 2],
            vec![2, 2, 0, 0, 2, 2],
        ];
        assert_eq!(solve_239be575(&g), vec![vec![0]]);
    }

    #[test]
    fn blocks_with_two_sixes() {
        let g = vec![
            vec![6, 6, 8, 0, 6],
            vec![8, 8, 8, 8, 8],
            vec![0, 0, 8, 6, 6],
        ];
        assert_eq!(solve_6773b310(&g), vec![vec![1, 0], vec![0, 1]]);
    }
}
