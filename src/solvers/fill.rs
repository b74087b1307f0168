// Filling regions: enclosed holes, rectangle interiors, bounding boxes.

use super::TaskSolver;
use crate::grid::{self, Connectivity, Grid, Object};

pub fn entries() -> Vec<TaskSolver> {
    vec![
        TaskSolver::new("00d62c1b", "fill holes enclosed by 3 with 4", solve_00d62c1b)
            .candidate("fill_bbox_interiors", |g| fill_interiors(g, Some(3), 4)),
        TaskSolver::new("a5313dff", "fill holes enclosed by 2 with 1", solve_a5313dff)
            .candidate("fill_bbox_interiors", |g| fill_interiors(g, Some(2), 1)),
        TaskSolver::new("7b6016b9", "enclosed background 2, outside background 3", solve_7b6016b9)
            .candidate("enclosed_only", |g| grid::fill_enclosed(g, 0, 2)),
        TaskSolver::new("bb43febb", "interior of 5-rectangles becomes 2", solve_bb43febb),
        TaskSolver::new("50cb2852", "interior of every rectangle becomes 8", solve_50cb2852),
        TaskSolver::new("b6afb2da", "rectangles get corners 1, edges 4, interior 2", solve_b6afb2da)
            .candidate("interior_only", |g| fill_interiors(g, Some(5), 2)),
        TaskSolver::new("4347f46a", "hollow out solid rectangles", solve_4347f46a),
        TaskSolver::new("6f8cd79b", "draw an 8 border", solve_6f8cd79b),
        TaskSolver::new("6d75e8bb", "empty cells in the 8-shape's box become 2", solve_6d75e8bb),
        TaskSolver::new("60b61512", "complete each 4-shape's box with 7", solve_60b61512),
        TaskSolver::new("56ff96f3", "color pairs span filled rectangles", solve_56ff96f3),
        TaskSolver::new("5582e5ca", "fill with the most common color", solve_5582e5ca),
    ]
}

pub fn solve_00d62c1b(g: &Grid) -> Grid {
    grid::fill_enclosed(g, 0, 4)
}

pub fn solve_a5313dff(g: &Grid) -> Grid {
    grid::fill_enclosed(g, 0, 1)
}

pub fn solve_7b6016b9(g: &Grid) -> Grid {
    grid::replace_color(&grid::fill_enclosed(g, 0, 2), 0, 3)
}

fn objects_of(g: &Grid, color: Option<u8>) -> Vec<Object> {
    grid::components(g, Connectivity::Four, Some(0))
        .into_iter()
        .filter(|o| color.map_or(true, |c| o.color == c))
        .collect()
}

/// Recolor object cells strictly inside each object's bounding box.
fn fill_interiors(g: &Grid, color: Option<u8>, fill: u8) -> Grid {
    let mut out = g.clone();
    for o in objects_of(g, color) {
        for &(r, c) in &o.cells {
            if r > o.min_r && r < o.max_r && c > o.min_c && c < o.max_c {
                out[r][c] = fill;
            }
        }
    }
    out
}

pub fn solve_bb43febb(g: &Grid) -> Grid {
    fill_interiors(g, Some(5), 2)
}

pub fn solve_50cb2852(g: &Grid) -> Grid {
    fill_interiors(g, None, 8)
}

pub fn solve_4347f46a(g: &Grid) -> Grid {
    fill_interiors(g, None, 0)
}

pub fn solve_b6afb2da(g: &Grid) -> Grid {
    let mut out = g.clone();
    for o in objects_of(g, Some(5)) {
        for &(r, c) in &o.cells {
            let edge_r = r == o.min_r || r == o.max_r;
            let edge_c = c == o.min_c || c == o.max_c;
            out[r][c] = match (edge_r, edge_c) {
                (true, true) => 1,
                (true, false) | (false, true) => 4,
                (false, false) => 2,
            };
        }
    }
    out
}

pub fn solve_6f8cd79b(g: &Grid) -> Grid {
    let (rows, cols) = grid::dims(g);
    let mut out = g.clone();
    for r in 0..rows {
        for c in 0..cols {
            if r == 0 || c == 0 || r + 1 == rows || c + 1 == cols {
                out[r][c] = 8;
            }
        }
    }
    out
}

fn fill_box(out: &mut Grid, (r0, c0, r1, c1): (usize, usize, usize, usize), from: u8, to: u8) {
    for row in out.iter_mut().take(r1 + 1).skip(r0) {
        for v in row.iter_mut().take(c1 + 1).skip(c0) {
            if *v == from { *v = to; }
        }
    }
}

pub fn solve_6d75e8bb(g: &Grid) -> Grid {
    let mut out = g.clone();
    if let Some(bbox) = grid::bbox_of(g, |v| v == 8) {
        fill_box(&mut out, bbox, 0, 2);
    }
    out
}

pub fn solve_60b61512(g: &Grid) -> Grid {
    let mut out = g.clone();
    for o in grid::components(g, Connectivity::Eight, Some(0)) {
        fill_box(&mut out, (o.min_r, o.min_c, o.max_r, o.max_c), 0, 7);
    }
    out
}

pub fn solve_56ff96f3(g: &Grid) -> Grid {
    let mut out = g.clone();
    for color in grid::unique_colors(g).into_iter().filter(|&c| c != 0) {
        if let Some(bbox) = grid::bbox_of(g, |v| v == color) {
            fill_box(&mut out, bbox, 0, color);
        }
    }
    out
}

pub fn solve_5582e5ca(g: &Grid) -> Grid {
    let (rows, cols) = grid::dims(g);
    grid::blank(rows, cols, grid::most_common_color(g))
}
