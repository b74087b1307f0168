// Outputs cut out of, or summarised from, a region of the input: halves,
// bounding boxes, selected objects, divided blocks, symmetry holes.

use super::TaskSolver;
use crate::grid::{self, Connectivity, Grid, Object};

pub fn entries() -> Vec<TaskSolver> {
    vec![
        TaskSolver::new("2dee498d", "first of three repeats", solve_2dee498d)
            .candidate("left_half", |g| {
                let (rows, cols) = grid::dims(g);
                grid::crop(g, 0, 0, rows, cols / 2)
            }),
        TaskSolver::new("7b7f7511", "one of two repeats", solve_7b7f7511),
        TaskSolver::new("d10ecb37", "top-left 2x2", solve_d10ecb37),
        TaskSolver::new("5bd6f4ac", "top-right 3x3 of the 9x9", solve_5bd6f4ac)
            .candidate("top_left_3x3", |g| grid::crop(g, 0, 0, 3, 3)),
        TaskSolver::new("a740d043", "crop the shape off the blue background", solve_a740d043)
            .candidate("crop_keep_blue", |g| grid::crop_to_bbox(g, 1)),
        TaskSolver::new("1cf80156", "crop to the shape", solve_1cf80156),
        TaskSolver::new("28bf18c6", "crop to the shape and repeat it", solve_28bf18c6)
            .candidate("crop_only", |g| grid::crop_to_bbox(g, 0)),
        TaskSolver::new("7468f01a", "crop to the shape and mirror it", solve_7468f01a)
            .candidate("crop_only", |g| grid::crop_to_bbox(g, 0)),
        TaskSolver::new("be94b721", "largest object", solve_be94b721)
            .candidate("first_object", |g| first_object(g)),
        TaskSolver::new("1f85a75f", "largest object", solve_1f85a75f),
        TaskSolver::new("23b5c85d", "smallest rectangle", solve_23b5c85d),
        TaskSolver::new("8efcae92", "blue block with the most red cells", solve_8efcae92)
            .candidate("largest_block", |g| pick_block(g, |o, _| o.area())),
        TaskSolver::new("2013d3e2", "top-left quarter of the symmetric shape", solve_2013d3e2),
        TaskSolver::new("d23f8c26", "keep only the middle column", solve_d23f8c26),
        TaskSolver::new("2dc579da", "the quadrant holding the odd cell", solve_2dc579da),
        TaskSolver::new("88a62173", "the quadrant that differs", solve_88a62173)
            .candidate("top_left_quadrant", |g| grid::crop(g, 0, 0, 2, 2)),
        TaskSolver::new("9ecd008a", "recover the hidden patch of a symmetric grid", solve_9ecd008a)
            .candidate("repaired_full_grid", |g| repair_symmetry(g, 0)),
        TaskSolver::new("5614dbcf", "majority of each 3x3 block, ignoring noise", solve_5614dbcf)
            .candidate("block_centres", |g| {
                (0..g.len() / 3).map(|i| (0..g[0].len() / 3).map(|j| g[i * 3 + 1][j * 3 + 1]).collect()).collect()
            }),
        TaskSolver::new("780d0b14", "one cell per divided region", solve_780d0b14),
        TaskSolver::new("90c28cc7", "collapse the block picture", solve_90c28cc7),
        TaskSolver::new("746b3537", "collapse repeated rows and columns", solve_746b3537)
            .candidate("dedupe_rows_only", grid::dedupe_rows),
        TaskSolver::new("4be741c5", "list the stripe colors in order", solve_4be741c5),
        TaskSolver::new("1190e5a7", "one cell per region between lines", solve_1190e5a7),
        TaskSolver::new("9f236235", "block colors, mirrored", solve_9f236235)
            .candidate("unmirrored", block_colors),
    ]
}

pub fn solve_2dee498d(g: &Grid) -> Grid {
    let (rows, cols) = grid::dims(g);
    grid::crop(g, 0, 0, rows, cols / 3)
}

pub fn solve_7b7f7511(g: &Grid) -> Grid {
    let (rows, cols) = grid::dims(g);
    let left = grid::crop(g, 0, 0, rows, cols / 2);
    if cols % 2 == 0 && left == grid::crop(g, 0, cols / 2, rows, cols / 2) {
        return left;
    }
    let top = grid::crop(g, 0, 0, rows / 2, cols);
    if rows % 2 == 0 && top == grid::crop(g, rows / 2, 0, rows / 2, cols) {
        return top;
    }
    g.clone()
}

pub fn solve_d10ecb37(g: &Grid) -> Grid {
    grid::crop(g, 0, 0, 2, 2)
}

pub fn solve_5bd6f4ac(g: &Grid) -> Grid {
    let (_, cols) = grid::dims(g);
    grid::crop(g, 0, cols.saturating_sub(3), 3, 3)
}

pub fn solve_a740d043(g: &Grid) -> Grid {
    grid::replace_color(&grid::crop_to_bbox(g, 1), 1, 0)
}

pub fn solve_1cf80156(g: &Grid) -> Grid {
    grid::crop_to_bbox(g, 0)
}

pub fn solve_28bf18c6(g: &Grid) -> Grid {
    grid::tile(&grid::crop_to_bbox(g, 0), 1, 2)
}

pub fn solve_7468f01a(g: &Grid) -> Grid {
    grid::flip_h(&grid::crop_to_bbox(g, 0))
}

fn objects(g: &Grid) -> Vec<Object> {
    grid::components(g, Connectivity::Eight, Some(0))
}

fn first_object(g: &Grid) -> Grid {
    objects(g).first().map(|o| o.to_grid(g, 0)).unwrap_or_else(|| g.clone())
}

fn largest_object(g: &Grid) -> Grid {
    objects(g).iter()
        .max_by_key(|o| o.area())
        .map(|o| o.to_grid(g, 0))
        .unwrap_or_else(|| g.clone())
}

pub fn solve_be94b721(g: &Grid) -> Grid {
    largest_object(g)
}

pub fn solve_1f85a75f(g: &Grid) -> Grid {
    largest_object(g)
}

pub fn solve_23b5c85d(g: &Grid) -> Grid {
    grid::components(g, Connectivity::Four, Some(0))
        .iter()
        .filter(|o| o.is_rectangle())
        .min_by_key(|o| o.area())
        .map(|o| grid::blank(o.height(), o.width(), o.color))
        .unwrap_or_else(|| g.clone())
}

/// Crop of the multicolor block maximising `score(block, grid)`.
fn pick_block<F: Fn(&Object, &Grid) -> usize>(g: &Grid, score: F) -> Grid {
    grid::multicolor_components(g, Connectivity::Four, 0)
        .iter()
        .max_by_key(|o| score(o, g))
        .map(|o| grid::crop(g, o.min_r, o.min_c, o.height(), o.width()))
        .unwrap_or_else(|| g.clone())
}

pub fn solve_8efcae92(g: &Grid) -> Grid {
    pick_block(g, |o, g| o.cells.iter().filter(|&&(r, c)| g[r][c] == 2).count())
}

pub fn solve_2013d3e2(g: &Grid) -> Grid {
    grid::crop(&grid::crop_to_bbox(g, 0), 0, 0, 3, 3)
}

pub fn solve_d23f8c26(g: &Grid) -> Grid {
    let (_, cols) = grid::dims(g);
    let mid = cols / 2;
    g.iter().map(|row| {
        row.iter().enumerate().map(|(c, &v)| if c == mid { v } else { 0 }).collect()
    }).collect()
}

fn blocks(g: &Grid) -> Vec<Vec<Grid>> {
    match grid::separator_color(g) {
        Some(line) => grid::split_by_lines(g, line),
        None => vec![vec![g.clone()]],
    }
}

pub fn solve_2dc579da(g: &Grid) -> Grid {
    blocks(g).into_iter()
        .flatten()
        .find(|b| grid::unique_colors(b).len() > 1)
        .unwrap_or_else(|| g.clone())
}

/// Four 2x2 quadrants around a blank cross; three agree, one does not.
pub fn solve_88a62173(g: &Grid) -> Grid {
    if grid::dims(g) != (5, 5) { return g.clone(); }
    let quads: Vec<Grid> = [(0, 0), (0, 3), (3, 0), (3, 3)]
        .iter()
        .map(|&(r, c)| grid::crop(g, r, c, 2, 2))
        .collect();
    quads.iter()
        .find(|q| quads.iter().filter(|other| other == q).count() == 1)
        .cloned()
        .unwrap_or_else(|| quads[0].clone())
}

/// Fill `hole` cells from their mirror images under the grid's symmetries.
fn repair_symmetry(g: &Grid, hole: u8) -> Grid {
    let (rows, cols) = grid::dims(g);
    let mut out = g.clone();
    for r in 0..rows {
        for c in 0..cols {
            if g[r][c] != hole { continue; }
            let mut mirrors = vec![(r, cols - 1 - c), (rows - 1 - r, c), (rows - 1 - r, cols - 1 - c)];
            if rows == cols {
                mirrors.push((c, r));
                mirrors.push((cols - 1 - c, rows - 1 - r));
            }
            if let Some(v) = mirrors.iter().map(|&(mr, mc)| g[mr][mc]).find(|&v| v != hole) {
                out[r][c] = v;
            }
        }
    }
    out
}

/// The 0-colored square patch hides part of a symmetric picture; output what
/// was under it.
pub fn solve_9ecd008a(g: &Grid) -> Grid {
    let Some((r0, c0, r1, c1)) = grid::bbox_of(g, |v| v == 0) else { return g.clone() };
    let repaired = repair_symmetry(g, 0);
    grid::crop(&repaired, r0, c0, r1 - r0 + 1, c1 - c0 + 1)
}

pub fn solve_5614dbcf(g: &Grid) -> Grid {
    let (rows, cols) = grid::dims(g);
    (0..rows / 3).map(|i| {
        (0..cols / 3).map(|j| {
            let block = grid::crop(g, i * 3, j * 3, 3, 3);
            grid::most_common_except(&block, 5).unwrap_or(0)
        }).collect()
    }).collect()
}

pub fn solve_780d0b14(g: &Grid) -> Grid {
    grid::split_by_lines(g, 0).iter().map(|row| {
        row.iter().map(|b| grid::most_common_except(b, 0).unwrap_or(0)).collect()
    }).collect()
}

pub fn solve_90c28cc7(g: &Grid) -> Grid {
    grid::dedupe_cols(&grid::dedupe_rows(&grid::crop_to_bbox(g, 0)))
}

pub fn solve_746b3537(g: &Grid) -> Grid {
    grid::dedupe_cols(&grid::dedupe_rows(g))
}

pub fn solve_4be741c5(g: &Grid) -> Grid {
    let Some(first_row) = g.first() else { return g.clone() };
    let across = grid::unique_colors(&vec![first_row.clone()]);
    if across.len() > 1 {
        return vec![across];
    }
    let first_col: Grid = g.iter().map(|row| vec![row[0]]).collect();
    grid::unique_colors(&first_col).into_iter().map(|c| vec![c]).collect()
}

pub fn solve_1190e5a7(g: &Grid) -> Grid {
    let Some(line) = grid::separator_color(g) else { return g.clone() };
    let parts = grid::split_by_lines(g, line);
    let bg = grid::most_common_except(g, line).unwrap_or(0);
    let cols = parts.first().map_or(0, |row| row.len());
    grid::blank(parts.len(), cols, bg)
}

fn block_colors(g: &Grid) -> Grid {
    blocks(g).iter().map(|row| row.iter().map(grid::most_common_color).collect()).collect()
}

pub fn solve_9f236235(g: &Grid) -> Grid {
    grid::flip_h(&block_colors(g))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_halves() {
        let g = vec![vec![1, 2, 1, 2], vec![3, 3, 3, 3]];
        assert_eq!(solve_7b7f7511(&g), vec![vec![1, 2], vec![3, 3]]);
        let g = vec![vec![1, 2, 3], vec![1, 2, 3]];
        assert_eq!(solve_7b7f7511(&g), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn crop_off_blue() {
        let g = vec![
            vec![1, 1, 1, 1],
            vec![1, 2, 1, 1],
            vec![1, 1, 3, 1],
        ];
        assert_eq!(solve_a740d043(&g), vec![vec![2, 0], vec![0, 3]]);
    }

    #[test]
    fn largest_object_cut_out() {
        let g = vec![
            vec![2, 0, 0, 7],
            vec![0, 0, 7, 7],
            vec![0, 0, 0, 7],
        ];
        assert_eq!(solve_be94b721(&g), vec![vec![0, 7], vec![7, 7], vec![0, 7]]);
    }

    #[test]
    fn smallest_rectangle() {
        let g = vec![
            vec![3, 3, 0, 0],
            vec![3, 3, 0, 8],
            vec![0, 0, 0, 8],
        ];
        assert_eq!(solve_23b5c85d(&g), vec![vec![8], vec![8]]);
    }

    #[test]
    fn block_with_most_red() {
        let g = vec![
            vec![1, 1, 0, 1, 2],
            vec![1, 2, 0, 2, 2],
        ];
        assert_eq!(solve_8efcae92(&g), vec![vec![1, 2], vec![2, 2]]);
    }

    #[test]
    fn middle_column() {
        let g = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(solve_d23f8c26(&g), vec![vec![0, 2, 0], vec![0, 5, 0]]);
    }

    #[test]
    fn odd_quadrant() {
        let g = vec![
            vec![8, 8, 3, 8, 8],
            vec![8, 8, 3, 8, 8],
            vec![3, 3, 3, 3, 3],
            vec![8, 1, 3, 8, 8],
            vec![8, 8, 3, 8, 8],
        ];
        assert_eq!(solve_2dc579da(&g), vec![vec![8, 1], vec![8, 8]]);
    }

    #[test]
    fn differing_quadrant() {
        let g = vec![
            vec![1, 1, 0, 1, 1],
            vec![1, 0, 0, 1, 0],
            vec![0, 0, 0, 0, 0],
            vec![1, 1, 0, 0, 1],
            vec![1, 0, 0, 1, 0],
        ];
        assert_eq!(solve_88a62173(&g), vec![vec![0, 1], vec![1, 0]]);
    }

    #[test]
    fn hidden_patch_recovered() {
        let g = vec![
            vec![1, 2, 2, 1],
            vec![3, 0, 0, 3],
            vec![3, 4, 0, 3],
            vec![1, 2, 2, 1],
        ];
        assert_eq!(solve_9ecd008a(&g), vec![vec![4, 4], vec![4, 4]]);
    }

    #[test]
    fn noisy_blocks_majority() {
        let mut g = grid::blank(6, 3, 0);
        for r in 3..6 {
            g[r] = vec![7, 7, 7];
        }
        g[1][1] = 5;
        g[4][0] = 5;
        assert_eq!(solve_5614dbcf(&g), vec![vec![0], vec![7]]);
    }

    #[test]
    fn regions_between_black_lines() {
        let g = vec![
            vec![1, 1, 0, 6, 6],
            vec![1, 0, 0, 6, 6],
            vec![0, 0, 0, 0, 0],
            vec![4, 4, 0, 2, 0],
        ];
        assert_eq!(solve_780d0b14(&g), vec![vec![1, 6], vec![4, 2]]);
    }

    #[test]
    fn collapse_repeats() {
        let g = vec![vec![1, 1, 2], vec![1, 1, 2], vec![1, 1, 2]];
        assert_eq!(solve_746b3537(&g), vec![vec![1, 2]]);
    }

    #[test]
    fn stripe_colors_listed() {
        let g = vec![vec![4, 4, 2, 2, 8], vec![4, 2, 2, 8, 8]];
        assert_eq!(solve_4be741c5(&g), vec![vec![4, 2, 8]]);
        let g = vec![vec![3, 3], vec![1, 1], vec![1, 1]];
        assert_eq!(solve_4be741c5(&g), vec![vec![3], vec![1]]);
    }

    #[test]
    fn count_regions_between_lines() {
        let g = vec![
            vec![3, 3, 8, 3, 8, 3],
            vec![8, 8, 8, 8, 8, 8],
            vec![3, 3, 8, 3, 8, 3],
        ];
        assert_eq!(solve_1190e5a7(&g), grid::blank(2, 3, 3));
    }

    #[test]
    fn mirrored_block_colors() {
        let g = vec![
            vec![2, 2, 5, 0, 0],
            vec![5, 5, 5, 5, 5],
            vec![0, 0, 5, 3, 3],
        ];
        assert_eq!(solve_9f236235(&g), vec![vec![0, 2], vec![3, 0]]);
    }

    #[test]
    fn block_picture_collapsed() {
        let g = vec![
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 1, 2, 0],
            vec![0, 1, 1, 2, 0],
            vec![0, 3, 3, 3, 0],
            vec![0, 0, 0, 0, 0],
        ];
        assert_eq!(solve_90c28cc7(&g), vec![vec![1, 2], vec![3, 3]]);
    }

    #[test]
    fn quarter_of_shape() {
        let mut g = grid::blank(6, 6, 0);
        for r in 1..5 {
            for c in 1..5 {
                g[r][c] = (r + c) as u8;
            }
        }
        assert_eq!(solve_2013d3e2(&g), vec![vec![2, 3, 4], vec![3, 4, 5], vec![4, 5, 6]]);
    }

    #[test]
    fn cropped_shape_repeated_and_mirrored() {
        let g = vec![vec![0, 0, 0], vec![0, 8, 0], vec![0, 8, 8]];
        assert_eq!(solve_28bf18c6(&g), vec![vec![8, 0, 8, 0], vec![8, 8, 8, 8]]);
        assert_eq!(solve_7468f01a(&g), vec![vec![0, 8], vec![8, 8]]);
    }

    #[test]
    fn largest_object_multicolor_scene() {
        let g = vec![vec![3, 0, 0, 0], vec![0, 0, 2, 2], vec![0, 0, 2, 0]];
        assert_eq!(solve_1f85a75f(&g), vec![vec![2, 2], vec![2, 0]]);
    }
}
