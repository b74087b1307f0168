// Tasks where the output keeps the input's layout and only colors change:
// fixed palettes, majority votes, and recoloring objects by size or shape.

use super::TaskSolver;
use crate::grid::{self, Connectivity, Grid, Object};

pub fn entries() -> Vec<TaskSolver> {
    vec![
        TaskSolver::new("0d3d703e", "fixed color permutation", solve_0d3d703e)
            .candidate("shift_colors_by_one", |g| {
                g.iter().map(|row| row.iter().map(|&c| (c + 1) % 10).collect()).collect()
            }),
        TaskSolver::new("c8f0f002", "recolor 7 to 5", solve_c8f0f002),
        TaskSolver::new("d511f180", "swap colors 5 and 8", solve_d511f180)
            .candidate("replace_5_with_8", |g| grid::replace_color(g, 5, 8)),
        TaskSolver::new("b1948b0a", "recolor 6 to 2", solve_b1948b0a),
        TaskSolver::new("f76d97a5", "5 takes the other color, the other color vanishes", solve_f76d97a5)
            .candidate("swap_5_and_other", swap_five_and_other),
        TaskSolver::new("9565186b", "everything but the majority color becomes 5", solve_9565186b),
        TaskSolver::new("a85d4709", "row color from the column of its 5", solve_a85d4709),
        TaskSolver::new("25d8a9c8", "uniform rows become 5, others 0", solve_25d8a9c8),
        TaskSolver::new("aabf363d", "shape takes the corner marker's color", solve_aabf363d),
        TaskSolver::new("6e82a1ae", "recolor 5-objects by size", solve_6e82a1ae),
        TaskSolver::new("ea32f347", "rank three segments by length", solve_ea32f347),
        TaskSolver::new("a61f2674", "tallest bar 1, shortest bar 2, rest erased", solve_a61f2674),
        TaskSolver::new("08ed6ac7", "rank bars by height 1..4", solve_08ed6ac7),
        TaskSolver::new("67385a82", "3-objects larger than one cell become 8", solve_67385a82)
            .candidate("all_3_to_8", |g| grid::replace_color(g, 3, 8)),
        TaskSolver::new("b230c067", "odd shape out becomes 2, the rest 1", solve_b230c067)
            .candidate("smallest_is_odd", b230c067_smallest_is_odd),
        TaskSolver::new("e8593010", "recolor background holes by size", solve_e8593010),
        TaskSolver::new("6455b5f5", "largest region 1, smallest regions 8", solve_6455b5f5),
        TaskSolver::new("aedd82e4", "isolated 2 cells become 1", solve_aedd82e4)
            .candidate("eight_connected", |g| isolated_to(g, 2, 1, Connectivity::Eight)),
    ]
}

pub fn solve_0d3d703e(g: &Grid) -> Grid {
    grid::map_colors(g, &[(3, 4), (4, 3), (1, 5), (5, 1), (2, 6), (6, 2), (8, 9), (9, 8)])
}

pub fn solve_c8f0f002(g: &Grid) -> Grid {
    grid::replace_color(g, 7, 5)
}

pub fn solve_d511f180(g: &Grid) -> Grid {
    grid::map_colors(g, &[(5, 8), (8, 5)])
}

pub fn solve_b1948b0a(g: &Grid) -> Grid {
    grid::replace_color(g, 6, 2)
}

pub fn solve_f76d97a5(g: &Grid) -> Grid {
    let other = grid::unique_colors(g).into_iter().find(|&c| c != 5 && c != 0);
    match other {
        Some(x) => grid::map_colors(g, &[(5, x), (x, 0)]),
        None => g.clone(),
    }
}

fn swap_five_and_other(g: &Grid) -> Grid {
    match grid::unique_colors(g).into_iter().find(|&c| c != 5 && c != 0) {
        Some(x) => grid::map_colors(g, &[(5, x), (x, 5)]),
        None => g.clone(),
    }
}

pub fn solve_9565186b(g: &Grid) -> Grid {
    let major = grid::most_common_color(g);
    g.iter().map(|row| row.iter().map(|&c| if c == major { c } else { 5 }).collect()).collect()
}

pub fn solve_a85d4709(g: &Grid) -> Grid {
    const BY_COLUMN: [u8; 3] = [2, 4, 3];
    g.iter().map(|row| {
        let color = row.iter().position(|&c| c == 5)
            .and_then(|i| BY_COLUMN.get(i).copied())
            .unwrap_or(0);
        vec![color; row.len()]
    }).collect()
}

pub fn solve_25d8a9c8(g: &Grid) -> Grid {
    g.iter().map(|row| {
        let uniform = row.iter().all(|&c| c == row[0]);
        vec![if uniform { 5 } else { 0 }; row.len()]
    }).collect()
}

/// The marker sits in the bottom-left corner; the shape is the only other
/// non-background color.
pub fn solve_aabf363d(g: &Grid) -> Grid {
    let (rows, _) = grid::dims(g);
    if rows == 0 || g[0].is_empty() { return g.clone(); }
    let marker = g[rows - 1][0];
    let shape = grid::unique_colors(g).into_iter().find(|&c| c != 0 && c != marker);
    let mut out = g.clone();
    out[rows - 1][0] = 0;
    match shape {
        Some(s) => grid::replace_color(&out, s, marker),
        None => out,
    }
}

/// Recolor each object of `color` through `pick(object, all objects)`.
fn recolor_objects<F>(g: &Grid, color: u8, conn: Connectivity, pick: F) -> Grid
where
    F: Fn(&Object, &[Object]) -> u8,
{
    let objs: Vec<Object> = grid::components(g, conn, None)
        .into_iter()
        .filter(|o| o.color == color)
        .collect();
    let mut out = g.clone();
    for o in &objs {
        grid::paint(&mut out, o, pick(o, &objs));
    }
    out
}

pub fn solve_6e82a1ae(g: &Grid) -> Grid {
    recolor_objects(g, 5, Connectivity::Four, |o, _| match o.area() {
        4 => 1,
        3 => 2,
        2 => 3,
        _ => 5,
    })
}

/// Color by rank of `key` among the objects, largest first; ties share a rank.
fn rank_colors<K: Fn(&Object) -> usize>(o: &Object, all: &[Object], key: K, palette: &[u8]) -> u8 {
    let mut sizes: Vec<usize> = all.iter().map(&key).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.dedup();
    let rank = sizes.iter().position(|&s| s == key(o)).unwrap_or(0);
    palette.get(rank).copied().unwrap_or(0)
}

pub fn solve_ea32f347(g: &Grid) -> Grid {
    recolor_objects(g, 5, Connectivity::Four, |o, all| rank_colors(o, all, Object::area, &[1, 4, 2]))
}

pub fn solve_a61f2674(g: &Grid) -> Grid {
    recolor_objects(g, 5, Connectivity::Four, |o, all| {
        let tallest = all.iter().map(Object::height).max().unwrap_or(0);
        let shortest = all.iter().map(Object::height).min().unwrap_or(0);
        if o.height() == tallest { 1 } else if o.height() == shortest { 2 } else { 0 }
    })
}

pub fn solve_08ed6ac7(g: &Grid) -> Grid {
    recolor_objects(g, 5, Connectivity::Four, |o, all| rank_colors(o, all, Object::height, &[1, 2, 3, 4]))
}

pub fn solve_67385a82(g: &Grid) -> Grid {
    recolor_objects(g, 3, Connectivity::Four, |o, _| if o.area() > 1 { 8 } else { 3 })
}

/// Two of the three 8-objects share a shape; the third is the odd one.
pub fn solve_b230c067(g: &Grid) -> Grid {
    recolor_objects(g, 8, Connectivity::Eight, |o, all| {
        let twins = all.iter().filter(|other| other.shape() == o.shape()).count();
        if twins == 1 { 2 } else { 1 }
    })
}

fn b230c067_smallest_is_odd(g: &Grid) -> Grid {
    recolor_objects(g, 8, Connectivity::Eight, |o, all| {
        let smallest = all.iter().map(Object::area).min().unwrap_or(0);
        if o.area() == smallest { 2 } else { 1 }
    })
}

pub fn solve_e8593010(g: &Grid) -> Grid {
    recolor_objects(g, 0, Connectivity::Four, |o, _| match o.area() {
        1 => 3,
        2 => 2,
        3 => 1,
        _ => 0,
    })
}

pub fn solve_6455b5f5(g: &Grid) -> Grid {
    recolor_objects(g, 0, Connectivity::Four, |o, all| {
        let largest = all.iter().map(Object::area).max().unwrap_or(0);
        let smallest = all.iter().map(Object::area).min().unwrap_or(0);
        if all.len() < 2 { 0 } else if o.area() == largest { 1 } else if o.area() == smallest { 8 } else { 0 }
    })
}

fn isolated_to(g: &Grid, color: u8, to: u8, conn: Connectivity) -> Grid {
    recolor_objects(g, color, conn, |o, _| if o.area() == 1 { to } else { color })
}

pub fn solve_aedd82e4(g: &Grid) -> Grid {
    isolated_to(g, 2, 1, Connectivity::Four)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_palette() {
        assert_eq!(solve_0d3d703e(&vec![vec![3, 1, 2]]), vec![vec![4, 5, 6]]);
        assert_eq!(solve_0d3d703e(&vec![vec![9, 4, 2]]), vec![vec![8, 3, 6]]);
    }

    #[test]
    fn five_takes_other_color() {
        let g = vec![vec![4, 5, 4], vec![5, 5, 5], vec![4, 5, 4]];
        assert_eq!(solve_f76d97a5(&g), vec![vec![0, 4, 0], vec![4, 4, 4], vec![0, 4, 0]]);
    }

    #[test]
    fn majority_survives() {
        let g = vec![vec![2, 2, 2], vec![2, 1, 8], vec![2, 8, 8]];
        assert_eq!(solve_9565186b(&g), vec![vec![2, 2, 2], vec![2, 5, 5], vec![2, 5, 5]]);
    }

    #[test]
    fn diagonal_fives_color_rows() {
        let g = vec![vec![0, 0, 5], vec![0, 5, 0], vec![5, 0, 0]];
        assert_eq!(solve_a85d4709(&g), vec![vec![3, 3, 3], vec![4, 4, 4], vec![2, 2, 2]]);
    }

    #[test]
    fn corner_marker_recolors_shape() {
        let g = vec![
            vec![0, 0, 0, 0],
            vec![0, 2, 2, 0],
            vec![0, 2, 0, 0],
            vec![4, 0, 0, 0],
        ];
        let out = solve_aabf363d(&g);
        assert_eq!(out[1], vec![0, 4, 4, 0]);
        assert_eq!(out[3][0], 0);
    }

    #[test]
    fn segments_ranked_by_length() {
        let g = vec![
            vec![5, 0, 5, 0, 5],
            vec![5, 0, 5, 0, 0],
            vec![5, 0, 0, 0, 0],
        ];
        let out = solve_ea32f347(&g);
        assert_eq!((out[0][0], out[0][2], out[0][4]), (1, 4, 2));
    }

    #[test]
    fn bars_ranked_by_height() {
        let g = vec![
            vec![0, 0, 5, 0, 0],
            vec![5, 0, 5, 0, 0],
            vec![5, 0, 5, 0, 5],
        ];
        let out = solve_08ed6ac7(&g);
        assert_eq!(out[2], vec![2, 0, 1, 0, 3]);
        let out = solve_a61f2674(&g);
        assert_eq!(out[2], vec![0, 0, 1, 0, 2]);
    }

    #[test]
    fn odd_shape_out() {
        let g = vec![
            vec![8, 8, 0, 8, 8, 0, 8, 0],
            vec![8, 0, 0, 8, 0, 0, 8, 8],
        ];
        let out = solve_b230c067(&g);
        assert_eq!(out[0], vec![1, 1, 0, 1, 1, 0, 2, 0]);
    }

    #[test]
    fn holes_recolored_by_size() {
        let g = vec![
            vec![5, 0, 5, 0, 0, 5],
            vec![5, 5, 5, 5, 5, 5],
            vec![0, 0, 0, 5, 5, 5],
        ];
        let out = solve_e8593010(&g);
        assert_eq!(out[0], vec![5, 3, 5, 2, 2, 5]);
        assert_eq!(out[2], vec![1, 1, 1, 5, 5, 5]);
    }

    #[test]
    fn isolated_cells() {
        let g = vec![vec![2, 2, 0], vec![0, 0, 0], vec![0, 2, 0]];
        assert_eq!(solve_aedd82e4(&g), vec![vec![2, 2, 0], vec![0, 0, 0], vec![0, 1, 0]]);
    }

    #[test]
    fn uniform_rows_marked() {
        let g = vec![vec![4, 4, 4], vec![2, 3, 2], vec![3, 3, 3]];
        assert_eq!(solve_25d8a9c8(&g), vec![vec![5, 5, 5], vec![0, 0, 0], vec![5, 5, 5]]);
    }

    #[test]
    fn size_table_colors() {
        let g = vec![
            vec![5, 5, 0, 5, 0],
            vec![5, 5, 0, 5, 0],
            vec![0, 0, 0, 5, 0],
            vec![5, 5, 0, 0, 0],
        ];
        assert_eq!(
            solve_6e82a1ae(&g),
            vec![
                vec![1, 1, 0, 2, 0],
                vec![1, 1, 0, 2, 0],
                vec![0, 0, 0, 2, 0],
                vec![3, 3, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn single_green_cells_stay() {
        let g = vec![vec![3, 3, 0], vec![0, 0, 0], vec![3, 0, 3]];
        assert_eq!(solve_67385a82(&g), vec![vec![8, 8, 0], vec![0, 0, 0], vec![3, 0, 3]]);
    }

    #[test]
    fn largest_and_smallest_rooms() {
        let g = vec![
            vec![0, 0, 2, 0],
            vec![0, 0, 2, 0],
            vec![2, 2, 2, 2],
            vec![0, 2, 0, 0],
        ];
        assert_eq!(
            solve_6455b5f5(&g),
            vec![
                vec![1, 1, 2, 0],
                vec![1, 1, 2, 0],
                vec![2, 2, 2, 2],
                vec![8, 2, 0, 0],
            ]
        );
    }
}
