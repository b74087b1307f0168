// Connected components and flood fill.

use serde::{Deserialize, Serialize};

use super::{dims, Grid, DIRS4, DIRS8};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Four,
    Eight,
}

impl Connectivity {
    fn dirs(self) -> &'static [(i32, i32)] {
        match self {
            Connectivity::Four => &DIRS4,
            Connectivity::Eight => &DIRS8,
        }
    }
}

/// A connected group of cells. `color` is the color of the seed cell; for
/// multicolor components the cells may carry other colors too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Object {
    pub cells: Vec<(usize, usize)>,
    pub color: u8,
    pub min_r: usize,
    pub min_c: usize,
    pub max_r: usize,
    pub max_c: usize,
}

impl Object {
    pub fn from_cells(mut cells: Vec<(usize, usize)>, color: u8) -> Self {
        cells.sort_unstable();
        let min_r = cells.iter().map(|&(r, _)| r).min().unwrap_or(0);
        let min_c = cells.iter().map(|&(_, c)| c).min().unwrap_or(0);
        let max_r = cells.iter().map(|&(r, _)| r).max().unwrap_or(0);
        let max_c = cells.iter().map(|&(_, c)| c).max().unwrap_or(0);
        Self { cells, color, min_r, min_c, max_r, max_c }
    }

    pub fn width(&self) -> usize { self.max_c - self.min_c + 1 }
    pub fn height(&self) -> usize { self.max_r - self.min_r + 1 }
    pub fn area(&self) -> usize { self.cells.len() }

    pub fn contains(&self, r: usize, c: usize) -> bool {
        self.cells.binary_search(&(r, c)).is_ok()
    }

    /// Solid rectangle: every cell of the bounding box belongs to the object.
    pub fn is_rectangle(&self) -> bool {
        self.area() == self.width() * self.height()
    }

    /// Cells relative to the top-left corner of the bounding box.
    pub fn shape(&self) -> Vec<(usize, usize)> {
        self.cells.iter().map(|&(r, c)| (r - self.min_r, c - self.min_c)).collect()
    }

    /// Object cut out of `source` into its own grid; cells of the bounding
    /// box that are not part of the object become `bg`.
    pub fn to_grid(&self, source: &Grid, bg: u8) -> Grid {
        let mut g = vec![vec![bg; self.width()]; self.height()];
        for &(r, c) in &self.cells {
            g[r - self.min_r][c - self.min_c] = source[r][c];
        }
        g
    }
}

/// Same-color components, skipping cells of color `ignore`.
pub fn components(grid: &Grid, conn: Connectivity, ignore: Option<u8>) -> Vec<Object> {
    collect_components(grid, conn, |g, (r, c), (nr, nc)| g[r][c] == g[nr][nc], ignore)
}

/// Components of any non-`bg` cells regardless of their colors.
pub fn multicolor_components(grid: &Grid, conn: Connectivity, bg: u8) -> Vec<Object> {
    collect_components(grid, conn, |_, _, _| true, Some(bg))
}

fn collect_components<F>(grid: &Grid, conn: Connectivity, joins: F, ignore: Option<u8>) -> Vec<Object>
where
    F: Fn(&Grid, (usize, usize), (usize, usize)) -> bool,
{
    if grid.is_empty() { return Vec::new(); }
    let (rows, cols) = dims(grid);
    let mut visited = vec![vec![false; cols]; rows];
    let mut objects = Vec::new();

    for r in 0..rows {
        for c in 0..cols {
            if visited[r][c] || Some(grid[r][c]) == ignore { continue; }
            let mut cells = Vec::new();
            let mut stack = vec![(r, c)];
            visited[r][c] = true;
            while let Some((cr, cc)) = stack.pop() {
                cells.push((cr, cc));
                for &(dr, dc) in conn.dirs() {
                    let nr = cr as i32 + dr;
                    let nc = cc as i32 + dc;
                    if nr < 0 || nr >= rows as i32 || nc < 0 || nc >= cols as i32 { continue; }
                    let (nr, nc) = (nr as usize, nc as usize);
                    if visited[nr][nc] || Some(grid[nr][nc]) == ignore { continue; }
                    if joins(grid, (cr, cc), (nr, nc)) {
                        visited[nr][nc] = true;
                        stack.push((nr, nc));
                    }
                }
            }
            objects.push(Object::from_cells(cells, grid[r][c]));
        }
    }
    objects
}

/// Recolor the 4-connected region of (sr, sc) sharing its color.
pub fn flood_fill(grid: &Grid, sr: usize, sc: usize, color: u8) -> Grid {
    if grid.is_empty() || sr >= grid.len() || sc >= grid[0].len() { return grid.clone(); }
    let old = grid[sr][sc];
    if old == color { return grid.clone(); }
    let mut result = grid.clone();
    let mut stack = vec![(sr, sc)];
    result[sr][sc] = color;
    while let Some((r, c)) = stack.pop() {
        for &(dr, dc) in &DIRS4 {
            if let Some((nr, nc)) = super::offset(grid, r, c, dr, dc) {
                if result[nr][nc] == old {
                    result[nr][nc] = color;
                    stack.push((nr, nc));
                }
            }
        }
    }
    result
}

/// Cells reachable from the grid edge moving 4-wise through cells for which
/// `passable` holds.
pub fn reachable_from_border<F: Fn(u8) -> bool>(grid: &Grid, passable: F) -> Vec<Vec<bool>> {
    let (rows, cols) = dims(grid);
    let mut reach = vec![vec![false; cols]; rows];
    let mut stack = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let edge = r == 0 || c == 0 || r + 1 == rows || c + 1 == cols;
            if edge && passable(grid[r][c]) {
                reach[r][c] = true;
                stack.push((r, c));
            }
        }
    }
    while let Some((r, c)) = stack.pop() {
        for &(dr, dc) in &DIRS4 {
            if let Some((nr, nc)) = super::offset(grid, r, c, dr, dc) {
                if !reach[nr][nc] && passable(grid[nr][nc]) {
                    reach[nr][nc] = true;
                    stack.push((nr, nc));
                }
            }
        }
    }
    reach
}

/// Recolor background cells that cannot reach the border through background.
pub fn fill_enclosed(grid: &Grid, bg: u8, color: u8) -> Grid {
    let reach = reachable_from_border(grid, |v| v == bg);
    let mut result = grid.clone();
    for (r, row) in result.iter_mut().enumerate() {
        for (c, v) in row.iter_mut().enumerate() {
            if *v == bg && !reach[r][c] {
                *v = color;
            }
        }
    }
    result
}

/// Set every cell of `obj` to `color`.
pub fn paint(grid: &mut Grid, obj: &Object, color: u8) {
    for &(r, c) in &obj.cells {
        grid[r][c] = color;
    }
}
