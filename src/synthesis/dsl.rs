use serde::{Deserialize, Serialize};

use crate::grid::{self, Grid};

/// Whole-grid primitives used as baseline abstractions. Background is 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prim {
    Identity,
    RotateCW,
    RotateCCW,
    Rotate180,
    FlipH,
    FlipV,
    Transpose,
    GravityDown,
    GravityUp,
    GravityLeft,
    GravityRight,
    ReplaceColor(u8, u8),
    FilterColor(u8),
    Upscale(usize),
    RepeatH(usize),
    RepeatV(usize),
    MirrorH,
    MirrorV,
    CropToBBox,
    FillEnclosed(u8),
    ExtendHLines,
    ExtendVLines,
    Compose(Box<Prim>, Box<Prim>),
}

impl Prim {
    pub fn apply(&self, g: &Grid) -> Grid {
        match self {
            Prim::Identity => g.clone(),
            Prim::RotateCW => grid::rotate_cw(g),
            Prim::RotateCCW => grid::rotate_ccw(g),
            Prim::Rotate180 => grid::rotate_180(g),
            Prim::FlipH => grid::flip_h(g),
            Prim::FlipV => grid::flip_v(g),
            Prim::Transpose => grid::transpose(g),
            Prim::GravityDown => grid::gravity_down(g, 0),
            Prim::GravityUp => grid::flip_v(&grid::gravity_down(&grid::flip_v(g), 0)),
            Prim::GravityLeft => grid::transpose(&Prim::GravityUp.apply(&grid::transpose(g))),
            Prim::GravityRight => grid::transpose(&grid::gravity_down(&grid::transpose(g), 0)),
            Prim::ReplaceColor(from, to) => grid::replace_color(g, *from, *to),
            Prim::FilterColor(c) => grid::filter_color(g, *c, 0),
            Prim::Upscale(k) => grid::upscale(g, *k),
            Prim::RepeatH(n) => grid::tile(g, 1, *n),
            Prim::RepeatV(n) => grid::tile(g, *n, 1),
            Prim::MirrorH => grid::hconcat(g, &grid::flip_h(g)),
            Prim::MirrorV => grid::vconcat(g, &grid::flip_v(g)),
            Prim::CropToBBox => grid::crop_to_bbox(g, 0),
            Prim::FillEnclosed(c) => grid::fill_enclosed(g, 0, *c),
            Prim::ExtendHLines => extend_lines(g, true),
            Prim::ExtendVLines => extend_lines(g, false),
            Prim::Compose(a, b) => b.apply(&a.apply(g)),
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Prim::Compose(a, b) => 1 + a.size() + b.size(),
            _ => 1,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Prim::Identity => "identity".into(),
            Prim::RotateCW => "rotate_cw".into(),
            Prim::RotateCCW => "rotate_ccw".into(),
            Prim::Rotate180 => "rotate_180".into(),
            Prim::FlipH => "flip_h".into(),
            Prim::FlipV => "flip_v".into(),
            Prim::Transpose => "transpose".into(),
            Prim::GravityDown => "gravity_down".into(),
            Prim::GravityUp => "gravity_up".into(),
            Prim::GravityLeft => "gravity_left".into(),
            Prim::GravityRight => "gravity_right".into(),
            Prim::ReplaceColor(a, b) => format!("replace_{}_{}", a, b),
            Prim::FilterColor(c) => format!("filter_{}", c),
            Prim::Upscale(k) => format!("upscale_{}", k),
            Prim::RepeatH(n) => format!("repeat_h_{}", n),
            Prim::RepeatV(n) => format!("repeat_v_{}", n),
            Prim::MirrorH => "mirror_h".into(),
            Prim::MirrorV => "mirror_v".into(),
            Prim::CropToBBox => "crop_to_bbox".into(),
            Prim::FillEnclosed(c) => format!("fill_enclosed_{}", c),
            Prim::ExtendHLines => "extend_h_lines".into(),
            Prim::ExtendVLines => "extend_v_lines".into(),
            Prim::Compose(a, b) => format!("{}+{}", a.name(), b.name()),
        }
    }

    pub fn all_primitives() -> Vec<Prim> {
        let mut prims = vec![
            Prim::Identity, Prim::RotateCW, Prim::RotateCCW, Prim::Rotate180,
            Prim::FlipH, Prim::FlipV, Prim::Transpose,
            Prim::GravityDown, Prim::GravityUp, Prim::GravityLeft, Prim::GravityRight,
            Prim::MirrorH, Prim::MirrorV, Prim::CropToBBox,
            Prim::ExtendHLines, Prim::ExtendVLines,
        ];
        for c in 0..=9 {
            prims.push(Prim::FilterColor(c));
            prims.push(Prim::FillEnclosed(c));
            for c2 in 0..=9 {
                if c != c2 {
                    prims.push(Prim::ReplaceColor(c, c2));
                }
            }
        }
        for k in 2..=4 {
            prims.push(Prim::Upscale(k));
            prims.push(Prim::RepeatH(k));
            prims.push(Prim::RepeatV(k));
        }
        prims
    }
}

fn extend_lines(g: &Grid, horizontal: bool) -> Grid {
    if g.is_empty() { return g.clone(); }
    let (rows, cols) = grid::dims(g);
    let mut result = vec![vec![0u8; cols]; rows];
    for r in 0..rows {
        for c in 0..cols {
            if g[r][c] == 0 { continue; }
            if horizontal {
                for cc in 0..cols { result[r][cc] = g[r][c]; }
            } else {
                for rr in 0..rows { result[rr][c] = g[r][c]; }
            }
        }
    }
    result
}
