use super::dsl::Prim;
use crate::grid::Grid;

/// Upper bound on two-step compositions tried before giving up.
const MAX_PAIRS: usize = 100_000;

#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub program: Prim,
    pub checked: usize,
}

/// Smallest primitive program (one step, then two) reproducing every pair.
pub fn fit_primitive(examples: &[(Grid, Grid)], max_size: usize) -> Option<SynthesisResult> {
    if examples.is_empty() { return None; }
    let mut checked = 0usize;

    let prims = Prim::all_primitives();
    for p in &prims {
        checked += 1;
        if matches_all(p, examples) {
            return Some(SynthesisResult { program: p.clone(), checked });
        }
    }

    if max_size >= 2 {
        // Every non-identity first step is tried; steps that keep the
        // examples partly right, or reach the output shape, go first.
        let (mut first, rest): (Vec<&Prim>, Vec<&Prim>) = prims.iter()
            .filter(|p| **p != Prim::Identity)
            .partition(|p| partial_match_score(p, examples) > 0.3 || changes_shape(p, examples));
        first.extend(rest);
        for a in &first {
            for b in &prims {
                if *b == Prim::Identity { continue; }
                checked += 1;
                let composed = Prim::Compose(Box::new((*a).clone()), Box::new(b.clone()));
                if matches_all(&composed, examples) {
                    return Some(SynthesisResult { program: composed, checked });
                }
                if checked > MAX_PAIRS {
                    return None;
                }
            }
        }
    }
    None
}

fn matches_all(program: &Prim, examples: &[(Grid, Grid)]) -> bool {
    examples.iter().all(|(input, expected)| program.apply(input) == *expected)
}

fn changes_shape(program: &Prim, examples: &[(Grid, Grid)]) -> bool {
    examples.iter().all(|(input, expected)| {
        let out = program.apply(input);
        !crate::grid::same_shape(&out, input) && crate::grid::same_shape(&out, expected)
    })
}

fn partial_match_score(program: &Prim, examples: &[(Grid, Grid)]) -> f64 {
    if examples.is_empty() { return 0.0; }
    let total: f64 = examples.iter()
        .map(|(input, expected)| similarity(&program.apply(input), expected))
        .sum();
    total / examples.len() as f64
}

/// Fraction of equal cells; 0 when the shapes differ.
pub fn similarity(a: &Grid, b: &Grid) -> f64 {
    if !crate::grid::same_shape(a, b) { return 0.0; }
    let total: usize = a.iter().map(|row| row.len()).sum();
    if total == 0 { return 1.0; }
    let matching = a.iter().zip(b.iter())
        .flat_map(|(ar, br)| ar.iter().zip(br.iter()))
        .filter(|(x, y)| x == y)
        .count();
    matching as f64 / total as f64
}
