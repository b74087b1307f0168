// Per-task solvers.
//
// Each ARC task gets its own hand-derived pure function `solve_<task id>`,
// inferred from the task's train pairs. Solvers share the grid toolkit and
// nothing else. When an input does not look like the task expects, a solver
// returns its best effort, usually a copy of the input.
//
// Alongside the solver each task lists the candidate strategies tried while
// working it out; `abstractions` scores them against every split.

pub mod counting;
pub mod cropping;
pub mod fill;
pub mod geometry;
pub mod lines;
pub mod logic;
pub mod patterns;
pub mod recolor;
pub mod tiling;

use crate::grid::Grid;

pub type Solver = fn(&Grid) -> Grid;

/// A named strategy tried during development of one task.
#[derive(Clone, Copy)]
pub struct Candidate {
    pub name: &'static str,
    pub apply: Solver,
}

#[derive(Clone)]
pub struct TaskSolver {
    pub id: &'static str,
    pub summary: &'static str,
    pub solve: Solver,
    pub candidates: Vec<Candidate>,
}

impl TaskSolver {
    pub fn new(id: &'static str, summary: &'static str, solve: Solver) -> Self {
        Self { id, summary, solve, candidates: Vec::new() }
    }

    pub fn candidate(mut self, name: &'static str, apply: Solver) -> Self {
        self.candidates.push(Candidate { name, apply });
        self
    }
}

impl std::fmt::Debug for TaskSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskSolver")
            .field("id", &self.id)
            .field("summary", &self.summary)
            .field("candidates", &self.candidates.iter().map(|c| c.name).collect::<Vec<_>>())
            .finish()
    }
}

/// Every registered solver, sorted by task id.
pub fn registry() -> Vec<TaskSolver> {
    let mut all = Vec::new();
    all.extend(geometry::entries());
    all.extend(recolor::entries());
    all.extend(fill::entries());
    all.extend(tiling::entries());
    all.extend(cropping::entries());
    all.extend(counting::entries());
    all.extend(logic::entries());
    all.extend(patterns::entries());
    all.extend(lines::entries());
    all.sort_by_key(|s| s.id);
    all
}

pub fn find(id: &str) -> Option<TaskSolver> {
    registry().into_iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn ids_are_unique_hex() {
        let all = registry();
        let mut seen = FxHashSet::default();
        for s in &all {
            assert_eq!(s.id.len(), 8, "{}", s.id);
            assert!(s.id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()), "{}", s.id);
            assert!(seen.insert(s.id), "duplicate {}", s.id);
        }
        assert!(all.len() >= 80);
    }

    #[test]
    fn registry_sorted() {
        let ids: Vec<_> = registry().iter().map(|s| s.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn solvers_survive_empty_and_tiny_grids() {
        let tiny = vec![vec![0u8]];
        for s in registry() {
            let _ = (s.solve)(&tiny);
            let _ = (s.solve)(&Vec::new());
            for c in &s.candidates {
                let _ = (c.apply)(&tiny);
            }
        }
    }

    #[test]
    fn find_by_id() {
        assert!(find("3c9b0459").is_some());
        assert!(find("00000000").is_none());
    }
}
