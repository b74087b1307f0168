// Candidate strategies for one task, scored split by split.
//
// Every task gets the same frame: an `identity` baseline, a `search`
// strategy that fits a DSL primitive on the train pairs, the task's own
// development candidates, and `final`, the registered solver.

pub mod score;

pub use score::{print_report, report_lines, score, score_splits, AbstractionScore, SplitScore};

use crate::grid::Grid;
use crate::solvers::{Solver, TaskSolver};

/// Two-step compositions are the deepest programs `search` tries.
pub const SEARCH_DEPTH: usize = 2;

#[derive(Clone, Copy)]
pub enum AbstractionKind {
    Fixed(Solver),
    /// Fit a primitive on the train pairs, then apply it to every split.
    Searched,
}

#[derive(Clone)]
pub struct Abstraction {
    pub name: &'static str,
    pub kind: AbstractionKind,
}

impl Abstraction {
    pub fn fixed(name: &'static str, solver: Solver) -> Self {
        Self { name, kind: AbstractionKind::Fixed(solver) }
    }

    pub fn searched() -> Self {
        Self { name: "search", kind: AbstractionKind::Searched }
    }
}

impl std::fmt::Debug for Abstraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            AbstractionKind::Fixed(_) => "fixed",
            AbstractionKind::Searched => "searched",
        };
        write!(f, "Abstraction({}, {})", self.name, kind)
    }
}

fn identity(g: &Grid) -> Grid {
    g.clone()
}

pub fn abstractions_for(solver: &TaskSolver) -> Vec<Abstraction> {
    let mut list = vec![Abstraction::fixed("identity", identity), Abstraction::searched()];
    list.extend(solver.candidates.iter().map(|c| Abstraction::fixed(c.name, c.apply)));
    list.push(Abstraction::fixed("final", solver.solve));
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers;

    #[test]
    fn frame_order() {
        let ts = solvers::find("0520fde7").unwrap();
        let names: Vec<_> = abstractions_for(&ts).iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["identity", "search", "either_panel", "final"]);
    }

    #[test]
    fn no_candidates_still_framed() {
        let ts = TaskSolver::new("00000000", "test", identity);
        let list = abstractions_for(&ts);
        assert_eq!(list.len(), 3);
        assert!(matches!(list[1].kind, AbstractionKind::Searched));
        assert_eq!(list[2].name, "final");
    }
}
