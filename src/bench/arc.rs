use crate::perception::task::{Split, Task};
use crate::solvers::TaskSolver;

#[derive(Debug, Clone)]
pub struct ArcResult {
    pub task_id: String,
    pub solved: bool,
    pub matched: usize,
    pub total: usize,
    /// First labeled example the solver got wrong.
    pub first_failure: Option<(Split, usize)>,
    /// Per scored split: (split, matched, total).
    pub by_split: Vec<(Split, usize, usize)>,
}

/// Run one registered solver over the labeled examples of `splits`.
/// A task with nothing labeled in those splits is not solved.
pub fn solve_arc_task(solver: &TaskSolver, task: &Task, splits: &[Split]) -> ArcResult {
    let mut result = ArcResult {
        task_id: task.id.clone(),
        solved: false,
        matched: 0,
        total: 0,
        first_failure: None,
        by_split: Vec::new(),
    };
    for &split in splits {
        let (mut matched, mut total) = (0, 0);
        for (i, ex) in task.split(split).iter().enumerate() {
            let Some(expected) = &ex.output else { continue };
            total += 1;
            if (solver.solve)(&ex.input) == *expected {
                matched += 1;
            } else if result.first_failure.is_none() {
                result.first_failure = Some((split, i));
            }
        }
        if total > 0 {
            result.by_split.push((split, matched, total));
        }
        result.matched += matched;
        result.total += total;
    }
    result.solved = result.total > 0 && result.matched == result.total;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perception::task::Example;

    fn task() -> Task {
        Task {
            id: "68b16354".into(),
            train: vec![Example::labeled(vec![vec![1], vec![2]], vec![vec![2], vec![1]])],
            test: vec![
                Example::labeled(vec![vec![3], vec![4]], vec![vec![4], vec![3]]),
                Example::unlabeled(vec![vec![5]]),
            ],
            arc_gen: vec![Example::labeled(vec![vec![6], vec![7]], vec![vec![0], vec![0]])],
        }
    }

    #[test]
    fn counts_labeled_only() {
        let solver = crate::solvers::find("68b16354").unwrap();
        let r = solve_arc_task(&solver, &task(), &[Split::Train, Split::Test]);
        assert!(r.solved);
        assert_eq!((r.matched, r.total), (2, 2));
        assert_eq!(r.by_split, vec![(Split::Train, 1, 1), (Split::Test, 1, 1)]);
    }

    #[test]
    fn records_first_failure() {
        let solver = crate::solvers::find("68b16354").unwrap();
        let r = solve_arc_task(&solver, &task(), &Split::ALL);
        assert!(!r.solved);
        assert_eq!(r.first_failure, Some((Split::ArcGen, 0)));
    }

    #[test]
    fn nothing_labeled_is_unsolved() {
        let solver = crate::solvers::find("68b16354").unwrap();
        let mut t = task();
        t.test.retain(|ex| ex.output.is_none());
        let r = solve_arc_task(&solver, &t, &[Split::Test]);
        assert!(!r.solved);
        assert_eq!(r.total, 0);
    }
}
