use tracing::debug;

use super::{Abstraction, AbstractionKind, SEARCH_DEPTH};
use crate::grid::Grid;
use crate::perception::task::{Split, Task};
use crate::synthesis::dsl::Prim;
use crate::synthesis::enumerate::fit_primitive;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitScore {
    pub split: Split,
    pub matched: usize,
    pub total: usize,
    /// Index within the split of the first labeled example that failed.
    pub first_failure: Option<usize>,
}

impl SplitScore {
    pub fn all_matched(&self) -> bool {
        self.matched == self.total
    }
}

#[derive(Debug, Clone)]
pub struct AbstractionScore {
    pub name: String,
    /// Program found by `search`, if any.
    pub program: Option<String>,
    pub splits: Vec<SplitScore>,
}

impl AbstractionScore {
    /// True when every scored split matched in full. A score with no
    /// labeled examples at all solves nothing.
    pub fn solves_all(&self) -> bool {
        !self.splits.is_empty() && self.splits.iter().all(SplitScore::all_matched)
    }
}

/// Score on every split that has labeled examples.
pub fn score(abstraction: &Abstraction, task: &Task) -> AbstractionScore {
    score_splits(abstraction, task, &Split::ALL)
}

pub fn score_splits(abstraction: &Abstraction, task: &Task, splits: &[Split]) -> AbstractionScore {
    let fitted: Option<Prim> = match abstraction.kind {
        AbstractionKind::Fixed(_) => None,
        AbstractionKind::Searched => {
            let found = fit_primitive(&task.pairs(Split::Train), SEARCH_DEPTH);
            match &found {
                Some(r) => debug!(task = %task.id, program = %r.program.name(), checked = r.checked, "search fitted"),
                None => debug!(task = %task.id, "search found no program"),
            }
            found.map(|r| r.program)
        }
    };
    let predict = |g: &Grid| -> Option<Grid> {
        match abstraction.kind {
            AbstractionKind::Fixed(f) => Some(f(g)),
            AbstractionKind::Searched => fitted.as_ref().map(|p| p.apply(g)),
        }
    };

    let mut scores = Vec::new();
    for &split in splits {
        let mut s = SplitScore { split, matched: 0, total: 0, first_failure: None };
        for (i, ex) in task.split(split).iter().enumerate() {
            let Some(expected) = &ex.output else { continue };
            s.total += 1;
            if predict(&ex.input).as_ref() == Some(expected) {
                s.matched += 1;
            } else if s.first_failure.is_none() {
                s.first_failure = Some(i);
            }
        }
        if s.total > 0 {
            scores.push(s);
        }
    }
    debug!(task = %task.id, abstraction = abstraction.name, splits = scores.len(), "scored");
    AbstractionScore {
        name: abstraction.name.to_string(),
        program: fitted.map(|p| p.name()),
        splits: scores,
    }
}

/// `name split matched/total first_fail=idx|-`, one line per scored split.
pub fn report_lines(scores: &[AbstractionScore]) -> Vec<String> {
    let mut lines = Vec::new();
    for a in scores {
        for s in &a.splits {
            let fail = s.first_failure.map(|i| i.to_string()).unwrap_or_else(|| "-".into());
            lines.push(format!("{} {} {}/{} first_fail={}", a.name, s.split, s.matched, s.total, fail));
        }
    }
    lines
}

pub fn print_report(task_id: &str, scores: &[AbstractionScore]) {
    println!("=== {} ===", task_id);
    for line in report_lines(scores) {
        println!("  {}", line);
    }
    for a in scores {
        if let Some(p) = &a.program {
            println!("  {} program: {}", a.name, p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perception::task::Example;

    fn flip_task() -> Task {
        Task {
            id: "flip".into(),
            train: vec![
                Example::labeled(vec![vec![1, 0]], vec![vec![0, 1]]),
                Example::labeled(vec![vec![1, 0], vec![2, 0]], vec![vec![0, 1], vec![0, 2]]),
            ],
            test: vec![Example::unlabeled(vec![vec![4, 0]])],
            arc_gen: vec![
                Example::labeled(vec![vec![5, 0]], vec![vec![0, 5]]),
                Example::labeled(vec![vec![6, 0]], vec![vec![9, 9]]),
            ],
        }
    }

    #[test]
    fn identity_fails_first_example() {
        let id = Abstraction::fixed("identity", |g| g.clone());
        let s = score(&id, &flip_task());
        assert_eq!(s.splits.len(), 2);
        assert_eq!(s.splits[0], SplitScore { split: Split::Train, matched: 0, total: 2, first_failure: Some(0) });
        assert!(!s.solves_all());
    }

    #[test]
    fn unlabeled_test_is_skipped() {
        let flip = Abstraction::fixed("flip", crate::grid::flip_h);
        let s = score(&flip, &flip_task());
        assert!(s.splits.iter().all(|x| x.split != Split::Test));
        assert_eq!(s.splits[1], SplitScore { split: Split::ArcGen, matched: 1, total: 2, first_failure: Some(1) });
    }

    #[test]
    fn search_fits_on_train() {
        let s = score(&Abstraction::searched(), &flip_task());
        assert_eq!(s.program.as_deref(), Some("flip_h"));
        assert!(s.splits[0].all_matched());
    }

    #[test]
    fn search_without_program_matches_nothing() {
        let task = Task {
            id: "noise".into(),
            train: vec![Example::labeled(vec![vec![1, 2, 3]], vec![vec![9], vec![8]])],
            ..Task::default()
        };
        let s = score_splits(&Abstraction::searched(), &task, &[Split::Train]);
        assert_eq!(s.program, None);
        assert_eq!(s.splits[0].matched, 0);
    }

    #[test]
    fn report_format() {
        let flip = Abstraction::fixed("flip", crate::grid::flip_h);
        let lines = report_lines(&[score(&flip, &flip_task())]);
        assert_eq!(lines, vec!["flip train 2/2 first_fail=-", "flip arc-gen 1/2 first_fail=1"]);
    }
}
