// Batch harness: every registered solver against its task file.
// Looks for `<id>.json` in the data directory, scores the configured splits,
// and reports totals, per-split counts and per-task detail.

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use super::arc::{solve_arc_task, ArcResult};
use crate::config::HarnessConfig;
use crate::perception::task::{load_task, Split};
use crate::solvers;

#[derive(Debug)]
pub struct BenchmarkReport {
    pub total_tasks: usize,
    pub solved: usize,
    pub score: f64,
    pub elapsed_ms: u64,
    /// Matched and total labeled examples per split, in split order.
    pub by_split: Vec<(Split, usize, usize)>,
    pub per_task: Vec<TaskReport>,
    /// Registered task ids with no usable file in the data directory.
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TaskReport {
    pub task_id: String,
    pub summary: &'static str,
    pub solved: bool,
    pub matched: usize,
    pub total: usize,
    pub first_failure: Option<(Split, usize)>,
    pub elapsed_us: u64,
}

pub fn run_benchmark(data_dir: &Path, config: &HarnessConfig) -> anyhow::Result<BenchmarkReport> {
    config.validate()?;
    if !data_dir.is_dir() {
        anyhow::bail!("task directory {} does not exist", data_dir.display());
    }

    let total_start = Instant::now();
    let mut per_task = Vec::new();
    let mut skipped = Vec::new();
    let mut split_counts: FxHashMap<Split, (usize, usize)> = Default::default();

    let registered = solvers::registry();
    let mut located = Vec::new();
    for solver in &registered {
        let path = data_dir.join(format!("{}.json", solver.id));
        if path.exists() {
            located.push((solver, path));
        } else {
            debug!(task = solver.id, "no task file");
            skipped.push(solver.id.to_string());
        }
    }
    if let Some(max) = config.max_tasks {
        located.truncate(max);
    }

    for (solver, path) in located {
        let task = match load_task(&path).with_context(|| format!("task {}", solver.id)) {
            Ok(t) => t,
            Err(e) => {
                warn!(task = solver.id, error = %format!("{:#}", e), "skipping task");
                skipped.push(solver.id.to_string());
                continue;
            }
        };

        let start = Instant::now();
        let result: ArcResult = solve_arc_task(solver, &task, &config.splits);
        let elapsed = start.elapsed().as_micros() as u64;

        for &(split, matched, total) in &result.by_split {
            let entry = split_counts.entry(split).or_default();
            entry.0 += matched;
            entry.1 += total;
        }
        debug!(task = solver.id, matched = result.matched, total = result.total, "scored");

        per_task.push(TaskReport {
            task_id: result.task_id,
            summary: solver.summary,
            solved: result.solved,
            matched: result.matched,
            total: result.total,
            first_failure: result.first_failure,
            elapsed_us: elapsed,
        });
    }

    let total_elapsed = total_start.elapsed().as_millis() as u64;
    let solved = per_task.iter().filter(|t| t.solved).count();
    let by_split = config.splits.iter()
        .filter_map(|s| split_counts.get(s).map(|&(m, t)| (*s, m, t)))
        .collect();
    info!(tasks = per_task.len(), solved, skipped = skipped.len(), "benchmark finished");

    Ok(BenchmarkReport {
        total_tasks: per_task.len(),
        solved,
        score: if per_task.is_empty() { 0.0 } else { solved as f64 / per_task.len() as f64 },
        elapsed_ms: total_elapsed,
        by_split,
        per_task,
        skipped,
    })
}

impl BenchmarkReport {
    pub fn print_summary(&self) {
        println!("=== ARC-AGI Solver Results ===");
        println!("Tasks: {} | Solved: {} | Score: {:.1}%",
            self.total_tasks, self.solved, self.score * 100.0);
        println!("Time: {}ms | Skipped: {}", self.elapsed_ms, self.skipped.len());
        println!("\nBy split:");
        for (split, matched, total) in &self.by_split {
            println!("  {}: {}/{} ({:.1}%)", split, matched, total,
                *matched as f64 / (*total).max(1) as f64 * 100.0);
        }
    }

    pub fn print_detail(&self) {
        self.print_summary();
        println!("\nPer-task detail:");
        for t in &self.per_task {
            let status = if t.solved { "OK" } else { "--" };
            let fail = match t.first_failure {
                Some((split, i)) => format!("{}#{}", split, i),
                None => "-".into(),
            };
            println!("  [{}] {} | {}/{} first_fail={} time={}us | {}",
                status, t.task_id, t.matched, t.total, fail, t.elapsed_us, t.summary);
        }
        if !self.skipped.is_empty() {
            println!("\nSkipped: {}", self.skipped.join(" "));
        }
    }
}
