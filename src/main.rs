use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use arc_solvers::abstractions::{abstractions_for, print_report, score_splits};
use arc_solvers::bench::run_benchmark;
use arc_solvers::config::HarnessConfig;
use arc_solvers::core::ArcError;
use arc_solvers::grid;
use arc_solvers::logging;
use arc_solvers::perception::task::{load_task, Split, Task};
use arc_solvers::solvers::{self, TaskSolver};

#[derive(Parser)]
#[command(name = "arc-solvers", version, about = "Hand-written solvers for ARC-AGI-2 tasks")]
struct Cli {
    /// Harness settings (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Registered task ids with summaries.
    List,
    /// Print the predicted grid for each test input.
    Solve {
        task: PathBuf,
        /// Solver to use; defaults to the file stem.
        #[arg(long)]
        id: Option<String>,
    },
    /// Score every abstraction of one task on each split.
    Score {
        task: PathBuf,
        #[arg(long)]
        id: Option<String>,
    },
    /// Run every registered solver against `<dir>/<id>.json`.
    Bench {
        dir: PathBuf,
        #[arg(long)]
        max_tasks: Option<usize>,
        /// Split to score; repeat for several.
        #[arg(long = "split", value_parser = parse_split)]
        splits: Vec<Split>,
        /// Print per-task detail.
        #[arg(long)]
        show_failures: bool,
    },
}

fn parse_split(s: &str) -> std::result::Result<Split, String> {
    Split::parse(s).map_err(|e| e.to_string())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => HarnessConfig::from_file(path)?,
        None => HarnessConfig::default(),
    };
    debug!(?config, "harness config");

    match cli.command {
        Command::List => cmd_list(),
        Command::Solve { task, id } => cmd_solve(&task, id.as_deref()),
        Command::Score { task, id } => cmd_score(&task, id.as_deref(), &config),
        Command::Bench { dir, max_tasks, splits, show_failures } => {
            let mut config = config;
            if max_tasks.is_some() {
                config.max_tasks = max_tasks;
            }
            if !splits.is_empty() {
                config.splits = splits;
            }
            config.show_failures |= show_failures;
            cmd_bench(&dir, &config)
        }
    }
}

fn cmd_list() -> Result<()> {
    let all = solvers::registry();
    for s in &all {
        println!("{}  {}", s.id, s.summary);
    }
    println!("{} solvers", all.len());
    Ok(())
}

/// Load the task file and the solver registered for it.
fn resolve(path: &Path, id: Option<&str>) -> Result<(Task, TaskSolver)> {
    let task = load_task(path)?;
    let id = id.unwrap_or(&task.id).to_string();
    let solver = solvers::find(&id).ok_or(ArcError::UnknownTask(id))?;
    Ok((task, solver))
}

fn cmd_solve(path: &Path, id: Option<&str>) -> Result<()> {
    let (task, solver) = resolve(path, id)?;
    for (i, ex) in task.test.iter().enumerate() {
        let predicted = (solver.solve)(&ex.input);
        let verdict = match &ex.output {
            Some(expected) if *expected == predicted => " (correct)",
            Some(_) => " (wrong)",
            None => "",
        };
        println!("test #{}{}", i, verdict);
        println!("{}", grid::to_text(&predicted));
    }
    Ok(())
}

fn cmd_score(path: &Path, id: Option<&str>, config: &HarnessConfig) -> Result<()> {
    let (task, solver) = resolve(path, id)?;
    let scores: Vec<_> = abstractions_for(&solver)
        .iter()
        .map(|a| score_splits(a, &task, &config.splits))
        .collect();
    print_report(&task.id, &scores);
    Ok(())
}

fn cmd_bench(dir: &Path, config: &HarnessConfig) -> Result<()> {
    let report = run_benchmark(dir, config)
        .with_context(|| format!("benchmark over {}", dir.display()))?;
    if config.show_failures {
        report.print_detail();
    } else {
        report.print_summary();
    }
    Ok(())
}
