pub mod arc;
pub mod runner;

pub use arc::{solve_arc_task, ArcResult};
pub use runner::{run_benchmark, BenchmarkReport, TaskReport};
