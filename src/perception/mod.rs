pub mod task;

pub use task::{load_dir, load_task, parse_task, Example, Split, Task};
