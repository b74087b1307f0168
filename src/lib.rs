pub mod core;
pub mod grid;
pub mod synthesis;
pub mod perception;
pub mod solvers;
pub mod abstractions;
pub mod bench;
pub mod config;
pub mod logging;
