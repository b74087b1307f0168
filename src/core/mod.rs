pub mod error;

pub use error::{ArcError, Result};
