pub mod dsl;
pub mod enumerate;

pub use dsl::Prim;
pub use enumerate::{fit_primitive, similarity, SynthesisResult};
