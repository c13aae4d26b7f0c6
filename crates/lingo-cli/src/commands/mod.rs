//! CLI command implementations.

mod coverage;
mod eval;
mod plurals;

pub use coverage::{run_coverage, CoverageArgs};
pub use eval::{run_eval, EvalArgs};
pub use plurals::{run_plurals, PluralsArgs};
