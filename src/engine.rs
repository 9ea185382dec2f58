//! Classification and reduction engine.
//!
//! ## How the parts work together
//!
//! ```text
//! tokens ──▶ Classifier (classify.rs)
//!              - vocabulary lookup, then literal parsing
//!              - glue accepted only inside a run
//!                     │
//!                     v
//!            Assembler (assembler.rs)
//!              - grow the current Run
//!              - flush on the first non-numeric token
//!                     │
//!                     v
//!            Run::reduce (reduce.rs)
//!              - match run pattern against the catalog (rules/catalog.rs)
//!              - apply combinator at the right-most hit
//!              - iterate to fixpoint
//!                     │
//!                     v
//!            rendered tokens  |  Run::scalar_value / Run::integer_value
//! ```
//!
//! ## Responsibilities by module
//!
//! - `classify.rs`: resolves one token to a `Numeral` and implements the glue
//!   heuristic.
//! - `assembler.rs`: splits a token stream into runs and re-serializes them;
//!   also collects a whole input into one run for scalar extraction.
//! - `reduce.rs`: owns the run buffer and performs fixpoint reduction.
//! - `metrics.rs`: optional per-run rewrite traces with timings.
//!
//! ## Debugging
//!
//! Every rewrite emits a `trace` event and every flushed run a `debug` event
//! through `tracing`; install a subscriber (the CLI reads `NUMERALS_LOG`) to
//! see them.

#[path = "engine/assembler.rs"]
mod assembler;
#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/reduce.rs"]
mod reduce;

pub(crate) use assembler::{Assembler, collect_run};
pub use metrics::{RewriteStep, RunTrace};
pub use reduce::Run;
