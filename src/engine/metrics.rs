//! Reduction traces.
//!
//! This module defines the small structs used to observe how a run was
//! reduced. Tracing is *opt-in*:
//!
//! - `Run::reduce` takes no sink and allocates nothing extra.
//! - `Run::reduce_traced` records one [`RewriteStep`] per catalog hit.
//! - `Assembler::traced` additionally wraps every flushed run in a
//!   [`RunTrace`] with its source tokens, output and timing.

use crate::rules::Combinator;
use std::time::Duration;

/// One catalog hit during reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteStep {
    /// Run pattern before the rewrite.
    pub before: String,
    /// Catalog pattern that matched.
    pub matched: &'static str,
    /// Start index of the (right-most) match.
    pub index: usize,
    pub combinator: Combinator,
    /// Run pattern after the rewrite.
    pub after: String,
    /// The merge overflowed and the value at `index` was marked done instead.
    pub overflowed: bool,
}

/// Everything recorded for one flushed run.
#[derive(Debug, Clone)]
pub struct RunTrace {
    /// Source tokens that formed the run.
    pub tokens: Vec<String>,
    /// Pattern of the run before reduction.
    pub pattern: String,
    pub steps: Vec<RewriteStep>,
    /// Rendered values emitted for the run.
    pub output: Vec<String>,
    /// Time spent reducing the run.
    pub duration: Duration,
}
