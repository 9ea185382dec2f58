//! Run assembly.
//!
//! Tokens are consumed left to right. Numeric tokens accumulate in the
//! current [`Run`]; the first non-numeric token flushes it (reduce, render,
//! emit) and is then copied to the output unchanged.
//!
//! ```text
//! "I've" "got" "three" "apples" "and" "two" "and" "a" "half" "bananas"
//!   │      │      └─run─┘   │      │     └──────run─────────┘    │
//!   out    out    flush→"3" out    out       flush→"2.5"          out
//! ```

use super::classify::Classifier;
use super::metrics::RunTrace;
use super::reduce::Run;
use crate::{Error, Result, Vocabulary};
use std::time::Instant;

pub(crate) struct Assembler<'v> {
    classifier: Classifier<'v>,
    run: Run,
    /// Source tokens of the current run.
    run_tokens: Vec<String>,
    output: Vec<String>,
    traces: Option<Vec<RunTrace>>,
}

impl<'v> Assembler<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Assembler {
            classifier: Classifier::new(vocabulary),
            run: Run::new(),
            run_tokens: Vec::new(),
            output: Vec::new(),
            traces: None,
        }
    }

    /// An assembler that records a [`RunTrace`] for every flushed run.
    pub fn traced(vocabulary: &'v Vocabulary) -> Self {
        Assembler { traces: Some(Vec::new()), ..Assembler::new(vocabulary) }
    }

    /// Feed every token, flushing runs as non-numeric tokens appear.
    pub fn feed_all<S: AsRef<str>>(&mut self, tokens: &[S]) {
        for (idx, token) in tokens.iter().enumerate() {
            match self.classifier.classify_in_run(tokens, idx, &self.run) {
                Some(numeral) => {
                    self.run.push(numeral);
                    self.run_tokens.push(token.as_ref().to_string());
                }
                None => {
                    self.flush();
                    self.output.push(token.as_ref().to_string());
                }
            }
        }
    }

    /// Flush any pending run and return the output tokens and run traces.
    pub fn finish(mut self) -> (Vec<String>, Vec<RunTrace>) {
        self.flush();
        (self.output, self.traces.unwrap_or_default())
    }

    fn flush(&mut self) {
        if self.run.is_empty() {
            return;
        }

        let run = std::mem::take(&mut self.run);
        let tokens = std::mem::take(&mut self.run_tokens);
        let pattern = run.pattern();
        let started = Instant::now();

        let (reduced, steps) = match self.traces {
            Some(_) => {
                let mut steps = Vec::new();
                let reduced = run.reduce_traced(&mut steps);
                (reduced, steps)
            }
            None => (run.reduce(), Vec::new()),
        };
        let rendered = reduced.render();

        tracing::debug!(tokens = ?tokens, pattern = %pattern, output = ?rendered, "flushed run");

        self.output.extend(rendered.iter().cloned());
        if let Some(traces) = self.traces.as_mut() {
            traces.push(RunTrace { tokens, pattern, steps, output: rendered, duration: started.elapsed() });
        }
    }
}

/// Collect every token into one run, failing on the first non-numeric token.
pub(crate) fn collect_run<S: AsRef<str>>(vocabulary: &Vocabulary, tokens: &[S]) -> Result<Run> {
    let classifier = Classifier::new(vocabulary);
    let mut run = Run::new();

    for (idx, token) in tokens.iter().enumerate() {
        let numeral = classifier
            .classify_in_run(tokens, idx, &run)
            .ok_or_else(|| Error::NonNumericInput { token: token.as_ref().to_string() })?;
        run.push(numeral);
    }

    Ok(run)
}
