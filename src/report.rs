//! Report generation for the demo output.
//!
//! Renders the banner plus one `fib(i) = value` line per computed term.

use crate::config::Config;
use crate::fib::fibonacci;
use nonempty::NonEmpty;
use serde::Serialize;

/// First line of every report.
pub const BANNER: &str = "Fibonacci demo program";

/// One computed entry of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Term {
    pub index: u32,
    pub value: u64,
}

/// Computes the first `count` terms, in index order.
pub fn compute_terms(count: u32) -> Vec<Term> {
    (0..count)
        .map(|index| {
            let value = fibonacci(index);
            crate::debug_println!("computed fib({}) = {}", index, value);
            Term { index, value }
        })
        .collect()
}

/// Serializes computed terms as pretty-printed JSON.
pub fn to_json(terms: &[Term]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(terms)
}

pub struct ReportGenerator {
    output: String,
    config: Config,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            output: String::new(),
            config,
        }
    }

    /// Renders the full report. Every line, banner included, is
    /// newline-terminated.
    pub fn generate(&mut self) -> String {
        self.output.clear();
        for line in self.lines() {
            self.output.push_str(&line);
            self.output.push('\n');
        }
        self.output.clone()
    }

    // The banner is unconditional, so the line set is never empty.
    fn lines(&self) -> NonEmpty<String> {
        let mut lines = NonEmpty::singleton(BANNER.to_string());
        for term in compute_terms(self.config.terms) {
            lines.push(format!("fib({}) = {}", term.index, term.value));
        }
        lines
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
