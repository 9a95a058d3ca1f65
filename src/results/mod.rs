//! Benchmark result rows and the delimited-text loader that produces them.

mod loader;

pub use loader::{METHOD_COLUMN, MS_COLUMN, load_results, load_results_with, read_results};

use serde::Serialize;

/// One benchmark measurement: a method label and its elapsed time.
///
/// Rows carry no identity beyond their position; the order in which they
/// were read is the order in which bars are drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub method: String,
    pub ms: f64,
}

impl ResultRow {
    #[must_use]
    pub fn new(method: impl Into<String>, ms: f64) -> Self {
        Self {
            method: method.into(),
            ms,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
