//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs so that benchmark ids
//! and helper functions stay readable.

use std::fmt;

/// Parameters for an MST benchmark run.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Average vertex degree of the generated graph.
    pub avg_degree: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.avg_degree)
    }
}
