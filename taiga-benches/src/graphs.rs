//! Synthetic graph generation for benchmarks.
//!
//! Generates connected random graphs with a configurable size and density.
//! Every graph contains a random spanning walk, so a connected result is
//! guaranteed and the builder always has a full tree to find; the remaining
//! edges are uniform random pairs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use taiga_core::Edge;

use crate::error::BenchSetupError;

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices in the graph. Must be positive.
    pub vertex_count: usize,
    /// Average vertex degree. Must be positive; the generated edge count is
    /// `vertex_count * avg_degree / 2`, floored at the spanning walk.
    pub avg_degree: usize,
    /// Upper bound for uniformly drawn edge costs. Must be positive.
    pub max_cost: i64,
    /// RNG seed; identical configurations generate identical graphs.
    pub seed: u64,
}

/// A generated graph ready to be handed to the MST builder.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl SyntheticGraph {
    /// Generates a connected random graph from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BenchSetupError::NonPositiveValue`] when `vertex_count`,
    /// `avg_degree`, or `max_cost` is not positive.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, BenchSetupError> {
        if config.vertex_count == 0 {
            return Err(BenchSetupError::NonPositiveValue {
                context: "vertex_count",
            });
        }
        if config.avg_degree == 0 {
            return Err(BenchSetupError::NonPositiveValue {
                context: "avg_degree",
            });
        }
        if config.max_cost <= 0 {
            return Err(BenchSetupError::NonPositiveValue { context: "max_cost" });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let vertex_count = config.vertex_count;
        let mut edges = Vec::new();

        // Spanning walk over a random permutation guarantees connectivity.
        let mut perm: Vec<usize> = (0..vertex_count).collect();
        shuffle(&mut perm, &mut rng);
        for i in 1..vertex_count {
            let cost = rng.gen_range(1..=config.max_cost);
            edges.push(Edge::new(perm[i - 1], perm[i], cost));
        }

        // A single vertex admits no extra edges; the target only applies
        // once random pairs can differ.
        let target_edges = if vertex_count > 1 {
            vertex_count.saturating_mul(config.avg_degree) / 2
        } else {
            0
        };
        while edges.len() < target_edges {
            let i = rng.gen_range(0..vertex_count);
            let j = rng.gen_range(0..vertex_count);
            if i != j {
                let cost = rng.gen_range(1..=config.max_cost);
                edges.push(Edge::new(i, j, cost));
            }
        }

        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Returns the number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the generated edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
