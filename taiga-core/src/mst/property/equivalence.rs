//! Property 1: Equivalence with the Prim oracle.
//!
//! For any generated input graph, verifies that the Kruskal builder
//! produces a forest with the same total cost, edge count, and component
//! count as the independent Prim's-algorithm reference.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::build_mst;

use super::helpers::total_cost_i128;
use super::oracle::prim_reference;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
///
/// Total costs are accumulated as `i128` on both sides so the comparison is
/// exact.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = build_mst(fixture.vertex_count, &fixture.edges).map_err(|e| {
        TestCaseError::fail(format!(
            "build_mst failed: {e} (distribution={:?}, vertices={}, edges={})",
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        ))
    })?;

    let oracle = prim_reference(fixture.vertex_count, &fixture.edges);

    let forest_cost = total_cost_i128(forest.edges());
    if forest_cost != oracle.total_cost {
        return Err(TestCaseError::fail(format!(
            "total cost mismatch: kruskal={forest_cost}, oracle={} \
             (distribution={:?}, vertices={}, edges={})",
            oracle.total_cost,
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        )));
    }

    if forest.edges().len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, oracle={} \
             (distribution={:?}, vertices={}, edges={})",
            forest.edges().len(),
            oracle.edge_count,
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        )));
    }

    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: kruskal={}, oracle={} \
             (distribution={:?}, vertices={}, edges={})",
            forest.component_count(),
            oracle.component_count,
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        )));
    }

    Ok(())
}
