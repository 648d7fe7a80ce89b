//! Property 3: Determinism.
//!
//! Runs the builder on the same input multiple times — sequentially and on
//! separate threads — and asserts that every run produces an identical
//! forest. The stable sort's input-order tie-break makes the accepted edge
//! list a pure function of the input, and separate calls share no state, so
//! any divergence is a bug.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{SpanningForest, build_mst};

use super::types::{DeterminismConfig, MstFixture};

/// Number of threads used for the concurrent-invocation check.
const CONCURRENT_CALLS: usize = 4;

/// Runs the determinism property for the given fixture.
///
/// Executes `build_mst` repeatedly and asserts that every run produces a
/// forest equal to the baseline, including the exact edge order. The
/// repetition count is controlled by [`DeterminismConfig`].
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();

    let baseline = build_mst(fixture.vertex_count, &fixture.edges).map_err(|e| {
        TestCaseError::fail(format!(
            "baseline build_mst failed: {e} (distribution={:?}, vertices={}, edges={})",
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        ))
    })?;

    for run in 1..config.repetitions {
        let forest = build_mst(fixture.vertex_count, &fixture.edges).map_err(|e| {
            TestCaseError::fail(format!(
                "run {run}: build_mst failed: {e} \
                 (distribution={:?}, vertices={}, edges={})",
                fixture.distribution,
                fixture.vertex_count,
                fixture.edges.len(),
            ))
        })?;

        // Exact forest equality — edge list, order, and component count.
        if forest != baseline {
            return Err(TestCaseError::fail(format!(
                "run {run}: forest differs from baseline \
                 (distribution={:?}, vertices={}, edges={})",
                fixture.distribution,
                fixture.vertex_count,
                fixture.edges.len(),
            )));
        }
    }

    verify_concurrent_calls_agree(fixture, &baseline)
}

/// Runs the builder on several threads at once against the same shared
/// input and asserts agreement with the baseline. Each call owns its
/// working state, so concurrent invocations must not interfere.
fn verify_concurrent_calls_agree(
    fixture: &MstFixture,
    baseline: &SpanningForest,
) -> TestCaseResult {
    let forests: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..CONCURRENT_CALLS)
            .map(|_| scope.spawn(|| build_mst(fixture.vertex_count, &fixture.edges)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("builder thread must not panic"))
            .collect()
    });

    for (call, result) in forests.into_iter().enumerate() {
        let forest = result.map_err(|e| {
            TestCaseError::fail(format!(
                "concurrent call {call}: build_mst failed: {e} \
                 (distribution={:?}, vertices={}, edges={})",
                fixture.distribution,
                fixture.vertex_count,
                fixture.edges.len(),
            ))
        })?;
        if forest != *baseline {
            return Err(TestCaseError::fail(format!(
                "concurrent call {call}: forest differs from baseline \
                 (distribution={:?}, vertices={}, edges={})",
                fixture.distribution,
                fixture.vertex_count,
                fixture.edges.len(),
            )));
        }
    }

    Ok(())
}
