//! Benchmark setup error type.
//!
//! Aggregates the error types that may arise during benchmark data
//! preparation so that setup functions can propagate failures with `?`
//! instead of using `.expect()`.

use taiga_core::MstError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// MST computation failed during setup validation.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A zero or out-of-range value was passed where a positive one was
    /// required.
    #[error("expected a positive value for {context}")]
    NonPositiveValue {
        /// A description of the parameter that was unexpectedly non-positive.
        context: &'static str,
    },
}
