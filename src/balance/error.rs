//! Input validation errors.

use thiserror::Error;

/// Rejections raised before any seeding or refinement runs.
///
/// Every variant is a caller-correctable input problem. The engine is
/// deterministic, so retrying a failed call with the same input fails
/// identically; the only meaningful retry is upstream, with a corrected
/// batch (e.g. an even number of selected entities).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// Fewer than two entities were supplied.
    #[error("need at least two entities, got {0}")]
    TooFewEntities(usize),
    /// The batch cannot split into two equal teams.
    #[error("need an even number of entities, got {0}")]
    OddEntityCount(usize),
    /// A rating was NaN or infinite. Carries the index of the first
    /// offending entity in input order.
    #[error("entity at index {0} has a non-finite power rating")]
    NonFinitePower(usize),
}
