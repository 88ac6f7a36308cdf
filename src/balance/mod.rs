//! Balanced bipartition (equal-size two-way split).
//!
//! Partitions a batch of rated entities into two teams of exactly `n/2`
//! members each, minimizing the absolute difference of rating sums. The
//! size-constrained minimum is NP-hard, so the engine is a deterministic
//! heuristic: a greedy seed over the batch sorted by rating descending,
//! followed by a first-improvement pairwise-swap local search run to a
//! fixed point. Single-element swaps only — the search can terminate at
//! a local optimum a multi-element move would escape, and that is part
//! of the contract rather than a defect.
//!
//! # References
//!
//! - Graham, R. L. (1969). "Bounds on Multiprocessing Timing Anomalies",
//!   *SIAM Journal on Applied Mathematics* 17(2), 416-429. [greedy
//!   longest-first seeding]
//! - Kernighan, B. W. & Lin, S. (1970). "An Efficient Heuristic
//!   Procedure for Partitioning Graphs", *Bell System Technical Journal*
//!   49(2), 291-307. [swap neighborhoods]

mod config;
mod error;
mod metrics;
mod runner;
mod types;

pub use config::BalanceConfig;
pub use error::BalanceError;
pub use metrics::{display_difference, power_difference, total_power};
pub use runner::{balance, Balancer};
pub use types::{Partition, Rated};
