//! Deterministic team balancing.
//!
//! Given a batch of rated entities, split it into two equal-size teams
//! whose total ratings are as close as possible. Exact minimization is a
//! size-constrained variant of the NP-hard partition problem, so the
//! engine runs a deterministic heuristic instead:
//!
//! - **Greedy seed**: walk the batch sorted by rating descending,
//!   assigning each entity to the lighter team until it fills up.
//! - **Swap refinement**: first-improvement local search over all
//!   single-element swaps between the teams, down to a fixed point.
//!
//! The whole pipeline is pure and synchronous — no I/O, no randomness,
//! no shared state — so identical input order always produces identical
//! teams, which is what makes the heuristic's exact behavior (including
//! its local optima) testable.
//!
//! # Modules
//!
//! - [`balance`]: the bipartition engine — [`balance::Rated`] seam,
//!   [`balance::Balancer`] runner, derived team metrics.
//! - [`roster`]: the player store and selection model that feed the
//!   engine — validated CRUD over [`roster::Player`] records plus a
//!   [`roster::Selection`] of the subset to split.

pub mod balance;
pub mod roster;
