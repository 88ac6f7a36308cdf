//! Bipartition execution engine.
//!
//! # Algorithm
//!
//! 1. Validate the batch (at least two entities, even count, finite
//!    ratings)
//! 2. Stable-sort a private index order by rating descending; ties keep
//!    input order
//! 3. Greedy seed: walk the sorted order once, assigning each entity to
//!    team A while A is lighter and not yet full, otherwise to team B
//! 4. Refine: repeat full passes over all `(i in A, j in B)` index
//!    pairs, applying any swap that strictly reduces the rating
//!    difference the moment it is found, until a pass applies none
//!
//! The refinement is a first-improvement hill-climb over the
//! single-swap neighborhood. It can stop at a local optimum that a
//! two-element move would escape; that limitation is intentional, since
//! the output for a given input order is part of the contract. Strict
//! improvement rules out oscillation: the difference decreases with
//! every swap and is bounded below by zero.

use super::config::BalanceConfig;
use super::error::BalanceError;
use super::types::{Partition, Rated};

/// Balanced bipartition runner.
pub struct Balancer;

impl Balancer {
    /// Splits `entities` into two equal-size teams with near-minimal
    /// rating difference.
    ///
    /// The input is read, never mutated: the runner sorts and swaps an
    /// index arena over the batch and clones entities into the result
    /// at the end. Calling twice on the same sequence yields identical
    /// partitions.
    ///
    /// # Errors
    ///
    /// Returns [`BalanceError`] when the batch has fewer than two
    /// entities, an odd count, or a non-finite rating. No partial
    /// result is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use team_balance::balance::{BalanceConfig, Balancer};
    ///
    /// let powers = [90.0, 10.0, 50.0, 50.0];
    /// let partition = Balancer::run(&powers, &BalanceConfig::default()).unwrap();
    ///
    /// assert_eq!(partition.team_size(), 2);
    /// assert_eq!(partition.difference(), 0.0);
    /// ```
    pub fn run<T: Rated + Clone>(
        entities: &[T],
        config: &BalanceConfig,
    ) -> Result<Partition<T>, BalanceError> {
        let n = entities.len();
        if n < 2 {
            return Err(BalanceError::TooFewEntities(n));
        }
        if n % 2 != 0 {
            return Err(BalanceError::OddEntityCount(n));
        }
        if let Some(i) = entities.iter().position(|e| !e.power().is_finite()) {
            return Err(BalanceError::NonFinitePower(i));
        }

        let team_size = n / 2;

        // Rating-descending visit order. The sort is stable and ratings
        // are finite, so equal ratings keep their input order — the
        // tie-breaking the whole pipeline's determinism rests on.
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| entities[b].power().total_cmp(&entities[a].power()));

        // Greedy seed: heaviest first into the lighter team, hard size
        // cap per team. Once one team fills, the rest spill into the
        // other.
        let mut team_a: Vec<usize> = Vec::with_capacity(team_size);
        let mut team_b: Vec<usize> = Vec::with_capacity(team_size);
        let mut power_a = 0.0;
        let mut power_b = 0.0;

        for &idx in &order {
            let p = entities[idx].power();
            if team_a.len() < team_size && (power_a <= power_b || team_b.len() >= team_size) {
                team_a.push(idx);
                power_a += p;
            } else {
                team_b.push(idx);
                power_b += p;
            }
        }

        let seed_difference = (power_a - power_b).abs();

        // First-improvement refinement. Swaps apply immediately and the
        // scan continues over the updated teams within the same pass.
        let mut passes = 0;
        let mut swaps = 0;
        let mut improved = true;

        while improved {
            if let Some(cap) = config.max_passes {
                if passes >= cap {
                    break;
                }
            }
            improved = false;
            passes += 1;

            for i in 0..team_a.len() {
                for j in 0..team_b.len() {
                    let current_diff = (power_a - power_b).abs();
                    let pa = entities[team_a[i]].power();
                    let pb = entities[team_b[j]].power();
                    let new_power_a = power_a - pa + pb;
                    let new_power_b = power_b - pb + pa;
                    let new_diff = (new_power_a - new_power_b).abs();

                    if new_diff < current_diff {
                        std::mem::swap(&mut team_a[i], &mut team_b[j]);
                        power_a = new_power_a;
                        power_b = new_power_b;
                        swaps += 1;
                        improved = true;
                    }
                }
            }
        }

        Ok(Partition {
            team_a: team_a.iter().map(|&i| entities[i].clone()).collect(),
            team_b: team_b.iter().map(|&i| entities[i].clone()).collect(),
            power_a,
            power_b,
            seed_difference,
            passes,
            swaps,
        })
    }
}

/// Splits `entities` with the default configuration (uncapped
/// refinement). See [`Balancer::run`].
pub fn balance<T: Rated + Clone>(entities: &[T]) -> Result<Partition<T>, BalanceError> {
    Balancer::run(entities, &BalanceConfig::default())
}
