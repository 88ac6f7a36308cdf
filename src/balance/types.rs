//! Core trait and result types for the balancer.

/// An entity with a scalar strength rating.
///
/// The engine reads only the rating; everything else on the implementing
/// type is opaque payload carried through into the result untouched.
///
/// Ratings must be finite — [`Balancer::run`](super::Balancer::run)
/// rejects NaN and infinities before seeding.
///
/// # Examples
///
/// ```
/// use team_balance::balance::Rated;
///
/// struct Player { name: String, skill: f64 }
///
/// impl Rated for Player {
///     fn power(&self) -> f64 { self.skill }
/// }
/// ```
pub trait Rated {
    /// Strength rating used for balancing.
    fn power(&self) -> f64;
}

/// Bare ratings are entities too; convenient for tests and benches.
impl Rated for f64 {
    fn power(&self) -> f64 {
        *self
    }
}

/// An equal-size split of the input batch into two teams.
///
/// Teams are owned clones of the input entities; the caller's batch is
/// never aliased or mutated. Both teams hold exactly half the batch,
/// with no entity duplicated or dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    /// First team, in assignment order.
    pub team_a: Vec<T>,
    /// Second team, in assignment order.
    pub team_b: Vec<T>,
    /// Total rating of team A (running sum maintained by the engine).
    pub power_a: f64,
    /// Total rating of team B.
    pub power_b: f64,
    /// Absolute rating difference after greedy seeding, before
    /// refinement. Never smaller than [`difference`](Self::difference).
    pub seed_difference: f64,
    /// Full refinement passes executed, including the final pass that
    /// applied no swap.
    pub passes: usize,
    /// Improving swaps applied during refinement.
    pub swaps: usize,
}

impl<T> Partition<T> {
    /// Absolute rating difference between the teams, full precision.
    pub fn difference(&self) -> f64 {
        (self.power_a - self.power_b).abs()
    }

    /// Members per team (`n / 2`).
    pub fn team_size(&self) -> usize {
        self.team_a.len()
    }
}
