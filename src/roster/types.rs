//! Player records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::balance::Rated;

/// A roster entry: display names plus a strength rating.
///
/// The balancer reads only [`power`](Rated::power); names and id ride
/// through a split untouched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Player {
    /// Unique id within the roster.
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    /// Rating in `[0, 100]` (enforced by [`Roster`](super::Roster)).
    pub power: f64,
}

impl Player {
    /// "Firstname Lastname" display form.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

impl Rated for Player {
    fn power(&self) -> f64 {
        self.power
    }
}
