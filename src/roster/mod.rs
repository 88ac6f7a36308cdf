//! Player roster and subset selection.
//!
//! The in-memory collaborator that feeds the balancer: a validated
//! store of [`Player`] records keyed by id, plus a [`Selection`] the
//! caller toggles to pick which subset gets split. Both are plain
//! owned state with no persistence; a front end or storage layer sits
//! above this module, not inside it.

mod selection;
mod store;
mod types;

pub use selection::Selection;
pub use store::{Roster, RosterError, MAX_POWER, MIN_POWER};
pub use types::Player;
