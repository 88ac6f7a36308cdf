//! Subset selection over a roster.

use super::store::Roster;
use super::types::Player;

/// The set of player ids currently picked for balancing.
///
/// Membership is what matters: [`selected`](Self::selected) yields the
/// picked players in **roster order**, not toggle order, so the batch
/// handed to the balancer does not depend on the sequence of clicks
/// that built the selection.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether the id is currently selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Flips the id in or out of the selection; returns whether it is
    /// selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|i| i == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_owned());
            true
        }
    }

    /// Selects every player currently in the roster.
    pub fn select_all(&mut self, roster: &Roster) {
        self.ids = roster.players().iter().map(|p| p.id.clone()).collect();
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// The selected players in roster order. Ids that no longer exist
    /// in the roster (removed after selection) are skipped.
    pub fn selected<'a>(&self, roster: &'a Roster) -> Vec<&'a Player> {
        roster
            .players()
            .iter()
            .filter(|p| self.contains(&p.id))
            .collect()
    }
}
