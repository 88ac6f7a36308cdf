//! In-memory player store keyed by id.

use thiserror::Error;

use super::types::Player;

/// Lowest accepted rating.
pub const MIN_POWER: f64 = 0.0;
/// Highest accepted rating.
pub const MAX_POWER: f64 = 100.0;

/// Validation and lookup failures for roster operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// A record with this id is already stored.
    #[error("player id {0:?} already exists")]
    DuplicateId(String),
    /// No record with this id.
    #[error("no player with id {0:?}")]
    UnknownId(String),
    /// First or last name was empty after trimming.
    #[error("first and last name must be non-empty")]
    EmptyName,
    /// Rating outside `[0, 100]` or non-finite.
    #[error("power must be a number between 0 and 100, got {0}")]
    PowerOutOfRange(f64),
}

/// Mutable in-memory roster.
///
/// Insertion order is preserved and is the order handed to the
/// balancer; listings sorted by first name (the admin view) are
/// produced on demand.
///
/// # Examples
///
/// ```
/// use team_balance::roster::Roster;
///
/// let mut roster = Roster::new();
/// let id = roster.add("Mia", "Hamm", 92.0).unwrap().id.clone();
/// assert!(roster.get(&id).is_some());
/// assert_eq!(roster.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
    next_id: u64,
}

fn validate(firstname: &str, lastname: &str, power: f64) -> Result<(String, String), RosterError> {
    let firstname = firstname.trim();
    let lastname = lastname.trim();
    if firstname.is_empty() || lastname.is_empty() {
        return Err(RosterError::EmptyName);
    }
    if !power.is_finite() || !(MIN_POWER..=MAX_POWER).contains(&power) {
        return Err(RosterError::PowerOutOfRange(power));
    }
    Ok((firstname.to_owned(), lastname.to_owned()))
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Validates and stores a new player under a freshly minted id,
    /// returning the stored record. Names are trimmed before storage.
    pub fn add(
        &mut self,
        firstname: &str,
        lastname: &str,
        power: f64,
    ) -> Result<&Player, RosterError> {
        let (firstname, lastname) = validate(firstname, lastname, power)?;
        self.next_id += 1;
        let id = format!("p{}", self.next_id);
        self.players.push(Player {
            id,
            firstname,
            lastname,
            power,
        });
        let last = self.players.len() - 1;
        Ok(&self.players[last])
    }

    /// Stores a player under its own id; rejects duplicates. The same
    /// name and rating rules as [`add`](Self::add) apply.
    pub fn insert(&mut self, player: Player) -> Result<(), RosterError> {
        let (firstname, lastname) = validate(&player.firstname, &player.lastname, player.power)?;
        if self.get(&player.id).is_some() {
            return Err(RosterError::DuplicateId(player.id));
        }
        self.players.push(Player {
            firstname,
            lastname,
            ..player
        });
        Ok(())
    }

    /// Replaces the names and rating of an existing player.
    pub fn update(
        &mut self,
        id: &str,
        firstname: &str,
        lastname: &str,
        power: f64,
    ) -> Result<(), RosterError> {
        let (firstname, lastname) = validate(firstname, lastname, power)?;
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| RosterError::UnknownId(id.to_owned()))?;
        player.firstname = firstname;
        player.lastname = lastname;
        player.power = power;
        Ok(())
    }

    /// Removes and returns the player with the given id.
    pub fn remove(&mut self, id: &str) -> Result<Player, RosterError> {
        let pos = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| RosterError::UnknownId(id.to_owned()))?;
        Ok(self.players.remove(pos))
    }

    /// Looks up a player by id.
    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// All players in insertion order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Players sorted by first name, as the admin listing shows them.
    /// Ties keep insertion order.
    pub fn sorted_by_firstname(&self) -> Vec<&Player> {
        let mut sorted: Vec<&Player> = self.players.iter().collect();
        sorted.sort_by(|a, b| a.firstname.cmp(&b.firstname));
        sorted
    }

    /// Mean rating across the roster; 0.0 when empty.
    pub fn average_power(&self) -> f64 {
        if self.players.is_empty() {
            return 0.0;
        }
        self.players.iter().map(|p| p.power).sum::<f64>() / self.players.len() as f64
    }
}
