//! Player roster and name history.
//!
//! Pure storage for the active player list plus the log of names seen before,
//! used to re-add regulars quickly. Name comparisons are case-insensitive on
//! the trimmed form; display casing is kept as entered. Persistence and
//! confirmation flows live one layer up.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;


/// Names used to populate an empty roster.
pub const SEED_NAMES: [&str; 4] = ["Jesse", "Kendal", "Peter", "Thomas"];

/// Remembered names present before any roster has ever been saved.
pub(crate) const DEFAULT_HISTORY: [&str; 6] =
    ["justin", "thomas", "peter", "sungho", "julia", "jill"];

/// Unique identifier for a player, stable across renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PlayerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// Canonical form for name comparisons: trimmed and lowercased.
fn norm(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Pure storage for the roster and name history.
///
/// No operation here fails: empty or whitespace input is normalized to a
/// no-op rather than reported as an error.
#[derive(Debug, Clone)]
pub struct RosterStore {
    players: Vec<Player>,
    history: Vec<String>,
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterStore {
    /// Empty roster carrying the default remembered names.
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            history: DEFAULT_HISTORY.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub(crate) fn from_parts(players: Vec<Player>, history: Vec<String>) -> Self {
        Self { players, history }
    }

    // --- Mutations ---

    /// Add a player with a fresh id, remembering the name.
    /// Empty input adds nothing.
    pub fn add_player(&mut self, name: &str) -> Option<PlayerId> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        let id = PlayerId::new();
        self.players.push(Player { id, name: trimmed.to_string() });
        self.remember(trimmed);
        Some(id)
    }

    /// Re-add a remembered name. No-op if empty or if a seated player
    /// already carries that name. History is left untouched.
    pub fn add_from_history(&mut self, name: &str) -> Option<PlayerId> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        let key = norm(trimmed);
        if self.players.iter().any(|p| norm(&p.name) == key) {
            return None;
        }
        let id = PlayerId::new();
        self.players.push(Player { id, name: trimmed.to_string() });
        Some(id)
    }

    /// Remove a player by id. History keeps the name.
    pub fn remove_player(&mut self, id: PlayerId) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        self.players.len() != before
    }

    /// Rename a player, remembering the new name. An empty trim keeps the
    /// existing name and skips the history append.
    pub fn rename_player(&mut self, id: PlayerId, new_name: &str) {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return;
        }
        let Some(player) = self.players.iter_mut().find(|p| p.id == id) else {
            return;
        };
        player.name = trimmed.to_string();
        self.remember(trimmed);
    }

    /// Empty the roster. History is untouched.
    pub fn clear_players(&mut self) {
        self.players.clear();
    }

    /// Populate an empty roster with [`SEED_NAMES`]. Returns how many players
    /// were added; a non-empty roster is left unchanged.
    pub fn seed_if_empty(&mut self) -> usize {
        if !self.players.is_empty() {
            return 0;
        }
        for name in SEED_NAMES {
            self.players.push(Player { id: PlayerId::new(), name: name.to_string() });
            self.remember(name);
        }
        SEED_NAMES.len()
    }

    /// Drop every history entry matching the name, case-insensitively.
    /// Seated players with that name stay seated.
    pub fn remove_from_history(&mut self, name: &str) {
        let key = norm(name);
        self.history.retain(|h| norm(h) != key);
    }

    fn remember(&mut self, name: &str) {
        let key = norm(name);
        if !self.history.iter().any(|h| norm(h) == key) {
            self.history.push(name.to_string());
        }
    }

    // --- Accessors ---

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// History entries with no case-insensitive match among seated players,
    /// i.e. the names still offered for quick re-adding.
    pub fn history_available(&self) -> Vec<&str> {
        self.history
            .iter()
            .filter(|h| {
                let key = norm(h);
                !self.players.iter().any(|p| norm(&p.name) == key)
            })
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
