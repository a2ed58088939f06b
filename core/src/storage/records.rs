//! Serialized shapes for the two durable records.
//!
//! Records keep to plain strings: player ids as their canonical uuid text,
//! roles as display titles. Rebuilding a store from a record tolerates
//! hand-edited files. Entries that no longer resolve are dropped with a
//! warning, and duplicate role titles fall through the normal eviction rule
//! so the uniqueness invariant holds even for a corrupt record.

use crate::assignments::AssignmentStore;
use crate::roster::{DEFAULT_HISTORY, Player, PlayerId, RosterStore};
use crate::roles::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Durable form of the roster store: seated players plus name history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRecord {
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
    #[serde(default = "default_history")]
    pub history: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: String,
    pub name: String,
}

fn default_history() -> Vec<String> {
    DEFAULT_HISTORY.iter().map(|s| s.to_string()).collect()
}

impl Default for RosterRecord {
    fn default() -> Self {
        Self { players: Vec::new(), history: default_history() }
    }
}

impl From<&RosterStore> for RosterRecord {
    fn from(store: &RosterStore) -> Self {
        Self {
            players: store
                .players()
                .iter()
                .map(|p| PlayerRecord { id: p.id.to_string(), name: p.name.clone() })
                .collect(),
            history: store.history().to_vec(),
        }
    }
}

impl RosterRecord {
    /// Rebuild the in-memory store, dropping entries whose id does not parse.
    pub fn into_store(self) -> RosterStore {
        let mut players = Vec::with_capacity(self.players.len());
        for entry in self.players {
            match Uuid::parse_str(&entry.id) {
                Ok(id) => players.push(Player { id: PlayerId::from(id), name: entry.name }),
                Err(err) => {
                    tracing::warn!(id = %entry.id, error = %err, "Dropping roster entry with bad id");
                }
            }
        }
        RosterStore::from_parts(players, self.history)
    }
}

/// Durable form of the assignment store: player id to role title.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentRecord {
    #[serde(default)]
    pub assigned: HashMap<String, String>,
}

impl From<&AssignmentStore> for AssignmentRecord {
    fn from(store: &AssignmentStore) -> Self {
        Self {
            assigned: store
                .assignments()
                .map(|(player, role)| (player.to_string(), role.title().to_string()))
                .collect(),
        }
    }
}

impl AssignmentRecord {
    /// Rebuild the in-memory store, dropping entries that no longer resolve.
    pub fn into_store(self) -> AssignmentStore {
        let mut store = AssignmentStore::new();
        for (id, title) in self.assigned {
            let player = match Uuid::parse_str(&id) {
                Ok(parsed) => PlayerId::from(parsed),
                Err(err) => {
                    tracing::warn!(id = %id, error = %err, "Dropping assignment with bad id");
                    continue;
                }
            };
            let Some(role) = Role::from_title(&title) else {
                tracing::warn!(title = %title, "Dropping assignment with unknown role title");
                continue;
            };
            store.assign_role(player, Some(role));
        }
        store
    }
}
