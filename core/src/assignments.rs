//! Player-to-role bindings.
//!
//! Pure storage for the assignment map, keyed by player id with the role as
//! the value; a missing key means unassigned. The store enforces the one
//! rule that matters: a role is held by at most one player at a time.
//! Roster integrity (what happens when a player disappears) lives one
//! layer up.

use crate::roles::{Affiliation, Role};
use crate::roster::PlayerId;
use hashbrown::HashMap;

#[cfg(test)]
mod tests;

/// Pure storage for role assignments.
///
/// Player ids are not validated against the roster; binding a role to an
/// unknown id succeeds silently.
#[derive(Debug, Clone, Default)]
pub struct AssignmentStore {
    assigned: HashMap<PlayerId, Role>,
}

impl AssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Mutations ---

    /// Bind `role` to `player`, evicting the current holder first;
    /// `None` clears the player's binding. Never fails.
    ///
    /// Eviction clears every matching entry, not just the first, so two
    /// holders cannot survive even if a bad record ever introduced them.
    pub fn assign_role(&mut self, player: PlayerId, role: Option<Role>) {
        match role {
            Some(role) => {
                self.assigned.retain(|_, held| *held != role);
                self.assigned.insert(player, role);
            }
            None => {
                self.assigned.remove(&player);
            }
        }
    }

    /// Clear the player's binding, reporting whether one existed.
    pub fn unassign_role(&mut self, player: PlayerId) -> bool {
        self.assigned.remove(&player).is_some()
    }

    /// Drop every binding. There is no undo; callers gate this behind a
    /// confirmation step.
    pub fn reset_assignments(&mut self) {
        self.assigned.clear();
    }

    // --- Derived queries ---

    /// Roles held by no player, in catalog order, optionally restricted to
    /// one affiliation.
    pub fn available_roles(&self, affiliation: Option<Affiliation>) -> Vec<Role> {
        Role::ALL
            .iter()
            .copied()
            .filter(|role| !self.is_taken(*role))
            .filter(|role| affiliation.map_or(true, |a| role.affiliation() == a))
            .collect()
    }

    /// Roles held by no *other* player. The player's own role stays listed,
    /// so an existing choice remains selectable in a picker.
    pub fn available_for_player(
        &self,
        player: PlayerId,
        affiliation: Option<Affiliation>,
    ) -> Vec<Role> {
        Role::ALL
            .iter()
            .copied()
            .filter(|role| match self.holder_of(*role) {
                Some(holder) => holder == player,
                None => true,
            })
            .filter(|role| affiliation.map_or(true, |a| role.affiliation() == a))
            .collect()
    }

    pub fn role_of(&self, player: PlayerId) -> Option<Role> {
        self.assigned.get(&player).copied()
    }

    /// Current holder of a role, if any. Linear scan; rosters stay small.
    pub fn holder_of(&self, role: Role) -> Option<PlayerId> {
        self.assigned
            .iter()
            .find_map(|(p, r)| (*r == role).then_some(*p))
    }

    fn is_taken(&self, role: Role) -> bool {
        self.assigned.values().any(|r| *r == role)
    }

    pub fn assignments(&self) -> impl Iterator<Item = (PlayerId, Role)> + '_ {
        self.assigned.iter().map(|(p, r)| (*p, *r))
    }

    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
