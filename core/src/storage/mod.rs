//! Durable storage for the roster and assignment records.
//!
//! Two independent records live under the per-user config directory for
//! `grimoire`: `roster.toml` and `assignments.toml`. In-memory state is the
//! source of truth everywhere; loads fall back to defaults and saves run as
//! fire-and-forget background tasks whose failures are logged.

mod error;
mod records;

pub use error::StorageError;
pub use records::{AssignmentRecord, PlayerRecord, RosterRecord};

use crate::assignments::AssignmentStore;
use crate::roster::RosterStore;

const ROSTER_RECORD: &str = "roster";
const ASSIGNMENT_RECORD: &str = "assignments";

/// Read the roster record from disk.
pub fn read_roster() -> Result<RosterStore, StorageError> {
    confy::load::<RosterRecord>("grimoire", Some(ROSTER_RECORD))
        .map(RosterRecord::into_store)
        .map_err(|source| StorageError::Load { record: ROSTER_RECORD, source })
}

/// Roster for startup: the persisted record if readable, a fresh default
/// otherwise.
pub fn load_roster() -> RosterStore {
    match read_roster() {
        Ok(store) => store,
        Err(err) => {
            tracing::warn!(error = %err, "Starting with a fresh roster");
            RosterStore::new()
        }
    }
}

/// Read the assignment record from disk.
pub fn read_assignments() -> Result<AssignmentStore, StorageError> {
    confy::load::<AssignmentRecord>("grimoire", Some(ASSIGNMENT_RECORD))
        .map(AssignmentRecord::into_store)
        .map_err(|source| StorageError::Load { record: ASSIGNMENT_RECORD, source })
}

/// Assignments for startup: the persisted record if readable, empty
/// otherwise.
pub fn load_assignments() -> AssignmentStore {
    match read_assignments() {
        Ok(store) => store,
        Err(err) => {
            tracing::warn!(error = %err, "Starting with no assignments");
            AssignmentStore::new()
        }
    }
}

/// Write the roster record synchronously.
pub fn save_roster(record: &RosterRecord) -> Result<(), StorageError> {
    confy::store("grimoire", Some(ROSTER_RECORD), record)
        .map_err(|source| StorageError::Save { record: ROSTER_RECORD, source })
}

/// Write the assignment record synchronously.
pub fn save_assignments(record: &AssignmentRecord) -> Result<(), StorageError> {
    confy::store("grimoire", Some(ASSIGNMENT_RECORD), record)
        .map_err(|source| StorageError::Save { record: ASSIGNMENT_RECORD, source })
}

/// Schedule a roster save off the caller's task. The snapshot already
/// happened, so the caller holds no locks while the file is written.
pub fn spawn_save_roster(record: RosterRecord) {
    tokio::task::spawn_blocking(move || {
        if let Err(err) = save_roster(&record) {
            tracing::warn!(error = %err, "Background roster save failed");
        }
    });
}

/// Schedule an assignment save off the caller's task.
pub fn spawn_save_assignments(record: AssignmentRecord) {
    tokio::task::spawn_blocking(move || {
        if let Err(err) = save_assignments(&record) {
            tracing::warn!(error = %err, "Background assignment save failed");
        }
    });
}
