use grimoire_core::context::AppConfig;
use grimoire_core::seating::SeatingPlan;
use grimoire_core::storage::{self, RosterRecord};
use grimoire_core::{AssignmentStore, RosterStore};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the individual state types.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<AppConfig>>,
    pub roster: Arc<RwLock<RosterStore>>,
    pub assignments: Arc<RwLock<AssignmentStore>>,
    /// Display order around the table; reconciled after roster changes.
    pub seating: Arc<RwLock<SeatingPlan>>,
}

impl CliContext {
    /// Load settings and persisted records, then build the shared handles.
    pub fn new() -> Self {
        let config = AppConfig::load();
        let mut roster = storage::load_roster();
        let assignments = storage::load_assignments();

        if config.seed_on_start && roster.seed_if_empty() > 0 {
            storage::spawn_save_roster(RosterRecord::from(&roster));
        }

        let seating = SeatingPlan::from_players(roster.players());
        Self {
            config: Arc::new(RwLock::new(config)),
            roster: Arc::new(RwLock::new(roster)),
            assignments: Arc::new(RwLock::new(assignments)),
            seating: Arc::new(RwLock::new(seating)),
        }
    }
}
