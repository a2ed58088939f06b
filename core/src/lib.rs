pub mod assignments;
pub mod context;
pub mod roles;
pub mod roster;
pub mod seating;
pub mod storage;

// Re-exports for convenience
pub use assignments::AssignmentStore;
pub use context::AppConfig;
pub use roles::{Affiliation, Role};
pub use roster::{Player, PlayerId, RosterStore, SEED_NAMES};
pub use seating::{
    DOUBLE_TAP_MS, FIXED_RADIUS, SeatPos, SeatSelection, SeatingPlan, TapOutcome, fit_radius,
    ring_positions, seat_angle, seat_position,
};
pub use storage::{AssignmentRecord, PlayerRecord, RosterRecord, StorageError};
