//! Circular seating layout and reorder gestures.
//!
//! Seat 0 sits at the top of the ring and seats proceed clockwise. Layout
//! math is pure; [`SeatingPlan`] owns the display order plus the two-tap
//! swap machine and the double-tap timer. The plan never touches role
//! assignments: a double tap only reports which player should lose theirs.

use crate::roster::{Player, PlayerId};
use std::f32::consts::PI;
use std::time::{Duration, Instant};

#[cfg(test)]
mod tests;

/// Window for the double-tap clear-role gesture, in milliseconds.
pub const DOUBLE_TAP_MS: u64 = 300;

/// Radius used by the compact name-circle widget.
pub const FIXED_RADIUS: f32 = 130.0;

/// Smallest usable ring radius.
const MIN_RADIUS: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeatPos {
    pub x: f32,
    pub y: f32,
}

/// Angle of seat `index` out of `count`, with seat 0 at the top.
pub fn seat_angle(index: usize, count: usize) -> f32 {
    index as f32 * (2.0 * PI / count as f32) - PI / 2.0
}

pub fn seat_position(index: usize, count: usize, center: SeatPos, radius: f32) -> SeatPos {
    let angle = seat_angle(index, count);
    SeatPos {
        x: center.x + radius * angle.cos(),
        y: center.y + radius * angle.sin(),
    }
}

/// Positions for a full ring of `count` seats.
pub fn ring_positions(count: usize, center: SeatPos, radius: f32) -> Vec<SeatPos> {
    (0..count)
        .map(|i| seat_position(i, count, center, radius))
        .collect()
}

/// Default radius for a layout area, floored so tiny areas keep a visible
/// ring.
pub fn fit_radius(width: f32, height: f32) -> f32 {
    let half = (width.min(height) / 2.0).floor();
    (half - 50.0).max(MIN_RADIUS)
}

/// Two-tap swap selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeatSelection {
    #[default]
    Idle,
    OneSelected(usize),
}

impl SeatSelection {
    pub fn is_idle(self) -> bool {
        matches!(self, SeatSelection::Idle)
    }
}

/// What a tap on a seat did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Seat is now selected and waits for a partner.
    Selected(usize),
    /// The selected seat was tapped again; selection dropped.
    Deselected,
    /// Two seats traded places in the display order.
    Swapped { a: usize, b: usize },
    /// Double tap: the caller should clear this player's role.
    ClearRole(PlayerId),
    /// The tap landed outside the current order.
    Ignored,
}

/// Display order around the table plus the gesture state driving reorders.
#[derive(Debug, Clone, Default)]
pub struct SeatingPlan {
    order: Vec<PlayerId>,
    selection: SeatSelection,
    last_tap: Option<(PlayerId, Instant)>,
}

impl SeatingPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan seeded from the current roster order.
    pub fn from_players(players: &[Player]) -> Self {
        Self {
            order: players.iter().map(|p| p.id).collect(),
            selection: SeatSelection::Idle,
            last_tap: None,
        }
    }

    // --- Gestures ---

    /// Apply one tap on the seat at `index`, stamped `at`.
    ///
    /// The double-tap check runs first so a quick second tap on the same
    /// player never reaches the swap machine. The window follows the player,
    /// not the seat number, so a swap between the two taps cannot misfire
    /// the clear.
    pub fn tap(&mut self, index: usize, at: Instant) -> TapOutcome {
        let Some(&player) = self.order.get(index) else {
            return TapOutcome::Ignored;
        };

        if let Some((last_player, last_at)) = self.last_tap {
            if last_player == player
                && at.saturating_duration_since(last_at) < Duration::from_millis(DOUBLE_TAP_MS)
            {
                self.last_tap = None;
                self.selection = SeatSelection::Idle;
                return TapOutcome::ClearRole(player);
            }
        }
        self.last_tap = Some((player, at));

        match self.selection {
            SeatSelection::Idle => {
                self.selection = SeatSelection::OneSelected(index);
                TapOutcome::Selected(index)
            }
            SeatSelection::OneSelected(current) if current == index => {
                self.selection = SeatSelection::Idle;
                TapOutcome::Deselected
            }
            SeatSelection::OneSelected(current) => {
                self.order.swap(current, index);
                self.selection = SeatSelection::Idle;
                TapOutcome::Swapped { a: current, b: index }
            }
        }
    }

    // --- Roster reconciliation ---

    /// Reconcile the order with the roster: surviving ids keep their relative
    /// order, new players append at the end, removed ids drop out. Any
    /// membership change resets the gesture state, since a stale index or
    /// tap timer must not act on the new order.
    pub fn sync(&mut self, players: &[Player]) {
        let mut next: Vec<PlayerId> = self
            .order
            .iter()
            .copied()
            .filter(|id| players.iter().any(|p| p.id == *id))
            .collect();
        for p in players {
            if !next.contains(&p.id) {
                next.push(p.id);
            }
        }
        if next != self.order {
            self.order = next;
            self.selection = SeatSelection::Idle;
            self.last_tap = None;
        }
    }

    // --- Accessors ---

    pub fn order(&self) -> &[PlayerId] {
        &self.order
    }

    pub fn seat(&self, index: usize) -> Option<PlayerId> {
        self.order.get(index).copied()
    }

    pub fn selection(&self) -> SeatSelection {
        self.selection
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
