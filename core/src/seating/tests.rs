use super::*;
use std::time::{Duration, Instant};

fn make_players(names: &[&str]) -> Vec<Player> {
    names
        .iter()
        .map(|name| Player { id: PlayerId::new(), name: name.to_string() })
        .collect()
}

fn assert_close(pos: SeatPos, x: f32, y: f32) {
    assert!((pos.x - x).abs() < 1e-3, "x: {} vs {}", pos.x, x);
    assert!((pos.y - y).abs() < 1e-3, "y: {} vs {}", pos.y, y);
}

// layout math

#[test]
fn test_four_seats_hit_cardinal_points() {
    let center = SeatPos { x: 200.0, y: 150.0 };
    let ring = ring_positions(4, center, 100.0);
    assert_eq!(ring.len(), 4);
    assert_close(ring[0], 200.0, 50.0);
    assert_close(ring[1], 300.0, 150.0);
    assert_close(ring[2], 200.0, 250.0);
    assert_close(ring[3], 100.0, 150.0);
}

#[test]
fn test_single_seat_sits_at_top() {
    let center = SeatPos { x: 50.0, y: 50.0 };
    let ring = ring_positions(1, center, 30.0);
    assert_close(ring[0], 50.0, 20.0);
}

#[test]
fn test_empty_ring_has_no_positions() {
    let center = SeatPos { x: 0.0, y: 0.0 };
    assert!(ring_positions(0, center, 100.0).is_empty());
}

#[test]
fn test_fit_radius_follows_short_side() {
    assert_eq!(fit_radius(800.0, 600.0), 250.0);
    assert_eq!(fit_radius(600.0, 800.0), 250.0);
    assert_eq!(fit_radius(1000.0, 361.0), 130.0);
}

#[test]
fn test_fit_radius_floors_at_minimum() {
    assert_eq!(fit_radius(100.0, 100.0), 60.0);
    assert_eq!(fit_radius(219.0, 500.0), 60.0);
    assert_eq!(fit_radius(0.0, 0.0), 60.0);
}

// swap machine

#[test]
fn test_select_then_swap_returns_to_idle() {
    let players = make_players(&["A", "B", "C"]);
    let mut plan = SeatingPlan::from_players(&players);
    let t0 = Instant::now();

    assert_eq!(plan.tap(0, t0), TapOutcome::Selected(0));
    assert_eq!(plan.selection(), SeatSelection::OneSelected(0));

    let outcome = plan.tap(2, t0 + Duration::from_secs(1));
    assert_eq!(outcome, TapOutcome::Swapped { a: 0, b: 2 });
    assert!(plan.selection().is_idle());

    let expected = [players[2].id, players[1].id, players[0].id];
    assert_eq!(plan.order(), expected);
}

#[test]
fn test_tapping_selected_seat_deselects() {
    let players = make_players(&["A", "B"]);
    let mut plan = SeatingPlan::from_players(&players);
    let t0 = Instant::now();

    plan.tap(0, t0);
    // Slow enough not to read as a double tap.
    assert_eq!(plan.tap(0, t0 + Duration::from_millis(400)), TapOutcome::Deselected);
    assert!(plan.selection().is_idle());
    assert_eq!(plan.order(), [players[0].id, players[1].id]);
}

#[test]
fn test_out_of_range_tap_is_ignored() {
    let players = make_players(&["A"]);
    let mut plan = SeatingPlan::from_players(&players);
    assert_eq!(plan.tap(5, Instant::now()), TapOutcome::Ignored);
    assert!(plan.selection().is_idle());
}

// double tap

#[test]
fn test_double_tap_clears_role_and_resets() {
    let players = make_players(&["A", "B"]);
    let mut plan = SeatingPlan::from_players(&players);
    let t0 = Instant::now();

    plan.tap(0, t0);
    let outcome = plan.tap(0, t0 + Duration::from_millis(100));
    assert_eq!(outcome, TapOutcome::ClearRole(players[0].id));
    assert!(plan.selection().is_idle());

    // The timer was consumed: a third quick tap starts a fresh selection.
    assert_eq!(plan.tap(0, t0 + Duration::from_millis(200)), TapOutcome::Selected(0));
}

#[test]
fn test_slow_second_tap_is_not_a_double() {
    let players = make_players(&["A"]);
    let mut plan = SeatingPlan::from_players(&players);
    let t0 = Instant::now();

    plan.tap(0, t0);
    assert_eq!(plan.tap(0, t0 + Duration::from_millis(400)), TapOutcome::Deselected);
}

#[test]
fn test_swap_partner_tap_never_reads_as_double() {
    let players = make_players(&["A", "B", "C"]);
    let mut plan = SeatingPlan::from_players(&players);
    let t0 = Instant::now();

    plan.tap(0, t0);
    // Quick second tap on a different seat must swap, not clear.
    let outcome = plan.tap(1, t0 + Duration::from_millis(100));
    assert_eq!(outcome, TapOutcome::Swapped { a: 0, b: 1 });

    // Seat 1 now holds player A; the timer remembers player B, so another
    // quick tap there selects instead of clearing.
    let outcome = plan.tap(1, t0 + Duration::from_millis(200));
    assert_eq!(outcome, TapOutcome::Selected(1));
}

// roster sync

#[test]
fn test_sync_keeps_order_appends_and_drops() {
    let mut players = make_players(&["A", "B", "C"]);
    let mut plan = SeatingPlan::from_players(&players);
    let t0 = Instant::now();

    plan.tap(0, t0);
    plan.tap(2, t0 + Duration::from_secs(1));
    let c = players[2].id;
    let a = players[0].id;
    assert_eq!(plan.order(), [c, players[1].id, a]);

    // B leaves, D arrives.
    players.remove(1);
    players.push(Player { id: PlayerId::new(), name: "D".to_string() });
    let d = players[2].id;

    plan.tap(0, t0 + Duration::from_secs(2));
    plan.sync(&players);
    assert_eq!(plan.order(), [c, a, d]);
    assert!(plan.selection().is_idle());
}

#[test]
fn test_sync_without_membership_change_keeps_selection() {
    let players = make_players(&["A", "B"]);
    let mut plan = SeatingPlan::from_players(&players);

    plan.tap(1, Instant::now());
    plan.sync(&players);
    assert_eq!(plan.selection(), SeatSelection::OneSelected(1));
}
