use grimoire_core::roles::{Affiliation, Role};
use grimoire_core::seating::{self, SeatPos, SeatSelection, TapOutcome};
use grimoire_core::storage::{self, AssignmentRecord, RosterRecord};
use grimoire_core::{AppConfig, PlayerId};
use std::io::Write;
use std::time::Instant;

use crate::CliContext;
use crate::repl;

/// Resolve a 1-based seat number against the current display order.
async fn seat_player(ctx: &CliContext, seat: usize) -> Option<PlayerId> {
    let seating = ctx.seating.read().await;
    seat.checked_sub(1).and_then(|i| seating.seat(i))
}

/// First uuid group, enough to tell players apart in a listing.
fn short_id(id: PlayerId) -> String {
    id.to_string()[..8].to_string()
}

async fn sync_seating(ctx: &CliContext) {
    let roster = ctx.roster.read().await;
    ctx.seating.write().await.sync(roster.players());
}

async fn persist_roster(ctx: &CliContext) {
    let record = RosterRecord::from(&*ctx.roster.read().await);
    storage::spawn_save_roster(record);
}

async fn persist_assignments(ctx: &CliContext) {
    let record = AssignmentRecord::from(&*ctx.assignments.read().await);
    storage::spawn_save_assignments(record);
}

pub async fn list_players(ctx: &CliContext) {
    let roster = ctx.roster.read().await;
    let assignments = ctx.assignments.read().await;
    let seating = ctx.seating.read().await;

    if seating.is_empty() {
        println!("No players. Try `add <name>` or `seed`.");
        return;
    }

    println!("{:<6} {:<20} {:<10} Role", "Seat", "Name", "Id");
    println!("{}", "-".repeat(55));
    for (i, id) in seating.order().iter().enumerate() {
        let Some(player) = roster.player(*id) else {
            continue;
        };
        let role = assignments.role_of(*id).map(|r| r.title()).unwrap_or("-");
        println!("{:<6} {:<20} {:<10} {}", i + 1, player.name, short_id(*id), role);
    }
    println!("\nTotal: {} players", roster.len());
}

pub async fn add_player(ctx: &CliContext, name: &str) {
    let created = ctx.roster.write().await.add_player(name);
    match created {
        Some(id) => println!("Added {} ({})", name.trim(), short_id(id)),
        None => {
            println!("Nothing to add: empty name");
            return;
        }
    }
    sync_seating(ctx).await;
    persist_roster(ctx).await;
}

pub async fn recall_player(ctx: &CliContext, name: &str) {
    let created = ctx.roster.write().await.add_from_history(name);
    match created {
        Some(id) => println!("Added {} from history ({})", name.trim(), short_id(id)),
        None => {
            println!("No player added: name is empty or already seated");
            return;
        }
    }
    sync_seating(ctx).await;
    persist_roster(ctx).await;
}

pub async fn remove_player(ctx: &CliContext, seat: usize) {
    let Some(id) = seat_player(ctx, seat).await else {
        println!("No seat {seat}");
        return;
    };
    let name = ctx.roster.read().await.player(id).map(|p| p.name.clone());
    let removed = ctx.roster.write().await.remove_player(id);
    if !removed {
        println!("No seat {seat}");
        return;
    }
    // A removed player must not keep a role bound to their old id.
    let had_role = ctx.assignments.write().await.unassign_role(id);
    sync_seating(ctx).await;
    persist_roster(ctx).await;
    if had_role {
        persist_assignments(ctx).await;
    }
    println!("Removed {}", name.unwrap_or_else(|| short_id(id)));
}

pub async fn rename_player(ctx: &CliContext, seat: usize, new_name: &str) {
    let Some(id) = seat_player(ctx, seat).await else {
        println!("No seat {seat}");
        return;
    };
    if new_name.trim().is_empty() {
        println!("Name unchanged: empty input");
        return;
    }
    ctx.roster.write().await.rename_player(id, new_name);
    persist_roster(ctx).await;
    println!("Seat {seat} is now {}", new_name.trim());
}

pub async fn clear_players(ctx: &CliContext) {
    let count = ctx.roster.read().await.len();
    if count == 0 {
        println!("Roster already empty");
        return;
    }
    match repl::confirm(&format!("Remove all {count} players and their roles?")) {
        Ok(true) => {}
        Ok(false) => {
            println!("Cancelled");
            return;
        }
        Err(err) => {
            println!("{err}");
            return;
        }
    }
    ctx.roster.write().await.clear_players();
    ctx.assignments.write().await.reset_assignments();
    sync_seating(ctx).await;
    persist_roster(ctx).await;
    persist_assignments(ctx).await;
    println!("Roster cleared");
}

pub async fn seed_players(ctx: &CliContext) {
    let added = ctx.roster.write().await.seed_if_empty();
    if added == 0 {
        println!("Roster not empty, nothing seeded");
        return;
    }
    sync_seating(ctx).await;
    persist_roster(ctx).await;
    println!("Seeded {added} players");
}

pub async fn show_history(ctx: &CliContext) {
    let roster = ctx.roster.read().await;
    if roster.history().is_empty() {
        println!("History is empty");
        return;
    }
    let available = roster.history_available();
    println!("{:<20} Status", "Name");
    println!("{}", "-".repeat(30));
    for name in roster.history() {
        let status = if available.contains(&name.as_str()) { "available" } else { "seated" };
        println!("{:<20} {}", name, status);
    }
}

pub async fn forget_name(ctx: &CliContext, name: &str) {
    let removed = {
        let mut roster = ctx.roster.write().await;
        let before = roster.history().len();
        roster.remove_from_history(name);
        before - roster.history().len()
    };
    if removed == 0 {
        println!("No history entry for {}", name.trim());
        return;
    }
    persist_roster(ctx).await;
    println!("Removed {} from history", name.trim());
}

pub async fn assign_role(ctx: &CliContext, seat: usize, title: &str) {
    let Some(id) = seat_player(ctx, seat).await else {
        println!("No seat {seat}");
        return;
    };
    let Some(role) = Role::from_title_ci(title.trim()) else {
        println!("Unknown role: {}", title.trim());
        return;
    };
    let evicted = {
        let assignments = ctx.assignments.read().await;
        assignments.holder_of(role).filter(|holder| *holder != id)
    };
    ctx.assignments.write().await.assign_role(id, Some(role));
    persist_assignments(ctx).await;

    let roster = ctx.roster.read().await;
    let name = roster.player(id).map(|p| p.name.as_str()).unwrap_or("?");
    match evicted.and_then(|e| roster.player(e)) {
        Some(prev) => println!("{} is now the {} (taken from {})", name, role.title(), prev.name),
        None => println!("{} is now the {}", name, role.title()),
    }
}

pub async fn unassign_role(ctx: &CliContext, seat: usize) {
    let Some(id) = seat_player(ctx, seat).await else {
        println!("No seat {seat}");
        return;
    };
    let had_role = ctx.assignments.write().await.unassign_role(id);
    if !had_role {
        println!("Seat {seat} has no role");
        return;
    }
    persist_assignments(ctx).await;
    println!("Seat {seat} role cleared");
}

pub async fn reset_assignments(ctx: &CliContext) {
    let count = ctx.assignments.read().await.assigned_count();
    if count == 0 {
        println!("No roles assigned");
        return;
    }
    match repl::confirm(&format!("Clear all {count} role assignments?")) {
        Ok(true) => {}
        Ok(false) => {
            println!("Cancelled");
            return;
        }
        Err(err) => {
            println!("{err}");
            return;
        }
    }
    ctx.assignments.write().await.reset_assignments();
    persist_assignments(ctx).await;
    println!("All assignments cleared");
}

fn parse_affiliation(arg: Option<&str>) -> Result<Option<Affiliation>, String> {
    match arg {
        None => Ok(None),
        Some(s) => Affiliation::parse(s)
            .map(Some)
            .ok_or_else(|| format!("Unknown affiliation: {s} (townsfolk, outsider, minion, demon)")),
    }
}

fn print_roles(roles: &[Role]) {
    if roles.is_empty() {
        println!("No roles available");
        return;
    }
    println!("{:<16} Affiliation", "Role");
    println!("{}", "-".repeat(28));
    for role in roles {
        println!("{:<16} {}", role.title(), role.affiliation());
    }
    println!("\nTotal: {} roles", roles.len());
}

pub async fn list_available_roles(ctx: &CliContext, affiliation: Option<&str>) {
    let filter = match parse_affiliation(affiliation) {
        Ok(f) => f,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    let available = ctx.assignments.read().await.available_roles(filter);
    print_roles(&available);
}

pub async fn list_roles_for(ctx: &CliContext, seat: usize, affiliation: Option<&str>) {
    let Some(id) = seat_player(ctx, seat).await else {
        println!("No seat {seat}");
        return;
    };
    let filter = match parse_affiliation(affiliation) {
        Ok(f) => f,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    let available = ctx.assignments.read().await.available_for_player(id, filter);
    print_roles(&available);
}

/// Render the ring for the current seating order.
pub async fn show_table(ctx: &CliContext) {
    let (width, height) = {
        let config = ctx.config.read().await;
        (config.table_width, config.table_height)
    };
    let roster = ctx.roster.read().await;
    let assignments = ctx.assignments.read().await;
    let seating = ctx.seating.read().await;

    if seating.is_empty() {
        println!("No players to seat");
        return;
    }

    let radius = seating::fit_radius(width, height);
    let center = SeatPos { x: width / 2.0, y: height / 2.0 };
    println!("Table {width}x{height}, radius {radius}");
    println!("{:<6} {:<20} {:<16} Position", "Seat", "Name", "Role");
    println!("{}", "-".repeat(60));
    for (i, id) in seating.order().iter().enumerate() {
        let pos = seating::seat_position(i, seating.len(), center, radius);
        let name = roster.player(*id).map(|p| p.name.as_str()).unwrap_or("?");
        let role = assignments.role_of(*id).map(|r| r.title()).unwrap_or("-");
        println!("{:<6} {:<20} {:<16} ({:.0}, {:.0})", i + 1, name, role, pos.x, pos.y);
    }
    if let SeatSelection::OneSelected(i) = seating.selection() {
        println!("\nSeat {} selected for swap", i + 1);
    }
}

/// Feed one tap into the seating gesture machine.
pub async fn tap_seat(ctx: &CliContext, seat: usize) {
    let Some(index) = seat.checked_sub(1) else {
        println!("No seat {seat}");
        return;
    };
    let outcome = ctx.seating.write().await.tap(index, Instant::now());
    match outcome {
        TapOutcome::Selected(i) => println!("Seat {} selected; tap another seat to swap", i + 1),
        TapOutcome::Deselected => println!("Selection cleared"),
        TapOutcome::Swapped { a, b } => println!("Swapped seats {} and {}", a + 1, b + 1),
        TapOutcome::ClearRole(id) => {
            let had_role = ctx.assignments.write().await.unassign_role(id);
            if had_role {
                persist_assignments(ctx).await;
            }
            let name = ctx.roster.read().await.player(id).map(|p| p.name.clone());
            println!("Double tap: cleared role for {}", name.unwrap_or_else(|| short_id(id)));
        }
        TapOutcome::Ignored => println!("No seat {seat}"),
    }
}

/// Show the current settings and where they live.
pub async fn show_settings(ctx: &CliContext) {
    let config = ctx.config.read().await;
    println!("table_width   = {}", config.table_width);
    println!("table_height  = {}", config.table_height);
    println!("seed_on_start = {}", config.seed_on_start);
    if let Some(path) = AppConfig::path() {
        println!("\nConfig file: {}", path.display());
    }
}

pub async fn set_table(ctx: &CliContext, width: f32, height: f32) {
    if !(width > 0.0 && height > 0.0) {
        println!("Table size must be positive");
        return;
    }
    let mut config = ctx.config.write().await;
    config.table_width = width;
    config.table_height = height;
    config.clone().save();
    println!("Table set to {width}x{height} (radius {})", seating::fit_radius(width, height));
}

pub fn exit() {
    write!(std::io::stdout(), "quitting...").expect("error exiting");
    std::io::stdout().flush().expect("error flushing stdout");
}
