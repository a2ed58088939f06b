use super::*;

fn make_players(n: usize) -> Vec<PlayerId> {
    (0..n).map(|_| PlayerId::new()).collect()
}

fn holders_of(store: &AssignmentStore, role: Role) -> usize {
    store.assignments().filter(|(_, r)| *r == role).count()
}

#[test]
fn test_assign_and_read_back() {
    let ids = make_players(2);
    let mut store = AssignmentStore::new();
    store.assign_role(ids[0], Some(Role::Chef));
    assert_eq!(store.role_of(ids[0]), Some(Role::Chef));
    assert_eq!(store.role_of(ids[1]), None);
    assert_eq!(store.holder_of(Role::Chef), Some(ids[0]));
    assert_eq!(store.assigned_count(), 1);
}

#[test]
fn test_assigning_taken_role_evicts_holder() {
    let ids = make_players(2);
    let mut store = AssignmentStore::new();
    store.assign_role(ids[0], Some(Role::Imp));
    store.assign_role(ids[1], Some(Role::Imp));
    assert_eq!(store.role_of(ids[0]), None);
    assert_eq!(store.role_of(ids[1]), Some(Role::Imp));
    assert_eq!(store.assigned_count(), 1);
}

#[test]
fn test_reassign_same_role_is_idempotent() {
    let ids = make_players(1);
    let mut store = AssignmentStore::new();
    store.assign_role(ids[0], Some(Role::Monk));
    store.assign_role(ids[0], Some(Role::Monk));
    assert_eq!(store.role_of(ids[0]), Some(Role::Monk));
    assert_eq!(store.assigned_count(), 1);
}

#[test]
fn test_assign_none_clears_binding() {
    let ids = make_players(1);
    let mut store = AssignmentStore::new();
    store.assign_role(ids[0], Some(Role::Spy));
    store.assign_role(ids[0], None);
    assert_eq!(store.role_of(ids[0]), None);
    assert!(store.is_empty());
}

#[test]
fn test_unassign_reports_whether_bound() {
    let ids = make_players(1);
    let mut store = AssignmentStore::new();
    assert!(!store.unassign_role(ids[0]));
    store.assign_role(ids[0], Some(Role::Virgin));
    assert!(store.unassign_role(ids[0]));
    assert!(!store.unassign_role(ids[0]));
}

#[test]
fn test_uniqueness_holds_across_sequences() {
    let ids = make_players(4);
    let mut store = AssignmentStore::new();
    let moves = [
        (0, Some(Role::Imp)),
        (1, Some(Role::Poisoner)),
        (2, Some(Role::Imp)),
        (3, Some(Role::Poisoner)),
        (0, Some(Role::Baron)),
        (2, None),
        (1, Some(Role::Imp)),
        (3, Some(Role::Baron)),
    ];
    for (i, role) in moves {
        store.assign_role(ids[i], role);
        for role in Role::ALL {
            assert!(holders_of(&store, role) <= 1, "{} held twice", role.title());
        }
    }
    assert_eq!(store.role_of(ids[1]), Some(Role::Imp));
    assert_eq!(store.role_of(ids[3]), Some(Role::Baron));
    assert_eq!(store.role_of(ids[0]), None);
    assert_eq!(store.role_of(ids[2]), None);
}

#[test]
fn test_reset_restores_full_catalog() {
    let ids = make_players(3);
    let mut store = AssignmentStore::new();
    store.assign_role(ids[0], Some(Role::Imp));
    store.assign_role(ids[1], Some(Role::Chef));
    store.assign_role(ids[2], Some(Role::Recluse));
    store.reset_assignments();
    assert!(store.is_empty());
    assert_eq!(store.available_roles(None).len(), Role::ALL.len());
}

#[test]
fn test_available_roles_keeps_catalog_order() {
    let ids = make_players(1);
    let mut store = AssignmentStore::new();
    store.assign_role(ids[0], Some(Role::Washerwoman));
    let available = store.available_roles(None);
    assert_eq!(available.len(), Role::ALL.len() - 1);
    assert_eq!(available[0], Role::Librarian);
    assert!(!available.contains(&Role::Washerwoman));
}

#[test]
fn test_available_roles_filters_affiliation() {
    let ids = make_players(1);
    let mut store = AssignmentStore::new();
    assert_eq!(store.available_roles(Some(Affiliation::Demon)), [Role::Imp]);
    store.assign_role(ids[0], Some(Role::Imp));
    assert!(store.available_roles(Some(Affiliation::Demon)).is_empty());
    assert_eq!(store.available_roles(Some(Affiliation::Outsider)).len(), 4);
}

#[test]
fn test_available_for_player_keeps_own_role() {
    let ids = make_players(2);
    let mut store = AssignmentStore::new();
    store.assign_role(ids[0], Some(Role::Chef));
    assert!(store.available_for_player(ids[0], None).contains(&Role::Chef));
    assert!(!store.available_for_player(ids[1], None).contains(&Role::Chef));
    assert_eq!(store.available_for_player(ids[0], None).len(), Role::ALL.len());
    assert_eq!(store.available_for_player(ids[1], None).len(), Role::ALL.len() - 1);
}

#[test]
fn test_unknown_player_id_is_accepted() {
    // The store does not validate ids against a roster.
    let ghost = PlayerId::new();
    let mut store = AssignmentStore::new();
    store.assign_role(ghost, Some(Role::Saint));
    assert_eq!(store.holder_of(Role::Saint), Some(ghost));
}
