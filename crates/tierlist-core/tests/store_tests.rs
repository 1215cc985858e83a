// Rust guideline compliant 2026-10-13

//! Unit tests for the relational store.
//!
//! These tests cover tier removal policies, on-demand tier creation,
//! rename cascading, ordering guarantees and failure atomicity.

use tierlist_core::{
    Config, EntryDescriptor, Error, IdGenerator, RemovalMode, Tier, TierRef, TierStore,
};

/// Creates a store with the given tier names and a fixed id salt.
fn store_with(tiers: &[&str]) -> TierStore {
    TierStore::with_tiers(
        tiers.iter().map(|name| Tier::new(*name, "grey")),
        IdGenerator::with_salt("store-tests"),
    )
    .expect("Seed tiers should be valid")
}

fn tier_names(store: &TierStore) -> Vec<String> {
    store.list_tiers().into_iter().map(|t| t.name).collect()
}

fn ids_of(entries: &[tierlist_core::Entry]) -> Vec<String> {
    entries.iter().map(|e| e.id().to_string()).collect()
}

#[test]
fn test_scenario_rank_then_remove_tier() {
    let mut store = store_with(&["S", "A"]);

    let created = store.add_entries(vec![EntryDescriptor::new("x.png")]);
    assert_eq!(created.len(), 1);
    let e1 = created[0].clone();
    assert_eq!(e1.tier(), &TierRef::Unranked);

    store.change_entry_tier(e1.id(), TierRef::named("S")).unwrap();
    let in_s = store.filter_by_tier(&TierRef::named("S")).unwrap();
    assert_eq!(ids_of(&in_s), vec![e1.id().to_string()]);
    assert!(store.filter_by_tier(&TierRef::Unranked).unwrap().is_empty());

    store
        .remove_tier(&TierRef::named("S"), RemovalMode::KeepEntries)
        .unwrap();
    let unranked = store.filter_by_tier(&TierRef::Unranked).unwrap();
    assert_eq!(ids_of(&unranked), vec![e1.id().to_string()]);
    assert_eq!(tier_names(&store), vec!["A"]);
    store.check_integrity().unwrap();
}

#[test]
fn test_add_entries_drops_empty_src() {
    let mut store = store_with(&[]);
    let created = store.add_entries(vec![EntryDescriptor::new(""), EntryDescriptor::new("a.png")]);
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].src(), "a.png");
    assert_eq!(store.entry_count(), 1);
}

#[test]
fn test_add_entries_prepends_batch_in_order() {
    let mut store = store_with(&[]);
    store.add_entries(vec![EntryDescriptor::new("old.png")]);
    store.add_entries(vec![EntryDescriptor::new("new1.png"), EntryDescriptor::new("new2.png")]);

    let srcs: Vec<&str> = store.list_entries().iter().map(|e| e.src()).collect();
    assert_eq!(srcs, vec!["new1.png", "new2.png", "old.png"]);
}

#[test]
fn test_add_entries_auto_creates_tiers() {
    let mut store = store_with(&["S"]);
    store.set_auto_tier_color("pink").unwrap();

    let created = store.add_entries(vec![
        EntryDescriptor::in_tier("a.png", "Fresh"),
        EntryDescriptor::in_tier("b.png", "S"),
        EntryDescriptor::in_tier("c.png", "Fresh"),
        EntryDescriptor::in_tier("d.png", "Later"),
    ]);

    assert_eq!(created.len(), 4);
    assert_eq!(tier_names(&store), vec!["S", "Fresh", "Later"]);
    assert_eq!(store.get_tier("Fresh").unwrap().color, "pink");
    assert_eq!(store.get_tier("S").unwrap().color, "grey");
    store.check_integrity().unwrap();
}

#[test]
fn test_add_entries_with_empty_tier_name_is_unranked() {
    let mut store = store_with(&[]);
    let created = store.add_entries(vec![EntryDescriptor {
        src: "a.png".into(),
        tier: TierRef::Named(String::new()),
    }]);
    assert_eq!(created[0].tier(), &TierRef::Unranked);
    assert!(store.list_tiers().is_empty());
}

#[test]
fn test_remove_tier_keep_entries() {
    let mut store = store_with(&["S", "A"]);
    store.add_entries(vec![
        EntryDescriptor::in_tier("1.png", "S"),
        EntryDescriptor::in_tier("2.png", "S"),
        EntryDescriptor::in_tier("3.png", "A"),
        EntryDescriptor::new("4.png"),
    ]);
    let before = store.entry_count();

    let removal = store
        .remove_tier(&TierRef::named("S"), RemovalMode::default())
        .unwrap();

    assert_eq!(removal.tier.name, "S");
    assert_eq!(removal.unranked, 2);
    assert!(removal.deleted.is_empty());
    assert_eq!(store.entry_count(), before);
    assert_eq!(store.unranked_entries().len(), 3);
    assert_eq!(tier_names(&store), vec!["A"]);
    store.check_integrity().unwrap();
}

#[test]
fn test_remove_tier_delete_entries() {
    let mut store = store_with(&["S", "A"]);
    store.add_entries(vec![
        EntryDescriptor::in_tier("1.png", "S"),
        EntryDescriptor::in_tier("2.png", "S"),
        EntryDescriptor::in_tier("3.png", "A"),
        EntryDescriptor::new("4.png"),
    ]);
    let before = store.entry_count();
    let members = store.filter_by_tier(&TierRef::named("S")).unwrap().len();

    let removal = store
        .remove_tier(&TierRef::named("S"), RemovalMode::DeleteEntries)
        .unwrap();

    assert_eq!(removal.deleted.len(), members);
    assert_eq!(removal.unranked, 0);
    assert_eq!(store.entry_count(), before - members);
    assert_eq!(store.unranked_entries().len(), 1);
    assert_eq!(tier_names(&store), vec!["A"]);
    store.check_integrity().unwrap();
}

#[test]
fn test_remove_unranked_is_rejected() {
    let mut store = store_with(&["S"]);
    store.add_entries(vec![EntryDescriptor::new("a.png")]);
    let result = store.remove_tier(&TierRef::Unranked, RemovalMode::DeleteEntries);
    assert!(matches!(result, Err(Error::InvalidTier(_))));
    assert_eq!(store.entry_count(), 1);
}

#[test]
fn test_remove_missing_tier() {
    let mut store = store_with(&["S"]);
    let result = store.remove_tier(&TierRef::named("Z"), RemovalMode::KeepEntries);
    assert!(matches!(result, Err(Error::TierNotFound(ref n)) if n == "Z"));
    assert_eq!(tier_names(&store), vec!["S"]);
}

#[test]
fn test_add_duplicate_tier_never_mutates() {
    let mut store = store_with(&["S", "A"]);
    let result = store.add_tier(Tier::new("S", "red"));
    assert!(matches!(result, Err(Error::DuplicateTier(_))));
    assert_eq!(tier_names(&store), vec!["S", "A"]);
    assert_eq!(store.get_tier("S").unwrap().color, "grey");
}

#[test]
fn test_change_entry_tier_auto_creates_tier() {
    let mut store = store_with(&["S"]);
    let id = store.add_entries(vec![EntryDescriptor::new("a.png")])[0]
        .id()
        .to_string();

    let moved = store.change_entry_tier(&id, TierRef::named("NewTier")).unwrap();

    assert!(store.has_tier("NewTier"));
    assert_eq!(moved.tier(), &TierRef::named("NewTier"));
    assert_eq!(store.get_entry(&id).unwrap().tier(), &TierRef::named("NewTier"));
    assert_eq!(store.get_tier("NewTier").unwrap().color, store.auto_tier_color());
    assert_eq!(tier_names(&store), vec!["S", "NewTier"]);
}

#[test]
fn test_change_entry_tier_preserves_order() {
    let mut store = store_with(&["S"]);
    store.add_entries((0..5).map(|i| EntryDescriptor::new(format!("{}.png", i))));
    let before = ids_of(store.list_entries());

    store.change_entry_tier(&before[2], TierRef::named("S")).unwrap();
    store.change_entry_tier(&before[4], TierRef::named("S")).unwrap();
    store.change_entry_tier(&before[2], TierRef::Unranked).unwrap();

    assert_eq!(ids_of(store.list_entries()), before);
}

#[test]
fn test_change_entry_tier_missing_entry_creates_nothing() {
    let mut store = store_with(&["S"]);
    let result = store.change_entry_tier("ent-0000000000", TierRef::named("Ghost"));
    assert!(matches!(result, Err(Error::EntryNotFound(_))));
    assert!(!store.has_tier("Ghost"));
}

#[test]
fn test_change_entry_tier_rejects_empty_name() {
    let mut store = store_with(&[]);
    let id = store.add_entries(vec![EntryDescriptor::new("a.png")])[0]
        .id()
        .to_string();
    let result = store.change_entry_tier(&id, TierRef::Named(String::new()));
    assert!(matches!(result, Err(Error::InvalidTier(_))));
    assert!(store.list_tiers().is_empty());
}

#[test]
fn test_filter_by_unknown_tier_fails() {
    let store = store_with(&["S"]);
    assert!(matches!(
        store.filter_by_tier(&TierRef::named("Z")),
        Err(Error::TierNotFound(_))
    ));
    assert!(store.filter_by_tier(&TierRef::Unranked).is_ok());
}

#[test]
fn test_remove_entry() {
    let mut store = store_with(&["S"]);
    let created = store.add_entries(vec![EntryDescriptor::in_tier("a.png", "S")]);
    let id = created[0].id();

    let removed = store.remove_entry(id).unwrap();
    assert_eq!(removed.src(), "a.png");
    assert!(store.get_entry(id).is_none());
    assert!(matches!(store.remove_entry(id), Err(Error::EntryNotFound(_))));
}

#[test]
fn test_rename_tier_cascades_to_entries() {
    let mut store = store_with(&["S", "A"]);
    store.add_entries(vec![
        EntryDescriptor::in_tier("1.png", "S"),
        EntryDescriptor::in_tier("2.png", "A"),
        EntryDescriptor::in_tier("3.png", "S"),
    ]);

    store.rename_tier("S", "Super").unwrap();

    assert_eq!(tier_names(&store), vec!["Super", "A"]);
    assert_eq!(store.filter_by_tier(&TierRef::named("Super")).unwrap().len(), 2);
    assert_eq!(store.filter_by_tier(&TierRef::named("A")).unwrap().len(), 1);
    assert!(store.filter_by_tier(&TierRef::named("S")).is_err());
    store.check_integrity().unwrap();
}

#[test]
fn test_rename_tier_to_existing_name_fails_without_mutation() {
    let mut store = store_with(&["S", "A"]);
    store.add_entries(vec![EntryDescriptor::in_tier("1.png", "S")]);

    assert!(matches!(
        store.rename_tier("S", "A"),
        Err(Error::DuplicateTier(_))
    ));
    assert_eq!(store.filter_by_tier(&TierRef::named("S")).unwrap().len(), 1);
    assert_eq!(tier_names(&store), vec!["S", "A"]);
}

#[test]
fn test_edit_tier_renames_and_recolors() {
    let mut store = store_with(&["S", "A"]);
    store.add_entries(vec![EntryDescriptor::in_tier("1.png", "A")]);

    store.edit_tier("A", Tier::new("Awesome", "#ff0000")).unwrap();

    assert_eq!(store.get_tier("Awesome").unwrap().color, "#ff0000");
    assert_eq!(tier_names(&store), vec!["S", "Awesome"]);
    assert_eq!(store.filter_by_tier(&TierRef::named("Awesome")).unwrap().len(), 1);
}

#[test]
fn test_edit_tier_with_empty_color_changes_nothing() {
    let mut store = store_with(&["S", "A"]);
    assert!(store.edit_tier("A", Tier::new("Awesome", "")).is_err());
    assert_eq!(tier_names(&store), vec!["S", "A"]);
}

#[test]
fn test_move_tier_entries() {
    let mut store = store_with(&["S", "A"]);
    store.add_entries(vec![
        EntryDescriptor::in_tier("1.png", "S"),
        EntryDescriptor::in_tier("2.png", "S"),
        EntryDescriptor::new("3.png"),
    ]);

    let moved = store
        .move_tier_entries(&TierRef::named("S"), &TierRef::named("A"))
        .unwrap();
    assert_eq!(moved, 2);
    assert!(store.filter_by_tier(&TierRef::named("S")).unwrap().is_empty());

    let moved = store
        .move_tier_entries(&TierRef::Unranked, &TierRef::named("Bench"))
        .unwrap();
    assert_eq!(moved, 1);
    assert!(store.has_tier("Bench"));
    store.check_integrity().unwrap();
}

#[test]
fn test_move_tier_entries_from_missing_tier() {
    let mut store = store_with(&["S"]);
    let result = store.move_tier_entries(&TierRef::named("Z"), &TierRef::named("New"));
    assert!(matches!(result, Err(Error::TierNotFound(_))));
    assert!(!store.has_tier("New"));
}

#[test]
fn test_board_view() {
    let mut store = store_with(&["S", "A"]);
    store.add_entries(vec![
        EntryDescriptor::in_tier("1.png", "A"),
        EntryDescriptor::new("2.png"),
        EntryDescriptor::in_tier("3.png", "S"),
    ]);

    let board = store.board();
    let names: Vec<&str> = board.tiers.iter().map(|g| g.tier.name.as_str()).collect();
    assert_eq!(names, vec!["S", "A"]);
    assert_eq!(board.tiers[0].entries[0].src(), "3.png");
    assert_eq!(board.tiers[1].entries[0].src(), "1.png");
    assert_eq!(board.unranked.len(), 1);
    assert_eq!(board.entry_count(), 3);
    assert_eq!(store.ranked_entries().len(), 2);
}

#[test]
fn test_reads_are_idempotent() {
    let mut store = store_with(&["S"]);
    store.add_entries(vec![
        EntryDescriptor::in_tier("1.png", "S"),
        EntryDescriptor::new("2.png"),
    ]);

    assert_eq!(store.list_entries().to_vec(), store.list_entries().to_vec());
    assert_eq!(
        store.filter_by_tier(&TierRef::named("S")).unwrap(),
        store.filter_by_tier(&TierRef::named("S")).unwrap()
    );
    assert_eq!(store.board(), store.board());
}

#[test]
fn test_from_config_seeds_default_tiers() {
    let store = TierStore::from_config(&Config::default()).unwrap();
    assert_eq!(tier_names(&store), vec!["S", "A", "B", "C", "D"]);
    assert_eq!(store.auto_tier_color(), "#fef3c7");
    assert_eq!(store.entry_count(), 0);
}

#[test]
fn test_from_config_rejects_empty_auto_tier_color() {
    let config = Config {
        auto_tier_color: String::new(),
        ..Config::default()
    };
    let result = TierStore::from_config(&config);
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_from_config_rejects_duplicate_default_tiers() {
    let config = Config {
        default_tiers: vec![Tier::new("S", "red"), Tier::new("S", "blue")],
        ..Config::default()
    };
    assert!(matches!(
        TierStore::from_config(&config),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn test_add_entries_auto_created_tier_keeps_integrity() {
    let mut store = TierStore::from_config(&Config::default()).unwrap();
    let created = store.add_entries(vec![EntryDescriptor::in_tier("x.png", "Zed")]);

    assert_eq!(created.len(), 1);
    assert!(store.has_tier("Zed"));
    assert_eq!(store.filter_by_tier(&TierRef::named("Zed")).unwrap(), created);
    assert!(store.check_integrity().is_ok());
}

#[test]
fn test_set_auto_tier_color_rejects_empty() {
    let mut store = store_with(&[]);
    assert!(store.set_auto_tier_color("").is_err());
    assert!(!store.auto_tier_color().is_empty());
}

#[test]
fn test_entry_serializes_tier_as_nullable_name() {
    let mut store = store_with(&["S"]);
    let created = store.add_entries(vec![
        EntryDescriptor::in_tier("a.png", "S"),
        EntryDescriptor::new("b.png"),
    ]);

    let ranked = serde_json::to_value(&created[0]).unwrap();
    assert_eq!(ranked["tier_name"], "S");
    let unranked = serde_json::to_value(&created[1]).unwrap();
    assert!(unranked["tier_name"].is_null());
}

#[test]
fn test_descriptor_deserializes_from_upload_payload() {
    let descriptors: Vec<EntryDescriptor> = serde_json::from_str(
        r#"[{"src": "a.png", "tier_name": "S"}, {"src": "b.png", "tier_name": null}, {"tier_name": "A"}]"#,
    )
    .unwrap();

    assert_eq!(descriptors[0].tier, TierRef::named("S"));
    assert_eq!(descriptors[1].tier, TierRef::Unranked);
    assert!(!descriptors[2].is_valid());
}
