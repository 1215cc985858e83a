// Rust guideline compliant 2026-10-13

//! Unit tests for the drag/drop state machine.

use tierlist_core::drag::DragEventKind;
use tierlist_core::{
    DragEvent, DragOutcome, DragPayload, DragPhase, DragSession, EntryDescriptor, Error,
    IdGenerator, Tier, TierRef, TierStore,
};

fn setup() -> (TierStore, DragPayload) {
    let mut store = TierStore::with_tiers(
        vec![Tier::new("S", "gold"), Tier::new("A", "orange")],
        IdGenerator::with_salt("drag-tests"),
    )
    .unwrap();
    let created = store.add_entries(vec![EntryDescriptor::new("cat.png")]);
    let payload = DragPayload::for_entry(&created[0]);
    (store, payload)
}

#[test]
fn test_full_drag_moves_entry() {
    let (mut store, payload) = setup();
    let mut session = DragSession::new();
    let id = payload.id.clone();

    assert_eq!(
        session.handle(DragEvent::Start(payload), &mut store).unwrap(),
        DragOutcome::Started
    );
    assert!(session.is_active());

    let outcome = session
        .handle(DragEvent::Enter(TierRef::named("S")), &mut store)
        .unwrap();
    assert_eq!(
        outcome,
        DragOutcome::Preview {
            src: "cat.png".to_string(),
            target: TierRef::named("S"),
        }
    );
    assert_eq!(session.ghost(), Some(("cat.png", &TierRef::named("S"))));

    let outcome = session
        .handle(DragEvent::Drop(TierRef::named("S")), &mut store)
        .unwrap();
    match outcome {
        DragOutcome::Moved(entry) => assert_eq!(entry.tier(), &TierRef::named("S")),
        other => panic!("Expected Moved, got {:?}", other),
    }
    assert_eq!(session.phase(), &DragPhase::Idle);
    assert_eq!(store.get_entry(&id).unwrap().tier(), &TierRef::named("S"));

    // The platform still sends End after a drop.
    assert_eq!(
        session.handle(DragEvent::End, &mut store).unwrap(),
        DragOutcome::Ignored
    );
    assert_eq!(store.get_entry(&id).unwrap().tier(), &TierRef::named("S"));
}

#[test]
fn test_leave_clears_preview() {
    let (mut store, payload) = setup();
    let mut session = DragSession::new();
    session.handle(DragEvent::Start(payload), &mut store).unwrap();
    session
        .handle(DragEvent::Enter(TierRef::named("A")), &mut store)
        .unwrap();

    assert_eq!(
        session.handle(DragEvent::Leave, &mut store).unwrap(),
        DragOutcome::PreviewCleared
    );
    assert!(session.ghost().is_none());
    assert!(matches!(session.phase(), DragPhase::Dragging { .. }));

    assert_eq!(
        session.handle(DragEvent::Leave, &mut store).unwrap(),
        DragOutcome::Ignored
    );
}

#[test]
fn test_enter_switches_target() {
    let (mut store, payload) = setup();
    let mut session = DragSession::new();
    session.handle(DragEvent::Start(payload), &mut store).unwrap();
    session
        .handle(DragEvent::Enter(TierRef::named("S")), &mut store)
        .unwrap();
    session
        .handle(DragEvent::Enter(TierRef::Unranked), &mut store)
        .unwrap();
    assert_eq!(session.ghost(), Some(("cat.png", &TierRef::Unranked)));
}

#[test]
fn test_cancel_never_touches_store() {
    let (mut store, payload) = setup();
    let before = store.list_entries().to_vec();
    let mut session = DragSession::new();

    session.handle(DragEvent::Start(payload), &mut store).unwrap();
    session
        .handle(DragEvent::Enter(TierRef::named("S")), &mut store)
        .unwrap();
    assert_eq!(
        session.handle(DragEvent::Cancel, &mut store).unwrap(),
        DragOutcome::Ended
    );

    assert_eq!(session.phase(), &DragPhase::Idle);
    assert_eq!(store.list_entries().to_vec(), before);
}

#[test]
fn test_drop_on_unknown_tier_creates_it() {
    let (mut store, payload) = setup();
    let mut session = DragSession::new();
    session.handle(DragEvent::Start(payload), &mut store).unwrap();

    session
        .handle(DragEvent::Drop(TierRef::named("Z")), &mut store)
        .unwrap();
    assert!(store.has_tier("Z"));
}

#[test]
fn test_drop_on_unranked() {
    let (mut store, payload) = setup();
    let id = payload.id.clone();
    store.change_entry_tier(&id, TierRef::named("A")).unwrap();

    let mut session = DragSession::new();
    session.handle(DragEvent::Start(payload), &mut store).unwrap();
    session
        .handle(DragEvent::Drop(TierRef::Unranked), &mut store)
        .unwrap();
    assert!(store.get_entry(&id).unwrap().tier().is_unranked());
}

#[test]
fn test_failed_drop_still_clears_payload() {
    let (mut store, payload) = setup();
    let id = payload.id.clone();
    store.remove_entry(&id).unwrap();

    let mut session = DragSession::new();
    session.handle(DragEvent::Start(payload), &mut store).unwrap();
    let result = session.handle(DragEvent::Drop(TierRef::named("S")), &mut store);

    assert!(matches!(result, Err(Error::EntryNotFound(_))));
    assert_eq!(session.phase(), &DragPhase::Idle);
}

#[test]
fn test_events_while_idle_are_rejected() {
    let (mut store, _) = setup();
    let mut session = DragSession::new();

    for event in [
        DragEvent::Enter(TierRef::named("S")),
        DragEvent::Leave,
        DragEvent::Drop(TierRef::named("S")),
    ] {
        assert!(matches!(
            session.handle(event, &mut store),
            Err(Error::InvalidTransition(_))
        ));
        assert_eq!(session.phase(), &DragPhase::Idle);
    }
    assert_eq!(
        session.handle(DragEvent::Cancel, &mut store).unwrap(),
        DragOutcome::Ignored
    );
}

#[test]
fn test_second_start_is_rejected() {
    let (mut store, payload) = setup();
    let mut session = DragSession::new();
    session
        .handle(DragEvent::Start(payload.clone()), &mut store)
        .unwrap();

    let result = session.handle(DragEvent::Start(payload.clone()), &mut store);
    assert!(matches!(result, Err(Error::InvalidTransition(_))));
    assert_eq!(session.phase().payload(), Some(&payload));
}

#[test]
fn test_valid_events_per_phase() {
    assert_eq!(
        DragPhase::Idle.valid_events(),
        vec![DragEventKind::Start, DragEventKind::End, DragEventKind::Cancel]
    );
    let dragging = DragPhase::Dragging {
        payload: DragPayload {
            id: "ent-0000000000".to_string(),
            src: "x".to_string(),
        },
    };
    assert!(dragging.valid_events().contains(&DragEventKind::Drop));
    assert!(!dragging.valid_events().contains(&DragEventKind::Start));
    assert!(dragging.accepts(DragEventKind::Start).is_err());
    assert!(DragPhase::Idle.accepts(DragEventKind::Drop).is_err());
}
