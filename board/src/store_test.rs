use super::*;

fn image(url: &str) -> CardImage {
    CardImage {
        data_url: url.to_owned(),
        name: "shot.png".to_owned(),
    }
}

fn filled_store(urls: &[&str]) -> (CardStore, Vec<CardId>) {
    let mut store = CardStore::new();
    let mut ids = Vec::new();
    for url in urls {
        let id = store.add_card();
        let reservation = store.reserve(&id).unwrap();
        assert!(store.deliver(&reservation, image(url)));
        ids.push(id);
    }
    (store, ids)
}

// =============================================================
// Registry
// =============================================================

#[test]
fn seeded_store_has_fixed_startup_cards() {
    let store = CardStore::seeded();
    assert_eq!(store.len(), 2);
    assert!(store.cards().iter().all(Card::is_placeholder));
}

#[test]
fn remove_preserves_order_and_content_of_rest() {
    let (mut store, ids) = filled_store(&["data:a", "data:b", "data:c"]);
    assert!(store.remove(&ids[1]).is_some());
    assert_eq!(store.ids(), vec![ids[0], ids[2]]);
    assert_eq!(
        store.get(&ids[2]).unwrap().image().unwrap().data_url,
        "data:c"
    );
}

#[test]
fn remove_unknown_card_is_noop() {
    let (mut store, _) = filled_store(&["data:a"]);
    assert!(store.remove(&CardId::new_v4()).is_none());
    assert_eq!(store.len(), 1);
}

// =============================================================
// Paste-target selection
// =============================================================

#[test]
fn alternate_policy_is_strict_across_many_pastes() {
    let mut store = CardStore::seeded();
    let ids = store.ids();
    for round in 0..6 {
        let reservation = store.reserve_paste_target(PastePolicy::Alternate);
        assert_eq!(reservation.card_id, ids[round % 2], "round {round}");
    }
}

#[test]
fn alternate_policy_seeds_missing_cards() {
    let mut store = CardStore::new();
    let first = store.reserve_paste_target(PastePolicy::Alternate);
    let second = store.reserve_paste_target(PastePolicy::Alternate);
    assert_eq!(store.len(), 2);
    assert_ne!(first.card_id, second.card_id);
}

#[test]
fn first_empty_policy_fills_leftmost_empty_slot() {
    let (mut store, ids) = filled_store(&["data:a"]);
    let empty = store.add_card();
    let reservation = store.reserve_paste_target(PastePolicy::FirstEmpty);
    assert_eq!(reservation.card_id, empty);
    assert_ne!(reservation.card_id, ids[0]);
}

#[test]
fn first_empty_policy_appends_when_board_is_full() {
    let (mut store, ids) = filled_store(&["data:a", "data:b"]);
    let reservation = store.reserve_paste_target(PastePolicy::FirstEmpty);
    assert_eq!(store.len(), 3);
    assert!(!ids.contains(&reservation.card_id));
}

#[test]
fn pending_reservation_is_not_retargeted() {
    let mut store = CardStore::new();
    store.add_card();
    let first = store.reserve_paste_target(PastePolicy::FirstEmpty);
    let second = store.reserve_paste_target(PastePolicy::FirstEmpty);
    assert_ne!(first.card_id, second.card_id);
    assert_eq!(store.len(), 2);
}

// =============================================================
// Reservations and delivery
// =============================================================

#[test]
fn delivery_fills_reserved_slot() {
    let mut store = CardStore::seeded();
    let id = store.ids()[0];
    let reservation = store.reserve(&id).unwrap();
    assert!(store.deliver(&reservation, image("data:left")));
    let card = store.get(&id).unwrap();
    assert_eq!(card.image().unwrap().data_url, "data:left");
    assert_eq!(card.image().unwrap().name, "shot.png");
}

#[test]
fn stale_delivery_after_rereservation_is_dropped() {
    let mut store = CardStore::seeded();
    let id = store.ids()[0];
    let first = store.reserve(&id).unwrap();
    let second = store.reserve(&id).unwrap();
    // The older read finishes last; the newer reservation wins.
    assert!(store.deliver(&second, image("data:new")));
    assert!(!store.deliver(&first, image("data:old")));
    assert_eq!(store.get(&id).unwrap().image().unwrap().data_url, "data:new");
}

#[test]
fn clear_invalidates_inflight_delivery() {
    let mut store = CardStore::seeded();
    let id = store.ids()[0];
    let reservation = store.reserve(&id).unwrap();
    assert!(store.clear_image(&id));
    assert!(!store.deliver(&reservation, image("data:late")));
    assert!(store.get(&id).unwrap().is_placeholder());
}

#[test]
fn delivery_to_removed_card_is_dropped() {
    let mut store = CardStore::seeded();
    let id = store.ids()[0];
    let reservation = store.reserve(&id).unwrap();
    store.remove(&id);
    assert!(!store.deliver(&reservation, image("data:x")));
}

#[test]
fn abandon_reverts_pending_slot_to_placeholder() {
    let mut store = CardStore::seeded();
    let id = store.ids()[0];
    let reservation = store.reserve(&id).unwrap();
    assert!(store.abandon(&reservation));
    assert!(store.get(&id).unwrap().is_placeholder());
}

#[test]
fn abandon_does_not_undo_newer_reservation() {
    let mut store = CardStore::seeded();
    let id = store.ids()[0];
    let first = store.reserve(&id).unwrap();
    let second = store.reserve(&id).unwrap();
    assert!(!store.abandon(&first));
    assert!(store.deliver(&second, image("data:kept")));
}

// =============================================================
// Clearing and notes
// =============================================================

#[test]
fn clear_image_keeps_note() {
    let (mut store, ids) = filled_store(&["data:a"]);
    assert!(store.set_note(&ids[0], "keep me".to_owned()));
    assert!(store.clear_image(&ids[0]));
    let card = store.get(&ids[0]).unwrap();
    assert!(card.is_placeholder());
    assert_eq!(card.note, "keep me");
}

// =============================================================
// Drag reordering
// =============================================================

fn payload_from(store: &CardStore, id: &CardId) -> DragPayload {
    let card = store.get(id).unwrap();
    DragPayload {
        src: card.image().unwrap().data_url.clone(),
        source_id: Some(*id),
        note: card.note.clone(),
    }
}

#[test]
fn drop_onto_own_card_is_noop() {
    let (mut store, ids) = filled_store(&["data:a"]);
    store.set_note(&ids[0], "note a".to_owned());
    let payload = payload_from(&store, &ids[0]);
    assert_eq!(store.apply_drop(&payload, &ids[0]), DropOutcome::SelfDrop);
    let card = store.get(&ids[0]).unwrap();
    assert_eq!(card.image().unwrap().data_url, "data:a");
    assert_eq!(card.note, "note a");
}

#[test]
fn drop_moves_image_and_note_and_empties_source() {
    let (mut store, ids) = filled_store(&["data:a"]);
    store.set_note(&ids[0], "from card one".to_owned());
    let dest = store.add_card();

    let payload = payload_from(&store, &ids[0]);
    assert_eq!(
        store.apply_drop(&payload, &dest),
        DropOutcome::Moved { from: ids[0] }
    );

    let destination = store.get(&dest).unwrap();
    assert_eq!(destination.image().unwrap().data_url, "data:a");
    assert_eq!(destination.image().unwrap().name, "shot.png");
    assert_eq!(destination.note, "from card one");

    let source = store.get(&ids[0]).unwrap();
    assert!(source.is_placeholder());
    assert!(source.note.is_empty());
}

#[test]
fn drop_overwrites_destination_image() {
    let (mut store, ids) = filled_store(&["data:a", "data:b"]);
    let payload = payload_from(&store, &ids[0]);
    assert_eq!(
        store.apply_drop(&payload, &ids[1]),
        DropOutcome::Moved { from: ids[0] }
    );
    assert_eq!(store.get(&ids[1]).unwrap().image().unwrap().data_url, "data:a");
}

#[test]
fn payload_without_source_id_ingests_without_clearing() {
    let (mut store, ids) = filled_store(&["data:a"]);
    let dest = store.add_card();
    let payload = DragPayload {
        src: "data:external".to_owned(),
        source_id: None,
        note: String::new(),
    };
    assert_eq!(store.apply_drop(&payload, &dest), DropOutcome::Ingested);
    assert_eq!(store.get(&dest).unwrap().image().unwrap().data_url, "data:external");
    assert_eq!(store.get(&ids[0]).unwrap().image().unwrap().data_url, "data:a");
}

#[test]
fn drop_onto_removed_card_is_rejected() {
    let (mut store, ids) = filled_store(&["data:a", "data:b"]);
    let gone = ids[1];
    store.remove(&gone);
    let payload = payload_from(&store, &ids[0]);
    assert_eq!(store.apply_drop(&payload, &gone), DropOutcome::Rejected);
    // The source is untouched when the destination is missing.
    assert_eq!(store.get(&ids[0]).unwrap().image().unwrap().data_url, "data:a");
}
