use super::*;

use crate::card::{CardImage, ImageSlot};

fn filled_card() -> Card {
    let mut card = Card::new();
    card.slot = ImageSlot::Filled(CardImage {
        data_url: "data:image/png;base64,AAAA".to_owned(),
        name: "shot.png".to_owned(),
    });
    card.note = "caption".to_owned();
    card
}

// =============================================================
// Encoding
// =============================================================

#[test]
fn for_card_carries_src_id_and_note() {
    let card = filled_card();
    let payload = DragPayload::for_card(&card).unwrap();
    assert_eq!(payload.src, "data:image/png;base64,AAAA");
    assert_eq!(payload.source_id, Some(card.id));
    assert_eq!(payload.note, "caption");
}

#[test]
fn placeholder_card_has_no_payload() {
    assert!(DragPayload::for_card(&Card::new()).is_none());
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn slots_round_trip() {
    let card = filled_card();
    let sent = DragPayload::for_card(&card).unwrap();
    let received = DragPayload::decode(
        &sent.src,
        &card.id.to_string(),
        &sent.note,
    )
    .unwrap();
    assert_eq!(received, sent);
}

#[test]
fn empty_src_slot_is_rejected() {
    let err = DragPayload::decode("", "", "note").unwrap_err();
    assert!(matches!(err, PayloadError::MissingSource));
}

#[test]
fn malformed_id_slot_is_rejected() {
    let err = DragPayload::decode("data:x", "not-a-uuid", "").unwrap_err();
    assert!(matches!(err, PayloadError::BadId(_)));
}

#[test]
fn absent_id_slot_decodes_as_external_drag() {
    let payload = DragPayload::decode("data:x", "", "").unwrap();
    assert_eq!(payload.source_id, None);
}
