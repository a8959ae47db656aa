//! In-memory store of cards: creation, removal, slot reservations, and the
//! drop-payload application logic.
//!
//! The store owns the left-to-right ordering of cards. Asynchronous image
//! decodes never mutate a slot directly: an event handler first *reserves*
//! the slot (synchronously, in event order), and the decode later *delivers*
//! into the reservation. A delivery whose epoch no longer matches the card's
//! is dropped, so a newer paste or a clear deterministically supersedes an
//! in-flight read.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId, CardImage, ImageSlot};
use crate::consts::SEED_CARDS;
use crate::payload::DragPayload;

/// How the next paste target is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PastePolicy {
    /// Alternate between the first two cards on successive pastes.
    #[default]
    Alternate,
    /// Fill the first empty slot; append a new card when none is empty.
    FirstEmpty,
}

/// A claimed slot awaiting an asynchronous image delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reservation {
    /// The card whose slot was claimed.
    pub card_id: CardId,
    /// The card's epoch at claim time; a delivery with a stale epoch is dropped.
    pub epoch: u64,
}

/// Result of applying a drag payload to a destination card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The payload came from the destination card itself; nothing changed.
    SelfDrop,
    /// Image and note moved from the named source card to the destination.
    Moved {
        /// The card that was emptied.
        from: CardId,
    },
    /// The payload carried no source id; the destination was filled and
    /// nothing was cleared.
    Ingested,
    /// The destination card no longer exists.
    Rejected,
}

/// Ordered collection of the cards currently on the board.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
    /// Explicit alternation pointer for [`PastePolicy::Alternate`].
    paste_flip: bool,
}

impl CardStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the fixed startup cards.
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for _ in 0..SEED_CARDS {
            store.add_card();
        }
        store
    }

    // --- Registry ---

    /// Append an empty card and return its id.
    pub fn add_card(&mut self) -> CardId {
        let card = Card::new();
        let id = card.id;
        self.cards.push(card);
        id
    }

    /// Remove a card, returning it if it was present. The remaining cards
    /// keep their order.
    pub fn remove(&mut self, id: &CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == *id)?;
        Some(self.cards.remove(index))
    }

    /// Return a reference to a card by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == *id)
    }

    /// Card ids in board order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the board holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    // --- Slot reservations ---

    /// Claim a specific card's slot for an asynchronous decode.
    ///
    /// Returns `None` if the card doesn't exist.
    pub fn reserve(&mut self, id: &CardId) -> Option<Reservation> {
        let card = self.card_mut(id)?;
        card.epoch += 1;
        card.slot = ImageSlot::Pending;
        Some(Reservation {
            card_id: card.id,
            epoch: card.epoch,
        })
    }

    /// Select and claim the next paste target under the given policy,
    /// creating cards as needed.
    pub fn reserve_paste_target(&mut self, policy: PastePolicy) -> Reservation {
        let id = match policy {
            PastePolicy::Alternate => {
                while self.cards.len() < 2 {
                    self.add_card();
                }
                let index = usize::from(self.paste_flip);
                self.paste_flip = !self.paste_flip;
                self.cards[index].id
            }
            PastePolicy::FirstEmpty => {
                let empty = self.cards.iter().find(|c| c.slot.is_empty()).map(|c| c.id);
                match empty {
                    Some(id) => id,
                    None => self.add_card(),
                }
            }
        };
        // The target was just looked up or created, so this claim cannot miss.
        let index = self.index_of(&id);
        let card = &mut self.cards[index];
        card.epoch += 1;
        card.slot = ImageSlot::Pending;
        Reservation {
            card_id: card.id,
            epoch: card.epoch,
        }
    }

    /// Deliver a decoded image into a reservation.
    ///
    /// Returns `false` when the reservation is stale (the card was cleared,
    /// re-reserved, or removed in the meantime) and the delivery was dropped.
    pub fn deliver(&mut self, reservation: &Reservation, image: CardImage) -> bool {
        let Some(card) = self.card_mut(&reservation.card_id) else {
            return false;
        };
        if card.epoch != reservation.epoch {
            return false;
        }
        card.slot = ImageSlot::Filled(image);
        true
    }

    /// Abandon a reservation after a failed decode, reverting the slot to
    /// placeholder state unless something newer claimed it.
    pub fn abandon(&mut self, reservation: &Reservation) -> bool {
        let Some(card) = self.card_mut(&reservation.card_id) else {
            return false;
        };
        if card.epoch != reservation.epoch {
            return false;
        }
        card.slot = ImageSlot::Empty;
        true
    }

    // --- Direct mutation ---

    /// Clear a card's image, reverting to placeholder state. The note is
    /// kept. Any in-flight delivery for the slot becomes stale.
    pub fn clear_image(&mut self, id: &CardId) -> bool {
        let Some(card) = self.card_mut(id) else {
            return false;
        };
        card.epoch += 1;
        card.slot = ImageSlot::Empty;
        true
    }

    /// Set a card's note text.
    pub fn set_note(&mut self, id: &CardId, note: String) -> bool {
        let Some(card) = self.card_mut(id) else {
            return false;
        };
        card.note = note;
        true
    }

    // --- Drag reordering ---

    /// Apply a same-page drag payload to a destination card.
    ///
    /// When the payload names a source card, its image and note move to the
    /// destination and the source reverts to placeholder state. A payload
    /// without a source id fills the destination and clears nothing.
    pub fn apply_drop(&mut self, payload: &DragPayload, dest: &CardId) -> DropOutcome {
        if payload.source_id.as_ref() == Some(dest) {
            return DropOutcome::SelfDrop;
        }
        if self.get(dest).is_none() {
            return DropOutcome::Rejected;
        }

        // Take the image out of the source first so its alt name survives
        // the move; fall back to the payload's source string for drags that
        // didn't originate from a live card.
        let moved = payload.source_id.and_then(|source_id| {
            let source = self.card_mut(&source_id)?;
            let image = source.slot.image().cloned()?;
            source.epoch += 1;
            source.slot = ImageSlot::Empty;
            source.note.clear();
            Some((source_id, image))
        });

        let Some(card) = self.card_mut(dest) else {
            return DropOutcome::Rejected;
        };
        card.epoch += 1;
        match moved {
            Some((from, image)) => {
                card.slot = ImageSlot::Filled(image);
                card.note = payload.note.clone();
                DropOutcome::Moved { from }
            }
            None => {
                card.slot = ImageSlot::Filled(CardImage {
                    data_url: payload.src.clone(),
                    name: String::new(),
                });
                DropOutcome::Ingested
            }
        }
    }

    // --- Internals ---

    fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == *id)
    }

    fn index_of(&self, id: &CardId) -> usize {
        self.cards
            .iter()
            .position(|c| c.id == *id)
            .unwrap_or_default()
    }
}
