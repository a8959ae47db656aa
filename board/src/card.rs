//! Card model: the image slot, its contents, and the per-card note.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a card, assigned at creation time.
pub type CardId = Uuid;

/// An image held by a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImage {
    /// Base64 `data:` URL of the decoded bytes.
    pub data_url: String,
    /// Source file name, used as the image's alt text.
    pub name: String,
}

/// The image slot of a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSlot {
    /// No image; the drop placeholder is visible.
    #[default]
    Empty,
    /// An asynchronous decode has been reserved for this slot.
    Pending,
    /// The slot holds a decoded image.
    Filled(CardImage),
}

impl ImageSlot {
    /// Whether the slot is free for paste-target selection.
    ///
    /// A pending reservation counts as occupied so that rapid successive
    /// pastes pick distinct targets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The held image, if the slot is filled.
    #[must_use]
    pub fn image(&self) -> Option<&CardImage> {
        match self {
            Self::Filled(image) => Some(image),
            Self::Empty | Self::Pending => None,
        }
    }
}

/// A single collage card: one image slot and one note field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity, carried in drag payloads.
    pub id: CardId,
    /// Current image slot state.
    pub slot: ImageSlot,
    /// Free-text note shown beneath the image.
    pub note: String,
    /// Reservation counter. Bumped whenever the slot changes hands; an
    /// asynchronous delivery carrying a stale epoch is dropped.
    pub epoch: u64,
}

impl Card {
    /// Create an empty card with a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            slot: ImageSlot::Empty,
            note: String::new(),
            epoch: 0,
        }
    }

    /// Whether the card shows the drop placeholder (no image, no pending decode).
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.slot.is_empty()
    }

    /// The held image, if any.
    #[must_use]
    pub fn image(&self) -> Option<&CardImage> {
        self.slot.image()
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}
