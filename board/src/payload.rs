//! Drag payload codec: the three DataTransfer slots carried by an image
//! drag, and their typed decoded form.
//!
//! The payload is a same-page contract only. The standard plain-text slot
//! carries the image source so drops degrade gracefully outside the app;
//! the custom slots carry the source card's id and note text.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use thiserror::Error;
use uuid::Uuid;

use crate::card::{Card, CardId};

/// DataTransfer slot carrying the image source (the standard text slot).
pub const SRC_SLOT: &str = "text/plain";

/// Custom DataTransfer slot carrying the source card id.
pub const ID_SLOT: &str = "application/x-moodboard-id";

/// Custom DataTransfer slot carrying the source card's note text.
pub const NOTE_SLOT: &str = "application/x-moodboard-note";

/// Failure to decode a dropped payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The plain-text slot was empty; there is no image to apply.
    #[error("drag payload carries no image source")]
    MissingSource,
    /// The id slot was present but not a valid card id.
    #[error("malformed card id in drag payload: {0}")]
    BadId(#[from] uuid::Error),
}

/// Typed view of a same-page image drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    /// The dragged image's `data:` URL.
    pub src: String,
    /// The source card, when the drag originated from this page.
    pub source_id: Option<CardId>,
    /// The source card's note text at drag-start time.
    pub note: String,
}

impl DragPayload {
    /// Build the payload written at drag start for a filled card.
    ///
    /// Returns `None` when the card holds no image (nothing to drag).
    #[must_use]
    pub fn for_card(card: &Card) -> Option<Self> {
        let image = card.image()?;
        Some(Self {
            src: image.data_url.clone(),
            source_id: Some(card.id),
            note: card.note.clone(),
        })
    }

    /// Decode the three DataTransfer slots read at drop time.
    ///
    /// An empty id slot yields `source_id: None` (the drag did not come
    /// from this page); a non-empty malformed id is an error.
    ///
    /// # Errors
    ///
    /// [`PayloadError::MissingSource`] when the text slot is empty,
    /// [`PayloadError::BadId`] when the id slot fails to parse.
    pub fn decode(src: &str, id: &str, note: &str) -> Result<Self, PayloadError> {
        if src.is_empty() {
            return Err(PayloadError::MissingSource);
        }
        let source_id = if id.is_empty() {
            None
        } else {
            Some(Uuid::parse_str(id)?)
        };
        Ok(Self {
            src: src.to_owned(),
            source_id,
            note: note.to_owned(),
        })
    }
}
