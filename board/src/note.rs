//! Annotation layer: freely positioned overlay notes.
//!
//! Overlay notes live outside the card model. They are created at pointer
//! coordinates relative to the board, repositioned by pointer-movement
//! deltas while the pointer is captured, and removed by a second
//! right-click. The store is pure state; pointer wiring lives in the UI
//! layer.

#[cfg(test)]
#[path = "note_test.rs"]
mod note_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an overlay note.
pub type NoteId = Uuid;

/// A single-line text note positioned freely over the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayNote {
    /// Stable identity.
    pub id: NoteId,
    /// Left offset in CSS pixels relative to the board content box.
    pub x: f64,
    /// Top offset in CSS pixels relative to the board content box.
    pub y: f64,
    /// Note text.
    pub text: String,
}

/// Collection of the overlay notes currently on the board.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Vec<OverlayNote>,
}

impl NoteStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a note at the given board-relative coordinates.
    pub fn add_at(&mut self, x: f64, y: f64) -> NoteId {
        let note = OverlayNote {
            id: Uuid::new_v4(),
            x,
            y,
            text: String::new(),
        };
        let id = note.id;
        self.notes.push(note);
        id
    }

    /// Remove a note, returning it if it was present.
    pub fn remove(&mut self, id: &NoteId) -> Option<OverlayNote> {
        let index = self.notes.iter().position(|n| n.id == *id)?;
        Some(self.notes.remove(index))
    }

    /// Return a reference to a note by id.
    #[must_use]
    pub fn get(&self, id: &NoteId) -> Option<&OverlayNote> {
        self.notes.iter().find(|n| n.id == *id)
    }

    /// Note ids in creation order.
    #[must_use]
    pub fn ids(&self) -> Vec<NoteId> {
        self.notes.iter().map(|n| n.id).collect()
    }

    /// All notes in creation order.
    #[must_use]
    pub fn notes(&self) -> &[OverlayNote] {
        &self.notes
    }

    /// Move a note by a pointer-movement delta.
    pub fn move_by(&mut self, id: &NoteId, dx: f64, dy: f64) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == *id) else {
            return false;
        };
        note.x += dx;
        note.y += dy;
        true
    }

    /// Set a note's text.
    pub fn set_text(&mut self, id: &NoteId, text: String) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == *id) else {
            return false;
        };
        note.text = text;
        true
    }

    /// Number of notes on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns `true` if there are no overlay notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
