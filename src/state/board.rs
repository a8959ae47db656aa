#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use board::note::NoteStore;
use board::store::CardStore;

/// Board-level state: the cards and the overlay annotation layer.
///
/// Provided as an `RwSignal` context at the application root; every
/// component mutates the board through this one state object.
#[derive(Debug, Clone)]
pub struct BoardState {
    pub store: CardStore,
    pub notes: NoteStore,
}

impl BoardState {
    /// The board as first presented: the fixed left/right cards, no notes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: CardStore::seeded(),
            notes: NoteStore::new(),
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
