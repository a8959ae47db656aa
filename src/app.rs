//! Root application component: shared contexts, the global paste handler,
//! and the page layout.

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use web_sys::ClipboardEvent;

use crate::components::board_view::BoardView;
use crate::components::toolbar::Toolbar;
use crate::ingest;
use crate::state::board::BoardState;
use crate::state::ui::UiState;

/// Handle to the board surface element, shared so the toolbar's export
/// action and the annotation layer can reach the same DOM node.
#[derive(Clone, Copy)]
pub struct BoardRef(pub NodeRef<Div>);

/// Root application component.
///
/// Provides the shared state contexts and routes clipboard pastes through
/// the paste-target planner: targets are reserved synchronously in event
/// order, so rapid pastes land deterministically even when their decodes
/// finish out of order.
#[component]
pub fn App() -> impl IntoView {
    let board = RwSignal::new(BoardState::new());
    let ui = RwSignal::new(UiState::default());
    let board_ref = BoardRef(NodeRef::new());

    provide_context(board);
    provide_context(ui);
    provide_context(board_ref);

    let paste = window_event_listener(ev::paste, move |event: ClipboardEvent| {
        let Some(data) = event.clipboard_data() else {
            return;
        };
        let files = ingest::pasted_image_files(&data);
        if files.is_empty() {
            log::debug!("paste held no image items");
            return;
        }
        let policy = ui.with_untracked(|u| u.paste_policy);
        for file in files {
            let Some(reservation) =
                board.try_update(|b| b.store.reserve_paste_target(policy))
            else {
                continue;
            };
            ingest::deliver_file(board, reservation, file);
        }
    });
    on_cleanup(move || paste.remove());

    view! {
        <main class="app">
            <Toolbar/>
            <BoardView/>
        </main>
    }
}
