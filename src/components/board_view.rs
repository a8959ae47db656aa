//! The board surface: the card grid, the background drop target, and the
//! overlay annotation layer.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, MouseEvent};

use crate::app::BoardRef;
use crate::components::card::CardView;
use crate::components::overlay_note::OverlayNoteView;
use crate::ingest;
use crate::state::board::BoardState;

/// The scrollable collage surface.
///
/// Files dropped on the background each land in a fresh card; a right-click
/// on the background creates an overlay note at the pointer. Cards stop
/// propagation of their own drops, so the background handler only sees
/// drops that missed every card.
#[component]
pub fn BoardView() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let board_ref = expect_context::<BoardRef>();
    let surface_ref = board_ref.0;

    let card_ids = move || board.with(|b| b.store.ids());
    let note_ids = move || board.with(|b| b.notes.ids());

    let on_drag_over = move |ev: DragEvent| ev.prevent_default();

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let Some(dt) = ev.data_transfer() else {
            return;
        };
        let Some(list) = dt.files() else {
            return;
        };
        for file in ingest::accepted_image_files(&list) {
            let Some(reservation) = board
                .try_update(|b| {
                    let id = b.store.add_card();
                    b.store.reserve(&id)
                })
                .flatten()
            else {
                continue;
            };
            ingest::deliver_file(board, reservation, file);
        }
    };

    let on_context_menu = move |ev: MouseEvent| {
        // Only the bare background; cards and notes own their context menus.
        let hits_control = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(".card, .collage__note").ok().flatten())
            .is_some();
        if hits_control {
            return;
        }
        ev.prevent_default();
        let Some(el) = surface_ref.get() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let x = f64::from(ev.client_x()) - rect.x() + f64::from(el.scroll_left());
        let y = f64::from(ev.client_y()) - rect.y() + f64::from(el.scroll_top());
        board.update(|b| {
            b.notes.add_at(x, y);
        });
    };

    view! {
        <div
            class="collage"
            node_ref=surface_ref
            on:dragover=on_drag_over
            on:drop=on_drop
            on:contextmenu=on_context_menu
        >
            <div class="collage__cards">
                <For each=card_ids key=|id| *id let:id>
                    <CardView id/>
                </For>
            </div>
            <For each=note_ids key=|id| *id let:id>
                <OverlayNoteView id/>
            </For>
        </div>
    }
}
