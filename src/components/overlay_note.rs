//! Freely positioned overlay note, repositioned via pointer capture.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, PointerEvent};

use board::note::NoteId;

use crate::state::board::BoardState;

/// One overlay note.
///
/// Pointer-down captures the pointer; while captured, each pointer-move
/// shifts the note by the movement delta. A right-click on the note removes
/// it (and never reaches the background's create handler).
#[component]
pub fn OverlayNoteView(id: NoteId) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let dragging = RwSignal::new(false);

    let position = move || {
        board.with(|b| {
            b.notes
                .get(&id)
                .map(|n| (n.x, n.y))
                .unwrap_or_default()
        })
    };
    let text = move || {
        board.with(|b| {
            b.notes
                .get(&id)
                .map(|n| n.text.clone())
                .unwrap_or_default()
        })
    };

    let on_pointer_down = move |ev: PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        if target.set_pointer_capture(ev.pointer_id()).is_ok() {
            dragging.set(true);
        }
    };

    let on_pointer_move = move |ev: PointerEvent| {
        if !dragging.get_untracked() {
            return;
        }
        board.update(|b| {
            b.notes
                .move_by(&id, f64::from(ev.movement_x()), f64::from(ev.movement_y()));
        });
    };

    let on_pointer_up = move |ev: PointerEvent| {
        dragging.set(false);
        if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            if let Err(err) = target.release_pointer_capture(ev.pointer_id()) {
                log::debug!("pointer release failed: {err:?}");
            }
        }
    };

    let on_context_menu = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        board.update(|b| {
            b.notes.remove(&id);
        });
    };

    let on_input = move |ev: Event| {
        let value = event_target_value(&ev);
        board.update(|b| {
            b.notes.set_text(&id, value);
        });
    };

    view! {
        <input
            type="text"
            class="collage__note"
            style:left=move || format!("{}px", position().0)
            style:top=move || format!("{}px", position().1)
            prop:value=text
            placeholder="Note"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:contextmenu=on_context_menu
            on:input=on_input
        />
    }
}
