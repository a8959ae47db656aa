//! A single collage card: drop zone, image, hidden file input, and note.
//!
//! Every handler here is attached once, at card construction; the keyed
//! list in `BoardView` guarantees a card's DOM subtree survives unrelated
//! board updates.

use leptos::prelude::*;
use web_sys::{DragEvent, Event, MouseEvent};

use board::card::CardId;
use board::payload::{self, DragPayload};

use crate::ingest;
use crate::state::board::BoardState;

/// One card on the board, identified by its stable id.
///
/// Interactions follow the board conventions: click the zone to open the
/// file picker, shift-click an empty zone to remove the card, shift- or
/// meta-click the image to clear it, and drag the image onto another card
/// to move image and note together.
#[component]
pub fn CardView(id: CardId) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let file_input = NodeRef::<leptos::html::Input>::new();

    let image = move || board.with(|b| b.store.get(&id).and_then(|c| c.image().cloned()));
    let has_image = move || board.with(|b| b.store.get(&id).is_some_and(|c| c.image().is_some()));
    let note = move || {
        board.with(|b| {
            b.store
                .get(&id)
                .map(|c| c.note.clone())
                .unwrap_or_default()
        })
    };

    let on_zone_click = move |ev: MouseEvent| {
        if ev.shift_key() {
            if !has_image() {
                board.update(|b| {
                    b.store.remove(&id);
                });
            }
            return;
        }
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_image_click = move |ev: MouseEvent| {
        if ev.shift_key() || ev.meta_key() {
            ev.stop_propagation();
            board.update(|b| {
                b.store.clear_image(&id);
            });
        }
    };

    let on_pick = move |_: Event| {
        let Some(input) = file_input.get() else {
            return;
        };
        let Some(list) = input.files() else {
            return;
        };
        let files = ingest::accepted_image_files(&list);
        // Reset so picking the same file again still fires a change event.
        input.set_value("");
        let Some(file) = files.into_iter().next() else {
            return;
        };
        let Some(reservation) = board.try_update(|b| b.store.reserve(&id)).flatten() else {
            return;
        };
        ingest::deliver_file(board, reservation, file);
    };

    let on_drag_start = move |ev: DragEvent| {
        let Some(dragged) = board.with(|b| b.store.get(&id).and_then(DragPayload::for_card))
        else {
            return;
        };
        let Some(dt) = ev.data_transfer() else {
            return;
        };
        dt.set_effect_allowed("move");
        let written = dt
            .set_data(payload::SRC_SLOT, &dragged.src)
            .and_then(|()| dt.set_data(payload::ID_SLOT, &id.to_string()))
            .and_then(|()| dt.set_data(payload::NOTE_SLOT, &dragged.note));
        if let Err(err) = written {
            log::warn!("drag payload write failed: {err:?}");
        }
    };

    let on_drag_over = move |ev: DragEvent| ev.prevent_default();

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        // Keep the background handler from ingesting the same drop.
        ev.stop_propagation();
        let Some(dt) = ev.data_transfer() else {
            return;
        };

        // An OS-level file drag takes the direct ingestion path.
        let files = dt
            .files()
            .map(|list| ingest::accepted_image_files(&list))
            .unwrap_or_default();
        if let Some(file) = files.into_iter().next() {
            let Some(reservation) = board.try_update(|b| b.store.reserve(&id)).flatten() else {
                return;
            };
            ingest::deliver_file(board, reservation, file);
            return;
        }

        let src = dt.get_data(payload::SRC_SLOT).unwrap_or_default();
        let source_id = dt.get_data(payload::ID_SLOT).unwrap_or_default();
        let note_text = dt.get_data(payload::NOTE_SLOT).unwrap_or_default();
        match DragPayload::decode(&src, &source_id, &note_text) {
            Ok(dropped) => board.update(|b| {
                let outcome = b.store.apply_drop(&dropped, &id);
                log::debug!("drop applied: {outcome:?}");
            }),
            Err(err) => log::debug!("ignoring drop: {err}"),
        }
    };

    let on_note_input = move |ev: Event| {
        let value = event_target_value(&ev);
        board.update(|b| {
            b.store.set_note(&id, value);
        });
    };

    view! {
        <div class="card">
            <div
                class="card__zone"
                class=("card__zone--armed", move || !has_image())
                on:click=on_zone_click
                on:dragover=on_drag_over
                on:drop=on_drop
            >
                <Show when=move || !has_image()>
                    <span class="card__placeholder">"Drop image here"</span>
                </Show>
                <Show when=has_image>
                    <img
                        class="card__image"
                        src=move || image().map(|i| i.data_url).unwrap_or_default()
                        alt=move || image().map(|i| i.name).unwrap_or_default()
                        draggable="true"
                        on:dragstart=on_drag_start
                        on:click=on_image_click
                    />
                </Show>
            </div>
            <input
                type="file"
                accept="image/*"
                class="card__file"
                node_ref=file_input
                on:change=on_pick
            />
            <input
                type="text"
                class="card__note"
                placeholder="Add a note"
                prop:value=note
                on:input=on_note_input
            />
        </div>
    }
}
