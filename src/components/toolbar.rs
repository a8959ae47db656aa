//! Top toolbar: card creation, export options, and the export trigger.

use leptos::prelude::*;
use web_sys::{Event, MouseEvent};

use board::store::PastePolicy;

use crate::app::BoardRef;
use crate::export;
use crate::state::board::BoardState;
use crate::state::ui::UiState;

/// Toolbar for the collage board.
///
/// Export is fire-and-forget: the button starts a new export generation and
/// any still-running older export is superseded.
#[component]
pub fn Toolbar() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let board_ref = expect_context::<BoardRef>();

    let on_add_card = move |_: MouseEvent| {
        board.update(|b| {
            b.store.add_card();
        });
    };

    let on_full_size = move |ev: Event| {
        let checked = event_target_checked(&ev);
        ui.update(|u| u.full_size = checked);
    };

    let policy_value = move || match ui.get().paste_policy {
        PastePolicy::Alternate => "alternate",
        PastePolicy::FirstEmpty => "first-empty",
    };
    let on_policy = move |ev: Event| {
        let value = event_target_value(&ev);
        ui.update(|u| {
            u.paste_policy = if value == "first-empty" {
                PastePolicy::FirstEmpty
            } else {
                PastePolicy::Alternate
            };
        });
    };

    let on_export = move |_: MouseEvent| {
        let Some(el) = board_ref.0.get() else {
            return;
        };
        let Some(generation) = ui.try_update(UiState::begin_export) else {
            return;
        };
        let full_size = ui.with_untracked(|u| u.full_size);
        export::launch(el, full_size, generation, ui);
    };

    view! {
        <div class="toolbar">
            <span class="toolbar__title">"moodboard"</span>
            <button class="btn" on:click=on_add_card>
                "Add card"
            </button>
            <span class="toolbar__spacer"></span>
            <label class="toolbar__option">
                <input
                    type="checkbox"
                    prop:checked=move || ui.get().full_size
                    on:change=on_full_size
                />
                "Full size"
            </label>
            <label class="toolbar__option">
                "Paste target"
                <select prop:value=policy_value on:change=on_policy>
                    <option value="alternate">"Alternate"</option>
                    <option value="first-empty">"First empty"</option>
                </select>
            </label>
            <button class="btn toolbar__export" on:click=on_export>
                "Copy as PNG"
            </button>
        </div>
    }
}
