//! Browser-side ingestion: filtering incoming files and decoding accepted
//! ones into reserved card slots.
//!
//! Event handlers reserve a slot synchronously (so rapid pastes pick
//! distinct targets in event order) and hand the file to [`deliver_file`],
//! which decodes it to a data URL on a local task. The store drops
//! deliveries whose reservation went stale in the meantime.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DataTransfer, File, FileList, FileReader};

use board::card::CardImage;
use board::ingest::is_image_mime;
use board::store::Reservation;

use crate::state::board::BoardState;

/// Collect the `image/*` files from a picker or drop file list.
///
/// Non-image files are skipped with a debug trace; the same filter applies
/// to every ingestion entry point.
pub fn accepted_image_files(list: &FileList) -> Vec<File> {
    let mut files = Vec::new();
    for index in 0..list.length() {
        if let Some(file) = list.get(index) {
            if is_image_mime(&file.type_()) {
                files.push(file);
            } else {
                log::debug!("ignoring non-image file {}", file.name());
            }
        }
    }
    files
}

/// Collect the file-kind image items from a paste event's clipboard data.
pub fn pasted_image_files(data: &DataTransfer) -> Vec<File> {
    let items = data.items();
    let mut files = Vec::new();
    for index in 0..items.length() {
        let Some(item) = items.get(index) else {
            continue;
        };
        if item.kind() != "file" || !is_image_mime(&item.type_()) {
            continue;
        }
        match item.get_as_file() {
            Ok(Some(file)) => files.push(file),
            Ok(None) => {}
            Err(err) => log::warn!("clipboard item refused file access: {err:?}"),
        }
    }
    files
}

/// Decode a file and deliver it into a reserved slot.
///
/// A failed read abandons the reservation (the placeholder returns) and
/// logs; a stale delivery is dropped by the store.
pub fn deliver_file(state: RwSignal<BoardState>, reservation: Reservation, file: File) {
    spawn_local(async move {
        let name = file.name();
        match file_to_data_url(&file).await {
            Ok(data_url) => {
                state.update(|board| {
                    if !board.store.deliver(&reservation, CardImage { data_url, name }) {
                        log::debug!("dropping superseded image delivery");
                    }
                });
            }
            Err(err) => {
                log::warn!("image decode failed: {err:?}");
                state.update(|board| {
                    board.store.abandon(&reservation);
                });
            }
        }
    });
}

/// Read a file into a base64 `data:` URL via `FileReader`.
async fn file_to_data_url(file: &File) -> Result<String, JsValue> {
    let reader = FileReader::new()?;
    let done = js_sys::Promise::new(&mut |resolve, reject| {
        let load_reader = reader.clone();
        let load_reject = reject.clone();
        let onload = Closure::once_into_js(move || match load_reader.result() {
            Ok(value) => {
                let _ = resolve.call1(&JsValue::NULL, &value);
            }
            Err(err) => {
                let _ = load_reject.call1(&JsValue::NULL, &err);
            }
        });
        reader.set_onload(Some(onload.unchecked_ref()));

        let error_reader = reader.clone();
        let onerror = Closure::once_into_js(move || {
            let reason = error_reader
                .error()
                .map_or_else(|| JsValue::from_str("file read failed"), JsValue::from);
            let _ = reject.call1(&JsValue::NULL, &reason);
        });
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });
    reader.read_as_data_url(file)?;
    let value = JsFuture::from(done).await?;
    value
        .as_string()
        .ok_or_else(|| JsValue::from_str("file read produced no data URL"))
}
