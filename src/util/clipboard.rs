//! Clipboard hand-off for the exported bitmap.
//!
//! web-sys keeps the `ClipboardItem` constructor behind its unstable-API
//! gate, so the item is assembled by a small JS shim instead. The write is
//! fire-and-forget; a rejection is logged, never surfaced to the user.

use js_sys::{Function, Promise};
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Blob;

/// Write a PNG blob to the system clipboard.
pub fn write_png(blob: &Blob) {
    let shim = Function::new_with_args(
        "blob",
        "if (!navigator.clipboard || !window.ClipboardItem) { \
             return Promise.reject(new Error('clipboard unavailable')); \
         } \
         return navigator.clipboard.write([new ClipboardItem({ 'image/png': blob })]);",
    );
    match shim.call1(&JsValue::NULL, blob.as_ref()) {
        Ok(value) => {
            let pending: Promise = value.unchecked_into();
            spawn_local(async move {
                if let Err(err) = JsFuture::from(pending).await {
                    log::error!("clipboard write rejected: {err:?}");
                }
            });
        }
        Err(err) => log::error!("clipboard write failed to start: {err:?}"),
    }
}
