//! Export driver: style guard, DOM measurement, rasterization, and the
//! clipboard hand-off.
//!
//! The flow is: apply export styles behind a scoped guard, measure the live
//! card and note elements into board-content coordinates, paint them onto
//! an offscreen canvas via `board::render`, encode to a PNG blob, and write
//! it to the clipboard. The guard restores every touched style on drop, so
//! a failure anywhere in the flow cannot leave the page in its export
//! configuration. Failures are logged, never surfaced.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, CanvasRenderingContext2d, CssStyleDeclaration, HtmlCanvasElement, HtmlDivElement,
    HtmlElement, HtmlImageElement, HtmlInputElement,
};

use board::ingest::is_embedded_src;
use board::layout::{self, Rect};
use board::render::{self, CardSnapshot, NoteSnapshot};

use crate::state::ui::UiState;
use crate::util::clipboard;

/// Fire an export task for the board element.
///
/// The task rasterizes the board, then writes the PNG to the clipboard
/// unless a newer export has superseded this generation in the meantime.
pub fn launch(element: HtmlDivElement, full_size: bool, generation: u64, ui: RwSignal<UiState>) {
    spawn_local(async move {
        match rasterize(&element, full_size).await {
            Ok(blob) => {
                if ui.with_untracked(|u| u.export_is_current(generation)) {
                    clipboard::write_png(&blob);
                } else {
                    log::debug!("discarding superseded export");
                }
            }
            Err(err) => log::error!("export failed: {err:?}"),
        }
    });
}

/// Rasterize the board to a PNG blob.
///
/// # Errors
///
/// Returns `Err` on measurement, canvas, or encoding failure. The style
/// guard has restored the interactive layout by the time this returns.
async fn rasterize(board_el: &HtmlDivElement, full_size: bool) -> Result<Blob, JsValue> {
    let mut guard = StyleGuard::new(board_el);

    // Full-size capture lifts the clipping constraints before measuring so
    // scrolled-out content lands in the bitmap.
    if full_size {
        guard.set("width", "max-content")?;
        guard.set("overflow", "visible")?;
    }

    let sizing = layout::export_sizing(f64::from(board_el.scroll_width()));
    guard.set("--note-font-size", &format!("{}px", sizing.font_px))?;
    guard.set("--board-gap", &format!("{}px", sizing.gap_px))?;

    let region = if full_size {
        layout::full_region(
            f64::from(board_el.scroll_width()),
            f64::from(board_el.scroll_height()),
        )
    } else {
        layout::visible_region(
            f64::from(board_el.scroll_left()),
            f64::from(board_el.scroll_top()),
            f64::from(board_el.client_width()),
            f64::from(board_el.client_height()),
        )
    };

    let (cards, notes) = measure(board_el)?;

    let scale = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    let canvas = offscreen_canvas(&region, scale)?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    render::draw(&ctx, &cards, &notes, &region, &sizing, scale)?;

    to_blob(&canvas).await
}

// =============================================================
// Style guard
// =============================================================

/// Inline styles overridden for the duration of an export.
///
/// Each property is recorded once before its first override and restored on
/// drop, in reverse order.
struct StyleGuard {
    style: CssStyleDeclaration,
    saved: Vec<(String, String)>,
}

impl StyleGuard {
    fn new(element: &HtmlElement) -> Self {
        Self {
            style: element.style(),
            saved: Vec::new(),
        }
    }

    fn set(&mut self, property: &str, value: &str) -> Result<(), JsValue> {
        let prior = self.style.get_property_value(property)?;
        self.saved.push((property.to_owned(), prior));
        self.style.set_property(property, value)
    }
}

impl Drop for StyleGuard {
    fn drop(&mut self) {
        while let Some((property, prior)) = self.saved.pop() {
            let restored = if prior.is_empty() {
                self.style.remove_property(&property).map(|_| ())
            } else {
                self.style.set_property(&property, &prior)
            };
            if let Err(err) = restored {
                log::warn!("failed to restore style {property}: {err:?}");
            }
        }
    }
}

// =============================================================
// Measurement
// =============================================================

/// Walk the live card and overlay-note elements into snapshot form.
///
/// Images without an embedded `data:` source are excluded, as are empty
/// notes; placeholder labels are never measured at all.
fn measure(board_el: &HtmlDivElement) -> Result<(Vec<CardSnapshot>, Vec<NoteSnapshot>), JsValue> {
    let origin = dom_rect(board_el);
    let scroll_x = f64::from(board_el.scroll_left());
    let scroll_y = f64::from(board_el.scroll_top());
    let to_content =
        |el: &web_sys::Element| dom_rect(el).relative_to(&origin).translated(scroll_x, scroll_y);

    let mut cards = Vec::new();
    let card_nodes = board_el.query_selector_all(".card")?;
    for index in 0..card_nodes.length() {
        let Some(node) = card_nodes.get(index) else {
            continue;
        };
        let Ok(card_el) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        let frame = to_content(&card_el);

        let image = card_el
            .query_selector(".card__image")?
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            .filter(|img| is_embedded_src(&img.src()))
            .map(|img| {
                let rect = to_content(&img);
                (img, rect)
            });

        let note = card_el
            .query_selector(".card__note")?
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| {
                let rect = to_content(&input);
                (input.value(), rect)
            })
            .filter(|(text, _)| !text.is_empty());

        cards.push(CardSnapshot { frame, image, note });
    }

    let mut notes = Vec::new();
    let note_nodes = board_el.query_selector_all(".collage__note")?;
    for index in 0..note_nodes.length() {
        let Some(node) = note_nodes.get(index) else {
            continue;
        };
        let Ok(input) = node.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let text = input.value();
        if text.is_empty() {
            continue;
        }
        let rect = to_content(&input);
        notes.push(NoteSnapshot { text, rect });
    }

    Ok((cards, notes))
}

fn dom_rect(el: &web_sys::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.x(), r.y(), r.width(), r.height())
}

// =============================================================
// Canvas + encoding
// =============================================================

fn offscreen_canvas(region: &Rect, scale: f64) -> Result<HtmlCanvasElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width((region.w * scale).max(1.0) as u32);
    canvas.set_height((region.h * scale).max(1.0) as u32);
    Ok(canvas)
}

/// Encode the canvas as a PNG blob.
async fn to_blob(canvas: &HtmlCanvasElement) -> Result<Blob, JsValue> {
    let canvas = canvas.clone();
    let done = js_sys::Promise::new(&mut move |resolve, reject| {
        let callback = Closure::once_into_js(move |blob: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &blob);
        });
        if let Err(err) = canvas.to_blob_with_type(callback.unchecked_ref(), "image/png") {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });
    let value = JsFuture::from(done).await?;
    value
        .dyn_into::<Blob>()
        .map_err(|_| JsValue::from_str("canvas produced no blob"))
}
