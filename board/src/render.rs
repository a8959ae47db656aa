//! Rasterization: draws a measured snapshot of the board to a 2D context.
//!
//! This module is the only place in the crate that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only snapshot
//! data collected by the export driver and produces pixels — it does not
//! read or mutate application state. Placeholder labels and images without
//! an embedded `data:` source never reach this module; the driver filters
//! them while measuring.
//!
//! All fallible Canvas2D calls propagate errors via `Result<(), JsValue>`.
//! The export driver handles the result.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::consts::{
    BOARD_BACKGROUND, CARD_BORDER_COLOR, CARD_BORDER_PX, EXPORT_FONT_FAMILY, NOTE_TEXT_COLOR,
};
use crate::layout::{ExportSizing, Rect};

/// A card measured for export, in board-content coordinates.
pub struct CardSnapshot {
    /// The card's frame rectangle.
    pub frame: Rect,
    /// The live `<img>` element and its rectangle. Present only when the
    /// element holds an embedded `data:` source.
    pub image: Option<(HtmlImageElement, Rect)>,
    /// The note text and the note field's rectangle. Present only when the
    /// note is non-empty.
    pub note: Option<(String, Rect)>,
}

/// An overlay note measured for export, in board-content coordinates.
pub struct NoteSnapshot {
    pub text: String,
    pub rect: Rect,
}

/// Draw the full board snapshot: background, card frames, images, and notes.
///
/// `region` is the capture window in board-content coordinates; `scale` is
/// the device pixel ratio applied to the backing store.
///
/// # Errors
///
/// Returns `Err` if any Canvas2D call fails (e.g. an image element in a
/// broken state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    cards: &[CardSnapshot],
    notes: &[NoteSnapshot],
    region: &Rect,
    sizing: &ExportSizing,
    scale: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0)?;
    ctx.set_fill_style_str(BOARD_BACKGROUND);
    ctx.fill_rect(0.0, 0.0, region.w, region.h);
    ctx.translate(-region.x, -region.y)?;

    for card in cards {
        draw_card(ctx, card, sizing)?;
    }
    for note in notes {
        draw_note_text(ctx, &note.text, &note.rect, sizing)?;
    }
    Ok(())
}

// =============================================================
// Card
// =============================================================

fn draw_card(
    ctx: &CanvasRenderingContext2d,
    card: &CardSnapshot,
    sizing: &ExportSizing,
) -> Result<(), JsValue> {
    ctx.set_line_width(CARD_BORDER_PX);
    ctx.set_stroke_style_str(CARD_BORDER_COLOR);
    ctx.stroke_rect(card.frame.x, card.frame.y, card.frame.w, card.frame.h);

    if let Some((element, rect)) = &card.image {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            element, rect.x, rect.y, rect.w, rect.h,
        )?;
    }
    if let Some((text, rect)) = &card.note {
        draw_note_text(ctx, text, rect, sizing)?;
    }
    Ok(())
}

// =============================================================
// Note text
// =============================================================

fn draw_note_text(
    ctx: &CanvasRenderingContext2d,
    text: &str,
    rect: &Rect,
    sizing: &ExportSizing,
) -> Result<(), JsValue> {
    ctx.set_font(&format!("{:.0}px {EXPORT_FONT_FAMILY}", sizing.font_px));
    ctx.set_fill_style_str(NOTE_TEXT_COLOR);
    ctx.set_text_baseline("middle");
    ctx.fill_text(text, rect.x, rect.y + rect.h * 0.5)?;
    Ok(())
}
