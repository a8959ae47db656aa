//! Ingestion policy: which inputs are accepted, on every entry point.
//!
//! The file picker, drag-and-drop, and clipboard paste all funnel through
//! the same MIME check. Rejected inputs are silent no-ops at the UI layer.

#[cfg(test)]
#[path = "ingest_test.rs"]
mod ingest_test;

/// Whether a file's MIME type is accepted for ingestion.
#[must_use]
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Whether an image source is an embedded `data:` URL.
///
/// Export only rasterizes embedded sources; a broken external reference
/// never appears in the exported bitmap.
#[must_use]
pub fn is_embedded_src(src: &str) -> bool {
    src.starts_with("data:")
}
