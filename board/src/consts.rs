//! Shared numeric and style constants for the board crate.

// ── Registry ────────────────────────────────────────────────────

/// Cards seeded at startup (the fixed left/right paste slots).
pub const SEED_CARDS: usize = 2;

// ── Export sizing ───────────────────────────────────────────────

/// Lower clamp for the export note font, in pixels.
pub const MIN_EXPORT_FONT_PX: f64 = 20.0;

/// Upper clamp for the export note font, in pixels.
pub const MAX_EXPORT_FONT_PX: f64 = 48.0;

/// Lower clamp for the export card gap, in pixels.
pub const MIN_EXPORT_GAP_PX: f64 = 32.0;

/// Upper clamp for the export card gap, in pixels.
pub const MAX_EXPORT_GAP_PX: f64 = 128.0;

/// Divisor mapping measured board width to the export font size.
pub const EXPORT_FONT_WIDTH_RATIO: f64 = 40.0;

/// Divisor mapping measured board width to the export gap.
pub const EXPORT_GAP_WIDTH_RATIO: f64 = 15.0;

// ── Rasterization ───────────────────────────────────────────────

/// Card frame stroke width in CSS pixels.
pub const CARD_BORDER_PX: f64 = 2.0;

/// Export background fill.
pub const BOARD_BACKGROUND: &str = "#ffffff";

/// Card frame stroke color.
pub const CARD_BORDER_COLOR: &str = "#1f1a17";

/// Note text fill color.
pub const NOTE_TEXT_COLOR: &str = "#1f1a17";

/// Note text font family.
pub const EXPORT_FONT_FAMILY: &str = "sans-serif";
