//! # moodboard
//!
//! Leptos + WASM collage board. Images arrive by file picker, drag-and-drop,
//! or clipboard paste; cards hold one image and one note each; the composed
//! board exports as a single PNG written to the system clipboard.
//!
//! This crate contains the components, reactive state, event wiring, and the
//! export driver. It integrates with the `board` crate for the document
//! model, ingestion policy, and canvas rasterization.

pub mod app;
pub mod components;
pub mod export;
pub mod ingest;
pub mod state;
pub mod util;
