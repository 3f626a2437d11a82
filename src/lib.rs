//! texc: a small terminal text editor
//!
//! The document is a list of byte rows, each carrying its tab-expanded render
//! form and a per-byte highlight classification. The [`app::Editor`] owns the
//! document together with the cursor, viewport and prompt state, and draws
//! itself through ratatui.

pub mod app;
pub mod config;
pub mod input;
pub mod model;
pub mod primitives;
pub mod services;
pub mod view;
