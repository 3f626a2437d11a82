//! View layer
//!
//! Presentation state and the text grid handed to the terminal renderer.

pub mod grid;
pub mod prompt;
pub mod viewport;
