//! Low-level primitives
//!
//! Tab expansion and column mapping, syntax definitions, and the row
//! highlighter.

pub mod coords;
pub mod highlighter;
pub mod syntax;
