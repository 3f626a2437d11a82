//! Process-level services
//!
//! Services are pieces of the binary that deal with the outside world
//! rather than with the document.

pub mod tracing_setup;
