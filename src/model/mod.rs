//! Core data model: rows, the document row store, cursor and file storage

pub mod cursor;
pub mod document;
pub mod filesystem;
pub mod row;
