//! Input: logical editor keys and their translation from terminal events

pub mod key_translator;
pub mod keys;
