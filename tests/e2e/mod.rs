pub mod basic;
pub mod highlighting;
pub mod movement;
pub mod search;
