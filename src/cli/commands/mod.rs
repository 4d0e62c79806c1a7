//! CLI command implementations

pub mod evaluate;
pub mod play;
pub mod solve;
pub mod verify;
