// procession/src/process/mod.rs

//! Defines the `Process` struct, its construction-time flattening, and its
//! execution logic.

pub mod definition;
pub mod execution;

// Re-export the main Process type and the one-shot shortcut
pub use definition::{steps, Process};
