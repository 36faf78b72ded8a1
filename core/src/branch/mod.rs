// procession/src/branch/mod.rs

//! Conditional branching: a step-producing combinator that, at run time,
//! selects and executes one branch of steps based on the live context.
//!
//! The [`Switch`] builder pairs a context key with a mapping from expected
//! discrete values to branch step-lists. The resulting step runs the
//! matched branch in place, under the same engine semantics as the rest of
//! the run — sequential, exit-propagating, result-merging.

pub mod builder;
pub mod selector;

// Re-export the primary builder for users.
pub use builder::Switch;
