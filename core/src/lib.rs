// src/lib.rs

//! Procession: a minimal ASYNC sequential-execution engine for Rust.
//!
//! Procession composes independently defined synchronous or asynchronous
//! steps into one coherent process:
//!  - Steps run strictly in declaration order.
//!  - An accumulating result context is threaded through each step; a step
//!    receives a snapshot and returns a partial update the engine merges.
//!  - Groups and nested processes flatten transparently at construction time.
//!  - `Switch` selects and runs one branch of steps from the live context.
//!  - Any step can terminate the whole run early with `exit` / `exit_with`,
//!    optionally carrying extra result fields.
//!
//! There is no parallel execution, no retry or timeout policy, and no
//! persistence of in-flight state: the engine is a strictly sequential
//! driver over an immutable, construction-time-flattened step list.

// Declare modules according to the planned structure
pub mod branch;
pub mod core;
pub mod error;
pub mod process;

// --- Re-exports for the Public API ---

// Core types that users will interact with frequently
pub use crate::core::context::Context;
pub use crate::core::control::{Completion, RunStatus, StepOutput};
pub use crate::core::signal::{exit, exit_with, ExitMarker};
pub use crate::core::step::Step;

// The main Process type and the one-shot construction shortcut
pub use crate::process::{steps, Process};

// The fluent builder for conditional branching
pub use crate::branch::Switch;

pub use crate::error::{ProcessError, ProcessResult};

/*
    Core workflow:
    1. Write steps: `Step::call(|ctx| async move { ... })` for async work,
       `Step::sync(..)` for synchronous work, `Step::future(..)` for an
       already-pending computation, `Step::group(..)` / `Vec<Step>` for an
       ordered group, or nest a whole `Process`.
    2. Assemble once: `Process::new(steps)` flattens everything into one
       ordered flat sequence.
    3. Run: `process.start(input).await` seeds a fresh context with `input`
       and resolves with the accumulated `Completion`.
    4. Branch inside a sequence with `Switch::on(key).case(value, steps)`,
       and terminate early from any nesting depth with `exit()` /
       `exit_with(fields)`.
*/
