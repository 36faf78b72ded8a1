// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use procession::{Context, ProcessError, Step, StepOutput};
use serde_json::{Map, Value};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc, Mutex,
};
use tracing::Level;

// --- Common Step Creators ---

/// Step that merges `{key: value}` into the context.
pub fn set_step(key: &'static str, value: Value) -> Step {
  Step::call(move |_ctx: Context| {
    let mut fields = Map::new();
    fields.insert(key.to_string(), value.clone());
    async move { Ok::<_, ProcessError>(StepOutput::Patch(fields)) }
  })
}

/// Shared log of which steps ran, in order.
pub type ExecutionLog = Arc<Mutex<Vec<&'static str>>>;

pub fn new_log() -> ExecutionLog {
  Arc::new(Mutex::new(Vec::new()))
}

/// Step that appends `name` to the log and contributes no result.
pub fn record_step(log: &ExecutionLog, name: &'static str) -> Step {
  let log = Arc::clone(log);
  Step::call(move |_ctx: Context| {
    let log = Arc::clone(&log);
    async move {
      log.lock().unwrap().push(name);
      tracing::debug!(target: "test_steps", step = name, "executed");
      Ok::<_, ProcessError>(StepOutput::Empty)
    }
  })
}

/// Step that appends `name` to the log and merges `{key: value}`.
pub fn record_and_set_step(
  log: &ExecutionLog,
  name: &'static str,
  key: &'static str,
  value: Value,
) -> Step {
  let log = Arc::clone(log);
  Step::call(move |_ctx: Context| {
    let log = Arc::clone(&log);
    let value = value.clone();
    async move {
      log.lock().unwrap().push(name);
      let mut fields = Map::new();
      fields.insert(key.to_string(), value);
      Ok::<_, ProcessError>(StepOutput::Patch(fields))
    }
  })
}

/// Step resolving with a bare exit signal.
pub fn exit_step() -> Step {
  Step::call(|_ctx: Context| async { Ok::<_, ProcessError>(procession::exit()) })
}

/// Step resolving with `exit_with(payload)`.
pub fn exit_with_step(payload: Value) -> Step {
  Step::call(move |_ctx: Context| {
    let payload = payload.clone();
    async move { procession::exit_with(payload) }
  })
}

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error)]
pub enum TestError {
  #[error("test step failed: {0}")]
  Step(String),
}

pub fn failing_step(message: &'static str) -> Step {
  Step::call(move |_ctx: Context| async move {
    tracing::warn!(target: "test_steps", "failing with: '{}'", message);
    Err::<StepOutput, TestError>(TestError::Step(message.to_string()))
  })
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Atomic counter for checking invocation counts ---
pub static STEP_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  STEP_EXEC_COUNTER.store(0, Ordering::SeqCst);
}

/// Step that bumps the global counter; pair with `#[serial]`.
pub fn counting_step() -> Step {
  Step::call(|_ctx: Context| async {
    STEP_EXEC_COUNTER.fetch_add(1, Ordering::SeqCst);
    Ok::<_, ProcessError>(StepOutput::Empty)
  })
}
