// procession/src/core/control.rs

//! Defines what a step resolves with and the outcome of a full run.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::context::{json_type_name, Context};
use crate::core::signal::ExitMarker;
use crate::error::{ProcessError, ProcessResult};

/// Value a step resolves with.
#[derive(Debug)]
pub enum StepOutput {
  /// Nothing to contribute; the context is left untouched and the run
  /// continues.
  Empty,
  /// A partial update merged into the context, overwriting on collision.
  Patch(Map<String, Value>),
  /// Terminate the entire run after this step. The marker's fields merge
  /// into the context like a final patch.
  Exit(ExitMarker),
}

impl StepOutput {
  /// Builds a `Patch` from anything that serializes to a plain key/value
  /// object.
  pub fn patch(fields: impl Serialize) -> ProcessResult<Self> {
    match serde_json::to_value(fields) {
      Ok(Value::Object(map)) => Ok(StepOutput::Patch(map)),
      Ok(other) => Err(ProcessError::InvalidInput {
        reason: format!("step result must be an object, got {}", json_type_name(&other)),
      }),
      Err(err) => Err(ProcessError::InvalidInput { reason: err.to_string() }),
    }
  }
}

impl From<Map<String, Value>> for StepOutput {
  fn from(map: Map<String, Value>) -> Self {
    StepOutput::Patch(map)
  }
}

/// How a run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
  /// Every step in the flattened sequence ran.
  Completed,
  /// A step resolved with an exit signal. No step after it — in its
  /// branch, in its parent, or in any outer nesting — was executed.
  Exited,
}

/// The resolved result of [`Process::start`](crate::Process::start).
///
/// The early-termination flag lives beside the context, not inside it:
/// serializing or iterating the result shows only real result fields,
/// while [`Completion::exited`] stays queryable to tell an exited run from
/// a completed one.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
  context: Context,
  status: RunStatus,
}

impl Completion {
  pub(crate) fn new(context: Context, status: RunStatus) -> Self {
    Self { context, status }
  }

  pub fn status(&self) -> RunStatus {
    self.status
  }

  /// Whether the run was terminated early by an exit signal.
  pub fn exited(&self) -> bool {
    self.status == RunStatus::Exited
  }

  pub fn context(&self) -> &Context {
    &self.context
  }

  pub fn into_context(self) -> Context {
    self.context
  }

  /// Shortcut for `self.context().get(key)`.
  pub fn get(&self, key: &str) -> Option<&Value> {
    self.context.get(key)
  }
}

impl Serialize for Completion {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.context.serialize(serializer)
  }
}
