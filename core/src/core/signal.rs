// procession/src/core/signal.rs

//! The exit signal: a sentinel a step resolves with to request
//! termination of the entire run, optionally carrying extra fields.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::context::json_type_name;
use crate::core::control::StepOutput;
use crate::error::{ProcessError, ProcessResult};

/// Sentinel requesting termination of the entire run.
///
/// A dedicated marker type rather than a conventional key inside an
/// ordinary result object, so collision with user data is impossible. The
/// marker's fields merge into the context like a final patch; the
/// terminated flag itself surfaces as
/// [`RunStatus::Exited`](crate::RunStatus), never as a context entry.
#[derive(Debug, Clone, Default)]
pub struct ExitMarker {
  fields: Map<String, Value>,
}

impl ExitMarker {
  pub(crate) fn carrying(fields: Map<String, Value>) -> Self {
    Self { fields }
  }

  pub fn fields(&self) -> &Map<String, Value> {
    &self.fields
  }

  pub(crate) fn into_fields(self) -> Map<String, Value> {
    self.fields
  }
}

/// Terminate the run with no extra fields.
pub fn exit() -> StepOutput {
  StepOutput::Exit(ExitMarker::default())
}

/// Terminate the run, merging `payload`'s fields into the final context.
///
/// The payload must serialize to a plain key/value object; anything else
/// fails here, at the call site, before the engine sees the result.
pub fn exit_with(payload: impl Serialize) -> ProcessResult<StepOutput> {
  match serde_json::to_value(payload) {
    Ok(Value::Object(fields)) => Ok(StepOutput::Exit(ExitMarker::carrying(fields))),
    Ok(other) => Err(ProcessError::InvalidExitPayload {
      reason: format!("expected an object, got {}", json_type_name(&other)),
    }),
    Err(err) => Err(ProcessError::InvalidExitPayload { reason: err.to_string() }),
  }
}
