// procession/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
  /// A step's invocation threw, or its pending computation rejected. The
  /// original cause is preserved unmodified on the source chain; the run
  /// fails rather than resolving with a partial result.
  #[error("step execution failed. Source: {source}")]
  StepFailure {
    #[source]
    source: AnyhowError,
  },

  /// `exit_with` was given something other than a plain key/value object.
  /// Raised at the call site, before the engine sees the result.
  #[error("invalid exit payload: {reason}")]
  InvalidExitPayload { reason: String },

  /// A run input or step result did not serialize to a plain key/value
  /// object.
  #[error("invalid input: {reason}")]
  InvalidInput { reason: String },

  #[error("Internal procession error: {0}")]
  Internal(String),
}

// This is the key conversion the crate provides for external errors.
impl From<AnyhowError> for ProcessError {
  fn from(err: AnyhowError) -> Self {
    // The anyhow::Error may already be wrapping a ProcessError (e.g. a step
    // that forwarded exit_with's failure with `?`). Return the original
    // instead of stacking StepFailure(ProcessError(...)).
    match err.downcast::<ProcessError>() {
      Ok(process_err) => process_err,
      Err(other) => ProcessError::StepFailure { source: other },
    }
  }
}

pub type ProcessResult<T, E = ProcessError> = std::result::Result<T, E>;
