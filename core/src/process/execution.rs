// procession/src/process/execution.rs

//! Contains the sequential driver and the `Process::start()` method. The
//! driver is shared with the switch selector so a selected branch runs
//! under identical semantics.

use serde_json::{Map, Value};
use tracing::{event, instrument, span, Instrument, Level};

use crate::core::context::Context;
use crate::core::control::{Completion, RunStatus, StepOutput};
use crate::core::step::StepFn;
use crate::error::ProcessResult;
use crate::process::definition::Process;

/// What a driven sequence produced: the grown context, the delta the
/// sequence contributed on top of its base, and whether it exited.
pub(crate) struct Drive {
  pub(crate) context: Context,
  pub(crate) patch: Map<String, Value>,
  pub(crate) exited: bool,
}

/// Drives a flat sequence with strictly sequential semantics: step `i + 1`
/// is not invoked until step `i`'s future has resolved.
///
/// Each step is invoked with a snapshot of the current context; only the
/// driver merges. The match below is the single place exit markers are
/// recognized. Step failures are not caught or retried here; they
/// propagate out as a failed run.
pub(crate) async fn drive(steps: &[StepFn], base: Context) -> ProcessResult<Drive> {
  let mut context = base;
  let mut patch = Map::new();

  for (step_index, step) in steps.iter().enumerate() {
    let step_span = span!(Level::DEBUG, "process_step", step_index);
    let resolved = step(context.clone()).instrument(step_span).await?;

    match resolved {
      StepOutput::Empty => {
        event!(Level::TRACE, step_index, "step resolved with no result");
      }
      StepOutput::Patch(fields) => {
        event!(Level::TRACE, step_index, keys = fields.len(), "merging step result");
        patch.extend(fields.clone());
        context.merge(fields);
      }
      StepOutput::Exit(marker) => {
        event!(Level::INFO, step_index, "run terminated by exit signal");
        let fields = marker.into_fields();
        patch.extend(fields.clone());
        context.merge(fields);
        return Ok(Drive {
          context,
          patch,
          exited: true,
        });
      }
    }
  }

  Ok(Drive {
    context,
    patch,
    exited: false,
  })
}

impl Process {
  /// Seeds a fresh context from `input`, runs the flattened sequence, and
  /// resolves with the accumulated final context.
  ///
  /// Pass [`Context::new`] when there is no input. Consumes the process:
  /// starting the same instance a second time is a compile error rather
  /// than a runtime one.
  #[instrument(
    name = "Process::start",
    skip_all,
    fields(num_steps = self.steps.len()),
    err(Display)
  )]
  pub async fn start(self, input: Context) -> ProcessResult<Completion> {
    event!(Level::DEBUG, "process execution starting");

    let outcome = drive(&self.steps, input).await?;

    let status = if outcome.exited {
      RunStatus::Exited
    } else {
      RunStatus::Completed
    };
    event!(Level::DEBUG, ?status, "process execution finished");
    Ok(Completion::new(outcome.context, status))
  }
}
