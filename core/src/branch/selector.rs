// procession/src/branch/selector.rs

//! The runtime half of a switch: reads the live context, picks the
//! matching branch, and drives it with the shared execution engine.

use std::sync::Arc;

use serde_json::Value;
use tracing::{event, Level};

use crate::core::context::Context;
use crate::core::control::StepOutput;
use crate::core::signal::ExitMarker;
use crate::core::step::{Step, StepFn};
use crate::error::ProcessError;
use crate::process::execution::drive;

/// Builds the selector step over pre-flattened branches.
///
/// The selected branch runs as a sub-sequence of the outer run: its steps
/// see the accumulated context, its results merge into the same context
/// used by later sibling steps, and an exit raised inside it terminates
/// the entire outer run. With no matching case the step resolves as a
/// no-op, contributing no result and never exiting.
pub(crate) fn selector_step(key: String, cases: Vec<(Value, Vec<StepFn>)>) -> Step {
  let key = Arc::new(key);
  let cases = Arc::new(cases);

  Step::call(move |ctx: Context| {
    let key = Arc::clone(&key);
    let cases = Arc::clone(&cases);

    async move {
      let selected = ctx
        .get(&key)
        .and_then(|live| cases.iter().find(|(expected, _)| expected == live));

      let Some((matched, branch)) = selected else {
        event!(Level::DEBUG, key = %key, "no branch matched, falling through");
        return Ok::<_, ProcessError>(StepOutput::Empty);
      };
      event!(Level::DEBUG, key = %key, value = %matched, "branch matched");

      let outcome = drive(branch, ctx.clone()).await?;
      if outcome.exited {
        // The branch's own results travel with the exit marker so the
        // outer merge sees them exactly once.
        Ok(StepOutput::Exit(ExitMarker::carrying(outcome.patch)))
      } else if outcome.patch.is_empty() {
        Ok(StepOutput::Empty)
      } else {
        Ok(StepOutput::Patch(outcome.patch))
      }
    }
  })
}
