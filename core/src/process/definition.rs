// procession/src/process/definition.rs

//! Contains the `Process` struct definition, the construction-time
//! flattening of nested step groups, and the one-shot `steps` shortcut.

use std::future::Future;
use std::pin::Pin;

use crate::core::context::Context;
use crate::core::control::Completion;
use crate::core::step::{Step, StepFn, StepKind};
use crate::error::ProcessResult;

/// An assembled, immutable sequence of steps.
///
/// Construction flattens arbitrarily nested groups and nested processes
/// into one ordered flat list — left-to-right, depth-first, depth
/// unbounded. A nested process contributes its already-flattened steps
/// rather than itself as an opaque unit, so an exit signal raised inside
/// it terminates the outer run and its results merge into the same outer
/// context used by later sibling steps.
///
/// [`Process::start`] consumes the process: each instance runs at most
/// once, and each run owns its own context.
pub struct Process {
  pub(crate) steps: Vec<StepFn>,
}

impl Process {
  /// Assembles a process from an ordered list of steps, flattening once.
  ///
  /// Flattening does not validate anything about the steps themselves; an
  /// ill-behaved step surfaces when it is invoked.
  pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
    let mut flat = Vec::new();
    for step in steps {
      flatten_into(step, &mut flat);
    }
    Self { steps: flat }
  }

  /// Number of invocable steps after flattening.
  pub fn step_count(&self) -> usize {
    self.steps.len()
  }
}

fn flatten_into(step: Step, out: &mut Vec<StepFn>) {
  match step.kind {
    StepKind::Call(step_fn) => out.push(step_fn),
    StepKind::Group(group) => {
      for inner in group {
        flatten_into(inner, out);
      }
    }
    // A nested process is already flat; splice its steps in place.
    StepKind::Nested(process) => out.extend(process.steps),
  }
}

/// One-shot shortcut: assemble a process and return the function that
/// starts it.
///
/// Invoking the returned function with an input context is equivalent to
/// `Process::new(list)` followed by `start(input)`. It is `FnOnce` for
/// the same reason `start` consumes the process.
pub fn steps(
  list: impl IntoIterator<Item = Step>,
) -> impl FnOnce(Context) -> Pin<Box<dyn Future<Output = ProcessResult<Completion>> + Send>> {
  let process = Process::new(list);
  move |input| Box::pin(process.start(input))
}
