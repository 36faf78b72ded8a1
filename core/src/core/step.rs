// procession/src/core/step.rs

//! The polymorphic unit of work: an async or sync callable, a pending
//! computation, an ordered group, or a nested process.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::context::Context;
use crate::core::control::StepOutput;
use crate::error::{ProcessError, ProcessResult};
use crate::process::Process;

/// Boxed future a step resolves with.
pub(crate) type StepFuture = Pin<Box<dyn Future<Output = ProcessResult<StepOutput>> + Send>>;

/// An invocable step after flattening: takes a context snapshot and
/// resolves with a [`StepOutput`].
pub(crate) type StepFn = Arc<dyn Fn(Context) -> StepFuture + Send + Sync>;

/// One unit of work in a process, sequential by construction.
///
/// The shapes a step can be written as form a closed set, normalized by
/// the construction-time flattening in [`Process::new`]: a callable
/// (async or sync), an already-pending computation, an ordered group, or
/// a nested [`Process`] whose own flattened steps are spliced in place.
pub struct Step {
  pub(crate) kind: StepKind,
}

pub(crate) enum StepKind {
  Call(StepFn),
  Group(Vec<Step>),
  Nested(Process),
}

impl Step {
  /// A step from an asynchronous function of the context snapshot.
  ///
  /// The function's error type converts into `anyhow::Error`; whatever it
  /// fails with propagates out of the run unmodified, on the source chain
  /// of [`ProcessError::StepFailure`].
  pub fn call<F, Fut, E>(f: F) -> Step
  where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<StepOutput, E>> + Send + 'static,
    E: Into<anyhow::Error> + Send + Sync + 'static,
  {
    let step_fn: StepFn = Arc::new(move |ctx| {
      let fut = f(ctx);
      Box::pin(async move { fut.await.map_err(|err| ProcessError::from(err.into())) })
    });
    Step {
      kind: StepKind::Call(step_fn),
    }
  }

  /// A step from a synchronous function of the context snapshot.
  pub fn sync<F, E>(f: F) -> Step
  where
    F: Fn(Context) -> Result<StepOutput, E> + Send + Sync + 'static,
    E: Into<anyhow::Error> + Send + Sync + 'static,
  {
    Step::call(move |ctx| std::future::ready(f(ctx)))
  }

  /// A step from an already-pending computation, interpreted as a
  /// zero-argument step.
  ///
  /// The future is awaited when the sequence reaches this position. A
  /// process runs at most once, so the slot holding the future is taken
  /// at most once; a second take answers with `ProcessError::Internal`
  /// rather than panicking.
  pub fn future<Fut, E>(fut: Fut) -> Step
  where
    Fut: Future<Output = Result<StepOutput, E>> + Send + 'static,
    E: Into<anyhow::Error> + Send + Sync + 'static,
  {
    let mapped: StepFuture =
      Box::pin(async move { fut.await.map_err(|err| ProcessError::from(err.into())) });
    let slot = Arc::new(Mutex::new(Some(mapped)));
    let step_fn: StepFn = Arc::new(move |_ctx| {
      let taken = slot.lock().take();
      Box::pin(async move {
        match taken {
          Some(pending) => pending.await,
          None => Err(ProcessError::Internal(
            "pending-computation step polled a second time".to_string(),
          )),
        }
      })
    });
    Step {
      kind: StepKind::Call(step_fn),
    }
  }

  /// An ordered group of steps, flattened in place at construction time.
  /// Grouping has no observable effect on the outcome of a run.
  pub fn group(steps: impl IntoIterator<Item = Step>) -> Step {
    Step {
      kind: StepKind::Group(steps.into_iter().collect()),
    }
  }

  /// A predefined step that resolves with no result and never exits.
  pub fn noop() -> Step {
    Step::call(|_ctx| std::future::ready(Ok::<_, ProcessError>(StepOutput::Empty)))
  }
}

impl From<Vec<Step>> for Step {
  fn from(steps: Vec<Step>) -> Self {
    Step::group(steps)
  }
}

impl From<Process> for Step {
  fn from(process: Process) -> Self {
    Step {
      kind: StepKind::Nested(process),
    }
  }
}

// StepFn (Arc<dyn Fn...>) doesn't implement Debug; print the shape instead.
impl std::fmt::Debug for Step {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match &self.kind {
      StepKind::Call(_) => f.debug_struct("Step").field("kind", &"call").finish(),
      StepKind::Group(steps) => f
        .debug_struct("Step")
        .field("kind", &"group")
        .field("len", &steps.len())
        .finish(),
      StepKind::Nested(process) => f
        .debug_struct("Step")
        .field("kind", &"process")
        .field("len", &process.step_count())
        .finish(),
    }
  }
}
