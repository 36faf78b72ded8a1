// procession/examples/instrumented.rs

//! Instrumentation lives outside the core. The engine exposes a callable
//! run (`start`) and per-step callables; an outer wrapper observes start,
//! end, and duration for the whole run or individual steps by decorating
//! those callables. The core never imports the wrapper.
//!
//! (The engine also emits `tracing` spans per run and per step, so a
//! subscriber is an alternative way to get the same timings.)

use std::future::Future;
use std::time::Instant;

use procession::{Completion, Context, Process, ProcessError, ProcessResult, Step, StepOutput};
use serde_json::json;
use tracing::info;

/// Decorates a step body with start/end/duration reporting.
fn timed_step<F, Fut>(name: &'static str, f: F) -> Step
where
  F: Fn(Context) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Result<StepOutput, ProcessError>> + Send + 'static,
{
  Step::call(move |ctx: Context| {
    let fut = f(ctx);
    async move {
      let started = Instant::now();
      info!(step = name, "step starting");
      let resolved = fut.await;
      info!(
        step = name,
        elapsed_micros = started.elapsed().as_micros() as u64,
        ok = resolved.is_ok(),
        "step finished"
      );
      resolved
    }
  })
}

/// Decorates a whole run with start/end/duration reporting.
async fn timed_start(process: Process, input: Context) -> ProcessResult<Completion> {
  let started = Instant::now();
  info!(num_steps = process.step_count(), "run starting");
  let result = process.start(input).await;
  info!(
    elapsed_micros = started.elapsed().as_micros() as u64,
    ok = result.is_ok(),
    "run finished"
  );
  result
}

#[tokio::main]
async fn main() -> Result<(), ProcessError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Instrumented Process Example ---");

  let process = Process::new(vec![
    timed_step("fetch", |_ctx| async {
      tokio::time::sleep(std::time::Duration::from_millis(20)).await;
      StepOutput::patch(json!({ "fetched": 42 }))
    }),
    timed_step("transform", |ctx| async move {
      let fetched = ctx.get("fetched").and_then(|v| v.as_i64()).unwrap_or(0);
      StepOutput::patch(json!({ "transformed": fetched * 2 }))
    }),
  ]);

  let completion = timed_start(process, Context::new()).await?;

  assert_eq!(completion.get("transformed"), Some(&json!(84)));
  Ok(())
}
