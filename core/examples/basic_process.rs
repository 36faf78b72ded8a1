// procession/examples/basic_process.rs

use procession::{Context, Process, ProcessError, RunStatus, Step, StepOutput};
use serde_json::json;
use tracing::info;

// A process is an ordered list of steps. Each step receives a snapshot of
// the accumulating context and returns a partial update; the engine merges.

#[tokio::main]
async fn main() -> Result<(), ProcessError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Process Example ---");

  // 1. Write the steps
  let load_user = Step::call(|_ctx: Context| async {
    StepOutput::patch(json!({ "user": "ada", "verified": true }))
  });

  let load_cart = Step::call(|ctx: Context| async move {
    info!("loading cart for {:?}", ctx.get("user"));
    StepOutput::patch(json!({ "items": 3, "total_cents": 4200 }))
  });

  let apply_discount = Step::call(|ctx: Context| async move {
    let total = ctx.get("total_cents").and_then(|v| v.as_i64()).unwrap_or(0);
    StepOutput::patch(json!({ "total_cents": total - 200 }))
  });

  // 2. Assemble; construction flattens the step list once
  let process = Process::new(vec![load_user, load_cart, apply_discount]);

  // 3. Run with an input object seeding the context
  let input = Context::from_value(json!({ "request_id": "r-17" }))?;
  let completion = process.start(input).await?;

  // 4. Inspect the results
  match completion.status() {
    RunStatus::Completed => info!("Process completed successfully!"),
    RunStatus::Exited => info!("Process exited early."),
  }
  info!(
    "final context: {}",
    serde_json::to_string_pretty(&completion).unwrap()
  );

  assert_eq!(completion.get("request_id"), Some(&json!("r-17")));
  assert_eq!(completion.get("total_cents"), Some(&json!(4000)));

  Ok(())
}
