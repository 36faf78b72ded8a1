// procession/examples/early_exit.rs

use procession::{exit_with, Context, Process, ProcessError, Step, StepOutput};
use serde_json::json;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), ProcessError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Early Exit Example ---");

  let validate = Step::call(|_ctx: Context| async {
    info!("order validated");
    StepOutput::patch(json!({ "validated": true }))
  });

  // This step terminates the whole run; the charge step never executes.
  let check_inventory = Step::call(|ctx: Context| async move {
    let requested = ctx.get("quantity").and_then(|v| v.as_u64()).unwrap_or(0);
    if requested > 2 {
      info!("insufficient stock, exiting run");
      return exit_with(json!({ "reason": "out_of_stock", "available": 2 }));
    }
    Ok(StepOutput::Empty)
  });

  let charge = Step::call(|_ctx: Context| async {
    // This step should not be reached
    error!("charge executed (SHOULD NOT HAPPEN)");
    StepOutput::patch(json!({ "charged": true }))
  });

  let process = Process::new(vec![validate, check_inventory, charge]);
  let input = Context::from_value(json!({ "quantity": 5 }))?;
  let completion = process.start(input).await?;

  if completion.exited() {
    info!("run exited as expected: {:?}", completion.get("reason"));
  } else {
    error!("run completed, but was expected to exit!");
  }

  assert!(completion.exited());
  assert_eq!(completion.get("validated"), Some(&json!(true)));
  assert_eq!(completion.get("reason"), Some(&json!("out_of_stock")));
  assert_eq!(completion.get("charged"), None);

  Ok(())
}
