// procession/examples/error_handling.rs

use procession::{Context, Process, ProcessError, Step, StepOutput};
use serde_json::json;
use tracing::{info, warn};

// A failing step fails the whole run: nothing is caught or retried by the
// engine, and the original cause stays on the error's source chain.

#[derive(Debug, thiserror::Error)]
enum PaymentError {
  #[error("gateway rejected the charge: {0}")]
  Rejected(String),
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Error Handling Example ---");

  let reserve = Step::call(|_ctx: Context| async {
    StepOutput::patch(json!({ "reserved": true }))
  });

  let charge = Step::call(|_ctx: Context| async {
    Err::<StepOutput, PaymentError>(PaymentError::Rejected("card expired".into()))
  });

  let ship = Step::call(|_ctx: Context| async {
    // Never reached: the failure above aborts the run first.
    StepOutput::patch(json!({ "shipped": true }))
  });

  let process = Process::new(vec![reserve, charge, ship]);
  let result = process.start(Context::new()).await;

  match result {
    Ok(_) => warn!("run succeeded, but was expected to fail"),
    Err(ProcessError::StepFailure { source }) => {
      info!("run failed as expected: {}", source);
      let cause = source.downcast_ref::<PaymentError>();
      info!("original cause recovered: {:?}", cause);
      assert!(cause.is_some());
    }
    Err(other) => warn!("unexpected failure kind: {}", other),
  }
}
