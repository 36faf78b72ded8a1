// procession/examples/branching.rs

use procession::{Context, Process, ProcessError, Step, StepOutput, Switch};
use serde_json::json;
use tracing::info;

// Switch builds a step that selects one branch of steps from the live
// context. An unmatched value is a no-op fallthrough, and a branch merges
// into the same context used by everything after the switch.

#[tokio::main]
async fn main() -> Result<(), ProcessError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Branching Example ---");

  let charge_card = Step::call(|ctx: Context| async move {
    info!("charging card for {:?}", ctx.get("total_cents"));
    StepOutput::patch(json!({ "charged": true, "method": "card" }))
  });
  let invoice_later = vec![
    Step::call(|_ctx: Context| async { StepOutput::patch(json!({ "invoice_id": "inv-9" })) }),
    Step::call(|_ctx: Context| async { StepOutput::patch(json!({ "method": "invoice" })) }),
  ];

  let settle = Switch::on("payment_method")
    .case("card", charge_card)
    .case("invoice", invoice_later)
    .into_step();

  let receipt = Step::call(|ctx: Context| async move {
    let method = ctx.get("method").cloned().unwrap_or(json!("none"));
    StepOutput::patch(json!({ "receipt": format!("settled via {}", method) }))
  });

  let process = Process::new(vec![settle, receipt]);
  let input = Context::from_value(json!({ "payment_method": "invoice", "total_cents": 4000 }))?;
  let completion = process.start(input).await?;

  info!(
    "final context: {}",
    serde_json::to_string_pretty(&completion).unwrap()
  );

  assert_eq!(completion.get("invoice_id"), Some(&json!("inv-9")));
  assert_eq!(completion.get("charged"), None);
  assert_eq!(
    completion.get("receipt"),
    Some(&json!("settled via \"invoice\""))
  );

  Ok(())
}
