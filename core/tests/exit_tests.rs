// tests/exit_tests.rs
mod common;

use common::*;
use procession::{Context, Process, RunStatus, Step};
use serde_json::json;

#[tokio::test]
async fn test_exit_short_circuits_remaining_steps() {
  setup_tracing();
  let log = new_log();
  let process = Process::new(vec![
    record_and_set_step(&log, "s1", "x", json!(1)),
    exit_step(),
    record_and_set_step(&log, "s3", "y", json!(2)),
  ]);

  let completion = process.start(Context::new()).await.unwrap();

  assert_eq!(completion.status(), RunStatus::Exited);
  assert!(completion.exited());
  assert_eq!(completion.get("x"), Some(&json!(1)));
  assert_eq!(completion.get("y"), None);
  assert_eq!(*log.lock().unwrap(), vec!["s1"]);
}

#[tokio::test]
async fn test_exit_with_payload_merges_fields() {
  setup_tracing();
  let process = Process::new(vec![
    set_step("x", json!(1)),
    exit_with_step(json!({ "reason": "x" })),
  ]);

  let completion = process.start(Context::new()).await.unwrap();

  assert!(completion.exited());
  assert_eq!(completion.get("x"), Some(&json!(1)));
  assert_eq!(completion.get("reason"), Some(&json!("x")));
}

#[tokio::test]
async fn test_bare_exit_adds_no_fields() {
  setup_tracing();
  let process = Process::new(vec![exit_step()]);

  let input = Context::from_value(json!({ "seed": true })).unwrap();
  let completion = process.start(input.clone()).await.unwrap();

  assert!(completion.exited());
  assert_eq!(completion.context(), &input);
}

#[tokio::test]
async fn test_exit_inside_group_terminates_run() {
  setup_tracing();
  let log = new_log();
  let process = Process::new(vec![
    record_step(&log, "before"),
    Step::group(vec![record_step(&log, "in_group"), exit_step(), record_step(&log, "group_tail")]),
    record_step(&log, "after"),
  ]);

  let completion = process.start(Context::new()).await.unwrap();

  assert!(completion.exited());
  assert_eq!(*log.lock().unwrap(), vec!["before", "in_group"]);
}

#[tokio::test]
async fn test_exit_inside_nested_process_terminates_outer_run() {
  setup_tracing();
  let log = new_log();

  let inner = Process::new(vec![
    record_and_set_step(&log, "inner1", "partial", json!(true)),
    exit_with_step(json!({ "reason": "inner stop" })),
    record_step(&log, "inner_tail"),
  ]);
  let outer = Process::new(vec![
    record_step(&log, "before"),
    Step::from(inner),
    record_step(&log, "after"),
  ]);

  let completion = outer.start(Context::new()).await.unwrap();

  assert!(completion.exited());
  assert_eq!(completion.get("partial"), Some(&json!(true)));
  assert_eq!(completion.get("reason"), Some(&json!("inner stop")));
  assert_eq!(*log.lock().unwrap(), vec!["before", "inner1"]);
}

#[tokio::test]
async fn test_exit_payload_overwrites_earlier_keys() {
  setup_tracing();
  let process = Process::new(vec![
    set_step("status", json!("working")),
    exit_with_step(json!({ "status": "aborted" })),
  ]);

  let completion = process.start(Context::new()).await.unwrap();

  assert_eq!(completion.get("status"), Some(&json!("aborted")));
}

#[tokio::test]
async fn test_completion_serializes_without_exit_flag() {
  setup_tracing();
  let process = Process::new(vec![
    set_step("x", json!(1)),
    exit_with_step(json!({ "reason": "done" })),
  ]);

  let completion = process.start(Context::new()).await.unwrap();

  // The terminated flag is queryable but never appears among the result
  // fields.
  assert!(completion.exited());
  assert_eq!(
    serde_json::to_value(&completion).unwrap(),
    json!({ "x": 1, "reason": "done" })
  );
}

#[tokio::test]
async fn test_completed_run_reports_not_exited() {
  setup_tracing();
  let process = Process::new(vec![set_step("x", json!(1))]);

  let completion = process.start(Context::new()).await.unwrap();

  assert_eq!(completion.status(), RunStatus::Completed);
  assert!(!completion.exited());
}
