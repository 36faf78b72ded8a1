// procession/src/branch/builder.rs

//! Implements the fluent builder for switch steps.

use serde_json::Value;

use crate::branch::selector::selector_step;
use crate::core::step::Step;
use crate::process::Process;

/// Builds a step that, at run time, selects one branch by comparing
/// `Context[key]` against the declared case values.
///
/// Matching is exact equality against discrete values (strings, numbers,
/// booleans) — not pattern or range matching. When no case matches the
/// live value (or the key is absent), the step resolves as a no-op and
/// control falls through to whatever follows it in the parent sequence.
///
/// ```
/// use procession::{Step, StepOutput, Switch};
/// use serde_json::json;
///
/// let branch = Switch::on("payment_method")
///   .case(
///     "card",
///     Step::call(|_ctx| async { StepOutput::patch(json!({ "charged": true })) }),
///   )
///   .case("cash", Step::noop())
///   .into_step();
/// ```
pub struct Switch {
  key: String,
  cases: Vec<(Value, Step)>,
}

impl Switch {
  /// Starts a switch over the given context key. The resulting step never
  /// inspects any other key.
  pub fn on(key: impl Into<String>) -> Self {
    Self {
      key: key.into(),
      cases: Vec::new(),
    }
  }

  /// Adds a branch: when `Context[key]` equals `value`, run `steps`.
  ///
  /// `steps` accepts a single [`Step`], an ordered `Vec<Step>`, or a
  /// nested [`Process`](crate::Process) through the `From` conversions on
  /// `Step`. Cases are checked in declaration order.
  pub fn case(mut self, value: impl Into<Value>, steps: impl Into<Step>) -> Self {
    self.cases.push((value.into(), steps.into()));
    self
  }

  /// Finalizes the switch into a step. Each branch is flattened here,
  /// once, with the same construction-time flattening a process gets.
  pub fn into_step(self) -> Step {
    let cases = self
      .cases
      .into_iter()
      .map(|(value, step)| (value, Process::new([step]).steps))
      .collect();
    selector_step(self.key, cases)
  }
}
