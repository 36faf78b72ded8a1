// procession/src/core/context.rs

//! The accumulating context threaded through every step of a run.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ProcessError, ProcessResult};

/// An order-insensitive mapping from string keys to values, seeded from the
/// run input and grown by merging each step's result object.
///
/// The context is conceptually immutable per step invocation: a step
/// receives a snapshot and returns a partial update, and only the engine
/// merges. At the moment step `i` executes, the context holds the input's
/// keys plus the union of all result keys returned by steps `1..i-1`, later
/// writes overwriting earlier ones on collision.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Context {
  entries: Map<String, Value>,
}

impl Context {
  /// An empty context, equivalent to starting a run with no input.
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a context from anything that serializes to a plain key/value
  /// object. Anything else is rejected with [`ProcessError::InvalidInput`].
  pub fn from_value(input: impl Serialize) -> ProcessResult<Self> {
    match serde_json::to_value(input) {
      Ok(Value::Object(entries)) => Ok(Self { entries }),
      Ok(other) => Err(ProcessError::InvalidInput {
        reason: format!("expected an object, got {}", json_type_name(&other)),
      }),
      Err(err) => Err(ProcessError::InvalidInput { reason: err.to_string() }),
    }
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.entries.get(key)
  }

  pub fn contains(&self, key: &str) -> bool {
    self.entries.contains_key(key)
  }

  pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
    self.entries.insert(key.into(), value)
  }

  /// Merges a partial update, overwriting on collision.
  pub(crate) fn merge(&mut self, patch: Map<String, Value>) {
    for (key, value) in patch {
      self.entries.insert(key, value);
    }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn as_map(&self) -> &Map<String, Value> {
    &self.entries
  }

  pub fn into_map(self) -> Map<String, Value> {
    self.entries
  }
}

impl From<Map<String, Value>> for Context {
  fn from(entries: Map<String, Value>) -> Self {
    Self { entries }
  }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}
