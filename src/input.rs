//! The JSON record a hook receives on stdin.

use serde::Deserialize;
use serde_json::Value;

/// A pending prompt or tool invocation as described by the hook caller.
///
/// Fields are kept as raw JSON so an unexpected type never rejects the
/// record: a missing or non-string `user_prompt` behaves like an empty
/// prompt, which is never in SPARC context.
#[derive(Debug, Default, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    pub user_prompt: Option<Value>,
    #[serde(default)]
    pub tool: Option<Value>,
}

impl HookInput {
    pub fn prompt(&self) -> &str {
        string_or_empty(&self.user_prompt)
    }

    pub fn tool(&self) -> &str {
        string_or_empty(&self.tool)
    }
}

fn string_or_empty(value: &Option<Value>) -> &str {
    value.as_ref().and_then(Value::as_str).unwrap_or_default()
}

/// Parse a hook record. Only JSON objects are accepted.
pub fn parse(raw: &str) -> Result<HookInput, serde_json::Error> {
    let value: Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom("expected a JSON object"));
    }
    serde_json::from_value(value)
}
