//! Dispatchable threat model actions
//!
//! A [`ThreatModelAction`] pairs an [`ActionType`] with an arbitrary JSON
//! payload. On the wire it uses the usual `{"type": ..., "payload": ...}` shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::action::{Action, ActionCategory, ActionSummary};
use crate::registry::{ActionKey, ActionType, ActionTypeCategory};

const SUMMARY_PAYLOAD_LIMIT: usize = 60;

/// An identifier plus payload, as consumers dispatch it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatModelAction {
    #[serde(rename = "type")]
    pub kind: ActionType,
    #[serde(default)]
    pub payload: Value,
}

impl ThreatModelAction {
    /// Action without a payload
    pub fn new(kind: ActionType) -> Self {
        Self {
            kind,
            payload: Value::Null,
        }
    }

    /// Action carrying a JSON payload
    pub fn with_payload(kind: ActionType, payload: Value) -> Self {
        Self { kind, payload }
    }

    /// Build an action from a short key (`"save"`, `"fetchAll"`, ...)
    ///
    /// Returns `None` for unknown keys.
    pub fn from_key(key: &str, payload: Value) -> Option<Self> {
        ActionKey::from_key(key).map(|k| Self::with_payload(k.action_type(), payload))
    }

    /// Identifier string of this action
    pub fn identifier(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Returns true unless the payload is `null`
    pub fn has_payload(&self) -> bool {
        !self.payload.is_null()
    }
}

impl From<ActionType> for ThreatModelAction {
    fn from(kind: ActionType) -> Self {
        Self::new(kind)
    }
}

impl Action for ThreatModelAction {
    fn name(&self) -> &'static str {
        self.kind.as_str()
    }
}

impl ActionCategory for ThreatModelAction {
    type Category = ActionTypeCategory;

    fn category(&self) -> Option<&'static str> {
        self.kind.category()
    }

    fn category_enum(&self) -> Self::Category {
        self.kind.category_enum()
    }
}

/// Shows the identifier and a truncated payload instead of the full Debug output
impl ActionSummary for ThreatModelAction {
    fn summary(&self) -> String {
        if self.payload.is_null() {
            return self.kind.as_str().to_string();
        }

        let payload = self.payload.to_string();
        let payload = if payload.chars().count() > SUMMARY_PAYLOAD_LIMIT {
            format!(
                "{}...",
                payload
                    .chars()
                    .take(SUMMARY_PAYLOAD_LIMIT - 3)
                    .collect::<String>()
            )
        } else {
            payload
        };
        format!("{} {}", self.kind, payload)
    }
}
