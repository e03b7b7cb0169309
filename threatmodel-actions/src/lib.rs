//! Action identifiers for the threat model store
//!
//! The threat model slice of the application state changes only through
//! dispatched actions. This crate names those actions; the store and reducers
//! that consume them live elsewhere.
//!
//! # Core Concepts
//!
//! - **Registry**: the `THREATMODEL_*` identifiers, the closed [`ActionType`] enum,
//!   and the short-key lookup table (`save`, `fetchAll`, ...)
//! - **ThreatModelAction**: an identifier plus JSON payload
//! - **Logger**: `tracing` events for actions, filtered by identifier, key or category
//!
//! # Example
//!
//! ```
//! use threatmodel_actions::prelude::*;
//! use threatmodel_actions::registry::{self, THREATMODEL_SAVE};
//! use serde_json::json;
//!
//! assert_eq!(registry::resolve("save"), Some(THREATMODEL_SAVE));
//!
//! let action = ThreatModelAction::from_key("diagramSelected", json!({ "id": 3 })).unwrap();
//! assert_eq!(action.name(), "THREATMODEL_DIAGRAM_SELECTED");
//! assert_eq!(action.category(), Some("diagram"));
//! ```

pub mod action;
pub mod dispatch;
pub mod error;
pub mod logger;
pub mod registry;
pub mod testing;

pub use action::{Action, ActionCategory, ActionSummary};
pub use dispatch::ThreatModelAction;
pub use error::RegistryError;
pub use logger::{trace_action, TraceFilter};
pub use registry::{mapping, resolve, ActionKey, ActionType, ActionTypeCategory};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::{Action, ActionCategory, ActionSummary};
    pub use crate::dispatch::ThreatModelAction;
    pub use crate::logger::{trace_action, TraceFilter};
    pub use crate::registry::{ActionKey, ActionType, ActionTypeCategory};
}
