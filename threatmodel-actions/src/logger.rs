//! Tracing of dispatched actions, filtered by identifier
//!
//! A [`TraceFilter`] selects which [`ActionType`]s are worth a `tracing`
//! event. Selectors may name an identifier (`THREATMODEL_SAVE`), a short key
//! (`save`) or a whole category (`diagram`).
//!
//! # Example
//!
//! ```
//! use threatmodel_actions::logger::{trace_action, TraceFilter};
//! use threatmodel_actions::{ActionType, ThreatModelAction};
//!
//! let filter = TraceFilter::parse(Some("diagram, save"), None).unwrap();
//! assert!(trace_action(&filter, &ThreatModelAction::new(ActionType::Save)));
//! assert!(!trace_action(&filter, &ThreatModelAction::new(ActionType::FetchAll)));
//! ```

use std::collections::BTreeSet;

use crate::action::ActionSummary;
use crate::dispatch::ThreatModelAction;
use crate::error::RegistryError;
use crate::registry::{ActionKey, ActionType, ActionTypeCategory};

/// Which identifiers get traced
///
/// `only` restricts tracing to the listed identifiers when set; `skip` is
/// applied afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceFilter {
    only: Option<BTreeSet<ActionType>>,
    skip: BTreeSet<ActionType>,
}

impl TraceFilter {
    /// Filter that traces every identifier
    pub fn all() -> Self {
        Self::default()
    }

    /// Build from comma-separated selector lists. `None` leaves that side empty.
    ///
    /// Fails on the first selector that is not an identifier, key or category.
    pub fn parse(only: Option<&str>, skip: Option<&str>) -> Result<Self, RegistryError> {
        Ok(Self {
            only: only.map(parse_selectors).transpose()?,
            skip: skip.map(parse_selectors).transpose()?.unwrap_or_default(),
        })
    }

    /// Restrict tracing to the given identifiers
    pub fn only(mut self, kinds: impl IntoIterator<Item = ActionType>) -> Self {
        self.only = Some(kinds.into_iter().collect());
        self
    }

    /// Never trace the given identifiers
    pub fn skip(mut self, kinds: impl IntoIterator<Item = ActionType>) -> Self {
        self.skip.extend(kinds);
        self
    }

    /// Whether an action of this kind passes the filter
    pub fn allows(&self, kind: ActionType) -> bool {
        let selected = self.only.as_ref().is_none_or(|only| only.contains(&kind));
        selected && !self.skip.contains(&kind)
    }
}

fn parse_selectors(list: &str) -> Result<BTreeSet<ActionType>, RegistryError> {
    let mut kinds = BTreeSet::new();
    for selector in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        kinds.extend(resolve_selector(selector)?);
    }
    Ok(kinds)
}

fn resolve_selector(selector: &str) -> Result<Vec<ActionType>, RegistryError> {
    if let Some(kind) = ActionType::from_identifier(selector) {
        return Ok(vec![kind]);
    }
    if let Some(key) = ActionKey::from_key(selector) {
        return Ok(vec![key.action_type()]);
    }
    match ActionTypeCategory::from_name(selector) {
        Some(category) => Ok(ActionType::all()
            .iter()
            .copied()
            .filter(|kind| kind.category_enum() == category)
            .collect()),
        None => Err(RegistryError::UnknownSelector(selector.to_string())),
    }
}

/// Emit a `tracing` debug event for the action if the filter allows it.
///
/// Returns whether an event was emitted.
pub fn trace_action(filter: &TraceFilter, action: &ThreatModelAction) -> bool {
    if !filter.allows(action.kind) {
        return false;
    }

    tracing::debug!(
        action = %action.kind,
        category = action.kind.category_enum().name(),
        summary = %action.summary(),
        "threat model action"
    );
    true
}
