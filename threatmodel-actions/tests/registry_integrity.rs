//! Integrity checks across the identifier constants and the lookup table

use std::collections::HashSet;

use serde_json::json;
use threatmodel_actions::registry::*;
use threatmodel_actions::{
    assert_category_dispatched, assert_category_not_dispatched, count_category, trace_action,
    ThreatModelAction, TraceFilter,
};

const DECLARED: [&str; 12] = [
    THREATMODEL_CLEAR,
    THREATMODEL_CONTRIBUTORS_UPDATED,
    THREATMODEL_CREATE,
    THREATMODEL_DIAGRAM_SELECTED,
    THREATMODEL_DIAGRAM_UPDATED,
    THREATMODEL_FETCH,
    THREATMODEL_FETCH_ALL,
    THREATMODEL_RESTORE,
    THREATMODEL_SAVE,
    THREATMODEL_SELECTED,
    THREATMODEL_SET_IMMUTABLE_COPY,
    THREATMODEL_UPDATE,
];

#[test]
fn declared_identifiers_are_unique_and_non_empty() {
    assert!(DECLARED.iter().all(|id| !id.is_empty()));
    let unique: HashSet<_> = DECLARED.iter().collect();
    assert_eq!(unique.len(), DECLARED.len());

    let from_enum: Vec<_> = ActionType::all().iter().map(|t| t.as_str()).collect();
    assert_eq!(from_enum, DECLARED);
}

#[test]
fn every_mapping_value_is_declared() {
    for (key, id) in mapping() {
        assert!(DECLARED.contains(id), "{key} maps to undeclared {id}");
    }
}

#[test]
fn mapping_keys_are_exactly_the_expected_set() {
    let keys: Vec<_> = mapping().iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        vec![
            "clear",
            "create",
            "diagramSelected",
            "diagramUpdated",
            "fetch",
            "fetchAll",
            "restore",
            "save",
            "selected",
            "setImmutableCopy",
            "setVersion",
        ]
    );

    let enum_keys: Vec<_> = ActionKey::all().iter().map(|k| k.as_str()).collect();
    assert_eq!(enum_keys, keys);
}

#[test]
fn mapping_agrees_with_resolve() {
    for (key, id) in mapping() {
        assert_eq!(resolve(key), Some(*id));
        assert_eq!(ActionKey::from_key(key).map(ActionKey::identifier), Some(*id));
    }
}

#[test]
fn repeated_reads_are_identical() {
    assert!(std::ptr::eq(mapping(), mapping()));
    assert_eq!(resolve("restore"), resolve("restore"));
    assert_eq!(ActionType::Save.as_str(), ActionType::Save.as_str());
}

#[test]
fn save_resolves_to_save_identifier() {
    assert_eq!(resolve("save"), Some(THREATMODEL_SAVE));
}

#[test]
fn fetch_all_resolves_to_fetch_all_identifier() {
    assert_eq!(resolve("fetchAll"), Some(THREATMODEL_FETCH_ALL));
}

#[test]
fn unknown_key_is_absent() {
    assert_eq!(resolve("doesNotExist"), None);
    assert!("doesNotExist".parse::<ActionKey>().is_err());
}

// Kept without a key on purpose; update this test if a key is ever added.
#[test]
fn contributors_updated_is_not_in_mapping() {
    assert!(DECLARED.contains(&THREATMODEL_CONTRIBUTORS_UPDATED));
    assert!(mapping()
        .iter()
        .all(|(_, id)| *id != THREATMODEL_CONTRIBUTORS_UPDATED));
    assert_eq!(mapping().len(), DECLARED.len() - 1);
}

#[test]
fn identifiers_can_be_read_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| mapping().iter().filter_map(|(k, _)| resolve(k)).count()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 11);
    }
}

#[test]
fn json_actions_parse_and_trace() {
    let incoming = json!([
        { "type": "THREATMODEL_DIAGRAM_SELECTED", "payload": { "id": 1 } },
        { "type": THREATMODEL_SAVE, "payload": { "title": "Demo model" } },
        { "type": THREATMODEL_CONTRIBUTORS_UPDATED, "payload": ["alice", "bob"] },
    ]);
    let actions: Vec<ThreatModelAction> = serde_json::from_value(incoming).unwrap();
    assert_eq!(actions[1].payload["title"], "Demo model");

    let filter = TraceFilter::parse(Some("diagram,save"), None).unwrap();
    let traced: Vec<_> = actions.iter().map(|a| trace_action(&filter, a)).collect();
    assert_eq!(traced, vec![true, true, false]);
}

#[test]
fn unknown_identifier_in_json_is_rejected() {
    let incoming = json!([{ "type": "THREATMODEL_SAVE" }, { "type": "THREATMODEL_DELETE" }]);
    let err = serde_json::from_value::<Vec<ThreatModelAction>>(incoming).unwrap_err();
    assert!(err.to_string().contains("THREATMODEL_DELETE"));
}

#[test]
fn key_built_actions_keep_categories() {
    let actions: Vec<_> = ["diagramUpdated", "setVersion", "setImmutableCopy"]
        .into_iter()
        .map(|key| ThreatModelAction::from_key(key, json!(null)).unwrap())
        .collect();

    assert_category_dispatched!(actions, "diagram");
    assert_category_not_dispatched!(actions[1..], "diagram");
    assert_eq!(count_category!(actions, "threatmodel"), 2);

    let names: Vec<_> = actions.iter().map(ThreatModelAction::identifier).collect();
    assert_eq!(
        names,
        vec![
            THREATMODEL_DIAGRAM_UPDATED,
            THREATMODEL_UPDATE,
            THREATMODEL_SET_IMMUTABLE_COPY
        ]
    );
}
