//! v81: move the RPC endpoint list onto the network controller
//!
//! `PreferencesController.frequentRpcListDetail` was an ordered array of RPC
//! endpoint entries. This unit relocates it to
//! `NetworkController.networkConfigurations` as a mapping keyed by freshly
//! generated unique identifiers, renaming `nickname` to `chainName` on each
//! entry along the way.

use std::sync::Arc;

use serde_json::{Map, Value};
use strata_core::{is_object, IdGenerator, Migration, MigrationError, VersionedDocument};

/// Target schema version of this unit
pub const VERSION: u64 = 81;

const SOURCE_CONTROLLER: &str = "PreferencesController";
const DESTINATION_CONTROLLER: &str = "NetworkController";
const MOVED_FIELD: &str = "frequentRpcListDetail";
const MAPPING_KEY: &str = "networkConfigurations";
const RENAMED_FROM: &str = "nickname";
const RENAMED_TO: &str = "chainName";

/// Move-and-reshape unit: endpoint array to identifier-keyed mapping
#[derive(Debug)]
pub struct NetworkConfigurationsMigration {
    ids: Arc<dyn IdGenerator>,
}

impl NetworkConfigurationsMigration {
    /// Create the unit with an injected identifier generator
    #[inline]
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl Migration for NetworkConfigurationsMigration {
    fn version(&self) -> u64 {
        VERSION
    }

    fn migrate(&self, original: &VersionedDocument) -> Result<VersionedDocument, MigrationError> {
        let mut document = original.clone();
        document.meta.version = VERSION;
        transform_state(&mut document.data, self.ids.as_ref());
        Ok(document)
    }
}

/// Relocate the endpoint list, or leave `state` untouched when the shape
/// does not match.
///
/// Guard: the source controller must exist, be an object, and carry the moved
/// field as an array. Anything else is a no-op.
fn transform_state(state: &mut Value, ids: &dyn IdGenerator) {
    let eligible = state.get(SOURCE_CONTROLLER).is_some_and(|source| {
        is_object(source) && source.get(MOVED_FIELD).is_some_and(Value::is_array)
    });
    if !eligible {
        return;
    }

    let Some(root) = state.as_object_mut() else {
        return;
    };

    // Guard holds: the source is an object and the field is an array.
    let Some(Value::Array(entries)) = root
        .get_mut(SOURCE_CONTROLLER)
        .and_then(Value::as_object_mut)
        .and_then(|source| source.remove(MOVED_FIELD))
    else {
        return;
    };

    // One identifier per entry, in array order, so a stubbed generator
    // produces deterministic keys.
    let mut configurations = Map::new();
    for entry in &entries {
        configurations.insert(ids.generate(), reshape_endpoint(entry));
    }

    let destination = root
        .entry(DESTINATION_CONTROLLER)
        .or_insert_with(|| Value::Object(Map::new()));
    if !is_object(destination) {
        *destination = Value::Object(Map::new());
    }
    if let Some(destination) = destination.as_object_mut() {
        destination.insert(MAPPING_KEY.to_owned(), Value::Object(configurations));
    }
}

/// Copy every field except `nickname`, then re-add its value as `chainName`
fn reshape_endpoint(entry: &Value) -> Value {
    let mut record = Map::new();
    if let Some(fields) = entry.as_object() {
        for (key, value) in fields {
            if key != RENAMED_FROM {
                record.insert(key.clone(), value.clone());
            }
        }
        if let Some(nickname) = fields.get(RENAMED_FROM) {
            record.insert(RENAMED_TO.to_owned(), nickname.clone());
        }
    }
    Value::Object(record)
}
