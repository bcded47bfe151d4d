//! v82: collapse the legacy `network` field into `networkStatus`
//!
//! `NetworkController.network` held either the sentinel `"loading"` or an
//! opaque network id. Consumers only ever cared about the two cases, so this
//! unit collapses the field into the two-valued `networkStatus`. The legacy
//! field is retained for consumers that still read it.

use serde_json::Value;
use strata_core::{has_property, Migration, MigrationError, VersionedDocument};

/// Target schema version of this unit
pub const VERSION: u64 = 82;

const CONTROLLER: &str = "NetworkController";
const LEGACY_FIELD: &str = "network";
const STATUS_FIELD: &str = "networkStatus";
const LOADING: &str = "loading";
const ACTIVE: &str = "active";

/// Rename/collapse unit: legacy network id to two-valued status
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkStatusMigration;

impl NetworkStatusMigration {
    /// Create the unit
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Migration for NetworkStatusMigration {
    fn version(&self) -> u64 {
        VERSION
    }

    fn migrate(&self, original: &VersionedDocument) -> Result<VersionedDocument, MigrationError> {
        let mut document = original.clone();
        document.meta.version = VERSION;
        transform_state(&mut document.data);
        Ok(document)
    }
}

/// Derive `networkStatus` from the legacy field, or leave `state` untouched
/// when the controller is absent, malformed, or already carries the status.
///
/// The "already carries the status" branch makes the transform idempotent.
fn transform_state(state: &mut Value) {
    let eligible = state
        .get(CONTROLLER)
        .is_some_and(|controller| controller.is_object() && !has_property(controller, STATUS_FIELD));
    if !eligible {
        return;
    }

    let Some(controller) = state.get_mut(CONTROLLER).and_then(Value::as_object_mut) else {
        return;
    };

    let status = match controller.get(LEGACY_FIELD) {
        Some(Value::String(network)) if network == LOADING => LOADING,
        _ => ACTIVE,
    };
    controller.insert(STATUS_FIELD.to_owned(), Value::String(status.to_owned()));
}
