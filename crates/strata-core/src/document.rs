//! The persisted versioned-document envelope
//!
//! Provides [`VersionedDocument`], the top-level structure pairing a schema
//! version with controller-keyed state, exactly as it is serialized for
//! persistence: `{ "meta": { "version": N }, "data": { ... } }`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema metadata for a persisted document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Schema revision the `data` tree conforms to; monotonically increasing
    pub version: u64,
}

/// The persisted envelope: schema version plus controller-keyed state
///
/// `data` maps controller name to that controller's state, an opaque nested
/// JSON structure. Individual migrations read into it defensively; nothing in
/// the envelope assumes any particular controller is present.
///
/// `Clone` performs the full structural deep copy the migration contract
/// relies on: a cloned document shares no mutable substructure with the
/// original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedDocument {
    /// State metadata
    pub meta: DocumentMeta,
    /// Persisted state, keyed by controller
    pub data: Value,
}

impl VersionedDocument {
    /// Create a document at the given schema version
    #[inline]
    #[must_use]
    pub fn new(version: u64, data: Value) -> Self {
        Self {
            meta: DocumentMeta { version },
            data,
        }
    }

    /// Current schema version
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.meta.version
    }

    /// Look up one controller's sub-state, if present
    #[must_use]
    pub fn controller(&self, name: &str) -> Option<&Value> {
        self.data.as_object().and_then(|data| data.get(name))
    }
}
