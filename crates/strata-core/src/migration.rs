//! The migration-unit contract
//!
//! One schema transition is one [`Migration`]: a version-tagged, total
//! transformation from a document at the preceding version to a document at
//! the unit's target version.

use crate::document::VersionedDocument;
use crate::error::MigrationError;

/// One version-tagged schema transition
///
/// # Contract
/// - `migrate` deep-copies the input before touching anything; the caller's
///   document is never mutated, so consumers holding the pre-migration
///   snapshot stay valid.
/// - `migrate` is total on shape: an unrecognized or malformed `data` tree
///   degrades to a version-bump-only no-op, never an error. Only a
///   collaborator failure returns `Err`, and the runner halts on it.
/// - No side effects: no I/O, no global state, output value only.
///
/// The unit does not verify the input's version; feeding each unit a document
/// at the immediately preceding version is the runner's job.
pub trait Migration: Send + Sync + std::fmt::Debug {
    /// Target schema version this unit migrates a document to
    ///
    /// Unique within a catalog and strictly greater than the previous unit's.
    fn version(&self) -> u64;

    /// Apply the transition, returning a new independent document
    ///
    /// # Errors
    /// Only when a collaborator fails; never for malformed input shape.
    fn migrate(&self, original: &VersionedDocument) -> Result<VersionedDocument, MigrationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Minimal conforming unit: clone, bump, leave `data` alone.
    #[derive(Debug)]
    struct BumpOnly {
        version: u64,
    }

    impl Migration for BumpOnly {
        fn version(&self) -> u64 {
            self.version
        }

        fn migrate(
            &self,
            original: &VersionedDocument,
        ) -> Result<VersionedDocument, MigrationError> {
            let mut document = original.clone();
            document.meta.version = self.version;
            Ok(document)
        }
    }

    #[test]
    fn unit_bumps_version_and_preserves_data() {
        let unit = BumpOnly { version: 81 };
        let original = VersionedDocument::new(80, json!({"A": {"k": 1}}));

        let migrated = unit.migrate(&original).unwrap();

        assert_eq!(migrated.version(), 81);
        assert_eq!(migrated.data, original.data);
    }

    #[test]
    fn unit_leaves_the_caller_document_untouched() {
        let unit = BumpOnly { version: 81 };
        let original = VersionedDocument::new(80, json!({"A": {}}));
        let snapshot = original.clone();

        let _ = unit.migrate(&original).unwrap();

        assert_eq!(original, snapshot);
    }

    #[test]
    fn unit_is_object_safe() {
        let unit: Box<dyn Migration> = Box::new(BumpOnly { version: 81 });
        assert_eq!(unit.version(), 81);
    }
}
