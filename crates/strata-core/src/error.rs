//! Error types for migration units
//!
//! Malformed or missing state shape is never an error: guards degrade the
//! transform to a no-op so loading persisted state cannot crash. Only a
//! collaborator failing inside a unit surfaces as [`MigrationError`], and it
//! propagates to the runner rather than being suppressed locally.

/// Failure raised by a migration unit
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// A collaborator failed while transforming the document
    #[error("migration to version {version} failed: {message}")]
    TransformFailed {
        /// Target version of the failing unit
        version: u64,
        /// Collaborator failure detail
        message: String,
    },
}

impl MigrationError {
    /// Create a transform failure for the given target version
    #[inline]
    #[must_use]
    pub fn transform_failed(version: u64, message: impl Into<String>) -> Self {
        Self::TransformFailed {
            version,
            message: message.into(),
        }
    }
}
