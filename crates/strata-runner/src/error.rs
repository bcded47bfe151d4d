//! Error types for the migration runner

use strata_core::MigrationError;

/// Failure raised while registering or running the catalog
#[derive(Debug, thiserror::Error)]
pub enum MigratorError {
    /// Registered versions must be strictly increasing
    #[error("migration version {next} must be greater than previously registered version {previous}")]
    NonMonotonicVersion {
        /// Highest version already registered
        previous: u64,
        /// Version of the rejected unit
        next: u64,
    },

    /// A unit failed; the run is aborted and the partial result discarded
    #[error("migration to version {version} failed")]
    MigrationFailed {
        /// Target version of the failing unit
        version: u64,
        /// The unit's failure
        #[source]
        source: MigrationError,
    },

    /// A unit returned a document at a version other than its own target
    #[error("migration unit for version {expected} returned a document at version {actual}")]
    VersionMismatch {
        /// The unit's target version
        expected: u64,
        /// The version the unit actually produced
        actual: u64,
    },
}
