//! Ordered migration catalog and sequential application
//!
//! Provides [`Migrator`], the orchestrator that advances a persisted document
//! one schema version at a time. Units register in strictly ascending version
//! order; a run applies every unit above the document's current version and
//! aborts on the first failure without handing back a partial result.

use std::sync::Arc;

use strata_core::{IdGenerator, Migration, UuidIdGenerator, VersionedDocument};
use strata_migrations::default_migrations;

use crate::error::MigratorError;

/// Ordered registry of migration units
#[derive(Debug, Default)]
pub struct Migrator {
    migrations: Vec<Box<dyn Migration>>,
}

impl Migrator {
    /// Create an empty migrator
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            migrations: Vec::new(),
        }
    }

    /// Create a migrator holding the shipped catalog with the production
    /// uuid-v4 identifier generator
    #[must_use]
    pub fn with_defaults() -> Self {
        // The shipped catalog is ordered by construction; strata-migrations
        // pins that with its own test.
        Self {
            migrations: default_migrations(Arc::new(UuidIdGenerator::new())),
        }
    }

    /// Create a migrator from an explicit unit sequence
    ///
    /// # Errors
    /// [`MigratorError::NonMonotonicVersion`] if the sequence is not strictly
    /// ascending by version.
    pub fn with_migrations(
        migrations: Vec<Box<dyn Migration>>,
    ) -> Result<Self, MigratorError> {
        let mut migrator = Self::new();
        for migration in migrations {
            migrator.register(migration)?;
        }
        Ok(migrator)
    }

    /// Create a migrator holding the shipped catalog with an injected
    /// identifier generator (deterministic runs under test)
    #[must_use]
    pub fn with_default_catalog(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            migrations: default_migrations(ids),
        }
    }

    /// Register one unit at the end of the catalog
    ///
    /// # Errors
    /// [`MigratorError::NonMonotonicVersion`] unless the unit's version is
    /// strictly greater than every previously registered version.
    pub fn register(&mut self, migration: Box<dyn Migration>) -> Result<(), MigratorError> {
        let next = migration.version();
        if let Some(previous) = self.latest_version() {
            if next <= previous {
                return Err(MigratorError::NonMonotonicVersion { previous, next });
            }
        }
        self.migrations.push(migration);
        Ok(())
    }

    /// Number of registered units
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.migrations.len()
    }

    /// Check if the catalog is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.migrations.is_empty()
    }

    /// Highest registered target version, if any
    #[must_use]
    pub fn latest_version(&self) -> Option<u64> {
        self.migrations.last().map(|migration| migration.version())
    }

    /// Number of units a document at `version` still has ahead of it
    #[must_use]
    pub fn pending_count(&self, version: u64) -> usize {
        self.migrations
            .iter()
            .filter(|migration| migration.version() > version)
            .count()
    }

    /// Apply every pending unit in ascending order
    ///
    /// Each unit's output becomes the next unit's input. A document already
    /// at or beyond the latest registered version is returned unchanged.
    ///
    /// # Errors
    /// - [`MigratorError::MigrationFailed`] when a unit fails; the sequence
    ///   halts and the partially migrated document is discarded
    /// - [`MigratorError::VersionMismatch`] when a unit returns a document
    ///   whose version is not the unit's own target
    pub fn run(&self, document: VersionedDocument) -> Result<VersionedDocument, MigratorError> {
        let starting_version = document.version();
        let mut current = document;
        let mut applied = 0usize;

        for migration in &self.migrations {
            let target = migration.version();
            if target <= current.version() {
                continue;
            }

            tracing::debug!("Applying migration to version {}", target);
            let migrated = migration
                .migrate(&current)
                .map_err(|source| MigratorError::MigrationFailed {
                    version: target,
                    source,
                })?;

            if migrated.version() != target {
                tracing::error!(
                    "Migration unit for version {} produced version {}",
                    target,
                    migrated.version()
                );
                return Err(MigratorError::VersionMismatch {
                    expected: target,
                    actual: migrated.version(),
                });
            }

            current = migrated;
            applied += 1;
        }

        if applied > 0 {
            tracing::info!(
                "Migrated state from version {} to {} ({} units applied)",
                starting_version,
                current.version(),
                applied
            );
        }
        Ok(current)
    }
}
