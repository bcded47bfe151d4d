//! Strata Runner - orchestrates the migration catalog
//!
//! The runner:
//! - Holds migration units in ascending version order, validated at
//!   registration
//! - Selects the pending units for a document's current version
//! - Applies them one at a time, feeding each output into the next input
//! - Halts on the first failure and discards the partial result
//!
//! # Example
//!
//! ```rust
//! use strata_core::VersionedDocument;
//! use strata_runner::Migrator;
//!
//! # fn example() -> Result<(), strata_runner::MigratorError> {
//! let migrator = Migrator::with_defaults();
//! let document = VersionedDocument::new(80, serde_json::json!({}));
//!
//! let migrated = migrator.run(document)?;
//! assert_eq!(Some(migrated.version()), migrator.latest_version());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod error;
pub mod migrator;

pub use error::MigratorError;
pub use migrator::Migrator;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
