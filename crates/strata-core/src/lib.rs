//! Strata Core - versioned document model and migration contract
//!
//! The building blocks of the migration pipeline:
//! - [`VersionedDocument`]: the persisted envelope pairing a schema version
//!   with controller-keyed state
//! - [`Migration`]: the contract one schema transition implements
//! - [`IdGenerator`]: the injected unique-identifier collaborator
//! - Value guards for defensive shape checks on untrusted persisted state
//!
//! # Example
//!
//! ```rust
//! use strata_core::{DocumentMeta, VersionedDocument};
//!
//! let document = VersionedDocument::new(80, serde_json::json!({
//!     "PreferencesController": { "theme": "dark" },
//! }));
//!
//! assert_eq!(document.version(), 80);
//! assert!(document.controller("PreferencesController").is_some());
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod document;
pub mod error;
pub mod idgen;
pub mod migration;
pub mod value;

// Re-exports for convenience
pub use document::{DocumentMeta, VersionedDocument};
pub use error::MigrationError;
pub use idgen::{IdGenerator, UuidIdGenerator};
pub use migration::Migration;
pub use value::{has_property, is_array, is_object};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
