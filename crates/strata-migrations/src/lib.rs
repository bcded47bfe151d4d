//! Strata Migrations - the ordered catalog of schema transitions
//!
//! Each module here is one migration unit: a self-contained, version-tagged
//! reshaping of controller state. Units are registered in ascending version
//! order and never revised once shipped; a schema change gets a new unit at
//! the next version.
//!
//! Current catalog:
//! - v81 [`NetworkConfigurationsMigration`]: move the RPC endpoint list from
//!   the preferences controller to the network controller, keyed by fresh ids
//! - v82 [`NetworkStatusMigration`]: collapse the legacy `network` field into
//!   the two-valued `networkStatus`

#![warn(unreachable_pub)]

pub mod network_configurations;
pub mod network_status;

pub use network_configurations::NetworkConfigurationsMigration;
pub use network_status::NetworkStatusMigration;

use std::sync::Arc;

use strata_core::{IdGenerator, Migration};

/// Build the full catalog in ascending version order
///
/// The identifier generator is injected so callers can run the catalog with a
/// deterministic sequence under test.
#[must_use]
pub fn default_migrations(ids: Arc<dyn IdGenerator>) -> Vec<Box<dyn Migration>> {
    vec![
        Box::new(NetworkConfigurationsMigration::new(ids)),
        Box::new(NetworkStatusMigration::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::UuidIdGenerator;

    #[test]
    fn catalog_versions_are_strictly_ascending() {
        let catalog = default_migrations(Arc::new(UuidIdGenerator::new()));
        assert!(!catalog.is_empty());

        let versions: Vec<u64> = catalog.iter().map(|unit| unit.version()).collect();
        let mut sorted = versions.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(versions, sorted);
    }
}
