//! Testing utilities for the Strata workspace
//!
//! Shared fixtures and a deterministic identifier generator for exercising
//! migrations without random keys.

#![allow(missing_docs)]

use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{json, Value};
use strata_core::{IdGenerator, VersionedDocument};

/// Deterministic [`IdGenerator`]: emits `prefix-1`, `prefix-2`, ... in call
/// order, so tests can predict the keys a transform produces.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    prefix: String,
    counter: AtomicUsize,
}

impl SequenceIdGenerator {
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            counter: AtomicUsize::new(0),
        }
    }

    /// Number of identifiers handed out so far
    #[must_use]
    pub fn issued(&self) -> usize {
        self.counter.load(Ordering::SeqCst)
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

pub fn document_with(version: u64, data: Value) -> VersionedDocument {
    VersionedDocument::new(version, data)
}

pub fn empty_document(version: u64) -> VersionedDocument {
    VersionedDocument::new(version, json!({}))
}

pub fn localhost_endpoint_entry() -> Value {
    json!({
        "rpcUrl": "http://localhost:8545",
        "chainId": "0x539",
        "ticker": "ETH",
        "nickname": "Localhost 8545",
        "rpcPrefs": {},
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_generator_counts_from_one() {
        let generator = SequenceIdGenerator::new("id");
        assert_eq!(generator.generate(), "id-1");
        assert_eq!(generator.generate(), "id-2");
        assert_eq!(generator.issued(), 2);
    }

    #[test]
    fn empty_document_has_object_data() {
        let document = empty_document(80);
        assert_eq!(document.version(), 80);
        assert_eq!(document.data, json!({}));
    }
}
