//! Unique-identifier generation
//!
//! Transforms that key new mappings by fresh identifiers call through the
//! [`IdGenerator`] trait rather than a hard-coded uuid call, so tests can
//! substitute a deterministic sequence without changing the transform's
//! control flow. The contract is that a transform calls [`IdGenerator::generate`]
//! exactly once per element needing a key, in a fixed order.

use uuid::Uuid;

/// Injected source of globally-unique identifiers
pub trait IdGenerator: Send + Sync + std::fmt::Debug {
    /// Produce the next unique identifier
    fn generate(&self) -> String;
}

/// Production generator: random 128-bit uuid v4, canonical hyphenated form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    /// Create a new generator
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_generator_emits_hyphenated_form() {
        let id = UuidIdGenerator::new().generate();
        assert_eq!(id.len(), 36);
        let hyphens: Vec<usize> = id
            .char_indices()
            .filter(|&(_, c)| c == '-')
            .map(|(i, _)| i)
            .collect();
        assert_eq!(hyphens, vec![8, 13, 18, 23]);
    }

    #[test]
    fn uuid_generator_emits_distinct_ids() {
        let generator = UuidIdGenerator::new();
        assert_ne!(generator.generate(), generator.generate());
    }

    #[test]
    fn generator_is_object_safe() {
        let generator: Box<dyn IdGenerator> = Box::new(UuidIdGenerator::new());
        assert!(!generator.generate().is_empty());
    }
}
