//! Shape guards for untrusted persisted state
//!
//! Every transform reads into the document defensively: presence and type are
//! checked before a field is touched, and a failed check short-circuits the
//! transform to a no-op instead of an error. These helpers are the vocabulary
//! those guard clauses are written in.

use serde_json::Value;

/// Check that a value is a JSON object (mapping)
#[inline]
#[must_use]
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// Check that a value is a JSON array (ordered sequence)
#[inline]
#[must_use]
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Check that a value is an object carrying the given key
///
/// Returns `false` for non-object values rather than failing, so a guard can
/// probe arbitrarily malformed state in one expression.
#[must_use]
pub fn has_property(value: &Value, key: &str) -> bool {
    value.as_object().is_some_and(|map| map.contains_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn is_object_accepts_only_mappings() {
        assert!(is_object(&json!({})));
        assert!(is_object(&json!({"k": 1})));
        assert!(!is_object(&json!([])));
        assert!(!is_object(&json!("text")));
        assert!(!is_object(&json!(null)));
    }

    #[test]
    fn is_array_accepts_only_sequences() {
        assert!(is_array(&json!([])));
        assert!(is_array(&json!([1, 2])));
        assert!(!is_array(&json!({})));
        assert!(!is_array(&json!(42)));
    }

    #[test]
    fn has_property_checks_presence() {
        assert!(has_property(&json!({"k": 1}), "k"));
        assert!(has_property(&json!({"k": null}), "k"));
        assert!(!has_property(&json!({"k": 1}), "other"));
    }

    #[test]
    fn has_property_is_false_for_non_objects() {
        assert!(!has_property(&json!([1, 2]), "0"));
        assert!(!has_property(&json!("k"), "k"));
        assert!(!has_property(&json!(null), "k"));
    }
}
