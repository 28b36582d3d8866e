use std::collections::BTreeMap;

use serde::Serialize;

/// Per-field validation messages, keyed by the wire field name.
///
/// Uses an ordered map so rendered and serialized output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a message to a field, preserving any messages already there
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields that carry at least one message
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_accumulates_per_field() {
        let mut errors = FieldErrors::new();
        assert!(errors.is_empty());

        errors.push("email", "first");
        errors.push("email", "second");
        errors.push("plan", "third");

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get("email"),
            Some(&["first".to_string(), "second".to_string()][..])
        );
        assert!(errors.get("password").is_none());
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.push("email", "invalid");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "email": ["invalid"] }));
    }
}
