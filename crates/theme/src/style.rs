//! Style layers and ordered merging
//!
//! A resolved component style is built from an ordered sequence of partial
//! style mappings. [`flatten`] merges them left to right with a documented
//! precedence: for identical keys, later layers win. The caller-supplied
//! override is always the last layer, so the caller's value always appears
//! in the final mapping.
//!
//! Maps are `BTreeMap`s so that identical inputs serialize to identical
//! output, which keeps resolvers referentially transparent end to end.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Style Values
// =============================================================================

/// A single style property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Numeric value (dimensions, offsets, multipliers)
    Number(f64),
    /// String value (colors, keywords like "grid" or "wrap")
    Str(String),
    /// Boolean value
    Bool(bool),
}

impl StyleValue {
    /// The numeric value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string value, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean value, if this is a bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

// =============================================================================
// Style Maps
// =============================================================================

/// One layer of style properties
pub type StyleMap = BTreeMap<String, StyleValue>;

/// Merge style layers left to right
///
/// Later layers override earlier ones for identical keys. Empty layers are
/// no-ops. The result never contains a key absent from every layer.
pub fn flatten(layers: &[StyleMap]) -> StyleMap {
    let mut merged = StyleMap::new();
    for layer in layers {
        for (key, value) in layer {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Build a style map from key/value pairs
pub fn style_map<const N: usize>(pairs: [(&str, StyleValue); N]) -> StyleMap {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(pairs: &[(&str, StyleValue)]) -> StyleMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    // ==========================================================================
    // Merge Precedence Tests
    // ==========================================================================

    #[test]
    fn test_flatten_later_layer_wins() {
        let base = layer(&[("height", 56.0.into()), ("backgroundColor", "#6200EE".into())]);
        let override_layer = layer(&[("backgroundColor", "#FF0000".into())]);

        let merged = flatten(&[base, override_layer]);
        assert_eq!(
            merged.get("backgroundColor"),
            Some(&StyleValue::Str("#FF0000".to_string()))
        );
        assert_eq!(merged.get("height"), Some(&StyleValue::Number(56.0)));
    }

    #[test]
    fn test_flatten_preserves_unrelated_keys() {
        let a = layer(&[("marginTop", 24.0.into())]);
        let b = layer(&[("elevation", 0.0.into())]);

        let merged = flatten(&[a, b]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_flatten_empty_layers() {
        assert!(flatten(&[]).is_empty());
        assert!(flatten(&[StyleMap::new(), StyleMap::new()]).is_empty());
    }

    #[test]
    fn test_flatten_three_layers_last_wins() {
        let a = layer(&[("x", 1.0.into())]);
        let b = layer(&[("x", 2.0.into())]);
        let c = layer(&[("x", 3.0.into())]);

        let merged = flatten(&[a, b, c]);
        assert_eq!(merged.get("x"), Some(&StyleValue::Number(3.0)));
    }

    #[test]
    fn test_flatten_is_pure() {
        let a = layer(&[("height", 56.0.into())]);
        let b = layer(&[("height", 64.0.into()), ("zIndex", 0.0.into())]);

        let first = flatten(&[a.clone(), b.clone()]);
        let second = flatten(&[a, b]);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    // ==========================================================================
    // Value Tests
    // ==========================================================================

    #[test]
    fn test_style_value_accessors() {
        assert_eq!(StyleValue::Number(4.0).as_number(), Some(4.0));
        assert_eq!(StyleValue::Str("grid".into()).as_str(), Some("grid"));
        assert_eq!(StyleValue::Bool(true).as_bool(), Some(true));
        assert_eq!(StyleValue::Bool(true).as_number(), None);
    }

    #[test]
    fn test_style_map_builder() {
        let map = style_map([("height", 56.0.into()), ("display", "grid".into())]);
        assert_eq!(map.get("height"), Some(&StyleValue::Number(56.0)));
        assert_eq!(map.get("display"), Some(&StyleValue::Str("grid".to_string())));
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_style_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&StyleValue::Number(56.0)).unwrap(), "56.0");
        assert_eq!(
            serde_json::to_string(&StyleValue::Str("#6200EE".into())).unwrap(),
            "\"#6200EE\""
        );
        assert_eq!(serde_json::to_string(&StyleValue::Bool(true)).unwrap(), "true");
    }

    #[test]
    fn test_style_map_deterministic_serialization() {
        // BTreeMap ordering makes the serialized form stable regardless of
        // insertion order
        let mut a = StyleMap::new();
        a.insert("zIndex".to_string(), 0.0.into());
        a.insert("height".to_string(), 56.0.into());

        let mut b = StyleMap::new();
        b.insert("height".to_string(), 56.0.into());
        b.insert("zIndex".to_string(), 0.0.into());

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
