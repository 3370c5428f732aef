//! Counter representation.
//!
//! A counter goes over the wire as a JSON object with a single entry keyed by
//! its own name: `{"<name>": <value>}`.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Snapshot of one counter, taken after the operation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub name: String,
    pub value: u64,
}

impl Counter {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Serialize for Counter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.value)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn serializes_as_single_key_object() {
        let s = serde_json::to_string(&Counter::new("foo", 0)).unwrap();
        assert_eq!(s, r#"{"foo":0}"#);
    }

    #[test]
    fn key_is_the_name_verbatim() {
        let c = Counter::new("a b/\"c\"", 7);
        let v: serde_json::Value = serde_json::to_value(&c).unwrap();
        assert_eq!(v["a b/\"c\""], 7);
        assert_eq!(v.as_object().unwrap().len(), 1);
    }
}
