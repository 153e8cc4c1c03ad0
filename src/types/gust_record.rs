//! A single observation as delivered by the CDO API.
//!
//! The API owns the schema, so a record is an ordered list of field names and
//! loosely typed values rather than a fixed struct.

use serde_json::{Map, Value};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A scalar field value.
///
/// Nested JSON (arrays, objects) is kept as its JSON text so every value has
/// a flat representation in a table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum GustValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl GustValue {
    pub fn is_null(&self) -> bool {
        matches!(self, GustValue::Null)
    }
}

impl From<Value> for GustValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => GustValue::Null,
            Value::Bool(b) => GustValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => GustValue::Integer(i),
                // u64 above i64::MAX lands here as well
                None => n.as_f64().map_or(GustValue::Null, GustValue::Float),
            },
            Value::String(s) => GustValue::Text(s),
            nested @ (Value::Array(_) | Value::Object(_)) => GustValue::Text(nested.to_string()),
        }
    }
}

impl From<&str> for GustValue {
    fn from(value: &str) -> Self {
        GustValue::Text(value.to_string())
    }
}

impl From<i64> for GustValue {
    fn from(value: i64) -> Self {
        GustValue::Integer(value)
    }
}

impl From<f64> for GustValue {
    fn from(value: f64) -> Self {
        GustValue::Float(value)
    }
}

impl From<bool> for GustValue {
    fn from(value: bool) -> Self {
        GustValue::Bool(value)
    }
}

/// Renders the value the way it appears in a text cell. `Null` renders empty.
impl Display for GustValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GustValue::Null => Ok(()),
            GustValue::Bool(b) => write!(f, "{}", b),
            GustValue::Integer(i) => write!(f, "{}", i),
            GustValue::Float(x) => write!(f, "{}", x),
            GustValue::Text(s) => f.write_str(s),
        }
    }
}

/// One observation: field names in the order the API sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GustRecord {
    fields: Vec<(String, GustValue)>,
}

impl GustRecord {
    pub fn get(&self, key: &str) -> Option<&GustValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for GustRecord {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

/// Later duplicates of a key replace the earlier value in place.
impl<K: Into<String>, V: Into<GustValue>> FromIterator<(K, V)> for GustRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields: Vec<(String, GustValue)> = Vec::new();
        for (key, value) in iter {
            let key = key.into();
            let value = value.into();
            match fields.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => fields.push((key, value)),
            }
        }
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_keeps_api_field_order() {
        let value = json!({
            "station": "GHCND:USW00093193",
            "date": "2020-03-01T00:00:00",
            "datatype": "WSF2",
            "attributes": ",,W,",
            "value": 12.3
        });
        let Value::Object(map) = value else {
            panic!("expected an object");
        };

        let record = GustRecord::from(map);
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, ["station", "date", "datatype", "attributes", "value"]);
        assert_eq!(record.get("value"), Some(&GustValue::Float(12.3)));
        assert_eq!(record.get("datatype"), Some(&GustValue::Text("WSF2".into())));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_value_conversion_from_json() {
        assert_eq!(GustValue::from(json!(null)), GustValue::Null);
        assert_eq!(GustValue::from(json!(true)), GustValue::Bool(true));
        assert_eq!(GustValue::from(json!(22)), GustValue::Integer(22));
        assert_eq!(GustValue::from(json!(-3.5)), GustValue::Float(-3.5));
        assert_eq!(GustValue::from(json!("W")), GustValue::Text("W".into()));
        assert_eq!(
            GustValue::from(json!([1, 2])),
            GustValue::Text("[1,2]".into())
        );
        assert_eq!(
            GustValue::from(json!(u64::MAX)),
            GustValue::Float(u64::MAX as f64)
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(GustValue::Null.to_string(), "");
        assert_eq!(GustValue::Integer(10).to_string(), "10");
        assert_eq!(GustValue::Float(12.3).to_string(), "12.3");
        assert_eq!(GustValue::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_from_iter_replaces_duplicate_keys() {
        let record: GustRecord = [("value", 1i64), ("date", 2), ("value", 3)]
            .into_iter()
            .collect();
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("value"), Some(&GustValue::Integer(3)));
        assert_eq!(record.keys().next(), Some("value"));
    }
}
