use serde::{Deserialize, Serialize};

use crate::span::Span;

/// A span together with the ordered values that live at it.
///
/// The value type is opaque: records are only ever concatenated, never
/// inspected. Wire shape is `{"positions": [l, r], "values": [...]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionalRecord<T> {
    /// Where this record lives.
    #[serde(rename = "positions")]
    pub span: Span,
    /// Payload, in insertion order.
    pub values: Vec<T>,
}

impl<T> PositionalRecord<T> {
    pub fn new(span: impl Into<Span>, values: Vec<T>) -> Self {
        Self {
            span: span.into(),
            values,
        }
    }

    /// Append `other`'s values after our own. The span is left as is.
    pub fn absorb(&mut self, other: PositionalRecord<T>) {
        self.values.extend(other.values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_keeps_span_and_order() {
        let mut a = PositionalRecord::new((0.0, 10.0), vec![1, 2]);
        let b = PositionalRecord::new((2.0, 6.0), vec![3, 4]);
        a.absorb(b);
        assert_eq!(a.span, Span::new(0.0, 10.0));
        assert_eq!(a.values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn deserialize_wire_shape() {
        let json = r#"{"positions": [0, 5], "values": ["a", "b"]}"#;
        let rec: PositionalRecord<String> = serde_json::from_str(json).unwrap();
        assert_eq!(rec.span, Span::new(0.0, 5.0));
        assert_eq!(rec.values, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn serialize_uses_positions_key() {
        let rec = PositionalRecord::new((1.0, 2.0), vec![7]);
        let value = serde_json::to_value(&rec).unwrap();
        assert!(value.get("positions").is_some());
        assert!(value.get("span").is_none());
        assert_eq!(value["values"], serde_json::json!([7]));
    }

    #[test]
    fn missing_field_rejected() {
        let json = r#"{"positions": [0, 5]}"#;
        assert!(serde_json::from_str::<PositionalRecord<i32>>(json).is_err());
        let json = r#"{"values": [1]}"#;
        assert!(serde_json::from_str::<PositionalRecord<i32>>(json).is_err());
    }

    #[test]
    fn heterogeneous_values() {
        let json = r#"{"positions": [0, 1], "values": [1, "two", null, {"k": 3}]}"#;
        let rec: PositionalRecord<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(rec.values.len(), 4);
    }
}
