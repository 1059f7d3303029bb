//! Read-only queries over rendered card JSON.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::document::Document;
use crate::node::NodeKind;

/// Collect every `Input.*` element id in the card body, mapped to its
/// `value` (or `null` when the input carries none).
///
/// Nested containers, columns and show-card payloads are searched too. A
/// repeated id keeps the value of the last occurrence.
pub fn extract_input_values(card: &Value) -> BTreeMap<String, Value> {
    let mut values = BTreeMap::new();
    if let Some(body) = card.get("body").and_then(Value::as_array) {
        for element in body {
            collect_inputs(element, &mut values);
        }
    }
    values
}

fn collect_inputs(element: &Value, values: &mut BTreeMap<String, Value>) {
    let Some(object) = element.as_object() else {
        return;
    };

    let is_input = object
        .get("type")
        .and_then(Value::as_str)
        .and_then(NodeKind::parse)
        .is_some_and(NodeKind::is_input);
    if is_input {
        if let Some(id) = object.get("id").and_then(Value::as_str) {
            let value = object.get("value").cloned().unwrap_or(Value::Null);
            values.insert(id.to_string(), value);
        }
    }

    for nested in object.values() {
        match nested {
            Value::Array(items) => {
                for item in items {
                    collect_inputs(item, values);
                }
            }
            Value::Object(_) => collect_inputs(nested, values),
            _ => {}
        }
    }
}

/// Top-level element counts of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CardSize {
    pub body_count: usize,
    pub actions_count: usize,
}

pub fn card_size(card: &Value) -> CardSize {
    let count = |key: &str| card.get(key).and_then(Value::as_array).map_or(0, Vec::len);
    CardSize {
        body_count: count("body"),
        actions_count: count("actions"),
    }
}

impl Document {
    pub fn size(&self) -> CardSize {
        CardSize {
            body_count: self.body().len(),
            actions_count: self.actions().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_nested_inputs() {
        let card = json!({
            "type": "AdaptiveCard",
            "body": [
                {"type": "Input.Text", "id": "name", "value": "Ada"},
                {"type": "Container", "items": [
                    {"type": "ColumnSet", "columns": [
                        {"type": "Column", "items": [
                            {"type": "Input.Toggle", "id": "subscribe", "value": "true"}
                        ]}
                    ]}
                ]},
                {"type": "Input.Number", "id": "age"},
                {"type": "TextBlock", "id": "not-an-input", "text": "hi"}
            ]
        });
        let values = extract_input_values(&card);
        assert_eq!(values.len(), 3);
        assert_eq!(values["name"], json!("Ada"));
        assert_eq!(values["subscribe"], json!("true"));
        assert_eq!(values["age"], Value::Null);
    }

    #[test]
    fn unknown_input_types_are_skipped() {
        let card = json!({
            "body": [
                {"type": "Input.Rating", "id": "stars", "value": 4},
                {"type": "Input.Date", "id": "due", "value": "2024-01-31"}
            ]
        });
        let values = extract_input_values(&card);
        assert_eq!(values.len(), 1);
        assert_eq!(values["due"], json!("2024-01-31"));
    }

    #[test]
    fn actions_are_not_searched() {
        let card = json!({
            "body": [],
            "actions": [{"type": "Input.Text", "id": "hidden"}]
        });
        assert!(extract_input_values(&card).is_empty());
    }

    #[test]
    fn counts_top_level_elements() {
        let card = json!({
            "body": [{"type": "TextBlock"}, {"type": "Container", "items": [{"type": "Image"}]}],
            "actions": [{"type": "Action.Submit"}]
        });
        assert_eq!(
            card_size(&card),
            CardSize {
                body_count: 2,
                actions_count: 1
            }
        );
        assert_eq!(card_size(&json!({})), CardSize::default());
    }

    #[test]
    fn document_size_matches_rendered_size() {
        let mut document = Document::default();
        document.push_body(crate::elements::text_block("a"));
        let rendered = document.render().expect("render");
        assert_eq!(document.size(), card_size(&rendered));
    }
}
