//! Optional structural checks over rendered card JSON.
//!
//! Nothing here runs during building or rendering; callers opt in.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::node::NodeKind;

pub const MISSING_TYPE: &str = "missing_type";
pub const UNKNOWN_TYPE: &str = "unknown_type";
pub const NOT_AN_OBJECT: &str = "not_an_object";

/// Element arrays that hold typed elements.
const ELEMENT_KEYS: [&str; 3] = ["items", "columns", "actions"];

/// A single finding. `path` points at the element, e.g. `body[0].items[2]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintWarning {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl LintWarning {
    fn at(code: &str, message: String, path: &str) -> Self {
        Self {
            code: code.to_string(),
            message: Some(message),
            path: Some(path.to_string()),
        }
    }
}

/// True when `element` is an object whose `type` is part of the builder's
/// vocabulary.
pub fn is_known_element(element: &Value) -> bool {
    element
        .get("type")
        .and_then(Value::as_str)
        .and_then(NodeKind::parse)
        .is_some()
}

/// Check every element reachable from `body` and `actions`, including
/// nested show-card payloads.
pub fn lint_card(card: &Value) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    lint_card_at(card, "", &mut warnings);
    warnings
}

fn lint_card_at(card: &Value, prefix: &str, warnings: &mut Vec<LintWarning>) {
    for key in ["body", "actions"] {
        if let Some(elements) = card.get(key).and_then(Value::as_array) {
            lint_elements(elements, &join(prefix, key), warnings);
        }
    }
}

fn lint_elements(elements: &[Value], path: &str, warnings: &mut Vec<LintWarning>) {
    for (index, element) in elements.iter().enumerate() {
        lint_element(element, &format!("{path}[{index}]"), warnings);
    }
}

fn lint_element(element: &Value, path: &str, warnings: &mut Vec<LintWarning>) {
    let Some(object) = element.as_object() else {
        warnings.push(LintWarning::at(
            NOT_AN_OBJECT,
            "element is not a JSON object".to_string(),
            path,
        ));
        return;
    };

    match object.get("type").and_then(Value::as_str) {
        None => warnings.push(LintWarning::at(
            MISSING_TYPE,
            "element has no string `type`".to_string(),
            path,
        )),
        Some(kind) if NodeKind::parse(kind).is_none() => warnings.push(LintWarning::at(
            UNKNOWN_TYPE,
            format!("unknown element type `{kind}`"),
            path,
        )),
        Some(_) => {}
    }

    for key in ELEMENT_KEYS {
        if let Some(children) = object.get(key).and_then(Value::as_array) {
            lint_elements(children, &join(path, key), warnings);
        }
    }
    if let Some(card) = object.get("card").filter(|card| card.is_object()) {
        lint_card_at(card, &join(path, "card"), warnings);
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}
