//! Primitive node constructors.
//!
//! Each function takes the fields that define the element and returns a
//! fresh [`Node`]; every other option goes through [`Node::with`] or
//! [`Node::with_options`] and is emitted unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::Document;
use crate::errors::DerivationError;
use crate::node::{Attr, Attributes, Node, NodeKind};

/// Payload field a chart's default type is derived from.
pub const CHART_TYPE_FIELD: &str = "chartType";
/// Chart attribute holding the derived default type.
pub const DEFAULT_CHART_TYPE_ATTR: &str = "defaultChartType";

pub fn text_block(text: impl Into<String>) -> Node {
    Node::new(NodeKind::Text).with("text", text.into())
}

pub fn image(url: impl Into<String>) -> Node {
    Node::new(NodeKind::Image).with("url", url.into())
}

pub fn container(items: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::Container).with("items", items.into_iter().collect::<Vec<_>>())
}

pub fn column(items: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::Column).with("items", items.into_iter().collect::<Vec<_>>())
}

pub fn column_set(columns: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::ColumnSet).with("columns", columns.into_iter().collect::<Vec<_>>())
}

pub fn action_set(actions: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::ActionSet).with("actions", actions.into_iter().collect::<Vec<_>>())
}

/// One title/value row of a fact set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

impl Fact {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

impl From<Fact> for Attr {
    fn from(fact: Fact) -> Self {
        Attr::Map(
            Attributes::new()
                .with("title", fact.title)
                .with("value", fact.value),
        )
    }
}

pub fn fact_set(facts: impl IntoIterator<Item = Fact>) -> Node {
    let facts: Vec<Attr> = facts.into_iter().map(Attr::from).collect();
    Node::new(NodeKind::FactSet).with("facts", facts)
}

pub fn action_submit(title: impl Into<String>) -> Node {
    Node::new(NodeKind::ActionSubmit).with("title", title.into())
}

pub fn action_open_url(title: impl Into<String>, url: impl Into<String>) -> Node {
    Node::new(NodeKind::ActionOpenUrl)
        .with("title", title.into())
        .with("url", url.into())
}

pub fn action_show_card(title: impl Into<String>, card: Document) -> Node {
    Node::new(NodeKind::ActionShowCard)
        .with("title", title.into())
        .with("card", card)
}

/// Modal trigger. `style` defaults to `default` and `size` to `small`;
/// an empty icon or title is left out.
pub fn action_show_modal(icon_url: Option<&str>, title: Option<&str>) -> Node {
    Node::new(NodeKind::ActionShowModal)
        .with("style", "default")
        .with("size", "small")
        .with("iconUrl", icon_url.filter(|value| !value.is_empty()))
        .with("title", title.filter(|value| !value.is_empty()))
}

pub fn action_toggle_visibility<I, S>(title: impl Into<String>, target_elements: I) -> Node
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let targets: Vec<String> = target_elements.into_iter().map(Into::into).collect();
    Node::new(NodeKind::ActionToggleVisibility)
        .with("title", title.into())
        .with("targetElements", targets)
}

pub fn action_menu_dropdown(title: impl Into<String>, actions: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::ActionMenuDropdown)
        .with("title", title.into())
        .with("actions", actions.into_iter().collect::<Vec<_>>())
}

pub fn action_execute(
    title: impl Into<String>,
    sheet_id: impl Into<String>,
    icon_url: impl Into<String>,
) -> Node {
    Node::new(NodeKind::ActionExecute)
        .with("title", title.into())
        .with("sheetId", sheet_id.into())
        .with("iconUrl", icon_url.into())
}

/// Chart element. `defaultChartType` is taken from the payload's
/// `chartType`; a payload without a string `chartType` is rejected.
pub fn chart(chart: Value, alternative_chart_types: Vec<Value>) -> Result<Node, DerivationError> {
    let default_type = chart
        .get(CHART_TYPE_FIELD)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| DerivationError {
            field: CHART_TYPE_FIELD.to_string(),
            target: DEFAULT_CHART_TYPE_ATTR.to_string(),
        })?;
    Ok(Node::new(NodeKind::Chart)
        .with("chart", chart)
        .with(DEFAULT_CHART_TYPE_ATTR, default_type)
        .with("alternativeChartTypes", Value::Array(alternative_chart_types)))
}

/// Placeholder shapes understood by the skeleton element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonVariant {
    Text,
    Circle,
    Rectangle,
    Button,
    IconButton,
    Input,
    InputField,
}

impl SkeletonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            SkeletonVariant::Text => "text",
            SkeletonVariant::Circle => "circle",
            SkeletonVariant::Rectangle => "rectangle",
            SkeletonVariant::Button => "Button",
            SkeletonVariant::IconButton => "IconButton",
            SkeletonVariant::Input => "Input",
            SkeletonVariant::InputField => "InputField",
        }
    }
}

pub fn skeleton(variant: SkeletonVariant, width: Option<&str>, height: Option<&str>) -> Node {
    Node::new(NodeKind::Skeleton)
        .with("variant", variant.as_str())
        .with("isSkeleton", true)
        .with("width", width.filter(|value| !value.is_empty()))
        .with("height", height.filter(|value| !value.is_empty()))
}

pub fn tag(text: impl Into<String>, size: impl Into<String>, color: impl Into<String>) -> Node {
    Node::new(NodeKind::Tag)
        .with("text", text.into())
        .with("size", size.into())
        .with("color", color.into())
}

pub fn input_text(id: impl Into<String>) -> Node {
    Node::new(NodeKind::InputText).id(id)
}

pub fn input_number(id: impl Into<String>) -> Node {
    Node::new(NodeKind::InputNumber).id(id)
}

pub fn input_date(id: impl Into<String>) -> Node {
    Node::new(NodeKind::InputDate).id(id)
}

pub fn input_time(id: impl Into<String>) -> Node {
    Node::new(NodeKind::InputTime).id(id)
}

pub fn input_toggle(id: impl Into<String>, title: impl Into<String>) -> Node {
    Node::new(NodeKind::InputToggle)
        .id(id)
        .with("title", title.into())
}

/// One option of a choice set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub title: String,
    pub value: String,
}

impl Choice {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

pub fn input_choice_set(id: impl Into<String>, choices: impl IntoIterator<Item = Choice>) -> Node {
    let choices: Vec<Attr> = choices
        .into_iter()
        .map(|choice| {
            Attr::Map(
                Attributes::new()
                    .with("title", choice.title)
                    .with("value", choice.value),
            )
        })
        .collect();
    Node::new(NodeKind::InputChoiceSet)
        .id(id)
        .with("choices", choices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::render_node;
    use serde_json::json;

    #[test]
    fn fact_set_renders_title_value_pairs() {
        let node = fact_set([Fact::new("Name", "John"), Fact::new("Age", "30")]);
        assert_eq!(
            render_node(&node).expect("render"),
            json!({
                "type": "FactSet",
                "facts": [
                    {"title": "Name", "value": "John"},
                    {"title": "Age", "value": "30"}
                ]
            })
        );
    }

    #[test]
    fn show_modal_defaults_and_empty_fields() {
        let node = action_show_modal(Some("Maximize"), Some(""));
        assert_eq!(
            render_node(&node).expect("render"),
            json!({
                "type": "Action.ShowModal",
                "style": "default",
                "size": "small",
                "iconUrl": "Maximize"
            })
        );
    }

    #[test]
    fn chart_derives_default_type() {
        let node = chart(json!({"chartType": "barchart"}), vec![json!({}), json!({})])
            .expect("chart");
        let rendered = render_node(&node).expect("render");
        assert_eq!(rendered["defaultChartType"], "barchart");
        assert_eq!(rendered["alternativeChartTypes"], json!([{}, {}]));
        assert_eq!(rendered["type"], "Qlik.Chart");
    }

    #[test]
    fn chart_without_type_is_rejected() {
        let err = chart(json!({"data": []}), Vec::new()).expect_err("missing chartType");
        assert_eq!(err.field, CHART_TYPE_FIELD);
    }

    #[test]
    fn chart_with_non_string_type_is_rejected() {
        assert!(chart(json!({"chartType": 3}), Vec::new()).is_err());
    }

    #[test]
    fn skeleton_skips_missing_dimensions() {
        insta::assert_json_snapshot!(
            render_node(&skeleton(SkeletonVariant::Rectangle, None, Some("24px"))).expect("render"),
            @r#"
        {
          "height": "24px",
          "isSkeleton": true,
          "type": "Qlik.Skeleton",
          "variant": "rectangle"
        }
        "#
        );
    }

    #[test]
    fn choice_set_renders_choices_in_order() {
        let node = input_choice_set("country", [Choice::new("Canada", "CA"), Choice::new("Peru", "PE")])
            .with("isMultiSelect", false);
        assert_eq!(
            render_node(&node).expect("render"),
            json!({
                "type": "Input.ChoiceSet",
                "id": "country",
                "isMultiSelect": false,
                "choices": [
                    {"title": "Canada", "value": "CA"},
                    {"title": "Peru", "value": "PE"}
                ]
            })
        );
    }

    #[test]
    fn toggle_visibility_lists_targets() {
        let node = action_toggle_visibility("More", ["a", "b"]);
        assert_eq!(
            render_node(&node).expect("render")["targetElements"],
            json!(["a", "b"])
        );
    }
}
