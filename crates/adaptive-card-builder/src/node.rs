//! Typed card tree: node kinds, attribute values and fragments.
//!
//! A [`Node`] is a kind discriminator plus an open attribute bag. Nothing is
//! validated here; whatever a caller stores is emitted verbatim by the
//! renderer.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Number, Value};

use crate::document::Document;

/// Every component kind the renderer knows how to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    Image,
    Container,
    Column,
    ColumnSet,
    ActionSet,
    FactSet,
    Chart,
    Tag,
    Skeleton,
    ActionSubmit,
    ActionOpenUrl,
    ActionShowCard,
    ActionShowModal,
    ActionToggleVisibility,
    ActionMenuDropdown,
    ActionExecute,
    InputText,
    InputNumber,
    InputDate,
    InputTime,
    InputToggle,
    InputChoiceSet,
}

impl NodeKind {
    pub const ALL: [NodeKind; 23] = [
        NodeKind::Text,
        NodeKind::Image,
        NodeKind::Container,
        NodeKind::Column,
        NodeKind::ColumnSet,
        NodeKind::ActionSet,
        NodeKind::FactSet,
        NodeKind::Chart,
        NodeKind::Tag,
        NodeKind::Skeleton,
        NodeKind::ActionSubmit,
        NodeKind::ActionOpenUrl,
        NodeKind::ActionShowCard,
        NodeKind::ActionShowModal,
        NodeKind::ActionToggleVisibility,
        NodeKind::ActionMenuDropdown,
        NodeKind::ActionExecute,
        NodeKind::InputText,
        NodeKind::InputNumber,
        NodeKind::InputDate,
        NodeKind::InputTime,
        NodeKind::InputToggle,
        NodeKind::InputChoiceSet,
    ];

    /// Wire discriminator emitted as the `type` key.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Text => "TextBlock",
            NodeKind::Image => "Image",
            NodeKind::Container => "Container",
            NodeKind::Column => "Column",
            NodeKind::ColumnSet => "ColumnSet",
            NodeKind::ActionSet => "ActionSet",
            NodeKind::FactSet => "FactSet",
            NodeKind::Chart => "Qlik.Chart",
            NodeKind::Tag => "Qlik.Tag",
            NodeKind::Skeleton => "Qlik.Skeleton",
            NodeKind::ActionSubmit => "Action.Submit",
            NodeKind::ActionOpenUrl => "Action.OpenUrl",
            NodeKind::ActionShowCard => "Action.ShowCard",
            NodeKind::ActionShowModal => "Action.ShowModal",
            NodeKind::ActionToggleVisibility => "Action.ToggleVisibility",
            NodeKind::ActionMenuDropdown => "Action.MenuDropdown",
            NodeKind::ActionExecute => "Action.Execute",
            NodeKind::InputText => "Input.Text",
            NodeKind::InputNumber => "Input.Number",
            NodeKind::InputDate => "Input.Date",
            NodeKind::InputTime => "Input.Time",
            NodeKind::InputToggle => "Input.Toggle",
            NodeKind::InputChoiceSet => "Input.ChoiceSet",
        }
    }

    /// Parse a wire discriminator (exact match).
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    pub fn is_input(self) -> bool {
        self.as_str().starts_with("Input.")
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute value stored on a node or document.
#[derive(Debug, Clone, PartialEq)]
pub enum Attr {
    /// Explicitly absent. Omitted from rendered mappings.
    Unset,
    /// JSON `null` taken over from a payload. Kept inside sequences, dropped
    /// from mappings like [`Attr::Unset`].
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Number taken over from a JSON payload.
    Number(Number),
    Str(String),
    Node(Box<Node>),
    Nodes(Vec<Node>),
    Card(Box<Document>),
    List(Vec<Attr>),
    Map(Attributes),
}

impl Attr {
    pub fn is_unset(&self) -> bool {
        matches!(self, Attr::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Attr::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Attr::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Attr::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_nodes(&self) -> Option<&[Node]> {
        match self {
            Attr::Nodes(nodes) => Some(nodes),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Attr]> {
        match self {
            Attr::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Attributes> {
        match self {
            Attr::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for Attr {
    fn from(value: &str) -> Self {
        Attr::Str(value.to_string())
    }
}

impl From<String> for Attr {
    fn from(value: String) -> Self {
        Attr::Str(value)
    }
}

impl From<&String> for Attr {
    fn from(value: &String) -> Self {
        Attr::Str(value.clone())
    }
}

impl From<bool> for Attr {
    fn from(value: bool) -> Self {
        Attr::Bool(value)
    }
}

impl From<i32> for Attr {
    fn from(value: i32) -> Self {
        Attr::Int(value.into())
    }
}

impl From<i64> for Attr {
    fn from(value: i64) -> Self {
        Attr::Int(value)
    }
}

impl From<u32> for Attr {
    fn from(value: u32) -> Self {
        Attr::Int(value.into())
    }
}

impl From<f64> for Attr {
    fn from(value: f64) -> Self {
        Attr::Float(value)
    }
}

impl From<Node> for Attr {
    fn from(value: Node) -> Self {
        Attr::Node(Box::new(value))
    }
}

impl From<Vec<Node>> for Attr {
    fn from(value: Vec<Node>) -> Self {
        Attr::Nodes(value)
    }
}

impl From<Fragment> for Attr {
    fn from(value: Fragment) -> Self {
        Attr::Nodes(value.into_nodes())
    }
}

impl From<Document> for Attr {
    fn from(value: Document) -> Self {
        Attr::Card(Box::new(value))
    }
}

impl From<Vec<Attr>> for Attr {
    fn from(value: Vec<Attr>) -> Self {
        Attr::List(value)
    }
}

impl From<Vec<String>> for Attr {
    fn from(value: Vec<String>) -> Self {
        Attr::List(value.into_iter().map(Attr::Str).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Attr {
    fn from(value: [&str; N]) -> Self {
        Attr::List(value.into_iter().map(Attr::from).collect())
    }
}

impl From<Attributes> for Attr {
    fn from(value: Attributes) -> Self {
        Attr::Map(value)
    }
}

impl<T: Into<Attr>> From<Option<T>> for Attr {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Attr::Unset)
    }
}

impl From<Value> for Attr {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Attr::Null,
            Value::Bool(flag) => Attr::Bool(flag),
            Value::Number(number) => Attr::Number(number),
            Value::String(text) => Attr::Str(text),
            Value::Array(items) => Attr::List(items.into_iter().map(Attr::from).collect()),
            Value::Object(map) => Attr::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Attr::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Ordered attribute bag. Keys iterate in sorted order so repeated renders
/// produce identical output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(BTreeMap<String, Attr>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Attr>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Attr>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Attr> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Attr> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Merge `other` into `self`; keys from `other` win.
    pub fn merge(&mut self, other: Attributes) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Attr)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Attr>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Attributes {
    type Item = (String, Attr);
    type IntoIter = std::collections::btree_map::IntoIter<String, Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A single component in the card tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    attributes: Attributes,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: Attributes::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attr(&self, key: &str) -> Option<&Attr> {
        self.attributes.get(key)
    }

    /// Child nodes stored under `key` (`items`, `columns`, `actions`).
    pub fn children(&self, key: &str) -> &[Node] {
        self.attr(key).and_then(Attr::as_nodes).unwrap_or_default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Attr>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Attr>) {
        self.attributes.set(key, value);
    }

    /// Apply a caller-supplied option bag on top of the constructor defaults.
    pub fn with_options(mut self, options: Attributes) -> Self {
        self.attributes.merge(options);
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.with("id", id.into())
    }

    pub fn visible(self, visible: bool) -> Self {
        self.with("isVisible", visible)
    }

    pub fn width(self, width: impl Into<String>) -> Self {
        self.with("width", width.into())
    }

    pub fn spacing(self, spacing: impl Into<String>) -> Self {
        self.with("spacing", spacing.into())
    }

    pub fn style(self, style: impl Into<String>) -> Self {
        self.with("style", style.into())
    }

    pub fn separator(self) -> Self {
        self.with("separator", true)
    }
}

/// Ordered run of nodes produced by a composer, consumed by document assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment(Vec<Node>);

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) {
        self.0.push(node);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Node> for Fragment {
    fn from(node: Node) -> Self {
        Self(vec![node])
    }
}

impl From<Vec<Node>> for Fragment {
    fn from(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }
}

impl FromIterator<Node> for Fragment {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Node> for Fragment {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Fragment {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_discriminators_round_trip_through_parse() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(NodeKind::parse("textblock"), None);
    }

    #[test]
    fn input_kinds_are_classified() {
        assert!(NodeKind::InputChoiceSet.is_input());
        assert!(!NodeKind::ActionSubmit.is_input());
        assert!(!NodeKind::Text.is_input());
    }

    #[test]
    fn options_override_constructor_defaults() {
        let node = Node::new(NodeKind::ActionShowModal)
            .with("style", "default")
            .with_options(Attributes::new().with("style", "positive").with("title", "Open"));
        assert_eq!(node.attr("style").and_then(Attr::as_str), Some("positive"));
        assert_eq!(node.attr("title").and_then(Attr::as_str), Some("Open"));
        assert_eq!(node.kind(), NodeKind::ActionShowModal);
    }

    #[test]
    fn none_becomes_unset() {
        let width: Option<&str> = None;
        assert!(Attr::from(width).is_unset());
        assert_eq!(Attr::from(Some("auto")), Attr::Str("auto".into()));
    }

    #[test]
    fn json_values_convert_recursively() {
        let attr = Attr::from(json!({"a": [1, "x", null], "b": {"c": true}, "d": null}));
        let map = attr.as_map().expect("map");
        let list = map.get("a").and_then(Attr::as_list).expect("list");
        assert_eq!(list.len(), 3);
        assert!(list[2].is_null());
        assert!(map.get("d").is_some_and(Attr::is_null));
        assert_eq!(
            map.get("b").and_then(Attr::as_map).and_then(|m| m.get("c")),
            Some(&Attr::Bool(true))
        );
    }

    #[test]
    fn children_defaults_to_empty_slice() {
        let node = Node::new(NodeKind::Container);
        assert!(node.children("items").is_empty());
        let node = node.with("items", vec![Node::new(NodeKind::Text)]);
        assert_eq!(node.children("items").len(), 1);
    }

    #[test]
    fn fragment_preserves_push_order() {
        let mut fragment = Fragment::from(Node::new(NodeKind::Text));
        fragment.push(Node::new(NodeKind::Image));
        fragment.extend([Node::new(NodeKind::Tag)]);
        let kinds: Vec<_> = fragment.nodes().iter().map(Node::kind).collect();
        assert_eq!(kinds, vec![NodeKind::Text, NodeKind::Image, NodeKind::Tag]);
    }
}
