//! Card tree -> canonical JSON.
//!
//! One exhaustive match over [`Attr`] drives the whole walk. Nodes render to
//! `{"type": <kind>, ...attributes}`, documents to the Adaptive Card envelope,
//! mappings drop unset and null keys, sequences keep length, order and
//! payload nulls.

use std::fmt;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Number, Value};
use tracing::trace;

use crate::document::{Document, SCHEMA_URL};
use crate::errors::{CardError, CardResult, RenderError};
use crate::node::{Attr, Attributes, Node};

/// Render any attribute value.
pub fn render(value: &Attr) -> Result<Value, RenderError> {
    Renderer::default().attr(value)
}

pub fn render_node(node: &Node) -> Result<Value, RenderError> {
    Renderer::default().node(node)
}

pub fn render_document(document: &Document) -> Result<Value, RenderError> {
    Renderer::default().document(document)
}

/// Serialize an already rendered value with `indent` spaces per level.
pub fn prettify_json(value: &Value, indent: usize) -> CardResult<String> {
    if indent == 0 {
        return Err(CardError::InvalidIndent(indent));
    }
    let pad = vec![b' '; indent];
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&pad));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

#[derive(Debug, Clone)]
enum Segment {
    Key(String),
    Index(usize),
}

#[derive(Debug, Default)]
struct AttrPath(Vec<Segment>);

impl fmt::Display for AttrPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(key) if position == 0 => write!(f, "{key}")?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Renderer {
    path: AttrPath,
}

impl Renderer {
    fn error(&self, reason: impl Into<String>) -> RenderError {
        RenderError::new(self.path.to_string(), reason)
    }

    fn attr(&mut self, value: &Attr) -> Result<Value, RenderError> {
        match value {
            Attr::Unset => Err(self.error("unset value has no JSON representation")),
            Attr::Null => Ok(Value::Null),
            Attr::Bool(flag) => Ok(Value::Bool(*flag)),
            Attr::Int(number) => Ok(Value::from(*number)),
            Attr::Float(number) => Number::from_f64(*number)
                .map(Value::Number)
                .ok_or_else(|| self.error(format!("non-finite number {number}"))),
            Attr::Number(number) => Ok(Value::Number(number.clone())),
            Attr::Str(text) => Ok(Value::String(text.clone())),
            Attr::Node(node) => self.node(node),
            Attr::Nodes(nodes) => self.nodes(nodes),
            Attr::Card(document) => self.document(document),
            Attr::List(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    self.path.0.push(Segment::Index(index));
                    let rendered = self.attr(item);
                    self.path.0.pop();
                    out.push(rendered?);
                }
                Ok(Value::Array(out))
            }
            Attr::Map(map) => self.map(map).map(Value::Object),
        }
    }

    fn nodes(&mut self, nodes: &[Node]) -> Result<Value, RenderError> {
        let mut out = Vec::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            self.path.0.push(Segment::Index(index));
            let rendered = self.node(node);
            self.path.0.pop();
            out.push(rendered?);
        }
        Ok(Value::Array(out))
    }

    fn map(&mut self, attributes: &Attributes) -> Result<Map<String, Value>, RenderError> {
        let mut out = Map::new();
        for (key, value) in attributes.iter() {
            if value.is_unset() || value.is_null() {
                continue;
            }
            self.path.0.push(Segment::Key(key.clone()));
            let rendered = self.attr(value);
            self.path.0.pop();
            out.insert(key.clone(), rendered?);
        }
        Ok(out)
    }

    fn node(&mut self, node: &Node) -> Result<Value, RenderError> {
        let mut out = self.map(node.attributes())?;
        out.insert("type".into(), Value::String(node.kind().as_str().into()));
        trace!(kind = %node.kind(), path = %self.path, "rendered node");
        Ok(Value::Object(out))
    }

    fn document(&mut self, document: &Document) -> Result<Value, RenderError> {
        let mut out = self.map(document.attributes())?;
        out.insert("type".into(), Value::String("AdaptiveCard".into()));
        out.insert("$schema".into(), Value::String(SCHEMA_URL.into()));
        out.insert("version".into(), Value::String(document.version().into()));

        self.path.0.push(Segment::Key("body".into()));
        let body = self.nodes(document.body());
        self.path.0.pop();
        out.insert("body".into(), body?);

        if !document.actions().is_empty() {
            self.path.0.push(Segment::Key("actions".into()));
            let actions = self.nodes(document.actions());
            self.path.0.pop();
            out.insert("actions".into(), actions?);
        } else {
            out.remove("actions");
        }
        Ok(Value::Object(out))
    }
}
