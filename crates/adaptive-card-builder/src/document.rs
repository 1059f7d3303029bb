use serde_json::Value;
use tracing::debug;

use crate::config::BuilderConfig;
use crate::errors::{CardError, CardResult, RenderError};
use crate::node::{Attr, Attributes, Fragment, Node};
use crate::renderer;

/// Schema version used when the caller does not pick one.
pub const DEFAULT_SCHEMA_VERSION: &str = "1.2";
/// Value of the `$schema` key on every rendered card.
pub const SCHEMA_URL: &str = "http://adaptivecards.io/schemas/adaptive-card.json";

/// Root card: body nodes, action nodes, schema version and free-form
/// top-level attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    version: String,
    body: Vec<Node>,
    actions: Vec<Node>,
    attributes: Attributes,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEMA_VERSION)
    }
}

impl Document {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            body: Vec::new(),
            actions: Vec::new(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_config(config: &BuilderConfig) -> Self {
        Self::new(config.schema_version.clone())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn body(&self) -> &[Node] {
        &self.body
    }

    pub fn actions(&self) -> &[Node] {
        &self.actions
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set a top-level card attribute (`fallbackText`, `msteams`, ...).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Attr>) -> Self {
        self.attributes.set(key, value);
        self
    }

    pub fn push_body(&mut self, fragment: impl Into<Fragment>) {
        self.body.extend(fragment.into());
    }

    pub fn push_actions(&mut self, fragment: impl Into<Fragment>) {
        self.actions.extend(fragment.into());
    }

    pub fn render(&self) -> Result<Value, RenderError> {
        renderer::render_document(self)
    }

    pub fn to_pretty_json(&self, indent: usize) -> CardResult<String> {
        renderer::prettify_json(&self.render()?, indent)
    }
}

/// Concatenate body and action fragments into one card.
///
/// Fragments keep their internal order and are appended in the order given;
/// nothing is merged or deduplicated. `version` falls back to
/// [`DEFAULT_SCHEMA_VERSION`].
pub fn assemble<B, A>(body_fragments: B, action_fragments: A, version: Option<&str>) -> Document
where
    B: IntoIterator<Item = Fragment>,
    A: IntoIterator<Item = Fragment>,
{
    let mut document = Document::new(version.unwrap_or(DEFAULT_SCHEMA_VERSION));
    for fragment in body_fragments {
        document.push_body(fragment);
    }
    for fragment in action_fragments {
        document.push_actions(fragment);
    }
    debug!(
        version = %document.version,
        body = document.body.len(),
        actions = document.actions.len(),
        "assembled card"
    );
    document
}

/// Merge the body and actions of several cards into a fresh default card.
pub fn merge_cards<I>(cards: I) -> CardResult<Document>
where
    I: IntoIterator<Item = Document>,
{
    let mut cards = cards.into_iter().peekable();
    if cards.peek().is_none() {
        return Err(CardError::NoCards);
    }
    let mut merged = Document::default();
    for card in cards {
        merged.body.extend(card.body);
        merged.actions.extend(card.actions);
    }
    Ok(merged)
}
