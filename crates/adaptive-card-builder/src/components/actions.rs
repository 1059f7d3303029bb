use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::elements::{action_open_url, action_set, action_submit};
use crate::node::Node;

/// Plain action description as supplied by callers, tagged by `type`.
///
/// Tags other than `submit` and `url`, and descriptors with no tag at all,
/// become [`ActionDescriptor::Unrecognized`] and are dropped when mapped to
/// nodes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum ActionDescriptor {
    Submit {
        title: String,
        /// Passed through verbatim; an empty object when omitted.
        data: Value,
    },
    Url {
        title: String,
        url: String,
    },
    Unrecognized(Option<String>),
}

#[derive(Deserialize)]
struct SubmitFields {
    title: String,
    #[serde(default = "empty_data")]
    data: Value,
}

fn empty_data() -> Value {
    Value::Object(Map::new())
}

#[derive(Deserialize)]
struct UrlFields {
    title: String,
    url: String,
}

impl TryFrom<Value> for ActionDescriptor {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let tag = value.get("type").and_then(Value::as_str).map(str::to_owned);
        match tag.as_deref() {
            Some("submit") => {
                let fields: SubmitFields = serde_json::from_value(value)?;
                Ok(ActionDescriptor::Submit {
                    title: fields.title,
                    data: fields.data,
                })
            }
            Some("url") => {
                let fields: UrlFields = serde_json::from_value(value)?;
                Ok(ActionDescriptor::Url {
                    title: fields.title,
                    url: fields.url,
                })
            }
            _ => Ok(ActionDescriptor::Unrecognized(tag)),
        }
    }
}

impl ActionDescriptor {
    pub fn submit(title: impl Into<String>) -> Self {
        ActionDescriptor::Submit {
            title: title.into(),
            data: empty_data(),
        }
    }

    pub fn url(title: impl Into<String>, url: impl Into<String>) -> Self {
        ActionDescriptor::Url {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Action node for this descriptor; `None` for unrecognized tags.
    pub fn to_node(&self) -> Option<Node> {
        match self {
            ActionDescriptor::Submit { title, data } => {
                Some(action_submit(title.as_str()).with("data", data.clone()))
            }
            ActionDescriptor::Url { title, url } => Some(action_open_url(title.as_str(), url.as_str())),
            ActionDescriptor::Unrecognized(tag) => {
                debug!(tag = ?tag, "dropping action descriptor with unrecognized type");
                None
            }
        }
    }
}

/// Map descriptors to action nodes, in order, silently skipping
/// unrecognized ones.
// TODO: add a strict mode that reports unrecognized descriptor tags instead of dropping them.
pub fn actions_from_descriptors<'a, I>(descriptors: I) -> Vec<Node>
where
    I: IntoIterator<Item = &'a ActionDescriptor>,
{
    descriptors
        .into_iter()
        .filter_map(ActionDescriptor::to_node)
        .collect()
}

pub fn action_set_from_descriptors<'a, I>(descriptors: I) -> Node
where
    I: IntoIterator<Item = &'a ActionDescriptor>,
{
    action_set(actions_from_descriptors(descriptors))
}

/// Primary action first, then the secondary ones.
pub fn aaa_actions(primary: Option<&ActionDescriptor>, secondary: &[ActionDescriptor]) -> Node {
    action_set_from_descriptors(primary.into_iter().chain(secondary))
}
