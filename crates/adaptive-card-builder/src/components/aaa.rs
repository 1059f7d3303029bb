//! Complete App Analysis card: status header, title, chart and actions.

use serde::Deserialize;
use serde_json::Value;

use crate::components::actions::{ActionDescriptor, aaa_actions};
use crate::components::chart::chart_section;
use crate::components::title::title_section;
use crate::components::top_bar::status_top_bar;
use crate::document::{DEFAULT_SCHEMA_VERSION, Document, assemble};
use crate::errors::CardResult;
use crate::node::{Attributes, Fragment};

fn default_status() -> String {
    "active".to_string()
}

/// Inputs of an App Analysis card, deserializable from plain JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AaaCard {
    pub app_name: String,
    pub title: String,
    pub chart: Value,
    #[serde(default)]
    pub alternative_chart_types: Vec<Value>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub primary_action: Option<ActionDescriptor>,
    #[serde(default)]
    pub secondary_actions: Vec<ActionDescriptor>,
    #[serde(default)]
    pub version: Option<String>,
}

impl AaaCard {
    pub fn new(app_name: impl Into<String>, title: impl Into<String>, chart: Value) -> Self {
        Self {
            app_name: app_name.into(),
            title: title.into(),
            chart,
            alternative_chart_types: Vec::new(),
            status: default_status(),
            subtitle: None,
            timestamp: None,
            icon_url: None,
            primary_action: None,
            secondary_actions: Vec::new(),
            version: None,
        }
    }
}

/// Build the card. The action set is only attached when at least one
/// descriptor produced an action.
pub fn aaa_card(card: &AaaCard) -> CardResult<Document> {
    let top_bar = status_top_bar(&card.app_name, &card.status, card.timestamp.as_deref());
    let title = title_section(&card.title, card.subtitle.as_deref(), card.icon_url.as_deref());
    let chart = chart_section(
        card.chart.clone(),
        card.alternative_chart_types.clone(),
        Attributes::new(),
    )?;
    let actions = aaa_actions(card.primary_action.as_ref(), &card.secondary_actions);

    let action_fragments = if actions.children("actions").is_empty() {
        Vec::new()
    } else {
        vec![Fragment::from(actions)]
    };

    Ok(assemble(
        [Fragment::from(vec![top_bar, title, chart])],
        action_fragments,
        Some(card.version.as_deref().unwrap_or(DEFAULT_SCHEMA_VERSION)),
    ))
}
