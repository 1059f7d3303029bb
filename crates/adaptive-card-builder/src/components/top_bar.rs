//! Card headers: the two-state analysis top bar, the status top bar and the
//! loading skeleton shown before any content resolves.

use crate::components::status::{StatusColor, status_indicator};
use crate::elements::{
    SkeletonVariant, action_set, action_show_modal, column, column_set, container, skeleton, tag,
    text_block,
};
use crate::node::{Fragment, Node};

/// Title of a top bar: either known, or still loading.
///
/// An empty string is a resolved title with empty content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleState {
    Resolved(String),
    Unresolved,
}

impl From<&str> for TitleState {
    fn from(value: &str) -> Self {
        TitleState::Resolved(value.to_string())
    }
}

impl From<String> for TitleState {
    fn from(value: String) -> Self {
        TitleState::Resolved(value)
    }
}

impl From<Option<String>> for TitleState {
    fn from(value: Option<String>) -> Self {
        value.map_or(TitleState::Unresolved, TitleState::Resolved)
    }
}

/// Analysis top bar: a tag row with a maximize control, then the title row.
///
/// While the title is unresolved the title row holds two 24px rectangle
/// skeletons sized like the eventual heading.
pub fn top_bar(analysis_type: &str, title: TitleState) -> Node {
    let header = column_set([
        column([tag(analysis_type, "s", "info")])
            .spacing("small")
            .with("verticalContentAlignment", "top"),
        column(Vec::new()).width("stretch"),
        column([action_set([action_show_modal(Some("Maximize"), None)])
            .with("color", "info")
            .with("addPaddingLeft", true)])
        .with("verticalContentAlignment", "top"),
    ]);

    let title_items = match title {
        TitleState::Unresolved => vec![
            skeleton(SkeletonVariant::Rectangle, None, Some("24px")),
            skeleton(SkeletonVariant::Rectangle, None, Some("24px")),
        ],
        TitleState::Resolved(text) => vec![
            text_block(text)
                .with("size", "large")
                .with("weight", "bolder")
                .with("isSubtle", false)
                .with("wrap", true)
                .with("content", true),
        ],
    };

    let title_row = column_set([column(title_items)
        .with("verticalContentAlignment", "top")
        .spacing("small")])
    .spacing("small");

    container([header, title_row])
}

/// App header: status indicator, app name and an optional timestamp.
pub fn status_top_bar(app_name: &str, status: &str, timestamp: Option<&str>) -> Node {
    let mut items = vec![
        status_indicator(status),
        text_block(app_name).with("size", "Large").with("weight", "Bolder"),
    ];
    if let Some(timestamp) = timestamp.filter(|value| !value.is_empty()) {
        items.push(
            text_block(timestamp)
                .with("size", "Small")
                .with("isSubtle", true),
        );
    }
    container(items).style("Emphasis")
}

/// Generic header. The status line only appears when a status is given.
pub fn simple_top_bar(title: &str, status: Option<&str>, status_color: Option<StatusColor>) -> Node {
    let mut items = Vec::new();
    if let Some(status) = status.filter(|value| !value.is_empty()) {
        items.push(
            text_block(status)
                .with("color", status_color.unwrap_or(StatusColor::Default).as_str())
                .with("size", "Small")
                .with("weight", "Bolder"),
        );
    }
    items.push(text_block(title).with("size", "Large").with("weight", "Bolder"));
    container(items).style("Emphasis")
}

/// Placeholder body shown while an analysis card loads.
pub fn loading_skeleton() -> Fragment {
    Fragment::from(vec![
        column_set([column([skeleton(SkeletonVariant::Text, Some("100%"), None)])
            .with("verticalContentAlignment", "top")
            .width("75%")
            .with("isSkeleton", true)]),
        skeleton(SkeletonVariant::Rectangle, Some("100%"), Some("300px")),
        column_set(Vec::new())
            .spacing("padding")
            .with("isSkeleton", true),
    ])
}
