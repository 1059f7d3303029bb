//! Interactive button rows: the elaborate/hide toggle trio, the sheet menu
//! dropdown and the panel that combines them under a chart.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::elements::{
    action_execute, action_menu_dropdown, action_set, action_show_card, action_toggle_visibility,
    column, column_set, container,
};
use crate::node::{Attributes, Fragment, Node};

pub const ELABORATE_ID: &str = "elaborate";
pub const HIDE_ELABORATION_ID: &str = "HideElaboration";
pub const ELABORATION_CONTENT_ID: &str = "moreText";

/// Element ids toggled by both elaboration triggers.
pub const ELABORATION_TARGETS: [&str; 3] =
    [ELABORATION_CONTENT_ID, ELABORATE_ID, HIDE_ELABORATION_ID];

pub const ADD_TO_SHEET_TITLE: &str = "Add this chart to sheet...";

/// Entry of the sheet catalog offered by the "add to sheet" menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetDescriptor {
    pub title: String,
    #[serde(rename = "sheetId")]
    pub sheet_id: String,
    #[serde(rename = "iconUrl")]
    pub icon_url: String,
}

impl SheetDescriptor {
    pub fn new(
        title: impl Into<String>,
        sheet_id: impl Into<String>,
        icon_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            sheet_id: sheet_id.into(),
            icon_url: icon_url.into(),
        }
    }
}

/// The two elaboration triggers and the content they reveal.
///
/// In the initial snapshot only `elaborate` is visible; both triggers toggle
/// all of [`ELABORATION_TARGETS`], so exactly one trigger stays visible.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleTrio {
    pub elaborate: Node,
    pub hide: Node,
    pub content: Node,
}

impl ToggleTrio {
    pub fn into_fragment(self) -> Fragment {
        Fragment::from(vec![self.elaborate, self.hide, self.content])
    }
}

impl From<ToggleTrio> for Fragment {
    fn from(trio: ToggleTrio) -> Self {
        trio.into_fragment()
    }
}

fn toggle_trigger(id: &str, title: &str, icon_url: &str, visible: bool) -> Node {
    let toggle = action_toggle_visibility(title, ELABORATION_TARGETS)
        .with("actionId", ELABORATE_ID)
        .with("fullWidth", true)
        .with("iconUrl", icon_url)
        .with("isEnabled", true)
        .with("size", "small")
        .style("quiet")
        .with("verb", ELABORATE_ID);
    column([action_set([toggle])])
        .id(id)
        .visible(visible)
        .with("verticalContentAlignment", "center")
        .width("stretch")
}

pub fn toggle_visibility_trio(content: impl IntoIterator<Item = Node>) -> ToggleTrio {
    ToggleTrio {
        elaborate: toggle_trigger(ELABORATE_ID, "Elaborate", "AnswersOutline", true),
        hide: toggle_trigger(HIDE_ELABORATION_ID, "Hide elaboration", "ViewDisabled", false),
        content: container(content).id(ELABORATION_CONTENT_ID).visible(false),
    }
}

/// One `Action.Execute` per sheet, in catalog order.
pub fn menu_list(sheets: &[SheetDescriptor]) -> Vec<Node> {
    sheets
        .iter()
        .map(|sheet| {
            action_execute(
                sheet.title.as_str(),
                sheet.sheet_id.as_str(),
                sheet.icon_url.as_str(),
            )
            .style("quiet")
            .with("fullWidth", true)
            .with("verb", "addToNewSheet")
        })
        .collect()
}

pub fn menu_dropdown(title: &str, sheets: &[SheetDescriptor]) -> Node {
    action_menu_dropdown(title, menu_list(sheets))
        .with("data_size", "small")
        .with("fullWidth", true)
        .style("quiet")
        .with("size", "small")
        .with("iconUrl", "AddOutline")
}

fn assumptions_column(card: Document) -> Node {
    let layout = Attributes::new()
        .with("width", "100%")
        .with("margin", "8px 0 16px")
        .with("boxShadow", "none")
        .with("boxSizing", "border-box")
        .with("border", "none")
        .with("backgroundColor", "transparent");
    let show_card = action_show_card("Assumptions", card)
        .with("activeIconUrl", "ViewDisabledOutline")
        .with("activeTitle", "Assumptions")
        .with("iconUrl", "ViewOutline")
        .with("fullWidth", true)
        .with("isEnabled", true)
        .with("layout", layout)
        .with("size", "small")
        .style("quiet");
    column([action_set([show_card])])
        .with("verticalContentAlignment", "center")
        .width("stretch")
}

/// Button panel shown under a chart.
///
/// Row one holds the Assumptions show-card and the two elaboration triggers,
/// row two the add-to-sheet menu. The elaboration content, when given, follows
/// the rows.
pub fn button_panel(
    assumptions_card: Document,
    sheets: &[SheetDescriptor],
    elaboration: Option<Vec<Node>>,
) -> Node {
    let has_elaboration = elaboration.is_some();
    let ToggleTrio {
        elaborate,
        hide,
        content,
    } = toggle_visibility_trio(elaboration.unwrap_or_default());

    let first_row = column_set([assumptions_column(assumptions_card), elaborate, hide]).separator();
    let second_row = column_set([column([action_set([menu_dropdown(ADD_TO_SHEET_TITLE, sheets)])])
        .with("verticalContentAlignment", "center")
        .width("stretch")])
    .separator();

    let mut items = vec![first_row, second_row];
    if has_elaboration {
        items.push(content);
    }
    container(items).separator()
}
