use crate::elements::text_block;
use crate::node::Node;

/// Glyph prefixed to every status label.
pub const STATUS_BULLET: &str = "●";

/// Semantic text colors used for status labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Good,
    Attention,
    Warning,
    Default,
}

impl StatusColor {
    /// Case-insensitive lookup; unknown statuses map to [`StatusColor::Default`].
    pub fn for_status(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "active" | "completed" => StatusColor::Good,
            "error" => StatusColor::Attention,
            "warning" => StatusColor::Warning,
            _ => StatusColor::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusColor::Good => "Good",
            StatusColor::Attention => "Attention",
            StatusColor::Warning => "Warning",
            StatusColor::Default => "Default",
        }
    }
}

pub fn status_indicator(status: &str) -> Node {
    text_block(format!("{STATUS_BULLET} {}", status.to_uppercase()))
        .with("color", StatusColor::for_status(status).as_str())
        .with("size", "Small")
        .with("weight", "Bolder")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::render_node;
    use serde_json::json;

    #[test]
    fn lookup_table() {
        assert_eq!(StatusColor::for_status("active"), StatusColor::Good);
        assert_eq!(StatusColor::for_status("Completed"), StatusColor::Good);
        assert_eq!(StatusColor::for_status("ERROR"), StatusColor::Attention);
        assert_eq!(StatusColor::for_status("warning"), StatusColor::Warning);
        assert_eq!(StatusColor::for_status(""), StatusColor::Default);
    }

    #[test]
    fn case_does_not_change_output() {
        assert_eq!(
            render_node(&status_indicator("ACTIVE")).expect("render"),
            render_node(&status_indicator("active")).expect("render")
        );
    }

    #[test]
    fn unknown_status_is_neutral() {
        assert_eq!(
            render_node(&status_indicator("mystery")).expect("render"),
            json!({
                "type": "TextBlock",
                "text": "● MYSTERY",
                "color": "Default",
                "size": "Small",
                "weight": "Bolder"
            })
        );
    }
}
