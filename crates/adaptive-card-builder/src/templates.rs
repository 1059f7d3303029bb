//! Ready-made cards for common layouts.

use crate::document::Document;
use crate::elements::{Fact, action_open_url, action_set, action_submit, fact_set, image, text_block};
use crate::node::Node;

fn heading(title: &str) -> Node {
    text_block(title).with("size", "Large").with("weight", "Bolder")
}

fn subheading(subtitle: &str) -> Node {
    text_block(subtitle).with("size", "Medium").with("isSubtle", true)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// Heading, optional subtitle, image and wrapped body text, plus actions.
pub fn simple_card(
    title: &str,
    subtitle: Option<&str>,
    text: Option<&str>,
    image_url: Option<&str>,
    actions: Vec<Node>,
) -> Document {
    let mut card = Document::default();
    card.push_body(heading(title));
    if let Some(subtitle) = non_empty(subtitle) {
        card.push_body(subheading(subtitle));
    }
    if let Some(image_url) = non_empty(image_url) {
        card.push_body(image(image_url));
    }
    if let Some(text) = non_empty(text) {
        card.push_body(text_block(text).with("wrap", true));
    }
    card.push_actions(actions);
    card
}

/// Heading followed by the inputs, with a submit (and optional cancel) action set.
pub fn form_card(
    title: &str,
    inputs: Vec<Node>,
    submit_title: &str,
    cancel_title: Option<&str>,
) -> Document {
    let mut card = Document::default();
    card.push_body(heading(title));
    card.push_body(inputs);

    let mut actions = vec![action_submit(submit_title)];
    if let Some(cancel_title) = non_empty(cancel_title) {
        actions.push(action_open_url(cancel_title, "#"));
    }
    card.push_actions(action_set(actions));
    card
}

/// One wrapped line per item, numbered from 1 or bulleted.
pub fn list_card<S: AsRef<str>>(title: &str, items: &[S], numbered: bool) -> Document {
    let mut card = Document::default();
    card.push_body(heading(title));
    for (position, item) in items.iter().enumerate() {
        let prefix = if numbered {
            format!("{}. ", position + 1)
        } else {
            "• ".to_string()
        };
        card.push_body(text_block(format!("{prefix}{}", item.as_ref())).with("wrap", true));
    }
    card
}

pub fn fact_card(title: &str, facts: Vec<Fact>) -> Document {
    let mut card = Document::default();
    card.push_body(vec![heading(title), fact_set(facts)]);
    card
}

/// How a media card presents its URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaType {
    #[default]
    Image,
    /// Anything the host cannot inline; shown as a text link line.
    Other,
}

pub fn media_card(
    title: &str,
    subtitle: Option<&str>,
    text: Option<&str>,
    media_url: &str,
    media_type: MediaType,
) -> Document {
    let mut card = Document::default();
    card.push_body(heading(title));
    if let Some(subtitle) = non_empty(subtitle) {
        card.push_body(subheading(subtitle));
    }
    card.push_body(match media_type {
        MediaType::Image => image(media_url),
        MediaType::Other => text_block(format!("Media: {media_url}")),
    });
    if let Some(text) = non_empty(text) {
        card.push_body(text_block(text).with("wrap", true));
    }
    card
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{input_number, input_text};
    use serde_json::json;

    #[test]
    fn simple_card_skips_missing_parts() {
        let rendered = simple_card("Hello, World!", None, Some("Body"), None, Vec::new())
            .render()
            .expect("render");
        assert_eq!(rendered["body"].as_array().map(Vec::len), Some(2));
        assert_eq!(rendered["body"][1], json!({"type": "TextBlock", "text": "Body", "wrap": true}));
        assert!(rendered.get("actions").is_none());
    }

    #[test]
    fn form_card_wraps_actions_in_action_set() {
        let rendered = form_card(
            "Sign up",
            vec![input_text("name"), input_number("age").with("min", 0).with("max", 120)],
            "Submit",
            Some("Cancel"),
        )
        .render()
        .expect("render");
        assert_eq!(rendered["body"].as_array().map(Vec::len), Some(3));
        assert_eq!(rendered["body"][2]["max"], 120);
        assert_eq!(
            rendered["actions"],
            json!([{
                "type": "ActionSet",
                "actions": [
                    {"type": "Action.Submit", "title": "Submit"},
                    {"type": "Action.OpenUrl", "title": "Cancel", "url": "#"}
                ]
            }])
        );
    }

    #[test]
    fn list_card_prefixes() {
        let numbered = list_card("Steps", &["one", "two"], true).render().expect("render");
        assert_eq!(numbered["body"][2]["text"], "2. two");
        let bulleted = list_card("Steps", &["one"], false).render().expect("render");
        assert_eq!(bulleted["body"][1]["text"], "• one");
    }

    #[test]
    fn fact_card_has_heading_and_facts() {
        let rendered = fact_card("User", vec![Fact::new("Name", "John Doe")])
            .render()
            .expect("render");
        assert_eq!(rendered["body"][1]["facts"][0]["value"], "John Doe");
    }

    #[test]
    fn media_card_falls_back_to_text() {
        let rendered = media_card("Clip", None, None, "https://example.com/a.mp4", MediaType::Other)
            .render()
            .expect("render");
        assert_eq!(rendered["body"][1]["text"], "Media: https://example.com/a.mp4");
        let rendered = media_card("Pic", None, None, "https://example.com/a.png", MediaType::Image)
            .render()
            .expect("render");
        assert_eq!(rendered["body"][1]["type"], "Image");
    }
}
