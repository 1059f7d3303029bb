use adaptive_card_builder::components::{
    AaaCard, ActionDescriptor, SheetDescriptor, TitleState, aaa_card, button_panel,
    loading_skeleton, top_bar,
};
use adaptive_card_builder::elements::{action_open_url, text_block};
use adaptive_card_builder::templates::simple_card;
use adaptive_card_builder::{CardResult, Document};
use clap::ValueEnum;
use serde_json::json;

/// Built-in sample cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    Aaa,
    TopBar,
    Skeleton,
    Buttons,
    Simple,
}

pub fn build(kind: DemoKind) -> CardResult<Document> {
    let card = match kind {
        DemoKind::Aaa => aaa_card(&sample_aaa())?,
        DemoKind::TopBar => {
            let mut card = Document::default();
            card.push_body(top_bar("Performance", TitleState::from("Sales Report")));
            card
        }
        DemoKind::Skeleton => {
            let mut card = Document::default();
            card.push_body(top_bar("Performance", TitleState::Unresolved));
            card.push_body(loading_skeleton());
            card
        }
        DemoKind::Buttons => {
            let mut assumptions = Document::default();
            assumptions.push_body(text_block("Figures exclude returns.").with("wrap", true));
            let mut card = Document::default();
            card.push_body(button_panel(
                assumptions,
                &[
                    SheetDescriptor::new("Overview", "sheet-overview", "SheetOutline"),
                    SheetDescriptor::new("Regions", "sheet-regions", "SheetOutline"),
                ],
                Some(vec![
                    text_block("Revenue grew 12% quarter over quarter.").with("wrap", true),
                ]),
            ));
            card
        }
        DemoKind::Simple => simple_card(
            "Hello, World!",
            Some("A minimal card"),
            Some("Built with the card builder."),
            None,
            vec![action_open_url("Learn more", "https://adaptivecards.io")],
        ),
    };
    Ok(card)
}

fn sample_aaa() -> AaaCard {
    let mut card = AaaCard::new(
        "MyApplication",
        "Performance Analysis Report",
        json!({"chartType": "barchart", "dimensions": ["Month"], "measures": ["Revenue"]}),
    );
    card.alternative_chart_types = vec![json!({"chartType": "linechart"}), json!({"chartType": "table"})];
    card.status = "completed".to_string();
    card.subtitle = Some("Real-time metrics and insights".to_string());
    card.timestamp = Some("2023-12-25 10:30:00".to_string());
    card.primary_action = Some(ActionDescriptor::submit("Refresh"));
    card.secondary_actions = vec![ActionDescriptor::url("Open app", "https://example.com/app")];
    card
}

#[cfg(test)]
mod tests {
    use super::*;
    use adaptive_card_builder::lint_card;

    #[test]
    fn every_demo_renders_cleanly() {
        for kind in DemoKind::value_variants() {
            let rendered = build(*kind).expect("build").render().expect("render");
            assert_eq!(rendered["type"], "AdaptiveCard", "{kind:?}");
            assert!(lint_card(&rendered).is_empty(), "{kind:?}");
        }
    }
}
