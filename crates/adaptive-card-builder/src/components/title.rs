use crate::elements::{column, column_set, container, image, text_block};
use crate::node::Node;

/// Title block with an optional leading icon and an optional subtitle line.
///
/// Empty `subtitle` / `icon_url` values count as absent.
pub fn title_section(title: &str, subtitle: Option<&str>, icon_url: Option<&str>) -> Node {
    let heading = text_block(title).with("size", "Large").with("weight", "Bolder");
    let mut items = Vec::with_capacity(2);

    match icon_url.filter(|value| !value.is_empty()) {
        Some(icon_url) => items.push(column_set([
            column([image(icon_url)
                .with("size", "Small")
                .width("24px")
                .with("height", "24px")])
            .width("auto"),
            column([heading]).width("stretch"),
        ])),
        None => items.push(heading),
    }

    if let Some(subtitle) = subtitle.filter(|value| !value.is_empty()) {
        items.push(
            text_block(subtitle)
                .with("size", "Medium")
                .with("isSubtle", true),
        );
    }

    container(items)
}
