use serde_json::Value;

use crate::elements::{DEFAULT_CHART_TYPE_ATTR, chart};
use crate::errors::DerivationError;
use crate::node::{Attributes, Node};

/// Chart section: the primary chart plus the alternative renderings a host
/// may switch to. Fails when the primary payload has no `chartType`.
///
/// `options` cannot override the derived `defaultChartType`.
pub fn chart_section(
    primary: Value,
    alternatives: Vec<Value>,
    mut options: Attributes,
) -> Result<Node, DerivationError> {
    options.remove(DEFAULT_CHART_TYPE_ATTR);
    Ok(chart(primary, alternatives)?.with_options(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::render_node;
    use serde_json::json;

    #[test]
    fn default_type_follows_primary_payload() {
        let node = chart_section(
            json!({"chartType": "bar", "data": [1, 2, 3]}),
            vec![json!({"chartType": "line"}), json!({"chartType": "pie"})],
            Attributes::new().with("id", "sales"),
        )
        .expect("chart");
        let rendered = render_node(&node).expect("render");
        assert_eq!(rendered["defaultChartType"], "bar");
        assert_eq!(rendered["alternativeChartTypes"].as_array().map(Vec::len), Some(2));
        assert_eq!(rendered["chart"]["data"], json!([1, 2, 3]));
        assert_eq!(rendered["id"], "sales");
    }

    #[test]
    fn options_cannot_replace_derived_default_type() {
        let node = chart_section(
            json!({"chartType": "bar"}),
            Vec::new(),
            Attributes::new()
                .with("defaultChartType", "pie")
                .with("height", "320px"),
        )
        .expect("chart");
        let rendered = render_node(&node).expect("render");
        assert_eq!(rendered["defaultChartType"], "bar");
        assert_eq!(rendered["height"], "320px");
    }

    #[test]
    fn null_data_points_render() {
        let node = chart_section(
            json!({"chartType": "line", "data": [1, null, 3]}),
            Vec::new(),
            Attributes::new(),
        )
        .expect("chart");
        let rendered = render_node(&node).expect("render");
        assert_eq!(rendered["chart"]["data"], json!([1, null, 3]));
    }

    #[test]
    fn missing_chart_type_fails_loudly() {
        let err = chart_section(json!({"data": []}), vec![json!({}), json!({})], Attributes::new())
            .expect_err("no chartType");
        assert_eq!(err.target, "defaultChartType");
    }
}
