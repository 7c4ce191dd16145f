//! ECharts configuration for the earnings bar chart.

use charming::{
    Chart,
    component::{Axis, Grid},
    element::{AxisType, Color, ItemStyle, Tooltip, Trigger},
    series::Bar,
};

use crate::series::Series;

/// The ECharts template that renders only the hovered bar's value.
const VALUE_ONLY_TOOLTIP: &str = "{c}";

/// How the tooltip looks when hovering over a bar.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipStyle {
    /// CSS colour of the tooltip background.
    pub background_color: String,
    /// CSS colour of the tooltip border.
    pub border_color: String,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            background_color: "rgba(255, 255, 255, 0.95)".to_owned(),
            border_color: "rgba(54, 162, 235, 1)".to_owned(),
        }
    }
}

/// The shape of the bars.
#[derive(Debug, Clone, PartialEq)]
pub struct BarStyle {
    /// Corner radius in pixels.
    pub border_radius: f64,
    /// Fixed bar thickness in pixels.
    pub width: f64,
    /// CSS colour of the bar outline.
    pub border_color: String,
    /// Bar outline thickness in pixels.
    pub border_width: f64,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            border_radius: 6.0,
            width: 18.0,
            border_color: "rgba(54, 162, 235, 1)".to_owned(),
            border_width: 1.0,
        }
    }
}

/// Visual configuration for the earnings chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Whether the category and value axes are drawn.
    pub show_axes: bool,
    /// How the tooltip looks.
    pub tooltip: TooltipStyle,
    /// How the bars look.
    pub bar: BarStyle,
    /// Colours cycled through by the chart's series.
    pub palette: Vec<String>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            show_axes: true,
            tooltip: TooltipStyle::default(),
            bar: BarStyle::default(),
            palette: vec!["rgba(0, 10, 255, 1)".to_owned()],
        }
    }
}

/// Builds the bar chart for `series`.
pub fn earnings_chart(series: &Series, style: &ChartStyle) -> Chart {
    let palette: Vec<Color> = style
        .palette
        .iter()
        .map(|color| Color::from(color.as_str()))
        .collect();

    Chart::new()
        .color(palette)
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .formatter(VALUE_ONLY_TOOLTIP)
                .background_color(style.tooltip.background_color.as_str())
                .border_color(style.tooltip.border_color.as_str()),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .show(style.show_axes)
                .data(series.label_strings()),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .show(style.show_axes),
        )
        .series(
            Bar::new()
                .name("Earnings")
                .bar_width(style.bar.width)
                .item_style(
                    ItemStyle::new()
                        .border_radius(style.bar.border_radius)
                        .border_color(style.bar.border_color.as_str())
                        .border_width(style.bar.border_width),
                )
                .data(series.values().to_vec()),
        )
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::{
        finance::{FinancePeriod, FinanceRecord, Graph},
        period::Period,
        series::build_series,
    };

    use super::{ChartStyle, earnings_chart};

    fn chart_json(period: Period, style: &ChartStyle) -> Value {
        let record = FinanceRecord {
            periods: vec![FinancePeriod {
                graph: Graph {
                    year: [("0", Some(100.0)), ("1", None), ("2", Some(300.0))]
                        .into_iter()
                        .collect(),
                    month: [("1", Some(7.0)), ("2", Some(8.0))].into_iter().collect(),
                    ..Default::default()
                },
            }],
        };
        let series = build_series(&record, period);

        serde_json::from_str(&earnings_chart(&series, style).to_string()).unwrap()
    }

    /// Single axes may be serialized either as an object or a one-element list.
    fn first(value: &Value) -> &Value {
        match value {
            Value::Array(values) => &values[0],
            value => value,
        }
    }

    #[test]
    fn chart_contains_series_values_and_labels() {
        let json = chart_json(Period::Year, &ChartStyle::default());

        assert_eq!(
            first(&json["xAxis"])["data"],
            serde_json::json!(["Январь", "Февраль", "Март"])
        );
        assert_eq!(json["series"][0]["type"], "bar");
        assert_eq!(json["series"][0]["data"], serde_json::json!([100.0, 0.0, 300.0]));
    }

    #[test]
    fn day_labels_are_rendered_as_strings() {
        let json = chart_json(Period::Month, &ChartStyle::default());

        assert_eq!(first(&json["xAxis"])["data"], serde_json::json!(["1", "2"]));
    }

    #[test]
    fn tooltip_shows_value_only() {
        let json = chart_json(Period::Year, &ChartStyle::default());

        assert_eq!(json["tooltip"]["formatter"], "{c}");
        assert_eq!(json["tooltip"]["trigger"], "item");
    }

    #[test]
    fn bars_use_configured_shape_and_palette() {
        let mut style = ChartStyle::default();
        style.bar.width = 24.0;
        style.palette = vec!["#123456".to_owned()];

        let json = chart_json(Period::Year, &style);

        assert!(!json["series"][0]["barWidth"].is_null());
        assert_eq!(json["color"], serde_json::json!(["#123456"]));
        assert!(!json["series"][0]["itemStyle"]["borderRadius"].is_null());
    }

    #[test]
    fn axes_can_be_hidden() {
        let style = ChartStyle {
            show_axes: false,
            ..Default::default()
        };

        let json = chart_json(Period::Year, &style);

        assert_eq!(first(&json["xAxis"])["show"], false);
        assert_eq!(first(&json["yAxis"])["show"], false);
    }
}
