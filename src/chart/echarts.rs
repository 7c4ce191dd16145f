//! Renders charts with ECharts in the browser.
//!
//! An [EChartsInstance] is the script that binds a chart to its DOM element.
//! The script disposes whatever instance is already bound to the element
//! before initialising a new one, and disposes its own instance when htmx
//! removes the element from the page.

use charming::Chart;

use crate::{
    Error,
    chart::{ChartRenderer, DrawingSurface},
};

/// A chart bound to a DOM element, ready to be initialised in the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EChartsInstance {
    element_id: String,
    options: String,
}

impl EChartsInstance {
    /// The HTML ID of the element the chart is bound to.
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// The ECharts options as JSON.
    pub fn options(&self) -> &str {
        &self.options
    }

    /// JavaScript that creates the chart on the element.
    pub fn init_script(&self) -> String {
        format!(
            r#"(function() {{
                const chartDom = document.getElementById("{id}");
                if (!chartDom) {{
                    return;
                }}

                const previous = echarts.getInstanceByDom(chartDom);
                if (previous) {{
                    previous.dispose();
                }}

                const chart = echarts.init(chartDom);
                chart.setOption({options});

                const resize = () => chart.resize();
                window.addEventListener('resize', resize);

                chartDom.addEventListener('htmx:beforeCleanupElement', () => {{
                    window.removeEventListener('resize', resize);
                    chart.dispose();
                }}, {{ once: true }});
            }})();"#,
            id = self.element_id,
            options = self.options
        )
    }
}

/// Creates [EChartsInstance]s.
///
/// Instances hold no server-side resources; destroying one only logs. The
/// browser-side release happens in the instance's init script.
#[derive(Debug, Clone, Copy, Default)]
pub struct EChartsRenderer;

impl ChartRenderer for EChartsRenderer {
    type Instance = EChartsInstance;

    fn create(&mut self, surface: &DrawingSurface, chart: &Chart) -> Result<EChartsInstance, Error> {
        if !is_valid_element_id(surface.id()) {
            return Err(Error::SurfaceUnavailable(surface.id().to_owned()));
        }

        Ok(EChartsInstance {
            element_id: surface.id().to_owned(),
            options: chart.to_string(),
        })
    }

    fn destroy(&mut self, instance: EChartsInstance) {
        tracing::trace!("released chart instance for #{}", instance.element_id);
    }
}

/// Whether `id` can be used as-is in both an HTML `id` attribute and a
/// JavaScript string literal.
fn is_valid_element_id(id: &str) -> bool {
    id.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use charming::Chart;

    use crate::{
        Error,
        chart::{ChartRenderer, ChartSlot, DrawingSurface},
    };

    use super::{EChartsRenderer, is_valid_element_id};

    #[test]
    fn creates_instance_for_valid_surface() {
        let instance = EChartsRenderer
            .create(&DrawingSurface::new("earnings-chart"), &Chart::new())
            .unwrap();

        assert_eq!(instance.element_id(), "earnings-chart");
        assert_eq!(instance.options(), Chart::new().to_string());
    }

    #[test]
    fn invalid_surface_is_unavailable() {
        for id in ["", "  ", "1chart", "chart\"); alert(1); (\"", "a b"] {
            let result = EChartsRenderer.create(&DrawingSurface::new(id), &Chart::new());

            assert_eq!(result, Err(Error::SurfaceUnavailable(id.to_owned())));
        }
    }

    #[test]
    fn init_script_disposes_before_init() {
        let instance = EChartsRenderer
            .create(&DrawingSurface::new("earnings-chart"), &Chart::new())
            .unwrap();

        let script = instance.init_script();

        let dispose_position = script.find("previous.dispose()").unwrap();
        let init_position = script.find("echarts.init(chartDom)").unwrap();
        assert!(dispose_position < init_position);
        assert!(script.contains(r#"document.getElementById("earnings-chart")"#));
        assert!(script.contains("htmx:beforeCleanupElement"));
    }

    #[test]
    fn slot_keeps_instance_after_render() {
        let mut slot = ChartSlot::new(EChartsRenderer, DrawingSurface::new("earnings-chart"));

        slot.render(&Chart::new()).unwrap();

        assert_eq!(
            slot.instance().map(|instance| instance.element_id()),
            Some("earnings-chart")
        );
    }

    #[test]
    fn element_id_validation() {
        assert!(is_valid_element_id("earnings-chart"));
        assert!(is_valid_element_id("chart_2"));
        assert!(!is_valid_element_id(""));
        assert!(!is_valid_element_id("-chart"));
        assert!(!is_valid_element_id("chart<script>"));
    }
}
