//! The earnings bar chart.
//!
//! The chart is drawn in the browser by ECharts. This module builds the
//! ECharts options with `charming` and manages the chart instance bound to a
//! drawing surface so that at most one instance exists per surface.

mod echarts;
mod lifecycle;
mod options;

#[cfg(test)]
pub(crate) mod test_utils;

pub use echarts::{EChartsInstance, EChartsRenderer};
pub use lifecycle::{ChartRenderer, ChartSlot, DrawingSurface};
pub use options::{BarStyle, ChartStyle, TooltipStyle, earnings_chart};
