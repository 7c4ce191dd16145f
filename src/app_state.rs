//! Implements a struct that holds the state of the web server.

use std::sync::Arc;

use crate::{finance::FinanceRecord, widget::WidgetConfig};

/// The ID of the chart element when none is configured.
pub const DEFAULT_CHART_ID: &str = "earnings-chart";

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The finance record shown on the chart. It is never modified after
    /// start-up and is shared between requests.
    pub record: Arc<FinanceRecord>,

    /// The options for the earnings widget.
    pub widget_config: WidgetConfig,

    /// The HTML ID of the element the chart is drawn on.
    pub chart_id: String,
}

impl AppState {
    /// Create a new [AppState] serving `record`.
    pub fn new(record: FinanceRecord, widget_config: WidgetConfig, chart_id: &str) -> Self {
        Self {
            record: Arc::new(record),
            widget_config,
            chart_id: chart_id.to_owned(),
        }
    }
}
