//! Earnings page HTTP handlers and view rendering.
//!
//! The page shows a period drop-down above the earnings bar chart. Changing
//! the drop-down sends an htmx request for the same page, which returns only
//! the chart section.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, PreEscaped, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    chart::{DrawingSurface, EChartsRenderer},
    endpoints,
    finance::FinanceRecord,
    html::{
        ECHARTS_SCRIPT, FORM_LABEL_STYLE, FORM_SELECT_STYLE, HeadElement, PAGE_CONTAINER_STYLE,
        base,
    },
    period::{Period, SELECTOR_LABEL},
    widget::{EarningsWidget, WidgetConfig},
};

/// The ID of the element that htmx swaps when the period changes.
const CHART_SECTION_ID: &str = "chart-section";

/// The state needed for displaying the earnings page.
#[derive(Debug, Clone)]
pub struct EarningsState {
    pub record: Arc<FinanceRecord>,
    pub widget_config: WidgetConfig,
    pub chart_id: String,
}

impl FromRef<AppState> for EarningsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            record: state.record.clone(),
            widget_config: state.widget_config.clone(),
            chart_id: state.chart_id.clone(),
        }
    }
}

/// The query string of the earnings page.
///
/// The period is parsed by the handler so that an unknown value can be
/// reported to the user instead of producing a bare extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    pub period: Option<String>,
}

type EarningsChartWidget = EarningsWidget<EChartsRenderer>;

/// Display the earnings chart for the requested period.
///
/// Requests made by htmx get only the chart section.
pub async fn get_earnings_page(
    State(state): State<EarningsState>,
    HxRequest(is_htmx_request): HxRequest,
    Query(query): Query<PeriodQuery>,
) -> Response {
    let widget = match build_widget(&state, query.period.as_deref()) {
        Ok(widget) => widget,
        Err(error) if is_htmx_request => {
            tracing::warn!("rejected period selection: {error}");
            return error.into_alert_response();
        }
        Err(error) => {
            tracing::warn!("rejected period selection: {error}");
            return error.into_response();
        }
    };

    if is_htmx_request {
        chart_section(&widget).into_response()
    } else {
        earnings_view(&widget).into_response()
    }
}

/// Builds a widget for `period` and mounts it.
///
/// # Errors
/// Returns [Error::InvalidPeriod] if `period` is not a period name, or
/// [Error::PeriodUnavailable] if the period is disabled.
fn build_widget(state: &EarningsState, period: Option<&str>) -> Result<EarningsChartWidget, Error> {
    let period = match period {
        Some(period) => period.parse()?,
        None => Period::default(),
    };

    let mut widget = EarningsWidget::new(
        state.record.clone(),
        &state.widget_config,
        EChartsRenderer,
        DrawingSurface::new(&state.chart_id),
    );
    widget.select(period)?;

    Ok(widget)
}

/// Renders the full earnings page.
fn earnings_view(widget: &EarningsChartWidget) -> Markup {
    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl"
            {
                h2 class="text-xl font-bold mb-4" { "Доходы" }

                (period_selector(widget))

                div id=(CHART_SECTION_ID) class="w-full"
                {
                    (chart_section(widget))
                }
            }
        }
    );

    let head_elements = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        HeadElement::Style(PreEscaped(
            r#"
            .chart-container {
                min-height: 380px;
            }
            "#
            .to_owned(),
        )),
    ];

    base("Доходы", &head_elements, &content)
}

/// The period drop-down, which requests the chart section whenever it changes.
fn period_selector(widget: &EarningsChartWidget) -> Markup {
    let selected = widget.selected();

    html!(
        form
            hx-get=(endpoints::EARNINGS_VIEW)
            hx-target={"#" (CHART_SECTION_ID)}
            hx-target-error="#alert-container"
            hx-swap="innerHTML"
            hx-trigger="change"
            hx-push-url="true"
            class="flex items-center gap-2 mb-4"
        {
            label for="period" class=(FORM_LABEL_STYLE) { (SELECTOR_LABEL) }

            select id="period" name="period" class=(FORM_SELECT_STYLE)
            {
                @for period in widget.options() {
                    option value=(period.as_str()) selected[period == selected]
                    {
                        (period.label())
                    }
                }
            }
        }
    )
}

/// The chart container and its initialisation script, or a placeholder if
/// the chart could not be created.
fn chart_section(widget: &EarningsChartWidget) -> Markup {
    match widget.chart() {
        Some(instance) => html!(
            div
                id=(instance.element_id())
                class="chart-container w-full rounded dark:bg-gray-100"
                data-period=(widget.selected().as_str())
            {}

            script { (PreEscaped(instance.init_script())) }
        ),
        None => html!(
            div
                class="chart-placeholder w-full p-8 text-center rounded
                    bg-gray-100 dark:bg-gray-800 text-gray-500"
            {
                p { "График недоступен" }
            }
        ),
    }
}
