//! The earnings widget: a period selector driving a bar chart.

use std::sync::Arc;

use crate::{
    Error,
    chart::{ChartRenderer, ChartSlot, ChartStyle, DrawingSurface, earnings_chart},
    finance::FinanceRecord,
    period::{Period, PeriodSelector},
    series::{Series, build_series},
};

/// Options that parameterise the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Whether the last-month view is offered. When `false` only the year and
    /// half-year views are available.
    pub enable_month_view: bool,
    /// How the chart looks.
    pub style: ChartStyle,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            enable_month_view: true,
            style: ChartStyle::default(),
        }
    }
}

/// A finance record shown as a bar chart for the selected period.
///
/// Any change to the record or the selected period rebuilds the series and
/// replaces the chart. The chart is released when the widget is dropped.
pub struct EarningsWidget<R: ChartRenderer> {
    record: Arc<FinanceRecord>,
    selector: PeriodSelector,
    style: ChartStyle,
    series: Series,
    slot: ChartSlot<R>,
}

impl<R: ChartRenderer> EarningsWidget<R> {
    /// Create an unmounted widget drawing on `surface` with `renderer`.
    pub fn new(
        record: Arc<FinanceRecord>,
        config: &WidgetConfig,
        renderer: R,
        surface: DrawingSurface,
    ) -> Self {
        Self {
            record,
            selector: PeriodSelector::new(config.enable_month_view),
            style: config.style.clone(),
            series: Series::default(),
            slot: ChartSlot::new(renderer, surface),
        }
    }

    /// Draw the chart for the current period.
    pub fn mount(&mut self) {
        self.refresh();
    }

    /// Select `period` and redraw the chart if the selection changed or the
    /// widget is not mounted yet.
    ///
    /// # Errors
    /// Returns [Error::PeriodUnavailable] if the period is not offered. The
    /// chart is left as it was.
    pub fn select(&mut self, period: Period) -> Result<(), Error> {
        let changed = self.selector.select(period)?;

        if changed || !self.slot.is_mounted() {
            self.refresh();
        }

        Ok(())
    }

    /// Replace the finance record and redraw the chart.
    pub fn set_record(&mut self, record: Arc<FinanceRecord>) {
        self.record = record;
        self.refresh();
    }

    /// Release the chart. The widget can be mounted again later.
    pub fn unmount(&mut self) {
        self.slot.release();
    }

    /// The selected period.
    pub fn selected(&self) -> Period {
        self.selector.selected()
    }

    /// The periods the user may choose from.
    pub fn options(&self) -> Vec<Period> {
        self.selector.options()
    }

    /// The series drawn by the last render.
    pub fn series(&self) -> &Series {
        &self.series
    }

    /// The live chart instance, or `None` if the surface was unavailable or
    /// the widget is not mounted.
    pub fn chart(&self) -> Option<&R::Instance> {
        self.slot.instance()
    }

    /// The surface the chart is drawn on.
    pub fn surface(&self) -> &DrawingSurface {
        self.slot.surface()
    }

    #[cfg(test)]
    pub(crate) fn renderer(&self) -> &R {
        self.slot.renderer()
    }

    fn refresh(&mut self) {
        let period = self.selector.selected();
        self.series = build_series(&self.record, period);
        tracing::debug!("rendering {} earnings for {period}", self.series.len());

        let chart = earnings_chart(&self.series, &self.style);
        // A missing surface is not fatal: the slot logs it and the caller
        // shows a placeholder instead of the chart.
        let _ = self.slot.render(&chart);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        Error,
        chart::{
            DrawingSurface,
            test_utils::{Event, RecordingRenderer},
        },
        finance::{FinanceData, FinanceRecord},
        period::Period,
        series::AxisLabel,
    };

    use super::{EarningsWidget, WidgetConfig};

    fn test_record() -> Arc<FinanceRecord> {
        let data = FinanceData::from_json_str(
            r#"{"finance": {"periods": [{"graph": {
                "year": {"0": 100, "1": null, "2": 300},
                "half_year": {"0": 1, "1": 2},
                "month": {"1": 5, "2": null, "3": 7, "4": 8}
            }}]}}"#,
        )
        .unwrap();

        Arc::new(data.finance)
    }

    fn new_widget(config: &WidgetConfig) -> EarningsWidget<RecordingRenderer> {
        EarningsWidget::new(
            test_record(),
            config,
            RecordingRenderer::default(),
            DrawingSurface::new("earnings-chart"),
        )
    }

    #[test]
    fn mount_renders_year_by_default() {
        let mut widget = new_widget(&WidgetConfig::default());

        widget.mount();

        assert_eq!(widget.selected(), Period::Year);
        assert_eq!(widget.series().values(), &[100.0, 0.0, 300.0]);
        assert_eq!(
            widget.series().labels(),
            &[
                AxisLabel::Month("Январь"),
                AxisLabel::Month("Февраль"),
                AxisLabel::Month("Март"),
            ]
        );
        assert_eq!(widget.chart(), Some(&0));
    }

    #[test]
    fn switching_periods_leaves_one_live_chart() {
        let mut widget = new_widget(&WidgetConfig::default());
        let events = widget.renderer().events();

        widget.mount();
        widget.select(Period::Month).unwrap();
        widget.select(Period::HalfYear).unwrap();

        assert_eq!(
            *events.borrow(),
            vec![
                Event::Create(0),
                Event::Destroy(0),
                Event::Create(1),
                Event::Destroy(1),
                Event::Create(2),
            ]
        );
        assert_eq!(widget.renderer().live_instances(), 1);
        assert_eq!(widget.series().values(), &[1.0, 2.0]);
    }

    #[test]
    fn month_view_uses_day_labels() {
        let mut widget = new_widget(&WidgetConfig::default());

        widget.select(Period::Month).unwrap();

        assert_eq!(widget.series().values(), &[5.0, 0.0, 7.0, 8.0]);
        assert_eq!(
            widget.series().labels(),
            &[
                AxisLabel::Day(1),
                AxisLabel::Day(2),
                AxisLabel::Day(3),
                AxisLabel::Day(4),
            ]
        );
    }

    #[test]
    fn reselecting_same_period_does_not_redraw() {
        let mut widget = new_widget(&WidgetConfig::default());
        let events = widget.renderer().events();
        widget.mount();

        widget.select(Period::Year).unwrap();

        assert_eq!(*events.borrow(), vec![Event::Create(0)]);
    }

    #[test]
    fn select_mounts_an_unmounted_widget() {
        let mut widget = new_widget(&WidgetConfig::default());

        widget.select(Period::Year).unwrap();

        assert!(widget.chart().is_some());
    }

    #[test]
    fn unavailable_period_is_rejected_without_redraw() {
        let config = WidgetConfig {
            enable_month_view: false,
            ..Default::default()
        };
        let mut widget = new_widget(&config);
        let events = widget.renderer().events();
        widget.mount();

        let result = widget.select(Period::Month);

        assert_eq!(result, Err(Error::PeriodUnavailable(Period::Month)));
        assert_eq!(widget.selected(), Period::Year);
        assert_eq!(widget.options(), vec![Period::Year, Period::HalfYear]);
        assert_eq!(*events.borrow(), vec![Event::Create(0)]);
    }

    #[test]
    fn new_record_redraws_chart() {
        let mut widget = new_widget(&WidgetConfig::default());
        let events = widget.renderer().events();
        widget.mount();

        widget.set_record(Arc::new(FinanceRecord::default()));

        assert!(widget.series().is_empty());
        assert_eq!(
            *events.borrow(),
            vec![Event::Create(0), Event::Destroy(0), Event::Create(1)]
        );
    }

    #[test]
    fn dropping_widget_releases_chart() {
        let mut widget = new_widget(&WidgetConfig::default());
        let events = widget.renderer().events();
        widget.mount();
        widget.select(Period::Month).unwrap();

        drop(widget);

        assert_eq!(
            *events.borrow(),
            vec![
                Event::Create(0),
                Event::Destroy(0),
                Event::Create(1),
                Event::Destroy(1),
            ]
        );
    }

    #[test]
    fn unmount_then_mount_again() {
        let mut widget = new_widget(&WidgetConfig::default());
        let events = widget.renderer().events();
        widget.mount();

        widget.unmount();
        widget.mount();

        assert_eq!(
            *events.borrow(),
            vec![Event::Create(0), Event::Destroy(0), Event::Create(1)]
        );
    }
}
