//! Reshapes a finance record into the values and axis labels of a bar chart.

use std::fmt::Display;

use crate::{finance::FinanceRecord, period::Period};

/// Month names in calendar order, used as axis labels for the year and
/// half-year views.
pub const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// A label on the category axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisLabel {
    /// A month name.
    Month(&'static str),
    /// A day of the month, starting from 1.
    Day(usize),
}

impl Display for AxisLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisLabel::Month(name) => write!(f, "{name}"),
            AxisLabel::Day(day) => write!(f, "{day}"),
        }
    }
}

/// The values and labels of one chart render.
///
/// `values` and `labels` always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    values: Vec<f64>,
    labels: Vec<AxisLabel>,
}

impl Series {
    /// The bar heights, in the order of the source slots.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// One label per value.
    pub fn labels(&self) -> &[AxisLabel] {
        &self.labels
    }

    /// The number of bars.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no bars.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The labels as strings, as expected by the category axis.
    pub fn label_strings(&self) -> Vec<String> {
        self.labels.iter().map(ToString::to_string).collect()
    }
}

/// Builds the chart series for `period` from the most recent snapshot in
/// `record`.
///
/// Missing amounts become zero. A record without snapshots gives an empty
/// series.
pub fn build_series(record: &FinanceRecord, period: Period) -> Series {
    let Some(latest) = record.latest() else {
        return Series::default();
    };

    let values: Vec<f64> = latest
        .graph
        .slots(period)
        .values()
        .map(|value| value.unwrap_or(0.0))
        .collect();
    let labels = build_labels(period, values.len());

    Series { values, labels }
}

/// Builds `count` axis labels for `period`.
///
/// Month names wrap around after December so that every value gets a label.
pub fn build_labels(period: Period, count: usize) -> Vec<AxisLabel> {
    match period {
        Period::Year | Period::HalfYear => MONTH_NAMES
            .into_iter()
            .cycle()
            .take(count)
            .map(AxisLabel::Month)
            .collect(),
        Period::Month => (1..=count).map(AxisLabel::Day).collect(),
    }
}
