//! The aggregation period shown on the chart and the selector that holds it.

use std::{fmt::Display, str::FromStr};

use crate::Error;

/// The text shown next to the period drop-down.
pub const SELECTOR_LABEL: &str = "Выбрать период: ";

/// A temporal granularity over which earnings are bucketed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Period {
    /// Monthly totals for the last year.
    #[default]
    Year,
    /// Monthly totals for the last six months.
    HalfYear,
    /// Daily totals for the last month.
    Month,
}

impl Period {
    /// Every period, in the order they are offered to the user.
    pub const ALL: [Period; 3] = [Period::Year, Period::HalfYear, Period::Month];

    /// The value used for the period in query strings and form fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Year => "year",
            Period::HalfYear => "half_year",
            Period::Month => "month",
        }
    }

    /// The human-readable name shown in the drop-down.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Year => "За последний год",
            Period::HalfYear => "За последние 6 месяцев",
            Period::Month => "За последний месяц",
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|period| period.as_str() == s)
            .ok_or_else(|| Error::InvalidPeriod(s.to_owned()))
    }
}

/// Holds the selected period.
///
/// The selector starts at [Period::Year]. With the month view disabled it
/// offers only [Period::Year] and [Period::HalfYear].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSelector {
    selected: Period,
    enable_month_view: bool,
}

impl PeriodSelector {
    /// Create a selector at [Period::Year].
    pub fn new(enable_month_view: bool) -> Self {
        Self {
            selected: Period::default(),
            enable_month_view,
        }
    }

    /// The selected period.
    pub fn selected(&self) -> Period {
        self.selected
    }

    /// The periods the user may choose from.
    pub fn options(&self) -> Vec<Period> {
        Period::ALL
            .into_iter()
            .filter(|period| self.is_available(*period))
            .collect()
    }

    /// Whether the user may choose `period`.
    pub fn is_available(&self, period: Period) -> bool {
        period != Period::Month || self.enable_month_view
    }

    /// Change the selected period.
    ///
    /// Returns `true` if the selection changed.
    ///
    /// # Errors
    /// Returns [Error::PeriodUnavailable] if `period` is not offered by this
    /// selector. The selection is left unchanged.
    pub fn select(&mut self, period: Period) -> Result<bool, Error> {
        if !self.is_available(period) {
            return Err(Error::PeriodUnavailable(period));
        }

        let changed = self.selected != period;
        self.selected = period;

        Ok(changed)
    }
}

impl Default for PeriodSelector {
    fn default() -> Self {
        Self::new(true)
    }
}
