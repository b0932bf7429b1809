//! Assembly of the rendering-ready chart configuration.

use chrono::NaiveDate;

use grafico_types::{DateRangeSelection, GraficoError, QuarterlyReport, TickLabel};

use crate::abbrev;
use crate::align;

/// Dataset display name for the net-income series.
pub const NET_INCOME_LABEL: &str = "Net Income";
/// Dataset display name for the total-revenue series.
pub const TOTAL_REVENUE_LABEL: &str = "Total Revenue";
/// Dataset display name for the shareholder-equity series.
pub const TOTAL_SHAREHOLDER_EQUITY_LABEL: &str = "Total Shareholder Equity";

/// One named value series of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Display name shown in the chart legend.
    pub name: String,
    /// One value per period label, same order as `ChartSeriesConfig::labels`.
    pub values: Vec<f64>,
}

/// One endpoint of the time axis.
///
/// A user selection resolves to a concrete calendar date; without a selection
/// the bound falls back to one of the chart's own period labels, which the
/// renderer's time scale parses like any other label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisBound {
    /// Bound resolved from a quarter label chosen by the user.
    Date(NaiveDate),
    /// Bound borrowed from an outermost period label of the series.
    Label(String),
}

impl AxisBound {
    /// The bound rendered as axis-consumable text (`YYYY-MM-DD` either way).
    #[must_use]
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Date(date) => date.format("%Y-%m-%d").to_string(),
            Self::Label(label) => label.clone(),
        }
    }
}

/// Minimum and maximum bound of the time axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisBounds {
    /// Oldest period displayed.
    pub min: AxisBound,
    /// Newest period displayed.
    pub max: AxisBound,
}

/// The rendering-ready chart structure handed to a `ChartRenderer`.
///
/// Invariant: every dataset's value vector has the same length as `labels`.
/// Rebuilt from scratch on every input change; never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeriesConfig {
    /// Period-identifying strings, in source (newest-first) order.
    pub labels: Vec<String>,
    /// The three named metric series.
    pub datasets: Vec<Dataset>,
    /// Time-axis bounds.
    pub axis_bounds: AxisBounds,
    /// Formatter applied to y-axis tick values.
    pub tick_formatter: fn(f64) -> TickLabel,
}

impl ChartSeriesConfig {
    /// Apply the configured tick formatter to a y-axis value.
    #[must_use]
    pub fn format_tick(&self, value: f64) -> TickLabel {
        (self.tick_formatter)(value)
    }
}

/// Outcome of a pipeline run: either a drawable configuration or nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    /// A complete configuration the renderer may draw.
    Ready(ChartSeriesConfig),
    /// At least one report collection was empty, still loading, or failed;
    /// the renderer must not attempt to draw.
    NoData,
}

impl ChartData {
    /// True when there is nothing to draw.
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    /// Borrow the configuration, if one was produced.
    #[must_use]
    pub const fn config(&self) -> Option<&ChartSeriesConfig> {
        match self {
            Self::Ready(config) => Some(config),
            Self::NoData => None,
        }
    }
}

/// Build the chart configuration from the two raw report collections.
///
/// Either collection being empty yields [`ChartData::NoData`] rather than an
/// empty-but-valid series. Otherwise the collections are aligned
/// positionally, the axis bounds are resolved from `selection` (or fall back
/// to the outermost labels: the source order is newest-first, so the axis
/// minimum is the *last* label and the maximum the *first*), and the
/// magnitude abbreviator is attached as the tick formatter.
///
/// The pipeline is pure: identical inputs produce structurally equal
/// configurations, and nothing is cached between runs.
///
/// # Errors
/// Returns [`GraficoError::MisalignedCollections`] when the non-empty
/// collections cannot be paired period-for-period.
pub fn build(
    income: &[QuarterlyReport],
    balance: &[QuarterlyReport],
    selection: Option<&DateRangeSelection>,
) -> Result<ChartData, GraficoError> {
    if income.is_empty() || balance.is_empty() {
        return Ok(ChartData::NoData);
    }

    let series = align::align(income, balance)?;

    let axis_bounds = match selection {
        Some(range) => AxisBounds {
            min: AxisBound::Date(range.start.start_date()),
            max: AxisBound::Date(range.end.start_date()),
        },
        None => AxisBounds {
            min: AxisBound::Label(series.labels.last().cloned().unwrap_or_default()),
            max: AxisBound::Label(series.labels.first().cloned().unwrap_or_default()),
        },
    };

    let datasets = vec![
        Dataset {
            name: NET_INCOME_LABEL.to_owned(),
            values: series.net_income,
        },
        Dataset {
            name: TOTAL_REVENUE_LABEL.to_owned(),
            values: series.total_revenue,
        },
        Dataset {
            name: TOTAL_SHAREHOLDER_EQUITY_LABEL.to_owned(),
            values: series.total_shareholder_equity,
        },
    ];

    Ok(ChartData::Ready(ChartSeriesConfig {
        labels: series.labels,
        datasets,
        axis_bounds,
        tick_formatter: abbrev::abbreviate,
    }))
}
