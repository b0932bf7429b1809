//! Raw quarterly report records as delivered by fundamentals providers.

use serde::{Deserialize, Serialize};

/// One fiscal period's raw fundamentals figures.
///
/// Field values arrive as text and may be absent, empty, or non-numeric
/// (Alpha Vantage reports `"None"` for unavailable figures). Use
/// [`parse_metric`] or the typed accessors to obtain chart-ready numbers;
/// anything that does not parse cleanly is coerced to `0.0` so a single bad
/// field never drops a period from the series.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterlyReport {
    /// End date of the fiscal period; the alignment key and chart label.
    pub fiscal_date_ending: String,
    /// Net income for the period, as reported (income statements only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_income: Option<String>,
    /// Total revenue for the period, as reported (income statements only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<String>,
    /// Total shareholder equity for the period (balance sheets only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_shareholder_equity: Option<String>,
}

impl QuarterlyReport {
    /// Build an income-statement period record.
    pub fn income(
        fiscal_date_ending: impl Into<String>,
        net_income: impl Into<String>,
        total_revenue: impl Into<String>,
    ) -> Self {
        Self {
            fiscal_date_ending: fiscal_date_ending.into(),
            net_income: Some(net_income.into()),
            total_revenue: Some(total_revenue.into()),
            total_shareholder_equity: None,
        }
    }

    /// Build a balance-sheet period record.
    pub fn balance(
        fiscal_date_ending: impl Into<String>,
        total_shareholder_equity: impl Into<String>,
    ) -> Self {
        Self {
            fiscal_date_ending: fiscal_date_ending.into(),
            net_income: None,
            total_revenue: None,
            total_shareholder_equity: Some(total_shareholder_equity.into()),
        }
    }

    /// Net income as a chart-ready number (`0.0` when missing or unparsable).
    #[must_use]
    pub fn net_income_value(&self) -> f64 {
        parse_metric(self.net_income.as_deref())
    }

    /// Total revenue as a chart-ready number (`0.0` when missing or unparsable).
    #[must_use]
    pub fn total_revenue_value(&self) -> f64 {
        parse_metric(self.total_revenue.as_deref())
    }

    /// Total shareholder equity as a chart-ready number (`0.0` when missing or unparsable).
    #[must_use]
    pub fn total_shareholder_equity_value(&self) -> f64 {
        parse_metric(self.total_shareholder_equity.as_deref())
    }
}

/// Parse a raw metric field into a chart-ready number.
///
/// Missing, empty, and non-numeric values all coerce to `0.0`. The coercion is
/// deliberate: a period with one bad field still renders, and `NaN` can never
/// enter a dataset.
#[must_use]
pub fn parse_metric(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_metric_handles_missing_empty_and_garbage() {
        assert_eq!(parse_metric(None), 0.0);
        assert_eq!(parse_metric(Some("")), 0.0);
        assert_eq!(parse_metric(Some("None")), 0.0);
        assert_eq!(parse_metric(Some("NaN")), 0.0);
        assert_eq!(parse_metric(Some("1605500000")), 1_605_500_000.0);
        assert_eq!(parse_metric(Some("-42.5")), -42.5);
    }
}
