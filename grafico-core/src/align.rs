//! Alignment of the two independently-fetched report collections.

use std::collections::HashMap;

use grafico_types::{GraficoError, QuarterlyReport};

/// The merged per-period series set, ordered as the income-statement
/// collection was delivered (newest-first from Alpha Vantage; never
/// re-sorted here).
///
/// Every value vector has the same length as `labels`; missing or unparsable
/// fields are carried as `0.0` rather than dropped, so positions stay in
/// lock-step across the three metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSeries {
    /// Period labels, one per income report (`fiscal_date_ending`).
    pub labels: Vec<String>,
    /// Net income per period.
    pub net_income: Vec<f64>,
    /// Total revenue per period.
    pub total_revenue: Vec<f64>,
    /// Total shareholder equity per period, from the balance sheets.
    pub total_shareholder_equity: Vec<f64>,
}

impl AlignedSeries {
    /// Number of periods in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when the series holds no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Merge the two collections positionally: the i-th balance sheet is assumed
/// to describe the same fiscal period as the i-th income statement.
///
/// Income reports drive the iteration order and the labels; no date matching
/// is performed between the two sides. A balance collection longer than the
/// income collection is truncated to the income length so every dataset stays
/// label-aligned.
///
/// # Errors
/// Returns [`GraficoError::MisalignedCollections`] when the balance
/// collection is shorter than the income collection, since the equity series
/// could not cover every period.
pub fn align(
    income: &[QuarterlyReport],
    balance: &[QuarterlyReport],
) -> Result<AlignedSeries, GraficoError> {
    if balance.len() < income.len() {
        return Err(GraficoError::misaligned_lengths(income.len(), balance.len()));
    }

    let mut labels = Vec::with_capacity(income.len());
    let mut net_income = Vec::with_capacity(income.len());
    let mut total_revenue = Vec::with_capacity(income.len());
    for report in income {
        labels.push(report.fiscal_date_ending.clone());
        net_income.push(report.net_income_value());
        total_revenue.push(report.total_revenue_value());
    }

    let total_shareholder_equity = balance
        .iter()
        .take(income.len())
        .map(QuarterlyReport::total_shareholder_equity_value)
        .collect();

    Ok(AlignedSeries {
        labels,
        net_income,
        total_revenue,
        total_shareholder_equity,
    })
}

/// Merge the two collections by fiscal period instead of by position.
///
/// The stricter alternative to [`align`]: each income report's
/// `fiscal_date_ending` is looked up among the balance sheets, so the two
/// sides may arrive in different orders or with extra balance periods.
///
/// # Errors
/// Returns [`GraficoError::MisalignedCollections`] naming the first income
/// period that has no balance-sheet counterpart.
pub fn align_by_period(
    income: &[QuarterlyReport],
    balance: &[QuarterlyReport],
) -> Result<AlignedSeries, GraficoError> {
    let by_period: HashMap<&str, &QuarterlyReport> = balance
        .iter()
        .map(|r| (r.fiscal_date_ending.as_str(), r))
        .collect();

    let mut labels = Vec::with_capacity(income.len());
    let mut net_income = Vec::with_capacity(income.len());
    let mut total_revenue = Vec::with_capacity(income.len());
    let mut total_shareholder_equity = Vec::with_capacity(income.len());
    for report in income {
        let period = report.fiscal_date_ending.as_str();
        let sheet = by_period
            .get(period)
            .ok_or_else(|| GraficoError::misaligned_missing_period(period))?;
        labels.push(report.fiscal_date_ending.clone());
        net_income.push(report.net_income_value());
        total_revenue.push(report.total_revenue_value());
        total_shareholder_equity.push(sheet.total_shareholder_equity_value());
    }

    Ok(AlignedSeries {
        labels,
        net_income,
        total_revenue,
        total_shareholder_equity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income(date: &str, net: &str, revenue: &str) -> QuarterlyReport {
        QuarterlyReport::income(date, net, revenue)
    }

    fn balance(date: &str, equity: &str) -> QuarterlyReport {
        QuarterlyReport::balance(date, equity)
    }

    #[test]
    fn positional_alignment_keeps_income_order_and_labels() {
        let income_reports = vec![
            income("2023-12-31", "3288000000", "17381000000"),
            income("2023-09-30", "1704000000", "14752000000"),
        ];
        let balance_reports = vec![
            balance("2023-12-31", "22533000000"),
            balance("2023-09-30", "23081000000"),
        ];

        let series = align(&income_reports, &balance_reports).expect("aligned");
        assert_eq!(series.len(), 2);
        assert_eq!(series.labels, vec!["2023-12-31", "2023-09-30"]);
        assert_eq!(series.net_income, vec![3_288_000_000.0, 1_704_000_000.0]);
        assert_eq!(
            series.total_revenue,
            vec![17_381_000_000.0, 14_752_000_000.0]
        );
        assert_eq!(
            series.total_shareholder_equity,
            vec![22_533_000_000.0, 23_081_000_000.0]
        );
    }

    #[test]
    fn empty_fields_coerce_to_zero() {
        let income_reports = vec![income("2023-12-31", "", "17381000000")];
        let balance_reports = vec![balance("2023-12-31", "None")];

        let series = align(&income_reports, &balance_reports).expect("aligned");
        assert_eq!(series.net_income, vec![0.0]);
        assert_eq!(series.total_revenue, vec![17_381_000_000.0]);
        assert_eq!(series.total_shareholder_equity, vec![0.0]);
    }

    #[test]
    fn shorter_balance_collection_is_misaligned() {
        let income_reports = vec![
            income("2023-12-31", "1", "2"),
            income("2023-09-30", "3", "4"),
        ];
        let balance_reports = vec![balance("2023-12-31", "5")];

        let err = align(&income_reports, &balance_reports).expect_err("misaligned");
        assert!(matches!(err, GraficoError::MisalignedCollections { .. }));
    }

    #[test]
    fn longer_balance_collection_is_truncated_to_income_length() {
        let income_reports = vec![income("2023-12-31", "1", "2")];
        let balance_reports = vec![
            balance("2023-12-31", "5"),
            balance("2023-09-30", "6"),
        ];

        let series = align(&income_reports, &balance_reports).expect("aligned");
        assert_eq!(series.total_shareholder_equity, vec![5.0]);
    }

    #[test]
    fn period_alignment_tolerates_reordered_balance_sheets() {
        let income_reports = vec![
            income("2023-12-31", "1", "2"),
            income("2023-09-30", "3", "4"),
        ];
        let balance_reports = vec![
            balance("2023-09-30", "6"),
            balance("2023-12-31", "5"),
        ];

        let series = align_by_period(&income_reports, &balance_reports).expect("aligned");
        assert_eq!(series.total_shareholder_equity, vec![5.0, 6.0]);
    }

    #[test]
    fn period_alignment_reports_the_missing_period() {
        let income_reports = vec![income("2023-12-31", "1", "2")];
        let balance_reports = vec![balance("2023-09-30", "6")];

        let err = align_by_period(&income_reports, &balance_reports).expect_err("misaligned");
        assert!(err.to_string().contains("2023-12-31"), "got: {err}");
    }
}
