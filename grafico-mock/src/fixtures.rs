//! Deterministic quarterly report fixtures.

use grafico_types::QuarterlyReport;

/// Fiscal quarter-end dates, newest first, matching the upstream ordering.
const QUARTER_ENDS: &[&str] = &[
    "2023-12-31",
    "2023-09-30",
    "2023-06-30",
    "2023-03-31",
    "2022-12-31",
    "2022-09-30",
    "2022-06-30",
    "2022-03-31",
];

fn symbol_seed(symbol: &str) -> u64 {
    symbol.bytes().fold(11_u64, |acc, byte| {
        acc.wrapping_mul(31).wrapping_add(u64::from(byte))
    })
}

/// Quarterly income statements for `symbol`, newest first.
///
/// Values are derived from the symbol so different symbols chart differently,
/// but the same symbol always yields identical data.
#[must_use]
pub fn income_reports(symbol: &str) -> Vec<QuarterlyReport> {
    let seed = symbol_seed(symbol);
    QUARTER_ENDS
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let offset = i as u64;
            let revenue = (12_000 + (seed + offset * 7) % 9_000) * 1_000_000;
            let net = (900 + (seed + offset * 13) % 2_400) * 1_000_000;
            QuarterlyReport::income(*date, net.to_string(), revenue.to_string())
        })
        .collect()
}

/// Quarterly balance sheets for `symbol`, newest first, covering the same
/// periods as [`income_reports`].
#[must_use]
pub fn balance_reports(symbol: &str) -> Vec<QuarterlyReport> {
    let seed = symbol_seed(symbol);
    QUARTER_ENDS
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let offset = i as u64;
            let equity = (20_000 + (seed + offset * 5) % 6_000) * 1_000_000;
            QuarterlyReport::balance(*date, equity.to_string())
        })
        .collect()
}
