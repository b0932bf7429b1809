use std::fmt;

use async_trait::async_trait;

use grafico_types::{GraficoError, QuarterlyReport};

/// The two report collections a fundamentals source can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportType {
    /// Quarterly income statements (net income, total revenue).
    IncomeStatement,
    /// Quarterly balance sheets (total shareholder equity).
    BalanceSheet,
}

impl ReportType {
    /// Upstream function name for REST-style providers.
    #[must_use]
    pub const fn function(self) -> &'static str {
        match self {
            Self::IncomeStatement => "INCOME_STATEMENT",
            Self::BalanceSheet => "BALANCE_SHEET",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function())
    }
}

/// Focused role trait for connectors that provide quarterly income statements.
#[async_trait]
pub trait IncomeStatementProvider: Send + Sync {
    /// Fetch quarterly income-statement reports for `symbol`, newest first.
    async fn quarterly_income_statements(
        &self,
        symbol: &str,
    ) -> Result<Vec<QuarterlyReport>, GraficoError>;
}

/// Focused role trait for connectors that provide quarterly balance sheets.
#[async_trait]
pub trait BalanceSheetProvider: Send + Sync {
    /// Fetch quarterly balance-sheet reports for `symbol`, newest first.
    async fn quarterly_balance_sheets(
        &self,
        symbol: &str,
    ) -> Result<Vec<QuarterlyReport>, GraficoError>;
}

/// Primary connector interface: identification plus capability accessors.
///
/// Accessors default to `None`; a connector advertises a capability by
/// returning `Some(self)` for the matching role trait. Callers treat an
/// absent capability as [`GraficoError::Unsupported`].
pub trait FundamentalsConnector: Send + Sync {
    /// Stable connector name used in error messages and logs.
    fn name(&self) -> &'static str;

    /// Access the income-statement capability, if implemented.
    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        None
    }

    /// Access the balance-sheet capability, if implemented.
    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        None
    }
}
