//! grafico-mock
//!
//! Mock connector for CI-safe tests and examples. Provides deterministic
//! per-symbol data from fixtures, with builder hooks to override either
//! capability and reserved symbols to force failure modes.
#![warn(missing_docs)]

pub mod fixtures;

use std::sync::Arc;

use async_trait::async_trait;

use grafico_core::connector::{
    BalanceSheetProvider, FundamentalsConnector, IncomeStatementProvider,
};
use grafico_types::{GraficoError, QuarterlyReport};

type ReportsFn =
    Arc<dyn Fn(&str) -> Result<Vec<QuarterlyReport>, GraficoError> + Send + Sync>;

/// Symbol reserved to force a connector failure from either capability.
pub const FAIL_SYMBOL: &str = "FAIL";
/// Symbol reserved to return empty report collections.
pub const EMPTY_SYMBOL: &str = "EMPTY";

/// Mock connector with deterministic fixture data.
///
/// The default connector serves [`fixtures`] data for any symbol except the
/// reserved [`FAIL_SYMBOL`] and [`EMPTY_SYMBOL`]. Use [`MockConnector::builder`]
/// to override a capability with a closure or to withhold one entirely.
pub struct MockConnector {
    name: &'static str,
    income: Option<ReportsFn>,
    balance: Option<ReportsFn>,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector serving fixture data for both capabilities.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for a customized mock.
    #[must_use]
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }

    fn default_income(symbol: &str) -> Result<Vec<QuarterlyReport>, GraficoError> {
        Self::reserved(symbol, "income-statement")?;
        Ok(fixtures::income_reports(symbol))
    }

    fn default_balance(symbol: &str) -> Result<Vec<QuarterlyReport>, GraficoError> {
        Self::reserved(symbol, "balance-sheet")?;
        Ok(fixtures::balance_reports(symbol))
    }

    fn reserved(symbol: &str, capability: &str) -> Result<(), GraficoError> {
        if symbol == FAIL_SYMBOL {
            return Err(GraficoError::connector(
                "grafico-mock",
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

impl FundamentalsConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        self.income.as_ref().map(|_| self as &dyn IncomeStatementProvider)
    }

    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        self.balance.as_ref().map(|_| self as &dyn BalanceSheetProvider)
    }
}

#[async_trait]
impl IncomeStatementProvider for MockConnector {
    async fn quarterly_income_statements(
        &self,
        symbol: &str,
    ) -> Result<Vec<QuarterlyReport>, GraficoError> {
        match &self.income {
            Some(f) => f(symbol),
            None => Err(GraficoError::unsupported("fundamentals/income-statement")),
        }
    }
}

#[async_trait]
impl BalanceSheetProvider for MockConnector {
    async fn quarterly_balance_sheets(
        &self,
        symbol: &str,
    ) -> Result<Vec<QuarterlyReport>, GraficoError> {
        match &self.balance {
            Some(f) => f(symbol),
            None => Err(GraficoError::unsupported("fundamentals/balance-sheet")),
        }
    }
}

/// Builder for [`MockConnector`].
pub struct MockConnectorBuilder {
    name: &'static str,
    income: Option<ReportsFn>,
    balance: Option<ReportsFn>,
}

impl Default for MockConnectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnectorBuilder {
    /// Start from the fixture-backed defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "grafico-mock",
            income: Some(Arc::new(|symbol| {
                if symbol == EMPTY_SYMBOL {
                    return Ok(vec![]);
                }
                MockConnector::default_income(symbol)
            })),
            balance: Some(Arc::new(|symbol| {
                if symbol == EMPTY_SYMBOL {
                    return Ok(vec![]);
                }
                MockConnector::default_balance(symbol)
            })),
        }
    }

    /// Override the connector name reported in errors and logs.
    #[must_use]
    pub const fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Replace the income-statement capability with a closure.
    #[must_use]
    pub fn with_income_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<Vec<QuarterlyReport>, GraficoError> + Send + Sync + 'static,
    {
        self.income = Some(Arc::new(f));
        self
    }

    /// Replace the balance-sheet capability with a closure.
    #[must_use]
    pub fn with_balance_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<Vec<QuarterlyReport>, GraficoError> + Send + Sync + 'static,
    {
        self.balance = Some(Arc::new(f));
        self
    }

    /// Withhold the income-statement capability entirely.
    #[must_use]
    pub fn without_income_statements(mut self) -> Self {
        self.income = None;
        self
    }

    /// Withhold the balance-sheet capability entirely.
    #[must_use]
    pub fn without_balance_sheets(mut self) -> Self {
        self.balance = None;
        self
    }

    /// Finalize the connector.
    #[must_use]
    pub fn build(self) -> MockConnector {
        MockConnector {
            name: self.name,
            income: self.income,
            balance: self.balance,
        }
    }
}
