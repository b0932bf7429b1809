//! grafico-alphavantage
//!
//! Connector that implements the `grafico-core` fundamentals contracts on top
//! of the Alpha Vantage REST API. Exposes quarterly income statements and
//! balance sheets; the report records are relayed raw (text fields included)
//! so the core pipeline owns all numeric coercion.
#![warn(missing_docs)]

mod builder;
mod model;

use async_trait::async_trait;

use grafico_core::connector::{
    BalanceSheetProvider, FundamentalsConnector, IncomeStatementProvider, ReportType,
};
use grafico_types::{GraficoError, QuarterlyReport};

pub use builder::{API_KEY_ENV, AvConnectorBuilder};

use model::FundamentalsEnvelope;

/// Connector name used in error messages and logs.
const NAME: &str = "grafico-alphavantage";

/// Alpha Vantage fundamentals connector.
///
/// Construct via [`AvConnector::builder`]. Each fetch is one GET against
/// `/query` with `function`, `symbol`, and `apikey` parameters; the connector
/// performs no caching, retrying, or backoff — a throttled or failed call
/// surfaces as an error the caller treats as "no data yet".
pub struct AvConnector {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AvConnector {
    /// Returns a builder with production defaults.
    #[must_use]
    pub fn builder() -> AvConnectorBuilder {
        AvConnectorBuilder::new()
    }

    pub(crate) const fn from_parts(
        client: reqwest::Client,
        base_url: String,
        api_key: String,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), fields(connector = NAME))
    )]
    async fn fetch_reports(
        &self,
        report_type: ReportType,
        symbol: &str,
    ) -> Result<Vec<QuarterlyReport>, GraficoError> {
        let url = format!("{}/query", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("function", report_type.function()),
                ("symbol", symbol),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| GraficoError::connector(NAME, format!("transport error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GraficoError::connector(
                NAME,
                format!("upstream returned status {status}"),
            ));
        }

        let envelope: FundamentalsEnvelope = response
            .json()
            .await
            .map_err(|e| GraficoError::Data(format!("malformed {report_type} payload: {e}")))?;

        if let Some(msg) = envelope.error_message {
            return Err(GraficoError::not_found(format!(
                "{report_type} for {symbol}: {msg}"
            )));
        }
        if envelope.quarterly_reports.is_empty()
            && let Some(note) = envelope.throttle_note()
        {
            return Err(GraficoError::connector(NAME, note.to_owned()));
        }

        Ok(envelope.quarterly_reports)
    }
}

impl FundamentalsConnector for AvConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        Some(self)
    }

    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        Some(self)
    }
}

#[async_trait]
impl IncomeStatementProvider for AvConnector {
    async fn quarterly_income_statements(
        &self,
        symbol: &str,
    ) -> Result<Vec<QuarterlyReport>, GraficoError> {
        self.fetch_reports(ReportType::IncomeStatement, symbol).await
    }
}

#[async_trait]
impl BalanceSheetProvider for AvConnector {
    async fn quarterly_balance_sheets(
        &self,
        symbol: &str,
    ) -> Result<Vec<QuarterlyReport>, GraficoError> {
        self.fetch_reports(ReportType::BalanceSheet, symbol).await
    }
}
