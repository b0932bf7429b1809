use std::sync::Arc;

use grafico_core::connector::FundamentalsConnector;
use grafico_core::pipeline::{self, ChartData};
use grafico_core::render::{ChartHandle, ChartRenderer};
use grafico_types::{DateRangeSelection, GraficoError, QuarterlyReport};

/// Immutable snapshot of the two report collections for one symbol.
///
/// Both fetches must have succeeded to obtain a snapshot; a rebuild always
/// reads a snapshot taken as a whole, never a partial merge of responses
/// from different requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundamentalsSnapshot {
    /// Quarterly income statements, newest first.
    pub income: Vec<QuarterlyReport>,
    /// Quarterly balance sheets, newest first.
    pub balance: Vec<QuarterlyReport>,
}

/// Orchestrator that turns a symbol into chart data via one registered
/// fundamentals connector.
pub struct Grafico {
    connector: Arc<dyn FundamentalsConnector>,
    selection: Option<DateRangeSelection>,
}

/// Builder for constructing a [`Grafico`] orchestrator.
pub struct GraficoBuilder {
    connector: Option<Arc<dyn FundamentalsConnector>>,
    selection: Option<DateRangeSelection>,
}

impl Default for GraficoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraficoBuilder {
    /// Create a new builder with no connector and no date range.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            connector: None,
            selection: None,
        }
    }

    /// Register the fundamentals connector.
    ///
    /// Exactly one connector serves both report types; registering a second
    /// replaces the first.
    #[must_use]
    pub fn with_connector(mut self, connector: Arc<dyn FundamentalsConnector>) -> Self {
        self.connector = Some(connector);
        self
    }

    /// Restrict the time axis to a quarter range by default.
    ///
    /// The range only narrows what the axis displays; it never filters the
    /// fetched reports. Without one, axis bounds fall back to the outermost
    /// period labels of each chart.
    #[must_use]
    pub const fn date_range(mut self, selection: DateRangeSelection) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Finalize the orchestrator.
    ///
    /// # Errors
    /// Returns [`GraficoError::InvalidArg`] when no connector was registered.
    pub fn build(self) -> Result<Grafico, GraficoError> {
        let connector = self
            .connector
            .ok_or_else(|| GraficoError::InvalidArg("no connector registered".to_owned()))?;
        Ok(Grafico {
            connector,
            selection: self.selection,
        })
    }
}

impl std::fmt::Debug for Grafico {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grafico")
            .field("connector", &self.connector.name())
            .field("selection", &self.selection)
            .finish()
    }
}

impl Grafico {
    /// Returns a builder for the orchestrator.
    #[must_use]
    pub const fn builder() -> GraficoBuilder {
        GraficoBuilder::new()
    }

    /// The currently selected date range, if any.
    #[must_use]
    pub const fn date_range(&self) -> Option<&DateRangeSelection> {
        self.selection.as_ref()
    }

    /// Change or clear the date-range selection for subsequent rebuilds.
    pub const fn set_date_range(&mut self, selection: Option<DateRangeSelection>) {
        self.selection = selection;
    }

    /// Fetch both report collections for `symbol` concurrently.
    ///
    /// The two requests are independent; this waits for both and fails if
    /// either fails. There is no cancellation of the sibling request beyond
    /// dropping its future, and no retry — a failed or throttled fetch is
    /// simply reported.
    ///
    /// # Errors
    /// [`GraficoError::Unsupported`] when the connector lacks either
    /// capability; otherwise whatever the connector reports.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn fetch_fundamentals(
        &self,
        symbol: &str,
    ) -> Result<FundamentalsSnapshot, GraficoError> {
        let income_provider = self
            .connector
            .as_income_statement_provider()
            .ok_or_else(|| GraficoError::unsupported("fundamentals/income-statement"))?;
        let balance_provider = self
            .connector
            .as_balance_sheet_provider()
            .ok_or_else(|| GraficoError::unsupported("fundamentals/balance-sheet"))?;

        let (income, balance) = futures::try_join!(
            income_provider.quarterly_income_statements(symbol),
            balance_provider.quarterly_balance_sheets(symbol),
        )?;

        Ok(FundamentalsSnapshot { income, balance })
    }

    /// Fetch and build the chart data for `symbol` using the configured
    /// date range.
    ///
    /// Fetch failures, missing capabilities, and not-found symbols all
    /// collapse into [`ChartData::NoData`]: the user sees no chart rather
    /// than an error. Validation failures (a misaligned pair of collections)
    /// still surface as errors.
    ///
    /// # Errors
    /// Returns [`GraficoError::MisalignedCollections`] when the fetched
    /// collections cannot be paired period-for-period.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn chart_data(&self, symbol: &str) -> Result<ChartData, GraficoError> {
        self.chart_data_inner(symbol, self.selection.as_ref()).await
    }

    /// Like [`chart_data`](Self::chart_data) with an explicit range,
    /// ignoring the configured one.
    ///
    /// # Errors
    /// Same as [`chart_data`](Self::chart_data).
    pub async fn chart_data_with_range(
        &self,
        symbol: &str,
        selection: &DateRangeSelection,
    ) -> Result<ChartData, GraficoError> {
        self.chart_data_inner(symbol, Some(selection)).await
    }

    async fn chart_data_inner(
        &self,
        symbol: &str,
        selection: Option<&DateRangeSelection>,
    ) -> Result<ChartData, GraficoError> {
        let snapshot = match self.fetch_fundamentals(symbol).await {
            Ok(snapshot) => snapshot,
            Err(e) if e.is_incomplete_data() => {
                #[cfg(feature = "tracing")]
                tracing::debug!(symbol, error = %e, "treating fetch failure as no data");
                return Ok(ChartData::NoData);
            }
            Err(e) => return Err(e),
        };
        pipeline::build(&snapshot.income, &snapshot.balance, selection)
    }

    /// Fetch, rebuild, and hand the outcome to a chart handle.
    ///
    /// On [`ChartData::Ready`] the handle destroys its previous instance and
    /// draws the new configuration; on [`ChartData::NoData`] the existing
    /// chart (if any) is left as is. Returns the outcome so callers can react
    /// to the no-data case.
    ///
    /// # Errors
    /// Propagates [`chart_data`](Self::chart_data) errors and renderer draw
    /// failures.
    pub async fn render_chart<R: ChartRenderer>(
        &self,
        handle: &mut ChartHandle<R>,
        symbol: &str,
    ) -> Result<ChartData, GraficoError> {
        let data = self.chart_data(symbol).await?;
        handle.render(&data)?;
        Ok(data)
    }
}
