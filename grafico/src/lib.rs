//! Grafico renders a company's quarterly fundamentals as a chart-ready
//! time series.
//!
//! Overview
//! - Fetches two independent report collections (income statements and
//!   balance sheets) for a symbol from a `grafico_core` connector.
//! - Aligns them into per-period series, resolves time-axis bounds from an
//!   optional quarter-range selection, and attaches the magnitude
//!   abbreviator as the y-axis tick formatter.
//! - Hands the finished `ChartSeriesConfig` to a renderer through an owned
//!   `ChartHandle` that destroys the previous chart before drawing the next.
//!
//! Key behaviors and trade-offs
//! - Incomplete data (a failed fetch, an unknown symbol, an empty report
//!   collection) yields `ChartData::NoData` instead of an error: the chart
//!   is simply absent, never wrong.
//! - Alignment is positional: the i-th balance sheet is paired with the i-th
//!   income statement. Collections that cannot cover each other
//!   period-for-period surface as `MisalignedCollections`.
//! - Every rebuild recomputes the configuration from scratch; nothing is
//!   cached, retried, or mutated in place.
//!
//! Examples
//! Building an orchestrator and rendering a symbol:
//! ```rust,ignore
//! use std::sync::Arc;
//! use grafico::{ChartHandle, Grafico};
//! use grafico_alphavantage::AvConnector;
//!
//! let av = Arc::new(AvConnector::builder().build());
//! let grafico = Grafico::builder().with_connector(av).build()?;
//!
//! let mut handle = ChartHandle::new(my_renderer);
//! grafico.render_chart(&mut handle, "IBM").await?;
//! ```
//!
//! Restricting the axis to a quarter range:
//! ```rust,ignore
//! use grafico::DateRangeSelection;
//!
//! let range = DateRangeSelection::parse("2021-Q2", "2023-Q4")?;
//! let data = grafico.chart_data_with_range("IBM", &range).await?;
//! ```
//!
//! See `grafico/examples/` for a runnable end-to-end demonstration.
#![warn(missing_docs)]

pub(crate) mod core;

pub use core::{FundamentalsSnapshot, Grafico, GraficoBuilder};

// Re-export core types for convenience
pub use grafico_core::{
    AxisBound,
    AxisBounds,
    ChartData,
    ChartHandle,
    ChartRenderer,
    ChartSeriesConfig,
    Dataset,
    // Foundational types
    DateRangeSelection,
    FundamentalsConnector,
    GraficoError,
    QuarterLabel,
    QuarterlyReport,
    ReportType,
    TickLabel,
    abbreviate,
};
