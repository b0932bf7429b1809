//! grafico-core
//!
//! Connector traits and the pure chart-data pipeline shared across the
//! grafico ecosystem.
//!
//! - `connector`: the `FundamentalsConnector` trait and capability provider traits.
//! - `align`: merging of the two report collections into one per-period series.
//! - `abbrev`: magnitude abbreviation for axis tick values.
//! - `pipeline`: assembly of the rendering-ready `ChartSeriesConfig`.
//! - `render`: the `ChartRenderer` contract and the single-instance `ChartHandle`.
//!
//! Everything in this crate is synchronous and side-effect free except the
//! connector traits themselves, which are async interfaces implemented by
//! remote or mock providers in sibling crates.
#![warn(missing_docs)]

/// Magnitude abbreviation for axis tick values.
pub mod abbrev;
/// Alignment of the two report collections into one series set.
pub mod align;
/// Connector capability traits and the primary `FundamentalsConnector` interface.
pub mod connector;
/// Chart-configuration assembly.
pub mod pipeline;
/// Renderer contract and chart-instance lifecycle.
pub mod render;

pub use abbrev::abbreviate;
pub use align::{AlignedSeries, align, align_by_period};
pub use connector::{
    BalanceSheetProvider, FundamentalsConnector, IncomeStatementProvider, ReportType,
};
pub use pipeline::{
    AxisBound, AxisBounds, ChartData, ChartSeriesConfig, Dataset, NET_INCOME_LABEL,
    TOTAL_REVENUE_LABEL, TOTAL_SHAREHOLDER_EQUITY_LABEL,
};
pub use render::{ChartHandle, ChartRenderer};

// Re-export of foundational types so downstream crates can depend on
// `grafico-core` only.
pub use grafico_types::{
    DateRangeSelection, GraficoError, QuarterLabel, QuarterlyReport, TickLabel, parse_metric,
};
