//! Grafico-specific data transfer objects shared across the workspace.
#![warn(missing_docs)]

mod error;
mod quarter;
mod report;
mod tick;

pub use error::GraficoError;
pub use quarter::{DateRangeSelection, QuarterLabel};
pub use report::{QuarterlyReport, parse_metric};
pub use tick::TickLabel;
