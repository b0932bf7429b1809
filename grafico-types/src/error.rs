use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the grafico workspace.
///
/// This wraps capability mismatches, argument validation errors, provider-tagged
/// failures, not-found conditions, and the data-shape failures detected while
/// aligning report collections.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraficoError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "fundamentals/balance-sheet").
        capability: String,
    },

    /// Issues with the returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "income statement for AAPL".
        what: String,
    },

    /// A quarter label did not match the `YYYY-Qn` shape.
    #[error("invalid quarter label {label:?}: {reason}")]
    InvalidQuarterLabel {
        /// The offending label as supplied by the caller.
        label: String,
        /// Human-readable description of the validation failure.
        reason: String,
    },

    /// The two report collections cannot be paired period-for-period.
    #[error("misaligned report collections: {detail}")]
    MisalignedCollections {
        /// Human-readable description of the mismatch (lengths or the first
        /// period missing from one side).
        detail: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl GraficoError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `InvalidQuarterLabel` error.
    pub fn invalid_quarter_label(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidQuarterLabel {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Helper: build a `MisalignedCollections` error from the two lengths.
    #[must_use]
    pub fn misaligned_lengths(income_len: usize, balance_len: usize) -> Self {
        Self::MisalignedCollections {
            detail: format!(
                "income has {income_len} periods, balance has {balance_len}"
            ),
        }
    }

    /// Helper: build a `MisalignedCollections` error for a period present on
    /// one side only.
    pub fn misaligned_missing_period(fiscal_date_ending: impl Into<String>) -> Self {
        Self::MisalignedCollections {
            detail: format!(
                "balance sheets lack period {}",
                fiscal_date_ending.into()
            ),
        }
    }

    /// Returns true if this error means "the chart simply has no data yet".
    ///
    /// Fetch failures, missing resources, and absent capabilities are all
    /// equivalent to an empty report collection from the pipeline's point of
    /// view: nothing is drawn and nothing is surfaced to the user. Validation
    /// errors (bad quarter labels, misaligned collections) remain actionable.
    #[must_use]
    pub const fn is_incomplete_data(&self) -> bool {
        matches!(
            self,
            Self::Unsupported { .. } | Self::Connector { .. } | Self::NotFound { .. }
        )
    }
}
