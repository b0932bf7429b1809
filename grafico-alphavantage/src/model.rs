//! Wire shapes for Alpha Vantage fundamentals responses.

use serde::Deserialize;

use grafico_types::QuarterlyReport;

/// Top-level envelope returned by the `INCOME_STATEMENT` and `BALANCE_SHEET`
/// functions.
///
/// Alpha Vantage signals problems inside a 200 response: an invalid symbol or
/// call yields an `"Error Message"` key, while rate-limit throttling yields a
/// `"Note"` or `"Information"` key, in both cases with no report payload.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FundamentalsEnvelope {
    #[serde(default)]
    pub quarterly_reports: Vec<QuarterlyReport>,
    #[serde(default, rename = "Error Message")]
    pub error_message: Option<String>,
    #[serde(default, rename = "Note")]
    pub note: Option<String>,
    #[serde(default, rename = "Information")]
    pub information: Option<String>,
}

impl FundamentalsEnvelope {
    /// The throttling/diagnostic note, whichever key the upstream used.
    pub(crate) fn throttle_note(&self) -> Option<&str> {
        self.note.as_deref().or(self.information.as_deref())
    }
}
