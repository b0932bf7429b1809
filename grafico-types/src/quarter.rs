//! Quarter labels (`YYYY-Qn`) and the user's date-range selection.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::GraficoError;

/// A fiscal quarter identified by year and quarter number, parsed from the
/// `YYYY-Qn` shape emitted by quarter-granularity range pickers.
///
/// Parsing is strict: a malformed label is an
/// [`GraficoError::InvalidQuarterLabel`] rather than a plausible-looking but
/// wrong calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuarterLabel {
    year: i32,
    quarter: u8,
}

impl QuarterLabel {
    /// Construct from parts, validating that `quarter` lies in `1..=4`.
    pub fn new(year: i32, quarter: u8) -> Result<Self, GraficoError> {
        if !(1..=4).contains(&quarter) {
            return Err(GraficoError::invalid_quarter_label(
                format!("{year}-Q{quarter}"),
                "quarter number must be between 1 and 4",
            ));
        }
        Ok(Self { year, quarter })
    }

    /// Calendar year of the quarter.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Quarter number within the year, `1..=4`.
    #[must_use]
    pub const fn quarter(&self) -> u8 {
        self.quarter
    }

    /// First calendar day of the quarter, used as a time-axis bound.
    ///
    /// `2021-Q3` resolves to 2021-07-01.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        let month = u32::from(self.quarter - 1) * 3 + 1;
        NaiveDate::from_ymd_opt(self.year, month, 1).expect("validated quarter label")
    }
}

impl fmt::Display for QuarterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-Q{}", self.year, self.quarter)
    }
}

impl FromStr for QuarterLabel {
    type Err = GraficoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| GraficoError::invalid_quarter_label(s, reason);

        let bytes = s.as_bytes();
        if bytes.len() != 7 {
            return Err(invalid("expected the 7-character shape YYYY-Qn"));
        }
        if !bytes[..4].iter().all(u8::is_ascii_digit) {
            return Err(invalid("year must be four digits"));
        }
        if &bytes[4..6] != b"-Q" {
            return Err(invalid("expected '-Q' after the year"));
        }
        let year: i32 = s[..4].parse().expect("four ascii digits");
        let quarter = match bytes[6] {
            b @ b'1'..=b'4' => b - b'0',
            _ => return Err(invalid("quarter number must be between 1 and 4")),
        };
        Ok(Self { year, quarter })
    }
}

impl TryFrom<String> for QuarterLabel {
    type Error = GraficoError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<QuarterLabel> for String {
    fn from(label: QuarterLabel) -> Self {
        label.to_string()
    }
}

/// The pair of quarter labels chosen in a range picker.
///
/// Transient UI state; resolving each endpoint via
/// [`QuarterLabel::start_date`] yields concrete axis bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeSelection {
    /// Start of the selected range (axis minimum).
    pub start: QuarterLabel,
    /// End of the selected range (axis maximum).
    pub end: QuarterLabel,
}

impl DateRangeSelection {
    /// Parse a selection from the two labels a range picker emits.
    pub fn parse(start: &str, end: &str) -> Result<Self, GraficoError> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}
