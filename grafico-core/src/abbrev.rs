//! Magnitude abbreviation for axis tick values.

use grafico_types::TickLabel;

/// Magnitude thresholds checked in descending order; the first divisor the
/// absolute value meets or exceeds wins.
const RANGES: &[(f64, &str)] = &[(1e9, "B"), (1e6, "M")];

/// Format an axis tick value as a human-readable magnitude label.
///
/// Values at or above 1e9 become `"B"`-suffixed, values at or above 1e6
/// become `"M"`-suffixed; the quotient is rendered with Rust's shortest
/// round-trip float formatting, so `1_500_000_000.0` yields `"1.5B"` and
/// `1e9` yields `"1B"` with no trailing zeros. The sign is applied once,
/// outside the threshold scan, so a negative input gains exactly one leading
/// `"-"`. Anything below every threshold (zero included) passes through as
/// [`TickLabel::Raw`] without stringification.
#[must_use]
pub fn abbreviate(value: f64) -> TickLabel {
    let abs = value.abs();
    for &(divider, suffix) in RANGES {
        if abs >= divider {
            let magnitude = format!("{}{suffix}", abs / divider);
            let text = if value < 0.0 {
                format!("-{magnitude}")
            } else {
                magnitude
            };
            return TickLabel::Abbreviated { text };
        }
    }
    TickLabel::Raw { value }
}
