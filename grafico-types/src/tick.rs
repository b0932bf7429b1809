//! Axis tick labels produced by the magnitude abbreviator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of formatting an axis tick value.
///
/// The abbreviator either rewrites a value into a magnitude string ("1.5B")
/// or passes the raw number through untouched when it sits below every
/// threshold. Renderers convert both variants to display text; keeping the
/// raw number tagged lets them apply their own numeric formatting instead of
/// inheriting a stringified one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TickLabel {
    /// Value rewritten with a magnitude suffix, e.g. `"2.5M"` or `"-1.5B"`.
    Abbreviated {
        /// The display text, sign included.
        text: String,
    },
    /// Value below every abbreviation threshold, passed through unmodified.
    Raw {
        /// The original numeric value.
        value: f64,
    },
}

impl TickLabel {
    /// The display text for this tick, regardless of variant.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Abbreviated { text } => text.clone(),
            Self::Raw { value } => value.to_string(),
        }
    }

    /// True if the value was rewritten with a magnitude suffix.
    #[must_use]
    pub const fn is_abbreviated(&self) -> bool {
        matches!(self, Self::Abbreviated { .. })
    }
}

impl fmt::Display for TickLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Abbreviated { text } => f.write_str(text),
            Self::Raw { value } => write!(f, "{value}"),
        }
    }
}
