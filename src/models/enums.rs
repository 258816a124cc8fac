//! Type enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output time unit for detected spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
}

impl Default for TimeUnit {
    fn default() -> Self {
        TimeUnit::Seconds
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeUnit::Seconds => write!(f, "seconds"),
            TimeUnit::Milliseconds => write!(f, "milliseconds"),
        }
    }
}

impl TimeUnit {
    /// Parse from a configuration string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "seconds" => Some(TimeUnit::Seconds),
            "milliseconds" => Some(TimeUnit::Milliseconds),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_units() {
        assert_eq!(TimeUnit::parse("seconds"), Some(TimeUnit::Seconds));
        assert_eq!(TimeUnit::parse("milliseconds"), Some(TimeUnit::Milliseconds));
        assert_eq!(TimeUnit::parse("minutes"), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for unit in [TimeUnit::Seconds, TimeUnit::Milliseconds] {
            assert_eq!(TimeUnit::parse(&unit.to_string()), Some(unit));
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&TimeUnit::Milliseconds).unwrap();
        assert_eq!(json, "\"milliseconds\"");
    }
}
