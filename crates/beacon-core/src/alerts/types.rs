//! Alert type definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields extracted from a signal message, before the service stamps it.
///
/// Numeric fields keep the exact text the sender wrote (`"45000.50"` stays
/// `"45000.50"`); they are never round-tripped through a float.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAlert {
    /// Trading instrument identifier (e.g. `BTCUSDT`).
    pub symbol: String,
    /// Free-form signal label (e.g. `BUY+LONG`, `Sell`).
    pub signal_type: String,
    /// Price at the time of the signal.
    pub price: String,
    /// Average true range.
    pub atr: String,
    /// Relative strength index.
    pub rsi: String,
    /// Suggested stop for a long position.
    pub long_stop: String,
    /// Suggested stop for a short position.
    pub short_stop: String,
}

impl ParsedAlert {
    /// Turns the parsed fields into a stored [`Alert`] received at `at`.
    #[must_use]
    pub fn stamp(self, at: DateTime<Utc>) -> Alert {
        Alert {
            symbol: self.symbol,
            signal_type: self.signal_type,
            price: self.price,
            atr: self.atr,
            rsi: self.rsi,
            long_stop: self.long_stop,
            short_stop: self.short_stop,
            timestamp: at,
        }
    }
}

/// A received signal alert as retained in the buffer and served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Trading instrument identifier.
    pub symbol: String,
    /// Free-form signal label.
    pub signal_type: String,
    /// Price text as sent.
    pub price: String,
    /// ATR text as sent.
    pub atr: String,
    /// RSI text as sent.
    pub rsi: String,
    /// Long stop text as sent.
    pub long_stop: String,
    /// Short stop text as sent.
    pub short_stop: String,
    /// Moment the service accepted the alert.
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

/// ISO-8601 with millisecond precision and a `Z` suffix, e.g. `2024-05-01T12:00:00.123Z`.
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes a UTC instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(at))
    }

    /// Accepts any RFC 3339 instant.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }

    /// Formats `at` the same way the serializer does.
    #[must_use]
    pub fn format(at: &DateTime<Utc>) -> String {
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
