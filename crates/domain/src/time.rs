//! Record timestamps.
//!
//! Stored times are millisecond precision and go over the wire as
//! `2024-05-01T09:30:00.123Z`, the shape browsers produce and parse with
//! `Date#toISOString`.

use chrono::{DateTime, SubsecRound, Utc};

/// UTC instant at which a record was stored.
pub type Timestamp = DateTime<Utc>;

/// The current UTC time, truncated to whole milliseconds so a stored value
/// survives a JSON round trip unchanged.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(3)
}

/// Serde adapter writing a [`Timestamp`] with exactly three fractional digits
/// and a `Z` suffix. Reading accepts any RFC 3339 offset.
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// # Errors
    ///
    /// Propagates the serializer's error.
    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// # Errors
    ///
    /// Fails when the value is not an RFC 3339 string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|value| value.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
