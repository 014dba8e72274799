//! RFC 3339 timestamps in the two layouts the API emits.
//!
//! Whole seconds are written as `2024-01-15T10:30:00Z`; anything with a
//! sub-second component is written with millisecond precision,
//! `2024-01-15T10:30:00.250Z`. Decoding accepts any RFC 3339 offset,
//! normalizes to UTC and truncates to milliseconds, the precision the
//! encoder writes.
//!
//! Use as `#[serde(with = "crate::timestamp")]` on `DateTime<Utc>` fields and
//! `#[serde(default, skip_serializing_if = "Option::is_none", with = "crate::timestamp::option")]`
//! on optional ones.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Layout used when the sub-second component is zero.
pub const LAYOUT_SECONDS: &str = "%Y-%m-%dT%H:%M:%SZ";
/// Layout used when the sub-second component is non-zero.
pub const LAYOUT_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Formats `value` using one of the two fixed layouts.
pub fn format(value: &DateTime<Utc>) -> String {
    let layout = if value.timestamp_subsec_nanos() == 0 {
        LAYOUT_SECONDS
    } else {
        LAYOUT_MILLIS
    };
    value.format(layout).to_string()
}

pub fn parse(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc).trunc_subsecs(3))
}

pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|err| de::Error::custom(format_args!("invalid timestamp {raw:?}: {err}")))
}

/// Same as the parent module for `Option<DateTime<Utc>>`.
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(with = "super")] DateTime<Utc>);

        Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(value)| value))
    }
}
