//! Parsing and formatting of operation timestamps.

use time::{
    Date, OffsetDateTime, PrimitiveDateTime,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

use crate::Error;

/// Parse the moment an operation happened.
///
/// Accepts an RFC 3339 date-time (`2025-11-11T08:30:00+13:00`), a date-time
/// without an offset (`2025-11-11T08:30:00`) and a calendar date
/// (`2025-11-11`). The last two are taken to be in UTC, a bare date meaning
/// midnight.
///
/// # Errors
///
/// Returns [Error::InvalidDate] if `text` matches none of the formats.
pub fn parse_occurred_at(text: &str) -> Result<OffsetDateTime, Error> {
    let text = text.trim();

    if let Ok(date_time) = OffsetDateTime::parse(text, &Rfc3339) {
        return Ok(date_time);
    }

    let local_format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
    );
    if let Ok(date_time) = PrimitiveDateTime::parse(text, local_format) {
        return Ok(date_time.assume_utc());
    }

    Date::parse(text, format_description!("[year]-[month]-[day]"))
        .map(|date| date.midnight().assume_utc())
        .map_err(|error| Error::InvalidDate(text.to_owned(), error.to_string()))
}

/// Chart label format, e.g. "11.11.2025".
const DAY_LABEL_FORMAT: &[BorrowedFormatItem] = format_description!("[day].[month].[year]");

/// Format a calendar day as a chart label, e.g. `11.11.2025`.
pub fn format_day_label(date: Date) -> String {
    date.format(DAY_LABEL_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Serde adapter for required timestamps.
///
/// Serializes as RFC 3339 and deserializes with [parse_occurred_at].
pub(crate) mod occurred_at {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::Error as _};
    use time::{OffsetDateTime, format_description::well_known::Rfc3339};

    use super::parse_occurred_at;

    pub fn serialize<S: Serializer>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        let text = value.format(&Rfc3339).map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OffsetDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_occurred_at(&text).map_err(D::Error::custom)
    }

    /// The same adapter for optional timestamps.
    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};
        use time::OffsetDateTime;

        pub fn serialize<S: Serializer>(
            value: &Option<OffsetDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => super::serialize(value, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<OffsetDateTime>, D::Error> {
            use serde::de::Error as _;

            Option::<String>::deserialize(deserializer)?
                .map(|text| super::parse_occurred_at(&text).map_err(D::Error::custom))
                .transpose()
        }
    }
}
