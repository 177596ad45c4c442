//! Recurrence descriptors attached to repeating operations.
//!
//! A recurrence only describes the schedule. Nothing in this crate turns it
//! into future operations; aggregation works on the operations it is given.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, operation::date::occurred_at};

/// How often a recurring operation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Every day.
    Daily,
    /// Every seven days.
    Weekly,
    /// Every calendar month.
    Monthly,
    /// Every calendar year.
    Yearly,
}

impl Period {
    /// The name used for the period on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(Error::InvalidRecurrence(format!(
                "\"{other}\" is not a valid period"
            ))),
        }
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The schedule of an operation that repeats (e.g., wages, rent).
///
/// An `ended_at` of `None` means the operation repeats indefinitely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecurrenceData")]
pub struct Recurrence {
    period: Period,
    #[serde(with = "occurred_at")]
    started_at: OffsetDateTime,
    #[serde(with = "occurred_at::option", skip_serializing_if = "Option::is_none")]
    ended_at: Option<OffsetDateTime>,
}

impl Recurrence {
    /// Create a recurrence.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidRecurrence] if `ended_at` is not after `started_at`.
    pub fn new(
        period: Period,
        started_at: OffsetDateTime,
        ended_at: Option<OffsetDateTime>,
    ) -> Result<Self, Error> {
        match ended_at {
            Some(end) if end <= started_at => Err(Error::InvalidRecurrence(format!(
                "the end {end} is not after the start {started_at}"
            ))),
            Some(_) | None => Ok(Self {
                period,
                started_at,
                ended_at,
            }),
        }
    }

    /// How often the operation repeats.
    pub fn period(&self) -> Period {
        self.period
    }

    /// When the schedule starts.
    pub fn started_at(&self) -> OffsetDateTime {
        self.started_at
    }

    /// When the schedule ends, if ever.
    pub fn ended_at(&self) -> Option<OffsetDateTime> {
        self.ended_at
    }
}

#[derive(Deserialize)]
struct RecurrenceData {
    period: Period,
    #[serde(with = "occurred_at")]
    started_at: OffsetDateTime,
    #[serde(default, with = "occurred_at::option")]
    ended_at: Option<OffsetDateTime>,
}

impl TryFrom<RecurrenceData> for Recurrence {
    type Error = Error;

    fn try_from(value: RecurrenceData) -> Result<Self, Self::Error> {
        Recurrence::new(value.period, value.started_at, value.ended_at)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::{Period, Recurrence};
    use crate::Error;

    #[test]
    fn open_ended_recurrence_is_valid() {
        let recurrence =
            Recurrence::new(Period::Monthly, datetime!(2025-01-01 00:00 UTC), None).unwrap();

        assert_eq!(recurrence.period(), Period::Monthly);
        assert_eq!(recurrence.ended_at(), None);
    }

    #[test]
    fn end_before_start_is_rejected() {
        let got = Recurrence::new(
            Period::Weekly,
            datetime!(2025-01-10 00:00 UTC),
            Some(datetime!(2025-01-01 00:00 UTC)),
        );

        assert!(matches!(got, Err(Error::InvalidRecurrence(_))), "got {got:?}");
    }

    #[test]
    fn end_equal_to_start_is_rejected() {
        let start = datetime!(2025-01-10 00:00 UTC);

        assert!(Recurrence::new(Period::Daily, start, Some(start)).is_err());
    }

    #[test]
    fn deserializes_and_validates() {
        let recurrence: Recurrence = serde_json::from_str(
            r#"{"period": "yearly", "started_at": "2025-01-01", "ended_at": "2030-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(recurrence.period(), Period::Yearly);
        assert_eq!(recurrence.ended_at(), Some(datetime!(2030-01-01 00:00 UTC)));

        let invalid = serde_json::from_str::<Recurrence>(
            r#"{"period": "daily", "started_at": "2025-01-02", "ended_at": "2025-01-01"}"#,
        );
        assert!(invalid.is_err());
    }

    #[test]
    fn unknown_period_is_rejected() {
        assert!("fortnightly".parse::<Period>().is_err());
        assert_eq!("weekly".parse::<Period>(), Ok(Period::Weekly));
    }
}
