//! Resolves the account timezone used to split operations into calendar days.

use std::fmt::Debug;

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone, Tz};

use crate::Error;

/// The timezone an account keeps its books in.
///
/// A named zone may change its offset over the year, so the offset is looked
/// up for each instant rather than once for the whole account.
#[derive(Clone, Copy)]
pub enum AccountTimezone {
    /// The same offset all year round, e.g. UTC.
    Fixed(UtcOffset),
    /// A zone from the IANA database, e.g. "Pacific/Auckland".
    Named(&'static Tz),
}

impl AccountTimezone {
    /// Coordinated Universal Time.
    pub const UTC: Self = Self::Fixed(UtcOffset::UTC);

    /// Look up a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidTimezoneError] if `canonical_timezone` is not a
    /// known timezone name.
    pub fn from_name(canonical_timezone: &str) -> Result<Self, Error> {
        time_tz::timezones::get_by_name(canonical_timezone)
            .map(Self::Named)
            .ok_or_else(|| {
                tracing::error!("Could not resolve timezone \"{canonical_timezone}\"");
                Error::InvalidTimezoneError(canonical_timezone.to_owned())
            })
    }

    /// The UTC offset in effect at `instant`.
    pub fn offset_at(&self, instant: OffsetDateTime) -> UtcOffset {
        match self {
            Self::Fixed(offset) => *offset,
            Self::Named(tz) => tz.get_offset_utc(&instant).to_utc(),
        }
    }

    /// The calendar day `instant` falls on in this timezone.
    ///
    /// Falls back to the day in the instant's own offset at the very ends of
    /// the supported date range.
    pub fn date_of(&self, instant: OffsetDateTime) -> Date {
        instant
            .checked_to_offset(self.offset_at(instant))
            .unwrap_or(instant)
            .date()
    }
}

impl From<UtcOffset> for AccountTimezone {
    fn from(offset: UtcOffset) -> Self {
        Self::Fixed(offset)
    }
}

impl Debug for AccountTimezone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(offset) => f.debug_tuple("Fixed").field(offset).finish(),
            Self::Named(tz) => f.debug_tuple("Named").field(&tz.name()).finish(),
        }
    }
}

impl PartialEq for AccountTimezone {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fixed(left), Self::Fixed(right)) => left == right,
            (Self::Named(left), Self::Named(right)) => left.name() == right.name(),
            _ => false,
        }
    }
}
