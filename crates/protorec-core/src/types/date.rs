use crate::types::SECS_PER_DAY;
use derive_more::{Add, AddAssign, FromStr, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    sync::OnceLock,
};
use time::{Date as TimeDate, Duration as TimeDuration, Month, format_description::FormatItem};

static FORMAT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();

///
/// Date
/// Days since the Unix epoch.
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Default,
    Eq,
    FromStr,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Sub,
    SubAssign,
)]
#[repr(transparent)]
pub struct Date(i32);

impl Date {
    pub const EPOCH: Self = Self(0);
    pub const MIN: Self = Self(i32::MIN);
    pub const MAX: Self = Self(i32::MAX);

    const fn epoch_date() -> TimeDate {
        // Safe: constant valid date
        match TimeDate::from_calendar_date(1970, Month::January, 1) {
            Ok(d) => d,
            Err(_) => unreachable!(),
        }
    }

    #[must_use]
    pub fn new(y: i32, m: u8, d: u8) -> Self {
        let m = m.clamp(1, 12);

        let Ok(month) = Month::try_from(m) else {
            return Self::EPOCH;
        };

        let last_valid_day = (28..=31)
            .rev()
            .find(|&day| TimeDate::from_calendar_date(y, month, day).is_ok());

        let Some(last_valid_day) = last_valid_day else {
            return Self::EPOCH;
        };

        let d = d.clamp(1, last_valid_day);

        match TimeDate::from_calendar_date(y, month, d) {
            Ok(date) => Self::from_time_date(date),
            Err(_) => Self::EPOCH,
        }
    }

    #[must_use]
    pub fn new_checked(y: i32, m: u8, d: u8) -> Option<Self> {
        let month = Month::try_from(m).ok()?;
        let date = TimeDate::from_calendar_date(y, month, d).ok()?;
        Some(Self::from_time_date(date))
    }

    /// Convert epoch seconds to the civil day containing that instant.
    ///
    /// Floor division keeps pre-epoch instants on the correct day; out-of-range
    /// day counts saturate.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn from_timestamp_secs(secs: i64) -> Self {
        let days = secs.div_euclid(SECS_PER_DAY);

        if days > i32::MAX as i64 {
            Self::MAX
        } else if days < i32::MIN as i64 {
            Self::MIN
        } else {
            Self(days as i32)
        }
    }

    /// Epoch seconds at midnight UTC of this day.
    #[must_use]
    pub const fn to_timestamp_secs(self) -> i64 {
        self.0 as i64 * SECS_PER_DAY
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Returns the year component (e.g. 2025)
    #[must_use]
    pub fn year(self) -> i32 {
        self.to_time_date().year()
    }

    /// Returns the month component (1–12)
    #[must_use]
    pub fn month(self) -> u8 {
        self.to_time_date().month().into()
    }

    /// Returns the day-of-month component (1–31)
    #[must_use]
    pub fn day(self) -> u8 {
        self.to_time_date().day()
    }

    /// Parse an ISO `YYYY-MM-DD` string into a `Date`.
    pub fn parse(s: &str) -> Option<Self> {
        let format =
            FORMAT.get_or_init(|| time::format_description::parse("[year]-[month]-[day]").unwrap());

        TimeDate::parse(s, format).ok().map(Self::from_time_date)
    }

    #[expect(clippy::cast_possible_truncation)]
    fn from_time_date(date: TimeDate) -> Self {
        let epoch = Self::epoch_date();
        let days = (date - epoch).whole_days();
        Self(days as i32)
    }

    fn to_time_date(self) -> TimeDate {
        let epoch = Self::epoch_date();
        let delta = TimeDuration::days(self.0.into());
        epoch.checked_add(delta).unwrap_or({
            if self.0 >= 0 {
                TimeDate::MAX
            } else {
                TimeDate::MIN
            }
        })
    }
}

impl Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({self})")
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.to_time_date();
        let month: u8 = d.month().into();
        write!(f, "{:04}-{:02}-{:02}", d.year(), month, d.day())
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {s}")))
    }
}

///
/// TESTS
///
