use crate::types::SECS_PER_DAY;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

///
/// Time
/// Seconds since midnight, always less than one civil day.
///

#[derive(
    Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct Time(u32);

impl Time {
    pub const MIDNIGHT: Self = Self(0);
    pub const MAX: Self = Self(86_399);

    #[must_use]
    pub const fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }

        Some(Self(
            hour as u32 * 3_600 + minute as u32 * 60 + second as u32,
        ))
    }

    /// Take the time-of-day component of an epoch-seconds instant.
    ///
    /// The Euclidean remainder keeps pre-epoch instants on a valid clock.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub const fn from_timestamp_secs(secs: i64) -> Self {
        Self(secs.rem_euclid(SECS_PER_DAY) as u32)
    }

    /// Epoch seconds of this time on the epoch day itself.
    #[must_use]
    pub const fn to_timestamp_secs(self) -> i64 {
        self.0 as i64
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn hour(self) -> u8 {
        (self.0 / 3_600) as u8
    }

    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn minute(self) -> u8 {
        (self.0 / 60 % 60) as u8
    }

    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn second(self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl Debug for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time({self})")
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl FromStr for Time {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');

        let hour = next_component(&mut parts, s)?;
        let minute = next_component(&mut parts, s)?;
        let second = next_component(&mut parts, s)?;

        if parts.next().is_some() {
            return Err(format!("invalid time: {s}"));
        }

        Self::new(hour, minute, second).ok_or_else(|| format!("time out of range: {s}"))
    }
}

fn next_component<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    original: &str,
) -> Result<u8, String> {
    parts
        .next()
        .and_then(|part| part.parse::<u8>().ok())
        .ok_or_else(|| format!("invalid time: {original}"))
}

///
/// TESTS
///
