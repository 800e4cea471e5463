use derive_more::{Add, AddAssign, Display, FromStr, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

///
/// Timestamp
/// Seconds since the Unix epoch, signed so pre-epoch instants are
/// representable.
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    FromStr,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    Sub,
    SubAssign,
)]
#[repr(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);
    pub const MIN: Self = Self(i64::MIN);
    pub const MAX: Self = Self(i64::MAX);

    /// Construct from seconds.
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Construct from milliseconds (floor to seconds).
    #[must_use]
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms.div_euclid(1_000))
    }

    /// Construct from microseconds (floor to seconds).
    #[must_use]
    pub const fn from_micros(us: i64) -> Self {
        Self(us.div_euclid(1_000_000))
    }

    pub fn parse_rfc3339(s: &str) -> Result<Self, String> {
        let dt = OffsetDateTime::parse(s, &Rfc3339)
            .map_err(|e| format!("timestamp parse error: {e}"))?;

        Ok(Self(dt.unix_timestamp()))
    }

    pub fn parse_flexible(s: &str) -> Result<Self, String> {
        // Try integer seconds
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Self(n));
        }

        // Try RFC3339
        Self::parse_rfc3339(s)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_millis_floors_toward_negative_infinity() {
        assert_eq!(Timestamp::from_millis(1_999), Timestamp::from_secs(1));
        assert_eq!(Timestamp::from_millis(-1), Timestamp::from_secs(-1));
    }

    #[test]
    fn parse_rfc3339_accepts_epoch() {
        let ts = Timestamp::parse_rfc3339("1970-01-01T00:00:00Z")
            .expect("epoch RFC3339 string should parse");
        assert_eq!(ts, Timestamp::EPOCH);
    }

    #[test]
    fn parse_rfc3339_accepts_pre_epoch() {
        let ts = Timestamp::parse_rfc3339("1969-12-31T23:59:59Z")
            .expect("pre-epoch RFC3339 string should parse");
        assert_eq!(ts.get(), -1);
    }

    #[test]
    fn parse_flexible_prefers_integer_seconds() {
        let ts = Timestamp::parse_flexible("-42").expect("integer seconds should parse");
        assert_eq!(ts.get(), -42);
    }

    #[test]
    fn ordering_spans_the_epoch() {
        assert!(Timestamp::from_secs(-1) < Timestamp::EPOCH);
        assert!(Timestamp::EPOCH < Timestamp::from_secs(1));
    }
}
