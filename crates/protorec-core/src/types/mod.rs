//! Integer-backed temporal types used on both sides of the wire/storage
//! boundary. Each type keeps an exact integer representation so the
//! epoch-seconds coercion defaults round-trip without loss.

mod date;
mod time;
mod timestamp;

pub use date::Date;
pub use time::Time;
pub use timestamp::Timestamp;

/// Seconds per civil day, shared by the epoch conversions.
pub(crate) const SECS_PER_DAY: i64 = 86_400;
