//! Codec for the store's timestamp encoding.
//!
//! Maccy persists instants as fractional seconds relative to the Core Data
//! reference date (2001-01-01T00:00:00Z), not the Unix epoch. Decoding is
//! plain arithmetic: it never interprets "missing" values. Deciding that an
//! instant means "never copied" is left to [`is_unrecorded`], which the
//! presentation layer applies.

use chrono::{DateTime, TimeDelta, Utc};

/// Seconds between the Unix epoch and 2001-01-01T00:00:00Z.
pub const REFERENCE_EPOCH_UNIX_SECONDS: i64 = 978_307_200;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// The reference date every stored timestamp is relative to.
pub fn reference_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(REFERENCE_EPOCH_UNIX_SECONDS, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Zero value used for timestamps the store never recorded (NULL columns).
pub fn unrecorded() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

/// Convert a raw reference-relative value into an absolute UTC instant.
///
/// Values that cannot be represented (NaN, infinities, or offsets beyond the
/// nanosecond range) collapse to [`unrecorded`] instead of panicking.
pub fn decode(raw: f64) -> DateTime<Utc> {
    if !raw.is_finite() {
        return unrecorded();
    }

    let nanos = (raw * NANOS_PER_SECOND).round();
    if nanos.abs() >= i64::MAX as f64 {
        return unrecorded();
    }

    reference_epoch()
        .checked_add_signed(TimeDelta::nanoseconds(nanos as i64))
        .unwrap_or_else(unrecorded)
}

/// Inverse of [`decode`], used to write fixture stores.
pub fn encode(instant: DateTime<Utc>) -> f64 {
    let delta = instant.signed_duration_since(reference_epoch());
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / NANOS_PER_SECOND
}

/// True when an instant lands on 1970-01-01 (UTC), the sentinel Maccy leaves
/// behind for items whose copy time was never recorded.
pub fn is_unrecorded(instant: &DateTime<Utc>) -> bool {
    instant.date_naive() == unrecorded().date_naive()
}
