// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Instants on a day counter.
//!
//! Every calendar in this crate reads and writes one continuous day number
//! (CDN), a noon-referenced UTC Julian Day held as [`Time<JD>`].  Other
//! counters such as [`UnixTime`](crate::UnixTime) differ from it by a
//! constant epoch, so the same [`Time<S>`] type serves both and the marker
//! `S` keeps them apart at compile time.

use chrono::{DateTime, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Julian Day of the Unix epoch (1970-01-01T00:00:00Z).
pub(crate) const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// A day counter identified by its epoch on the CDN.
///
/// `to_jd` and `from_jd` move a value between the counter and the CDN; for
/// the counters shipped here they are constant shifts.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Prefix used by `Display`, e.g. `"JD"`.
    const LABEL: &'static str;

    /// Convert a quantity in this scale's native unit to an absolute day number.
    fn to_jd(value: Days) -> Days;

    /// Convert an absolute day number back to this scale's native quantity.
    fn from_jd(jd: Days) -> Days;
}

/// A point on the `S` counter, in days since its epoch.
///
/// Same layout as a bare `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// Raw value in days since the scale's epoch.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self::from_days(Days::new(value))
    }

    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Continuous day number of this instant.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_jd(self.quantity)
    }

    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(S::from_jd(jd))
    }

    /// Re-express this instant on scale `T` (through the day number).
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day(self.julian_day())
    }

    /// `chrono` view of this instant, `None` outside chrono's range.
    ///
    /// The day number is already on the UTC axis, so only the epoch moves.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds = (self.julian_day() - Days::new(UNIX_EPOCH_JD))
            .to::<Second>()
            .value();
        if !seconds.is_finite() {
            return None;
        }
        let whole = seconds.floor();
        let nanos = ((seconds - whole) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(whole as i64, nanos.min(999_999_999))
    }

    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds = Seconds::new(datetime.timestamp() as f64)
            + Seconds::new(f64::from(datetime.timestamp_subsec_nanos()) / 1e9);
        Self::from_julian_day(Days::new(UNIX_EPOCH_JD) + seconds.to::<Day>())
    }

    /// The system clock, read once.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }
}

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Self::new)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self {
        Self::from_days(self.quantity - rhs)
    }
}

/// Elapsed days between two instants.
impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Days {
        self.quantity - rhs.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// Endpoint type of an [`Interval`](crate::Interval).
pub trait TimeInstant: Copy + PartialEq + PartialOrd {
    type Duration;

    fn to_utc(&self) -> Option<DateTime<Utc>>;

    /// `self - other`.
    fn difference(&self, other: &Self) -> Self::Duration;
}

impl<S: TimeScale> TimeInstant for Time<S> {
    type Duration = Days;

    #[inline]
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        Time::to_utc(self)
    }

    #[inline]
    fn difference(&self, other: &Self) -> Days {
        *self - *other
    }
}

impl TimeInstant for DateTime<Utc> {
    type Duration = chrono::Duration;

    fn to_utc(&self) -> Option<DateTime<Utc>> {
        Some(*self)
    }

    fn difference(&self, other: &Self) -> chrono::Duration {
        *self - *other
    }
}

#[cfg(test)]
mod tests {
    use super::super::scales::{UnixTime, JD};
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn utc_conversion_is_an_epoch_shift() {
        // Myanmar new year 1386 (2024-04-17) at noon UTC.
        let noon = Utc.with_ymd_and_hms(2024, 4, 17, 12, 0, 0).unwrap();
        let jd = Time::<JD>::from_utc(noon);
        assert_eq!(jd.value(), 2_460_418.0);
        assert_eq!(jd.to_utc(), Some(noon));
    }

    #[test]
    fn utc_roundtrip_keeps_sub_millisecond_precision() {
        let datetime = DateTime::from_timestamp(1_700_000_000, 250_000_000).unwrap();
        let back = Time::<JD>::from_utc(datetime).to_utc().unwrap();
        let delta = (back - datetime).num_microseconds().unwrap();
        assert!(delta.abs() < 100, "roundtrip error: {delta} us");
    }

    #[test]
    fn non_finite_days_have_no_utc_view() {
        assert!(Time::<JD>::new(f64::NAN).to_utc().is_none());
        assert!(Time::<JD>::new(f64::INFINITY).to_utc().is_none());
    }

    #[test]
    fn unix_scale_counts_days_from_1970() {
        let jd = Time::<JD>::new(UNIX_EPOCH_JD + 19_723.5);
        let unix = jd.to::<UnixTime>();
        assert_eq!(unix.value(), 19_723.5);
        assert_eq!(unix.julian_day(), jd.quantity());
        assert_eq!(unix.to_utc(), jd.to_utc());
    }

    #[test]
    fn day_arithmetic() {
        let akya = Time::<JD>::new(2_460_414.517);
        let atat = akya + Days::new(2.169);
        assert!(((atat - akya).value() - 2.169).abs() < 1e-9);
        assert!(((atat - Days::new(2.169)) - akya).value().abs() < 1e-9);
        assert!(akya < atat);
    }

    #[test]
    fn display_carries_the_scale_label() {
        assert!(Time::<JD>::new(2_460_311.0).to_string().starts_with("JD "));
        assert!(Time::<UnixTime>::new(0.0).to_string().starts_with("Unix "));
    }

    #[test]
    fn chrono_instants_measure_in_chrono_durations() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 1, 2, 6, 0, 0).unwrap();
        assert_eq!(later.difference(&base).num_hours(), 30);
        assert_eq!(TimeInstant::to_utc(&later), Some(later));
    }
}
