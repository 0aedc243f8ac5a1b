// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Continuous day number (`Time<JD>`) specific extensions.

use chrono::{Local, Offset};
use qtty::*;

use super::instant::{Time, UNIX_EPOCH_JD};
use super::scales::JD;

/// Day of the week, numbered the way the Myanmar calendar does:
/// Saturday is `0`, Friday is `6`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    Saturday = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Weekday of an integer day number: `(jdn + 2) mod 7`.
    #[inline]
    pub fn from_day_number(jdn: i64) -> Self {
        Self::ALL[((jdn.rem_euclid(7) + 2) % 7) as usize]
    }

    /// Index in `0..=6`, Saturday first.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English name, e.g. `"Saturday"`.
    pub const fn name(self) -> &'static str {
        match self {
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00  (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// The Unix epoch, 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Self = Self::new(UNIX_EPOCH_JD);

    /// Build a day number from Unix seconds (86 400 s per day, no leap seconds).
    #[inline]
    pub fn from_unix_seconds(seconds: f64) -> Self {
        Self::UNIX_EPOCH + Seconds::new(seconds).to::<Day>()
    }

    /// Unix seconds of this day number.
    #[inline]
    pub fn to_unix_seconds(&self) -> f64 {
        (*self - Self::UNIX_EPOCH).to::<Second>().value()
    }

    /// Integer day number, rounded half away from zero.
    #[inline]
    pub fn day_number(&self) -> i64 {
        self.value().round() as i64
    }

    /// Day of the week of this instant (UTC civil day).
    #[inline]
    pub fn weekday(&self) -> Weekday {
        Weekday::from_day_number(self.day_number())
    }

    /// Shift onto local wall-clock time for a UTC offset in hours.
    ///
    /// The offset may be fractional (`6.5` for UTC+06:30).  The result is
    /// still a day number, read as local time by the calendar conversions.
    #[inline]
    pub fn local(&self, tz_hours: f64) -> Self {
        *self + Days::new(tz_hours / 24.0)
    }

    /// Inverse of [`local`](Self::local): interpret `self` as local time and
    /// return the UTC instant.
    #[inline]
    pub fn from_local(local: Self, tz_hours: f64) -> Self {
        local - Days::new(tz_hours / 24.0)
    }

    /// Days elapsed since J2000.0, the argument of the ephemeris series.
    #[inline]
    pub fn days_since_j2000(&self) -> f64 {
        (*self - Self::J2000).value()
    }
}

/// Offset of the host's local time zone from UTC, in hours.
pub fn local_utc_offset_hours() -> f64 {
    let seconds = Local::now().offset().fix().local_minus_utc();
    Seconds::new(seconds as f64).to::<Day>().value() * 24.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_seconds_scale_linearly() {
        assert_eq!(Time::<JD>::from_unix_seconds(0.0).value(), 2_440_587.5);
        let jd = Time::<JD>::from_unix_seconds(86_400.0 * 3.0);
        assert!((jd.value() - 2_440_590.5).abs() < 1e-9);
        assert!((jd.to_unix_seconds() - 259_200.0).abs() < 1e-4);
    }

    #[test]
    fn weekday_is_saturday_based() {
        // 2000-01-01 was a Saturday.
        assert_eq!(Time::<JD>::J2000.weekday(), Weekday::Saturday);
        assert_eq!(Time::<JD>::new(2_451_546.0).weekday(), Weekday::Sunday);
        assert_eq!(Weekday::from_day_number(2_451_551).name(), "Friday");
    }

    #[test]
    fn weekday_repeats_every_seven_days() {
        for offset in 0..30 {
            let jd = Time::<JD>::new(2_460_000.25 + offset as f64);
            assert_eq!(jd.weekday(), (jd + Days::new(7.0)).weekday());
        }
    }

    #[test]
    fn weekday_handles_negative_day_numbers() {
        assert_eq!(Weekday::from_day_number(-2), Weekday::Saturday);
        assert_eq!(Weekday::from_day_number(-3), Weekday::Friday);
    }

    #[test]
    fn weekday_of_saturated_day_numbers() {
        assert_eq!(Weekday::from_day_number(i64::MAX), Weekday::Monday);
        assert_eq!(Weekday::from_day_number(i64::MIN), Weekday::Sunday);
        assert_eq!(Time::<JD>::new(f64::INFINITY).weekday(), Weekday::Monday);
        assert_eq!(Time::<JD>::new(f64::NEG_INFINITY).weekday(), Weekday::Sunday);
    }

    #[test]
    fn day_number_rounds_half_away_from_zero() {
        assert_eq!(Time::<JD>::new(2_451_545.5).day_number(), 2_451_546);
        assert_eq!(Time::<JD>::new(2_451_545.49).day_number(), 2_451_545);
    }

    #[test]
    fn local_offset_roundtrip() {
        let utc = Time::<JD>::new(2_459_000.3);
        let local = utc.local(6.5);
        assert!((local.value() - (2_459_000.3 + 6.5 / 24.0)).abs() < 1e-12);
        let back = Time::<JD>::from_local(local, 6.5);
        assert!((back.value() - utc.value()).abs() < 1e-12);
    }

    #[test]
    fn days_since_j2000() {
        assert_eq!(Time::<JD>::new(2_451_546.0).days_since_j2000(), 1.0);
    }

    #[test]
    fn local_offset_is_within_real_world_bounds() {
        let tz = local_utc_offset_hours();
        assert!((-12.0..=14.0).contains(&tz));
    }
}
