// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Western calendar on the continuous day number.
//!
//! Three reckonings are supported:
//!
//! | Reckoning | Rule |
//! |-----------|------|
//! | [`Reckoning::British`] | Julian before JDN 2 361 222 (1752-09-14), Gregorian from then on |
//! | [`Reckoning::Gregorian`] | Proleptic Gregorian |
//! | [`Reckoning::Julian`] | Proleptic Julian |
//!
//! The reckoning is only ever a conversion parameter: the day number itself
//! is calendar-agnostic.

use qtty::*;

use crate::error::DomainError;
use crate::{JulianDate, Weekday};

/// First day of the Gregorian calendar under British reckoning (1752-09-14).
pub const BRITISH_SWITCHOVER_JDN: i64 = 2_361_222;

const SG: f64 = BRITISH_SWITCHOVER_JDN as f64;
const MILLIS_PER_DAY: i64 = 86_400_000;

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar reckoning used to read or write a Western date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reckoning {
    /// Julian until 1752-09-02, Gregorian from 1752-09-14.
    #[default]
    British,
    Gregorian,
    Julian,
}

impl Reckoning {
    /// `true` if a day number falls on the Julian side for this reckoning.
    #[inline]
    pub fn is_julian_at(self, jdn: i64) -> bool {
        match self {
            Reckoning::Julian => true,
            Reckoning::Gregorian => false,
            Reckoning::British => jdn < BRITISH_SWITCHOVER_JDN,
        }
    }
}

/// A broken-down Western date and time.
///
/// `second` carries the fractional part; [`from_jd`](Self::from_jd) resolves
/// it to the millisecond.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WesternDateTime {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl WesternDateTime {
    /// Unchecked constructor.  Out-of-range fields are carried through the
    /// day-number formulas unchanged.
    pub const fn new(year: i64, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midday of a calendar date.
    pub const fn date(year: i64, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 12, 0, 0.0)
    }

    /// Field-validated constructor.
    ///
    /// The day is checked against the month length under `reckoning`; under
    /// British reckoning the dropped days 1752-09-03..=13 are rejected.
    pub fn try_new(
        reckoning: Reckoning,
        year: i64,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, DomainError> {
        let reject = |field: &'static str, value: f64| {
            tracing::warn!(field, value, "rejected Western date-time field");
            DomainError::InvalidDateTime { field, value }
        };

        if !(1..=12).contains(&month) {
            return Err(reject("month", month as f64));
        }
        // September 1752 keeps its 30 labels under British reckoning, minus 3..=13.
        let switchover_month = reckoning == Reckoning::British && year == 1752 && month == 9;
        let last_day = if switchover_month {
            30
        } else {
            days_in_month(year, month, reckoning)
        };
        if day == 0 || day > last_day || (switchover_month && (3..=13).contains(&day)) {
            return Err(reject("day", day as f64));
        }
        if hour > 23 {
            return Err(reject("hour", hour as f64));
        }
        if minute > 59 {
            return Err(reject("minute", minute as f64));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(reject("second", second));
        }
        Ok(Self::new(year, month, day, hour, minute, second))
    }

    /// Whole seconds, truncated toward zero.
    #[inline]
    pub fn whole_second(&self) -> u32 {
        self.second.trunc() as u32
    }

    /// Milliseconds past the whole second.
    #[inline]
    pub fn millisecond(&self) -> u32 {
        ((self.second - self.second.trunc()) * 1000.0).round().min(999.0) as u32
    }

    /// Continuous day number of this wall-clock reading.
    pub fn to_jd(&self, reckoning: Reckoning) -> JulianDate {
        let jdn = date_to_jdn(self.year as f64, self.month as f64, self.day as f64, reckoning);
        JulianDate::new(jdn) + time_to_day_fraction(self.hour as f64, self.minute as f64, self.second)
    }

    /// Break a day number down into calendar fields.
    ///
    /// The time of day is rounded to the nearest millisecond before the
    /// split, so integer-second inputs come back exact.  The reckoning branch
    /// is taken on the integer day number, which keeps the whole of
    /// 1752-09-14 on the Gregorian side under British reckoning.
    pub fn from_jd(jd: JulianDate, reckoning: Reckoning) -> Self {
        let shifted = jd.value() + 0.5;
        let mut jdn = shifted.floor() as i64;
        let mut millis = ((shifted - shifted.floor()) * MILLIS_PER_DAY as f64).round() as i64;
        if millis >= MILLIS_PER_DAY {
            jdn += 1;
            millis -= MILLIS_PER_DAY;
        }

        let (year, month, day) = if reckoning.is_julian_at(jdn) {
            julian_jdn_to_date(jdn)
        } else {
            gregorian_jdn_to_date(jdn)
        };

        Self {
            year,
            month,
            day,
            hour: (millis / 3_600_000) as u32,
            minute: (millis % 3_600_000 / 60_000) as u32,
            second: (millis % 60_000) as f64 / 1000.0,
        }
    }

    /// Day of the week of this date.
    pub fn weekday(&self, reckoning: Reckoning) -> Weekday {
        self.to_jd(reckoning).weekday()
    }
}

// ── day-number arithmetic ─────────────────────────────────────────────────

/// Fraction of a day measured from noon: `(h - 12)/24 + n/1440 + s/86400`.
#[inline]
pub fn time_to_day_fraction(hour: f64, minute: f64, second: f64) -> Days {
    Days::new((hour - 12.0) / 24.0 + minute / 1440.0) + Seconds::new(second).to::<Day>()
}

/// Integer day number of a calendar date (noon of that day).
fn date_to_jdn(year: f64, month: f64, day: f64, reckoning: Reckoning) -> f64 {
    let a = ((14.0 - month) / 12.0).floor();
    let y = year + 4800.0 - a;
    let m = month + 12.0 * a - 3.0;
    let base = day + ((153.0 * m + 2.0) / 5.0).floor() + 365.0 * y + (y / 4.0).floor();
    let gregorian = base - (y / 100.0).floor() + (y / 400.0).floor() - 32045.0;
    let julian = base - 32083.0;

    match reckoning {
        Reckoning::Gregorian => gregorian,
        Reckoning::Julian => julian,
        Reckoning::British if gregorian < SG => julian.min(SG),
        Reckoning::British => gregorian,
    }
}

fn julian_jdn_to_date(jdn: i64) -> (i64, u32, u32) {
    let b = (jdn + 1524) as f64;
    let c = ((b - 122.1) / 365.25).floor();
    let f = (365.25 * c).floor();
    let e = ((b - f) / 30.6001).floor();
    let month = if e > 13.0 { e - 13.0 } else { e - 1.0 };
    let day = b - f - (30.6001 * e).floor();
    let year = if month < 3.0 { c - 4715.0 } else { c - 4716.0 };
    (year as i64, month as u32, day as u32)
}

fn gregorian_jdn_to_date(jdn: i64) -> (i64, u32, u32) {
    let mut j = jdn - 1_721_119;
    let mut y = (4 * j - 1).div_euclid(146_097);
    j = 4 * j - 1 - 146_097 * y;
    let mut d = j.div_euclid(4);
    j = (4 * d + 3).div_euclid(1461);
    d = 4 * d + 3 - 1461 * j;
    d = (d + 4).div_euclid(4);
    let mut m = (5 * d - 3).div_euclid(153);
    d = 5 * d - 3 - 153 * m;
    d = (d + 5).div_euclid(5);
    y = 100 * y + j;
    if m < 10 {
        m += 3;
    } else {
        m -= 9;
        y += 1;
    }
    (y, m as u32, d as u32)
}

/// Number of days in a Western month under `reckoning`.
///
/// September 1752 has 19 days under British reckoning.
pub fn days_in_month(year: i64, month: u32, reckoning: Reckoning) -> u32 {
    let (next_year, next_month) = if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first = WesternDateTime::date(year, month, 1).to_jd(reckoning);
    let next = WesternDateTime::date(next_year, next_month, 1).to_jd(reckoning);
    (next - first).value().round() as u32
}

// ── parsing ───────────────────────────────────────────────────────────────

/// Parse a digit string into a UTC day number.
///
/// Every non-digit character is ignored.  The remaining digits must be
/// `yyyymmdd` (taken at noon), `yyyymmddhhnnss`, or `yyyymmddhhnnssttt`
/// with milliseconds.  The reading is local time at `tz_hours`.
///
/// ```
/// use mmcal::{parse_datetime, Reckoning};
///
/// let jd = parse_datetime("1970-01-01 00:00:00", 0.0, Reckoning::Gregorian).unwrap();
/// assert_eq!(jd.value(), 2_440_587.5);
/// ```
pub fn parse_datetime(
    input: &str,
    tz_hours: f64,
    reckoning: Reckoning,
) -> Result<JulianDate, DomainError> {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
    if !matches!(digits.len(), 8 | 14 | 17) {
        tracing::warn!(input, "date-time string needs 8, 14 or 17 digits");
        return Err(DomainError::MalformedDateString(input.to_owned()));
    }
    let field = |range: std::ops::Range<usize>| {
        digits[range]
            .iter()
            .fold(0u32, |acc, digit| acc * 10 + digit)
    };

    let mut fields = WesternDateTime::date(field(0..4) as i64, field(4..6), field(6..8));
    if digits.len() >= 14 {
        fields.hour = field(8..10);
        fields.minute = field(10..12);
        fields.second = field(12..14) as f64;
    }
    if digits.len() == 17 {
        fields.second += field(14..17) as f64 / 1000.0;
    }
    Ok(JulianDate::from_local(fields.to_jd(reckoning), tz_hours))
}
