// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day number ↔ Myanmar date conversions.

use std::fmt;

use super::year::{check_year, year_descriptor, YearType, MYANMAR_EPOCH, SOLAR_YEAR};
use crate::error::DomainError;
use crate::JulianDate;

/// Month names indexed by month code `0..=14`.
pub const MONTH_NAMES: [&str; 15] = [
    "First Waso",
    "Tagu",
    "Kason",
    "Nayon",
    "Waso",
    "Wagaung",
    "Tawthalin",
    "Thadingyut",
    "Tazaungmon",
    "Nadaw",
    "Pyatho",
    "Tabodwe",
    "Tabaung",
    "Late Tagu",
    "Late Kason",
];

/// The twelve-year name cycle, indexed by `year mod 12`.
pub const YEAR_NAMES: [&str; 12] = [
    "Hpusha",
    "Magha",
    "Phalguni",
    "Chitra",
    "Visakha",
    "Jyeshtha",
    "Ashadha",
    "Sravana",
    "Bhadrapaha",
    "Asvini",
    "Krittika",
    "Mrigasiras",
];

/// Offset between the Sasana (Buddhist era) year and the Myanmar year.
pub const SASANA_YEAR_OFFSET: i64 = 1182;

/// Moon phase of a Myanmar day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoonPhase {
    Waxing = 0,
    FullMoon = 1,
    Waning = 2,
    NewMoon = 3,
}

impl MoonPhase {
    const ALL: [MoonPhase; 4] = [
        MoonPhase::Waxing,
        MoonPhase::FullMoon,
        MoonPhase::Waning,
        MoonPhase::NewMoon,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            MoonPhase::Waxing => "Waxing",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::Waning => "Waning",
            MoonPhase::NewMoon => "New Moon",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── month-level helpers ───────────────────────────────────────────────────

/// Length of a month in days (29 or 30; Nayon gains a day in big watat years).
pub fn month_length(month: u32, year_type: YearType) -> u32 {
    let mut length = 30 - month % 2;
    if month == 3 && year_type == YearType::BigWatat {
        length += 1;
    }
    length
}

/// Year length in days.
#[inline]
pub fn year_length(year_type: YearType) -> u32 {
    year_type.days()
}

/// Moon phase from day of month: `⌊(d+1)/16⌋ + ⌊d/16⌋ + ⌊d/len⌋`.
pub fn moon_phase(day: u32, month: u32, year_type: YearType) -> MoonPhase {
    let length = month_length(month, year_type);
    let index = (day + 1) / 16 + day / 16 + day / length;
    MoonPhase::ALL[index.min(3) as usize]
}

/// Fortnight day `1..=15` from day of month.
#[inline]
pub fn fortnight_day(day: u32) -> u32 {
    day - 15 * (day / 16)
}

/// Day of month from fortnight day and moon phase; inverse of
/// [`fortnight_day`] + [`moon_phase`].
pub fn day_of_month(fortnight_day: u32, phase: MoonPhase, month: u32, year_type: YearType) -> u32 {
    let length = month_length(month, year_type);
    let m1 = (phase.index() % 2) as u32;
    let m2 = (phase.index() / 2) as u32;
    m1 * (15 + m2 * (length - 15)) + (1 - m1) * (fortnight_day + 15 * m2)
}

// ── MyanmarDate ───────────────────────────────────────────────────────────

/// A date in the Myanmar lunisolar calendar.
///
/// Month codes: `0` First Waso, `1` Tagu … `12` Tabaung, `13` Late Tagu,
/// `14` Late Kason.  Code `4` is the (second) Waso.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MyanmarDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub year_type: YearType,
}

impl MyanmarDate {
    /// Myanmar date of an integer day number.
    pub fn from_jdn(jdn: i64) -> Self {
        let jdn_f = jdn as f64;
        let mut year = ((jdn_f - 0.5 - MYANMAR_EPOCH) / SOLAR_YEAR).floor() as i64;
        let mut descriptor = year_descriptor(year);
        // The solar estimate can run ahead of the lunar new year.
        if jdn < descriptor.first_day {
            year -= 1;
            descriptor = year_descriptor(year);
        }
        let myt = descriptor.year_type.as_f64();

        let mut dd = (jdn - descriptor.first_day + 1) as f64;
        let b = (myt / 2.0).floor();
        let c = (1.0 / (myt + 1.0)).floor();
        let year_len = 354.0 + (1.0 - c) * 30.0 + b;
        let late = ((dd - 1.0) / year_len).floor();
        dd -= late * year_len;
        let a = ((dd + 423.0) / 512.0).floor();
        let mut month = ((dd - b * a + c * a * 30.0 + 29.26) / 29.544).floor();
        let e = ((month + 12.0) / 16.0).floor();
        let f = ((month + 11.0) / 16.0).floor();
        let day = dd - (29.544 * month - 29.26).floor() - b * e + c * f * 30.0;
        month += f * 3.0 - e * 4.0 + 12.0 * late;

        Self {
            year,
            month: month as u32,
            day: day as u32,
            year_type: descriptor.year_type,
        }
    }

    /// Myanmar date of the civil day containing `jd` (rounded day number).
    #[inline]
    pub fn from_jd(jd: JulianDate) -> Self {
        Self::from_jdn(jd.day_number())
    }

    /// [`from_jd`](Self::from_jd), refusing years outside the era tables.
    pub fn try_from_jd(jd: JulianDate) -> Result<Self, DomainError> {
        let date = Self::from_jd(jd);
        check_year(date.year)?;
        Ok(date)
    }

    /// Integer day number of this date.
    #[inline]
    pub fn to_jdn(&self) -> i64 {
        myanmar_to_jdn(self.year, self.month, self.day)
    }

    /// Noon of this date on the continuous day axis.
    #[inline]
    pub fn to_jd(&self) -> JulianDate {
        JulianDate::new(self.to_jdn() as f64)
    }

    #[inline]
    pub fn moon_phase(&self) -> MoonPhase {
        moon_phase(self.day, self.month, self.year_type)
    }

    #[inline]
    pub fn fortnight_day(&self) -> u32 {
        fortnight_day(self.day)
    }

    #[inline]
    pub fn month_length(&self) -> u32 {
        month_length(self.month, self.year_type)
    }

    #[inline]
    pub fn year_length(&self) -> u32 {
        self.year_type.days()
    }

    /// `true` for Late Tagu and Late Kason.
    #[inline]
    pub fn is_late_month(&self) -> bool {
        self.month >= 13
    }

    /// Sasana (Buddhist era) year.
    #[inline]
    pub fn sasana_year(&self) -> i64 {
        self.year + SASANA_YEAR_OFFSET
    }

    pub fn year_name(&self) -> &'static str {
        YEAR_NAMES[self.year.rem_euclid(12) as usize]
    }

    /// Month name; Waso in a watat year reads "Second Waso".
    pub fn month_name(&self) -> String {
        let name = MONTH_NAMES[(self.month as usize).min(14)];
        if self.month == 4 && self.year_type.is_watat() {
            format!("Second {name}")
        } else {
            name.to_owned()
        }
    }
}

impl fmt::Display for MyanmarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.year,
            self.month_name(),
            self.moon_phase(),
            self.fortnight_day()
        )
    }
}

/// Integer day number of a Myanmar date.
pub fn myanmar_to_jdn(year: i64, month: u32, day: u32) -> i64 {
    let descriptor = year_descriptor(year);
    let myt = descriptor.year_type.as_f64();

    let late = (month / 13) as f64;
    let mut mm = (month % 13) as f64 + late;
    let b = (myt / 2.0).floor();
    let c = 1.0 - ((myt + 1.0) / 2.0).floor();
    mm += 4.0 - ((mm + 15.0) / 16.0).floor() * 4.0 + ((mm + 12.0) / 16.0).floor();
    let mut dd = day as f64 + (29.544 * mm - 29.26).floor()
        - c * ((mm + 11.0) / 16.0).floor() * 30.0
        + b * ((mm + 12.0) / 16.0).floor();
    let year_len = 354.0 + (1.0 - c) * 30.0 + b;
    dd += late * year_len;
    dd as i64 + descriptor.first_day - 1
}
