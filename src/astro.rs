// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Astrological day predicates of the Myanmar calendar.
//!
//! Every predicate is a closed-form function of the month code, day of
//! month, weekday and year.  Month codes follow [`MyanmarDate`]: First Waso
//! (`0`) counts as Waso and the late months count as Tagu / Kason wherever a
//! rule is month-indexed.

use std::fmt;

use crate::myanmar::{fortnight_day, month_length, MyanmarDate, YearType};
use crate::Weekday;

/// Sabbath marker of a day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sabbath {
    Sabbath,
    SabbathEve,
}

impl Sabbath {
    pub const fn name(self) -> &'static str {
        match self {
            Sabbath::Sabbath => "Sabbath",
            Sabbath::SabbathEve => "Sabbath Eve",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pyathada {
    Pyathada,
    Afternoon,
}

impl Pyathada {
    pub const fn name(self) -> &'static str {
        match self {
            Pyathada::Pyathada => "Pyathada",
            Pyathada::Afternoon => "Afternoon Pyathada",
        }
    }
}

/// Direction the naga's head faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nagahle {
    West,
    North,
    East,
    South,
}

impl Nagahle {
    pub const fn name(self) -> &'static str {
        match self {
            Nagahle::West => "West",
            Nagahle::North => "North",
            Nagahle::East => "East",
            Nagahle::South => "South",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mahabote {
    Binga,
    Atun,
    Yaza,
    Adipati,
    Marana,
    Thike,
    Puti,
}

impl Mahabote {
    const ALL: [Mahabote; 7] = [
        Mahabote::Binga,
        Mahabote::Atun,
        Mahabote::Yaza,
        Mahabote::Adipati,
        Mahabote::Marana,
        Mahabote::Thike,
        Mahabote::Puti,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Mahabote::Binga => "Binga",
            Mahabote::Atun => "Atun",
            Mahabote::Yaza => "Yaza",
            Mahabote::Adipati => "Adipati",
            Mahabote::Marana => "Marana",
            Mahabote::Thike => "Thike",
            Mahabote::Puti => "Puti",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nakhat {
    Ogre,
    Elf,
    Human,
}

impl Nakhat {
    pub const fn name(self) -> &'static str {
        match self {
            Nakhat::Ogre => "Ogre",
            Nakhat::Elf => "Elf",
            Nakhat::Human => "Human",
        }
    }
}

/// The named astrological days, in reporting order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AstrologicalDay {
    Thamanyo,
    Amyeittasote,
    Warameittugyi,
    Warameittunge,
    Yatpote,
    Thamaphyu,
    Nagapor,
    Yatyotema,
    Mahayatkyan,
    Shanyat,
}

impl AstrologicalDay {
    pub const fn name(self) -> &'static str {
        match self {
            AstrologicalDay::Thamanyo => "Thamanyo",
            AstrologicalDay::Amyeittasote => "Amyeittasote",
            AstrologicalDay::Warameittugyi => "Warameittugyi",
            AstrologicalDay::Warameittunge => "Warameittunge",
            AstrologicalDay::Yatpote => "Yatpote",
            AstrologicalDay::Thamaphyu => "Thamaphyu",
            AstrologicalDay::Nagapor => "Nagapor",
            AstrologicalDay::Yatyotema => "Yatyotema",
            AstrologicalDay::Mahayatkyan => "Mahayatkyan",
            AstrologicalDay::Shanyat => "Shanyat",
        }
    }
}

macro_rules! impl_display_by_name {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }
        )*
    };
}

impl_display_by_name!(Sabbath, Pyathada, Nagahle, Mahabote, Nakhat, AstrologicalDay);

// ── month normalisation ───────────────────────────────────────────────────

/// Late months to 1..=2, First Waso to Waso.
fn normalized_month(month: u32) -> u32 {
    match month % 13 + month / 13 {
        0 => 4,
        m => m,
    }
}

#[inline]
fn wd(weekday: Weekday) -> u32 {
    weekday.index() as u32
}

// ── predicates ────────────────────────────────────────────────────────────

/// Sabbath on days 8, 15, 23 and the last day; sabbath eve the day before.
pub fn sabbath(day: u32, month: u32, year_type: YearType) -> Option<Sabbath> {
    let last = month_length(month, year_type);
    if [7, 14, 22, last - 1].contains(&day) {
        Some(Sabbath::SabbathEve)
    } else if [8, 15, 23, last].contains(&day) {
        Some(Sabbath::Sabbath)
    } else {
        None
    }
}

pub fn is_yatyaza(month: u32, weekday: Weekday) -> bool {
    let m1 = month % 4;
    let wd1 = m1 / 2 + 4;
    let wd2 = (1 - m1 / 2 + m1 % 2) * (1 + 2 * (m1 % 2));
    wd(weekday) == wd1 || wd(weekday) == wd2
}

pub fn pyathada(month: u32, weekday: Weekday) -> Option<Pyathada> {
    const WDA: [u32; 7] = [1, 3, 3, 0, 2, 1, 2];
    let m1 = month % 4;
    if m1 == WDA[wd(weekday) as usize] {
        Some(Pyathada::Pyathada)
    } else if m1 == 0 && weekday == Weekday::Wednesday {
        Some(Pyathada::Afternoon)
    } else {
        None
    }
}

pub fn nagahle(month: u32) -> Nagahle {
    let month = if month == 0 { 4 } else { month };
    match (month % 12) / 3 {
        0 => Nagahle::West,
        1 => Nagahle::North,
        2 => Nagahle::East,
        _ => Nagahle::South,
    }
}

pub fn mahabote(year: i64, weekday: Weekday) -> Mahabote {
    Mahabote::ALL[(year - weekday.index() as i64).rem_euclid(7) as usize]
}

pub fn nakhat(year: i64) -> Nakhat {
    match year.rem_euclid(3) {
        0 => Nakhat::Ogre,
        1 => Nakhat::Elf,
        _ => Nakhat::Human,
    }
}

pub fn is_thamanyo(month: u32, weekday: Weekday) -> bool {
    let month = normalized_month(month);
    let m1 = month - 1 - month / 9;
    let wd1 = (m1 * 2 - m1 / 8) % 7;
    (wd(weekday) + 7 - wd1) % 7 <= 1
}

pub fn is_amyeittasote(day: u32, weekday: Weekday) -> bool {
    const WDA: [u32; 7] = [5, 8, 3, 7, 2, 4, 1];
    fortnight_day(day) == WDA[wd(weekday) as usize]
}

pub fn is_warameittugyi(day: u32, weekday: Weekday) -> bool {
    const WDA: [u32; 7] = [7, 1, 4, 8, 9, 6, 3];
    fortnight_day(day) == WDA[wd(weekday) as usize]
}

pub fn is_warameittunge(day: u32, weekday: Weekday) -> bool {
    12 - fortnight_day(day) as i64 == ((wd(weekday) + 6) % 7) as i64
}

pub fn is_yatpote(day: u32, weekday: Weekday) -> bool {
    const WDA: [u32; 7] = [8, 1, 4, 6, 9, 8, 7];
    fortnight_day(day) == WDA[wd(weekday) as usize]
}

pub fn is_thamaphyu(day: u32, weekday: Weekday) -> bool {
    const WDA: [u32; 7] = [1, 2, 6, 6, 5, 6, 7];
    const WDB: [u32; 7] = [0, 1, 0, 0, 0, 3, 3];
    let mf = fortnight_day(day);
    let i = wd(weekday) as usize;
    mf == WDA[i] || mf == WDB[i] || (mf == 4 && weekday == Weekday::Thursday)
}

/// Keyed on the day of month, not the fortnight day.
pub fn is_nagapor(day: u32, weekday: Weekday) -> bool {
    const WDA: [u32; 7] = [26, 21, 2, 10, 18, 2, 21];
    const WDB: [u32; 7] = [17, 19, 1, 0, 9, 0, 0];
    let i = wd(weekday) as usize;
    day == WDA[i]
        || day == WDB[i]
        || (day == 2 && weekday == Weekday::Sunday)
        || ([12, 4, 18].contains(&day) && weekday == Weekday::Monday)
}

pub fn is_yatyotema(month: u32, day: u32) -> bool {
    let month = normalized_month(month);
    let m1 = if month % 2 == 1 { month } else { (month + 9) % 12 };
    fortnight_day(day) == (m1 + 4) % 12 + 1
}

pub fn is_mahayatkyan(month: u32, day: u32) -> bool {
    let month = if month == 0 { 4 } else { month };
    fortnight_day(day) == ((month % 12) / 2 + 4) % 6 + 1
}

pub fn is_shanyat(month: u32, day: u32) -> bool {
    const SYA: [u32; 12] = [8, 8, 2, 2, 9, 3, 3, 5, 1, 4, 7, 4];
    fortnight_day(day) == SYA[(normalized_month(month) - 1) as usize]
}

/// The named astrological days that fall on a date, in reporting order.
pub fn astrological_days(month: u32, day: u32, weekday: Weekday) -> Vec<AstrologicalDay> {
    let checks = [
        (AstrologicalDay::Thamanyo, is_thamanyo(month, weekday)),
        (AstrologicalDay::Amyeittasote, is_amyeittasote(day, weekday)),
        (AstrologicalDay::Warameittugyi, is_warameittugyi(day, weekday)),
        (AstrologicalDay::Warameittunge, is_warameittunge(day, weekday)),
        (AstrologicalDay::Yatpote, is_yatpote(day, weekday)),
        (AstrologicalDay::Thamaphyu, is_thamaphyu(day, weekday)),
        (AstrologicalDay::Nagapor, is_nagapor(day, weekday)),
        (AstrologicalDay::Yatyotema, is_yatyotema(month, day)),
        (AstrologicalDay::Mahayatkyan, is_mahayatkyan(month, day)),
        (AstrologicalDay::Shanyat, is_shanyat(month, day)),
    ];
    checks
        .into_iter()
        .filter_map(|(name, hit)| hit.then_some(name))
        .collect()
}

// ── aggregate ─────────────────────────────────────────────────────────────

/// Every astrological attribute of one civil day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayFlags {
    pub date: MyanmarDate,
    pub weekday: Weekday,
    pub sabbath: Option<Sabbath>,
    pub yatyaza: bool,
    pub pyathada: Option<Pyathada>,
    pub nagahle: Nagahle,
    pub mahabote: Mahabote,
    pub nakhat: Nakhat,
    pub astrological_days: Vec<AstrologicalDay>,
}

impl DayFlags {
    /// Classify an integer day number.
    pub fn from_jdn(jdn: i64) -> Self {
        let date = MyanmarDate::from_jdn(jdn);
        let weekday = Weekday::from_day_number(jdn);
        Self {
            date,
            weekday,
            sabbath: sabbath(date.day, date.month, date.year_type),
            yatyaza: is_yatyaza(date.month, weekday),
            pyathada: pyathada(date.month, weekday),
            nagahle: nagahle(date.month),
            mahabote: mahabote(date.year, weekday),
            nakhat: nakhat(date.year),
            astrological_days: astrological_days(date.month, date.day, weekday),
        }
    }
}
