// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Uposatha (sabbath) days listed by Western month.
//!
//! A day qualifies when it is a full moon, a new moon, or a sabbath falling
//! in the waxing or waning fortnight (the quarter-moon days).

use std::fmt;

use crate::astro::{sabbath, Sabbath};
use crate::myanmar::{MoonPhase, MyanmarDate};
use crate::western::{days_in_month, Reckoning, WesternDateTime};
use crate::JulianDate;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UposathaKind {
    FullMoon,
    NewMoon,
    WaxingQuarter,
    WaningQuarter,
}

impl UposathaKind {
    pub const fn symbol(self) -> &'static str {
        match self {
            UposathaKind::FullMoon => "🌕",
            UposathaKind::NewMoon => "🔵",
            UposathaKind::WaxingQuarter => "🌓",
            UposathaKind::WaningQuarter => "🌗",
        }
    }

    /// Full and new moon days are the recitation (patimokkha) days.
    pub const fn is_patimokkha(self) -> bool {
        matches!(self, UposathaKind::FullMoon | UposathaKind::NewMoon)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UposathaDay {
    pub jdn: i64,
    pub date: WesternDateTime,
    pub myanmar: MyanmarDate,
    pub kind: UposathaKind,
}

impl UposathaDay {
    /// Day of the fortnight: 14 or 15 on patimokkha days, 8 on quarters.
    pub fn fortnight_day(&self) -> u32 {
        self.myanmar.fortnight_day()
    }
}

/// `15th🌕  25.01.2024` for patimokkha days, `🌓  18.01.2024` for quarters.
impl fmt::Display for UposathaDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_patimokkha() {
            write!(f, "{:02}th", self.fortnight_day())?;
        }
        write!(
            f,
            "{}  {:02}.{:02}.{}",
            self.kind.symbol(),
            self.date.day,
            self.date.month,
            self.date.year
        )
    }
}

/// Uposatha days of one Western month.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UposathaMonth {
    pub year: i64,
    pub month: u32,
    /// Sasana year of the first day of the month.
    pub sasana_year: i64,
    pub days: Vec<UposathaDay>,
}

/// Classify a single day.
pub fn uposatha_kind(date: &MyanmarDate) -> Option<UposathaKind> {
    match date.moon_phase() {
        MoonPhase::FullMoon => Some(UposathaKind::FullMoon),
        MoonPhase::NewMoon => Some(UposathaKind::NewMoon),
        phase => {
            if sabbath(date.day, date.month, date.year_type) != Some(Sabbath::Sabbath) {
                return None;
            }
            Some(if phase == MoonPhase::Waxing {
                UposathaKind::WaxingQuarter
            } else {
                UposathaKind::WaningQuarter
            })
        }
    }
}

/// List the uposatha days of Western `year`/`month` (1-12).
pub fn uposatha_month(year: i64, month: u32, reckoning: Reckoning) -> UposathaMonth {
    let first = WesternDateTime::date(year, month, 1).to_jd(reckoning).day_number();
    let length = i64::from(days_in_month(year, month, reckoning));

    let days = (first..first + length)
        .filter_map(|jdn| {
            let myanmar = MyanmarDate::from_jdn(jdn);
            let kind = uposatha_kind(&myanmar)?;
            Some(UposathaDay {
                jdn,
                date: WesternDateTime::from_jd(JulianDate::new(jdn as f64), reckoning),
                myanmar,
                kind,
            })
        })
        .collect();

    UposathaMonth {
        year,
        month,
        sasana_year: MyanmarDate::from_jdn(first).sasana_year(),
        days,
    }
}

/// The twelve monthly listings of a Western year.
pub fn uposatha_year(year: i64, reckoning: Reckoning) -> Vec<UposathaMonth> {
    (1..=12)
        .map(|month| uposatha_month(year, month, reckoning))
        .collect()
}
