// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Public holidays, Thingyan and Easter.
//!
//! Holidays are reported as ordered lists of names.  Each fixed-date holiday
//! carries the first year it was observed; Western dates are read under
//! British reckoning.

use crate::myanmar::{MoonPhase, MyanmarDate, MYANMAR_EPOCH, SOLAR_YEAR};
use crate::western::{Reckoning, WesternDateTime};
use crate::{JulianDate, Period, JD};

/// First Myanmar year with a computed Thingyan.
pub const THINGYAN_FIRST_YEAR: i64 = 1100;

/// First year of the Independence era, which uses the shorter akya offset.
const THIRD_ERA: i64 = 1312;

// ── Thingyan ──────────────────────────────────────────────────────────────

/// The Myanmar new year festival of one Myanmar year.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thingyan {
    /// The Myanmar year that begins.
    pub year: i64,
    /// Moment the sun enters Aries (end of the festival).
    pub atat_time: JulianDate,
    /// Moment the festival begins.
    pub akya_time: JulianDate,
    pub akyo_day: i64,
    pub akya_day: i64,
    pub atat_day: i64,
    pub new_year_day: i64,
}

impl Thingyan {
    /// Thingyan that opens Myanmar year `year`.
    pub fn of_year(year: i64) -> Self {
        Self::with_era_year(year, year)
    }

    /// `era_year` selects the akya offset; it lags `year` by one for days
    /// labelled with a late month.
    fn with_era_year(year: i64, era_year: i64) -> Self {
        let atat = SOLAR_YEAR * year as f64 + MYANMAR_EPOCH;
        let akya = if era_year >= THIRD_ERA {
            atat - 2.169918982
        } else {
            atat - 2.1675
        };
        let akya_day = akya.round() as i64;
        let atat_day = atat.round() as i64;
        Self {
            year,
            atat_time: JulianDate::new(atat),
            akya_time: JulianDate::new(akya),
            akyo_day: akya_day - 1,
            akya_day,
            atat_day,
            new_year_day: atat_day + 1,
        }
    }

    /// Span from the akya moment to the atat moment.
    pub fn period(&self) -> Period<JD> {
        Period::new(self.akya_time, self.atat_time)
    }

    /// Festival label of a day, if it belongs to this Thingyan.
    fn label(&self, jdn: i64) -> Option<&'static str> {
        if jdn == self.atat_day {
            Some("Thingyan Atat")
        } else if jdn > self.akya_day && jdn < self.atat_day {
            Some("Thingyan Akyat")
        } else if jdn == self.akya_day {
            Some("Thingyan Akya")
        } else if jdn == self.akyo_day {
            Some("Thingyan Akyo")
        } else if (1369..1379).contains(&self.year)
            && (jdn == self.akya_day - 2 || (self.atat_day + 2..=self.akya_day + 7).contains(&jdn))
        {
            Some("Holiday")
        } else {
            None
        }
    }
}

// ── Easter ────────────────────────────────────────────────────────────────

/// Day number of Gregorian Easter Sunday (Meeus/Jones/Butcher).
pub fn easter(year: i64) -> i64 {
    let a = year % 19;
    let b = year.div_euclid(100);
    let c = year % 100;
    let d = b.div_euclid(4);
    let e = b % 4;
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c.div_euclid(4);
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let q = h + l - 7 * m + 114;
    let day = (q % 31 + 1) as u32;
    let month = q.div_euclid(31) as u32;
    WesternDateTime::date(year, month, day)
        .to_jd(Reckoning::Gregorian)
        .day_number()
}

// ── holiday lists ─────────────────────────────────────────────────────────

struct Civil {
    jdn: i64,
    date: MyanmarDate,
    phase: MoonPhase,
    late: i64,
    western: WesternDateTime,
}

impl Civil {
    fn new(jdn: i64) -> Self {
        let date = MyanmarDate::from_jdn(jdn);
        Self {
            jdn,
            date,
            phase: date.moon_phase(),
            late: (date.month / 13) as i64,
            western: WesternDateTime::from_jd(JulianDate::new(jdn as f64), Reckoning::British),
        }
    }

    fn western_is(&self, from_year: i64, month: u32, day: u32) -> bool {
        self.western.year >= from_year && self.western.month == month && self.western.day == day
    }

    fn full_moon_of(&self, month: u32) -> bool {
        self.date.month == month && self.phase == MoonPhase::FullMoon
    }
}

/// Public holidays of a civil day.
pub fn holidays(jdn: i64) -> Vec<&'static str> {
    let day = Civil::new(jdn);
    let (my, mm, md) = (day.date.year, day.date.month, day.date.day);
    let mut names = Vec::new();

    let thingyan = Thingyan::with_era_year(my + day.late, my);
    if jdn == thingyan.new_year_day {
        names.push("Myanmar New Year's Day");
    }
    if thingyan.year >= THINGYAN_FIRST_YEAR {
        names.extend(thingyan.label(jdn));
    }

    let w = &day.western;
    let western = if day.western_is(2018, 1, 1) {
        Some("New Year's Day")
    } else if day.western_is(1948, 1, 4) {
        Some("Independence Day")
    } else if day.western_is(1947, 2, 12) {
        Some("Union Day")
    } else if day.western_is(1958, 3, 2) {
        Some("Peasants' Day")
    } else if day.western_is(1945, 3, 27) {
        Some("Resistance Day")
    } else if day.western_is(1923, 5, 1) {
        Some("Labour Day")
    } else if day.western_is(1947, 7, 19) {
        Some("Martyrs' Day")
    } else if day.western_is(1752, 12, 25) {
        Some("Christmas Day")
    } else if w.year == 2017 && w.month == 12 && w.day == 30 {
        Some("Holiday")
    } else if day.western_is(2017, 12, 31) {
        Some("Holiday")
    } else {
        None
    };
    names.extend(western);

    let lunar = if day.full_moon_of(2) {
        Some("Buddha Day")
    } else if day.full_moon_of(4) {
        Some("Start of Buddhist Lent")
    } else if day.full_moon_of(7) {
        Some("End of Buddhist Lent")
    } else if my >= 1379 && mm == 7 && (md == 14 || md == 16) {
        Some("Holiday")
    } else if day.full_moon_of(8) {
        Some("Tazaungdaing")
    } else if my >= 1379 && mm == 8 && md == 14 {
        Some("Holiday")
    } else if my >= 1282 && mm == 8 && md == 25 {
        Some("National Day")
    } else if mm == 10 && md == 1 {
        Some("Karen New Year's Day")
    } else if day.full_moon_of(12) {
        Some("Tabaung Pwe")
    } else {
        None
    };
    names.extend(lunar);

    names
}

/// Observances and international days that are not public holidays.
pub fn other_holidays(jdn: i64) -> Vec<&'static str> {
    let day = Civil::new(jdn);
    let (my, mm, md) = (day.date.year, day.date.month, day.date.day);
    let w = &day.western;
    let mut names = Vec::new();

    let western = if w.year <= 2017 && w.month == 1 && w.day == 1 {
        Some("New Year's Day")
    } else if day.western_is(1915, 2, 13) {
        Some("G. Aung San BD")
    } else if day.western_is(1969, 2, 14) {
        Some("Valentines Day")
    } else if day.western_is(1970, 4, 22) {
        Some("Earth Day")
    } else if day.western_is(1392, 4, 1) {
        Some("April Fools' Day")
    } else if day.western_is(1948, 5, 8) {
        Some("Red Cross Day")
    } else if day.western_is(1994, 10, 5) {
        Some("World Teachers' Day")
    } else if day.western_is(1947, 10, 24) {
        Some("United Nations Day")
    } else if day.western_is(1753, 10, 31) {
        Some("Halloween")
    } else {
        None
    };
    names.extend(western);

    if w.year >= 1876 {
        let easter_day = easter(w.year);
        if day.jdn == easter_day {
            names.push("Easter");
        } else if day.jdn == easter_day - 2 {
            names.push("Good Friday");
        }
    }

    if my >= 1309 && mm == 11 && md == 16 {
        names.push("Mon National Day");
    } else if mm == 9 && md == 1 {
        names.push("Shan New Year's Day");
        if my >= 1306 {
            names.push("Authors' Day");
        }
    } else if day.full_moon_of(3) {
        names.push("Mahathamaya Day");
    } else if day.full_moon_of(6) {
        names.push("Garudhamma Day");
    } else if my >= 1356 && day.full_moon_of(10) {
        names.push("Mothers' Day");
    } else if my >= 1370 && day.full_moon_of(12) {
        names.push("Fathers' Day");
    } else if day.full_moon_of(5) {
        names.push("Metta Day");
    } else if mm == 5 && md == 10 {
        names.push("Taungpyone Pwe");
    } else if mm == 5 && md == 23 {
        names.push("Yadanagu Pwe");
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easter_dates() {
        assert_eq!(easter(2024), 2_460_401); // 2024-03-31
        let wd = WesternDateTime::from_jd(JulianDate::new(easter(2024) as f64), Reckoning::Gregorian);
        assert_eq!((wd.month, wd.day), (3, 31));
        let e2000 = WesternDateTime::from_jd(JulianDate::new(easter(2000) as f64), Reckoning::Gregorian);
        assert_eq!((e2000.month, e2000.day), (4, 23));
        let e2025 = WesternDateTime::from_jd(JulianDate::new(easter(2025) as f64), Reckoning::Gregorian);
        assert_eq!((e2025.month, e2025.day), (4, 20));
    }

    #[test]
    fn thingyan_2024() {
        let t = Thingyan::of_year(1386);
        assert_eq!(t.akyo_day, 2_460_414);
        assert_eq!(t.akya_day, 2_460_415);
        assert_eq!(t.atat_day, 2_460_417);
        assert_eq!(t.new_year_day, 2_460_418);
        let span = t.period().duration_days().value();
        assert!((span - 2.169918982).abs() < 1e-6);
        assert!(t.period().contains(JulianDate::new(2_460_416.0)));
    }

    #[test]
    fn thingyan_labels_2024() {
        assert_eq!(holidays(2_460_414), vec!["Thingyan Akyo"]);
        assert_eq!(holidays(2_460_415), vec!["Thingyan Akya"]);
        assert_eq!(holidays(2_460_416), vec!["Thingyan Akyat"]);
        assert_eq!(holidays(2_460_417), vec!["Thingyan Atat"]);
        assert_eq!(holidays(2_460_418), vec!["Myanmar New Year's Day"]);
    }

    #[test]
    fn extended_thingyan_holidays_2008() {
        assert_eq!(holidays(2_454_568), vec!["Holiday"]);
        assert_eq!(holidays(2_454_572), vec!["Thingyan Akyat"]);
        for jdn in 2_454_575..=2_454_577 {
            assert_eq!(holidays(jdn), vec!["Holiday"], "{jdn}");
        }
        assert!(holidays(2_454_578).is_empty());
    }

    #[test]
    fn independence_day_2020() {
        let jdn = WesternDateTime::date(2020, 1, 4)
            .to_jd(Reckoning::Gregorian)
            .day_number();
        assert!(holidays(jdn).contains(&"Independence Day"));
        // Not observed before 1948.
        let jdn1947 = WesternDateTime::date(1947, 1, 4)
            .to_jd(Reckoning::Gregorian)
            .day_number();
        assert!(!holidays(jdn1947).contains(&"Independence Day"));
    }

    #[test]
    fn lunar_and_western_holidays_can_coincide() {
        // 2024-03-24: Tabaung full moon.
        assert_eq!(holidays(2_460_394), vec!["Tabaung Pwe"]);
        assert_eq!(other_holidays(2_460_394), vec!["Fathers' Day"]);
        assert_eq!(
            other_holidays(2_460_646),
            vec!["Shan New Year's Day", "Authors' Day"]
        );
    }

    #[test]
    fn easter_and_good_friday() {
        assert_eq!(other_holidays(2_460_401), vec!["Easter"]);
        assert_eq!(other_holidays(2_460_399), vec!["Good Friday"]);
        assert!(other_holidays(2_460_400).is_empty());
    }
}
