// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar eras and their constant tables.
//!
//! | Era | Years (ME) | Watat rule |
//! |-----|------------|------------|
//! | [`Era::MakarantaI`] | < 798 | 19-year Metonic cycle |
//! | [`Era::MakarantaII`] | 798 – 1099 | 19-year Metonic cycle |
//! | [`Era::Thandeikta`] | 1100 – 1216 | 19-year Metonic cycle |
//! | [`Era::Colonial`] | 1217 – 1311 | excess-day threshold |
//! | [`Era::Independence`] | ≥ 1312 | excess-day threshold |
//!
//! Each era also carries a table of full-moon offset corrections and a list
//! of years whose watat status is inverted.  Both tables are sorted by year
//! and searched with a binary search.

/// Historical calendar era.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Era {
    MakarantaI,
    MakarantaII,
    Thandeikta,
    Colonial,
    Independence,
}

impl Era {
    /// Era of a Myanmar year.
    pub fn of_year(year: i64) -> Self {
        ERA_TABLE
            .iter()
            .find(|band| year >= band.first_year)
            .map_or(Era::MakarantaI, |band| band.era)
    }

    /// Numeric era id: 1.1, 1.2, 1.3, 2 or 3.
    ///
    /// The watat rule switches on `id >= 2`.
    pub const fn id(self) -> f64 {
        match self {
            Era::MakarantaI => 1.1,
            Era::MakarantaII => 1.2,
            Era::Thandeikta => 1.3,
            Era::Colonial => 2.0,
            Era::Independence => 3.0,
        }
    }

    /// `true` for the eras that decide watat from the excess days.
    pub fn uses_excess_days(self) -> bool {
        self.id() >= 2.0
    }
}

/// Constants governing one Myanmar year.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EraConstants {
    pub era: Era,
    /// Watat offset in days, after the full-moon exception table is applied.
    pub watat_offset: f64,
    /// Number of months used to derive the excess-day thresholds.
    pub threshold_months: f64,
    /// The year's watat status is inverted.
    pub watat_exception: bool,
}

struct EraBand {
    era: Era,
    first_year: i64,
    watat_offset: f64,
    threshold_months: f64,
    full_moon_offsets: &'static [(i64, f64)],
    watat_exceptions: &'static [i64],
}

// Newest first, so the first band whose `first_year` is not after the
// requested year wins.
static ERA_TABLE: [EraBand; 5] = [
    EraBand {
        era: Era::Independence,
        first_year: 1312,
        watat_offset: -0.5,
        threshold_months: 8.0,
        full_moon_offsets: &[(1377, 1.0)],
        watat_exceptions: &[1344, 1345],
    },
    EraBand {
        era: Era::Colonial,
        first_year: 1217,
        watat_offset: -1.0,
        threshold_months: 4.0,
        full_moon_offsets: &[(1234, 1.0), (1261, -1.0)],
        watat_exceptions: &[1263, 1264],
    },
    EraBand {
        era: Era::Thandeikta,
        first_year: 1100,
        watat_offset: -0.85,
        threshold_months: -1.0,
        full_moon_offsets: &[
            (1120, 1.0),
            (1126, -1.0),
            (1150, 1.0),
            (1172, -1.0),
            (1207, 1.0),
        ],
        watat_exceptions: &[1201, 1202],
    },
    EraBand {
        era: Era::MakarantaII,
        first_year: 798,
        watat_offset: -1.1,
        threshold_months: -1.0,
        full_moon_offsets: &[
            (813, -1.0),
            (849, -1.0),
            (851, -1.0),
            (854, -1.0),
            (927, -1.0),
            (933, -1.0),
            (936, -1.0),
            (938, -1.0),
            (949, -1.0),
            (952, -1.0),
            (963, -1.0),
            (968, -1.0),
            (1039, -1.0),
        ],
        watat_exceptions: &[],
    },
    EraBand {
        era: Era::MakarantaI,
        first_year: i64::MIN,
        watat_offset: -1.1,
        threshold_months: -1.0,
        full_moon_offsets: &[
            (205, 1.0),
            (246, 1.0),
            (471, 1.0),
            (572, -1.0),
            (651, 1.0),
            (653, 2.0),
            (656, 1.0),
            (672, 1.0),
            (729, 1.0),
            (767, -1.0),
        ],
        watat_exceptions: &[],
    },
];

/// Look up the era constants of a Myanmar year, exceptions applied.
pub fn era_constants(year: i64) -> EraConstants {
    let band = ERA_TABLE
        .iter()
        .find(|band| year >= band.first_year)
        .unwrap_or(&ERA_TABLE[ERA_TABLE.len() - 1]);

    let offset_correction = band
        .full_moon_offsets
        .binary_search_by_key(&year, |&(y, _)| y)
        .map_or(0.0, |i| band.full_moon_offsets[i].1);
    let watat_exception = band.watat_exceptions.binary_search(&year).is_ok();

    tracing::trace!(year, era = ?band.era, offset_correction, watat_exception, "era selected");

    EraConstants {
        era: band.era,
        watat_offset: band.watat_offset + offset_correction,
        threshold_months: band.threshold_months,
        watat_exception,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_boundaries() {
        assert_eq!(Era::of_year(797), Era::MakarantaI);
        assert_eq!(Era::of_year(798), Era::MakarantaII);
        assert_eq!(Era::of_year(1099), Era::MakarantaII);
        assert_eq!(Era::of_year(1100), Era::Thandeikta);
        assert_eq!(Era::of_year(1216), Era::Thandeikta);
        assert_eq!(Era::of_year(1217), Era::Colonial);
        assert_eq!(Era::of_year(1311), Era::Colonial);
        assert_eq!(Era::of_year(1312), Era::Independence);
        assert_eq!(Era::of_year(-40), Era::MakarantaI);
    }

    #[test]
    fn tables_are_sorted_for_binary_search() {
        for band in &ERA_TABLE {
            assert!(band.full_moon_offsets.windows(2).all(|w| w[0].0 < w[1].0));
            assert!(band.watat_exceptions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn full_moon_offset_exception_applies() {
        assert_eq!(era_constants(1376).watat_offset, -0.5);
        assert_eq!(era_constants(1377).watat_offset, 0.5);
        assert_eq!(era_constants(653).watat_offset, -1.1 + 2.0);
    }

    #[test]
    fn watat_exception_years() {
        assert!(era_constants(1344).watat_exception);
        assert!(era_constants(1345).watat_exception);
        assert!(!era_constants(1346).watat_exception);
        assert!(era_constants(1263).watat_exception);
        assert!(!era_constants(900).watat_exception);
    }

    #[test]
    fn watat_rule_switches_at_colonial_era() {
        assert!(!Era::Thandeikta.uses_excess_days());
        assert!(Era::Colonial.uses_excess_days());
        assert_eq!(era_constants(1385).threshold_months, 8.0);
        assert_eq!(era_constants(1250).threshold_months, 4.0);
    }
}
