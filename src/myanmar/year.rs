// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Intercalation and the per-year descriptor.

use super::era::era_constants;
use crate::error::DomainError;

/// Solar year in days (365.2587565).
pub const SOLAR_YEAR: f64 = 1_577_917_828.0 / 4_320_000.0;

/// Lunar month in days (29.53058795).
pub const LUNAR_MONTH: f64 = 1_577_917_828.0 / 53_433_336.0;

/// Day number of the beginning of ME 0.
pub const MYANMAR_EPOCH: f64 = 1_954_168.050623;

/// Earliest Myanmar year accepted by the checked entry points.
pub const MIN_SUPPORTED_YEAR: i64 = 2;

/// Latest Myanmar year accepted by the checked entry points.
pub const MAX_SUPPORTED_YEAR: i64 = 1502;

/// Year type: common, little watat (one extra month) or big watat (one
/// extra month plus one extra day).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum YearType {
    Common = 0,
    LittleWatat = 1,
    BigWatat = 2,
}

impl YearType {
    /// `0`, `1` or `2`.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Year length in days: 354, 384 or 385.
    #[inline]
    pub const fn days(self) -> u32 {
        match self {
            YearType::Common => 354,
            YearType::LittleWatat => 384,
            YearType::BigWatat => 385,
        }
    }

    #[inline]
    pub const fn is_watat(self) -> bool {
        !matches!(self, YearType::Common)
    }

    pub(crate) fn as_f64(self) -> f64 {
        self.index() as f64
    }
}

/// Watat test result for a single year.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Watat {
    pub is_watat: bool,
    /// Full moon day of (second) Waso.  Only meaningful in watat years.
    pub full_moon: i64,
}

/// Decide whether a Myanmar year is intercalary.
pub fn watat(year: i64) -> Watat {
    let c = era_constants(year);
    let threshold = (SOLAR_YEAR / 12.0 - LUNAR_MONTH) * (12.0 - c.threshold_months);
    let mut excess_days = (SOLAR_YEAR * (year + 3739) as f64) % LUNAR_MONTH;
    if excess_days < threshold {
        excess_days += LUNAR_MONTH;
    }
    let full_moon = (SOLAR_YEAR * year as f64 + MYANMAR_EPOCH - excess_days
        + 4.5 * LUNAR_MONTH
        + c.watat_offset)
        .round() as i64;

    let is_watat = if c.era.uses_excess_days() {
        let watat_threshold = LUNAR_MONTH - (SOLAR_YEAR / 12.0 - LUNAR_MONTH) * c.threshold_months;
        excess_days >= watat_threshold
    } else {
        // Metonic cycle: remainders 12..=18 of (7y + 2) mod 19.
        (year * 7 + 2).rem_euclid(19) >= 12
    };

    Watat {
        is_watat: is_watat ^ c.watat_exception,
        full_moon,
    }
}

/// Everything the date conversions need to know about one Myanmar year.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearDescriptor {
    pub year: i64,
    pub year_type: YearType,
    /// Day number of the first day of Tagu.
    pub first_day: i64,
    /// Day number of the full moon of (second) Waso.
    pub full_moon_of_waso: i64,
    /// The gap to the previous watat year was neither 30 nor 31 days.
    pub watat_discrepancy: bool,
}

impl YearDescriptor {
    /// Year length in days.
    #[inline]
    pub const fn length(&self) -> u32 {
        self.year_type.days()
    }
}

/// Build the descriptor of a Myanmar year.
///
/// Walks back at most three years to the previous watat year; the gap
/// between the two Waso full moons decides little versus big watat.
pub fn year_descriptor(year: i64) -> YearDescriptor {
    let current = watat(year);
    let mut years_back = 0;
    let previous = loop {
        years_back += 1;
        let candidate = watat(year - years_back);
        if candidate.is_watat || years_back >= 3 {
            break candidate;
        }
    };

    let mut watat_discrepancy = false;
    let (year_type, full_moon_of_waso) = if current.is_watat {
        let gap = (current.full_moon - previous.full_moon) % 354;
        watat_discrepancy = gap != 30 && gap != 31;
        (watat_type(gap), current.full_moon)
    } else {
        (YearType::Common, previous.full_moon + 354 * years_back)
    };

    if watat_discrepancy {
        tracing::debug!(year, "watat full-moon gap is neither 30 nor 31 days");
    }

    YearDescriptor {
        year,
        year_type,
        first_day: previous.full_moon + 354 * years_back - 102,
        full_moon_of_waso,
        watat_discrepancy,
    }
}

/// Watat kind from the Waso full-moon gap (mod 354): 31 days and up is big.
fn watat_type(gap: i64) -> YearType {
    if gap.div_euclid(31) + 1 >= 2 {
        YearType::BigWatat
    } else {
        YearType::LittleWatat
    }
}

/// [`year_descriptor`] restricted to the supported year range.
pub fn checked_year_descriptor(year: i64) -> Result<YearDescriptor, DomainError> {
    check_year(year)?;
    Ok(year_descriptor(year))
}

pub(crate) fn check_year(year: i64) -> Result<(), DomainError> {
    if (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
        Ok(())
    } else {
        tracing::warn!(year, "Myanmar year outside the supported range");
        Err(DomainError::YearOutOfRange {
            year,
            min: MIN_SUPPORTED_YEAR,
            max: MAX_SUPPORTED_YEAR,
        })
    }
}
