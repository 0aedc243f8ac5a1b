// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Myanmar lunisolar calendar.
//!
//! The calendar is derived entirely from the continuous day number:
//!
//! ```text
//! era tables → watat test → year descriptor → (year, month, day)
//! ```
//!
//! - [`era`]: the five historical eras and their exception tables.
//! - [`year`]: intercalation ("watat") and the per-year descriptor.
//! - [`date`]: day number ↔ [`MyanmarDate`], moon phase, fortnight day.
//!
//! ```
//! use mmcal::myanmar::{MoonPhase, MyanmarDate};
//!
//! // 2024-01-01
//! let date = MyanmarDate::from_jdn(2_460_311);
//! assert_eq!(date.year, 1385);
//! assert_eq!(date.month_name(), "Nadaw");
//! assert_eq!(date.moon_phase(), MoonPhase::Waning);
//! assert_eq!(date.to_jdn(), 2_460_311);
//! ```

pub mod date;
pub mod era;
pub mod year;

pub use date::{
    day_of_month, fortnight_day, month_length, moon_phase, myanmar_to_jdn, year_length, MoonPhase,
    MyanmarDate, MONTH_NAMES, SASANA_YEAR_OFFSET, YEAR_NAMES,
};
pub use era::{era_constants, Era, EraConstants};
pub use year::{
    checked_year_descriptor, watat, year_descriptor, Watat, YearDescriptor, YearType,
    LUNAR_MONTH, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, MYANMAR_EPOCH, SOLAR_YEAR,
};
