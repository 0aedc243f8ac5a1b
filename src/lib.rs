// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Myanmar calendar toolkit
//!
//! Calendar and almanac computations on a single continuous day-number axis.
//!
//! # Core types
//!
//! - [`JulianDate`]: the continuous day number (CDN), alias for [`Time<JD>`].
//!   Integer values fall on noon UTC.
//! - [`Time<S>`] / [`TimeScale`]: generic instant on a day counter
//!   ([`JD`] or [`UnixTime`]).
//! - [`Period<S>`] / [`Interval<T>`]: spans between two instants.
//! - [`WesternDateTime`] + [`Reckoning`]: Western civil fields under British
//!   (Julian until 1752-09-02, Gregorian from 1752-09-14), Gregorian or
//!   Julian reckoning.
//! - [`MyanmarDate`](myanmar::MyanmarDate): lunisolar date with year type,
//!   moon phase and fortnight day.
//!
//! # Modules
//!
//! | Module | Content |
//! |--------|---------|
//! | [`western`] | CDN ↔ Western fields, month lengths, date-string parser |
//! | [`myanmar`] | era tables, watat, year descriptor, CDN ↔ Myanmar date |
//! | [`astro`] | sabbath, yatyaza, pyathada, nagahle, mahabote, nakhat, astrological days |
//! | [`holiday`] | Thingyan, public holidays, other observances, Easter |
//! | [`fmt`] | `%`/`&` token templates |
//! | [`ephemeris`] | sun and moon position, rise/set, twilight |
//! | [`dawn`] | dawn report for a configured location |
//! | [`uposatha`] | uposatha days of a month or year |
//! | [`config`] | user settings record |
//!
//! All computations are pure functions of their arguments.  The only calls
//! that consult the host are [`Time::now`] and [`local_utc_offset_hours`].
//!
//! ```
//! use mmcal::myanmar::MyanmarDate;
//! use mmcal::{holiday, Reckoning, WesternDateTime};
//!
//! let jd = WesternDateTime::date(2024, 4, 17).to_jd(Reckoning::British);
//! let date = MyanmarDate::from_jd(jd);
//! assert_eq!((date.year, date.month, date.day), (1386, 1, 9));
//! assert_eq!(date.to_string(), "1386 Tagu Waxing 9");
//! assert_eq!(holiday::holidays(jd.day_number()), vec!["Myanmar New Year's Day"]);
//! ```

mod error;
pub(crate) mod instant;
mod julian_date_ext;
mod period;
pub(crate) mod scales;

pub mod astro;
pub mod config;
pub mod dawn;
pub mod ephemeris;
pub mod fmt;
pub mod holiday;
pub mod myanmar;
pub mod uposatha;
pub mod western;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::DomainError;
pub use instant::{Time, TimeInstant, TimeScale};
pub use julian_date_ext::{local_utc_offset_hours, Weekday};
pub use period::{Interval, Period, UtcPeriod};
pub use scales::{UnixTime, JD};
pub use western::{parse_datetime, Reckoning, WesternDateTime};

/// Continuous day number: fractional days, integer values at noon UTC.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;
