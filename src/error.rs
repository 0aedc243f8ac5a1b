// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for the checked entry points of the crate.
//!
//! The raw numeric conversions never fail; they follow the calendar formulas
//! wherever the inputs lead.  The checked constructors refuse inputs that lie
//! outside the historically supported range instead of returning a date that
//! merely looks plausible.

use thiserror::Error;

/// Inputs rejected by a checked entry point.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum DomainError {
    /// Myanmar year outside the span covered by the era tables.
    #[error("Myanmar year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange { year: i64, min: i64, max: i64 },

    #[error("latitude {0}° is outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0}° is outside [-180, 180]")]
    InvalidLongitude(f64),

    #[error("observer height {0} m must be finite and non-negative")]
    InvalidHeight(f64),

    /// A Western date-time field is out of its calendar range.
    #[error("invalid date-time field {field} = {value}")]
    InvalidDateTime { field: &'static str, value: f64 },

    /// The date-time string did not contain 8, 14 or 17 digits.
    #[error("malformed date-time string {0:?}")]
    MalformedDateString(String),

    #[error("no location configured")]
    LocationUnset,
}
