// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision sun and moon ephemeris.
//!
//! Positions follow the simplified series of the "SunCalc" family: a mean
//! anomaly plus equation of centre for the sun, three periodic terms for the
//! moon, fixed obliquity.  Accuracy is of the order of a minute for rise and
//! set times, which is what a calendar needs.
//!
//! Every function takes a [`JulianDate`](crate::JulianDate) on the UTC axis
//! and a [`GeoLocation`]; angles in results are radians.
//!
//! - [`sun`]: position, transit, rise/set and twilight events.
//! - [`moon`]: position, illumination, rise and set.

use std::f64::consts::PI;

use crate::error::DomainError;
use crate::JulianDate;

pub mod moon;
pub mod sun;

pub use moon::{moon_illumination, moon_position, moon_times, MoonIllumination, MoonPosition, MoonTimes};
pub use sun::{sun_position, sun_times, sun_times_with, SunAngle, SunPosition, SunTimes, DEFAULT_SUN_ANGLES};

/// Obliquity of the ecliptic (23.4397°).
const OBLIQUITY: f64 = 23.4397 * PI / 180.0;

/// Observer position on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoLocation {
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
    /// Metres above the horizon.
    pub height: f64,
}

impl GeoLocation {
    /// Validated location.
    ///
    /// Latitude must lie in `[-90, 90]`, longitude in `[-180, 180]` and the
    /// height must be finite and non-negative.
    pub fn new(latitude: f64, longitude: f64, height: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) {
            tracing::warn!(latitude, "latitude outside [-90, 90]");
            return Err(DomainError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            tracing::warn!(longitude, "longitude outside [-180, 180]");
            return Err(DomainError::InvalidLongitude(longitude));
        }
        if !height.is_finite() || height < 0.0 {
            tracing::warn!(height, "observer height must be finite and non-negative");
            return Err(DomainError::InvalidHeight(height));
        }
        Ok(Self {
            latitude,
            longitude,
            height,
        })
    }

    #[inline]
    pub(crate) fn phi(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// West longitude in radians.
    #[inline]
    pub(crate) fn lw(&self) -> f64 {
        -self.longitude.to_radians()
    }
}

/// Right ascension and declination, radians.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Equatorial {
    pub ra: f64,
    pub dec: f64,
}

impl Equatorial {
    /// From ecliptic longitude `l` and latitude `b`.
    pub(crate) fn from_ecliptic(l: f64, b: f64) -> Self {
        let (sin_e, cos_e) = OBLIQUITY.sin_cos();
        Self {
            ra: (l.sin() * cos_e - b.tan() * sin_e).atan2(l.cos()),
            dec: (b.sin() * cos_e + b.cos() * sin_e * l.sin()).asin(),
        }
    }
}

/// Days since J2000.0.
#[inline]
pub(crate) fn days(jd: JulianDate) -> f64 {
    jd.days_since_j2000()
}

pub(crate) fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

pub(crate) fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

pub(crate) fn sidereal_time(d: f64, lw: f64) -> f64 {
    (280.16 + 360.985_623_5 * d).to_radians() - lw
}

/// Refraction in radians for an apparent altitude `h` (Meeus 16.4).
/// Negative altitudes are treated as zero.
pub(crate) fn astro_refraction(h: f64) -> f64 {
    let h = h.max(0.0);
    0.000_296_7 / (h + 0.003_125_36 / (h + 0.089_011_79)).tan()
}
