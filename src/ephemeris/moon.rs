// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Moon position, illumination, rise and set.

use qtty::Days;

use super::sun::sun_coords;
use super::{altitude, astro_refraction, azimuth, days, sidereal_time, Equatorial, GeoLocation};
use crate::JulianDate;

/// Mean Earth–Sun distance, km.
const SUN_DISTANCE_KM: f64 = 149_598_000.0;

/// Moon altitude at rise and set (0.133°), radians.
const HORIZON_CORRECTION: f64 = 0.133 * std::f64::consts::PI / 180.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonPosition {
    /// From south, westward positive, radians.
    pub azimuth: f64,
    /// Refraction-corrected altitude, radians.
    pub altitude: f64,
    /// Geocentric distance, km.
    pub distance: f64,
    /// Parallactic angle, radians.
    pub parallactic_angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonIllumination {
    /// Illuminated fraction, `0.0` (new) to `1.0` (full).
    pub fraction: f64,
    /// Phase in `[0, 1)`: 0 new, 0.25 first quarter, 0.5 full, 0.75 last quarter.
    pub phase: f64,
    /// Midpoint angle of the bright limb, radians.
    pub angle: f64,
}

/// Moonrise and moonset within one local civil day.
///
/// When neither crossing occurs, exactly one of `always_up` and
/// `always_down` is set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonTimes {
    pub rise: Option<JulianDate>,
    pub set: Option<JulianDate>,
    pub always_up: bool,
    pub always_down: bool,
}

struct MoonCoords {
    eq: Equatorial,
    distance: f64,
}

fn moon_coords(d: f64) -> MoonCoords {
    let l = (218.316 + 13.176_396 * d).to_radians();
    let m = (134.963 + 13.064_993 * d).to_radians();
    let f = (93.272 + 13.229_35 * d).to_radians();

    let longitude = l + 6.289_f64.to_radians() * m.sin();
    let latitude = 5.128_f64.to_radians() * f.sin();
    MoonCoords {
        eq: Equatorial::from_ecliptic(longitude, latitude),
        distance: 385_001.0 - 20_905.0 * m.cos(),
    }
}

/// Where the moon stands at `jd` as seen from `location`.
pub fn moon_position(jd: JulianDate, location: &GeoLocation) -> MoonPosition {
    let phi = location.phi();
    let d = days(jd);
    let c = moon_coords(d);
    let h = sidereal_time(d, location.lw()) - c.eq.ra;
    let alt = altitude(h, phi, c.eq.dec);
    let parallactic_angle = h
        .sin()
        .atan2(phi.tan() * c.eq.dec.cos() - c.eq.dec.sin() * h.cos());

    MoonPosition {
        azimuth: azimuth(h, phi, c.eq.dec),
        altitude: alt + astro_refraction(alt),
        distance: c.distance,
        parallactic_angle,
    }
}

/// Illuminated fraction and phase of the moon at `jd`.
pub fn moon_illumination(jd: JulianDate) -> MoonIllumination {
    let d = days(jd);
    let s = sun_coords(d);
    let m = moon_coords(d);

    let phi = (s.dec.sin() * m.eq.dec.sin()
        + s.dec.cos() * m.eq.dec.cos() * (s.ra - m.eq.ra).cos())
    .acos();
    let inc = (SUN_DISTANCE_KM * phi.sin()).atan2(m.distance - SUN_DISTANCE_KM * phi.cos());
    let angle = (s.dec.cos() * (s.ra - m.eq.ra).sin()).atan2(
        s.dec.sin() * m.eq.dec.cos() - s.dec.cos() * m.eq.dec.sin() * (s.ra - m.eq.ra).cos(),
    );
    let sign = if angle < 0.0 { -1.0 } else { 1.0 };

    MoonIllumination {
        fraction: (1.0 + inc.cos()) / 2.0,
        phase: 0.5 + 0.5 * inc * sign / std::f64::consts::PI,
        angle,
    }
}

/// Moonrise and moonset on the local civil day containing `jd`, for a zone
/// `tz_hours` east of UTC.
///
/// The day is scanned in two-hour windows; in each, a parabola through three
/// altitude samples locates horizon crossings.
pub fn moon_times(jd: JulianDate, location: &GeoLocation, tz_hours: f64) -> MoonTimes {
    let local_midnight = JulianDate::new((jd.local(tz_hours).value() - 0.5).floor() + 0.5);
    let start = JulianDate::from_local(local_midnight, tz_hours);
    let altitude_at = |hours: f64| {
        moon_position(start + Days::new(hours / 24.0), location).altitude - HORIZON_CORRECTION
    };

    let mut h0 = altitude_at(0.0);
    let mut rise = None;
    let mut set = None;
    let mut ye = 0.0;

    for i in (1..=24).step_by(2) {
        let i = i as f64;
        let h1 = altitude_at(i);
        let h2 = altitude_at(i + 1.0);

        let a = (h0 + h2) / 2.0 - h1;
        let b = (h2 - h0) / 2.0;
        let xe = -b / (2.0 * a);
        ye = (a * xe + b) * xe + h1;
        let disc = b * b - 4.0 * a * h1;

        let mut roots = 0;
        let (mut x1, mut x2) = (0.0, 0.0);
        if disc >= 0.0 {
            let dx = disc.sqrt() / (a.abs() * 2.0);
            x1 = xe - dx;
            x2 = xe + dx;
            if x1.abs() <= 1.0 {
                roots += 1;
            }
            if x2.abs() <= 1.0 {
                roots += 1;
            }
            if x1 < -1.0 {
                x1 = x2;
            }
        }

        match roots {
            1 if h0 < 0.0 => rise = Some(i + x1),
            1 => set = Some(i + x1),
            2 => {
                rise = Some(i + if ye < 0.0 { x2 } else { x1 });
                set = Some(i + if ye < 0.0 { x1 } else { x2 });
            }
            _ => {}
        }

        if rise.is_some() && set.is_some() {
            break;
        }
        h0 = h2;
    }

    let at = |hours: f64| start + Days::new(hours / 24.0);
    let mut times = MoonTimes {
        rise: rise.map(at),
        set: set.map(at),
        ..MoonTimes::default()
    };
    if rise.is_none() && set.is_none() {
        if ye > 0.0 {
            times.always_up = true;
        } else {
            times.always_down = true;
        }
    }
    times
}
