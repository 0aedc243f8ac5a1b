// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sun position and daily events.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use super::{altitude, azimuth, days, sidereal_time, Equatorial, GeoLocation};
use crate::JulianDate;

const J0: f64 = 0.0009;

/// A solar altitude and the names of its morning and evening crossings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunAngle {
    /// Altitude of the sun centre, degrees.
    pub degrees: f64,
    pub rise_name: &'static str,
    pub set_name: &'static str,
}

impl SunAngle {
    pub const fn new(degrees: f64, rise_name: &'static str, set_name: &'static str) -> Self {
        Self {
            degrees,
            rise_name,
            set_name,
        }
    }
}

/// Events computed by [`sun_times`].
pub const DEFAULT_SUN_ANGLES: [SunAngle; 6] = [
    SunAngle::new(-0.833, "sunrise", "sunset"),
    SunAngle::new(-0.3, "sunriseEnd", "sunsetStart"),
    SunAngle::new(-6.0, "dawn", "dusk"),
    SunAngle::new(-12.0, "nauticalDawn", "nauticalDusk"),
    SunAngle::new(-18.0, "nightEnd", "night"),
    SunAngle::new(6.0, "goldenHourEnd", "goldenHour"),
];

/// Named solar events of one day.
///
/// `solarNoon` and `nadir` are always present.  An angle the sun never
/// reaches on that day (polar day or night) contributes no entries, so
/// callers must check for presence.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SunTimes {
    events: BTreeMap<&'static str, JulianDate>,
}

impl SunTimes {
    /// Event by name, e.g. `"sunrise"` or `"nauticalDawn"`.
    pub fn get(&self, name: &str) -> Option<JulianDate> {
        self.events.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.events.contains_key(name)
    }

    /// Events in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, JulianDate)> + '_ {
        self.events.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn solar_noon(&self) -> Option<JulianDate> {
        self.get("solarNoon")
    }

    pub fn nadir(&self) -> Option<JulianDate> {
        self.get("nadir")
    }

    pub fn sunrise(&self) -> Option<JulianDate> {
        self.get("sunrise")
    }

    pub fn sunset(&self) -> Option<JulianDate> {
        self.get("sunset")
    }

    /// Civil dawn (−6°).
    pub fn dawn(&self) -> Option<JulianDate> {
        self.get("dawn")
    }

    /// Civil dusk (−6°).
    pub fn dusk(&self) -> Option<JulianDate> {
        self.get("dusk")
    }

    pub fn nautical_dawn(&self) -> Option<JulianDate> {
        self.get("nauticalDawn")
    }

    pub fn nautical_dusk(&self) -> Option<JulianDate> {
        self.get("nauticalDusk")
    }
}

/// Sun azimuth (from south, westward positive) and altitude, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPosition {
    pub azimuth: f64,
    pub altitude: f64,
}

fn solar_mean_anomaly(d: f64) -> f64 {
    (357.5291 + 0.985_600_28 * d).to_radians()
}

fn ecliptic_longitude(m: f64) -> f64 {
    let centre = (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin()).to_radians();
    let perihelion = 102.9372_f64.to_radians();
    m + centre + perihelion + PI
}

pub(crate) fn sun_coords(d: f64) -> Equatorial {
    Equatorial::from_ecliptic(ecliptic_longitude(solar_mean_anomaly(d)), 0.0)
}

/// Where the sun stands at `jd` as seen from `location`.
pub fn sun_position(jd: JulianDate, location: &GeoLocation) -> SunPosition {
    let d = days(jd);
    let c = sun_coords(d);
    let h = sidereal_time(d, location.lw()) - c.ra;
    SunPosition {
        azimuth: azimuth(h, location.phi(), c.dec),
        altitude: altitude(h, location.phi(), c.dec),
    }
}

/// Horizon dip for an observer `height` metres up, degrees.
fn observer_angle(height: f64) -> f64 {
    -2.076 * height.sqrt() / 60.0
}

/// Sun events of the day around `jd` for the default angles.
pub fn sun_times(jd: JulianDate, location: &GeoLocation) -> SunTimes {
    sun_times_with(jd, location, &DEFAULT_SUN_ANGLES)
}

/// Sun events for an explicit set of angles.
///
/// The transit is found with one correction pass; each rise is placed
/// symmetrically to its set about the transit.
pub fn sun_times_with(jd: JulianDate, location: &GeoLocation, angles: &[SunAngle]) -> SunTimes {
    let lw = location.lw();
    let phi = location.phi();
    let dh = observer_angle(location.height);

    let d = days(jd);
    let n = (d - J0 - lw / (2.0 * PI)).round();
    let ds = approx_transit(0.0, lw, n);
    let m = solar_mean_anomaly(ds);
    let l = ecliptic_longitude(m);
    let dec = Equatorial::from_ecliptic(l, 0.0).dec;
    let noon = solar_transit(ds, m, l);

    let mut events = BTreeMap::new();
    events.insert("solarNoon", JulianDate::new(noon));
    events.insert("nadir", JulianDate::new(noon - 0.5));

    for angle in angles {
        let h0 = (angle.degrees + dh).to_radians();
        let w = ((h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())).acos();
        if w.is_nan() {
            tracing::debug!(
                angle = angle.degrees,
                latitude = location.latitude,
                "sun does not cross this altitude today"
            );
            continue;
        }
        let set = solar_transit(approx_transit(w, lw, n), m, l);
        let rise = noon - (set - noon);
        events.insert(angle.rise_name, JulianDate::new(rise));
        events.insert(angle.set_name, JulianDate::new(set));
    }

    SunTimes { events }
}

fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / (2.0 * PI) + n
}

fn solar_transit(ds: f64, m: f64, l: f64) -> f64 {
    JulianDate::J2000.value() + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yangon() -> GeoLocation {
        GeoLocation::new(16.8409, 96.1735, 0.0).unwrap()
    }

    // 2024-01-01 06:00 UTC
    const T: JulianDate = JulianDate::new(2_460_310.75);

    fn close(actual: Option<JulianDate>, expected: f64) {
        let actual = actual.expect("event present").value();
        assert!(
            (actual - expected).abs() < 1e-6,
            "{actual} differs from {expected}"
        );
    }

    #[test]
    fn yangon_new_year_events() {
        let t = sun_times(T, &yangon());
        assert_eq!(t.len(), 14);
        close(t.solar_noon(), 2_460_310.735_809_19);
        close(t.nadir(), 2_460_310.235_809_19);
        close(t.sunrise(), 2_460_310.503_740_46);
        close(t.sunset(), 2_460_310.967_877_92);
        close(t.get("sunriseEnd"), 2_460_310.505_433_54);
        close(t.get("sunsetStart"), 2_460_310.966_184_84);
        close(t.dawn(), 2_460_310.487_437_37);
        close(t.dusk(), 2_460_310.984_181_01);
        close(t.nautical_dawn(), 2_460_310.468_718_63);
        close(t.nautical_dusk(), 2_460_311.002_899_73);
        close(t.get("nightEnd"), 2_460_310.450_180_46);
        close(t.get("night"), 2_460_311.021_437_91);
        close(t.get("goldenHourEnd"), 2_460_310.525_637_50);
        close(t.get("goldenHour"), 2_460_310.945_980_88);
    }

    #[test]
    fn event_ordering() {
        let t = sun_times(T, &yangon());
        let order = [
            "nightEnd",
            "nauticalDawn",
            "dawn",
            "sunrise",
            "sunriseEnd",
            "goldenHourEnd",
            "solarNoon",
            "goldenHour",
            "sunsetStart",
            "sunset",
            "dusk",
            "nauticalDusk",
            "night",
        ];
        for pair in order.windows(2) {
            assert!(t.get(pair[0]) < t.get(pair[1]), "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn height_widens_the_day() {
        let high = GeoLocation::new(16.8409, 96.1735, 100.0).unwrap();
        let t = sun_times(T, &high);
        close(t.sunrise(), 2_460_310.502_642_60);
        close(t.sunset(), 2_460_310.968_975_76);
    }

    #[test]
    fn polar_day_drops_crossings() {
        let arctic = GeoLocation::new(80.0, 0.0, 0.0).unwrap();
        let t = sun_times(JulianDate::new(2_460_483.0), &arctic);
        assert!(!t.contains("sunrise"));
        assert!(!t.contains("sunset"));
        assert!(t.nautical_dawn().is_none());
        close(t.solar_noon(), 2_460_483.002_153_796);
    }

    #[test]
    fn polar_night_keeps_deep_twilight() {
        let arctic = GeoLocation::new(80.0, 0.0, 0.0).unwrap();
        let t = sun_times(JulianDate::new(2_460_666.0), &arctic);
        assert!(t.sunrise().is_none());
        assert!(t.contains("nightEnd"));
        assert!(t.contains("night"));
    }

    #[test]
    fn custom_angles() {
        let blue = [SunAngle::new(-4.0, "blueHourEnd", "blueHour")];
        let t = sun_times_with(T, &yangon(), &blue);
        assert_eq!(t.len(), 4);
        let start = t.get("blueHourEnd").unwrap();
        let dawn = sun_times(T, &yangon()).dawn().unwrap();
        assert!(start > dawn);
        assert!(t.sunrise().is_none());
    }

    #[test]
    fn position_at_mid_morning() {
        let p = sun_position(T, &yangon());
        assert!((p.azimuth - 0.131_954_936_824_497_24).abs() < 1e-9);
        assert!((p.altitude - 0.868_352_765_910_745_5).abs() < 1e-9);
    }
}
