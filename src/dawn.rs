// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Daily dawn report.
//!
//! Monastic practice needs a dawn time that is earlier than sunrise but
//! later than astronomical dawn.  Two rules are offered, selected by
//! [`Settings::dawn_formula`](crate::config::Settings::dawn_formula):
//!
//! 1. sunrise minus a fixed number of minutes (40 by default);
//! 2. sunrise minus the duration of nautical-to-civil twilight.

use qtty::Days;

use crate::config::{DawnFormula, Settings};
use crate::ephemeris::{sun_times, GeoLocation};
use crate::error::DomainError;
use crate::western::{Reckoning, WesternDateTime};
use crate::{JulianDate, Period, JD};

/// Shown in place of the report while no location is configured.
pub const LOCATION_REQUIRED_LINES: [&str; 4] = [
    "Dawn time calculation",
    "needs location data:",
    "set latitude and longitude",
    "in the settings",
];

/// Sun events of one day plus the derived dawn.
///
/// Any field is `None` when the sun does not reach the corresponding
/// altitude that day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DawnReport {
    pub dawn: Option<JulianDate>,
    pub nautical_dawn: Option<JulianDate>,
    pub civil_dawn: Option<JulianDate>,
    pub sunrise: Option<JulianDate>,
    pub solar_noon: Option<JulianDate>,
    pub sunset: Option<JulianDate>,
}

impl DawnReport {
    /// Compute the report for the day around `jd`.
    pub fn compute(jd: JulianDate, location: &GeoLocation, formula: DawnFormula) -> Self {
        let times = sun_times(jd, location);
        let sunrise = times.sunrise();
        let nautical_dawn = times.nautical_dawn();
        let civil_dawn = times.dawn();

        let dawn = match formula {
            DawnFormula::FixedOffset { minutes } => {
                sunrise.map(|rise| rise - Days::new(minutes / (24.0 * 60.0)))
            }
            DawnFormula::TwilightSpan => match (sunrise, nautical_dawn, civil_dawn) {
                (Some(rise), Some(nautical), Some(civil)) => Some(rise - (civil - nautical)),
                _ => None,
            },
        };

        Self {
            dawn,
            nautical_dawn,
            civil_dawn,
            sunrise,
            solar_noon: times.solar_noon(),
            sunset: times.sunset(),
        }
    }

    /// From dawn to sunrise, when both exist.
    pub fn dawn_window(&self) -> Option<Period<JD>> {
        Some(Period::new(self.dawn?, self.sunrise?))
    }

    /// `["HH:MM Dawn", "HH:MM Rise", "HH:MM Noon", "HH:MM Set"]` in the
    /// zone `tz_hours`.  With `show_twilight` the rise line is preceded by
    /// nautical and civil dawn on their own lines.
    pub fn lines(&self, tz_hours: f64, show_twilight: bool) -> Vec<String> {
        let hm = |t: Option<JulianDate>| clock(t, tz_hours);
        let mut rise = hm(self.sunrise);
        if show_twilight {
            rise = format!(
                "{} Nautical\n{} Civil\n{}",
                hm(self.nautical_dawn),
                hm(self.civil_dawn),
                rise
            );
        }
        vec![
            format!("{} Dawn", hm(self.dawn)),
            format!("{rise} Rise"),
            format!("{} Noon", hm(self.solar_noon)),
            format!("{} Set", hm(self.sunset)),
        ]
    }
}

/// Report for the configured location.
pub fn dawn_report(jd: JulianDate, settings: &Settings) -> Result<DawnReport, DomainError> {
    let location = settings.location()?;
    Ok(DawnReport::compute(jd, &location, settings.dawn_formula()))
}

/// Display lines for the configured location, or the location prompt when
/// none is set.
pub fn dawn_lines(jd: JulianDate, settings: &Settings, tz_hours: f64) -> Result<Vec<String>, DomainError> {
    match dawn_report(jd, settings) {
        Ok(report) => Ok(report.lines(tz_hours, settings.show_twilight)),
        Err(DomainError::LocationUnset) => {
            Ok(LOCATION_REQUIRED_LINES.iter().map(|s| (*s).to_owned()).collect())
        }
        Err(err) => Err(err),
    }
}

/// `HH:MM` wall-clock reading, minutes truncated; `--:--` when absent.
fn clock(t: Option<JulianDate>, tz_hours: f64) -> String {
    match t {
        Some(t) => {
            let wd = WesternDateTime::from_jd(t.local(tz_hours), Reckoning::British);
            format!("{:02}:{:02}", wd.hour, wd.minute)
        }
        None => "--:--".to_owned(),
    }
}
