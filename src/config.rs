// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! User settings consumed by the dawn report.
//!
//! The record is flat so that it can be stored as-is by whatever front end
//! owns persistence.  With the `serde` feature it reads and writes the key
//! names used by existing settings files (`u_DawnMinus`, `locationNAME`, ...);
//! missing keys take their defaults and unknown keys are ignored.

use crate::ephemeris::GeoLocation;
use crate::error::DomainError;

/// Coordinate value meaning "no location recorded yet".
pub const UNSET_COORDINATE: f64 = 9999.99999;

/// How the user dawn is derived from sunrise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DawnFormula {
    /// Sunrise minus a fixed number of minutes.
    FixedOffset { minutes: f64 },
    /// Sunrise minus the length of nautical-to-civil twilight.
    TwilightSpan,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Minutes before sunrise for [`DawnFormula::FixedOffset`].
    #[cfg_attr(feature = "serde", serde(rename = "u_DawnMinus"))]
    pub dawn_minutes: f64,
    /// Select [`DawnFormula::TwilightSpan`].
    #[cfg_attr(feature = "serde", serde(rename = "useDynamicDawn_Formula2"))]
    pub use_twilight_formula: bool,
    /// Prefix the sunrise line with nautical and civil dawn.
    #[cfg_attr(feature = "serde", serde(rename = "displayNauticalCivilDawn"))]
    pub show_twilight: bool,
    pub latitude: f64,
    pub longitude: f64,
    /// Metres above the horizon.
    pub altitude: f64,
    #[cfg_attr(feature = "serde", serde(rename = "locationNAME"))]
    pub location_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dawn_minutes: 40.0,
            use_twilight_formula: true,
            show_twilight: false,
            latitude: UNSET_COORDINATE,
            longitude: UNSET_COORDINATE,
            altitude: 0.0,
            location_name: "Name This PLace?".to_owned(),
        }
    }
}

impl Settings {
    /// Settings for a known place, other fields at their defaults.
    pub fn at(latitude: f64, longitude: f64, altitude: f64, name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
            location_name: name.into(),
            ..Self::default()
        }
    }

    pub fn has_location(&self) -> bool {
        self.latitude != UNSET_COORDINATE && self.longitude != UNSET_COORDINATE
    }

    /// The configured observer position.
    pub fn location(&self) -> Result<GeoLocation, DomainError> {
        if !self.has_location() {
            return Err(DomainError::LocationUnset);
        }
        GeoLocation::new(self.latitude, self.longitude, self.altitude)
    }

    pub fn dawn_formula(&self) -> DawnFormula {
        if self.use_twilight_formula {
            DawnFormula::TwilightSpan
        } else {
            DawnFormula::FixedOffset {
                minutes: self.dawn_minutes,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_location() {
        let s = Settings::default();
        assert!(!s.has_location());
        assert_eq!(s.location(), Err(DomainError::LocationUnset));
        assert_eq!(s.dawn_formula(), DawnFormula::TwilightSpan);
        assert!(!s.show_twilight);
    }

    #[test]
    fn fixed_offset_formula() {
        let s = Settings {
            use_twilight_formula: false,
            dawn_minutes: 35.0,
            ..Settings::at(16.8409, 96.1735, 10.0, "Yangon")
        };
        assert_eq!(s.dawn_formula(), DawnFormula::FixedOffset { minutes: 35.0 });
        let loc = s.location().unwrap();
        assert_eq!(loc.height, 10.0);
        assert_eq!(s.location_name, "Yangon");
    }

    #[test]
    fn bad_coordinates_surface_as_domain_errors() {
        let s = Settings::at(95.0, 96.0, 0.0, "nowhere");
        assert_eq!(s.location(), Err(DomainError::InvalidLatitude(95.0)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn reads_legacy_keys() {
        let json = r#"{
            "u_DawnMinus": 45,
            "useDynamicDawn_Formula2": false,
            "displayNauticalCivilDawn": true,
            "latitude": 21.9588,
            "longitude": 96.0891,
            "altitude": 70,
            "locationNAME": "Mandalay",
            "horizontalAccuracy": 0,
            "upcalVersion": "2.0"
        }"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.dawn_minutes, 45.0);
        assert!(s.show_twilight);
        assert_eq!(s.location_name, "Mandalay");
        assert_eq!(s.dawn_formula(), DawnFormula::FixedOffset { minutes: 45.0 });

        let partial: Settings = serde_json::from_str(r#"{"latitude": 16.8}"#).unwrap();
        assert_eq!(partial.dawn_minutes, 40.0);
        assert!(!partial.has_location());

        let out = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(out["u_DawnMinus"], 40.0);
        assert_eq!(out["locationNAME"], "Name This PLace?");
    }
}
