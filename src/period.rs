// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Spans between two instants.
//!
//! Festival spans such as [`Thingyan::period`](crate::holiday::Thingyan::period)
//! and the dawn window of a [`DawnReport`](crate::dawn::DawnReport) are
//! reported as `Period<JD>`.

use super::{Time, TimeInstant, TimeScale};
use chrono::{DateTime, Utc};
use qtty::Days;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Closed span `[start, end]` between two instants of the same kind.
///
/// ```
/// use mmcal::{Interval, JulianDate};
///
/// // Akya to Atat of an imaginary Thingyan.
/// let span = Interval::new(JulianDate::new(2_460_415.25), JulianDate::new(2_460_417.5));
/// assert_eq!(span.duration_days().value(), 2.25);
/// assert!(span.contains(JulianDate::new(2_460_416.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// Span on a day counter, e.g. `Period<JD>`.
pub type Period<S> = Interval<Time<S>>;

/// Span in chrono UTC date-times.
pub type UtcPeriod = Interval<DateTime<Utc>>;

impl<T: TimeInstant> Interval<T> {
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// `end - start` in the instant's own duration type.
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// Both endpoints included.
    pub fn contains(&self, instant: T) -> bool {
        instant >= self.start && instant <= self.end
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl<S: TimeScale> Interval<Time<S>> {
    /// Re-express both endpoints on the `T` counter.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Period<T> {
        Interval::new(self.start.to::<T>(), self.end.to::<T>())
    }

    /// `None` when an endpoint falls outside chrono's range.
    pub fn to_utc(&self) -> Option<UtcPeriod> {
        let start = self.start.to_utc()?;
        let end = self.end.to_utc()?;
        Some(Interval::new(start, end))
    }

    pub fn duration_days(&self) -> Days {
        self.duration()
    }
}

// Written as `{"start_jd": .., "end_jd": ..}`.
#[cfg(feature = "serde")]
impl Serialize for Interval<crate::JulianDate> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Period", 2)?;
        s.serialize_field("start_jd", &self.start.value())?;
        s.serialize_field("end_jd", &self.end.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Interval<crate::JulianDate> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Endpoints {
            start_jd: f64,
            end_jd: f64,
        }

        let Endpoints { start_jd, end_jd } = Endpoints::deserialize(deserializer)?;
        Ok(Interval::new(
            crate::JulianDate::new(start_jd),
            crate::JulianDate::new(end_jd),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JulianDate, UnixTime, JD};

    // 2024-01-01 00:00 UTC to 12:00 UTC.
    fn new_year_morning() -> Period<JD> {
        Period::new(JulianDate::new(2_460_310.5), JulianDate::new(2_460_311.0))
    }

    #[test]
    fn half_day_span() {
        assert_eq!(new_year_morning().duration_days(), Days::new(0.5));
    }

    #[test]
    fn endpoints_belong_to_the_span() {
        let span = new_year_morning();
        assert!(span.contains(span.start));
        assert!(span.contains(span.end));
        assert!(!span.contains(JulianDate::new(2_460_311.25)));
        assert!(!span.contains(JulianDate::new(2_460_310.0)));
    }

    #[test]
    fn unix_counter_view() {
        let unix = new_year_morning().to::<UnixTime>();
        assert!((unix.start.value() - 19_723.0).abs() < 1e-9);
        assert!((unix.duration_days().value() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn chrono_view() {
        let utc = new_year_morning().to_utc().unwrap();
        assert_eq!(utc.start.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(utc.duration().num_hours(), 12);
        assert!(utc.contains(DateTime::from_timestamp(1_704_085_200, 0).unwrap()));
    }

    #[test]
    fn non_finite_endpoint_has_no_chrono_view() {
        let span = Period::new(JulianDate::new(2_460_310.5), JulianDate::new(f64::NAN));
        assert!(span.to_utc().is_none());
    }

    #[test]
    fn display_names_both_endpoints() {
        let text = new_year_morning().to_string();
        assert!(text.starts_with("JD 2460310.5"));
        assert!(text.contains(" to JD 2460311"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn jd_field_names() {
        let span = new_year_morning();
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, r#"{"start_jd":2460310.5,"end_jd":2460311.0}"#);
        let back: Period<JD> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, span);
    }
}
