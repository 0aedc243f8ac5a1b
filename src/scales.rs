// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a day counter and encodes how values in
//! that counter relate to the continuous day number (CDN).
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Continuous day number, noon referenced | 0.0 |
//! | [`UnixTime`] | Days since 1970-01-01T00:00:00Z | 2 440 587.5 |

use super::instant::{TimeScale, UNIX_EPOCH_JD};
use qtty::Days;

/// Continuous day number: the identity scale.
///
/// `to_jd(v) = v`, i.e. the quantity *is* the day number.  The integer value
/// falls on noon UTC of the corresponding civil day.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "JD";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Unix Time: seconds since 1970-01-01T00:00:00 UTC, stored as **days**.
///
/// Leap seconds are ignored, as POSIX does.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnixTime;

const UNIX_EPOCH: Days = Days::new(UNIX_EPOCH_JD);

impl TimeScale for UnixTime {
    const LABEL: &'static str = "Unix";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + UNIX_EPOCH
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - UNIX_EPOCH
    }
}

impl From<super::instant::Time<JD>> for super::instant::Time<UnixTime> {
    #[inline]
    fn from(t: super::instant::Time<JD>) -> Self {
        t.to::<UnixTime>()
    }
}

impl From<super::instant::Time<UnixTime>> for super::instant::Time<JD> {
    #[inline]
    fn from(t: super::instant::Time<UnixTime>) -> Self {
        t.to::<JD>()
    }
}

#[cfg(test)]
mod tests {
    use super::super::instant::Time;
    use super::*;

    #[test]
    fn unix_zero_is_midnight_before_jd_2440588() {
        let jd = Time::<UnixTime>::new(0.0).to::<JD>();
        assert_eq!(jd.value(), 2_440_587.5);
    }

    #[test]
    fn conversions_through_from() {
        // 2024-04-17 12:00 UTC
        let new_year: Time<JD> = Time::new(2_460_418.0);
        let unix: Time<UnixTime> = new_year.into();
        assert!((unix.value() - 19_830.5).abs() < 1e-9);
        let back = Time::<JD>::from(unix);
        assert!((back.value() - new_year.value()).abs() < 1e-9);
    }
}
