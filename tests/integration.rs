use mmcal::ephemeris::{moon_times, sun_times, GeoLocation};
use mmcal::holiday::{easter, holidays, other_holidays, Thingyan};
use mmcal::myanmar::{
    myanmar_to_jdn, year_descriptor, MoonPhase, MyanmarDate, YearType, MAX_SUPPORTED_YEAR,
    MIN_SUPPORTED_YEAR,
};
use mmcal::western::days_in_month;
use mmcal::{parse_datetime, JulianDate, Reckoning, Weekday, WesternDateTime};

const RECKONINGS: [Reckoning; 3] = [Reckoning::British, Reckoning::Gregorian, Reckoning::Julian];

#[test]
fn western_roundtrip_to_the_second() {
    for reckoning in RECKONINGS {
        for year in (1500..2200).step_by(7) {
            for month in 1..=12 {
                for day in [1, 9, 17, 28] {
                    if reckoning == Reckoning::British && year == 1752 && month == 9 && (3..=13).contains(&day) {
                        continue;
                    }
                    let wd = WesternDateTime::new(year, month, day, (day * 5) % 24, (day * 7) % 60, 37.0);
                    let back = WesternDateTime::from_jd(wd.to_jd(reckoning), reckoning);
                    assert_eq!(back, wd, "{reckoning:?} {year}-{month}-{day}");
                }
            }
        }
    }
}

#[test]
fn unix_epoch_fixed_point() {
    let jd = WesternDateTime::new(1970, 1, 1, 0, 0, 0.0).to_jd(Reckoning::Gregorian);
    assert_eq!(jd.value(), 2_440_587.5);
    assert_eq!(jd.to_unix_seconds(), 0.0);
    assert_eq!(JulianDate::from_unix_seconds(86_400.0).value(), 2_440_588.5);
}

#[test]
fn british_switchover() {
    let gregorian_start = WesternDateTime::date(1752, 9, 14).to_jd(Reckoning::British);
    assert_eq!(gregorian_start.value(), 2_361_222.0);
    let last_julian = WesternDateTime::date(1752, 9, 2).to_jd(Reckoning::British);
    assert_eq!(gregorian_start.value() - last_julian.value(), 1.0);

    for jdn in 2_361_150..2_361_300 {
        let wd = WesternDateTime::from_jd(JulianDate::new(jdn as f64), Reckoning::British);
        assert!(
            !(wd.year == 1752 && wd.month == 9 && (3..=13).contains(&wd.day)),
            "{jdn} maps into the dropped days"
        );
    }
    assert_eq!(days_in_month(1752, 9, Reckoning::British), 19);
    assert_eq!(days_in_month(1752, 9, Reckoning::Gregorian), 30);
}

#[test]
fn month_lengths() {
    assert_eq!(days_in_month(2024, 2, Reckoning::British), 29);
    assert_eq!(days_in_month(1900, 2, Reckoning::Gregorian), 28);
    assert_eq!(days_in_month(1900, 2, Reckoning::Julian), 29);
    assert_eq!(days_in_month(2023, 12, Reckoning::British), 31);
}

#[test]
fn weekday_repeats_weekly() {
    for jdn in 2_460_000..2_460_400 {
        let jd = JulianDate::new(jdn as f64 + 0.3);
        assert_eq!(jd.weekday(), (jd + qtty::Days::new(7.0)).weekday());
    }
    // 2024-01-01 was a Monday.
    assert_eq!(JulianDate::new(2_460_311.0).weekday(), Weekday::Monday);
}

#[test]
fn myanmar_roundtrip() {
    let start = year_descriptor(MIN_SUPPORTED_YEAR).first_day;
    let end = year_descriptor(MAX_SUPPORTED_YEAR + 1).first_day;
    for jdn in start..end {
        let date = MyanmarDate::from_jdn(jdn);
        assert_eq!(myanmar_to_jdn(date.year, date.month, date.day), jdn, "{date:?}");
        assert_eq!(MyanmarDate::from_jdn(date.to_jdn()), date);
    }
}

#[test]
fn year_type_fixes_year_length() {
    for year in MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR {
        let d = year_descriptor(year);
        let expected = match d.year_type {
            YearType::Common => 354,
            YearType::LittleWatat => 384,
            YearType::BigWatat => 385,
        };
        assert_eq!(d.length(), expected);
        assert_eq!(year_descriptor(year + 1).first_day - d.first_day, expected as i64);
    }
}

#[test]
fn moon_phase_cycle_within_each_month() {
    let start = year_descriptor(MIN_SUPPORTED_YEAR).first_day;
    let end = year_descriptor(MAX_SUPPORTED_YEAR + 1).first_day;
    let mut jdn = start;
    while jdn < end {
        let first = MyanmarDate::from_jdn(jdn);
        let length = first.month_length();
        let phases: Vec<MoonPhase> = (0..length)
            .map(|i| MyanmarDate::from_jdn(jdn + i as i64).moon_phase())
            .collect();
        assert_eq!(phases.iter().filter(|p| **p == MoonPhase::FullMoon).count(), 1);
        assert_eq!(phases.iter().filter(|p| **p == MoonPhase::NewMoon).count(), 1);
        assert_eq!(phases[0], MoonPhase::Waxing);
        assert_eq!(phases[14], MoonPhase::FullMoon);
        assert_eq!(phases[15], MoonPhase::Waning);
        assert_eq!(*phases.last().unwrap(), MoonPhase::NewMoon);
        jdn += length as i64;
    }
}

#[test]
fn year_boundary_before_a_late_new_year() {
    let date = MyanmarDate::from_jdn(1_960_013);
    assert_eq!((date.year, date.month, date.day), (15, 12, 30));
    assert_eq!(date.year_type, YearType::BigWatat);
    assert_eq!(date.to_jdn(), 1_960_013);
    assert!(MyanmarDate::try_from_jd(JulianDate::new(1_960_013.0)).is_ok());
}

#[test]
fn easter_2024_is_march_31() {
    let wd = WesternDateTime::from_jd(JulianDate::new(easter(2024) as f64), Reckoning::Gregorian);
    assert_eq!((wd.year, wd.month, wd.day), (2024, 3, 31));
}

#[test]
fn independence_day_2020() {
    let jdn = parse_datetime("2020-01-04", 0.0, Reckoning::British)
        .unwrap()
        .day_number();
    assert!(holidays(jdn).contains(&"Independence Day"));
}

#[test]
fn holidays_of_2024() {
    let expected: &[(i64, &[&str], &[&str])] = &[
        (2_460_311, &["New Year's Day"], &[]),
        (2_460_314, &["Independence Day"], &[]),
        (2_460_321, &["Karen New Year's Day"], &[]),
        (2_460_335, &[], &["Mothers' Day"]),
        (2_460_353, &["Union Day"], &[]),
        (2_460_354, &[], &["G. Aung San BD"]),
        (2_460_355, &[], &["Valentines Day"]),
        (2_460_366, &[], &["Mon National Day"]),
        (2_460_372, &["Peasants' Day"], &[]),
        (2_460_394, &["Tabaung Pwe"], &["Fathers' Day"]),
        (2_460_397, &["Resistance Day"], &[]),
        (2_460_399, &[], &["Good Friday"]),
        (2_460_401, &[], &["Easter"]),
        (2_460_402, &[], &["April Fools' Day"]),
        (2_460_414, &["Thingyan Akyo"], &[]),
        (2_460_415, &["Thingyan Akya"], &[]),
        (2_460_416, &["Thingyan Akyat"], &[]),
        (2_460_417, &["Thingyan Atat"], &[]),
        (2_460_418, &["Myanmar New Year's Day"], &[]),
        (2_460_423, &[], &["Earth Day"]),
        (2_460_432, &["Labour Day"], &[]),
        (2_460_439, &[], &["Red Cross Day"]),
        (2_460_453, &["Buddha Day"], &[]),
        (2_460_483, &[], &["Mahathamaya Day"]),
        (2_460_511, &["Martyrs' Day"], &[]),
        (2_460_512, &["Start of Buddhist Lent"], &[]),
        (2_460_537, &[], &["Taungpyone Pwe"]),
        (2_460_542, &[], &["Metta Day"]),
        (2_460_550, &[], &["Yadanagu Pwe"]),
        (2_460_571, &[], &["Garudhamma Day"]),
        (2_460_589, &[], &["World Teachers' Day"]),
        (2_460_600, &["Holiday"], &[]),
        (2_460_601, &["End of Buddhist Lent"], &[]),
        (2_460_602, &["Holiday"], &[]),
        (2_460_608, &[], &["United Nations Day"]),
        (2_460_615, &[], &["Halloween"]),
        (2_460_629, &["Holiday"], &[]),
        (2_460_630, &["Tazaungdaing"], &[]),
        (2_460_640, &["National Day"], &[]),
        (2_460_646, &[], &["Shan New Year's Day", "Authors' Day"]),
        (2_460_670, &["Christmas Day"], &[]),
        (2_460_675, &["Karen New Year's Day"], &[]),
        (2_460_676, &["Holiday"], &[]),
    ];

    for jdn in 2_460_311..=2_460_676 {
        let (public, other): (&[&str], &[&str]) = expected
            .iter()
            .find(|(day, _, _)| *day == jdn)
            .map(|(_, p, o)| (*p, *o))
            .unwrap_or((&[], &[]));
        assert_eq!(holidays(jdn), public, "public holidays of {jdn}");
        assert_eq!(other_holidays(jdn), other, "other holidays of {jdn}");
    }
}

#[test]
fn thingyan_2008_extended_holidays() {
    let t = Thingyan::of_year(1370);
    assert_eq!((t.akya_day, t.atat_day), (2_454_570, 2_454_573));
    let labels: Vec<Vec<&str>> = (2_454_568..=2_454_577).map(holidays).collect();
    assert_eq!(
        labels,
        vec![
            vec!["Holiday"],
            vec!["Thingyan Akyo"],
            vec!["Thingyan Akya"],
            vec!["Thingyan Akyat"],
            vec!["Thingyan Akyat"],
            vec!["Thingyan Atat"],
            vec!["Myanmar New Year's Day"],
            vec!["Holiday"],
            vec!["Holiday"],
            vec!["Holiday"],
        ]
    );
}

#[test]
fn sun_event_ordering_in_yangon() {
    let yangon = GeoLocation::new(16.8409, 96.1735, 0.0).unwrap();
    let jd = parse_datetime("20240615", 6.5, Reckoning::British).unwrap();
    let t = sun_times(jd, &yangon);
    let (rise, noon, set) = (t.sunrise().unwrap(), t.solar_noon().unwrap(), t.sunset().unwrap());
    assert!(rise < noon && noon < set);
    assert!(t.nautical_dawn().unwrap() < t.dawn().unwrap());
    assert!(t.dawn().unwrap() < rise);
}

#[test]
fn moon_reports_rise_set_or_flag() {
    let yangon = GeoLocation::new(16.8409, 96.1735, 0.0).unwrap();
    for day in 0..30 {
        let m = moon_times(JulianDate::new(2_460_311.0 + day as f64), &yangon, 6.5);
        let crossed = m.rise.is_some() || m.set.is_some();
        assert_eq!(crossed, !(m.always_up || m.always_down));
        assert!(!(m.always_up && m.always_down));
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_thingyan_period_uses_jd_field_names() {
    let period = Thingyan::of_year(1386).period();
    let json = serde_json::to_string(&period).unwrap();
    assert!(json.contains("start_jd"));
    assert!(json.contains("end_jd"));
}
