use mmcal::astro::DayFlags;
use mmcal::config::Settings;
use mmcal::dawn::dawn_lines;
use mmcal::ephemeris::{moon_illumination, moon_times, GeoLocation};
use mmcal::fmt::{format_myanmar, format_western, DEFAULT_MYANMAR_FORMAT, DEFAULT_WESTERN_FORMAT};
use mmcal::holiday::{holidays, other_holidays};
use mmcal::uposatha::uposatha_month;
use mmcal::{local_utc_offset_hours, DomainError, JulianDate, Reckoning, WesternDateTime};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DomainError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tz = local_utc_offset_hours();
    let now = JulianDate::now();
    let today = now.local(tz).day_number();

    println!("{}", format_western(now, DEFAULT_WESTERN_FORMAT, tz, Reckoning::British));
    println!("{}", format_myanmar(now, DEFAULT_MYANMAR_FORMAT, tz));

    let flags = DayFlags::from_jdn(today);
    println!("{} {}", flags.date.year_name(), flags.weekday.name());
    if let Some(sabbath) = flags.sabbath {
        println!("  {sabbath}");
    }
    for day in &flags.astrological_days {
        println!("  {day}");
    }
    for name in holidays(today).into_iter().chain(other_holidays(today)) {
        println!("  * {name}");
    }

    let settings = Settings::at(16.8409, 96.1735, 0.0, "Yangon");
    for line in dawn_lines(now, &settings, tz)? {
        println!("{line}");
    }

    let location = GeoLocation::new(settings.latitude, settings.longitude, settings.altitude)?;
    let moon = moon_times(now, &location, tz);
    println!(
        "Moon {:.0}% lit, rise {:?}, set {:?}",
        moon_illumination(now).fraction * 100.0,
        moon.rise.map(|t| WesternDateTime::from_jd(t.local(tz), Reckoning::British)),
        moon.set.map(|t| WesternDateTime::from_jd(t.local(tz), Reckoning::British)),
    );

    let local = WesternDateTime::from_jd(now.local(tz), Reckoning::British);
    let month = uposatha_month(local.year, local.month, Reckoning::British);
    println!("Sasana year {}", month.sasana_year);
    for day in &month.days {
        println!("  {day}");
    }
    Ok(())
}
