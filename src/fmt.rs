// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Token-template rendering of Western and Myanmar dates.
//!
//! Templates are scanned once, left to right.  At each sigil (`%` for Western
//! fields, `&` for Myanmar fields) the longest matching token wins; anything
//! else is copied through.  Substituted text is never rescanned, so a
//! rendered month name cannot be mistaken for another token.
//!
//! | Western | Meaning                 | Myanmar | Meaning                  |
//! |---------|-------------------------|---------|--------------------------|
//! | `%yyyy` | year, 4 digits          | `&yyyy` | Myanmar year, 4 digits   |
//! | `%yy`   | year mod 100, 2 digits  | `&YYYY` | Sasana year, 4 digits    |
//! | `%y`    | year                    | `&y`    | Myanmar year             |
//! | `%MMM`  | `JAN`                   | `&mm`   | month code, 2 digits     |
//! | `%Mmm`  | `Jan`                   | `&M`    | month name               |
//! | `%mm`   | month, 2 digits         | `&m`    | month code               |
//! | `%M`    | `January`               | `&P`    | moon phase               |
//! | `%m`    | month                   | `&dd`   | day of month, 2 digits   |
//! | `%dd`   | day, 2 digits           | `&d`    | day of month             |
//! | `%d`    | day                     | `&ff`   | fortnight day, 2 digits  |
//! | `%HH`/`%H` | hour 0-23            | `&f`    | fortnight day            |
//! | `%hh`/`%h` | hour 1-12            |         |                          |
//! | `%AA`/`%aa` | `AM`/`am`           |         |                          |
//! | `%nn`/`%n` | minute               |         |                          |
//! | `%ss`/`%s` | second               |         |                          |
//! | `%lll`/`%l` | millisecond         |         |                          |
//! | `%WWW`/`%Www`/`%W` | weekday name |         |                          |
//! | `%w`    | weekday, Saturday = 0   |         |                          |
//! | `%zz`   | offset, `+08`, `+06:30` |         |                          |

use crate::myanmar::MyanmarDate;
use crate::western::{Reckoning, WesternDateTime, MONTH_NAMES};
use crate::JulianDate;

pub const DEFAULT_WESTERN_FORMAT: &str = "%Www %y-%mm-%dd %HH:%nn:%ss %zz";
pub const DEFAULT_MYANMAR_FORMAT: &str = "&y &M &P &ff";

// Longest first within each shared prefix.
const WESTERN_TOKENS: [&str; 27] = [
    "yyyy", "yy", "y", "MMM", "Mmm", "mm", "M", "m", "dd", "d", "HH", "H", "hh", "h", "AA", "aa",
    "nn", "n", "ss", "s", "lll", "l", "WWW", "Www", "W", "w", "zz",
];

const MYANMAR_TOKENS: [&str; 11] = [
    "yyyy", "YYYY", "y", "mm", "M", "m", "P", "dd", "d", "ff", "f",
];

/// Render `jd` as a Western date-time in the zone `tz_hours` east of UTC.
///
/// ```
/// use mmcal::fmt::{format_western, DEFAULT_WESTERN_FORMAT};
/// use mmcal::{JulianDate, Reckoning};
///
/// let jd = JulianDate::new(2_460_311.0); // 2024-01-01 12:00 UTC
/// let text = format_western(jd, DEFAULT_WESTERN_FORMAT, 6.5, Reckoning::British);
/// assert_eq!(text, "Mon 2024-01-01 18:30:00 +06:30");
/// ```
pub fn format_western(jd: JulianDate, pattern: &str, tz_hours: f64, reckoning: Reckoning) -> String {
    let local = jd.local(tz_hours);
    let dt = WesternDateTime::from_jd(local, reckoning);
    let weekday = local.weekday().name();
    let month = MONTH_NAMES[(dt.month as usize).clamp(1, 12) - 1];
    let hour12 = match dt.hour % 12 {
        0 => 12,
        h => h,
    };

    render(pattern, '%', &WESTERN_TOKENS, |token| match token {
        "yyyy" => last_digits(dt.year, 4),
        "yy" => last_digits(dt.year.rem_euclid(100), 2),
        "y" => dt.year.to_string(),
        "MMM" => month[..3].to_uppercase(),
        "Mmm" => month[..3].to_owned(),
        "mm" => format!("{:02}", dt.month),
        "M" => month.to_owned(),
        "m" => dt.month.to_string(),
        "dd" => format!("{:02}", dt.day),
        "d" => dt.day.to_string(),
        "HH" => format!("{:02}", dt.hour),
        "H" => dt.hour.to_string(),
        "hh" => format!("{hour12:02}"),
        "h" => hour12.to_string(),
        "AA" => if dt.hour < 12 { "AM" } else { "PM" }.to_owned(),
        "aa" => if dt.hour < 12 { "am" } else { "pm" }.to_owned(),
        "nn" => format!("{:02}", dt.minute),
        "n" => dt.minute.to_string(),
        "ss" => format!("{:02}", dt.whole_second()),
        "s" => dt.whole_second().to_string(),
        "lll" => format!("{:03}", dt.millisecond()),
        "l" => dt.millisecond().to_string(),
        "WWW" => weekday[..3].to_uppercase(),
        "Www" => weekday[..3].to_owned(),
        "W" => weekday.to_owned(),
        "w" => local.weekday().index().to_string(),
        "zz" => format_offset(tz_hours),
        _ => String::new(),
    })
}

/// Render the Myanmar date of the civil day containing `jd` in the zone
/// `tz_hours`.
pub fn format_myanmar(jd: JulianDate, pattern: &str, tz_hours: f64) -> String {
    let date = MyanmarDate::from_jd(jd.local(tz_hours));
    render(pattern, '&', &MYANMAR_TOKENS, |token| match token {
        "yyyy" => last_digits(date.year, 4),
        "YYYY" => last_digits(date.sasana_year(), 4),
        "y" => date.year.to_string(),
        "mm" => format!("{:02}", date.month),
        "M" => date.month_name(),
        "m" => date.month.to_string(),
        "P" => date.moon_phase().name().to_owned(),
        "dd" => format!("{:02}", date.day),
        "d" => date.day.to_string(),
        "ff" => format!("{:02}", date.fortnight_day()),
        "f" => date.fortnight_day().to_string(),
        _ => String::new(),
    })
}

/// `+HH` or `+HH:MM`; the sign is taken from the offset, digits from its
/// magnitude.
pub fn format_offset(tz_hours: f64) -> String {
    let sign = if tz_hours < 0.0 { '-' } else { '+' };
    let magnitude = tz_hours.abs();
    let hours = magnitude.floor();
    let fraction = magnitude - hours;
    let mut out = format!("{sign}{:02}", hours as i64 % 100);
    if fraction > 0.0 {
        let minutes = (fraction * 60.0 + 0.5).floor() as i64;
        out.push_str(&format!(":{:02}", minutes % 100));
    }
    out
}

/// Zero-padded to `width`, keeping only the trailing `width` characters.
fn last_digits(value: i64, width: usize) -> String {
    let padded = format!("{value:0width$}");
    padded[padded.len().saturating_sub(width)..].to_owned()
}

fn render<F>(pattern: &str, sigil: char, tokens: &[&str], mut value: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut rest = pattern;
    while let Some(pos) = rest.find(sigil) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + sigil.len_utf8()..];
        match tokens.iter().find(|t| after.starts_with(**t)) {
            Some(token) => {
                out.push_str(&value(token));
                rest = &after[token.len()..];
            }
            None => {
                out.push(sigil);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
