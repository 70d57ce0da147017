//! Thai poster date: `"ประจำวันที่ 15 มิถุนายน 2567"`.
//!
//! The locale is always passed in explicitly; nothing here touches process-wide
//! locale state. Callers resolve a [`Locale`] from an ordered candidate list with
//! [`resolve_locale`] and get a deterministic unlocalized fallback when none matches.

use chrono::{DateTime, Datelike, Locale, TimeZone};
use std::fmt::Display;

/// Offset between the Gregorian and the Buddhist-era calendar year.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Locale identifiers tried in order when formatting the poster date.
pub const THAI_LOCALE_CANDIDATES: &[&str] = &["th_TH.UTF-8", "th_TH"];

/// Leading words printed before the day ("as of date").
pub const DATE_PREFIX: &str = "ประจำวันที่";

/// Gregorian year converted to the Buddhist era.
pub fn buddhist_year(year: i32) -> i32 {
    year + BUDDHIST_ERA_OFFSET
}

/// First candidate that names a known locale. A `.codeset` suffix such as
/// `.UTF-8` is ignored, since the month tables are always UTF-8.
pub fn resolve_locale(candidates: &[&str]) -> Option<Locale> {
    candidates.iter().find_map(|c| {
        let name = c.split_once('.').map_or(*c, |(name, _)| name);
        match Locale::try_from(name) {
            Ok(locale) => Some(locale),
            Err(_) => {
                log::debug!("locale candidate {c:?} is not available");
                None
            }
        }
    })
}

/// Format the poster date for `now`.
///
/// With `Some(locale)` the month name is localized; with `None` the English
/// month name is used. The year is always Buddhist-era.
pub fn format_poster_date<Tz>(now: &DateTime<Tz>, locale: Option<Locale>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let day_month = match locale {
        Some(l) => now.format_localized("%d %B", l).to_string(),
        None => now.format("%d %B").to_string(),
    };
    format!("{DATE_PREFIX} {day_month} {}", buddhist_year(now.year()))
}

/// Gregorian `YYYY-MM-DD` stamp used in the default output file name.
pub fn file_stamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format("%Y-%m-%d").to_string()
}
