//! Day counting for urgency: calendar vs business days, timezone-aware "today".

use anyhow::Result;
use chrono::{Datelike, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

/// How "days until due" is counted when scoring urgency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayCount {
    /// Whole calendar days.
    #[default]
    Calendar,
    /// Weekdays only, skipping US federal holidays. Weekend due dates get an
    /// urgency boost in this mode.
    Business,
}

/// US federal holidays, 2025-2026, as (year, month, day).
const FEDERAL_HOLIDAYS: &[(i32, u32, u32)] = &[
    (2025, 1, 1),   // New Year's Day
    (2025, 1, 20),  // Martin Luther King Jr. Day
    (2025, 2, 17),  // Presidents' Day
    (2025, 5, 26),  // Memorial Day
    (2025, 7, 4),   // Independence Day
    (2025, 9, 1),   // Labor Day
    (2025, 10, 13), // Columbus Day
    (2025, 11, 11), // Veterans Day
    (2025, 11, 27), // Thanksgiving
    (2025, 12, 25), // Christmas
    (2026, 1, 1),
    (2026, 1, 19),
    (2026, 2, 16),
    (2026, 5, 25),
    (2026, 7, 4),
    (2026, 9, 7),
    (2026, 10, 12),
    (2026, 11, 11),
    (2026, 11, 26),
    (2026, 12, 25),
];

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_holiday(date: NaiveDate) -> bool {
    FEDERAL_HOLIDAYS.contains(&(date.year(), date.month(), date.day()))
}

/// Signed count of weekday, non-holiday days from `start` to `end`.
/// Antisymmetric: swapping the endpoints flips the sign.
pub fn business_days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    if start > end {
        return -business_days_between(end, start);
    }

    let mut days = 0;
    let mut current = start;
    while current < end {
        if !is_weekend(current) && !is_holiday(current) {
            days += 1;
        }
        current = current + chrono::Duration::days(1);
    }
    days
}

/// Days from `today` to `due` under the chosen counting mode. Negative when
/// the due date is in the past.
pub fn days_until(due: NaiveDate, today: NaiveDate, mode: DayCount) -> i64 {
    match mode {
        DayCount::Calendar => (due - today).num_days(),
        DayCount::Business => business_days_between(today, due),
    }
}

/// Resolve "today" in an IANA timezone like "America/Chicago".
///
/// Outermost-boundary helper only: the engine itself always takes the
/// reference date as a parameter so scoring stays deterministic.
pub fn today_in_tz(tz: &str) -> Result<NaiveDate> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;
    Ok(Utc::now().with_timezone(&tz).date_naive())
}
