//! Human-readable relative timestamps ("3 hours ago").
//!
//! Thresholds and rounding follow the dayjs `relativeTime` plugin so times
//! read the same as on the other pages of the site. Each step is tried in
//! order; the first whose rounded value fits its limit wins, and a value of
//! one falls back to the singular phrase of the previous step.

#[cfg(test)]
#[path = "relative_time_test.rs"]
mod relative_time_test;

use time::OffsetDateTime;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const MONTH: f64 = DAY * 365.25 / 12.0;
const YEAR: f64 = 12.0 * MONTH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phrase {
    Seconds,
    Minute,
    Minutes,
    Hour,
    Hours,
    Day,
    Days,
    Month,
    Months,
    Year,
    Years,
}

impl Phrase {
    fn render(self, n: u64) -> String {
        match self {
            Self::Seconds => "a few seconds".to_owned(),
            Self::Minute => "a minute".to_owned(),
            Self::Minutes => format!("{n} minutes"),
            Self::Hour => "an hour".to_owned(),
            Self::Hours => format!("{n} hours"),
            Self::Day => "a day".to_owned(),
            Self::Days => format!("{n} days"),
            Self::Month => "a month".to_owned(),
            Self::Months => format!("{n} months"),
            Self::Year => "a year".to_owned(),
            Self::Years => format!("{n} years"),
        }
    }
}

struct Step {
    phrase: Phrase,
    /// Largest rounded value this step accepts; `None` accepts everything.
    limit: Option<u64>,
    /// Seconds per unit. Steps without a unit reuse the previous step's value.
    unit: Option<f64>,
}

const STEPS: [Step; 11] = [
    Step { phrase: Phrase::Seconds, limit: Some(44), unit: Some(1.0) },
    Step { phrase: Phrase::Minute, limit: Some(89), unit: None },
    Step { phrase: Phrase::Minutes, limit: Some(44), unit: Some(MINUTE) },
    Step { phrase: Phrase::Hour, limit: Some(89), unit: None },
    Step { phrase: Phrase::Hours, limit: Some(21), unit: Some(HOUR) },
    Step { phrase: Phrase::Day, limit: Some(35), unit: None },
    Step { phrase: Phrase::Days, limit: Some(25), unit: Some(DAY) },
    Step { phrase: Phrase::Month, limit: Some(45), unit: None },
    Step { phrase: Phrase::Months, limit: Some(10), unit: Some(MONTH) },
    Step { phrase: Phrase::Year, limit: Some(17), unit: None },
    Step { phrase: Phrase::Years, limit: None, unit: Some(YEAR) },
];

/// Describe `then` relative to `now`: "5 minutes ago", "in a day".
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn from_now(then: OffsetDateTime, now: OffsetDateTime) -> String {
    let elapsed = (now - then).as_seconds_f64();

    let mut value = elapsed;
    let mut rounded = 0;
    let mut chosen = STEPS.len() - 1;
    for (i, step) in STEPS.iter().enumerate() {
        if let Some(unit) = step.unit {
            value = elapsed / unit;
        }
        rounded = value.abs().round() as u64;
        if step.limit.is_none_or(|limit| rounded <= limit) {
            chosen = if rounded <= 1 && i > 0 { i - 1 } else { i };
            break;
        }
    }

    let phrase = STEPS[chosen].phrase.render(rounded);
    if elapsed < 0.0 { format!("in {phrase}") } else { format!("{phrase} ago") }
}

/// Current wall-clock time, read at render.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}
