use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Weekday};
use serde_json::Value;

use crate::error::{ReminderError, Result};
use crate::models::{AssignmentRecord, ClassRecord, UpcomingAssignment};

pub const TIME_FORMAT: &str = "%H:%M";
pub const DUE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// English three-letter abbreviation, independent of the process locale.
pub fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).ok()
}

pub fn parse_due(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), DUE_FORMAT).ok()
}

/// Calendar-day difference between `due` and `now`, ignoring time of day.
pub fn days_until(due: NaiveDateTime, now: NaiveDateTime) -> i64 {
    (due.date() - now.date()).num_days()
}

pub fn filter_today(classes: &[ClassRecord], now: NaiveDateTime) -> Result<Vec<&ClassRecord>> {
    let today = weekday_abbrev(now.weekday());

    let mut keyed = Vec::new();
    for class in classes.iter() {
        if !class.days.iter().any(|day| day == today) {
            continue;
        }

        let start = class
            .start_time
            .as_deref()
            .and_then(parse_time)
            .ok_or_else(|| ReminderError::TimeFormat {
                class: class.name.clone(),
                value: class.start_time.clone(),
            })?;
        keyed.push((start, class));
    }

    keyed.sort_by_key(|(start, _)| *start);
    Ok(keyed.into_iter().map(|(_, class)| class).collect())
}

pub fn filter_upcoming(
    assignments: &[AssignmentRecord],
    now: NaiveDateTime,
    days_ahead: i64,
) -> Vec<UpcomingAssignment<'_>> {
    // A window past the representable range covers every future date.
    let limit = Duration::try_days(days_ahead.max(0))
        .and_then(|window| now.checked_add_signed(window))
        .unwrap_or(NaiveDateTime::MAX);

    let mut upcoming = Vec::new();
    for record in assignments.iter() {
        if !record.is_pending() {
            continue;
        }

        let Some(raw_due) = record.due.as_ref() else {
            continue;
        };

        let Some(due) = raw_due.as_str().and_then(parse_due) else {
            let value = match raw_due {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            let err = ReminderError::BadDueDate {
                title: record.title.clone(),
                value,
            };
            tracing::warn!("{err}");
            continue;
        };

        if due >= now && due <= limit {
            upcoming.push(UpcomingAssignment { record, due });
        }
    }

    upcoming.sort_by_key(|item| item.due);
    upcoming
}
