use std::fmt::Write;

use chrono::{Datelike, NaiveDateTime};

use crate::models::{ClassRecord, UpcomingAssignment};
use crate::schedule::{self, DUE_FORMAT};

const DEFAULT_LOCATION: &str = "TBA";

pub fn relative_label(due: NaiveDateTime, now: NaiveDateTime) -> String {
    match schedule::days_until(due, now) {
        0 => "TODAY".to_string(),
        1 => "tomorrow".to_string(),
        days => format!("in {days} days"),
    }
}

pub fn format_classes(classes: &[&ClassRecord], now: NaiveDateTime) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Today's classes ({} {}):",
        schedule::weekday_abbrev(now.weekday()),
        now.date()
    );

    if classes.is_empty() {
        let _ = writeln!(output, "No classes today.");
        return output;
    }

    for class in classes.iter() {
        let start = class.start_time.as_deref().unwrap_or_default();
        let location = class.location.as_deref().unwrap_or(DEFAULT_LOCATION);
        let _ = match class.code.as_deref() {
            Some(code) => writeln!(
                output,
                "- {}-{} | {} {} @{}",
                start, class.end_time, code, class.name, location
            ),
            None => writeln!(
                output,
                "- {}-{} | {} @{}",
                start, class.end_time, class.name, location
            ),
        };
    }

    output
}

pub fn format_assignments(
    upcoming: &[UpcomingAssignment<'_>],
    now: NaiveDateTime,
    days_ahead: i64,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Assignments due in the next {days_ahead} days:");

    if upcoming.is_empty() {
        let _ = writeln!(output, "No pending assignments. Everything is completed!");
        return output;
    }

    for item in upcoming.iter() {
        let due = item.due.format(DUE_FORMAT);
        let relative = relative_label(item.due, now);
        let _ = match item.record.course.as_deref() {
            Some(course) => writeln!(
                output,
                "- [{}] {} -> {} ({})",
                course, item.record.title, due, relative
            ),
            None => writeln!(output, "- {} -> {} ({})", item.record.title, due, relative),
        };
    }

    output
}

pub fn build_report(
    classes: &[&ClassRecord],
    upcoming: &[UpcomingAssignment<'_>],
    now: NaiveDateTime,
    days_ahead: i64,
) -> String {
    let mut output = format_classes(classes, now);
    let _ = writeln!(output);
    output.push_str(&format_assignments(upcoming, now, days_ahead));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssignmentRecord;
    use chrono::NaiveDate;
    use serde_json::Value;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn algorithms() -> ClassRecord {
        ClassRecord {
            name: "Algorithms".to_string(),
            code: Some("CS201".to_string()),
            days: vec!["Mon".to_string()],
            start_time: Some("09:00".to_string()),
            end_time: "10:30".to_string(),
            location: None,
        }
    }

    #[test]
    fn relative_labels_use_calendar_days() {
        let now = at(2026, 10, 19, 23, 0);
        assert_eq!(relative_label(at(2026, 10, 19, 23, 59), now), "TODAY");
        assert_eq!(relative_label(at(2026, 10, 20, 0, 5), now), "tomorrow");
        assert_eq!(relative_label(at(2026, 10, 23, 9, 0), now), "in 4 days");
    }

    #[test]
    fn class_lines_default_location() {
        let class = algorithms();
        let mut elsewhere = algorithms();
        elsewhere.code = None;
        elsewhere.location = Some("Room 101".to_string());

        let text = format_classes(&[&class, &elsewhere], at(2026, 10, 19, 8, 0));
        assert_eq!(
            text,
            "Today's classes (Mon 2026-10-19):\n\
             - 09:00-10:30 | CS201 Algorithms @TBA\n\
             - 09:00-10:30 | Algorithms @Room 101\n"
        );
    }

    #[test]
    fn empty_classes_block() {
        let text = format_classes(&[], at(2026, 10, 20, 8, 0));
        assert!(text.starts_with("Today's classes (Tue 2026-10-20):"));
        assert!(text.ends_with("No classes today.\n"));
    }

    #[test]
    fn assignment_lines_carry_relative_label() {
        let essay = AssignmentRecord {
            title: "Essay".to_string(),
            course: Some("ENG101".to_string()),
            due: Some(Value::from("2026-10-19 23:59")),
            status: "pending".to_string(),
        };
        let quiz = AssignmentRecord {
            title: "Quiz".to_string(),
            course: None,
            due: Some(Value::from("2026-10-22 09:00")),
            status: "pending".to_string(),
        };
        let upcoming = vec![
            UpcomingAssignment {
                record: &essay,
                due: at(2026, 10, 19, 23, 59),
            },
            UpcomingAssignment {
                record: &quiz,
                due: at(2026, 10, 22, 9, 0),
            },
        ];

        let text = format_assignments(&upcoming, at(2026, 10, 19, 8, 0), 7);
        assert_eq!(
            text,
            "Assignments due in the next 7 days:\n\
             - [ENG101] Essay -> 2026-10-19 23:59 (TODAY)\n\
             - Quiz -> 2026-10-22 09:00 (in 3 days)\n"
        );
    }

    #[test]
    fn empty_assignments_block() {
        let text = format_assignments(&[], at(2026, 10, 19, 8, 0), 7);
        assert!(text.contains("Everything is completed!"));
    }

    #[test]
    fn report_puts_classes_before_assignments() {
        let class = algorithms();
        let text = build_report(&[&class], &[], at(2026, 10, 19, 8, 0), 7);
        let classes_at = text.find("Today's classes").unwrap();
        let assignments_at = text.find("Assignments due").unwrap();
        assert!(classes_at < assignments_at);
        assert!(text.contains("\n\nAssignments due"));
    }
}
