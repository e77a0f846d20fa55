//! Worked-hours computation as seen from timesheet submission

use pretty_assertions::assert_eq;
use shared_types::{worked_hours, AppErrorKind, TimesheetEntry, TimesheetStatus};

#[test]
fn standard_shifts() {
    assert_eq!(worked_hours("09:00", "17:00", 60).unwrap(), 7.0);
    assert_eq!(worked_hours("10:00", "14:30", 30).unwrap(), 4.0);
    assert_eq!(worked_hours("07:30", "15:30", 30).unwrap(), 7.5);
}

#[test]
fn no_break_full_shift() {
    assert_eq!(worked_hours("06:00", "18:00", 0).unwrap(), 12.0);
}

#[test]
fn break_equal_to_shift_is_zero_hours() {
    assert_eq!(worked_hours("09:00", "10:00", 60).unwrap(), 0.0);
}

#[test]
fn negative_results_are_validation_errors() {
    let err = worked_hours("09:00", "09:30", 31).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field("break_minutes").is_some());

    let err = worked_hours("17:00", "09:00", 0).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field("check_out").is_some());
}

#[test]
fn whitespace_around_times_is_tolerated() {
    assert_eq!(worked_hours(" 09:00", "17:00 ", 60).unwrap(), 7.0);
}

#[test]
fn submitted_entry_is_pending_with_computed_hours() {
    let entry =
        TimesheetEntry::submit("timesheet-6", "Sam Carter", "2025-03-14", "08:00", "16:00", 45)
            .unwrap();
    assert_eq!(entry.status, TimesheetStatus::Pending);
    assert_eq!(entry.total_hours, 7.3);
    assert_eq!(entry.break_minutes, 45);
}

#[test]
fn invalid_submission_builds_no_entry() {
    let result = TimesheetEntry::submit("timesheet-6", "Sam Carter", "2025-03-14", "late", "16:00", 0);
    let err = result.unwrap_err();
    assert_eq!(err.field("check_in").map(|m| m.contains("HH:MM")), Some(true));
}
