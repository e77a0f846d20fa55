use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::collection::Record;
use crate::error::AppError;
use crate::stats::{HasStatus, Status};

/// Time-of-day format used by every check-in and check-out field.
pub const TIME_FORMAT: &str = "%H:%M";

/// A care worker's hours for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    pub id: String,
    pub worker_name: String,
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub break_minutes: u32,
    pub total_hours: f64,
    pub status: TimesheetStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimesheetStatus {
    Pending,
    Approved,
    Rejected,
}

impl Status for TimesheetStatus {
    const ALL: &'static [Self] = &[
        TimesheetStatus::Pending,
        TimesheetStatus::Approved,
        TimesheetStatus::Rejected,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            TimesheetStatus::Pending => "pending",
            TimesheetStatus::Approved => "approved",
            TimesheetStatus::Rejected => "rejected",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TimesheetStatus::Pending => "Pending",
            TimesheetStatus::Approved => "Approved",
            TimesheetStatus::Rejected => "Rejected",
        }
    }
}

impl HasStatus for TimesheetEntry {
    type Status = TimesheetStatus;

    fn status(&self) -> TimesheetStatus {
        self.status
    }
}

impl Record for TimesheetEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

impl TimesheetEntry {
    /// Build a pending entry, computing `total_hours` from the shift times.
    pub fn submit(
        id: impl Into<String>,
        worker_name: impl Into<String>,
        date: impl Into<String>,
        check_in: &str,
        check_out: &str,
        break_minutes: u32,
    ) -> Result<Self, AppError> {
        let total_hours = worked_hours(check_in, check_out, break_minutes)?;
        Ok(Self {
            id: id.into(),
            worker_name: worker_name.into(),
            date: date.into(),
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            break_minutes,
            total_hours,
            status: TimesheetStatus::Pending,
        })
    }
}

fn parse_time(field: &str, value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| AppError::invalid_field(field, format!("Enter a time as HH:MM, got \"{value}\"")))
}

/// Hours worked on a same-day shift, less the break, to one decimal place.
///
/// A check-out before check-in is rejected rather than wrapped past
/// midnight; so is a break longer than the shift.
pub fn worked_hours(check_in: &str, check_out: &str, break_minutes: u32) -> Result<f64, AppError> {
    let start = parse_time("check_in", check_in)?;
    let end = parse_time("check_out", check_out)?;

    if end < start {
        return Err(AppError::invalid_field(
            "check_out",
            "Check-out must be later than check-in on the same day",
        ));
    }

    let shift_minutes = (end - start).num_minutes();
    let worked_minutes = shift_minutes - i64::from(break_minutes);
    if worked_minutes < 0 {
        return Err(AppError::invalid_field(
            "break_minutes",
            "Break is longer than the shift",
        ));
    }

    let hours = worked_minutes as f64 / 60.0;
    Ok((hours * 10.0).round() / 10.0)
}

/// Sum of `total_hours` across entries, to one decimal place.
pub fn total_hours(entries: &[TimesheetEntry]) -> f64 {
    let sum: f64 = entries.iter().map(|e| e.total_hours).sum();
    (sum * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;

    #[test]
    fn full_day_with_hour_break() {
        assert_eq!(worked_hours("09:00", "17:00", 60).unwrap(), 7.0);
    }

    #[test]
    fn half_hour_shift_boundaries() {
        assert_eq!(worked_hours("10:00", "14:30", 30).unwrap(), 4.0);
    }

    #[test]
    fn rounds_to_one_decimal() {
        // 7h50m = 7.8333...
        assert_eq!(worked_hours("08:05", "15:55", 0).unwrap(), 7.8);
        // 20 minutes = 0.333...
        assert_eq!(worked_hours("12:00", "12:20", 0).unwrap(), 0.3);
    }

    #[test]
    fn zero_length_shift_is_zero() {
        assert_eq!(worked_hours("09:00", "09:00", 0).unwrap(), 0.0);
    }

    #[test]
    fn overnight_shift_is_rejected() {
        let err = worked_hours("22:00", "06:00", 0).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field("check_out").is_some());
    }

    #[test]
    fn break_longer_than_shift_is_rejected() {
        let err = worked_hours("09:00", "09:30", 45).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field("break_minutes").is_some());
    }

    #[test]
    fn malformed_time_names_the_field() {
        let err = worked_hours("9am", "17:00", 0).unwrap_err();
        assert!(err.field("check_in").is_some());
        let err = worked_hours("09:00", "25:00", 0).unwrap_err();
        assert!(err.field("check_out").is_some());
    }

    #[test]
    fn submit_computes_hours_and_starts_pending() {
        let entry =
            TimesheetEntry::submit("timesheet-9", "Sam Carter", "2025-03-14", "09:00", "17:00", 60)
                .unwrap();
        assert_eq!(entry.total_hours, 7.0);
        assert_eq!(entry.status, TimesheetStatus::Pending);
    }

    #[test]
    fn total_hours_sums_entries() {
        let a = TimesheetEntry::submit("t-1", "Sam", "2025-03-14", "09:00", "17:00", 60).unwrap();
        let b = TimesheetEntry::submit("t-2", "Sam", "2025-03-15", "10:00", "14:30", 30).unwrap();
        assert_eq!(total_hours(&[a, b]), 11.0);
        assert_eq!(total_hours(&[]), 0.0);
    }
}
