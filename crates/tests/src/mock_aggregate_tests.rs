//! Status aggregation over the seeded collections

use pretty_assertions::assert_eq;
use shared_types::{
    mock, percent, total_hours, unread_total, DocumentStatus, IncidentStatus, MedicationStatus,
    StaffStatus, StatusCounts, TimesheetEntry, TimesheetStatus, TrainingStatus, Visit, VisitStatus,
};

#[test]
fn visit_counts_cover_every_seeded_visit() {
    let visits = mock::visits();
    let counts = StatusCounts::<VisitStatus>::tally(&visits);
    assert_eq!(counts.get(VisitStatus::Scheduled), 4);
    assert_eq!(counts.get(VisitStatus::InProgress), 1);
    assert_eq!(counts.get(VisitStatus::Completed), 2);
    assert_eq!(counts.get(VisitStatus::Cancelled), 1);
    assert_eq!(counts.total(), visits.len());
}

#[test]
fn counts_iterate_in_declared_order() {
    let counts = StatusCounts::<MedicationStatus>::tally(&mock::medications());
    let order: Vec<(MedicationStatus, usize)> = counts.iter().collect();
    assert_eq!(
        order,
        vec![
            (MedicationStatus::Due, 3),
            (MedicationStatus::Given, 1),
            (MedicationStatus::Missed, 1),
            (MedicationStatus::Refused, 1),
        ]
    );
}

#[test]
fn subset_tally_excludes_other_statuses_from_total() {
    let incidents = mock::incidents();
    let open = StatusCounts::count_by(
        &incidents,
        &[IncidentStatus::Open, IncidentStatus::Investigating],
        |i| i.status,
    );
    assert_eq!(open.total(), 2);
    assert_eq!(open.get(IncidentStatus::Resolved), 0);
}

#[test]
fn documents_needing_attention() {
    let counts = StatusCounts::<DocumentStatus>::tally(&mock::documents());
    let attention = counts.get(DocumentStatus::Expiring) + counts.get(DocumentStatus::Expired);
    assert_eq!(attention, 2);
    assert_eq!(counts.percent_of(DocumentStatus::Valid), 50.0);
}

#[test]
fn training_progress_per_worker() {
    let mine: Vec<_> = mock::training()
        .into_iter()
        .filter(|m| m.assignee == mock::CARE_WORKER_NAME)
        .collect();
    let counts = StatusCounts::<TrainingStatus>::tally(&mine);
    assert_eq!(counts.total(), 3);
    assert_eq!(percent(counts.get(TrainingStatus::Completed), counts.total()).round(), 33.0);
}

#[test]
fn staff_on_duty() {
    let counts = StatusCounts::<StaffStatus>::tally(&mock::staff());
    assert_eq!(counts.get(StaffStatus::Active), 3);
    assert_eq!(counts.get(StaffStatus::OnLeave), 1);
    assert_eq!(counts.get(StaffStatus::Inactive), 1);
}

#[test]
fn worker_hours_and_pending_review() {
    let mine: Vec<TimesheetEntry> = mock::timesheets()
        .into_iter()
        .filter(|t| t.worker_name == mock::CARE_WORKER_NAME)
        .collect();
    assert_eq!(total_hours(&mine), 18.3);

    let all = StatusCounts::<TimesheetStatus>::tally(&mock::timesheets());
    assert_eq!(all.get(TimesheetStatus::Pending), 2);
}

#[test]
fn unread_counts_per_reader() {
    let conversations = mock::conversations();
    assert_eq!(unread_total(&conversations, mock::CARE_WORKER_NAME), 2);
    assert_eq!(unread_total(&conversations, mock::SUPERVISOR_NAME), 1);
    assert_eq!(unread_total(&conversations, mock::FAMILY_NAME), 0);
}

#[test]
fn empty_collections_report_zero() {
    let none: Vec<Visit> = Vec::new();
    let counts = StatusCounts::<VisitStatus>::tally(&none);
    assert_eq!(counts.total(), 0);
    assert_eq!(counts.percent_of(VisitStatus::Completed), 0.0);
}
