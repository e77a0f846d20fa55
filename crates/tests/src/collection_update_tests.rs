//! Whole-collection replacement over seeded records

use pretty_assertions::assert_eq;
use shared_types::{
    appended, mock, next_id, replace_by_id, AppErrorKind, IncidentStatus, VisitStatus,
};

#[test]
fn replacing_a_visit_leaves_the_seed_untouched() {
    let seed = mock::visits();
    let next = replace_by_id(&seed, "visit-3", |v| v.status = VisitStatus::InProgress).unwrap();
    assert_eq!(seed[2].status, VisitStatus::Scheduled);
    assert_eq!(next[2].status, VisitStatus::InProgress);
    assert_eq!(next.len(), seed.len());
}

#[test]
fn unknown_id_is_not_found() {
    let err = replace_by_id(&mock::incidents(), "incident-99", |i| {
        i.status = IncidentStatus::Resolved
    })
    .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn next_ids_follow_seeded_sequences() {
    assert_eq!(next_id(&mock::notes(), "note"), "note-4");
    assert_eq!(next_id(&mock::timesheets(), "timesheet"), "timesheet-6");
    assert_eq!(next_id(&mock::feedback(), "feedback"), "feedback-2");
}

#[test]
fn appended_note_lands_last() {
    let seed = mock::notes();
    let mut note = seed[0].clone();
    note.id = next_id(&seed, "note");
    let next = appended(&seed, note);
    assert_eq!(next.len(), seed.len() + 1);
    assert_eq!(next.last().map(|n| n.id.as_str()), Some("note-4"));
}
