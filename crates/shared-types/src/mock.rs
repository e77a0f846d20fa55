//! Seed collections standing in for a backend.
//!
//! Each function returns a fresh copy; the app seeds its stores once at
//! startup and replaces whole collections from then on.

use crate::care_log::{CareLog, CareLogStatus};
use crate::document::{Document, DocumentStatus};
use crate::feedback::{Feedback, FeedbackStatus};
use crate::incident::{Incident, IncidentStatus, Severity};
use crate::medication::{MedicationSchedule, MedicationStatus};
use crate::message::{Conversation, Message};
use crate::note::{Note, NoteStatus};
use crate::profile::ClientProfile;
use crate::session::{Role, Session};
use crate::staff::{StaffMember, StaffStatus};
use crate::timesheet::{TimesheetEntry, TimesheetStatus};
use crate::training::{TrainingModule, TrainingStatus};
use crate::visit::{Visit, VisitStatus};

/// The date every "today" view is anchored to.
pub const TODAY: &str = "2025-03-14";

pub const ADMIN_NAME: &str = "Alex Morgan";
pub const SUPERVISOR_NAME: &str = "Priya Shah";
pub const CARE_WORKER_NAME: &str = "Sam Carter";
pub const SECOND_WORKER_NAME: &str = "Jordan Blake";
pub const CLIENT_NAME: &str = "Margaret Lewis";
pub const FAMILY_NAME: &str = "Daniel Lewis";

/// One sign-in per role.
pub fn demo_accounts() -> Vec<Session> {
    vec![
        Session::new("user-1", ADMIN_NAME, "alex.morgan@carelink.test", Role::Admin),
        Session::new("user-2", SUPERVISOR_NAME, "priya.shah@carelink.test", Role::Supervisor),
        Session::new("user-3", CARE_WORKER_NAME, "sam.carter@carelink.test", Role::CareWorker),
        Session::new("user-4", CLIENT_NAME, "margaret.lewis@carelink.test", Role::Client),
        Session::new("user-5", FAMILY_NAME, "daniel.lewis@carelink.test", Role::Family),
    ]
}

/// The demo account for `role`, if one exists.
pub fn demo_account(role: Role) -> Option<Session> {
    demo_accounts().into_iter().find(|s| s.role() == role)
}

#[allow(clippy::too_many_arguments)]
fn visit(
    id: &str,
    client: &str,
    worker: &str,
    date: &str,
    (start, end): (&str, &str),
    service: &str,
    address: &str,
    status: VisitStatus,
) -> Visit {
    Visit {
        id: id.into(),
        client_name: client.into(),
        worker_name: worker.into(),
        date: date.into(),
        start_time: start.into(),
        end_time: end.into(),
        service: service.into(),
        address: address.into(),
        status,
        notes: None,
    }
}

pub fn visits() -> Vec<Visit> {
    let mut seeded = vec![
        visit("visit-1", CLIENT_NAME, CARE_WORKER_NAME, TODAY, ("08:00", "09:00"), "Morning routine", "12 Elm Road", VisitStatus::Completed),
        visit("visit-2", "Harold Finch", CARE_WORKER_NAME, TODAY, ("10:00", "11:00"), "Medication support", "4 Mill Lane", VisitStatus::InProgress),
        visit("visit-3", "Edith Clarke", CARE_WORKER_NAME, TODAY, ("13:30", "14:30"), "Lunch preparation", "27 Station Street", VisitStatus::Scheduled),
        visit("visit-4", CLIENT_NAME, CARE_WORKER_NAME, TODAY, ("18:00", "18:45"), "Evening routine", "12 Elm Road", VisitStatus::Scheduled),
        visit("visit-5", "Harold Finch", SECOND_WORKER_NAME, TODAY, ("16:00", "17:00"), "Shopping", "4 Mill Lane", VisitStatus::Scheduled),
        visit("visit-6", "Edith Clarke", SECOND_WORKER_NAME, "2025-03-13", ("09:00", "10:00"), "Personal care", "27 Station Street", VisitStatus::Cancelled),
        visit("visit-7", CLIENT_NAME, SECOND_WORKER_NAME, "2025-03-15", ("08:00", "09:00"), "Morning routine", "12 Elm Road", VisitStatus::Scheduled),
        visit("visit-8", "Harold Finch", CARE_WORKER_NAME, "2025-03-13", ("10:00", "11:00"), "Medication support", "4 Mill Lane", VisitStatus::Completed),
    ];
    seeded[0].notes = Some("Enjoyed breakfast, walked to the garden.".into());
    seeded[5].notes = Some("Client in hospital for tests.".into());
    seeded
}

pub fn care_logs() -> Vec<CareLog> {
    vec![
        CareLog {
            id: "care-log-1".into(),
            client_name: CLIENT_NAME.into(),
            worker_name: CARE_WORKER_NAME.into(),
            date: TODAY.into(),
            summary: "Assisted with washing and dressing. Breakfast eaten.".into(),
            mood: Some("Cheerful".into()),
            status: CareLogStatus::Submitted,
        },
        CareLog {
            id: "care-log-2".into(),
            client_name: "Harold Finch".into(),
            worker_name: CARE_WORKER_NAME.into(),
            date: "2025-03-13".into(),
            summary: "Prompted medication, light housework.".into(),
            mood: None,
            status: CareLogStatus::Reviewed,
        },
        CareLog {
            id: "care-log-3".into(),
            client_name: "Edith Clarke".into(),
            worker_name: SECOND_WORKER_NAME.into(),
            date: "2025-03-12".into(),
            summary: "Visit shortened at client's request.".into(),
            mood: Some("Tired".into()),
            status: CareLogStatus::Draft,
        },
    ]
}

pub fn incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: "incident-1".into(),
            client_name: "Harold Finch".into(),
            reported_by: CARE_WORKER_NAME.into(),
            date: "2025-03-12".into(),
            category: "Fall".into(),
            severity: Severity::Medium,
            description: "Found sitting on kitchen floor, no visible injury.".into(),
            status: IncidentStatus::Investigating,
        },
        Incident {
            id: "incident-2".into(),
            client_name: "Edith Clarke".into(),
            reported_by: SECOND_WORKER_NAME.into(),
            date: TODAY.into(),
            category: "Medication".into(),
            severity: Severity::High,
            description: "Evening dose found unopened in blister pack.".into(),
            status: IncidentStatus::Open,
        },
        Incident {
            id: "incident-3".into(),
            client_name: CLIENT_NAME.into(),
            reported_by: CARE_WORKER_NAME.into(),
            date: "2025-03-02".into(),
            category: "Property".into(),
            severity: Severity::Low,
            description: "Broken key safe reported to family.".into(),
            status: IncidentStatus::Resolved,
        },
    ]
}

fn dose(
    id: &str,
    client: &str,
    medication: &str,
    dosage: &str,
    time: &str,
    status: MedicationStatus,
) -> MedicationSchedule {
    MedicationSchedule {
        id: id.into(),
        client_name: client.into(),
        medication: medication.into(),
        dosage: dosage.into(),
        time: time.into(),
        instructions: None,
        status,
        administered_by: None,
    }
}

pub fn medications() -> Vec<MedicationSchedule> {
    let mut seeded = vec![
        dose("medication-1", CLIENT_NAME, "Amlodipine", "5 mg", "08:00", MedicationStatus::Given),
        dose("medication-2", CLIENT_NAME, "Metformin", "500 mg", "12:30", MedicationStatus::Due),
        dose("medication-3", CLIENT_NAME, "Simvastatin", "20 mg", "20:00", MedicationStatus::Due),
        dose("medication-4", "Harold Finch", "Donepezil", "10 mg", "10:00", MedicationStatus::Missed),
        dose("medication-5", "Harold Finch", "Paracetamol", "1 g", "14:00", MedicationStatus::Due),
        dose("medication-6", "Edith Clarke", "Levothyroxine", "50 mcg", "07:30", MedicationStatus::Refused),
    ];
    seeded[0].administered_by = Some(CARE_WORKER_NAME.into());
    seeded[1].instructions = Some("Take with food.".into());
    seeded[3].administered_by = Some(CARE_WORKER_NAME.into());
    seeded[5].administered_by = Some(SECOND_WORKER_NAME.into());
    seeded
}

fn shift(
    id: &str,
    worker: &str,
    date: &str,
    (check_in, check_out): (&str, &str),
    break_minutes: u32,
    total_hours: f64,
    status: TimesheetStatus,
) -> TimesheetEntry {
    TimesheetEntry {
        id: id.into(),
        worker_name: worker.into(),
        date: date.into(),
        check_in: check_in.into(),
        check_out: check_out.into(),
        break_minutes,
        total_hours,
        status,
    }
}

pub fn timesheets() -> Vec<TimesheetEntry> {
    vec![
        shift("timesheet-1", CARE_WORKER_NAME, "2025-03-10", ("09:00", "17:00"), 60, 7.0, TimesheetStatus::Approved),
        shift("timesheet-2", CARE_WORKER_NAME, "2025-03-11", ("10:00", "14:30"), 30, 4.0, TimesheetStatus::Approved),
        shift("timesheet-3", CARE_WORKER_NAME, "2025-03-12", ("08:00", "16:00"), 45, 7.3, TimesheetStatus::Pending),
        shift("timesheet-4", SECOND_WORKER_NAME, "2025-03-12", ("07:30", "15:30"), 30, 7.5, TimesheetStatus::Pending),
        shift("timesheet-5", SECOND_WORKER_NAME, "2025-03-11", ("12:00", "20:00"), 60, 7.0, TimesheetStatus::Rejected),
    ]
}

pub fn documents() -> Vec<Document> {
    vec![
        Document {
            id: "document-1".into(),
            title: "DBS Certificate".into(),
            owner_name: CARE_WORKER_NAME.into(),
            category: "Compliance".into(),
            uploaded_on: "2024-04-02".into(),
            expires_on: Some("2027-04-02".into()),
            status: DocumentStatus::Valid,
        },
        Document {
            id: "document-2".into(),
            title: "Driving Licence".into(),
            owner_name: CARE_WORKER_NAME.into(),
            category: "Identity".into(),
            uploaded_on: "2022-09-18".into(),
            expires_on: Some("2025-04-01".into()),
            status: DocumentStatus::Expiring,
        },
        Document {
            id: "document-3".into(),
            title: "Manual Handling Certificate".into(),
            owner_name: SECOND_WORKER_NAME.into(),
            category: "Training".into(),
            uploaded_on: "2023-02-11".into(),
            expires_on: Some("2025-02-11".into()),
            status: DocumentStatus::Expired,
        },
        Document {
            id: "document-4".into(),
            title: "Employment Contract".into(),
            owner_name: SECOND_WORKER_NAME.into(),
            category: "HR".into(),
            uploaded_on: "2023-01-05".into(),
            expires_on: None,
            status: DocumentStatus::Valid,
        },
    ]
}

pub fn notes() -> Vec<Note> {
    vec![
        Note {
            id: "note-1".into(),
            client_name: CLIENT_NAME.into(),
            author: CARE_WORKER_NAME.into(),
            created_on: "2025-03-13".into(),
            body: "Running low on incontinence pads, family informed.".into(),
            status: NoteStatus::FollowUp,
        },
        Note {
            id: "note-2".into(),
            client_name: "Harold Finch".into(),
            author: CARE_WORKER_NAME.into(),
            created_on: "2025-03-12".into(),
            body: "Prefers tea before medication.".into(),
            status: NoteStatus::Open,
        },
        Note {
            id: "note-3".into(),
            client_name: "Edith Clarke".into(),
            author: CARE_WORKER_NAME.into(),
            created_on: "2025-02-28".into(),
            body: "Hearing aid battery replaced.".into(),
            status: NoteStatus::Archived,
        },
    ]
}

fn course(id: &str, title: &str, assignee: &str, due_on: &str, minutes: u32, status: TrainingStatus) -> TrainingModule {
    TrainingModule {
        id: id.into(),
        title: title.into(),
        assignee: assignee.into(),
        due_on: due_on.into(),
        duration_minutes: minutes,
        status,
    }
}

pub fn training() -> Vec<TrainingModule> {
    vec![
        course("training-1", "Safeguarding Adults", CARE_WORKER_NAME, "2025-03-31", 90, TrainingStatus::InProgress),
        course("training-2", "Infection Control", CARE_WORKER_NAME, "2025-02-28", 45, TrainingStatus::Completed),
        course("training-3", "Medication Awareness", CARE_WORKER_NAME, "2025-04-15", 120, TrainingStatus::NotStarted),
        course("training-4", "Moving and Handling", SECOND_WORKER_NAME, "2025-03-20", 60, TrainingStatus::NotStarted),
        course("training-5", "Fire Safety", SECOND_WORKER_NAME, "2025-01-31", 30, TrainingStatus::Completed),
    ]
}

fn message(sender: &str, body: &str, sent_at: &str, read: bool) -> Message {
    Message {
        sender: sender.into(),
        body: body.into(),
        sent_at: sent_at.into(),
        read,
    }
}

pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: "conversation-1".into(),
            participants: vec![CARE_WORKER_NAME.into(), SUPERVISOR_NAME.into()],
            subject: "Weekend rota".into(),
            messages: vec![
                message(SUPERVISOR_NAME, "Can you cover Saturday morning?", "2025-03-13T17:02:00", true),
                message(CARE_WORKER_NAME, "Yes, happy to.", "2025-03-13T17:20:00", true),
                message(SUPERVISOR_NAME, "Thanks, rota updated.", "2025-03-14T08:10:00", false),
            ],
        },
        Conversation {
            id: "conversation-2".into(),
            participants: vec![CLIENT_NAME.into(), CARE_WORKER_NAME.into()],
            subject: "Evening visit".into(),
            messages: vec![message(
                CLIENT_NAME,
                "Could you come a little earlier tonight?",
                "2025-03-14T07:45:00",
                false,
            )],
        },
        Conversation {
            id: "conversation-3".into(),
            participants: vec![ADMIN_NAME.into(), SUPERVISOR_NAME.into()],
            subject: "Audit preparation".into(),
            messages: vec![message(
                ADMIN_NAME,
                "Please check training records before Friday.",
                "2025-03-12T11:00:00",
                false,
            )],
        },
        Conversation {
            id: "conversation-4".into(),
            participants: vec![FAMILY_NAME.into(), SUPERVISOR_NAME.into()],
            subject: "Mum's care plan".into(),
            messages: vec![message(
                FAMILY_NAME,
                "Is there a review scheduled this month?",
                "2025-03-11T19:30:00",
                true,
            )],
        },
    ]
}

pub fn staff() -> Vec<StaffMember> {
    vec![
        StaffMember {
            id: "staff-1".into(),
            name: SUPERVISOR_NAME.into(),
            role: Role::Supervisor,
            email: "priya.shah@carelink.test".into(),
            phone: Some("01632 960100".into()),
            start_date: "2019-06-01".into(),
            status: StaffStatus::Active,
        },
        StaffMember {
            id: "staff-2".into(),
            name: CARE_WORKER_NAME.into(),
            role: Role::CareWorker,
            email: "sam.carter@carelink.test".into(),
            phone: Some("01632 960101".into()),
            start_date: "2022-09-12".into(),
            status: StaffStatus::Active,
        },
        StaffMember {
            id: "staff-3".into(),
            name: SECOND_WORKER_NAME.into(),
            role: Role::CareWorker,
            email: "jordan.blake@carelink.test".into(),
            phone: None,
            start_date: "2023-01-05".into(),
            status: StaffStatus::Active,
        },
        StaffMember {
            id: "staff-4".into(),
            name: "Chris Patel".into(),
            role: Role::CareWorker,
            email: "chris.patel@carelink.test".into(),
            phone: None,
            start_date: "2021-03-22".into(),
            status: StaffStatus::OnLeave,
        },
        StaffMember {
            id: "staff-5".into(),
            name: "Dana Hughes".into(),
            role: Role::CareWorker,
            email: "dana.hughes@carelink.test".into(),
            phone: None,
            start_date: "2018-11-30".into(),
            status: StaffStatus::Inactive,
        },
    ]
}

pub fn clients() -> Vec<ClientProfile> {
    vec![
        ClientProfile {
            id: "client-1".into(),
            name: CLIENT_NAME.into(),
            date_of_birth: "1941-06-02".into(),
            phone: Some("01632 960001".into()),
            address: Some("12 Elm Road".into()),
            emergency_contact: Some(format!("{FAMILY_NAME} (son)")),
            gp_name: Some("Dr. Okafor".into()),
            care_plan_summary: Some(
                "Twice-daily personal care, medication prompts, evening meal.".into(),
            ),
            key_worker: Some(CARE_WORKER_NAME.into()),
        },
        ClientProfile {
            id: "client-2".into(),
            name: "Harold Finch".into(),
            date_of_birth: "1938-11-19".into(),
            phone: None,
            address: Some("4 Mill Lane".into()),
            emergency_contact: None,
            gp_name: Some("Dr. Reyes".into()),
            care_plan_summary: Some("Memory support and medication administration.".into()),
            key_worker: Some(CARE_WORKER_NAME.into()),
        },
        ClientProfile {
            id: "client-3".into(),
            name: "Edith Clarke".into(),
            date_of_birth: "1945-02-07".into(),
            phone: Some("01632 960003".into()),
            address: Some("27 Station Street".into()),
            emergency_contact: None,
            gp_name: None,
            care_plan_summary: None,
            key_worker: None,
        },
    ]
}

pub fn feedback() -> Vec<Feedback> {
    vec![Feedback {
        id: "feedback-1".into(),
        client_name: CLIENT_NAME.into(),
        submitted_on: "2025-03-01".into(),
        rating: 5,
        comment: "Sam is always on time and very kind.".into(),
        status: FeedbackStatus::Acknowledged,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ALL_ROLES;
    use crate::timesheet::worked_hours;

    #[test]
    fn every_role_has_a_demo_account() {
        for role in ALL_ROLES {
            assert!(demo_account(*role).is_some(), "{role:?}");
        }
    }

    #[test]
    fn seeded_timesheet_hours_match_shift_times() {
        for entry in timesheets() {
            let hours = worked_hours(&entry.check_in, &entry.check_out, entry.break_minutes).unwrap();
            assert_eq!(hours, entry.total_hours, "{}", entry.id);
        }
    }

    #[test]
    fn seeded_ids_are_unique() {
        let ids: Vec<String> = visits().into_iter().map(|v| v.id).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }
}
