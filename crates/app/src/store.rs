//! In-memory care records, seeded once per app instance.
//!
//! Every change goes through a pure transition that returns a fresh
//! collection; [`CareStore`] then swaps it into the owning signal.

use dioxus::prelude::*;
use shared_types::{
    appended, mock, next_id, replace_by_id, AppError, CareLog, ClientProfile, Conversation,
    Document, Feedback, FeedbackStatus, Incident, MedicationSchedule, MedicationStatus, Message,
    Note, NoteStatus, Record, StaffMember, Status, TimesheetEntry, TimesheetStatus, TrainingModule, Visit,
    VisitStatus, MAX_RATING,
};

use crate::format_helpers::now_timestamp;

fn find<'a, T: Record>(items: &'a [T], id: &str) -> Result<&'a T, AppError> {
    items
        .iter()
        .find(|item| item.id() == id)
        .ok_or_else(|| AppError::not_found(format!("No record with id {id}")))
}

fn refuse(what: &str, from: &str) -> AppError {
    AppError::bad_request(format!("Cannot {what} a record that is {from}"))
}

// ── Visits ──

pub fn start_visit(visits: &[Visit], id: &str) -> Result<Vec<Visit>, AppError> {
    let visit = find(visits, id)?;
    if !visit.status.can_start() {
        return Err(refuse("start", visit.status.as_str()));
    }
    replace_by_id(visits, id, |v| v.status = VisitStatus::InProgress)
}

pub fn complete_visit(visits: &[Visit], id: &str) -> Result<Vec<Visit>, AppError> {
    let visit = find(visits, id)?;
    if !visit.status.can_complete() {
        return Err(refuse("complete", visit.status.as_str()));
    }
    replace_by_id(visits, id, |v| v.status = VisitStatus::Completed)
}

pub fn cancel_visit(visits: &[Visit], id: &str) -> Result<Vec<Visit>, AppError> {
    let visit = find(visits, id)?;
    if !visit.status.can_cancel() {
        return Err(refuse("cancel", visit.status.as_str()));
    }
    replace_by_id(visits, id, |v| v.status = VisitStatus::Cancelled)
}

// ── Timesheets ──

/// Approve or reject a pending entry.
pub fn review_timesheet(
    entries: &[TimesheetEntry],
    id: &str,
    decision: TimesheetStatus,
) -> Result<Vec<TimesheetEntry>, AppError> {
    if decision == TimesheetStatus::Pending {
        return Err(AppError::bad_request("A review must approve or reject"));
    }
    let entry = find(entries, id)?;
    if entry.status != TimesheetStatus::Pending {
        return Err(refuse("review", entry.status.as_str()));
    }
    replace_by_id(entries, id, |e| e.status = decision)
}

/// Append a new pending entry. Hours are computed from the shift times.
pub fn submit_timesheet(
    entries: &[TimesheetEntry],
    worker_name: &str,
    date: &str,
    check_in: &str,
    check_out: &str,
    break_minutes: u32,
) -> Result<Vec<TimesheetEntry>, AppError> {
    if date.trim().is_empty() {
        return Err(AppError::invalid_field("date", "Enter the date worked"));
    }
    let entry = TimesheetEntry::submit(
        next_id(entries, "timesheet"),
        worker_name,
        date.trim(),
        check_in,
        check_out,
        break_minutes,
    )?;
    Ok(appended(entries, entry))
}

// ── Medications ──

pub fn record_medication(
    schedule: &[MedicationSchedule],
    id: &str,
    outcome: MedicationStatus,
    recorded_by: &str,
) -> Result<Vec<MedicationSchedule>, AppError> {
    if !MedicationStatus::OUTCOMES.contains(&outcome) {
        return Err(AppError::bad_request("Choose given, missed or refused"));
    }
    let dose = find(schedule, id)?;
    if !dose.status.is_due() {
        return Err(refuse("record", dose.status.as_str()));
    }
    replace_by_id(schedule, id, |m| {
        m.status = outcome;
        m.administered_by = Some(recorded_by.to_string());
    })
}

// ── Notes ──

pub fn add_note(
    notes: &[Note],
    client_name: &str,
    author: &str,
    body: &str,
) -> Result<Vec<Note>, AppError> {
    if client_name.trim().is_empty() {
        return Err(AppError::invalid_field("client_name", "Choose a client"));
    }
    if body.trim().is_empty() {
        return Err(AppError::invalid_field("body", "Write something first"));
    }
    let note = Note {
        id: next_id(notes, "note"),
        client_name: client_name.trim().to_string(),
        author: author.to_string(),
        created_on: mock::TODAY.to_string(),
        body: body.trim().to_string(),
        status: NoteStatus::Open,
    };
    Ok(appended(notes, note))
}

pub fn archive_note(notes: &[Note], id: &str) -> Result<Vec<Note>, AppError> {
    let note = find(notes, id)?;
    if note.status == NoteStatus::Archived {
        return Err(refuse("archive", note.status.as_str()));
    }
    replace_by_id(notes, id, |n| n.status = NoteStatus::Archived)
}

// ── Messages ──

pub fn open_conversation(
    conversations: &[Conversation],
    id: &str,
    reader: &str,
) -> Result<Vec<Conversation>, AppError> {
    replace_by_id(conversations, id, |c| c.mark_read(reader))
}

pub fn send_message(
    conversations: &[Conversation],
    id: &str,
    sender: &str,
    body: &str,
    sent_at: &str,
) -> Result<Vec<Conversation>, AppError> {
    if body.trim().is_empty() {
        return Err(AppError::invalid_field("body", "Message is empty"));
    }
    let message = Message {
        sender: sender.to_string(),
        body: body.trim().to_string(),
        sent_at: sent_at.to_string(),
        read: false,
    };
    replace_by_id(conversations, id, |c| c.messages.push(message))
}

// ── Incidents ──

pub fn advance_incident(incidents: &[Incident], id: &str) -> Result<Vec<Incident>, AppError> {
    let incident = find(incidents, id)?;
    let next = incident
        .status
        .advance()
        .ok_or_else(|| refuse("advance", incident.status.as_str()))?;
    replace_by_id(incidents, id, |i| i.status = next)
}

// ── Feedback ──

pub fn submit_feedback(
    feedback: &[Feedback],
    client_name: &str,
    rating: u8,
    comment: &str,
) -> Result<Vec<Feedback>, AppError> {
    if !(1..=MAX_RATING).contains(&rating) {
        return Err(AppError::invalid_field(
            "rating",
            format!("Choose between 1 and {MAX_RATING} stars"),
        ));
    }
    if comment.trim().is_empty() {
        return Err(AppError::invalid_field("comment", "Tell us a little about your care"));
    }
    let entry = Feedback {
        id: next_id(feedback, "feedback"),
        client_name: client_name.to_string(),
        submitted_on: mock::TODAY.to_string(),
        rating,
        comment: comment.trim().to_string(),
        status: FeedbackStatus::Received,
    };
    Ok(appended(feedback, entry))
}

/// Every collection the pages read, one signal each.
#[derive(Clone, Copy, PartialEq)]
pub struct CareStore {
    pub visits: Signal<Vec<Visit>>,
    pub care_logs: Signal<Vec<CareLog>>,
    pub incidents: Signal<Vec<Incident>>,
    pub medications: Signal<Vec<MedicationSchedule>>,
    pub timesheets: Signal<Vec<TimesheetEntry>>,
    pub documents: Signal<Vec<Document>>,
    pub notes: Signal<Vec<Note>>,
    pub training: Signal<Vec<TrainingModule>>,
    pub conversations: Signal<Vec<Conversation>>,
    pub staff: Signal<Vec<StaffMember>>,
    pub clients: Signal<Vec<ClientProfile>>,
    pub feedback: Signal<Vec<Feedback>>,
}

/// Run `transition` against the signal's current value and store the result.
fn commit<T, F>(collection: &mut Signal<Vec<T>>, action: &str, transition: F) -> Result<(), AppError>
where
    T: 'static,
    F: FnOnce(&[T]) -> Result<Vec<T>, AppError>,
{
    let next = transition(&collection.read());
    match next {
        Ok(items) => {
            tracing::debug!(action, len = items.len(), "collection replaced");
            collection.set(items);
            Ok(())
        }
        Err(e) => {
            tracing::warn!(action, error = %e, "transition refused");
            Err(e)
        }
    }
}

impl CareStore {
    pub fn seeded() -> Self {
        tracing::info!("seeding in-memory collections");
        Self {
            visits: Signal::new(mock::visits()),
            care_logs: Signal::new(mock::care_logs()),
            incidents: Signal::new(mock::incidents()),
            medications: Signal::new(mock::medications()),
            timesheets: Signal::new(mock::timesheets()),
            documents: Signal::new(mock::documents()),
            notes: Signal::new(mock::notes()),
            training: Signal::new(mock::training()),
            conversations: Signal::new(mock::conversations()),
            staff: Signal::new(mock::staff()),
            clients: Signal::new(mock::clients()),
            feedback: Signal::new(mock::feedback()),
        }
    }

    pub fn start_visit(&mut self, id: &str) -> Result<(), AppError> {
        commit(&mut self.visits, "start_visit", |v| start_visit(v, id))
    }

    pub fn complete_visit(&mut self, id: &str) -> Result<(), AppError> {
        commit(&mut self.visits, "complete_visit", |v| complete_visit(v, id))
    }

    pub fn cancel_visit(&mut self, id: &str) -> Result<(), AppError> {
        commit(&mut self.visits, "cancel_visit", |v| cancel_visit(v, id))
    }

    pub fn review_timesheet(&mut self, id: &str, decision: TimesheetStatus) -> Result<(), AppError> {
        commit(&mut self.timesheets, "review_timesheet", |t| {
            review_timesheet(t, id, decision)
        })
    }

    pub fn submit_timesheet(
        &mut self,
        worker_name: &str,
        date: &str,
        check_in: &str,
        check_out: &str,
        break_minutes: u32,
    ) -> Result<(), AppError> {
        commit(&mut self.timesheets, "submit_timesheet", |t| {
            submit_timesheet(t, worker_name, date, check_in, check_out, break_minutes)
        })
    }

    pub fn record_medication(
        &mut self,
        id: &str,
        outcome: MedicationStatus,
        recorded_by: &str,
    ) -> Result<(), AppError> {
        commit(&mut self.medications, "record_medication", |m| {
            record_medication(m, id, outcome, recorded_by)
        })
    }

    pub fn add_note(&mut self, client_name: &str, author: &str, body: &str) -> Result<(), AppError> {
        commit(&mut self.notes, "add_note", |n| add_note(n, client_name, author, body))
    }

    pub fn archive_note(&mut self, id: &str) -> Result<(), AppError> {
        commit(&mut self.notes, "archive_note", |n| archive_note(n, id))
    }

    pub fn open_conversation(&mut self, id: &str, reader: &str) -> Result<(), AppError> {
        commit(&mut self.conversations, "open_conversation", |c| {
            open_conversation(c, id, reader)
        })
    }

    pub fn send_message(&mut self, id: &str, sender: &str, body: &str) -> Result<(), AppError> {
        let sent_at = now_timestamp();
        commit(&mut self.conversations, "send_message", |c| {
            send_message(c, id, sender, body, &sent_at)
        })
    }

    pub fn advance_incident(&mut self, id: &str) -> Result<(), AppError> {
        commit(&mut self.incidents, "advance_incident", |i| advance_incident(i, id))
    }

    pub fn submit_feedback(
        &mut self,
        client_name: &str,
        rating: u8,
        comment: &str,
    ) -> Result<(), AppError> {
        commit(&mut self.feedback, "submit_feedback", |f| {
            submit_feedback(f, client_name, rating, comment)
        })
    }
}

pub fn use_store() -> CareStore {
    use_context::<CareStore>()
}
