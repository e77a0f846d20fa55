use serde::{Deserialize, Serialize};

use crate::collection::Record;

/// A single message in a conversation thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub body: String,
    /// ISO datetime, e.g. "2025-03-14T09:30:00".
    pub sent_at: String,
    pub read: bool,
}

/// A thread between the signed-in user and another person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    /// Display names of everyone in the thread.
    pub participants: Vec<String>,
    pub subject: String,
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Whether `name` takes part in this thread.
    pub fn includes(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }

    /// Messages sent to `reader` that they have not opened.
    pub fn unread_for(&self, reader: &str) -> usize {
        self.messages
            .iter()
            .filter(|m| !m.read && m.sender != reader)
            .count()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// The first participant other than `reader`, used as the thread title.
    pub fn counterpart(&self, reader: &str) -> &str {
        self.participants
            .iter()
            .find(|p| p.as_str() != reader)
            .map(String::as_str)
            .unwrap_or(self.subject.as_str())
    }

    /// Mark every message addressed to `reader` as read.
    pub fn mark_read(&mut self, reader: &str) {
        for message in self.messages.iter_mut().filter(|m| m.sender != reader) {
            message.read = true;
        }
    }
}

impl Record for Conversation {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Unread total across every thread `reader` belongs to.
pub fn unread_total(conversations: &[Conversation], reader: &str) -> usize {
    conversations
        .iter()
        .filter(|c| c.includes(reader))
        .map(|c| c.unread_for(reader))
        .sum()
}
