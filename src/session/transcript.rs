//! Ordered message log for one conversation session.
//!
//! The transcript is append-only except for the single pending placeholder,
//! which is replaced in place when its response arrives or fails. Rendering
//! iterates the messages in insertion order; the transcript itself is
//! width- and presentation-agnostic.

use std::fmt;

use chrono::{DateTime, Utc};

use super::richtext::RichText;

/// Unique identifier for a transcript message.
///
/// Monotonically increasing, assigned by the transcript on append. The
/// counter keeps running across `clear` so ids never repeat within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    System,
}

/// Lifecycle state of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    /// Content is complete and immutable.
    Final,
    /// In-flight placeholder awaiting the service response.
    Pending,
    /// The exchange failed; body holds the fallback text.
    Failed,
}

/// Optional pass-through fields from the answering service.
///
/// The session stores these untouched; only the presentation layer decides
/// how (or whether) to show them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerMeta {
    pub confidence: Option<f64>,
    pub sources: Vec<String>,
    pub follow_ups: Vec<String>,
}

impl AnswerMeta {
    pub fn is_empty(&self) -> bool {
        self.confidence.is_none() && self.sources.is_empty() && self.follow_ups.is_empty()
    }
}

/// A single entry in the transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub body: RichText,
    pub created_at: DateTime<Utc>,
    pub status: MessageStatus,
    pub meta: Option<AnswerMeta>,
}

/// Error from [`Transcript::replace`].
///
/// Either variant means the caller tried to mutate a slot that is not the
/// pending placeholder. That indicates a defect in the orchestration layer,
/// so it is surfaced rather than swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptError {
    /// No message exists with the given id.
    NotFound(MessageId),
    /// The message exists but is not in `Pending` status.
    NotPending(MessageId),
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptError::NotFound(id) => write!(f, "message {id} not found in transcript"),
            TranscriptError::NotPending(id) => write!(f, "message {id} is not pending"),
        }
    }
}

impl std::error::Error for TranscriptError {}

/// Ordered, insertion-significant log of messages.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message, assigning its id. Returns the new id.
    pub fn append(&mut self, role: Role, body: RichText, status: MessageStatus) -> MessageId {
        self.next_id += 1;
        let id = MessageId(self.next_id);
        self.messages.push(Message {
            id,
            role,
            body,
            created_at: Utc::now(),
            status,
            meta: None,
        });
        id
    }

    /// Replaces the body, status, and meta of the pending message at `id`.
    ///
    /// Position, id, role, and timestamp are fixed. Fails if `id` does not
    /// exist or the message is not currently `Pending`.
    pub fn replace(
        &mut self,
        id: MessageId,
        body: RichText,
        status: MessageStatus,
        meta: Option<AnswerMeta>,
    ) -> Result<(), TranscriptError> {
        let msg = self
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(TranscriptError::NotFound(id))?;
        if msg.status != MessageStatus::Pending {
            return Err(TranscriptError::NotPending(id));
        }
        msg.body = body;
        msg.status = status;
        msg.meta = meta;
        Ok(())
    }

    /// Ordered, read-only view of all messages.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// The single pending placeholder, if one is in flight.
    pub fn pending(&self) -> Option<&Message> {
        self.messages
            .iter()
            .find(|m| m.status == MessageStatus::Pending)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
