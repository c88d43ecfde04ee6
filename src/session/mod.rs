//! Conversation session engine.
//!
//! [`ChatSession`] is the state machine governing one exchange: it owns the
//! transcript, guards the single in-flight request, and turns service
//! resolutions into transcript updates. The session performs no I/O itself;
//! `submit` returns an [`AskEffect`] that the driver executes against the
//! answering service, then feeds back through [`ChatSession::resolve`] or
//! [`ChatSession::fail`]. Stale resolutions (after a reset) are discarded by
//! correlation-token comparison, which gives soft cancellation without
//! aborting the transport.

use std::fmt;

use uuid::Uuid;

pub mod quick_actions;
pub mod richtext;
pub mod transcript;

pub use quick_actions::QuickAction;
pub use richtext::{Emphasis, RichText, Segment, Span};
pub use transcript::{
    AnswerMeta, Message, MessageId, MessageStatus, Role, Transcript, TranscriptError,
};

/// Fixed user-facing text for a failed exchange.
pub const FALLBACK_ANSWER: &str = "Erro ao contatar o servidor.";

/// Correlation token for one in-flight request.
///
/// Resolutions carrying a token that no longer matches the session's current
/// one are silently discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The single effect a session emits: ask the service this question.
///
/// The driver owns the async boundary; it sends `question` to the service
/// and reports the outcome back with `request_id`.
#[derive(Debug, Clone)]
pub struct AskEffect {
    pub request_id: RequestId,
    pub question: String,
}

/// A resolved answer handed back to the session.
#[derive(Debug, Clone)]
pub struct Answer {
    pub text: String,
    pub meta: AnswerMeta,
}

impl Answer {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            meta: AnswerMeta::default(),
        }
    }
}

/// Tracks the in-flight exchange: which request, which placeholder.
#[derive(Debug, Clone, Copy)]
struct PendingAsk {
    request_id: RequestId,
    message_id: MessageId,
}

/// One conversation session.
///
/// Owns the transcript, the pending-request token, and the input buffer.
/// Created once per UI context; no cross-session state.
#[derive(Debug, Default)]
pub struct ChatSession {
    transcript: Transcript,
    pending: Option<PendingAsk>,
    input_buffer: String,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Read model
    // ------------------------------------------------------------------

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// True while a request is in flight (the typing indicator window).
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Submits user input, returning the effect to execute.
    ///
    /// Appends a `User/Final` message and an `Assistant/Pending` placeholder,
    /// records a fresh request token, and clears the input buffer. Returns
    /// `None` without touching any state when the trimmed input is empty or
    /// a request is already in flight; the UI is expected to disable
    /// submission while pending, but the session guards re-entrancy anyway.
    pub fn submit(&mut self, raw: &str) -> Option<AskEffect> {
        let text = raw.trim();
        if text.is_empty() {
            tracing::trace!("ignoring empty submission");
            return None;
        }
        if self.pending.is_some() {
            tracing::debug!("ignoring submission while a request is pending");
            return None;
        }

        self.transcript
            .append(Role::User, RichText::plain(text), MessageStatus::Final);
        let message_id =
            self.transcript
                .append(Role::Assistant, RichText::empty(), MessageStatus::Pending);

        let request_id = RequestId::new();
        self.pending = Some(PendingAsk {
            request_id,
            message_id,
        });
        self.input_buffer.clear();

        tracing::debug!(%request_id, "submitted question");
        Some(AskEffect {
            request_id,
            question: text.to_string(),
        })
    }

    /// Resolves the in-flight exchange with the service's answer.
    ///
    /// A mismatched token means the session was reset while the request was
    /// in flight; the resolution is discarded. A transcript error here means
    /// the single-pending invariant was already broken and is propagated.
    pub fn resolve(
        &mut self,
        request_id: RequestId,
        answer: Answer,
    ) -> Result<(), TranscriptError> {
        let Some(pending) = self.take_matching(request_id) else {
            return Ok(());
        };
        let meta = if answer.meta.is_empty() {
            None
        } else {
            Some(answer.meta)
        };
        self.transcript.replace(
            pending.message_id,
            richtext::format(&answer.text),
            MessageStatus::Final,
            meta,
        )
    }

    /// Marks the in-flight exchange as failed.
    ///
    /// The placeholder becomes a `Failed` message carrying the fixed
    /// fallback text; `reason` goes to the log only. No automatic retry.
    pub fn fail(&mut self, request_id: RequestId, reason: &str) -> Result<(), TranscriptError> {
        let Some(pending) = self.take_matching(request_id) else {
            return Ok(());
        };
        tracing::warn!(%request_id, reason, "answer request failed");
        self.transcript.replace(
            pending.message_id,
            RichText::plain(FALLBACK_ANSWER),
            MessageStatus::Failed,
            None,
        )
    }

    /// Starts a new conversation: clears transcript, token, and buffer.
    ///
    /// An in-flight response that arrives later fails the token check and
    /// becomes a no-op.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.pending = None;
        self.input_buffer.clear();
    }

    /// Pre-fills the input buffer with a quick action. Does not submit.
    pub fn apply_quick_action(&mut self, action: &QuickAction) {
        self.input_buffer = action.fill.to_string();
    }

    /// Takes the buffered input for submission, leaving the buffer empty.
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input_buffer)
    }

    /// Appends a `System/Final` notice (welcome banner, reset confirmation).
    pub fn push_system(&mut self, text: &str) -> MessageId {
        self.transcript
            .append(Role::System, RichText::plain(text), MessageStatus::Final)
    }

    /// Consumes the pending slot if the token matches; logs and discards
    /// stale tokens.
    fn take_matching(&mut self, request_id: RequestId) -> Option<PendingAsk> {
        match self.pending {
            Some(p) if p.request_id == request_id => self.pending.take(),
            _ => {
                tracing::trace!(%request_id, "discarding stale response");
                None
            }
        }
    }
}
