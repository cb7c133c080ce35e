use std::collections::VecDeque;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;

use buddy_core::Catalog;
use buddy_core::model::{BubbleId, SimulationSettings, Speaker, SpeechBubble};
use buddy_core::time::after;

use crate::error::ChatError;
use crate::picker::pick;

/// What tapping the microphone did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MicOutcome {
    /// Recording started.
    Listening,
    /// Recording stopped; a learner line was added and a reply is due at `reply_at`.
    Sent { reply_at: DateTime<Utc> },
}

/// Simulated voice conversation with canned lines.
///
/// Every stop of the microphone schedules exactly one buddy reply; replies are
/// delivered in the order they were scheduled.
#[derive(Debug, Clone)]
pub struct VoiceChat {
    learner_lines: Vec<String>,
    buddy_replies: Vec<String>,
    reply_delay: Duration,
    transcript: Vec<SpeechBubble>,
    recording: bool,
    pending: VecDeque<DateTime<Utc>>,
    next_id: u64,
}

impl VoiceChat {
    /// Start a conversation opened by `greeting`.
    ///
    /// # Errors
    ///
    /// Returns `ChatError` when either list of canned lines is empty.
    pub fn new(
        greeting: &str,
        learner_lines: Vec<String>,
        buddy_replies: Vec<String>,
        reply_delay: Duration,
        now: DateTime<Utc>,
    ) -> Result<Self, ChatError> {
        if learner_lines.is_empty() {
            return Err(ChatError::NoLearnerLines);
        }
        if buddy_replies.is_empty() {
            return Err(ChatError::NoBuddyReplies);
        }

        let mut chat = Self {
            learner_lines,
            buddy_replies,
            reply_delay,
            transcript: Vec::new(),
            recording: false,
            pending: VecDeque::new(),
            next_id: 1,
        };
        chat.push(greeting.to_owned(), Speaker::Buddy, now);
        Ok(chat)
    }

    /// # Errors
    ///
    /// Returns `ChatError` if the catalog lacks chat lines.
    pub fn from_catalog(
        catalog: &Catalog,
        settings: &SimulationSettings,
        now: DateTime<Utc>,
    ) -> Result<Self, ChatError> {
        Self::new(
            catalog.greeting(),
            catalog.learner_lines().to_vec(),
            catalog.buddy_replies().to_vec(),
            settings.reply_delay(),
            now,
        )
    }

    #[must_use]
    pub fn transcript(&self) -> &[SpeechBubble] {
        &self.transcript
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    #[must_use]
    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn next_reply_at(&self) -> Option<DateTime<Utc>> {
        self.pending.front().copied()
    }

    /// Start recording, or stop and "hear" a random learner line.
    pub fn toggle_microphone<R: Rng + ?Sized>(
        &mut self,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> MicOutcome {
        if !self.recording {
            self.recording = true;
            tracing::debug!("microphone on");
            return MicOutcome::Listening;
        }

        self.recording = false;
        let line = pick(&self.learner_lines, rng).cloned().unwrap_or_default();
        self.push(line, Speaker::Learner, now);

        let reply_at = after(now, self.reply_delay);
        self.pending.push_back(reply_at);
        tracing::debug!(%reply_at, pending = self.pending.len(), "learner line sent");
        MicOutcome::Sent { reply_at }
    }

    /// Deliver every reply that is due at `now`; returns how many were added.
    pub fn poll<R: Rng + ?Sized>(&mut self, now: DateTime<Utc>, rng: &mut R) -> usize {
        let mut delivered = 0;
        while self.pending.front().is_some_and(|due| *due <= now) {
            self.pending.pop_front();
            let reply = pick(&self.buddy_replies, rng).cloned().unwrap_or_default();
            self.push(reply, Speaker::Buddy, now);
            delivered += 1;
        }
        delivered
    }

    fn push(&mut self, text: String, speaker: Speaker, now: DateTime<Utc>) {
        let id = BubbleId::new(self.next_id);
        self.next_id += 1;
        self.transcript
            .push(SpeechBubble::new(id, text, speaker, now));
    }
}
