use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::BubbleId;

/// Who said a line in the voice chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    Learner,
    Buddy,
}

/// One line of the voice chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechBubble {
    pub id: BubbleId,
    pub text: String,
    pub speaker: Speaker,
    pub said_at: DateTime<Utc>,
}

impl SpeechBubble {
    #[must_use]
    pub fn new(id: BubbleId, text: impl Into<String>, speaker: Speaker, said_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            speaker,
            said_at,
        }
    }

    #[must_use]
    pub fn is_learner(&self) -> bool {
        self.speaker == Speaker::Learner
    }
}
