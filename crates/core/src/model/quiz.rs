use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{OptionId, QuizItemId};

/// Every quiz item offers exactly this many answer options.
pub const OPTIONS_PER_ITEM: usize = 4;

//
// ─── OPTION ────────────────────────────────────────────────────────────────────
//

/// One selectable answer of a quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    id: OptionId,
    label: String,
    emoji: String,
    is_correct: bool,
}

impl AnswerOption {
    #[must_use]
    pub fn new(
        id: OptionId,
        label: impl Into<String>,
        emoji: impl Into<String>,
        is_correct: bool,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            emoji: emoji.into(),
            is_correct,
        }
    }

    /// Shorthand for a correct option.
    #[must_use]
    pub fn correct(id: u64, label: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self::new(OptionId::new(id), label, emoji, true)
    }

    /// Shorthand for a wrong option.
    #[must_use]
    pub fn wrong(id: u64, label: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self::new(OptionId::new(id), label, emoji, false)
    }

    #[must_use]
    pub fn id(&self) -> OptionId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

//
// ─── QUIZ ITEM ─────────────────────────────────────────────────────────────────
//

/// Unvalidated quiz item as authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItemDraft {
    pub id: QuizItemId,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl QuizItemDraft {
    #[must_use]
    pub fn new(id: u64, prompt: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            id: QuizItemId::new(id),
            prompt: prompt.into(),
            options,
        }
    }

    /// Validate the draft into a quiz item.
    ///
    /// # Errors
    ///
    /// Returns `QuizItemError` when the prompt or any label is blank, the item
    /// does not carry exactly `OPTIONS_PER_ITEM` options, option ids repeat, or
    /// the number of correct options is not exactly one.
    pub fn validate(self) -> Result<QuizItem, QuizItemError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(QuizItemError::EmptyPrompt);
        }

        if self.options.len() != OPTIONS_PER_ITEM {
            return Err(QuizItemError::WrongOptionCount {
                expected: OPTIONS_PER_ITEM,
                found: self.options.len(),
            });
        }

        for (idx, option) in self.options.iter().enumerate() {
            if option.label.trim().is_empty() {
                return Err(QuizItemError::EmptyOptionLabel(option.id));
            }
            if self.options[..idx].iter().any(|prev| prev.id == option.id) {
                return Err(QuizItemError::DuplicateOptionId(option.id));
            }
        }

        let mut correct = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.is_correct)
            .map(|(idx, _)| idx);
        let correct_index = correct.next().ok_or(QuizItemError::NoCorrectOption)?;
        let extra = correct.count();
        if extra > 0 {
            return Err(QuizItemError::MultipleCorrectOptions { count: extra + 1 });
        }

        Ok(QuizItem {
            id: self.id,
            prompt: prompt.to_owned(),
            options: self.options,
            correct_index,
        })
    }
}

/// A validated question with its answer options.
///
/// Exactly one option is flagged correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizItem {
    id: QuizItemId,
    prompt: String,
    options: Vec<AnswerOption>,
    #[serde(skip)]
    correct_index: usize,
}

impl QuizItem {
    #[must_use]
    pub fn id(&self) -> QuizItemId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Looks up an option of this item by id.
    #[must_use]
    pub fn option(&self, id: OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.id == id)
    }

    #[must_use]
    pub fn correct_option(&self) -> &AnswerOption {
        &self.options[self.correct_index]
    }
}

//
// ─── QUIZ ITEM ERRORS ──────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizItemError {
    #[error("prompt cannot be empty")]
    EmptyPrompt,

    #[error("expected {expected} options, found {found}")]
    WrongOptionCount { expected: usize, found: usize },

    #[error("option {0} has an empty label")]
    EmptyOptionLabel(OptionId),

    #[error("option id {0} appears more than once")]
    DuplicateOptionId(OptionId),

    #[error("no option is flagged correct")]
    NoCorrectOption,

    #[error("{count} options are flagged correct")]
    MultipleCorrectOptions { count: usize },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
