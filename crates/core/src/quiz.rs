//! The quiz engine: a pure state machine stepping a learner through quiz items.
//!
//! Illegal actions (a second selection, advancing without a selection, an
//! option from another item) are ignored rather than reported; the host UI
//! only offers valid actions.

use serde::Serialize;
use thiserror::Error;

use crate::model::{AnswerOption, OptionId, QuizItem, QuizItemDraft, QuizItemError, QuizItemId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Rejected engine configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizConfigError {
    #[error("a quiz needs at least one item")]
    NoItems,

    #[error("quiz item id {0} appears more than once")]
    DuplicateItemId(QuizItemId),

    #[error("quiz item {id} is invalid: {source}")]
    InvalidItem {
        id: QuizItemId,
        #[source]
        source: QuizItemError,
    },
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Externally visible engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuizState {
    InProgress {
        index: usize,
        selection: Option<OptionId>,
    },
    Completed {
        final_score: u32,
    },
}

/// Result of `QuizEngine::select_option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The call was a no-op.
    Ignored,
    Correct,
    Incorrect,
}

impl SelectOutcome {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// True only for an accepted, correct selection.
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Result of `QuizEngine::advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Ignored,
    Next { index: usize },
    Completed { final_score: u32 },
}

/// Position within the quiz, for progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizProgress {
    /// 1-based position of the current item.
    pub position: usize,
    pub total: usize,
    /// `position / total` as a whole percent.
    pub percent: u8,
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct QuizEngine {
    items: Vec<QuizItem>,
    index: usize,
    selection: Option<OptionId>,
    score: u32,
    completed: bool,
}

impl QuizEngine {
    /// Create an engine over validated items, in the given order.
    ///
    /// # Errors
    ///
    /// Returns `QuizConfigError::NoItems` for an empty list and
    /// `QuizConfigError::DuplicateItemId` when two items share an id.
    pub fn new(items: Vec<QuizItem>) -> Result<Self, QuizConfigError> {
        if items.is_empty() {
            return Err(QuizConfigError::NoItems);
        }
        for (idx, item) in items.iter().enumerate() {
            if items[..idx].iter().any(|prev| prev.id() == item.id()) {
                return Err(QuizConfigError::DuplicateItemId(item.id()));
            }
        }

        Ok(Self {
            items,
            index: 0,
            selection: None,
            score: 0,
            completed: false,
        })
    }

    /// Validate authored drafts and build an engine from them.
    ///
    /// # Errors
    ///
    /// Returns `QuizConfigError::InvalidItem` for the first draft that fails
    /// validation, otherwise the errors of `QuizEngine::new`.
    pub fn from_drafts(drafts: Vec<QuizItemDraft>) -> Result<Self, QuizConfigError> {
        let items = drafts
            .into_iter()
            .map(|draft| {
                let id = draft.id;
                draft
                    .validate()
                    .map_err(|source| QuizConfigError::InvalidItem { id, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(items)
    }

    #[must_use]
    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// 0-based index of the current item; frozen on the last item once completed.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current_item(&self) -> &QuizItem {
        &self.items[self.index]
    }

    #[must_use]
    pub fn is_last_item(&self) -> bool {
        self.index + 1 == self.items.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn selection(&self) -> Option<OptionId> {
        self.selection
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    /// The option chosen for the current item, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<&AnswerOption> {
        self.selection
            .and_then(|id| self.current_item().option(id))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn final_score(&self) -> Option<u32> {
        self.completed.then_some(self.score)
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        if self.completed {
            QuizState::Completed {
                final_score: self.score,
            }
        } else {
            QuizState::InProgress {
                index: self.index,
                selection: self.selection,
            }
        }
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let position = self.index + 1;
        let total = self.items.len();
        let percent = u8::try_from(position * 100 / total).unwrap_or(100);
        QuizProgress {
            position,
            total,
            percent,
        }
    }

    /// Record the learner's answer for the current item.
    ///
    /// Ignored once an answer is recorded, after completion, or when
    /// `option_id` is not an option of the current item.
    pub fn select_option(&mut self, option_id: OptionId) -> SelectOutcome {
        if self.completed || self.selection.is_some() {
            return SelectOutcome::Ignored;
        }
        let Some(option) = self.current_item().option(option_id) else {
            return SelectOutcome::Ignored;
        };
        let correct = option.is_correct();

        self.selection = Some(option_id);
        if correct {
            self.score = self.score.saturating_add(1);
            SelectOutcome::Correct
        } else {
            SelectOutcome::Incorrect
        }
    }

    /// Move to the next item, or complete after the last one.
    ///
    /// Ignored without a selection for the current item.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.completed || self.selection.is_none() {
            return AdvanceOutcome::Ignored;
        }

        if self.index + 1 < self.items.len() {
            self.index += 1;
            self.selection = None;
            AdvanceOutcome::Next { index: self.index }
        } else {
            self.completed = true;
            AdvanceOutcome::Completed {
                final_score: self.score,
            }
        }
    }

    /// Start over from the first item with a zero score.
    pub fn reset(&mut self) {
        self.index = 0;
        self.selection = None;
        self.score = 0;
        self.completed = false;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
