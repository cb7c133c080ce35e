use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use buddy_core::model::{OptionId, SimulationSettings};
use buddy_core::time::after;
use buddy_core::{AdvanceOutcome, Catalog, QuizEngine, SelectOutcome};

use crate::error::QuizFlowError;

//
// ─── CELEBRATION ───────────────────────────────────────────────────────────────
//

/// One confetti star; coordinates are fractions of the screen in `0.0..1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfettiStar {
    pub id: u16,
    pub x: f32,
    pub y: f32,
}

/// Decorative burst shown after a correct answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    generation: u64,
    stars: Vec<ConfettiStar>,
    ends_at: DateTime<Utc>,
}

impl Celebration {
    fn burst<R: Rng + ?Sized>(
        generation: u64,
        count: u16,
        now: DateTime<Utc>,
        lasts: Duration,
        rng: &mut R,
    ) -> Self {
        let stars = (0..count)
            .map(|id| ConfettiStar {
                id,
                x: rng.random::<f32>(),
                y: rng.random::<f32>(),
            })
            .collect();
        Self {
            generation,
            stars,
            ends_at: after(now, lasts),
        }
    }

    /// Increases with every correct answer in the flow.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn stars(&self) -> &[ConfettiStar] {
        &self.stars
    }

    #[must_use]
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.ends_at
    }
}

//
// ─── FEEDBACK / REPORT ─────────────────────────────────────────────────────────
//

/// Reaction shown once an answer is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

impl Feedback {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Correct => "Awesome! You got it right!",
            Self::Incorrect => "Good try! Let's learn together!",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Correct => "🎉",
            Self::Incorrect => "😊",
        }
    }
}

/// Final tally of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizReport {
    pub score: u32,
    pub total: usize,
    /// One entry per item; the first `score` are filled.
    pub stars: Vec<bool>,
}

impl QuizReport {
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "You got {} out of {} questions right!",
            self.score, self.total
        )
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        usize::try_from(self.score).is_ok_and(|score| score == self.total)
    }
}

//
// ─── FLOW ──────────────────────────────────────────────────────────────────────
//

/// A quiz engine plus its decorative celebration.
///
/// The celebration never gates engine transitions: selecting and advancing
/// behave the same whether or not confetti is on screen.
pub struct QuizFlow {
    engine: QuizEngine,
    celebration_len: Duration,
    confetti_count: u16,
    celebration: Option<Celebration>,
    generation: u64,
}

impl QuizFlow {
    #[must_use]
    pub fn new(engine: QuizEngine, settings: &SimulationSettings) -> Self {
        Self {
            engine,
            celebration_len: settings.celebration(),
            confetti_count: settings.confetti_count(),
            celebration: None,
            generation: 0,
        }
    }

    /// Start a flow over the catalog quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Config` if the catalog quiz is unusable.
    pub fn from_catalog(
        catalog: &Catalog,
        settings: &SimulationSettings,
    ) -> Result<Self, QuizFlowError> {
        Ok(Self::new(catalog.quiz_engine()?, settings))
    }

    #[must_use]
    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    /// Forward a selection to the engine; a correct one starts a new celebration.
    pub fn select<R: Rng + ?Sized>(
        &mut self,
        option_id: OptionId,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> SelectOutcome {
        let outcome = self.engine.select_option(option_id);
        tracing::debug!(
            item = %self.engine.current_item().id(),
            option = %option_id,
            ?outcome,
            "quiz selection"
        );

        if outcome.is_correct() {
            self.generation += 1;
            self.celebration = Some(Celebration::burst(
                self.generation,
                self.confetti_count,
                now,
                self.celebration_len,
                rng,
            ));
        }
        outcome
    }

    pub fn advance(&mut self) -> AdvanceOutcome {
        let outcome = self.engine.advance();
        match outcome {
            AdvanceOutcome::Completed { final_score } => {
                tracing::info!(
                    final_score,
                    total = self.engine.item_count(),
                    "quiz completed"
                );
            }
            AdvanceOutcome::Next { index } => tracing::debug!(index, "quiz advanced"),
            AdvanceOutcome::Ignored => tracing::debug!("advance ignored without a selection"),
        }
        outcome
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.celebration = None;
        tracing::debug!("quiz reset");
    }

    /// Feedback for the current item once an answer is picked.
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        if self.engine.is_complete() {
            return None;
        }
        self.engine.selected_option().map(|option| {
            if option.is_correct() {
                Feedback::Correct
            } else {
                Feedback::Incorrect
            }
        })
    }

    #[must_use]
    pub fn advance_label(&self) -> &'static str {
        if self.engine.is_last_item() {
            "See Results"
        } else {
            "Next Question"
        }
    }

    /// The celebration still on screen at `now`.
    #[must_use]
    pub fn celebration(&self, now: DateTime<Utc>) -> Option<&Celebration> {
        self.celebration
            .as_ref()
            .filter(|celebration| celebration.is_active(now))
    }

    /// Drop a finished celebration; returns whether one was removed.
    pub fn expire_celebration(&mut self, now: DateTime<Utc>) -> bool {
        if self
            .celebration
            .as_ref()
            .is_some_and(|celebration| !celebration.is_active(now))
        {
            self.celebration = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn report(&self) -> Option<QuizReport> {
        let score = self.engine.final_score()?;
        let total = self.engine.item_count();
        let filled = usize::try_from(score).unwrap_or(total);
        Some(QuizReport {
            score,
            total,
            stars: (0..total).map(|idx| idx < filled).collect(),
        })
    }
}

impl fmt::Debug for QuizFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizFlow")
            .field("state", &self.engine.state())
            .field("score", &self.engine.score())
            .field("generation", &self.generation)
            .field("celebrating", &self.celebration.is_some())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
