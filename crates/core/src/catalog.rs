//! Built-in learning content.

use thiserror::Error;

use crate::error::Error;
use crate::model::{
    AnswerOption, Badge, BadgeId, DiscoverableObject, QuizItem, QuizItemDraft, RewardIcon, Stat,
};
use crate::quiz::{QuizConfigError, QuizEngine};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no discoverable objects")]
    NoObjects,
    #[error("catalog has no learner lines")]
    NoLearnerLines,
    #[error("catalog has no buddy replies")]
    NoBuddyReplies,
}

pub const BUDDY_GREETING: &str =
    "Hi there! I'm your Learning Buddy! Tell me what you'd like to learn about today! 😊";

const LEARNER_LINES: [&str; 5] = [
    "I want to learn about animals!",
    "Can you tell me about the ocean?",
    "I like dinosaurs!",
    "How do airplanes fly?",
    "What makes the rainbow?",
];

const BUDDY_REPLIES: [&str; 8] = [
    "That's awesome! Tell me more! 🌟",
    "Wow, you're so smart! 🧠",
    "I love learning with you! ❤️",
    "That sounds super cool! 🚀",
    "You're doing great! Keep going! 👏",
    "What else would you like to know? 🤔",
    "That's a great question! 💭",
    "I'm so proud of you! 🌈",
];

/// All static content the app shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    quiz: Vec<QuizItem>,
    objects: Vec<DiscoverableObject>,
    greeting: String,
    learner_lines: Vec<String>,
    buddy_replies: Vec<String>,
    badges: Vec<Badge>,
    stats: Vec<Stat>,
}

impl Catalog {
    /// The content shipped with the app.
    ///
    /// # Errors
    ///
    /// Returns an error if any built-in entry fails validation.
    pub fn builtin() -> Result<Self, Error> {
        let quiz = builtin_quiz()
            .into_iter()
            .map(QuizItemDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;

        let objects = vec![
            DiscoverableObject::new(
                "Apple",
                "🍎",
                [
                    "Apples grow on trees!",
                    "They come in red, green, and yellow",
                    "Great for healthy snacks!",
                ],
            )?,
            DiscoverableObject::new(
                "Dog",
                "🐕",
                [
                    "Dogs are loyal friends!",
                    "They love to play and run",
                    "Dogs help keep us safe",
                ],
            )?,
            DiscoverableObject::new(
                "Car",
                "🚗",
                [
                    "Cars help us travel far!",
                    "They have four wheels",
                    "Some cars are electric!",
                ],
            )?,
        ];

        let badges = vec![
            badge(1, "Quiz Master", "Completed 5 quizzes!", RewardIcon::Trophy, true, 100)?,
            badge(2, "Explorer", "Discovered 10 objects!", RewardIcon::Target, true, 100)?,
            badge(3, "Chatterbox", "Had 3 voice conversations!", RewardIcon::Heart, false, 67)?,
            badge(4, "Speed Learner", "Learn 20 new things!", RewardIcon::Zap, false, 45)?,
            badge(5, "Star Student", "Get 15 perfect scores!", RewardIcon::Star, false, 20)?,
            badge(6, "Curious Mind", "Ask 50 questions!", RewardIcon::Award, false, 12)?,
        ];

        let stats = vec![
            Stat::new("Total Stars", 847, RewardIcon::Star),
            Stat::new("Quizzes Completed", 23, RewardIcon::Trophy),
            Stat::new("Objects Discovered", 15, RewardIcon::Target),
            Stat::new("Learning Streak", 7, RewardIcon::Zap),
        ];

        Ok(Self {
            quiz,
            objects,
            greeting: BUDDY_GREETING.to_owned(),
            learner_lines: LEARNER_LINES.iter().map(|line| (*line).to_owned()).collect(),
            buddy_replies: BUDDY_REPLIES.iter().map(|line| (*line).to_owned()).collect(),
            badges,
            stats,
        })
    }

    #[must_use]
    pub fn quiz(&self) -> &[QuizItem] {
        &self.quiz
    }

    /// A fresh engine over the catalog quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizConfigError` if the quiz is empty or has duplicate ids.
    pub fn quiz_engine(&self) -> Result<QuizEngine, QuizConfigError> {
        QuizEngine::new(self.quiz.clone())
    }

    #[must_use]
    pub fn objects(&self) -> &[DiscoverableObject] {
        &self.objects
    }

    #[must_use]
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    #[must_use]
    pub fn learner_lines(&self) -> &[String] {
        &self.learner_lines
    }

    #[must_use]
    pub fn buddy_replies(&self) -> &[String] {
        &self.buddy_replies
    }

    #[must_use]
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    #[must_use]
    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    /// Replace the quiz, e.g. with authored drafts.
    ///
    /// # Errors
    ///
    /// Returns `QuizConfigError` for invalid drafts, an empty list, or
    /// duplicate ids.
    pub fn with_quiz(mut self, drafts: Vec<QuizItemDraft>) -> Result<Self, QuizConfigError> {
        self.quiz = QuizEngine::from_drafts(drafts)?.items().to_vec();
        Ok(self)
    }

    /// Replace the discoverable objects.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NoObjects` for an empty list.
    pub fn with_objects(mut self, objects: Vec<DiscoverableObject>) -> Result<Self, CatalogError> {
        if objects.is_empty() {
            return Err(CatalogError::NoObjects);
        }
        self.objects = objects;
        Ok(self)
    }

    /// Replace the canned chat lines.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when either list is empty.
    pub fn with_chat_lines(
        mut self,
        learner_lines: Vec<String>,
        buddy_replies: Vec<String>,
    ) -> Result<Self, CatalogError> {
        if learner_lines.is_empty() {
            return Err(CatalogError::NoLearnerLines);
        }
        if buddy_replies.is_empty() {
            return Err(CatalogError::NoBuddyReplies);
        }
        self.learner_lines = learner_lines;
        self.buddy_replies = buddy_replies;
        Ok(self)
    }
}

fn builtin_quiz() -> Vec<QuizItemDraft> {
    vec![
        QuizItemDraft::new(
            1,
            "Which animal says 'Moo'?",
            vec![
                AnswerOption::wrong(1, "Dog", "🐕"),
                AnswerOption::correct(2, "Cow", "🐄"),
                AnswerOption::wrong(3, "Cat", "🐱"),
                AnswerOption::wrong(4, "Bird", "🐦"),
            ],
        ),
        QuizItemDraft::new(
            2,
            "What color do you get when you mix red and yellow?",
            vec![
                AnswerOption::wrong(1, "Purple", "🟣"),
                AnswerOption::wrong(2, "Green", "🟢"),
                AnswerOption::correct(3, "Orange", "🟠"),
                AnswerOption::wrong(4, "Blue", "🔵"),
            ],
        ),
        QuizItemDraft::new(
            3,
            "How many legs does a spider have?",
            vec![
                AnswerOption::wrong(1, "Six", "6️⃣"),
                AnswerOption::wrong(2, "Four", "4️⃣"),
                AnswerOption::correct(3, "Eight", "8️⃣"),
                AnswerOption::wrong(4, "Ten", "🔟"),
            ],
        ),
    ]
}

fn badge(
    id: u64,
    name: &str,
    description: &str,
    icon: RewardIcon,
    earned: bool,
    progress: u8,
) -> Result<Badge, Error> {
    Ok(Badge::new(BadgeId::new(id), name, description, icon, earned, progress)?)
}
