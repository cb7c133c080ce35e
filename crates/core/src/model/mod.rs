mod chat;
mod discovery;
mod ids;
mod quiz;
mod reward;
mod settings;

pub use ids::{BadgeId, BubbleId, OptionId, ParseIdError, QuizItemId};

pub use chat::{Speaker, SpeechBubble};
pub use discovery::{DiscoverableObject, ObjectError};
pub use quiz::{AnswerOption, OPTIONS_PER_ITEM, QuizItem, QuizItemDraft, QuizItemError};
pub use reward::{Badge, BadgeError, FULL_PROGRESS, RewardIcon, Stat};
pub use settings::{
    DEFAULT_CELEBRATION_MS, DEFAULT_CONFETTI_COUNT, DEFAULT_REPLY_DELAY_MS, DEFAULT_SCAN_DELAY_MS,
    MAX_DELAY_MS, SettingsError, SimulationSettings, SimulationSettingsDraft,
};
