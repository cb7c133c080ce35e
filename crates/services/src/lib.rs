#![forbid(unsafe_code)]

pub mod chat;
pub mod error;
pub mod picker;
pub mod quiz_flow;
pub mod rewards;
pub mod scanner;

pub use buddy_core::Clock;

pub use chat::{MicOutcome, VoiceChat};
pub use error::{ChatError, QuizFlowError, ScannerError};
pub use quiz_flow::{Celebration, ConfettiStar, Feedback, QuizFlow, QuizReport};
pub use rewards::{RewardsService, RewardsSummary};
pub use scanner::{ObjectScanner, ScanState};
