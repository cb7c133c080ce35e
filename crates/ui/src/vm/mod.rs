mod chat_vm;
mod quiz_vm;
mod rewards_vm;

pub use chat_vm::{BubbleVm, MicVm, map_bubbles, map_mic};
pub use quiz_vm::{
    ConfettiVm, QuizCompletionVm, QuizFeedbackVm, QuizOptionVm, QuizScreenVm, map_quiz_screen,
};
pub use rewards_vm::{BadgeVm, RewardsVm, StatVm, map_rewards, reward_icon};
