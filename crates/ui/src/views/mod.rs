pub(crate) mod chat;
mod nav;
pub(crate) mod objects;
pub(crate) mod quiz;
mod rewards;
mod state;
mod timers;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use chat::ChatView;
pub use nav::{BottomNav, ScreenHeader};
pub use objects::ObjectsView;
pub use quiz::QuizView;
pub use rewards::RewardsView;
pub use state::ViewError;
pub use welcome::WelcomeView;
