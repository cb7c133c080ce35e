#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod quiz;
pub mod time;

pub use catalog::Catalog;
pub use error::Error;
pub use quiz::{AdvanceOutcome, QuizConfigError, QuizEngine, QuizProgress, QuizState, SelectOutcome};
pub use time::Clock;
