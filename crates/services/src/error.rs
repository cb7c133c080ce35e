//! Shared error types for the services crate.

use thiserror::Error;

use buddy_core::QuizConfigError;

/// Errors emitted while setting up a `QuizFlow`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizFlowError {
    #[error(transparent)]
    Config(#[from] QuizConfigError),
}

/// Errors emitted by `ObjectScanner`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScannerError {
    #[error("no objects available to discover")]
    NoObjects,
}

/// Errors emitted by `VoiceChat`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChatError {
    #[error("no learner lines to simulate speech with")]
    NoLearnerLines,
    #[error("no buddy replies available")]
    NoBuddyReplies,
}
