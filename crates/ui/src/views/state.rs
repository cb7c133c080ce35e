use std::fmt;

/// Why a screen could not start its simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyQuiz,
    NothingToDiscover,
    NoChatLines,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyQuiz => "There are no quiz questions yet.",
            Self::NothingToDiscover => "There is nothing to discover yet.",
            Self::NoChatLines => "Your buddy is taking a nap. Please try again later.",
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
