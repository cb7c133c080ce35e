use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::BadgeId;

/// Progress value of a fully earned badge.
pub const FULL_PROGRESS: u8 = 100;

/// Icon family shared by badges and stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardIcon {
    Trophy,
    Target,
    Heart,
    Zap,
    Star,
    Award,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BadgeError {
    #[error("badge name cannot be empty")]
    EmptyName,

    #[error("progress {0} is above 100")]
    ProgressOutOfRange(u8),

    #[error("earned badge must have full progress, got {0}")]
    EarnedIncomplete(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BadgeRecord")]
pub struct Badge {
    id: BadgeId,
    name: String,
    description: String,
    icon: RewardIcon,
    earned: bool,
    progress: u8,
}

/// Wire shape of a badge; validated into `Badge` on deserialization.
#[derive(Deserialize)]
struct BadgeRecord {
    id: BadgeId,
    name: String,
    description: String,
    icon: RewardIcon,
    earned: bool,
    progress: u8,
}

impl TryFrom<BadgeRecord> for Badge {
    type Error = BadgeError;

    fn try_from(record: BadgeRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.id,
            record.name,
            record.description,
            record.icon,
            record.earned,
            record.progress,
        )
    }
}

impl Badge {
    /// # Errors
    ///
    /// Returns `BadgeError` for a blank name, progress above 100, or an earned
    /// badge whose progress is not 100.
    pub fn new(
        id: BadgeId,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: RewardIcon,
        earned: bool,
        progress: u8,
    ) -> Result<Self, BadgeError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(BadgeError::EmptyName);
        }
        if progress > FULL_PROGRESS {
            return Err(BadgeError::ProgressOutOfRange(progress));
        }
        if earned && progress != FULL_PROGRESS {
            return Err(BadgeError::EarnedIncomplete(progress));
        }

        Ok(Self {
            id,
            name,
            description: description.into(),
            icon,
            earned,
            progress,
        })
    }

    #[must_use]
    pub fn id(&self) -> BadgeId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn icon(&self) -> RewardIcon {
        self.icon
    }

    #[must_use]
    pub fn is_earned(&self) -> bool {
        self.earned
    }

    /// Progress percent in `0..=100`.
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }
}

/// A headline number on the rewards screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u32,
    pub icon: RewardIcon,
}

impl Stat {
    #[must_use]
    pub fn new(label: impl Into<String>, value: u32, icon: RewardIcon) -> Self {
        Self {
            label: label.into(),
            value,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialization_goes_through_validation() {
        let ok = r#"{"id":3,"name":"Chatterbox","description":"","icon":"Heart","earned":false,"progress":67}"#;
        let badge: Badge = serde_json::from_str(ok).unwrap();
        assert_eq!(badge.progress(), 67);

        let earned_early = r#"{"id":3,"name":"Chatterbox","description":"","icon":"Heart","earned":true,"progress":67}"#;
        let err = serde_json::from_str::<Badge>(earned_early).unwrap_err();
        assert!(err.to_string().contains("full progress"), "{err}");

        let blank = r#"{"id":3,"name":"  ","description":"","icon":"Heart","earned":false,"progress":0}"#;
        assert!(serde_json::from_str::<Badge>(blank).is_err());
    }

    #[test]
    fn earned_badge_requires_full_progress() {
        let err = Badge::new(BadgeId::new(1), "Explorer", "", RewardIcon::Target, true, 90)
            .unwrap_err();
        assert_eq!(err, BadgeError::EarnedIncomplete(90));
    }

    #[test]
    fn progress_above_100_rejected() {
        let err = Badge::new(BadgeId::new(1), "Explorer", "", RewardIcon::Target, false, 101)
            .unwrap_err();
        assert_eq!(err, BadgeError::ProgressOutOfRange(101));
    }

    #[test]
    fn unearned_badge_keeps_partial_progress() {
        let badge =
            Badge::new(BadgeId::new(3), "Chatterbox", "Talk!", RewardIcon::Heart, false, 67)
                .unwrap();
        assert!(!badge.is_earned());
        assert_eq!(badge.progress(), 67);
    }
}
