use serde::Serialize;

use buddy_core::Catalog;
use buddy_core::model::{Badge, Stat};

/// Aggregate view of badge progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewardsSummary {
    pub earned: usize,
    pub total: usize,
    /// Mean badge progress, rounded to a whole percent.
    pub average_progress: u8,
}

/// Read-only rewards data for the rewards screen.
#[derive(Debug, Clone)]
pub struct RewardsService {
    badges: Vec<Badge>,
    stats: Vec<Stat>,
}

impl RewardsService {
    #[must_use]
    pub fn new(badges: Vec<Badge>, stats: Vec<Stat>) -> Self {
        Self { badges, stats }
    }

    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.badges().to_vec(), catalog.stats().to_vec())
    }

    #[must_use]
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    #[must_use]
    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    pub fn earned_badges(&self) -> impl Iterator<Item = &Badge> {
        self.badges.iter().filter(|badge| badge.is_earned())
    }

    #[must_use]
    pub fn summary(&self) -> RewardsSummary {
        let total = self.badges.len();
        let sum: u32 = self.badges.iter().map(|badge| u32::from(badge.progress())).sum();
        let average_progress = if total == 0 {
            0
        } else {
            let total = u32::try_from(total).unwrap_or(u32::MAX);
            // Round half up; progress values never exceed 100, so neither does the mean.
            u8::try_from((sum * 2 + total) / (total * 2)).unwrap_or(100)
        };

        RewardsSummary {
            earned: self.earned_badges().count(),
            total,
            average_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buddy_core::model::{BadgeId, RewardIcon};

    #[test]
    fn builtin_summary() {
        let rewards = RewardsService::from_catalog(&Catalog::builtin().unwrap());
        let summary = rewards.summary();
        assert_eq!(summary.earned, 2);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.average_progress, 57);

        let earned: Vec<_> = rewards.earned_badges().map(Badge::name).collect();
        assert_eq!(earned, ["Quiz Master", "Explorer"]);
    }

    #[test]
    fn average_rounds_half_up() {
        let badge = |id, progress| {
            Badge::new(BadgeId::new(id), "b", "", RewardIcon::Star, false, progress).unwrap()
        };
        let rewards = RewardsService::new(vec![badge(1, 50), badge(2, 51)], Vec::new());
        assert_eq!(rewards.summary().average_progress, 51);
    }

    #[test]
    fn no_badges_means_zero_progress() {
        let summary = RewardsService::new(Vec::new(), Vec::new()).summary();
        assert_eq!(summary.average_progress, 0);
        assert_eq!(summary.earned, 0);
    }
}
