use buddy_core::model::RewardIcon;
use services::RewardsService;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatVm {
    pub label: String,
    pub value: String,
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeVm {
    pub key: u64,
    pub name: String,
    pub description: String,
    pub icon: &'static str,
    pub class: &'static str,
    pub progress_style: String,
    pub progress_label: String,
    pub earned: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardsVm {
    pub progress_style: String,
    pub progress_label: String,
    pub badges_heading: String,
    pub stats: Vec<StatVm>,
    pub badges: Vec<BadgeVm>,
}

#[must_use]
pub fn reward_icon(icon: RewardIcon) -> &'static str {
    match icon {
        RewardIcon::Trophy => "🏆",
        RewardIcon::Target => "🎯",
        RewardIcon::Heart => "❤️",
        RewardIcon::Zap => "⚡",
        RewardIcon::Star => "⭐",
        RewardIcon::Award => "🏅",
    }
}

#[must_use]
pub fn map_rewards(rewards: &RewardsService) -> RewardsVm {
    let summary = rewards.summary();

    let stats = rewards
        .stats()
        .iter()
        .map(|stat| StatVm {
            label: stat.label.clone(),
            value: stat.value.to_string(),
            icon: reward_icon(stat.icon),
        })
        .collect();

    let badges = rewards
        .badges()
        .iter()
        .map(|badge| BadgeVm {
            key: badge.id().value(),
            name: badge.name().to_string(),
            description: badge.description().to_string(),
            icon: reward_icon(badge.icon()),
            class: if badge.is_earned() {
                "badge badge--earned"
            } else {
                "badge badge--locked"
            },
            progress_style: format!("width: {}%;", badge.progress()),
            progress_label: format!("{}%", badge.progress()),
            earned: badge.is_earned(),
        })
        .collect();

    RewardsVm {
        progress_style: format!("width: {}%;", summary.average_progress),
        progress_label: format!("{}% Complete", summary.average_progress),
        badges_heading: format!("My Badges ({}/{})", summary.earned, summary.total),
        stats,
        badges,
    }
}
