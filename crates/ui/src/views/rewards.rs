use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::nav::ScreenHeader;
use crate::vm::map_rewards;

#[component]
pub fn RewardsView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = map_rewards(&ctx.rewards());

    rsx! {
        div { class: "rewards",
            ScreenHeader { title: "My Rewards" }

            section { class: "card rewards__overview",
                div { class: "rewards__glow", "🌟" }
                h3 { "Great Progress!" }
                p { "You're doing amazing! Keep learning!" }
                div { class: "progress",
                    div { class: "progress__fill", style: "{vm.progress_style}" }
                }
                p { class: "progress__label", "{vm.progress_label}" }
            }

            section { class: "rewards__stats",
                for stat in vm.stats.iter() {
                    div { key: "{stat.label}", class: "card stat",
                        span { class: "stat__icon", "{stat.icon}" }
                        p { class: "stat__value", "{stat.value}" }
                        p { class: "stat__label", "{stat.label}" }
                    }
                }
            }

            h3 { class: "rewards__heading", "{vm.badges_heading}" }
            section { class: "rewards__badges",
                for badge in vm.badges.iter() {
                    div { key: "{badge.key}", class: "{badge.class}",
                        if badge.earned {
                            span { class: "badge__ribbon", "⭐" }
                        }
                        div { class: "badge__icon", "{badge.icon}" }
                        h4 { class: "badge__name", "{badge.name}" }
                        p { class: "badge__description", "{badge.description}" }
                        div { class: "progress progress--small",
                            div { class: "progress__fill", style: "{badge.progress_style}" }
                        }
                        p { class: "badge__progress", "{badge.progress_label}" }
                    }
                }
            }

            p { class: "rewards__motivation", "🎯 Keep learning to unlock more badges and earn stars!" }
        }
    }
}
