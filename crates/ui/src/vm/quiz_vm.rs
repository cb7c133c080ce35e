use chrono::{DateTime, Utc};

use services::{Feedback, QuizFlow};

const OPTION_COLORS: [&str; 4] = ["blue", "green", "yellow", "red"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub id: u64,
    pub label: String,
    pub emoji: String,
    pub class: String,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizFeedbackVm {
    pub class: &'static str,
    pub emoji: &'static str,
    pub message: &'static str,
    pub advance_label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiVm {
    pub key: String,
    pub style: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCompletionVm {
    pub message: String,
    /// CSS class per star; filled stars come first.
    pub stars: Vec<&'static str>,
}

/// Everything the quiz screen renders for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizScreenVm {
    pub score_label: String,
    pub question_label: String,
    pub position_label: String,
    pub progress_style: String,
    pub prompt: String,
    pub options: Vec<QuizOptionVm>,
    pub feedback: Option<QuizFeedbackVm>,
    pub confetti: Vec<ConfettiVm>,
    pub completion: Option<QuizCompletionVm>,
}

#[must_use]
pub fn map_quiz_screen(flow: &QuizFlow, now: DateTime<Utc>) -> QuizScreenVm {
    let engine = flow.engine();
    let progress = engine.progress();
    let item = engine.current_item();
    let selection = engine.selection();

    let options = item
        .options()
        .iter()
        .enumerate()
        .map(|(position, option)| {
            let color = OPTION_COLORS[position % OPTION_COLORS.len()];
            let mut class = format!("quiz-option quiz-option--{color}");
            // Once answered, the right option is always revealed.
            if selection.is_some() {
                if option.is_correct() {
                    class.push_str(" quiz-option--correct");
                } else if selection == Some(option.id()) {
                    class.push_str(" quiz-option--wrong");
                }
            }
            QuizOptionVm {
                id: option.id().value(),
                label: option.label().to_string(),
                emoji: option.emoji().to_string(),
                class,
                disabled: selection.is_some(),
            }
        })
        .collect();

    let feedback = flow.feedback().map(|feedback| QuizFeedbackVm {
        class: match feedback {
            Feedback::Correct => "quiz-feedback quiz-feedback--correct",
            Feedback::Incorrect => "quiz-feedback quiz-feedback--incorrect",
        },
        emoji: feedback.emoji(),
        message: feedback.message(),
        advance_label: flow.advance_label(),
    });

    let confetti = flow
        .celebration(now)
        .map(|celebration| {
            celebration
                .stars()
                .iter()
                .map(|star| ConfettiVm {
                    key: format!("{}-{}", celebration.generation(), star.id),
                    style: format!(
                        "left: {:.1}%; top: {:.1}%;",
                        star.x * 100.0,
                        star.y * 100.0
                    ),
                })
                .collect()
        })
        .unwrap_or_default();

    let completion = flow.report().map(|report| QuizCompletionVm {
        message: report.message(),
        stars: report
            .stars
            .iter()
            .map(|filled| {
                if *filled {
                    "result-star result-star--filled"
                } else {
                    "result-star"
                }
            })
            .collect(),
    });

    QuizScreenVm {
        score_label: engine.score().to_string(),
        question_label: format!("Question {}", progress.position),
        position_label: format!("{} of {}", progress.position, progress.total),
        progress_style: format!("width: {}%;", progress.percent),
        prompt: item.prompt().to_string(),
        options,
        feedback,
        confetti,
        completion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buddy_core::Catalog;
    use buddy_core::model::{OptionId, SimulationSettings};
    use buddy_core::time::fixed_now;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn flow() -> QuizFlow {
        QuizFlow::from_catalog(&Catalog::builtin().unwrap(), &SimulationSettings::default())
            .unwrap()
    }

    #[test]
    fn fresh_quiz_has_enabled_options_and_no_feedback() {
        let vm = map_quiz_screen(&flow(), fixed_now());
        assert_eq!(vm.question_label, "Question 1");
        assert_eq!(vm.position_label, "1 of 3");
        assert_eq!(vm.progress_style, "width: 33%;");
        assert_eq!(vm.score_label, "0");
        assert_eq!(vm.options.len(), 4);
        assert!(vm.options.iter().all(|option| !option.disabled));
        assert_eq!(vm.options[0].class, "quiz-option quiz-option--blue");
        assert!(vm.feedback.is_none());
        assert!(vm.confetti.is_empty());
        assert!(vm.completion.is_none());
    }

    #[test]
    fn wrong_pick_reveals_correct_option() {
        let mut flow = flow();
        let mut rng = StdRng::seed_from_u64(1);
        flow.select(OptionId::new(1), fixed_now(), &mut rng);

        let vm = map_quiz_screen(&flow, fixed_now());
        assert!(vm.options[0].class.ends_with("quiz-option--wrong"));
        assert!(vm.options[1].class.ends_with("quiz-option--correct"));
        assert_eq!(vm.options[2].class, "quiz-option quiz-option--yellow");
        assert!(vm.options.iter().all(|option| option.disabled));

        let feedback = vm.feedback.expect("feedback");
        assert_eq!(feedback.emoji, "😊");
        assert_eq!(feedback.advance_label, "Next Question");
        assert!(vm.confetti.is_empty());
    }

    #[test]
    fn correct_pick_shows_confetti() {
        let mut flow = flow();
        let mut rng = StdRng::seed_from_u64(1);
        flow.select(OptionId::new(2), fixed_now(), &mut rng);

        let vm = map_quiz_screen(&flow, fixed_now());
        assert_eq!(vm.score_label, "1");
        assert_eq!(vm.confetti.len(), 20);
        assert!(vm.confetti[0].style.starts_with("left: "));
        assert_eq!(vm.feedback.map(|feedback| feedback.emoji), Some("🎉"));
    }

    #[test]
    fn completion_fills_stars_by_score() {
        let mut flow = flow();
        let mut rng = StdRng::seed_from_u64(1);
        for option in [2, 1, 3] {
            flow.select(OptionId::new(option), fixed_now(), &mut rng);
            flow.advance();
        }
        let completion = map_quiz_screen(&flow, fixed_now())
            .completion
            .expect("completed");
        assert_eq!(completion.message, "You got 2 out of 3 questions right!");
        assert_eq!(
            completion.stars,
            [
                "result-star result-star--filled",
                "result-star result-star--filled",
                "result-star"
            ]
        );
    }
}
