use buddy_core::model::{AnswerOption, OptionId, QuizItemDraft};
use buddy_core::{QuizEngine, QuizState, SelectOutcome};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Select(u64),
    Advance,
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u64..6).prop_map(Op::Select),
        3 => Just(Op::Advance),
        1 => Just(Op::Reset),
    ]
}

/// One item per entry; the value is the 1-based correct option.
fn engine(correct: &[u64]) -> QuizEngine {
    let drafts = correct
        .iter()
        .zip(1u64..)
        .map(|(&right, id)| {
            let options = (1..=4)
                .map(|opt| {
                    AnswerOption::new(OptionId::new(opt), format!("opt{opt}"), "", opt == right)
                })
                .collect();
            QuizItemDraft::new(id, format!("Question {id}"), options)
        })
        .collect();
    QuizEngine::from_drafts(drafts).unwrap()
}

proptest! {
    #[test]
    fn engine_invariants_hold_for_any_call_sequence(
        correct in prop::collection::vec(1u64..=4, 1..=5),
        ops in prop::collection::vec(op(), 0..200),
    ) {
        let mut engine = engine(&correct);
        let total = engine.item_count();
        let mut correct_picks = 0u32;

        for op in ops {
            let before_score = engine.score();
            let before_index = engine.current_index();
            let before_state = engine.state();

            match op {
                Op::Select(id) => {
                    if engine.select_option(OptionId::new(id)) == SelectOutcome::Correct {
                        correct_picks += 1;
                    }
                }
                Op::Advance => {
                    engine.advance();
                }
                Op::Reset => {
                    engine.reset();
                    correct_picks = 0;
                    prop_assert_eq!(
                        engine.state(),
                        QuizState::InProgress { index: 0, selection: None }
                    );
                    prop_assert_eq!(engine.score(), 0);
                    continue;
                }
            }

            prop_assert!(engine.score() >= before_score);
            prop_assert!(engine.current_index() >= before_index);
            prop_assert!(usize::try_from(engine.score()).unwrap() <= total);
            prop_assert_eq!(engine.score(), correct_picks);
            if let QuizState::Completed { .. } = before_state {
                prop_assert_eq!(engine.state(), before_state);
            }
            if let Some(final_score) = engine.final_score() {
                prop_assert_eq!(final_score, engine.score());
            }
        }
    }
}
