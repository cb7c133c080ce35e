use std::time::Duration;

use buddy_core::model::{OptionId, SimulationSettings, Speaker};
use buddy_core::time::fixed_clock;
use buddy_core::{Catalog, QuizState};
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{ObjectScanner, QuizFlow, RewardsService, VoiceChat};

#[test]
fn quiz_flow_runs_to_completion_and_resets() {
    let catalog = Catalog::builtin().unwrap();
    let settings = SimulationSettings::default();
    let mut clock = fixed_clock();
    let mut rng = StdRng::seed_from_u64(42);
    let mut flow = QuizFlow::from_catalog(&catalog, &settings).unwrap();

    // Cow (right), Green (wrong), Eight (right).
    for option in [2, 2, 3] {
        flow.select(OptionId::new(option), clock.now(), &mut rng);
        clock.advance(Duration::from_millis(500));
        flow.advance();
    }

    assert_eq!(flow.engine().state(), QuizState::Completed { final_score: 2 });
    let report = flow.report().unwrap();
    assert_eq!(report.message(), "You got 2 out of 3 questions right!");

    flow.reset();
    assert_eq!(
        flow.engine().state(),
        QuizState::InProgress {
            index: 0,
            selection: None
        }
    );
}

#[test]
fn scanner_and_chat_follow_their_delays() {
    let catalog = Catalog::builtin().unwrap();
    let settings = SimulationSettings::default();
    let mut clock = fixed_clock();
    let mut rng = StdRng::seed_from_u64(8);

    let mut scanner = ObjectScanner::from_catalog(&catalog, &settings).unwrap();
    scanner.start_scan(clock.now());
    clock.advance(settings.scan_delay());
    let found = scanner.poll(clock.now(), &mut rng).expect("scan finished");
    assert!(catalog.objects().contains(found));

    let mut chat = VoiceChat::from_catalog(&catalog, &settings, clock.now()).unwrap();
    chat.toggle_microphone(clock.now(), &mut rng);
    chat.toggle_microphone(clock.now(), &mut rng);
    clock.advance(settings.reply_delay());
    assert_eq!(chat.poll(clock.now(), &mut rng), 1);

    let speakers: Vec<_> = chat.transcript().iter().map(|bubble| bubble.speaker).collect();
    assert_eq!(speakers, [Speaker::Buddy, Speaker::Learner, Speaker::Buddy]);
}

#[test]
fn rewards_overview_matches_builtin_badges() {
    let rewards = RewardsService::from_catalog(&Catalog::builtin().unwrap());
    assert_eq!(rewards.summary().average_progress, 57);
    assert_eq!(rewards.stats()[0].label, "Total Stars");
}
