use buddy_core::model::OptionId;

use super::quiz::QuizIntent;
use super::test_harness::{ViewKind, setup_view_harness};
use crate::routes::Screen;

#[test]
fn welcome_view_smoke_renders_title_and_start() {
    let mut harness = setup_view_harness(ViewKind::Welcome);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Learning Buddy"), "missing title in {html}");
    assert!(html.contains("Your fun learning companion!"), "missing subtitle in {html}");
    assert!(html.contains("Start Learning!"), "missing start button in {html}");
}

#[test]
fn objects_view_smoke_renders_idle_camera() {
    let mut harness = setup_view_harness(ViewKind::Objects);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Object Detective"), "missing header in {html}");
    assert!(html.contains("Point at an object"), "missing placeholder in {html}");
    assert!(html.contains("Scan Object"), "missing scan button in {html}");
    assert!(!html.contains("Fun Facts:"), "no object yet in {html}");
}

#[test]
fn chat_view_smoke_renders_greeting() {
    let mut harness = setup_view_harness(ViewKind::Chat);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Voice Chat"), "missing header in {html}");
    assert!(html.contains("bubble--buddy"), "missing greeting bubble in {html}");
    assert!(html.contains("Tap to start talking"), "missing mic hint in {html}");
    assert!(!html.contains("Listening..."), "not recording yet in {html}");
}

#[test]
fn objects_view_scan_stays_pending_on_fixed_clock() {
    let mut harness = setup_view_harness(ViewKind::Objects);
    harness.rebuild();
    let scan = harness.handles.objects.scan();
    assert_eq!(harness.dom.in_runtime(|| harness.handles.objects.is_scanning()), Some(false));

    harness.dom.in_runtime(|| scan.call(()));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Scanning..."), "missing scanning label in {html}");
    assert!(html.contains("camera__frame--scanning"), "missing scanning frame in {html}");
    assert!(!html.contains("Point at an object"), "placeholder still shown in {html}");
    assert!(!html.contains("Fun Facts:"), "scan resolved early in {html}");
    assert_eq!(harness.dom.in_runtime(|| harness.handles.objects.is_scanning()), Some(true));

    // A second tap while scanning changes nothing.
    harness.dom.in_runtime(|| scan.call(()));
    harness.drive();
    assert!(harness.render().contains("Scanning..."));
    assert_eq!(harness.dom.in_runtime(|| harness.handles.objects.is_scanning()), Some(true));
}

#[test]
fn chat_view_mic_toggle_adds_learner_line() {
    let mut harness = setup_view_harness(ViewKind::Chat);
    harness.rebuild();
    let toggle = harness.handles.chat.toggle();

    harness.dom.in_runtime(|| toggle.call(()));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Listening..."), "missing listening bubble in {html}");
    assert!(html.contains("Recording"), "missing recording pill in {html}");
    assert!(html.contains("Tap to stop recording"), "missing stop hint in {html}");
    assert_eq!(harness.dom.in_runtime(|| harness.handles.chat.counts()), Some((1, 0)));

    harness.dom.in_runtime(|| toggle.call(()));
    harness.drive();
    let html = harness.render();
    assert!(!html.contains("Listening..."), "still listening in {html}");
    assert!(html.contains("Tap to start talking"), "missing start hint in {html}");
    assert!(html.contains("bubble--learner"), "missing learner line in {html}");
    // The reply waits on the clock, which is fixed here.
    assert_eq!(harness.dom.in_runtime(|| harness.handles.chat.counts()), Some((2, 1)));
}

#[test]
fn rewards_view_smoke_renders_summary_and_badges() {
    let mut harness = setup_view_harness(ViewKind::Rewards);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("My Rewards"), "missing header in {html}");
    assert!(html.contains("57% Complete"), "missing overall progress in {html}");
    assert!(html.contains("My Badges (2/6)"), "missing badge heading in {html}");
    assert!(html.contains("Quiz Master"), "missing badge in {html}");
    assert!(html.contains("847"), "missing stat in {html}");
}

#[test]
fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Fun Quiz"), "missing header in {html}");
    assert!(html.contains("Question 1"), "missing question label in {html}");
    assert!(html.contains("1 of 3"), "missing position in {html}");
    assert!(html.contains("Cow"), "missing option in {html}");
    assert!(!html.contains("quiz-option--correct"), "nothing answered yet in {html}");
}

#[test]
fn quiz_intents_run_to_completion_and_restart() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let dispatch = harness.handles.quiz.dispatch();

    harness
        .dom
        .in_runtime(|| dispatch.call(QuizIntent::Select(OptionId::new(2))));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Awesome! You got it right!"), "missing feedback in {html}");
    assert!(html.contains("confetti__star"), "missing confetti in {html}");
    assert!(html.contains("Next Question"), "missing advance label in {html}");

    for intent in [
        QuizIntent::Advance,
        QuizIntent::Select(OptionId::new(1)),
        QuizIntent::Advance,
        QuizIntent::Select(OptionId::new(3)),
    ] {
        harness.dom.in_runtime(|| dispatch.call(intent));
        harness.drive();
    }
    assert!(harness.render().contains("See Results"));

    harness.dom.in_runtime(|| dispatch.call(QuizIntent::Advance));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Great Job!"), "missing completion in {html}");
    assert!(
        html.contains("You got 2 out of 3 questions right!"),
        "missing score message in {html}"
    );
    assert_eq!(harness.dom.in_runtime(|| harness.handles.quiz.score()), Some(2));

    harness.dom.in_runtime(|| dispatch.call(QuizIntent::Restart));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Question 1"), "missing restarted quiz in {html}");
    assert_eq!(harness.dom.in_runtime(|| harness.handles.quiz.score()), Some(0));
}

#[test]
fn bottom_nav_marks_current_screen() {
    let mut harness = setup_view_harness(ViewKind::Nav(Screen::Quiz));
    harness.rebuild();
    let html = harness.render();
    for label in ["Home", "Objects", "Chat", "Quiz", "Rewards"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert_eq!(html.matches("nav-item--active").count(), 1);
}
