use buddy_core::model::{Speaker, SpeechBubble};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BubbleVm {
    pub key: u64,
    pub text: String,
    pub class: &'static str,
    pub show_buddy_tag: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MicVm {
    pub class: &'static str,
    pub icon: &'static str,
    pub hint: &'static str,
    pub recording: bool,
}

#[must_use]
pub fn map_bubbles(transcript: &[SpeechBubble]) -> Vec<BubbleVm> {
    transcript
        .iter()
        .map(|bubble| BubbleVm {
            key: bubble.id.value(),
            text: bubble.text.clone(),
            class: match bubble.speaker {
                Speaker::Learner => "bubble bubble--learner",
                Speaker::Buddy => "bubble bubble--buddy",
            },
            show_buddy_tag: bubble.speaker == Speaker::Buddy,
        })
        .collect()
}

#[must_use]
pub fn map_mic(recording: bool) -> MicVm {
    if recording {
        MicVm {
            class: "mic-button mic-button--recording",
            icon: "⏹️",
            hint: "Tap to stop recording",
            recording,
        }
    } else {
        MicVm {
            class: "mic-button",
            icon: "🎤",
            hint: "Tap to start talking",
            recording,
        }
    }
}
