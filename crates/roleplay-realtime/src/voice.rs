//! Emotion to voice mapping.

/// Voice used for any emotion without a dedicated voice.
pub const DEFAULT_VOICE: &str = "sage";

const VOICES: [(&str, &str); 4] = [
    ("happy", "alloy"),
    ("sad", "verse"),
    ("angry", "coral"),
    ("neutral", DEFAULT_VOICE),
];

/// Returns the voice for an emotion label, or [`DEFAULT_VOICE`].
///
/// Labels are matched ignoring surrounding whitespace and ASCII case.
#[must_use]
pub fn voice_for_emotion(emotion: Option<&str>) -> &'static str {
    let Some(emotion) = emotion.map(str::trim).filter(|e| !e.is_empty()) else {
        return DEFAULT_VOICE;
    };
    VOICES
        .iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(emotion))
        .map_or(DEFAULT_VOICE, |&(_, voice)| voice)
}
