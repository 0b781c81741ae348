//! Sound cue signals. Synthesis is up to the front end.

use serde::Serialize;

/// A sound the front end should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    /// An item was thrown.
    Throw,
    /// A correct answer or a started game.
    Success,
    /// A correct answer on a long streak.
    Streak,
    /// A wrong answer.
    Error,
    /// A new best score.
    Celebration,
}

/// Streak from which a correct answer plays [`SoundCue::Streak`].
pub const STREAK_SOUND_THRESHOLD: u32 = 5;

/// Cues for a scored choice, in play order.
#[must_use]
pub fn choice_cues(is_correct: bool, streak_after: u32) -> Vec<SoundCue> {
    let outcome = if !is_correct {
        SoundCue::Error
    } else if streak_after >= STREAK_SOUND_THRESHOLD {
        SoundCue::Streak
    } else {
        SoundCue::Success
    };
    vec![SoundCue::Throw, outcome]
}

/// Cue for the end of a game.
#[must_use]
pub fn game_over_cue(is_new_best: bool) -> SoundCue {
    if is_new_best {
        SoundCue::Celebration
    } else {
        SoundCue::Success
    }
}
