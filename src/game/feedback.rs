//! Sound and haptic feedback hooks
//!
//! The game only announces what happened; playing audio or vibrating is up
//! to the host. Calls are fire-and-forget.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    QuestComplete,
    LevelUp,
    Achievement,
}

impl Sound {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QuestComplete => "success",
            Self::LevelUp => "levelup",
            Self::Achievement => "achievement",
        }
    }
}

/// Receives feedback cues from the game
pub trait Feedback: Send + Sync {
    fn play(&self, sound: Sound);
}

/// Feedback sink that only logs the cue
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFeedback;

impl Feedback for LogFeedback {
    fn play(&self, sound: Sound) {
        debug!(sound = sound.as_str(), "Feedback cue");
    }
}
