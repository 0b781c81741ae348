//! Commands for the Player Statistics context.

use ecosort_core::command::Command;
use uuid::Uuid;

use super::record::CompletedGame;

/// Command to fold a finished game into the lifetime record.
#[derive(Debug, Clone)]
pub struct RecordCompletedGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The finished game.
    pub game: CompletedGame,
}

impl Command for RecordCompletedGame {
    fn command_type(&self) -> &'static str {
        "stats.record_completed_game"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to wipe the lifetime record.
#[derive(Debug, Clone)]
pub struct ResetStats {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ResetStats {
    fn command_type(&self) -> &'static str {
        "stats.reset_stats"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
