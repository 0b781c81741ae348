//! Commands for the Game Session context.

use ecosort_catalog::Difficulty;
use ecosort_core::command::Command;
use uuid::Uuid;

/// Command to start a new game.
#[derive(Debug, Clone)]
pub struct StartGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The city whose rules are played.
    pub city_id: String,
    /// Optional item difficulty filter.
    pub difficulty: Option<Difficulty>,
    /// Best net score before this game, for new-best detection.
    pub previous_best: i64,
}

impl Command for StartGame {
    fn command_type(&self) -> &'static str {
        "session.start_game"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to throw the current item into a bin.
#[derive(Debug, Clone)]
pub struct SubmitChoice {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The chosen bin.
    pub bin_id: String,
}

impl Command for SubmitChoice {
    fn command_type(&self) -> &'static str {
        "session.submit_choice"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to leave the feedback screen and move to the next round.
#[derive(Debug, Clone)]
pub struct AdvanceRound {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for AdvanceRound {
    fn command_type(&self) -> &'static str {
        "session.advance_round"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
