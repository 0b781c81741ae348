//! Domain events for the Game Session context.

use ecosort_catalog::{Difficulty, EligibleItem};
use ecosort_core::event::{DomainEvent, EventMetadata};
use ecosort_scoring::{ScoringResult, ScoringRules};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::aggregates::GameSummary;

/// Emitted when a game starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStarted {
    /// The session identifier.
    pub session_id: Uuid,
    /// The city being played.
    pub city_id: String,
    /// Difficulty filter, if any.
    pub difficulty: Option<Difficulty>,
    /// Round limit, if any.
    pub round_limit: Option<u32>,
    /// Scoring rules of the game.
    pub rules: ScoringRules,
    /// Best net score before this game.
    pub previous_best: i64,
}

/// Emitted when an item is put in front of the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDrawn {
    /// The session identifier.
    pub session_id: Uuid,
    /// The round the item is shown in.
    pub round: u32,
    /// The drawn item.
    pub item: EligibleItem,
}

/// Emitted when the player picks a bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceSubmitted {
    /// The session identifier.
    pub session_id: Uuid,
    /// The round of the choice.
    pub round: u32,
    /// The chosen bin.
    pub bin_id: String,
}

/// Emitted when a submitted choice has been scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceScored {
    /// The session identifier.
    pub session_id: Uuid,
    /// The scoring outcome.
    pub result: ScoringResult,
}

/// Emitted when the last round has been played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEnded {
    /// The session identifier.
    pub session_id: Uuid,
    /// Final summary.
    pub summary: GameSummary,
}

/// Event type identifier for [`GameStarted`].
pub const GAME_STARTED_EVENT_TYPE: &str = "session.game_started";

/// Event type identifier for [`ItemDrawn`].
pub const ITEM_DRAWN_EVENT_TYPE: &str = "session.item_drawn";

/// Event type identifier for [`ChoiceSubmitted`].
pub const CHOICE_SUBMITTED_EVENT_TYPE: &str = "session.choice_submitted";

/// Event type identifier for [`ChoiceScored`].
pub const CHOICE_SCORED_EVENT_TYPE: &str = "session.choice_scored";

/// Event type identifier for [`GameEnded`].
pub const GAME_ENDED_EVENT_TYPE: &str = "session.game_ended";

/// Event payload variants for the Game Session context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEventKind {
    /// A game has started.
    GameStarted(GameStarted),
    /// An item has been drawn.
    ItemDrawn(ItemDrawn),
    /// A bin has been chosen.
    ChoiceSubmitted(ChoiceSubmitted),
    /// A choice has been scored.
    ChoiceScored(ChoiceScored),
    /// The game is over.
    GameEnded(GameEnded),
}

impl SessionEventKind {
    /// Returns the event type name of this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::GameStarted(_) => GAME_STARTED_EVENT_TYPE,
            Self::ItemDrawn(_) => ITEM_DRAWN_EVENT_TYPE,
            Self::ChoiceSubmitted(_) => CHOICE_SUBMITTED_EVENT_TYPE,
            Self::ChoiceScored(_) => CHOICE_SCORED_EVENT_TYPE,
            Self::GameEnded(_) => GAME_ENDED_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the Game Session context.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: SessionEventKind,
}

impl DomainEvent for SessionEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("SessionEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
