//! Query handlers for the Game Session context.
//!
//! Read-only views of a session for rendering.

use ecosort_catalog::{Difficulty, EligibleItem};
use ecosort_scoring::{GameStats, ScoringResult};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::{GamePhase, GameSession, GameSummary};

/// Read-only view of a game session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    /// The session identifier, once a game exists.
    pub session_id: Option<Uuid>,
    /// Current phase as a string.
    pub phase: String,
    /// City being played.
    pub city_id: Option<String>,
    /// Difficulty filter in effect.
    pub difficulty: Option<Difficulty>,
    /// Item shown in the current round.
    pub current_item: Option<EligibleItem>,
    /// Result of the most recent choice.
    pub last_result: Option<ScoringResult>,
    /// Points earned.
    pub score: u32,
    /// Fines incurred.
    pub fines: u32,
    /// Score minus fines.
    pub net_score: i64,
    /// Current round.
    pub round: u32,
    /// Round limit, if any.
    pub round_limit: Option<u32>,
    /// Consecutive correct answers.
    pub streak: u32,
    /// Correct and wrong answers.
    pub stats: GameStats,
    /// Accuracy as a whole percentage.
    pub accuracy_percent: u32,
    /// Final summary once the game is over.
    pub summary: Option<GameSummary>,
}

impl GameSnapshot {
    /// The view shown before any game has been started.
    #[must_use]
    pub fn not_started() -> Self {
        Self {
            session_id: None,
            phase: GamePhase::NotStarted.to_string(),
            city_id: None,
            difficulty: None,
            current_item: None,
            last_result: None,
            score: 0,
            fines: 0,
            net_score: 0,
            round: 0,
            round_limit: None,
            streak: 0,
            stats: GameStats::default(),
            accuracy_percent: 0,
            summary: None,
        }
    }
}

/// Builds the read-only view of `session`.
#[must_use]
pub fn get_snapshot(session: &GameSession) -> GameSnapshot {
    let stats = session.stats();
    GameSnapshot {
        session_id: Some(session.id),
        phase: session.phase().to_string(),
        city_id: session.city_id().map(str::to_owned),
        difficulty: session.difficulty(),
        current_item: session.current_item().cloned(),
        last_result: session.last_result().cloned(),
        score: session.score(),
        fines: session.fines(),
        net_score: session.net_score(),
        round: session.round(),
        round_limit: session.round_limit(),
        streak: session.streak(),
        stats,
        accuracy_percent: stats.accuracy_percent(),
        summary: session.summary().copied(),
    }
}
