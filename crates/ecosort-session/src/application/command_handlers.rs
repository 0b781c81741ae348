//! Command handlers for the Game Session context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: resolve the city, execute the command on the
//! session, and report what happened.

use std::sync::Mutex;

use ecosort_catalog::{Catalog, City};
use ecosort_core::aggregate::AggregateRoot;
use ecosort_core::clock::Clock;
use ecosort_core::error::DomainError;
use ecosort_core::event::StoredEvent;
use ecosort_core::rng::DeterministicRng;
use ecosort_scoring::ScoringResult;
use uuid::Uuid;

use crate::domain::aggregates::{GameSession, RoundAdvance};
use crate::domain::commands::{AdvanceRound, StartGame, SubmitChoice};
use crate::domain::config::GameConfig;
use crate::domain::events::{SessionEvent, SessionEventKind};

/// Serializes the session's uncommitted events into log records.
#[must_use]
pub fn to_stored_events(session: &GameSession) -> Vec<StoredEvent> {
    session
        .uncommitted_events()
        .iter()
        .map(|event| StoredEvent::from_event(event))
        .collect()
}

/// Reconstitutes a `GameSession` from logged events.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if event deserialization fails.
pub fn reconstitute(
    session_id: Uuid,
    stored_events: &[StoredEvent],
) -> Result<GameSession, DomainError> {
    let mut events = Vec::with_capacity(stored_events.len());
    for stored in stored_events {
        let kind: SessionEventKind =
            serde_json::from_value(stored.payload.clone()).map_err(|e| {
                DomainError::Infrastructure(format!("event deserialization failed: {e}"))
            })?;
        events.push(SessionEvent {
            metadata: stored.metadata(),
            kind,
        });
    }
    Ok(GameSession::replay(session_id, &events))
}

fn active_city<'a>(
    session: &GameSession,
    catalog: &'a Catalog,
    action: &'static str,
) -> Result<&'a City, DomainError> {
    let Some(city_id) = session.city_id() else {
        return Err(DomainError::InvalidStateTransition {
            phase: session.phase().to_string(),
            action,
        });
    };
    catalog.get_city(city_id)
}

/// Handles the `StartGame` command: looks up the city and starts a fresh
/// session with the first item drawn.
///
/// The `Mutex` is locked only around the synchronous domain method call.
///
/// # Errors
///
/// Returns `DomainError::CityNotFound` for an unknown city and
/// `DomainError::EmptyCatalog` if the city has nothing to draw.
pub fn handle_start_game(
    command: &StartGame,
    session_id: Uuid,
    catalog: &Catalog,
    config: &GameConfig,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<GameSession, DomainError> {
    let city = catalog.get_city(&command.city_id)?;
    let mut session = GameSession::new(session_id);

    {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        session.start(
            catalog,
            city,
            config,
            command.difficulty,
            command.previous_best,
            command.correlation_id,
            clock,
            &mut *rng_guard,
        )?;
    }

    tracing::info!(
        session_id = %session_id,
        city_id = %city.id,
        difficulty = ?command.difficulty,
        round_limit = ?config.round_limit,
        "game started"
    );
    Ok(session)
}

/// Handles the `SubmitChoice` command against the active session.
///
/// Returns `Ok(None)` when the session is not awaiting a choice.
///
/// # Errors
///
/// Returns `DomainError::InvalidStateTransition` if no game has been
/// started, and `DomainError::InvalidBin` for a bin outside the city.
pub fn handle_submit_choice(
    command: &SubmitChoice,
    session: &mut GameSession,
    catalog: &Catalog,
    clock: &dyn Clock,
) -> Result<Option<ScoringResult>, DomainError> {
    let city = active_city(session, catalog, "submit a choice")?;
    let result = session.submit_choice(city, &command.bin_id, command.correlation_id, clock)?;

    if let Some(scored) = &result {
        tracing::debug!(
            session_id = %session.id,
            round = scored.round,
            bin_id = %scored.chosen_bin,
            correct_bin = %scored.correct_bin,
            is_correct = scored.is_correct,
            score = session.score(),
            fines = session.fines(),
            streak = session.streak(),
            "choice scored"
        );
    }
    Ok(result)
}

/// Handles the `AdvanceRound` command: either draws the next item or ends
/// the game at the round limit.
///
/// # Errors
///
/// Returns `DomainError::InvalidStateTransition` unless the session is in
/// `RoundTransition`.
pub fn handle_advance_round(
    command: &AdvanceRound,
    session: &mut GameSession,
    catalog: &Catalog,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<RoundAdvance, DomainError> {
    let city = active_city(session, catalog, "advance the round")?;

    let advance = {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        session.advance_round(catalog, city, command.correlation_id, clock, &mut *rng_guard)?
    };

    if let RoundAdvance::GameOver(summary) = &advance {
        tracing::info!(
            session_id = %session.id,
            net_score = summary.net_score,
            rounds_played = summary.rounds_played,
            accuracy_percent = summary.accuracy_percent,
            is_new_best = summary.is_new_best,
            "game over"
        );
    }
    Ok(advance)
}
