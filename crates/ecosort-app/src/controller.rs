//! The game controller: one entry point for every front-end action.

use ecosort_catalog::Difficulty;
use ecosort_catalog::application::query_handlers::{self as catalog_queries, CityView};
use ecosort_core::aggregate::AggregateRoot;
use ecosort_core::error::DomainError;
use ecosort_core::event::StoredEvent;
use ecosort_core::message::Message;
use ecosort_core::repository::StatsRecord;
use ecosort_i18n::{Language, Translator};
use ecosort_scoring::ScoringResult;
use ecosort_session::application::command_handlers::{
    handle_advance_round, handle_start_game, handle_submit_choice, reconstitute,
    to_stored_events,
};
use ecosort_session::application::query_handlers::{GameSnapshot, get_snapshot};
use ecosort_session::domain::commands::{AdvanceRound, StartGame, SubmitChoice};
use ecosort_session::{GamePhase, GameSession, GameSummary, RoundAdvance};
use ecosort_stats::application::command_handlers::{
    handle_record_completed_game, handle_reset_stats,
};
use ecosort_stats::application::query_handlers::{StatsView, stats_view};
use ecosort_stats::domain::commands::{RecordCompletedGame, ResetStats};
use ecosort_stats::{Achievement, CompletedGame, record_game};
use serde::Serialize;
use uuid::Uuid;

use crate::celebration::{Celebration, ConfettiParticle, celebrate, confetti_for};
use crate::error::UiError;
use crate::feedback::{
    choice_message, delta_message, share_message, share_stats_message, streak_title,
};
use crate::input::{InputContext, KeyAction, map_key};
use crate::sound::{SoundCue, choice_cues, game_over_cue};
use crate::state::AppState;

/// Everything the front end shows after a scored choice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    /// The scoring outcome.
    pub result: ScoringResult,
    /// Main feedback line.
    pub message: Message,
    /// `+N points` or `+N€ fine`.
    pub delta: Message,
    /// Title for a long running streak.
    pub streak_title: Option<Message>,
    /// Sounds to play; empty with sound disabled.
    pub sounds: Vec<SoundCue>,
    /// Points badge for a correct answer.
    pub celebration: Option<Celebration>,
    /// Confetti burst for a streak.
    pub confetti: Vec<ConfettiParticle>,
}

/// Everything the front end shows when a game ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOverReport {
    /// Final numbers.
    pub summary: GameSummary,
    /// Lifetime record after this game.
    pub record: StatsRecord,
    /// Achievements this game unlocked.
    pub new_achievements: Vec<Achievement>,
    /// Extra lines: new best, unlocked achievements.
    pub messages: Vec<Message>,
    /// Text for sharing the result.
    pub share: Message,
    /// Sounds to play; empty with sound disabled.
    pub sounds: Vec<SoundCue>,
}

/// Outcome of leaving the feedback screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoundOutcome {
    /// The next item is up.
    NextRound {
        /// State of the new round.
        snapshot: GameSnapshot,
    },
    /// The game is over.
    GameOver {
        /// The final report.
        report: GameOverReport,
    },
}

/// Outcome of a key press.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeyOutcome {
    /// The key does nothing in the current state.
    Ignored,
    /// A game was started.
    Started {
        /// State of round 1.
        snapshot: GameSnapshot,
    },
    /// A bin was picked; `None` if the choice was ignored.
    Chose {
        /// Feedback for the choice.
        feedback: Option<Feedback>,
    },
    /// The game was reset.
    Reset,
    /// The overlay was closed.
    OverlayClosed,
}

/// Drives one player's games.
///
/// Holds at most one game at a time. Starting a game or resetting replaces
/// the previous one wholesale.
#[derive(Debug)]
pub struct GameController {
    state: AppState,
    translator: Translator,
    session: Option<GameSession>,
    selected_city: Option<String>,
    selected_difficulty: Option<Difficulty>,
    overlay_open: bool,
    stats: StatsRecord,
    event_log: Vec<StoredEvent>,
    pending_events: Vec<StoredEvent>,
}

impl GameController {
    /// Creates a controller and, with persistence enabled, loads the
    /// lifetime record. A record that cannot be loaded starts from zero.
    pub async fn new(state: AppState) -> Self {
        let stats = if state.config.capabilities.persistence {
            match state.stats_repository.load_stats().await {
                Ok(record) => record,
                Err(e) => {
                    tracing::error!(error = %e, "failed to load stats; starting from zero");
                    StatsRecord::default()
                }
            }
        } else {
            StatsRecord::default()
        };
        let translator = Translator::new(state.config.language);

        Self {
            state,
            translator,
            session: None,
            selected_city: None,
            selected_difficulty: None,
            overlay_open: false,
            stats,
            event_log: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    /// All cities in display order.
    #[must_use]
    pub fn list_cities(&self) -> Vec<CityView> {
        catalog_queries::list_cities(&self.state.catalog)
    }

    /// Picks the city for the next game.
    ///
    /// # Errors
    ///
    /// Returns a `city_not_found` error for an unknown id.
    pub fn select_city(&mut self, city_id: &str) -> Result<CityView, UiError> {
        let view = catalog_queries::get_city_by_id(&self.state.catalog, city_id)?;
        self.selected_city = Some(view.id.clone());
        Ok(view)
    }

    /// The picked city.
    #[must_use]
    pub fn selected_city(&self) -> Option<&str> {
        self.selected_city.as_deref()
    }

    /// Info line about the picked city's waste authority.
    ///
    /// # Errors
    ///
    /// Returns a `city_not_found` error for an unknown id.
    pub fn city_info(&self, city_id: &str) -> Result<Message, UiError> {
        let city = self.state.catalog.get_city(city_id)?;
        Ok(catalog_queries::city_info_message(city))
    }

    /// Tooltip of a bin in the picked city; `None` without a city or for a
    /// bin outside it.
    #[must_use]
    pub fn bin_info(&self, bin_id: &str) -> Option<Message> {
        let city = self
            .state
            .catalog
            .get_city(self.selected_city.as_deref()?)
            .ok()?;
        city.bin(bin_id).map(catalog_queries::bin_info_message)
    }

    /// Sets the difficulty for the next game. Ignored when difficulty
    /// selection is disabled.
    pub fn select_difficulty(&mut self, difficulty: Option<Difficulty>) {
        if self.state.config.capabilities.difficulty_selection {
            self.selected_difficulty = difficulty;
        } else {
            tracing::debug!(?difficulty, "difficulty selection disabled; ignoring");
        }
    }

    /// Starts a new game in `city_id`, replacing any current game.
    ///
    /// # Errors
    ///
    /// Returns `city_not_found` or `empty_catalog`.
    pub fn start_game(&mut self, city_id: &str) -> Result<GameSnapshot, UiError> {
        let difficulty = if self.state.config.capabilities.difficulty_selection {
            self.selected_difficulty
        } else {
            None
        };
        let command = StartGame {
            correlation_id: Uuid::new_v4(),
            city_id: city_id.to_owned(),
            difficulty,
            previous_best: self.stats.best_score,
        };
        let session = handle_start_game(
            &command,
            Uuid::new_v4(),
            &self.state.catalog,
            &self.state.config.game,
            self.state.clock.as_ref(),
            self.state.rng.as_ref(),
        )?;

        self.selected_city = Some(city_id.to_owned());
        self.event_log.clear();
        self.pending_events.clear();
        self.session = Some(session);
        self.collect_events();
        Ok(self.snapshot())
    }

    /// Throws the current item into `bin_id`.
    ///
    /// Returns `Ok(None)` while no item is waiting for a choice.
    ///
    /// # Errors
    ///
    /// Returns `invalid_state_transition` before any game is started, and
    /// `invalid_bin` for a bin outside the city.
    pub fn submit_choice(&mut self, bin_id: &str) -> Result<Option<Feedback>, UiError> {
        let Some(session) = self.session.as_mut() else {
            return Err(not_started("submit a choice"));
        };
        let command = SubmitChoice {
            correlation_id: Uuid::new_v4(),
            bin_id: bin_id.to_owned(),
        };
        let Some(result) =
            handle_submit_choice(&command, session, &self.state.catalog, self.state.clock.as_ref())?
        else {
            return Ok(None);
        };

        self.collect_events();
        let feedback = self.feedback_for(result)?;
        Ok(Some(feedback))
    }

    fn feedback_for(&self, result: ScoringResult) -> Result<Feedback, UiError> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| not_started("build feedback"))?;
        let city = self
            .state
            .catalog
            .get_city(session.city_id().unwrap_or_default())?;
        let item = session
            .current_item()
            .ok_or_else(|| DomainError::Validation("scored round has no item".to_owned()))?;

        let (celebration, confetti) = match result.points_awarded {
            Some(points) => {
                let mut rng = self.state.rng.lock().map_err(|e| {
                    DomainError::Infrastructure(format!("RNG mutex poisoned: {e}"))
                })?;
                (
                    Some(celebrate(points, result.streak_after)),
                    confetti_for(result.streak_after, &mut *rng),
                )
            }
            None => (None, Vec::new()),
        };

        Ok(Feedback {
            message: choice_message(city, item, &result),
            delta: delta_message(&result),
            streak_title: streak_title(result.streak_after),
            sounds: self.gate_sounds(choice_cues(result.is_correct, result.streak_after)),
            celebration,
            confetti,
            result,
        })
    }

    /// Leaves the feedback screen: draws the next item or ends the game.
    ///
    /// At game over the lifetime record is updated and, with persistence
    /// enabled, stored. A failed store is logged and the game still ends.
    ///
    /// # Errors
    ///
    /// Returns `invalid_state_transition` unless a choice was just scored.
    pub async fn advance_round(&mut self) -> Result<RoundOutcome, UiError> {
        let Some(session) = self.session.as_mut() else {
            return Err(not_started("advance the round"));
        };
        let command = AdvanceRound {
            correlation_id: Uuid::new_v4(),
        };
        let advance = handle_advance_round(
            &command,
            session,
            &self.state.catalog,
            self.state.clock.as_ref(),
            self.state.rng.as_ref(),
        )?;
        self.collect_events();

        match advance {
            RoundAdvance::NextRound { .. } => Ok(RoundOutcome::NextRound {
                snapshot: self.snapshot(),
            }),
            RoundAdvance::GameOver(summary) => {
                let report = self.finish_game(summary, command.correlation_id).await;
                Ok(RoundOutcome::GameOver { report })
            }
        }
    }

    async fn finish_game(&mut self, summary: GameSummary, correlation_id: Uuid) -> GameOverReport {
        let game = CompletedGame {
            net_score: summary.net_score,
            longest_streak: summary.longest_streak,
        };
        let stored = if self.state.config.capabilities.persistence {
            let command = RecordCompletedGame {
                correlation_id,
                game,
            };
            match handle_record_completed_game(
                &command,
                self.state.clock.as_ref(),
                self.state.stats_repository.as_ref(),
            )
            .await
            {
                Ok(update) => Some(update),
                Err(e) => {
                    tracing::error!(error = %e, "failed to store stats; keeping them in memory");
                    None
                }
            }
        } else {
            None
        };
        let (record, new_achievements) = match stored {
            Some(update) => (update.record, update.new_achievements),
            None => {
                let record = record_game(&self.stats, game, self.state.clock.now());
                let new_achievements = Achievement::newly_unlocked(&self.stats, &record);
                (record, new_achievements)
            }
        };
        self.stats = record.clone();

        let mut messages = Vec::new();
        if summary.is_new_best {
            messages.push(Message::new("new_best_score").with_param("score", summary.net_score));
        }
        for achievement in &new_achievements {
            messages.push(
                Message::new("achievement_unlocked")
                    .with_param("name", self.translator.text(achievement.message_key())),
            );
        }

        GameOverReport {
            summary,
            record,
            new_achievements,
            messages,
            share: share_message(summary.net_score),
            sounds: self.gate_sounds(vec![game_over_cue(summary.is_new_best)]),
        }
    }

    /// Drops the current game.
    pub fn reset_game(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(session_id = %session.id, phase = %session.phase(), "game reset");
        }
        self.event_log.clear();
        self.pending_events.clear();
    }

    /// Read-only view of the current game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.session
            .as_ref()
            .map_or_else(GameSnapshot::not_started, get_snapshot)
    }

    /// Phase of the current game.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.session
            .as_ref()
            .map_or(GamePhase::NotStarted, GameSession::phase)
    }

    /// Lifetime record with achievements.
    #[must_use]
    pub fn stats(&self) -> StatsView {
        stats_view(&self.stats)
    }

    /// Share text for the lifetime record.
    #[must_use]
    pub fn share_stats(&self) -> Message {
        share_stats_message(&self.stats)
    }

    /// Wipes the lifetime record.
    ///
    /// # Errors
    ///
    /// Returns `infrastructure_error` if the store fails.
    pub async fn reset_stats(&mut self) -> Result<StatsView, UiError> {
        if self.state.config.capabilities.persistence {
            let command = ResetStats {
                correlation_id: Uuid::new_v4(),
            };
            handle_reset_stats(&command, self.state.stats_repository.as_ref()).await?;
        }
        self.stats = StatsRecord::default();
        Ok(self.stats())
    }

    /// Removes and returns events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<StoredEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Every event of the current game.
    #[must_use]
    pub fn event_log(&self) -> &[StoredEvent] {
        &self.event_log
    }

    /// Rebuilds the current game from its event log.
    ///
    /// # Errors
    ///
    /// Returns `infrastructure_error` if an event cannot be decoded.
    pub fn replay(&self) -> Result<Option<GameSnapshot>, UiError> {
        let Some(session) = self.session.as_ref() else {
            return Ok(None);
        };
        let rebuilt = reconstitute(session.id, &self.event_log)?;
        Ok(Some(get_snapshot(&rebuilt)))
    }

    /// Active display language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.translator.language()
    }

    /// Switches the display language.
    pub fn set_language(&mut self, language: Language) {
        self.translator.set_language(language);
    }

    /// Renders a message in the active language.
    #[must_use]
    pub fn render(&self, message: &Message) -> String {
        self.translator.translate(message)
    }

    /// Opens an overlay; game keys are blocked until it closes.
    pub fn open_overlay(&mut self) {
        self.overlay_open = true;
    }

    /// Whether an overlay is open.
    #[must_use]
    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    /// Applies a keyboard shortcut.
    ///
    /// # Errors
    ///
    /// Propagates errors of the triggered action.
    pub fn handle_key(&mut self, key: &str) -> Result<KeyOutcome, UiError> {
        let context = InputContext {
            overlay_open: self.overlay_open,
            game_active: self.session.is_some(),
            awaiting_choice: self.phase() == GamePhase::AwaitingChoice,
            city_selected: self.selected_city.is_some(),
        };
        let Some(action) = map_key(key, context) else {
            return Ok(KeyOutcome::Ignored);
        };

        match action {
            KeyAction::CloseOverlay => {
                self.overlay_open = false;
                Ok(KeyOutcome::OverlayClosed)
            }
            KeyAction::Start => {
                let city_id = self.selected_city.clone().unwrap_or_default();
                let snapshot = self.start_game(&city_id)?;
                Ok(KeyOutcome::Started { snapshot })
            }
            KeyAction::Reset => {
                self.reset_game();
                Ok(KeyOutcome::Reset)
            }
            KeyAction::SelectBin(index) => {
                let Some(bin_id) = self.bin_at(index)? else {
                    return Ok(KeyOutcome::Ignored);
                };
                let feedback = self.submit_choice(&bin_id)?;
                Ok(KeyOutcome::Chose { feedback })
            }
        }
    }

    fn bin_at(&self, index: usize) -> Result<Option<String>, UiError> {
        let Some(city_id) = self.session.as_ref().and_then(GameSession::city_id) else {
            return Ok(None);
        };
        let city = self.state.catalog.get_city(city_id)?;
        Ok(city.bins.get(index).map(|bin| bin.id.clone()))
    }

    fn gate_sounds(&self, cues: Vec<SoundCue>) -> Vec<SoundCue> {
        if self.state.config.capabilities.sound {
            cues
        } else {
            Vec::new()
        }
    }

    fn collect_events(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let stored = to_stored_events(session);
        session.clear_uncommitted_events();
        for event in &stored {
            tracing::debug!(
                event_type = %event.event_type,
                sequence_number = event.sequence_number,
                aggregate_id = %event.aggregate_id,
                "session event"
            );
        }
        self.event_log.extend(stored.iter().cloned());
        self.pending_events.extend(stored);
    }
}

fn not_started(action: &'static str) -> UiError {
    UiError(DomainError::InvalidStateTransition {
        phase: GamePhase::NotStarted.to_string(),
        action,
    })
}
