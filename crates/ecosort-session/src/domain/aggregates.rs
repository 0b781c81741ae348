//! Aggregate roots for the Game Session context.

use std::fmt;

use ecosort_catalog::{Catalog, City, Difficulty, EligibleItem, next_item, resolve_effective_bin};
use ecosort_core::aggregate::AggregateRoot;
use ecosort_core::clock::Clock;
use ecosort_core::error::DomainError;
use ecosort_core::event::EventMetadata;
use ecosort_core::rng::DeterministicRng;
use ecosort_scoring::{GameStats, ScoringResult, ScoringRules};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::config::GameConfig;
use super::events::{
    ChoiceScored, ChoiceSubmitted, GameEnded, GameStarted, ItemDrawn, SessionEvent,
    SessionEventKind,
};

/// Game phase state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// No game has been started.
    NotStarted,
    /// An item is shown and waits for a bin choice.
    AwaitingChoice,
    /// A choice has been submitted and is being scored.
    Resolving,
    /// Feedback for the last choice is shown.
    RoundTransition,
    /// The last round has been played.
    GameOver,
}

impl GamePhase {
    /// Snake-case name of the phase.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::AwaitingChoice => "awaiting_choice",
            Self::Resolving => "resolving",
            Self::RoundTransition => "round_transition",
            Self::GameOver => "game_over",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final numbers of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Score minus fines; may be negative.
    pub net_score: i64,
    /// Points earned.
    pub score: u32,
    /// Fines incurred.
    pub fines: u32,
    /// Rounds played.
    pub rounds_played: u32,
    /// Correct and wrong answers.
    pub stats: GameStats,
    /// Accuracy as a whole percentage.
    pub accuracy_percent: u32,
    /// Longest run of correct answers.
    pub longest_streak: u32,
    /// True if `net_score` beats the best score before this game.
    pub is_new_best: bool,
}

/// Outcome of leaving the feedback screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundAdvance {
    /// A new round started with a freshly drawn item.
    NextRound {
        /// The new round number.
        round: u32,
        /// The item for that round.
        item: EligibleItem,
    },
    /// The round limit was reached.
    GameOver(GameSummary),
}

/// The aggregate root for one game.
#[derive(Debug)]
pub struct GameSession {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    pub(crate) phase: GamePhase,
    pub(crate) city_id: Option<String>,
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) round_limit: Option<u32>,
    pub(crate) rules: ScoringRules,
    pub(crate) previous_best: i64,
    pub(crate) current_item: Option<EligibleItem>,
    pub(crate) pending_choice: Option<String>,
    pub(crate) last_result: Option<ScoringResult>,
    pub(crate) score: u32,
    pub(crate) fines: u32,
    pub(crate) round: u32,
    pub(crate) streak: u32,
    pub(crate) longest_streak: u32,
    pub(crate) stats: GameStats,
    pub(crate) summary: Option<GameSummary>,
    /// Events produced since the last drain.
    uncommitted_events: Vec<SessionEvent>,
}

impl GameSession {
    /// Creates a session that has not started yet.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            version: 0,
            phase: GamePhase::NotStarted,
            city_id: None,
            difficulty: None,
            round_limit: None,
            rules: ScoringRules::default(),
            previous_best: 0,
            current_item: None,
            pending_choice: None,
            last_result: None,
            score: 0,
            fines: 0,
            round: 0,
            streak: 0,
            longest_streak: 0,
            stats: GameStats::default(),
            summary: None,
            uncommitted_events: Vec::new(),
        }
    }

    /// Rebuilds a session by replaying its events in order.
    #[must_use]
    pub fn replay(id: Uuid, events: &[SessionEvent]) -> Self {
        let mut session = Self::new(id);
        for event in events {
            session.apply(event);
        }
        session
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// City being played, once started.
    #[must_use]
    pub fn city_id(&self) -> Option<&str> {
        self.city_id.as_deref()
    }

    /// Difficulty filter of the game.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Round limit of the game.
    #[must_use]
    pub fn round_limit(&self) -> Option<u32> {
        self.round_limit
    }

    /// Item shown in the current round.
    #[must_use]
    pub fn current_item(&self) -> Option<&EligibleItem> {
        self.current_item.as_ref()
    }

    /// Bin chosen in the current round, once submitted.
    #[must_use]
    pub fn pending_choice(&self) -> Option<&str> {
        self.pending_choice.as_deref()
    }

    /// Result of the most recent choice.
    #[must_use]
    pub fn last_result(&self) -> Option<&ScoringResult> {
        self.last_result.as_ref()
    }

    /// Points earned.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Fines incurred.
    #[must_use]
    pub fn fines(&self) -> u32 {
        self.fines
    }

    /// Score minus fines.
    #[must_use]
    pub fn net_score(&self) -> i64 {
        i64::from(self.score) - i64::from(self.fines)
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Consecutive correct answers.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Longest streak of this game.
    #[must_use]
    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    /// Correct and wrong answer counters.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        self.stats
    }

    /// Final summary, once the game is over.
    #[must_use]
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    /// Removes and returns the events produced since the last drain.
    pub fn take_uncommitted_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.uncommitted_events)
    }

    fn next_sequence_number(&self) -> i64 {
        self.version + 1
    }

    fn record(&mut self, kind: SessionEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = SessionEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                aggregate_id: self.id,
                sequence_number: self.next_sequence_number(),
                correlation_id,
                causation_id: correlation_id,
                occurred_at: clock.now(),
            },
            kind,
        };
        self.apply(&event);
        self.uncommitted_events.push(event);
    }

    fn require_city<'a>(&self, city: &'a City) -> Result<&'a City, DomainError> {
        match self.city_id.as_deref() {
            Some(id) if id == city.id => Ok(city),
            Some(id) => Err(DomainError::Validation(format!(
                "session plays city {id}, not {}",
                city.id
            ))),
            None => Err(DomainError::InvalidStateTransition {
                phase: self.phase.to_string(),
                action: "use a city",
            }),
        }
    }

    /// Starts the game in `city` and draws the item for round 1.
    ///
    /// Produces `GameStarted` followed by `ItemDrawn`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` if the session was
    /// already started, or `DomainError::EmptyCatalog` if the city has no
    /// items. No event is produced on error.
    #[allow(clippy::too_many_arguments)]
    pub fn start(
        &mut self,
        catalog: &Catalog,
        city: &City,
        config: &GameConfig,
        difficulty: Option<Difficulty>,
        previous_best: i64,
        correlation_id: Uuid,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<(), DomainError> {
        if self.phase != GamePhase::NotStarted {
            return Err(DomainError::InvalidStateTransition {
                phase: self.phase.to_string(),
                action: "start a game",
            });
        }

        let item = next_item(catalog, city, difficulty, rng)?;

        self.record(
            SessionEventKind::GameStarted(GameStarted {
                session_id: self.id,
                city_id: city.id.clone(),
                difficulty,
                round_limit: config.round_limit,
                rules: config.rules,
                previous_best,
            }),
            correlation_id,
            clock,
        );
        self.record(
            SessionEventKind::ItemDrawn(ItemDrawn {
                session_id: self.id,
                round: 1,
                item,
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Scores the player's bin choice for the current item.
    ///
    /// Returns `Ok(None)` without any change when the session is not
    /// awaiting a choice. Otherwise produces `ChoiceSubmitted` and
    /// `ChoiceScored` and leaves the session in `RoundTransition`.
    ///
    /// Both the chosen bin and the item's bin are resolved to their
    /// effective bins before comparison.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBin` if `bin_id` is not a bin of the
    /// session's city.
    pub fn submit_choice(
        &mut self,
        city: &City,
        bin_id: &str,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<Option<ScoringResult>, DomainError> {
        if self.phase != GamePhase::AwaitingChoice {
            tracing::debug!(
                session_id = %self.id,
                phase = %self.phase,
                bin_id,
                "ignoring choice outside awaiting_choice"
            );
            return Ok(None);
        }
        let city = self.require_city(city)?;
        if !city.has_bin(bin_id) {
            return Err(DomainError::InvalidBin {
                city_id: city.id.clone(),
                bin_id: bin_id.to_owned(),
            });
        }
        let Some(item) = self.current_item.as_ref() else {
            return Err(DomainError::Validation(
                "no item is awaiting a choice".to_owned(),
            ));
        };

        let effective_choice = resolve_effective_bin(city, bin_id);
        let is_correct = effective_choice == item.correct_bin;
        let round_score = self.rules.evaluate(is_correct, self.streak);
        let result = ScoringResult {
            round: self.round,
            is_correct,
            chosen_bin: bin_id.to_owned(),
            correct_bin: item.correct_bin.clone(),
            points_awarded: is_correct.then_some(round_score.points),
            bonus_points: round_score.bonus,
            streak_after: round_score.streak_after,
            fine_delta: (!is_correct).then_some(round_score.fine),
            is_final_round: self.round_limit.is_some_and(|limit| self.round >= limit),
        };

        self.record(
            SessionEventKind::ChoiceSubmitted(ChoiceSubmitted {
                session_id: self.id,
                round: self.round,
                bin_id: bin_id.to_owned(),
            }),
            correlation_id,
            clock,
        );
        self.record(
            SessionEventKind::ChoiceScored(ChoiceScored {
                session_id: self.id,
                result: result.clone(),
            }),
            correlation_id,
            clock,
        );
        Ok(Some(result))
    }

    /// Leaves the feedback screen.
    ///
    /// At the round limit this produces `GameEnded` and draws nothing.
    /// Otherwise the round counter advances and `ItemDrawn` is produced.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStateTransition` unless the session is
    /// in `RoundTransition`, or `DomainError::EmptyCatalog` if no item can
    /// be drawn.
    pub fn advance_round(
        &mut self,
        catalog: &Catalog,
        city: &City,
        correlation_id: Uuid,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<RoundAdvance, DomainError> {
        if self.phase != GamePhase::RoundTransition {
            return Err(DomainError::InvalidStateTransition {
                phase: self.phase.to_string(),
                action: "advance the round",
            });
        }
        let city = self.require_city(city)?;

        if self.round_limit.is_some_and(|limit| self.round >= limit) {
            let summary = self.build_summary();
            self.record(
                SessionEventKind::GameEnded(GameEnded {
                    session_id: self.id,
                    summary,
                }),
                correlation_id,
                clock,
            );
            return Ok(RoundAdvance::GameOver(summary));
        }

        let item = next_item(catalog, city, self.difficulty, rng)?;
        let round = self.round + 1;
        self.record(
            SessionEventKind::ItemDrawn(ItemDrawn {
                session_id: self.id,
                round,
                item: item.clone(),
            }),
            correlation_id,
            clock,
        );
        Ok(RoundAdvance::NextRound { round, item })
    }

    fn build_summary(&self) -> GameSummary {
        let net_score = self.net_score();
        GameSummary {
            net_score,
            score: self.score,
            fines: self.fines,
            rounds_played: self.stats.answered(),
            stats: self.stats,
            accuracy_percent: self.stats.accuracy_percent(),
            longest_streak: self.longest_streak,
            is_new_best: net_score > self.previous_best,
        }
    }
}

impl AggregateRoot for GameSession {
    type Event = SessionEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            SessionEventKind::GameStarted(payload) => {
                self.phase = GamePhase::RoundTransition;
                self.city_id = Some(payload.city_id.clone());
                self.difficulty = payload.difficulty;
                self.round_limit = payload.round_limit;
                self.rules = payload.rules;
                self.previous_best = payload.previous_best;
                self.current_item = None;
                self.pending_choice = None;
                self.last_result = None;
                self.score = 0;
                self.fines = 0;
                self.round = 0;
                self.streak = 0;
                self.longest_streak = 0;
                self.stats = GameStats::default();
                self.summary = None;
            }
            SessionEventKind::ItemDrawn(payload) => {
                self.phase = GamePhase::AwaitingChoice;
                self.round = payload.round;
                self.current_item = Some(payload.item.clone());
                self.pending_choice = None;
            }
            SessionEventKind::ChoiceSubmitted(payload) => {
                self.phase = GamePhase::Resolving;
                self.pending_choice = Some(payload.bin_id.clone());
            }
            SessionEventKind::ChoiceScored(payload) => {
                let result = &payload.result;
                if result.is_correct {
                    self.score += result.points_awarded.unwrap_or(0);
                    self.stats.correct += 1;
                } else {
                    self.fines += result.fine_delta.unwrap_or(0);
                    self.stats.wrong += 1;
                }
                self.streak = result.streak_after;
                self.longest_streak = self.longest_streak.max(self.streak);
                self.last_result = Some(result.clone());
                self.phase = GamePhase::RoundTransition;
            }
            SessionEventKind::GameEnded(payload) => {
                self.phase = GamePhase::GameOver;
                self.summary = Some(payload.summary);
                self.current_item = None;
            }
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecosort_catalog::eligible_items;
    use ecosort_core::event::DomainEvent;
    use ecosort_test_support::{MockRng, SequenceRng, fixed_clock};

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn index_of(catalog: &Catalog, city: &City, key: &str) -> u32 {
        let position = eligible_items(catalog, city)
            .iter()
            .position(|item| item.key == key)
            .unwrap();
        u32::try_from(position).unwrap()
    }

    fn started(catalog: &Catalog, city_id: &str, item_key: &str, rounds: usize) -> GameSession {
        let city = catalog.get_city(city_id).unwrap();
        let index = index_of(catalog, city, item_key);
        let mut rng = SequenceRng::repeating(index, rounds);
        let mut session = GameSession::new(Uuid::new_v4());
        session
            .start(
                catalog,
                city,
                &GameConfig::default(),
                None,
                0,
                Uuid::new_v4(),
                &fixed_clock(),
                &mut rng,
            )
            .unwrap();
        session
    }

    // --- start tests ---

    #[test]
    fn test_start_produces_game_started_and_first_item() {
        // Arrange
        let catalog = catalog();
        let city = catalog.get_city("berlin").unwrap();
        let session_id = Uuid::new_v4();
        let correlation_id = Uuid::new_v4();
        let clock = fixed_clock();
        let mut session = GameSession::new(session_id);

        // Act
        let result = session.start(
            &catalog,
            city,
            &GameConfig::default(),
            None,
            0,
            correlation_id,
            &clock,
            &mut MockRng,
        );

        // Assert
        assert!(result.is_ok());
        let events = session.uncommitted_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type(), "session.game_started");
        assert_eq!(events[1].event_type(), "session.item_drawn");
        assert_eq!(events[0].metadata().sequence_number, 1);
        assert_eq!(events[1].metadata().sequence_number, 2);
        assert_eq!(events[1].metadata().aggregate_id, session_id);
        assert_eq!(events[1].metadata().correlation_id, correlation_id);
        assert_eq!(events[1].metadata().occurred_at, clock.0);

        assert_eq!(session.phase(), GamePhase::AwaitingChoice);
        assert_eq!(session.round(), 1);
        assert_eq!(session.city_id(), Some("berlin"));
        assert_eq!(session.current_item().unwrap().key, "plastic_packaging");
        assert_eq!(session.score(), 0);
        assert_eq!(session.fines(), 0);
        assert_eq!(session.version(), 2);
    }

    #[test]
    fn test_start_twice_is_rejected() {
        // Arrange
        let catalog = catalog();
        let city = catalog.get_city("berlin").unwrap();
        let mut session = started(&catalog, "berlin", "glass_jars", 1);

        // Act
        let result = session.start(
            &catalog,
            city,
            &GameConfig::default(),
            None,
            0,
            Uuid::new_v4(),
            &fixed_clock(),
            &mut MockRng,
        );

        // Assert
        assert!(matches!(
            result,
            Err(DomainError::InvalidStateTransition { ref phase, .. }) if phase == "awaiting_choice"
        ));
        assert_eq!(session.uncommitted_events().len(), 2);
    }

    // --- submit_choice tests ---

    #[test]
    fn test_correct_choice_awards_base_points() {
        // Arrange
        let catalog = catalog();
        let city = catalog.get_city("berlin").unwrap();
        let mut session = started(&catalog, "berlin", "glass_jars", 1);
        session.clear_uncommitted_events();

        // Act
        let result = session
            .submit_choice(city, "glass", Uuid::new_v4(), &fixed_clock())
            .unwrap()
            .unwrap();

        // Assert
        assert!(result.is_correct);
        assert_eq!(result.points_awarded, Some(10));
        assert_eq!(result.fine_delta, None);
        assert_eq!(session.score(), 10);
        assert_eq!(session.streak(), 1);
        assert_eq!(session.stats().correct, 1);
        assert_eq!(session.phase(), GamePhase::RoundTransition);

        let events = session.uncommitted_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type(), "session.choice_submitted");
        assert_eq!(events[1].event_type(), "session.choice_scored");
        assert_eq!(events[1].metadata().sequence_number, 4);
    }

    #[test]
    fn test_wrong_choice_adds_fine_and_resets_streak() {
        // Arrange
        let catalog = catalog();
        let city = catalog.get_city("berlin").unwrap();
        let mut session = started(&catalog, "berlin", "glass_jars", 1);

        // Act
        let result = session
            .submit_choice(city, "grey", Uuid::new_v4(), &fixed_clock())
            .unwrap()
            .unwrap();

        // Assert
        assert!(!result.is_correct);
        assert_eq!(result.correct_bin, "glass");
        assert_eq!(result.fine_delta, Some(100));
        assert_eq!(result.points_awarded, None);
        assert_eq!(session.fines(), 100);
        assert_eq!(session.score(), 0);
        assert_eq!(session.streak(), 0);
        assert_eq!(session.stats().wrong, 1);
        assert_eq!(session.net_score(), -100);
    }

    #[test]
    fn test_three_correct_answers_total_thirty_two() {
        // Arrange
        let catalog = catalog();
        let city = catalog.get_city("berlin").unwrap();
        let index = index_of(&catalog, city, "glass_jars");
        let mut rng = SequenceRng::repeating(index, 3);
        let clock = fixed_clock();
        let mut session = GameSession::new(Uuid::new_v4());
        session
            .start(&catalog, city, &GameConfig::default(), None, 0, Uuid::new_v4(), &clock, &mut rng)
            .unwrap();

        // Act
        let mut awarded = Vec::new();
        for round in 0..3 {
            if round > 0 {
                session
                    .advance_round(&catalog, city, Uuid::new_v4(), &clock, &mut rng)
                    .unwrap();
            }
            let result = session
                .submit_choice(city, "glass", Uuid::new_v4(), &clock)
                .unwrap()
                .unwrap();
            awarded.push(result.points_awarded.unwrap());
        }

        // Assert
        assert_eq!(awarded, vec![10, 10, 12]);
        assert_eq!(session.score(), 32);
        assert_eq!(session.streak(), 3);
        assert_eq!(session.longest_streak(), 3);
    }

    #[test]
    fn test_recycling_island_counts_as_yellow_in_munich() {
        // Arrange
        let catalog = catalog();
        let city = catalog.get_city("munich").unwrap();
        let mut session = started(&catalog, "munich", "glass_jars", 1);
        assert_eq!(session.current_item().unwrap().bin_id, "recycling_island");

        // Act
        let result = session
            .submit_choice(city, "recycling_island", Uuid::new_v4(), &fixed_clock())
            .unwrap()
            .unwrap();

        // Assert
        assert!(result.is_correct);
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn test_unknown_bin_is_rejected_without_events() {
        // Arrange
        let catalog = catalog();
        let city = catalog.get_city("munich").unwrap();
        let mut session = started(&catalog, "munich", "glass_jars", 1);
        session.clear_uncommitted_events();

        // Act
        let result = session.submit_choice(city, "yellow", Uuid::new_v4(), &fixed_clock());

        // Assert
        assert!(matches!(
            result,
            Err(DomainError::InvalidBin { ref city_id, ref bin_id })
                if city_id == "munich" && bin_id == "yellow"
        ));
        assert!(session.uncommitted_events().is_empty());
        assert_eq!(session.phase(), GamePhase::AwaitingChoice);
    }

    #[test]
    fn test_choice_during_round_transition_is_ignored() {
        // Arrange
        let catalog = catalog();
        let city = catalog.get_city("berlin").unwrap();
        let mut session = started(&catalog, "berlin", "glass_jars", 1);
        session
            .submit_choice(city, "glass", Uuid::new_v4(), &fixed_clock())
            .unwrap();
        session.clear_uncommitted_events();

        // Act
        let result = session
            .submit_choice(city, "glass", Uuid::new_v4(), &fixed_clock())
            .unwrap();

        // Assert
        assert!(result.is_none());
        assert_eq!(session.score(), 10);
        assert_eq!(session.stats().answered(), 1);
        assert!(session.uncommitted_events().is_empty());
    }

    #[test]
    fn test_choice_while_resolving_is_ignored() {
        // Arrange
        let catalog = catalog();
        let city = catalog.get_city("berlin").unwrap();
        let mut source = started(&catalog, "berlin", "glass_jars", 1);
        source
            .submit_choice(city, "glass", Uuid::new_v4(), &fixed_clock())
            .unwrap();
        let events = source.take_uncommitted_events();
        let mut session = GameSession::replay(source.id, &events[..3]);
        assert_eq!(session.phase(), GamePhase::Resolving);
        assert_eq!(session.pending_choice(), Some("glass"));

        // Act
        let result = session
            .submit_choice(city, "grey", Uuid::new_v4(), &fixed_clock())
            .unwrap();

        // Assert
        assert!(result.is_none());
        assert_eq!(session.fines(), 0);
    }

    #[test]
    fn test_choice_before_start_is_ignored() {
        // Arrange
        let catalog = catalog();
        let city = catalog.get_city("berlin").unwrap();
        let mut session = GameSession::new(Uuid::new_v4());

        // Act
        let result = session
            .submit_choice(city, "glass", Uuid::new_v4(), &fixed_clock())
            .unwrap();

        // Assert
        assert!(result.is_none());
        assert_eq!(session.phase(), GamePhase::NotStarted);
    }

    // --- advance_round tests ---

    #[test]
    fn test_advance_round_draws_next_item() {
        // Arrange
        let catalog = catalog();
        let city = catalog.get_city("berlin").unwrap();
        let mut session = started(&catalog, "berlin", "glass_jars", 1);
        session
            .submit_choice(city, "glass", Uuid::new_v4(), &fixed_clock())
            .unwrap();
        let mut rng = SequenceRng::new(vec![0]);

        // Act
        let advance = session
            .advance_round(&catalog, city, Uuid::new_v4(), &fixed_clock(), &mut rng)
            .unwrap();

        // Assert
        assert!(matches!(
            advance,
            RoundAdvance::NextRound { round: 2, ref item } if item.key == "plastic_packaging"
        ));
        assert_eq!(session.round(), 2);
        assert_eq!(session.phase(), GamePhase::AwaitingChoice);
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn test_advance_round_outside_round_transition_is_rejected() {
        // Arrange
        let catalog = catalog();
        let city = catalog.get_city("berlin").unwrap();
        let mut session = started(&catalog, "berlin", "glass_jars", 1);

        // Act
        let result = session.advance_round(&catalog, city, Uuid::new_v4(), &fixed_clock(), &mut MockRng);

        // Assert
        assert!(matches!(
            result,
            Err(DomainError::InvalidStateTransition { action: "advance the round", .. })
        ));
    }

    #[test]
    fn test_round_limit_ends_game_without_drawing() {
        // Arrange
        let catalog = catalog();
        let city = catalog.get_city("berlin").unwrap();
        let index = index_of(&catalog, city, "glass_jars");
        let clock = fixed_clock();
        let mut rng = SequenceRng::repeating(index, 10);
        let mut session = GameSession::new(Uuid::new_v4());
        session
            .start(&catalog, city, &GameConfig::default(), None, 0, Uuid::new_v4(), &clock, &mut rng)
            .unwrap();

        // Act
        let mut last = None;
        for round in 1..=10 {
            let result = session
                .submit_choice(city, "glass", Uuid::new_v4(), &clock)
                .unwrap()
                .unwrap();
            assert_eq!(result.is_final_round, round == 10);
            if round == 10 {
                assert_eq!(session.phase(), GamePhase::RoundTransition);
                assert!(session.summary().is_none());
            }
            last = Some(
                session
                    .advance_round(&catalog, city, Uuid::new_v4(), &clock, &mut rng)
                    .unwrap(),
            );
        }

        // Assert
        let Some(RoundAdvance::GameOver(summary)) = last else {
            panic!("expected game over after round 10");
        };
        assert_eq!(rng.consumed(), 10);
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(session.round(), 10);
        assert_eq!(summary.rounds_played, 10);
        assert_eq!(summary.accuracy_percent, 100);
        assert_eq!(summary.longest_streak, 10);
        assert_eq!(summary.net_score, i64::from(session.score()));
        assert!(summary.is_new_best);
        assert!(session.current_item().is_none());
        assert_eq!(
            session.uncommitted_events().last().unwrap().event_type(),
            "session.game_ended"
        );
    }

    #[test]
    fn test_game_over_rejects_further_rounds() {
        // Arrange
        let catalog = catalog();
        let city = catalog.get_city("berlin").unwrap();
        let config = GameConfig {
            round_limit: Some(1),
            ..GameConfig::default()
        };
        let clock = fixed_clock();
        let mut session = GameSession::new(Uuid::new_v4());
        session
            .start(&catalog, city, &config, None, 50, Uuid::new_v4(), &clock, &mut MockRng)
            .unwrap();
        session.submit_choice(city, "grey", Uuid::new_v4(), &clock).unwrap();
        let advance = session
            .advance_round(&catalog, city, Uuid::new_v4(), &clock, &mut MockRng)
            .unwrap();

        // Act
        let again = session.advance_round(&catalog, city, Uuid::new_v4(), &clock, &mut MockRng);
        let choice = session.submit_choice(city, "yellow", Uuid::new_v4(), &clock).unwrap();

        // Assert
        let RoundAdvance::GameOver(summary) = advance else {
            panic!("expected game over");
        };
        assert!(!summary.is_new_best);
        assert_eq!(summary.net_score, -100);
        assert!(again.is_err());
        assert!(choice.is_none());
    }

    #[test]
    fn test_unbounded_game_keeps_going() {
        // Arrange
        let catalog = catalog();
        let city = catalog.get_city("berlin").unwrap();
        let config = GameConfig::unbounded(ScoringRules::default());
        let clock = fixed_clock();
        let mut session = GameSession::new(Uuid::new_v4());
        session
            .start(&catalog, city, &config, None, 0, Uuid::new_v4(), &clock, &mut MockRng)
            .unwrap();

        // Act
        for _ in 0..12 {
            let result = session
                .submit_choice(city, "yellow", Uuid::new_v4(), &clock)
                .unwrap()
                .unwrap();
            assert!(!result.is_final_round);
            session
                .advance_round(&catalog, city, Uuid::new_v4(), &clock, &mut MockRng)
                .unwrap();
        }

        // Assert
        assert_eq!(session.round(), 13);
        assert_eq!(session.phase(), GamePhase::AwaitingChoice);
    }

    // --- replay tests ---

    #[test]
    fn test_replay_rebuilds_live_state() {
        // Arrange
        let catalog = catalog();
        let city = catalog.get_city("berlin").unwrap();
        let mut session = started(&catalog, "berlin", "glass_jars", 2);
        let clock = fixed_clock();
        session.submit_choice(city, "glass", Uuid::new_v4(), &clock).unwrap();
        session
            .advance_round(&catalog, city, Uuid::new_v4(), &clock, &mut MockRng)
            .unwrap();
        session.submit_choice(city, "blue", Uuid::new_v4(), &clock).unwrap();
        let events = session.uncommitted_events().to_vec();

        // Act
        let replayed = GameSession::replay(session.id, &events);

        // Assert
        assert_eq!(replayed.version(), session.version());
        assert_eq!(replayed.phase(), session.phase());
        assert_eq!(replayed.score(), session.score());
        assert_eq!(replayed.fines(), session.fines());
        assert_eq!(replayed.round(), session.round());
        assert_eq!(replayed.streak(), session.streak());
        assert_eq!(replayed.stats(), session.stats());
        assert_eq!(replayed.last_result(), session.last_result());
        assert!(replayed.uncommitted_events().is_empty());
    }
}
