//! Milestones unlocked by the lifetime record.

use ecosort_core::repository::StatsRecord;
use serde::{Deserialize, Serialize};

/// An achievement badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    /// At least one completed game.
    FirstGame,
    /// Best score of 50 or more.
    ScoreMaster,
    /// Streak of 5 or more.
    OnFire,
    /// At least 10 completed games.
    DedicatedPlayer,
    /// Best score of 100 or more.
    Champion,
}

impl Achievement {
    /// All achievements in display order.
    pub const ALL: [Self; 5] = [
        Self::FirstGame,
        Self::ScoreMaster,
        Self::OnFire,
        Self::DedicatedPlayer,
        Self::Champion,
    ];

    /// Stable identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::FirstGame => "first_game",
            Self::ScoreMaster => "score_master",
            Self::OnFire => "on_fire",
            Self::DedicatedPlayer => "dedicated_player",
            Self::Champion => "champion",
        }
    }

    /// Localization key of the badge title.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Self::FirstGame => "achievement_first_game",
            Self::ScoreMaster => "achievement_score_master",
            Self::OnFire => "achievement_on_fire",
            Self::DedicatedPlayer => "achievement_dedicated_player",
            Self::Champion => "achievement_champion",
        }
    }

    /// Badge icon.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::FirstGame => "🎮",
            Self::ScoreMaster => "🏆",
            Self::OnFire => "🔥",
            Self::DedicatedPlayer => "🎯",
            Self::Champion => "👑",
        }
    }

    /// Whether `record` earns this achievement.
    #[must_use]
    pub fn is_unlocked(self, record: &StatsRecord) -> bool {
        match self {
            Self::FirstGame => record.total_games_played >= 1,
            Self::ScoreMaster => record.best_score >= 50,
            Self::OnFire => record.longest_streak >= 5,
            Self::DedicatedPlayer => record.total_games_played >= 10,
            Self::Champion => record.best_score >= 100,
        }
    }

    /// Achievements earned by `record`, in display order.
    #[must_use]
    pub fn unlocked(record: &StatsRecord) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|a| a.is_unlocked(record))
            .collect()
    }

    /// Achievements earned by `after` that `before` did not have.
    #[must_use]
    pub fn newly_unlocked(before: &StatsRecord, after: &StatsRecord) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|a| a.is_unlocked(after) && !a.is_unlocked(before))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(games: u32, best: i64, streak: u32) -> StatsRecord {
        StatsRecord {
            total_games_played: games,
            best_score: best,
            longest_streak: streak,
            last_updated: None,
        }
    }

    #[test]
    fn test_fresh_record_has_no_achievements() {
        assert!(Achievement::unlocked(&StatsRecord::default()).is_empty());
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let unlocked = Achievement::unlocked(&record(10, 100, 5));

        assert_eq!(unlocked, Achievement::ALL.to_vec());
    }

    #[test]
    fn test_below_thresholds() {
        let unlocked = Achievement::unlocked(&record(9, 49, 4));

        assert_eq!(unlocked, vec![Achievement::FirstGame]);
    }

    #[test]
    fn test_newly_unlocked_reports_only_the_difference() {
        let before = record(0, 0, 0);
        let after = record(1, 62, 5);

        let new = Achievement::newly_unlocked(&before, &after);

        assert_eq!(
            new,
            vec![
                Achievement::FirstGame,
                Achievement::ScoreMaster,
                Achievement::OnFire
            ]
        );
        assert!(Achievement::newly_unlocked(&after, &after).is_empty());
    }
}
