//! Point, fine and streak-bonus rules.

use std::str::FromStr;

use ecosort_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// How consecutive correct answers are rewarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StreakBonus {
    /// No bonus at all.
    None,
    /// From `threshold` on, each further streak step adds `per_step`,
    /// capped at `cap`.
    Escalating {
        /// First streak length that earns a bonus.
        threshold: u32,
        /// Bonus growth per streak step.
        per_step: u32,
        /// Maximum bonus per answer.
        cap: u32,
    },
    /// `bonus` for every full `every` answers of the streak.
    Milestone {
        /// Streak length of one milestone.
        every: u32,
        /// Bonus per milestone reached.
        bonus: u32,
    },
}

impl StreakBonus {
    /// +2 per streak step from the third correct answer on, capped at 20.
    #[must_use]
    pub const fn escalating() -> Self {
        Self::Escalating {
            threshold: 3,
            per_step: 2,
            cap: 20,
        }
    }

    /// +5 for every five answers of the streak.
    #[must_use]
    pub const fn milestone() -> Self {
        Self::Milestone { every: 5, bonus: 5 }
    }

    /// Bonus for an answer that brought the streak to `streak`.
    #[must_use]
    pub fn bonus_for(self, streak: u32) -> u32 {
        match self {
            Self::None => 0,
            Self::Escalating {
                threshold,
                per_step,
                cap,
            } => {
                if streak < threshold.max(1) {
                    0
                } else {
                    (streak - threshold.max(1) + 1)
                        .saturating_mul(per_step)
                        .min(cap)
                }
            }
            Self::Milestone { every, bonus } => {
                if every == 0 {
                    0
                } else {
                    (streak / every).saturating_mul(bonus)
                }
            }
        }
    }
}

impl Default for StreakBonus {
    fn default() -> Self {
        Self::escalating()
    }
}

impl FromStr for StreakBonus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "escalating" => Ok(Self::escalating()),
            "milestone" => Ok(Self::milestone()),
            "none" => Ok(Self::None),
            other => Err(DomainError::Validation(format!(
                "unknown streak bonus policy: {other}"
            ))),
        }
    }
}

/// The constants of one game. Fixed for the whole game once it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Points for any correct answer.
    pub base_points: u32,
    /// Fine for a wrong answer.
    pub fine: u32,
    /// Streak bonus policy.
    pub streak_bonus: StreakBonus,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            base_points: 10,
            fine: 100,
            streak_bonus: StreakBonus::default(),
        }
    }
}

/// Score deltas of a single answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundScore {
    /// Whether the answer was right.
    pub is_correct: bool,
    /// Points added to the score (base + bonus); 0 when wrong.
    pub points: u32,
    /// Bonus part of `points`.
    pub bonus: u32,
    /// Fine added; 0 when right.
    pub fine: u32,
    /// Streak after this answer.
    pub streak_after: u32,
}

impl ScoringRules {
    /// Scores one answer given the streak before it.
    #[must_use]
    pub fn evaluate(&self, is_correct: bool, streak_before: u32) -> RoundScore {
        if is_correct {
            let streak_after = streak_before.saturating_add(1);
            let bonus = self.streak_bonus.bonus_for(streak_after);
            RoundScore {
                is_correct,
                points: self.base_points.saturating_add(bonus),
                bonus,
                fine: 0,
                streak_after,
            }
        } else {
            RoundScore {
                is_correct,
                points: 0,
                bonus: 0,
                fine: self.fine,
                streak_after: 0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_streak(rules: &ScoringRules, answers: u32) -> Vec<u32> {
        let mut streak = 0;
        (0..answers)
            .map(|_| {
                let score = rules.evaluate(true, streak);
                streak = score.streak_after;
                score.points
            })
            .collect()
    }

    #[test]
    fn test_three_correct_answers_yield_ten_ten_twelve() {
        let rules = ScoringRules::default();

        let points = run_streak(&rules, 3);

        assert_eq!(points, vec![10, 10, 12]);
        assert_eq!(points.iter().sum::<u32>(), 32);
    }

    #[test]
    fn test_escalating_bonus_is_capped_at_twenty() {
        let bonus = StreakBonus::escalating();

        assert_eq!(bonus.bonus_for(2), 0);
        assert_eq!(bonus.bonus_for(4), 4);
        assert_eq!(bonus.bonus_for(11), 18);
        assert_eq!(bonus.bonus_for(12), 20);
        assert_eq!(bonus.bonus_for(40), 20);
    }

    #[test]
    fn test_milestone_bonus_pays_every_five() {
        let bonus = StreakBonus::milestone();

        assert_eq!(bonus.bonus_for(4), 0);
        assert_eq!(bonus.bonus_for(5), 5);
        assert_eq!(bonus.bonus_for(9), 5);
        assert_eq!(bonus.bonus_for(10), 10);
    }

    #[test]
    fn test_milestone_rules_score_differently_from_escalating() {
        let escalating = ScoringRules::default();
        let milestone = ScoringRules {
            streak_bonus: StreakBonus::milestone(),
            ..ScoringRules::default()
        };

        assert_eq!(run_streak(&escalating, 5).iter().sum::<u32>(), 62);
        assert_eq!(run_streak(&milestone, 5).iter().sum::<u32>(), 55);
    }

    #[test]
    fn test_wrong_answer_resets_streak_and_fines() {
        let rules = ScoringRules::default();

        let score = rules.evaluate(false, 7);

        assert!(!score.is_correct);
        assert_eq!(score.points, 0);
        assert_eq!(score.fine, 100);
        assert_eq!(score.streak_after, 0);
    }

    #[test]
    fn test_no_bonus_policy_awards_only_base_points() {
        let rules = ScoringRules {
            streak_bonus: StreakBonus::None,
            ..ScoringRules::default()
        };

        assert_eq!(run_streak(&rules, 6), vec![10; 6]);
    }

    #[test]
    fn test_streak_bonus_parses_policy_names() {
        assert_eq!("Milestone".parse::<StreakBonus>().unwrap(), StreakBonus::milestone());
        assert_eq!("escalating".parse::<StreakBonus>().unwrap(), StreakBonus::escalating());
        assert!("double".parse::<StreakBonus>().is_err());
    }
}
