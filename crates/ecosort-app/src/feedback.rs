//! Localizable feedback for scored choices and finished games.

use ecosort_catalog::{City, EligibleItem};
use ecosort_core::message::Message;
use ecosort_core::repository::StatsRecord;
use ecosort_scoring::ScoringResult;

/// Main feedback line for a scored choice.
///
/// Correct answers pick a tier by the streak after the answer: 10 and up
/// is a master streak, 5 fantastic, 3 great, anything below a plain
/// success naming the bin. Wrong answers name the bin the item belongs in.
#[must_use]
pub fn choice_message(city: &City, item: &EligibleItem, result: &ScoringResult) -> Message {
    if !result.is_correct {
        return Message::new("feedback_wrong")
            .with_param("item", &item.name)
            .with_param("bin", bin_display_name(city, &result.correct_bin));
    }
    let streak = result.streak_after;
    match streak {
        10.. => Message::new("feedback_streak_master")
            .with_param("streak", streak)
            .with_param("points", result.points_awarded.unwrap_or(0)),
        5.. => Message::new("feedback_fantastic_streak").with_param("streak", streak),
        3.. => Message::new("feedback_great_streak").with_param("streak", streak),
        _ => Message::new("feedback_perfect")
            .with_param("item", &item.name)
            .with_param("bin", bin_display_name(city, &result.chosen_bin)),
    }
}

/// The `+N points` or `+N€ fine` line of a scored choice.
#[must_use]
pub fn delta_message(result: &ScoringResult) -> Message {
    match (result.points_awarded, result.fine_delta) {
        (Some(points), _) => Message::new("points_awarded").with_param("points", points),
        (None, fine) => Message::new("fine_applied").with_param("fine", fine.unwrap_or(0)),
    }
}

/// Title shown while a long streak is running.
#[must_use]
pub fn streak_title(streak: u32) -> Option<Message> {
    let key = match streak {
        10.. => "streak_title_master",
        8.. => "streak_title_champion",
        5.. => "streak_title_on_fire",
        _ => return None,
    };
    Some(Message::new(key))
}

/// Share text for a finished game.
#[must_use]
pub fn share_message(net_score: i64) -> Message {
    Message::new("tweet_results").with_param("score", net_score)
}

/// Share text for the lifetime record.
#[must_use]
pub fn share_stats_message(record: &StatsRecord) -> Message {
    Message::new("share_stats")
        .with_param("best", record.best_score)
        .with_param("games", record.total_games_played)
}

fn bin_display_name(city: &City, bin_id: &str) -> String {
    city.bin_name(bin_id).unwrap_or(bin_id).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecosort_catalog::{Catalog, eligible_items};

    fn fixture(city_id: &str, key: &str) -> (Catalog, EligibleItem) {
        let catalog = Catalog::builtin().unwrap();
        let city = catalog.get_city(city_id).unwrap();
        let item = eligible_items(&catalog, city)
            .into_iter()
            .find(|i| i.key == key)
            .unwrap();
        (catalog, item)
    }

    fn result(is_correct: bool, chosen: &str, correct: &str, streak_after: u32) -> ScoringResult {
        ScoringResult {
            round: 1,
            is_correct,
            chosen_bin: chosen.to_owned(),
            correct_bin: correct.to_owned(),
            points_awarded: is_correct.then_some(10),
            bonus_points: 0,
            streak_after,
            fine_delta: (!is_correct).then_some(100),
            is_final_round: false,
        }
    }

    #[test]
    fn test_first_correct_answer_names_the_bin() {
        let (catalog, item) = fixture("berlin", "glass_jars");
        let city = catalog.get_city("berlin").unwrap();

        let message = choice_message(city, &item, &result(true, "glass", "glass", 1));

        assert_eq!(message.key, "feedback_perfect");
        assert_eq!(message.param("item"), Some(item.name.as_str()));
        assert_eq!(message.param("bin"), city.bin_name("glass"));
    }

    #[test]
    fn test_streak_tiers() {
        let (catalog, item) = fixture("berlin", "glass_jars");
        let city = catalog.get_city("berlin").unwrap();

        let keys: Vec<String> = [2, 3, 5, 9, 10]
            .into_iter()
            .map(|s| choice_message(city, &item, &result(true, "glass", "glass", s)).key)
            .collect();

        assert_eq!(
            keys,
            vec![
                "feedback_perfect",
                "feedback_great_streak",
                "feedback_fantastic_streak",
                "feedback_fantastic_streak",
                "feedback_streak_master"
            ]
        );
    }

    #[test]
    fn test_wrong_answer_in_munich_names_recycling_island() {
        let (catalog, item) = fixture("munich", "glass_jars");
        let city = catalog.get_city("munich").unwrap();

        let message = choice_message(city, &item, &result(false, "grey", "yellow", 0));

        assert_eq!(message.key, "feedback_wrong");
        assert_eq!(message.param("bin"), city.bin_name("recycling_island"));
    }

    #[test]
    fn test_delta_message() {
        assert_eq!(
            delta_message(&result(true, "glass", "glass", 1)),
            Message::new("points_awarded").with_param("points", 10)
        );
        assert_eq!(
            delta_message(&result(false, "grey", "glass", 0)),
            Message::new("fine_applied").with_param("fine", 100)
        );
    }

    #[test]
    fn test_streak_titles() {
        assert_eq!(streak_title(4), None);
        assert_eq!(streak_title(5).unwrap().key, "streak_title_on_fire");
        assert_eq!(streak_title(8).unwrap().key, "streak_title_champion");
        assert_eq!(streak_title(12).unwrap().key, "streak_title_master");
    }

    #[test]
    fn test_share_message_carries_net_score() {
        assert_eq!(share_message(-40).param("score"), Some("-40"));
    }

    #[test]
    fn test_share_stats_message_carries_record() {
        let record = StatsRecord {
            total_games_played: 4,
            best_score: 120,
            ..StatsRecord::default()
        };

        let message = share_stats_message(&record);

        assert_eq!(message.param("best"), Some("120"));
        assert_eq!(message.param("games"), Some("4"));
    }
}
