//! Integration tests for optional controller features.

mod common;

use std::sync::Arc;

use ecosort_app::Capabilities;
use ecosort_catalog::Difficulty;
use ecosort_core::repository::StatsRepository;
use ecosort_i18n::Language;
use ecosort_test_support::{EmptyStatsRepository, SequenceRng};

fn repository() -> Arc<dyn StatsRepository> {
    Arc::new(EmptyStatsRepository)
}

#[tokio::test]
async fn test_sound_disabled_emits_no_cues() {
    let mut controller = common::build_controller_with(
        common::drawing("berlin", "glass_jars", 1),
        repository(),
        common::config_with(Capabilities {
            sound: false,
            ..Capabilities::default()
        }),
    )
    .await;
    controller.start_game("berlin").unwrap();

    let feedback = controller.submit_choice("glass").unwrap().unwrap();

    assert!(feedback.sounds.is_empty());
    assert!(feedback.result.is_correct);
}

#[tokio::test]
async fn test_selected_difficulty_filters_items() {
    let mut controller = common::build_controller_with(
        SequenceRng::new(vec![0]),
        repository(),
        common::config_with(Capabilities::default()),
    )
    .await;
    controller.select_difficulty(Some(Difficulty::Hard));

    let snapshot = controller.start_game("berlin").unwrap();

    assert_eq!(snapshot.difficulty, Some(Difficulty::Hard));
    assert_eq!(snapshot.current_item.unwrap().difficulty, Some(Difficulty::Hard));
}

#[tokio::test]
async fn test_difficulty_ignored_when_disabled() {
    let mut controller = common::build_controller_with(
        SequenceRng::new(vec![0]),
        repository(),
        common::config_with(Capabilities {
            difficulty_selection: false,
            ..Capabilities::default()
        }),
    )
    .await;
    controller.select_difficulty(Some(Difficulty::Hard));

    let snapshot = controller.start_game("berlin").unwrap();

    assert_eq!(snapshot.difficulty, None);
    assert_eq!(snapshot.current_item.unwrap().key, "plastic_packaging");
}

#[tokio::test]
async fn test_feedback_renders_in_selected_language() {
    let mut controller = common::build_controller_with(
        common::drawing("berlin", "glass_jars", 1),
        repository(),
        common::config_with(Capabilities::default()),
    )
    .await;
    controller.start_game("berlin").unwrap();
    let feedback = controller.submit_choice("grey").unwrap().unwrap();

    let english = controller.render(&feedback.delta);
    controller.set_language(Language::De);
    let german = controller.render(&feedback.delta);

    assert_eq!(english, "+100€ fine");
    assert_eq!(german, "+100€ Bußgeld");
    assert_eq!(controller.language(), Language::De);
}

#[tokio::test]
async fn test_city_selection_lists_bins() {
    let mut controller = common::build_controller_with(
        SequenceRng::new(vec![]),
        repository(),
        common::config_with(Capabilities::default()),
    )
    .await;

    let cities = controller.list_cities();
    let munich = controller.select_city("munich").unwrap();
    let info = controller.render(&controller.city_info("munich").unwrap());

    assert_eq!(cities.len(), 14);
    assert_eq!(controller.selected_city(), Some("munich"));
    assert!(munich.bins.iter().any(|bin| bin.id == "recycling_island"));
    assert!(info.starts_with("In Munich"));
    assert_eq!(
        controller.bin_info("recycling_island").unwrap().param("binName"),
        Some("Recycling Island")
    );
    assert!(controller.bin_info("yellow").is_none());
    assert_eq!(controller.select_city("atlantis").unwrap_err().code(), "city_not_found");
}
