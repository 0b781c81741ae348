//! Translation tables.

use crate::language::Language;

pub(crate) const EN: &[(&str, &str)] = &[
    ("title", "German Waste Sorting Game"),
    ("select_city", "Select a City"),
    ("start_game", "Start Game"),
    ("score", "Score"),
    ("fines", "Fines"),
    ("round", "Round"),
    ("throw_away", "Throw Away"),
    ("correct", "Correct"),
    ("wrong", "Wrong"),
    ("of", "of"),
    ("next_item", "Next Item"),
    ("restart_game", "Restart Game"),
    ("share_results", "Share Results"),
    (
        "tweet_results",
        "I scored {{score}} points in the German Waste Sorting Game! Can you beat my score? #GermanWasteGame #Recycling",
    ),
    ("game_over", "Game Over"),
    ("final_score", "Final Score"),
    ("total_fines", "Total Fines"),
    ("accuracy", "Accuracy"),
    ("feedback_success_base", "Correct! You earned"),
    ("feedback_success_streak", "points. Streak x{{streak}}!"),
    (
        "feedback_error",
        "Oops! That's not the right bin. You've been fined",
    ),
    ("points", "points"),
    ("city_info", "In {{city}}, the waste is managed by {{authority}}."),
    ("bin_info", "This is the {{binName}}."),
    ("welcome", "Welcome to the German Waste Sorting Game!"),
    (
        "instructions",
        "Select a city to learn about its waste sorting rules. Then, start the game and drag the trash items to the correct bins.",
    ),
    ("sound_on", "Sound On"),
    ("sound_off", "Sound Off"),
    ("feedback_perfect", "Perfect! {{item}} belongs in {{bin}}!"),
    (
        "feedback_great_streak",
        "Great {{streak}}-streak going! Keep it up!",
    ),
    (
        "feedback_fantastic_streak",
        "Fantastic {{streak}}-streak! Bonus points earned!",
    ),
    (
        "feedback_streak_master",
        "AMAZING! {{streak}}-streak master! That's +{{points}} points!",
    ),
    ("feedback_wrong", "Oops! {{item}} should go to {{bin}}!"),
    ("points_awarded", "+{{points}} points"),
    ("fine_applied", "+{{fine}}€ fine"),
    ("streak_title_on_fire", "ON FIRE! Streak Bonus Active!"),
    ("streak_title_champion", "SORTING CHAMPION!"),
    ("streak_title_master", "WASTE SORTING MASTER!"),
    ("new_best_score", "New best score: {{score}}!"),
    ("best_score", "Best Score"),
    ("games_played", "Games Played"),
    ("longest_streak", "Longest Streak"),
    (
        "share_stats",
        "Best score: {{best}} | Games played: {{games}}",
    ),
    ("stats_reset", "Statistics have been reset!"),
    ("achievement_first_game", "First Game Played"),
    ("achievement_score_master", "Score Master (50+ points)"),
    ("achievement_on_fire", "On Fire (5+ streak)"),
    ("achievement_dedicated_player", "Dedicated Player (10+ games)"),
    (
        "achievement_champion",
        "Waste Sorting Champion (100+ points)",
    ),
    ("achievement_unlocked", "Achievement unlocked: {{name}}"),
    ("error_city_not_found", "Unknown city: {{city}}."),
    (
        "error_empty_catalog",
        "{{city}} has no items to sort yet.",
    ),
    ("error_invalid_bin", "{{bin}} is not a bin in {{city}}."),
    ("error_invalid_state", "That is not possible right now."),
    ("error_validation", "Invalid input: {{detail}}"),
    (
        "error_storage",
        "Your statistics could not be saved or loaded.",
    ),
];

pub(crate) const DE: &[(&str, &str)] = &[
    ("title", "Deutsches Müllsortier-Spiel"),
    ("select_city", "Wähle eine Stadt"),
    ("start_game", "Spiel starten"),
    ("score", "Punkte"),
    ("fines", "Bußgelder"),
    ("round", "Runde"),
    ("throw_away", "Wegwerfen"),
    ("correct", "Richtig"),
    ("wrong", "Falsch"),
    ("of", "von"),
    ("next_item", "Nächster Gegenstand"),
    ("restart_game", "Spiel neustarten"),
    ("share_results", "Ergebnisse teilen"),
    (
        "tweet_results",
        "Ich habe {{score}} Punkte im Deutschen Müllsortier-Spiel erzielt! Kannst du mein Ergebnis übertreffen? #GermanWasteGame #Recycling",
    ),
    ("game_over", "Spiel beendet"),
    ("final_score", "Endstand"),
    ("total_fines", "Gesamte Bußgelder"),
    ("accuracy", "Genauigkeit"),
    ("feedback_success_base", "Richtig! Du hast"),
    ("feedback_success_streak", "Punkte erhalten. Serie x{{streak}}!"),
    (
        "feedback_error",
        "Hoppla! Das ist nicht der richtige Behälter. Du hast eine Geldstrafe von",
    ),
    ("points", "Punkte"),
    ("city_info", "In {{city}} wird der Müll von {{authority}} verwaltet."),
    ("bin_info", "Dies ist der {{binName}}."),
    ("welcome", "Willkommen beim Deutschen Müllsortier-Spiel!"),
    (
        "instructions",
        "Wähle eine Stadt, um deren Müllsortierregeln zu lernen. Starte dann das Spiel und ziehe die Müllgegenstände in die richtigen Behälter.",
    ),
    ("sound_on", "Ton an"),
    ("sound_off", "Ton aus"),
    ("feedback_perfect", "Perfekt! {{item}} gehört in {{bin}}!"),
    (
        "feedback_great_streak",
        "Tolle {{streak}}er-Serie! Weiter so!",
    ),
    (
        "feedback_fantastic_streak",
        "Fantastische {{streak}}er-Serie! Bonuspunkte verdient!",
    ),
    (
        "feedback_streak_master",
        "WAHNSINN! {{streak}}er-Serie! Das sind +{{points}} Punkte!",
    ),
    ("feedback_wrong", "Hoppla! {{item}} gehört in {{bin}}!"),
    ("points_awarded", "+{{points}} Punkte"),
    ("fine_applied", "+{{fine}}€ Bußgeld"),
    ("streak_title_on_fire", "IN FAHRT! Serienbonus aktiv!"),
    ("streak_title_champion", "SORTIER-CHAMPION!"),
    ("streak_title_master", "MÜLLSORTIER-MEISTER!"),
    ("new_best_score", "Neue Bestleistung: {{score}}!"),
    ("best_score", "Bestleistung"),
    ("games_played", "Gespielte Spiele"),
    ("longest_streak", "Längste Serie"),
    (
        "share_stats",
        "Bestleistung: {{best}} | Gespielte Spiele: {{games}}",
    ),
    ("stats_reset", "Die Statistik wurde zurückgesetzt!"),
    ("achievement_first_game", "Erstes Spiel gespielt"),
    ("achievement_score_master", "Punktemeister (50+ Punkte)"),
    ("achievement_on_fire", "In Fahrt (5+ Serie)"),
    ("achievement_dedicated_player", "Treuer Spieler (10+ Spiele)"),
    (
        "achievement_champion",
        "Müllsortier-Champion (100+ Punkte)",
    ),
    ("achievement_unlocked", "Erfolg freigeschaltet: {{name}}"),
    ("error_city_not_found", "Unbekannte Stadt: {{city}}."),
    (
        "error_empty_catalog",
        "Für {{city}} gibt es noch nichts zu sortieren.",
    ),
    ("error_invalid_bin", "{{bin}} ist kein Behälter in {{city}}."),
    ("error_invalid_state", "Das ist gerade nicht möglich."),
    ("error_validation", "Ungültige Eingabe: {{detail}}"),
    (
        "error_storage",
        "Deine Statistik konnte nicht gespeichert oder geladen werden.",
    ),
];

pub(crate) fn table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::En => EN,
        Language::De => DE,
    }
}

pub(crate) fn lookup(language: Language, key: &str) -> Option<&'static str> {
    table(language)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}
