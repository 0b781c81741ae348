//! Keyboard shortcuts.

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Throw into the bin at this position of the city's bin row.
    SelectBin(usize),
    /// Abandon the current game.
    Reset,
    /// Start a game in the selected city.
    Start,
    /// Close the open overlay.
    CloseOverlay,
}

/// The parts of controller state that decide what keys do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputContext {
    /// An overlay (instructions, stats) is covering the game.
    pub overlay_open: bool,
    /// A game exists.
    pub game_active: bool,
    /// An item is waiting for a choice.
    pub awaiting_choice: bool,
    /// A city has been picked.
    pub city_selected: bool,
}

/// Maps a key name (as in `KeyboardEvent.key`) to an action.
///
/// With an overlay open only `Escape` works. Before a game only `Enter`
/// works, and only once a city is selected. During a game `1`-`4` (or
/// `y` `b` `o` `g`) pick a bin while an item waits, and `r` resets.
#[must_use]
pub fn map_key(key: &str, context: InputContext) -> Option<KeyAction> {
    if context.overlay_open {
        return (key == "Escape").then_some(KeyAction::CloseOverlay);
    }
    if !context.game_active {
        return (key == "Enter" && context.city_selected).then_some(KeyAction::Start);
    }
    match key {
        "r" | "R" => Some(KeyAction::Reset),
        _ if context.awaiting_choice => bin_index(key).map(KeyAction::SelectBin),
        _ => None,
    }
}

fn bin_index(key: &str) -> Option<usize> {
    match key {
        "1" | "y" | "Y" => Some(0),
        "2" | "b" | "B" => Some(1),
        "3" | "o" | "O" => Some(2),
        "4" | "g" | "G" => Some(3),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYING: InputContext = InputContext {
        overlay_open: false,
        game_active: true,
        awaiting_choice: true,
        city_selected: true,
    };

    #[test]
    fn test_bin_keys_map_to_positions() {
        assert_eq!(map_key("1", PLAYING), Some(KeyAction::SelectBin(0)));
        assert_eq!(map_key("B", PLAYING), Some(KeyAction::SelectBin(1)));
        assert_eq!(map_key("o", PLAYING), Some(KeyAction::SelectBin(2)));
        assert_eq!(map_key("4", PLAYING), Some(KeyAction::SelectBin(3)));
        assert_eq!(map_key("5", PLAYING), None);
    }

    #[test]
    fn test_bin_keys_ignored_between_rounds() {
        let context = InputContext {
            awaiting_choice: false,
            ..PLAYING
        };

        assert_eq!(map_key("1", context), None);
        assert_eq!(map_key("r", context), Some(KeyAction::Reset));
    }

    #[test]
    fn test_overlay_swallows_everything_but_escape() {
        let context = InputContext {
            overlay_open: true,
            ..PLAYING
        };

        assert_eq!(map_key("1", context), None);
        assert_eq!(map_key("Escape", context), Some(KeyAction::CloseOverlay));
    }

    #[test]
    fn test_enter_starts_only_with_a_city() {
        let idle = InputContext::default();
        let ready = InputContext {
            city_selected: true,
            ..idle
        };

        assert_eq!(map_key("Enter", idle), None);
        assert_eq!(map_key("Enter", ready), Some(KeyAction::Start));
        assert_eq!(map_key("1", ready), None);
    }
}
