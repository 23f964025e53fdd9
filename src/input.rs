//! Keyboard input mapping
//!
//! Raw key codes (`KeyboardEvent.code`) are turned into a closed set of
//! actions by a pure function, so dispatch can be tested without a page.

use serde::{Deserialize, Serialize};

/// Everything a key press can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Step rod1 toward the low end of its slide axis
    MoveRod1Left,
    /// Step rod1 toward the high end of its slide axis
    MoveRod1Right,
    MoveRod2Left,
    MoveRod2Right,
    /// Start the game if it is not running yet
    StartGame,
    Ignore,
}

/// Key codes bound to each action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub rod1_left: String,
    pub rod1_right: String,
    pub rod2_left: String,
    pub rod2_right: String,
    pub start: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            rod1_left: "KeyA".to_string(),
            rod1_right: "KeyW".to_string(),
            rod2_left: "KeyS".to_string(),
            rod2_right: "KeyD".to_string(),
            start: "Enter".to_string(),
        }
    }
}

/// Map a key code to an action. Unknown codes map to [`Action::Ignore`].
pub fn map_key(code: &str, bindings: &KeyBindings) -> Action {
    if code == bindings.start {
        Action::StartGame
    } else if code == bindings.rod1_left {
        Action::MoveRod1Left
    } else if code == bindings.rod1_right {
        Action::MoveRod1Right
    } else if code == bindings.rod2_left {
        Action::MoveRod2Left
    } else if code == bindings.rod2_right {
        Action::MoveRod2Right
    } else {
        Action::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(map_key("Enter", &keys), Action::StartGame);
        assert_eq!(map_key("KeyA", &keys), Action::MoveRod1Left);
        assert_eq!(map_key("KeyW", &keys), Action::MoveRod1Right);
        assert_eq!(map_key("KeyS", &keys), Action::MoveRod2Left);
        assert_eq!(map_key("KeyD", &keys), Action::MoveRod2Right);
    }

    #[test]
    fn test_unknown_codes_ignored() {
        let keys = KeyBindings::default();
        assert_eq!(map_key("Space", &keys), Action::Ignore);
        assert_eq!(map_key("", &keys), Action::Ignore);
        // Codes are case sensitive, like KeyboardEvent.code
        assert_eq!(map_key("keya", &keys), Action::Ignore);
    }

    #[test]
    fn test_rebound_keys() {
        let keys = KeyBindings {
            rod2_right: "ArrowRight".to_string(),
            ..Default::default()
        };
        assert_eq!(map_key("ArrowRight", &keys), Action::MoveRod2Right);
        assert_eq!(map_key("KeyD", &keys), Action::Ignore);
    }
}
