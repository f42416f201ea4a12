use serde::{Deserialize, Serialize};

use super::types::GameOverRule;
use crate::config::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Puzzle2048Settings {
    /// Chance in percent that a spawned tile is a 4 rather than a 2.
    pub four_spawn_percent: u32,
    pub game_over_rule: GameOverRule,
}

impl Default for Puzzle2048Settings {
    fn default() -> Self {
        Self {
            four_spawn_percent: 10,
            game_over_rule: GameOverRule::NoMovesLeft,
        }
    }
}

impl Validate for Puzzle2048Settings {
    fn validate(&self) -> Result<(), String> {
        if self.four_spawn_percent > 100 {
            return Err(format!(
                "Four spawn percent must be between 0 and 100, got {}",
                self.four_spawn_percent
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Puzzle2048Settings::default().validate(), Ok(()));
    }

    #[test]
    fn test_percent_above_hundred_rejected() {
        let settings = Puzzle2048Settings {
            four_spawn_percent: 101,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: Puzzle2048Settings =
            serde_yaml_ng::from_str("game_over_rule: board_full\n").unwrap();
        assert_eq!(settings.game_over_rule, GameOverRule::BoardFull);
        assert_eq!(settings.four_spawn_percent, 10);
    }
}
