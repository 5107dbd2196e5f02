//! CharacterStats - validated life and attack configuration

use crate::CharacterError;
use serde::Serialize;

/// Life and attack stats of a character
///
/// Invariants, checked by [`CharacterStats::new`]:
/// - `max_life > 0`
/// - `0 <= attack_min <= attack_max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterStats {
    max_life: i32,
    attack_min: i32,
    attack_max: i32,
    can_drink_potion: bool,
}

impl CharacterStats {
    pub fn new(
        max_life: i32,
        attack_min: i32,
        attack_max: i32,
        can_drink_potion: bool,
    ) -> Result<Self, CharacterError> {
        if max_life <= 0 {
            return Err(CharacterError::InvalidStats(format!(
                "maximum life must be positive (got {max_life})"
            )));
        }
        if attack_min < 0 {
            return Err(CharacterError::InvalidStats(format!(
                "minimum attack cannot be negative (got {attack_min})"
            )));
        }
        if attack_max < 0 {
            return Err(CharacterError::InvalidStats(format!(
                "maximum attack cannot be negative (got {attack_max})"
            )));
        }
        if attack_min > attack_max {
            return Err(CharacterError::InvalidStats(format!(
                "minimum attack {attack_min} is greater than maximum attack {attack_max}"
            )));
        }

        Ok(CharacterStats {
            max_life,
            attack_min,
            attack_max,
            can_drink_potion,
        })
    }

    pub fn max_life(&self) -> i32 {
        self.max_life
    }

    pub fn attack_min(&self) -> i32 {
        self.attack_min
    }

    pub fn attack_max(&self) -> i32 {
        self.attack_max
    }

    pub fn can_drink_potion(&self) -> bool {
        self.can_drink_potion
    }
}
