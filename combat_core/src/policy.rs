//! Opponent policy - how an opponent picks its action
//!
//! The threshold policy is a pure function of the opponent's state plus,
//! in the low-life band, one coin flip:
//! 1. A character that cannot drink always attacks
//! 2. Below the critical threshold it always tries to drink, potion or not
//! 3. Below the low threshold, with a potion in the bag, it drinks half the time
//! 4. Otherwise it attacks

use crate::character::{Action, Character};
use crate::CharacterError;
use bag_core::RangeRoller;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decides an opponent's action for the current turn
pub trait OpponentPolicy: fmt::Debug {
    /// Must not be called for a dead character
    fn decide_action(
        &self,
        character: &Character,
        roller: &mut dyn RangeRoller,
    ) -> Result<Action, CharacterError>;
}

/// Life thresholds of the [`ThresholdPolicy`], as percentages of max life
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Below this the opponent always tries to drink
    #[serde(default = "default_critical_percent")]
    pub critical_percent: f64,
    /// Below this the opponent drinks with even odds, if it has a potion
    #[serde(default = "default_low_percent")]
    pub low_percent: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            critical_percent: default_critical_percent(),
            low_percent: default_low_percent(),
        }
    }
}

fn default_critical_percent() -> f64 {
    5.0
}
fn default_low_percent() -> f64 {
    25.0
}

impl PolicyConfig {
    /// Parse thresholds from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// The default opponent behaviour
#[derive(Debug, Clone, Default)]
pub struct ThresholdPolicy {
    config: PolicyConfig,
}

impl ThresholdPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        ThresholdPolicy { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }
}

impl OpponentPolicy for ThresholdPolicy {
    fn decide_action(
        &self,
        character: &Character,
        roller: &mut dyn RangeRoller,
    ) -> Result<Action, CharacterError> {
        if character.is_dead() {
            return Err(CharacterError::DeadCharacter(character.name().to_string()));
        }

        if !character.stats().can_drink_potion() {
            return Ok(Action::Attack);
        }

        let life_percent = character.life_percent();

        // Tries to drink without looking in the bag first
        if life_percent < self.config.critical_percent {
            tracing::debug!(character = character.name(), life_percent, "critical life, drinking");
            return Ok(Action::DrinkPotion);
        }

        if life_percent < self.config.low_percent
            && character.inventory().has_potion()
            && roller.coin_flip()
        {
            tracing::debug!(character = character.name(), life_percent, "low life, drinking");
            return Ok(Action::DrinkPotion);
        }

        Ok(Action::Attack)
    }
}
