//! Character - a combatant with stats, life and a bag
//!
//! A character is either alive (`current_life > 0`) or dead. Death is
//! terminal: a dead character can neither attack nor drink.

use crate::stats::CharacterStats;
use crate::CharacterError;
use bag_core::{Inventory, RangeRoller};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Points returned in place of a recovery when the bag holds no potion
pub const POTION_NOT_FOUND: i32 = -1;

/// The two things a character can do on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Attack,
    DrinkPotion,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Attack, Action::DrinkPotion];

    /// Menu token used by text front ends
    pub fn token(&self) -> &'static str {
        match self {
            Action::Attack => "1",
            Action::DrinkPotion => "2",
        }
    }

    pub fn from_token(token: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|action| action.token() == token.trim())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Attack => write!(f, "attack"),
            Action::DrinkPotion => write!(f, "drink a potion"),
        }
    }
}

/// Result of searching the bag for a potion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrinkOutcome {
    /// A potion was drunk and gave back this much life (before capping at max life)
    Recovered(i32),
    /// The bag held no potion
    NothingFound,
}

impl DrinkOutcome {
    /// Recovery points, or [`POTION_NOT_FOUND`]
    pub fn as_points(&self) -> i32 {
        match self {
            DrinkOutcome::Recovered(points) => *points,
            DrinkOutcome::NothingFound => POTION_NOT_FOUND,
        }
    }

    pub fn found_potion(&self) -> bool {
        matches!(self, DrinkOutcome::Recovered(_))
    }
}

/// A combatant
#[derive(Debug, Clone, Serialize)]
pub struct Character {
    name: String,
    stats: CharacterStats,
    inventory: Inventory,
    current_life: i32,
    took_a_potion: bool,
}

impl Character {
    /// Create a character at full life
    pub fn new(
        name: impl Into<String>,
        stats: CharacterStats,
        inventory: Inventory,
    ) -> Result<Self, CharacterError> {
        let name = validate_name(name.into())?;
        Ok(Character {
            name,
            current_life: stats.max_life(),
            stats,
            inventory,
            took_a_potion: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable bag access, for setup
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn current_life(&self) -> i32 {
        self.current_life
    }

    /// Whether the character spent this turn searching its bag
    pub fn took_a_potion(&self) -> bool {
        self.took_a_potion
    }

    pub fn is_dead(&self) -> bool {
        self.current_life <= 0
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead()
    }

    /// Remaining life as a percentage of max life
    pub fn life_percent(&self) -> f64 {
        f64::from(self.current_life) / f64::from(self.stats.max_life()) * 100.0
    }

    /// e.g. "Hero has 42/50 life"
    pub fn life_status(&self) -> String {
        format!(
            "{} has {}/{} life",
            self.name,
            self.current_life,
            self.stats.max_life()
        )
    }

    /// One-line summary followed by one line per inventory item
    pub fn who(&self) -> String {
        let mut infos = self.to_string();
        for item in &self.inventory {
            infos.push_str(&format!("\n  {item}"));
        }
        infos
    }

    /// Attack `target` for a damage roll in the attack range
    ///
    /// Returns the damage dealt. The target's life is floored at 0.
    pub fn attacks(
        &self,
        target: &mut Character,
        roller: &mut dyn RangeRoller,
    ) -> Result<i32, CharacterError> {
        if self.is_dead() {
            return Err(CharacterError::DeadCharacter(self.name.clone()));
        }

        let damage = roller.roll(self.stats.attack_min(), self.stats.attack_max());
        target.apply_damage(damage);
        tracing::debug!(
            attacker = %self.name,
            defender = %target.name,
            damage,
            target_life = target.current_life,
            "attack resolved"
        );
        Ok(damage)
    }

    pub(crate) fn apply_damage(&mut self, damage: i32) {
        self.current_life = (self.current_life - damage.max(0)).max(0);
    }

    /// Search the bag for a potion and drink it
    ///
    /// Searching costs the turn even when the bag is empty, so the
    /// took-a-potion flag is set either way. Recovered life is capped at max life.
    pub fn drink_a_potion(
        &mut self,
        roller: &mut dyn RangeRoller,
    ) -> Result<DrinkOutcome, CharacterError> {
        if self.is_dead() {
            return Err(CharacterError::DeadCharacter(self.name.clone()));
        }
        if !self.stats.can_drink_potion() {
            return Err(CharacterError::UnableToDrinkPotion(self.name.clone()));
        }

        self.took_a_potion = true;

        let Some(mut potion) = self.inventory.find_and_remove_potion() else {
            tracing::debug!(character = %self.name, "searched the bag but found no potion");
            return Ok(DrinkOutcome::NothingFound);
        };

        let recovered = potion.drink(roller)?;
        self.current_life = self
            .current_life
            .saturating_add(recovered)
            .min(self.stats.max_life());
        tracing::debug!(
            character = %self.name,
            potion = %potion.id(),
            recovered,
            life = self.current_life,
            "potion drunk"
        );
        Ok(DrinkOutcome::Recovered(recovered))
    }

    /// Clear the took-a-potion flag once the skipped turn has passed
    pub fn reset_took_a_potion(&mut self) {
        self.took_a_potion = false;
    }

    /// Rename during setup
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), CharacterError> {
        self.name = validate_name(name.into())?;
        Ok(())
    }

    /// Replace stats during setup. Life is reset to the new max life.
    pub fn set_stats(&mut self, stats: CharacterStats) {
        self.stats = stats;
        self.current_life = stats.max_life();
    }

    /// Set current life during setup, clamped to `[0, max_life]`
    pub fn set_current_life(&mut self, life: i32) {
        self.current_life = life.clamp(0, self.stats.max_life());
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, attacks for {}-{} damage",
            self.life_status(),
            self.stats.attack_min(),
            self.stats.attack_max()
        )?;
        if self.stats.can_drink_potion() {
            let count = self.inventory.potion_count();
            write!(f, " and has {} potion{}.", count, if count == 1 { "" } else { "s" })
        } else {
            write!(f, " and cannot drink potions.")
        }
    }
}

fn validate_name(name: String) -> Result<String, CharacterError> {
    if name.trim().is_empty() {
        return Err(CharacterError::InvalidName);
    }
    Ok(name)
}
