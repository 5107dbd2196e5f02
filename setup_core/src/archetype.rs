//! Predefined characters and canned setups

use crate::constants::GameConstants;
use crate::manual::ManualSetup;
use crate::roster::CharacterSpec;
use crate::SetupError;
use combat_core::{Character, PotionForge};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Predefined opponents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Plain fighter built from the opponent constants; never drinks
    Standard,
    /// Frail, drinks, carries two small potions
    Goblin,
    /// Hits anywhere from 0 to 25, carries one potion
    Thief,
    /// Huge life pool, never drinks
    Dragon,
}

impl Archetype {
    pub fn all() -> &'static [Archetype] {
        &[
            Archetype::Standard,
            Archetype::Goblin,
            Archetype::Thief,
            Archetype::Dragon,
        ]
    }

    pub fn default_name(&self) -> &'static str {
        match self {
            Archetype::Standard => "Opponent",
            Archetype::Goblin => "Goblin",
            Archetype::Thief => "Thief",
            Archetype::Dragon => "Dragon",
        }
    }

    pub fn spec(&self, name: Option<&str>, constants: &GameConstants) -> CharacterSpec {
        let name = name.unwrap_or(self.default_name());
        let recovery = constants.potion.recovery;
        match self {
            Archetype::Standard => {
                let opponent = &constants.opponent;
                CharacterSpec::new(name, opponent.life, opponent.attack, false)
                    .with_potions(opponent.potions, recovery)
            }
            Archetype::Goblin => CharacterSpec::new(name, 35, [2, 10], true).with_potions(2, [10, 35]),
            Archetype::Thief => CharacterSpec::new(name, 60, [0, 25], true).with_potions(1, recovery),
            Archetype::Dragon => CharacterSpec::new(name, 350, [0, 60], false),
        }
    }

    pub fn build(
        &self,
        name: Option<&str>,
        constants: &GameConstants,
        forge: &mut PotionForge,
    ) -> Result<Character, SetupError> {
        self.spec(name, constants).build(forge)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.default_name())
    }
}

/// Player with the default stats and potions
pub fn default_player(name: &str, constants: &GameConstants) -> CharacterSpec {
    player_without_potions(name, constants)
        .with_potions(constants.player.potions, constants.potion.recovery)
}

/// Player with the default stats and an empty bag
pub fn player_without_potions(name: &str, constants: &GameConstants) -> CharacterSpec {
    let player = &constants.player;
    CharacterSpec::new(name, player.life, player.attack, true)
}

/// Ready-made matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Default player against one standard opponent
    Default,
    /// Default player against two 20-life opponents that drink; only the first carries a potion
    TwoWeakOpponents,
}

impl Preset {
    pub fn setup(&self, constants: &GameConstants) -> Result<ManualSetup, SetupError> {
        let mut setup = ManualSetup::new(constants.clone());
        setup.create_or_modify_player(&default_player("Player", constants))?;

        match self {
            Preset::Default => {
                setup.add_predefined_opponent(Archetype::Standard)?;
            }
            Preset::TwoWeakOpponents => {
                let weak = |name: &str| CharacterSpec::new(name, 20, [0, 8], true);
                setup.add_opponent(&weak("Opponent 1").with_potions(1, constants.potion.recovery))?;
                setup.add_opponent(&weak("Opponent 2"))?;
            }
        }
        Ok(setup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archetype_stats() {
        let constants = GameConstants::default();
        let mut forge = PotionForge::new();

        let standard = Archetype::Standard.build(None, &constants, &mut forge).unwrap();
        assert_eq!(standard.name(), "Opponent");
        assert_eq!(standard.stats().max_life(), 50);
        assert_eq!((standard.stats().attack_min(), standard.stats().attack_max()), (5, 15));
        assert!(!standard.stats().can_drink_potion());
        assert!(standard.inventory().is_empty());

        let goblin = Archetype::Goblin.build(None, &constants, &mut forge).unwrap();
        assert_eq!(goblin.stats().max_life(), 35);
        assert_eq!(goblin.inventory().potion_count(), 2);
        let potion = goblin.inventory().get(0).and_then(|item| item.as_potion()).unwrap();
        assert_eq!((potion.min_recovery(), potion.max_recovery()), (10, 35));

        let thief = Archetype::Thief.build(Some("Sly"), &constants, &mut forge).unwrap();
        assert_eq!(thief.name(), "Sly");
        assert_eq!(thief.inventory().potion_count(), 1);

        let dragon = Archetype::Dragon.build(None, &constants, &mut forge).unwrap();
        assert_eq!(dragon.current_life(), 350);
        assert_eq!(dragon.stats().attack_max(), 60);
        assert!(!dragon.stats().can_drink_potion());
    }

    #[test]
    fn test_standard_follows_constants() {
        let mut constants = GameConstants::default();
        constants.opponent.life = 75;
        constants.opponent.potions = 2;
        let spec = Archetype::Standard.spec(None, &constants);
        assert_eq!(spec.max_life, 75);
        assert_eq!(spec.potions, vec![[15, 50], [15, 50]]);
    }

    #[test]
    fn test_default_preset() {
        let game = Preset::Default
            .setup(&GameConstants::default())
            .unwrap()
            .build_game()
            .unwrap();
        assert_eq!(game.player().stats().max_life(), 50);
        assert_eq!(game.player().inventory().potion_count(), 3);
        assert_eq!(game.opponents().len(), 1);
        assert!(!game.opponents()[0].stats().can_drink_potion());
    }

    #[test]
    fn test_two_weak_opponents_preset() {
        let game = Preset::TwoWeakOpponents
            .setup(&GameConstants::default())
            .unwrap()
            .build_game()
            .unwrap();
        let opponents = game.opponents();
        assert_eq!(opponents.len(), 2);
        for opponent in opponents {
            assert_eq!(opponent.stats().max_life(), 20);
            assert_eq!((opponent.stats().attack_min(), opponent.stats().attack_max()), (0, 8));
            assert!(opponent.stats().can_drink_potion());
        }
        assert_eq!(opponents[0].inventory().potion_count(), 1);
        assert_eq!(opponents[1].inventory().potion_count(), 0);
        assert_eq!(game.player().inventory().potion_count(), 3);
        assert!(game.player().stats().can_drink_potion());
    }
}
